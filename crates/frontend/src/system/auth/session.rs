use super::storage;

/// Answers whether the current browser session is signed in.
///
/// The admin panel does not manage identities itself; it only checks
/// that an access token is present before allowing writes. The token
/// itself is validated server-side on every request.
pub trait SessionProvider {
    fn is_signed_in(&self) -> bool;
    fn access_token(&self) -> Option<String>;
}

/// Session backed by the browser's localStorage.
#[derive(Clone, Copy, Default)]
pub struct StorageSession;

impl SessionProvider for StorageSession {
    fn is_signed_in(&self) -> bool {
        storage::has_access_token()
    }

    fn access_token(&self) -> Option<String> {
        storage::get_access_token()
    }
}
