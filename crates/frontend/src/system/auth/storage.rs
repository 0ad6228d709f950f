use web_sys::{window, Storage};

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn get_access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn set_access_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

pub fn has_access_token() -> bool {
    get_access_token().map(|t| !t.is_empty()).unwrap_or(false)
}
