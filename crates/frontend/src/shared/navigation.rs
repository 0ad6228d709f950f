/// Pages this flow can redirect to. Navigation is a full-page load, not a
/// client-side route change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    SignIn,
    SubcategoryList,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::SignIn => "/signin",
            Page::SubcategoryList => "/subcategories",
        }
    }
}

/// Redirect collaborator, kept behind a trait so flows can be exercised
/// with a recording double.
pub trait Navigator {
    fn redirect(&self, page: Page);
}

/// Production navigator: full-page redirect via `window.location`
#[derive(Clone, Copy, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn redirect(&self, page: Page) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(page.path());
        }
    }
}
