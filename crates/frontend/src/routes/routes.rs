use crate::domain::c002_subcategory::ui::details::SubcategoryForm;
use crate::domain::c002_subcategory::ui::list::SubcategoryList;
use crate::system::pages::signin::SignInPage;
use leptos::prelude::*;

/// Pages are switched on the path; navigation between them is a full-page
/// redirect, so no client-side router is involved.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let path = current_path();

    view! {
        {match path.as_str() {
            "/signin" => view! { <SignInPage /> }.into_any(),
            "/subcategories" => view! { <SubcategoryList /> }.into_any(),
            _ => view! { <SubcategoryForm /> }.into_any(),
        }}
    }
}
