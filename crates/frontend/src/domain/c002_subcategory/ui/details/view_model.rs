use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::c002_subcategory::aggregate::SubcategoryDraft;

use super::model::HttpSubcategoryGateway;
use crate::domain::c001_category::{model as category_model, options};
use crate::domain::c002_subcategory::flow::{SubmitFlow, SubmitOutcome};
use crate::shared::alert::AlertService;
use crate::shared::navigation::{Navigator, Page, WindowNavigator};
use crate::system::auth::session::StorageSession;

pub const MSG_CATEGORIES_FAILED: &str = "Failed to load parent categories";

/// Pause between the success notification and the redirect to the list
/// page, so the user sees the confirmation before leaving.
pub const REDIRECT_DELAY_MS: u32 = 1500;

/// State and commands behind the subcategory form. Signals are `Copy`,
/// so the view model can be moved into event closures freely.
#[derive(Clone, Copy)]
pub struct SubcategoryFormViewModel {
    pub draft: RwSignal<SubcategoryDraft>,
    pub category_options: RwSignal<Vec<(String, String)>>,
}

impl SubcategoryFormViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(SubcategoryDraft::default()),
            category_options: RwSignal::new(options::select_options(&[])),
        }
    }

    pub fn load_categories(self, alerts: AlertService) {
        spawn_local(async move {
            match category_model::fetch_categories().await {
                Ok(categories) => {
                    self.category_options.set(options::select_options(&categories));
                }
                Err(e) => {
                    log::error!("failed to load categories: {}", e);
                    alerts.error(MSG_CATEGORIES_FAILED);
                }
            }
        });
    }

    pub fn set_category(self, value: String) {
        self.draft.update(|d| d.parent_category_id = value);
    }

    pub fn set_name(self, value: String) {
        self.draft.update(|d| d.name = value);
    }

    pub fn set_code(self, value: String) {
        self.draft.update(|d| d.code = value);
    }

    pub fn set_description(self, value: String) {
        self.draft.update(|d| d.description = value);
    }

    /// Submit command. The button stays enabled while the request is in
    /// flight; the unique index on the server makes a double click safe.
    pub fn submit(self, alerts: AlertService) {
        let draft = self.draft.get_untracked();
        spawn_local(async move {
            let flow = SubmitFlow::new(
                Box::new(HttpSubcategoryGateway),
                Box::new(StorageSession),
                Box::new(WindowNavigator),
                Box::new(alerts),
            );

            match flow.submit(&draft).await {
                SubmitOutcome::Created(_) => {
                    self.draft.set(SubcategoryDraft::default());
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    WindowNavigator.redirect(Page::SubcategoryList);
                }
                SubmitOutcome::Rejected | SubmitOutcome::NotSignedIn => {}
            }
        });
    }
}

impl Default for SubcategoryFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
