use async_trait::async_trait;
use contracts::domain::c002_subcategory::aggregate::{
    Subcategory, SubcategoryDraft, SubcategoryId,
};

use crate::shared::alert::AlertService;
use crate::shared::navigation::{Navigator, Page};
use crate::system::auth::session::SessionProvider;

pub const MSG_DUPLICATE_CODE: &str = "Subcategory code already exists";
pub const MSG_CREATED: &str = "Subcategory added successfully";
pub const MSG_CREATE_FAILED: &str = "Failed to add subcategory";

/// Remote persistence for subcategories.
#[async_trait(?Send)]
pub trait SubcategoryGateway {
    /// Exact-match lookup by code; `None` when the code is free.
    async fn find_by_code(&self, code: &str) -> Result<Option<Subcategory>, String>;
    async fn create(&self, draft: &SubcategoryDraft) -> Result<SubcategoryId, String>;
}

/// User-facing notifications raised by the flow.
pub trait Notifier {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
}

impl Notifier for AlertService {
    fn success(&self, text: &str) {
        AlertService::success(self, text);
    }

    fn error(&self, text: &str) {
        AlertService::error(self, text);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record persisted; caller should clear the form and schedule the
    /// redirect to the list page.
    Created(SubcategoryId),
    /// Validation or uniqueness failure; the user was notified and the
    /// form keeps its values.
    Rejected,
    /// No active session; the user was redirected to sign-in without any
    /// notification.
    NotSignedIn,
}

/// Create-subcategory flow over injected collaborators. The UI layer owns
/// signals and rendering; everything decidable without a DOM lives here.
pub struct SubmitFlow {
    gateway: Box<dyn SubcategoryGateway>,
    session: Box<dyn SessionProvider>,
    navigator: Box<dyn Navigator>,
    notifier: Box<dyn Notifier>,
}

impl SubmitFlow {
    pub fn new(
        gateway: Box<dyn SubcategoryGateway>,
        session: Box<dyn SessionProvider>,
        navigator: Box<dyn Navigator>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            gateway,
            session,
            navigator,
            notifier,
        }
    }

    pub async fn submit(&self, draft: &SubcategoryDraft) -> SubmitOutcome {
        if !self.session.is_signed_in() {
            self.navigator.redirect(Page::SignIn);
            return SubmitOutcome::NotSignedIn;
        }

        let draft = draft.trimmed();
        if let Err(e) = draft.validate() {
            self.notifier.error(e.message());
            return SubmitOutcome::Rejected;
        }

        // Read-before-write probe keeps the duplicate message immediate;
        // the unique index on the server closes the remaining race.
        match self.gateway.find_by_code(&draft.code).await {
            Ok(Some(_)) => {
                self.notifier.error(MSG_DUPLICATE_CODE);
                return SubmitOutcome::Rejected;
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("code lookup failed: {}", e);
                self.notifier.error(MSG_CREATE_FAILED);
                return SubmitOutcome::Rejected;
            }
        }

        match self.gateway.create(&draft).await {
            Ok(id) => {
                self.notifier.success(MSG_CREATED);
                SubmitOutcome::Created(id)
            }
            Err(e) => {
                log::error!("create failed: {}", e);
                // The server answers the lost race with the same duplicate
                // message, so surface it instead of the generic failure.
                if e.contains(MSG_DUPLICATE_CODE) {
                    self.notifier.error(MSG_DUPLICATE_CODE);
                } else {
                    self.notifier.error(MSG_CREATE_FAILED);
                }
                SubmitOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        lookups: Vec<String>,
        created: Vec<SubcategoryDraft>,
        notifications: Vec<(bool, String)>,
        redirects: Vec<Page>,
    }

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Recorded>>);

    struct FakeGateway {
        shared: Shared,
        code_taken: bool,
        fail_lookup: bool,
        fail_create: Option<String>,
    }

    #[async_trait(?Send)]
    impl SubcategoryGateway for FakeGateway {
        async fn find_by_code(&self, code: &str) -> Result<Option<Subcategory>, String> {
            self.shared.0.borrow_mut().lookups.push(code.to_string());
            if self.fail_lookup {
                return Err("network down".to_string());
            }
            if self.code_taken {
                Ok(Some(existing(code)))
            } else {
                Ok(None)
            }
        }

        async fn create(&self, draft: &SubcategoryDraft) -> Result<SubcategoryId, String> {
            self.shared.0.borrow_mut().created.push(draft.clone());
            match &self.fail_create {
                Some(msg) => Err(msg.clone()),
                None => Ok(SubcategoryId::new_v4()),
            }
        }
    }

    struct FakeSession {
        signed_in: bool,
    }

    impl SessionProvider for FakeSession {
        fn is_signed_in(&self) -> bool {
            self.signed_in
        }

        fn access_token(&self) -> Option<String> {
            self.signed_in.then(|| "token".to_string())
        }
    }

    struct FakeNavigator(Shared);

    impl Navigator for FakeNavigator {
        fn redirect(&self, page: Page) {
            self.0 .0.borrow_mut().redirects.push(page);
        }
    }

    struct FakeNotifier(Shared);

    impl Notifier for FakeNotifier {
        fn success(&self, text: &str) {
            self.0 .0.borrow_mut().notifications.push((true, text.to_string()));
        }

        fn error(&self, text: &str) {
            self.0 .0.borrow_mut().notifications.push((false, text.to_string()));
        }
    }

    fn existing(code: &str) -> Subcategory {
        Subcategory {
            id: SubcategoryId::new_v4(),
            parent_category_id: "cat1".to_string(),
            name: "Existing".to_string(),
            code: code.to_string(),
            description: None,
            created_by: "someone".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    fn draft() -> SubcategoryDraft {
        SubcategoryDraft {
            parent_category_id: "cat1".to_string(),
            name: " Shoes ".to_string(),
            code: " SH01 ".to_string(),
            description: "  ".to_string(),
        }
    }

    struct Setup {
        signed_in: bool,
        code_taken: bool,
        fail_lookup: bool,
        fail_create: Option<String>,
    }

    impl Default for Setup {
        fn default() -> Self {
            Self {
                signed_in: true,
                code_taken: false,
                fail_lookup: false,
                fail_create: None,
            }
        }
    }

    fn flow(setup: Setup) -> (SubmitFlow, Shared) {
        let shared = Shared::default();
        let flow = SubmitFlow::new(
            Box::new(FakeGateway {
                shared: shared.clone(),
                code_taken: setup.code_taken,
                fail_lookup: setup.fail_lookup,
                fail_create: setup.fail_create,
            }),
            Box::new(FakeSession {
                signed_in: setup.signed_in,
            }),
            Box::new(FakeNavigator(shared.clone())),
            Box::new(FakeNotifier(shared.clone())),
        );
        (flow, shared)
    }

    #[test]
    fn happy_path_trims_and_creates() {
        let (flow, shared) = flow(Setup::default());
        let outcome = block_on(flow.submit(&draft()));

        assert!(matches!(outcome, SubmitOutcome::Created(_)));
        let rec = shared.0.borrow();
        assert_eq!(rec.lookups, vec!["SH01".to_string()]);
        assert_eq!(rec.created.len(), 1);
        assert_eq!(rec.created[0].name, "Shoes");
        assert_eq!(rec.created[0].code, "SH01");
        assert_eq!(
            rec.notifications,
            vec![(true, MSG_CREATED.to_string())]
        );
        assert!(rec.redirects.is_empty());
    }

    #[test]
    fn signed_out_user_is_redirected_silently() {
        let (flow, shared) = flow(Setup {
            signed_in: false,
            ..Setup::default()
        });
        let outcome = block_on(flow.submit(&draft()));

        assert_eq!(outcome, SubmitOutcome::NotSignedIn);
        let rec = shared.0.borrow();
        assert_eq!(rec.redirects, vec![Page::SignIn]);
        assert!(rec.notifications.is_empty());
        assert!(rec.lookups.is_empty());
        assert!(rec.created.is_empty());
    }

    #[test]
    fn validation_stops_before_any_remote_call() {
        let (flow, shared) = flow(Setup::default());
        let mut d = draft();
        d.parent_category_id = String::new();
        let outcome = block_on(flow.submit(&d));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        let rec = shared.0.borrow();
        assert_eq!(
            rec.notifications,
            vec![(false, "Please select a parent category".to_string())]
        );
        assert!(rec.lookups.is_empty());
        assert!(rec.created.is_empty());
    }

    #[test]
    fn taken_code_is_rejected_without_create() {
        let (flow, shared) = flow(Setup {
            code_taken: true,
            ..Setup::default()
        });
        let outcome = block_on(flow.submit(&draft()));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        let rec = shared.0.borrow();
        assert_eq!(
            rec.notifications,
            vec![(false, MSG_DUPLICATE_CODE.to_string())]
        );
        assert!(rec.created.is_empty());
    }

    #[test]
    fn lookup_failure_reports_generic_error() {
        let (flow, shared) = flow(Setup {
            fail_lookup: true,
            ..Setup::default()
        });
        let outcome = block_on(flow.submit(&draft()));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        let rec = shared.0.borrow();
        assert_eq!(
            rec.notifications,
            vec![(false, MSG_CREATE_FAILED.to_string())]
        );
        assert!(rec.created.is_empty());
    }

    #[test]
    fn create_failure_reports_generic_error() {
        let (flow, shared) = flow(Setup {
            fail_create: Some("boom".to_string()),
            ..Setup::default()
        });
        let outcome = block_on(flow.submit(&draft()));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        let rec = shared.0.borrow();
        assert_eq!(
            rec.notifications,
            vec![(false, MSG_CREATE_FAILED.to_string())]
        );
    }

    #[test]
    fn lost_race_surfaces_duplicate_message() {
        let (flow, shared) = flow(Setup {
            fail_create: Some(MSG_DUPLICATE_CODE.to_string()),
            ..Setup::default()
        });
        let outcome = block_on(flow.submit(&draft()));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        let rec = shared.0.borrow();
        assert_eq!(
            rec.notifications,
            vec![(false, MSG_DUPLICATE_CODE.to_string())]
        );
    }
}
