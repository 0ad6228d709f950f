use leptos::prelude::*;

/// Severity of a user-facing alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn title(&self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert--success",
            Severity::Error => "alert--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: Severity,
    pub text: String,
}

/// Context-provided notification service. One alert at a time; showing a
/// new one replaces the current. Dismissal is explicit (the OK button).
#[derive(Clone, Copy)]
pub struct AlertService {
    current: RwSignal<Option<Alert>>,
}

impl AlertService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn show(&self, severity: Severity, text: impl Into<String>) {
        self.current.set(Some(Alert {
            severity,
            text: text.into(),
        }));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(Severity::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(Severity::Error, text);
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> ReadSignal<Option<Alert>> {
        self.current.read_only()
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the alert service
pub fn use_alerts() -> AlertService {
    use_context::<AlertService>().expect("AlertService not found in context")
}

/// Modal host rendering the current alert, if any
#[component]
pub fn AlertHost() -> impl IntoView {
    let alerts = use_alerts();

    view! {
        {move || alerts.current().get().map(|alert| {
            view! {
                <div class="modal-overlay">
                    <div class=format!("modal alert {}", alert.severity.css_class())>
                        <div class="modal-header">
                            <h2 class="modal-title">{alert.severity.title()}</h2>
                        </div>
                        <div class="modal-body">
                            <p>{alert.text.clone()}</p>
                        </div>
                        <div class="modal-footer">
                            <button
                                class="button button--primary"
                                on:click=move |_| alerts.dismiss()
                            >
                                {"OK"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
