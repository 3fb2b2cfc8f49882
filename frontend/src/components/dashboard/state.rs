//! Page state for the dashboard.
//!
//! All page state is owned by the single `DashboardComponent` instance.
//! Child components only receive copies through their properties.

use common::model::analytics::{AnalyticsSession, CredentialState, Transition};
use common::model::field::FieldRegistry;
use common::model::result::{ResultCache, ResultTable};
use common::validation::ValidationReport;
use yew::NodeRef;

pub struct DashboardComponent {
    /// Columns of the loaded CSV and their chosen types.
    pub registry: FieldRegistry,

    /// The selected CSV file, re-sent with the build request.
    pub csv_file: Option<web_sys::File>,

    /// Stage of the Google Analytics credential panel.
    pub credential_state: CredentialState,

    /// Credential flag and profile choice used by validation and the build request.
    pub session: AnalyticsSession,

    /// Inline message under the credential panel.
    pub credential_error: Option<String>,

    /// A credential file upload is in flight.
    pub uploading_credentials: bool,

    /// While connected, the user asked to replace the credential file.
    pub show_credential_upload: bool,

    /// Outcome of the last Build click.
    pub validation: ValidationReport,

    /// Inline message from the data template or build endpoints.
    pub data_error: Option<String>,

    /// A build request is in flight; the Build button stays disabled.
    pub building: bool,

    /// Rows of the last successful build, kept for export.
    pub results: ResultCache,

    /// Rendered form of `results`.
    pub table: ResultTable,

    pub credential_input_ref: NodeRef,
    pub results_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            registry: FieldRegistry::new(),
            csv_file: None,
            credential_state: CredentialState::default(),
            session: AnalyticsSession::default(),
            credential_error: None,
            uploading_credentials: false,
            show_credential_upload: false,
            validation: ValidationReport::default(),
            data_error: None,
            building: false,
            results: ResultCache::default(),
            table: ResultTable::default(),
            credential_input_ref: NodeRef::default(),
            results_ref: NodeRef::default(),
            loaded: false,
        }
    }

    /// Runs a credential state transition over the owned state and session.
    pub fn transition<F>(&mut self, step: F)
    where
        F: FnOnce(CredentialState, AnalyticsSession) -> Transition,
    {
        let state = std::mem::take(&mut self.credential_state);
        let session = std::mem::take(&mut self.session);
        let (state, session) = step(state, session);
        self.credential_state = state;
        self.session = session;
    }

    pub fn can_build(&self) -> bool {
        self.csv_file.is_some() && !self.building
    }

    /// Starts over with the columns of a newly selected CSV. Errors shown for
    /// the previous file are cleared.
    pub fn load_header(&mut self, names: Vec<String>) {
        self.registry.initialize(names);
        self.validation = ValidationReport::default();
        self.data_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_header_clears_errors_of_previous_file() {
        let mut component = DashboardComponent::new();
        component.registry.initialize(["age"]);
        component.validation = ValidationReport {
            errors: vec!["Data field age has not been selected.".to_string()],
        };
        component.data_error = Some("Model could not be built.".to_string());

        component.load_header(vec!["id".to_string(), "churn".to_string()]);

        assert!(component.validation.passed());
        assert_eq!(component.data_error, None);
        assert_eq!(component.registry.names(), vec!["id", "churn"]);
    }
}
