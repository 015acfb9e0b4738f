use crate::config::Config;
use crate::data::model::Dataset;
use crate::view::Controls;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Which page the operator is on. Selected by explicit navigation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    ViewDashboard,
    UploadData,
}

/// The full per-session state, independent of rendering.
///
/// Exactly one dataset at a time: replaced wholesale on each successful
/// upload, never merged. Passed explicitly to every UI function.
pub struct AppState {
    /// Current page.
    pub page: Page,

    /// Loaded dataset (None until an upload succeeds).
    pub dataset: Option<Dataset>,

    /// Originating file name of the current dataset.
    pub file_name: Option<String>,

    /// Upload gate. Once true it stays true for the session.
    pub authenticated: bool,

    /// Password entry buffer for the upload gate.
    pub password_input: String,

    /// EPKM cutoff below which records are flagged.
    pub threshold: f64,

    /// Live search queries (route code/name, branch).
    pub search_route: String,
    pub search_branch: String,

    /// Status line shown in the UI: (text, is_error).
    pub status_message: Option<(String, bool)>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            page: Page::ViewDashboard,
            dataset: None,
            file_name: None,
            authenticated: false,
            password_input: String::new(),
            threshold: config.default_threshold,
            search_route: String::new(),
            search_branch: String::new(),
            status_message: None,
        }
    }

    /// Ingest a validated dataset, replacing any previous one.
    pub fn set_dataset(&mut self, dataset: Dataset, file_name: String) {
        self.dataset = Some(dataset);
        self.file_name = Some(file_name);
        self.status_message = None;
    }

    /// Try to open the upload gate. A wrong password leaves the gate
    /// closed and mutates nothing else; a correct one opens it for the
    /// rest of the session.
    pub fn authenticate(&mut self, config: &Config, password: &str) -> bool {
        if self.authenticated {
            return true;
        }
        if config.verify_password(password).is_ok() {
            self.authenticated = true;
        }
        self.authenticated
    }

    /// Snapshot of the operator controls feeding the view model.
    pub fn controls(&self) -> Controls {
        Controls {
            threshold: self.threshold,
            search_route: self.search_route.clone(),
            search_branch: self.search_branch.clone(),
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status_message = Some((text.into(), is_error));
    }
}
