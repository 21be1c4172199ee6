//! Application state.

/// Application state shared across all handlers.
#[derive(Debug)]
pub(crate) struct AppState {
    /// File name offered for the `/generate-rst` download.
    pub(crate) export_filename: String,
}
