//! HTTP request handlers.

pub(crate) mod api;
pub(crate) mod content;

use serde::Serialize;

/// Response carrying a single markup fragment.
#[derive(Debug, Serialize)]
pub(crate) struct RstResponse {
    pub(crate) rst: String,
}

impl From<String> for RstResponse {
    fn from(rst: String) -> Self {
        Self { rst }
    }
}
