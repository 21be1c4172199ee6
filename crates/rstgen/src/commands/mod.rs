//! CLI command implementations.

pub(crate) mod compose;
pub(crate) mod format;
pub(crate) mod serve;

pub(crate) use compose::ComposeArgs;
pub(crate) use format::FormatArgs;
pub(crate) use serve::ServeArgs;
