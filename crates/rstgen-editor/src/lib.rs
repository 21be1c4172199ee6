//! Document editing for rstgen.
//!
//! Holds the document buffer and the current selection, splices formatted
//! fragments in at the selection, and drives the two-step table wizard.
//!
//! The building blocks are usable on their own:
//!
//! - [`insert`]: pure splice of a fragment into a buffer, returning the new
//!   buffer and caret.
//! - [`Document`]: buffer plus selection, with input normalization.
//! - [`TableWizard`]: idle → collecting dimensions → collecting cells.
//! - [`EditorSession`]: all of the above behind one `submit` call.
//!
//! Focus handling and selection display belong to the host UI: after an
//! insertion it should move its own caret to the offset returned here.

mod document;
mod insert;
mod session;
mod wizard;

pub use document::Document;
pub use insert::{Insertion, Selection, SelectionError, insert, selected_text, splice};
pub use session::{EditorSession, SessionError, SubmitOutcome};
pub use wizard::{TableDraft, TableFlavor, TableWizard, WizardError, WizardLimits};

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(EditorSession: Send, Sync, Clone);
    static_assertions::assert_impl_all!(SessionError: Send, Sync, std::error::Error);
    static_assertions::assert_impl_all!(Document: Send, Sync);
}
