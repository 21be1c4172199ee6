//! `rstgen compose` command implementation.
//!
//! Replays a JSON script of editor actions through an [`EditorSession`] and
//! writes the resulting document. A script is an array of steps tagged by
//! `action`:
//!
//! ```json
//! [
//!   {"action": "submit", "kind": "title", "fields": {"text": "Guide"}},
//!   {"action": "submit", "kind": "grid_table", "fields": {"rows": 2, "columns": 2}},
//!   {"action": "set_cell", "row": 0, "column": 0, "value": "Name"},
//!   {"action": "submit", "kind": "grid_table_edit", "fields": {"table": [["Name", "Value"], ["a", "1"]]}}
//! ]
//! ```

use std::path::{Path, PathBuf};

use clap::Args;
use rstgen_config::{CliSettings, Config};
use rstgen_directives::DirectiveRequest;
use rstgen_editor::{
    Document, EditorSession, SessionError, TableDraft, TableFlavor, WizardError, WizardLimits,
};
use serde::Deserialize;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the compose command.
#[derive(Args)]
pub(crate) struct ComposeArgs {
    /// JSON script of editor actions.
    script: PathBuf,

    /// Output file (default: export filename from config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Existing document to start from; the caret starts at its end.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover rstgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// One editor action.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum Step {
    /// Select `start..end` (character offsets).
    Select { start: usize, end: usize },
    /// Submit a form.
    Submit(DirectiveRequest),
    /// Start the table wizard without dimensions.
    OpenTable { flavor: TableFlavor },
    CancelTable,
    SetCell {
        row: usize,
        column: usize,
        value: String,
    },
    PushRow,
    PushColumn,
    PopRow,
    PopColumn,
}

impl ComposeArgs {
    /// Execute the compose command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), Some(&CliSettings::default()))?;
        let limits = WizardLimits {
            max_rows: config.editor.max_table_rows,
            max_columns: config.editor.max_table_columns,
        };

        let script = std::fs::read_to_string(&self.script)?;
        let steps: Vec<Step> = serde_json::from_str(&script)?;
        let document = match &self.input {
            Some(path) => Document::from_text(&std::fs::read_to_string(path)?),
            None => Document::new(),
        };

        let mut session = EditorSession::with_limits(limits).with_document(document);
        let count = steps.len();
        replay(&mut session, steps)?;

        if !session.wizard().is_idle() {
            output.warning("Table wizard still open at end of script; unfinished table dropped");
        }

        let path = self
            .output
            .unwrap_or_else(|| PathBuf::from(&config.export.filename));
        let lines = write_document(&path, session.document())?;
        output.success(&format!(
            "Wrote {} ({lines} lines, {count} steps)",
            path.display()
        ));
        Ok(())
    }
}

/// Apply `steps` in order, stopping at the first failure.
fn replay(session: &mut EditorSession, steps: Vec<Step>) -> Result<(), CliError> {
    for (i, step) in steps.into_iter().enumerate() {
        apply(session, step).map_err(|source| CliError::Step {
            index: i + 1,
            source,
        })?;
    }
    Ok(())
}

fn apply(session: &mut EditorSession, step: Step) -> Result<(), SessionError> {
    match step {
        Step::Select { start, end } => session.select(start, end),
        Step::Submit(request) => {
            let outcome = session.submit_request(&request)?;
            tracing::debug!(kind = %request.kind, ?outcome, "Step submitted");
            Ok(())
        }
        Step::OpenTable { flavor } => session.open_table(flavor).map(drop),
        Step::CancelTable => {
            session.cancel_table();
            Ok(())
        }
        Step::SetCell { row, column, value } => Ok(draft(session)?.set_cell(row, column, value)?),
        Step::PushRow => Ok(draft(session)?.push_row()?),
        Step::PushColumn => Ok(draft(session)?.push_column()?),
        Step::PopRow => {
            draft(session)?.pop_row();
            Ok(())
        }
        Step::PopColumn => {
            draft(session)?.pop_column();
            Ok(())
        }
    }
}

fn draft(session: &mut EditorSession) -> Result<&mut TableDraft, SessionError> {
    session
        .table_draft_mut()
        .ok_or(SessionError::Wizard(WizardError::NotCollectingCells))
}

/// Write the document's lines joined by newlines. Returns the line count.
fn write_document(path: &Path, document: &Document) -> Result<usize, CliError> {
    let lines = document.lines();
    std::fs::write(path, lines.join("\n"))?;
    Ok(lines.len())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(script: &str) -> Result<EditorSession, CliError> {
        let steps: Vec<Step> = serde_json::from_str(script)?;
        let mut session = EditorSession::new();
        replay(&mut session, steps)?;
        Ok(session)
    }

    #[test]
    fn test_replay_inserts_in_order() {
        let session = run(r#"[
            {"action": "submit", "kind": "title", "fields": {"text": "Guide"}},
            {"action": "submit", "kind": "content", "fields": {"text": "Read me."}}
        ]"#)
        .unwrap();

        assert_eq!(session.document().text(), "Guide\n=====\nRead me.\n");
    }

    #[test]
    fn test_replay_wraps_selection() {
        let session = run(r#"[
            {"action": "submit", "kind": "content", "fields": {"text": "make it loud"}},
            {"action": "select", "start": 8, "end": 12},
            {"action": "submit", "kind": "bold"}
        ]"#)
        .unwrap();

        assert_eq!(session.document().text(), "make it **loud**\n");
    }

    #[test]
    fn test_replay_table_wizard_with_draft_edits() {
        let session = run(r#"[
            {"action": "submit", "kind": "grid_table", "fields": {"rows": 1, "columns": 1}},
            {"action": "push_row"},
            {"action": "push_column"},
            {"action": "pop_column"},
            {"action": "submit", "kind": "grid_table_edit", "fields": {"table": [["H"], ["v"]]}}
        ]"#)
        .unwrap();

        assert!(session.wizard().is_idle());
        assert_eq!(
            session.document().text(),
            "+---+\n| H |\n+===+\n| v |\n+---+\n"
        );
    }

    #[test]
    fn test_replay_set_cell_without_draft_fails() {
        let err = run(r#"[
            {"action": "submit", "kind": "title", "fields": {"text": "T"}},
            {"action": "set_cell", "row": 0, "column": 0, "value": "x"}
        ]"#)
        .unwrap_err();

        assert!(matches!(err, CliError::Step { index: 2, .. }));
    }

    #[test]
    fn test_replay_stops_at_first_failure() {
        let steps: Vec<Step> = serde_json::from_str(
            r#"[
                {"action": "submit", "kind": "title", "fields": {"text": "A"}},
                {"action": "submit", "kind": "reference", "fields": {"name": "x"}},
                {"action": "submit", "kind": "title", "fields": {"text": "B"}}
            ]"#,
        )
        .unwrap();
        let mut session = EditorSession::new();

        let err = replay(&mut session, steps).unwrap_err();

        assert!(matches!(err, CliError::Step { index: 2, .. }));
        assert_eq!(session.document().text(), "A\n=\n");
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!(matches!(
            run(r#"[{"action": "explode"}]"#),
            Err(CliError::Json(_))
        ));
    }

    #[test]
    fn test_execute_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("rstgen.toml");
        std::fs::write(&config_path, "[export]\nfilename = \"unused.rst\"\n").unwrap();
        let script = dir.path().join("script.json");
        std::fs::write(
            &script,
            r#"[{"action": "submit", "kind": "title", "fields": {"text": "Doc"}}]"#,
        )
        .unwrap();
        let out = dir.path().join("doc.rst");

        ComposeArgs {
            script,
            output: Some(out.clone()),
            input: None,
            config: Some(config_path),
        }
        .execute()
        .unwrap();

        assert_eq!(std::fs::read_to_string(out).unwrap(), "Doc\n===\n");
    }

    #[test]
    fn test_execute_appends_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("rstgen.toml");
        std::fs::write(&config_path, "").unwrap();
        let input = dir.path().join("in.rst");
        std::fs::write(&input, "Existing\n").unwrap();
        let script = dir.path().join("script.json");
        std::fs::write(
            &script,
            r#"[{"action": "submit", "kind": "note", "fields": {"text": "Careful"}}]"#,
        )
        .unwrap();
        let out = dir.path().join("out.rst");

        ComposeArgs {
            script,
            output: Some(out.clone()),
            input: Some(input),
            config: Some(config_path),
        }
        .execute()
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(out).unwrap(),
            "Existing\n.. note::\n\n   Careful\n"
        );
    }
}
