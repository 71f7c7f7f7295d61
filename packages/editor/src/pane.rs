use std::sync::Mutex;
use tandem_diagnostics::Diagnostic;

/// Collaborator contract the workbench core requires from an editing pane.
///
/// The embedding surface additionally reports keystrokes to the workbench
/// (`Workbench::notify_edit`); that direction of the contract lives on the
/// workbench side.
pub trait PaneSurface: Send + Sync {
    /// Current buffer content.
    fn content(&self) -> String;

    /// Replace the buffer wholesale.
    fn set_content(&self, text: &str);

    /// Replace the pane's diagnostic set. The previous set is discarded,
    /// never merged.
    fn set_diagnostics(&self, diagnostics: Vec<Diagnostic>);
}

/// In-memory pane for tests, the CLI and headless embeddings.
#[derive(Default)]
pub struct MemoryPane {
    content: Mutex<String>,
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl MemoryPane {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Mutex::new(content.into()),
            diagnostics: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the last diagnostic set applied to this pane.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().unwrap().clone()
    }
}

impl PaneSurface for MemoryPane {
    fn content(&self) -> String {
        self.content.lock().unwrap().clone()
    }

    fn set_content(&self, text: &str) {
        *self.content.lock().unwrap() = text.to_string();
    }

    fn set_diagnostics(&self, diagnostics: Vec<Diagnostic>) {
        *self.diagnostics.lock().unwrap() = diagnostics;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_diagnostics::Range;

    #[test]
    fn test_content_round_trip() {
        let pane = MemoryPane::new("<div></div>");
        assert_eq!(pane.content(), "<div></div>");

        pane.set_content("var n = Div()");
        assert_eq!(pane.content(), "var n = Div()");
    }

    #[test]
    fn test_diagnostics_are_replaced_not_merged() {
        let pane = MemoryPane::default();

        pane.set_diagnostics(vec![
            Diagnostic::error("a", Range::on_line(1, 1, 1)),
            Diagnostic::error("b", Range::on_line(2, 1, 1)),
        ]);
        assert_eq!(pane.diagnostics().len(), 2);

        pane.set_diagnostics(vec![Diagnostic::error("c", Range::on_line(3, 1, 1))]);
        let current = pane.diagnostics();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].message, "c");
    }
}
