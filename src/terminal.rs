//! Terminal host
//!
//! Runs the panel controller from a shell: state lives in a `RefCell`,
//! confirmations are read from an input stream, and the panel is printed as
//! plain text. A command exits before any notice would hide, so hides are
//! only logged.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::io::BufRead;
use std::time::Duration;

use crate::notice::{NoticeKind, NoticeTicket};
use crate::panel::{ListView, PanelHost, PanelState, PLACEHOLDER_OPTION};

/// [`PanelHost`] for the command line
pub struct TerminalHost {
    state: RefCell<PanelState>,
    input: RefCell<Box<dyn BufRead>>,
    assume_yes: bool,
}

impl TerminalHost {
    pub fn new(input: Box<dyn BufRead>, assume_yes: bool) -> Self {
        Self {
            state: RefCell::new(PanelState::default()),
            input: RefCell::new(input),
            assume_yes,
        }
    }

    /// Host reading confirmations from stdin
    pub fn stdin(assume_yes: bool) -> Self {
        Self::new(Box::new(std::io::BufReader::new(std::io::stdin())), assume_yes)
    }

    pub fn snapshot(&self) -> PanelState {
        self.state.borrow().clone()
    }
}

impl PanelHost for TerminalHost {
    fn update_panel(&self, f: impl FnOnce(&mut PanelState)) {
        f(&mut self.state.borrow_mut());
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{} [y/N] ", prompt);
        let mut answer = String::new();
        if let Err(e) = self.input.borrow_mut().read_line(&mut answer) {
            tracing::warn!(error = %e, "Failed to read confirmation");
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn schedule_hide(&self, ticket: NoticeTicket, after: Duration) {
        tracing::debug!(?ticket, after_ms = after.as_millis() as u64, "Notice hide skipped");
    }
}

/// Plain-text rendering of the activity list area
pub fn render_list(state: &PanelState) -> String {
    let mut out = String::new();

    match &state.list {
        ListView::Loading => out.push_str("Loading activities...\n"),
        ListView::Failed(text) => {
            let _ = writeln!(out, "{}", text);
        }
        ListView::Ready(cards) => {
            for card in cards {
                let _ = writeln!(out, "{}", card.name);
                let _ = writeln!(out, "  {}", card.description);
                let _ = writeln!(out, "  Schedule: {}", card.schedule);
                let _ = writeln!(out, "  Availability: {}", card.availability_label());
                let _ = writeln!(out, "  {}", card.roster_heading());
                if card.participants.is_empty() {
                    out.push_str("    No participants yet\n");
                } else {
                    for row in &card.participants {
                        let _ = writeln!(out, "    - {}", row.email);
                    }
                }
                out.push('\n');
            }
        }
    }

    out
}

/// Plain-text rendering of the select control
pub fn render_options(state: &PanelState) -> String {
    let mut out = format!("  {}\n", PLACEHOLDER_OPTION);
    for name in &state.options {
        let _ = writeln!(out, "  {}", name);
    }
    out
}

/// The visible notice with a severity prefix
pub fn render_notice(state: &PanelState) -> Option<String> {
    state.notice.visible_notice().map(|notice| match notice.kind {
        NoticeKind::Success => format!("✓ {}", notice.text),
        NoticeKind::Error => format!("✕ {}", notice.text),
    })
}
