//! Transient message area
//!
//! One notice is visible at a time. Showing a notice hands back a
//! [`NoticeTicket`]; the hide scheduled for that ticket only takes effect
//! while it is still the newest one, so a stale timer can never hide a newer
//! message.

/// Severity of a notice, doubles as the CSS class of the message area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Message text plus severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Error }
    }
}

/// Identifies the notice a scheduled hide belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeTicket(u64);

/// The message area's state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    visible: bool,
    generation: u64,
}

impl NoticeSlot {
    /// Replace the current notice and make it visible
    pub fn show(&mut self, notice: Notice) -> NoticeTicket {
        self.generation += 1;
        self.current = Some(notice);
        self.visible = true;
        NoticeTicket(self.generation)
    }

    /// Hide the notice if `ticket` still owns the slot.
    ///
    /// Returns whether anything was hidden.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Last notice shown. Text stays around after hiding, as the DOM does.
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The notice only while it is on screen
    pub fn visible_notice(&self) -> Option<&Notice> {
        self.current.as_ref().filter(|_| self.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let slot = NoticeSlot::default();
        assert!(!slot.is_visible());
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_show_then_expire() {
        let mut slot = NoticeSlot::default();
        let ticket = slot.show(Notice::success("Signed up"));

        assert_eq!(slot.visible_notice(), Some(&Notice::success("Signed up")));
        assert!(slot.expire(ticket));
        assert!(!slot.is_visible());
        assert_eq!(slot.current().map(|n| n.text.as_str()), Some("Signed up"));

        // Second expiry is a no-op
        assert!(!slot.expire(ticket));
    }

    #[test]
    fn test_stale_ticket_does_not_hide_newer_notice() {
        let mut slot = NoticeSlot::default();
        let first = slot.show(Notice::success("first"));
        let second = slot.show(Notice::error("second"));

        assert!(!slot.expire(first));
        assert_eq!(slot.visible_notice(), Some(&Notice::error("second")));

        assert!(slot.expire(second));
        assert!(slot.visible_notice().is_none());
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(NoticeKind::Success.css_class(), "success");
        assert_eq!(NoticeKind::Error.css_class(), "error");
    }
}
