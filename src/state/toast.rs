//! Transient notifications raised by the login flow.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays visible before it is dismissed.
pub const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One notification. `seq` lets the dismiss timer ignore toasts that were
/// replaced before it fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub seq: u64,
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

/// Notification sink injected into the submit flow.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, text: &str);

    fn success(&self, text: &str) {
        self.notify(ToastKind::Success, text);
    }

    fn error(&self, text: &str) {
        self.notify(ToastKind::Error, text);
    }
}

/// Single visible toast slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Toast>,
    next_seq: u64,
}

impl ToastState {
    /// Replace the visible toast and return its sequence number.
    pub fn push(&mut self, kind: ToastKind, text: &str) -> u64 {
        self.next_seq += 1;
        self.current = Some(Toast { seq: self.next_seq, kind, text: text.to_owned() });
        self.next_seq
    }

    /// Dismiss the visible toast if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|t| t.seq == seq) {
            self.current = None;
        }
    }
}
