use alloc::string::String;

/// Accumulates recently typed characters into a search prefix.
///
/// A single deadline stands in for the idle-reset timer: each keystroke replaces it, so at most
/// one "timer" is ever outstanding. The owner drives expiry through `tick`.
#[derive(Clone, Debug, Default)]
pub(crate) struct Typeahead {
    buffer: String,
    deadline_ms: Option<u64>,
}

impl Typeahead {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Appends a keystroke at `now_ms`, expiring a stale buffer first.
    pub(crate) fn push(&mut self, ch: char, now_ms: u64, timeout_ms: u64) {
        self.tick(now_ms);
        self.buffer.extend(ch.to_lowercase());
        self.deadline_ms = Some(now_ms.saturating_add(timeout_ms));
    }

    /// Clears the buffer once the idle deadline has passed.
    pub(crate) fn tick(&mut self, now_ms: u64) {
        if let Some(deadline) = self.deadline_ms {
            if now_ms >= deadline {
                self.clear();
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.buffer.clear();
        self.deadline_ms = None;
    }
}

/// Case-insensitive prefix test, Unicode-lowercasing both sides.
pub(crate) fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text = text.chars().flat_map(|c| c.to_lowercase());
    let mut prefix = prefix.chars().flat_map(|c| c.to_lowercase());
    loop {
        match (prefix.next(), text.next()) {
            (None, _) => return true,
            (Some(_), None) => return false,
            (Some(p), Some(t)) if p != t => return false,
            _ => {}
        }
    }
}
