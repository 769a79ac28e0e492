use crate::focusable::{first_focusable_descendant, last_focusable_descendant};
use crate::{FocusTree, Key, KeyEvent};

/// Confines tab-order cycling to a modal subtree while it is open.
///
/// Purely reactive to open/close transitions via [`FocusTrap::set_open`]. The first/last
/// boundary targets are captured once at activation and not live-updated afterwards; a reopened
/// trap recaptures them.
///
/// Initial focus is deferred, not synchronous: activation only schedules it, and the first
/// [`FocusTrap::tick`] afterwards performs it. This tolerates layout that has not settled yet at
/// the moment the modal opens, and deactivating before the tick cancels the transfer.
pub struct FocusTrap<T: FocusTree> {
    container: Option<T::Id>,
    first: Option<T::Id>,
    last: Option<T::Id>,
    pending_initial: bool,
}

impl<T: FocusTree> FocusTrap<T> {
    pub fn new() -> Self {
        Self {
            container: None,
            first: None,
            last: None,
            pending_initial: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.container.is_some()
    }

    /// Applies an open/close transition. Opening while already open is a no-op.
    pub fn set_open(&mut self, tree: &T, is_open: bool, container: T::Id) {
        if is_open {
            if self.container.is_some() {
                return;
            }
            self.container = Some(container);
            self.first = first_focusable_descendant(tree, container);
            self.last = last_focusable_descendant(tree, container);
            self.pending_initial = true;
            ndebug!(
                has_first = self.first.is_some(),
                has_last = self.last.is_some(),
                "FocusTrap::set_open"
            );
        } else {
            self.deactivate();
        }
    }

    /// Drops the boundaries and any pending initial focus. Idempotent.
    pub fn deactivate(&mut self) {
        self.container = None;
        self.first = None;
        self.last = None;
        self.pending_initial = false;
    }

    /// Performs the one-shot deferred initial focus, if one is pending.
    ///
    /// Returns whether input focus was transferred.
    pub fn tick(&mut self, tree: &mut T) -> bool {
        if !self.pending_initial {
            return false;
        }
        self.pending_initial = false;
        match self.first {
            Some(first) => {
                tree.focus(first);
                true
            }
            None => false,
        }
    }

    /// Intercepts Tab at the trap boundaries and Escape propagation.
    ///
    /// Tab wraps only when focus sits on a boundary target; anything else falls through to the
    /// default tab order. Escape is propagation-stopped but otherwise untouched; closing the
    /// modal is the embedder's job.
    ///
    /// Returns whether the event was consumed.
    pub fn handle_key(&mut self, tree: &mut T, event: &mut KeyEvent) -> bool {
        if !self.is_active() {
            return false;
        }
        match event.key {
            Key::Tab => {
                let focused = tree.focused();
                if event.shift {
                    if self.first.is_some() && focused == self.first {
                        if let Some(last) = self.last {
                            tree.focus(last);
                        }
                        event.prevent_default();
                        return true;
                    }
                } else if self.last.is_some() && focused == self.last {
                    if let Some(first) = self.first {
                        tree.focus(first);
                    }
                    event.prevent_default();
                    return true;
                }
                false
            }
            Key::Escape => {
                event.stop_propagation();
                true
            }
            _ => false,
        }
    }
}

impl<T: FocusTree> Default for FocusTrap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FocusTree> core::fmt::Debug for FocusTrap<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FocusTrap")
            .field("active", &self.is_active())
            .field("has_first", &self.first.is_some())
            .field("has_last", &self.last.is_some())
            .field("pending_initial", &self.pending_initial)
            .finish()
    }
}
