use alloc::string::String;
use alloc::vec::Vec;

use crate::focusable::{first_focusable_descendant, is_focusable};
use crate::typeahead::{Typeahead, starts_with_ignore_case};
use crate::{FocusTree, Key, KeyEvent, NavOptions, collect_matches};

/// Maps key events over an ordered registry of focusable targets to cursor movement, selection,
/// and cancellation.
///
/// The navigator owns the focus registry and the focus cursor; nothing else may mutate the
/// cursor except through [`Navigator::set_current_index`]. The registry is a snapshot: rebuild
/// it whenever the underlying item collection, container, or selector changes.
///
/// The cursor is deliberately NOT revalidated on rebuild: a registry shrink can leave it past
/// the new length until the next navigation key, and every use is defensive against that.
pub struct Navigator<T: FocusTree> {
    options: NavOptions<T::Id>,
    registry: Vec<T::Id>,
    cursor: Option<usize>,
    typeahead: Typeahead,
    scratch: String,
}

impl<T: FocusTree> Navigator<T> {
    pub fn new(options: NavOptions<T::Id>) -> Self {
        Self {
            options,
            registry: Vec::new(),
            cursor: None,
            typeahead: Typeahead::new(),
            scratch: String::new(),
        }
    }

    pub fn options(&self) -> &NavOptions<T::Id> {
        &self.options
    }

    /// Replaces the options. Rebuild the registry afterwards if the selector changed.
    pub fn set_options(&mut self, options: NavOptions<T::Id>) {
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut NavOptions<T::Id>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn registry(&self) -> &[T::Id] {
        &self.registry
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    /// Writes the cursor without directing input focus anywhere.
    pub fn set_current_index(&mut self, index: Option<usize>) {
        self.cursor = index;
    }

    pub fn typeahead_buffer(&self) -> &str {
        self.typeahead.buffer()
    }

    /// Rebuilds the registry from scratch: a full re-query of `container`'s descendants against
    /// the item selector.
    pub fn rebuild_registry(&mut self, tree: &T, container: T::Id) {
        collect_matches(tree, container, &self.options.item_selector, &mut self.registry);
        ndebug!(len = self.registry.len(), "rebuild_registry");
    }

    /// Rebuilds the registry and, when `focus_on_mount` is set, focuses the first target.
    pub fn mount(&mut self, tree: &mut T, container: T::Id) {
        self.rebuild_registry(tree, container);
        if self.options.focus_on_mount && !self.options.disabled && !self.registry.is_empty() {
            self.focus_index(tree, 0);
        }
    }

    /// Drops pending typeahead state. Call on teardown so no stale buffer survives a remount.
    pub fn unmount(&mut self) {
        self.typeahead.clear();
    }

    /// Expires the typeahead buffer once its idle interval has passed.
    pub fn tick(&mut self, now_ms: u64) {
        self.typeahead.tick(now_ms);
    }

    /// Moves focus to the registry target at `index`.
    ///
    /// Out-of-range indexes are skipped. Otherwise the cursor is set and input focus goes to the
    /// target when it is itself focusable, else to its first focusable descendant. With neither,
    /// the cursor still updates but no focus call happens.
    ///
    /// Returns whether input focus was directed somewhere.
    pub fn focus_index(&mut self, tree: &mut T, index: usize) -> bool {
        let Some(&target) = self.registry.get(index) else {
            ntrace!(index, "focus_index: out of range");
            return false;
        };
        self.cursor = Some(index);

        let node = if is_focusable(tree, target) {
            Some(target)
        } else {
            first_focusable_descendant(tree, target)
        };
        match node {
            Some(node) => {
                tree.focus(node);
                true
            }
            None => {
                ntrace!(index, "focus_index: no focusable node in target");
                false
            }
        }
    }

    /// Feeds one key event through the state machine.
    ///
    /// Returns whether the event was consumed. Every consumed transition except typeahead also
    /// calls `event.prevent_default()`. No-op when `disabled` or the registry is empty.
    pub fn handle_key(&mut self, tree: &mut T, event: &mut KeyEvent, now_ms: u64) -> bool {
        if self.options.disabled || self.registry.is_empty() {
            return false;
        }
        let len = self.registry.len();

        match event.key {
            Key::ArrowDown | Key::ArrowRight => {
                let next = match self.cursor {
                    None => 0,
                    Some(c) if self.options.wrap => (c + 1) % len,
                    Some(c) => (c + 1).min(len - 1),
                };
                self.focus_index(tree, next);
                event.prevent_default();
                true
            }
            Key::ArrowUp | Key::ArrowLeft => {
                let prev = match self.cursor {
                    None | Some(0) => {
                        if self.options.wrap {
                            len - 1
                        } else {
                            0
                        }
                    }
                    // A stale cursor past the end clamps back into range.
                    Some(c) => (c - 1).min(len - 1),
                };
                self.focus_index(tree, prev);
                event.prevent_default();
                true
            }
            Key::Home => {
                self.focus_index(tree, 0);
                event.prevent_default();
                true
            }
            Key::End => {
                self.focus_index(tree, len - 1);
                event.prevent_default();
                true
            }
            Key::Enter | Key::Space => match self.cursor {
                Some(c) if c < len => {
                    if let Some(on_select) = &self.options.on_select {
                        on_select(self.registry[c], c);
                    }
                    event.prevent_default();
                    true
                }
                _ => false,
            },
            Key::Escape => match &self.options.on_escape {
                Some(on_escape) => {
                    on_escape();
                    event.prevent_default();
                    true
                }
                None => false,
            },
            Key::Char(ch) if ch.is_alphanumeric() && !event.ctrl && !event.alt => {
                self.typeahead_key(tree, ch, now_ms);
                true
            }
            _ => false,
        }
    }

    fn typeahead_key(&mut self, tree: &mut T, ch: char, now_ms: u64) {
        self.typeahead
            .push(ch, now_ms, self.options.typeahead_timeout_ms);
        ntrace!(buffer = self.typeahead.buffer(), "typeahead");

        // A fresh single-character search cycles forward: targets at or before the cursor are
        // excluded so the same keystroke keeps advancing to the next occurrence. From two
        // characters on, every target is eligible again.
        let fresh = self.typeahead.buffer().chars().nth(1).is_none();

        for index in 0..self.registry.len() {
            if fresh {
                if let Some(cursor) = self.cursor {
                    if index <= cursor {
                        continue;
                    }
                }
            }
            self.scratch.clear();
            tree.append_text(self.registry[index], &mut self.scratch);
            if starts_with_ignore_case(self.scratch.trim(), self.typeahead.buffer()) {
                self.focus_index(tree, index);
                return;
            }
        }
        // No match: buffer keeps accumulating until the idle reset, cursor stays put.
    }
}

impl<T: FocusTree> core::fmt::Debug for Navigator<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigator")
            .field("options", &self.options)
            .field("registry_len", &self.registry.len())
            .field("cursor", &self.cursor)
            .field("typeahead", &self.typeahead)
            .finish()
    }
}
