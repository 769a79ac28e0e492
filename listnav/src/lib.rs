//! Keyboard navigation, typeahead, and modal focus trapping for windowed lists.
//!
//! The `listwindow` crate is UI-agnostic and focuses on the windowing math. This crate adds the
//! input side: turning a stream of key events into focus transitions over an ordered registry of
//! focusable targets.
//!
//! - [`Navigator`]: arrow/home/end movement, selection, escape, and typeahead search
//! - [`FocusTrap`]: cyclic tab order and deferred initial focus while a modal is open
//! - [`ListController`]: a [`Navigator`] wired to a `listwindow::ListState` so the focused
//!   item stays scrolled into view
//!
//! The UI surface is injected as a [`FocusTree`] capability; nothing here reaches into ambient
//! globals, so the same engines drive DOM-like, TUI, or test harness trees.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod event;
mod focusable;
mod navigator;
mod options;
mod trap;
mod tree;
mod typeahead;


pub use controller::ListController;
pub use event::{Key, KeyEvent};
pub use focusable::{
    collect_matches, first_focusable_descendant, is_focusable, last_focusable_descendant,
};
pub use navigator::Navigator;
pub use options::{EscapeCallback, NavOptions, SelectCallback};
pub use trap::FocusTrap;
pub use tree::{FocusTree, NodeKind};
