//! A headless viewport-windowing engine for fixed-extent lists.
//!
//! For keyboard navigation, typeahead, and modal focus trapping built on top of this crate,
//! see the `listnav` crate.
//!
//! This crate keeps rendering cost bounded regardless of list size: given the item count, the
//! per-item extent, the container extent, and a scroll offset, it projects the contiguous index
//! range actually worth rendering (plus overscan) and the offset at which to translate it.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the container extent (height/width in the scroll axis)
//! - the scroll offset
//! - the fixed per-item extent
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use options::WindowOptions;
pub use state::ListState;
pub use types::{Align, Window};
