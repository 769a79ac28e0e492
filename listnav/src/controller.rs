use listwindow::{Align, ListState, Window, WindowOptions};

use crate::{FocusTree, KeyEvent, NavOptions, Navigator};

/// A [`Navigator`] wired to a `listwindow::ListState` so the focused row stays in view.
///
/// Adapters drive it by calling:
/// - `mount` / `rebuild_registry` when the item collection or container changes
/// - `handle_key` for key events, applying any returned scroll offset to the UI
/// - `on_scroll` when the UI reports a scroll offset change
/// - `tick(now_ms)` each frame/timer tick (typeahead idle reset)
pub struct ListController<T: FocusTree> {
    nav: Navigator<T>,
    list: ListState,
}

impl<T: FocusTree> ListController<T> {
    pub fn new(nav_options: NavOptions<T::Id>, window_options: WindowOptions) -> Self {
        Self {
            nav: Navigator::new(nav_options),
            list: ListState::new(window_options),
        }
    }

    pub fn navigator(&self) -> &Navigator<T> {
        &self.nav
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator<T> {
        &mut self.nav
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListState {
        &mut self.list
    }

    /// Rebuilds the registry and keeps the list's item count in step with it.
    pub fn rebuild_registry(&mut self, tree: &T, container: T::Id) {
        self.nav.rebuild_registry(tree, container);
        self.list.set_count(self.nav.registry().len());
    }

    /// Mounts the navigator and scrolls any initial focus into view.
    pub fn mount(&mut self, tree: &mut T, container: T::Id) {
        self.nav.mount(tree, container);
        self.list.set_count(self.nav.registry().len());
        if let Some(cursor) = self.nav.current_index() {
            self.list.scroll_to_index(cursor, Align::Auto);
        }
    }

    pub fn unmount(&mut self) {
        self.nav.unmount();
    }

    /// Feeds one key event through the navigator.
    ///
    /// When the cursor lands on a new index, the list scrolls it into view and the new scroll
    /// offset is returned for the UI to apply.
    pub fn handle_key(
        &mut self,
        tree: &mut T,
        event: &mut KeyEvent,
        now_ms: u64,
    ) -> Option<u64> {
        let before = self.nav.current_index();
        if !self.nav.handle_key(tree, event, now_ms) {
            return None;
        }
        let cursor = self.nav.current_index()?;
        if Some(cursor) == before {
            return None;
        }
        Some(self.list.scroll_to_index(cursor, Align::Auto))
    }

    /// Call this when the UI reports a scroll offset change (e.g. wheel/drag).
    pub fn on_scroll(&mut self, scroll_offset: u64) {
        self.list.set_scroll_offset_clamped(scroll_offset);
    }

    pub fn window(&self) -> Window {
        self.list.window()
    }

    pub fn tick(&mut self, now_ms: u64) {
        self.nav.tick(now_ms);
    }
}

impl<T: FocusTree> core::fmt::Debug for ListController<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListController")
            .field("nav", &self.nav)
            .field("list", &self.list)
            .finish()
    }
}
