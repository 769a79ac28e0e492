use alloc::string::String;

/// Coarse role classification used by the focusable predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Button,
    Link,
    TextInput,
    Checkbox,
    Other,
}

/// The injected UI capability.
///
/// A DOM-like tree surface passed explicitly to every operation that touches the UI. Implement
/// it over your real widget/element tree; the engines only ever walk it read-only, except for
/// [`FocusTree::focus`], which directs the platform input focus.
///
/// `Id` is an opaque node handle (a DOM element reference, a widget arena index, ...). Handles
/// are only compared and copied, never interpreted.
pub trait FocusTree {
    type Id: Copy + PartialEq;

    /// Number of children of `id`, in document order.
    fn child_count(&self, id: Self::Id) -> usize;

    /// The `n`-th child of `id` (`n < child_count(id)`).
    fn child(&self, id: Self::Id, n: usize) -> Self::Id;

    fn kind(&self, id: Self::Id) -> NodeKind;

    /// Explicit tab priority, if the node carries one.
    fn tab_priority(&self, id: Self::Id) -> Option<i16>;

    /// Whether `id` matches an item selector pattern.
    fn matches(&self, id: Self::Id, selector: &str) -> bool;

    /// Appends the textual content of the subtree rooted at `id` to `out`.
    fn append_text(&self, id: Self::Id, out: &mut String);

    /// Directs the platform input focus to `id`.
    fn focus(&mut self, id: Self::Id);

    /// The node currently holding input focus, if any.
    fn focused(&self) -> Option<Self::Id>;
}
