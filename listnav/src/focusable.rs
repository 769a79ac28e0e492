use alloc::vec::Vec;

use crate::{FocusTree, NodeKind};

/// The fixed focusable-role predicate.
///
/// A node can receive input focus when it has an interactive role (button, link, form control)
/// or carries an explicit zero/positive tab priority.
pub fn is_focusable<T: FocusTree>(tree: &T, id: T::Id) -> bool {
    match tree.kind(id) {
        NodeKind::Button | NodeKind::Link | NodeKind::TextInput | NodeKind::Checkbox => true,
        NodeKind::Other => matches!(tree.tab_priority(id), Some(p) if p >= 0),
    }
}

/// First focusable node strictly below `root`, in document order.
pub fn first_focusable_descendant<T: FocusTree>(tree: &T, root: T::Id) -> Option<T::Id> {
    for n in 0..tree.child_count(root) {
        let child = tree.child(root, n);
        if is_focusable(tree, child) {
            return Some(child);
        }
        if let Some(found) = first_focusable_descendant(tree, child) {
            return Some(found);
        }
    }
    None
}

/// Last focusable node strictly below `root`, in document order.
pub fn last_focusable_descendant<T: FocusTree>(tree: &T, root: T::Id) -> Option<T::Id> {
    for n in (0..tree.child_count(root)).rev() {
        let child = tree.child(root, n);
        // A child's descendants come after the child itself in document order.
        if let Some(found) = last_focusable_descendant(tree, child) {
            return Some(found);
        }
        if is_focusable(tree, child) {
            return Some(child);
        }
    }
    None
}

/// Rebuilds a focus registry from scratch: every descendant of `root` matching `selector`, in
/// document order. Clears `out` first.
pub fn collect_matches<T: FocusTree>(
    tree: &T,
    root: T::Id,
    selector: &str,
    out: &mut Vec<T::Id>,
) {
    out.clear();
    collect_into(tree, root, selector, out);
}

fn collect_into<T: FocusTree>(tree: &T, node: T::Id, selector: &str, out: &mut Vec<T::Id>) {
    for n in 0..tree.child_count(node) {
        let child = tree.child(node, n);
        if tree.matches(child, selector) {
            out.push(child);
        }
        collect_into(tree, child, selector, out);
    }
}
