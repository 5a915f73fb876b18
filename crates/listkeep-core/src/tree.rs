//! Recursive item-tree mutation.
//!
//! Items nest through `children` to arbitrary depth. The helpers here
//! locate a node by id anywhere in a list's item tree and rebuild the
//! tree around it: ancestors along the path to the match are
//! reconstructed, unrelated subtrees move through untouched. Each node
//! is visited at most once, so a full pass is O(total item count).

use crate::types::ListItem;

/// Apply `f` to the item matching `item_id` at any depth.
///
/// Returns the rebuilt sequence. Items that don't match and have no
/// matching descendant come back unchanged. If the id is absent the
/// result is structurally equal to the input.
pub fn map_item<F>(items: Vec<ListItem>, item_id: &str, mut f: F) -> Vec<ListItem>
where
    F: FnMut(ListItem) -> ListItem,
{
    map_item_inner(items, item_id, &mut f)
}

fn map_item_inner<F>(items: Vec<ListItem>, item_id: &str, f: &mut F) -> Vec<ListItem>
where
    F: FnMut(ListItem) -> ListItem,
{
    items
        .into_iter()
        .map(|mut item| {
            if item.id == item_id {
                return f(item);
            }
            if let Some(children) = item.children.take() {
                item.children = Some(map_item_inner(children, item_id, f));
            }
            item
        })
        .collect()
}

/// Remove the item matching `item_id` from anywhere in the tree.
///
/// The filter runs at every level during the walk, so if an id is
/// duplicated across nesting levels (a modeling violation; ids are
/// expected to be unique per list) every occurrence is removed.
/// Removing a parent discards its whole subtree with it.
pub fn remove_item(items: Vec<ListItem>, item_id: &str) -> Vec<ListItem> {
    items
        .into_iter()
        .filter(|item| item.id != item_id)
        .map(|mut item| {
            if let Some(children) = item.children.take() {
                item.children = Some(remove_item(children, item_id));
            }
            item
        })
        .collect()
}

/// Find an item by id at any depth.
pub fn find_item<'a>(items: &'a [ListItem], item_id: &str) -> Option<&'a ListItem> {
    for item in items {
        if item.id == item_id {
            return Some(item);
        }
        if let Some(children) = &item.children {
            if let Some(found) = find_item(children, item_id) {
                return Some(found);
            }
        }
    }
    None
}

// ============================================================================
// TESTS
// ============================================================================
