//! The pure state transition function.
//!
//! `reduce` maps (snapshot, action) to the next snapshot. It never
//! fails: an action referencing an id that doesn't exist leaves the
//! affected branch unchanged and the caller is not told. Reorder
//! actions are the one place with validation - a payload that is not
//! an id-permutation of the current sequence is rejected as a no-op
//! (with a warning), since accepting it could drop or duplicate data.
//!
//! Fresh ids and `createdAt` timestamps for AddList/AddItem are
//! generated here; everything else is a deterministic function of the
//! inputs.

use crate::actions::Action;
use crate::icons::DEFAULT_COLOR;
use crate::ids::generate_id;
use crate::tree;
use crate::types::{now_millis, AppState, List, ListItem};

/// Apply one action to a snapshot, producing the next snapshot.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::AddList {
            id,
            title,
            list_type,
            icon,
            avatar,
            tags,
            view_mode,
            color,
            temporary,
        } => {
            let list = List {
                id: id.unwrap_or_else(generate_id),
                title,
                list_type,
                icon,
                avatar,
                items: Vec::new(),
                created_at: now_millis(),
                view_mode: view_mode.unwrap_or_default(),
                favorite: false,
                pinned: false,
                tags: tags.unwrap_or_default(),
                color: Some(color.unwrap_or_else(|| DEFAULT_COLOR.to_string())),
                temporary: temporary.unwrap_or(false),
            };
            let active = list.id.clone();
            let mut lists = state.lists;
            lists.push(list);
            AppState {
                lists,
                active_list_id: Some(active),
                filter_tag: state.filter_tag,
            }
        }

        Action::DeleteList { id } => {
            let active_list_id = if state.active_list_id.as_deref() == Some(id.as_str()) {
                None
            } else {
                state.active_list_id
            };
            AppState {
                lists: state.lists.into_iter().filter(|l| l.id != id).collect(),
                active_list_id,
                filter_tag: state.filter_tag,
            }
        }

        Action::ReorderLists { lists } => {
            let current: Vec<&str> = state.lists.iter().map(|l| l.id.as_str()).collect();
            let proposed: Vec<&str> = lists.iter().map(|l| l.id.as_str()).collect();
            if !same_ids(current, proposed) {
                log::warn!("rejected list reorder: not a permutation of the current lists");
                return state;
            }
            AppState { lists, ..state }
        }

        Action::SetActiveList { id } => AppState {
            active_list_id: id,
            ..state
        },

        Action::AddItem {
            list_id,
            content,
            cover_image,
            parent_item_id,
        } => with_list(state, &list_id, |mut list| {
            let item = ListItem::new(content, cover_image);
            match parent_item_id {
                Some(parent_id) => {
                    let mut pending = Some(item);
                    list.items = tree::map_item(list.items, &parent_id, |mut parent| {
                        if let Some(child) = pending.take() {
                            parent.children.get_or_insert_with(Vec::new).push(child);
                        }
                        parent
                    });
                }
                None => list.items.push(item),
            }
            list
        }),

        Action::DeleteItem {
            list_id,
            item_id,
            parent_item_id,
        } => with_list(state, &list_id, |mut list| {
            list.items = match parent_item_id {
                Some(_) => tree::remove_item(list.items, &item_id),
                None => list
                    .items
                    .into_iter()
                    .filter(|item| item.id != item_id)
                    .collect(),
            };
            list
        }),

        Action::ToggleItem {
            list_id,
            item_id,
            parent_item_id,
        } => with_list(state, &list_id, |mut list| {
            match parent_item_id {
                Some(_) => {
                    list.items = tree::map_item(list.items, &item_id, |mut item| {
                        item.completed = !item.completed;
                        item
                    });
                }
                None => {
                    for item in &mut list.items {
                        if item.id == item_id {
                            item.completed = !item.completed;
                        }
                    }
                }
            }
            list
        }),

        Action::UpdateItem {
            list_id,
            item_id,
            content,
            cover_image,
            parent_item_id,
        } => with_list(state, &list_id, |mut list| {
            match parent_item_id {
                Some(_) => {
                    list.items = tree::map_item(list.items, &item_id, |mut item| {
                        item.content = content.clone();
                        item.cover_image = cover_image.clone();
                        item
                    });
                }
                None => {
                    for item in &mut list.items {
                        if item.id == item_id {
                            item.content = content.clone();
                            item.cover_image = cover_image.clone();
                        }
                    }
                }
            }
            list
        }),

        Action::ToggleViewMode { list_id } => with_list(state, &list_id, |mut list| {
            list.view_mode = list.view_mode.toggled();
            list
        }),

        Action::UpdateList {
            id,
            title,
            icon,
            avatar,
            tags,
            favorite,
            pinned,
            color,
        } => with_list(state, &id, |list| List {
            title,
            icon,
            avatar,
            tags: tags.unwrap_or_default(),
            favorite: favorite.unwrap_or(list.favorite),
            pinned: pinned.unwrap_or(list.pinned),
            color: color.or(list.color),
            ..list
        }),

        Action::ToggleFavorite { id } => with_list(state, &id, |mut list| {
            list.favorite = !list.favorite;
            list
        }),

        Action::TogglePinned { id } => with_list(state, &id, |mut list| {
            list.pinned = !list.pinned;
            list
        }),

        Action::TogglePriorityItem { list_id, item_id } => {
            with_list(state, &list_id, |mut list| {
                list.items = tree::map_item(list.items, &item_id, |mut item| {
                    item.priority = !item.priority;
                    item
                });
                list
            })
        }

        Action::SetFilterTag { tag } => AppState {
            filter_tag: tag,
            ..state
        },

        Action::ReorderItems { list_id, items } => with_list(state, &list_id, |list| {
            let current: Vec<&str> = list.items.iter().map(|i| i.id.as_str()).collect();
            let proposed: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
            if !same_ids(current, proposed) {
                log::warn!(
                    "rejected item reorder for list {}: not a permutation of the current items",
                    list.id
                );
                return list;
            }
            List { items, ..list }
        }),
    }
}

/// Rebuild the snapshot with `f` applied to the list matching
/// `list_id`. No-op when the id is absent.
fn with_list<F>(state: AppState, list_id: &str, f: F) -> AppState
where
    F: FnOnce(List) -> List,
{
    let AppState {
        mut lists,
        active_list_id,
        filter_tag,
    } = state;
    if let Some(pos) = lists.iter().position(|l| l.id == list_id) {
        let list = lists.remove(pos);
        lists.insert(pos, f(list));
    }
    AppState {
        lists,
        active_list_id,
        filter_tag,
    }
}

/// True when `proposed` carries exactly the ids of `current`
/// (order-insensitive).
fn same_ids(mut current: Vec<&str>, mut proposed: Vec<&str>) -> bool {
    if current.len() != proposed.len() {
        return false;
    }
    current.sort_unstable();
    proposed.sort_unstable();
    current == proposed
}

// ============================================================================
// TESTS
// ============================================================================
