//! Snapshot data types.
//!
//! # Data Model Overview
//!
//! The entire application state is one JSON-serializable snapshot:
//!
//! ```text
//! AppState
//! ├── lists: Vec<List>           # ordered; order == manual drag order
//! │   ├── items: Vec<ListItem>   # ordered; items may nest via `children`
//! │   └── tags: Vec<Tag>
//! ├── activeListId               # list selected for detail view
//! └── filterTag                  # display-layer hint, not consumed here
//! ```
//!
//! All types serialize camelCase so the persisted layout matches what
//! shells and older exports expect. Optional metadata fields are
//! omitted when absent; boolean flags are omitted when false.
//!
//! # Invariants
//!
//! - `List.id` is unique within `AppState.lists`.
//! - `ListItem.id` is unique within the owning list's whole item tree.
//! - `children` may nest to arbitrary depth; the tree is acyclic by
//!   construction (mutations only append, never re-parent).

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::ids::generate_id;

/// Current UTC time as epoch milliseconds (the persisted timestamp unit).
pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Serde helper: skip boolean flags that are false.
fn is_false(value: &bool) -> bool {
    !*value
}

/// A label attached to a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Unique tag identifier.
    pub id: String,

    /// User-visible tag name.
    pub name: String,

    /// Optional display color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Optional icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Tag {
    /// Create a tag with a fresh id and just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            color: None,
            icon: None,
        }
    }
}

/// A single entry in a list.
///
/// Items may own nested sub-items through `children`. The UI keeps
/// nesting to one level, but nothing here depends on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Unique item identifier (within the owning list's tree).
    pub id: String,

    /// Item text.
    pub content: String,

    /// Optional cover image URL or data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// True once the item is checked off.
    pub completed: bool,

    /// Creation time, epoch milliseconds.
    pub created_at: i64,

    /// Nested sub-items, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ListItem>>,

    /// True if the item is flagged as priority.
    #[serde(default, skip_serializing_if = "is_false")]
    pub priority: bool,

    /// Per-item override of the list accent color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_color: Option<String>,
}

impl ListItem {
    /// Create a fresh, uncompleted item with a generated id.
    pub fn new(content: impl Into<String>, cover_image: Option<String>) -> Self {
        Self {
            id: generate_id(),
            content: content.into(),
            cover_image,
            completed: false,
            created_at: now_millis(),
            children: None,
            priority: false,
            list_color: None,
        }
    }
}

/// How a list renders its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Plain rows.
    #[default]
    List,
    /// Cover-image grid.
    Cover,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Cover,
            ViewMode::Cover => ViewMode::List,
        }
    }
}

/// A user-created named collection of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// Unique list identifier.
    pub id: String,

    /// User-visible title.
    pub title: String,

    /// Open category tag ("movies", "books", "custom", ...).
    ///
    /// Known values drive the default icon lookup; unknown values are
    /// fine and fall back to a default icon.
    #[serde(rename = "type")]
    pub list_type: String,

    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Avatar emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Ordered items; the order is the manual drag order.
    pub items: Vec<ListItem>,

    /// Creation time, epoch milliseconds.
    pub created_at: i64,

    /// Current render mode.
    pub view_mode: ViewMode,

    /// True if the list is marked as a favorite.
    #[serde(default, skip_serializing_if = "is_false")]
    pub favorite: bool,

    /// True if the list is pinned to the top section.
    #[serde(default, skip_serializing_if = "is_false")]
    pub pinned: bool,

    /// Labels attached to this list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Accent color (hex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Session-only lists are never persisted.
    #[serde(default, skip_serializing_if = "is_false")]
    pub temporary: bool,
}

/// The root snapshot: everything the application knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// All lists, in display order.
    #[serde(default)]
    pub lists: Vec<List>,

    /// Id of the list open in detail view, if any.
    #[serde(default)]
    pub active_list_id: Option<String>,

    /// Tag name the sidebar is currently filtered by.
    #[serde(default)]
    pub filter_tag: Option<String>,
}

impl AppState {
    /// Look up a list by id.
    pub fn get_list(&self, id: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// The list referenced by `active_list_id`, if it exists.
    pub fn active_list(&self) -> Option<&List> {
        self.active_list_id
            .as_deref()
            .and_then(|id| self.get_list(id))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(id: &str) -> List {
        List {
            id: id.to_string(),
            title: "Groceries".to_string(),
            list_type: "custom".to_string(),
            icon: Some("Plus".to_string()),
            avatar: None,
            items: vec![],
            created_at: 1_700_000_000_000,
            view_mode: ViewMode::List,
            favorite: false,
            pinned: false,
            tags: vec![],
            color: Some("#84cc16".to_string()),
            temporary: false,
        }
    }

    #[test]
    fn list_roundtrip() {
        let mut list = make_list("list-1");
        list.items.push(ListItem::new("Milk", None));

        let json = serde_json::to_string(&list).unwrap();
        let parsed: List = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, list);
    }

    #[test]
    fn camel_case_serialization() {
        let state = AppState {
            lists: vec![make_list("list-1")],
            active_list_id: Some("list-1".to_string()),
            filter_tag: None,
        };

        let json = serde_json::to_string(&state).unwrap();

        assert!(json.contains("activeListId"));
        assert!(json.contains("createdAt"));
        assert!(json.contains("viewMode"));
        assert!(json.contains("\"type\":\"custom\""));
        assert!(!json.contains("active_list_id"));
        assert!(!json.contains("list_type"));
    }

    #[test]
    fn false_flags_are_omitted() {
        let list = make_list("list-1");
        let json = serde_json::to_string(&list).unwrap();

        assert!(!json.contains("favorite"));
        assert!(!json.contains("pinned"));
        assert!(!json.contains("temporary"));
    }

    #[test]
    fn true_flags_are_written() {
        let mut list = make_list("list-1");
        list.favorite = true;
        list.pinned = true;

        let json = serde_json::to_string(&list).unwrap();

        assert!(json.contains("\"favorite\":true"));
        assert!(json.contains("\"pinned\":true"));
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let json = r#"{
            "id": "abc1234",
            "title": "Books",
            "type": "books",
            "items": [],
            "createdAt": 1700000000000,
            "viewMode": "cover"
        }"#;

        let list: List = serde_json::from_str(json).unwrap();

        assert_eq!(list.view_mode, ViewMode::Cover);
        assert!(!list.favorite);
        assert!(!list.pinned);
        assert!(!list.temporary);
        assert!(list.tags.is_empty());
        assert!(list.icon.is_none());
    }

    #[test]
    fn view_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ViewMode::List).unwrap(), "\"list\"");
        assert_eq!(
            serde_json::to_string(&ViewMode::Cover).unwrap(),
            "\"cover\""
        );
    }

    #[test]
    fn view_mode_toggles_both_ways() {
        assert_eq!(ViewMode::List.toggled(), ViewMode::Cover);
        assert_eq!(ViewMode::Cover.toggled(), ViewMode::List);
    }

    #[test]
    fn new_item_starts_uncompleted() {
        let item = ListItem::new("Milk", None);

        assert_eq!(item.content, "Milk");
        assert!(!item.completed);
        assert!(!item.priority);
        assert!(item.children.is_none());
        assert_eq!(item.id.len(), 7);
    }

    #[test]
    fn nested_items_roundtrip() {
        let mut parent = ListItem::new("Milk", None);
        parent.children = Some(vec![ListItem::new("Organic", None)]);

        let json = serde_json::to_string(&parent).unwrap();
        let parsed: ListItem = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.children.as_ref().unwrap().len(), 1);
        assert_eq!(parsed.children.unwrap()[0].content, "Organic");
    }

    #[test]
    fn tag_named_generates_id() {
        let a = Tag::named("sci-fi");
        let b = Tag::named("sci-fi");

        assert_eq!(a.name, "sci-fi");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn empty_state_serializes_nulls() {
        let json = serde_json::to_string(&AppState::default()).unwrap();

        // activeListId / filterTag are part of the layout even when unset.
        assert!(json.contains("\"activeListId\":null"));
        assert!(json.contains("\"filterTag\":null"));
    }

    #[test]
    fn active_list_resolves_by_id() {
        let state = AppState {
            lists: vec![make_list("list-1"), make_list("list-2")],
            active_list_id: Some("list-2".to_string()),
            filter_tag: None,
        };

        assert_eq!(state.active_list().unwrap().id, "list-2");
    }

    #[test]
    fn active_list_none_when_dangling() {
        let state = AppState {
            lists: vec![make_list("list-1")],
            active_list_id: Some("gone".to_string()),
            filter_tag: None,
        };

        assert!(state.active_list().is_none());
    }
}
