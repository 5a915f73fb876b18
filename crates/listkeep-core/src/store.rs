//! The store - single owner of the current snapshot.
//!
//! One `Store` is constructed at application start and handed to
//! whatever shell embeds the core. All mutation goes through
//! [`Store::dispatch`]; subscribers observe each new snapshot after it
//! is applied (the persistence write-through is one such subscriber).
//!
//! Dispatch is synchronous and single-threaded: the embedding event
//! loop issues one action at a time, so there is nothing to lock.

use std::path::PathBuf;

use crate::actions::Action;
use crate::icons;
use crate::ids::generate_id;
use crate::persistence;
use crate::reducer::reduce;
use crate::templates::ListTemplate;
use crate::types::{AppState, List, ListItem, Tag, ViewMode};

type Subscriber = Box<dyn FnMut(&AppState)>;

/// Owns the snapshot and applies actions to it.
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    /// Create a store over an initial snapshot.
    pub fn new(initial: AppState) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    /// Create a store backed by the durable mirror under `dir`.
    ///
    /// Loads the stored snapshot (empty on absence or corruption) and
    /// installs a write-through subscriber that saves after every
    /// dispatch. Write failures are logged, never surfaced - durable
    /// state then lags by one action, which beats crashing the UI.
    pub fn with_persistence(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let mut store = Self::new(persistence::load_state_or_default(&dir));
        store.subscribe(move |state| {
            if let Err(e) = persistence::save_state(&dir, state) {
                log::warn!("failed to persist state: {}", e);
            }
        });
        store
    }

    /// The current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The list currently open in detail view, if any.
    pub fn active_list(&self) -> Option<&List> {
        self.state.active_list()
    }

    /// Register a change listener, called with each new snapshot.
    pub fn subscribe(&mut self, f: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    /// Apply an action and notify subscribers.
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(std::mem::take(&mut self.state), action);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    // ------------------------------------------------------------------
    // Convenience operations (the surface UI collaborators consume)
    // ------------------------------------------------------------------

    /// Create a list and make it active.
    ///
    /// When no icon is given, the default for `list_type` is used;
    /// unknown types get the generic icon.
    #[allow(clippy::too_many_arguments)]
    pub fn add_list(
        &mut self,
        title: impl Into<String>,
        list_type: &str,
        icon: Option<String>,
        avatar: Option<String>,
        tags: Option<Vec<Tag>>,
        color: Option<String>,
        temporary: bool,
    ) {
        let icon = icon.unwrap_or_else(|| icons::default_icon(list_type).to_string());
        self.dispatch(Action::AddList {
            id: None,
            title: title.into(),
            list_type: list_type.to_string(),
            icon: Some(icon),
            avatar,
            tags,
            view_mode: None,
            color,
            temporary: Some(temporary),
        });
    }

    /// Create a pre-filled list from a template; returns the new
    /// list's id.
    ///
    /// The list is created in cover view with the template's tag names
    /// converted to tag records, then one item is appended per
    /// template entry.
    pub fn add_list_from_template(&mut self, template: ListTemplate) -> String {
        let list_id = generate_id();
        let icon = template
            .icon
            .unwrap_or_else(|| icons::DEFAULT_ICON.to_string());
        let tags = template.tags.into_iter().map(Tag::named).collect();

        self.dispatch(Action::AddList {
            id: Some(list_id.clone()),
            title: template.title,
            list_type: template.list_type,
            icon: Some(icon),
            avatar: None,
            tags: Some(tags),
            view_mode: Some(ViewMode::Cover),
            color: None,
            temporary: None,
        });

        for item in template.items {
            self.add_item(&list_id, item.content, item.cover_image, None);
        }

        list_id
    }

    /// Delete a list (and everything in it).
    pub fn delete_list(&mut self, id: &str) {
        self.dispatch(Action::DeleteList { id: id.to_string() });
    }

    /// Select (or clear) the active list.
    pub fn set_active_list(&mut self, id: Option<&str>) {
        self.dispatch(Action::SetActiveList {
            id: id.map(str::to_string),
        });
    }

    /// Append an item, top-level or under `parent_item_id`.
    pub fn add_item(
        &mut self,
        list_id: &str,
        content: impl Into<String>,
        cover_image: Option<String>,
        parent_item_id: Option<&str>,
    ) {
        self.dispatch(Action::AddItem {
            list_id: list_id.to_string(),
            content: content.into(),
            cover_image,
            parent_item_id: parent_item_id.map(str::to_string),
        });
    }

    /// Remove an item.
    pub fn delete_item(&mut self, list_id: &str, item_id: &str, parent_item_id: Option<&str>) {
        self.dispatch(Action::DeleteItem {
            list_id: list_id.to_string(),
            item_id: item_id.to_string(),
            parent_item_id: parent_item_id.map(str::to_string),
        });
    }

    /// Flip an item's completed flag.
    pub fn toggle_item(&mut self, list_id: &str, item_id: &str, parent_item_id: Option<&str>) {
        self.dispatch(Action::ToggleItem {
            list_id: list_id.to_string(),
            item_id: item_id.to_string(),
            parent_item_id: parent_item_id.map(str::to_string),
        });
    }

    /// Replace an item's content and cover image.
    pub fn update_item(
        &mut self,
        list_id: &str,
        item_id: &str,
        content: impl Into<String>,
        cover_image: Option<String>,
        parent_item_id: Option<&str>,
    ) {
        self.dispatch(Action::UpdateItem {
            list_id: list_id.to_string(),
            item_id: item_id.to_string(),
            content: content.into(),
            cover_image,
            parent_item_id: parent_item_id.map(str::to_string),
        });
    }

    /// Replace a list's top-level item order (drop completion).
    pub fn reorder_items(&mut self, list_id: &str, items: Vec<ListItem>) {
        self.dispatch(Action::ReorderItems {
            list_id: list_id.to_string(),
            items,
        });
    }

    /// Replace the list ordering (drop completion).
    pub fn reorder_lists(&mut self, lists: Vec<List>) {
        self.dispatch(Action::ReorderLists { lists });
    }

    /// Flip a list between row and cover rendering.
    pub fn toggle_view_mode(&mut self, list_id: &str) {
        self.dispatch(Action::ToggleViewMode {
            list_id: list_id.to_string(),
        });
    }

    /// Overwrite list metadata; see [`Action::UpdateList`] for which
    /// fields fall back to their current value.
    #[allow(clippy::too_many_arguments)]
    pub fn update_list(
        &mut self,
        id: &str,
        title: impl Into<String>,
        icon: Option<String>,
        avatar: Option<String>,
        tags: Option<Vec<Tag>>,
        favorite: Option<bool>,
        pinned: Option<bool>,
        color: Option<String>,
    ) {
        self.dispatch(Action::UpdateList {
            id: id.to_string(),
            title: title.into(),
            icon,
            avatar,
            tags,
            favorite,
            pinned,
            color,
        });
    }

    /// Flip a list's favorite flag.
    pub fn toggle_favorite(&mut self, id: &str) {
        self.dispatch(Action::ToggleFavorite { id: id.to_string() });
    }

    /// Flip a list's pinned flag.
    pub fn toggle_pinned(&mut self, id: &str) {
        self.dispatch(Action::TogglePinned { id: id.to_string() });
    }

    /// Flip an item's priority flag.
    pub fn toggle_priority_item(&mut self, list_id: &str, item_id: &str) {
        self.dispatch(Action::TogglePriorityItem {
            list_id: list_id.to_string(),
            item_id: item_id.to_string(),
        });
    }

    /// Set (or clear) the sidebar tag filter.
    pub fn set_filter_tag(&mut self, tag: Option<&str>) {
        self.dispatch(Action::SetFilterTag {
            tag: tag.map(str::to_string),
        });
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
