//! # listkeep-core
//!
//! State engine for Listkeep, a personal list manager: named lists of
//! (optionally nested) items with tags, pins, favorites and appearance
//! settings.
//!
//! This crate is framework-agnostic and owns no UI. A shell (desktop
//! app, web server, CLI) constructs one [`Store`] at startup, routes
//! user intent through its operations and re-renders from the
//! resulting snapshots.
//!
//! ## Key Concepts
//!
//! - **Snapshot** ([`AppState`]): immutable value of the entire state
//! - **Action** ([`Action`]): one state transition request
//! - **Reducer** ([`reduce`]): pure (snapshot, action) -> snapshot
//! - **Store** ([`Store`]): snapshot owner, dispatch entry point and
//!   write-through persistence host

pub mod actions;
pub mod icons;
pub mod ids;
pub mod paths;
pub mod persistence;
pub mod reducer;
pub mod store;
pub mod templates;
pub mod tree;
pub mod types;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::reduce;
pub use store::Store;
pub use templates::{ListTemplate, TemplateItem};
pub use types::{AppState, List, ListItem, Tag, ViewMode};
