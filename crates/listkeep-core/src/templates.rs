//! Template input for pre-filled lists.
//!
//! A template names a list plus its starter items; shells typically
//! ship a JSON catalog of these. Ingestion lives on
//! [`crate::store::Store::add_list_from_template`]: the list is
//! created in cover view, string tags become [`crate::types::Tag`]
//! records with generated ids, and one item is appended per entry.

use serde::{Deserialize, Serialize};

/// A ready-made list definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTemplate {
    /// Title for the created list.
    pub title: String,

    /// List type (drives nothing here; stored on the list).
    #[serde(rename = "type")]
    pub list_type: String,

    /// Icon name; defaults to "Plus" when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Tag names, converted to tag records on ingestion.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Starter items, in order.
    pub items: Vec<TemplateItem>,
}

/// One starter item of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    /// Item text.
    pub content: String,

    /// Optional cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}
