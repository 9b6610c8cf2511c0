//! Dynamic content model supplied by the CMS subsystem.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user-defined dynamic content schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsCollection {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Ordered field list; order is preserved in the emitted schema.
    #[serde(default)]
    pub fields: Vec<CmsField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsField {
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub field_type: CmsFieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub validation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum CmsFieldType {
    Text,
    RichText,
    Number,
    Boolean,
    Date,
    Image,
    Link,
    /// Constrained-choice field; the emitted type is a union of the fixed
    /// option list.
    Select {
        #[serde(default)]
        options: Vec<String>,
    },
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CmsItemStatus {
    Draft,
    Published,
}

impl CmsItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CmsItemStatus::Draft => "draft",
            CmsItemStatus::Published => "published",
        }
    }
}

/// One record of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsItem {
    pub id: String,
    pub collection_id: String,
    /// Field slug -> value.
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
    pub status: CmsItemStatus,
}
