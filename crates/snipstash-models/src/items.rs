//! Item (snippet) models.
//!
//! Items are loosely typed: besides `title`, `code` and `user_id`, any other
//! JSON members sent on creation are kept in [`Item::extra`] and serialized
//! back flattened into the item object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::ids::ItemId;

/// Payload members the store owns; they are never copied into `extra`.
pub const RESERVED_FIELDS: [&str; 2] = ["id", "_id"];

/// A stored item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: ItemId,
    #[schema(example = "Quick sort")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Free-form owner reference. Not checked against any user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// A validated item ready to be stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewItem {
    pub title: String,
    pub code: Option<String>,
    pub user_id: Option<String>,
    pub extra: Map<String, Value>,
}

impl NewItem {
    /// Attaches the store-generated id.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            title: self.title,
            code: self.code,
            user_id: self.user_id,
            extra: self.extra,
        }
    }
}
