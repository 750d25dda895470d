//! Author model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author record; owns zero or more books through `books.authors_id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Author {
    /// Generated by the server on creation
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nick_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub specialization: String,
}

impl Author {
    /// Snapshot carrying only the display name, as embedded in borrowed books
    pub fn named(full_name: Option<String>) -> Self {
        Self {
            full_name,
            ..Default::default()
        }
    }
}
