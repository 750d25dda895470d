//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::author::Author;

/// Book record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Book {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Optional reference to the writing author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors_id: Option<String>,
    pub title: String,
    pub genre: String,
    pub isbn: String,
    /// Only `full_name` is filled, and only for a member's borrowed books
    #[sqlx(skip)]
    pub author: Author,
}
