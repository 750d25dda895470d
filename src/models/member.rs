//! Member model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Library member; owns zero or more borrowed-book records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(default)]
pub struct Member {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub full_name: String,
}
