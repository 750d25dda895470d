//! Borrowed-book (loan) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Active loan linking a member to a book.
///
/// The `(member_id, book_id)` pair is the identity; the row exists only while
/// the book is out and is deleted on return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Borrowed {
    pub member_id: String,
    pub book_id: String,
}
