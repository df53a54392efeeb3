//! Product tags.

use crate::ids::TagId;
use serde::{Deserialize, Serialize};

/// A tag used to group and filter products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Tag identifier.
    pub id: TagId,
    /// Display name (unique across the shop).
    pub name: String,
}

impl Tag {
    pub fn new(id: TagId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
