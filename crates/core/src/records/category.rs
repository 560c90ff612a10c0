//! Income and expense categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::kinds::EntryKind;
use crate::lifecycle::SoftDeletable;
use crate::validation::{ValidationError, validate_color, validate_description, validate_name};

/// A category owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Category {
    /// Category ID.
    pub id: Uuid,
    /// Owner.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Optional description.
    pub description: Option<String>,
    /// Optional display color.
    pub color: Option<String>,
    /// Archived flag.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl SoftDeletable for Category {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Payload for creating a category.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewCategory {
    /// Display name.
    pub name: String,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional display color.
    #[serde(default)]
    pub color: Option<String>,
}

impl NewCategory {
    /// Validates the payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("name", &self.name)?;
        validate_description(self.description.as_deref())?;
        validate_color(self.color.as_deref())
    }
}

/// Partial update of a category.
///
/// `description` and `color` distinguish "absent" (unchanged) from an
/// explicit `null` (cleared).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CategoryPatch {
    /// New display name.
    pub name: Option<String>,
    /// New kind.
    #[serde(rename = "type")]
    pub kind: Option<EntryKind>,
    /// New description, or `Some(None)` to clear it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    /// New color, or `Some(None)` to clear it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub color: Option<Option<String>>,
}

impl CategoryPatch {
    /// Validates the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name("name", name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description.as_deref())?;
        }
        if let Some(color) = &self.color {
            validate_color(color.as_deref())?;
        }
        Ok(())
    }
}
