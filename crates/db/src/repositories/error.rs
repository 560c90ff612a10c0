//! Error type shared by the repositories.

use sea_orm::DbErr;
use spendwise_core::ValidationError;
use spendwise_shared::AppError;
use uuid::Uuid;

/// Error types for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Record does not exist or belongs to another user.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Input failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced account or category is missing or owned by someone else.
    #[error("{field} refers to an unknown {}", .resource.to_lowercase())]
    InvalidReference {
        /// Payload field holding the reference.
        field: &'static str,
        /// Kind of record referenced.
        resource: &'static str,
    },

    /// Unique constraint would be violated.
    #[error("{0}")]
    Conflict(String),

    /// A stored row holds a value the domain cannot represent.
    #[error("{resource} {id} has invalid {column} '{value}'")]
    Corrupt {
        /// Kind of record.
        resource: &'static str,
        /// Row id.
        id: Uuid,
        /// Offending column.
        column: &'static str,
        /// Stored value.
        value: String,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    pub(crate) fn corrupt(resource: &'static str, id: Uuid, column: &'static str, value: &str) -> Self {
        Self::Corrupt {
            resource,
            id,
            column,
            value: value.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound(err.to_string()),
            StoreError::Validation(_) | StoreError::InvalidReference { .. } => {
                Self::Validation(err.to_string())
            }
            StoreError::Conflict(msg) => Self::Conflict(msg),
            StoreError::Corrupt { .. } => Self::Internal(err.to_string()),
            StoreError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_app_error() {
        let err: AppError = StoreError::NotFound("Account").into();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.public_message(), "Account not found");

        let err: AppError = StoreError::InvalidReference {
            field: "category_id",
            resource: "Category",
        }
        .into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.public_message(), "category_id refers to an unknown category");

        let err: AppError = StoreError::corrupt("Account", Uuid::nil(), "kind", "gold").into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message(), "An unexpected error occurred");
    }
}
