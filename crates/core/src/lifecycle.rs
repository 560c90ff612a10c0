//! Archive / restore / delete state machine.
//!
//! ```text
//! Active --archive--> Archived --restore--> Active
//! Active | Archived --delete--> (removed)
//! ```
//!
//! Archive and restore are no-ops when the record is already in the target
//! state. Delete always removes; deleting a removed record is the store's
//! `NotFound`, so delete is never idempotent.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordState {
    /// Visible in default listings.
    Active,
    /// Soft-deleted; only visible in archived listings.
    Archived,
}

impl RecordState {
    /// Maps the stored `is_deleted` flag to a state.
    #[must_use]
    pub const fn from_flag(is_deleted: bool) -> Self {
        if is_deleted { Self::Archived } else { Self::Active }
    }

    /// Returns the stored `is_deleted` flag for this state.
    #[must_use]
    pub const fn flag(self) -> bool {
        matches!(self, Self::Archived)
    }
}

/// A lifecycle operation requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleAction {
    /// Soft-delete.
    Archive,
    /// Undo a soft-delete.
    Restore,
    /// Permanent removal.
    Delete,
}

impl LifecycleAction {
    /// Past-tense verb used in responses and logs.
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Archive => "archived",
            Self::Restore => "restored",
            Self::Delete => "deleted",
        }
    }
}

/// What the store must do to apply an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Leave the record untouched (including `updated_at`).
    Unchanged,
    /// Move the record to the given state and refresh `updated_at`.
    Move(RecordState),
    /// Remove the record permanently.
    Remove,
}

/// Computes the transition for `action` applied to a record in `state`.
#[must_use]
pub const fn transition(state: RecordState, action: LifecycleAction) -> Transition {
    match (state, action) {
        (RecordState::Active, LifecycleAction::Archive) => Transition::Move(RecordState::Archived),
        (RecordState::Archived, LifecycleAction::Restore) => Transition::Move(RecordState::Active),
        (RecordState::Archived, LifecycleAction::Archive)
        | (RecordState::Active, LifecycleAction::Restore) => Transition::Unchanged,
        (_, LifecycleAction::Delete) => Transition::Remove,
    }
}

/// Which half of a user's records a listing returns. Never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListScope {
    /// Only records that are not archived.
    #[default]
    Active,
    /// Only archived records.
    Archived,
}

impl ListScope {
    /// The `is_deleted` value every listed record must have.
    #[must_use]
    pub const fn is_deleted(self) -> bool {
        matches!(self, Self::Archived)
    }

    /// Whether a record in `state` belongs to this scope.
    #[must_use]
    pub const fn includes(self, state: RecordState) -> bool {
        self.is_deleted() == state.flag()
    }
}

/// Records carrying the soft-delete flag.
pub trait SoftDeletable {
    /// Stored archived flag.
    fn is_deleted(&self) -> bool;

    /// Current lifecycle state.
    fn state(&self) -> RecordState {
        RecordState::from_flag(self.is_deleted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_transition_table() {
        use LifecycleAction::{Archive, Delete, Restore};
        use RecordState::{Active, Archived};

        assert_eq!(transition(Active, Archive), Transition::Move(Archived));
        assert_eq!(transition(Archived, Archive), Transition::Unchanged);
        assert_eq!(transition(Archived, Restore), Transition::Move(Active));
        assert_eq!(transition(Active, Restore), Transition::Unchanged);
        assert_eq!(transition(Active, Delete), Transition::Remove);
        assert_eq!(transition(Archived, Delete), Transition::Remove);
    }

    #[test]
    fn test_flag_mapping() {
        assert_eq!(RecordState::from_flag(false), RecordState::Active);
        assert_eq!(RecordState::from_flag(true), RecordState::Archived);
        assert!(!RecordState::Active.flag());
        assert!(RecordState::Archived.flag());
    }

    fn state_strategy() -> impl Strategy<Value = RecordState> {
        prop_oneof![Just(RecordState::Active), Just(RecordState::Archived)]
    }

    fn action_strategy() -> impl Strategy<Value = LifecycleAction> {
        prop_oneof![
            Just(LifecycleAction::Archive),
            Just(LifecycleAction::Restore),
            Just(LifecycleAction::Delete),
        ]
    }

    proptest! {
        /// A record is listed in exactly one scope, whatever its state.
        #[test]
        fn prop_scopes_partition_states(state in state_strategy()) {
            prop_assert!(ListScope::Active.includes(state) ^ ListScope::Archived.includes(state));
        }

        /// Folding any sequence of archive/restore actions ends in the state of the last action.
        #[test]
        fn prop_last_toggle_wins(
            start in state_strategy(),
            actions in proptest::collection::vec(
                prop_oneof![Just(LifecycleAction::Archive), Just(LifecycleAction::Restore)],
                1..20,
            ),
        ) {
            let mut state = start;
            for action in &actions {
                if let Transition::Move(next) = transition(state, *action) {
                    state = next;
                }
            }
            let expected = match actions.last() {
                Some(LifecycleAction::Archive) => RecordState::Archived,
                _ => RecordState::Active,
            };
            prop_assert_eq!(state, expected);
        }

        /// Only real state changes move a record.
        #[test]
        fn prop_move_changes_state(state in state_strategy(), action in action_strategy()) {
            if let Transition::Move(next) = transition(state, action) {
                prop_assert_ne!(next, state);
            }
        }
    }
}
