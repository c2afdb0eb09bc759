//! Error types for the duel rules.

/// A spell identifier outside the fixed catalog was requested.
///
/// This signals a configuration or input defect, never a game-state
/// condition: in-match situations (duplicate casts, exhausted mana) are
/// [`Outcome`](crate::Outcome) values, not errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown spell '{name}'")]
pub struct UnknownSpell {
    /// The identifier as it was requested.
    pub name: String,
}
