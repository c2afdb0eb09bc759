//! Deterministic wizard-versus-boss duel rules.
//!
//! `duel-core` defines the canonical combat model: the closed spell catalog,
//! per-match state, and the replay engine that classifies a spell sequence
//! into a terminal outcome. All state mutation flows through
//! [`Duel::resolve`], and the solver and client crates depend on the types
//! re-exported here.
pub mod engine;
pub mod error;
pub mod spellbook;
pub mod state;

pub use engine::{Duel, DuelResult, Outcome};
pub use error::UnknownSpell;
pub use spellbook::{Spell, SpellSpec};
pub use state::{ActiveEffect, ActiveEffects, Boss, CombatState, Side, Wizard};
