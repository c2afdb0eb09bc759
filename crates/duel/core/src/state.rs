//! Per-match combat state: parties, active timed effects, turn bookkeeping.
//!
//! A [`CombatState`] is created fresh for every replay and mutated
//! exclusively by the engine. It is never persisted or shared across
//! matches, which keeps each replay a pure function of its inputs.

use arrayvec::ArrayVec;

use crate::spellbook::Spell;

/// Wizard-side configuration and live resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wizard {
    /// Remaining hit points. The wizard is defeated at zero or below.
    pub hit_points: i32,
    /// Remaining mana pool.
    pub mana: u32,
    /// Current armor bonus, subtracted from the boss's attack damage.
    pub armor: u32,
}

impl Wizard {
    pub const fn new(hit_points: i32, mana: u32, armor: u32) -> Self {
        Self {
            hit_points,
            mana,
            armor,
        }
    }

    pub const fn is_defeated(&self) -> bool {
        self.hit_points <= 0
    }
}

/// Boss-side configuration and live resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boss {
    /// Remaining hit points. The boss is defeated at zero or below.
    pub hit_points: i32,
    /// Flat attack damage before armor reduction.
    pub damage: u32,
}

impl Boss {
    pub const fn new(hit_points: i32, damage: u32) -> Self {
        Self { hit_points, damage }
    }

    pub const fn is_defeated(&self) -> bool {
        self.hit_points <= 0
    }
}

/// Which side acts in the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Wizard,
    Boss,
}

impl Side {
    /// The side that acts next.
    pub const fn other(self) -> Side {
        match self {
            Side::Wizard => Side::Boss,
            Side::Boss => Side::Wizard,
        }
    }
}

/// One active timed effect: the spell and its remaining turns.
///
/// `remaining` is at least 1 while the entry exists; the tick that brings it
/// to zero fires the spell's expiry effect and drops the entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffect {
    pub spell: Spell,
    pub remaining: u8,
}

/// The set of currently active timed effects.
///
/// At most one entry per spell at any time; re-casting a spell with a live
/// entry is an illegal move, enforced by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffects {
    entries: ArrayVec<ActiveEffect, { Spell::COUNT }>,
}

impl ActiveEffects {
    /// Creates an empty effect set.
    pub fn empty() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    /// Checks whether the spell currently has a live effect.
    pub fn is_active(&self, spell: Spell) -> bool {
        self.entries.iter().any(|e| e.spell == spell)
    }

    /// Turns left before the spell's effect expires, if it is active.
    pub fn remaining(&self, spell: Spell) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.spell == spell)
            .map(|e| e.remaining)
    }

    /// Returns an iterator over all active effects in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.entries.iter()
    }

    /// Returns true if no effects are active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers a fresh effect.
    ///
    /// The caller must have rejected duplicate casts already; `remaining`
    /// must be nonzero.
    pub(crate) fn add(&mut self, spell: Spell, remaining: u8) {
        debug_assert!(!self.is_active(spell), "duplicate active effect");
        debug_assert!(remaining > 0, "timed effect with zero duration");
        self.entries.push(ActiveEffect { spell, remaining });
    }

    /// Ticks every active effect once, in registration order.
    ///
    /// Applies the per-turn effect, decrements the counter, and on the tick
    /// that reaches zero fires the expiry effect and drops the entry.
    pub(crate) fn tick_all(&mut self, wizard: &mut Wizard, boss: &mut Boss) {
        for entry in self.entries.iter_mut() {
            entry.spell.tick(wizard, boss);
            entry.remaining -= 1;
            if entry.remaining == 0 {
                entry.spell.expire(wizard, boss);
            }
        }
        self.entries.retain(|e| e.remaining > 0);
    }
}

/// Snapshot of one in-progress match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    /// Whose turn the current round belongs to.
    pub side: Side,
    pub wizard: Wizard,
    pub boss: Boss,
    /// Cumulative mana spent on casts over the whole match.
    pub mana_spent: u32,
    /// Active timed effects with their remaining turns.
    pub effects: ActiveEffects,
}

impl CombatState {
    /// Creates the round-zero state for a fresh match. The wizard acts first.
    ///
    /// Configurations are copied in, so repeated matches from the same
    /// configs never share mutable state.
    pub fn new(wizard: Wizard, boss: Boss) -> Self {
        Self {
            side: Side::Wizard,
            wizard,
            boss,
            mana_spent: 0,
            effects: ActiveEffects::empty(),
        }
    }

    /// Runs the effect phase for the current round.
    pub(crate) fn tick_effects(&mut self) {
        self.effects.tick_all(&mut self.wizard, &mut self.boss);
    }
}
