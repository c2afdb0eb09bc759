//! The closed spell catalog: costs, durations, and effect application.
//!
//! The five spells are a fixed, non-extensible set, so the catalog is a
//! tagged enum with per-variant data rather than trait objects. Costs and
//! durations are compile-time constants; effect application matches on the
//! variant.

use strum::IntoEnumIterator;

use crate::error::UnknownSpell;
use crate::state::{Boss, Wizard};

/// A castable spell.
///
/// Stable string identifiers (CLI input, logs) use snake_case, e.g.
/// `magic_missile`, and parse case-insensitively.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Spell {
    /// Instant: 4 damage to the boss.
    MagicMissile,
    /// Instant: 2 damage to the boss, heals the wizard for 2.
    Drain,
    /// Timed: +7 armor while active, reverted when the effect expires.
    Shield,
    /// Timed: 3 damage to the boss per tick.
    Poison,
    /// Timed: +101 mana per tick.
    Recharge,
}

/// Catalog entry for one spell: what it costs and how long it stays active.
///
/// `duration == 0` marks an instant spell, resolved once at cast time and
/// never registered as an active effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellSpec {
    /// Mana deducted from the wizard when the spell is cast.
    pub mana_cost: u32,
    /// Number of turns the effect ticks after casting.
    pub duration: u8,
}

impl Spell {
    /// Number of spells in the catalog.
    pub const COUNT: usize = 5;

    /// Returns the catalog entry for this spell.
    pub const fn spec(self) -> SpellSpec {
        match self {
            Spell::MagicMissile => SpellSpec {
                mana_cost: 53,
                duration: 0,
            },
            Spell::Drain => SpellSpec {
                mana_cost: 73,
                duration: 0,
            },
            Spell::Shield => SpellSpec {
                mana_cost: 113,
                duration: 6,
            },
            Spell::Poison => SpellSpec {
                mana_cost: 173,
                duration: 6,
            },
            Spell::Recharge => SpellSpec {
                mana_cost: 229,
                duration: 5,
            },
        }
    }

    /// Shorthand for the catalog mana cost.
    pub const fn mana_cost(self) -> u32 {
        self.spec().mana_cost
    }

    /// All spells in catalog (declaration) order.
    pub fn all() -> impl Iterator<Item = Spell> {
        Self::iter()
    }

    /// Parses a string identifier, e.g. `poison` or `magic_missile`.
    pub fn parse(name: &str) -> Result<Self, UnknownSpell> {
        name.parse().map_err(|_| UnknownSpell {
            name: name.to_owned(),
        })
    }

    /// One-time effect applied when the spell is cast.
    pub(crate) fn cast(self, wizard: &mut Wizard, boss: &mut Boss) {
        match self {
            Spell::MagicMissile => boss.hit_points -= 4,
            Spell::Drain => {
                boss.hit_points -= 2;
                wizard.hit_points += 2;
            }
            Spell::Shield => wizard.armor += 7,
            Spell::Poison | Spell::Recharge => {}
        }
    }

    /// Per-turn effect applied on each tick while the spell is active.
    pub(crate) fn tick(self, wizard: &mut Wizard, boss: &mut Boss) {
        match self {
            Spell::Poison => boss.hit_points -= 3,
            Spell::Recharge => wizard.mana += 101,
            Spell::MagicMissile | Spell::Drain | Spell::Shield => {}
        }
    }

    /// Effect applied once on the tick that exhausts the remaining turns.
    pub(crate) fn expire(self, wizard: &mut Wizard, _boss: &mut Boss) {
        match self {
            Spell::Shield => wizard.armor = wizard.armor.saturating_sub(7),
            Spell::MagicMissile | Spell::Drain | Spell::Poison | Spell::Recharge => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_costs_and_durations() {
        assert_eq!(Spell::MagicMissile.spec(), SpellSpec { mana_cost: 53, duration: 0 });
        assert_eq!(Spell::Drain.spec(), SpellSpec { mana_cost: 73, duration: 0 });
        assert_eq!(Spell::Shield.spec(), SpellSpec { mana_cost: 113, duration: 6 });
        assert_eq!(Spell::Poison.spec(), SpellSpec { mana_cost: 173, duration: 6 });
        assert_eq!(Spell::Recharge.spec(), SpellSpec { mana_cost: 229, duration: 5 });
    }

    #[test]
    fn catalog_order_is_stable() {
        let all: Vec<_> = Spell::all().collect();
        assert_eq!(
            all,
            [
                Spell::MagicMissile,
                Spell::Drain,
                Spell::Shield,
                Spell::Poison,
                Spell::Recharge,
            ]
        );
        assert_eq!(all.len(), Spell::COUNT);
    }

    #[test]
    fn identifiers_round_trip_case_insensitively() {
        assert_eq!(Spell::MagicMissile.to_string(), "magic_missile");
        assert_eq!(Spell::parse("magic_missile"), Ok(Spell::MagicMissile));
        assert_eq!(Spell::parse("POISON"), Ok(Spell::Poison));
        assert_eq!(Spell::parse("Recharge"), Ok(Spell::Recharge));
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = Spell::parse("fireball").unwrap_err();
        assert_eq!(err.name, "fireball");
    }
}
