//! Full-match replay: effect phase, action phase, terminal classification.
//!
//! The engine replays a complete match from scratch on every invocation
//! rather than mutating a long-lived shared state. Each call owns a fresh
//! [`CombatState`], so `resolve` is a pure function of the initial
//! configuration and the spell sequence.

use crate::spellbook::Spell;
use crate::state::{Boss, CombatState, Side, Wizard};

/// Why a replay stopped.
///
/// These are game conditions, not errors: the solver consumes them as
/// control data. Marked non-exhaustive because the rule set has a known
/// extension point (a harder difficulty with per-turn self-damage), so
/// downstream matches must keep a defect arm.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// A timed effect's tick brought the boss to zero before the acting
    /// side moved.
    EffectKillsBoss,
    /// The wizard's cast brought the boss to zero.
    CastKillsBoss,
    /// The boss's attack brought the wizard to zero.
    BossKillsWizard,
    /// The spell sequence ran out before either side was defeated.
    OutOfSpells,
    /// The next spell in the sequence still has a live effect.
    DuplicateSpell,
    /// The next spell costs more mana than the wizard has.
    OutOfMana,
}

impl Outcome {
    /// True when the boss is defeated, i.e. the sequence is a winning one.
    pub const fn is_victory(self) -> bool {
        matches!(self, Outcome::EffectKillsBoss | Outcome::CastKillsBoss)
    }
}

/// Result of replaying one spell sequence to its terminal condition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelResult {
    pub outcome: Outcome,
    /// The state at the moment the terminal condition was detected.
    pub state: CombatState,
}

/// Replays complete matches from a fixed initial configuration.
#[derive(Clone, Copy, Debug)]
pub struct Duel {
    wizard: Wizard,
    boss: Boss,
}

impl Duel {
    pub const fn new(wizard: Wizard, boss: Boss) -> Self {
        Self { wizard, boss }
    }

    /// Replays `spells` from a fresh state until a terminal condition.
    ///
    /// One round runs the effect phase first, on both sides' turns: a timed
    /// effect's final tick can end the match before the acting side moves.
    /// The wizard consumes one spell per wizard turn, in order; the boss
    /// attacks for `max(1, damage - armor)` on its turn.
    pub fn resolve(&self, spells: &[Spell]) -> DuelResult {
        let mut state = CombatState::new(self.wizard, self.boss);
        let mut sequence = spells.iter().copied();

        let outcome = loop {
            // Effect phase runs before either side acts.
            state.tick_effects();
            if state.boss.is_defeated() {
                break Outcome::EffectKillsBoss;
            }

            match state.side {
                Side::Wizard => {
                    let Some(spell) = sequence.next() else {
                        break Outcome::OutOfSpells;
                    };
                    if state.effects.is_active(spell) {
                        break Outcome::DuplicateSpell;
                    }
                    let spec = spell.spec();
                    if spec.mana_cost > state.wizard.mana {
                        break Outcome::OutOfMana;
                    }

                    state.wizard.mana -= spec.mana_cost;
                    state.mana_spent += spec.mana_cost;
                    spell.cast(&mut state.wizard, &mut state.boss);
                    if spec.duration > 0 {
                        state.effects.add(spell, spec.duration);
                    }

                    if state.boss.is_defeated() {
                        break Outcome::CastKillsBoss;
                    }
                }
                Side::Boss => {
                    let damage = state.boss.damage.saturating_sub(state.wizard.armor).max(1);
                    state.wizard.hit_points -= damage as i32;
                    if state.wizard.is_defeated() {
                        break Outcome::BossKillsWizard;
                    }
                }
            }

            state.side = state.side.other();
        };

        DuelResult { outcome, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spellbook::Spell::{Drain, MagicMissile, Poison, Recharge, Shield};

    fn reference_duel(boss_hp: i32) -> Duel {
        Duel::new(Wizard::new(10, 250, 0), Boss::new(boss_hp, 8))
    }

    #[test]
    fn poison_then_missile_wins_the_reference_duel() {
        let result = reference_duel(13).resolve(&[Poison, MagicMissile]);

        // The missile leaves the boss at 3 hp; the poison tick on the next
        // boss turn finishes it before the attack.
        assert_eq!(result.outcome, Outcome::EffectKillsBoss);
        assert!(result.outcome.is_victory());
        assert_eq!(result.state.mana_spent, 226);
        assert_eq!(result.state.wizard.hit_points, 2);
        assert_eq!(result.state.wizard.mana, 24);
        assert!(result.state.boss.is_defeated());
    }

    #[test]
    fn five_spell_rotation_wins_the_tougher_duel() {
        let spells = [Recharge, Shield, Drain, Poison, MagicMissile];
        let result = reference_duel(14).resolve(&spells);

        assert_eq!(result.outcome, Outcome::EffectKillsBoss);
        assert_eq!(result.state.mana_spent, 641);
        assert_eq!(result.state.wizard.hit_points, 1);
        assert_eq!(result.state.wizard.mana, 114);
        // Shield expired on the final wizard turn.
        assert_eq!(result.state.wizard.armor, 0);
        assert!(result.state.boss.is_defeated());
    }

    #[test]
    fn final_poison_tick_ends_the_match_before_the_queued_cast() {
        // The poison tick on the wizard's second turn zeroes the boss, so
        // the queued missile must never resolve and its mana is not spent.
        let duel = Duel::new(Wizard::new(10, 500, 0), Boss::new(6, 1));
        let result = duel.resolve(&[Poison, MagicMissile]);

        assert_eq!(result.outcome, Outcome::EffectKillsBoss);
        assert_eq!(result.state.mana_spent, 173);
        assert_eq!(result.state.wizard.mana, 327);
        assert_eq!(result.state.boss.hit_points, 0);
    }

    #[test]
    fn recasting_an_active_spell_is_an_illegal_move() {
        let duel = Duel::new(Wizard::new(50, 1000, 0), Boss::new(100, 1));
        let result = duel.resolve(&[Shield, Shield]);

        // Mana is plentiful; only the live effect makes the cast illegal.
        assert_eq!(result.outcome, Outcome::DuplicateSpell);
        assert_eq!(result.state.mana_spent, 113);
        assert!(result.state.effects.is_active(Shield));
    }

    #[test]
    fn instant_spells_may_repeat_back_to_back() {
        let duel = Duel::new(Wizard::new(50, 1000, 0), Boss::new(100, 1));
        let result = duel.resolve(&[Drain, Drain]);

        assert_eq!(result.outcome, Outcome::OutOfSpells);
        assert_eq!(result.state.boss.hit_points, 96);
        // +2 per drain, -1 per boss attack across two rounds.
        assert_eq!(result.state.wizard.hit_points, 52);
        assert!(result.state.effects.is_empty());
    }

    #[test]
    fn unaffordable_cast_stops_the_replay() {
        let duel = Duel::new(Wizard::new(50, 100, 0), Boss::new(100, 1));
        let result = duel.resolve(&[MagicMissile, MagicMissile]);

        assert_eq!(result.outcome, Outcome::OutOfMana);
        assert_eq!(result.state.mana_spent, 53);
        assert_eq!(result.state.wizard.mana, 47);
    }

    #[test]
    fn shield_reverts_exactly_once_on_expiry() {
        // Base armor 2 makes a missing or doubled reversion observable.
        let duel = Duel::new(Wizard::new(50, 1000, 2), Boss::new(100, 8));
        let result = duel.resolve(&[Shield, MagicMissile, MagicMissile, MagicMissile]);

        assert_eq!(result.outcome, Outcome::OutOfSpells);
        assert_eq!(result.state.wizard.armor, 2);
        assert!(!result.state.effects.is_active(Shield));
        // Three shielded attacks at 1 damage, one unshielded at 6.
        assert_eq!(result.state.wizard.hit_points, 41);
    }

    #[test]
    fn shield_raises_armor_while_active() {
        let duel = Duel::new(Wizard::new(50, 1000, 0), Boss::new(100, 8));
        let result = duel.resolve(&[Shield]);

        assert_eq!(result.outcome, Outcome::OutOfSpells);
        assert_eq!(result.state.wizard.armor, 7);
        assert_eq!(result.state.effects.remaining(Shield), Some(4));
    }

    #[test]
    fn recharge_adds_mana_on_exactly_five_ticks() {
        let duel = Duel::new(Wizard::new(50, 229, 0), Boss::new(100, 1));
        let spells = [Recharge, MagicMissile, MagicMissile, MagicMissile];
        let result = duel.resolve(&spells);

        assert_eq!(result.outcome, Outcome::OutOfSpells);
        // 229 spent on recharge, 505 gained over five ticks, 159 on missiles.
        assert_eq!(result.state.wizard.mana, 346);
        assert_eq!(result.state.mana_spent, 388);
        assert!(!result.state.effects.is_active(Recharge));
    }

    #[test]
    fn boss_damage_never_drops_below_one() {
        let duel = Duel::new(Wizard::new(3, 500, 20), Boss::new(100, 5));
        let result = duel.resolve(&[MagicMissile, MagicMissile, MagicMissile]);

        // Armor 20 swallows the attack, but each hit still lands for 1.
        assert_eq!(result.outcome, Outcome::BossKillsWizard);
        assert_eq!(result.state.wizard.hit_points, 0);
    }

    #[test]
    fn identical_inputs_replay_identically() {
        let duel = reference_duel(14);
        let spells = [Recharge, Shield, Drain, Poison, MagicMissile];

        assert_eq!(duel.resolve(&spells), duel.resolve(&spells));
    }
}
