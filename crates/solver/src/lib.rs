//! Breadth-first enumeration of winning spell sequences.
//!
//! The search grows candidate sequences one spell at a time, replaying every
//! prefix from scratch with [`Duel::resolve`]. Branches that lose or break a
//! rule are discarded; branches that merely run out of spells are extended
//! with every spell still affordable from the final state's mana. The
//! frontier is an explicit queue, so termination follows from affordability:
//! every extension must be paid for out of a finite mana budget, and losing
//! branches are cut by the boss's guaranteed damage per round.
//!
//! Sequences are emitted in breadth order, not cost order; callers wanting
//! the cheapest victory scan the whole enumeration (see
//! [`cheapest_victory`]).

use std::collections::VecDeque;

use duel_core::{Boss, CombatState, Duel, Outcome, Spell, Wizard};

/// A winning spell sequence together with its match's final state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The full sequence as explored; a timed effect can finish the boss
    /// with trailing spells still queued and uncast.
    pub spells: Vec<Spell>,
    /// The winning classification (`CastKillsBoss` or `EffectKillsBoss`).
    pub outcome: Outcome,
    pub state: CombatState,
}

impl Solution {
    /// Total mana spent on casts over the winning match.
    pub fn mana_spent(&self) -> u32 {
        self.state.mana_spent
    }
}

/// Defects surfaced by the search.
///
/// Game conditions (duplicate casts, exhausted mana, a boss victory) are
/// never errors; they steer the traversal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The engine produced a terminal classification this search does not
    /// recognize. Indicates a missing branch in the outcome handling, not a
    /// game condition.
    #[error("unsupported combat outcome '{0}'")]
    UnsupportedOutcome(Outcome),
}

/// Lazy breadth-first traversal over spell sequences.
///
/// Created by [`winning_sequences`]. Each call performs its own independent
/// traversal; the iterator is not restartable. After yielding an error the
/// iterator is fused.
pub struct WinningSequences {
    duel: Duel,
    queue: VecDeque<Vec<Spell>>,
    fused: bool,
}

/// Enumerates every spell sequence that defeats the boss, lazily.
///
/// The queue is seeded with the five length-1 sequences in catalog order.
/// The enumeration is finite, deterministic given its inputs, and complete
/// under affordability pruning: every reachable winning sequence is
/// eventually emitted.
pub fn winning_sequences(wizard: Wizard, boss: Boss) -> WinningSequences {
    WinningSequences {
        duel: Duel::new(wizard, boss),
        queue: Spell::all().map(|spell| vec![spell]).collect(),
        fused: false,
    }
}

impl Iterator for WinningSequences {
    type Item = Result<Solution, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }

        while let Some(spells) = self.queue.pop_front() {
            let result = self.duel.resolve(&spells);
            match result.outcome {
                Outcome::CastKillsBoss | Outcome::EffectKillsBoss => {
                    tracing::debug!(
                        ?spells,
                        mana_spent = result.state.mana_spent,
                        "winning sequence found"
                    );
                    return Some(Ok(Solution {
                        spells,
                        outcome: result.outcome,
                        state: result.state,
                    }));
                }
                Outcome::DuplicateSpell | Outcome::OutOfMana | Outcome::BossKillsWizard => {
                    // Dead branch.
                }
                Outcome::OutOfSpells => {
                    // The sole branching point: extend by every spell still
                    // affordable from the final mana. Unaffordable spells
                    // are pruned here instead of failing a replay later.
                    for spell in affordable(result.state.wizard.mana) {
                        let mut extended = Vec::with_capacity(spells.len() + 1);
                        extended.extend_from_slice(&spells);
                        extended.push(spell);
                        self.queue.push_back(extended);
                    }
                    tracing::trace!(frontier = self.queue.len(), depth = spells.len(), "extended");
                }
                outcome => {
                    self.fused = true;
                    return Some(Err(SearchError::UnsupportedOutcome(outcome)));
                }
            }
        }

        None
    }
}

/// Spells castable with `mana` available, in catalog order.
fn affordable(mana: u32) -> impl Iterator<Item = Spell> {
    Spell::all().filter(move |spell| spell.mana_cost() <= mana)
}

/// Scans the complete enumeration and keeps the cheapest win by total mana.
///
/// Returns `Ok(None)` when no winning sequence exists for the
/// configuration.
pub fn cheapest_victory(wizard: Wizard, boss: Boss) -> Result<Option<Solution>, SearchError> {
    let mut best: Option<Solution> = None;
    for solution in winning_sequences(wizard, boss) {
        let solution = solution?;
        if best
            .as_ref()
            .map_or(true, |b| solution.mana_spent() < b.mana_spent())
        {
            best = Some(solution);
        }
    }

    if let Some(ref solution) = best {
        tracing::debug!(mana_spent = solution.mana_spent(), "cheapest victory");
    }
    Ok(best)
}
