//! Command-line caller for the duel engine and solver.
//!
//! Owns what the library crates deliberately do not: stat configuration,
//! spell-name parsing, result presentation, and the reduction of the
//! solver's emissions to the cheapest victory.

use anyhow::{Result, bail};
use clap::Parser;
use duel_core::{Boss, Duel, Spell, Wizard};
use duel_solver::cheapest_victory;

/// Wizard duel simulator and minimum-mana solver
#[derive(Parser)]
#[command(name = "wizard-duel")]
#[command(about = "Simulate wizard-versus-boss duels and search for the cheapest victory", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Search every viable spell sequence for the cheapest victory
    Solve(Solve),

    /// Replay a fixed spell sequence and report the outcome
    Simulate(Simulate),
}

/// Duel configuration shared by both subcommands.
///
/// Defaults are the reference duel this solver was written for.
#[derive(clap::Args)]
struct Stats {
    /// Wizard hit points
    #[arg(long, default_value_t = 50)]
    wizard_hp: i32,

    /// Wizard mana pool
    #[arg(long, default_value_t = 500)]
    mana: u32,

    /// Wizard armor bonus
    #[arg(long, default_value_t = 0)]
    armor: u32,

    /// Boss hit points
    #[arg(long, default_value_t = 71)]
    boss_hp: i32,

    /// Boss attack damage
    #[arg(long, default_value_t = 10)]
    boss_damage: u32,
}

impl Stats {
    fn parties(&self) -> (Wizard, Boss) {
        (
            Wizard::new(self.wizard_hp, self.mana, self.armor),
            Boss::new(self.boss_hp, self.boss_damage),
        )
    }
}

#[derive(Parser)]
struct Solve {
    #[command(flatten)]
    stats: Stats,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct Simulate {
    #[command(flatten)]
    stats: Stats,

    /// Comma-separated spell sequence, e.g. poison,magic_missile
    #[arg(long, value_delimiter = ',', required = true)]
    cast: Vec<String>,
}

impl Solve {
    fn execute(self) -> Result<()> {
        let (wizard, boss) = self.stats.parties();
        tracing::info!(?wizard, ?boss, "searching for the cheapest victory");

        let Some(solution) = cheapest_victory(wizard, boss)? else {
            bail!("no winning sequence exists for this configuration");
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&solution)?);
        } else {
            let sequence = solution
                .spells
                .iter()
                .map(|spell| spell.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            println!("cheapest victory: {} mana", solution.mana_spent());
            println!("sequence: {sequence}");
            println!("outcome: {}", solution.outcome);
        }
        Ok(())
    }
}

impl Simulate {
    fn execute(self) -> Result<()> {
        let spells = self
            .cast
            .iter()
            .map(|name| Spell::parse(name))
            .collect::<Result<Vec<_>, _>>()?;

        let (wizard, boss) = self.stats.parties();
        let result = Duel::new(wizard, boss).resolve(&spells);

        println!("outcome: {}", result.outcome);
        println!("mana spent: {}", result.state.mana_spent);
        println!(
            "wizard: {} hp, {} mana, {} armor",
            result.state.wizard.hit_points, result.state.wizard.mana, result.state.wizard.armor
        );
        println!("boss: {} hp", result.state.boss.hit_points);
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
    }
}
