//! Headless Duel Simulator
//!
//! Pits two loadouts from the item catalog against each other over many
//! seeded duels and prints win rates as JSON or text.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use melee_combat::combat::{
    CombatContext, CombatResolver, MeleeResolver, MessageSink, NullSink, Stance, TracingSink,
};
use melee_combat::core::{MeleeConfig, Result, SeededDice};
use melee_combat::entity::Combatant;
use melee_combat::items::ItemCatalog;

/// Headless Duel Simulator - compare melee loadouts
#[derive(Parser, Debug)]
#[command(name = "duel_sim")]
#[command(about = "Run seeded melee duels between two loadouts and report win rates")]
struct Args {
    /// Items for the red side, by catalog name (repeat the flag)
    #[arg(long, default_values_t = vec!["long sword".to_string(), "kite shield".to_string()])]
    red: Vec<String>,

    /// Items for the blue side, by catalog name (repeat the flag)
    #[arg(long, default_values_t = vec!["greatsword".to_string()])]
    blue: Vec<String>,

    #[arg(long, default_value = "balanced")]
    red_stance: Stance,

    #[arg(long, default_value = "balanced")]
    blue_stance: Stance,

    /// Starting HP for both sides
    #[arg(long, default_value_t = 40)]
    hp: i32,

    /// Number of duels to run
    #[arg(long, default_value_t = 100)]
    duels: u32,

    /// Attacks per duel before it is called a draw
    #[arg(long, default_value_t = 200)]
    max_attacks: u32,

    /// Item catalog (TOML)
    #[arg(long, default_value = "data/items.toml")]
    items: PathBuf,

    /// Melee tuning (TOML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Log every swing
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Print the catalog's item names and exit
    #[arg(long)]
    list_items: bool,
}

/// JSON output structure
#[derive(Serialize, Default)]
struct DuelSummary {
    red: Vec<String>,
    blue: Vec<String>,
    duels: u32,
    red_wins: u32,
    blue_wins: u32,
    draws: u32,
    average_attacks: f32,
    red_damage_dealt: i64,
    blue_damage_dealt: i64,
    seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Winner {
    Red,
    Blue,
    Draw,
}

fn build_side(
    catalog: &ItemCatalog,
    name: &str,
    items: &[String],
    stance: Stance,
    hp: i32,
) -> Result<Combatant> {
    let mut combatant = Combatant::new(name, hp).with_stance(stance);
    for item in items {
        combatant = combatant.with_item(catalog.instantiate(item)?)?;
    }
    Ok(combatant)
}

/// Run one duel; whoever has spent less action time acts next
fn run_duel(
    resolver: &MeleeResolver,
    ctx: &mut CombatContext<'_>,
    red: &mut Combatant,
    blue: &mut Combatant,
    max_attacks: u32,
    summary: &mut DuelSummary,
) -> Result<(Winner, u32)> {
    for attacks in 1..=max_attacks {
        let red_turn = red.action_timer <= blue.action_timer;
        let (attacker, defender) = if red_turn {
            (&mut *red, &mut *blue)
        } else {
            (&mut *blue, &mut *red)
        };

        let report = resolver.resolve(ctx, attacker, defender)?;
        if !report.attacked() {
            // Nothing to swing with: spend the time anyway so the duel moves on
            let ticks = resolver.attack_time(attacker);
            attacker.consume_action_time(ticks);
        }
        attacker.tick_status_effects();

        let dealt = i64::from(report.total_damage());
        if red_turn {
            summary.red_damage_dealt += dealt;
        } else {
            summary.blue_damage_dealt += dealt;
        }

        match (red.is_dead(), blue.is_dead()) {
            (false, false) => {}
            (true, true) => return Ok((Winner::Draw, attacks)),
            (true, false) => return Ok((Winner::Blue, attacks)),
            (false, true) => return Ok((Winner::Red, attacks)),
        }
    }
    Ok((Winner::Draw, max_attacks))
}

fn run(args: &Args) -> Result<DuelSummary> {
    let config = match &args.config {
        Some(path) => MeleeConfig::load(path)?,
        None => MeleeConfig::default(),
    };
    let catalog = ItemCatalog::load(&args.items)?;
    let resolver = MeleeResolver::new(config);

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut dice = SeededDice::new(seed);
    let mut sink: Box<dyn MessageSink> = if args.verbose {
        Box::new(TracingSink)
    } else {
        Box::new(NullSink)
    };
    let mut ctx = CombatContext::new(&mut dice, sink.as_mut());

    let mut summary = DuelSummary {
        red: args.red.clone(),
        blue: args.blue.clone(),
        duels: args.duels,
        seed,
        ..Default::default()
    };
    let mut total_attacks = 0u64;

    for duel in 0..args.duels {
        let mut red = build_side(&catalog, "red", &args.red, args.red_stance, args.hp)?;
        let mut blue = build_side(&catalog, "blue", &args.blue, args.blue_stance, args.hp)?;

        let (winner, attacks) = run_duel(
            &resolver,
            &mut ctx,
            &mut red,
            &mut blue,
            args.max_attacks,
            &mut summary,
        )?;
        tracing::debug!("duel {}: {:?} after {} attacks", duel, winner, attacks);

        total_attacks += u64::from(attacks);
        match winner {
            Winner::Red => summary.red_wins += 1,
            Winner::Blue => summary.blue_wins += 1,
            Winner::Draw => summary.draws += 1,
        }
    }

    if args.duels > 0 {
        summary.average_attacks = total_attacks as f32 / args.duels as f32;
    }
    Ok(summary)
}

fn list_items(path: &std::path::Path) -> Result<()> {
    let catalog = ItemCatalog::load(path)?;
    let mut names: Vec<&str> = catalog.names().collect();
    names.sort_unstable();
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn print_text(summary: &DuelSummary) {
    let rate = |wins: u32| {
        if summary.duels == 0 {
            0.0
        } else {
            wins as f32 * 100.0 / summary.duels as f32
        }
    };

    println!("Duel Result");
    println!("===========");
    println!("Red:  {}", summary.red.join(", "));
    println!("Blue: {}", summary.blue.join(", "));
    println!();
    println!("Duels: {}", summary.duels);
    println!("Red wins: {} ({:.1}%)", summary.red_wins, rate(summary.red_wins));
    println!("Blue wins: {} ({:.1}%)", summary.blue_wins, rate(summary.blue_wins));
    println!("Draws: {}", summary.draws);
    println!("Average attacks per duel: {:.1}", summary.average_attacks);
    println!(
        "Damage dealt: red {} / blue {}",
        summary.red_damage_dealt, summary.blue_damage_dealt
    );
    println!("Seed: {}", summary.seed);
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("melee_combat=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.list_items {
        return match list_items(&args.items) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("duel_sim: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let summary = match run(&args) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("duel_sim: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match args.format.as_str() {
        "text" => print_text(&summary),
        other => {
            if other != "json" {
                eprintln!("Unknown format '{}', defaulting to json", other);
            }
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("duel_sim: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }
    ExitCode::SUCCESS
}
