//! Command-line runner.
//!
//! Loads a map, assigns a policy to every agent, runs the simulation and
//! prints a match summary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::error;

use raycast_arena::agents::{Agent, DummyAgent, IdleAgent, RandomAgent};
use raycast_arena::config::GameConfig;
use raycast_arena::game::systems::{ConsoleRenderer, NullRenderer, RenderEngine};
use raycast_arena::game::{GameError, GameMap, GameState};
use raycast_arena::session::{MatchSummary, Simulation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Policy {
    Idle,
    Random,
    Dummy,
}

#[derive(Parser)]
#[command(name = "raycast-arena")]
#[command(about = "Run a grid combat simulation between ray-casting agents")]
struct Args {
    /// Path to the map file
    map: PathBuf,

    /// JSON file overriding the default game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks (overrides the config)
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Policy used by agents whose team has no explicit policy
    #[arg(long, value_enum, default_value_t = Policy::Dummy)]
    policy: Policy,

    /// Per-team policy, e.g. `--team-policy R=random` (repeatable)
    #[arg(long = "team-policy", value_parser = parse_team_policy)]
    team_policies: Vec<(char, Policy)>,

    /// Seed for the agents' random choices
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Do not draw the map after each tick
    #[arg(long)]
    quiet: bool,

    /// Print the match summary as JSON
    #[arg(long)]
    json: bool,
}

fn parse_team_policy(value: &str) -> Result<(char, Policy), String> {
    let (team, policy) = value
        .split_once('=')
        .ok_or_else(|| format!("expected TEAM=POLICY, got `{value}`"))?;
    let mut chars = team.chars();
    let team = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(format!("team must be a single character, got `{team}`")),
    };
    let policy = Policy::from_str(policy, true)?;
    Ok((team, policy))
}

fn build_agents(state: &GameState, args: &Args) -> Vec<Box<dyn Agent>> {
    let history_len = state.config.last_actions_len;
    state
        .map
        .players
        .values()
        .enumerate()
        .map(|(i, player)| {
            let policy = args
                .team_policies
                .iter()
                .rev()
                .find(|(team, _)| *team == player.team)
                .map_or(args.policy, |(_, policy)| *policy);
            let id = player.player_id.clone();
            let seed = args.seed.wrapping_add(i as u64);
            let agent: Box<dyn Agent> = match policy {
                Policy::Idle => Box::new(IdleAgent::new(id, history_len)),
                Policy::Random => Box::new(RandomAgent::new(id, history_len, seed)),
                Policy::Dummy => Box::new(DummyAgent::new(id, history_len, seed)),
            };
            agent
        })
        .collect()
}

fn run(args: &Args) -> Result<MatchSummary, GameError> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(max_ticks) = args.max_ticks {
        config.max_ticks = max_ticks;
    }

    let map = GameMap::from_file(&args.map)?;
    let state = GameState::new(map, config)?;
    let agents = build_agents(&state, args);
    let renderer: Box<dyn RenderEngine> = if args.quiet {
        Box::new(NullRenderer)
    } else {
        Box::new(ConsoleRenderer)
    };

    Simulation::new(state, agents, renderer).run()
}

fn print_summary(summary: &MatchSummary) {
    println!("=== MATCH SUMMARY ===");
    println!("  Ticks:     {}", summary.ticks);
    match summary.winner {
        Some(team) => println!("  Winner:    team {team}"),
        None => println!("  Winner:    none"),
    }
    println!("  Survivors: {}", summary.survivors.len());
    for (shooter, victims) in summary.kills.iter().filter(|(_, v)| !v.is_empty()) {
        println!("  {shooter}: {} kill(s)", victims.len());
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(summary) => {
            if args.json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        error!("Failed to serialize summary: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_summary(&summary);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
