// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for playing and simulating 220 rounds
// ═══════════════════════════════════════════════════════════════════════

use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use twotwenty_agents::AgentKind;
use twotwenty_engine::engine::{self, Action};
use twotwenty_engine::{cards, trick};
use twotwenty_engine::types::*;
use twotwenty_engine::visibility::{seat_view, SeatView};
use twotwenty_table::simulate::SEED_STRIDE;
use twotwenty_table::{simulate, ConfigError, StepOutcome, Table, TableConfig, TableError};

#[derive(Parser)]
#[command(name = "twotwenty", about = "220, the four-seat trick-taking card game")]
struct Cli {
    /// Log at info level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one round, watching the bots or sitting in seat 1
    Play {
        #[arg(short, long)]
        seed: Option<u64>,
        /// Rounds to deal in a row at the same table
        #[arg(short, long, default_value_t = 1)]
        rounds: usize,
        /// Read seat 1's moves from stdin
        #[arg(long)]
        human: bool,
        /// Real-time pause before each bot action
        #[arg(short, long)]
        delay_ms: Option<u64>,
        /// JSON table config
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Bot policy: "heuristic" or "random"
        #[arg(short, long)]
        agent: Option<AgentKind>,
    },
    /// Run many independent bot-only rounds in parallel
    Simulate {
        #[arg(short, long, default_value_t = 100)]
        rounds: usize,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long)]
        agent: Option<AgentKind>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default table config as JSON
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Play { seed, rounds, human, delay_ms, config, agent } => {
            let mut cfg = load_config(config.as_deref())?;
            if seed.is_some() {
                cfg.seed = seed;
            }
            if let Some(delay) = delay_ms {
                cfg.bot_delay_ms = delay;
            }
            if let Some(kind) = agent {
                cfg.agent = kind;
            }
            cmd_play(cfg, rounds, human)
        }
        Commands::Simulate { rounds, seed, agent, config, json } => {
            let mut cfg = load_config(config.as_deref())?;
            if let Some(kind) = agent {
                cfg.agent = kind;
            }
            cmd_simulate(&cfg, rounds, seed, json)
        }
        Commands::Config => cmd_config(),
    }
}

fn init_logging(verbose: bool, json: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&Path>) -> Result<TableConfig, ConfigError> {
    match path {
        Some(path) => TableConfig::load(path),
        None => Ok(TableConfig::default()),
    }
}

// ── play ───────────────────────────────────────────────────────────────

fn cmd_play(config: TableConfig, rounds: usize, human: bool) -> Result<(), Box<dyn Error>> {
    let config = if human { config } else { config.all_automated() };
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);

    println!("=== 220 ===\n");
    println!("seed={}, agent={}, delay={}ms\n", seed, config.agent, config.bot_delay_ms);

    let mut table = Table::from_config(&config, seed);
    let mut lines = io::stdin().lock().lines();
    let mut round = 1;

    loop {
        if table.state().is_finished() {
            print_result(table.state());
            if round >= rounds {
                return Ok(());
            }
            let next_seed = seed.wrapping_add(round as u64 * SEED_STRIDE);
            round += 1;
            println!("\n=== Round {round} (seed={next_seed}) ===\n");
            table.restart(next_seed);
            continue;
        }

        if let Some(seat) = table.awaiting_human() {
            let view = seat_view(table.state(), seat);
            print_prompt(&view);
            let Some(line) = lines.next() else {
                println!();
                info!("stdin closed, leaving the table");
                return Ok(());
            };
            let action = match parse_human_action(&line?, &view) {
                Ok(action) => action,
                Err(msg) => {
                    println!("  ✗ {msg}");
                    continue;
                }
            };
            let before = table.state().clone();
            match table.submit(seat, action) {
                Ok(()) => narrate(&before, table.state(), seat, action),
                Err(reason) => println!("  ✗ {reason}"),
            }
            continue;
        }

        let Some(due) = table.next_due() else {
            let state = table.state();
            return Err(TableError::Stuck { phase: state.phase, seat: state.current_seat }.into());
        };
        let wait = due.saturating_sub(table.clock_ms());
        if wait > 0 {
            std::thread::sleep(Duration::from_millis(wait));
        }
        let before = table.state().clone();
        match table.step() {
            Some(StepOutcome::Applied { seat, action }) => {
                narrate(&before, table.state(), seat, action);
            }
            Some(other) => debug!(?other, "queued action not applied"),
            None => {}
        }
    }
}

fn print_prompt(view: &SeatView) {
    println!();
    match view.phase {
        Phase::Bidding => {
            println!("Current bid: {}   Your hand ({} pts): {}", view.current_bid, cards::hand_points(&view.my_hand), show_cards(&view.my_hand));
            match (view.legal_bids.first(), view.legal_bids.last()) {
                (Some(lo), Some(hi)) => print!("Bid {lo}..{hi} in steps of {}, or 'pass': ", view.bid_rules.step),
                _ => print!("No raise left; type 'pass': "),
            }
        }
        Phase::SelectingTrump => {
            println!("You won the bid at {}. Your hand: {}", view.current_bid, show_cards(&view.my_hand));
            print!("Name trump (hearts, diamonds, clubs, spades): ");
        }
        Phase::Playing => {
            let trump = view.trump.map(|s| s.to_string()).unwrap_or_default();
            let on_table: Vec<String> = view
                .current_trick
                .iter()
                .map(|p| format!("{} {}", view.seat_names[p.played_by.index()], p.card))
                .collect();
            println!("Trump: {trump}   Table: [{}]", on_table.join(", "));
            for (i, card) in view.my_hand.iter().enumerate() {
                let mark = if view.legal_plays.contains(card) { "" } else { " (can't play)" };
                println!("  {}) {}{}", i + 1, card, mark);
            }
            print!("Card number: ");
        }
        Phase::Dealing | Phase::Finished => {}
    }
    io::stdout().flush().ok();
}

/// Turn a line of input into an action for the phase `view` is in.
/// Legality beyond parsing is left to the engine.
fn parse_human_action(line: &str, view: &SeatView) -> Result<Action, String> {
    let input = line.trim();
    match view.phase {
        Phase::Bidding => match input.to_ascii_lowercase().as_str() {
            "pass" | "p" | "0" => Ok(Action::Pass),
            other => other
                .parse::<u16>()
                .map(Action::Bid)
                .map_err(|_| format!("'{input}' is not a bid; enter a number or 'pass'")),
        },
        Phase::SelectingTrump => input
            .parse::<Suit>()
            .map(Action::SelectTrump)
            .map_err(|e| e.to_string()),
        Phase::Playing => {
            let n: usize = input
                .parse()
                .map_err(|_| format!("'{input}' is not a card number"))?;
            n.checked_sub(1)
                .and_then(|i| view.my_hand.get(i))
                .map(|&card| Action::PlayCard(card))
                .ok_or_else(|| format!("pick a card between 1 and {}", view.my_hand.len()))
        }
        Phase::Dealing | Phase::Finished => Err("nothing to do right now".into()),
    }
}

fn narrate(before: &RoundState, after: &RoundState, seat: SeatId, action: Action) {
    let name = &after.seat(seat).name;
    match action {
        Action::Bid(value) if value > 0 => println!("{name}: bids {value}"),
        Action::Bid(_) | Action::Pass => println!("{name}: passes"),
        Action::SelectTrump(suit) => println!("{name}: names {suit} trump"),
        Action::PlayCard(card) => println!("{name}: plays {card}"),
    }

    if before.phase == Phase::Bidding && after.phase != Phase::Bidding {
        if let Some(winner) = after.bid_winner {
            println!("-- {} wins the bid at {}", after.seat(winner).name, after.current_bid);
        }
    }
    if before.trump.is_none() {
        if let (Some(trump), Some(winner)) = (after.trump, after.bid_winner) {
            if !matches!(action, Action::SelectTrump(_)) {
                println!("-- {} names {} trump", after.seat(winner).name, trump);
            }
        }
    }
    if after.tricks.len() > before.tricks.len() {
        if let Some(last) = after.tricks.last() {
            println!("-- {} takes the trick ({} pts)\n", after.current().name, trick::trick_points(last));
        }
    }
}

fn print_result(state: &RoundState) {
    println!("\nRound finished!");
    if let Some(winner) = state.bid_winner {
        let made = state.score(winner) >= state.current_bid;
        println!(
            "  {} bid {} and took {}: contract {}",
            state.seat(winner).name,
            state.current_bid,
            state.score(winner),
            if made { "made" } else { "failed" }
        );
    }
    println!("\n  Standings:");
    for (rank, (seat, score)) in engine::standings(state).iter().enumerate() {
        println!("    {}. {:10} {:>3}", rank + 1, state.seat(*seat).name, score);
    }
}

fn show_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

// ── simulate / config ──────────────────────────────────────────────────

fn cmd_simulate(config: &TableConfig, rounds: usize, seed: u64, json: bool) -> Result<(), Box<dyn Error>> {
    config.validate()?;
    let summary = simulate(config, rounds, seed);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== Simulation: {} rounds, agent={}, base seed={} ===\n", rounds, config.agent, seed);
    println!("  {:8} {:>10} {:>9}", "Seat", "Avg pts", "Bid wins");
    for seat in SeatId::ALL {
        println!(
            "  {:8} {:>10.1} {:>9}",
            seat.to_string(),
            summary.average_points[seat.index()],
            summary.bid_wins[seat.index()]
        );
    }
    println!();
    println!("  Average winning bid: {:.1}", summary.average_winning_bid);
    println!("  Contracts made:      {} ({:.1}%)", summary.contracts_made, summary.contract_rate() * 100.0);
    if summary.failed > 0 {
        println!("  Failed rounds:       {}", summary.failed);
        if let Some(err) = &summary.first_error {
            println!("    first error: {err}");
        }
    }
    Ok(())
}

fn cmd_config() -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(&TableConfig::default())?);
    Ok(())
}
