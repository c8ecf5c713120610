//! Match command - play games between the bot tiers
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game()

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use moonchess_core::{Bot, Difficulty, GameState, Outcome, Player};

/// Aged games can cycle forever; cut them off as draws
const MAX_PLIES: usize = 100;

#[derive(Args)]
pub struct MatchArgs {
    /// Number of games to play (starting side alternates)
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Difficulty playing X (easy or hard)
    #[arg(long, default_value = "easy")]
    pub x: Difficulty,

    /// Difficulty playing O (easy or hard)
    #[arg(long, default_value = "hard")]
    pub o: Difficulty,

    /// Base seed; each game derives its own bot seeds from it
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug, Serialize)]
struct GameRecord {
    game_number: usize,
    starting_player: Player,
    outcome: Outcome,
    plies: usize,
}

/// Aggregated match results
#[derive(Clone, Debug, Serialize)]
struct MatchResults {
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    avg_plies: f32,
    games: Vec<GameRecord>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: MatchArgs) -> Result<()> {
    tracing::info!(
        "Starting match: {:?} (X) vs {:?} (O), {} games, seed {}",
        args.x,
        args.o,
        args.games,
        args.seed
    );

    let results = play_match(&args);

    report_results(&results, &args)?;

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn play_match(args: &MatchArgs) -> MatchResults {
    let mut games = Vec::with_capacity(args.games);
    let (mut x_wins, mut o_wins, mut draws) = (0, 0, 0);
    let mut total_plies = 0;

    for game_number in 0..args.games {
        let starting = if game_number % 2 == 0 { Player::X } else { Player::O };
        let game_seed = args.seed.wrapping_add(game_number as u64 * 2);

        let (outcome, plies) = play_single_game(args, starting, game_seed);

        match outcome {
            Outcome::Won(Player::X) => x_wins += 1,
            Outcome::Won(Player::O) => o_wins += 1,
            // A cutoff leaves the game ongoing; score it as a draw
            Outcome::Draw | Outcome::Ongoing => draws += 1,
        }
        total_plies += plies;

        games.push(GameRecord {
            game_number,
            starting_player: starting,
            outcome,
            plies,
        });
    }

    let avg_plies = if args.games > 0 {
        total_plies as f32 / args.games as f32
    } else {
        0.0
    };

    MatchResults {
        x_difficulty: args.x,
        o_difficulty: args.o,
        x_wins,
        o_wins,
        draws,
        avg_plies,
        games,
    }
}

fn report_results(results: &MatchResults, args: &MatchArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    println!(
        "{:?} (X) vs {:?} (O) over {} games:",
        results.x_difficulty,
        results.o_difficulty,
        results.games.len()
    );
    println!("  X wins: {}", results.x_wins);
    println!("  O wins: {}", results.o_wins);
    println!("  Draws:  {}", results.draws);
    println!("  Avg plies: {:.1}", results.avg_plies);

    tracing::info!(
        "Match finished: X {} / O {} / draws {}",
        results.x_wins,
        results.o_wins,
        results.draws
    );

    Ok(())
}

// ============================================================================
// LEVEL 3 - SINGLE GAME
// ============================================================================

fn play_single_game(args: &MatchArgs, starting: Player, seed: u64) -> (Outcome, usize) {
    let mut state = GameState::new(starting);
    let mut x_bot = Bot::with_seed(args.x, seed);
    let mut o_bot = Bot::with_seed(args.o, seed.wrapping_add(1));

    let mut plies = 0;
    while !state.is_over() && plies < MAX_PLIES {
        let player = state.current_player();
        let bot = match player {
            Player::X => &mut x_bot,
            Player::O => &mut o_bot,
        };

        let Some(cell) = bot.choose_move(&state, player) else {
            break; // no open cell: inert turn, unreachable in practice
        };

        // Legality was baked into the candidate set; refusal here
        // would be an engine defect worth surfacing
        if let Err(err) = state.place(player, cell) {
            tracing::warn!("bot placement refused: {err}");
            break;
        }
        plies += 1;
    }

    (state.outcome(), plies)
}
