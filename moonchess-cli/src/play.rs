//! Play command - interactive terminal game
//!
//! Owns everything the engine leaves to the front end: turn
//! sequencing, input gating, pacing delays and the highlight cues.
//! Cues are recomputed from the engine before every prompt rather
//! than tracked here.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use moonchess_core::{Bot, Cell, Difficulty, GameState, Outcome, Player};

/// Pause before a bot reply, as a thinking cue
const BOT_DELAY: Duration = Duration::from_millis(600);

#[derive(Args)]
pub struct PlayArgs {
    /// Play against a bot (O) instead of a second human
    #[arg(long)]
    pub bot: bool,

    /// Bot difficulty (easy or hard)
    #[arg(long, default_value = "easy")]
    pub difficulty: Difficulty,

    /// Let the opponent/bot (O) open the game
    #[arg(long)]
    pub opponent_starts: bool,

    /// Seed for the bot's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if !play_one_game(&args, &mut lines)? {
            return Ok(());
        }
        if !prompt_replay(&mut lines)? {
            return Ok(());
        }
    }
}

/// Run one game to completion; false when the user quit mid-game
fn play_one_game(
    args: &PlayArgs,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    let starting = if args.opponent_starts { Player::O } else { Player::X };
    let mut state = GameState::new(starting);
    let mut bot = args.bot.then(|| match args.seed {
        Some(seed) => Bot::with_seed(args.difficulty, seed),
        None => Bot::new(args.difficulty),
    });

    loop {
        render(&state);
        if state.is_over() {
            break;
        }

        let player = state.current_player();
        let cell = match (&mut bot, player) {
            (Some(bot), Player::O) => {
                thread::sleep(BOT_DELAY);
                let Some(cell) = bot.choose_move(&state, player) else {
                    // Unreachable while the game is ongoing; end the
                    // game loop rather than re-enter with stale state
                    println!("Bot has no legal move; ending the game.");
                    break;
                };
                println!("Bot plays cell {cell}.");
                cell
            }
            _ => match prompt_cell(&state, player, lines)? {
                Some(cell) => cell,
                None => return Ok(false), // quit
            },
        };

        if let Err(err) = state.place(player, cell) {
            // Unreachable for gated input, kept as a guard
            println!("Refused: {err}");
        }
    }

    match state.outcome() {
        Outcome::Won(player) => println!("{player} wins!"),
        Outcome::Draw => println!("Draw!"),
        Outcome::Ongoing => {}
    }
    Ok(true)
}

/// Read a legal cell for `player`, `None` when the user quits
fn prompt_cell(
    state: &GameState,
    player: Player,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<Cell>> {
    loop {
        print!("{player} to move - cell (0-8, q to quit): ");
        io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("failed to read input")?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        let cell = input.parse::<u8>().ok().and_then(Cell::new);
        match cell {
            Some(cell) if state.is_legal_placement(player, cell) => return Ok(Some(cell)),
            Some(cell) => {
                println!("Cell {cell} is taken; pick an empty cell or your flashing oldest piece.")
            }
            None => println!("Enter a number from 0 to 8."),
        }
    }
}

/// Draw the board with the engine's highlight cues
fn render(state: &GameState) {
    let removable = state.removable_cells(state.current_player());
    let global_oldest = state.global_oldest();

    println!();
    for row in 0..3u8 {
        let mut line = String::new();
        for col in 0..3u8 {
            let cell = Cell::at(row, col).expect("row and col in range");
            let mark = match state.board().get(cell) {
                Some(player) => player.to_string(),
                None => cell.to_string(),
            };
            // Brackets: replaceable by the side to move; parens: next
            // to age off under the global cap
            let decorated = if removable.contains(&cell) {
                format!("[{mark}]")
            } else if global_oldest == Some(cell) {
                format!("({mark})")
            } else {
                format!(" {mark} ")
            };
            line.push_str(&decorated);
            if col < 2 {
                line.push('|');
            }
        }
        println!("  {line}");
        if row < 2 {
            println!("  ---+---+---");
        }
    }

    if !state.is_over() {
        if let Some(&cell) = removable.iter().next() {
            println!("  [{cell}] is your oldest piece; you may replace it.");
        }
        if let Some(cell) = global_oldest {
            println!("  ({cell}) ages off the board with the next new piece.");
        }
    }
    println!();
}

fn prompt_replay(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<bool> {
    print!("Play again with the same settings? [y/N]: ");
    io::stdout().flush().context("failed to flush prompt")?;

    match lines.next() {
        Some(line) => {
            let line = line.context("failed to read input")?;
            Ok(line.trim().eq_ignore_ascii_case("y"))
        }
        None => Ok(false),
    }
}
