//! Console Go Fish.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Error};
use gofish::{Card, Game, GameOptions, Player, RANKS, Suit, TurnInterface};
use log::info;
use pico_args::Arguments;

const HELP: &str = "\
Play Go Fish at the console

USAGE:
  gofish [OPTIONS]

OPTIONS:
  --players    N     Number of players             [default: env GOFISH_PLAYERS or prompt]
  --seed       S     Shuffle seed                  [default: current time]
  --hand-size  N     Cards dealt to each player    [default: 5]

FLAGS:
  --draw-on-empty    Players with an empty hand draw instead of passing
  --quiet-totals     Do not print the match total after every turn
  -h, --help         Print help information

ENVIRONMENT:
  GOFISH_PLAYERS     Number of players
  RUST_LOG           Log filter (e.g. debug)
";

struct Args {
    players: Option<usize>,
    seed: u64,
    hand_size: usize,
    draw_on_empty: bool,
    quiet_totals: bool,
}

/// Reads ranks from stdin and writes everything else to stdout.
struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    /// Prints `prompt` and reads one trimmed line. Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl<R: BufRead> TurnInterface for Console<R> {
    fn prompt_for_rank(&mut self, _player: &Player) -> u8 {
        loop {
            let Some(input) = self.read_line("Enter a rank to ask for (1-13): ") else {
                println!();
                std::process::exit(0);
            };

            if input.is_empty() {
                println!("Please enter a rank.");
                continue;
            }
            match input.parse::<u8>() {
                Ok(rank) if RANKS.contains(&rank) => return rank,
                Ok(_) => println!("Invalid rank. Please enter a number between 1 and 13."),
                Err(_) => println!("Invalid input. Please enter a number."),
            }
        }
    }

    fn display_hand(&mut self, player: &Player) {
        println!("Your hand:");
        for card in player.hand().cards() {
            println!("  {}", format_card(card));
        }
    }

    fn display_message(&mut self, text: &str) {
        println!("{text}");
    }
}

fn format_card(card: &Card) -> String {
    let symbol = match card.suit {
        Suit::Hearts => "\u{2665}",
        Suit::Diamonds => "\u{2666}",
        Suit::Clubs => "\u{2663}",
        Suit::Spades => "\u{2660}",
    };
    format!("{card} ({}{symbol})", rank_label(card.rank))
}

fn rank_label(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => rank.to_string(),
    }
}

/// Asks for the number of players until a number is entered.
fn prompt_player_count<R: BufRead>(console: &mut Console<R>) -> Option<usize> {
    loop {
        let input = console.read_line("Enter the number of players: ")?;
        match input.parse::<usize>() {
            Ok(count) => return Some(count),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn parse_args() -> Result<Args, Error> {
    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let players = match pargs.opt_value_from_str("--players")? {
        Some(players) => Some(players),
        None => std::env::var("GOFISH_PLAYERS")
            .ok()
            .map(|value| value.parse::<usize>())
            .transpose()
            .context("GOFISH_PLAYERS is not a number")?,
    };
    let seed = pargs.opt_value_from_str("--seed")?.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let hand_size = pargs
        .opt_value_from_str("--hand-size")?
        .unwrap_or(GameOptions::default().hand_size);

    Ok(Args {
        players,
        seed,
        hand_size,
        draw_on_empty: pargs.contains("--draw-on-empty"),
        quiet_totals: pargs.contains("--quiet-totals"),
    })
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let args = parse_args()?;
    let mut console = Console {
        input: io::stdin().lock(),
    };

    let players = match args.players {
        Some(players) => players,
        None => match prompt_player_count(&mut console) {
            Some(players) => players,
            None => return Ok(()),
        },
    };

    let options = GameOptions::default()
        .with_hand_size(args.hand_size)
        .with_draw_on_empty_hand(args.draw_on_empty)
        .with_announce_total_matches(!args.quiet_totals);
    info!("starting {players}-player game with seed {}", args.seed);
    let mut game = Game::with_player_count(players, options, args.seed)
        .context("could not set up the game")?;

    println!("Super Awesome Go Fish Game!!!");
    let scores = game.play(&mut console);

    let winners: Vec<&str> = scores
        .winners()
        .into_iter()
        .map(|score| score.name.as_str())
        .collect();
    println!("Winner(s): {}", winners.join(", "));
    Ok(())
}
