//! Interactive blackjack: one round against the dealer on the terminal.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack::{Event, Game, GameOptions, Prompt};
use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play one round of blackjack against the dealer")]
struct Args {
    /// Seed for the deck shuffle. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Log more detail to stderr (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn announce(event: Event) {
    match event {
        Event::DealerShows { card, score } => {
            println!("The Dealer is showing: {card} ({score})");
        }
        Event::PlayerShows { cards, score } => {
            println!("The Player is showing: {} {} ({score})", cards[0], cards[1]);
        }
        Event::PlayerDealt { card, score } => {
            println!("You were dealt {card}.\tYou now have: {score}");
        }
        Event::PlayerBust { .. } => println!("Player Went Bust."),
        Event::DealerFlips { card, score } => {
            println!("The Dealer Flips a {card}.\tThey now have: {score}");
        }
        Event::DealerBust { .. } => println!("The dealer went bust!"),
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::info!(seed, "starting round");

    let mut game = Game::new(GameOptions::default(), seed);
    let mut input = Prompt::new(io::stdin().lock(), io::stdout());
    let mut observer = announce;

    match game.play(&mut input, &mut observer) {
        Ok(result) if result.outcome.is_win() => println!("You win"),
        Ok(_) => println!("You Lose!"),
        Err(err) => tracing::error!(%err, "round could not be played"),
    }
}
