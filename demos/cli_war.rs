//! CLI War example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{Card, Game, GameOptions, GameState, Resolution, RoundOutcome, Suit, Winner};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("War CLI example (Enter for next card, 'a' to play it out, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_max_rounds(Some(100_000));
    let mut game = Game::new(options, seed);

    loop {
        let mut state = game.new_game();
        print_table(&state, None);

        while !state.is_terminal() {
            match prompt_line("> ").as_str() {
                "" | "n" | "next" => match game.play_round(&mut state) {
                    Ok(outcome) => print_table(&state, Some(&outcome)),
                    Err(err) => {
                        println!("Round error: {err}");
                        break;
                    }
                },
                "a" | "auto" => {
                    match game.play_out(&mut state) {
                        Ok(_) => {}
                        Err(err) => println!("Stopped: {err}"),
                    }
                    print_table(&state, None);
                    break;
                }
                "q" | "quit" => return,
                _ => println!("Unknown command."),
            }
        }

        match state.winner() {
            Some(Winner::Player) => println!("Hurray, you win!"),
            Some(Winner::Computer) => println!("Awww, you lose."),
            Some(Winner::Draw) => println!("A draw. No winner."),
            None => println!("No winner after {} rounds.", state.rounds()),
        }
        println!("{} rounds, {} wars.", state.rounds(), state.wars());

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameState, outcome: Option<&RoundOutcome>) {
    let (mine, theirs) = state.last_revealed().map_or_else(
        || ("??".to_string(), "??".to_string()),
        |(player, computer)| (format_card(&player), format_card(&computer)),
    );
    println!("\nyou: {mine}    cpu: {theirs}");

    let stack = if state.stack_len() == 0 {
        "-".to_string()
    } else {
        state.stack_len().to_string()
    };
    println!(
        "you: {}  stack: {}  cpu: {}",
        state.player_cards(),
        stack,
        state.computer_cards()
    );

    if let Some(outcome) = outcome {
        let message = match outcome.resolution {
            Resolution::PlayerWinsRound => "Your card",
            Resolution::ComputerWinsRound => "My card",
            Resolution::War => "Let there be war",
        };
        println!("{message}");
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
