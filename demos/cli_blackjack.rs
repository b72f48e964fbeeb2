//! CLI blackjack example.
//!
//! Acts as the presentation layer: maps typed commands to intents and prints
//! the events the engine sends back. Set `RUST_LOG=bjround=debug` to see the
//! engine's logs.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{Card, Game, GameEvent, GameOptions, Intent, Suit, TableView};
use tracing_subscriber::EnvFilter;

const COMMANDS: [(Intent, &str, &str); 6] = [
    (Intent::PlaceBet, "b", "bet"),
    (Intent::StartRound, "d", "deal"),
    (Intent::Hit, "h", "hit"),
    (Intent::Stick, "s", "stick"),
    (Intent::PlayAgain, "a", "again"),
    (Intent::ResetSession, "r", "reset"),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    println!("Money: {} | Bet: {}", game.bankroll(), game.bet());
    println!("Place your bet!");

    loop {
        println!("{}", format_actions(&game));
        let input = prompt_line("Action: ");
        if input == "q" || input == "quit" {
            println!("Goodbye.");
            return;
        }

        let Some(&(intent, _, _)) = COMMANDS
            .iter()
            .find(|(_, key, label)| input == *key || input == *label)
        else {
            println!("Unknown action.");
            continue;
        };

        for event in game.dispatch(intent) {
            render(&event);
        }
    }
}

fn render(event: &GameEvent) {
    match event {
        GameEvent::BankrollChanged(money) => println!("Money: {money}"),
        GameEvent::BetChanged(bet) => println!("Bet: {bet}"),
        GameEvent::Info(message) => println!("{}", colorize(message, "33")),
        GameEvent::HandsUpdated(view) => print_table(view),
        GameEvent::PhaseChanged(_) => {}
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(view: &TableView) {
    if view.player_cards.is_empty() && view.dealer_cards.is_empty() {
        return;
    }

    let mut dealer = format_cards(&view.dealer_cards);
    if view.dealer_hidden {
        dealer.push_str(" ??");
    }
    println!("\nDealer: {dealer} (value {})", view.dealer_value);
    println!(
        "You:    {} (value {})\n",
        format_cards(&view.player_cards),
        view.player_value
    );
}

fn format_actions(game: &Game) -> String {
    let parts: Vec<String> = COMMANDS
        .iter()
        .map(|&(intent, key, label)| format_action(label, key, game.can(intent)))
        .collect();
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
