mod console_surface;
mod deck;
mod script;

use anyhow::Result;
use swipecard_ui::Size;

use deck::{Deck, DeckEventKind};

const CARD_NAMES: &[&str] = &["Ada", "Grace", "Linus", "Barbara", "Ken", "Margaret"];

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let gestures = script::parse_args(std::env::args().skip(1))?;

    println!("=== Swipecard Demo ===");
    println!("Gestures: left | right | up | down | nudge | tap-left | tap-right | undo");
    println!("Set RUST_LOG=debug to watch every transform write.");
    println!();

    let mut deck = Deck::new(
        CARD_NAMES,
        Size::new(800.0, 600.0),
        Size::new(300.0, 420.0),
    )?;
    for gesture in gestures {
        deck.play(gesture);
    }

    for event in deck.events() {
        match event.kind {
            DeckEventKind::Swiped(direction) => println!("{} swiped {direction}", event.card),
            DeckEventKind::LeftScreen => println!("{} left the screen", event.card),
            DeckEventKind::Tapped(side) => println!("{} tapped on the {side}", event.card),
        }
    }
    println!("{} of {} cards remain", deck.remaining(), CARD_NAMES.len());
    Ok(())
}
