//! A stack of cards played in real time.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use swipecard_core::MonotonicClock;
use swipecard_ui::{
    Direction, Point, Size, SwipeCallbacks, SwipeCard, SwipeConfig, SwipeOutcome, Timeline,
};

use crate::console_surface::ConsoleSurface;
use crate::script::Gesture;

const FRAME_MS: u64 = 16;
const FLICK_FRAMES: u32 = 6;
const NUDGE_FRAMES: u32 = 20;
const FLICK_DISTANCE: f32 = 240.0;
const NUDGE_DISTANCE: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeckEventKind {
    Swiped(Direction),
    LeftScreen,
    Tapped(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeckEvent {
    pub card: String,
    pub kind: DeckEventKind,
}

pub struct Deck {
    timeline: Timeline,
    clock: MonotonicClock,
    viewport: Size,
    cards: Vec<SwipeCard<ConsoleSurface>>,
    events: Rc<RefCell<Vec<DeckEvent>>>,
    /// Indices of cards that flew out, most recent last.
    swiped: Vec<usize>,
}

impl Deck {
    pub fn new(names: &[&str], viewport: Size, card_size: Size) -> Result<Self> {
        let timeline = Timeline::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut cards = Vec::with_capacity(names.len());
        for name in names {
            let card = SwipeCard::new(
                ConsoleSurface::new(*name, card_size),
                timeline.clone(),
                viewport,
                SwipeConfig::default(),
                deck_callbacks(name, &events),
            )
            .with_context(|| format!("creating card `{name}`"))?;
            cards.push(card);
        }
        Ok(Self {
            timeline,
            clock: MonotonicClock::new(),
            viewport,
            cards,
            events,
            swiped: Vec::new(),
        })
    }

    pub fn events(&self) -> Vec<DeckEvent> {
        self.events.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| !card.has_left_screen())
            .count()
    }

    fn top_card(&self) -> Option<usize> {
        self.cards.iter().position(|card| !card.has_left_screen())
    }

    pub fn play(&mut self, gesture: Gesture) {
        if gesture == Gesture::Undo {
            self.undo();
            return;
        }
        let Some(index) = self.top_card() else {
            log::warn!("no cards left for {gesture:?}");
            return;
        };

        let center = Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        let outcome = match gesture {
            Gesture::Flick(direction) => {
                let delta = match direction {
                    Direction::Left => Point::new(-FLICK_DISTANCE, 0.0),
                    Direction::Right => Point::new(FLICK_DISTANCE, 0.0),
                    Direction::Up => Point::new(0.0, -FLICK_DISTANCE),
                    Direction::Down => Point::new(0.0, FLICK_DISTANCE),
                };
                self.drag(index, center, delta, FLICK_FRAMES)
            }
            Gesture::Nudge => self.drag(index, center, Point::new(NUDGE_DISTANCE, 0.0), NUDGE_FRAMES),
            Gesture::TapLeft => self.tap(index, Point::new(self.viewport.width * 0.25, center.y)),
            Gesture::TapRight => self.tap(index, Point::new(self.viewport.width * 0.75, center.y)),
            Gesture::Undo => None,
        };
        log::info!("{gesture:?} -> {outcome:?}");

        self.wait_until_idle();
        if self.cards[index].has_left_screen() {
            self.swiped.push(index);
        }
    }

    fn drag(&self, index: usize, from: Point, delta: Point, frames: u32) -> Option<SwipeOutcome> {
        let card = &self.cards[index];
        card.press(from, self.clock.now_ms());
        for frame in 1..=frames {
            self.next_frame();
            let fraction = frame as f32 / frames as f32;
            card.move_to(from + delta * fraction, self.clock.now_ms());
        }
        card.release().map(|decision| decision.outcome)
    }

    fn tap(&self, index: usize, at: Point) -> Option<SwipeOutcome> {
        let card = &self.cards[index];
        card.press(at, self.clock.now_ms());
        card.release().map(|decision| decision.outcome)
    }

    fn undo(&mut self) {
        match self.swiped.pop() {
            Some(index) => {
                let card = &self.cards[index];
                card.finalize();
                log::info!(
                    "restored `{}`",
                    card.with_surface(|surface| surface.name().to_owned())
                );
            }
            None => log::warn!("nothing to undo"),
        }
    }

    fn next_frame(&self) {
        thread::sleep(Duration::from_millis(FRAME_MS));
        self.clock.sync(&self.timeline);
    }

    /// Sleeps until every pending animation timer has fired.
    fn wait_until_idle(&self) {
        self.clock.sync(&self.timeline);
        while let Some(due) = self.timeline.next_due() {
            let now = self.clock.now_ms();
            if due > now {
                thread::sleep(Duration::from_millis(due - now));
            }
            self.clock.sync(&self.timeline);
        }
    }
}

fn deck_callbacks(name: &str, events: &Rc<RefCell<Vec<DeckEvent>>>) -> SwipeCallbacks {
    let record = {
        let events = Rc::clone(events);
        let card = name.to_owned();
        Rc::new(move |kind: DeckEventKind| {
            events.borrow_mut().push(DeckEvent {
                card: card.clone(),
                kind,
            })
        })
    };
    let (swiped, left, tapped_left, tapped_right) = (
        Rc::clone(&record),
        Rc::clone(&record),
        Rc::clone(&record),
        record,
    );
    SwipeCallbacks::new()
        .on_swipe(move |direction| swiped(DeckEventKind::Swiped(direction)))
        .on_card_left_screen(move || left(DeckEventKind::LeftScreen))
        .on_left_side_click(move || tapped_left(DeckEventKind::Tapped("left")))
        .on_right_side_click(move || tapped_right(DeckEventKind::Tapped("right")))
}
