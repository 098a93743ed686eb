use std::collections::VecDeque;

use crate::regulator::{Direction, RegulatorState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    Other,
}

/// Something that queues input between ticks.
pub trait EventSource {
    /// Drains everything queued since the last call without blocking.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Applies the Up/Down key presses to the regulator in arrival order and hands
/// back every other event for the owning loop.
///
/// Key repeats are not filtered: each generated key-down is one step.
pub fn translate<I>(regulator: &mut RegulatorState, events: I) -> Vec<InputEvent>
where
    I: IntoIterator<Item = InputEvent>,
{
    let mut forwarded = Vec::new();
    for event in events {
        match event {
            InputEvent::KeyDown(Key::Up) => regulator.apply_increment(Direction::Up),
            InputEvent::KeyDown(Key::Down) => regulator.apply_increment(Direction::Down),
            other => forwarded.push(other),
        }
    }
    forwarded
}

/// Replays a fixed script, one batch of events per poll, then asks to quit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    ticks: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new<I>(ticks: I) -> Self
    where
        I: IntoIterator<Item = Vec<InputEvent>>,
    {
        Self {
            ticks: ticks.into_iter().collect(),
        }
    }

    /// Appends `count` ticks that each carry the same events.
    pub fn repeat(mut self, count: usize, events: &[InputEvent]) -> Self {
        self.ticks
            .extend(std::iter::repeat(events.to_vec()).take(count));
        self
    }

    /// Ticks left before the script asks to quit.
    pub fn remaining(&self) -> usize {
        self.ticks.len()
    }
}

impl EventSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.ticks
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}
