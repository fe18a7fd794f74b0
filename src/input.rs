/// Player intent, decoupled from any particular keyboard backend.

use std::collections::VecDeque;

/// Desired horizontal movement for the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    #[default]
    Idle,
}

impl Intent {
    /// Hero speed for this intent.
    pub fn speed(self, move_speed: i32) -> i32 {
        match self {
            Intent::MoveLeft => -move_speed,
            Intent::MoveRight => move_speed,
            Intent::Idle => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSignal {
    Move(Intent),
    Quit,
}

/// Source of discrete input signals.
///
/// `next_signal` returns `None` once everything pending for the current tick
/// has been handed out; it must never block.
pub trait InputSource {
    /// Called once at the start of every tick, before draining.
    fn begin_tick(&mut self) {}

    fn next_signal(&mut self) -> Option<InputSignal>;

    fn drain(&mut self) -> impl Iterator<Item = InputSignal> + '_
    where
        Self: Sized,
    {
        std::iter::from_fn(move || self.next_signal())
    }
}

/// Replays a fixed list of per-tick signal batches. Once the script runs
/// out every tick is empty.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    ticks: VecDeque<Vec<InputSignal>>,
    pending: VecDeque<InputSignal>,
}

impl ScriptedInput {
    pub fn new(ticks: impl IntoIterator<Item = Vec<InputSignal>>) -> Self {
        Self { ticks: ticks.into_iter().collect(), pending: VecDeque::new() }
    }
}

impl InputSource for ScriptedInput {
    fn begin_tick(&mut self) {
        self.pending = self.ticks.pop_front().unwrap_or_default().into();
    }

    fn next_signal(&mut self) -> Option<InputSignal> {
        self.pending.pop_front()
    }
}
