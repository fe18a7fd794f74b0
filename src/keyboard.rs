/// Keyboard input adapter.
///
/// Key events arrive from a reader thread over a channel. Each tick we
/// record the tick number of the last press/repeat of every key and treat
/// a key as held while that record is fresh (within `HOLD_WINDOW` ticks).
/// Terminals with keyboard enhancement also send releases, which clear the
/// record immediately.

use std::collections::{HashMap, VecDeque};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use plane_shooter::input::{InputSignal, InputSource, Intent};

/// At 60 ticks/s this is ≈133 ms, shorter than the gap between OS key
/// repeats, so a held key never flickers to idle.
const HOLD_WINDOW: u64 = 8;

/// Quiet time after which a press of a key that was held when the game
/// ended counts as a fresh press. OS repeats arrive every ~30 ms.
const REPRESS_GAP: Duration = Duration::from_millis(250);

pub struct TerminalInput {
    rx: mpsc::Receiver<Event>,
    key_tick: HashMap<KeyCode, u64>,
    tick: u64,
    pending: VecDeque<InputSignal>,
}

impl TerminalInput {
    pub fn new(rx: mpsc::Receiver<Event>) -> Self {
        Self { rx, key_tick: HashMap::new(), tick: 0, pending: VecDeque::new() }
    }

    /// Block until a fresh key press and return its code, or `None` if the
    /// reader thread has gone away. Used after the game-over screen.
    ///
    /// Events still queued from play are discarded. Keys held when the game
    /// ended are ignored until they are released or go quiet for
    /// `REPRESS_GAP`, so auto-repeat of a held arrow cannot dismiss the
    /// overlay.
    pub fn wait_for_key(&mut self) -> Option<KeyCode> {
        while let Ok(event) = self.rx.try_recv() {
            if let Event::Key(key) = event {
                self.record(key);
            }
        }

        let now = Instant::now();
        let mut held: HashMap<KeyCode, Instant> = self
            .key_tick
            .keys()
            .filter(|code| self.is_held(code))
            .map(|&code| (code, now))
            .collect();

        while let Ok(event) = self.rx.recv() {
            let Event::Key(KeyEvent { code, kind, .. }) = event else {
                continue;
            };
            match (kind, held.get(&code)) {
                (KeyEventKind::Release, _) => {
                    held.remove(&code);
                }
                (KeyEventKind::Press, None) => return Some(code),
                (KeyEventKind::Press, Some(&last)) if last.elapsed() >= REPRESS_GAP => {
                    return Some(code)
                }
                (KeyEventKind::Press | KeyEventKind::Repeat, Some(_)) => {
                    held.insert(code, Instant::now());
                }
                (KeyEventKind::Repeat, None) => {}
            }
        }
        None
    }

    fn is_held(&self, key: &KeyCode) -> bool {
        self.key_tick
            .get(key)
            .map(|&last| self.tick.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }

    /// Returns `true` if the event asks to quit.
    fn record(&mut self, event: KeyEvent) -> bool {
        let KeyEvent { code, kind, modifiers, .. } = event;
        match kind {
            KeyEventKind::Press => {
                self.key_tick.insert(code, self.tick);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
                    KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
                    _ => false,
                }
            }
            KeyEventKind::Repeat => {
                self.key_tick.insert(code, self.tick);
                false
            }
            KeyEventKind::Release => {
                self.key_tick.remove(&code);
                false
            }
        }
    }
}

impl InputSource for TerminalInput {
    fn begin_tick(&mut self) {
        self.tick += 1;
        self.pending.clear();

        let mut quit = false;
        while let Ok(event) = self.rx.try_recv() {
            if let Event::Key(key) = event {
                quit |= self.record(key);
            }
        }

        let left = self.any_held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]);
        let right = self.any_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]);
        let intent = match (left, right) {
            (true, false) => Intent::MoveLeft,
            (false, true) => Intent::MoveRight,
            _ => Intent::Idle,
        };
        self.pending.push_back(InputSignal::Move(intent));
        if quit {
            self.pending.push_back(InputSignal::Quit);
        }
    }

    fn next_signal(&mut self) -> Option<InputSignal> {
        self.pending.pop_front()
    }
}
