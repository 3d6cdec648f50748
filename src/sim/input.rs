//! Input normalization
//!
//! Raw keyboard/pointer/touch events are folded into a per-frame
//! [`FrameInput`] snapshot. Held keys persist across frames; one-shot
//! signals (turns, impulses, selections, pointer taps) are drained when the
//! snapshot is taken, so each fires in exactly one engine frame. Keyboard
//! and pointer produce the same fields - nothing downstream can tell the
//! difference.

use glam::Vec2;

/// Keys the arcade cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
}

/// A raw host event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer/touch press at a canvas position
    PointerDown { pos: Vec2 },
    /// Tap on a grid cell or card, already resolved to an index by the view
    CellTap(usize),
}

/// Heading on a grid (snake)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDir {
    Up,
    Down,
    Left,
    Right,
}

impl GridDir {
    /// Cell delta for one grid step
    pub fn delta(self) -> (i32, i32) {
        match self {
            GridDir::Up => (0, -1),
            GridDir::Down => (0, 1),
            GridDir::Left => (-1, 0),
            GridDir::Right => (1, 0),
        }
    }

    /// True when `other` is the direct opposite heading
    pub fn is_reverse_of(self, other: GridDir) -> bool {
        let (dx, dy) = self.delta();
        let (ox, oy) = other.delta();
        dx == -ox && dy == -oy
    }
}

/// Action signals for a single engine frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Left held this frame
    pub left: bool,
    /// Right held this frame
    pub right: bool,
    /// Queued heading change (snake); at most one per frame
    pub turn: Option<GridDir>,
    /// Discrete lane change, already clamped to {-1, 0, +1}
    pub lane_shift: i8,
    /// Edge-triggered jump/flap
    pub impulse: bool,
    /// Selected cell/card index
    pub select: Option<usize>,
    /// Pointer press position
    pub pointer: Option<Vec2>,
}

impl FrameInput {
    /// Drop the edge-triggered signals, keeping held state. Used when one
    /// display frame expands into several engine frames so a one-shot only
    /// lands in the first.
    pub fn clear_one_shots(&mut self) {
        self.turn = None;
        self.lane_shift = 0;
        self.impulse = false;
        self.select = None;
        self.pointer = None;
    }

    /// Fold a newer snapshot into this one: held state is replaced, one-shot
    /// signals latch until an engine frame consumes them. Keeps taps alive
    /// across display frames that produce no engine frame.
    pub fn merge(&mut self, newer: &FrameInput) {
        self.left = newer.left;
        self.right = newer.right;
        if newer.turn.is_some() {
            self.turn = newer.turn;
        }
        if newer.lane_shift != 0 {
            self.lane_shift = newer.lane_shift;
        }
        self.impulse |= newer.impulse;
        if newer.select.is_some() {
            self.select = newer.select;
        }
        if newer.pointer.is_some() {
            self.pointer = newer.pointer;
        }
    }
}

/// Folds raw events into frame snapshots
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    left_held: bool,
    right_held: bool,
    turn: Option<GridDir>,
    lane_shift: i8,
    impulse: bool,
    select: Option<usize>,
    pointer: Option<Vec2>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw event. May be called any number of times between frames.
    pub fn push(&mut self, event: RawEvent) {
        match event {
            RawEvent::KeyDown(Key::Left) => {
                self.left_held = true;
                self.lane_shift = -1;
                self.turn = Some(GridDir::Left);
            }
            RawEvent::KeyDown(Key::Right) => {
                self.right_held = true;
                self.lane_shift = 1;
                self.turn = Some(GridDir::Right);
            }
            RawEvent::KeyDown(Key::Up) => {
                self.turn = Some(GridDir::Up);
                self.impulse = true;
            }
            RawEvent::KeyDown(Key::Down) => {
                self.turn = Some(GridDir::Down);
            }
            RawEvent::KeyDown(Key::Space) => {
                self.impulse = true;
            }
            RawEvent::KeyUp(Key::Left) => self.left_held = false,
            RawEvent::KeyUp(Key::Right) => self.right_held = false,
            RawEvent::KeyUp(_) => {}
            RawEvent::PointerDown { pos } => {
                self.impulse = true;
                self.pointer = Some(pos);
            }
            RawEvent::CellTap(index) => {
                self.select = Some(index);
            }
        }
    }

    /// Take the snapshot for the next engine frame, draining one-shot
    /// signals while held state carries over.
    pub fn frame_input(&mut self) -> FrameInput {
        FrameInput {
            left: self.left_held,
            right: self.right_held,
            turn: self.turn.take(),
            lane_shift: std::mem::take(&mut self.lane_shift),
            impulse: std::mem::take(&mut self.impulse),
            select: self.select.take(),
            pointer: self.pointer.take(),
        }
    }

    /// Drop everything, including held state. Called when a session is torn
    /// down so no leftover input leaks into the next one.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_state_persists_one_shots_drain() {
        let mut adapter = InputAdapter::new();
        adapter.push(RawEvent::KeyDown(Key::Left));
        adapter.push(RawEvent::KeyDown(Key::Space));

        let first = adapter.frame_input();
        assert!(first.left);
        assert!(first.impulse);
        assert_eq!(first.lane_shift, -1);

        let second = adapter.frame_input();
        assert!(second.left, "held key persists");
        assert!(!second.impulse, "impulse fires once");
        assert_eq!(second.lane_shift, 0);

        adapter.push(RawEvent::KeyUp(Key::Left));
        assert!(!adapter.frame_input().left);
    }

    #[test]
    fn test_last_turn_wins() {
        let mut adapter = InputAdapter::new();
        adapter.push(RawEvent::KeyDown(Key::Up));
        adapter.push(RawEvent::KeyDown(Key::Down));
        assert_eq!(adapter.frame_input().turn, Some(GridDir::Down));
    }

    #[test]
    fn test_pointer_and_key_produce_same_signal() {
        let mut keys = InputAdapter::new();
        keys.push(RawEvent::KeyDown(Key::Space));

        let mut touch = InputAdapter::new();
        touch.push(RawEvent::PointerDown {
            pos: Vec2::new(10.0, 10.0),
        });

        assert_eq!(keys.frame_input().impulse, touch.frame_input().impulse);
    }

    #[test]
    fn test_reverse_detection() {
        assert!(GridDir::Left.is_reverse_of(GridDir::Right));
        assert!(GridDir::Up.is_reverse_of(GridDir::Down));
        assert!(!GridDir::Left.is_reverse_of(GridDir::Up));
        assert!(!GridDir::Right.is_reverse_of(GridDir::Right));
    }

    #[test]
    fn test_merge_latches_one_shots_and_replaces_held() {
        let mut pending = FrameInput {
            impulse: true,
            left: true,
            ..Default::default()
        };
        // A quiet newer snapshot: the impulse stays latched, held state drops
        pending.merge(&FrameInput::default());
        assert!(pending.impulse);
        assert!(!pending.left);

        pending.merge(&FrameInput {
            select: Some(3),
            ..Default::default()
        });
        assert_eq!(pending.select, Some(3));
        assert!(pending.impulse, "still latched until consumed");
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut adapter = InputAdapter::new();
        adapter.push(RawEvent::KeyDown(Key::Right));
        adapter.reset();
        let input = adapter.frame_input();
        assert!(!input.right);
        assert_eq!(input.lane_shift, 0);
    }
}
