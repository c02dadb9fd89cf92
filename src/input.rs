//! Logical input model: per-key edge state and the turn-key mapping.
//!
//! The window layer feeds raw press/release events into [`KeyState`]
//! trackers; the mapping below translates edge-triggered pad keys into
//! turn requests. Holding the layer modifier switches the pad from
//! horizontal (y-axis) turns to vertical (x-axis) turns.

use crate::request::{Axis, Direction, Layer, TurnRequest};

/// Edge and level state for a single observed key.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    /// Whether the key is currently held down.
    pub held: bool,
    /// Whether the key went down this frame.
    pub pressed_this_frame: bool,
}

impl KeyState {
    /// Clears the per-frame edge flag; call once at the top of each frame.
    pub fn begin_frame(&mut self) {
        self.pressed_this_frame = false;
    }

    /// Records a press event.
    pub fn press(&mut self) {
        if !self.held {
            self.pressed_this_frame = true;
        }
        self.held = true;
    }

    /// Records a release event.
    pub fn release(&mut self) {
        self.held = false;
    }
}

/// The pad keys bound to turn triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadKey {
    Pad1,
    Pad2,
    Pad3,
    Pad4,
    Pad6,
    Pad7,
    Pad8,
    Pad9,
}

/// All turn-trigger keys, for iteration by the window layer.
pub const PAD_KEYS: [PadKey; 8] = [
    PadKey::Pad1,
    PadKey::Pad2,
    PadKey::Pad3,
    PadKey::Pad4,
    PadKey::Pad6,
    PadKey::Pad7,
    PadKey::Pad8,
    PadKey::Pad9,
];

/// Maps a pressed pad key to its turn request.
///
/// With the modifier held (`vertical`), the pad's left column turns x
/// layers negative and its bottom row turns them positive; without it,
/// the pad corners turn y layers, top row negative and bottom positive.
/// Keys outside the active mapping do nothing.
pub fn turn_for_key(key: PadKey, vertical: bool) -> Option<TurnRequest> {
    let (axis, direction, layer) = if vertical {
        match key {
            PadKey::Pad7 => (Axis::X, Direction::Negative, Layer::Near),
            PadKey::Pad8 => (Axis::X, Direction::Negative, Layer::Middle),
            PadKey::Pad9 => (Axis::X, Direction::Negative, Layer::Far),
            PadKey::Pad1 => (Axis::X, Direction::Positive, Layer::Near),
            PadKey::Pad2 => (Axis::X, Direction::Positive, Layer::Middle),
            PadKey::Pad3 => (Axis::X, Direction::Positive, Layer::Far),
            _ => return None,
        }
    } else {
        match key {
            PadKey::Pad7 => (Axis::Y, Direction::Negative, Layer::Far),
            PadKey::Pad4 => (Axis::Y, Direction::Negative, Layer::Middle),
            PadKey::Pad1 => (Axis::Y, Direction::Negative, Layer::Near),
            PadKey::Pad9 => (Axis::Y, Direction::Positive, Layer::Far),
            PadKey::Pad6 => (Axis::Y, Direction::Positive, Layer::Middle),
            PadKey::Pad3 => (Axis::Y, Direction::Positive, Layer::Near),
            _ => return None,
        }
    };
    Some(TurnRequest {
        axis,
        layer,
        direction,
    })
}
