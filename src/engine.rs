//! Turn execution: axis recovery, member rotation, ring bookkeeping.
//!
//! A turn rotates the 9 located members by a quarter turn and then
//! relabels the lattice so slots again hold the cubies physically
//! occupying them. Rotating about a member's own local axis leaves its
//! position column alone, so the orbit of the 8 ring members is realized
//! by permuting the ring's position set instead: positions move two ring
//! steps among the pieces, then whole transforms move two ring steps among
//! the slots, leaving every slot's position unchanged while its contents
//! advance.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3, Vec4};
use rand::Rng;

use crate::lattice::CubeLattice;
use crate::request::{Axis, Direction, Layer, TurnRequest};
use crate::slice::{effective_direction, locate, Slice};
use crate::transform::CubieTransform;

/// Ring positions advanced by one quarter turn: the enumeration alternates
/// corner and edge slots, so a 90 degree turn is one corner/edge pair.
const RING_STEP: usize = 2;

const RING_LEN: usize = 8;

/// Recovers the signed local rotation axis for one slice member.
///
/// The orientation column with the largest component along the requested
/// world axis is the member's local axis most aligned with the turn; the
/// component's sign orients it so a positive request turns
/// counter-clockwise when viewed from outside along the positive world
/// axis, regardless of how the member has been reoriented.
pub fn resolve_axis(transform: &CubieTransform, axis: Axis) -> Vec3 {
    let component = axis.component();

    let mut best = 0;
    let mut best_value = transform.basis_column(0)[component];
    for index in 1..3 {
        let value = transform.basis_column(index)[component];
        if value.abs() > best_value.abs() {
            best = index;
            best_value = value;
        }
    }

    let local = [Vec3::X, Vec3::Y, Vec3::Z][best];
    if best_value >= 0.0 {
        local
    } else {
        -local
    }
}

fn ring_shift(direction: Direction) -> usize {
    match direction {
        Direction::Positive => RING_STEP,
        Direction::Negative => RING_LEN - RING_STEP,
    }
}

/// Moves each ring position two steps among the pieces: the piece in ring
/// slot `i` takes over the position held by ring slot `i + shift`.
fn shift_ring_positions(lattice: &mut CubeLattice, slice: &Slice, direction: Direction) {
    let ring = slice.ring();
    let shift = ring_shift(direction);
    let old: [Vec4; RING_LEN] =
        std::array::from_fn(|i| lattice.cubie(ring[i]).translation_column());
    for (i, &slot) in ring.iter().enumerate() {
        lattice
            .cubie_mut(slot)
            .set_translation_column(old[(i + shift) % RING_LEN]);
    }
}

/// Moves each whole transform two steps among the slots: ring slot
/// `i + shift` receives the transform that was in ring slot `i`.
fn shift_ring_transforms(lattice: &mut CubeLattice, slice: &Slice, direction: Direction) {
    let ring = slice.ring();
    let shift = ring_shift(direction);
    let old: [CubieTransform; RING_LEN] = std::array::from_fn(|i| *lattice.cubie(ring[i]));
    for (i, &old_transform) in old.iter().enumerate() {
        *lattice.cubie_mut(ring[(i + shift) % RING_LEN]) = old_transform;
    }
}

/// Marker returned by a completed turn, consumed by the audio collaborator.
#[derive(Debug, Clone, Copy)]
pub struct TurnCompleted {
    pub request: TurnRequest,
}

/// Executes one quarter turn against the lattice.
///
/// Runs to completion synchronously: all 9 rotations and both permutation
/// passes land before control returns, so a render pass never observes a
/// partially applied turn.
pub fn execute(lattice: &mut CubeLattice, request: TurnRequest) -> TurnCompleted {
    let slice = locate(lattice, request.axis, request.layer);
    let shift_direction = effective_direction(lattice, &slice, request.axis, request.direction);

    // The recovered axis sign already fixes the visual sense to the
    // request, so the rotation uses the requested direction; only the ring
    // shift follows the corrected one.
    let angle = FRAC_PI_2 * request.direction.signum();
    for &slot in slice.slots() {
        let local_axis = resolve_axis(lattice.cubie(slot), request.axis);
        lattice.cubie_mut(slot).rotate_local(local_axis, angle);
    }

    shift_ring_positions(lattice, &slice, shift_direction);
    shift_ring_transforms(lattice, &slice, shift_direction);

    TurnCompleted { request }
}

/// The puzzle core: owns the lattice and exposes the operations the
/// frame-loop driver needs.
#[derive(Debug, Clone)]
pub struct Cube {
    lattice: CubeLattice,
}

impl Cube {
    /// Creates a solved cube.
    pub fn new() -> Self {
        Self {
            lattice: CubeLattice::new(),
        }
    }

    /// Read-only lattice access for the render pass.
    pub fn lattice(&self) -> &CubeLattice {
        &self.lattice
    }

    /// Executes one quarter turn.
    pub fn turn(&mut self, request: TurnRequest) -> TurnCompleted {
        execute(&mut self.lattice, request)
    }

    /// Applies this frame's free-look rotation to the whole assembly.
    pub fn free_rotate(&mut self, delta: Quat) {
        self.lattice.apply_free_rotation(delta);
    }

    /// Restores the solved starting arrangement.
    pub fn reset(&mut self) {
        self.lattice.reset();
    }

    /// Applies `turns` random valid quarter turns and returns the sequence.
    pub fn scramble<R: Rng>(&mut self, turns: usize, rng: &mut R) -> Vec<TurnRequest> {
        (0..turns)
            .map(|_| {
                let request = TurnRequest {
                    axis: if rng.random_bool(0.5) { Axis::X } else { Axis::Y },
                    layer: [Layer::Near, Layer::Middle, Layer::Far][rng.random_range(0..3)],
                    direction: if rng.random_bool(0.5) {
                        Direction::Positive
                    } else {
                        Direction::Negative
                    },
                };
                execute(&mut self.lattice, request);
                request
            })
            .collect()
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
