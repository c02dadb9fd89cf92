//! Slice location: which 9 slots currently form the requested layer.
//!
//! Free rotation never snaps the assembly back to axis alignment, so "the
//! x layer" is not a fixed set of slots. Every turn request re-derives the
//! layer from the cubies' current world coordinates: outer layers from a
//! min/max scan of the six face-center slots, middle layers from the three
//! positive face-center representatives. Once the controlling slot is
//! known, the slice is read from a fixed table of slot indices.
//!
//! Every ring is enumerated circularly, alternating corner and edge slots,
//! with the layer's center slot last.

use crate::lattice::{coord_to_idx, CubeLattice};
use crate::request::{Axis, Direction, Layer};
use crate::transform::EPSILON;

/// The six outer-layer center slots, one per cube face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    XNeg,
    XPos,
    YNeg,
    YPos,
    ZNeg,
    ZPos,
}

/// The three mutually orthogonal middle layers, named by home lattice axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiddlePlane {
    X,
    Y,
    Z,
}

/// Which physical configuration the locator resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceCase {
    /// An outer layer, controlled by one of the six face-center slots.
    Face(Face),
    /// A middle layer through the true center.
    Middle(MiddlePlane),
}

/// An ordered view of one layer: 8 ring slots plus the center slot.
#[derive(Debug, Clone)]
pub struct Slice {
    slots: [usize; 9],
    case: SliceCase,
}

impl Slice {
    /// The 8 ring slots in circular traversal order.
    pub fn ring(&self) -> &[usize] {
        &self.slots[..8]
    }

    /// The center slot of the layer.
    pub fn center(&self) -> usize {
        self.slots[8]
    }

    /// All 9 slots, ring first, center last.
    pub fn slots(&self) -> &[usize; 9] {
        &self.slots
    }

    /// Which physical configuration was resolved.
    pub fn case(&self) -> SliceCase {
        self.case
    }
}

/// Face-center slots probed by the outer-layer scan.
const FACE_PROBES: [(Face, usize); 6] = [
    (Face::YNeg, coord_to_idx(1, 0, 1)),
    (Face::ZNeg, coord_to_idx(1, 1, 0)),
    (Face::XPos, coord_to_idx(2, 1, 1)),
    (Face::ZPos, coord_to_idx(1, 1, 2)),
    (Face::XNeg, coord_to_idx(0, 1, 1)),
    (Face::YPos, coord_to_idx(1, 2, 1)),
];

const YNEG_SLICE: [usize; 9] = [
    coord_to_idx(0, 0, 0),
    coord_to_idx(0, 0, 1),
    coord_to_idx(0, 0, 2),
    coord_to_idx(1, 0, 2),
    coord_to_idx(2, 0, 2),
    coord_to_idx(2, 0, 1),
    coord_to_idx(2, 0, 0),
    coord_to_idx(1, 0, 0),
    coord_to_idx(1, 0, 1),
];

const ZNEG_SLICE: [usize; 9] = [
    coord_to_idx(0, 0, 0),
    coord_to_idx(1, 0, 0),
    coord_to_idx(2, 0, 0),
    coord_to_idx(2, 1, 0),
    coord_to_idx(2, 2, 0),
    coord_to_idx(1, 2, 0),
    coord_to_idx(0, 2, 0),
    coord_to_idx(0, 1, 0),
    coord_to_idx(1, 1, 0),
];

const XNEG_SLICE: [usize; 9] = [
    coord_to_idx(0, 0, 0),
    coord_to_idx(0, 1, 0),
    coord_to_idx(0, 2, 0),
    coord_to_idx(0, 2, 1),
    coord_to_idx(0, 2, 2),
    coord_to_idx(0, 1, 2),
    coord_to_idx(0, 0, 2),
    coord_to_idx(0, 0, 1),
    coord_to_idx(0, 1, 1),
];

const XPOS_SLICE: [usize; 9] = [
    coord_to_idx(2, 0, 0),
    coord_to_idx(2, 1, 0),
    coord_to_idx(2, 2, 0),
    coord_to_idx(2, 2, 1),
    coord_to_idx(2, 2, 2),
    coord_to_idx(2, 1, 2),
    coord_to_idx(2, 0, 2),
    coord_to_idx(2, 0, 1),
    coord_to_idx(2, 1, 1),
];

const ZPOS_SLICE: [usize; 9] = [
    coord_to_idx(0, 0, 2),
    coord_to_idx(1, 0, 2),
    coord_to_idx(2, 0, 2),
    coord_to_idx(2, 1, 2),
    coord_to_idx(2, 2, 2),
    coord_to_idx(1, 2, 2),
    coord_to_idx(0, 2, 2),
    coord_to_idx(0, 1, 2),
    coord_to_idx(1, 1, 2),
];

const YPOS_SLICE: [usize; 9] = [
    coord_to_idx(0, 2, 0),
    coord_to_idx(0, 2, 1),
    coord_to_idx(0, 2, 2),
    coord_to_idx(1, 2, 2),
    coord_to_idx(2, 2, 2),
    coord_to_idx(2, 2, 1),
    coord_to_idx(2, 2, 0),
    coord_to_idx(1, 2, 0),
    coord_to_idx(1, 2, 1),
];

const MIDDLE_X_FORWARD: [usize; 9] = [
    coord_to_idx(1, 0, 0),
    coord_to_idx(1, 1, 0),
    coord_to_idx(1, 2, 0),
    coord_to_idx(1, 2, 1),
    coord_to_idx(1, 2, 2),
    coord_to_idx(1, 1, 2),
    coord_to_idx(1, 0, 2),
    coord_to_idx(1, 0, 1),
    coord_to_idx(1, 1, 1),
];

const MIDDLE_X_REVERSED: [usize; 9] = [
    coord_to_idx(1, 0, 0),
    coord_to_idx(1, 0, 1),
    coord_to_idx(1, 0, 2),
    coord_to_idx(1, 1, 2),
    coord_to_idx(1, 2, 2),
    coord_to_idx(1, 2, 1),
    coord_to_idx(1, 2, 0),
    coord_to_idx(1, 1, 0),
    coord_to_idx(1, 1, 1),
];

const MIDDLE_Y_FORWARD: [usize; 9] = [
    coord_to_idx(0, 1, 0),
    coord_to_idx(0, 1, 1),
    coord_to_idx(0, 1, 2),
    coord_to_idx(1, 1, 2),
    coord_to_idx(2, 1, 2),
    coord_to_idx(2, 1, 1),
    coord_to_idx(2, 1, 0),
    coord_to_idx(1, 1, 0),
    coord_to_idx(1, 1, 1),
];

const MIDDLE_Y_REVERSED: [usize; 9] = [
    coord_to_idx(0, 1, 0),
    coord_to_idx(1, 1, 0),
    coord_to_idx(2, 1, 0),
    coord_to_idx(2, 1, 1),
    coord_to_idx(2, 1, 2),
    coord_to_idx(1, 1, 2),
    coord_to_idx(0, 1, 2),
    coord_to_idx(0, 1, 1),
    coord_to_idx(1, 1, 1),
];

const MIDDLE_Z_FORWARD: [usize; 9] = [
    coord_to_idx(0, 0, 1),
    coord_to_idx(1, 0, 1),
    coord_to_idx(2, 0, 1),
    coord_to_idx(2, 1, 1),
    coord_to_idx(2, 2, 1),
    coord_to_idx(1, 2, 1),
    coord_to_idx(0, 2, 1),
    coord_to_idx(0, 1, 1),
    coord_to_idx(1, 1, 1),
];

const MIDDLE_Z_REVERSED: [usize; 9] = [
    coord_to_idx(0, 0, 1),
    coord_to_idx(0, 1, 1),
    coord_to_idx(0, 2, 1),
    coord_to_idx(1, 2, 1),
    coord_to_idx(2, 2, 1),
    coord_to_idx(2, 1, 1),
    coord_to_idx(2, 0, 1),
    coord_to_idx(1, 0, 1),
    coord_to_idx(1, 1, 1),
];

fn face_slots(face: Face) -> &'static [usize; 9] {
    match face {
        Face::XNeg => &XNEG_SLICE,
        Face::XPos => &XPOS_SLICE,
        Face::YNeg => &YNEG_SLICE,
        Face::YPos => &YPOS_SLICE,
        Face::ZNeg => &ZNEG_SLICE,
        Face::ZPos => &ZPOS_SLICE,
    }
}

fn middle_slots(plane: MiddlePlane, reversed: bool) -> &'static [usize; 9] {
    match (plane, reversed) {
        (MiddlePlane::X, false) => &MIDDLE_X_FORWARD,
        (MiddlePlane::X, true) => &MIDDLE_X_REVERSED,
        (MiddlePlane::Y, false) => &MIDDLE_Y_FORWARD,
        (MiddlePlane::Y, true) => &MIDDLE_Y_REVERSED,
        (MiddlePlane::Z, false) => &MIDDLE_Z_FORWARD,
        (MiddlePlane::Z, true) => &MIDDLE_Z_REVERSED,
    }
}

/// Finds the 9 slots that spatially constitute the requested layer now.
pub fn locate(lattice: &CubeLattice, axis: Axis, layer: Layer) -> Slice {
    match layer {
        Layer::Near => locate_face(lattice, axis, false),
        Layer::Far => locate_face(lattice, axis, true),
        Layer::Middle => locate_middle(lattice, axis),
    }
}

/// Outer-layer scan: the face-center slot with the extreme coordinate
/// along the request axis controls the layer.
fn locate_face(lattice: &CubeLattice, axis: Axis, far: bool) -> Slice {
    let component = axis.component();

    let mut best = Face::YNeg;
    let mut best_key = f32::NEG_INFINITY;
    let mut runner_up = f32::NEG_INFINITY;
    for (face, slot) in FACE_PROBES {
        let coordinate = lattice.cubie(slot).position()[component];
        let key = if far { coordinate } else { -coordinate };
        if key > best_key {
            runner_up = best_key;
            best_key = key;
            best = face;
        } else if key > runner_up {
            runner_up = key;
        }
    }
    debug_assert!(
        best_key - runner_up > EPSILON,
        "ambiguous outer-layer selection along {axis:?}"
    );

    Slice {
        slots: *face_slots(best),
        case: SliceCase::Face(best),
    }
}

/// Middle-layer disambiguation among the three orthogonal bands.
///
/// The two positive face-center representatives with the smallest combined
/// |coordinate| along the request axis lie in the turning layer (their
/// band does not change along that axis); the excluded representative's
/// sign selects the ring traversal sense.
fn locate_middle(lattice: &CubeLattice, axis: Axis) -> Slice {
    let component = axis.component();
    let coordinate =
        |x, y, z| lattice.cubie(coord_to_idx(x, y, z)).position()[component];

    let x_rep = coordinate(2, 1, 1);
    let y_rep = coordinate(1, 2, 1);
    let z_rep = coordinate(1, 1, 2);

    let candidates = [
        (x_rep.abs() + y_rep.abs(), MiddlePlane::Z, z_rep),
        (y_rep.abs() + z_rep.abs(), MiddlePlane::X, x_rep),
        (z_rep.abs() + x_rep.abs(), MiddlePlane::Y, y_rep),
    ];

    let mut best = candidates[0];
    let mut runner_up = f32::INFINITY;
    for candidate in candidates[1..].iter().copied() {
        if candidate.0 < best.0 {
            runner_up = best.0;
            best = candidate;
        } else if candidate.0 < runner_up {
            runner_up = candidate.0;
        }
    }
    let (_, plane, excluded) = best;
    debug_assert!(
        runner_up - best.0 > EPSILON,
        "ambiguous middle-layer selection along {axis:?}"
    );

    Slice {
        slots: *middle_slots(plane, excluded < 0.0),
        case: SliceCase::Middle(plane),
    }
}

/// Corrects the requested direction for layers whose ring enumeration runs
/// opposite to the request axis sign.
///
/// A positive-face table resolved while its center currently reads a
/// negative coordinate (or a negative-face table reading positive) is
/// traversed against the turn's physical sense, so the ring shift must
/// run the other way. Middle layers resolve to the true center and are
/// never corrected.
pub fn effective_direction(
    lattice: &CubeLattice,
    slice: &Slice,
    axis: Axis,
    direction: Direction,
) -> Direction {
    let SliceCase::Face(face) = slice.case else {
        return direction;
    };
    let coordinate = lattice.cubie(slice.center()).position()[axis.component()];
    let reversed = match face {
        Face::XPos | Face::YPos | Face::ZPos => coordinate < 0.0,
        Face::XNeg | Face::YNeg | Face::ZNeg => coordinate > 0.0,
    };
    if reversed {
        direction.opposite()
    } else {
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::idx_to_coord;
    use glam::Quat;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn home_coords(slice: &Slice) -> Vec<(usize, usize, usize)> {
        slice.slots().iter().map(|&slot| idx_to_coord(slot)).collect()
    }

    #[test]
    fn test_fresh_lattice_resolves_all_outer_layers() {
        let lattice = CubeLattice::new();

        let cases = [
            (Axis::X, Layer::Near, Face::XNeg),
            (Axis::X, Layer::Far, Face::XPos),
            (Axis::Y, Layer::Near, Face::YNeg),
            (Axis::Y, Layer::Far, Face::YPos),
        ];
        for (axis, layer, expected) in cases {
            let slice = locate(&lattice, axis, layer);
            assert_eq!(slice.case(), SliceCase::Face(expected));
        }
    }

    #[test]
    fn test_face_slice_members_share_the_face_plane() {
        let lattice = CubeLattice::new();
        let slice = locate(&lattice, Axis::X, Layer::Far);

        for &(x, _, _) in &home_coords(&slice) {
            assert_eq!(x, 2);
        }
        assert_eq!(slice.center(), coord_to_idx(2, 1, 1));
        assert_eq!(slice.ring().len(), 8);
    }

    #[test]
    fn test_fresh_lattice_resolves_matching_middle_planes() {
        let lattice = CubeLattice::new();

        let slice = locate(&lattice, Axis::X, Layer::Middle);
        assert_eq!(slice.case(), SliceCase::Middle(MiddlePlane::X));
        for &(x, _, _) in &home_coords(&slice) {
            assert_eq!(x, 1);
        }
        // positive excluded representative picks the forward traversal
        assert_eq!(slice.ring()[0], coord_to_idx(1, 0, 0));
        assert_eq!(slice.ring()[1], coord_to_idx(1, 1, 0));

        let slice = locate(&lattice, Axis::Y, Layer::Middle);
        assert_eq!(slice.case(), SliceCase::Middle(MiddlePlane::Y));
        assert_eq!(slice.center(), coord_to_idx(1, 1, 1));
    }

    #[test]
    fn test_face_selection_follows_free_rotation() {
        let mut lattice = CubeLattice::new();
        // a quarter turn of the whole assembly about z carries the former
        // -y face onto the +x side
        lattice.apply_free_rotation(Quat::from_rotation_z(FRAC_PI_2));

        let slice = locate(&lattice, Axis::X, Layer::Far);
        assert_eq!(slice.case(), SliceCase::Face(Face::YNeg));
        assert_eq!(slice.center(), coord_to_idx(1, 0, 1));
    }

    #[test]
    fn test_middle_selection_follows_free_rotation() {
        let mut lattice = CubeLattice::new();
        lattice.apply_free_rotation(Quat::from_rotation_z(FRAC_PI_2));

        // the home y band now spans world x = 0
        let slice = locate(&lattice, Axis::X, Layer::Middle);
        assert_eq!(slice.case(), SliceCase::Middle(MiddlePlane::Y));
        // the excluded +y representative now reads negative along x
        assert_eq!(slice.ring()[0], coord_to_idx(0, 1, 0));
        assert_eq!(slice.ring()[1], coord_to_idx(1, 1, 0));
    }

    #[test]
    fn test_effective_direction_is_identity_on_fresh_lattice() {
        let lattice = CubeLattice::new();
        for (axis, layer) in [
            (Axis::X, Layer::Near),
            (Axis::X, Layer::Far),
            (Axis::Y, Layer::Near),
            (Axis::Y, Layer::Far),
        ] {
            let slice = locate(&lattice, axis, layer);
            assert_eq!(
                effective_direction(&lattice, &slice, axis, Direction::Positive),
                Direction::Positive
            );
        }
    }

    #[test]
    fn test_effective_direction_flips_after_half_turn_reorientation() {
        let mut lattice = CubeLattice::new();
        lattice.apply_free_rotation(Quat::from_rotation_z(PI));

        // the former -x face now controls the far x layer and reads positive
        let slice = locate(&lattice, Axis::X, Layer::Far);
        assert_eq!(slice.case(), SliceCase::Face(Face::XNeg));
        assert_eq!(
            effective_direction(&lattice, &slice, Axis::X, Direction::Positive),
            Direction::Negative
        );
    }

    #[test]
    fn test_effective_direction_never_flips_middle_layers() {
        let mut lattice = CubeLattice::new();
        lattice.apply_free_rotation(Quat::from_rotation_z(PI));

        let slice = locate(&lattice, Axis::Y, Layer::Middle);
        assert_eq!(
            effective_direction(&lattice, &slice, Axis::Y, Direction::Negative),
            Direction::Negative
        );
    }

    #[test]
    fn test_ring_tables_alternate_corners_and_edges() {
        for face in [Face::XNeg, Face::XPos, Face::YNeg, Face::YPos, Face::ZNeg, Face::ZPos] {
            let slots = face_slots(face);
            for (position, &slot) in slots[..8].iter().enumerate() {
                let (x, y, z) = idx_to_coord(slot);
                let off_center = [x, y, z].iter().filter(|&&c| c != 1).count();
                // even ring positions are corners (3 off-center coords on a
                // face layer), odd positions are edges
                let expected = if position % 2 == 0 { 3 } else { 2 };
                assert_eq!(off_center, expected, "{face:?} ring position {position}");
            }
        }
    }
}
