//! Turn-request vocabulary.
//!
//! The control scheme exposes quarter turns about two world axes; a
//! request names the axis, which of the three layers along it to turn,
//! and the turn direction. Requests are ephemeral input, not stored state.

use std::fmt;

/// World axis a turn request refers to.
///
/// Only x and y are reachable from the controls; center-axis (z) turns
/// are not exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Vector component index used when reading coordinates along this axis.
    #[inline]
    pub(crate) fn component(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Which layer along the requested axis to turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Smallest coordinate along the axis.
    Near,
    /// The middle band.
    Middle,
    /// Largest coordinate along the axis.
    Far,
}

/// Turn direction: positive is counter-clockwise when viewed from outside
/// the cube along the positive request axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// The direction as a signed scalar.
    #[inline]
    pub fn signum(self) -> f32 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }

    /// The opposite turn direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }
}

/// One discrete quarter-turn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRequest {
    pub axis: Axis,
    pub layer: Layer,
    pub direction: Direction,
}

impl TurnRequest {
    /// The request that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.opposite(),
            ..self
        }
    }
}

impl fmt::Display for TurnRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.axis {
            Axis::X => 'x',
            Axis::Y => 'y',
        };
        let layer = match self.layer {
            Layer::Near => "near",
            Layer::Middle => "mid",
            Layer::Far => "far",
        };
        let sign = match self.direction {
            Direction::Positive => '+',
            Direction::Negative => '-',
        };
        write!(f, "{axis}:{layer}:{sign}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_flips_only_direction() {
        let request = TurnRequest {
            axis: Axis::X,
            layer: Layer::Far,
            direction: Direction::Positive,
        };
        let inverse = request.inverse();

        assert_eq!(inverse.axis, request.axis);
        assert_eq!(inverse.layer, request.layer);
        assert_eq!(inverse.direction, Direction::Negative);
        assert_eq!(inverse.inverse(), request);
    }

    #[test]
    fn test_display_is_compact() {
        let request = TurnRequest {
            axis: Axis::Y,
            layer: Layer::Middle,
            direction: Direction::Negative,
        };
        assert_eq!(request.to_string(), "y:mid:-");
    }
}
