//! Twisty Cube Core
//!
//! Models the mechanical state of a 3x3x3 twisty puzzle and resolves
//! slice-turn requests into consistent geometric transformations while the
//! whole assembly is freely reoriented every frame. Layers are re-derived
//! from the cubies' current world coordinates on every request, so turns
//! stay correct no matter how the cube has been spun around.

pub mod engine;
pub mod input;
pub mod lattice;
pub mod request;
pub mod slice;
pub mod transform;

pub use engine::{Cube, TurnCompleted};
pub use request::{Axis, Direction, Layer, TurnRequest};
