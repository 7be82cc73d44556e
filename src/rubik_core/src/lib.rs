//! The 3×3×3 cube as a group.
//!
//! `PRubik` is every way of assembling the cube's stickers into edges and corners, reachable or
//! not. It forms a group under composition. `PRubik::invariant` maps it onto a group of order 12,
//! and the configurations sent to the identity are exactly the ones a real cube can reach by
//! turning its faces; those are wrapped by `Rubik`.

pub mod classes;
pub mod cube;
pub mod group;
pub mod invariant;
pub mod math;
mod moves;
pub mod orientation;
pub mod piece;
pub mod reachable;

pub use classes::{Corner, Edge};
pub use cube::{CubeError, PRubik};
pub use group::Group;
pub use invariant::{Invariant, Sign, Twist};
pub use orientation::{Axis, Orientation};
pub use piece::{CornerPiece, EdgePiece, PieceError};
pub use reachable::{InvalidCube, Mismatch, Rubik, TurnGroup};
