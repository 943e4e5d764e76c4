// src/prelude.rs
//! The “everything” import for PGA Engine.
//!
//! Brings you the entity types and operator traits with one glob:
//! ```rust
//! use pga_engine::prelude::*;
//! ```

// core data types
pub use crate::entity::{Element, Entity};
pub use crate::mask::{Mask, PartitionMask};
pub use crate::partition::Partition;

// named entities
pub use crate::bivector::Bivector;
pub use crate::direction::Direction;
pub use crate::line::{IdealLine, Line};
pub use crate::motor::Motor;
pub use crate::multivector::Multivector;
pub use crate::plane::Plane;
pub use crate::point::Point;

// basis generators
pub use crate::generator::{E0, E01, E013, E02, E021, E03, E032, E1, E12, E123, E2, E23, E3, E31, I};
