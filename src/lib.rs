//! # PGA Engine Quickstart
//!
//! ```rust
//! use pga_engine::prelude::*;
//!
//! // Two orthogonal planes through the origin meet in the z axis
//! let x0 = Plane::new(1.0, 0.0, 0.0, 0.0);
//! let y0 = Plane::new(0.0, 1.0, 0.0, 0.0);
//! let meet = Bivector::try_from_entity(x0 * y0).unwrap();
//!
//! assert_eq!(meet.e12(), 1.0);
//! assert_eq!(meet.e21(), -1.0);
//! assert_eq!(meet.e01(), 0.0);
//! assert_eq!(meet.euclidean(), Line::new(1.0, 0.0, 0.0));
//! ```
//!
#![doc = include_str!("../README.md")]

// Layout and storage
pub mod layout; // slot table shared with build.rs
pub mod mask;
pub mod partition;

// Geometric product kernels, one per partition pair
pub mod kernels;

// Masked entity engine
pub mod entity;
pub mod error;

// Named entities
pub mod bivector;
pub mod direction;
pub mod line;
pub mod motor;
pub mod multivector;
pub mod plane;
pub mod point;

pub mod generator;
pub mod prelude;

// --- Public API exports ---

pub use entity::{Element, Entity};
pub use error::PgaError;
pub use mask::{Mask, PartitionMask, Product, Union};
pub use partition::Partition;

pub use bivector::Bivector;
pub use direction::Direction;
pub use line::{IdealLine, Line};
pub use motor::Motor;
pub use multivector::Multivector;
pub use plane::Plane;
pub use point::Point;
