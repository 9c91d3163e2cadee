//! # drift_field
//!
//! Simulation core for the ambient particle-drift backgrounds on the
//! Lumina UI landing page. A [`Field`] owns a fixed set of drifting
//! particles bound to a rectangular surface: each particle gets a random
//! position, radius, velocity and opacity at spawn, then moves one velocity
//! step per [`Field::tick`] and wraps to the opposite edge when it leaves
//! the bounds.
//!
//! The crate is deliberately renderer-free. The landing crate drives a
//! field from a `requestAnimationFrame` loop and paints the particles onto
//! a canvas; tests drive it directly. Speed is therefore frame-rate
//! dependent (one unit step per tick, no delta-time scaling) — an accepted
//! property of the effect, not a bug.
//!
//! ```rust
//! use drift_field::{Field, FieldConfig};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut field = Field::spawn(&FieldConfig::section(), 800.0, 400.0, &mut rng);
//! field.tick();
//! assert_eq!(field.len(), 40);
//! ```

mod config;
mod field;

pub use config::{FieldConfig, SizingPolicy};
pub use field::{Field, Particle};
