//! tj-core: stable foundation for trajkit.
//!
//! Contains:
//! - numeric (Real + float helpers)
//! - vec3 (3-component vector math over plain arrays)
//! - ticks (axis tick generation, value snapping and formatting)

pub mod numeric;
pub mod ticks;
pub mod vec3;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use ticks::*;
pub use vec3::*;
