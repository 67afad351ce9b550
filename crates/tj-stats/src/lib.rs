//! Per-timestep statistics over a trajectory batch.
//!
//! Reduces N index-aligned realizations to one record per time index with
//! min/max/mean/std bands for speed and acceleration magnitude, ready for a
//! chart layer to draw.

pub mod aggregate;

pub use aggregate::{StatBand, StatRecord, aggregate};
