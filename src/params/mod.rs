//! Parameter definitions with units and documented semantics.
//!
//! All configuration is plain data with `Default` impls; nothing is read from
//! the environment or from files.

mod surface;
pub mod waves;

// Re-export all types
pub use surface::{validate_tiling, StrategyKind, SurfaceParams};
