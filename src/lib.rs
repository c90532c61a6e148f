//! bump-chart-rs: bump chart construction for rally and competition standings.
//!
//! The crate keeps a strict split between chart domain logic (`core`), pure
//! frame construction (`api`) and backend-agnostic rendering (`render`), so
//! the whole layout pipeline stays deterministic and testable without a
//! drawing surface.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BumpChart, ChartConfig, ChartScales};
pub use error::{ChartError, ChartResult};
