//! Service layer for Salescast
//!
//! The pipeline stages: CSV loading and column resolution, row cleaning,
//! monthly aggregation, and the session object that runs them in order.

pub mod aggregator;
pub mod detect;
pub mod loader;
pub mod normalizer;
pub mod pipeline;

pub use aggregator::aggregate_monthly;
pub use loader::{ColumnSpec, RawTable, ResolvedColumns};
pub use normalizer::NormalizerOptions;
pub use pipeline::{ForecastSession, SessionConfig, SessionOutcome};
