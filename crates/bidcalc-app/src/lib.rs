//! Application service layer - config, catalog, normalization, estimate editing

pub mod app;
pub mod catalog_loader;
pub mod config;
pub mod constants;
pub mod estimate;
pub mod normalize;

pub use app::estimate_service::{compute_breakdown, estimate_fingerprint, load_estimate, EstimateBreakdown};
pub use config::{Config, PricingDefaults};
pub use estimate::{reduce, EstimateAction};
pub use normalize::normalize_estimate;
