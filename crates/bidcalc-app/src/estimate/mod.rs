//! Estimate editing: enumerated actions and a pure reducer

pub mod action;
pub mod reducer;

pub use action::{AdminField, CatalogField, EstimateAction, PaybackField, PhaseField, TruckFuelField};
pub use reducer::reduce;
