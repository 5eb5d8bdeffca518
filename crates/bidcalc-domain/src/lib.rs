//! Bid pricing domain
//!
//! Value records describing an estimate (`model`) and the pure calculators that
//! turn them into cost, revenue and margin figures (`service`).

pub mod model;
pub mod numeric;
pub mod service;
