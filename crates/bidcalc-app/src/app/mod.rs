//! Use cases built on the domain calculators

pub mod estimate_service;
