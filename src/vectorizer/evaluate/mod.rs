pub mod classify;
pub mod metrics;
pub mod scoring;
