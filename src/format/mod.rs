pub mod features;
pub mod metrics;
