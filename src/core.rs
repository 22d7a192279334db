pub mod accumulator;
pub mod baseline;
pub mod metrics;
pub mod pipeline;
pub mod reading;
pub mod scale;
