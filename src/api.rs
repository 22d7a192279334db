pub mod envoy;
pub mod pvoutput;
