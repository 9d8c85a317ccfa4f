use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub search: Search,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	/// Base URL of the ranking service, without a trailing slash.
	pub api_base: String,
	pub timeout_ms: u64,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	/// One of `basic`, `weighted`, or `advanced`.
	pub mode: String,
	pub weights: Weights,
}

/// Initial weight vector for weighted modes; the user retunes these within
/// a session, so the sum rule is enforced at dispatch time, not here.
#[derive(Debug, Deserialize)]
pub struct Weights {
	pub alpha: f64,
	pub beta: f64,
	pub gamma: f64,
}
