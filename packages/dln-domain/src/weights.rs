use serde::{Deserialize, Serialize};

/// Maximum drift of `alpha + beta + gamma` from 1.0 that still dispatches.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-5;

/// Relative contribution of the lexical (BM25), link-authority (PageRank),
/// and hub/authority (HITS) signals in the remote ranking computation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct WeightVector {
	pub alpha: f64,
	pub beta: f64,
	pub gamma: f64,
}

impl WeightVector {
	pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
		Self { alpha, beta, gamma }
	}

	pub fn sum(&self) -> f64 {
		self.alpha + self.beta + self.gamma
	}

	/// Gate applied before every weighted dispatch. A failing vector never
	/// reaches the network.
	pub fn validate(&self) -> Result<(), WeightSumError> {
		let sum = self.sum();

		if !sum.is_finite() || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
			return Err(WeightSumError { sum });
		}

		Ok(())
	}
}

impl Default for WeightVector {
	/// The defaults the service itself falls back to when weights are
	/// omitted.
	fn default() -> Self {
		Self::new(0.6, 0.3, 0.1)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Relevance weights must sum to 1 (got {sum}).")]
pub struct WeightSumError {
	pub sum: f64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_sums_within_tolerance() {
		assert!(WeightVector::new(0.6, 0.3, 0.1).validate().is_ok());
		assert!(WeightVector::new(0.5, 0.25, 0.25 + 9e-6).validate().is_ok());
		assert!(WeightVector::default().validate().is_ok());
	}

	#[test]
	fn rejects_sums_outside_tolerance() {
		let err = WeightVector::new(0.6, 0.3, 0.2).validate().expect_err("Expected sum error.");

		assert!((err.sum - 1.1).abs() < 1e-12);

		assert!(WeightVector::new(0.6, 0.3, 0.1 + 2e-5).validate().is_err());
		assert!(WeightVector::new(0.0, 0.0, 0.0).validate().is_err());
	}

	#[test]
	fn rejects_non_finite_sums() {
		assert!(WeightVector::new(f64::NAN, 0.3, 0.1).validate().is_err());
		assert!(WeightVector::new(f64::INFINITY, 0.3, 0.1).validate().is_err());
	}

	#[test]
	fn error_carries_the_offending_sum() {
		let err = WeightVector::new(0.2, 0.2, 0.2).validate().expect_err("Expected sum error.");
		let message = err.to_string();

		assert!(message.contains("0.6"), "Unexpected message: {message}");
	}
}
