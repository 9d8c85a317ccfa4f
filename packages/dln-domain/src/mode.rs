/// Which search surface a session talks to and whether it sends the
/// relevance weights along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
	/// `/search` without weights; the service applies its own defaults.
	Basic,
	/// `/search` with explicit weights.
	Weighted,
	/// `/advanced-search` with explicit weights.
	Advanced,
}

impl SearchMode {
	pub fn from_label(label: &str) -> Option<Self> {
		match label {
			"basic" => Some(Self::Basic),
			"weighted" => Some(Self::Weighted),
			"advanced" => Some(Self::Advanced),
			_ => None,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Basic => "basic",
			Self::Weighted => "weighted",
			Self::Advanced => "advanced",
		}
	}

	/// Weighted modes validate the weight sum before every dispatch.
	pub fn weighted(self) -> bool {
		!matches!(self, Self::Basic)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_round_trip() {
		for mode in [SearchMode::Basic, SearchMode::Weighted, SearchMode::Advanced] {
			assert_eq!(SearchMode::from_label(mode.label()), Some(mode));
		}
		assert_eq!(SearchMode::from_label("hybrid"), None);
	}

	#[test]
	fn only_basic_is_unweighted() {
		assert!(!SearchMode::Basic.weighted());
		assert!(SearchMode::Weighted.weighted());
		assert!(SearchMode::Advanced.weighted());
	}
}
