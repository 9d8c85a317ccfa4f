use serde::{Deserialize, Deserializer, Serialize};

/// One ranked document within a result page. Page order is the order the
/// service returned; descending score is assumed but not enforced here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoredDocument {
	pub doc_id: i64,
	pub score: f64,
	/// The service sends `null` for documents without stored metadata.
	#[serde(default, deserialize_with = "null_as_empty")]
	pub title: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub url: String,
}

/// Page cursor reported by the service. Constructed through [`Self::clamped`]
/// so `1 <= current_page <= total_pages` holds unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
	pub current_page: u32,
	pub total_pages: u32,
}

impl Pagination {
	/// Forces an out-of-contract cursor into range. The service reports
	/// `total_pages: 0` for an empty tail page and echoes out-of-range
	/// requested pages back unchanged.
	pub fn clamped(current_page: u32, total_pages: u32) -> Self {
		let total_pages = total_pages.max(1);
		let current_page = current_page.clamp(1, total_pages);

		Self { current_page, total_pages }
	}

	pub fn single_page() -> Self {
		Self { current_page: 1, total_pages: 1 }
	}
}

/// The payload of one successful search response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage {
	pub results: Vec<ScoredDocument>,
	pub pagination: Pagination,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
