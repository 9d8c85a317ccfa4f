mod error;

pub use error::{Error, Result};

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use dln_domain::{Pagination, ResultPage, ScoredDocument, SearchMode, WeightVector};

/// One search dispatch as the wire sees it: endpoint selection via `mode`,
/// plus the query-string parameters.
#[derive(Debug, Clone)]
pub struct SearchRequest<'a> {
	pub mode: SearchMode,
	pub query: &'a str,
	pub page: u32,
	pub weights: Option<WeightVector>,
}

/// HTTP client for the ranking service.
pub struct RankingClient {
	http: Client,
	api_base: String,
}

impl RankingClient {
	pub fn new(api_base: &str, timeout_ms: u64) -> Result<Self> {
		let http = Client::builder().timeout(Duration::from_millis(timeout_ms)).build()?;

		Ok(Self { http, api_base: api_base.trim_end_matches('/').to_string() })
	}

	pub async fn search(&self, request: &SearchRequest<'_>) -> Result<ResultPage> {
		let url = format!("{}{}", self.api_base, endpoint_path(request.mode));
		let mut params = vec![
			("query", request.query.to_string()),
			("page", request.page.to_string()),
		];

		if let Some(weights) = request.weights {
			params.push(("alpha", weights.alpha.to_string()));
			params.push(("beta", weights.beta.to_string()));
			params.push(("gamma", weights.gamma.to_string()));
		}

		let res = self.http.get(url).query(&params).send().await?;
		let status = res.status();
		let body = res.bytes().await?;

		if !status.is_success() {
			return Err(rejection(status, &body));
		}

		parse_result_page(&body)
	}

	/// Health probe against the service's `/are-you-alive` endpoint.
	pub async fn is_alive(&self) -> bool {
		let url = format!("{}/are-you-alive", self.api_base);

		match self.http.get(url).send().await {
			Ok(res) => res.status().is_success(),
			Err(_) => false,
		}
	}
}

fn endpoint_path(mode: SearchMode) -> &'static str {
	match mode {
		SearchMode::Basic | SearchMode::Weighted => "/search",
		SearchMode::Advanced => "/advanced-search",
	}
}

fn rejection(status: StatusCode, body: &[u8]) -> Error {
	if let Ok(value) = serde_json::from_slice::<Value>(body)
		&& let Some(message) = value.get("error").and_then(Value::as_str)
	{
		return Error::Rejected { status: status.as_u16(), message: message.to_string() };
	}

	Error::Status { status: status.as_u16() }
}

#[derive(Debug, Deserialize)]
struct WireResultPage {
	results: Vec<ScoredDocument>,
	pagination: WirePagination,
}

/// Extra fields (`total_results`, `per_page`) are tolerated and ignored.
#[derive(Debug, Deserialize)]
struct WirePagination {
	#[serde(default)]
	current_page: i64,
	#[serde(default)]
	total_pages: i64,
}

fn parse_result_page(body: &[u8]) -> Result<ResultPage> {
	let value: Value = serde_json::from_slice(body)
		.map_err(|err| Error::InvalidResponse { message: format!("Response is not JSON: {err}.") })?;

	// The service answers a bare empty array when nothing matches at all.
	if let Some(items) = value.as_array()
		&& items.is_empty()
	{
		return Ok(ResultPage { results: Vec::new(), pagination: Pagination::single_page() });
	}

	let wire: WireResultPage = serde_json::from_value(value).map_err(|err| {
		Error::InvalidResponse { message: format!("Response is not a result page: {err}.") }
	})?;
	let pagination = Pagination::clamped(
		saturating_page(wire.pagination.current_page),
		saturating_page(wire.pagination.total_pages),
	);

	Ok(ResultPage { results: wire.results, pagination })
}

fn saturating_page(value: i64) -> u32 {
	value.clamp(0, i64::from(u32::MAX)) as u32
}
