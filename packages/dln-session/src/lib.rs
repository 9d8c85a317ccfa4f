use std::mem;

use dln_client::{Error as ClientError, RankingClient, SearchRequest};
use dln_domain::{ResultPage, SearchMode, WeightVector};

/// Shown for transport-level failures where the service produced no usable
/// error message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Search failed. Check the service connection and try again.";

/// Visible state of one search session. Query and weights live on the
/// session itself and persist across every transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
	Idle,
	Loading,
	Success(ResultPage),
	Error {
		message: String,
		/// Last successful page, kept when a local validation failure
		/// blocked the dispatch. `None` after request/transport failures:
		/// those clear the results.
		retained: Option<ResultPage>,
	},
}

impl SessionState {
	/// The page currently visible to the user, if any.
	pub fn result_page(&self) -> Option<&ResultPage> {
		match self {
			Self::Success(page) => Some(page),
			Self::Error { retained: Some(page), .. } => Some(page),
			_ => None,
		}
	}

	pub fn error_message(&self) -> Option<&str> {
		match self {
			Self::Error { message, .. } => Some(message),
			_ => None,
		}
	}
}

/// One continuous user interaction sequence from first query to reset.
///
/// Turns a user intent ("search this query at this page with these weights")
/// into exactly one validated network call and deterministically folds the
/// outcome back into [`SessionState`]. Exclusive borrows serialize the
/// dispatches themselves; the ticket counter additionally drops any response
/// whose dispatch has been superseded in the meantime.
pub struct SearchSession {
	client: RankingClient,
	mode: SearchMode,
	weights: WeightVector,
	query: String,
	state: SessionState,
	ticket: u64,
}

impl SearchSession {
	pub fn new(client: RankingClient, mode: SearchMode) -> Self {
		Self::with_weights(client, mode, WeightVector::default())
	}

	pub fn with_weights(client: RankingClient, mode: SearchMode, weights: WeightVector) -> Self {
		Self {
			client,
			mode,
			weights,
			query: String::new(),
			state: SessionState::Idle,
			ticket: 0,
		}
	}

	pub fn state(&self) -> &SessionState {
		&self.state
	}

	pub fn mode(&self) -> SearchMode {
		self.mode
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn weights(&self) -> WeightVector {
		self.weights
	}

	/// Takes effect on the next dispatch; the sum rule is checked there,
	/// not here, so the user can pass through invalid intermediate values
	/// while retuning.
	pub fn set_weights(&mut self, weights: WeightVector) {
		self.weights = weights;
	}

	pub fn current_page(&self) -> Option<u32> {
		self.state.result_page().map(|page| page.pagination.current_page)
	}

	pub fn total_pages(&self) -> Option<u32> {
		self.state.result_page().map(|page| page.pagination.total_pages)
	}

	/// Stores the query and dispatches at page 1. Blank text is a no-op.
	pub async fn submit(&mut self, text: &str) {
		let text = text.trim();

		if text.is_empty() {
			tracing::debug!("Blank query ignored.");

			return;
		}

		self.query = text.to_string();
		self.dispatch(1).await;
	}

	/// Re-dispatches the current query at `page`. A no-op unless a page is
	/// visible and `page` is a different in-bounds page.
	pub async fn go_to_page(&mut self, page: u32) {
		let Some(pagination) = self.state.result_page().map(|current| current.pagination) else {
			return;
		};

		if page < 1 || page > pagination.total_pages || page == pagination.current_page {
			return;
		}

		self.dispatch(page).await;
	}

	pub async fn next_page(&mut self) {
		if let Some(pagination) = self.state.result_page().map(|current| current.pagination)
			&& pagination.current_page < pagination.total_pages
		{
			self.dispatch(pagination.current_page + 1).await;
		}
	}

	pub async fn previous_page(&mut self) {
		if let Some(pagination) = self.state.result_page().map(|current| current.pagination)
			&& pagination.current_page > 1
		{
			self.dispatch(pagination.current_page - 1).await;
		}
	}

	/// Returns to `Idle`, clearing query, results, and error. Weights are a
	/// durable user preference within the session and survive the reset.
	/// Also supersedes any in-flight dispatch so a late response cannot
	/// resurrect the cleared results.
	pub fn reset(&mut self) {
		self.query.clear();
		self.ticket += 1;
		self.state = SessionState::Idle;
	}

	async fn dispatch(&mut self, page: u32) {
		let weights = if self.mode.weighted() {
			match self.weights.validate() {
				Ok(()) => Some(self.weights),
				Err(err) => {
					tracing::debug!(sum = err.sum, "Weight validation blocked dispatch.");

					let retained = self.take_result_page();

					self.state = SessionState::Error { message: err.to_string(), retained };

					return;
				},
			}
		} else {
			None
		};
		let ticket = self.issue_ticket();

		self.state = SessionState::Loading;

		let request = SearchRequest { mode: self.mode, query: &self.query, page, weights };
		let outcome = self.client.search(&request).await;

		self.apply(ticket, outcome);
	}

	fn issue_ticket(&mut self) -> u64 {
		self.ticket += 1;
		self.ticket
	}

	fn take_result_page(&mut self) -> Option<ResultPage> {
		match mem::replace(&mut self.state, SessionState::Idle) {
			SessionState::Success(page) => Some(page),
			SessionState::Error { retained, .. } => retained,
			_ => None,
		}
	}

	/// Folds a dispatch outcome into visible state. Outcomes from
	/// superseded tickets are dropped unseen.
	fn apply(&mut self, ticket: u64, outcome: dln_client::Result<ResultPage>) {
		if ticket != self.ticket {
			tracing::debug!(ticket, latest = self.ticket, "Dropping superseded response.");

			return;
		}

		match outcome {
			Ok(page) => {
				self.state = SessionState::Success(page);
			},
			Err(err) => {
				let message = match &err {
					ClientError::Rejected { message, .. } => message.clone(),
					_ => FALLBACK_ERROR_MESSAGE.to_string(),
				};

				tracing::warn!(error = %err, "Search request failed.");

				self.state = SessionState::Error { message, retained: None };
			},
		}
	}
}
