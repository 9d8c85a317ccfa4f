pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Non-2xx answer carrying the service's structured `{ "error": ... }`
	/// payload; the message is meant for the user verbatim.
	#[error("{message}")]
	Rejected { status: u16, message: String },
	/// Non-2xx answer without a structured error payload.
	#[error("Ranking service returned status {status}.")]
	Status { status: u16 },
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
	/// 2xx answer whose body does not decode as a result page.
	#[error("{message}")]
	InvalidResponse { message: String },
}
