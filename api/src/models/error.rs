use {
	axum::{
		http::StatusCode,
		response::{IntoResponse, Response},
		Json,
	},
	log::error,
	serde::Serialize,
	std::fmt::Display,
};

/// Global Result type for all handler functions
pub type Result<T> = std::result::Result<T, Error>;

/// Global error type for all handler functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// A required field was absent, `null`, or an empty string.
	MissingFields,

	/// The mode is not one of `trainee`, `idol`, `legend`.
	InvalidMode,

	/// `time_ms` was negative or not a finite number.
	InvalidTime,

	/// Anything that went wrong while talking to the database. The details are
	/// logged when this is created and never sent to the client.
	Database,
}

/// Body of every error response: `{ "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
	pub error: &'static str,
}

impl Error {
	pub const fn message(&self) -> &'static str {
		match self {
			Self::MissingFields => "Missing fields",
			Self::InvalidMode => "Invalid mode",
			Self::InvalidTime => "Invalid time",
			Self::Database => "DB error",
		}
	}

	pub const fn status(&self) -> StatusCode {
		match self {
			Self::MissingFields | Self::InvalidMode | Self::InvalidTime => StatusCode::BAD_REQUEST,
			Self::Database => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl std::error::Error for Error {}

impl Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.message())
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		(self.status(), Json(ErrorBody { error: self.message() })).into_response()
	}
}

impl From<sqlx::Error> for Error {
	fn from(value: sqlx::Error) -> Self {
		match value {
			why @ (sqlx::Error::Io(_)
			| sqlx::Error::Tls(_)
			| sqlx::Error::PoolTimedOut
			| sqlx::Error::PoolClosed
			| sqlx::Error::WorkerCrashed) => {
				error!("Failed to access database.\n{why:#?}");
			}
			why => {
				error!("Database error occurred.\n{why:#?}");
			}
		}

		Self::Database
	}
}

impl From<leaderboard_db::mode::UnknownMode> for Error {
	fn from(_: leaderboard_db::mode::UnknownMode) -> Self {
		Self::InvalidMode
	}
}
