use {
	chrono::{DateTime, SecondsFormat, Utc},
	serde::{Serialize, Serializer},
};

pub mod insert;
pub mod mode;
pub mod pool;
pub mod retry;
pub mod schemas;
pub mod select;

pub use {
	mode::Mode,
	pool::{ConnectionSecurity, PoolConfig},
	retry::RetryPolicy,
	schemas::{NewScore, ScoreRow},
};

/// How many scores a leaderboard shows per mode.
pub const TOP_N: i64 = 5;

/// Formats a timestamp the way a browser's `Date#toJSON` does
/// (`2024-01-01T12:00:00.000Z`).
pub fn format_date(date: &DateTime<Utc>) -> String {
	date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize_date<S: Serializer>(
	date: &DateTime<Utc>,
	serializer: S,
) -> Result<S::Ok, S::Error> {
	format_date(date).serialize(serializer)
}
