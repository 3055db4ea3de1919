use {
	crate::{retry::with_retry, serialize_date, Mode, RetryPolicy},
	chrono::{DateTime, Utc},
	log::info,
	serde::Serialize,
	sqlx::{FromRow, PgPool},
};

/// +------------+-------------+----------+---------------------------------------------+
/// | Column     | Type        | Nullable | Default / Constraint                        |
/// +------------+-------------+----------+---------------------------------------------+
/// | id         | serial      | NO       | PRIMARY KEY                                 |
/// | name       | text        | NO       |                                             |
/// | mode       | text        | NO       | CHECK (mode IN ('trainee','idol','legend')) |
/// | time_ms    | bigint      | NO       |                                             |
/// | time_str   | text        | NO       |                                             |
/// | moves      | integer     | NO       |                                             |
/// | created_at | timestamptz | YES      | now()                                       |
/// +------------+-------------+----------+---------------------------------------------+
pub const fn up() -> &'static str {
	r#"
CREATE TABLE
  IF NOT EXISTS scores (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    mode TEXT NOT NULL CHECK (mode IN ('trainee', 'idol', 'legend')),
    time_ms BIGINT NOT NULL,
    time_str TEXT NOT NULL,
    moves INTEGER NOT NULL,
    created_at TIMESTAMPTZ DEFAULT NOW()
  );
"#
}

/// Creates the `scores` table if it does not exist yet. Never drops or alters it.
pub async fn ensure(pool: &PgPool, retry: &RetryPolicy) -> sqlx::Result<()> {
	info!("ensuring table `scores` exists...");
	with_retry(retry, "ensure `scores`", || sqlx::query(up()).execute(pool)).await?;
	info!("table `scores` is ready.");

	Ok(())
}

/// One leaderboard entry as served to clients. `time_ms` is ranked on but never
/// exposed.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ScoreRow {
	pub id: i32,
	pub name: String,
	pub time_str: String,
	pub moves: i32,
	#[serde(serialize_with = "serialize_date")]
	pub created_at: DateTime<Utc>,
}

/// An already validated and normalized score, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
	pub name: String,
	pub mode: Mode,
	pub time_ms: i64,
	pub time_str: String,
	pub moves: i32,
}
