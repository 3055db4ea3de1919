use {
	crate::{retry::with_retry, Mode, RetryPolicy, ScoreRow},
	log::debug,
	sqlx::PgPool,
};

const TOP_SCORES: &str = r#"
	SELECT
	  id,
	  name,
	  time_str,
	  moves,
	  created_at
	FROM scores
	WHERE mode = $1
	ORDER BY time_ms ASC, moves ASC
	LIMIT $2
"#;

/// The best `limit` runs for `mode`: fastest first, fewer moves breaking ties.
pub async fn get_top(
	mode: Mode,
	limit: i64,
	pool: &PgPool,
	retry: &RetryPolicy,
) -> sqlx::Result<Vec<ScoreRow>> {
	debug!("Fetching top {limit} `{mode}` scores from DB.");

	with_retry(retry, "select top scores", || {
		sqlx::query_as::<_, ScoreRow>(TOP_SCORES)
			.bind(mode.as_str())
			.bind(limit)
			.fetch_all(pool)
	})
	.await
}
