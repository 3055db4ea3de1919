use {
	crate::{retry::with_retry, NewScore, RetryPolicy},
	log::debug,
	sqlx::PgPool,
};

/// Inserts one score and returns its generated id. `created_at` is filled in by
/// the database.
pub async fn insert_score(score: &NewScore, pool: &PgPool, retry: &RetryPolicy) -> sqlx::Result<i32> {
	debug!("Inserting {score:?}.");

	let (id,) = with_retry(retry, "insert score", || {
		sqlx::query_as::<_, (i32,)>(
			r#"
			INSERT INTO scores
			  (name, mode, time_ms, time_str, moves)
			VALUES
			  ($1, $2, $3, $4, $5)
			RETURNING id
			"#,
		)
		.bind(&score.name)
		.bind(score.mode.as_str())
		.bind(score.time_ms)
		.bind(&score.time_str)
		.bind(score.moves)
		.fetch_one(pool)
	})
	.await?;

	Ok(id)
}
