use {
	crate::{
		models::scores::{CreatedScore, ScoreSubmission},
		GlobalState, Result,
	},
	axum::{extract::State, Json},
	leaderboard_db::{insert::insert_score, NewScore},
	log::{debug, info},
};

/// `POST /api/scores`
pub async fn post_new(
	State(global_state): State<GlobalState>,
	Json(submission): Json<ScoreSubmission>,
) -> Result<Json<CreatedScore>> {
	debug!("[scores::post_new]");
	debug!("> `submission`: {submission:#?}");

	let score = NewScore::try_from(submission)?;
	let id = insert_score(&score, &global_state.pool, &global_state.retry).await?;

	info!("New `{}` score #{id} by {:?}: {}ms.", score.mode, score.name, score.time_ms);

	Ok(Json(CreatedScore { id }))
}
