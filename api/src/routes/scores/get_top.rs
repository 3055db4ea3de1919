use {
	crate::{GlobalState, Result},
	axum::{
		extract::{Path, State},
		Json,
	},
	leaderboard_db::{select, Mode, ScoreRow, TOP_N},
	log::debug,
};

/// `GET /api/scores/:mode`
pub async fn get_top(
	Path(mode): Path<String>,
	State(global_state): State<GlobalState>,
) -> Result<Json<Vec<ScoreRow>>> {
	debug!("[scores::get_top]");
	debug!("> `mode`: {mode:?}");

	let mode = mode.parse::<Mode>()?;

	let result = select::get_top(mode, TOP_N, &global_state.pool, &global_state.retry).await?;

	debug!("Database result: {result:#?}");

	Ok(Json(result))
}
