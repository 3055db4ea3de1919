#![warn(clippy::style, clippy::complexity, clippy::cognitive_complexity)]
#![deny(clippy::perf, clippy::correctness)]

use {
	axum::{
		routing::{get, post},
		Router,
	},
	leaderboard_db::{schemas, RetryPolicy},
	log::{error, info},
	sqlx::PgPool,
	std::path::PathBuf,
	tower_http::services::{ServeDir, ServeFile},
};

pub mod config;
pub mod models;
pub mod routes;
pub mod util;

pub use models::{Error, Result};

/// Shared by every handler. Cloning is cheap; the pool is reference counted.
#[derive(Debug, Clone)]
pub struct GlobalState {
	pub pool: PgPool,
	pub retry: RetryPolicy,
}

/// Where the browser client lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAssets {
	pub dir: PathBuf,
	/// Served for every GET that matches neither an API route nor a file. Relative
	/// paths are resolved against `dir`.
	pub index_file: PathBuf,
}

impl Default for StaticAssets {
	fn default() -> Self {
		Self {
			dir: PathBuf::from("./public"),
			index_file: PathBuf::from("index.html"),
		}
	}
}

impl StaticAssets {
	pub fn index_path(&self) -> PathBuf {
		self.dir.join(&self.index_file)
	}
}

pub fn router(global_state: GlobalState, assets: &StaticAssets) -> Router {
	let client = ServeDir::new(&assets.dir).fallback(ServeFile::new(assets.index_path()));

	Router::new()
		.route("/api/scores", post(routes::scores::post_new).fallback_service(client.clone()))
		.route("/api/scores/:mode", get(routes::scores::get_top))
		.fallback_service(client)
		.with_state(global_state)
}

/// Creates the `scores` table before the listener starts. Tried exactly once, so
/// an unreachable database delays startup by at most one acquire timeout. Failure
/// is logged and otherwise ignored; requests report it until the database is back.
pub async fn ensure_schema(pool: &PgPool) -> bool {
	match schemas::ensure(pool, &RetryPolicy::never()).await {
		Ok(()) => {
			info!("DB ready.");
			true
		}
		Err(why) => {
			error!("DB init error: {why}");
			false
		}
	}
}
