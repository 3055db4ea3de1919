use {
	clap::Parser,
	color_eyre::Result as Eyre,
	leaderboard_api::{
		config::{Args, Config, Settings},
		ensure_schema, router, GlobalState,
	},
	log::{debug, error, info, warn},
};

#[tokio::main]
async fn main() -> Eyre<()> {
	color_eyre::install()?;
	let args = Args::parse();

	let config = Config::load(args.config_path.as_deref())?;
	let settings = Settings::resolve(args, config);

	env_logger::Builder::new()
		.parse_filters(&settings.log_filter)
		.init();

	debug!("Retry policy: {:?}.", settings.retry);

	if settings.database.database_url.is_some() {
		info!("DATABASE_URL present: true");
	} else {
		warn!("DATABASE_URL present: false. Falling back to libpq defaults; requests will fail until a database is reachable.");
	}

	let pool = settings.database.connect()?;

	ensure_schema(&pool).await;

	let global_state = GlobalState {
		pool: pool.clone(),
		retry: settings.retry,
	};

	let router = router(global_state, &settings.assets);

	info!(
		"Serving `{}`, falling back to `{}`.",
		settings.assets.dir.display(),
		settings.assets.index_path().display()
	);
	info!("Listening on {}.", settings.addr);

	axum::Server::try_bind(&settings.addr)?
		.serve(router.into_make_service())
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	pool.close().await;
	info!("Shut down.");

	Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(why) = tokio::signal::ctrl_c().await {
			error!("Failed to listen for Ctrl+C: {why}");
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
			Ok(mut signal) => {
				signal.recv().await;
			}
			Err(why) => {
				error!("Failed to listen for SIGTERM: {why}");
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => info!("Received Ctrl+C, shutting down."),
		_ = terminate => info!("Received SIGTERM, shutting down."),
	}
}
