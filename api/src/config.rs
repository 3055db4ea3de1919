//! Command line flags, environment variables and an optional `config.toml`, merged
//! into [`Settings`]. Flags and environment variables win over the file, the file
//! wins over the defaults.

use {
	crate::StaticAssets,
	clap::Parser,
	color_eyre::{eyre::WrapErr, Result as Eyre},
	leaderboard_db::{ConnectionSecurity, PoolConfig, RetryPolicy},
	serde::Deserialize,
	std::{
		net::{Ipv4Addr, SocketAddr},
		path::{Path, PathBuf},
		time::Duration,
	},
};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";
pub const DEFAULT_LOG_FILTER: &str = "leaderboard_api=INFO,leaderboard_db=INFO";
const DEBUG_LOG_FILTER: &str = "leaderboard_api=DEBUG,leaderboard_db=DEBUG";

#[derive(Debug, Default, Parser)]
#[command(version, about = "Leaderboard backend for the browser game.")]
pub struct Args {
	/// Print debug information.
	#[arg(long)]
	pub debug: bool,

	/// `RUST_LOG` value.
	#[arg(long = "log", env = "RUST_LOG")]
	pub log_level: Option<String>,

	/// Path to a `config.toml`. Defaults to `./config.toml` if that file exists.
	#[arg(short, long = "config")]
	pub config_path: Option<PathBuf>,

	/// Defaults to `3000`.
	#[arg(short, long, env = "PORT")]
	pub port: Option<u16>,

	/// Defaults to `0.0.0.0`.
	#[arg(long, env = "IP_ADDRESS")]
	pub ip_address: Option<Ipv4Addr>,

	/// PostgreSQL connection string.
	#[arg(long, env = "DATABASE_URL")]
	pub database_url: Option<String>,

	/// TLS policy for the database connection. Detected from the connection string
	/// if not set.
	#[arg(long, env = "DATABASE_SSL", value_enum)]
	pub database_ssl: Option<ConnectionSecurity>,

	/// Upper bound on pooled database connections. Defaults to `3`.
	#[arg(long, env = "DATABASE_MAX_CONNECTIONS")]
	pub max_connections: Option<u32>,

	/// Directory holding the browser client. Defaults to `./public`.
	#[arg(long, env = "STATIC_DIR")]
	pub static_dir: Option<PathBuf>,

	/// Page served for unknown routes, relative to the static directory. Defaults
	/// to `index.html`.
	#[arg(long, env = "INDEX_FILE")]
	pub index_file: Option<PathBuf>,
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub ip_address: Option<[u8; 4]>,
	pub port: Option<u16>,
	pub database_url: Option<String>,
	pub database_ssl: Option<ConnectionSecurity>,
	pub max_connections: Option<u32>,
	pub acquire_timeout_secs: Option<u64>,
	pub idle_timeout_secs: Option<u64>,
	pub retry_attempts: Option<u32>,
	pub retry_backoff_ms: Option<u64>,
	pub static_dir: Option<PathBuf>,
	pub index_file: Option<PathBuf>,
	pub log_level: Option<String>,
}

impl Config {
	pub fn parse(config_file: &str) -> Eyre<Self> {
		toml::from_str(config_file).wrap_err("Invalid config file.")
	}

	/// Reads `path` if given, otherwise `./config.toml` if it exists. No file at all
	/// is fine; an explicitly requested file that is missing is not.
	pub fn load(path: Option<&Path>) -> Eyre<Self> {
		let path = match path {
			Some(path) => path,
			None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Path::new(DEFAULT_CONFIG_PATH),
			None => return Ok(Self::default()),
		};

		let config_file = std::fs::read_to_string(path)
			.wrap_err_with(|| format!("Failed to read `{}`.", path.display()))?;

		Self::parse(&config_file)
	}
}

/// Everything the server needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub addr: SocketAddr,
	pub database: PoolConfig,
	pub retry: RetryPolicy,
	pub assets: StaticAssets,
	pub log_filter: String,
}

impl Settings {
	pub fn resolve(args: Args, config: Config) -> Self {
		let pool_defaults = PoolConfig::default();
		let retry_defaults = RetryPolicy::default();
		let asset_defaults = StaticAssets::default();

		let ip_address = args
			.ip_address
			.or(config.ip_address.map(Ipv4Addr::from))
			.unwrap_or(Ipv4Addr::UNSPECIFIED);
		let port = args
			.port
			.or(config.port)
			.unwrap_or(DEFAULT_PORT);

		let log_filter = if args.debug {
			String::from(DEBUG_LOG_FILTER)
		} else {
			args.log_level
				.or(config.log_level)
				.unwrap_or_else(|| String::from(DEFAULT_LOG_FILTER))
		};

		Self {
			addr: SocketAddr::from((ip_address, port)),
			database: PoolConfig {
				database_url: args
					.database_url
					.or(config.database_url)
					.filter(|url| !url.trim().is_empty()),
				security: args.database_ssl.or(config.database_ssl),
				max_connections: args
					.max_connections
					.or(config.max_connections)
					.unwrap_or(pool_defaults.max_connections),
				acquire_timeout: config
					.acquire_timeout_secs
					.map_or(pool_defaults.acquire_timeout, Duration::from_secs),
				idle_timeout: config
					.idle_timeout_secs
					.map_or(pool_defaults.idle_timeout, Duration::from_secs),
			},
			retry: RetryPolicy {
				attempts: config
					.retry_attempts
					.unwrap_or(retry_defaults.attempts),
				backoff: config
					.retry_backoff_ms
					.map_or(retry_defaults.backoff, Duration::from_millis),
			},
			assets: StaticAssets {
				dir: args
					.static_dir
					.or(config.static_dir)
					.unwrap_or(asset_defaults.dir),
				index_file: args
					.index_file
					.or(config.index_file)
					.unwrap_or(asset_defaults.index_file),
			},
			log_filter,
		}
	}
}
