//! File-backed `tracing` setup.
//!
//! The terminal browser owns stdout and stderr while it runs, so events are
//! appended to `curio.log` in the data directory instead. The filter comes
//! from `CURIO_LOG` and defaults to `warn`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app_dirs;

pub const LOG_ENV: &str = "CURIO_LOG";
pub const LOG_FILE: &str = "curio.log";
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, returning the log file path on success.
///
/// Any failure (no data directory, unwritable file, a subscriber already
/// installed) leaves logging disabled; it never stops the program.
pub fn initialize() -> Option<PathBuf> {
	let dir = app_dirs::get_data_dir().ok()?;
	fs::create_dir_all(&dir).ok()?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

	tracing_subscriber::registry()
		.with(filter_from_env())
		.with(
			fmt::layer()
				.with_writer(Mutex::new(file))
				.with_ansi(false)
				.with_target(false),
		)
		.try_init()
		.ok()?;

	tracing::debug!(path = %path.display(), "logging initialized");
	Some(path)
}

fn filter_from_env() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
