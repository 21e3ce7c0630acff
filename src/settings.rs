use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use curio::app_dirs;
use curio::search::SearchField;
use curio::ui::style;

use crate::cli::CliArgs;

const ENV_PREFIX: &str = "CURIO";

/// A configuration value that parsed but makes no sense.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value '{value}' for {key}: {reason}")]
pub struct SettingsError {
	pub key: &'static str,
	pub value: String,
	pub reason: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	catalog: CatalogSection,
	search: SearchSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	dataset: Option<PathBuf>,
	gazetteer: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	field: Option<String>,
	initial_query: Option<String>,
	location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	input_title: Option<String>,
}

/// Settings after layering files, environment and flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
	pub dataset: Option<PathBuf>,
	pub gazetteer: Option<PathBuf>,
	pub field: SearchField,
	pub initial_query: String,
	pub location: Option<String>,
	pub theme: Option<String>,
	pub input_title: Option<String>,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Dataset: {}", describe_path(self.dataset.as_ref()));
		println!("  Gazetteer: {}", describe_path(self.gazetteer.as_ref()));
		println!("  Search field: {}", self.field);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Location: {}", self.location.as_deref().unwrap_or("(any)"));
		println!("  UI theme: {}", self.theme.as_deref().unwrap_or("(use the library default)"));
		if let Some(title) = &self.input_title {
			println!("  Prompt title: {title}");
		}
	}
}

fn describe_path(path: Option<&PathBuf>) -> String {
	path.map_or_else(|| "(built-in)".to_string(), |path| path.display().to_string())
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve()?;
	debug!(?resolved, "configuration resolved");
	Ok(resolved)
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"));

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".curio.toml"));
		files.push(current_dir.join("curio.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.dataset.clone() {
			self.catalog.dataset = Some(path);
		}
		if let Some(path) = cli.gazetteer.clone() {
			self.catalog.gazetteer = Some(path);
		}
		if let Some(field) = cli.field {
			self.search.field = Some(field.as_str().to_string());
		}
		if let Some(query) = cli.query.clone() {
			self.search.initial_query = Some(query);
		}
		if let Some(location) = cli.location.clone() {
			self.search.location = Some(location);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.input_title = Some(title);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig, SettingsError> {
		let field = match self.search.field {
			Some(raw) => raw.parse().map_err(|err: curio::search::ParseFieldError| SettingsError {
				key: "search.field",
				value: raw,
				reason: err.to_string(),
			})?,
			None => SearchField::default(),
		};

		let theme = match non_blank(self.ui.theme) {
			Some(name) if style::by_name(&name).is_none() => {
				return Err(SettingsError {
					key: "ui.theme",
					value: name,
					reason: format!("expected one of {}", style::names().collect::<Vec<_>>().join(", ")),
				});
			}
			other => other,
		};

		Ok(ResolvedConfig {
			dataset: self.catalog.dataset,
			gazetteer: self.catalog.gazetteer,
			field,
			initial_query: self.search.initial_query.unwrap_or_default(),
			location: non_blank(self.search.location),
			theme,
			input_title: non_blank(self.ui.input_title),
		})
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		CliArgs::try_parse_from(args).expect("arguments parse")
	}

	#[test]
	fn defaults_without_sources() {
		let resolved = load(&cli(&["curio", "-n"])).expect("config");
		assert_eq!(resolved.field, SearchField::Name);
		assert_eq!(resolved.initial_query, "");
		assert_eq!(resolved.location, None);
		assert_eq!(resolved.dataset, None);
	}

	#[test]
	fn config_file_is_layered_under_flags() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("custom.toml");
		fs::write(
			&path,
			"[search]\nfield = \"traits\"\ninitial_query = \"学者\"\nlocation = \"阴云山\"\n\n[ui]\ntheme = \"mono\"\n",
		)
		.expect("write config");
		let path = path.to_string_lossy().into_owned();

		let from_file = load(&cli(&["curio", "-n", "-c", &path])).expect("config");
		assert_eq!(from_file.field, SearchField::Traits);
		assert_eq!(from_file.initial_query, "学者");
		assert_eq!(from_file.location.as_deref(), Some("阴云山"));
		assert_eq!(from_file.theme.as_deref(), Some("mono"));

		let overridden = load(&cli(&["curio", "-n", "-c", &path, "-f", "name", "化石", "-L", " "])).expect("config");
		assert_eq!(overridden.field, SearchField::Name);
		assert_eq!(overridden.initial_query, "化石");
		assert_eq!(overridden.location, None);
	}

	#[test]
	fn missing_explicit_file_fails() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("absent.toml");
		let path = path.to_string_lossy().into_owned();
		assert!(load(&cli(&["curio", "-n", "-c", &path])).is_err());
	}

	#[test]
	fn invalid_values_are_reported() {
		let raw = RawConfig {
			search: SearchSection {
				field: Some("colour".into()),
				..SearchSection::default()
			},
			..RawConfig::default()
		};
		let err = raw.resolve().expect_err("bad field");
		assert_eq!(err.key, "search.field");
		assert_eq!(err.value, "colour");

		let raw = RawConfig {
			ui: UiSection {
				theme: Some("neon".into()),
				..UiSection::default()
			},
			..RawConfig::default()
		};
		let err = raw.resolve().expect_err("bad theme");
		assert_eq!(err.key, "ui.theme");
		assert!(err.reason.contains("slate"));
	}

	#[test]
	fn chinese_field_labels_are_accepted() {
		let raw = RawConfig {
			search: SearchSection {
				field: Some("来源".into()),
				..SearchSection::default()
			},
			..RawConfig::default()
		};
		assert_eq!(raw.resolve().expect("config").field, SearchField::Source);
	}
}
