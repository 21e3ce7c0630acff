use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum};
use curio::app_dirs;
use curio::search::SearchField;

use super::annotations::dim_cli_annotations;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("curio {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = tinted_cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn tinted_cli_command() -> Command {
	CliArgs::command().mut_args(dim_cli_annotations)
}

#[derive(Parser, Debug)]
#[command(
	name = "curio",
	version,
	long_version = long_version(),
	about = "Search a museum exhibit catalog by name, category, source or traits",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `curio` binary.
pub(crate) struct CliArgs {
	#[arg(value_name = "QUERY", help = "Keyword to search for (default: configured initial query)")]
	pub(crate) query: Option<String>,
	#[arg(
		short,
		long,
		value_enum,
		help = "Field the keyword is matched against (default: name)"
	)]
	pub(crate) field: Option<FieldArg>,
	#[arg(
		short = 'L',
		long,
		value_name = "NAME",
		help = "Restrict results to one gazetteer location (default: none)"
	)]
	pub(crate) location: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CURIO_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "data",
		value_name = "FILE",
		help = "Load exhibits from a JSON file (default: built-in catalog)"
	)]
	pub(crate) dataset: Option<PathBuf>,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load map locations from a JSON file (default: built-in gazetteer)"
	)]
	pub(crate) gazetteer: Option<PathBuf>,
	#[arg(
		short,
		long,
		help = "Browse the catalog in the terminal instead of printing matches (default: disabled)"
	)]
	pub(crate) interactive: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input prompt title (default: field label)"
	)]
	pub(crate) title: Option<String>,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: slate)")]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(long = "list-locations", help = "List gazetteer locations and exit (default: disabled)")]
	pub(crate) list_locations: bool,
	#[arg(long = "list-themes", help = "List supported themes and exit (default: disabled)")]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Search fields accepted via the command line.
pub(crate) enum FieldArg {
	Name,
	Category,
	Source,
	Traits,
}

impl FieldArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		SearchField::from(self).as_str()
	}
}

impl From<FieldArg> for SearchField {
	fn from(arg: FieldArg) -> Self {
		match arg {
			FieldArg::Name => SearchField::Name,
			FieldArg::Category => SearchField::Category,
			FieldArg::Source => SearchField::Source,
			FieldArg::Traits => SearchField::Traits,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> CliArgs {
		let mut matches = CliArgs::command().get_matches_from(args);
		CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
	}

	#[test]
	fn command_supports_custom_styles() {
		let command = tinted_cli_command();
		assert!(command.get_about().is_some());
		command.debug_assert();
	}

	#[test]
	fn defaults_to_plain_output() {
		let parsed = parse(&["curio"]);
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(parsed.query.is_none());
		assert!(!parsed.interactive);
	}

	#[test]
	fn query_field_and_location() {
		let parsed = parse(&["curio", "永逝之湖", "-f", "source", "-L", "永逝之湖", "-o", "json"]);
		assert_eq!(parsed.query.as_deref(), Some("永逝之湖"));
		assert_eq!(parsed.field.map(FieldArg::as_str), Some("source"));
		assert_eq!(parsed.location.as_deref(), Some("永逝之湖"));
		assert_eq!(parsed.output, OutputFormat::Json);
	}

	#[test]
	fn config_files_accumulate() {
		let parsed = parse(&["curio", "-c", "a.toml", "--config", "b.toml", "-n"]);
		assert_eq!(parsed.config, [PathBuf::from("a.toml"), PathBuf::from("b.toml")]);
		assert!(parsed.no_config);
	}
}
