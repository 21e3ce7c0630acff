mod annotations;
mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{
	QueryReport, format_locations, print_outcome_json, print_outcome_plain, print_report_json,
	print_report_plain,
};
