mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{
	OutputFormat, format_locations, parse_cli, print_outcome_json, print_outcome_plain,
	print_report_json, print_report_plain,
};
use workflow::CatalogWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	curio::logging::initialize();

	if cli.list_themes {
		for name in curio::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = CatalogWorkflow::from_config(resolved)?;

	if cli.list_locations {
		print!("{}", format_locations(workflow.gazetteer()));
		return Ok(());
	}

	if cli.interactive {
		browse(cli.output, workflow)
	} else {
		query(cli.output, &workflow)
	}
}

/// Print the matches for the configured query.
fn query(format: OutputFormat, workflow: &CatalogWorkflow) -> Result<()> {
	let report = workflow.query();
	match format {
		OutputFormat::Plain => print_report_plain(&report),
		OutputFormat::Json => print_report_json(&report)?,
	}
	Ok(())
}

/// Run the terminal browser and print what the user picked.
fn browse(format: OutputFormat, workflow: CatalogWorkflow) -> Result<()> {
	let outcome = workflow.browse()?;
	match format {
		OutputFormat::Plain => print_outcome_plain(&outcome),
		OutputFormat::Json => print_outcome_json(&outcome)?,
	}
	Ok(())
}
