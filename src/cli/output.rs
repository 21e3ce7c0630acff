use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use curio::locations::{Gazetteer, GazetteerEntry};
use curio::search::{SearchField, SessionState, SessionView};
use curio::types::{ExhibitRecord, SearchOutcome};

/// Non-interactive search result, shaped for both output formats.
#[derive(Debug, Serialize)]
pub(crate) struct QueryReport<'a> {
	pub(crate) query: &'a str,
	pub(crate) field: SearchField,
	pub(crate) location: Option<&'a str>,
	pub(crate) total: usize,
	pub(crate) matches: Vec<&'a ExhibitRecord>,
	pub(crate) locations: Vec<GazetteerEntry>,
}

impl<'a> QueryReport<'a> {
	pub(crate) fn new(session: &'a SessionState, view: SessionView<'a>, gazetteer: &Gazetteer) -> Self {
		let locations = view
			.active_locations
			.iter()
			.filter_map(|name| {
				gazetteer.point(name).map(|point| GazetteerEntry {
					name: (*name).to_string(),
					top: point.top,
					left: point.left,
				})
			})
			.collect();
		Self {
			query: session.query(),
			field: session.field(),
			location: session.location(),
			total: view.total,
			matches: view.records,
			locations,
		}
	}

	fn is_idle(&self) -> bool {
		self.query.trim().is_empty() && self.location.is_none()
	}
}

fn record_line(record: &ExhibitRecord) -> String {
	let category = if record.subcategory.is_empty() {
		record.category.clone()
	} else {
		format!("{}/{}", record.category, record.subcategory)
	};
	format!("{} [{category}] {}", record.name, record.source().display())
}

/// Render a query report as human-readable lines.
pub(crate) fn format_report_plain(report: &QueryReport<'_>) -> String {
	let mut out = String::new();
	if report.is_idle() {
		let _ = writeln!(out, "输入关键词开始探索展品 (共 {} 件展品，例如: curio 化石)", report.total);
		return out;
	}
	if report.matches.is_empty() {
		let _ = writeln!(out, "没有找到相关展品");
		return out;
	}

	let _ = writeln!(out, "找到 {} 件相关展品", report.matches.len());
	for record in &report.matches {
		let _ = writeln!(out, "{}", record_line(record));
	}
	if !report.locations.is_empty() {
		let names: Vec<&str> = report.locations.iter().map(|entry| entry.name.as_str()).collect();
		let _ = writeln!(out, "地图位置: {}", names.join("、"));
	}
	out
}

pub(crate) fn print_report_plain(report: &QueryReport<'_>) {
	print!("{}", format_report_plain(report));
}

pub(crate) fn print_report_json(report: &QueryReport<'_>) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(report)?);
	Ok(())
}

/// Render the outcome of an interactive session.
pub(crate) fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("已取消 (query: '{}')\n", outcome.query);
	}
	let Some(record) = outcome.selected() else {
		return "未选择展品\n".to_string();
	};

	let mut out = String::new();
	let _ = writeln!(out, "{}", record_line(record));
	if !record.description.is_empty() {
		let _ = writeln!(out, "{}", record.description);
	}
	let _ = writeln!(out, "特性: {}", record.traits.display());
	let _ = writeln!(
		out,
		"热度: {} / {}  知识: {}",
		record.base_buzz, record.max_buzz, record.max_knowledge
	);
	out
}

pub(crate) fn print_outcome_plain(outcome: &SearchOutcome) {
	print!("{}", format_outcome_plain(outcome));
}

pub(crate) fn print_outcome_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(outcome)?);
	Ok(())
}

/// List gazetteer rows as `name (top, left)`.
pub(crate) fn format_locations(gazetteer: &Gazetteer) -> String {
	let mut out = String::new();
	for (name, point) in gazetteer.iter() {
		let _ = writeln!(out, "{name} ({}, {})", point.top, point.left);
	}
	out
}
