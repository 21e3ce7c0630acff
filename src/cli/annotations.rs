use clap::Arg;
use clap::builder::StyledStr;
use clap::builder::styling::{AnsiColor, Color, Style};

const DEFAULT_MARKER: &str = "(default: ";

/// Move clap's possible-value and env annotations into muted help text.
pub(crate) fn dim_cli_annotations(mut arg: Arg) -> Arg {
	let help_text = arg.get_help().map(ToString::to_string).unwrap_or_default();
	let mut annotations = Vec::new();

	if let Some(annotation) = possible_values_annotation(&arg) {
		arg = arg.hide_possible_values(true);
		annotations.push(annotation);
	}
	if !help_text.contains(DEFAULT_MARKER) && let Some(annotation) = default_value_annotation(&arg) {
		arg = arg.hide_default_value(true);
		annotations.push(annotation);
	}
	if let Some(annotation) = env_annotation(&arg) {
		arg = arg.hide_env(true);
		annotations.push(annotation);
	}

	if help_text.is_empty() && annotations.is_empty() {
		return arg;
	}

	let mut styled = mute_defaults(&help_text);
	let style = muted_style();
	let mut separate = !help_text.is_empty();
	for annotation in annotations {
		if separate {
			styled.push_str(" ");
		}
		separate = true;
		let _ = std::fmt::write(&mut styled, format_args!("{style}{annotation}{style:#}"));
	}
	arg.help(styled)
}

fn muted_style() -> Style {
	Style::new()
		.fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
		.dimmed()
}

/// Dim every `(default: …)` suffix in `text`.
pub(crate) fn mute_defaults(text: &str) -> StyledStr {
	let style = muted_style();
	let mut styled = StyledStr::new();
	let mut rest = text;
	while let Some(start) = rest.find(DEFAULT_MARKER) {
		let Some(len) = rest[start..].find(')') else {
			break;
		};
		let end = start + len + 1;
		styled.push_str(&rest[..start]);
		let _ = std::fmt::write(&mut styled, format_args!("{style}{}{style:#}", &rest[start..end]));
		rest = &rest[end..];
	}
	styled.push_str(rest);
	styled
}

fn quote_if_spaced(text: &str) -> String {
	if text.chars().any(char::is_whitespace) {
		format!("{text:?}")
	} else {
		text.to_string()
	}
}

pub(crate) fn possible_values_annotation(arg: &Arg) -> Option<String> {
	if !arg.get_action().takes_values() {
		return None;
	}
	let visible: Vec<String> = arg
		.get_possible_values()
		.iter()
		.filter(|value| !value.is_hide_set())
		.map(|value| quote_if_spaced(value.get_name()))
		.collect();
	(!visible.is_empty()).then(|| format!("[possible values: {}]", visible.join(", ")))
}

pub(crate) fn default_value_annotation(arg: &Arg) -> Option<String> {
	let rendered: Vec<String> = arg
		.get_default_values()
		.iter()
		.map(|value| value.to_string_lossy())
		.filter(|text| !text.trim().is_empty())
		.map(|text| quote_if_spaced(&text))
		.collect();
	(!rendered.is_empty()).then(|| format!("(default: {})", rendered.join(", ")))
}

pub(crate) fn env_annotation(arg: &Arg) -> Option<String> {
	let name = arg.get_env()?.to_string_lossy();
	(!name.trim().is_empty()).then(|| format!("[env: {name}=]"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn possible_values_skip_hidden_and_quote_whitespace() {
		let arg = Arg::new("field").value_parser(["name", "sub category"]);
		assert_eq!(
			possible_values_annotation(&arg).as_deref(),
			Some("[possible values: name, \"sub category\"]")
		);
	}

	#[test]
	fn default_values_ignore_blank_entries() {
		let arg = Arg::new("output").default_values(["plain", " "]);
		assert_eq!(default_value_annotation(&arg).as_deref(), Some("(default: plain)"));
	}

	#[test]
	fn env_annotation_names_variable() {
		let arg = Arg::new("config").env("CURIO_CONFIG");
		assert_eq!(env_annotation(&arg).as_deref(), Some("[env: CURIO_CONFIG=]"));
	}

	#[test]
	fn muting_defaults_keeps_text() {
		let text = "Choose a theme (default: slate) for the browser";
		assert_eq!(mute_defaults(text).to_string(), text);
	}
}
