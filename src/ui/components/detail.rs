use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::search::SearchField;
use crate::types::ExhibitRecord;
use crate::ui::highlight::highlight_line;
use crate::ui::style::Theme;

/// Render the selected exhibit's full record.
pub fn render_detail(
	frame: &mut Frame,
	area: Rect,
	record: Option<&ExhibitRecord>,
	keyword: &str,
	field: SearchField,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(Style::default().fg(theme.header_fg()))
		.title(" 展品详情 ");

	let lines = match record {
		Some(record) => detail_lines(record, keyword, field, theme),
		None => vec![Line::styled("未选择展品", theme.empty_style())],
	};
	let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
	frame.render_widget(paragraph, area);
}

fn detail_lines<'a>(record: &'a ExhibitRecord, keyword: &str, field: SearchField, theme: &Theme) -> Vec<Line<'a>> {
	let mark = theme.highlight_style();
	let bold = Style::default().add_modifier(Modifier::BOLD);
	let mut lines = vec![highlight_line(&record.name, keyword, bold, mark)];

	let category = record.category_kind();
	let mut badge = vec![Span::styled(
		format!("[{}]", category.label()),
		theme.category_style(category),
	)];
	if !record.subcategory.is_empty() {
		badge.push(Span::raw(" "));
		badge.push(Span::raw(record.subcategory.as_str()));
	}
	lines.push(Line::from(badge));

	let mut source = vec![Span::raw("📍 ")];
	source.extend(highlight_line(record.source().display(), keyword, Style::default(), mark).spans);
	lines.push(Line::from(source));
	lines.push(Line::default());

	if !record.description.is_empty() {
		lines.push(Line::raw(record.description.as_str()));
		lines.push(Line::default());
	}

	let traits_keyword = if field == SearchField::Traits { keyword } else { "" };
	let mut traits = vec![Span::styled("特性: ", bold)];
	if record.traits.is_empty() {
		traits.extend(highlight_line(crate::types::NO_TRAITS_SENTINEL, traits_keyword, theme.empty_style(), mark).spans);
	} else {
		for (index, label) in record.traits.iter().enumerate() {
			if index > 0 {
				traits.push(Span::raw("、"));
			}
			traits.extend(highlight_line(label, traits_keyword, Style::default(), mark).spans);
		}
	}
	lines.push(Line::from(traits));

	lines.push(Line::from(vec![
		Span::styled("热度: ", bold),
		Span::raw(format!("{} / {}", record.base_buzz, record.max_buzz)),
		Span::styled("  知识: ", bold),
		Span::raw(record.max_knowledge.to_string()),
	]));
	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	fn text_of(lines: &[Line<'_>]) -> Vec<String> {
		lines
			.iter()
			.map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
			.collect()
	}

	#[test]
	fn detail_lists_record_fields() {
		let record = ExhibitRecord::new("5", "维多利亚时代名流")
			.with_category("超自然", "工业时代灵体")
			.with_source("冥界 - 超自然观测机构")
			.with_description("用音乐天赋提升娱乐度。")
			.with_traits(["作曲家", "学者"])
			.with_stats(80.0, 300.0, 150.0);
		let lines = detail_lines(&record, "", SearchField::Name, &Theme::default());
		assert_eq!(
			text_of(&lines),
			[
				"维多利亚时代名流",
				"[超自然] 工业时代灵体",
				"📍 冥界 - 超自然观测机构",
				"",
				"用音乐天赋提升娱乐度。",
				"",
				"特性: 作曲家、学者",
				"热度: 80 / 300  知识: 150",
			]
		);
	}

	#[test]
	fn empty_traits_and_source_use_placeholders() {
		let record = ExhibitRecord::new("1", "灯笼鱼化石").with_traits(["无"]);
		let lines = detail_lines(&record, "无", SearchField::Traits, &Theme::default());
		let text = text_of(&lines);
		assert!(text.contains(&"📍 未知来源".to_string()));
		assert!(text.contains(&"特性: 无".to_string()));
	}
}
