use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Borders, Cell, Clear, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::types::ExhibitRecord;
use crate::ui::highlight::highlight_line;
use crate::ui::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
const HEADERS: [&str; 3] = ["展品名", "类别", "来源"];
/// Header row plus its bottom margin.
const HEADER_HEIGHT: u16 = 2;

/// What the results table is showing.
pub struct ResultsContext<'a> {
	pub records: &'a [ExhibitRecord],
	pub keyword: &'a str,
	/// Shown in the empty state when there is nothing to search for yet.
	pub idle: bool,
	pub theme: &'a Theme,
}

/// Render matching exhibits as a bordered table with highlighted keywords.
pub fn render_results(frame: &mut Frame, area: Rect, table_state: &mut TableState, ctx: ResultsContext<'_>) {
	let ResultsContext {
		records,
		keyword,
		idle,
		theme,
	} = ctx;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(Style::default().fg(theme.header_fg()))
		.title(format!(" 找到 {} 件相关展品 ", records.len()));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header = Row::new(HEADERS.map(Cell::from))
		.style(Style::default().fg(theme.header_fg()))
		.height(1)
		.bottom_margin(1);
	let rows = records.iter().map(|record| exhibit_row(record, keyword, theme));
	let widths = [
		Constraint::Percentage(35),
		Constraint::Percentage(25),
		Constraint::Percentage(40),
	];
	let table = Table::new(rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);

	if records.is_empty() && inner.height > HEADER_HEIGHT {
		let message_area = Rect {
			y: inner.y + HEADER_HEIGHT,
			height: inner.height - HEADER_HEIGHT,
			..inner
		};
		let message = if idle { "输入关键词开始探索展品" } else { "没有找到相关展品" };
		let empty = Paragraph::new(message)
			.alignment(Alignment::Center)
			.style(theme.empty_style());
		frame.render_widget(Clear, message_area);
		frame.render_widget(empty, message_area);
	}
}

fn exhibit_row<'a>(record: &'a ExhibitRecord, keyword: &str, theme: &Theme) -> Row<'a> {
	let mark = theme.highlight_style();
	let category_style = theme.category_style(record.category_kind());
	let category = if record.subcategory.is_empty() {
		highlight_line(&record.category, keyword, category_style, mark)
	} else {
		let mut line = highlight_line(&record.category, keyword, category_style, mark);
		line.spans.push("/".into());
		line.spans
			.extend(highlight_line(&record.subcategory, keyword, Style::default(), mark).spans);
		line
	};

	Row::new([
		Cell::from(highlight_line(&record.name, keyword, Style::default(), mark)),
		Cell::from(category),
		Cell::from(highlight_line(record.source().display(), keyword, Style::default(), mark)),
	])
}
