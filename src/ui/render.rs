use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use super::components::{
	InputContext, MapContext, ResultsContext, render_detail, render_input_with_tabs, render_map,
	render_results,
};

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
			.split(area);

		render_input_with_tabs(
			frame,
			InputContext {
				search_input: &self.search_input,
				input_title: self.input_title.as_deref(),
				field: self.session.field(),
				area: layout[0],
				theme: &self.theme,
			},
		);

		let body = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
			.split(layout[1]);
		self.render_body(frame, body[0], body[1]);
		self.render_status(frame, layout[2]);
	}

	fn render_body(&mut self, frame: &mut Frame, results_area: Rect, side_area: Rect) {
		let keyword = self.session.query().trim();
		render_results(
			frame,
			results_area,
			&mut self.table_state,
			ResultsContext {
				records: &self.results,
				keyword,
				idle: !self.session.has_query() && self.session.location().is_none(),
				theme: &self.theme,
			},
		);

		let side = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
			.split(side_area);
		let selected = self.table_state.selected().and_then(|index| self.results.get(index));
		render_detail(frame, side[0], selected, keyword, self.session.field(), &self.theme);
		render_map(
			frame,
			side[1],
			MapContext {
				gazetteer: &self.catalog.gazetteer,
				active: &self.active_locations,
				selected: self.session.location(),
				theme: &self.theme,
			},
		);
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let mut spans = vec![Span::styled(
			format!("已收录 {} 件展品", self.catalog.index.len()),
			self.theme.empty_style(),
		)];
		if let Some(location) = self.session.location() {
			spans.push(Span::raw("  "));
			spans.push(Span::styled(format!("📍 {location}"), self.theme.pin_selected));
		}
		spans.push(Span::styled(
			"  Tab 切换字段 · Ctrl-L 切换地点 · Enter 确认 · Esc 退出",
			self.theme.empty_style(),
		));
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}
}
