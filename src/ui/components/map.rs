use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Borders};
use unicode_truncate::UnicodeTruncateStr;

use crate::locations::{Gazetteer, MapPoint};
use crate::ui::style::Theme;

const PIN_IDLE: &str = "·";
const PIN_ACTIVE: &str = "●";
const PIN_SELECTED: &str = "◉";

/// What the map panel is showing.
pub struct MapContext<'a> {
	pub gazetteer: &'a Gazetteer,
	pub active: &'a [String],
	pub selected: Option<&'a str>,
	pub theme: &'a Theme,
}

/// Plot every gazetteer location, lighting the ones with matching exhibits.
pub fn render_map(frame: &mut Frame, area: Rect, ctx: MapContext<'_>) {
	let MapContext {
		gazetteer,
		active,
		selected,
		theme,
	} = ctx;

	let title = match selected {
		Some(name) => format!(" 藏品地图 · {name} "),
		None => " 藏品地图 ".to_string(),
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(Style::default().fg(theme.header_fg()))
		.title(title);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	// Idle pins first so lit pins and their labels draw on top.
	let mut pins: Vec<(&str, MapPoint, PinState)> = gazetteer
		.iter()
		.map(|(name, point)| {
			let state = if selected == Some(name) {
				PinState::Selected
			} else if active.iter().any(|location| location == name) {
				PinState::Active
			} else {
				PinState::Idle
			};
			(name, point, state)
		})
		.collect();
	pins.sort_by_key(|(_, _, state)| *state);

	let buffer = frame.buffer_mut();
	for (name, point, state) in pins {
		let Some((x, y)) = pin_position(point, inner) else {
			continue;
		};
		let (symbol, style) = match state {
			PinState::Idle => (PIN_IDLE, theme.pin_idle),
			PinState::Active => (PIN_ACTIVE, theme.pin),
			PinState::Selected => (PIN_SELECTED, theme.pin_selected),
		};
		buffer.set_string(x, y, symbol, style);

		if state == PinState::Idle {
			continue;
		}
		let label_x = x.saturating_add(2);
		let room = usize::from(inner.right().saturating_sub(label_x));
		if room == 0 {
			continue;
		}
		let (label, _) = name.unicode_truncate(room);
		buffer.set_stringn(label_x, y, label, room, style);
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum PinState {
	Idle,
	Active,
	Selected,
}

/// Cell for a map point inside `area`, or `None` when the area is empty.
pub fn pin_position(point: MapPoint, area: Rect) -> Option<(u16, u16)> {
	if area.width == 0 || area.height == 0 {
		return None;
	}
	let scale = |percent: f32, span: u16| {
		let offset = (percent / 100.0 * f32::from(span - 1)).round();
		// `percent` is clamped to 0..=100 so the offset stays within span.
		offset as u16
	};
	Some((area.x + scale(point.left, area.width), area.y + scale(point.top, area.height)))
}
