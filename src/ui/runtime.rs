use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use super::App;
use crate::types::SearchOutcome;

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user accepts or cancels.
	///
	/// The terminal is restored and the input thread joined on every exit,
	/// including when drawing or key handling fails.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		info!(exhibits = self.catalog.index.len(), "browser started");

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = terminal
			.clear()
			.map_err(anyhow::Error::from)
			.and_then(|()| self.event_loop(&mut terminal, &event_rx));

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		drop(event_rx);
		let joined = match event_thread.join() {
			Ok(join_result) => join_result,
			Err(err) => std::panic::resume_unwind(err),
		};

		let outcome = result?;
		joined?;
		debug!(accepted = outcome.accepted, query = %outcome.query, "browser closed");
		Ok(outcome)
	}

	/// Drain input, apply keys and redraw until a key ends the session.
	fn event_loop<B: Backend>(
		&mut self,
		terminal: &mut Terminal<B>,
		event_rx: &mpsc::Receiver<Event>,
	) -> Result<SearchOutcome> {
		let mut pending_events = VecDeque::new();
		loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
					&& let Some(outcome) = self.handle_key(key)?
				{
					return Ok(outcome);
				}
			}

			terminal.draw(|frame| self.draw(frame))?;
			thread::sleep(Duration::from_millis(16));
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use super::*;
	use crate::search::SessionState;
	use crate::ui::test_support::sample_catalog;

	fn press(code: KeyCode) -> Event {
		Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	#[test]
	fn queued_keys_end_the_loop() {
		let mut app = App::new(sample_catalog(), SessionState::new());
		let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("terminal");
		let (tx, rx) = mpsc::channel();
		for ch in "orbit".chars() {
			tx.send(press(KeyCode::Char(ch))).expect("send");
		}
		tx.send(press(KeyCode::Enter)).expect("send");

		let outcome = app.event_loop(&mut terminal, &rx).expect("outcome");
		assert!(outcome.accepted);
		assert_eq!(outcome.query, "orbit");
		assert_eq!(outcome.selected().map(|record| record.id.as_str()), Some("3"));
	}

	#[test]
	fn closed_input_channel_is_an_error_not_a_hang() {
		let mut app = App::new(sample_catalog(), SessionState::new());
		let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("terminal");
		let (tx, rx) = mpsc::channel::<Event>();
		drop(tx);

		let err = app.event_loop(&mut terminal, &rx).expect_err("disconnected");
		assert!(err.to_string().contains("disconnected"));
	}
}
