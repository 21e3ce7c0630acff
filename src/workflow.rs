use anyhow::{Context, Result};
use curio::catalog::Catalog;
use curio::locations::Gazetteer;
use curio::search::SessionState;
use curio::{SearchOutcome, SearchUi};
use tracing::info;

use crate::cli::QueryReport;
use crate::settings::ResolvedConfig;

/// Coordinates loading the catalog and running either a one-shot query or
/// the interactive browser.
pub(crate) struct CatalogWorkflow {
	catalog: Catalog,
	session: SessionState,
	theme: Option<String>,
	input_title: Option<String>,
}

impl CatalogWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			dataset,
			gazetteer,
			field,
			initial_query,
			location,
			theme,
			input_title,
		} = config;

		let catalog = Catalog::from_paths(dataset.as_deref(), gazetteer.as_deref())
			.context("failed to load the exhibit catalog")?;
		let session = SessionState::new()
			.with_field(field)
			.with_query(initial_query)
			.with_location(location);

		Ok(Self {
			catalog,
			session,
			theme,
			input_title,
		})
	}

	pub(crate) fn gazetteer(&self) -> &Gazetteer {
		&self.catalog.gazetteer
	}

	/// Evaluate the configured session once.
	pub(crate) fn query(&self) -> QueryReport<'_> {
		let view = self.session.evaluate(&self.catalog.index, &self.catalog.gazetteer);
		info!(matched = view.len(), "query evaluated");
		QueryReport::new(&self.session, view, &self.catalog.gazetteer)
	}

	/// Hand the catalog to the terminal browser.
	pub(crate) fn browse(self) -> Result<SearchOutcome> {
		let mut search_ui = SearchUi::new(self.catalog).with_session(self.session);
		if let Some(theme) = self.theme {
			search_ui = search_ui.with_theme_name(&theme);
		}
		if let Some(title) = self.input_title {
			search_ui = search_ui.with_input_title(title);
		}
		search_ui.run()
	}
}
