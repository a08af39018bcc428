use thiserror::Error;

use crate::chart::{ChartSlot, ChartSpec};
use crate::data::loader::LoadError;
use crate::data::model::{IndexDataset, Row};
use crate::data::pagination::{Paginator, page_slice};
use crate::data::series::series_for;

// ---------------------------------------------------------------------------
// Events emitted by the UI
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    CategorySelected(String),
    PrevRequested,
    NextRequested,
}

#[derive(Debug, Error, PartialEq)]
pub enum SelectError {
    #[error("no data available for the selected index: {0}")]
    EmptySelection(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer session, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the first successful load).
    pub dataset: Option<IndexDataset>,

    /// Which page of index names is shown.
    pub paginator: Paginator,

    /// Index whose chart is currently displayed.
    pub selected: Option<String>,

    /// The single active chart.
    pub chart: ChartSlot,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Set until the first page of index names has been displayed.
    pub loading: bool,

    page_size: usize,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            dataset: None,
            paginator: Paginator::new(page_size, 0),
            selected: None,
            chart: ChartSlot::default(),
            status_message: None,
            loading: true,
            page_size,
        }
    }

    /// Index names on the current page.
    pub fn visible_categories(&self) -> &[String] {
        match &self.dataset {
            Some(ds) => page_slice(&ds.categories, self.paginator.current()),
            None => &[],
        }
    }

    /// Dispatch a UI event.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::CategorySelected(category) => {
                if let Err(e) = self.on_category_selected(&category) {
                    log::warn!("{e}");
                }
            }
            UiEvent::PrevRequested => self.on_prev_requested(),
            UiEvent::NextRequested => self.on_next_requested(),
        }
    }

    /// Ingest the outcome of a load.
    pub fn on_load_finished(&mut self, result: Result<Vec<Row>, LoadError>) {
        match result {
            Ok(rows) => {
                let dataset = IndexDataset::from_rows(rows);
                log::info!(
                    "Loaded {} rows covering {} indexes",
                    dataset.len(),
                    dataset.categories.len()
                );
                log::debug!("Indexes: {:?}", dataset.categories);
                if dataset.is_empty() {
                    log::warn!("Source contained no index rows");
                }

                self.paginator = Paginator::new(self.page_size, dataset.categories.len());
                let shown = self.paginator.go_to(0).is_some();
                self.dataset = Some(dataset);
                self.status_message = None;
                if shown {
                    self.loading = false;
                }
                self.refresh_chart();
            }
            Err(e) if e.is_parse() => {
                log::error!("Malformed index data: {e}");
                self.status_message = Some(format!("Malformed data: {e}"));
            }
            Err(e) => {
                log::error!("Failed to load index data: {e}");
                self.status_message = Some(format!("Load failed: {e}"));
            }
        }
    }

    /// Rebuild the chart of the selected index from the current dataset, or
    /// drop it when that index is no longer present.
    fn refresh_chart(&mut self) {
        let Some(category) = self.selected.take() else {
            self.chart.clear();
            return;
        };
        if let Err(e) = self.on_category_selected(&category) {
            log::info!("Clearing chart after reload: {e}");
            self.chart.clear();
        }
    }

    /// Build the series for `category` and swap it into the chart.
    pub fn on_category_selected(&mut self, category: &str) -> Result<(), SelectError> {
        let rows = self.dataset.as_ref().map(|ds| ds.rows.as_slice()).unwrap_or(&[]);
        let series = series_for(category, rows);
        log::debug!("Series for {category}: {} points", series.len());

        if series.is_empty() {
            return Err(SelectError::EmptySelection(category.to_string()));
        }

        self.chart.replace(ChartSpec::from_series(category, series));
        self.selected = Some(category.to_string());
        Ok(())
    }

    pub fn on_prev_requested(&mut self) {
        if self.paginator.prev().is_none() {
            log::debug!("Already on the first page");
        }
    }

    pub fn on_next_requested(&mut self) {
        if self.paginator.next().is_none() {
            log::debug!("Already on the last page");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_rows;

    fn scenario_rows() -> Vec<Row> {
        vec![
            Row::new("A", "2021-01-01", "10"),
            Row::new("B", "2021-01-01", "20"),
            Row::new("A", "2021-01-02", "12"),
        ]
    }

    fn loaded(rows: Vec<Row>, page_size: usize) -> AppState {
        let mut state = AppState::new(page_size);
        state.on_load_finished(Ok(rows));
        state
    }

    #[test]
    fn successful_load_shows_first_page() {
        let state = loaded(scenario_rows(), 10);
        assert!(!state.loading);
        assert_eq!(state.visible_categories(), ["A", "B"]);
        assert!(!state.paginator.can_go_prev());
        assert!(!state.paginator.can_go_next());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn selecting_category_replaces_chart() {
        let mut state = loaded(scenario_rows(), 10);
        state.handle(UiEvent::CategorySelected("A".into()));

        let chart = state.chart.active().unwrap();
        assert_eq!(chart.labels, ["2021-01-01", "2021-01-02"]);
        assert_eq!(chart.values, [10.0, 12.0]);
        assert_eq!(state.selected.as_deref(), Some("A"));

        state.handle(UiEvent::CategorySelected("B".into()));
        assert_eq!(state.chart.generation(), 2);
        assert_eq!(state.chart.active().unwrap().values, [20.0]);
    }

    #[test]
    fn empty_selection_leaves_chart_alone() {
        let mut state = loaded(scenario_rows(), 10);
        state.on_category_selected("A").unwrap();

        let err = state.on_category_selected("C").unwrap_err();
        assert_eq!(err, SelectError::EmptySelection("C".into()));
        assert_eq!(state.chart.generation(), 1);
        assert_eq!(state.selected.as_deref(), Some("A"));
    }

    #[test]
    fn selection_before_load_is_empty() {
        let mut state = AppState::new(10);
        assert!(state.on_category_selected("A").is_err());
        assert!(state.chart.active().is_none());
    }

    #[test]
    fn navigation_events_move_pages() {
        let rows: Vec<Row> = (0..25)
            .map(|i| Row::new(format!("IDX{i:02}"), "2024-01-01", "1"))
            .collect();
        let mut state = loaded(rows, 10);

        state.handle(UiEvent::PrevRequested);
        assert_eq!(state.paginator.page_index(), 0);

        state.handle(UiEvent::NextRequested);
        state.handle(UiEvent::NextRequested);
        assert_eq!(state.paginator.page_index(), 2);
        assert_eq!(state.visible_categories().len(), 5);
        assert_eq!(state.visible_categories()[0], "IDX20");

        state.handle(UiEvent::NextRequested);
        assert_eq!(state.paginator.page_index(), 2);
        assert!(!state.paginator.can_go_next());
    }

    #[test]
    fn parse_failure_keeps_loading() {
        let mut state = AppState::new(10);
        let payload: &[u8] = &[0x89, b'P', b'N', b'G', 0xff, 0xfe, b'\n', 0x00, 0x9c];
        state.on_load_finished(parse_rows(payload));

        assert!(state.loading);
        assert!(state.visible_categories().is_empty());
        assert!(state.dataset.is_none());
        assert!(state.status_message.as_deref().unwrap().starts_with("Malformed data:"));
    }

    #[test]
    fn empty_dataset_keeps_loading() {
        let state = loaded(Vec::new(), 10);
        assert!(state.loading);
        assert!(state.visible_categories().is_empty());
        assert!(state.dataset.is_some());
    }

    #[test]
    fn failed_reload_keeps_previous_data() {
        let mut state = loaded(scenario_rows(), 10);
        state.on_load_finished(Err(LoadError::MissingColumn("index_name")));
        assert!(!state.loading);
        assert_eq!(state.visible_categories(), ["A", "B"]);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn read_failure_has_its_own_status() {
        let mut state = AppState::new(10);
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        state.on_load_finished(Err(LoadError::Read {
            path: "dump.csv".into(),
            source,
        }));
        assert!(state.status_message.as_deref().unwrap().starts_with("Load failed:"));
        assert!(state.loading);
    }

    #[test]
    fn reload_without_selected_index_clears_chart() {
        let mut state = loaded(vec![Row::new("A", "2021-01-01", "10")], 10);
        state.on_category_selected("A").unwrap();

        state.on_load_finished(Ok(vec![Row::new("Z", "2021-01-01", "5")]));
        assert_eq!(state.visible_categories(), ["Z"]);
        assert!(state.selected.is_none());
        assert!(state.chart.active().is_none());
    }

    #[test]
    fn reload_rebuilds_chart_of_selected_index() {
        let mut state = loaded(scenario_rows(), 10);
        state.on_category_selected("A").unwrap();

        state.on_load_finished(Ok(vec![
            Row::new("A", "2021-02-01", "15"),
            Row::new("C", "2021-02-01", "7"),
        ]));
        assert_eq!(state.selected.as_deref(), Some("A"));
        let chart = state.chart.active().unwrap();
        assert_eq!(chart.labels, ["2021-02-01"]);
        assert_eq!(chart.values, [15.0]);
    }

    #[test]
    fn reload_resets_paging() {
        let many: Vec<Row> = (0..15)
            .map(|i| Row::new(format!("IDX{i:02}"), "2024-01-01", "1"))
            .collect();
        let mut state = loaded(many, 10);
        state.on_next_requested();
        assert_eq!(state.paginator.page_index(), 1);

        state.on_load_finished(Ok(scenario_rows()));
        assert_eq!(state.paginator.page_index(), 0);
        assert_eq!(state.visible_categories(), ["A", "B"]);
    }
}
