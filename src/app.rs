use std::sync::mpsc::{self, Receiver, TryRecvError};

use eframe::egui;

use crate::config::ViewerConfig;
use crate::data::loader::{self, DataSource, LoadError};
use crate::data::model::Row;
use crate::state::AppState;
use crate::ui::{panels, plot};

type LoadResult = Result<Vec<Row>, LoadError>;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IndexViewerApp {
    pub state: AppState,
    config: ViewerConfig,
    /// Result channel of the load in flight, if any.
    pending_load: Option<Receiver<LoadResult>>,
}

impl IndexViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        let mut app = Self {
            state: AppState::new(config.page_size),
            pending_load: None,
            config,
        };
        let source = DataSource::Url(app.config.csv_url.clone());
        app.start_load(&cc.egui_ctx, source);
        app
    }

    /// Load `source` on a worker thread so the UI stays responsive.
    fn start_load(&mut self, ctx: &egui::Context, source: DataSource) {
        if self.pending_load.is_some() {
            log::warn!("A load is already in progress, ignoring request for {source}");
            return;
        }
        log::info!("Loading index data from {source}");

        let (tx, rx) = mpsc::channel();
        let config = self.config.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = loader::load_source(&source, &config);
            // Receiver only disappears when the app is shutting down.
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        self.pending_load = Some(rx);
    }

    fn poll_load(&mut self) {
        let Some(rx) = &self.pending_load else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.pending_load = None;
                self.state.on_load_finished(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::error!("Loader thread exited without a result");
                self.pending_load = None;
            }
        }
    }
}

impl eframe::App for IndexViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        // ---- Top panel: menu bar ----
        let load_request = egui::TopBottomPanel::top("top_bar")
            .show(ctx, |ui| panels::top_bar(ui, &self.state, &self.config.csv_url))
            .inner;
        if let Some(source) = load_request {
            self.start_load(ctx, source);
        }

        // ---- Left side panel: paged index list ----
        let event = egui::SidePanel::left("index_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| panels::side_panel(ui, &self.state))
            .inner;
        if let Some(event) = event {
            self.state.handle(event);
        }

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::index_chart(ui, &self.state);
        });
    }
}
