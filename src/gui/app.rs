// src/gui/app.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::config::consts::COMPARE_DEFAULT_COUNT;
use crate::config::state::{AppState, Tab};
use crate::record::{Field, Snapshot};
use crate::runner::RunSummary;

use super::{actions, components, table_model::TableModel};

pub fn run(options: eframe::NativeOptions) -> eframe::Result<()> {
    eframe::run_native(
        "COVID-19 Impact",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful run; kept when a later scrape fails
    pub summary: Option<RunSummary>,

    // what the Data / Rates tabs render
    pub table: TableModel,
    pub rates_table: TableModel,

    // export text fields (applied to ExportOptions on Export)
    pub out_dir_text: String,
    pub table_name_text: String,
    pub sheet_name_text: String,

    // status line (GuiProgress writes here) + last store outcome, Err = failed
    pub status: Arc<Mutex<String>>,
    pub store_message: Option<Result<String, String>>,

    // scrape once the first frame is on screen
    pub pending_scrape: bool,
    frame_drawn: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let export = &state.options.export;
        let out_dir_text = export.out_dir().to_string_lossy().into_owned();
        let table_name_text = export
            .table_path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sheet_name_text = export
            .sheet_path()
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        logf!("Init: source={}", state.options.fetch.url);

        Self {
            state,
            summary: None,
            table: TableModel::empty(),
            rates_table: TableModel::empty(),
            out_dir_text,
            table_name_text,
            sheet_name_text,
            status: Arc::new(Mutex::new(s!("Starting…"))),
            store_message: None,
            pending_scrape: true,
            frame_drawn: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.summary.as_ref().map(|s| &s.snapshot)
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Take a fresh run: rebuild the tables and keep the comparison pick valid.
    pub fn set_summary(&mut self, summary: RunSummary) {
        let snap = &summary.snapshot;
        self.table = TableModel::from_snapshot(snap, Field::columns(true));
        self.rates_table =
            TableModel::from_snapshot(snap, &[Field::Country, Field::RecoveryRate, Field::DeathRate]);

        let gui = &mut self.state.gui;
        gui.compare.retain(|c| snap.get(c).is_some());
        if gui.compare.is_empty() {
            gui.compare = snap.countries().take(COMPARE_DEFAULT_COUNT).map(String::from).collect();
        }
        logd!("UI: compare defaults → {:?}", gui.compare);

        self.summary = Some(summary);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.pending_scrape && self.frame_drawn {
            self.pending_scrape = false;
            actions::scrape(self);
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);

            ui.separator();

            components::tabs::draw(ui, self);

            ui.separator();

            match self.state.gui.current_tab {
                Tab::Data => components::data_table::draw(ui, &self.table, "data_table"),
                Tab::Rates => components::data_table::draw(ui, &self.rates_table, "rates_table"),
                Tab::Statistics => components::stats_panel::draw(ui, self),
                Tab::TopCountries => components::charts::top_countries(ui, self),
                Tab::Compare => components::charts::compare(ui, self),
            }
        });

        if !self.frame_drawn {
            self.frame_drawn = true;
            ctx.request_repaint();
        }
    }
}
