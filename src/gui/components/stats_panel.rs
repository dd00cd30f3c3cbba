// src/gui/components/stats_panel.rs
//
// Statistics tab: clean report, describe grid, correlations, outlier count.

use eframe::egui;

use crate::analysis::{correlation, describe, without_outliers};
use crate::gui::app::App;
use crate::record::Field;

const CORR_FIELDS: [Field; 5] = [
    Field::TotalCases,
    Field::TotalDeaths,
    Field::TotalRecovered,
    Field::Population,
    Field::TotalTests,
];

fn num(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_else(|| s!("—"))
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(summary) = app.summary.as_ref() else {
        ui.weak("No data yet. Press Scrape.");
        return;
    };
    let snap = &summary.snapshot;
    let rep = &summary.report;

    egui::ScrollArea::both().id_salt("stats_scroll").show(ui, |ui| {
        ui.label(format!(
            "{} countries kept of {} scraped: {} dropped for missing values, {} duplicates, {} with zero cases (rates blank).",
            snap.len(), rep.scraped, rep.dropped_missing, rep.duplicates, rep.zero_case
        ));
        let missing: Vec<String> = rep
            .missing
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(f, n)| format!("{}: {}", f.label(), n))
            .collect();
        if !missing.is_empty() {
            ui.label(format!("Missing values: {}", missing.join(", ")));
        }

        ui.add_space(8.0);
        ui.strong("Summary");
        egui::Grid::new("describe_grid").striped(true).num_columns(9).show(ui, |ui| {
            for h in ["", "count", "mean", "std", "min", "25%", "50%", "75%", "max"] {
                ui.strong(h);
            }
            ui.end_row();
            for s in describe(snap) {
                ui.label(s.field.label());
                ui.label(s.count.to_string());
                for v in [s.mean, s.std, s.min, s.q25, s.median, s.q75, s.max] {
                    ui.label(num(v));
                }
                ui.end_row();
            }
        });

        ui.add_space(8.0);
        ui.strong("Correlation");
        let matrix = correlation(snap, &CORR_FIELDS);
        egui::Grid::new("corr_grid").striped(true).show(ui, |ui| {
            ui.label("");
            for f in CORR_FIELDS {
                ui.strong(f.label());
            }
            ui.end_row();
            for (f, row) in CORR_FIELDS.iter().zip(&matrix) {
                ui.strong(f.label());
                for v in row {
                    ui.label(num(*v));
                }
                ui.end_row();
            }
        });

        ui.add_space(8.0);
        let trimmed = without_outliers(snap);
        ui.label(format!(
            "Outliers (total cases or total recovered outside 1.5 × IQR): {}",
            snap.len() - trimmed.len()
        ));
    });
}
