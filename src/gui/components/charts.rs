// src/gui/components/charts.rs
//
// Bar charts drawn straight onto a painter: top-N by total cases, and
// cases vs recovered for the picked countries.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Vec2};

use crate::analysis::{compare as picked, top_by_cases};
use crate::gui::app::App;
use crate::record::{CountryRecord, Field};

const ROW_H: f32 = 22.0;
const LABEL_W: f32 = 180.0;
const CASES: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);
const RECOVERED: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Bar lengths as fractions of the largest value. All zero when max is zero.
pub fn bar_fractions(values: &[f64]) -> Vec<f32> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v.max(0.0) / max) as f32).collect()
}

/// One labelled row of bars. `bars` are (fraction, colour, value text).
fn bar_row(ui: &mut egui::Ui, label: &str, bars: &[(f32, Color32, String)]) {
    let width = ui.available_width().max(LABEL_W + 120.0);
    let height = ROW_H * bars.len() as f32;
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let rect = resp.rect;
    let text_color = ui.visuals().text_color();
    let font = FontId::proportional(13.0);

    painter.text(
        Pos2::new(rect.left(), rect.center().y),
        Align2::LEFT_CENTER,
        label,
        font.clone(),
        text_color,
    );

    let bar_w = rect.width() - LABEL_W - 110.0;
    for (i, (frac, color, text)) in bars.iter().enumerate() {
        let top = rect.top() + ROW_H * i as f32 + 3.0;
        let left = rect.left() + LABEL_W;
        let bar = Rect::from_min_size(Pos2::new(left, top), Vec2::new(bar_w * frac, ROW_H - 6.0));
        painter.rect_filled(bar, 2.0, *color);
        painter.text(
            Pos2::new(bar.right() + 6.0, bar.center().y),
            Align2::LEFT_CENTER,
            text,
            font.clone(),
            text_color,
        );
    }
}

fn legend(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.colored_label(CASES, "■");
        ui.label(Field::TotalCases.label());
        ui.colored_label(RECOVERED, "■");
        ui.label(Field::TotalRecovered.label());
    });
}

pub fn top_countries(ui: &mut egui::Ui, app: &mut App) {
    let Some(snap) = app.snapshot() else {
        ui.weak("No data yet. Press Scrape.");
        return;
    };
    let n = app.state.gui.top_n;
    let top = top_by_cases(snap, n);

    ui.strong(format!("Top {n} countries by total cases"));
    let fracs = bar_fractions(&top.iter().map(|r| r.total_cases as f64).collect::<Vec<_>>());

    egui::ScrollArea::vertical().id_salt("top_chart").show(ui, |ui| {
        for (rec, frac) in top.iter().zip(fracs) {
            bar_row(ui, &rec.country, &[(frac, CASES, rec.display(Field::TotalCases))]);
        }
    });
}

pub fn compare(ui: &mut egui::Ui, app: &mut App) {
    let Some(snap) = app.snapshot() else {
        ui.weak("No data yet. Press Scrape.");
        return;
    };
    let rows: Vec<&CountryRecord> = picked(snap, &app.state.gui.compare);
    if rows.is_empty() {
        ui.weak("Pick countries in the left panel.");
        return;
    }

    ui.strong("Total cases vs total recovered");
    legend(ui);

    // one scale for both series so bars are comparable
    let all: Vec<f64> = rows
        .iter()
        .flat_map(|r| [r.total_cases as f64, r.total_recovered as f64])
        .collect();
    let fracs = bar_fractions(&all);

    egui::ScrollArea::vertical().id_salt("compare_chart").show(ui, |ui| {
        for (rec, pair) in rows.iter().zip(fracs.chunks_exact(2)) {
            let (cases, recovered) = (pair[0], pair[1]);
            bar_row(
                ui,
                &rec.country,
                &[
                    (cases, CASES, rec.display(Field::TotalCases)),
                    (recovered, RECOVERED, rec.display(Field::TotalRecovered)),
                ],
            );
        }
    });
}
