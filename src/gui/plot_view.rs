//! Plot tab: one horizontal bar-chart facet per association metric,
//! laid out two across.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

use super::App;
use crate::dataset::schema::{Metric, Relation};
use crate::query::PlotPoint;
use crate::theme;

pub fn render_facets(app: &App, ui: &mut egui::Ui) {
    let Some(points) = app.plot_projection() else {
        render_hint(ui);
        return;
    };
    if points.is_empty() {
        ui.label("No rows match the current selection.");
        return;
    }

    let color = match app.relation {
        Relation::Attraction => theme::ATTRACTION_COLOR,
        Relation::Repulsion => theme::REPULSION_COLOR,
    };
    let facet_width = (ui.available_width() / 2.0 - 24.0).max(240.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("metric_facets")
            .num_columns(2)
            .spacing([16.0, 16.0])
            .show(ui, |ui| {
                for (i, metric) in Metric::ALL.iter().enumerate() {
                    render_facet(ui, *metric, points, color, facet_width);
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    });
}

fn render_hint(ui: &mut egui::Ui) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Pick a construction form to see its metrics.").weak());
    });
}

fn render_facet(
    ui: &mut egui::Ui,
    metric: Metric,
    points: &[PlotPoint],
    color: egui::Color32,
    width: f32,
) {
    let rows: Vec<&PlotPoint> = points.iter().filter(|p| p.metric == metric).collect();
    let pair_names: Vec<String> = rows.iter().map(|p| p.pair.clone()).collect();
    let caption = pair_names
        .iter()
        .enumerate()
        .map(|(i, pair)| format!("{} {pair}", i + 1))
        .collect::<Vec<_>>()
        .join("  ·  ");

    // Bars stack top to bottom in projection order: strongest pair first.
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, p)| Bar::new(-(i as f64) - 1.0, p.strength).width(0.6))
        .collect();

    let chart = BarChart::new(metric.label(), bars)
        .horizontal()
        .color(color.linear_multiply(0.8))
        .element_formatter(Box::new(move |bar, _| {
            let idx = (-bar.argument - 1.0).round() as usize;
            let pair = pair_names.get(idx).map(String::as_str).unwrap_or("");
            format!("{pair}\n{:.4}", bar.value)
        }));

    ui.vertical(|ui| {
        ui.set_width(width);
        ui.strong(metric.label());
        Plot::new(format!("facet_{}", metric.column_name()))
            .show_axes([true, false])
            .show_grid([true, false])
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .height(190.0)
            .width(width)
            .set_margin_fraction(egui::Vec2::new(0.05, 0.1))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
        ui.label(egui::RichText::new(caption).weak().size(10.0));
    });
}
