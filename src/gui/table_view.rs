//! Table tab: the projected rows in a scrollable table.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use polars::prelude::*;

use super::App;
use crate::dataset::schema::TableColumn;

pub fn render_table(app: &App, ui: &mut egui::Ui) {
    let Some(df) = app.table_projection() else {
        render_hint(ui);
        return;
    };
    if df.height() == 0 {
        ui.label("No rows match the current selection.");
        return;
    }

    let columns = column_strings(df);

    ui.label(
        egui::RichText::new(format!("{} rows", df.height()))
            .weak()
            .size(11.0),
    );
    ui.add_space(4.0);

    egui::ScrollArea::horizontal().show(ui, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Min))
            .min_scrolled_height(0.0);
        for _ in &columns {
            table = table.column(Column::initial(140.0).at_least(60.0));
        }
        table = table.column(Column::remainder());

        table
            .header(25.0, |mut header| {
                for (name, _) in &columns {
                    header.col(|ui| {
                        ui.strong(header_label(name));
                    });
                }
                header.col(|_| {});
            })
            .body(|mut body| {
                for row_idx in 0..df.height() {
                    body.row(22.0, |mut row| {
                        for (_, values) in &columns {
                            row.col(|ui| {
                                let text = values.get(row_idx).map(String::as_str).unwrap_or("—");
                                ui.label(text);
                            });
                        }
                        row.col(|_| {});
                    });
                }
            });
    });
}

fn render_hint(ui: &mut egui::Ui) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Pick a construction form to see its table.").weak());
    });
}

/// Human label for a projected dataset column.
fn header_label(name: &str) -> &str {
    TableColumn::parse(name).map_or(name, |c| c.label())
}

/// Stringify every cell for display. Floats get fixed precision, everything
/// else goes through a cast to the string dtype.
fn column_strings(df: &DataFrame) -> Vec<(String, Vec<String>)> {
    df.get_columns()
        .iter()
        .map(|column| {
            let name = column.name().to_string();
            let series = column.as_materialized_series();
            let values = if let Ok(ca) = series.f64() {
                ca.into_iter()
                    .map(|v| v.map(|x| format!("{x:.4}")).unwrap_or_else(|| "—".to_owned()))
                    .collect()
            } else {
                match series.cast(&DataType::String) {
                    Ok(casted) => casted
                        .str()
                        .map(|ca| {
                            ca.into_iter()
                                .map(|v| v.unwrap_or("—").to_owned())
                                .collect::<Vec<_>>()
                        })
                        .unwrap_or_default(),
                    Err(_) => series.iter().map(|v| v.to_string()).collect(),
                }
            };
            (name, values)
        })
        .collect()
}
