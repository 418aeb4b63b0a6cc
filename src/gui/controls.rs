//! Sidebar controls: form filter, form list, relation, columns, row limit.

use eframe::egui;
use egui_phosphor::regular as icons;

use super::App;
use crate::dataset::schema::{Relation, TableColumn};
use crate::theme;

pub fn render_sidebar(app: &mut App, ui: &mut egui::Ui) {
    ui.add_space(theme::SPACING_SMALL);

    render_form_picker(app, ui);
    ui.add_space(theme::SPACING_SMALL);
    render_query_settings(app, ui);
    ui.add_space(theme::SPACING_SMALL);
    render_column_picker(app, ui);
    ui.add_space(theme::SPACING_SMALL);
    render_session_panel(app, ui);
}

fn render_form_picker(app: &mut App, ui: &mut egui::Ui) {
    theme::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.strong(format!("{} Construction form", icons::MAGNIFYING_GLASS));
        ui.add_space(theme::SPACING_TINY);
        ui.add(
            egui::TextEdit::singleline(&mut app.word)
                .hint_text("type to narrow forms")
                .desired_width(f32::INFINITY),
        );

        // An empty box means "no filter yet" and shows every form; the
        // matching() contract itself treats an empty query as no candidates.
        let choices: Vec<String> = if app.word.is_empty() {
            app.dataset.forms().all().to_vec()
        } else {
            app.dataset
                .forms()
                .matching(&app.word)
                .iter()
                .map(|s| (*s).to_owned())
                .collect()
        };

        ui.add_space(theme::SPACING_TINY);
        egui::ScrollArea::vertical()
            .id_salt("form_list")
            .max_height(180.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if choices.is_empty() {
                    ui.label(egui::RichText::new("No matching forms.").weak());
                }
                for form in &choices {
                    let selected = app.selected_form.as_deref() == Some(form.as_str());
                    if ui.selectable_label(selected, form.as_str()).clicked() {
                        app.selected_form = Some(form.clone());
                    }
                }
            });
    });
}

fn render_query_settings(app: &mut App, ui: &mut egui::Ui) {
    theme::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.strong(format!("{} Query", icons::FUNNEL));
        ui.add_space(theme::SPACING_TINY);

        ui.horizontal(|ui| {
            ui.label("Relation:");
            ui.radio_value(
                &mut app.relation,
                Relation::Attraction,
                Relation::Attraction.label(),
            );
            ui.radio_value(
                &mut app.relation,
                Relation::Repulsion,
                Relation::Repulsion.label(),
            );
        });

        ui.horizontal(|ui| {
            ui.label("Rows:").on_hover_text("Maximum number of result rows.");
            ui.add(egui::DragValue::new(&mut app.limit).range(0..=10_000));
        });
    });
}

fn render_column_picker(app: &mut App, ui: &mut egui::Ui) {
    theme::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.strong(format!("{} Table columns", icons::TABLE));
        ui.label(
            egui::RichText::new("None checked shows the default set.")
                .weak()
                .size(11.0),
        );
        ui.add_space(theme::SPACING_TINY);

        for column in TableColumn::ALL {
            let mut checked = app.columns.contains(&column);
            if ui.checkbox(&mut checked, column.label()).changed() {
                if checked {
                    app.columns.insert(column);
                } else {
                    app.columns.remove(&column);
                }
            }
        }
    });
}

fn render_session_panel(app: &mut App, ui: &mut egui::Ui) {
    theme::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());

        if ui
            .button(format!("{} Save as defaults", icons::FLOPPY_DISK))
            .on_hover_text("Remember the current row limit for the next run.")
            .clicked()
        {
            app.save_settings();
        }

        ui.add_space(theme::SPACING_TINY);
        ui.label(egui::RichText::new(&app.status).weak().size(11.0));

        if !app.config.audit_log.is_empty() {
            egui::CollapsingHeader::new(format!(
                "{} Activity",
                icons::CLOCK_COUNTER_CLOCKWISE
            ))
            .default_open(false)
            .show(ui, |ui| {
                for entry in app.config.audit_log.entries().iter().rev().take(8) {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}: {}",
                            entry.timestamp.format("%H:%M:%S"),
                            entry.action,
                            entry.details
                        ))
                        .weak()
                        .size(10.0),
                    );
                }
            });
        }
    });
}
