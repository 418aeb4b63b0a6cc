//! The dashboard shell.
//!
//! Owns the widget state (form filter, selection, relation, columns, row
//! limit, active tab) and re-runs a query pipeline only when its parameter
//! tuple changes. The query core stays pure; reactivity lives here.

use std::collections::BTreeSet;

use eframe::egui;
use egui_phosphor::regular as icons;
use polars::prelude::DataFrame;

use crate::config::{self, AppConfig};
use crate::dataset::schema::{Relation, TableColumn};
use crate::dataset::Dataset;
use crate::error::CollostructError;
use crate::query::{PlotPoint, PlotQuery, TableQuery};
use crate::theme;

mod controls;
mod plot_view;
mod table_view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewTab {
    Table,
    Plot,
}

type TableKey = (String, Relation, u32, Vec<TableColumn>);
type PlotKey = (String, Relation, u32);

pub struct App {
    dataset: Dataset,
    config: AppConfig,

    // Input state, one field per sidebar control.
    word: String,
    selected_form: Option<String>,
    relation: Relation,
    columns: BTreeSet<TableColumn>,
    limit: u32,
    tab: ViewTab,

    // Cached projections, keyed by the parameters that produced them.
    table_key: Option<TableKey>,
    table: Option<DataFrame>,
    plot_key: Option<PlotKey>,
    plot: Option<Vec<PlotPoint>>,

    toasts: egui_notify::Toasts,
    status: String,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, dataset: Dataset, config: AppConfig) -> Self {
        theme::apply_collostruct_theme(&cc.egui_ctx);

        let limit = config.settings.default_limit;
        let status = format!(
            "Loaded {} rows across {} forms",
            dataset.height(),
            dataset.forms().len()
        );
        Self {
            dataset,
            config,
            word: String::new(),
            selected_form: None,
            relation: Relation::Attraction,
            columns: BTreeSet::new(),
            limit,
            tab: ViewTab::Table,
            table_key: None,
            table: None,
            plot_key: None,
            plot: None,
            toasts: egui_notify::Toasts::default(),
            status,
        }
    }

    fn table_projection(&self) -> Option<&DataFrame> {
        self.table.as_ref()
    }

    fn plot_projection(&self) -> Option<&[PlotPoint]> {
        self.plot.as_deref()
    }

    /// Recompute a projection only when its parameter tuple changed since
    /// the last frame. Failed queries cache as empty so they do not re-fire
    /// every frame.
    fn refresh_projections(&mut self) {
        let Some(form) = self.selected_form.clone() else {
            self.table_key = None;
            self.table = None;
            self.plot_key = None;
            self.plot = None;
            return;
        };

        let columns: Vec<TableColumn> = self.columns.iter().copied().collect();
        let table_key = (form.clone(), self.relation, self.limit, columns.clone());
        if self.table_key.as_ref() != Some(&table_key) {
            let query = TableQuery::new(form.clone(), self.relation)
                .limit(self.limit as usize)
                .columns(columns.iter().map(|c| c.column_name()));
            match query.execute(&self.dataset) {
                Ok(df) => self.table = Some(df),
                Err(e) => {
                    self.table = None;
                    self.report_error("Table query failed", &e);
                }
            }
            self.table_key = Some(table_key);
        }

        let plot_key = (form.clone(), self.relation, self.limit);
        if self.plot_key.as_ref() != Some(&plot_key) {
            let query = PlotQuery::new(form, self.relation).limit(self.limit as usize);
            match query.execute(&self.dataset) {
                Ok(points) => self.plot = Some(points),
                Err(e) => {
                    self.plot = None;
                    self.report_error("Plot query failed", &e);
                }
            }
            self.plot_key = Some(plot_key);
        }
    }

    fn report_error(&mut self, what: &str, err: &CollostructError) {
        tracing::warn!(error = %err, "{what}");
        self.status = format!("{what}: {err}");
        self.toasts.error(format!("{what}: {err}"));
        self.config.log_event(what, err.to_string());
    }

    fn save_settings(&mut self) {
        self.config.settings.default_limit = self.limit;
        self.config.log_event("Settings Saved", format!("limit {}", self.limit));
        match config::save_app_config(&self.config) {
            Ok(()) => {
                self.status = "Settings saved".to_owned();
                self.toasts.success("Settings saved");
            }
            Err(e) => {
                self.status = format!("Failed to save settings: {e}");
                self.toasts.error(format!("Failed to save settings: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} Collostruction Analysis", icons::CHART_BAR));
                ui.separator();
                ui.selectable_value(&mut self.tab, ViewTab::Table, format!("{} Table", icons::TABLE));
                ui.selectable_value(
                    &mut self.tab,
                    ViewTab::Plot,
                    format!("{} Plot", icons::CHART_BAR_HORIZONTAL),
                );
            });
        });

        egui::SidePanel::left("controls")
            .frame(theme::sidebar_frame())
            .default_width(280.0)
            .show(ctx, |ui| {
                controls::render_sidebar(self, ui);
            });

        self.refresh_projections();

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            ViewTab::Table => table_view::render_table(self, ui),
            ViewTab::Plot => plot_view::render_facets(self, ui),
        });

        self.toasts.show(ctx);
    }
}
