//! Plot view: filter, project, dedup, sort, truncate, melt.

use polars::prelude::*;

use crate::dataset::schema::{self, Metric, Relation};
use crate::dataset::Dataset;
use crate::error::Result;

/// One long-format row of the plot projection.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub pair: String,
    pub metric: Metric,
    pub strength: f64,
}

/// Parameters of one plot query.
#[derive(Debug, Clone)]
pub struct PlotQuery {
    form: String,
    relation: Relation,
    limit: usize,
}

impl PlotQuery {
    pub fn new(form: impl Into<String>, relation: Relation) -> Self {
        Self {
            form: form.into(),
            relation,
            limit: 10,
        }
    }

    /// Maximum number of wide rows before melting. Zero yields an empty
    /// projection.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Run the pipeline: filter by form and relation, project to the pair
    /// plus the four metric columns, drop exact-duplicate rows (keep first),
    /// stable sort by strength descending, truncate, then melt each wide row
    /// into four long rows in fixed metric order.
    ///
    /// The output length is always `4 * min(limit, deduplicated row count)`.
    /// Facet rendering consumes this order as-is.
    pub fn execute(&self, dataset: &Dataset) -> Result<Vec<PlotPoint>> {
        let lf = super::filter_form_relation(dataset, &self.form, self.relation)?;

        let mut exprs = vec![col(schema::PAIR)];
        exprs.extend(Metric::ALL.iter().map(|m| col(m.column_name())));

        let wide = super::sort_by_strength_desc(
            lf.select(exprs)
                .unique_stable(None, UniqueKeepStrategy::First),
        )
        .limit(super::clamp_limit(self.limit))
        .collect()?;

        melt(&wide)
    }
}

/// Wide to long: each input row becomes four consecutive output rows, one
/// per metric.
fn melt(wide: &DataFrame) -> Result<Vec<PlotPoint>> {
    let pairs = wide.column(schema::PAIR)?.as_materialized_series().str()?;

    let mut metric_columns = Vec::with_capacity(Metric::ALL.len());
    for metric in Metric::ALL {
        let values = wide
            .column(metric.column_name())?
            .as_materialized_series()
            .f64()?;
        metric_columns.push((metric, values));
    }

    let mut points = Vec::with_capacity(wide.height() * Metric::ALL.len());
    for row in 0..wide.height() {
        let pair = pairs.get(row).unwrap_or("").to_owned();
        for (metric, values) in &metric_columns {
            points.push(PlotPoint {
                pair: pair.clone(),
                metric: *metric,
                strength: values.get(row).unwrap_or(f64::NAN),
            });
        }
    }
    Ok(points)
}
