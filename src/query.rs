//! Pure query pipelines over the immutable dataset.
//!
//! Both views share the same head (restrict to one construction form under
//! one relation) and differ in how they project and reshape the remainder.
//! Every call allocates a fresh projection; nothing shared is mutated, so an
//! event-driven UI shell can re-invoke these on every input change.

use polars::prelude::*;

use crate::dataset::schema::{self, Relation};
use crate::dataset::Dataset;
use crate::error::{CollostructError, Result};

mod plot;
mod table;

pub use plot::{PlotPoint, PlotQuery};
pub use table::TableQuery;

/// Shared head of both pipelines: the rows of one form under one relation.
fn filter_form_relation(dataset: &Dataset, form: &str, relation: Relation) -> Result<LazyFrame> {
    if !dataset.forms().contains(form) {
        return Err(CollostructError::UnknownForm(form.to_owned()));
    }
    Ok(dataset
        .frame()
        .clone()
        .lazy()
        .filter(col(schema::FORM).eq(lit(form)))
        .filter(col(schema::RELATION).eq(lit(relation.as_str()))))
}

/// Descending stable sort on collostruction strength. Stability matters:
/// there is no secondary sort key, so ties keep their dataset order to stay
/// deterministic.
fn sort_by_strength_desc(lf: LazyFrame) -> LazyFrame {
    lf.sort(
        [schema::STRENGTH],
        SortMultipleOptions::default()
            .with_order_descending(true)
            .with_maintain_order(true),
    )
}

fn clamp_limit(limit: usize) -> IdxSize {
    IdxSize::try_from(limit).unwrap_or(IdxSize::MAX)
}
