//! Dataset loading and the immutable in-memory table.
//!
//! The dataset is read once at process start and never mutated afterwards.
//! Everything downstream (form index, query pipelines, GUI) borrows it
//! read-only, so concurrent readers need no coordination.

use std::path::Path;
use std::time::Instant;

use polars::prelude::*;
use tracing::info;

use crate::error::{CollostructError, Result};

pub mod forms;
pub mod schema;

pub use forms::FormIndex;
pub use schema::{Metric, Relation, TableColumn};

/// The loaded dataset: a Polars frame plus the index of distinct
/// construction forms derived from it.
///
/// Invariant: every row's `Form` value is present in the form index, because
/// the index is built from the very same frame at construction time.
#[derive(Debug)]
pub struct Dataset {
    df: DataFrame,
    forms: FormIndex,
}

impl Dataset {
    /// Read a delimited dataset file. Executed exactly once per process.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let started = Instant::now();

        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10_000))
            .with_has_header(true)
            .finish()
            .and_then(LazyFrame::collect)
            .map_err(|e| {
                CollostructError::DataLoad(format!("failed to read {}: {e}", path.display()))
            })?;

        let dataset = Self::from_frame(df)?;
        info!(
            path = %path.display(),
            rows = dataset.height(),
            forms = dataset.forms.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Wrap an already-built frame: validate required columns, normalize the
    /// metric columns to Float64, and derive the form index.
    pub fn from_frame(df: DataFrame) -> Result<Self> {
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        let missing: Vec<&str> = schema::REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|required| !names.contains(required))
            .collect();
        if !missing.is_empty() {
            return Err(CollostructError::DataLoad(format!(
                "missing required columns: {}",
                missing.join(", ")
            )));
        }

        // Integer-typed metric exports (raw observation counts) become
        // Float64 here so the query pipelines see one numeric type.
        let metric_casts: Vec<Expr> = Metric::ALL
            .iter()
            .map(|m| col(m.column_name()).cast(DataType::Float64))
            .collect();
        let df = df
            .lazy()
            .with_columns(metric_casts)
            .collect()
            .map_err(|e| {
                CollostructError::DataLoad(format!("failed to normalize metric columns: {e}"))
            })?;

        let forms = FormIndex::from_frame(&df)?;
        Ok(Self { df, forms })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn forms(&self) -> &FormIndex {
        &self.forms
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    #![expect(clippy::unwrap_used)]

    use super::*;

    /// A small six-row dataset covering two forms, both relations, a strength
    /// tie, and one exact duplicate of the plot-view projection fields.
    pub(crate) fn sample_dataset() -> Dataset {
        let columns = vec![
            Column::from(Series::new(
                schema::FORM.into(),
                vec!["什麼都", "什麼都", "什麼都", "什麼都", "一直", "什麼都"],
            )),
            Column::from(Series::new(
                schema::CONSTRUCTION.into(),
                vec![
                    "什麼都好",
                    "什麼都不想",
                    "什麼都可以",
                    "什麼都沒有",
                    "一直以來",
                    "什麼都行",
                ],
            )),
            Column::from(Series::new(
                schema::CONTEXT.into(),
                vec![
                    "現在覺得什麼都好",
                    "今天什麼都不想做",
                    "你說什麼都可以",
                    "最後什麼都沒有了",
                    "一直以來都是這樣",
                    "反正什麼都行",
                ],
            )),
            Column::from(Series::new(
                schema::RELATION.into(),
                vec![
                    "attraction",
                    "attraction",
                    "attraction",
                    "repulsion",
                    "attraction",
                    "attraction",
                ],
            )),
            Column::from(Series::new(
                schema::STRENGTH.into(),
                vec![5.0, 9.0, 5.0, 3.5, 4.2, 5.0],
            )),
            Column::from(Series::new(
                schema::PAIR.into(),
                vec![
                    "什麼_都",
                    "什麼_也",
                    "什麼_都",
                    "什麼_沒",
                    "一_直",
                    "什麼_行",
                ],
            )),
            // Raw counts arrive as integers; from_frame casts them.
            Column::from(Series::new(
                schema::OBS_W1_2_IN_C.into(),
                vec![12i64, 7, 12, 4, 9, 3],
            )),
            Column::from(Series::new(
                schema::DELTA_P_CONSTR_TO_WORD.into(),
                vec![0.30, 0.22, 0.30, -0.08, 0.15, 0.05],
            )),
            Column::from(Series::new(
                schema::DELTA_P_WORD_TO_CONSTR.into(),
                vec![0.18, 0.11, 0.18, -0.03, 0.09, 0.02],
            )),
            Column::from(Series::new(
                schema::SENSE_ANNOTATED.into(),
                vec!["ALL", "ALL", "ALL", "NONE", "DUR", "ALL"],
            )),
            Column::from(Series::new(
                schema::SENSE_PREDICTED.into(),
                vec!["ALL", "FREE", "ALL", "NONE", "DUR", "ALL"],
            )),
            Column::from(Series::new(
                schema::XY_RELATION_PREDICTED.into(),
                vec!["X>Y", "X>Y", "X>Y", "X<Y", "X>Y", "X>Y"],
            )),
            Column::from(Series::new(
                schema::BOARDNAME.into(),
                vec![
                    "Gossiping",
                    "Boy-Girl",
                    "WomenTalk",
                    "Gossiping",
                    "NBA",
                    "Tech_Job",
                ],
            )),
        ];
        let df = DataFrame::new(columns).unwrap();
        Dataset::from_frame(df).unwrap()
    }
}
