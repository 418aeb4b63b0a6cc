//! Table view: filter, sort, truncate, project.

use std::collections::BTreeSet;

use polars::prelude::*;

use crate::dataset::schema::{Relation, TableColumn};
use crate::dataset::Dataset;
use crate::error::{CollostructError, Result};

/// Parameters of one table query. Ephemeral: built per interaction,
/// executed once, discarded.
#[derive(Debug, Clone)]
pub struct TableQuery {
    form: String,
    relation: Relation,
    limit: usize,
    columns: Vec<String>,
}

impl TableQuery {
    pub fn new(form: impl Into<String>, relation: Relation) -> Self {
        Self {
            form: form.into(),
            relation,
            limit: 10,
            columns: Vec::new(),
        }
    }

    /// Maximum number of rows. Zero yields an empty projection.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Requested column tokens (dataset header names). An empty selection
    /// falls back to [`TableColumn::DEFAULT`].
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Run the pipeline: filter by form and relation, stable sort by
    /// strength descending, truncate, then project the selected columns in
    /// canonical order regardless of how the request listed them.
    pub fn execute(&self, dataset: &Dataset) -> Result<DataFrame> {
        let selected = self.resolve_columns()?;
        let lf = super::filter_form_relation(dataset, &self.form, self.relation)?;

        let exprs: Vec<Expr> = selected.iter().map(|c| col(c.column_name())).collect();
        let df = super::sort_by_strength_desc(lf)
            .limit(super::clamp_limit(self.limit))
            .select(exprs)
            .collect()?;
        Ok(df)
    }

    fn resolve_columns(&self) -> Result<Vec<TableColumn>> {
        if self.columns.is_empty() {
            return Ok(TableColumn::DEFAULT.to_vec());
        }
        let mut selected = BTreeSet::new();
        for token in &self.columns {
            let column = TableColumn::parse(token)
                .ok_or_else(|| CollostructError::InvalidColumn(token.clone()))?;
            selected.insert(column);
        }
        // BTreeSet iteration is the canonical declaration order.
        Ok(selected.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]

    use super::*;
    use crate::dataset::fixtures::sample_dataset;
    use crate::dataset::schema;

    fn strengths(df: &DataFrame) -> Vec<f64> {
        df.column(schema::STRENGTH)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect()
    }

    fn text_column(df: &DataFrame, name: &str) -> Vec<String> {
        df.column(name)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .map(str::to_owned)
            .collect()
    }

    fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_rows_match_form_and_relation_sorted_descending() {
        let dataset = sample_dataset();
        let df = TableQuery::new("什麼都", Relation::Attraction)
            .columns(["Form", "Relation", "Collostruction_strength"])
            .execute(&dataset)
            .unwrap();

        assert_eq!(df.height(), 4);
        assert!(text_column(&df, schema::FORM).iter().all(|f| f == "什麼都"));
        assert!(
            text_column(&df, schema::RELATION)
                .iter()
                .all(|r| r == "attraction")
        );
        assert_eq!(strengths(&df), vec![9.0, 5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        let dataset = sample_dataset();
        let df = TableQuery::new("什麼都", Relation::Attraction)
            .execute(&dataset)
            .unwrap();

        // Three rows share strength 5.0; the stable sort keeps their
        // original order behind the 9.0 row.
        assert_eq!(
            text_column(&df, schema::CONSTRUCTION),
            vec!["什麼都不想", "什麼都好", "什麼都可以", "什麼都行"]
        );
    }

    #[test]
    fn test_limit_truncates_and_zero_is_empty() {
        let dataset = sample_dataset();
        let base = TableQuery::new("什麼都", Relation::Attraction);

        assert_eq!(base.clone().limit(2).execute(&dataset).unwrap().height(), 2);
        assert_eq!(base.clone().limit(0).execute(&dataset).unwrap().height(), 0);
        // Oversized limits return everything available.
        assert_eq!(
            base.clone().limit(100).execute(&dataset).unwrap().height(),
            4
        );
    }

    #[test]
    fn test_relation_filter_is_exact() {
        let dataset = sample_dataset();
        let df = TableQuery::new("什麼都", Relation::Repulsion)
            .execute(&dataset)
            .unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(strengths(&df), vec![3.5]);
    }

    #[test]
    fn test_empty_selection_falls_back_to_default_columns() {
        let dataset = sample_dataset();
        let df = TableQuery::new("一直", Relation::Attraction)
            .execute(&dataset)
            .unwrap();
        assert_eq!(
            column_names(&df),
            vec!["Form", "Construction", "Context", "Collostruction_strength"]
        );
    }

    #[test]
    fn test_projection_order_is_canonical_not_request_order() {
        let dataset = sample_dataset();
        let df = TableQuery::new("一直", Relation::Attraction)
            .columns(["Boardname", "Form", "Relation"])
            .execute(&dataset)
            .unwrap();
        assert_eq!(column_names(&df), vec!["Form", "Relation", "Boardname"]);
    }

    #[test]
    fn test_duplicate_tokens_project_once() {
        let dataset = sample_dataset();
        let df = TableQuery::new("一直", Relation::Attraction)
            .columns(["Form", "Form"])
            .execute(&dataset)
            .unwrap();
        assert_eq!(column_names(&df), vec!["Form"]);
    }

    #[test]
    fn test_unknown_form_is_typed() {
        let dataset = sample_dataset();
        let err = TableQuery::new("不存在", Relation::Attraction)
            .execute(&dataset)
            .unwrap_err();
        assert!(matches!(err, CollostructError::UnknownForm(f) if f == "不存在"));
    }

    #[test]
    fn test_unrecognized_column_is_typed() {
        let dataset = sample_dataset();
        let err = TableQuery::new("什麼都", Relation::Attraction)
            .columns(["Form", "pair"])
            .execute(&dataset)
            .unwrap_err();
        assert!(matches!(err, CollostructError::InvalidColumn(c) if c == "pair"));
    }

    #[test]
    fn test_identical_queries_yield_identical_projections() {
        let dataset = sample_dataset();
        let query = TableQuery::new("什麼都", Relation::Attraction)
            .limit(3)
            .columns(["Form", "Construction", "Collostruction_strength"]);

        let first = query.execute(&dataset).unwrap();
        let second = query.execute(&dataset).unwrap();
        assert!(first.equals(&second));
    }
}
