//! Index of distinct construction forms.

use std::collections::HashSet;

use polars::prelude::*;

use super::schema;
use crate::error::Result;

/// The distinct construction-form labels of a dataset, in first-occurrence
/// order. Built once at load time and queried on every keystroke of the
/// form filter.
#[derive(Debug, Clone, Default)]
pub struct FormIndex {
    forms: Vec<String>,
}

impl FormIndex {
    /// Scan the `Form` column, keeping the first occurrence of each label.
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let col = df.column(schema::FORM)?;
        let series = col.as_materialized_series();
        let ca = series.str()?;

        let mut seen = HashSet::new();
        let mut forms = Vec::new();
        for value in ca.into_iter().flatten() {
            if seen.insert(value) {
                forms.push(value.to_owned());
            }
        }
        Ok(Self { forms })
    }

    /// All distinct forms, first-occurrence order.
    pub fn all(&self) -> &[String] {
        &self.forms
    }

    pub fn contains(&self, form: &str) -> bool {
        self.forms.iter().any(|f| f == form)
    }

    /// Every form containing `query` as a case-sensitive substring.
    ///
    /// An empty query yields an empty list, not the full list: no filter
    /// text means no candidates. Callers that want "no filter yet" semantics
    /// use [`FormIndex::all`] instead.
    pub fn matching(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return Vec::new();
        }
        self.forms
            .iter()
            .filter(|f| f.contains(query))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}
