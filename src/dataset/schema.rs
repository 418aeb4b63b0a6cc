//! Column vocabulary of the collostruction dataset.
//!
//! The input file headers are fixed upstream (including the dotted metric
//! names), so they live here as constants and every other module refers to
//! them through the enums below.

use serde::{Deserialize, Serialize};

pub const FORM: &str = "Form";
pub const CONSTRUCTION: &str = "Construction";
pub const CONTEXT: &str = "Context";
pub const RELATION: &str = "Relation";
pub const STRENGTH: &str = "Collostruction_strength";
pub const PAIR: &str = "pair";
pub const OBS_W1_2_IN_C: &str = "obs.w1_2.in_c";
pub const DELTA_P_CONSTR_TO_WORD: &str = "delta.p.constr.to.word";
pub const DELTA_P_WORD_TO_CONSTR: &str = "delta.p.word.to.constr";
pub const SENSE_ANNOTATED: &str = "Sense_annotated";
pub const SENSE_PREDICTED: &str = "Sense_predicted";
pub const XY_RELATION_PREDICTED: &str = "XY_relation_predicted";
pub const BOARDNAME: &str = "Boardname";

/// Columns the loader refuses to proceed without. `XY_relation_predicted`
/// is optional in the upstream exports.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    FORM,
    CONSTRUCTION,
    CONTEXT,
    RELATION,
    STRENGTH,
    PAIR,
    OBS_W1_2_IN_C,
    DELTA_P_CONSTR_TO_WORD,
    DELTA_P_WORD_TO_CONSTR,
    SENSE_ANNOTATED,
    SENSE_PREDICTED,
    BOARDNAME,
];

/// Whether a word co-occurs with a construction more or less often than
/// chance. Stored in the dataset as the literal strings `attraction` and
/// `repulsion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Attraction,
    Repulsion,
}

impl Relation {
    /// The literal string used in the `Relation` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Attraction => "attraction",
            Self::Repulsion => "repulsion",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "attraction" => Some(Self::Attraction),
            "repulsion" => Some(Self::Repulsion),
            _ => None,
        }
    }

    /// Display label for UI widgets.
    pub fn label(self) -> &'static str {
        match self {
            Self::Attraction => "Attraction",
            Self::Repulsion => "Repulsion",
        }
    }
}

/// The user-selectable table columns, in canonical display order.
///
/// Declaration order is the canonical order: projections always emit columns
/// in this order no matter how the request listed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TableColumn {
    Form,
    Construction,
    Context,
    Relation,
    CollostructionStrength,
    SenseAnnotated,
    SensePredicted,
    Boardname,
}

impl TableColumn {
    pub const ALL: [Self; 8] = [
        Self::Form,
        Self::Construction,
        Self::Context,
        Self::Relation,
        Self::CollostructionStrength,
        Self::SenseAnnotated,
        Self::SensePredicted,
        Self::Boardname,
    ];

    /// The default projection when a request selects no columns.
    pub const DEFAULT: [Self; 4] = [
        Self::Form,
        Self::Construction,
        Self::Context,
        Self::CollostructionStrength,
    ];

    /// The dataset column this table column maps to.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Form => FORM,
            Self::Construction => CONSTRUCTION,
            Self::Context => CONTEXT,
            Self::Relation => RELATION,
            Self::CollostructionStrength => STRENGTH,
            Self::SenseAnnotated => SENSE_ANNOTATED,
            Self::SensePredicted => SENSE_PREDICTED,
            Self::Boardname => BOARDNAME,
        }
    }

    /// Resolve a requested column token. Tokens are the dataset header names.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            FORM => Some(Self::Form),
            CONSTRUCTION => Some(Self::Construction),
            CONTEXT => Some(Self::Context),
            RELATION => Some(Self::Relation),
            STRENGTH => Some(Self::CollostructionStrength),
            SENSE_ANNOTATED => Some(Self::SenseAnnotated),
            SENSE_PREDICTED => Some(Self::SensePredicted),
            BOARDNAME => Some(Self::Boardname),
            _ => None,
        }
    }

    /// Display label for table headers and the column picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Form => "Form",
            Self::Construction => "Construction",
            Self::Context => "Context",
            Self::Relation => "Relation",
            Self::CollostructionStrength => "Strength",
            Self::SenseAnnotated => "Sense (annotated)",
            Self::SensePredicted => "Sense (predicted)",
            Self::Boardname => "Board",
        }
    }
}

/// The four association metrics of the plot view, in facet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    ObservedFrequency,
    DeltaConstructionToWord,
    DeltaWordToConstruction,
    CollostructionStrength,
}

impl Metric {
    pub const ALL: [Self; 4] = [
        Self::ObservedFrequency,
        Self::DeltaConstructionToWord,
        Self::DeltaWordToConstruction,
        Self::CollostructionStrength,
    ];

    /// The dataset column holding this metric.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::ObservedFrequency => OBS_W1_2_IN_C,
            Self::DeltaConstructionToWord => DELTA_P_CONSTR_TO_WORD,
            Self::DeltaWordToConstruction => DELTA_P_WORD_TO_CONSTR,
            Self::CollostructionStrength => STRENGTH,
        }
    }

    /// Facet title. Uses the dataset header so charts and file stay aligned.
    pub fn label(self) -> &'static str {
        self.column_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_round_trip() {
        assert_eq!(Relation::parse("attraction"), Some(Relation::Attraction));
        assert_eq!(Relation::parse("repulsion"), Some(Relation::Repulsion));
        assert_eq!(Relation::parse("Attraction"), None);
        assert_eq!(Relation::Attraction.as_str(), "attraction");
    }

    #[test]
    fn test_table_column_parse_rejects_unmapped_fields() {
        assert_eq!(TableColumn::parse("Form"), Some(TableColumn::Form));
        assert_eq!(
            TableColumn::parse("Collostruction_strength"),
            Some(TableColumn::CollostructionStrength)
        );
        // pair and the metric columns are plot-only.
        assert_eq!(TableColumn::parse("pair"), None);
        assert_eq!(TableColumn::parse("obs.w1_2.in_c"), None);
        assert_eq!(TableColumn::parse("frequency"), None);
    }

    #[test]
    fn test_canonical_order_is_declaration_order() {
        let mut shuffled = vec![
            TableColumn::Boardname,
            TableColumn::Form,
            TableColumn::Context,
        ];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![
                TableColumn::Form,
                TableColumn::Context,
                TableColumn::Boardname
            ]
        );
    }

    #[test]
    fn test_metric_facet_order() {
        let names: Vec<&str> = Metric::ALL.iter().map(|m| m.column_name()).collect();
        assert_eq!(
            names,
            vec![
                "obs.w1_2.in_c",
                "delta.p.constr.to.word",
                "delta.p.word.to.constr",
                "Collostruction_strength"
            ]
        );
    }
}
