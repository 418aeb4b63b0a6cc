//! # Collostruct - Collostruction Analysis Browser
//!
//! Collostruct is a desktop browser for precomputed collostructional
//! statistics: pick a construction form and an association relation, then
//! view the matching rows as a table or as faceted bar charts over four
//! association metrics. The statistics themselves are computed upstream;
//! this crate only filters, sorts, truncates, and reshapes them.
//!
//! ## Quick Start
//!
//! ```no_run
//! use collostruct::{Dataset, Relation, TableQuery};
//!
//! # fn example() -> collostruct::Result<()> {
//! // Load the dataset once at startup.
//! let dataset = Dataset::load("data/cnstr_shiny_sense_pred.csv")?;
//!
//! // Query it as often as the UI needs to.
//! let table = TableQuery::new("什麼都", Relation::Attraction)
//!     .limit(10)
//!     .execute(&dataset)?;
//! println!("{} rows", table.height());
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`dataset`]: one-shot loader, schema vocabulary, and the form index
//! - [`query`]: the pure table and plot pipelines
//! - [`gui`]: the eframe dashboard shell that re-runs queries on input change
//! - [`error`]: typed errors the UI layer renders instead of crashing on
//! - [`config`], [`logging`], [`theme`]: settings, tracing setup, looks
//!
//! The query functions are pure over the immutable [`Dataset`]: every call
//! allocates a fresh projection, so any event-driven shell can re-invoke
//! them on each input change without coordination.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod gui;
pub mod logging;
pub mod query;
pub mod theme;

pub use dataset::{Dataset, FormIndex, Metric, Relation, TableColumn};
pub use error::{CollostructError, Result};
pub use query::{PlotPoint, PlotQuery, TableQuery};
