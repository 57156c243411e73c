//! Advanced refining cost model
//!
//! Given a gear category/tier and unit prices, enumerate every way of
//! committing optional catalysts and rank them by expected gold spent to
//! finish the grind.

pub mod calculator;
pub mod catalog;
pub mod models;
pub mod prices;
pub mod rates;

pub use calculator::{compute_reports, compute_reports_with, cost_sheet};
pub use catalog::{lookup, lookup_by_name};
pub use models::{Category, CombinationReport, Recipe, Tier};
pub use prices::PriceTable;
pub use rates::RefineRates;
