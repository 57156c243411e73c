//! Unit prices for refining materials
//!
//! Prices come from outside the calculator: a plain-text price sheet
//! (`name = price` per line, `#` comments) plus command-line overrides.
//! Anything not priced reads as 0.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog;

/// Gold is always paid, even when the user marks it as owned
pub const GOLD: &str = "골드";

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("failed to read price sheet {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid price for {name}: {value}")]
    InvalidPrice { name: String, value: String },
    #[error("expected NAME=PRICE, got {0:?}")]
    MalformedOverride(String),
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

// Pattern: 은총 = 120  or  은총: 120
fn line_pattern() -> Result<Regex, PriceError> {
    Ok(Regex::new(r"^\s*([^\s=:#]+)\s*[=:]\s*(\S+)\s*$")?)
}

/// Item name to unit price (gold)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalog item at 0, except gold at 1
    pub fn default_sheet() -> Self {
        let mut table = Self::new();
        for name in catalog::item_names() {
            table.set(name, if name == GOLD { 1.0 } else { 0.0 });
        }
        table
    }

    /// Price of one unit; unpriced items cost nothing
    pub fn get(&self, name: &str) -> f64 {
        self.prices.get(name).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, name: impl Into<String>, price: f64) {
        self.prices.insert(name.into(), price);
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Entries sorted by name
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut list: Vec<_> = self.prices.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        list.sort_by(|a, b| a.0.cmp(b.0));
        list
    }

    /// Copy `other`'s entries over this table
    pub fn merge(&mut self, other: &PriceTable) {
        for (name, price) in &other.prices {
            self.prices.insert(name.clone(), *price);
        }
    }

    /// Zero out items the user already holds. Gold is never free.
    pub fn with_owned<'a>(mut self, owned: impl IntoIterator<Item = &'a str>) -> Self {
        for name in owned {
            if name == GOLD {
                debug!("ignoring owned flag for {}", GOLD);
                continue;
            }
            self.set(name, 0.0);
        }
        self
    }

    /// Render in the format [`parse_price_sheet`] reads
    pub fn to_sheet(&self) -> String {
        let mut output = String::from("# item = unit price (gold)\n");
        for (name, price) in self.sorted() {
            output.push_str(&format!("{} = {}\n", name, price));
        }
        output
    }
}

fn parse_price(name: &str, value: &str) -> Result<f64, PriceError> {
    match value.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(PriceError::InvalidPrice {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Parse price sheet text
pub fn parse_price_sheet(text: &str) -> Result<(PriceTable, SheetStats), PriceError> {
    let mut table = PriceTable::new();
    let mut stats = SheetStats::default();
    let pattern = line_pattern()?;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        match pattern.captures(line) {
            Some(cap) => {
                let price = parse_price(&cap[1], &cap[2])?;
                table.set(&cap[1], price);
                stats.priced += 1;
            }
            None => {
                warn!("skipping malformed price line {}: {:?}", index + 1, raw);
                stats.skipped += 1;
            }
        }
    }

    Ok((table, stats))
}

/// Read and parse a price sheet from disk
pub fn load_price_sheet(path: &Path) -> Result<PriceTable, PriceError> {
    let text = fs::read_to_string(path).map_err(|source| PriceError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let (table, stats) = parse_price_sheet(&text)?;
    info!("loaded {}: {}", path.display(), stats);
    Ok(table)
}

/// Parse one `NAME=PRICE` command-line override
pub fn parse_override(arg: &str) -> Result<(String, f64), PriceError> {
    let pattern = line_pattern()?;
    let cap = pattern
        .captures(arg)
        .ok_or_else(|| PriceError::MalformedOverride(arg.to_string()))?;
    let price = parse_price(&cap[1], &cap[2])?;
    Ok((cap[1].to_string(), price))
}

#[derive(Debug, Default, PartialEq)]
pub struct SheetStats {
    pub priced: usize,
    pub skipped: usize,
}

impl std::fmt::Display for SheetStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} prices, {} lines skipped", self.priced, self.skipped)
    }
}
