//! Expected-cost calculator for advanced refining strategies

use tracing::debug;

use crate::models::{CombinationReport, Commitment, Ingredient, MaterialAmount, Recipe};
use crate::prices::PriceTable;
use crate::rates::{RefineRates, SuccessTable};

/// An item together with its per-attempt price
#[derive(Debug, Clone, Copy)]
struct PricedItem {
    name: &'static str,
    amount: u32,
    price: f64,
}

fn priced(items: &[Ingredient], prices: &PriceTable) -> Vec<PricedItem> {
    items
        .iter()
        .map(|item| PricedItem {
            name: item.name,
            amount: item.amount,
            price: prices.get(item.name) * f64::from(item.amount),
        })
        .collect()
}

/// Breaths are interchangeable, so the cheapest ones are always committed first
fn sorted_breath(recipe: &Recipe, prices: &PriceTable) -> Vec<PricedItem> {
    let mut breath = priced(recipe.breath, prices);
    breath.sort_by(|a, b| a.price.total_cmp(&b.price));
    breath
}

fn base_price(recipe: &Recipe, prices: &PriceTable) -> f64 {
    priced(recipe.amount, prices).iter().map(|m| m.price).sum()
}

fn catalyst_price(breath: &[PricedItem], paper: &[PricedItem], commit: Commitment) -> f64 {
    let breath_price: f64 = breath.iter().take(commit.breath).map(|b| b.price).sum();
    let paper_price = match paper.first() {
        Some(p) if commit.paper > 0 => p.price,
        _ => 0.0,
    };
    breath_price + paper_price
}

/// Rank every catalyst strategy for `recipe` using the standard attempt rates
pub fn compute_reports(recipe: &Recipe, prices: &PriceTable) -> Vec<CombinationReport> {
    compute_reports_with(recipe, prices, &RefineRates::default())
}

/// Rank every catalyst strategy for `recipe`, cheapest expected price first
pub fn compute_reports_with(
    recipe: &Recipe,
    prices: &PriceTable,
    rates: &RefineRates,
) -> Vec<CombinationReport> {
    let table = SuccessTable::for_breath_slots(recipe.breath_slots());
    let breath = sorted_breath(recipe, prices);
    let paper = priced(recipe.paper, prices);
    let base = base_price(recipe, prices);
    let waiver = rates.material_waiver();

    let max_breath = recipe.breath_slots();
    let max_paper = recipe.paper_slots();
    let mut reports = Vec::with_capacity(recipe.combination_count());

    for normal_breath in 0..=max_breath {
        for bonus_breath in 0..=max_breath {
            for normal_paper in 0..=max_paper {
                for bonus_paper in 0..=max_paper {
                    let normal = Commitment {
                        breath: normal_breath,
                        paper: normal_paper,
                    };
                    let bonus = Commitment {
                        breath: bonus_breath,
                        paper: bonus_paper,
                    };

                    let tries = rates.expected_try_count(table, normal, bonus);

                    let normal_price =
                        base * (1.0 - rates.free_rate) + catalyst_price(&breath, &paper, normal);
                    let bonus_price = base + catalyst_price(&breath, &paper, bonus);
                    let price_per_try = rates.blend(normal_price, bonus_price);

                    let mut materials: Vec<MaterialAmount> = recipe
                        .amount
                        .iter()
                        .map(|m| MaterialAmount {
                            name: m.name,
                            amount: f64::from(m.amount) * tries * waiver,
                        })
                        .collect();

                    for (index, b) in breath.iter().enumerate() {
                        let used = |count: usize| if index < count { f64::from(b.amount) } else { 0.0 };
                        materials.push(MaterialAmount {
                            name: b.name,
                            amount: rates.blend(used(normal_breath), used(bonus_breath)) * tries,
                        });
                    }

                    for p in &paper {
                        let used = |flag: usize| if flag == 1 { f64::from(p.amount) } else { 0.0 };
                        materials.push(MaterialAmount {
                            name: p.name,
                            amount: rates.blend(used(normal_paper), used(bonus_paper)) * tries,
                        });
                    }

                    let paper_names = |flag: usize| -> Vec<&'static str> {
                        if flag == 1 {
                            paper.iter().map(|p| p.name).collect()
                        } else {
                            Vec::new()
                        }
                    };

                    reports.push(CombinationReport {
                        normal,
                        bonus,
                        normal_breath_names: breath.iter().take(normal_breath).map(|b| b.name).collect(),
                        bonus_breath_names: breath.iter().take(bonus_breath).map(|b| b.name).collect(),
                        normal_paper_names: paper_names(normal_paper),
                        bonus_paper_names: paper_names(bonus_paper),
                        expected_try_count: tries,
                        expected_price: tries * price_per_try,
                        expected_materials: materials,
                    });
                }
            }
        }
    }

    reports.sort_by(|a, b| a.expected_price.total_cmp(&b.expected_price));

    if let Some(best) = reports.first() {
        debug!(
            "evaluated {} strategies, cheapest {:.0} gold over {:.2} tries",
            reports.len(),
            best.expected_price,
            best.expected_try_count
        );
    }

    reports
}

fn describe(breath: &[&str], paper: &[&str]) -> String {
    let names: Vec<&str> = breath.iter().chain(paper).copied().collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join("+")
    }
}

/// Format ranked reports as a table, optionally with expected materials
pub fn format_reports(reports: &[CombinationReport], top: usize, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:>4} {:<24} {:<24} {:>8} {:>14}\n",
        "#", "Normal", "Bonus", "Tries", "Gold"
    ));
    output.push_str(&format!("{}\n", "-".repeat(78)));

    for (rank, report) in reports.iter().take(top).enumerate() {
        output.push_str(&format!(
            "{:>4} {:<24} {:<24} {:>8.2} {:>14.0}\n",
            rank + 1,
            describe(&report.normal_breath_names, &report.normal_paper_names),
            describe(&report.bonus_breath_names, &report.bonus_paper_names),
            report.expected_try_count,
            report.expected_price
        ));

        if verbose {
            for m in &report.expected_materials {
                if m.amount > 0.0 {
                    output.push_str(&format!("       {} x {:.1}\n", m.name, m.amount));
                }
            }
        }
    }

    if reports.len() > top {
        output.push_str(&format!("  ... {} more strategies\n", reports.len() - top));
    }

    output
}

/// One line of a per-attempt cost sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLine {
    pub name: &'static str,
    pub amount: u32,
    pub unit_price: f64,
    pub price: f64,
}

/// What a single attempt costs before any catalyst choice
#[derive(Debug, Clone, PartialEq)]
pub struct CostSheet {
    pub materials: Vec<SheetLine>,
    pub material_price: f64,
    pub breath: Vec<SheetLine>,
    pub paper: Vec<SheetLine>,
}

/// Price out one attempt of `recipe`
pub fn cost_sheet(recipe: &Recipe, prices: &PriceTable) -> CostSheet {
    let lines = |items: &[Ingredient]| -> Vec<SheetLine> {
        items
            .iter()
            .map(|item| {
                let unit_price = prices.get(item.name);
                SheetLine {
                    name: item.name,
                    amount: item.amount,
                    unit_price,
                    price: unit_price * f64::from(item.amount),
                }
            })
            .collect()
    };

    let materials = lines(recipe.amount);
    let material_price = materials.iter().map(|m| m.price).sum();

    CostSheet {
        materials,
        material_price,
        breath: lines(recipe.breath),
        paper: lines(recipe.paper),
    }
}

impl std::fmt::Display for CostSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Cost per Attempt ===")?;
        writeln!(f, "Materials:")?;
        for m in &self.materials {
            writeln!(f, "  {:<16} {:>6} x {:>10.2} = {:>12.0}", m.name, m.amount, m.unit_price, m.price)?;
        }
        writeln!(f, "  Total: {:.0}", self.material_price)?;
        writeln!(f)?;

        if !self.breath.is_empty() {
            writeln!(f, "Breath:")?;
            for b in &self.breath {
                writeln!(f, "  {:<16} {:>6} x {:>10.2} = {:>12.0}", b.name, b.amount, b.unit_price, b.price)?;
            }
            writeln!(f)?;
        }

        if !self.paper.is_empty() {
            writeln!(f, "Paper:")?;
            for p in &self.paper {
                writeln!(f, "  {:<16} {:>6} x {:>10.2} = {:>12.0}", p.name, p.amount, p.unit_price, p.price)?;
            }
        }

        Ok(())
    }
}
