//! Advanced Refining Calculator
//!
//! Ranks catalyst strategies for an advanced refining grind by expected gold cost.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use refine_calculator::{calculator, catalog, prices};
use refine_calculator::{Category, PriceTable, RefineRates, Tier};

#[derive(Parser)]
#[command(name = "refine-calculator")]
#[command(about = "Expected-cost calculator for advanced refining")]
struct Cli {
    /// Price sheet with one `name = price` per line
    #[arg(short, long, global = true)]
    prices: Option<PathBuf>,

    /// Override a single price (e.g. "빙하=300"); may be repeated
    #[arg(long = "price", value_name = "NAME=PRICE", global = true)]
    overrides: Vec<String>,

    /// Item already owned, priced at 0 (gold is always charged); may be repeated
    #[arg(long, value_name = "NAME", global = true)]
    owned: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every catalyst strategy by expected cost
    Calc {
        category: Category,
        tier: Tier,

        /// Number of strategies to show
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Show expected material consumption per strategy
        #[arg(short, long)]
        verbose: bool,

        /// Chance that an attempt is a bonus attempt
        #[arg(long)]
        bonus_rate: Option<f64>,

        /// Share of the base materials waived on normal attempts
        #[arg(long)]
        free_rate: Option<f64>,
    },

    /// Show a recipe and what one attempt costs
    Recipe { category: Category, tier: Tier },

    /// List every recipe in the catalog
    List,

    /// Print the default price sheet
    SamplePrices,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Calc {
            category,
            tier,
            top,
            verbose,
            bonus_rate,
            free_rate,
        } => {
            let recipe = catalog::lookup(*category, *tier)
                .ok_or_else(|| anyhow!("no recipe for {}/{}", category, tier))?;

            let mut rates = RefineRates::default();
            if let Some(r) = bonus_rate {
                rates.bonus_rate = *r;
            }
            if let Some(r) = free_rate {
                rates.free_rate = *r;
            }
            rates.validate()?;

            let prices = load_prices(&cli)?;
            let reports = calculator::compute_reports_with(recipe, &prices, &rates);
            info!("{} strategies for {}/{}", reports.len(), category, tier);

            println!("=== {} {} ===\n", category, tier);
            print!("{}", calculator::format_reports(&reports, *top, *verbose));
        }

        Commands::Recipe { category, tier } => {
            let recipe = catalog::lookup(*category, *tier)
                .ok_or_else(|| anyhow!("no recipe for {}/{}", category, tier))?;
            let prices = load_prices(&cli)?;

            println!("Recipe: {} {}", category, tier);
            println!(
                "  Breath slots: {}, paper slots: {}, strategies: {}\n",
                recipe.breath_slots(),
                recipe.paper_slots(),
                recipe.combination_count()
            );
            print!("{}", calculator::cost_sheet(recipe, &prices));
        }

        Commands::List => {
            println!("{:<8} {:<6} {:>7} {:>6} {:>11}", "Category", "Tier", "Breath", "Paper", "Strategies");
            println!("{}", "-".repeat(42));
            for (category, tier, recipe) in catalog::entries() {
                println!(
                    "{:<8} {:<6} {:>7} {:>6} {:>11}",
                    category.as_str(),
                    tier.as_str(),
                    recipe.breath_slots(),
                    recipe.paper_slots(),
                    recipe.combination_count()
                );
            }
        }

        Commands::SamplePrices => {
            print!("{}", PriceTable::default_sheet().to_sheet());
        }
    }

    Ok(())
}

/// Build the price table: defaults, then the sheet, then overrides, then owned items
fn load_prices(cli: &Cli) -> Result<PriceTable> {
    let mut table = PriceTable::default_sheet();

    if let Some(path) = &cli.prices {
        let sheet = prices::load_price_sheet(path)
            .with_context(|| format!("Failed to load prices from {}", path.display()))?;
        table.merge(&sheet);
    }

    for arg in &cli.overrides {
        let (name, price) = prices::parse_override(arg)?;
        table.set(name, price);
    }

    Ok(table.with_owned(cli.owned.iter().map(String::as_str)))
}
