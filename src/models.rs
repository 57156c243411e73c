//! Data models for refining recipes and strategy reports

use std::fmt;

use clap::ValueEnum;

/// Gear category being refined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Category {
    Armor,
    Weapon,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Armor, Category::Weapon];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Armor => "armor",
            Category::Weapon => "weapon",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Refining target tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Tier {
    #[value(name = "t3_0")]
    T3_0,
    #[value(name = "t3_1")]
    T3_1,
    #[value(name = "t4_0")]
    T4_0,
    #[value(name = "t4_1")]
    T4_1,
    #[value(name = "t4_2")]
    T4_2,
    #[value(name = "t4_3")]
    T4_3,
}

impl Tier {
    pub const ALL: [Tier; 6] = [
        Tier::T3_0,
        Tier::T3_1,
        Tier::T4_0,
        Tier::T4_1,
        Tier::T4_2,
        Tier::T4_3,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::T3_0 => "t3_0",
            Tier::T3_1 => "t3_1",
            Tier::T4_0 => "t4_0",
            Tier::T4_1 => "t4_1",
            Tier::T4_2 => "t4_2",
            Tier::T4_3 => "t4_3",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named item and how many of it a single attempt uses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ingredient {
    pub name: &'static str,
    pub amount: u32,
}

impl Ingredient {
    pub const fn new(name: &'static str, amount: u32) -> Self {
        Self { name, amount }
    }
}

/// Per-attempt requirements for one category/tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recipe {
    /// Required materials, in catalog order
    pub amount: &'static [Ingredient],
    /// Optional breath catalysts (interchangeable, chosen cheapest-first)
    pub breath: &'static [Ingredient],
    /// Optional paper catalyst
    pub paper: &'static [Ingredient],
}

impl Recipe {
    pub fn breath_slots(&self) -> usize {
        self.breath.len()
    }

    pub fn paper_slots(&self) -> usize {
        self.paper.len()
    }

    /// Number of strategies the engine enumerates for this recipe
    pub fn combination_count(&self) -> usize {
        let b = self.breath_slots() + 1;
        let p = self.paper_slots() + 1;
        b * b * p * p
    }
}

/// Catalysts committed for one kind of attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Commitment {
    pub breath: usize,
    pub paper: usize,
}

/// Expected consumption of one item over a whole grind
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialAmount {
    pub name: &'static str,
    pub amount: f64,
}

/// Result of evaluating one catalyst strategy
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationReport {
    pub normal: Commitment,
    pub bonus: Commitment,
    pub normal_breath_names: Vec<&'static str>,
    pub bonus_breath_names: Vec<&'static str>,
    pub normal_paper_names: Vec<&'static str>,
    pub bonus_paper_names: Vec<&'static str>,
    pub expected_try_count: f64,
    pub expected_price: f64,
    pub expected_materials: Vec<MaterialAmount>,
}

impl CombinationReport {
    pub fn material(&self, name: &str) -> Option<f64> {
        self.expected_materials
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.amount)
    }
}
