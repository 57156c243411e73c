//! Static recipe table for advanced refining
//!
//! Quantities are per attempt and come straight from the game's balance
//! data, so they are written out by hand rather than derived.

use crate::models::{Category, Ingredient, Recipe, Tier};

const T3_BREATH_LOW: &[Ingredient] = &[
    Ingredient::new("은총", 24),
    Ingredient::new("축복", 12),
    Ingredient::new("가호", 4),
];

const T3_BREATH_HIGH: &[Ingredient] = &[
    Ingredient::new("은총", 36),
    Ingredient::new("축복", 18),
    Ingredient::new("가호", 6),
];

const ARMOR_PAPER_1: &[Ingredient] = &[Ingredient::new("장인재봉술1", 1)];
const ARMOR_PAPER_2: &[Ingredient] = &[Ingredient::new("장인재봉술2", 1)];
const WEAPON_PAPER_1: &[Ingredient] = &[Ingredient::new("장인야금술1", 1)];
const WEAPON_PAPER_2: &[Ingredient] = &[Ingredient::new("장인야금술2", 1)];

static CATALOG: [(Category, Tier, Recipe); 12] = [
    (
        Category::Armor,
        Tier::T3_0,
        Recipe {
            amount: &[
                Ingredient::new("정제된수호강석", 950),
                Ingredient::new("찬명돌", 22),
                Ingredient::new("최상급오레하", 18),
                Ingredient::new("파편", 5500),
                Ingredient::new("골드", 950),
            ],
            breath: T3_BREATH_LOW,
            paper: ARMOR_PAPER_1,
        },
    ),
    (
        Category::Armor,
        Tier::T3_1,
        Recipe {
            amount: &[
                Ingredient::new("정제된수호강석", 1300),
                Ingredient::new("찬명돌", 28),
                Ingredient::new("최상급오레하", 20),
                Ingredient::new("파편", 11000),
                Ingredient::new("골드", 1800),
            ],
            breath: T3_BREATH_HIGH,
            paper: ARMOR_PAPER_2,
        },
    ),
    (
        Category::Armor,
        Tier::T4_0,
        Recipe {
            amount: &[
                Ingredient::new("운명의수호석", 500),
                Ingredient::new("운돌", 12),
                Ingredient::new("아비도스", 15),
                Ingredient::new("운명파편", 3000),
                Ingredient::new("골드", 950),
            ],
            breath: &[Ingredient::new("빙하", 12)],
            paper: ARMOR_PAPER_1,
        },
    ),
    (
        Category::Armor,
        Tier::T4_1,
        Recipe {
            amount: &[
                Ingredient::new("운명의수호석", 900),
                Ingredient::new("운돌", 16),
                Ingredient::new("아비도스", 16),
                Ingredient::new("운명파편", 6000),
                Ingredient::new("골드", 1800),
            ],
            breath: &[Ingredient::new("빙하", 18)],
            paper: ARMOR_PAPER_2,
        },
    ),
    (
        Category::Armor,
        Tier::T4_2,
        Recipe {
            amount: &[
                Ingredient::new("운명의수호석", 1000),
                Ingredient::new("운돌", 18),
                Ingredient::new("아비도스", 17),
                Ingredient::new("운명파편", 7000),
                Ingredient::new("골드", 2000),
            ],
            breath: &[Ingredient::new("빙하", 20)],
            paper: &[],
        },
    ),
    (
        Category::Armor,
        Tier::T4_3,
        Recipe {
            amount: &[
                Ingredient::new("운명의수호석", 1200),
                Ingredient::new("운돌", 23),
                Ingredient::new("아비도스", 19),
                Ingredient::new("운명파편", 8000),
                Ingredient::new("골드", 2400),
            ],
            breath: &[Ingredient::new("빙하", 24)],
            paper: &[],
        },
    ),
    (
        Category::Weapon,
        Tier::T3_0,
        Recipe {
            amount: &[
                Ingredient::new("정제된파괴강석", 1000),
                Ingredient::new("찬명돌", 28),
                Ingredient::new("최상급오레하", 30),
                Ingredient::new("파편", 9000),
                Ingredient::new("골드", 1125),
            ],
            breath: T3_BREATH_LOW,
            paper: WEAPON_PAPER_1,
        },
    ),
    (
        Category::Weapon,
        Tier::T3_1,
        Recipe {
            amount: &[
                Ingredient::new("정제된파괴강석", 1600),
                Ingredient::new("찬명돌", 36),
                Ingredient::new("최상급오레하", 33),
                Ingredient::new("파편", 17000),
                Ingredient::new("골드", 2500),
            ],
            breath: T3_BREATH_HIGH,
            paper: WEAPON_PAPER_2,
        },
    ),
    (
        Category::Weapon,
        Tier::T4_0,
        Recipe {
            amount: &[
                Ingredient::new("운명의파괴석", 600),
                Ingredient::new("운돌", 16),
                Ingredient::new("아비도스", 25),
                Ingredient::new("운명파편", 5000),
                Ingredient::new("골드", 1125),
            ],
            breath: &[Ingredient::new("용암", 12)],
            paper: WEAPON_PAPER_1,
        },
    ),
    (
        Category::Weapon,
        Tier::T4_1,
        Recipe {
            amount: &[
                Ingredient::new("운명의파괴석", 1100),
                Ingredient::new("운돌", 22),
                Ingredient::new("아비도스", 27),
                Ingredient::new("운명파편", 10000),
                Ingredient::new("골드", 2500),
            ],
            breath: &[Ingredient::new("용암", 18)],
            paper: WEAPON_PAPER_2,
        },
    ),
    (
        Category::Weapon,
        Tier::T4_2,
        Recipe {
            amount: &[
                Ingredient::new("운명의파괴석", 1200),
                Ingredient::new("운돌", 25),
                Ingredient::new("아비도스", 28),
                Ingredient::new("운명파편", 11500),
                Ingredient::new("골드", 3000),
            ],
            breath: &[Ingredient::new("용암", 20)],
            paper: &[],
        },
    ),
    (
        Category::Weapon,
        Tier::T4_3,
        Recipe {
            amount: &[
                Ingredient::new("운명의파괴석", 1400),
                Ingredient::new("운돌", 32),
                Ingredient::new("아비도스", 30),
                Ingredient::new("운명파편", 13000),
                Ingredient::new("골드", 4000),
            ],
            breath: &[Ingredient::new("용암", 24)],
            paper: &[],
        },
    ),
];

/// Get the recipe for a category/tier pair
pub fn lookup(category: Category, tier: Tier) -> Option<&'static Recipe> {
    CATALOG
        .iter()
        .find(|(c, t, _)| *c == category && *t == tier)
        .map(|(_, _, recipe)| recipe)
}

/// Like [`lookup`], but from raw names. Unknown names give `None`.
pub fn lookup_by_name(category: &str, tier: &str) -> Option<&'static Recipe> {
    lookup(Category::from_name(category)?, Tier::from_name(tier)?)
}

/// Every catalog row, in table order
pub fn entries() -> impl Iterator<Item = (Category, Tier, &'static Recipe)> {
    CATALOG.iter().map(|(c, t, recipe)| (*c, *t, recipe))
}

/// Every distinct item name any recipe mentions, first-seen order
pub fn item_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for (_, _, recipe) in entries() {
        for item in recipe.amount.iter().chain(recipe.breath).chain(recipe.paper) {
            if !names.contains(&item.name) {
                names.push(item.name);
            }
        }
    }
    names
}
