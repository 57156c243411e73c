use refine_calculator::prices::{self, GOLD};
use refine_calculator::{Category, PriceTable, RefineRates, Tier, compute_reports, lookup, lookup_by_name};

#[test]
fn unknown_pairs_have_no_recipe() {
    assert!(lookup_by_name("armor", "t3_2").is_none());
    assert!(lookup_by_name("helmet", "t4_0").is_none());
    assert!(lookup_by_name("weapon", "t4_0").is_some());
}

#[test]
fn every_recipe_ranks_all_strategies() {
    let prices = PriceTable::default_sheet();
    for category in Category::ALL {
        for tier in Tier::ALL {
            let recipe = lookup(category, tier).expect("catalog is complete");
            let reports = compute_reports(recipe, &prices);
            assert_eq!(reports.len(), recipe.combination_count());
            assert!(
                reports
                    .windows(2)
                    .all(|w| w[0].expected_price <= w[1].expected_price)
            );
        }
    }
}

#[test]
fn free_catalysts_are_always_committed() {
    // Only gold is priced, so every catalyst is a free speed-up
    let recipe = lookup(Category::Weapon, Tier::T3_1).unwrap();
    let reports = compute_reports(recipe, &PriceTable::default_sheet());

    let best = &reports[0];
    assert_eq!(best.normal.breath, 3);
    assert_eq!(best.bonus.breath, 3);
    assert_eq!(best.normal.paper, 1);
    assert_eq!(best.bonus.paper, 1);
    assert_eq!(best.normal_paper_names, vec!["장인야금술2"]);
}

#[test]
fn price_sheet_feeds_the_engine() {
    let sheet = "\
운명의수호석 = 2
운돌 = 80
아비도스 = 90
운명파편 = 0.5
빙하 = 400
장인재봉술1 = 10000
";
    let (mut table, stats) = prices::parse_price_sheet(sheet).unwrap();
    assert_eq!(stats.priced, 6);
    table.set(GOLD, 1.0);

    let recipe = lookup_by_name("armor", "t4_0").unwrap();
    let reports = compute_reports(recipe, &table);
    assert_eq!(reports.len(), 16);

    let rates = RefineRates::default();
    let waiver = rates.material_waiver();
    let best = &reports[0];
    let stone = best.material("운명의수호석").unwrap();
    assert!((stone - 500.0 * best.expected_try_count * waiver).abs() < 1e-6);

    // Owning the paper makes it free, which can only help
    let owned = table.clone().with_owned(["장인재봉술1"]);
    let cheaper = compute_reports(recipe, &owned);
    assert!(cheaper[0].expected_price <= best.expected_price);
    assert_eq!(cheaper[0].normal.paper, 1);
}
