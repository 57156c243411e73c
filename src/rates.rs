//! Success-rate tables and the attempt-rate configuration

use thiserror::Error;

use crate::models::Commitment;

/// Experience granted per outcome: success, great success, great success x2
const OUTCOME_EXP: [f64; 3] = [10.0, 20.0, 40.0];

// Rows past the last one are capped by the game.
const THREE_BREATH_ROWS: [[f64; 3]; 4] = [
    [0.8, 0.15, 0.05],
    [0.7, 0.2, 0.1],
    [0.6, 0.25, 0.15],
    [0.5, 0.3, 0.2],
];

const ONE_BREATH_ROWS: [[f64; 3]; 2] = [[0.8, 0.15, 0.05], [0.5, 0.3, 0.2]];

const PAPER_ADJUSTMENT: [[f64; 3]; 2] = [[0.0, 0.0, 0.0], [-0.5, 0.3, 0.2]];

#[derive(Debug, Error, PartialEq)]
pub enum RatesError {
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("total experience must be positive, got {0}")]
    NonPositiveTotal(f64),
}

/// Which success table a recipe rolls against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessTable {
    /// T3 recipes: up to three interchangeable breaths
    ThreeBreath,
    /// T4 recipes: a single breath
    OneBreath,
}

impl SuccessTable {
    pub fn for_breath_slots(slots: usize) -> Self {
        if slots == 3 {
            SuccessTable::ThreeBreath
        } else {
            SuccessTable::OneBreath
        }
    }

    fn rows(self) -> &'static [[f64; 3]] {
        match self {
            SuccessTable::ThreeBreath => &THREE_BREATH_ROWS,
            SuccessTable::OneBreath => &ONE_BREATH_ROWS,
        }
    }

    pub fn max_breath(self) -> usize {
        self.rows().len() - 1
    }

    /// Outcome probabilities with `breath` catalysts committed.
    /// Counts above [`Self::max_breath`] read the capped row.
    pub fn rates(self, breath: usize) -> [f64; 3] {
        self.rows()[breath.min(self.max_breath())]
    }
}

fn paper_adjustment(paper: usize) -> [f64; 3] {
    PAPER_ADJUSTMENT[paper.min(PAPER_ADJUSTMENT.len() - 1)]
}

/// Average experience of one normal attempt
pub fn normal_exp(table: SuccessTable, commit: Commitment) -> f64 {
    let base = table.rates(commit.breath);
    let paper = paper_adjustment(commit.paper);

    base.iter()
        .zip(paper)
        .zip(OUTCOME_EXP)
        .map(|((rate, adjust), exp)| (rate + adjust) * exp)
        .sum()
}

/// Ancestor blessings that can fire on a bonus attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusEffect {
    Galatur,
    Gelar,
    Kuhumbar,
    Temer,
}

impl BonusEffect {
    pub const ALL: [BonusEffect; 4] = [
        BonusEffect::Galatur,
        BonusEffect::Gelar,
        BonusEffect::Kuhumbar,
        BonusEffect::Temer,
    ];

    pub fn weight(self) -> f64 {
        match self {
            BonusEffect::Galatur => 0.15,
            BonusEffect::Gelar => 0.35,
            BonusEffect::Kuhumbar => 0.15,
            BonusEffect::Temer => 0.35,
        }
    }

    pub fn apply(self, exp: f64) -> f64 {
        match self {
            BonusEffect::Galatur => exp * 5.0,
            BonusEffect::Gelar => exp * 3.0,
            BonusEffect::Kuhumbar => exp + 30.0,
            BonusEffect::Temer => exp + 10.0,
        }
    }
}

/// Average experience of one bonus attempt.
///
/// The blessing transforms are applied to the normal-attempt average at the
/// same commitment, not to a separate bonus success table.
pub fn bonus_exp(table: SuccessTable, commit: Commitment) -> f64 {
    let base = normal_exp(table, commit);
    BonusEffect::ALL
        .iter()
        .map(|effect| effect.apply(base) * effect.weight())
        .sum()
}

/// Attempt-mix parameters shared by every strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefineRates {
    /// Chance that an attempt is a bonus attempt
    pub bonus_rate: f64,
    /// Share of the base material cost waived on normal attempts
    pub free_rate: f64,
    /// Experience needed to finish the grind
    pub total_exp: f64,
}

impl Default for RefineRates {
    fn default() -> Self {
        Self {
            bonus_rate: 0.16106,
            free_rate: (1.0 / 6.0) * 0.35,
            total_exp: 1000.0,
        }
    }
}

impl RefineRates {
    pub fn validate(&self) -> Result<(), RatesError> {
        for (field, value) in [("bonus_rate", self.bonus_rate), ("free_rate", self.free_rate)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RatesError::OutOfRange { field, value });
            }
        }
        if !self.total_exp.is_finite() || self.total_exp <= 0.0 {
            return Err(RatesError::NonPositiveTotal(self.total_exp));
        }
        Ok(())
    }

    /// Average experience per attempt over the normal/bonus mix
    pub fn blended_exp(&self, table: SuccessTable, normal: Commitment, bonus: Commitment) -> f64 {
        self.blend(normal_exp(table, normal), bonus_exp(table, bonus))
    }

    pub fn expected_try_count(&self, table: SuccessTable, normal: Commitment, bonus: Commitment) -> f64 {
        self.total_exp / self.blended_exp(table, normal, bonus)
    }

    /// Fraction of the base materials actually consumed per attempt
    pub fn material_waiver(&self) -> f64 {
        (1.0 - self.bonus_rate) * (1.0 - self.free_rate) + self.bonus_rate
    }

    /// Mix a normal-attempt value with a bonus-attempt value
    pub fn blend(&self, normal: f64, bonus: f64) -> f64 {
        normal * (1.0 - self.bonus_rate) + bonus * self.bonus_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn commit(breath: usize, paper: usize) -> Commitment {
        Commitment { breath, paper }
    }

    #[test]
    fn test_table_selection() {
        assert_eq!(SuccessTable::for_breath_slots(3), SuccessTable::ThreeBreath);
        assert_eq!(SuccessTable::for_breath_slots(1), SuccessTable::OneBreath);
        assert_eq!(SuccessTable::for_breath_slots(0), SuccessTable::OneBreath);
        assert_eq!(SuccessTable::ThreeBreath.max_breath(), 3);
        assert_eq!(SuccessTable::OneBreath.max_breath(), 1);
    }

    #[test]
    fn test_rates_are_capped() {
        assert_eq!(SuccessTable::OneBreath.rates(5), [0.5, 0.3, 0.2]);
        assert_eq!(SuccessTable::ThreeBreath.rates(9), [0.5, 0.3, 0.2]);
    }

    #[test]
    fn test_normal_exp() {
        // 0.8*10 + 0.15*20 + 0.05*40 = 13
        assert!((normal_exp(SuccessTable::ThreeBreath, commit(0, 0)) - 13.0).abs() < EPSILON);
        // 0.5*10 + 0.3*20 + 0.2*40 = 19
        assert!((normal_exp(SuccessTable::ThreeBreath, commit(3, 0)) - 19.0).abs() < EPSILON);
        assert!((normal_exp(SuccessTable::OneBreath, commit(1, 0)) - 19.0).abs() < EPSILON);
        // paper: 0*10 + 0.6*20 + 0.4*40 = 28
        assert!((normal_exp(SuccessTable::ThreeBreath, commit(3, 1)) - 28.0).abs() < EPSILON);
    }

    #[test]
    fn test_bonus_exp() {
        // 28*5*0.15 + 28*3*0.35 + 58*0.15 + 38*0.35 = 72.4
        let exp = bonus_exp(SuccessTable::ThreeBreath, commit(3, 1));
        assert!((exp - 72.4).abs() < EPSILON, "got {}", exp);

        let weights: f64 = BonusEffect::ALL.iter().map(|e| e.weight()).sum();
        assert!((weights - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_expected_try_count() {
        let rates = RefineRates::default();
        let tries = rates.expected_try_count(SuccessTable::ThreeBreath, commit(3, 1), commit(3, 1));
        let blended = 28.0 * (1.0 - 0.16106) + 72.4 * 0.16106;
        assert!((tries - 1000.0 / blended).abs() < EPSILON);
    }

    #[test]
    fn test_validate() {
        assert!(RefineRates::default().validate().is_ok());

        let bad = RefineRates {
            bonus_rate: 1.5,
            ..RefineRates::default()
        };
        assert_eq!(
            bad.validate(),
            Err(RatesError::OutOfRange {
                field: "bonus_rate",
                value: 1.5
            })
        );

        let nan = RefineRates {
            free_rate: f64::NAN,
            ..RefineRates::default()
        };
        assert!(nan.validate().is_err());

        let zero = RefineRates {
            total_exp: 0.0,
            ..RefineRates::default()
        };
        assert_eq!(zero.validate(), Err(RatesError::NonPositiveTotal(0.0)));
    }
}
