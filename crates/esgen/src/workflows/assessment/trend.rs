use super::domain::EsgCategory;
use super::scoring::ScoreResult;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

pub const TREND_MONTHS: usize = 6;

/// Per-month (step back, floor) pairs for the five months before the current one.
struct RampProfile {
    steps: [(u8, u8); TREND_MONTHS - 1],
}

const ENVIRONMENTAL_RAMP: RampProfile = RampProfile {
    steps: [(15, 30), (12, 35), (9, 40), (6, 45), (3, 48)],
};
const SOCIAL_RAMP: RampProfile = RampProfile {
    steps: [(12, 35), (10, 38), (8, 40), (5, 43), (3, 46)],
};
const GOVERNANCE_RAMP: RampProfile = RampProfile {
    steps: [(10, 40), (8, 42), (6, 44), (4, 46), (2, 48)],
};

impl RampProfile {
    fn for_category(category: EsgCategory) -> &'static Self {
        match category {
            EsgCategory::Environmental => &ENVIRONMENTAL_RAMP,
            EsgCategory::Social => &SOCIAL_RAMP,
            EsgCategory::Governance => &GOVERNANCE_RAMP,
        }
    }

    fn series(&self, current: u8) -> [u8; TREND_MONTHS] {
        let mut values = [current; TREND_MONTHS];
        for (slot, (step_back, floor)) in values.iter_mut().zip(self.steps) {
            *slot = current.saturating_sub(step_back).max(floor).min(current);
        }
        values
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// `YYYY-MM`
    pub month: String,
    pub environmental: u8,
    pub social: u8,
    pub governance: u8,
}

/// Synthetic six-month history ramping up to the current scores.
///
/// The last point is the month containing `as_of` and carries the real scores.
pub fn synthesize_trend(scores: &ScoreResult, as_of: NaiveDate) -> Vec<TrendPoint> {
    let environmental =
        RampProfile::for_category(EsgCategory::Environmental).series(scores.environmental);
    let social = RampProfile::for_category(EsgCategory::Social).series(scores.social);
    let governance = RampProfile::for_category(EsgCategory::Governance).series(scores.governance);

    let current_month = as_of.with_day(1).unwrap_or(as_of);
    (0..TREND_MONTHS)
        .map(|index| {
            let back = (TREND_MONTHS - 1 - index) as u32;
            let month = current_month
                .checked_sub_months(Months::new(back))
                .unwrap_or(current_month);
            TrendPoint {
                month: month.format("%Y-%m").to_string(),
                environmental: environmental[index],
                social: social[index],
                governance: governance[index],
            }
        })
        .collect()
}
