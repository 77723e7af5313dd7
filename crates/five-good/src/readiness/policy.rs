use std::collections::BTreeMap;

use super::config::ReadinessThresholds;
use super::domain::{Category, CategoryResult, OverallStatus};

/// Blends the category verdicts into an overall status and a 0-100 score.
///
/// The two score formulas are kept apart on purpose: the eligible path starts
/// at the base score while the partial path tops out at five times the
/// per-category credit, so an eligible student never scores below one who is not.
pub(crate) fn decide_outcome(
    categories: &BTreeMap<Category, CategoryResult>,
    config: &ReadinessThresholds,
) -> (OverallStatus, u8) {
    let hard_passed = categories
        .values()
        .filter(|result| result.is_hard_passed)
        .count();
    let all_hard_passed = hard_passed == categories.len();

    if all_hard_passed {
        let total_soft: u32 = categories
            .values()
            .map(|result| u32::from(result.soft_bonus))
            .sum();
        let excellence = if total_soft >= config.excellence_soft_threshold {
            u32::from(config.excellence_bonus)
        } else {
            0
        };
        let score = u32::from(config.eligible_base_score) + total_soft + excellence;
        return (OverallStatus::Eligible, clamp_score(score));
    }

    let score = hard_passed as u32 * u32::from(config.partial_credit_per_category);
    let any_almost = categories.values().any(|result| result.is_almost_passed);

    let status = if hard_passed >= config.almost_ready_min_passed && any_almost {
        OverallStatus::AlmostReady
    } else {
        OverallStatus::NotEligible
    };

    (status, clamp_score(score))
}

fn clamp_score(score: u32) -> u8 {
    score.min(100) as u8
}
