use std::collections::BTreeMap;

use super::config::ReadinessThresholds;
use super::domain::{Category, CategoryResult, CriteriaInput, StudentClass};

/// Runs every category evaluator. All five always run, whatever the others decide.
pub(crate) fn score_categories(
    criteria: &CriteriaInput,
    class: StudentClass,
    config: &ReadinessThresholds,
) -> BTreeMap<Category, CategoryResult> {
    let mut results = BTreeMap::new();
    results.insert(Category::Ethics, ethics(criteria, config));
    results.insert(Category::Study, study(criteria, class, config));
    results.insert(Category::Physical, physical(criteria));
    results.insert(Category::Volunteer, volunteer(criteria, config));
    results.insert(Category::Integration, integration(criteria, config));
    results
}

/// Absorbs binary rounding so `3.0 >= 3.2 - 0.2` holds without rounding the GPA itself.
const GPA_TOLERANCE: f64 = 1e-9;

fn gpa_at_least(gpa: f64, floor: f64) -> bool {
    gpa + GPA_TOLERANCE >= floor
}

fn soft_points(config: &ReadinessThresholds, earned: &[bool]) -> u8 {
    let count = earned.iter().filter(|flag| **flag).count() as u8;
    count.saturating_mul(config.soft_bonus_step)
}

pub(crate) fn ethics(criteria: &CriteriaInput, config: &ReadinessThresholds) -> CategoryResult {
    let points_met = criteria.training_points >= config.training_points_min;
    let is_hard_passed = points_met && criteria.no_discipline;

    let mut hard_fails = Vec::new();
    let mut tips = Vec::new();

    if !is_hard_passed {
        tips.push(
            "Join Youth Union and Student Association activities to strengthen your conduct record"
                .to_string(),
        );
    }
    if !points_met {
        hard_fails.push(format!(
            "Training points {} are below the required {}",
            criteria.training_points, config.training_points_min
        ));
        tips.push(format!(
            "Raise your training points by {} to reach {}",
            config.training_points_min - criteria.training_points,
            config.training_points_min
        ));
    }
    if !criteria.no_discipline {
        hard_fails.push("Disciplinary violation on record".to_string());
        tips.push("Keep a clean disciplinary record for the rest of the assessment year".to_string());
    }

    if !criteria.marxist_member {
        tips.push("Complete a Marxism-Leninism study course for +3 bonus".to_string());
    }
    if !criteria.exemplary_youth {
        tips.push("Aim for recognition as an exemplary Youth Union member for +3 bonus".to_string());
    }

    CategoryResult {
        is_hard_passed,
        is_almost_passed: !is_hard_passed
            && criteria.training_points >= config.training_points_near_pass,
        hard_fails,
        soft_bonus: soft_points(config, &[criteria.marxist_member, criteria.exemplary_youth]),
        tips,
    }
}

pub(crate) fn study(
    criteria: &CriteriaInput,
    class: StudentClass,
    config: &ReadinessThresholds,
) -> CategoryResult {
    let gpa_min = config.gpa_min(class);
    let is_hard_passed = gpa_at_least(criteria.gpa, gpa_min);

    let research_output = criteria.scientific_research
        || criteria.journal_article
        || criteria.conference_paper
        || criteria.invention;
    let academic_contest = criteria.academic_team_member || criteria.academic_competition_award;

    let mut hard_fails = Vec::new();
    let mut tips = Vec::new();

    if !is_hard_passed {
        hard_fails.push(format!(
            "GPA {} is below the required {:.2} for {} students",
            criteria.gpa, gpa_min, class
        ));
        tips.push(format!(
            "Raise your GPA to at least {:.2} this semester",
            gpa_min
        ));
    }
    if !research_output {
        tips.push(
            "Take part in scientific research, publish an article or paper, or register an invention for +3 bonus"
                .to_string(),
        );
    }
    if !academic_contest {
        tips.push("Join an academic team or enter an academic competition for +3 bonus".to_string());
    }

    let near_pass_floor = gpa_min - config.gpa_near_pass_margin;

    CategoryResult {
        is_hard_passed,
        is_almost_passed: !is_hard_passed && gpa_at_least(criteria.gpa, near_pass_floor),
        hard_fails,
        soft_bonus: soft_points(config, &[research_output, academic_contest]),
        tips,
    }
}

/// Physical has no soft tier and no near-pass band.
pub(crate) fn physical(criteria: &CriteriaInput) -> CategoryResult {
    let is_hard_passed = criteria.is_healthy_student || criteria.sport_award;

    let (hard_fails, tips) = if is_hard_passed {
        (Vec::new(), Vec::new())
    } else {
        (
            vec!["Neither a healthy-student certification nor a sports award".to_string()],
            vec![
                "Pass the healthy-student fitness assessment or earn an award at a sports event"
                    .to_string(),
            ],
        )
    };

    CategoryResult {
        is_hard_passed,
        is_almost_passed: false,
        hard_fails,
        soft_bonus: 0,
        tips,
    }
}

pub(crate) fn volunteer(criteria: &CriteriaInput, config: &ReadinessThresholds) -> CategoryResult {
    let days_met = criteria.volunteer_days >= config.volunteer_days_min;
    let is_hard_passed = days_met && criteria.volunteer_award;
    let many_days = criteria.volunteer_days >= config.volunteer_days_excellent;

    let mut hard_fails = Vec::new();
    let mut tips = Vec::new();

    if !days_met {
        hard_fails.push(format!(
            "{} volunteer days are below the required {}",
            criteria.volunteer_days, config.volunteer_days_min
        ));
        tips.push(format!(
            "Log {} more volunteer day(s)",
            config.volunteer_days_min - criteria.volunteer_days
        ));
    }
    if !criteria.volunteer_award {
        hard_fails.push("No volunteer award or commendation".to_string());
        tips.push(
            "Earn a volunteer commendation from the Youth Union or Student Association".to_string(),
        );
    }
    if !criteria.volunteer_leader {
        tips.push("Take on a leading role in a volunteer campaign for +3 bonus".to_string());
    }
    if !many_days {
        tips.push(format!(
            "Reach {} volunteer days for +3 bonus",
            config.volunteer_days_excellent
        ));
    }

    CategoryResult {
        is_hard_passed,
        is_almost_passed: !is_hard_passed
            && criteria.volunteer_days >= config.volunteer_days_near_pass,
        hard_fails,
        soft_bonus: soft_points(config, &[criteria.volunteer_leader, many_days]),
        tips,
    }
}

/// Integration is strictly conjunctive and has no near-pass band.
pub(crate) fn integration(
    criteria: &CriteriaInput,
    config: &ReadinessThresholds,
) -> CategoryResult {
    let is_hard_passed = criteria.skill_course_or_union_award
        && criteria.integration_activity
        && criteria.english_b1_or_gpa;

    let mut hard_fails = Vec::new();
    let mut tips = Vec::new();

    if !criteria.skill_course_or_union_award {
        hard_fails.push("No completed skills course or union award".to_string());
        tips.push("Complete a soft-skills course or earn a Youth Union award".to_string());
    }
    if !criteria.integration_activity {
        hard_fails.push("No integration activity".to_string());
        tips.push("Take part in at least one integration or cultural exchange activity".to_string());
    }
    if !criteria.english_b1_or_gpa {
        hard_fails.push("No English B1 certificate or equivalent language GPA".to_string());
        tips.push("Obtain an English B1 certificate or an equivalent language GPA".to_string());
    }
    if !criteria.international_exchange {
        tips.push("Join an international exchange programme for +3 bonus".to_string());
    }
    if !criteria.foreign_language_competition {
        tips.push("Enter a foreign language competition for +3 bonus".to_string());
    }

    CategoryResult {
        is_hard_passed,
        is_almost_passed: false,
        hard_fails,
        soft_bonus: soft_points(
            config,
            &[
                criteria.international_exchange,
                criteria.foreign_language_competition,
            ],
        ),
        tips,
    }
}
