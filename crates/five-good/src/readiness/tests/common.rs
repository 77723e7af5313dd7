use crate::readiness::{CriteriaInput, ReadinessEngine, ReadinessThresholds};

pub(super) fn engine() -> ReadinessEngine {
    ReadinessEngine::new(ReadinessThresholds::default())
}

/// Meets every hard criterion with no soft achievements.
pub(super) fn baseline_criteria() -> CriteriaInput {
    CriteriaInput {
        training_points: 95,
        no_discipline: true,
        gpa: 3.5,
        is_healthy_student: true,
        volunteer_days: 6,
        volunteer_award: true,
        skill_course_or_union_award: true,
        integration_activity: true,
        english_b1_or_gpa: true,
        ..CriteriaInput::default()
    }
}

/// Baseline plus every soft achievement.
pub(super) fn decorated_criteria() -> CriteriaInput {
    CriteriaInput {
        marxist_member: true,
        exemplary_youth: true,
        scientific_research: true,
        academic_team_member: true,
        volunteer_leader: true,
        volunteer_days: 12,
        international_exchange: true,
        foreign_language_competition: true,
        ..baseline_criteria()
    }
}
