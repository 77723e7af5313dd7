use serde::{Deserialize, Serialize};

use super::domain::StudentClass;

/// Policy thresholds for the current recognition cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessThresholds {
    pub training_points_min: u32,
    /// Ethics counts as a near pass from this many training points.
    pub training_points_near_pass: u32,
    pub gpa_min_university: f64,
    pub gpa_min_college: f64,
    pub gpa_near_pass_margin: f64,
    pub volunteer_days_min: u32,
    pub volunteer_days_near_pass: u32,
    /// Volunteer days that earn the second volunteer soft bonus.
    pub volunteer_days_excellent: u32,
    pub soft_bonus_step: u8,
    pub eligible_base_score: u8,
    pub partial_credit_per_category: u8,
    pub almost_ready_min_passed: usize,
    pub excellence_soft_threshold: u32,
    pub excellence_bonus: u8,
}

impl ReadinessThresholds {
    pub fn gpa_min(&self, class: StudentClass) -> f64 {
        match class {
            StudentClass::University => self.gpa_min_university,
            StudentClass::College => self.gpa_min_college,
        }
    }
}

impl Default for ReadinessThresholds {
    fn default() -> Self {
        Self {
            training_points_min: 90,
            training_points_near_pass: 85,
            gpa_min_university: 3.4,
            gpa_min_college: 3.2,
            gpa_near_pass_margin: 0.2,
            volunteer_days_min: 5,
            volunteer_days_near_pass: 4,
            volunteer_days_excellent: 10,
            soft_bonus_step: 3,
            eligible_base_score: 70,
            partial_credit_per_category: 14,
            almost_ready_min_passed: 3,
            excellence_soft_threshold: 20,
            excellence_bonus: 6,
        }
    }
}
