use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Raw criteria a student enters across the five categories.
///
/// Every field is optional on the wire: missing values and explicit `null`
/// read as zero or `false` so in-progress forms can be evaluated. Form
/// clients that post camelCase keys are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaInput {
    #[serde(alias = "trainingPoints", deserialize_with = "null_as_default")]
    pub training_points: u32,
    #[serde(alias = "noDiscipline", deserialize_with = "null_as_default")]
    pub no_discipline: bool,
    #[serde(alias = "marxistMember", deserialize_with = "null_as_default")]
    pub marxist_member: bool,
    #[serde(alias = "exemplaryYouth", deserialize_with = "null_as_default")]
    pub exemplary_youth: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub gpa: f64,
    #[serde(alias = "scientificResearch", deserialize_with = "null_as_default")]
    pub scientific_research: bool,
    #[serde(alias = "journalArticle", deserialize_with = "null_as_default")]
    pub journal_article: bool,
    #[serde(alias = "conferencePaper", deserialize_with = "null_as_default")]
    pub conference_paper: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub invention: bool,
    #[serde(alias = "academicTeamMember", deserialize_with = "null_as_default")]
    pub academic_team_member: bool,
    #[serde(alias = "academicCompetitionAward", deserialize_with = "null_as_default")]
    pub academic_competition_award: bool,

    #[serde(alias = "isHealthyStudent", deserialize_with = "null_as_default")]
    pub is_healthy_student: bool,
    #[serde(alias = "sportAward", deserialize_with = "null_as_default")]
    pub sport_award: bool,

    #[serde(alias = "volunteerDays", deserialize_with = "null_as_default")]
    pub volunteer_days: u32,
    #[serde(alias = "volunteerAward", deserialize_with = "null_as_default")]
    pub volunteer_award: bool,
    #[serde(alias = "volunteerLeader", deserialize_with = "null_as_default")]
    pub volunteer_leader: bool,

    #[serde(alias = "skillCourseOrUnionAward", deserialize_with = "null_as_default")]
    pub skill_course_or_union_award: bool,
    #[serde(alias = "integrationActivity", deserialize_with = "null_as_default")]
    pub integration_activity: bool,
    #[serde(alias = "englishB1OrGpa", deserialize_with = "null_as_default")]
    pub english_b1_or_gpa: bool,
    #[serde(alias = "internationalExchange", deserialize_with = "null_as_default")]
    pub international_exchange: bool,
    #[serde(alias = "foreignLanguageCompetition", deserialize_with = "null_as_default")]
    pub foreign_language_competition: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Institution tier, which selects the minimum GPA.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentClass {
    #[default]
    University,
    College,
}

impl StudentClass {
    pub const fn label(self) -> &'static str {
        match self {
            StudentClass::University => "university",
            StudentClass::College => "college",
        }
    }
}

impl fmt::Display for StudentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown student class '{0}', expected university or college")]
pub struct UnknownStudentClass(pub String);

impl FromStr for StudentClass {
    type Err = UnknownStudentClass;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "university" | "dai_hoc" | "dh" => Ok(StudentClass::University),
            "college" | "cao_dang" | "cd" => Ok(StudentClass::College),
            other => Err(UnknownStudentClass(other.to_string())),
        }
    }
}

/// The five fixed evaluation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ethics,
    Study,
    Physical,
    Volunteer,
    Integration,
}

impl Category {
    pub const fn ordered() -> [Category; 5] {
        [
            Category::Ethics,
            Category::Study,
            Category::Physical,
            Category::Volunteer,
            Category::Integration,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Ethics => "Good ethics",
            Category::Study => "Good study",
            Category::Physical => "Good physical health",
            Category::Volunteer => "Good volunteering",
            Category::Integration => "Good integration",
        }
    }
}

/// Verdict for a single category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub is_hard_passed: bool,
    pub is_almost_passed: bool,
    pub hard_fails: Vec<String>,
    /// Percentage points earned from soft criteria (0, 3 or 6).
    pub soft_bonus: u8,
    pub tips: Vec<String>,
}

/// Overall standing, ordered from least to most strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    NotEligible,
    AlmostReady,
    Eligible,
}

impl OverallStatus {
    pub const fn label(self) -> &'static str {
        match self {
            OverallStatus::NotEligible => "not_eligible",
            OverallStatus::AlmostReady => "almost_ready",
            OverallStatus::Eligible => "eligible",
        }
    }
}

/// Derived evaluation output. Recomputed on every input change, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub overall_status: OverallStatus,
    pub readiness_score: u8,
    pub category_results: BTreeMap<Category, CategoryResult>,
}

impl EvaluationResult {
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.category_results.get(&category)
    }

    pub fn hard_passed_count(&self) -> usize {
        self.category_results
            .values()
            .filter(|result| result.is_hard_passed)
            .count()
    }

    pub fn total_soft_bonus(&self) -> u32 {
        self.category_results
            .values()
            .map(|result| u32::from(result.soft_bonus))
            .sum()
    }

    /// All fail reasons in category order.
    pub fn hard_fails(&self) -> Vec<&str> {
        self.category_results
            .values()
            .flat_map(|result| result.hard_fails.iter().map(String::as_str))
            .collect()
    }

    /// All suggestions in category order, unlike the tiered `summary().next_steps`.
    pub fn tips(&self) -> Vec<&str> {
        self.category_results
            .values()
            .flat_map(|result| result.tips.iter().map(String::as_str))
            .collect()
    }
}
