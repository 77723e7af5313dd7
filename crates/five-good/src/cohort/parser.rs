use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::readiness::CriteriaInput;

#[derive(Debug)]
pub(crate) struct RosterRecord {
    pub(crate) student_id: String,
    pub(crate) student_class: Option<String>,
    pub(crate) criteria: CriteriaInput,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RosterRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        records.push(row.into_record());
    }

    Ok(records)
}

/// One roster line. Blank cells and absent columns read as zero or `false`.
#[derive(Debug, Deserialize)]
struct RosterRow {
    student_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    student_class: Option<String>,

    #[serde(default, deserialize_with = "lenient_count")]
    training_points: u32,
    #[serde(default, deserialize_with = "lenient_flag")]
    no_discipline: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    marxist_member: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    exemplary_youth: bool,

    #[serde(default, deserialize_with = "lenient_decimal")]
    gpa: f64,
    #[serde(default, deserialize_with = "lenient_flag")]
    scientific_research: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    journal_article: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    conference_paper: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    invention: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    academic_team_member: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    academic_competition_award: bool,

    #[serde(default, deserialize_with = "lenient_flag")]
    is_healthy_student: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    sport_award: bool,

    #[serde(default, deserialize_with = "lenient_count")]
    volunteer_days: u32,
    #[serde(default, deserialize_with = "lenient_flag")]
    volunteer_award: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    volunteer_leader: bool,

    #[serde(default, deserialize_with = "lenient_flag")]
    skill_course_or_union_award: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    integration_activity: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    english_b1_or_gpa: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    international_exchange: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    foreign_language_competition: bool,
}

impl RosterRow {
    fn into_record(self) -> RosterRecord {
        RosterRecord {
            student_id: self.student_id,
            student_class: self.student_class,
            criteria: CriteriaInput {
                training_points: self.training_points,
                no_discipline: self.no_discipline,
                marxist_member: self.marxist_member,
                exemplary_youth: self.exemplary_youth,
                gpa: self.gpa,
                scientific_research: self.scientific_research,
                journal_article: self.journal_article,
                conference_paper: self.conference_paper,
                invention: self.invention,
                academic_team_member: self.academic_team_member,
                academic_competition_award: self.academic_competition_award,
                is_healthy_student: self.is_healthy_student,
                sport_award: self.sport_award,
                volunteer_days: self.volunteer_days,
                volunteer_award: self.volunteer_award,
                volunteer_leader: self.volunteer_leader,
                skill_course_or_union_award: self.skill_course_or_union_award,
                integration_activity: self.integration_activity,
                english_b1_or_gpa: self.english_b1_or_gpa,
                international_exchange: self.international_exchange,
                foreign_language_competition: self.foreign_language_competition,
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = empty_string_as_none(deserializer)?;
    match raw {
        None => Ok(false),
        Some(value) => parse_flag(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("'{value}' is not a yes/no value"))
        }),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "x" => Some(true),
        "false" | "no" | "n" | "0" | "-" => Some(false),
        _ => None,
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_string_as_none(deserializer)? {
        None => Ok(0),
        Some(value) => value
            .trim()
            .parse::<u32>()
            .map_err(|_| serde::de::Error::custom(format!("'{value}' is not a whole number"))),
    }
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_string_as_none(deserializer)? {
        None => Ok(0.0),
        Some(value) => value
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("'{value}' is not a decimal"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("x"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn blank_cells_and_missing_columns_default_to_zero() {
        let csv = "student_id,student_class,training_points,gpa,no_discipline\n\
SV001,college,,\"3,5\",\n";

        let records = parse_records(csv.as_bytes()).expect("roster parses");

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.student_id, "SV001");
        assert_eq!(record.student_class.as_deref(), Some("college"));
        assert_eq!(record.criteria.training_points, 0);
        assert_eq!(record.criteria.gpa, 3.5);
        assert!(!record.criteria.no_discipline);
        assert!(!record.criteria.volunteer_award);
    }

    #[test]
    fn rejects_unreadable_flag() {
        let csv = "student_id,no_discipline\nSV002,perhaps\n";

        let err = parse_records(csv.as_bytes()).expect_err("bad flag rejected");

        assert!(err.to_string().contains("perhaps"));
    }
}
