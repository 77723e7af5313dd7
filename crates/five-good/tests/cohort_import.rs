use five_good::cohort::{CohortImportError, CohortImporter};
use five_good::profiles::StudentId;
use five_good::readiness::{Category, OverallStatus, ReadinessEngine};

#[test]
fn importer_evaluates_every_roster_row() {
    let data = include_bytes!("fixtures/roster.csv");
    let engine = ReadinessEngine::default();

    let report = CohortImporter::from_reader(&data[..], &engine).expect("roster imports");

    assert_eq!(report.entries.len(), 5);
    assert_eq!(report.status_counts.eligible, 2);
    assert_eq!(report.status_counts.almost_ready, 1);
    assert_eq!(report.status_counts.not_eligible, 2);

    let scores: Vec<u8> = report
        .entries
        .iter()
        .map(|entry| entry.readiness_score)
        .collect();
    assert_eq!(scores, vec![100, 70, 56, 42, 0]);
    assert_eq!(report.average_score, 53.6);

    let physical = report
        .category_pass_counts
        .iter()
        .find(|entry| entry.category == Category::Physical)
        .expect("physical counted");
    assert_eq!(physical.passed, 4);
    assert_eq!(physical.total, 5);
}

#[test]
fn entries_carry_flattened_tips() {
    let data = include_bytes!("fixtures/roster.csv");
    let engine = ReadinessEngine::default();
    let report = CohortImporter::from_reader(&data[..], &engine).expect("roster imports");

    let decorated = &report.entries[0];
    assert!(decorated.hard_fails.is_empty());
    assert!(decorated.tips.is_empty());

    let plain = &report.entries[1];
    assert!(plain.hard_fails.is_empty());
    assert_eq!(
        plain.tips.first().map(String::as_str),
        Some("Complete a Marxism-Leninism study course for +3 bonus")
    );
    assert!(plain
        .tips
        .iter()
        .any(|tip| tip == "Enter a foreign language competition for +3 bonus"));
}

#[test]
fn ranking_puts_eligible_students_first() {
    let data = include_bytes!("fixtures/roster.csv");
    let engine = ReadinessEngine::default();
    let report = CohortImporter::from_reader(&data[..], &engine).expect("roster imports");

    let ranked = report.ranked();

    assert_eq!(ranked[0].student_id, StudentId("SV2024001".to_string()));
    assert_eq!(ranked[2].overall_status, OverallStatus::AlmostReady);
    assert_eq!(ranked[4].student_id, StudentId("SV2024005".to_string()));
}

#[test]
fn unknown_student_class_names_the_row() {
    let csv = "student_id,student_class,gpa\nSV9,kindergarten,3.9\n";
    let engine = ReadinessEngine::default();

    let err = CohortImporter::from_reader(csv.as_bytes(), &engine).expect_err("class rejected");

    match err {
        CohortImportError::StudentClass { student_id, .. } => assert_eq!(student_id, "SV9"),
        other => panic!("expected student class error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let engine = ReadinessEngine::default();

    let err = CohortImporter::from_path("does/not/exist.csv", &engine).expect_err("no file");

    assert!(matches!(err, CohortImportError::Io(_)));
}
