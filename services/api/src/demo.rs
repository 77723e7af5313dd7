use crate::infra::{configured_engine, parse_student_class};
use clap::Args;
use five_good::cohort::{CohortImporter, CohortReport};
use five_good::error::AppError;
use five_good::profiles::{CriteriaUpdate, InMemoryProfileRepository, ReadinessService, StudentId};
use five_good::readiness::{CriteriaInput, EvaluationResult, StudentClass};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding the student's criteria (missing fields count as zero/false)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Student class: university or college
    #[arg(long, value_parser = parse_student_class, default_value = "university")]
    pub(crate) class: StudentClass,
    /// Print the raw evaluation as JSON instead of a readable report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CohortArgs {
    /// Roster CSV with one student per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print the cohort report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { input, class, json } = args;

    let raw = std::fs::read_to_string(input)?;
    let criteria: CriteriaInput = serde_json::from_str(&raw)?;
    let engine = configured_engine()?;
    let result = engine.evaluate(&criteria, class);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_evaluation(&result, class);
    }

    Ok(())
}

pub(crate) fn run_cohort(args: CohortArgs) -> Result<(), AppError> {
    let CohortArgs { csv, json } = args;

    let engine = configured_engine()?;
    let report = CohortImporter::from_path(csv, &engine)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_cohort(&report);
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let repository = Arc::new(InMemoryProfileRepository::default());
    let service = ReadinessService::new(repository, configured_engine()?);

    println!("Student 5 Good readiness demo");
    for (id, class, criteria) in demo_students() {
        let student_id = StudentId(id.to_string());
        service.save_criteria(
            student_id.clone(),
            CriteriaUpdate {
                student_class: class,
                criteria,
            },
        )?;
        let readiness = service.evaluate_student(&student_id)?;
        println!("\nStudent {}", student_id.as_str());
        render_evaluation(&readiness.evaluation, readiness.student_class);
    }

    let report = service.cohort_report()?;
    println!();
    render_cohort(&report);
    Ok(())
}

fn demo_students() -> Vec<(&'static str, StudentClass, CriteriaInput)> {
    let eligible = CriteriaInput {
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
    };
    let decorated = CriteriaInput {
        marxist_member: true,
        exemplary_youth: true,
        volunteer_leader: true,
        volunteer_days: 10,
        ..eligible.clone()
    };
    let almost = CriteriaInput {
        gpa: 3.1,
        ..eligible.clone()
    };

    vec![
        ("SV-DEMO-01", StudentClass::University, eligible),
        ("SV-DEMO-02", StudentClass::University, decorated),
        ("SV-DEMO-03", StudentClass::College, almost),
        ("SV-DEMO-04", StudentClass::University, CriteriaInput::default()),
    ]
}

fn render_evaluation(result: &EvaluationResult, class: StudentClass) {
    let summary = result.summary();
    println!(
        "Status: {} | readiness {}% | {}/5 categories passed ({} student)",
        summary.status_label, summary.readiness_score, summary.hard_passed, class
    );

    for row in &summary.categories {
        let marker = if row.passed {
            "pass"
        } else if row.almost_passed {
            "near"
        } else {
            "fail"
        };
        println!("- [{}] {} (+{} bonus)", marker, row.label, row.soft_bonus);
        for reason in &row.reasons {
            println!("    reason: {reason}");
        }
    }

    if summary.next_steps.is_empty() {
        println!("Next steps: none");
    } else {
        println!("Next steps");
        for step in &summary.next_steps {
            println!("  - {step}");
        }
    }
}

fn render_cohort(report: &CohortReport) {
    println!("Cohort readiness ({} students)", report.entries.len());
    println!(
        "- eligible {} | almost ready {} | not eligible {} | average score {:.1}",
        report.status_counts.eligible,
        report.status_counts.almost_ready,
        report.status_counts.not_eligible,
        report.average_score
    );

    println!("\nCategory pass rates");
    for entry in &report.category_pass_counts {
        println!(
            "- {}: {}/{} passed, {} near",
            entry.label, entry.passed, entry.total, entry.almost_passed
        );
    }

    println!("\nRanking");
    for entry in report.ranked() {
        println!(
            "- {} ({}) {} {}%",
            entry.student_id.as_str(),
            entry.student_class,
            entry.overall_status.label(),
            entry.readiness_score
        );
    }
}
