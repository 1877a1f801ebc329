use crate::Project;

use std::str::FromStr;

use googletest::prelude::*;
use rust_decimal::Decimal;

fn dec(raw: &str) -> Decimal {
    Decimal::from_str(raw).unwrap()
}

#[test]
fn test_project_new() {
    let project = Project::new(
        Some("Website".to_string()),
        Some(dec("10")),
        Some(dec("8.5")),
        Some(3),
        Some("initial notes".to_string()),
    );

    assert_that!(project.project_id, none());
    assert_that!(project.project_name, some(eq("Website")));
    assert_that!(project.estimated_hours.unwrap().to_string(), eq("10.00"));
    assert_that!(project.actual_hours.unwrap().to_string(), eq("8.50"));
    assert_that!(project.difficulty, some(eq(3)));
    assert_that!(project.notes, some(eq("initial notes")));
    assert!(!project.is_persisted());
}

#[test]
fn test_project_new_rounds_hours() {
    let project = Project::new(None, Some(dec("3.456")), Some(dec("0.004")), None, None);

    assert_that!(project.estimated_hours.unwrap().to_string(), eq("3.46"));
    assert_that!(project.actual_hours.unwrap().to_string(), eq("0.00"));
}

#[test]
fn test_project_with_id() {
    let project = Project::new(Some("Test".to_string()), None, None, None, None);

    let saved = project.with_id(42);

    assert_that!(saved.project_id, some(eq(42)));
    assert_that!(saved.project_name, eq(&project.project_name));
    assert!(saved.is_persisted());
    assert!(!project.is_persisted());
}

#[test]
fn test_project_display_all_fields() {
    let project = Project::new(
        Some("Website".to_string()),
        Some(dec("10")),
        Some(dec("8")),
        Some(3),
        Some("initial notes".to_string()),
    )
    .with_id(1);

    assert_that!(
        project.to_string(),
        eq(
            "Project(project_id=1, project_name=Website, estimated_hours=10.00, actual_hours=8.00, difficulty=3, notes=initial notes)"
        )
    );
}

#[test]
fn test_project_display_absent_fields() {
    let project = Project::default();

    assert_that!(
        project.to_string(),
        eq(
            "Project(project_id=none, project_name=none, estimated_hours=none, actual_hours=none, difficulty=none, notes=none)"
        )
    );
}

#[test]
fn test_project_serializes_hours_as_strings() {
    let project = Project::new(Some("Test".to_string()), Some(dec("2")), None, None, None);

    let json = serde_json::to_value(&project).unwrap();

    assert_that!(json["estimated_hours"].as_str(), some(eq("2.00")));
    assert!(json["actual_hours"].is_null());
}
