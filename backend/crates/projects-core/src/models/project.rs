//! Project entity - the single record created through the menu.

use crate::to_hours_scale;

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A project as entered by the user.
///
/// Every field except `project_id` may be absent (`None`), which is how a
/// blank answer to a prompt is carried. Hour values are kept at scale 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Project {
    /// Store-assigned identifier, `None` until persisted
    pub project_id: Option<i64>,
    pub project_name: Option<String>,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    /// Intended range 1-5, not enforced
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

impl Project {
    /// Create an unsaved project, normalizing both hour fields to scale 2.
    pub fn new(
        project_name: Option<String>,
        estimated_hours: Option<Decimal>,
        actual_hours: Option<Decimal>,
        difficulty: Option<i32>,
        notes: Option<String>,
    ) -> Self {
        Self {
            project_id: None,
            project_name,
            estimated_hours: estimated_hours.map(to_hours_scale),
            actual_hours: actual_hours.map(to_hours_scale),
            difficulty,
            notes,
        }
    }

    /// Check if the project has been assigned an id by the store
    pub fn is_persisted(&self) -> bool {
        self.project_id.is_some()
    }

    /// Copy of this project carrying the given store id
    pub fn with_id(&self, project_id: i64) -> Self {
        Self {
            project_id: Some(project_id),
            ..self.clone()
        }
    }
}

fn or_none<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| String::from("none"), ToString::to_string)
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Project(project_id={}, project_name={}, estimated_hours={}, actual_hours={}, difficulty={}, notes={})",
            or_none(&self.project_id),
            or_none(&self.project_name),
            or_none(&self.estimated_hours),
            or_none(&self.actual_hours),
            or_none(&self.difficulty),
            or_none(&self.notes),
        )
    }
}
