//! "Add a project" menu operation.

use crate::{AppResult, MenuOperation, ProjectService, Prompt};

use projects_core::Project;

use async_trait::async_trait;
use log::debug;

pub struct AddProject;

#[async_trait]
impl MenuOperation for AddProject {
    fn label(&self) -> &str {
        "Add a project"
    }

    /// Prompt for each field in order, then hand the record to the service.
    ///
    /// A conversion failure on any field abandons the operation before the
    /// service is called.
    async fn perform(
        &self,
        console: &mut dyn Prompt,
        service: &dyn ProjectService,
    ) -> AppResult<()> {
        let project_name = console.read_text("Enter the project name")?;
        let estimated_hours = console.read_decimal("Enter the estimated hours")?;
        let actual_hours = console.read_decimal("Enter the actual hours")?;
        let difficulty = console.read_int("Enter the project difficulty (1-5)")?;
        let notes = console.read_text("Enter the project notes")?;

        let project = Project::new(
            project_name,
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
        );
        debug!("Submitting {}", project);

        let db_project = service.add_project(project).await?;

        console.write_line(&format!(
            "You have successfully created project: {db_project}"
        ))?;

        Ok(())
    }
}
