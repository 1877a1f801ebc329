use crate::{ProjectService, ServiceResult};

use projects_core::Project;
use projects_db::ProjectRepository;

use async_trait::async_trait;
use log::info;

pub struct SqliteProjectService {
    repository: ProjectRepository,
}

impl SqliteProjectService {
    pub fn new(repository: ProjectRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProjectService for SqliteProjectService {
    async fn add_project(&self, project: Project) -> ServiceResult<Project> {
        let saved = self.repository.create(&project).await?;

        if let Some(project_id) = saved.project_id {
            info!("Project {} saved", project_id);
        }

        Ok(saved)
    }
}
