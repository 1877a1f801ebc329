use projects_core::Project;
use projects_db::DbError;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to save project: {source}")]
    Persistence {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Persistence {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Durable store for projects entered through the menu.
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Persist the project and return the stored record, id included.
    async fn add_project(&self, project: Project) -> ServiceResult<Project>;
}
