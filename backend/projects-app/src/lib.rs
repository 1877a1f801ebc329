pub mod add_project;
pub mod console;
pub mod error;
pub mod input_error;
pub mod logger;
pub mod menu;
pub mod menu_operation;
pub mod project_service;
pub mod sqlite_project_service;

#[cfg(test)]
mod tests;

pub use add_project::AddProject;
pub use console::{Console, Prompt};
pub use error::{AppError, Result as AppResult};
pub use input_error::{InputError, Result as InputResult};
pub use menu::{Menu, Selection};
pub use menu_operation::MenuOperation;
pub use project_service::{ProjectService, ServiceError, ServiceResult};
pub use sqlite_project_service::SqliteProjectService;
