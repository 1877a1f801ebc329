pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
