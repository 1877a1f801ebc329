pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::hours::{HOURS_SCALE, parse_hours, to_hours_scale, try_hours_scale};
pub use models::project::Project;

pub use error_location::ErrorLocation;
