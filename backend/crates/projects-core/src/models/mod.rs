pub mod hours;
pub mod project;
