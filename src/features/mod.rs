pub mod dashboard;
pub mod schedule;
pub mod settings;
