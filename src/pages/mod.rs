pub mod dashboard;
pub mod schedule;
pub mod settings;

pub use dashboard::Dashboard;
pub use schedule::Schedule;
pub use settings::Settings;
