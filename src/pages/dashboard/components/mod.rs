pub mod employees;
pub mod overview;
pub mod results;

pub use employees::EmployeesSection;
pub use overview::OverviewSection;
pub use results::ResultsSection;
