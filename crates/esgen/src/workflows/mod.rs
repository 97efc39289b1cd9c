pub mod assessment;
pub mod reports;
