pub mod journeys;
pub mod reports;
pub mod tester;
pub mod walk;

pub use tester::*;
