//! Site pages

mod home;
mod analyzer;
mod solutions;
mod support;

pub use home::HomePage;
pub use analyzer::AnalyzerPage;
pub use solutions::SolutionsPage;
pub use support::SupportPage;
