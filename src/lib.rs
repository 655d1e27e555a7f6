pub mod aggregate;
pub mod config;
pub mod error;
pub mod extract;
pub mod grade;
pub mod models;
pub mod report;
pub mod report_out;
pub mod runner;
pub mod source_scraper;
pub mod stats;

pub use error::MasteryError;
pub use models::{AccountScores, Record, ScoreSet};
pub use report::{DisplayMode, ReportOptions};
pub use runner::{Collation, collate};
pub use source_scraper::{HttpPageSource, PageSource};
