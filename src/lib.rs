pub mod config;
pub mod error;
pub mod hh;
pub mod logger;
pub mod salary;
pub mod stats;
pub mod superjob;
pub mod table;

// Exporting types for convenience
pub use config::{Config, LANGUAGES};
pub use error::ScrapeError;
pub use hh::{HhClient, HhSource};
pub use salary::estimate;
pub use stats::{collect_hh_stats, collect_sj_stats, LanguageStats, SalaryReport};
pub use superjob::{SuperJobClient, SuperJobSource};
pub use table::render_table;
