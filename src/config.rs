use crate::error::ScrapeError;
use std::env;

/// Languages to report on. Array order is iteration and output order.
pub const LANGUAGES: [&str; 7] = ["Rust", "GO", "Javascript", "Python", "C++", "C#", "Ruby"];

/// HeadHunter area id for Moscow.
pub const HH_AREA_MOSCOW: u32 = 1;
/// Only vacancies published within the last N days.
pub const HH_PERIOD_DAYS: u32 = 30;

/// SuperJob town id for Moscow.
pub const SJ_TOWN_MOSCOW: u32 = 4;
/// SuperJob page size.
pub const SJ_PAGE_SIZE: u32 = 100;

const SJ_TOKEN_VAR: &str = "SJ_TOKEN";

#[derive(Debug)]
pub struct Config {
    pub superjob_token: String,
}

impl Config {
    /// Reads required credentials from the process environment. Call
    /// `dotenv::dotenv().ok()` beforehand so a local `.env` is honored.
    pub fn from_env() -> Result<Self, ScrapeError> {
        let superjob_token =
            env::var(SJ_TOKEN_VAR).map_err(|_| ScrapeError::Configuration(SJ_TOKEN_VAR))?;
        Ok(Config { superjob_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_a_configuration_error() {
        env::remove_var(SJ_TOKEN_VAR);
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ScrapeError::Configuration("SJ_TOKEN")));
    }
}
