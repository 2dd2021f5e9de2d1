use crate::config::{SJ_PAGE_SIZE, SJ_TOWN_MOSCOW};
use crate::error::ScrapeError;
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

const SJ_VACANCIES_URL: &str = "https://api.superjob.ru/2.0/vacancies";
const SJ_AUTH_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Clone, Deserialize)]
pub struct SjPage {
    pub total: u64,
    pub objects: Vec<SjVacancy>,
}

/// SuperJob reports salary bounds as plain integers and uses 0 for
/// "not specified"; the aggregation treats zero as an absent bound.
#[derive(Debug, Clone, Deserialize)]
pub struct SjVacancy {
    #[serde(default)]
    pub payment_from: Option<u64>,
    #[serde(default)]
    pub payment_to: Option<u64>,
}

pub trait SuperJobSource {
    fn fetch_page(&self, language: &str, page: usize) -> Result<SjPage, ScrapeError>;
}

pub struct SuperJobClient {
    client: Client,
    base_url: String,
    token: String,
}

impl SuperJobClient {
    pub fn new(token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build SuperJob client");

        SuperJobClient {
            client,
            base_url: SJ_VACANCIES_URL.to_string(),
            token,
        }
    }

    fn build_url(&self, language: &str, page: usize) -> String {
        format!(
            "{}?town={}&keyword={}&count={}&page={}",
            self.base_url,
            SJ_TOWN_MOSCOW,
            urlencoding::encode(language),
            SJ_PAGE_SIZE,
            page
        )
    }
}

impl SuperJobSource for SuperJobClient {
    fn fetch_page(&self, language: &str, page: usize) -> Result<SjPage, ScrapeError> {
        let url = self.build_url(language, page);
        debug!("GET {}", url);

        let body = self
            .client
            .get(&url)
            .header(SJ_AUTH_HEADER, &self.token)
            .send()?
            .error_for_status()?
            .text()?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_paginated_search_url() {
        let client = SuperJobClient::new("secret".to_string());
        assert_eq!(
            client.build_url("GO", 3),
            "https://api.superjob.ru/2.0/vacancies?town=4&keyword=GO&count=100&page=3"
        );
    }

    #[test]
    fn decodes_a_page_with_zero_and_missing_bounds() {
        let body = r#"{
            "total": 42,
            "more": true,
            "objects": [
                {"payment_from": 80000, "payment_to": 0, "profession": "Go developer"},
                {"payment_to": 120000}
            ]
        }"#;
        let page: SjPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.total, 42);
        assert_eq!(page.objects[0].payment_from, Some(80000));
        assert_eq!(page.objects[0].payment_to, Some(0));
        assert_eq!(page.objects[1].payment_from, None);
    }

    #[test]
    fn error_body_without_expected_fields_is_malformed_data() {
        let body = r#"{"error": {"code": 401, "message": "bad token"}}"#;
        let err = serde_json::from_str::<SjPage>(body).unwrap_err();
        let err: ScrapeError = err.into();
        assert!(matches!(err, ScrapeError::MalformedData(_)));
    }
}
