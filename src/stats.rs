use crate::error::ScrapeError;
use crate::hh::HhSource;
use crate::salary::estimate;
use crate::superjob::SuperJobSource;
use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    /// Total matches reported by the source (from the last fetched page).
    pub vacancies_found: u64,
    /// Number of estimates accumulated so far in this run. The accumulator
    /// is shared across languages and never reset, so this is a running
    /// total, not an isolated per-language count.
    pub vacancies_processed: usize,
    /// Floor of the mean over the accumulator, `None` while it is empty.
    pub average_salary: Option<u64>,
}

/// Per-language stats in language-list order.
pub type SalaryReport = Vec<(String, LanguageStats)>;

fn average(salaries: &[u64]) -> Option<u64> {
    if salaries.is_empty() {
        None
    } else {
        Some(salaries.iter().sum::<u64>() / salaries.len() as u64)
    }
}

/// Pages through HeadHunter for every language and accumulates salary
/// estimates for RUR-denominated vacancies.
///
/// The paging loop stops once the next index would reach `pages - 1`, so
/// the page the service reports as last is never requested. Combined with
/// the client not sending a page parameter at all, each language
/// effectively contributes the first page of its results. Kept as-is so
/// the reported numbers match the established output.
pub fn collect_hh_stats<S: HhSource>(
    source: &S,
    languages: &[&str],
) -> Result<SalaryReport, ScrapeError> {
    let mut report = SalaryReport::new();
    let mut salaries: Vec<u64> = Vec::new();

    for &language in languages {
        let mut page_index = 0;
        let mut found;

        loop {
            let page = source.fetch_page(language, page_index)?;
            found = page.found;

            for vacancy in &page.items {
                let salary = match &vacancy.salary {
                    Some(salary) if salary.currency.as_deref() == Some("RUR") => salary,
                    _ => continue,
                };
                if let Some(predicted) = estimate(salary.from, salary.to) {
                    salaries.push(predicted);
                }
            }

            page_index += 1;
            if page_index >= page.pages.saturating_sub(1) {
                break;
            }
        }

        info!(
            "HeadHunter {}: {} found, {} salaries accumulated",
            language,
            found,
            salaries.len()
        );
        report.push((
            language.to_string(),
            LanguageStats {
                vacancies_found: found,
                vacancies_processed: salaries.len(),
                average_salary: average(&salaries),
            },
        ));
    }

    Ok(report)
}

fn non_zero(bound: Option<u64>) -> Option<u64> {
    bound.filter(|&value| value != 0)
}

/// Pages through SuperJob for every language, stopping at the first empty
/// page. Same shared accumulator shape as the HeadHunter aggregation; no
/// currency filter since SuperJob quotes roubles only.
pub fn collect_sj_stats<S: SuperJobSource>(
    source: &S,
    languages: &[&str],
) -> Result<SalaryReport, ScrapeError> {
    let mut report = SalaryReport::new();
    let mut salaries: Vec<u64> = Vec::new();

    for &language in languages {
        let mut page_index = 0;
        let mut total;

        loop {
            let page = source.fetch_page(language, page_index)?;
            total = page.total;

            if page.objects.is_empty() {
                break;
            }

            for vacancy in &page.objects {
                let predicted = estimate(
                    non_zero(vacancy.payment_from),
                    non_zero(vacancy.payment_to),
                );
                if let Some(predicted) = predicted {
                    salaries.push(predicted);
                }
            }

            page_index += 1;
        }

        info!(
            "SuperJob {}: {} found, {} salaries accumulated",
            language,
            total,
            salaries.len()
        );
        report.push((
            language.to_string(),
            LanguageStats {
                vacancies_found: total,
                vacancies_processed: salaries.len(),
                average_salary: average(&salaries),
            },
        ));
    }

    Ok(report)
}
