use crate::stats::SalaryReport;

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Marker printed in place of an average when no vacancy yielded an estimate.
const ABSENT: &str = "-";

/// Renders a report as a bordered ASCII table, one row per language in
/// report order.
pub fn render_table(report: &SalaryReport) -> String {
    let mut rows: Vec<[String; 4]> = Vec::with_capacity(report.len() + 1);
    rows.push(HEADERS.map(String::from));
    for (language, stats) in report {
        rows.push([
            language.clone(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            stats
                .average_salary
                .map_or_else(|| ABSENT.to_string(), |avg| avg.to_string()),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for (index, row) in rows.iter().enumerate() {
        out.push('|');
        for (&width, cell) in widths.iter().zip(row) {
            out.push_str(&format!(" {:<1$} |", cell, width));
        }
        out.push('\n');
        if index == 0 {
            out.push_str(&border);
            out.push('\n');
        }
    }
    out.push_str(&border);
    out
}
