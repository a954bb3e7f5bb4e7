//! Career statistic extraction from a player's career-stats page.

use regex::Regex;
use rosteraudit_core::{StatType, TableType};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn selector(cell: &'static OnceLock<Selector>, css: &'static str) -> &'static Selector {
    cell.get_or_init(|| Selector::parse(css).expect("valid selector"))
}

fn table_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "table")
}

fn label_row_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "tr.label")
}

fn header_cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "th")
}

fn row_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "tr")
}

fn cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "td")
}

/// A single career total: at-bats for batters, innings for pitchers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CareerStat {
    pub stat_type: StatType,
    pub value: f64,
}

impl CareerStat {
    pub fn zero(table_type: TableType) -> Self {
        Self {
            stat_type: table_type.stat_type(),
            value: 0.0,
        }
    }

    /// Career at-bats, if this is a batter's statistic
    pub fn career_ab(&self) -> Option<f64> {
        (self.stat_type == StatType::AB).then_some(self.value)
    }

    /// Career innings, if this is a pitcher's statistic
    pub fn career_inns(&self) -> Option<f64> {
        (self.stat_type == StatType::IP).then_some(self.value)
    }
}

/// Extract the career total for `table_type` from a career-stats page.
///
/// Looks through tables in document order for a `tr.label` header with a
/// column labelled `AB` (batters) or `INNs` (pitchers), then for a row whose
/// first cell starts with "Career". A page without such a row reports zero.
pub fn extract_career_stat(html: &str, table_type: TableType) -> CareerStat {
    let document = Html::parse_document(html);
    let target = table_type.career_column();

    for table in document.select(table_selector()) {
        let Some(column) = column_index(table, target) else {
            continue;
        };

        for row in table.select(row_selector()) {
            let cells: Vec<ElementRef<'_>> = row.select(cell_selector()).collect();
            let Some(first) = cells.first() else {
                continue;
            };
            if !text_of(*first).starts_with("Career") {
                continue;
            }
            if let Some(cell) = cells.get(column) {
                return CareerStat {
                    stat_type: table_type.stat_type(),
                    value: parse_stat_value(&text_of(*cell)),
                };
            }
        }
    }

    tracing::debug!(%table_type, "no career row found, treating as zero");
    CareerStat::zero(table_type)
}

fn column_index(table: ElementRef<'_>, label: &str) -> Option<usize> {
    table
        .select(label_row_selector())
        .next()?
        .select(header_cell_selector())
        .position(|th| text_of(th) == label)
}

/// Parse the leading number of a stat cell. Thousands separators are dropped;
/// text without a leading number is zero.
pub fn parse_stat_value(text: &str) -> f64 {
    static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = NUMBER_REGEX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid regex")
    });

    let cleaned = text.trim().replace(',', "");
    regex
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATTER_PAGE: &str = r#"
        <table class="data">
          <tr class="label"><th>Year</th><th>Team</th><th>AB</th><th>H</th></tr>
          <tr><td>2023</td><td>KC</td><td>97</td><td>25</td></tr>
          <tr><td>2024</td><td>KC</td><td>48</td><td>12</td></tr>
          <tr><td>Career Totals</td><td></td><td>145</td><td>37</td></tr>
        </table>
    "#;

    #[test]
    fn test_extract_batter_career_ab() {
        let stat = extract_career_stat(BATTER_PAGE, TableType::Batters);
        assert_eq!(stat.career_ab(), Some(145.0));
        assert_eq!(stat.career_inns(), None);
    }

    #[test]
    fn test_no_career_row_is_zero() {
        let html = r#"
            <table>
              <tr class="label"><th>Year</th><th>AB</th></tr>
              <tr><td>2024</td><td>31</td></tr>
            </table>
        "#;
        let stat = extract_career_stat(html, TableType::Batters);
        assert_eq!(stat, CareerStat::zero(TableType::Batters));
    }

    #[test]
    fn test_pitcher_uses_inns_table() {
        let html = r#"
            <table>
              <tr class="label"><th>Year</th><th>AB</th></tr>
              <tr><td>Career</td><td>12</td></tr>
            </table>
            <table>
              <thead><tr class="label"><th>Year</th><th>G</th><th>INNs</th></tr></thead>
              <tbody><tr><td>Career</td><td>30</td><td>61.2</td></tr></tbody>
            </table>
        "#;
        let stat = extract_career_stat(html, TableType::Pitchers);
        assert_eq!(stat.career_inns(), Some(61.2));

        let batting = extract_career_stat(html, TableType::Batters);
        assert_eq!(batting.career_ab(), Some(12.0));
    }

    #[test]
    fn test_table_without_label_row_is_skipped() {
        let html = r#"
            <table>
              <tr><th>AB</th></tr>
              <tr><td>Career</td><td>999</td></tr>
            </table>
        "#;
        assert_eq!(extract_career_stat(html, TableType::Batters).value, 0.0);
    }

    #[test]
    fn test_header_must_match_exactly() {
        let html = r#"
            <table>
              <tr class="label"><th>Year</th><th>ABs</th></tr>
              <tr><td>Career</td><td>400</td></tr>
            </table>
        "#;
        assert_eq!(extract_career_stat(html, TableType::Batters).value, 0.0);
    }

    #[test]
    fn test_non_numeric_cell_is_zero() {
        let html = r#"
            <table>
              <tr class="label"><th>Year</th><th>AB</th></tr>
              <tr><td>Career</td><td>--</td></tr>
            </table>
        "#;
        assert_eq!(extract_career_stat(html, TableType::Batters).value, 0.0);
    }

    #[test]
    fn test_parse_stat_value() {
        assert_eq!(parse_stat_value("145"), 145.0);
        assert_eq!(parse_stat_value(" 45.2 "), 45.2);
        assert_eq!(parse_stat_value("1,204"), 1204.0);
        assert_eq!(parse_stat_value("12abc"), 12.0);
        assert_eq!(parse_stat_value(".5"), 0.5);
        assert_eq!(parse_stat_value(""), 0.0);
        assert_eq!(parse_stat_value("-"), 0.0);
    }
}
