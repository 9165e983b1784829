use crate::api::Filter;
use chrono::{Duration, NaiveDate};

/// Date `window_days` before `today`.
pub fn created_after(today: NaiveDate, window_days: i64) -> NaiveDate {
    today - Duration::days(window_days)
}

/// Builds the search query: creation date clause first, then location, then topic.
pub fn search_query(filter: &Filter, created_after: NaiveDate) -> String {
    let mut clauses = vec![format!("created:>{}", created_after.format("%Y-%m-%d"))];
    if let Some(location) = filter.location() {
        clauses.push(format!("location:{}", location));
    }
    if let Some(topic) = filter.topic() {
        clauses.push(format!("topic:{}", topic));
    }
    clauses.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_crosses_month_and_year() {
        assert_eq!(created_after(date(2024, 1, 15), 30), date(2023, 12, 16));
        assert_eq!(created_after(date(2024, 3, 1), 30), date(2024, 1, 31));
    }

    #[test]
    fn no_filter_only_date_clause() {
        let query = search_query(&Filter::default(), date(2024, 5, 1));
        assert_eq!(query, "created:>2024-05-01");
    }

    #[test]
    fn location_only() {
        let filter = Filter::default().with_location("Poland");
        assert_eq!(search_query(&filter, date(2024, 5, 1)), "created:>2024-05-01 location:Poland");
    }

    #[test]
    fn topic_only() {
        let filter = Filter::default().with_topic("wasm");
        assert_eq!(search_query(&filter, date(2024, 5, 1)), "created:>2024-05-01 topic:wasm");
    }

    #[test]
    fn all_clauses_in_order() {
        let filter = Filter::default().with_topic("cli").with_location("Germany");
        assert_eq!(
            search_query(&filter, date(2024, 5, 1)),
            "created:>2024-05-01 location:Germany topic:cli"
        );
    }

    #[test]
    fn blank_criteria_add_no_clauses() {
        let filter = Filter {
            location: Some(String::new()),
            topic: Some("  ".to_string()),
        };
        assert_eq!(search_query(&filter, date(2024, 5, 1)), "created:>2024-05-01");
    }
}
