use trends::Trends;

pub const BAR_WIDTH: usize = 40;
pub const FOOTER: &str = "Data sourced from the GitHub Search API.";

/// Draws the series as a horizontal bar chart, longest bar `BAR_WIDTH` wide.
pub fn render(trends: &Trends) -> String {
    let mut lines = vec![trends.title.clone()];
    let max_count = trends.series.iter().map(|point| point.count).max().unwrap_or(0);
    let label_width = trends.series.iter().map(|point| point.label.chars().count()).max().unwrap_or(0);

    if max_count == 0 {
        lines.push("No repositories found.".to_string());
    }
    for point in &trends.series {
        let bar = (point.count as usize * BAR_WIDTH / max_count as usize).max(1);
        lines.push(format!(
            "{:<width$} {} {}",
            point.label,
            "█".repeat(bar),
            point.count,
            width = label_width
        ));
    }
    lines.push(format!("{} repositories. {}", trends.repositories.len(), FOOTER));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use trends::dashboard::title;
    use trends::{Filter, SeriesPoint};

    fn trends(filter: Filter, series: Vec<SeriesPoint>) -> Trends {
        Trends {
            title: title(&filter),
            filter,
            series,
            repositories: Arc::new(vec![]),
        }
    }

    #[test]
    fn bars_scaled_to_top_language() {
        let series = vec![
            SeriesPoint::new("Go".to_string(), 4),
            SeriesPoint::new("Rust".to_string(), 2),
            SeriesPoint::new("C".to_string(), 1),
        ];
        let chart = render(&trends(Filter::default(), series));
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Top 10 Trending Languages (Repository Count)");
        assert_eq!(lines[1], format!("Go   {} 4", "█".repeat(40)));
        assert_eq!(lines[2], format!("Rust {} 2", "█".repeat(20)));
        assert_eq!(lines[3], format!("C    {} 1", "█".repeat(10)));
        assert_eq!(lines[4], "0 repositories. Data sourced from the GitHub Search API.");
    }

    #[test]
    fn empty_series() {
        let chart = render(&trends(Filter::default().with_topic("nothing"), vec![]));
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Top 10 Trending Languages (Repository Count) — FILTERED");
        assert_eq!(lines[1], "No repositories found.");
    }

    #[test]
    fn small_counts_keep_a_bar() {
        let series = vec![
            SeriesPoint::new("Go".to_string(), 100),
            SeriesPoint::new("Nim".to_string(), 1),
        ];
        let chart = render(&trends(Filter::default(), series));

        assert!(chart.lines().any(|line| line == "Nim █ 1"));
    }
}
