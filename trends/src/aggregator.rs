use crate::api::{RepositoryRecord, SeriesPoint};
use std::collections::HashMap;

pub const TOP_LANGUAGES: usize = 10;

/// Counts repositories per primary language and returns the `TOP_LANGUAGES` most frequent.
///
/// Repositories without a language are skipped. Language names are compared exactly.
/// Equal counts are ordered by label so the output does not depend on input order.
pub fn aggregate(records: &[RepositoryRecord]) -> Vec<SeriesPoint> {
    let mut languages: HashMap<&str, u32> = HashMap::new();
    for language in records.iter().filter_map(|record| record.language.as_deref()) {
        *languages.entry(language).or_insert(0) += 1;
    }

    let mut series: Vec<SeriesPoint> = languages
        .into_iter()
        .map(|(label, count)| SeriesPoint::new(label.to_string(), count))
        .collect();
    series.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    series.truncate(TOP_LANGUAGES);
    series
}
