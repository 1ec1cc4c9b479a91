// Result Interpreter
// Display aggregates derived from the current result set. These are pure
// reads recomputed on every call; nothing here caches or mutates results.

use crate::models::{
    ClassificationResult, ClassificationSummary, FilterResultItem, FilterSummary, ResultSet,
    ResultSummary,
};

/// Aggregate for classification results. With a designated positive label
/// (the KVKK check), counts the texts assigned to it; open classification
/// has no derived aggregate beyond the verbatim assignments.
pub fn classification_summary(
    results: &[ClassificationResult],
    positive_label: Option<&str>,
) -> ClassificationSummary {
    let positive_count = positive_label
        .map(|label| results.iter().filter(|r| r.category == label).count() as i32);
    ClassificationSummary {
        total: results.len() as i32,
        positive_label: positive_label.map(str::to_string),
        positive_count,
    }
}

/// Flagged/clean counts. `is_flagged` is authoritative from the service;
/// it is never recomputed from the per-filter scores here.
pub fn filter_summary(results: &[FilterResultItem]) -> FilterSummary {
    let total = results.len() as i32;
    let flagged_count = results.iter().filter(|r| r.is_flagged).count() as i32;
    FilterSummary {
        total,
        flagged_count,
        clean_count: total - flagged_count,
    }
}

pub fn summarize(set: &ResultSet, positive_label: Option<&str>) -> ResultSummary {
    match set {
        ResultSet::CategoryAssignment { results } => {
            ResultSummary::Classification(classification_summary(results, positive_label))
        }
        ResultSet::FilterEvaluation { results } => {
            ResultSummary::Filtering(filter_summary(results))
        }
    }
}

/// Fixed 4-decimal rendering of a similarity/match score. Display only;
/// the stored numeric value is untouched.
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilterMatch;

    fn classification_fixture() -> Vec<ClassificationResult> {
        vec![
            ClassificationResult {
                text: "Ahmet Yılmaz'ın TC kimlik numarası 12345678901'dir.".to_string(),
                category: "Kişisel Veri İçerir".to_string(),
                similarity_score: 0.81,
            },
            ClassificationResult {
                text: "Bugün hava çok güzel, parkta yürüyüş yaptık.".to_string(),
                category: "Kişisel Veri İçermez".to_string(),
                similarity_score: 0.77,
            },
            ClassificationResult {
                text: "Müşteri telefon numarası güncellendi.".to_string(),
                category: "Kişisel Veri İçerir".to_string(),
                similarity_score: 0.69,
            },
        ]
    }

    fn filter_fixture() -> Vec<FilterResultItem> {
        let item = |text: &str, flags: &[bool]| FilterResultItem {
            text: text.to_string(),
            is_flagged: flags.iter().any(|m| *m),
            matches: flags
                .iter()
                .enumerate()
                .map(|(i, matched)| FilterMatch {
                    filter_name: format!("filtre-{}", i),
                    score: 0.4 + i as f64 * 0.1,
                    matched: *matched,
                })
                .collect(),
        };
        vec![
            item("a", &[true, false]),
            item("b", &[false, false]),
            item("c", &[false, true]),
        ]
    }

    #[test]
    fn test_positive_count_for_designated_label() {
        let summary =
            classification_summary(&classification_fixture(), Some("Kişisel Veri İçerir"));
        assert_eq!(summary.total, 3);
        assert_eq!(summary.positive_count, Some(2));
    }

    #[test]
    fn test_open_classification_has_no_positive_count() {
        let summary = classification_summary(&classification_fixture(), None);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.positive_count, None);
        assert_eq!(summary.positive_label, None);
    }

    #[test]
    fn test_flagged_plus_clean_equals_total() {
        let summary = filter_summary(&filter_fixture());
        assert_eq!(summary.flagged_count + summary.clean_count, summary.total);
        assert_eq!(summary.flagged_count, 2);
        assert_eq!(summary.clean_count, 1);
    }

    #[test]
    fn test_is_flagged_matches_any_filter_match() {
        for item in filter_fixture() {
            assert_eq!(item.is_flagged, item.matches.iter().any(|m| m.matched));
        }
    }

    #[test]
    fn test_summary_is_recomputed_from_fresh_results() {
        let mut results = filter_fixture();
        assert_eq!(filter_summary(&results).flagged_count, 2);
        results.pop();
        assert_eq!(filter_summary(&results).flagged_count, 1);
    }

    #[test]
    fn test_format_score_four_decimals() {
        assert_eq!(format_score(0.5), "0.5000");
        assert_eq!(format_score(1.0), "1.0000");
        assert_eq!(format_score(0.123456), "0.1235");
    }
}
