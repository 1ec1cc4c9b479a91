// Text Normalizer
// Turns raw multiline input into the discrete text units sent to the service.

/// Split raw input on line breaks into trimmed, non-empty text units.
/// Relative order of the surviving lines is preserved; duplicates are kept
/// (each gets its own result row).
pub fn normalize(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Live count of text units for the current raw input. Same filtering as
/// `normalize` without allocating the units; recomputed on every input change.
pub fn count_texts(raw: &str) -> usize {
    raw.lines().filter(|line| !line.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_blank_and_whitespace_lines() {
        let units = normalize("  a \n\n b \n   \nc");
        assert_eq!(units, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_handles_crlf() {
        let units = normalize("birinci satır\r\nikinci satır\r\n\r\n");
        assert_eq!(units, vec!["birinci satır", "ikinci satır"]);
    }

    #[test]
    fn test_normalize_keeps_duplicates_in_order() {
        let units = normalize("aynı\nfarklı\naynı");
        assert_eq!(units, vec!["aynı", "farklı", "aynı"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t\n").is_empty());
    }

    #[test]
    fn test_normalize_idempotent_on_joined_output() {
        let units = normalize("  a \nb\n c ");
        let rejoined = units.join("\n");
        assert_eq!(normalize(&rejoined), units);
    }

    #[test]
    fn test_count_matches_normalize() {
        let raw = "x\n \ny\nz\n";
        assert_eq!(count_texts(raw), normalize(raw).len());
        assert_eq!(count_texts(raw), 3);
    }
}
