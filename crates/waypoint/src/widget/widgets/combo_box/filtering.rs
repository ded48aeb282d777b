//! Option filtering for the combo box.

/// Maximum number of entries a filtered list ever holds.
pub const MAX_RESULTS: usize = 12;

/// Select the options matching `query`, in source order, capped at
/// [`MAX_RESULTS`].
///
/// The query is trimmed and compared case-insensitively as a substring of
/// each label. A blank query matches every option.
///
/// ```
/// use waypoint::widget::widgets::filter;
///
/// let options = ["Dallas (DFW)", "Austin (AUS)", "Houston (IAH)"].map(String::from);
/// assert_eq!(filter("au", &options), vec!["Austin (AUS)"]);
/// ```
pub fn filter<'a>(query: &str, options: &'a [String]) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();

    options
        .iter()
        .map(String::as_str)
        .filter(|label| needle.is_empty() || label.to_lowercase().contains(&needle))
        .take(MAX_RESULTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Vec<String> {
        options(&[
            "Atlanta (ATL)",
            "Austin (AUS)",
            "Boston (BOS)",
            "Charlotte (CLT)",
            "Chicago (ORD)",
            "Dallas (DFW)",
            "Denver (DEN)",
            "Houston (IAH)",
        ])
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let opts = options(&["Dallas (DFW)", "Austin (AUS)", "Houston (IAH)"]);
        assert_eq!(filter("au", &opts), vec!["Austin (AUS)"]);
        assert_eq!(filter("AU", &opts), vec!["Austin (AUS)"]);
        assert_eq!(filter("iah", &opts), vec!["Houston (IAH)"]);
    }

    #[test]
    fn test_match_anywhere_in_label() {
        let opts = sample();
        assert_eq!(filter("on", &opts), vec!["Boston (BOS)", "Houston (IAH)"]);
        assert_eq!(filter("(d", &opts), vec!["Dallas (DFW)", "Denver (DEN)"]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let opts = sample();
        assert_eq!(filter("  den  ", &opts), vec!["Denver (DEN)"]);
        assert_eq!(filter("   ", &opts).len(), opts.len());
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let opts = sample();
        let result = filter("", &opts);
        let expected: Vec<&str> = opts.iter().map(String::as_str).collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_result_is_capped() {
        let many: Vec<String> = (0..40).map(|i| format!("City {i}")).collect();

        let all = filter("", &many);
        assert_eq!(all.len(), MAX_RESULTS);
        assert_eq!(all.first(), Some(&"City 0"));
        assert_eq!(all.last(), Some(&"City 11"));

        let matched = filter("city 1", &many);
        assert!(matched.len() <= MAX_RESULTS);
        assert_eq!(matched[0], "City 1");
        assert_eq!(matched[1], "City 10");
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter("zz", &sample()).is_empty());
        assert!(filter("anything", &[]).is_empty());
    }

    #[test]
    fn test_duplicates_preserved() {
        let opts = options(&["Austin (AUS)", "Austin (AUS)"]);
        assert_eq!(filter("aus", &opts).len(), 2);
    }

    #[test]
    fn test_every_result_contains_query() {
        let opts = sample();
        for query in ["a", "o", "n (", "CH", "ton", "x"] {
            let needle = query.to_lowercase();
            for label in filter(query, &opts) {
                assert!(label.to_lowercase().contains(&needle), "{label} / {query}");
            }
        }
    }
}
