//! Branch selection for the materializer stage.

use regex::Regex;

/// Course module branches in `git branch -r` output: optional surrounding
/// whitespace, `origin/`, then `tp` followed by digits.
const TP_BRANCH_PATTERN: &str = r"^\s*origin/(tp\d+)\s*$";

/// Select the branches to package from a raw `git branch -r` listing.
///
/// Matching remote-tracking branches are kept in discovery order with the
/// `origin/` prefix stripped, then `additional` is appended verbatim —
/// unfiltered and without de-duplication, so a name appearing in both lists
/// is checked out and copied twice.
pub fn select(listing: &str, additional: &[String]) -> Vec<String> {
    let pattern = Regex::new(TP_BRANCH_PATTERN).expect("valid branch pattern");

    let mut selected: Vec<String> = listing
        .lines()
        .filter_map(|line| pattern.captures(line))
        .map(|caps| caps[1].to_string())
        .collect();
    selected.extend(additional.iter().cloned());
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_tp_branches_and_appends_additional_in_order() {
        let listing = "  origin/tp1\n  origin/tp2\n  origin/feature-x\n";
        let additional = strings(&["custom1", "custom2"]);

        let selected = select(listing, &additional);

        assert_eq!(selected, ["tp1", "tp2", "custom1", "custom2"]);
    }

    #[test]
    fn excludes_non_matching_branches() {
        let listing = "  origin/HEAD -> origin/master\n  origin/master\n  origin/tp\n  origin/tp1-fix\n  origin/tpx\n  upstream/tp1\n";
        assert!(select(listing, &[]).is_empty());
    }

    #[test]
    fn matches_multi_digit_modules() {
        let listing = "  origin/tp1\n  origin/tp10\n  origin/tp42\n";
        assert_eq!(select(listing, &[]), ["tp1", "tp10", "tp42"]);
    }

    #[test]
    fn additional_branches_are_not_pattern_filtered() {
        let listing = "  origin/tp1\n";
        let additional = strings(&["feature-x"]);
        assert_eq!(select(listing, &additional), ["tp1", "feature-x"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let listing = "  origin/tp1\n";
        let additional = strings(&["tp1"]);
        assert_eq!(select(listing, &additional), ["tp1", "tp1"]);
    }

    #[test]
    fn empty_listing_yields_only_additional() {
        assert_eq!(select("", &strings(&["custom1"])), ["custom1"]);
        assert!(select("", &[]).is_empty());
    }
}
