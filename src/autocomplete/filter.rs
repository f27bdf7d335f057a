use std::sync::Arc;

use super::option::NormalizedOption;

/// Inputs shorter than this (in characters) leave the options untouched;
/// a single letter matches too much to be useful.
pub const MINIMUM_FILTER_LENGTH: usize = 2;

/// A filtering strategy: maps the full option list and the current input
/// text to the options worth suggesting. Must be pure, it runs on every
/// keystroke and every redraw.
pub type FilterFn = Arc<dyn Fn(&[NormalizedOption], &str) -> Vec<NormalizedOption> + Send + Sync>;

pub fn default_filter_fn() -> FilterFn {
    Arc::new(default_filter)
}

fn is_short(input: &str) -> bool {
    input.chars().count() < MINIMUM_FILTER_LENGTH
}

/// Keeps the options whose value contains `input`, ignoring case, in their
/// original order.
pub fn default_filter(options: &[NormalizedOption], input: &str) -> Vec<NormalizedOption> {
    if is_short(input) {
        return options.to_vec();
    }

    let needle = input.to_lowercase();
    options
        .iter()
        .filter(|option| option.value.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Command-line style completion: keeps the options whose value starts
/// with `input` exactly.
pub fn prefix_filter(options: &[NormalizedOption], input: &str) -> Vec<NormalizedOption> {
    if is_short(input) {
        return options.to_vec();
    }

    options
        .iter()
        .filter(|option| option.value.starts_with(input))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn options(values: &[&str]) -> Vec<NormalizedOption> {
        values.iter().map(|v| NormalizedOption::from(*v)).collect()
    }

    fn values(options: &[NormalizedOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_substring_match_ignores_case() {
        let all = options(&["Apple", "Banana", "Mango"]);
        let filtered = default_filter(&all, "an");
        assert_eq!(values(&filtered), vec!["Banana", "Mango"]);
    }

    #[test]
    fn test_upper_case_input_matches() {
        let all = options(&["Apple", "Banana", "Mango"]);
        let filtered = default_filter(&all, "AP");
        assert_eq!(values(&filtered), vec!["Apple"]);
    }

    #[test]
    fn test_short_input_passes_through() {
        let all = options(&["Apple"]);
        assert_eq!(default_filter(&all, "a"), all);
        assert_eq!(default_filter(&all, ""), all);
    }

    #[test]
    fn test_short_input_counts_characters_not_bytes() {
        // "é" is two bytes but a single character
        let all = options(&["Apple", "Crème brûlée"]);
        assert_eq!(default_filter(&all, "é"), all);
    }

    #[test]
    fn test_no_match_is_empty() {
        let all = options(&["Apple", "Banana"]);
        assert!(default_filter(&all, "zz").is_empty());
    }

    #[test]
    fn test_record_matches_on_value_not_display() {
        let all = vec![NormalizedOption {
            value: "banana".into(),
            display: "Yellow fruit".into(),
            attributes: Default::default(),
        }];
        assert_eq!(default_filter(&all, "nan").len(), 1);
        assert!(default_filter(&all, "yellow").is_empty());
    }

    #[test]
    fn test_prefix_filter() {
        let all = options(&["containers", "images", "container", "volumes"]);
        let filtered = prefix_filter(&all, "co");
        assert_eq!(values(&filtered), vec!["containers", "container"]);
        assert!(prefix_filter(&all, "Co").is_empty());
        assert_eq!(prefix_filter(&all, "c"), all);
    }

    fn option_list() -> impl Strategy<Value = Vec<NormalizedOption>> {
        prop::collection::vec("[a-zA-Z ]{0,12}", 1..20)
            .prop_map(|vs| vs.into_iter().map(|v| NormalizedOption::from(v.as_str())).collect())
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(all in option_list(), input in "[a-zA-Z]{0,4}") {
            let once = default_filter(&all, &input);
            let twice = default_filter(&once, &input);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_short_input_is_passthrough(all in option_list(), input in "[a-zA-Z]{0,1}") {
            prop_assert_eq!(default_filter(&all, &input), all);
        }

        #[test]
        fn prop_membership_matches_substring(all in option_list(), input in "[a-zA-Z]{2,3}") {
            let filtered = default_filter(&all, &input);
            let needle = input.to_lowercase();
            for option in &all {
                let contains = option.value.to_lowercase().contains(&needle);
                prop_assert_eq!(contains, filtered.contains(option));
            }
        }

        #[test]
        fn prop_filter_preserves_order(all in option_list(), input in "[a-zA-Z]{2,3}") {
            let filtered = default_filter(&all, &input);
            let expected: Vec<_> = all
                .iter()
                .filter(|o| filtered.contains(o))
                .cloned()
                .collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
