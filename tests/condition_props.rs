use proptest::prelude::*;

use renfls::MatchCondition;
use renfls::condition::{entry_extension, matches};

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{0,12}(\\.[a-zA-Z0-9]{1,4})?"
}

fn condition_strategy() -> impl Strategy<Value = MatchCondition> {
    (
        prop::collection::vec("\\.?[a-zA-Z0-9]{0,4}", 0..4),
        prop::option::of("[a-z]{1,3}\\*?"),
    )
        .prop_map(|(exts, pattern)| MatchCondition {
            extensions: exts,
            pattern,
            ignore: false,
        })
}

proptest! {
    #[test]
    fn ignore_is_exact_negation(name in name_strategy(), cond in condition_strategy()) {
        let plain = matches(&name, &cond).unwrap();
        let inverted = matches(&name, &cond.clone().ignoring(true)).unwrap();
        prop_assert_eq!(plain, !inverted);
    }

    #[test]
    fn empty_condition_matches_all(name in name_strategy()) {
        prop_assert!(matches(&name, &MatchCondition::all()).unwrap());
    }

    #[test]
    fn listed_extension_always_matches(stem in "[a-z]{1,8}", ext in "[a-zA-Z]{1,4}") {
        let name = format!("{stem}.{ext}");
        let cond = MatchCondition::all().with_extensions([ext.to_ascii_uppercase()]);
        prop_assert!(matches(&name, &cond).unwrap());
        prop_assert_eq!(entry_extension(&name), ext.as_str());
    }

    #[test]
    fn pattern_clause_widens_extension_clause(name in name_strategy(), ext in "[a-z]{1,3}") {
        let by_ext = MatchCondition::all().with_extensions([ext.clone()]);
        let both = by_ext.clone().with_pattern("^x");
        if matches(&name, &by_ext).unwrap() {
            prop_assert!(matches(&name, &both).unwrap());
        }
    }
}
