use cardform::scheme::{PrefixRange, SchemeRule, SchemeTable, detect_scheme};
use cardform::types::CardScheme;
use proptest::prelude::*;

use crate::common::fixtures::test_cards;

#[test]
fn detects_every_test_card() {
    for (number, scheme) in test_cards() {
        assert_eq!(detect_scheme(number), Some(scheme), "{}", number);
    }
}

#[test]
fn empty_input_is_none_not_error() {
    assert_eq!(detect_scheme(""), None);
}

#[test]
fn scheme_follows_typing() {
    // As the user types, the candidate appears once the prefix is unambiguous
    let typed = "378282246310005";
    let seen: Vec<_> = (0..=typed.len()).map(|n| detect_scheme(&typed[..n])).collect();
    assert_eq!(seen[0], None);
    assert_eq!(seen[1], None);
    assert!(seen[2..].iter().all(|s| *s == Some(CardScheme::Amex)));
}

#[test]
fn custom_table_order_breaks_ties() {
    let shared = || vec![PrefixRange::range(60, 69)];
    let maestro_first = SchemeTable::new(vec![
        SchemeRule::new(CardScheme::Maestro, shared(), vec![16], 3),
        SchemeRule::new(CardScheme::Discover, shared(), vec![16], 3),
    ]);
    let discover_first = SchemeTable::new(vec![
        SchemeRule::new(CardScheme::Discover, shared(), vec![16], 3),
        SchemeRule::new(CardScheme::Maestro, shared(), vec![16], 3),
    ]);
    assert_eq!(maestro_first.detect("6200"), Some(CardScheme::Maestro));
    assert_eq!(discover_first.detect("6200"), Some(CardScheme::Discover));
}

proptest! {
    #[test]
    fn detection_is_total_for_digit_strings(s in "[0-9]{0,19}") {
        let a = detect_scheme(&s);
        let b = detect_scheme(&s);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn detected_scheme_has_a_matching_rule(s in "[0-9]{1,19}") {
        let table = SchemeTable::builtin();
        if let Some(scheme) = table.detect(&s) {
            let rule = table.rule_for(scheme).unwrap();
            prop_assert!(rule.longest_match(&s).is_some());
        }
    }
}
