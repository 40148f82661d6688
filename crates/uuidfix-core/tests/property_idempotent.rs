use proptest::prelude::*;

use uuidfix_core::{PREFIX_MAP, correct};

fn invalid_prefix() -> impl Strategy<Value = (&'static str, &'static str)> {
    proptest::sample::select(PREFIX_MAP.to_vec())
}

proptest! {
    #[test]
    fn correcting_twice_equals_correcting_once(text in "[0-9a-z380eb -]{0,120}") {
        let once = correct(&text).into_text();
        let twice = correct(&once).into_text();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prefix_context_is_preserved(
        (invalid, valid) in invalid_prefix(),
        head in "[ ,'(]{0,4}",
        tail in "-[0-9a-f]{4}",
    ) {
        let input = format!("{head}{invalid}eebc99{tail}");
        let fixed = correct(&input).into_text();
        prop_assert_eq!(fixed, format!("{head}{valid}eebc99{tail}"));
    }

    #[test]
    fn suffix_context_is_preserved(
        (invalid, valid) in invalid_prefix(),
        head in "[0-9a-f]{0,8}-",
        tail in "[1-9]{0,2}'",
    ) {
        let input = format!("{head}380{invalid}{tail}");
        let fixed = correct(&input).into_text();
        prop_assert_eq!(fixed, format!("{head}380{valid}{tail}"));
    }
}
