mod util;

use uuidfix_core::correct;

#[test]
fn seed_fixture_matches_golden_output() {
    let input = util::read_fixture("seed.sql");
    let expected = util::read_fixture("seed.fixed.sql");

    let fixed = correct(&input);

    assert_eq!(fixed.text, expected);
    assert_eq!(fixed.report.prefix_fixes, 5);
    assert_eq!(fixed.report.suffix_fixes, 5);
    assert_eq!(fixed.report.by_prefix.get("g0"), Some(&4));
    assert_eq!(fixed.report.by_prefix.get("p0"), Some(&4));
    assert_eq!(fixed.report.by_prefix.get("w0"), Some(&2));
    assert_eq!(fixed.report.by_prefix.len(), 3);
}

#[test]
fn golden_output_needs_no_further_changes() {
    let expected = util::read_fixture("seed.fixed.sql");
    let again = correct(&expected);

    assert_eq!(again.text, expected);
    assert!(again.report.is_empty());
}

#[test]
fn report_serializes_with_sorted_prefix_keys() {
    let input = util::read_fixture("seed.sql");
    let report = correct(&input).report;

    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(
        json,
        r#"{"prefix_fixes":5,"suffix_fixes":5,"by_prefix":{"g0":4,"p0":4,"w0":2}}"#
    );
}
