//! End-to-end checks of the public validation API

use vergate_semver::{validate, RuleSet, ValidationError, Verdict, Version};

const FMT_RULES: [&str; 3] = ["12.1.0", "12.3.0...12.3.6", "!12.3.4"];

fn kind_of(candidate: &str, rules: &[&str]) -> &'static str {
    match validate("component", "package", candidate, rules) {
        Ok(_) => "approved",
        Err(err) => err.kind(),
    }
}

#[test]
fn test_exact_rule_accepts_only_that_version() {
    let versions = [(0, 0, 0), (1, 2, 3), (1, 2, 4), (1, 3, 3), (2, 2, 3), (12, 10, 0)];

    for &(a, b, c) in &versions {
        let rule = format!("{}.{}.{}", a, b, c);
        for &(d, e, f) in &versions {
            let candidate = format!("{}.{}.{}", d, e, f);
            let expected = (a, b, c) == (d, e, f);
            assert_eq!(
                validate("c", "p", &candidate, &[rule.as_str()]).is_ok(),
                expected,
                "rule {} candidate {}",
                rule,
                candidate
            );
        }
    }
}

#[test]
fn test_range_boundaries() {
    let rules = ["12.3.0...12.3.6"];
    assert_eq!(kind_of("12.3.0", &rules), "approved");
    assert_eq!(kind_of("12.3.2", &rules), "approved");
    assert_eq!(kind_of("12.3.6", &rules), "approved");
    assert_eq!(kind_of("12.2.9", &rules), "version_mismatch");
    assert_eq!(kind_of("12.3.7", &rules), "version_mismatch");
}

#[test]
fn test_exclusion_wins_inside_range() {
    let err = validate("spi", "fmt", "12.3.4", &FMT_RULES).unwrap_err();
    match err {
        ValidationError::ExcludedVersion { package, version, rules } => {
            assert_eq!(package, "fmt");
            assert_eq!(version, "12.3.4");
            for rule in FMT_RULES {
                assert!(rules.contains(rule), "{} missing from {}", rule, rules);
            }
        }
        other => panic!("expected exclusion, got {:?}", other),
    }

    assert_eq!(kind_of("12.3.3", &FMT_RULES), "approved");
    assert_eq!(kind_of("12.3.5", &FMT_RULES), "approved");
}

#[test]
fn test_combined_exact_rules() {
    let rules = ["12.1.0", "12.2.1"];
    assert_eq!(kind_of("12.1.0", &rules), "approved");
    assert_eq!(kind_of("12.2.0", &rules), "version_mismatch");
}

#[test]
fn test_numeric_not_lexicographic() {
    assert_eq!(kind_of("12.10.0", &["12.9.0...12.9.9"]), "version_mismatch");
    assert_eq!(kind_of("12.10.0", &["12.9.0...12.11.0"]), "approved");
    assert!(Version::parse("12.10.0").unwrap() > Version::parse("12.9.9").unwrap());
}

#[test]
fn test_missing_and_malformed_never_pass() {
    assert_eq!(kind_of("", &FMT_RULES), "missing_version");
    assert_eq!(kind_of("not-a-version", &FMT_RULES), "missing_version");

    for rule in ["abc", "1.2.3.4", "!1.0...2.0", "1.0...", "2.0...1.0"] {
        assert_eq!(kind_of("1.0.0", &["1.0.0", rule]), "malformed_rule", "rule {}", rule);
    }
}

#[test]
fn test_exclusion_only_rule_set() {
    assert_eq!(kind_of("1.0.0", &["!2.0.0"]), "version_mismatch");
    assert_eq!(kind_of("2.0.0", &["!2.0.0"]), "excluded_version");
    assert_eq!(kind_of("1.0.0", &[]), "version_mismatch");
}

#[test]
fn test_repeated_calls_are_identical() {
    for candidate in ["12.1.0", "12.3.4", "12.2.0", "", "x"] {
        let first = validate("spi", "fmt", candidate, &FMT_RULES);
        let second = validate("spi", "fmt", candidate, &FMT_RULES);
        assert_eq!(first, second);
        if let (Err(a), Err(b)) = (&first, &second) {
            assert_eq!(a.to_string(), b.to_string());
        }
    }
}

#[test]
fn test_rule_set_reuse() {
    let set = RuleSet::parse(&FMT_RULES).unwrap();
    let verdicts: Vec<Verdict> = ["12.1.0", "12.3.4", "12.3.6", "12.4.0"]
        .iter()
        .map(|v| set.evaluate(&Version::parse(v).unwrap()))
        .collect();
    assert_eq!(
        verdicts,
        vec![Verdict::Approved, Verdict::Excluded, Verdict::Approved, Verdict::Mismatch]
    );
}
