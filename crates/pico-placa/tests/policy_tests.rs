//! Tests for the built-in Quito table and JSON rule tables.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use pico_placa::policy::{self, RuleTable};
use pico_placa::{EmptyPolicy, PicoPlacaError};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in table
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn quito_default_covers_weekdays_only() {
    let rules = policy::quito_default();
    assert_eq!(rules.len(), 10);

    for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
        assert_eq!(rules.rules_for(day).count(), 2, "{:?}", day);
    }
    assert_eq!(rules.rules_for(Weekday::Sat).count(), 0);
    assert_eq!(rules.rules_for(Weekday::Sun).count(), 0);
}

#[test]
fn quito_default_windows_and_digits() {
    let rules = policy::quito_default();
    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();

    for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
        let windows: Vec<(NaiveTime, NaiveTime)> = rules
            .rules_for(day)
            .map(|rule| (rule.window().start(), rule.window().end()))
            .collect();
        assert_eq!(windows, vec![(t(6, 0), t(9, 30)), (t(16, 0), t(20, 0))], "{:?}", day);

        for rule in rules.rules_for(day) {
            assert_eq!(rule.days(), &[day]);
            assert_eq!(rule.digits().len(), 2);
        }
    }
    let friday: Vec<&[u8]> = rules.rules_for(Weekday::Fri).map(|r| r.digits()).collect();
    assert_eq!(friday, vec![&[0u8, 9][..], &[0u8, 9][..]]);
}

#[test]
fn quito_default_digit_pairs() {
    let rules = policy::quito_default();
    // 2023-10-02 .. 2023-10-06 is Monday .. Friday.
    let expected = [(2, [1, 2]), (3, [3, 4]), (4, [5, 6]), (5, [7, 8]), (6, [9, 0])];

    for (day, digits) in expected {
        for digit in 0..=9u8 {
            let restricted = rules
                .is_vehicle_restricted(at(2023, 10, day, 7, 0), digit, EmptyPolicy::Raise)
                .unwrap();
            assert_eq!(
                restricted,
                digits.contains(&digit),
                "2023-10-{:02} digit {}",
                day,
                digit
            );
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON rule tables
// ─────────────────────────────────────────────────────────────────────────────

const WEEKEND_TABLE: &str = r#"{
  "rules": [
    {
      "days": ["Sat", "sunday"],
      "digits": [4],
      "windows": [
        { "start": "10:00", "end": "12:00" },
        { "start": "18:00", "end": "19:00" }
      ]
    }
  ]
}"#;

#[test]
fn table_expands_one_rule_per_window() {
    let rules = RuleTable::from_json(WEEKEND_TABLE)
        .unwrap()
        .into_rule_set()
        .unwrap();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules.rules_for(Weekday::Sat).count(), 2);
    assert_eq!(rules.rules_for(Weekday::Sun).count(), 2);
    assert_eq!(rules.rules_for(Weekday::Mon).count(), 0);
}

#[test]
fn table_rules_evaluate() {
    let rules = RuleTable::from_json(WEEKEND_TABLE)
        .unwrap()
        .into_rule_set()
        .unwrap();

    // 2023-10-07 Saturday, 2023-10-08 Sunday.
    let check = |when, digit| {
        rules
            .is_vehicle_restricted(when, digit, EmptyPolicy::Raise)
            .unwrap()
    };
    assert!(check(at(2023, 10, 7, 10, 0), 4));
    assert!(check(at(2023, 10, 8, 18, 30), 4));
    assert!(!check(at(2023, 10, 8, 12, 0), 4));
    assert!(!check(at(2023, 10, 7, 11, 0), 5));
}

#[test]
fn empty_table_builds_empty_set() {
    let rules = RuleTable::from_json(r#"{"rules": []}"#)
        .unwrap()
        .into_rule_set()
        .unwrap();
    assert!(!rules.has_rules());
}

#[test]
fn malformed_json_is_table_error() {
    let err = RuleTable::from_json("{ not json").unwrap_err();
    assert!(matches!(err, PicoPlacaError::RuleTable(_)));

    let err = RuleTable::from_json(r#"{"rules": [{"days": ["Mon"]}]}"#).unwrap_err();
    assert!(matches!(err, PicoPlacaError::RuleTable(_)));
}

#[test]
fn unknown_day_names_entry() {
    let json = r#"{"rules": [
        {"days": ["Mon"], "digits": [1], "windows": [{"start": "06:00", "end": "07:00"}]},
        {"days": ["Funday"], "digits": [1], "windows": [{"start": "06:00", "end": "07:00"}]}
    ]}"#;
    let err = RuleTable::from_json(json)
        .unwrap()
        .into_rule_set()
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid rule: entry 1: unknown day 'Funday'");
}

#[test]
fn bad_time_string_rejected() {
    let json = r#"{"rules": [
        {"days": ["Mon"], "digits": [1], "windows": [{"start": "6am", "end": "07:00"}]}
    ]}"#;
    let err = RuleTable::from_json(json)
        .unwrap()
        .into_rule_set()
        .unwrap_err();
    assert!(err.to_string().contains("'6am' is not an HH:MM time"));
}

#[test]
fn entry_without_windows_rejected() {
    let json = r#"{"rules": [{"days": ["Mon"], "digits": [1], "windows": []}]}"#;
    let err = RuleTable::from_json(json)
        .unwrap()
        .into_rule_set()
        .unwrap_err();
    assert!(matches!(err, PicoPlacaError::InvalidRule(_)));
}

#[test]
fn inverted_window_rejected() {
    let json = r#"{"rules": [
        {"days": ["Mon"], "digits": [1], "windows": [{"start": "20:00", "end": "16:00"}]}
    ]}"#;
    let err = RuleTable::from_json(json)
        .unwrap()
        .into_rule_set()
        .unwrap_err();
    assert!(err.to_string().starts_with("Invalid rule: entry 0:"));
}

#[test]
fn bad_digit_rejected() {
    let json = r#"{"rules": [
        {"days": ["Mon"], "digits": [12], "windows": [{"start": "06:00", "end": "07:00"}]}
    ]}"#;
    let err = RuleTable::from_json(json)
        .unwrap()
        .into_rule_set()
        .unwrap_err();
    assert!(matches!(err, PicoPlacaError::InvalidRule(_)));
}
