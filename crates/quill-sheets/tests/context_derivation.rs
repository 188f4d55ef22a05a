//! End-to-end tests for context derivation, aggregation and invalidation

use std::rc::Rc;

use quill_sheets::prelude::*;
use quill_sheets::{ConfigValue, Error};

fn configured_session() -> Session {
    let session = Session::new();
    let store = session.environment();
    store.set(name::PRECISION, 7u32.into()).unwrap();
    store
        .set(name::ROUNDING_MODE, RoundingMode::HalfUp.into())
        .unwrap();
    store.set(name::LOCALE, LocaleTag::new("en").into()).unwrap();
    store.set(name::DEFAULT_YEAR, 1900u32.into()).unwrap();
    store.set(name::TWO_DIGIT_YEAR_PIVOT, 50u32.into()).unwrap();
    store.set(name::DECIMAL_DIGIT_COUNT, 2u32.into()).unwrap();
    store
        .set(name::VALUE_SEPARATOR, ConfigValue::Separator(','))
        .unwrap();
    store
        .set(
            name::EXPRESSION_NUMBER_KIND,
            ExpressionNumberKind::BigDecimal.into(),
        )
        .unwrap();
    store
        .set(name::CONVERTER, ConfigValue::Selector("general".into()))
        .unwrap();
    store
        .set(name::DATE_PARSER, ConfigValue::Selector("date".into()))
        .unwrap();
    store
        .set(
            name::DATE_TIME_PARSER,
            ConfigValue::Selector("date-time".into()),
        )
        .unwrap();
    store
        .set(name::NUMBER_PARSER, ConfigValue::Selector("number".into()))
        .unwrap();
    store
        .set(name::TIME_PARSER, ConfigValue::Selector("time".into()))
        .unwrap();
    session
}

/// A derivation whose own values are present succeeds even while other
/// derivations would fail.
#[test]
fn test_math_succeeds_while_decimal_reports_complete_missing_set() {
    let session = Session::new();
    let store = session.environment();
    store.set(name::PRECISION, 7u32.into()).unwrap();
    store
        .set(name::ROUNDING_MODE, RoundingMode::HalfUp.into())
        .unwrap();
    store.set(name::DECIMAL_DIGIT_COUNT, 2u32.into()).unwrap();

    let math = session.contexts().math_context().unwrap();
    assert_eq!(math.precision(), 7);
    assert_eq!(math.rounding_mode(), RoundingMode::HalfUp);

    // The failure names every absent prerequisite at once.
    let err = session.contexts().decimal_number_context().unwrap_err();
    assert_eq!(
        err.missing_values().unwrap(),
        &[name::LOCALE, name::DECIMAL_NUMBER_SYMBOLS]
    );
}

/// Supplying exactly the named missing values makes the retry succeed
/// without discovering further misses.
#[test]
fn test_retry_after_supplying_named_values() {
    let session = Session::new();
    let store = session.environment();
    store.set(name::PRECISION, 7u32.into()).unwrap();
    store
        .set(name::ROUNDING_MODE, RoundingMode::HalfUp.into())
        .unwrap();
    store.set(name::DECIMAL_DIGIT_COUNT, 2u32.into()).unwrap();

    let err = session.contexts().decimal_number_context().unwrap_err();
    let missing = err.missing_values().unwrap().to_vec();
    assert_eq!(missing.len(), 2);

    // Setting the locale alone satisfies both: the symbols fall back to
    // locale defaults.
    store.set(name::LOCALE, LocaleTag::new("en").into()).unwrap();
    let decimal = session.contexts().decimal_number_context().unwrap();
    assert_eq!(decimal.decimal_separator(), '.');
}

#[test]
fn test_well_known_change_rebuilds_both_contexts() {
    let session = configured_session();
    let contexts = session.contexts();

    let decimal_before = contexts.decimal_number_context().unwrap();
    let math_before = contexts.math_context().unwrap();

    session
        .environment()
        .set(name::ROUNDING_MODE, RoundingMode::Ceiling.into())
        .unwrap();

    let math_after = contexts.math_context().unwrap();
    assert!(!Rc::ptr_eq(&math_before, &math_after));
    assert_eq!(math_after.rounding_mode(), RoundingMode::Ceiling);

    let decimal_after = contexts.decimal_number_context().unwrap();
    assert!(!Rc::ptr_eq(&decimal_before, &decimal_after));
    assert_eq!(decimal_after.math().rounding_mode(), RoundingMode::Ceiling);
}

#[test]
fn test_full_derivation_chain() {
    let session = configured_session();
    let contexts = session.contexts();

    let conversion = contexts.conversion_context().unwrap();
    assert_eq!(conversion.converter().name(), "general");
    assert_eq!(conversion.date_time().default_year(), 1900);

    let parser = contexts.spreadsheet_parser().unwrap();
    assert_eq!(
        parser.selectors(),
        vec!["date", "date-time", "number", "time"]
    );

    let parser_context = contexts.parser_context().unwrap();
    assert_eq!(parser_context.value_separator(), ',');
    assert_eq!(
        parser_context.expression_number().kind(),
        ExpressionNumberKind::BigDecimal
    );

    // One generation, one instance of each embedded context.
    assert!(Rc::ptr_eq(
        conversion.decimal(),
        parser_context.expression_number().decimal()
    ));
}

#[test]
fn test_unsupported_locale_is_not_a_missing_value() {
    let session = configured_session();
    session
        .environment()
        .set(name::LOCALE, LocaleTag::new("xx-YY").into())
        .unwrap();

    let err = session.contexts().date_time_context().unwrap_err();
    assert!(matches!(err, Error::UnknownLocale(_)));
}

#[test]
fn test_labels_reach_conversion_context() {
    let session = configured_session();
    session.labels().define("Total", "B7");

    let conversion = session.contexts().conversion_context().unwrap();
    assert_eq!(conversion.resolve_label("Total"), Some("B7".to_string()));
    assert_eq!(conversion.resolve_label("Subtotal"), None);
}
