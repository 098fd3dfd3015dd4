use member_search::domain::error::DomainError;
use member_search::MemberSearchCondition;
use search_core::ast::{CompareOperator, Expr, Value};

/// Number of comparison leaves in a composed predicate.
fn compare_count(expr: &Expr) -> usize {
    match expr {
        Expr::And(a, b) | Expr::Or(a, b) => compare_count(a) + compare_count(b),
        Expr::Not(x) => compare_count(x),
        Expr::Compare(..) => 1,
        Expr::Identifier(_) | Expr::Value(_) => 0,
    }
}

#[test]
fn test_empty_condition_composes_to_match_all() {
    let condition = MemberSearchCondition::default();
    assert!(condition.to_predicate().is_none());
}

#[test]
fn test_blank_strings_count_as_absent() {
    let condition = MemberSearchCondition {
        name: Some("   ".to_string()),
        group_name: Some("".to_string()),
        ..Default::default()
    };
    assert!(condition.to_predicate().is_none());
}

#[test]
fn test_single_name_field_composes_to_one_equality() {
    let condition = MemberSearchCondition {
        name: Some("member1".to_string()),
        ..Default::default()
    };
    let predicate = condition.to_predicate();

    match predicate.as_ast() {
        Some(Expr::Compare(l, op, r)) => {
            assert_eq!(**l, Expr::Identifier("name".into()));
            assert_eq!(*op, CompareOperator::Eq);
            assert_eq!(**r, Expr::Value(Value::String("member1".into())));
        }
        other => panic!("expected a single Compare, got {other:?}"),
    }
}

#[test]
fn test_range_bounds_compose_to_ge_and_le() {
    let condition = MemberSearchCondition {
        age_goe: Some(20),
        age_loe: Some(30),
        ..Default::default()
    };
    let predicate = condition.to_predicate();

    match predicate.as_ast() {
        Some(Expr::And(l, r)) => {
            assert_eq!(**l, Expr::ge("age", Value::Int(20)));
            assert_eq!(**r, Expr::le("age", Value::Int(30)));
        }
        other => panic!("expected And of two compares, got {other:?}"),
    }
}

#[test]
fn test_full_condition_composes_four_sub_predicates() {
    let condition = MemberSearchCondition {
        name: Some("member1".to_string()),
        group_name: Some("teamA".to_string()),
        age_goe: Some(10),
        age_loe: Some(40),
    };
    let predicate = condition.to_predicate();
    let ast = predicate.as_ast().expect("predicate must be present");
    assert_eq!(compare_count(ast), 4);
}

#[test]
fn test_composition_is_deterministic() {
    let condition = MemberSearchCondition {
        name: Some("member1".to_string()),
        age_goe: Some(10),
        ..Default::default()
    };
    assert_eq!(condition.to_predicate(), condition.to_predicate());
}

#[test]
fn test_equality_keeps_the_supplied_value_untrimmed() {
    // Presence is tested on trimmed content, but the matched value is the
    // caller's, unchanged.
    let condition = MemberSearchCondition {
        name: Some(" member1 ".to_string()),
        ..Default::default()
    };
    match condition.to_predicate().as_ast() {
        Some(Expr::Compare(_, _, r)) => {
            assert_eq!(**r, Expr::Value(Value::String(" member1 ".into())));
        }
        other => panic!("expected Compare, got {other:?}"),
    }
}

#[test]
fn test_domain_error_wraps_page_error() {
    let err: DomainError = search_core::Error::invalid_request("limit must be positive").into();
    match err {
        DomainError::Page(search_core::Error::InvalidRequest { reason }) => {
            assert!(reason.contains("limit"));
        }
        other => panic!("expected Page(InvalidRequest), got {other:?}"),
    }

    let err = DomainError::database("connection refused");
    assert_eq!(err.to_string(), "database error: connection refused");
}
