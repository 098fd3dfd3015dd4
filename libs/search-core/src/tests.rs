#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use crate::ast::{CompareOperator, Expr, Value};
    use crate::{Error, OrderSpec, PageRequest, PageResult, Predicate, SortDir};

    #[test]
    fn test_all_of_with_no_parts_is_none() {
        let p = Predicate::all_of([None, None, None]);
        assert!(p.is_none());
        assert_eq!(p.as_ast(), None);
    }

    #[test]
    fn test_all_of_with_single_part_is_that_part() {
        let expr = Expr::eq("name", Value::String("member1".into()));
        let p = Predicate::all_of([Some(expr.clone()), None]);
        assert_eq!(p.as_ast(), Some(&expr));
    }

    #[test]
    fn test_all_of_folds_present_parts_with_and() {
        let a = Expr::ge("age", Value::Int(20));
        let b = Expr::le("age", Value::Int(30));
        let p = Predicate::all_of([Some(a.clone()), None, Some(b.clone())]);

        match p.as_ast() {
            Some(Expr::And(l, r)) => {
                assert_eq!(**l, a);
                assert_eq!(**r, b);
            }
            other => panic!("expected And, got {other:?}"),
        }
    }

    #[test]
    fn test_and_treats_none_as_identity() {
        let expr = Expr::eq("name", Value::String("x".into()));
        let p = Predicate::none().and(Predicate::some(expr.clone()));
        assert_eq!(p.as_ast(), Some(&expr));

        let p = Predicate::some(expr.clone()).and(Predicate::none());
        assert_eq!(p.as_ast(), Some(&expr));

        assert!(Predicate::none().and(Predicate::none()).is_none());
    }

    #[test]
    fn test_compare_builder_shapes() {
        let expr = Expr::compare("age", CompareOperator::Ge, Value::Int(35));
        match expr {
            Expr::Compare(l, op, r) => {
                assert_eq!(*l, Expr::Identifier("age".into()));
                assert_eq!(op, CompareOperator::Ge);
                assert_eq!(*r, Expr::Value(Value::Int(35)));
            }
            other => panic!("expected Compare, got {other:?}"),
        }
    }

    #[test]
    fn test_page_request_rejects_negative_offset() {
        let err = PageRequest::new(-1, 10).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidRequest { .. }));
    }

    #[test]
    fn test_page_request_rejects_non_positive_limit() {
        assert!(matches!(
            PageRequest::new(0, 0).validate(),
            Err(Error::InvalidRequest { .. })
        ));
        assert!(matches!(
            PageRequest::new(0, -5).validate(),
            Err(Error::InvalidRequest { .. })
        ));
        assert!(PageRequest::new(0, 1).validate().is_ok());
    }

    #[test]
    fn test_page_result_has_more() {
        let full = PageResult::new(vec![1, 2, 3], 4, PageRequest::new(0, 3));
        assert!(full.has_more());

        let last = PageResult::new(vec![4], 4, PageRequest::new(3, 3));
        assert!(!last.has_more());

        let empty: PageResult<i32> = PageResult::new(vec![], 4, PageRequest::new(4, 3));
        assert!(!empty.has_more());
    }

    #[test]
    fn test_page_result_map_items_preserves_total_and_request() {
        let page = PageResult::new(vec![1, 2], 7, PageRequest::new(2, 2));
        let mapped = page.map_items(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.total, 7);
        assert_eq!(mapped.request, PageRequest::new(2, 2));
    }

    #[test]
    fn test_order_spec_builders() {
        let order = OrderSpec::asc("name").then_desc("age");
        assert_eq!(order.0.len(), 2);
        assert_eq!(order.0[0].field, "name");
        assert_eq!(order.0[0].dir, SortDir::Asc);
        assert_eq!(order.0[1].field, "age");
        assert_eq!(order.0[1].dir, SortDir::Desc);
        assert!(OrderSpec::default().is_empty());
    }
}
