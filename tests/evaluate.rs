use calculator::calculator::{Operator, Syntax, looks_like_expression, parse_expression};
use calculator::{CalcError, Evaluator, add, divide, evaluate, multiply, sqrt, subtract};

fn close_enough(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

#[test]
fn documented_expressions() {
    assert_eq!(evaluate("2 + 2").unwrap(), 4.0);
    assert_eq!(evaluate("4-2").unwrap(), 2.0);
    assert_eq!(evaluate("3*5").unwrap(), 15.0);
    assert!(close_enough(evaluate("  1.5 + 2.25  ").unwrap(), 3.75, 1e-12));
}

#[test]
fn division_requires_opt_in() {
    // `/` is outside the default operator set, so this never reaches divide.
    assert!(matches!(evaluate("8/0"), Err(CalcError::Parse(_))));

    let evaluator = Evaluator::with_division();
    assert!(matches!(
        evaluator.evaluate("8/0"),
        Err(CalcError::DivisionByZero { .. })
    ));
    assert_eq!(evaluator.evaluate("9/4").unwrap(), 2.25);
}

#[test]
fn unparsable_input() {
    for input in ["abc", "", "   ", "two + two", "+"] {
        assert!(
            matches!(evaluate(input), Err(CalcError::Parse(_))),
            "{input:?}"
        );
    }
}

#[test]
fn evaluation_matches_direct_calls() {
    let pairs = [(1.0, 2.0), (10.5, 0.25), (7.0, 7.0), (0.0, 3.0)];
    for (a, b) in pairs {
        let add_expr = format!("{a} + {b}");
        let sub_expr = format!("{a} - {b}");
        let mul_expr = format!("{a} * {b}");
        assert_eq!(evaluate(&add_expr).unwrap(), add(&[a, b]));
        assert_eq!(evaluate(&sub_expr).unwrap(), subtract(&[a, b]).unwrap());
        assert_eq!(evaluate(&mul_expr).unwrap(), multiply(&[a, b]));
    }
}

#[test]
fn parsed_expression_exposes_parts() {
    let parsed = parse_expression("12 - 4.5").unwrap();
    assert_eq!(parsed.lhs, 12.0);
    assert_eq!(parsed.operator, Operator::Subtract);
    assert_eq!(parsed.rhs, 4.5);
    assert!(looks_like_expression("12 - 4.5", Syntax::Standard));
}

#[test]
fn variadic_operations() {
    assert_eq!(add(&[1.0, 2.0, 3.0, 4.0]), 10.0);
    assert_eq!(subtract(&[1.0, 2.0, 3.0]).unwrap(), -4.0);
    assert_eq!(multiply(&[1.0, 2.0, 3.0, 4.0]), 24.0);
    assert_eq!(divide(&[120.0, 2.0, 3.0, 4.0]).unwrap(), 5.0);
    assert!(matches!(subtract(&[]), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(divide(&[]), Err(CalcError::InvalidArgument(_))));
    assert!(matches!(
        divide(&[1.0, 2.0, 0.0, 4.0]),
        Err(CalcError::DivisionByZero { .. })
    ));
}

#[test]
fn sqrt_domain() {
    assert!(close_enough(sqrt(2.0).unwrap(), std::f64::consts::SQRT_2, 1e-12));
    assert!(matches!(sqrt(-9.0), Err(CalcError::InvalidArgument(_))));
}

#[test]
fn evaluation_is_thread_safe() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let expr = format!("{i} * {i}");
                evaluate(&expr).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let i = i as f64;
        assert_eq!(handle.join().unwrap(), i * i);
    }
}

#[test]
fn operands_are_ascii_and_finite() {
    assert_eq!(evaluate("\u{0663}+4 then 2+2").unwrap(), 4.0);

    let huge = "9".repeat(400);
    assert!(matches!(
        evaluate(&format!("{huge} + 1")),
        Err(CalcError::NumberOutOfRange { .. })
    ));
}
