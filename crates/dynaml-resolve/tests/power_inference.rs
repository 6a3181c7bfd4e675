//! End-to-end scenarios for power-expression typing.
//!
//! These tests play the role of the analysis driver: operand slots are
//! populated bottom-up before the power rule runs on the parent, exactly
//! as the tree walk would leave them.

use dynaml_ast::foundation::{SourceMap, Span, Type};
use dynaml_ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use dynaml_resolve::diagnostics::{render, Diagnostics};
use dynaml_resolve::error::{CompileError, ErrorKind, TypeResult};
use dynaml_resolve::{infer_power, TypeRegistry};
use dynaml_units::{resolve_symbol, Unit};
use std::path::PathBuf;

fn span() -> Span {
    Span::new(0, 0, 8, 1)
}

fn typed(mut expr: Expr, ty: TypeResult) -> Expr {
    expr.set_type_result(ty);
    expr
}

fn pow(base: Expr, exponent: Expr) -> Expr {
    Expr::binary(BinaryOp::Pow, base, exponent, span())
}

#[test]
fn integer_power_of_integer_is_integer() {
    let mut expr = pow(
        typed(Expr::int(2, span()), Ok(Type::Integer)),
        typed(Expr::int(8, span()), Ok(Type::Integer)),
    );
    let mut registry = TypeRegistry::with_predefined();
    let mut diagnostics = Diagnostics::new();
    infer_power(&mut expr, &mut registry, &mut diagnostics);

    assert_eq!(expr.type_result(), Some(&Ok(Type::Integer)));
    assert!(!diagnostics.has_errors());
}

#[test]
fn real_combinations_widen_to_real() {
    let cases = [
        (Type::Real, Type::Real),
        (Type::Real, Type::Integer),
        (Type::Integer, Type::Real),
    ];
    for (base_ty, exp_ty) in cases {
        let mut expr = pow(
            typed(Expr::float(1.5, span()), Ok(base_ty)),
            typed(Expr::float(1.5, span()), Ok(exp_ty)),
        );
        let mut registry = TypeRegistry::with_predefined();
        let mut diagnostics = Diagnostics::new();
        infer_power(&mut expr, &mut registry, &mut diagnostics);
        assert_eq!(expr.type_result(), Some(&Ok(Type::Real)));
    }
}

#[test]
fn meter_squared() {
    let mut expr = pow(
        typed(Expr::variable("d", span()), Ok(Type::Unit(Unit::meters()))),
        typed(Expr::int(2, span()), Ok(Type::Integer)),
    );
    let mut registry = TypeRegistry::with_predefined();
    let mut diagnostics = Diagnostics::new();
    infer_power(&mut expr, &mut registry, &mut diagnostics);

    let expected = Unit::meters().pow(2);
    assert_eq!(expr.type_result(), Some(&Ok(Type::Unit(expected))));
    // The derived dimension was interned under a synthesized name
    assert_eq!(registry.name_of(&expected), Some("m^2"));
}

#[test]
fn millivolt_squared_keeps_scale() {
    let millivolt = resolve_symbol("mV").expect("mV resolves");
    let mut expr = pow(
        typed(Expr::variable("V_m", span()), Ok(Type::Unit(millivolt))),
        typed(
            Expr::group(Expr::int(2, span()), span()),
            Ok(Type::Integer),
        ),
    );
    let mut registry = TypeRegistry::with_predefined();
    let mut diagnostics = Diagnostics::new();
    infer_power(&mut expr, &mut registry, &mut diagnostics);

    match expr.type_result() {
        Some(Ok(Type::Unit(unit))) => {
            assert_eq!(unit.dims(), millivolt.pow(2).dims());
            assert!((unit.scale() - 1e-6).abs() < 1e-18);
        }
        other => panic!("expected unit type, got {:?}", other),
    }
}

#[test]
fn inverse_time_constant_via_unary_minus() {
    // tau ** -(1) with tau: ms
    let millisecond = resolve_symbol("ms").expect("ms resolves");
    let exponent = Expr::unary(
        UnaryOp::Neg,
        Expr::group(Expr::int(1, span()), span()),
        span(),
    );
    let mut expr = pow(
        typed(Expr::variable("tau", span()), Ok(Type::Unit(millisecond))),
        typed(exponent, Ok(Type::Integer)),
    );
    let mut registry = TypeRegistry::with_predefined();
    let mut diagnostics = Diagnostics::new();
    infer_power(&mut expr, &mut registry, &mut diagnostics);

    match expr.type_result() {
        Some(Ok(Type::Unit(unit))) => {
            assert_eq!(unit.dims(), Unit::hertz().dims());
            assert!((unit.scale() - 1e3).abs() < 1e-6);
        }
        other => panic!("expected unit type, got {:?}", other),
    }
}

#[test]
fn unit_base_with_real_exponent_never_consults_the_evaluator() {
    // The exponent shape would also fail constant evaluation, but the type
    // check comes first: the diagnostic must be InvalidUnitExponent, not
    // NonConstantExponent.
    let mut expr = pow(
        typed(Expr::variable("d", span()), Ok(Type::Unit(Unit::meters()))),
        typed(Expr::variable("x", span()), Ok(Type::Real)),
    );
    let mut registry = TypeRegistry::with_predefined();
    let mut diagnostics = Diagnostics::new();
    infer_power(&mut expr, &mut registry, &mut diagnostics);

    match expr.type_result() {
        Some(Err(err)) => assert_eq!(err.kind, ErrorKind::InvalidUnitExponent),
        other => panic!("expected error, got {:?}", other),
    }
    assert_eq!(diagnostics.reports().len(), 1);
}

#[test]
fn unit_base_with_integer_variable_exponent_is_non_constant() {
    let mut expr = pow(
        typed(Expr::variable("d", span()), Ok(Type::Unit(Unit::meters()))),
        typed(Expr::variable("n", span()), Ok(Type::Integer)),
    );
    let mut registry = TypeRegistry::with_predefined();
    let mut diagnostics = Diagnostics::new();
    infer_power(&mut expr, &mut registry, &mut diagnostics);

    match expr.type_result() {
        Some(Err(err)) => assert_eq!(err.kind, ErrorKind::NonConstantExponent),
        other => panic!("expected error, got {:?}", other),
    }
}

#[test]
fn operand_errors_ride_up_unchanged() {
    let upstream = CompileError::new(
        ErrorKind::UndefinedName,
        Span::new(0, 0, 3, 1),
        "variable 'V_x' not found".to_string(),
    );
    let mut expr = pow(
        typed(Expr::variable("V_x", span()), Err(upstream.clone())),
        typed(Expr::int(2, span()), Ok(Type::Integer)),
    );
    let mut registry = TypeRegistry::with_predefined();
    let mut diagnostics = Diagnostics::new();
    infer_power(&mut expr, &mut registry, &mut diagnostics);

    assert_eq!(expr.type_result(), Some(&Err(upstream)));
    assert!(diagnostics.reports().is_empty());
}

#[test]
fn nested_powers_type_bottom_up() {
    // (s ** 2) ** 2 : the driver types the inner power first, then the
    // outer rule consumes its slot like any other operand.
    let mut inner = pow(
        typed(Expr::variable("t", span()), Ok(Type::Unit(Unit::seconds()))),
        typed(Expr::int(2, span()), Ok(Type::Integer)),
    );
    let mut registry = TypeRegistry::with_predefined();
    let mut diagnostics = Diagnostics::new();
    infer_power(&mut inner, &mut registry, &mut diagnostics);
    assert_eq!(
        inner.type_result(),
        Some(&Ok(Type::Unit(Unit::seconds().pow(2))))
    );

    let mut outer = Expr::binary(
        BinaryOp::Pow,
        inner,
        typed(Expr::int(2, span()), Ok(Type::Integer)),
        span(),
    );
    infer_power(&mut outer, &mut registry, &mut diagnostics);
    assert_eq!(
        outer.type_result(),
        Some(&Ok(Type::Unit(Unit::seconds().pow(4))))
    );
    assert!(!diagnostics.has_errors());
}

#[test]
fn diagnostics_render_with_source_context() {
    let mut sources = SourceMap::new();
    let file_id = sources.add_file(PathBuf::from("iaf.dyn"), "g_L ** n".to_string());

    let base_span = Span::new(file_id, 0, 3, 1);
    let exp_span = Span::new(file_id, 7, 8, 1);
    let expr_span = Span::new(file_id, 0, 8, 1);

    let nanosiemens = resolve_symbol("nS").expect("nS resolves");
    let mut expr = Expr::binary(
        BinaryOp::Pow,
        typed(
            Expr::variable("g_L", base_span),
            Ok(Type::Unit(nanosiemens)),
        ),
        typed(Expr::variable("n", exp_span), Ok(Type::Integer)),
        expr_span,
    );

    let mut registry = TypeRegistry::with_predefined();
    let mut diagnostics = Diagnostics::new();
    infer_power(&mut expr, &mut registry, &mut diagnostics);

    assert!(diagnostics.has_errors());
    let rendered = render(&sources, &diagnostics.reports()[0]);
    assert!(rendered.contains("non-constant exponent"));
    assert!(rendered.contains("iaf.dyn:1:8"));
    assert!(rendered.contains("g_L ** n"));
}

#[test]
fn analysis_is_deterministic() {
    // The same input typed twice produces the same result slot
    let build = || {
        pow(
            typed(Expr::variable("d", span()), Ok(Type::Unit(Unit::meters()))),
            typed(
                Expr::new(
                    ExprKind::Call {
                        name: "floor".to_string(),
                        args: vec![Expr::float(2.0, span())],
                    },
                    span(),
                ),
                Ok(Type::Integer),
            ),
        )
    };

    let mut first = build();
    let mut second = build();
    let mut registry = TypeRegistry::with_predefined();
    let mut diagnostics = Diagnostics::new();
    infer_power(&mut first, &mut registry, &mut diagnostics);
    infer_power(&mut second, &mut registry, &mut diagnostics);

    assert_eq!(first.type_result(), second.type_result());
    assert_eq!(diagnostics.reports().len(), 2);
}
