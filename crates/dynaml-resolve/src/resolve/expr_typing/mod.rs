//! Expression type inference.
//!
//! Rules in this module run inside the driver's bottom-up walk: children
//! are typed before their parents, so a rule only reads its operands'
//! type-result slots and writes its own. Errors are values in those same
//! slots, so the first error wins and rides up the tree unchanged.
//!
//! This module carries the rule for the power operator (`base ** exponent`),
//! the hardest of the binary rules: it combines the integer/real/unit
//! numeric lattice with symbolic unit arithmetic, and for unit bases it
//! folds the exponent to a compile-time integer, because a unit raised to
//! an unknown or fractional power has no well-defined dimension.

pub mod const_eval;
pub mod helpers;

use crate::diagnostics::Diagnostics;
use crate::error::TypeResult;
use crate::resolve::types::TypeRegistry;
pub use const_eval::evaluate_constant_exponent;
use dynaml_ast::foundation::Type;
use dynaml_ast::{BinaryOp, Expr, ExprKind};
use helpers::{err_invalid_unit_exponent, err_unsupported_operand};

/// Infer the result type of a power expression.
///
/// Writes the node's type-result slot exactly once. Must be called after
/// both operands' slots are populated (the driver's visit order guarantees
/// this; violations are contract bugs and assert).
///
/// Newly detected failures are forwarded to the diagnostic sink; operand
/// errors copied through steps 1–2 were already reported where they arose.
pub fn infer_power(expr: &mut Expr, registry: &mut TypeRegistry, diagnostics: &mut Diagnostics) {
    let result = power_type(expr, registry, diagnostics);
    expr.set_type_result(result);
}

/// The combination lattice for `base ** exponent`, first match wins:
///
/// 1. base in error → that error
/// 2. exponent in error → that error
/// 3. integer ** integer → integer (exact, no widening)
/// 4. unit ** integer-typed constant n → unit^n
/// 5. any other numeric mix → real
/// 6. anything else → unsupported operand
fn power_type(
    expr: &Expr,
    registry: &mut TypeRegistry,
    diagnostics: &mut Diagnostics,
) -> TypeResult {
    let (left, right) = match &expr.kind {
        ExprKind::Binary {
            op: BinaryOp::Pow,
            left,
            right,
        } => (left, right),
        other => panic!("infer_power called on non-power expression {:?}", other),
    };

    let base = match left
        .type_result()
        .expect("base operand must be typed before the power rule runs")
    {
        Ok(ty) => ty,
        Err(err) => return Err(err.clone()),
    };

    let exponent = match right
        .type_result()
        .expect("exponent operand must be typed before the power rule runs")
    {
        Ok(ty) => ty,
        Err(err) => return Err(err.clone()),
    };

    if base.is_numeric() && exponent.is_numeric() {
        if base.is_integer() && exponent.is_integer() {
            return Ok(Type::Integer);
        }

        if let Type::Unit(base_unit) = base {
            // The exponent must be integer-typed before it is worth asking
            // whether it is constant.
            if !exponent.is_integer() {
                let err = err_invalid_unit_exponent(expr.span, exponent);
                diagnostics.report(&err);
                return Err(err);
            }

            return match evaluate_constant_exponent(right) {
                Ok(power) => Ok(registry.type_for_unit(base_unit.pow(power))),
                Err(err) => {
                    diagnostics.report(&err);
                    Err(err)
                }
            };
        }

        // Remaining numeric combinations widen to real
        return Ok(Type::Real);
    }

    let err = err_unsupported_operand(expr.span, base, exponent);
    diagnostics.report(&err);
    Err(err)
}
