use sea_orm::{
    Condition, Value,
    sea_query::{Alias, Expr, SimpleExpr},
};

use super::predicate::{FilterValue, Predicate};

fn filter_value(value: &FilterValue) -> Value {
    match value {
        FilterValue::Text(s) => s.clone().into(),
        FilterValue::Int(i) => (*i).into(),
        FilterValue::Float(f) => (*f).into(),
        FilterValue::Bool(b) => (*b).into(),
        FilterValue::Uuid(u) => (*u).into(),
    }
}

/// Column expression for a logical field name. Dotted names address a
/// column on a joined table (`"teams.name"` -> `"teams"."name"`).
fn column_expr(field: &str) -> Expr {
    match field.split_once('.') {
        Some((table, column)) => Expr::col((Alias::new(table), Alias::new(column))),
        None => Expr::col(Alias::new(field)),
    }
}

fn atom_expr(predicate: &Predicate) -> Option<SimpleExpr> {
    match predicate {
        Predicate::Eq { field, value } => Some(column_expr(field).eq(filter_value(value))),
        Predicate::Gte { field, value } => Some(column_expr(field).gte(filter_value(value))),
        Predicate::Lte { field, value } => Some(column_expr(field).lte(filter_value(value))),
        Predicate::Between { field, low, high } => {
            Some(column_expr(field).between(filter_value(low), filter_value(high)))
        }
        Predicate::And(_) => None,
    }
}

/// Lower a predicate into a Sea-ORM `Condition`.
///
/// The universal predicate lowers to an empty all-condition, which the
/// query builder renders as no WHERE clause at all. The same predicate
/// can be lowered once for the content query and once for the count
/// query; lowering never mutates it.
#[must_use]
pub fn predicate_condition(predicate: &Predicate) -> Condition {
    match predicate {
        Predicate::And(parts) => parts
            .iter()
            .fold(Condition::all(), |cond, part| cond.add(predicate_condition(part))),
        atom => {
            let mut cond = Condition::all();
            if let Some(expr) = atom_expr(atom) {
                cond = cond.add(expr);
            }
            cond
        }
    }
}
