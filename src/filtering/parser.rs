use std::collections::HashMap;
use uuid::Uuid;

use super::predicate::{FilterValue, Predicate};

/// Declared type of a filterable field, used to interpret filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
    Uuid,
}

impl FieldKind {
    const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

fn parse_filter_json(filter_str: Option<&str>) -> HashMap<String, serde_json::Value> {
    filter_str.map_or_else(HashMap::new, |filter| match serde_json::from_str(filter) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed filter parameter");
            HashMap::new()
        }
    })
}

/// Parse React Admin comparison operator suffixes.
/// Returns the base field name if a recognised suffix is found.
fn parse_bound_suffix(key: &str) -> Option<(&str, Bound)> {
    key.strip_suffix("_gte")
        .map(|base| (base, Bound::Lower))
        .or_else(|| key.strip_suffix("_lte").map(|base| (base, Bound::Upper)))
}

#[derive(Clone, Copy)]
enum Bound {
    Lower,
    Upper,
}

fn numeric_value(kind: FieldKind, value: &serde_json::Value) -> Option<FilterValue> {
    match value {
        serde_json::Value::Number(number) => match kind {
            FieldKind::Integer => number.as_i64().map(FilterValue::Int),
            FieldKind::Float => number.as_f64().map(FilterValue::Float),
            _ => None,
        },
        // Numbers also arrive as strings from query-string tooling.
        serde_json::Value::String(s) => match kind {
            FieldKind::Integer => s.trim().parse().ok().map(FilterValue::Int),
            FieldKind::Float => s.trim().parse().ok().map(FilterValue::Float),
            _ => None,
        },
        _ => None,
    }
}

fn equality_value(kind: FieldKind, value: &serde_json::Value) -> Option<FilterValue> {
    match kind {
        FieldKind::Text => {
            let s = value.as_str()?.trim();
            if s.is_empty() {
                None
            } else {
                Some(FilterValue::Text(s.to_owned()))
            }
        }
        FieldKind::Integer | FieldKind::Float => numeric_value(kind, value),
        FieldKind::Boolean => value.as_bool().map(FilterValue::Bool),
        FieldKind::Uuid => Uuid::parse_str(value.as_str()?.trim())
            .ok()
            .map(FilterValue::Uuid),
    }
}

/// Build the combined predicate for a JSON filter parameter.
///
/// Each key is matched against the declared `fields`; `_gte`/`_lte`
/// suffixes on numeric fields become bound atoms, plain keys become
/// equality atoms. Anything unrecognisable (unknown keys, malformed
/// JSON, blank strings, nulls, values of the wrong type) contributes no
/// constraint. This function is total: with nothing usable in the filter
/// it returns the universal predicate.
#[must_use]
pub fn build_predicate(filter_str: Option<&str>, fields: &[(&str, FieldKind)]) -> Predicate {
    let filters = parse_filter_json(filter_str);
    let mut atoms: Vec<Option<Predicate>> = Vec::with_capacity(filters.len());

    for (key, value) in &filters {
        if let Some((base, bound)) = parse_bound_suffix(key) {
            let Some(&(_, kind)) = fields.iter().find(|(name, _)| *name == base) else {
                continue;
            };
            if !kind.is_numeric() {
                continue;
            }
            atoms.push(numeric_value(kind, value).map(|value| match bound {
                Bound::Lower => Predicate::Gte {
                    field: base.to_owned(),
                    value,
                },
                Bound::Upper => Predicate::Lte {
                    field: base.to_owned(),
                    value,
                },
            }));
        } else if let Some(&(_, kind)) = fields.iter().find(|(name, _)| *name == key.as_str()) {
            atoms.push(equality_value(kind, value).map(|value| Predicate::Eq {
                field: key.clone(),
                value,
            }));
        }
    }

    Predicate::and_all(atoms)
}
