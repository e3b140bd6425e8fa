use sea_orm::{ColumnTrait, sea_query::Order};
use serde::{Deserialize, Serialize};

use crate::models::ListParams;

// Shared default values
const DEFAULT_SORT_ORDER: &str = "ASC";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Self::Asc,
            SortDirection::Desc => Self::Desc,
        }
    }
}

/// One entry of a page request's sort order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    #[must_use]
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            direction: SortDirection::Asc,
        }
    }

    #[must_use]
    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            direction: SortDirection::Desc,
        }
    }
}

/// Parse sort column and order from JSON array format
fn parse_json_sort(json: &str) -> Option<(String, String)> {
    let sort_vec: Vec<String> = serde_json::from_str(json).ok()?;
    let field = sort_vec.first()?.clone();
    let order = sort_vec
        .get(1)
        .cloned()
        .unwrap_or_else(|| DEFAULT_SORT_ORDER.to_owned());
    Some((field, order))
}

/// Convert sort order string to a direction; anything that is not ASC
/// (case-insensitive) sorts descending.
fn parse_direction(sort_order: &str) -> SortDirection {
    if sort_order.eq_ignore_ascii_case("ASC") {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    }
}

/// Extract the requested sort keys from the query parameters, supporting
/// both React Admin (`sort=["column","ASC"]`) and standard REST
/// (`sort_by=column&order=ASC`) formats. No requested sort yields an
/// empty list; the resource's default column applies downstream.
#[must_use]
pub fn parse_sort_keys(params: &ListParams) -> Vec<SortKey> {
    let requested = if let Some(sort_by) = &params.sort_by {
        Some((
            sort_by.clone(),
            params
                .order
                .clone()
                .unwrap_or_else(|| DEFAULT_SORT_ORDER.to_owned()),
        ))
    } else if let Some(sort) = &params.sort {
        if sort.starts_with('[') {
            parse_json_sort(sort)
        } else {
            // REST format: sort=column&order=ASC/DESC
            Some((
                sort.clone(),
                params
                    .order
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SORT_ORDER.to_owned()),
            ))
        }
    } else {
        None
    };

    requested
        .map(|(field, order)| {
            vec![SortKey {
                field,
                direction: parse_direction(&order),
            }]
        })
        .unwrap_or_default()
}

/// Resolve sort keys onto the declared sortable columns.
///
/// Unknown fields are skipped. The default column is appended ascending
/// as a stable tie-break, and stands alone when nothing was requested.
#[must_use]
pub fn resolve_sort<C>(keys: &[SortKey], columns: &[(&str, C)], default_column: C) -> Vec<(C, Order)>
where
    C: ColumnTrait + Copy,
{
    let mut resolved: Vec<(C, Order)> = keys
        .iter()
        .filter_map(|key| {
            columns
                .iter()
                .find(|&&(name, _)| name == key.field)
                .map(|&(_, column)| (column, key.direction.into()))
        })
        .collect();
    resolved.push((default_column, Order::Asc));
    resolved
}
