use uuid::Uuid;

/// Scalar value carried by an atomic predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Uuid(Uuid),
}

/// A boolean constraint over entity fields.
///
/// Predicates are plain values: building one never touches a data source,
/// and the same predicate can back both the content query and the count
/// query of a page fetch. Field names are logical column names; a dotted
/// name (`"teams.name"`) addresses a column on a joined table.
///
/// `And(vec![])` is the universal predicate and matches every row.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Eq { field: String, value: FilterValue },
    Gte { field: String, value: FilterValue },
    Lte { field: String, value: FilterValue },
    Between {
        field: String,
        low: FilterValue,
        high: FilterValue,
    },
    And(Vec<Predicate>),
}

impl Predicate {
    /// The predicate that matches every row.
    #[must_use]
    pub const fn universal() -> Self {
        Self::And(Vec::new())
    }

    #[must_use]
    pub fn is_universal(&self) -> bool {
        matches!(self, Self::And(parts) if parts.is_empty())
    }

    /// Equality on a text field. Blank and whitespace-only values count as
    /// absent, the same sanitisation applied to incoming filter strings.
    #[must_use]
    pub fn text_eq(field: &str, value: Option<&str>) -> Option<Self> {
        let trimmed = value?.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self::Eq {
            field: field.to_owned(),
            value: FilterValue::Text(trimmed.to_owned()),
        })
    }

    #[must_use]
    pub fn int_eq(field: &str, value: Option<i64>) -> Option<Self> {
        Some(Self::Eq {
            field: field.to_owned(),
            value: FilterValue::Int(value?),
        })
    }

    #[must_use]
    pub fn int_gte(field: &str, bound: Option<i64>) -> Option<Self> {
        Some(Self::Gte {
            field: field.to_owned(),
            value: FilterValue::Int(bound?),
        })
    }

    #[must_use]
    pub fn int_lte(field: &str, bound: Option<i64>) -> Option<Self> {
        Some(Self::Lte {
            field: field.to_owned(),
            value: FilterValue::Int(bound?),
        })
    }

    /// Range over an integer field. With both bounds present this is a
    /// single `Between` atom; with one bound it degrades to that bound's
    /// comparison; with neither it is absent.
    #[must_use]
    pub fn int_between(field: &str, low: Option<i64>, high: Option<i64>) -> Option<Self> {
        match (low, high) {
            (Some(low), Some(high)) => Some(Self::Between {
                field: field.to_owned(),
                low: FilterValue::Int(low),
                high: FilterValue::Int(high),
            }),
            (Some(low), None) => Self::int_gte(field, Some(low)),
            (None, Some(high)) => Self::int_lte(field, Some(high)),
            (None, None) => None,
        }
    }

    #[must_use]
    pub fn bool_eq(field: &str, value: Option<bool>) -> Option<Self> {
        Some(Self::Eq {
            field: field.to_owned(),
            value: FilterValue::Bool(value?),
        })
    }

    #[must_use]
    pub fn uuid_eq(field: &str, value: Option<Uuid>) -> Option<Self> {
        Some(Self::Eq {
            field: field.to_owned(),
            value: FilterValue::Uuid(value?),
        })
    }

    /// Conjoin the atoms that are present, omitting the absent ones.
    ///
    /// Zero present atoms fold to the universal predicate; a single atom
    /// is returned unwrapped. Conjunct order never changes the matched
    /// row set.
    #[must_use]
    pub fn and_all<I>(atoms: I) -> Self
    where
        I: IntoIterator<Item = Option<Self>>,
    {
        let mut parts: Vec<Self> = atoms.into_iter().flatten().collect();
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Self::And(parts)
        }
    }
}
