//! Row projection over an optional left association.
//!
//! The content query of a joined resource returns `(primary, related)`
//! pairs where the related side is `None` whenever the association is
//! absent; this is exactly Sea-ORM's `find_also_related` row shape. The
//! projection flattens each pair into the caller's row DTO without
//! dropping rows or reordering them.

/// Builds one flat row DTO from a primary model and its optionally
/// resolved association. Implementations map absent associations to
/// `None`-valued fields, never to a failure.
pub trait FromJoined: Sized {
    type Primary;
    type Related;

    fn from_joined(primary: Self::Primary, related: Option<Self::Related>) -> Self;
}

/// Project fetched `(primary, related)` pairs into row DTOs, preserving
/// the fetch order.
#[must_use]
pub fn project_rows<R>(rows: Vec<(R::Primary, Option<R::Related>)>) -> Vec<R>
where
    R: FromJoined,
{
    rows.into_iter()
        .map(|(primary, related)| R::from_joined(primary, related))
        .collect()
}
