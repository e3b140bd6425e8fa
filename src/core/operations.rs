use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::core::traits::{JoinSpec, PageSource, SearchResource};
use crate::errors::QueryError;
use crate::filtering::predicate::Predicate;
use crate::pagination::{PageRequest, PageResult, inferred_total};

/// Fetch one page through a [`PageSource`], counting only when needed.
///
/// The page request is validated before anything touches the source.
/// `fetch_content` runs first; when the content size together with the
/// page bounds already proves the total (short first page, short
/// non-first page with content), `fetch_count` is never invoked.
/// Otherwise it runs exactly once, after the content query, never
/// concurrently with it. The count is not memoized anywhere: a new call
/// makes its own decision.
///
/// # Errors
///
/// [`QueryError::InvalidPageRequest`] for an out-of-contract page
/// request; [`QueryError::Database`] carrying the unchanged `DbErr` when
/// either query fails.
pub async fn fetch_page<S>(
    source: &S,
    predicate: &Predicate,
    join: &S::Join,
    page: &PageRequest,
) -> Result<PageResult<S::Row>, QueryError>
where
    S: PageSource + ?Sized,
{
    page.validate()?;
    let content = source.fetch_content(predicate, join, page).await?;
    let total = match inferred_total(page.offset, page.limit, content.len()) {
        Some(total) => total,
        None => source.fetch_count(predicate, join).await?,
    };
    Ok(PageResult::new(content, page, total))
}

/// Adapts a [`SearchResource`] to the [`PageSource`] port so the trait's
/// `search_page` and the free [`fetch_page`] share one optimizer path.
/// The join shape is baked into the resource's queries, so the port-level
/// join parameter carries nothing here.
pub(crate) struct EntitySource<'db, R> {
    db: &'db DatabaseConnection,
    resource: PhantomData<R>,
}

impl<'db, R> EntitySource<'db, R> {
    pub(crate) const fn new(db: &'db DatabaseConnection) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R> PageSource for EntitySource<'_, R>
where
    R: SearchResource,
{
    type Row = R;
    type Join = JoinSpec;

    async fn fetch_content(
        &self,
        predicate: &Predicate,
        _join: &JoinSpec,
        page: &PageRequest,
    ) -> Result<Vec<R>, DbErr> {
        R::fetch_content(self.db, predicate, page).await
    }

    async fn fetch_count(&self, predicate: &Predicate, _join: &JoinSpec) -> Result<u64, DbErr> {
        R::fetch_count(self.db, predicate).await
    }
}
