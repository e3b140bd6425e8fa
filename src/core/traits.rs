use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::core::operations::{EntitySource, fetch_page};
use crate::errors::QueryError;
use crate::filtering::conditions::predicate_condition;
use crate::filtering::parser::FieldKind;
use crate::filtering::predicate::Predicate;
use crate::filtering::sort::resolve_sort;
use crate::pagination::{PageRequest, PageResult};

/// Join shape shared by a resource's content and count queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinSpec {
    /// Primary entity only.
    #[default]
    Primary,
    /// Left-join the related entity; rows without a match survive with
    /// null related fields.
    LeftRelated,
}

impl JoinSpec {
    #[must_use]
    pub const fn includes_related(self) -> bool {
        matches!(self, Self::LeftRelated)
    }
}

/// The query-execution port: the two capabilities the pagination
/// optimizer needs from a persistence layer.
///
/// `fetch_content` returns at most `page.limit` rows starting at
/// `page.offset`, already joined and projected. `fetch_count` returns
/// the exact number of rows matching the predicate over the same logical
/// join shape; a cheaper shape is fine when it is provably
/// count-equivalent (a left join that neither filters nor duplicates
/// rows can be dropped for counting). Both must treat the universal
/// predicate as matching every row, and neither may apply the page
/// bounds to the count.
///
/// [`fetch_page`] drives this port and only invokes `fetch_count` when
/// the total cannot be read off the content itself.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Row: Send;
    type Join: Send + Sync;

    async fn fetch_content(
        &self,
        predicate: &Predicate,
        join: &Self::Join,
        page: &PageRequest,
    ) -> Result<Vec<Self::Row>, DbErr>;

    async fn fetch_count(&self, predicate: &Predicate, join: &Self::Join) -> Result<u64, DbErr>;
}

/// A searchable, pageable resource bound to a Sea-ORM entity.
///
/// Implementors declare which fields the filter parameter may address
/// and which columns are sortable; the default queries cover a plain
/// single-entity resource. A resource projected across a left
/// association overrides `fetch_content` (typically
/// `find_also_related` + [`crate::projection::project_rows`]) and, when
/// the association can filter rows, `fetch_count` with the same join
/// shape.
#[async_trait]
pub trait SearchResource: Sized + Send + Sync
where
    Self::EntityType: EntityTrait + Sync,
    <Self::EntityType as EntityTrait>::Model: Send + Sync,
    Self: From<<Self::EntityType as EntityTrait>::Model>,
{
    type EntityType: EntityTrait;
    type ColumnType: ColumnTrait + Copy + Send + Sync;

    const RESOURCE_NAME_SINGULAR: &'static str;
    const RESOURCE_NAME_PLURAL: &'static str;

    /// Fields the filter parameter may constrain, with the value type
    /// each one expects. Dotted names address joined columns.
    fn filterable_fields() -> Vec<(&'static str, FieldKind)>;

    /// Columns the sort parameter may address.
    fn sortable_columns() -> Vec<(&'static str, Self::ColumnType)> {
        vec![]
    }

    /// Column used when no sort is requested, and appended as the stable
    /// tie-break behind every requested sort.
    fn default_sort_column() -> Self::ColumnType;

    /// Content query: one page of projected rows.
    async fn fetch_content(
        db: &DatabaseConnection,
        predicate: &Predicate,
        page: &PageRequest,
    ) -> Result<Vec<Self>, DbErr> {
        let mut query = Self::EntityType::find().filter(predicate_condition(predicate));
        for (column, direction) in resolve_sort(
            &page.sort,
            &Self::sortable_columns(),
            Self::default_sort_column(),
        ) {
            query = query.order_by(column, direction);
        }
        let models = query
            .offset(page.offset)
            .limit(page.limit)
            .all(db)
            .await?;
        Ok(models.into_iter().map(Self::from).collect())
    }

    /// Count query: total matching rows, unbounded by the page. The
    /// default counts over the bare entity, the count-equivalent shape
    /// for resources whose joins neither filter nor duplicate rows.
    async fn fetch_count(db: &DatabaseConnection, predicate: &Predicate) -> Result<u64, DbErr> {
        let query = Self::EntityType::find().filter(predicate_condition(predicate));
        PaginatorTrait::count(query, db).await
    }

    /// Run one full search: validate the page request, fetch the content
    /// page, and resolve the total: from the content itself when
    /// possible, through `fetch_count` otherwise.
    ///
    /// # Errors
    ///
    /// [`QueryError::InvalidPageRequest`] for an out-of-contract page
    /// request (no query is run), [`QueryError::Database`] for a failed
    /// content or count query.
    async fn search_page(
        db: &DatabaseConnection,
        predicate: &Predicate,
        page: &PageRequest,
    ) -> Result<PageResult<Self>, QueryError> {
        fetch_page(
            &EntitySource::<Self>::new(db),
            predicate,
            &JoinSpec::default(),
            page,
        )
        .await
    }
}
