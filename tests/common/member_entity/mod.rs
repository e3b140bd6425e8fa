use async_trait::async_trait;
use pagecrate::filtering::{predicate_condition, resolve_sort};
use pagecrate::projection::project_rows;
use pagecrate::{FieldKind, FromJoined, PageRequest, Predicate, SearchResource};
use sea_orm::{
    DatabaseConnection, DbErr, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, entity::prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod team {
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "teams")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::member::Entity")]
        Members,
    }

    impl Related<super::member::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Members.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod member {
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "members")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub username: String,
        pub age: i32,
        pub team_id: Option<Uuid>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::team::Entity",
            from = "Column::TeamId",
            to = "super::team::Column::Id"
        )]
        Team,
    }

    impl Related<super::team::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Team.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Flat member-with-team projection; team fields are null for members
/// without a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberTeamRow {
    pub member_id: Uuid,
    pub username: String,
    pub age: i32,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
}

impl FromJoined for MemberTeamRow {
    type Primary = member::Model;
    type Related = team::Model;

    fn from_joined(primary: member::Model, related: Option<team::Model>) -> Self {
        Self {
            member_id: primary.id,
            username: primary.username,
            age: primary.age,
            team_id: related.as_ref().map(|t| t.id),
            team_name: related.map(|t| t.name),
        }
    }
}

impl From<member::Model> for MemberTeamRow {
    fn from(model: member::Model) -> Self {
        Self::from_joined(model, None)
    }
}

/// The caller-side search condition: every field independently optional.
#[derive(Debug, Clone, Default)]
pub struct MemberSearch {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_gte: Option<i64>,
    pub age_lte: Option<i64>,
}

impl MemberSearch {
    pub fn predicate(&self) -> Predicate {
        Predicate::and_all([
            Predicate::text_eq("username", self.username.as_deref()),
            Predicate::text_eq("teams.name", self.team_name.as_deref()),
            Predicate::int_gte("age", self.age_gte),
            Predicate::int_lte("age", self.age_lte),
        ])
    }
}

#[async_trait]
impl SearchResource for MemberTeamRow {
    type EntityType = member::Entity;
    type ColumnType = member::Column;

    const RESOURCE_NAME_SINGULAR: &'static str = "member";
    const RESOURCE_NAME_PLURAL: &'static str = "members";

    fn filterable_fields() -> Vec<(&'static str, FieldKind)> {
        vec![
            ("username", FieldKind::Text),
            ("age", FieldKind::Integer),
            ("teams.name", FieldKind::Text),
        ]
    }

    fn sortable_columns() -> Vec<(&'static str, Self::ColumnType)> {
        vec![
            ("username", member::Column::Username),
            ("age", member::Column::Age),
        ]
    }

    fn default_sort_column() -> Self::ColumnType {
        member::Column::Username
    }

    async fn fetch_content(
        db: &DatabaseConnection,
        predicate: &Predicate,
        page: &PageRequest,
    ) -> Result<Vec<Self>, DbErr> {
        let mut query = member::Entity::find()
            .find_also_related(team::Entity)
            .filter(predicate_condition(predicate));
        for (column, direction) in resolve_sort(
            &page.sort,
            &Self::sortable_columns(),
            Self::default_sort_column(),
        ) {
            query = query.order_by(column, direction);
        }
        let rows = query.offset(page.offset).limit(page.limit).all(db).await?;
        Ok(project_rows(rows))
    }

    async fn fetch_count(db: &DatabaseConnection, predicate: &Predicate) -> Result<u64, DbErr> {
        // The team-name filter lives on the joined table, so the count
        // keeps the same join shape as the content query.
        let query = member::Entity::find()
            .join(JoinType::LeftJoin, member::Relation::Team.def())
            .filter(predicate_condition(predicate));
        PaginatorTrait::count(query, db).await
    }
}
