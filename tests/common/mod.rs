use axum::Router;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;
use uuid::Uuid;

pub mod member_entity;

use member_entity::{MemberTeamRow, member, team};

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seed the canonical fixture: teamA holds member1 (age 10) and member2
/// (age 20); teamB holds member3 (age 30) and member4 (age 40).
pub async fn seed_members(db: &DatabaseConnection) -> Result<(Uuid, Uuid), DbErr> {
    let team_a = team::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("teamA".to_owned()),
    }
    .insert(db)
    .await?;
    let team_b = team::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("teamB".to_owned()),
    }
    .insert(db)
    .await?;

    for (username, age, team_id) in [
        ("member1", 10, team_a.id),
        ("member2", 20, team_a.id),
        ("member3", 30, team_b.id),
        ("member4", 40, team_b.id),
    ] {
        member::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username.to_owned()),
            age: Set(age),
            team_id: Set(Some(team_id)),
        }
        .insert(db)
        .await?;
    }

    Ok((team_a.id, team_b.id))
}

pub fn setup_member_app(db: &DatabaseConnection) -> Router {
    pagecrate::routes::list_router::<MemberTeamRow>("/members", db)
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateTeamTable), Box::new(CreateMemberTable)]
    }
}

pub struct CreateTeamTable;

#[async_trait::async_trait]
impl MigrationName for CreateTeamTable {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_team_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateTeamTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(TeamTable)
            .if_not_exists()
            .col(
                ColumnDef::new(TeamColumn::Id)
                    .uuid()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(TeamColumn::Name).string().not_null())
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamTable).to_owned())
            .await?;
        Ok(())
    }
}

pub struct CreateMemberTable;

#[async_trait::async_trait]
impl MigrationName for CreateMemberTable {
    fn name(&self) -> &'static str {
        "m20240101_000002_create_member_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateMemberTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(MemberTable)
            .if_not_exists()
            .col(
                ColumnDef::new(MemberColumn::Id)
                    .uuid()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(MemberColumn::Username).string().not_null())
            .col(ColumnDef::new(MemberColumn::Age).integer().not_null())
            .col(ColumnDef::new(MemberColumn::TeamId).uuid().null())
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberTable).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum TeamColumn {
    Id,
    Name,
}

impl Iden for TeamColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::Id => "id",
                Self::Name => "name",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct TeamTable;

impl Iden for TeamTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "teams").unwrap();
    }
}

#[derive(Debug)]
pub enum MemberColumn {
    Id,
    Username,
    Age,
    TeamId,
}

impl Iden for MemberColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::Id => "id",
                Self::Username => "username",
                Self::Age => "age",
                Self::TeamId => "team_id",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct MemberTable;

impl Iden for MemberTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "members").unwrap();
    }
}
