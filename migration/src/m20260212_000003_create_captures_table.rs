use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260212_000001_create_foods_table::Food, m20260212_000002_create_users_table::User,
};

static IDX_CAPTURES_USER: &str = "idx_captures_user";
static IDX_CAPTURES_FOOD: &str = "idx_captures_food";
static FK_CAPTURES_FOOD: &str = "fk_captures_food";
static FK_CAPTURES_USER: &str = "fk_captures_user";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Capture::Table)
                    .if_not_exists()
                    .col(string(Capture::Id).primary_key())
                    .col(string(Capture::Food))
                    .col(timestamp_with_time_zone(Capture::Date))
                    .col(string(Capture::User))
                    .col(string(Capture::ImageUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CAPTURES_FOOD)
                            .from(Capture::Table, Capture::Food)
                            .to(Food::Table, Food::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CAPTURES_USER)
                            .from(Capture::Table, Capture::User)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAPTURES_USER)
                    .table(Capture::Table)
                    .col(Capture::User)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAPTURES_FOOD)
                    .table(Capture::Table)
                    .col(Capture::Food)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAPTURES_USER)
                    .table(Capture::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAPTURES_FOOD)
                    .table(Capture::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Capture::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Capture {
    #[sea_orm(iden = "captures")]
    Table,
    Id,
    Food,
    Date,
    User,
    ImageUrl,
}
