use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260212_000001_create_foods_table::Food, m20260212_000002_create_users_table::User,
};

static PK_FAVORITES: &str = "pk_favorites";
static FK_FAVORITES_FOOD: &str = "fk_favorites_food";
static FK_FAVORITES_USER: &str = "fk_favorites_user";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(string(Favorite::User))
                    .col(string(Favorite::Food))
                    .primary_key(
                        Index::create()
                            .name(PK_FAVORITES)
                            .col(Favorite::User)
                            .col(Favorite::Food),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_FOOD)
                            .from(Favorite::Table, Favorite::Food)
                            .to(Food::Table, Food::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER)
                            .from(Favorite::Table, Favorite::User)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    #[sea_orm(iden = "favorites")]
    Table,
    User,
    Food,
}
