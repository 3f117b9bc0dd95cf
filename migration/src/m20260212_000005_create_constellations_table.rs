use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260212_000002_create_users_table::User;

static FK_CONSTELLATIONS_USER: &str = "fk_constellations_user";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Constellation::Table)
                    .if_not_exists()
                    .col(string(Constellation::Id).primary_key())
                    .col(string(Constellation::User))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONSTELLATIONS_USER)
                            .from(Constellation::Table, Constellation::User)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Constellation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Constellation {
    #[sea_orm(iden = "constellations")]
    Table,
    Id,
    User,
}
