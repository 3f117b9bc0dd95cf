use sea_orm_migration::{prelude::*, schema::*};

static IDX_FOODS_FOODNAME: &str = "idx_foods_foodname";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Food::Table)
                    .if_not_exists()
                    .col(string(Food::Id).primary_key())
                    .col(string_uniq(Food::Foodname))
                    .col(integer(Food::Rarity))
                    .col(string(Food::Origin))
                    .col(text(Food::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FOODS_FOODNAME)
                    .table(Food::Table)
                    .col(Food::Foodname)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FOODS_FOODNAME)
                    .table(Food::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Food::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Food {
    #[sea_orm(iden = "foods")]
    Table,
    Id,
    Foodname,
    Rarity,
    Origin,
    Description,
}
