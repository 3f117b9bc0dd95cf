use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260212_000001_create_foods_table::Food,
    m20260212_000005_create_constellations_table::Constellation,
};

static PK_CONSTELLATION_ITEMS: &str = "pk_constellation_items";
static FK_CONSTELLATION_ITEMS_FOOD: &str = "fk_constellation_items_food";
static FK_CONSTELLATION_ITEMS_CONSTELLATION: &str = "fk_constellation_items_constellation";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConstellationItem::Table)
                    .if_not_exists()
                    .col(string(ConstellationItem::Food))
                    .col(string(ConstellationItem::Constellation))
                    .primary_key(
                        Index::create()
                            .name(PK_CONSTELLATION_ITEMS)
                            .col(ConstellationItem::Food)
                            .col(ConstellationItem::Constellation),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONSTELLATION_ITEMS_FOOD)
                            .from(ConstellationItem::Table, ConstellationItem::Food)
                            .to(Food::Table, Food::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONSTELLATION_ITEMS_CONSTELLATION)
                            .from(ConstellationItem::Table, ConstellationItem::Constellation)
                            .to(Constellation::Table, Constellation::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConstellationItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ConstellationItem {
    #[sea_orm(iden = "constellation_items")]
    Table,
    Food,
    Constellation,
}
