use sea_orm::entity::prelude::*;

/// Many-to-many membership between foods and constellations.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "constellation_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub food: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub constellation: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::food::Entity",
        from = "Column::Food",
        to = "super::food::Column::Id"
    )]
    Food,
    #[sea_orm(
        belongs_to = "super::constellation::Entity",
        from = "Column::Constellation",
        to = "super::constellation::Column::Id"
    )]
    Constellation,
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Food.def()
    }
}

impl Related<super::constellation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Constellation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
