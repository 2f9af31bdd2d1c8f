use sea_orm::entity::prelude::*;

/// One parsed flight log entry from the `flights` table.
///
/// Every column besides the key is nullable: the row mapper tolerates
/// per-field parse failures and partial records are persisted as-is.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flights")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub flight_id: i64,
    pub registration_id: Option<i64>,
    pub date: Option<Date>,
    pub time_start: Option<Time>,
    pub time_end: Option<Time>,
    #[sea_orm(column_name = "region_name")]
    pub region: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub flight_type: Option<String>,
    pub purpose: Option<String>,
    pub main_reg_number: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
