use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::flight::FlightRecord;

pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    /// Creates a new instance of [`FlightRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a batch of parsed flight records, returning the saved models
    /// with their store-assigned identifiers.
    pub async fn save_all(
        &self,
        records: Vec<FlightRecord>,
    ) -> Result<Vec<entity::flight::Model>, DbErr> {
        let mut saved = Vec::with_capacity(records.len());

        for record in records {
            let row = entity::flight::ActiveModel {
                registration_id: ActiveValue::Set(record.registration_id),
                date: ActiveValue::Set(record.date),
                time_start: ActiveValue::Set(record.time_start),
                time_end: ActiveValue::Set(record.time_end),
                region: ActiveValue::Set(record.region),
                lat: ActiveValue::Set(record.lat),
                lon: ActiveValue::Set(record.lon),
                flight_type: ActiveValue::Set(record.flight_type),
                purpose: ActiveValue::Set(record.purpose),
                main_reg_number: ActiveValue::Set(record.main_reg_number),
                ..Default::default()
            };

            saved.push(row.insert(self.db).await?);
        }

        Ok(saved)
    }

    /// Returns every persisted flight record.
    pub async fn find_all(&self) -> Result<Vec<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find().all(self.db).await
    }
}
