use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flights::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Flights::FlightId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer_null(Flights::RegistrationId))
                    .col(ColumnDef::new(Flights::Date).date().null())
                    .col(ColumnDef::new(Flights::TimeStart).time().null())
                    .col(ColumnDef::new(Flights::TimeEnd).time().null())
                    .col(string_null(Flights::RegionName))
                    .col(double_null(Flights::Lat))
                    .col(double_null(Flights::Lon))
                    .col(ColumnDef::new(Flights::FlightType).string_len(20).null())
                    .col(text_null(Flights::Purpose))
                    .col(
                        ColumnDef::new(Flights::MainRegNumber)
                            .string_len(200)
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flights::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Flights {
    Table,
    FlightId,
    RegistrationId,
    Date,
    TimeStart,
    TimeEnd,
    RegionName,
    Lat,
    Lon,
    FlightType,
    Purpose,
    MainRegNumber,
}
