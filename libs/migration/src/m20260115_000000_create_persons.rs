use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create persons table. The unique key on email_address backs the
        // domain service's pre-check: a concurrent create that slips past
        // exists_by_email still cannot violate the uniqueness invariant.
        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(pk_uuid(Persons::Id))
                    .col(string(Persons::FullName))
                    .col(
                        ColumnDef::new(Persons::EmailAddress)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(integer(Persons::Age))
                    .col(
                        timestamp_with_time_zone(Persons::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_persons_age")
                    .table(Persons::Table)
                    .col(Persons::Age)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Persons {
    Table,
    Id,
    FullName,
    EmailAddress,
    Age,
    CreatedAt,
}
