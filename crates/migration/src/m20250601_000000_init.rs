//! Initial schema migration - creates all tables from scratch.
//!
//! The complete schema for the customer/debt service:
//!
//! - `currencies`: reference set of monetary units, seeded at bootstrap
//! - `customers`: tracked persons, owners of debts
//! - `debts`: monetary obligations, one owning customer and one currency

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Currencies {
    Table,
    Id,
    Name,
    Code,
    Symbol,
}

#[derive(Iden)]
enum Customers {
    Table,
    Id,
    Name,
    Surname,
    Country,
    Email,
    Password,
}

#[derive(Iden)]
enum Debts {
    Table,
    Id,
    Amount,
    DueDate,
    CustomerId,
    CurrencyId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Currencies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Currencies::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Currencies::Name).string().not_null())
                    .col(ColumnDef::new(Currencies::Code).string().not_null())
                    .col(ColumnDef::new(Currencies::Symbol).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string().not_null())
                    .col(ColumnDef::new(Customers::Surname).string().not_null())
                    .col(ColumnDef::new(Customers::Country).string().not_null())
                    // Uniqueness is checked at the application layer on the
                    // create path only, matching the store contract.
                    .col(ColumnDef::new(Customers::Email).string().not_null())
                    .col(ColumnDef::new(Customers::Password).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Debts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Debts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Debts::Amount)
                            .decimal_len(16, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Debts::DueDate).date().not_null())
                    .col(ColumnDef::new(Debts::CustomerId).big_integer().not_null())
                    .col(ColumnDef::new(Debts::CurrencyId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-debts-customer_id")
                            .from(Debts::Table, Debts::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-debts-currency_id")
                            .from(Debts::Table, Debts::CurrencyId)
                            .to(Currencies::Table, Currencies::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Debts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Currencies::Table).to_owned())
            .await
    }
}
