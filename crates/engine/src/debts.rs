//! The module contains the `Debt` record and its entity.

use sea_orm::entity::prelude::*;

use crate::{Currency, currencies};

/// A monetary obligation: an amount due at a date, owed by exactly one
/// customer and denominated in exactly one currency.
///
/// The customer reference is non-owning (the customer owns the debt, not the
/// other way around); the currency reference is shared and read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct Debt {
    pub id: i64,
    pub amount: Decimal,
    pub due_date: Date,
    pub customer_id: i64,
    pub currency: Currency,
}

/// Field set for creating or fully replacing a debt. The currency is given
/// by code and the owning customer by identifier; both must resolve to live
/// records at write time.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDebt {
    pub amount: Decimal,
    pub currency_code: String,
    pub due_date: Date,
    pub customer_id: i64,
}

impl Debt {
    pub(crate) fn from_model(model: Model, currency: currencies::Model) -> Self {
        Self {
            id: model.id,
            amount: model.amount,
            due_date: model.due_date,
            customer_id: model.customer_id,
            currency: currency.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "debts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub amount: Decimal,
    pub due_date: Date,
    pub customer_id: i64,
    pub currency_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Customers,
    #[sea_orm(
        belongs_to = "super::currencies::Entity",
        from = "Column::CurrencyId",
        to = "super::currencies::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Currencies,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl Related<super::currencies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Currencies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
