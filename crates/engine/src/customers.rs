//! The module contains the `Customer` record and its entity.

use sea_orm::entity::prelude::*;

use crate::Debt;

/// A person tracked by the service, owning zero or more debts.
///
/// The customer is the sole owner of its debt collection: deleting the
/// customer deletes every owned debt. `password` holds the Argon2id hash
/// produced at write time; the clear text is never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub country: String,
    pub email: String,
    pub password: String,
    pub debts: Vec<Debt>,
}

/// Field set for creating or fully replacing a customer.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub surname: String,
    pub country: String,
    pub email: String,
    pub password: String,
}

impl Customer {
    pub(crate) fn from_model(model: Model, debts: Vec<Debt>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            surname: model.surname,
            country: model.country,
            email: model.email,
            password: model.password,
            debts,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub country: String,
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::debts::Entity")]
    Debts,
}

impl Related<super::debts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Debts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
