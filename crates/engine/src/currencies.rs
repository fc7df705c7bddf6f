//! The module contains the `Currency` reference record and its entity.

use sea_orm::entity::prelude::*;

/// A monetary unit: display name, ISO-like 3-character code and symbol.
///
/// Currencies are reference data. The seed set is inserted once at bootstrap
/// and rows are read-only afterwards; many debts may point at the same
/// currency and deleting a debt never touches it.
#[derive(Clone, Debug, PartialEq)]
pub struct Currency {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub symbol: String,
}

/// Seed rows inserted at bootstrap, keyed by code.
pub(crate) const SEED: [(&str, &str, &str); 3] = [
    ("Euro", "EUR", "€"),
    ("Dollar", "USD", "$"),
    ("Lats", "LVL", "Ls"),
];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "currencies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub code: String,
    pub symbol: String,
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

impl From<Model> for Currency {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
            symbol: model.symbol,
        }
    }
}
