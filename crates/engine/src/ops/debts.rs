//! Debt store operations.
//!
//! Creating or updating a debt resolves the submitted currency code and
//! customer id into live references before anything is written; either
//! lookup failing aborts the whole operation.

use sea_orm::{ActiveValue, QueryFilter, QueryOrder, QuerySelect, prelude::*};

use crate::{Debt, EngineError, NewDebt, PageRequest, ResultEngine, currencies, debts};

use super::{Engine, order};

impl Engine {
    /// Return one page of debts, each with its resolved currency.
    pub async fn debts(&self, page: &PageRequest) -> ResultEngine<Vec<Debt>> {
        let mut query = debts::Entity::find().find_also_related(currencies::Entity);
        if let Some(sort) = &page.sort {
            query = query.order_by(debt_sort_column(&sort.field)?, order(sort.descending));
        }

        let rows = query
            .offset(page.offset())
            .limit(page.size)
            .all(&self.database)
            .await?;

        collect_debts(rows)
    }

    /// Return a single debt.
    pub async fn debt(&self, id: i64) -> ResultEngine<Debt> {
        let (model, currency) = debts::Entity::find_by_id(id)
            .find_also_related(currencies::Entity)
            .one(&self.database)
            .await?
            .ok_or_else(|| debt_not_found(id))?;

        let currency = currency.ok_or_else(|| currency_row_missing(model.currency_id))?;
        Ok(Debt::from_model(model, currency))
    }

    /// Create a debt referencing an existing customer and currency.
    pub async fn create_debt(&self, new: &NewDebt) -> ResultEngine<Debt> {
        let currency = self.currency_by_code(&new.currency_code).await?;
        self.require_customer(new.customer_id).await?;

        let model = debts::ActiveModel {
            id: ActiveValue::NotSet,
            amount: ActiveValue::Set(new.amount),
            due_date: ActiveValue::Set(new.due_date),
            customer_id: ActiveValue::Set(new.customer_id),
            currency_id: ActiveValue::Set(currency.id),
        }
        .insert(&self.database)
        .await?;

        Ok(Debt {
            id: model.id,
            amount: model.amount,
            due_date: model.due_date,
            customer_id: model.customer_id,
            currency,
        })
    }

    /// Overwrite amount, due date, currency and owning customer of an
    /// existing debt, re-resolving both references from the submitted form.
    pub async fn update_debt(&self, id: i64, new: &NewDebt) -> ResultEngine<Debt> {
        let model = debts::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| debt_not_found(id))?;

        let currency = self.currency_by_code(&new.currency_code).await?;
        self.require_customer(new.customer_id).await?;

        let mut active: debts::ActiveModel = model.into();
        active.amount = ActiveValue::Set(new.amount);
        active.due_date = ActiveValue::Set(new.due_date);
        active.customer_id = ActiveValue::Set(new.customer_id);
        active.currency_id = ActiveValue::Set(currency.id);

        let model = active.update(&self.database).await?;
        Ok(Debt {
            id: model.id,
            amount: model.amount,
            due_date: model.due_date,
            customer_id: model.customer_id,
            currency,
        })
    }

    /// Delete a single debt. The owning customer and the currency stay.
    pub async fn delete_debt(&self, id: i64) -> ResultEngine<()> {
        let model = debts::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| debt_not_found(id))?;

        model.delete(&self.database).await?;
        Ok(())
    }

    /// Debts owned by one customer, in insertion order.
    pub(crate) async fn debts_of(&self, customer_id: i64) -> ResultEngine<Vec<Debt>> {
        let rows = debts::Entity::find()
            .find_also_related(currencies::Entity)
            .filter(debts::Column::CustomerId.eq(customer_id))
            .order_by_asc(debts::Column::Id)
            .all(&self.database)
            .await?;

        collect_debts(rows)
    }
}

fn collect_debts(rows: Vec<(debts::Model, Option<currencies::Model>)>) -> ResultEngine<Vec<Debt>> {
    rows.into_iter()
        .map(|(model, currency)| {
            let currency = currency.ok_or_else(|| currency_row_missing(model.currency_id))?;
            Ok(Debt::from_model(model, currency))
        })
        .collect()
}

fn debt_not_found(id: i64) -> EngineError {
    EngineError::KeyNotFound(format!("Debt not found. ID: {id}"))
}

// The FK makes a dangling currency reference impossible in practice; this
// only fires on a corrupted database.
fn currency_row_missing(currency_id: i64) -> EngineError {
    EngineError::KeyNotFound(format!("Currency not found. ID: {currency_id}"))
}

fn debt_sort_column(field: &str) -> ResultEngine<debts::Column> {
    match field {
        "id" => Ok(debts::Column::Id),
        "amount" => Ok(debts::Column::Amount),
        "dueDate" | "due_date" => Ok(debts::Column::DueDate),
        "customerId" | "customer_id" => Ok(debts::Column::CustomerId),
        other => Err(EngineError::InvalidSort(other.to_string())),
    }
}
