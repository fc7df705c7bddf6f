//! Customer store operations.

use sea_orm::{ActiveValue, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*};

use crate::{Customer, EngineError, NewCustomer, PageRequest, ResultEngine, customers, debts, util};

use super::{Engine, order, with_tx};

impl Engine {
    /// Return one page of customers, each with its eagerly loaded debts.
    pub async fn customers(&self, page: &PageRequest) -> ResultEngine<Vec<Customer>> {
        let mut query = customers::Entity::find();
        if let Some(sort) = &page.sort {
            query = query.order_by(customer_sort_column(&sort.field)?, order(sort.descending));
        }

        let models = query
            .offset(page.offset())
            .limit(page.size)
            .all(&self.database)
            .await?;

        let mut out = Vec::with_capacity(models.len());
        for model in models {
            let debts = self.debts_of(model.id).await?;
            out.push(Customer::from_model(model, debts));
        }
        Ok(out)
    }

    /// Return a single customer with its debts.
    pub async fn customer(&self, id: i64) -> ResultEngine<Customer> {
        let model = self.require_customer(id).await?;
        let debts = self.debts_of(id).await?;
        Ok(Customer::from_model(model, debts))
    }

    /// Create a customer after checking the email is not taken yet.
    ///
    /// The submitted password is hashed before it is persisted; the new
    /// record starts with an empty debt collection.
    pub async fn create_customer(&self, new: &NewCustomer) -> ResultEngine<Customer> {
        let taken = customers::Entity::find()
            .filter(customers::Column::Email.eq(&new.email))
            .one(&self.database)
            .await?
            .is_some();
        if taken {
            return Err(EngineError::ExistingKey(format!(
                "Customer with email {} already exists",
                new.email
            )));
        }

        let model = customers::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(new.name.clone()),
            surname: ActiveValue::Set(new.surname.clone()),
            country: ActiveValue::Set(new.country.clone()),
            email: ActiveValue::Set(new.email.clone()),
            password: ActiveValue::Set(util::hash_password(&new.password)?),
        }
        .insert(&self.database)
        .await?;

        Ok(Customer::from_model(model, Vec::new()))
    }

    /// Overwrite every field of an existing customer with the submitted
    /// values.
    ///
    /// The password is re-hashed even when resubmitted unchanged, and the
    /// email is not re-checked against other customers on this path.
    pub async fn update_customer(&self, id: i64, new: &NewCustomer) -> ResultEngine<Customer> {
        let mut active: customers::ActiveModel = self.require_customer(id).await?.into();
        active.name = ActiveValue::Set(new.name.clone());
        active.surname = ActiveValue::Set(new.surname.clone());
        active.country = ActiveValue::Set(new.country.clone());
        active.email = ActiveValue::Set(new.email.clone());
        active.password = ActiveValue::Set(util::hash_password(&new.password)?);

        let model = active.update(&self.database).await?;
        let debts = self.debts_of(id).await?;
        Ok(Customer::from_model(model, debts))
    }

    /// Delete a customer together with every debt it owns.
    pub async fn delete_customer(&self, id: i64) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let model = customers::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| customer_not_found(id))?;

            debts::Entity::delete_many()
                .filter(debts::Column::CustomerId.eq(id))
                .exec(&db_tx)
                .await?;
            model.delete(&db_tx).await?;

            Ok(())
        })
    }

    pub(crate) async fn require_customer(&self, id: i64) -> ResultEngine<customers::Model> {
        customers::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| customer_not_found(id))
    }
}

fn customer_not_found(id: i64) -> EngineError {
    EngineError::KeyNotFound(format!("Customer not found. ID: {id}"))
}

fn customer_sort_column(field: &str) -> ResultEngine<customers::Column> {
    match field {
        "id" => Ok(customers::Column::Id),
        "name" => Ok(customers::Column::Name),
        "surname" => Ok(customers::Column::Surname),
        "country" => Ok(customers::Column::Country),
        "email" => Ok(customers::Column::Email),
        other => Err(EngineError::InvalidSort(other.to_string())),
    }
}
