//! Currency store operations.

use sea_orm::{ActiveValue, QueryFilter, prelude::*};

use crate::{Currency, EngineError, ResultEngine, currencies};

use super::Engine;

impl Engine {
    /// Insert a new currency and return it with its generated id.
    ///
    /// Code uniqueness is by caller discipline, not a constraint; the
    /// bootstrap path goes through [`Engine::seed_currencies`] instead.
    pub async fn create_currency(
        &self,
        name: &str,
        code: &str,
        symbol: &str,
    ) -> ResultEngine<Currency> {
        let model = currencies::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name.to_string()),
            code: ActiveValue::Set(code.to_string()),
            symbol: ActiveValue::Set(symbol.to_string()),
        }
        .insert(&self.database)
        .await?;

        Ok(model.into())
    }

    /// Exact-match lookup by code.
    pub async fn currency_by_code(&self, code: &str) -> ResultEngine<Currency> {
        let model = currencies::Entity::find()
            .filter(currencies::Column::Code.eq(code))
            .one(&self.database)
            .await?
            .ok_or_else(|| {
                EngineError::KeyNotFound(format!("Cannot find currency for code: {code}"))
            })?;

        Ok(model.into())
    }

    /// Bootstrap the seed currencies.
    ///
    /// Each row is inserted only when its code is absent, so repeated
    /// startups leave the table unchanged.
    pub async fn seed_currencies(&self) -> ResultEngine<()> {
        for (name, code, symbol) in currencies::SEED {
            let present = currencies::Entity::find()
                .filter(currencies::Column::Code.eq(code))
                .one(&self.database)
                .await?
                .is_some();

            if !present {
                self.create_currency(name, code, symbol).await?;
            }
        }

        Ok(())
    }
}
