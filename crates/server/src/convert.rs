//! Conversion from engine records to wire transfer objects.
//!
//! Pure mapping functions: sources are borrowed and never mutated, so the
//! converters are safe to call repeatedly and concurrently on shared data.

use api_types::currency::CurrencyData;
use api_types::customer::CustomerData;
use api_types::debt::DebtData;
use engine::{Currency, Customer, Debt};

pub(crate) fn currency_data(currency: &Currency) -> CurrencyData {
    CurrencyData {
        id: currency.id,
        name: currency.name.clone(),
        code: currency.code.clone(),
        symbol: currency.symbol.clone(),
    }
}

/// The owning customer is flattened to its identifier; expanding it back
/// would recurse into the debt list again.
pub(crate) fn debt_data(debt: &Debt) -> DebtData {
    DebtData {
        id: debt.id,
        amount: debt.amount,
        due_date: debt.due_date,
        customer_id: debt.customer_id,
        currency: currency_data(&debt.currency),
    }
}

/// The password hash stays behind; owned debts are expanded inline.
pub(crate) fn customer_data(customer: &Customer) -> CustomerData {
    CustomerData {
        id: customer.id,
        name: customer.name.clone(),
        surname: customer.surname.clone(),
        country: customer.country.clone(),
        email: customer.email.clone(),
        debts: customer.debts.iter().map(debt_data).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn euro() -> Currency {
        Currency {
            id: 1,
            name: "Euro".to_string(),
            code: "EUR".to_string(),
            symbol: "€".to_string(),
        }
    }

    fn sample_customer() -> Customer {
        Customer {
            id: 7,
            name: "customer".to_string(),
            surname: "surname".to_string(),
            country: "country".to_string(),
            email: "random@test.com".to_string(),
            password: "$argon2id$hash".to_string(),
            debts: vec![Debt {
                id: 3,
                amount: Decimal::new(10055, 2),
                due_date: NaiveDate::from_ymd_opt(2022, 2, 15).unwrap(),
                customer_id: 7,
                currency: euro(),
            }],
        }
    }

    #[test]
    fn currency_maps_field_by_field() {
        let data = currency_data(&euro());

        assert_eq!(data.id, 1);
        assert_eq!(data.name, "Euro");
        assert_eq!(data.code, "EUR");
        assert_eq!(data.symbol, "€");
    }

    #[test]
    fn debt_keeps_customer_id_only_and_expands_currency() {
        let customer = sample_customer();
        let data = debt_data(&customer.debts[0]);

        assert_eq!(data.id, 3);
        assert_eq!(data.amount, Decimal::new(10055, 2));
        assert_eq!(data.due_date, NaiveDate::from_ymd_opt(2022, 2, 15).unwrap());
        assert_eq!(data.customer_id, 7);
        assert_eq!(data.currency, currency_data(&euro()));
    }

    #[test]
    fn customer_excludes_password_and_nests_debts() {
        let customer = sample_customer();
        let data = customer_data(&customer);

        assert_eq!(data.id, 7);
        assert_eq!(data.email, "random@test.com");
        assert_eq!(data.debts.len(), 1);
        assert_eq!(data.debts[0].customer_id, 7);

        // No password field exists on the wire shape at all.
        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn conversion_leaves_the_source_untouched() {
        let customer = sample_customer();
        let _ = customer_data(&customer);
        let again = customer_data(&customer);

        assert_eq!(customer, sample_customer());
        assert_eq!(again.debts.len(), 1);
    }
}
