use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod page {
    use super::*;

    /// Pagination query parameters accepted by the list endpoints.
    ///
    /// `page` is 0-based (default 0), `size` defaults to 20, `sort` is a
    /// `field,direction` pair such as `id,desc`. An omitted direction means
    /// ascending.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PageQuery {
        pub page: Option<u64>,
        pub size: Option<u64>,
        pub sort: Option<String>,
    }
}

pub mod currency {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CurrencyData {
        pub id: i64,
        pub name: String,
        pub code: String,
        pub symbol: String,
    }
}

pub mod customer {
    use super::*;

    /// Request body for creating or fully replacing a customer.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CustomerForm {
        pub name: String,
        pub surname: String,
        pub country: String,
        pub email: String,
        pub password: String,
    }

    /// Response body for a customer. The password never appears here; owned
    /// debts are expanded inline.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CustomerData {
        pub id: i64,
        pub name: String,
        pub surname: String,
        pub country: String,
        pub email: String,
        pub debts: Vec<super::debt::DebtData>,
    }
}

pub mod debt {
    use super::*;

    /// Request body for creating or fully replacing a debt.
    ///
    /// `currency` is a 3-character code resolved against the currency store;
    /// `customerId` must name an existing customer.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DebtForm {
        pub amount: Decimal,
        pub currency: String,
        pub due_date: NaiveDate,
        pub customer_id: i64,
    }

    /// Response body for a debt. The owning customer is referenced by id
    /// only; the currency is expanded inline.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DebtData {
        pub id: i64,
        pub amount: Decimal,
        pub due_date: NaiveDate,
        pub customer_id: i64,
        pub currency: super::currency::CurrencyData,
    }
}
