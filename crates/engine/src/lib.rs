//! Domain core of the customer/debt service.
//!
//! The engine owns the persistence layer: the sea-orm entities for the three
//! tables (`currencies`, `customers`, `debts`) live next to their domain
//! structs, and [`Engine`] exposes the store operations the HTTP layer calls.
//! Every read and write goes straight to the database; there is no in-process
//! cache.

pub use currencies::Currency;
pub use customers::{Customer, NewCustomer};
pub use debts::{Debt, NewDebt};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use pagination::{PageRequest, Sort};

mod currencies;
mod customers;
mod debts;
mod error;
mod ops;
mod pagination;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
