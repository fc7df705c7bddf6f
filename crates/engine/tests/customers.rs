use sea_orm::Database;

use engine::{Engine, EngineError, NewCustomer, PageRequest, Sort};
use migration::MigratorTrait;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

fn customer_form(email: &str) -> NewCustomer {
    NewCustomer {
        name: "customer".to_string(),
        surname: "surname".to_string(),
        country: "country".to_string(),
        email: email.to_string(),
        password: "password".to_string(),
    }
}

#[tokio::test]
async fn create_assigns_id_and_hashes_password() {
    let engine = engine_with_db().await;

    let customer = engine
        .create_customer(&customer_form("random@test.com"))
        .await
        .unwrap();

    assert_eq!(customer.name, "customer");
    assert_eq!(customer.surname, "surname");
    assert_eq!(customer.country, "country");
    assert_eq!(customer.email, "random@test.com");
    assert!(customer.debts.is_empty());
    assert_ne!(customer.password, "password");
    assert!(customer.password.starts_with("$argon2id$"));
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let engine = engine_with_db().await;

    engine
        .create_customer(&customer_form("random@test.com"))
        .await
        .unwrap();
    let err = engine
        .create_customer(&customer_form("random@test.com"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        EngineError::ExistingKey(
            "Customer with email random@test.com already exists".to_string()
        )
    );

    let customers = engine.customers(&PageRequest::default()).await.unwrap();
    assert_eq!(customers.len(), 1);
}

#[tokio::test]
async fn absent_id_is_not_found() {
    let engine = engine_with_db().await;
    let not_found = EngineError::KeyNotFound("Customer not found. ID: 42".to_string());

    assert_eq!(engine.customer(42).await.unwrap_err(), not_found);
    assert_eq!(
        engine
            .update_customer(42, &customer_form("random@test.com"))
            .await
            .unwrap_err(),
        not_found
    );
    assert_eq!(engine.delete_customer(42).await.unwrap_err(), not_found);
}

#[tokio::test]
async fn update_overwrites_every_field() {
    let engine = engine_with_db().await;
    let created = engine
        .create_customer(&customer_form("random@test.com"))
        .await
        .unwrap();

    let updated = engine
        .update_customer(
            created.id,
            &NewCustomer {
                name: "other".to_string(),
                surname: "person".to_string(),
                country: "elsewhere".to_string(),
                email: "other@test.com".to_string(),
                password: "password".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "other");
    assert_eq!(updated.surname, "person");
    assert_eq!(updated.country, "elsewhere");
    assert_eq!(updated.email, "other@test.com");
    // Same clear text, but re-hashed with a fresh salt.
    assert_ne!(updated.password, created.password);
}

#[tokio::test]
async fn delete_cascades_to_owned_debts() {
    let engine = engine_with_db().await;
    engine.seed_currencies().await.unwrap();
    let customer = engine
        .create_customer(&customer_form("random@test.com"))
        .await
        .unwrap();

    let first = engine
        .create_debt(&engine::NewDebt {
            amount: rust_decimal::Decimal::new(10055, 2),
            currency_code: "EUR".to_string(),
            due_date: chrono::NaiveDate::from_ymd_opt(2022, 2, 15).unwrap(),
            customer_id: customer.id,
        })
        .await
        .unwrap();
    let second = engine
        .create_debt(&engine::NewDebt {
            amount: rust_decimal::Decimal::new(500, 2),
            currency_code: "USD".to_string(),
            due_date: chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            customer_id: customer.id,
        })
        .await
        .unwrap();

    engine.delete_customer(customer.id).await.unwrap();

    for id in [first.id, second.id] {
        assert_eq!(
            engine.debt(id).await.unwrap_err(),
            EngineError::KeyNotFound(format!("Debt not found. ID: {id}"))
        );
    }
    assert!(engine.debts(&PageRequest::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn pagination_returns_requested_window() {
    let engine = engine_with_db().await;
    for i in 0..20 {
        engine
            .create_customer(&customer_form(&format!("customer{i}@test.com")))
            .await
            .unwrap();
    }

    let page = engine
        .customers(&PageRequest {
            page: 1,
            size: 10,
            sort: None,
        })
        .await
        .unwrap();

    assert_eq!(page.len(), 10);
    // Insertion order: the second page holds rows 11-20.
    assert_eq!(page[0].email, "customer10@test.com");
    assert_eq!(page[9].email, "customer19@test.com");
}

#[tokio::test]
async fn sort_by_id_descending_reverses_order() {
    let engine = engine_with_db().await;
    for i in 0..3 {
        engine
            .create_customer(&customer_form(&format!("customer{i}@test.com")))
            .await
            .unwrap();
    }

    let page = engine
        .customers(&PageRequest {
            page: 0,
            size: 20,
            sort: Some(Sort {
                field: "id".to_string(),
                descending: true,
            }),
        })
        .await
        .unwrap();

    assert_eq!(page[0].email, "customer2@test.com");
    assert_eq!(page[2].email, "customer0@test.com");
}

#[tokio::test]
async fn unknown_sort_field_is_rejected() {
    let engine = engine_with_db().await;

    let err = engine
        .customers(&PageRequest {
            page: 0,
            size: 20,
            sort: Some(Sort {
                field: "shoe_size".to_string(),
                descending: false,
            }),
        })
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::InvalidSort("shoe_size".to_string()));
}
