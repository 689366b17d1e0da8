use nagoyameshi_access::SubscriptionStatus;
use nagoyameshi_billing::{BillingError, SubscriptionProvider};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_subscribe_then_cancel() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let john = helpers::create_member(&state, "john").await?;

    assert!(!state.billing.is_active(john).await?);

    let subscription = state.billing.create(john, "pm_card_visa").await?;
    assert!(subscription.is_active());
    assert_eq!(subscription.name, "premium_plan");
    assert!(state.billing.is_active(john).await?);

    state.billing.cancel(john).await?;
    assert!(!state.billing.is_active(john).await?);
    assert!(state.billing.current(john).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_subscribe_twice() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let john = helpers::create_member(&state, "john").await?;

    state.billing.create(john, "pm_card_visa").await?;
    let resp = state.billing.create(john, "pm_card_visa").await;

    assert!(matches!(resp, Err(BillingError::AlreadySubscribed)));

    Ok(())
}

#[tokio::test]
async fn test_resubscribe_after_cancel() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let john = helpers::create_member(&state, "john").await?;

    state.billing.create(john, "pm_card_visa").await?;
    state.billing.cancel(john).await?;
    state.billing.create(john, "pm_card_mastercard").await?;

    let current = state.billing.current(john).await?.unwrap();
    assert_eq!(current.payment_method, "pm_card_mastercard");

    Ok(())
}

#[tokio::test]
async fn test_update_payment_method() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let john = helpers::create_member(&state, "john").await?;

    let resp = state.billing.update_payment_method(john, "pm_card_amex").await;
    assert!(matches!(resp, Err(BillingError::NotSubscribed)));

    state.billing.create(john, "pm_card_visa").await?;
    state.billing.update_payment_method(john, "pm_card_amex").await?;

    let current = state.billing.current(john).await?.unwrap();
    assert_eq!(current.payment_method, "pm_card_amex");

    let resp = state.billing.update_payment_method(john, "  ").await;
    assert!(matches!(resp, Err(BillingError::MissingPaymentMethod)));

    Ok(())
}

#[tokio::test]
async fn test_cancel_without_subscription() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let john = helpers::create_member(&state, "john").await?;

    let resp = state.billing.cancel(john).await;

    assert!(matches!(resp, Err(BillingError::NotSubscribed)));

    Ok(())
}

#[tokio::test]
async fn test_count_active() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let john = helpers::create_member(&state, "john").await?;
    let jane = helpers::create_member(&state, "jane").await?;
    let albert = helpers::create_member(&state, "albert").await?;

    state.billing.create(john, "pm_card_visa").await?;
    state.billing.create(jane, "pm_card_visa").await?;
    state.billing.create(albert, "pm_card_visa").await?;
    state.billing.cancel(jane).await?;

    assert_eq!(state.billing.count_active().await?, 2);

    Ok(())
}

#[tokio::test]
async fn test_concurrent_subscribe_keeps_one_active() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let john = helpers::create_member(&state, "john").await?;

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let billing = state.billing.clone();
            tokio::spawn(async move { billing.create(john, "pm_card_visa").await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => created += 1,
            Err(BillingError::AlreadySubscribed) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(created, 1);

    let (active,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM subscription WHERE user_id = ? AND status = 'active'",
    )
    .bind(john)
    .fetch_one(&state.pool)
    .await?;
    assert_eq!(active, 1);

    Ok(())
}

#[tokio::test]
async fn test_second_active_row_is_refused_by_the_schema() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let john = helpers::create_member(&state, "john").await?;

    let insert = "INSERT INTO subscription (user_id, name, status, payment_method, created_at) \
                  VALUES (?, 'premium_plan', ?, 'pm_card_visa', 0)";

    sqlx::query(insert).bind(john).bind("canceled").execute(&state.pool).await?;
    sqlx::query(insert).bind(john).bind("canceled").execute(&state.pool).await?;
    sqlx::query(insert).bind(john).bind("active").execute(&state.pool).await?;

    let resp = sqlx::query(insert).bind(john).bind("active").execute(&state.pool).await;
    match resp {
        Err(sqlx::Error::Database(e)) => assert!(e.is_unique_violation()),
        other => panic!("expected a unique violation, got {other:?}"),
    }

    Ok(())
}
