mod helpers;

use axum::http::{Method, StatusCode};
use helpers::{assert_redirect, get, json, request, setup_test_app};

#[tokio::test]
async fn subscribe_then_cancel_moves_member_between_tiers() -> anyhow::Result<()> {
    let app = setup_test_app().await?;
    let member = app.create_member("taro").await?;
    let cookie = app.member_cookie(member);

    let response = app.send(get("/reservations", Some(&cookie))).await;
    assert_redirect(&response, "/subscription/create");

    let response = app
        .send(request(
            Method::POST,
            "/subscription",
            Some(&cookie),
            &[("payment_method", "pm_card_visa")],
        ))
        .await;
    assert_redirect(&response, "/");
    assert_eq!(
        json(response).await["flash_message"],
        "subscribed to the premium plan"
    );

    let response = app.send(get("/reservations", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .send(request(
            Method::PATCH,
            "/subscription",
            Some(&cookie),
            &[("payment_method", "pm_card_mastercard")],
        ))
        .await;
    assert_redirect(&response, "/");

    let body = json(app.send(get("/subscription/edit", Some(&cookie))).await).await;
    assert_eq!(body["subscription"]["payment_method"], "pm_card_mastercard");
    assert_eq!(body["subscription"]["status"], "active");

    let response = app
        .send(request(Method::DELETE, "/subscription", Some(&cookie), &[]))
        .await;
    assert_redirect(&response, "/");
    assert_eq!(json(response).await["flash_message"], "premium plan canceled");

    let response = app.send(get("/reservations", Some(&cookie))).await;
    assert_redirect(&response, "/subscription/create");

    let response = app.send(get("/subscription/create", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn subscribing_needs_a_payment_method() -> anyhow::Result<()> {
    let app = setup_test_app().await?;
    let member = app.create_member("taro").await?;
    let cookie = app.member_cookie(member);

    let response = app
        .send(request(
            Method::POST,
            "/subscription",
            Some(&cookie),
            &[("payment_method", "  ")],
        ))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.send(get("/reservations", Some(&cookie))).await;
    assert_redirect(&response, "/subscription/create");

    Ok(())
}

#[tokio::test]
async fn favorites_are_idempotent() -> anyhow::Result<()> {
    let app = setup_test_app().await?;
    let first = app.create_restaurant("Yabaton").await?;
    let second = app.create_restaurant("Atsuta Horaiken").await?;
    let member = app.create_subscriber("taro").await?;
    let cookie = app.member_cookie(member);

    for restaurant in [first, first, second] {
        let response = app
            .send(request(
                Method::POST,
                &format!("/favorites/{restaurant}"),
                Some(&cookie),
                &[],
            ))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let body = json(app.send(get("/favorites", Some(&cookie))).await).await;
    assert_eq!(body["favorites"]["total"], 2);

    let body = json(app.send(get(&format!("/restaurants/{first}"), Some(&cookie))).await).await;
    assert_eq!(body["favorite"], true);

    for _ in 0..2 {
        let response = app
            .send(request(
                Method::DELETE,
                &format!("/favorites/{first}"),
                Some(&cookie),
                &[],
            ))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let body = json(app.send(get("/favorites", Some(&cookie))).await).await;
    assert_eq!(body["favorites"]["total"], 1);
    assert_eq!(body["favorites"]["items"][0]["id"], second);

    Ok(())
}
