mod helpers;

use axum::http::{Method, StatusCode};
use helpers::{assert_redirect, get, json, request, setup_test_app};

#[tokio::test]
async fn member_cannot_edit_someone_elses_profile() -> anyhow::Result<()> {
    let app = setup_test_app().await?;
    let taro = app.create_member("taro").await?;
    let hanako = app.create_member("hanako").await?;
    let cookie = app.member_cookie(taro);

    let response = app
        .send(get(&format!("/user/{hanako}/edit"), Some(&cookie)))
        .await;
    assert_redirect(&response, "/user");
    assert_eq!(json(response).await["error_message"], "unauthorized access");

    let response = app
        .send(get(&format!("/user/{taro}/edit"), Some(&cookie)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn profile_update_by_owner_is_saved() -> anyhow::Result<()> {
    let app = setup_test_app().await?;
    let taro = app.create_member("taro").await?;
    let hanako = app.create_member("hanako").await?;
    let cookie = app.member_cookie(taro);

    let form = [
        ("name", "Taro Yamada"),
        ("kana", "ヤマダ タロウ"),
        ("email", "Taro.Yamada@Example.com"),
        ("postal_code", "4600002"),
        ("address", "Nagoya, Higashi-ku"),
        ("phone_number", "09012345678"),
        ("birthday", ""),
        ("occupation", "engineer"),
    ];

    let response = app
        .send(request(Method::PUT, &format!("/user/{hanako}"), Some(&cookie), &form))
        .await;
    assert_redirect(&response, "/user");
    assert_eq!(json(response).await["error_message"], "unauthorized access");

    let response = app
        .send(request(Method::PUT, &format!("/user/{taro}"), Some(&cookie), &form))
        .await;
    assert_redirect(&response, "/user");
    assert_eq!(json(response).await["flash_message"], "profile updated");

    let user = nagoyameshi::query::user::find(&app.pool, taro).await?.unwrap();
    assert_eq!(user.email, "taro.yamada@example.com");
    assert_eq!(user.birthday, None);
    assert_eq!(user.occupation.as_deref(), Some("engineer"));

    let hanako = nagoyameshi::query::user::find(&app.pool, hanako).await?.unwrap();
    assert_eq!(hanako.name, "hanako");

    Ok(())
}

#[tokio::test]
async fn profile_update_rejects_taken_email_and_bad_fields() -> anyhow::Result<()> {
    let app = setup_test_app().await?;
    let taro = app.create_member("taro").await?;
    app.create_member("hanako").await?;
    let cookie = app.member_cookie(taro);

    let mut form = vec![
        ("name", "Taro"),
        ("kana", "タロウ"),
        ("email", "hanako@nagoyameshi.localhost"),
        ("postal_code", "4600002"),
        ("address", "Nagoya"),
        ("phone_number", "0521234567"),
    ];

    let response = app
        .send(request(Method::PUT, &format!("/user/{taro}"), Some(&cookie), &form))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    form[2] = ("email", "taro@nagoyameshi.localhost");
    form[3] = ("postal_code", "460-0002");
    let response = app
        .send(request(Method::PUT, &format!("/user/{taro}"), Some(&cookie), &form))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json(response).await;
    assert!(body["errors"]["postal_code"].is_array());

    Ok(())
}

#[tokio::test]
async fn reservation_is_canceled_only_by_its_owner() -> anyhow::Result<()> {
    let app = setup_test_app().await?;
    let restaurant = app.create_restaurant("Yabaton").await?;
    let taro = app.create_subscriber("taro").await?;
    let hanako = app.create_subscriber("hanako").await?;

    let response = app
        .send(request(
            Method::POST,
            &format!("/restaurants/{restaurant}/reservations"),
            Some(&app.member_cookie(taro)),
            &[
                ("reservation_date", "2030-04-01"),
                ("reservation_time", "19:00"),
                ("number_of_people", "4"),
            ],
        ))
        .await;
    assert_redirect(&response, "/reservations");

    let page = nagoyameshi::query::reservation::list_by_user(&app.pool, taro, 1).await?;
    assert_eq!(page.total, 1);
    let reservation = &page.items[0];
    assert_eq!(reservation.reserved_at(), "2030-04-01 19:00");

    let response = app
        .send(request(
            Method::DELETE,
            &format!("/reservations/{}", reservation.id),
            Some(&app.member_cookie(hanako)),
            &[],
        ))
        .await;
    assert_redirect(&response, "/reservations");
    assert_eq!(json(response).await["error_message"], "unauthorized access");
    assert!(
        nagoyameshi::query::reservation::find(&app.pool, reservation.id)
            .await?
            .is_some()
    );

    let response = app
        .send(request(
            Method::DELETE,
            &format!("/reservations/{}", reservation.id),
            Some(&app.member_cookie(taro)),
            &[],
        ))
        .await;
    assert_redirect(&response, "/reservations");
    assert_eq!(json(response).await["flash_message"], "reservation canceled");
    assert!(
        nagoyameshi::query::reservation::find(&app.pool, reservation.id)
            .await?
            .is_none()
    );

    Ok(())
}
