#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use nagoyameshi::{
    AppState,
    auth::{Space, generate_token},
    config::{
        BillingConfig, Config, DatabaseConfig, JwtConfig, LoggingConfig, ServerConfig,
    },
};
use nagoyameshi_billing::SubscriptionProvider;
use nagoyameshi_db::table::{Category, RegularHoliday, Restaurant, Review, User};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;
use temp_dir::TempDir;
use tower::ServiceExt;

pub const PASSWORD: &str = "password123";

pub struct TestApp {
    pub dir: TempDir,
    pub pool: SqlitePool,
    pub state: AppState,
    pub router: Router,
}

fn config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_owned(),
            issuer: "nagoyameshi".to_owned(),
            expiration_days: 1,
        },
        logging: LoggingConfig::default(),
        billing: BillingConfig::default(),
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
    let pool = nagoyameshi::create_pool(&url, 1).await?;
    nagoyameshi::migrate(&pool).await?;

    let state = AppState::new(config(url), pool.clone(), pool.clone());
    let router = nagoyameshi::router(state.clone());

    Ok(TestApp {
        dir,
        pool,
        state,
        router,
    })
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub fn member_cookie(&self, id: i64) -> String {
        let token = generate_token(&self.state.config.jwt, Space::Member, id).unwrap();
        format!("{}={token}", Space::Member.cookie_name())
    }

    pub fn admin_cookie(&self, id: i64) -> String {
        let token = generate_token(&self.state.config.jwt, Space::Admin, id).unwrap();
        format!("{}={token}", Space::Admin.cookie_name())
    }

    pub async fn create_member(&self, name: &str) -> anyhow::Result<i64> {
        let password = nagoyameshi::password::hash_password(PASSWORD)?;
        let statement = Query::insert()
            .into_table(User::Table)
            .columns([
                User::Name,
                User::Kana,
                User::Email,
                User::Password,
                User::PostalCode,
                User::Address,
                User::PhoneNumber,
                User::CreatedAt,
            ])
            .values_panic([
                name.into(),
                "テスト".into(),
                format!("{name}@nagoyameshi.localhost").into(),
                password.into(),
                "4600001".into(),
                "Nagoya".into(),
                "0520000000".into(),
                0i64.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(id)
    }

    pub async fn create_subscriber(&self, name: &str) -> anyhow::Result<i64> {
        let id = self.create_member(name).await?;
        self.state.billing().create(id, "pm_card_visa").await?;

        Ok(id)
    }

    pub async fn create_admin(&self, email: &str) -> anyhow::Result<i64> {
        let id = self
            .state
            .command
            .create_admin(nagoyameshi::command::CreateAdminInput {
                email: email.to_owned(),
                password: PASSWORD.to_owned(),
            })
            .await?;

        Ok(id)
    }

    pub async fn create_restaurant(&self, name: &str) -> anyhow::Result<i64> {
        let statement = Query::insert()
            .into_table(Restaurant::Table)
            .columns([
                Restaurant::Name,
                Restaurant::LowestPrice,
                Restaurant::HighestPrice,
                Restaurant::PostalCode,
                Restaurant::Address,
                Restaurant::OpeningTime,
                Restaurant::ClosingTime,
                Restaurant::CreatedAt,
            ])
            .values_panic([
                name.into(),
                1000i64.into(),
                3000i64.into(),
                "4600001".into(),
                "Nagoya, Naka-ku".into(),
                "11:00".into(),
                "22:00".into(),
                0i64.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(id)
    }

    pub async fn create_category(&self, name: &str) -> anyhow::Result<i64> {
        let statement = Query::insert()
            .into_table(Category::Table)
            .columns([Category::Name, Category::CreatedAt])
            .values_panic([name.into(), 0i64.into()])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(id)
    }

    pub async fn create_regular_holiday(&self, day: &str, day_index: i64) -> anyhow::Result<i64> {
        let statement = Query::insert()
            .into_table(RegularHoliday::Table)
            .columns([RegularHoliday::Day, RegularHoliday::DayIndex])
            .values_panic([day.into(), day_index.into()])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(id)
    }

    pub async fn create_review(
        &self,
        restaurant_id: i64,
        user_id: i64,
        score: i64,
        created_at: i64,
    ) -> anyhow::Result<i64> {
        let statement = Query::insert()
            .into_table(Review::Table)
            .columns([
                Review::RestaurantId,
                Review::UserId,
                Review::Score,
                Review::Content,
                Review::CreatedAt,
            ])
            .values_panic([
                restaurant_id.into(),
                user_id.into(),
                score.into(),
                format!("review written at {created_at}").into(),
                created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(id)
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    request(Method::GET, uri, cookie, &[])
}

pub fn request(
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    form: &[(&str, &str)],
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    if form.is_empty() {
        return builder.body(Body::empty()).unwrap();
    }

    builder
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(form).unwrap()))
        .unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub fn assert_redirect(response: &Response<Body>, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), Some(to));
}

pub async fn json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
