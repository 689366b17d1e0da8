use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use nagoyameshi_access::{Credentials, IdentityStore};
use nagoyameshi_db::table;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::config::JwtConfig;

/// The two identity spaces. Each has its own cookie and JWT audience, so a
/// token issued in one space never validates in the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    Member,
    Admin,
}

impl Space {
    pub fn cookie_name(&self) -> &'static str {
        match self {
            Space::Member => "member_token",
            Space::Admin => "admin_token",
        }
    }

    pub fn audience(&self) -> &'static str {
        match self {
            Space::Member => "member",
            Space::Admin => "admin",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    aud: String,
    exp: u64,
    iat: u64,
    iss: String,
    sub: String,
}

pub fn generate_token(config: &JwtConfig, space: Space, id: i64) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        aud: space.audience().to_owned(),
        exp: now + config.expiration_days * 24 * 60 * 60,
        iat: now,
        iss: config.issuer.to_owned(),
        sub: id.to_string(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

/// Subject of a valid token, `None` for anything expired, forged or minted
/// for the other space.
pub fn verify_token(config: &JwtConfig, space: Space, token: &str) -> Option<i64> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.to_owned()]);
    validation.set_audience(&[space.audience()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .ok()?;

    token_data.claims.sub.parse().ok()
}

pub fn build_cookie<'a>(config: &JwtConfig, space: Space, id: i64) -> anyhow::Result<Cookie<'a>> {
    let token = generate_token(config, space, id)?;

    Ok(Cookie::build((space.cookie_name(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build())
}

pub fn removal_cookie<'a>(space: Space) -> Cookie<'a> {
    Cookie::build(space.cookie_name()).path("/").build()
}

pub fn credentials(jar: &CookieJar) -> Credentials {
    Credentials {
        member: jar
            .get(Space::Member.cookie_name())
            .map(|c| c.value().to_owned()),
        administrator: jar
            .get(Space::Admin.cookie_name())
            .map(|c| c.value().to_owned()),
    }
}

/// Session-backed identity store: a credential counts only when its token
/// verifies and the account it names still exists.
#[derive(Clone)]
pub struct SessionIdentity {
    config: JwtConfig,
    read_db: SqlitePool,
}

impl SessionIdentity {
    pub fn new(config: JwtConfig, read_db: SqlitePool) -> Self {
        Self { config, read_db }
    }

    pub fn config(&self) -> &JwtConfig {
        &self.config
    }
}

#[async_trait]
impl IdentityStore for SessionIdentity {
    async fn current_administrator(&self, credentials: &Credentials) -> anyhow::Result<Option<i64>> {
        let Some(id) = credentials
            .administrator
            .as_deref()
            .and_then(|token| verify_token(&self.config, Space::Admin, token))
        else {
            return Ok(None);
        };

        let statement = Query::select()
            .column(table::Admin::Id)
            .from(table::Admin::Table)
            .and_where(Expr::col(table::Admin::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(|(id,)| id))
    }

    async fn current_member(&self, credentials: &Credentials) -> anyhow::Result<Option<i64>> {
        let Some(id) = credentials
            .member
            .as_deref()
            .and_then(|token| verify_token(&self.config, Space::Member, token))
        else {
            return Ok(None);
        };

        let statement = Query::select()
            .column(table::User::Id)
            .from(table::User::Table)
            .and_where(Expr::col(table::User::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.map(|(id,)| id))
    }
}
