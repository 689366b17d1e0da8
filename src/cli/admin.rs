use nagoyameshi::{
    command::{Command, CreateAdminInput},
    config::Config,
};

pub async fn create_admin(config: Config, email: String, password: String) -> anyhow::Result<()> {
    let pool = nagoyameshi::create_pool(&config.database.url, 1).await?;
    nagoyameshi::migrate(&pool).await?;

    let command = Command::new(pool.clone(), pool.clone());
    let id = command
        .create_admin(CreateAdminInput {
            email: email.to_owned(),
            password,
        })
        .await?;

    tracing::info!(admin_id = id, "{email} now has admin access");
    pool.close().await;

    Ok(())
}
