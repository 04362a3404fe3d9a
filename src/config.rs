use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    /// Access token lifetime in hours. Set via CARHUB_TOKEN_TTL_HOURS.
    pub token_ttl_hours: i64,
    /// Origin allowed by CORS for the dashboard web app.
    pub dashboard_origin: String,
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    let jwt_secret = std::env::var("CARHUB_JWT_SECRET")
        .unwrap_or_else(|_| "CHANGE_ME_JWT_SECRET".into());

    if jwt_secret == "CHANGE_ME_JWT_SECRET" {
        let env_mode = std::env::var("CARHUB_ENV")
            .or_else(|_| std::env::var("RUST_ENV"))
            .unwrap_or_default();
        if env_mode == "production" {
            anyhow::bail!(
                "CARHUB_JWT_SECRET is still the insecure placeholder. \
                 Set a proper secret before running in production."
            );
        }
        eprintln!("⚠️  CARHUB_JWT_SECRET is not set — using insecure placeholder. Set a real secret for production.");
    }

    Ok(Config {
        port: std::env::var("CARHUB_PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .unwrap_or(5000),
        database_url: std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/carhub".into()),
        jwt_secret,
        token_ttl_hours: std::env::var("CARHUB_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24),
        dashboard_origin: std::env::var("DASHBOARD_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".into()),
    })
}
