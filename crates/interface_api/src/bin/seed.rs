//! Hostel Core - Database Seeding Binary
//!
//! Applies migrations and loads the setup data: the admin account, the
//! standard room and bed layout, and the default menu. Idempotent, except
//! that the bed inventory is regenerated wholesale.
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/hostel cargo run --bin hostel-seed
//! ```

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .or_else(|_| std::env::var("API_DATABASE_URL"))
        .unwrap_or_else(|_| "postgres://localhost/hostel".to_string());

    tracing::info!("Seeding database...");
    let pool = infra_db::create_pool_from_url(&database_url).await?;
    infra_db::MIGRATOR.run(&pool).await?;

    let report = infra_db::seed_all(&pool).await?;
    tracing::info!(
        admin_created = report.admin_created,
        rooms = report.rooms_upserted,
        beds = report.beds_created,
        menu_items = report.menu_items_created,
        "Seeding finished"
    );
    Ok(())
}
