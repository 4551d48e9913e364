use std::sync::Arc;

use anyhow::Context;
use recipe_detail::notify::LogNotifier;
use recipe_detail::render::render_page;
use recipe_detail::{ClientConfig, HttpBackend, RecipeDetail, Session};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env automatically only in debug builds to reduce manual setup overhead.
    if cfg!(debug_assertions) {
        let _ = dotenv::dotenv();
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let id: i64 = std::env::args()
        .nth(1)
        .context("usage: recipe-detail <recipe-id>")?
        .parse()
        .context("recipe id must be an integer")?;

    let cfg = ClientConfig::from_env();
    let session = Session::from_token(std::env::var("RECIPE_API_TOKEN").ok());
    info!("API base: {} (authenticated: {})", cfg.api_base, session.is_authenticated());

    let backend = Arc::new(HttpBackend::from_config(&cfg));
    let mut page = RecipeDetail::new(backend, Arc::new(LogNotifier));
    page.sync(id, &session)
        .await
        .with_context(|| format!("loading recipe {id}"))?;

    println!("{}", render_page(&page, &cfg)?);
    Ok(())
}
