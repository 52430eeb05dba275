use std::sync::Arc;

use anyhow::Result;
use log::info;

use imgsync_app::ReconcileProductImages;
use imgsync_infra::catalog::CatalogClient;
use imgsync_infra::config::AppConfig;
use imgsync_infra::http::HttpImageFetcher;

use product_image_sync::web;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    if config.image_attributes.is_empty() {
        info!("no image attributes configured; events will be acknowledged without work");
    }

    let catalog = Arc::new(CatalogClient::new(config.catalog.clone()));
    let fetcher = Arc::new(HttpImageFetcher::new());
    let reconcile = Arc::new(ReconcileProductImages::new(
        config.image_attributes.clone(),
        fetcher,
        Arc::clone(&catalog),
    ));

    let routes = web::event::route(reconcile, catalog);
    info!("listening on {}", config.bind_addr);
    warp::serve(routes).run(config.bind_addr).await;
    Ok(())
}
