use std::sync::{Arc, Mutex};

use anyhow::Result;

mod api;
mod seed;
mod store;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8081".to_owned());
    let store = Arc::new(Mutex::new(seed::demo_store()));

    log::info!("API de sensores escuchando en http://{bind}");
    api::new_http_server(store, &bind).await?;
    Ok(())
}
