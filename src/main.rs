use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;
use manurev::{config::Config, export::DocxExporter, handlers, revision, state::AppState};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env();

    let client = revision::build_client(&config).map_err(std::io::Error::other)?;

    let state = Arc::new(AppState {
        config: config.clone(),
        client,
        exporter: Arc::new(DocxExporter),
    });

    info!(
        "\n┌───────────────────────────────────────────┐\
         \n│        manurev - paragraph revision       │\
         \n└───────────────────────────────────────────┘\n"
    );
    info!("Server running at http://{}:{}", config.host, config.port);
    info!("Model API base: {}", config.api_base_url);
    info!(
        "Proxy: {}",
        config.proxy_url.as_deref().unwrap_or("none (direct connection)")
    );
    info!("Request timeout: {}s", config.request_timeout_secs);
    info!("Exported documents go to: {}", config.tmp_dir.display());
    info!(
        "\nDebug mode: {}",
        if config.debug { "ENABLED" } else { "disabled" }
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(state.clone()))
            .app_data(web::FormConfig::default().limit(1024 * 1024))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
