use actix_web::{web, App, HttpServer};
use log::info;
use longbox::api;
use longbox::app_state::AppState;
use longbox::config::Config;
use longbox::readcomics::ReadComics;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    log4rs::init_file("log4rs.yml", Default::default()).unwrap();

    let cfg = Config::load();

    let client = cfg
        .source
        .build_client()
        .expect("Failed to create HTTP client");

    info!("Scraping source: {}", cfg.source.base_url);

    let data = web::Data::new(AppState {
        site: ReadComics::new(client.clone(), cfg.source.base_url.clone()),
        client,
        config: cfg.clone(),
    });

    // Try to bind to an available port starting at the configured one
    let first_port = cfg.server.port;
    let last_port = first_port.saturating_add(10);
    let mut last_err: Option<std::io::Error> = None;
    for port in first_port..=last_port {
        let data_clone = data.clone();
        let addr = format!("{}:{}", cfg.server.host, port);
        match HttpServer::new(move || {
            App::new()
                .app_data(data_clone.clone())
                .configure(api::configure)
        })
        .bind(&addr)
        {
            Ok(server) => {
                info!("Listening on {}", addr);
                return server.run().await;
            }
            Err(e) => {
                last_err = Some(e);
                continue;
            }
        }
    }
    Err(last_err.unwrap_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            format!("No available ports {}-{}", first_port, last_port),
        )
    }))
}
