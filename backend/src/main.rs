mod config;
mod services;

use crate::config::ServerConfig;
use actix_web::{middleware::Logger, web, App, HttpServer};
use common::catalogue::Catalogue;
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(io::Error::other)?;
    let catalogue = Catalogue::embedded().map_err(io::Error::other)?;
    let url = config.url();

    if !config.assets_dir.is_dir() {
        warn!(
            "image directory {} does not exist; listings will show placeholders",
            config.assets_dir.display()
        );
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            launch_browser(&url, webbrowser::open);
        });
    }

    info!(
        "Serving {} listings at {} (images under {})",
        catalogue.len(),
        url,
        config.images_mount()
    );

    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(services::assets::configure_routes(&config))
            .default_service(web::route().to(services::bundle::serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}

/// Opens `url` with `open`, logging instead of failing when no browser is available.
fn launch_browser(url: &str, open: impl FnOnce(&str) -> io::Result<()>) -> bool {
    match open(url) {
        Ok(()) => true,
        Err(err) => {
            warn!("could not open a browser at {url}: {err}");
            false
        }
    }
}
