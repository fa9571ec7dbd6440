mod commerce;
mod config;
mod services;

use actix_files::Files;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

use crate::commerce::CommerceClient;
use crate::config::AppConfig;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // Composition root: configuration and the commerce client are built
    // here once and injected; nothing else reads the environment.
    let config = AppConfig::from_env();
    let commerce = CommerceClient::new(config.commerce.clone());

    if let Err(e) = services::templates::store::ensure_registry(&config.database_path) {
        error!("Failed to initialize template registry: {}", e);
    }
    std::fs::create_dir_all(&config.assets_dir)?;

    let host = config.host.clone();
    let port = config.port;
    let url = format!("http://{}:{}", host, port);

    {
        let _url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&_url_clone);
        });
    }

    info!("Cardsmith storefront running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(commerce.clone()))
            .service(services::templates::configure_routes())
            .service(services::qr::configure_routes())
            .service(services::vcard::configure_routes())
            .service(services::uploads::configure_routes())
            .service(services::checkout::configure_routes())
            .service(Files::new("/assets", config.assets_dir.clone()))
            .default_service(web::route().to(serve_embedded))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
