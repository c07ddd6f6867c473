use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use travel_booking_api::{config::AppConfig, db::catalog::create_catalog, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Application starting...");

    let config = AppConfig::from_env();
    info!("Running in {} mode", config.environment);

    let catalog = create_catalog();

    let (host, port) = config.bind_address();
    info!("Attempting to bind to {}:{}", host, port);

    let app_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(app_config.clone()))
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
