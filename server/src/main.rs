mod config;
mod handlers;
mod routes;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use config::Config;
use gallery_services::{create_connection, GalleryService};
use handlers::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();

    log::info!(
        "Starting Theme Gallery Server on {}:{}",
        config.server_host,
        config.server_port
    );

    let db = create_connection(&config.database_url)
        .await
        .expect("Failed to connect to database");
    log::info!("Database connection established");
    log::info!("Note: Run migrations with 'cd migrations && cargo run -- up' if not already done");

    let app_state = web::Data::new(AppState {
        gallery: GalleryService::new(db),
    });

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_method()
            .allow_any_origin()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind(format!("{}:{}", config.server_host, config.server_port))?
    .run()
    .await
}
