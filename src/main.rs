use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizgen_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            // uploaded documents are larger than the default payload cap
            .app_data(web::PayloadConfig::new(10 * 1024 * 1024))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::generate_quiz)
            .service(handlers::get_quiz)
            .service(handlers::record_answer)
            .service(handlers::submit_quiz)
            .service(handlers::extract_document)
    })
    .bind((host, port))?
    .run()
    .await
}
