use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use log::info;

use ca_housing_web::pipeline::Pipeline;
use ca_housing_web::routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    let model_path = std::env::var("MODEL_PATH")
        .unwrap_or_else(|_| "models/ca_housing_pipeline.json".to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let workers = std::env::var("WORKERS")
        .ok()
        .and_then(|w| w.parse().ok())
        .unwrap_or_else(num_cpus::get);

    // The pipeline is the single startup precondition: fail before binding.
    let pipeline = Pipeline::load(&model_path)
        .with_context(|| format!("cannot serve traffic: failed to load model artifact '{model_path}'"))?;
    info!("pipeline loaded from {model_path}");

    let pipeline_data = web::Data::new(pipeline);
    let bind_address = format!("{host}:{port}");

    info!("server listening on http://{bind_address} ({workers} workers)");
    info!("  GET  /         - prediction form");
    info!("  POST /predict  - form submission");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .app_data(pipeline_data.clone())
            .configure(routes::config)
    })
    .workers(workers)
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {bind_address}"))?
    .run()
    .await?;

    Ok(())
}
