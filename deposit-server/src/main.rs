use actix_cors::Cors;
use actix_web::{web::Data, App, HttpServer};
use deposit_client_sdk::external_api::contract::utils::get_address_from_private_key;
use deposit_server::{
    api::{
        api::{deposit_server_routes, json_config},
        state::State,
    },
    Env,
};
use server_common::{
    health_check::{health_check, set_name_and_version},
    logger,
};
use std::io;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    set_name_and_version(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    logger::init_logger().map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    dotenvy::dotenv().ok();

    let env: Env = envy::from_env().map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to parse environment variables: {}", e),
        )
    })?;
    let depositor = get_address_from_private_key(env.private_key)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let state = State::new(&env).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to initialize deposit server: {}", e),
        )
    })?;
    tracing::info!(
        "Starting deposit server on port {} with depositor {:?} and contract {:?}",
        env.port,
        depositor,
        env.contract_address
    );

    let state = Data::new(state);
    HttpServer::new(move || {
        let cors = Cors::permissive();
        App::new()
            .wrap(cors)
            .wrap(TracingLogger::<logger::CustomRootSpanBuilder>::new())
            .app_data(json_config())
            .app_data(state.clone())
            .service(health_check)
            .configure(deposit_server_routes)
    })
    .bind(format!("0.0.0.0:{}", env.port))?
    .run()
    .await
}
