use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    HttpMessage,
};
use std::time::Instant;
use thiserror::Error;
use tracing::Span;
use tracing_actix_web::RootSpanBuilder;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt as _,
    util::{SubscriberInitExt as _, TryInitError},
    EnvFilter,
};

use crate::{env::Env, health_check::load_name_and_version, tracer};

#[derive(Error, Debug)]
pub enum InitLoggerError {
    #[error("Failed to load logger environment variables: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Failed to initialize tracer: {0}")]
    TracerError(#[from] opentelemetry::trace::TraceError),

    #[error("Failed to initialize logger: {0}")]
    TryInitError(#[from] TryInitError),
}

pub fn init_logger() -> Result<(), InitLoggerError> {
    let (name, version) = load_name_and_version();

    dotenvy::dotenv().ok();
    let env = envy::from_env::<Env>()?;
    let env_filter = EnvFilter::new(&env.app_log);

    if env.env.is_local() {
        // Log to stdout
        let subscriber = fmt::Layer::new().with_line_number(true);
        tracing_subscriber::registry()
            .with(subscriber)
            .with(env_filter)
            .try_init()?;
        return Ok(());
    }

    let subscriber = fmt::Layer::new()
        .with_target(false)
        .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
        .json();
    if env.otlp_collector_endpoint.is_empty() {
        tracing_subscriber::registry()
            .with(subscriber)
            .with(env_filter)
            .try_init()?;
    } else {
        use opentelemetry::trace::TracerProvider as _;
        let provider = tracer::init_tracer(
            name.clone(),
            version,
            &env.otlp_collector_endpoint,
            env.otlp_sample_ratio,
        )?;
        let otlp_tracer = provider.tracer(name);
        tracing_subscriber::registry()
            .with(subscriber)
            .with(env_filter)
            .with(tracing_opentelemetry::layer().with_tracer(otlp_tracer))
            .try_init()?;
    }
    Ok(())
}

pub struct CustomRootSpanBuilder;

impl RootSpanBuilder for CustomRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> tracing::Span {
        request.extensions_mut().insert(Instant::now());
        tracing::info_span!(
            "http-request",
            "http.client_ip" = %request.connection_info().peer_addr().unwrap_or(""),
            "http.flavor" = ?request.version(),
            "http.host" = %request.connection_info().host(),
            "http.method" = %request.method(),
            "http.route" = %request.path(),
            "http.scheme" = %request.connection_info().scheme(),
            "http.user_agent" = %request.headers().get("user-agent").and_then(|h| h.to_str().ok()).unwrap_or(""),
            "otel.kind" = "server",
            "otel.name" = %format!("{} {}", request.method(), request.path()),
            "request_id" = %uuid::Uuid::new_v4(),
            status_code = tracing::field::Empty,
            latency = tracing::field::Empty,
            error = tracing::field::Empty,
        )
    }

    fn on_request_end<B: MessageBody>(
        span: Span,
        response: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        match response {
            Ok(resp) => {
                span.record("status_code", resp.status().as_u16());
                if let Some(start_time) = resp.request().extensions().get::<Instant>() {
                    span.record("latency", format!("{:?}", start_time.elapsed()));
                }
                tracing::info!("request-end");
            }
            Err(error) => {
                span.record("error", error.to_string());
                tracing::error!(error = %error, "request failed");
            }
        }
    }
}
