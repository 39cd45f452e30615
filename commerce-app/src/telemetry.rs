//! Tracing setup shared by both binaries.
//!
//! Logs always go to stdout through the fmt layer. Spans are exported over
//! OTLP only when `OTEL_EXPORTER_OTLP_ENDPOINT` is set.

use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::{Resource, propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const OTLP_ENDPOINT_VAR: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

const DEFAULT_FILTER: &str = "info,commerce_app=debug,commerce_hex=debug";

fn init_tracer_provider(service_name: &'static str) -> anyhow::Result<sdktrace::SdkTracerProvider> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(Resource::builder().with_service_name(service_name).build())
        .build();

    global::set_tracer_provider(provider.clone());
    Ok(provider)
}

/// Installs the global subscriber. Returns the tracer provider when OTLP
/// export is enabled so the caller can flush it on exit.
pub fn init_tracing(
    service_name: &'static str,
) -> anyhow::Result<Option<sdktrace::SdkTracerProvider>> {
    let provider = match std::env::var_os(OTLP_ENDPOINT_VAR) {
        Some(_) => Some(init_tracer_provider(service_name)?),
        None => None,
    };

    let telemetry = provider
        .as_ref()
        .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(service_name)));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .try_init()?;

    Ok(provider)
}

/// Flushes pending spans.
pub fn shutdown(provider: Option<sdktrace::SdkTracerProvider>) {
    if let Some(provider) = provider {
        if let Err(e) = provider.shutdown() {
            eprintln!("failed to flush traces: {e}");
        }
    }
}
