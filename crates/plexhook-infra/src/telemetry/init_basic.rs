use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "plexhook=debug,tower_http=debug";

pub type TelemetryError = tracing_subscriber::util::TryInitError;

/// Initialize tracing for the receiver
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(service_name: &str, environment: &str) -> Result<(), TelemetryError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::info!(
        service_name = %service_name,
        environment = %environment,
        "Tracing initialized"
    );
    Ok(())
}
