use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global tracing subscriber for the backend binary.
///
/// `RUST_LOG` wins when set; otherwise we log this workspace at debug and
/// quiet down the query layers, which are chatty at info.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,backend=debug,migration=info,sqlx=warn,sea_orm=warn")
    });

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
