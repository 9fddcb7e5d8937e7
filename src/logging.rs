use tracing_subscriber::EnvFilter;

/// Inicializa `tracing` hacia stderr para no mezclar con los prompts de stdout.
///
/// `RUST_LOG` tiene prioridad sobre `default_filter`. Llamarla dos veces no falla.
pub fn init_log_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
