mod cli;

use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse();

    // Diagnostics go to stderr so the screen's stdout stays clean.
    let log_directive = args.log_level.as_deref().unwrap_or("sensordeck=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "sensordeck=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Sensordeck v{} starting...", env!("CARGO_PKG_VERSION"));

    // CLI dimensions take precedence over what the launcher put in the
    // environment.
    if let Some(width) = args.width {
        std::env::set_var(sensordeck_platform::config::WIDTH_VAR, width.to_string());
    }
    if let Some(height) = args.height {
        std::env::set_var(sensordeck_platform::config::HEIGHT_VAR, height.to_string());
    }

    let mut bridge = sensordeck_platform::UiBridge::new(sensordeck_platform::create_platform());
    tracing::info!("Window group: {}", bridge.window_group());

    if let Err(e) = bridge.setup_screen() {
        tracing::error!("Screen setup failed: {e}");
        std::process::exit(1);
    }
    tracing::info!("Screen ready");

    bridge.create_geolocation_dialog();
    bridge.show_geolocation_dialog_message("Waiting for geolocation fix...");

    bridge.create_accelerometer_dialog();
    bridge.show_accelerometer_dialog_message("Waiting for accelerometer data...");

    // Controller logic (sensor polling, dialog updates) hooks in here; the
    // bridge itself only manages lifecycles.

    bridge.destroy_geolocation_dialog();
    bridge.destroy_accelerometer_dialog();
    bridge.cleanup_screen();
    tracing::info!("Shutdown complete");
}
