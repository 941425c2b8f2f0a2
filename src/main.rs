//! Workspace Console binary.
//!
//! With the `server` feature this serves the API and the server-rendered UI;
//! the `web` build only hydrates the UI in the browser.

#[cfg(feature = "server")]
fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    use workspace_console::{api, app::App, config, webhook::WebhookClient};

    // Initialize logging
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "workspace_console=debug,tower_http=debug,axum::rejection=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    tracing::info!("Starting Workspace Console");

    // Load configuration
    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(?config, "Configuration loaded");

    let webhook = match WebhookClient::new(&config.webhook) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create webhook client: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(base_url = webhook.base_url(), "Webhook backend configured");

    let state = api::AppState::new(webhook);

    // Listen address comes from the Dioxus launcher (IP/PORT)
    dioxus::serve(move || {
        let state = state.clone();
        async move { Ok(dioxus::server::router(App).merge(api::router(state))) }
    });
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(workspace_console::app::App);
}
