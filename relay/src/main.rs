//! ISR Relay
//!
//! Sits between the CMS and the storefront frontend:
//! 1. Receives a webhook for every create/update/delete of tracked content
//! 2. Works out which frontend pages went stale
//! 3. Asks the frontend to revalidate them, once, best effort
//!
//! Usage:
//!   FRONTEND_URL=https://shop.example.com REVALIDATE_SECRET=... isr-relay --port 4010
//!
//! The relay is stateless and never fails a webhook because of the frontend.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use isr_relay::{build_router, AppState};
use isr_revalidate::{
    Dispatcher, HttpLocaleProvider, LocaleProvider, Notifier, RevalidationConfig, StaticLocales,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "isr-relay")]
#[command(about = "CMS lifecycle webhook to frontend ISR revalidation relay")]
struct Args {
    /// HTTP port for the webhook endpoint
    #[arg(short, long, env = "PORT", default_value = "4010")]
    port: u16,

    /// CMS base URL used to list locales (`/api/i18n/locales`)
    #[arg(long, env = "CMS_URL")]
    cms_url: Option<String>,

    /// API token for the CMS locale listing
    #[arg(long, env = "CMS_API_TOKEN", hide_env_values = true)]
    cms_api_token: Option<String>,

    /// Token the CMS must present as `Authorization: Bearer <token>`
    #[arg(long, env = "WEBHOOK_TOKEN", hide_env_values = true)]
    webhook_token: Option<String>,

    /// Static locale list used when no CMS URL is given (repeatable)
    #[arg(short, long = "locale")]
    locales: Vec<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    info!("ISR Relay starting...");
    let config = RevalidationConfig::from_env().context("Failed to read revalidation config")?;
    if !config.is_enabled() {
        warn!("FRONTEND_URL not configured, webhooks will be accepted but nothing is revalidated");
    }

    let frontend = config.frontend_url.clone();
    let contract = config.contract;
    let default_locale = config.default_locale.clone();
    let notifier = Notifier::new(config).context("Failed to create HTTP client")?;

    let locales: Arc<dyn LocaleProvider> = match &args.cms_url {
        Some(cms_url) if !cms_url.is_empty() => Arc::new(HttpLocaleProvider::with_client(
            cms_url.clone(),
            args.cms_api_token.clone(),
            notifier.client().clone(),
        )),
        _ if !args.locales.is_empty() => Arc::new(StaticLocales(args.locales.clone())),
        _ => Arc::new(StaticLocales(vec![default_locale])),
    };

    let dispatcher = Dispatcher::new(notifier, locales);

    let state = Arc::new(AppState {
        hooks: Arc::new(dispatcher),
        webhook_token: args.webhook_token.filter(|t| !t.is_empty()),
    });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .with_context(|| format!("Failed to bind HTTP port {}", args.port))?;

    println!("\n========================================");
    println!("  ISR Relay Running");
    println!("========================================");
    println!("  HTTP Port: {}", args.port);
    println!("  Webhook:   POST /webhooks/lifecycle");
    println!("  Frontend:  {}", if frontend.is_empty() { "(disabled)" } else { frontend.as_str() });
    println!("  Contract:  {:?}", contract);
    println!("========================================\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("ISR Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
