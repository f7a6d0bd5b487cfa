//! Configuration management commands.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Result};
use bazaar_session::SessionStore;
use serde_json::json;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Path => show_paths(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let config = &ctx.config;
    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv("seed", &config.catalog.seed.to_string());
    ctx.output.kv("size", &config.catalog.size.to_string());
    ctx.output.kv(
        "price_ceiling",
        &config
            .catalog
            .price_ceiling
            .map_or_else(|| "none".to_string(), |c| c.to_string()),
    );

    ctx.output.info("[session]");
    ctx.output.kv(
        "store_path",
        &config.session.resolved_store_path().display().to_string(),
    );
    ctx.output
        .kv("login_delay_ms", &config.session.login_delay_ms.to_string());
    ctx.output
        .kv("order_delay_ms", &config.session.order_delay_ms.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("format", config.logging.format.as_str());
    ctx.output.kv("level", config.logging.level.as_str());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(Path::new(CONFIG_NAMES[0]));

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn show_paths(ctx: &Context) -> Result<()> {
    let store = ctx.session.store();
    let markers = [
        bazaar_session::keys::ADMIN_LOGGED_IN,
        bazaar_session::keys::CUSTOMER_LOGGED_IN,
        bazaar_session::keys::CUSTOMER_ID,
    ]
    .into_iter()
    .filter_map(|key| match store.get(key) {
        Ok(Some(value)) => Some(Ok((key, value))),
        Ok(None) => None,
        Err(e) => Some(Err(e)),
    })
    .collect::<Result<Vec<_>, _>>()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "config": ctx.config_path,
            "session": store.path(),
            "markers": markers.iter().cloned().collect::<BTreeMap<_, _>>(),
        }));
        return Ok(());
    }

    ctx.output.header("Paths");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("config", &path.display().to_string()),
        None => ctx.output.kv("config", "(none found, using defaults)"),
    }
    ctx.output.kv("session", &store.path().display().to_string());
    for (key, value) in &markers {
        ctx.output.list_item(&format!("{key} = {value}"));
    }
    Ok(())
}
