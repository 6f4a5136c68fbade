//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use gudang_core::SiteConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::{env_key, Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    ctx.output.info(&format!(
        "Environment overrides use the {} prefix",
        env_key("")
    ));
    println!();
    print!("{}", redacted(&ctx.config).to_toml_string()?);

    Ok(())
}

/// Hide the API key when printing.
fn redacted(config: &SiteConfig) -> SiteConfig {
    let mut config = config.clone();
    if config.firestore.api_key.is_some() {
        config.firestore.api_key = Some("********".to_string());
    }
    config
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = format!(
        "# Gudang storefront configuration\n\n{}",
        SiteConfig::default().to_toml_string()?
    );
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_is_redacted() {
        let mut config = SiteConfig::default();
        config.firestore.api_key = Some("secret".to_string());
        let shown = redacted(&config).to_toml_string().unwrap();
        assert!(!shown.contains("secret"));
        assert!(shown.contains("********"));
    }

    #[test]
    fn test_default_config_round_trips() {
        let text = SiteConfig::default().to_toml_string().unwrap();
        assert_eq!(SiteConfig::from_toml_str(&text).unwrap(), SiteConfig::default());
    }
}
