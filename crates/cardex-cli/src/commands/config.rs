//! Config command - manage configuration.

use std::fs;
use std::path::Path;

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use cardex_core::CardexConfig;

use super::default_config_path;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init {
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "store.database_path")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value (JSON, or a bare string)
        value: String,
    },

    /// Show configuration file path
    Path,
}

pub async fn run(args: ConfigArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => show_config(&config_path),
        ConfigCommand::Init { force } => init_config(&config_path, force),
        ConfigCommand::Get { key } => get_config(&config_path, &key),
        ConfigCommand::Set { key, value } => set_config(&config_path, &key, &value),
        ConfigCommand::Path => show_path(&config_path),
    }
}

fn load(config_path: &Path) -> anyhow::Result<CardexConfig> {
    if config_path.exists() {
        Ok(CardexConfig::from_file(config_path)?)
    } else {
        Ok(CardexConfig::default())
    }
}

fn save(config: &CardexConfig, config_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(config_path)?;
    Ok(())
}

fn show_config(config_path: &Path) -> anyhow::Result<()> {
    if !config_path.exists() {
        println!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }

    println!("{}", serde_json::to_string_pretty(&load(config_path)?)?);
    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> anyhow::Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    save(&CardexConfig::default(), config_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        config_path.display()
    );
    Ok(())
}

fn get_config(config_path: &Path, key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(load(config_path)?)?;
    println!("{}", serde_json::to_string_pretty(lookup(&json, key)?)?);
    Ok(())
}

fn set_config(config_path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let parsed_value = parse_value(value);

    let mut json = serde_json::to_value(load(config_path)?)?;
    assign(&mut json, key, parsed_value.clone())?;

    let config: CardexConfig = serde_json::from_value(json)?;
    save(&config, config_path)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&parsed_value)?
    );
    Ok(())
}

fn show_path(config_path: &Path) -> anyhow::Result<()> {
    println!("Configuration file: {}", config_path.display());

    if config_path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'cardex config init' to create a configuration file.");
    }

    Ok(())
}

/// Values that are not valid JSON are taken as plain strings.
fn parse_value(value: &str) -> Value {
    serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
}

/// Follow a dotted key path.
fn lookup<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.').try_fold(json, |current, part| {
        current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
    })
}

/// Set the value at a dotted key path. Intermediate sections must exist.
fn assign(json: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let (parent_key, field) = match key.rsplit_once('.') {
        Some((parent, field)) => (Some(parent), field),
        None => (None, key),
    };

    let mut parent = json;
    if let Some(parent_key) = parent_key {
        for part in parent_key.split('.') {
            parent = parent
                .get_mut(part)
                .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
        }
    }

    match parent.as_object_mut() {
        Some(obj) => {
            obj.insert(field.to_string(), value);
            Ok(())
        }
        None => anyhow::bail!("Cannot set value at non-object path: {}", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("models/v2"), Value::String("models/v2".to_string()));
    }

    #[test]
    fn test_lookup_and_assign() {
        let mut json = serde_json::to_value(CardexConfig::default()).unwrap();

        assign(&mut json, "store.database_path", Value::String("cards.db".to_string())).unwrap();

        assert_eq!(
            lookup(&json, "store.database_path").unwrap(),
            &Value::String("cards.db".to_string())
        );
        assert!(lookup(&json, "store.missing").is_err());
        assert!(assign(&mut json, "nope.database_path", Value::Null).is_err());
    }

    #[test]
    fn test_set_config_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cardex").join("config.json");

        set_config(&path, "ocr.keep_unk", "true").unwrap();

        let config = CardexConfig::from_file(&path).unwrap();
        assert!(config.ocr.keep_unk);
    }
}
