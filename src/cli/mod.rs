//! Command-line interface for axkeys
//!
//! Lists the Accessibility keys, shows their resolved values and checks that the
//! accessors hand back stable keys on this machine.

use crate::{
    keys::{AxKey, KeySource},
    logging::{init_logging, LogConfig},
    Result,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, error, info};

/// axkeys command-line interface
#[derive(Parser, Debug)]
#[command(name = "axkeys")]
#[command(about = "Inspect the macOS Accessibility keys used for window management")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct AxKeysCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable JSON output for machine-readable results
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every key with its framework symbol and accessor
    List,

    /// Show a single key
    Show {
        /// Key name, accessor name or framework symbol (e.g. "focused-window")
        key: AxKey,
    },

    /// Resolve every key twice and check both results are equal
    Verify,
}

/// One row of `list` / `show` output
#[derive(Debug, Clone, Serialize)]
pub struct KeyEntry {
    pub key: AxKey,
    pub symbol: &'static str,
    pub accessor: &'static str,
    pub source: KeySource,
    pub description: &'static str,
    /// Resolved string value, only available on macOS
    pub value: Option<String>,
}

impl KeyEntry {
    pub fn describe(key: AxKey) -> Self {
        Self {
            key,
            symbol: key.symbol(),
            accessor: key.accessor_name(),
            source: key.source(),
            description: key.description(),
            value: resolved_value(key),
        }
    }
}

#[cfg(target_os = "macos")]
fn resolved_value(key: AxKey) -> Option<String> {
    Some(key.resolve().to_string())
}

#[cfg(not(target_os = "macos"))]
fn resolved_value(_key: AxKey) -> Option<String> {
    None
}

/// Outcome of resolving one key twice
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub key: AxKey,
    pub value: String,
    pub stable: bool,
}

#[cfg(target_os = "macos")]
pub fn verify_keys() -> Result<Vec<VerifyReport>> {
    Ok(AxKey::ALL
        .into_iter()
        .map(|key| {
            let first = key.resolve();
            let second = key.resolve();
            debug!(%key, value = %first, "resolved key");
            VerifyReport {
                key,
                value: first.to_string(),
                stable: first == second,
            }
        })
        .collect())
}

#[cfg(not(target_os = "macos"))]
pub fn verify_keys() -> Result<Vec<VerifyReport>> {
    Err(crate::AxKeysError::PlatformUnsupported(format!(
        "Accessibility keys can only be resolved on macOS, not {}",
        std::env::consts::OS
    ))
    .into())
}

/// CLI command executor
#[derive(Debug, Clone, Copy)]
pub struct AxKeysCliExecutor {
    json_output: bool,
}

impl AxKeysCliExecutor {
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    /// Execute a CLI command, writing results to `out`
    pub fn execute<W: Write>(&self, command: Commands, out: &mut W) -> Result<()> {
        match command {
            Commands::List => {
                let entries: Vec<KeyEntry> =
                    AxKey::ALL.into_iter().map(KeyEntry::describe).collect();
                self.write_entries(&entries, out)
            }
            Commands::Show { key } => self.write_entries(&[KeyEntry::describe(key)], out),
            Commands::Verify => self.execute_verify(out),
        }
    }

    fn write_entries<W: Write>(&self, entries: &[KeyEntry], out: &mut W) -> Result<()> {
        if self.json_output {
            writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
            return Ok(());
        }

        for entry in entries {
            writeln!(out, "{}", entry.key)?;
            writeln!(out, "  Symbol:      {}", entry.symbol)?;
            writeln!(out, "  Accessor:    {}()", entry.accessor)?;
            match entry.source {
                KeySource::Literal(literal) => {
                    writeln!(out, "  Source:      header literal \"{}\"", literal)?
                }
                KeySource::Exported => writeln!(out, "  Source:      exported symbol")?,
            }
            writeln!(out, "  Description: {}", entry.description)?;
            if let Some(value) = &entry.value {
                writeln!(out, "  Value:       {}", value)?;
            }
        }

        Ok(())
    }

    fn execute_verify<W: Write>(&self, out: &mut W) -> Result<()> {
        let reports = verify_keys()?;
        let unstable: Vec<AxKey> = reports
            .iter()
            .filter(|report| !report.stable)
            .map(|report| report.key)
            .collect();

        if self.json_output {
            let status_json = serde_json::json!({
                "ok": unstable.is_empty(),
                "keys": reports,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&status_json)?)?;
        } else {
            for report in &reports {
                let status = if report.stable { "ok" } else { "MISMATCH" };
                writeln!(out, "{:<30} {:<28} {}", report.key, report.value, status)?;
            }
        }

        if unstable.is_empty() {
            info!("All {} keys resolved consistently", reports.len());
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "Keys resolved inconsistently: {}",
                unstable
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        }
    }
}

/// Run the CLI interface
pub fn run_cli() -> Result<()> {
    let cli = AxKeysCli::parse();

    let log_config = if cli.verbose {
        LogConfig::development()
    } else {
        LogConfig::from_env()
    };
    init_logging(&log_config)?;
    debug!(?cli, "parsed command line");

    let executor = AxKeysCliExecutor::new(cli.json);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = executor.execute(cli.command, &mut out) {
        if cli.json {
            let error_json = serde_json::json!({
                "error": true,
                "message": e.to_string()
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&error_json)?)?;
        } else {
            error!("Command failed: {}", e);
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(json: bool, command: Commands) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = AxKeysCliExecutor::new(json).execute(command, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_parsing() {
        let cli = AxKeysCli::try_parse_from(["axkeys", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List));

        let cli = AxKeysCli::try_parse_from(["axkeys", "show", "kAXSizeAttribute"]).unwrap();
        match cli.command {
            Commands::Show { key } => assert_eq!(key, AxKey::Size),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = AxKeysCli::try_parse_from(["axkeys", "verify", "--verbose", "--json"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Verify));
    }

    #[test]
    fn test_show_rejects_unknown_key() {
        let cli = AxKeysCli::try_parse_from(["axkeys", "show", "AXTitle"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_list_text_output() {
        let (result, output) = run(false, Commands::List);
        assert!(result.is_ok());
        for key in AxKey::ALL {
            assert!(output.contains(key.symbol()));
            assert!(output.contains(&format!("{}()", key.accessor_name())));
        }
        assert!(output.contains("header literal \"AXPosition\""));
        assert!(output.contains("exported symbol"));
    }

    #[test]
    fn test_show_json_output() {
        let (result, output) = run(
            true,
            Commands::Show {
                key: AxKey::FocusedWindow,
            },
        );
        assert!(result.is_ok());

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["key"], "focused-window");
        assert_eq!(entries[0]["symbol"], "kAXFocusedWindowAttribute");
        assert_eq!(entries[0]["source"]["value"], "AXFocusedWindow");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_verify_reports_every_key_stable() {
        let (result, output) = run(true, Commands::Verify);
        assert!(result.is_ok());

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["ok"], true);
        assert_eq!(parsed["keys"].as_array().unwrap().len(), 5);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_entries_carry_resolved_values() {
        let entry = KeyEntry::describe(AxKey::Position);
        assert_eq!(entry.value.as_deref(), Some("AXPosition"));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_verify_unsupported_off_macos() {
        let (result, output) = run(false, Commands::Verify);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::AxKeysError>(),
            Some(crate::AxKeysError::PlatformUnsupported(_))
        ));
        assert!(output.is_empty());
        assert!(KeyEntry::describe(AxKey::Size).value.is_none());
    }
}
