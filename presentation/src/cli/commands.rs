//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for catalog-toolbar
#[derive(Parser, Debug)]
#[command(name = "catalog-toolbar")]
#[command(author, version, about = "Asynchronous catalog toolbar: options, URL reconciliation and page simulation")]
#[command(long_about = r#"
catalog-toolbar resolves the per-store settings of the asynchronous catalog
toolbar, reconciles listing URLs the way the widget does, and runs the
widget against a saved listing page.

Configuration files are loaded from (in priority order):
1. CATALOG_TOOLBAR_* environment variables
2. --config <path>                Explicit config file
3. ./catalog-toolbar.toml         Project-level config
4. ~/.config/catalog-toolbar/config.toml   Global config

Example:
  catalog-toolbar options --store fr
  catalog-toolbar reconcile --url '/shoes?color=red&product_list_order=price' \
      --param product_list_order --value position --default position
  catalog-toolbar simulate --page listing.html --origin https://shop.example/shoes \
      --role limiter --value 24
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the widget initialization payload for a store
    Options {
        /// Store code
        #[arg(long, default_value = "default")]
        store: String,

        /// Template overrides as JSON (camelCase option keys)
        #[arg(long, value_name = "JSON")]
        overrides: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        output: OutputFormat,
    },

    /// Reconcile one toolbar parameter against a base URL
    Reconcile {
        /// Base URL: path plus optional query
        #[arg(long)]
        url: String,

        /// Query parameter name
        #[arg(long)]
        param: String,

        /// Candidate value
        #[arg(long)]
        value: String,

        /// Value the catalog assumes when the parameter is absent
        #[arg(long = "default", value_name = "DEFAULT")]
        default_value: String,

        /// Also print the asynchronous request URL
        #[arg(long)]
        show_async: bool,
    },

    /// Run the toolbar widget against a saved listing page
    Simulate {
        /// HTML file of the listing page
        #[arg(long, value_name = "FILE")]
        page: PathBuf,

        /// Absolute URL the page was served from
        #[arg(long)]
        origin: String,

        /// Control role (mode, direction, order, limit, pager or their data-role names)
        #[arg(long)]
        role: String,

        /// Value to choose (option value or the link's data-value)
        #[arg(long)]
        value: String,

        /// Selector of the toolbar root element
        #[arg(long, default_value = ".toolbar.toolbar-products")]
        root: String,

        /// Store code
        #[arg(long, default_value = "default")]
        store: String,

        /// Template overrides as JSON (camelCase option keys)
        #[arg(long, value_name = "JSON")]
        overrides: Option<String>,

        /// Translation catalog (TOML) for alert messages
        #[arg(long, value_name = "PATH")]
        translations: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show configuration file locations and exit
    ConfigSources,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_reconcile() {
        let cli = Cli::parse_from([
            "catalog-toolbar",
            "reconcile",
            "--url",
            "/catalog?p=2",
            "--param",
            "p",
            "--value",
            "1",
            "--default",
            "1",
        ]);
        match cli.command {
            Command::Reconcile {
                url, default_value, ..
            } => {
                assert_eq!(url, "/catalog?p=2");
                assert_eq!(default_value, "1");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["catalog-toolbar", "options", "--store", "fr", "-vv", "--no-config"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_config);
        assert!(matches!(
            cli.command,
            Command::Options { ref store, output: OutputFormat::Json, .. } if store == "fr"
        ));
    }
}
