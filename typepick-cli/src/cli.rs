//! CLI definition for the typepick command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use typepick_fields::Variant;

/// How a rendered widget is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML fragment
    Html,
    /// Widget description as JSON
    Json,
}

/// typepick - content type selector field
///
/// Renders a selector over an item registry and parses submitted values.
#[derive(Parser, Debug)]
#[command(name = "typepick")]
#[command(version)]
#[command(about = "Render and parse a configurable content type selector field")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the selector for a stored value
    Render {
        /// YAML item registry
        #[arg(long)]
        registry: PathBuf,
        /// Field settings file (TOML, YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the configured variant (select, radio, checkboxes or 0-2)
        #[arg(long)]
        variant: Option<Variant>,
        /// Stored value as JSON; bare text is taken literally
        #[arg(long)]
        value: Option<String>,
        /// Element id of the field
        #[arg(long, default_value = "post_type")]
        field_id: String,
        /// Form name of the field
        #[arg(long, default_value = "post_type")]
        field_name: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Offer registry items that are not public
        #[arg(long)]
        include_private: bool,
    },
    /// Turn a submission into the value to store, printed as JSON
    Parse {
        /// Field settings file (TOML, YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the configured variant (select, radio, checkboxes or 0-2)
        #[arg(long)]
        variant: Option<Variant>,
        /// urlencoded form body
        #[arg(long, conflicts_with = "value")]
        form: Option<String>,
        /// Submitted value as JSON; bare text is taken literally
        #[arg(long)]
        value: Option<String>,
        /// Form name of the field
        #[arg(long, default_value = "post_type")]
        field_name: String,
    },
    /// Print the canonical id list for a value
    Normalize {
        /// Value as JSON; bare text is taken literally
        value: String,
    },
    /// Print the field type and its default settings
    Describe,
}
