//! Command handlers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::debug;
use typepick_config::load_settings;
use typepick_fields::{
    decode_submission, normalize, parse, render_html, FieldSettings, SelectorField,
    StaticRegistry, StoredValue, Variant, POST_TYPE_SELECTOR,
};

use crate::cli::{Commands, OutputFormat};

/// Run a parsed command, returning what should be written to stdout.
pub async fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Render {
            registry,
            config,
            variant,
            value,
            field_id,
            field_name,
            format,
            include_private,
        } => {
            let request = RenderRequest {
                registry,
                config,
                variant,
                value,
                field_id,
                field_name,
                format,
                include_private,
            };
            run_render(request).await
        }
        Commands::Parse {
            config,
            variant,
            form,
            value,
            field_name,
        } => run_parse(
            config.as_deref(),
            variant,
            form.as_deref(),
            value.as_deref(),
            &field_name,
        ),
        Commands::Normalize { value } => run_normalize(&value),
        Commands::Describe => run_describe(),
    }
}

/// Arguments of the `render` command.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub registry: PathBuf,
    pub config: Option<PathBuf>,
    pub variant: Option<Variant>,
    pub value: Option<String>,
    pub field_id: String,
    pub field_name: String,
    pub format: OutputFormat,
    pub include_private: bool,
}

pub async fn run_render(request: RenderRequest) -> Result<String> {
    let settings = settings_with_override(request.config.as_deref(), request.variant)?;
    let registry = StaticRegistry::load(&request.registry)
        .await
        .with_context(|| format!("loading registry {}", request.registry.display()))?;
    let registry = if request.include_private {
        registry
    } else {
        registry.public()
    };

    let stored = request
        .value
        .as_deref()
        .map(parse_value)
        .unwrap_or_default();

    let field = SelectorField::new(settings, registry);
    let widget = field.render(&stored, &request.field_id, &request.field_name);
    debug!(selected = ?widget.selected_ids(), "rendered widget");

    match request.format {
        OutputFormat::Html => Ok(render_html(&widget)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&widget)?),
    }
}

pub fn run_parse(
    config: Option<&Path>,
    variant: Option<Variant>,
    form: Option<&str>,
    value: Option<&str>,
    field_name: &str,
) -> Result<String> {
    let variant = match variant {
        Some(variant) => variant,
        None => load_settings(config)?.variant,
    };
    let submitted = match (form, value) {
        (Some(body), _) => decode_submission(body, field_name),
        (None, Some(raw)) => parse_value(raw),
        (None, None) => StoredValue::Absent,
    };
    let stored = parse(variant, submitted);
    Ok(serde_json::to_string(&stored)?)
}

pub fn run_normalize(value: &str) -> Result<String> {
    Ok(serde_json::to_string(&normalize(&parse_value(value)))?)
}

pub fn run_describe() -> Result<String> {
    let variants: Vec<Value> = Variant::ALL
        .iter()
        .map(|v| json!({"code": v.code(), "name": v.as_str()}))
        .collect();
    let description = json!({
        "field_type": POST_TYPE_SELECTOR,
        "defaults": FieldSettings::default(),
        "variants": variants,
    });
    Ok(serde_json::to_string_pretty(&description)?)
}

fn settings_with_override(
    config: Option<&Path>,
    variant: Option<Variant>,
) -> Result<FieldSettings> {
    let mut settings = load_settings(config)?;
    if let Some(variant) = variant {
        settings.variant = variant;
    }
    Ok(settings)
}

/// Read a value argument as JSON, falling back to literal text.
pub fn parse_value(raw: &str) -> StoredValue {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => StoredValue::from(value),
        Err(_) => StoredValue::Text(raw.to_string()),
    }
}
