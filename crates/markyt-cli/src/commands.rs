//! Handler functions for CLI subcommands.
//!
//! Implements the lead-facing commands (`slug`, `render`, `tokens`,
//! `sequence`) and the config subcommands (`path`, `get`, `set`, `init`,
//! `show`), plus TOML dotted-key helper functions that can be reused by
//! downstream tooling.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use markyt_core::{Client, Error as CoreError, Lead, MessageTemplate};
use markyt_landing::{derive_slug, landing_url};
use markyt_personalize::{
    ReplacementSet, Token, TokenKind, mentions_landing_token, personalize_with_report, scan_tokens,
};
use markyt_sequence::{RenderedSequence, load_sequence, render_message};

use crate::cli::ConfigAction;
use crate::config::MarkytConfig;
use crate::error::{Error, Result};

// ============================================================================
// Lead and template loading
// ============================================================================

/// Loads a single lead record from a JSON file.
pub fn load_lead_json(path: &Path) -> Result<Lead> {
    let raw = std::fs::read_to_string(path).map_err(|e| CoreError::io_with_path(e, path))?;
    let lead: Lead = serde_json::from_str(&raw)
        .map_err(|e| CoreError::parse(format!("invalid lead file {}: {e}", path.display())))?;
    tracing::debug!(lead_id = %lead.id, path = %path.display(), "Loaded lead");
    Ok(lead)
}

/// Loads a batch of leads from a CSV file.
///
/// Recognized columns are `id`, `first_name`, `last_name`, `company`,
/// and `position`; every other column becomes a custom attribute keyed
/// by its header. Empty cells are skipped.
pub fn load_leads_csv(path: &Path) -> Result<Vec<Lead>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    if !headers.iter().any(|header| header == "id") {
        return Err(Error::invalid_input(format!(
            "lead batch {} has no `id` column",
            path.display()
        )));
    }

    let mut leads = Vec::new();
    for record in reader.records() {
        let record = record?;
        leads.push(lead_from_record(&headers, &record));
    }
    tracing::debug!(count = leads.len(), path = %path.display(), "Loaded lead batch");
    Ok(leads)
}

fn lead_from_record(headers: &csv::StringRecord, record: &csv::StringRecord) -> Lead {
    let mut id = String::new();
    let mut first_name = String::new();
    let mut last_name = String::new();
    let mut company = None;
    let mut position = None;
    let mut custom = Vec::new();

    for (header, value) in headers.iter().zip(record.iter()) {
        match header {
            "id" => id = value.to_string(),
            "first_name" => first_name = value.to_string(),
            "last_name" => last_name = value.to_string(),
            "company" => company = non_empty_cell(value),
            "position" => position = non_empty_cell(value),
            extra => {
                if !value.is_empty() {
                    custom.push((extra.to_string(), value.to_string()));
                }
            }
        }
    }

    let mut lead = Lead::new(id, first_name, last_name);
    if let Some(company) = company {
        lead = lead.with_company(company);
    }
    if let Some(position) = position {
        lead = lead.with_position(position);
    }
    for (key, value) in custom {
        lead = lead.with_custom(key, value);
    }
    lead
}

fn non_empty_cell(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Reads a template file; its whole text is the message body.
pub fn load_template(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).map_err(|e| CoreError::io_with_path(e, path))?;
    Ok(raw)
}

// ============================================================================
// Lead commands
// ============================================================================

/// Derives and prints a lead's landing slug and URL.
pub fn cmd_slug(config: &MarkytConfig, lead_path: &Path, subdomain: Option<&str>) -> Result<()> {
    let lead = load_lead_json(lead_path)?;
    let client = match subdomain {
        Some(subdomain) => Client::new("ad-hoc", "Ad-hoc client").with_subdomain(subdomain),
        None => config.client(),
    };

    println!("slug: {}", derive_slug(&lead));
    println!("url:  {}", landing_url(&client, &lead));
    Ok(())
}

/// Personalizes a template for one lead and prints the result.
pub fn cmd_render(
    config: &MarkytConfig,
    template_path: &Path,
    subject: Option<&str>,
    lead_path: &Path,
    json: bool,
) -> Result<()> {
    let body = load_template(template_path)?;
    let lead = load_lead_json(lead_path)?;
    let template = MessageTemplate::new(subject.unwrap_or_default(), body);

    let replacements = replacements_for(config, &lead, &template);
    let message = render_message(&template, &replacements);

    if json {
        println!("{}", serde_json::to_string_pretty(&message)?);
    } else {
        if !message.subject.is_empty() {
            println!("Subject: {}", message.subject);
        }
        println!("{}", message.body);
    }
    Ok(())
}

// The landing URL is derived only when the template asks for one.
fn replacements_for(
    config: &MarkytConfig,
    lead: &Lead,
    template: &MessageTemplate,
) -> ReplacementSet {
    let mut replacements = ReplacementSet::from_lead(lead);
    if let Some(alias) = config.landing_alias() {
        replacements = replacements.with_landing_alias(alias);
    }
    if mentions_landing_token(&template.subject, &replacements)
        || mentions_landing_token(&template.body, &replacements)
    {
        replacements = replacements.with_landing_url(landing_url(&config.client(), lead));
    }
    replacements
}

/// Lists the tokens a template mentions, with a resolution report when
/// a lead is supplied.
pub fn cmd_tokens(
    config: &MarkytConfig,
    template_path: &Path,
    lead_path: Option<&Path>,
) -> Result<()> {
    let body = load_template(template_path)?;

    let lead = lead_path.map(load_lead_json).transpose()?;
    let mut replacements = match &lead {
        Some(lead) => ReplacementSet::from_lead(lead),
        None => ReplacementSet::new(),
    };
    if let Some(alias) = config.landing_alias() {
        replacements = replacements.with_landing_alias(alias);
    }

    let tokens = scan_tokens(&body, &replacements);
    if tokens.is_empty() {
        println!("No tokens found.");
        return Ok(());
    }

    println!("Tokens:");
    for token in &tokens {
        println!("  {} ({})", token.raw(), kind_label(token));
    }

    if lead.is_some() {
        let report = personalize_with_report(&body, &replacements);
        println!();
        println!("Resolved:   {}", token_list(&report.resolved));
        println!("Unresolved: {}", token_list(&report.unresolved));
        for (unknown, suggestion) in &report.suggestions {
            println!("Unknown token {{{unknown}}}; did you mean {{{suggestion}}}?");
        }
    }
    Ok(())
}

fn kind_label(token: &Token) -> &'static str {
    match token.kind() {
        TokenKind::Simple(_) => "simple",
        TokenKind::Custom(_) => "custom",
        TokenKind::Unknown(_) => "unknown",
    }
}

fn token_list(names: &[String]) -> String {
    if names.is_empty() {
        return "(none)".to_string();
    }
    names
        .iter()
        .map(|name| format!("{{{name}}}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a sequence for one lead or a CSV batch.
pub fn cmd_sequence(
    config: &MarkytConfig,
    file: &Path,
    lead: Option<&Path>,
    leads: Option<&Path>,
    start: Option<&str>,
    json: bool,
) -> Result<()> {
    let sequence = load_sequence(file)?;
    let start = start.map(parse_start).transpose()?;

    let batch: Vec<Lead> = match (lead, leads) {
        (Some(path), None) => vec![load_lead_json(path)?],
        (None, Some(path)) => load_leads_csv(path)?,
        (Some(_), Some(_)) => {
            return Err(Error::invalid_input(
                "pass either --lead or --leads, not both",
            ));
        }
        (None, None) => {
            return Err(Error::invalid_input("one of --lead or --leads is required"));
        }
    };

    let renderer = config.renderer();
    let client = config.client();
    let rendered: Vec<RenderedSequence> = batch
        .iter()
        .map(|lead| match start {
            Some(at) => renderer.render_for_lead_at(&sequence, &client, lead, at),
            None => renderer.render_for_lead(&sequence, &client, lead),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        for rendered_sequence in &rendered {
            print_rendered(rendered_sequence);
        }
    }
    Ok(())
}

fn parse_start(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| Error::invalid_input(format!("invalid --start time '{raw}': {e}")))
}

fn print_rendered(rendered: &RenderedSequence) {
    println!(
        "sequence: {} (lead {})",
        rendered.sequence_name, rendered.lead_id
    );
    for step in &rendered.steps {
        println!();
        println!("--- step {} (day {}) ---", step.step_index + 1, step.delay_days);
        if let Some(at) = step.scheduled_at {
            println!("scheduled: {}", at.to_rfc3339());
        }
        if !step.message.subject.is_empty() {
            println!("Subject: {}", step.message.subject);
        }
        println!("{}", step.message.body);
    }
}

// ============================================================================
// Config commands
// ============================================================================

/// Handles a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
        ConfigAction::Show => cmd_config_show(config_path),
    }
}

/// Shows the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match MarkytConfig::resolve_config_path(config_path) {
        Some(path) => {
            let exists = path.exists();
            println!("{}", path.display());
            if !exists {
                eprintln!("(file does not exist; run `markyt config init` to create it)");
            }
            Ok(())
        }
        None => Err(CoreError::config(
            "Could not determine config directory for this platform",
        )
        .into()),
    }
}

/// Gets a configuration value by dotted key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = MarkytConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| CoreError::config(e.to_string()))?;
    match get_nested_value(&value, key) {
        Some(val) => {
            println!("{}", format_toml_value(val));
            Ok(())
        }
        None => Err(CoreError::config(format!("Key '{key}' not found in configuration")).into()),
    }
}

/// Sets a configuration value by dotted key in the config file.
pub fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = MarkytConfig::resolve_config_path(config_path)
        .ok_or_else(|| CoreError::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(CoreError::config(format!(
            "Config file does not exist at {}. Run `markyt config init` first.",
            path.display()
        ))
        .into());
    }

    let content = std::fs::read_to_string(&path).map_err(|e| CoreError::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| CoreError::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| CoreError::config(e.to_string()))?;
    std::fs::write(&path, toml_str).map_err(|e| CoreError::io_with_path(e, &path))?;

    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

/// Creates a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => MarkytConfig::default_config_path()
            .ok_or_else(|| CoreError::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(CoreError::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CoreError::io_with_path(e, parent))?;
    }

    let config = MarkytConfig::default();
    let toml_str = config.to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| CoreError::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(())
}

/// Prints the resolved configuration as TOML.
pub fn cmd_config_show(config_path: Option<&str>) -> Result<()> {
    let config = MarkytConfig::load(config_path)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers (public for reuse)
// ============================================================================

/// Navigates a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let parts: Vec<&str> = key.split('.').collect();
    let mut current = value;
    for part in &parts {
        current = current.as_table()?.get(*part)?;
    }
    Some(current)
}

/// Sets a value at a dotted key path, creating intermediate tables as
/// needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let mut current = root;

    for (i, part) in parts.iter().enumerate() {
        let table = current
            .as_table_mut()
            .ok_or_else(|| CoreError::config("Cannot set key on a non-table value"))?;

        if i == parts.len() - 1 {
            table.insert(part.to_string(), value);
            return Ok(());
        }

        current = table
            .entry(part.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    Err(CoreError::config("Empty key path").into())
}

/// Parses a string value into a TOML value, auto-detecting the type.
///
/// Priority: bool, then integer, then float, then string.
pub fn parse_value(s: &str) -> toml::Value {
    if s == "true" {
        return toml::Value::Boolean(true);
    }
    if s == "false" {
        return toml::Value::Boolean(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Formats a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
