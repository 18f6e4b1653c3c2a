use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::Subcommand;
use docbind_bind::{bind, extract_variables, preview_legacy, table_insert_text};
use docbind_catalog::Catalogs;
use docbind_core::{Template, Value};
use docbind_layout::{sanitize, SkeletonLayout};
use docbind_sample::Synthesizer;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use crate::error::CliError;

#[derive(Subcommand)]
pub enum Command {
    /// List the document kinds with a field catalog
    Catalogs,

    /// Show the variables and table layouts of a document kind
    Fields {
        #[arg(value_name = "KIND")]
        kind: String,

        /// Also print a plain-text table block for each array field
        #[arg(long)]
        legacy: bool,
    },

    /// Generate sample data for a document kind
    Sample {
        #[arg(value_name = "KIND")]
        kind: String,

        /// Include the ambient print context used by designer previews
        #[arg(long)]
        preview: bool,

        /// Fixed clock, "YYYY-MM-DD HH:MM:SS"
        #[arg(long, value_name = "TIMESTAMP", value_parser = parse_timestamp)]
        at: Option<NaiveDateTime>,
    },

    /// Build a first-draft template for a document kind
    Skeleton {
        #[arg(value_name = "KIND")]
        kind: String,

        /// Template whose basePdf and extra properties are kept
        #[arg(long, value_name = "FILE")]
        base: Option<PathBuf>,

        /// Layout overrides (YAML or JSON)
        #[arg(long, value_name = "FILE")]
        layout: Option<PathBuf>,
    },

    /// Bind data to a template and print the renderer inputs
    Bind {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        /// Business object (YAML or JSON)
        #[arg(long, value_name = "FILE", conflicts_with = "kind", required_unless_present = "kind")]
        data: Option<PathBuf>,

        /// Bind generated sample data for this document kind instead
        #[arg(long, value_name = "KIND")]
        kind: Option<String>,

        #[arg(long, value_name = "TIMESTAMP", value_parser = parse_timestamp)]
        at: Option<NaiveDateTime>,
    },

    /// List the variables a stored template refers to
    Vars {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,
    },

    /// Preview a plain-text template with `{{name}}` shown as `[name]`
    Preview {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,
    },

    /// Repair a stored template so it renders
    Sanitize {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,
    },
}

fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map_err(|e| e.to_string())
}

fn synthesizer(at: Option<NaiveDateTime>) -> Synthesizer {
    at.map_or_else(Synthesizer::new, Synthesizer::at)
}

fn read_text(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
        .map_err(|e| CliError::Input(format!("{e:#}")))
}

fn read_template(path: &Path) -> Result<Template, CliError> {
    let text = read_text(path)?;
    Template::from_json_str(&text)
        .with_context(|| format!("{} is not a template", path.display()))
        .map_err(|e| CliError::Input(format!("{e:#}")))
}

fn emit<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value)
        .context("failed to serialize output")
        .map_err(|e| CliError::Output(format!("{e:#}")))?;
    println!("{out}");
    Ok(())
}

pub fn run(command: Command) -> Result<(), CliError> {
    let catalogs = Catalogs::builtin();

    match command {
        Command::Catalogs => {
            let kinds: Vec<_> = catalogs
                .list()
                .map(|c| {
                    json!({
                        "kind": c.kind,
                        "display_name": c.display_name,
                        "print_code": c.print_code,
                        "fields": c.fields.len(),
                    })
                })
                .collect();
            emit(&kinds)
        }
        Command::Fields { kind, legacy } => {
            let variables = catalogs.variable_items(&kind)?;
            let tables = catalogs.array_tables(&kind)?;
            let mut out = json!({
                "kind": kind,
                "print_code": catalogs.print_code(&kind),
                "variables": variables,
                "tables": tables,
            });
            if legacy {
                let blocks: Vec<String> = tables.iter().map(table_insert_text).collect();
                out["legacy_tables"] = json!(blocks);
            }
            emit(&out)
        }
        Command::Sample { kind, preview, at } => {
            let synth = synthesizer(at);
            let value = if preview {
                synth.preview_variables(&catalogs, &kind)
            } else {
                synth.synthesize_document(&catalogs, &kind)?
            };
            emit(&value)
        }
        Command::Skeleton { kind, base, layout } => {
            let layout = match layout {
                Some(path) => SkeletonLayout::from_yaml_str(&read_text(&path)?)?,
                None => SkeletonLayout::default(),
            };
            let base = match base {
                Some(path) => Template::parse_or_blank(&read_text(&path)?),
                None => Template::blank(),
            };
            let items = catalogs.variable_items(&kind)?;
            let tables = catalogs.array_tables(&kind)?;
            let template = layout.build(&base, &items, &tables);
            info!(kind = %kind, regions = template.first_page().len(), "built skeleton");
            emit(&template)
        }
        Command::Bind {
            template,
            data,
            kind,
            at,
        } => {
            let template = read_template(&template)?;
            let object = match (data, kind) {
                (Some(path), _) => Value::from_yaml_str(&read_text(&path)?)?,
                (None, Some(kind)) => synthesizer(at).synthesize_document(&catalogs, &kind)?,
                (None, None) => return Err(CliError::Input("either --data or --kind is required".into())),
            };
            if !matches!(object, Value::Map(_)) {
                debug!("bound object is not a map, only regions with paths can match");
            }
            emit(&bind(&template, &object))
        }
        Command::Vars { template } => emit(&extract_variables(&read_text(&template)?)),
        Command::Preview { template } => {
            println!("{}", preview_legacy(&read_text(&template)?));
            Ok(())
        }
        Command::Sanitize { template } => emit(&sanitize(&read_template(&template)?)),
    }
}
