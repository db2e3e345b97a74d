//! Command-line front-end
//!
//! `expertise-admin <resource> <command>`: every command drives the same
//! page, dialogs and store as the interactive screens and returns the
//! rendered text.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use expertise_client::*;
use shared::StatusCode;

use crate::core::AppConfig;
use crate::resources::{AdminResource, ResourceKind};
use crate::ui::ResourceForm;

#[derive(Parser, Debug)]
#[command(name = "expertise-admin", version, about = "Back-office des dossiers d'expertise")]
pub struct Cli {
    #[command(flatten)]
    pub config: AppConfig,

    /// Resource to manage
    #[arg(value_enum)]
    pub resource: ResourceKind,

    #[command(subcommand)]
    pub command: ResourceCommand,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ResourceCommand {
    /// List one page
    List {
        /// Search text
        #[arg(short, long)]
        search: Option<String>,
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Status code (active, inactive, pending, rejected)
        #[arg(long)]
        status: Option<String>,
        /// Relation filter, e.g. `--filter brand_id=3`
        #[arg(long = "filter", value_parser = parse_relation)]
        relations: Vec<(String, i64)>,
    },

    /// Show one entity
    Show { id: i64 },

    /// Create an entity from `--set field=value` pairs
    Create {
        #[arg(long = "set", value_parser = parse_key_value)]
        set: Vec<(String, String)>,
    },

    /// Update the given fields of an entity
    Update {
        id: i64,
        #[arg(long = "set", value_parser = parse_key_value)]
        set: Vec<(String, String)>,
    },

    /// Delete an entity (asks for confirmation)
    Delete {
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Set status to active
    Enable { id: i64 },

    /// Set status to inactive
    Disable { id: i64 },

    /// List form fields of the resource
    Fields,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_relation(raw: &str) -> Result<(String, i64), String> {
    let (key, value) = parse_key_value(raw)?;
    let id = value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("`{value}` is not an id"))?;
    Ok((key, id))
}

/// Parse config, build the network client and run the command
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    cli.config.validate()?;
    let http = Arc::new(
        cli.config
            .client_config()
            .build_http_client()
            .context("Failed to build HTTP client")?,
    );
    let mut stdin = std::io::stdin().lock();
    dispatch(cli.resource, cli.command, http, &cli.config, &mut stdin).await
}

/// Route a command to its resource
pub async fn dispatch<H: HttpClient + 'static>(
    kind: ResourceKind,
    command: ResourceCommand,
    http: Arc<H>,
    config: &AppConfig,
    confirm: &mut dyn BufRead,
) -> anyhow::Result<String> {
    macro_rules! route {
        ($($kind:ident => $resource:ty),+ $(,)?) => {
            match kind {
                $(ResourceKind::$kind => execute::<$resource, H>(command, http, config, confirm).await,)+
            }
        };
    }

    route! {
        Assignments => Assignments,
        Vehicles => Vehicles,
        Brands => Brands,
        VehicleModels => VehicleModels,
        Colors => Colors,
        Clients => Clients,
        Insurers => Insurers,
        Repairers => Repairers,
        Banks => Banks,
        WorkforceRates => WorkforceRates,
        PaintPrices => PaintPrices,
        Statuses => Statuses,
        Deadlines => Deadlines,
        VehicleAges => VehicleAges,
        WorkFees => WorkFees,
        DocumentTransmitteds => DocumentTransmitteds,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "o" | "oui" | "y" | "yes")
}

/// Run one command against resource `R`
pub async fn execute<R: AdminResource, H: HttpClient + 'static>(
    command: ResourceCommand,
    http: Arc<H>,
    config: &AppConfig,
    confirm: &mut dyn BufRead,
) -> anyhow::Result<String> {
    let mut page = config.page::<R, H>(http);

    match command {
        ResourceCommand::List {
            search,
            page: number,
            status,
            relations,
        } => {
            let mut filters = page.store().filters().with_page(number);
            if let Some(search) = search {
                filters = filters.with_search(search);
            }
            if let Some(status) = status {
                let code = StatusCode::parse(&status).ok_or_else(|| anyhow!("Statut inconnu : {status}"))?;
                filters = filters.with_status(code);
            }
            for (key, id) in relations {
                filters = filters.with_relation(key, id);
            }
            page.store().set_filters(filters);
            page.mount().await?;
            Ok(page.render())
        }

        ResourceCommand::Show { id } => {
            page.show(id).await?;
            Ok(page.view_dialog().render())
        }

        ResourceCommand::Create { set } => {
            page.open_create();
            for (key, value) in set {
                page.create_dialog().set_field(&key, value)?;
            }
            let created = page.submit_create().await?;
            page.view_dialog().open(created);
            Ok(page.render())
        }

        ResourceCommand::Update { id, set } => {
            let entity = page.store().fetch_one(id).await?;
            page.edit_dialog().open(entity);
            for (key, value) in set {
                page.edit_dialog().set_field(&key, value)?;
            }
            let updated = page.submit_edit().await?;
            page.view_dialog().open(updated);
            Ok(page.render())
        }

        ResourceCommand::Delete { id, yes } => {
            let entity = page.store().fetch_one(id).await?;
            page.delete_dialog().open(entity);
            if !yes {
                eprint!("{} [o/N] ", page.delete_dialog().prompt());
                let mut answer = String::new();
                confirm.read_line(&mut answer)?;
                if !is_yes(&answer) {
                    page.delete_dialog().cancel();
                    return Ok("Suppression annulée".to_string());
                }
            }
            page.confirm_delete().await?;
            Ok(page.render())
        }

        ResourceCommand::Enable { id } => {
            page.store().enable(id).await?;
            page.toasts_mut().success(format!("{} : activé", R::SINGULAR));
            Ok(page.render())
        }

        ResourceCommand::Disable { id } => {
            page.store().disable(id).await?;
            page.toasts_mut().success(format!("{} : désactivé", R::SINGULAR));
            Ok(page.render())
        }

        ResourceCommand::Fields => {
            let lines: Vec<String> = <R::Form as ResourceForm<R>>::fields()
                .iter()
                .map(|f| {
                    let required = if f.required { " *" } else { "" };
                    format!("{:<36} {}{}", f.key, f.label, required)
                })
                .collect();
            Ok(format!("{}\n{}", R::TITLE, lines.join("\n")))
        }
    }
}
