//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::config_file::ConfigFile;
use super::manager::Settings;
use crate::action::DeletionTarget;
use crate::classify::Category;
use crate::core::{DirectoryCursor, RecordId};
use crate::integrate::OutputFormat;
use crate::view::{parse_date_bound, DateRange, ViewQuery};

/// View selection from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewArgs {
    pub query: ViewQuery,
    /// Use the recent cap from settings
    pub recent: bool,
    /// 1-based page number
    pub page: usize,
    /// Page size override
    pub per_page: Option<usize>,
}

/// Subcommand to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List one directory level
    Ls {
        listing: PathBuf,
        cursor: Option<DirectoryCursor>,
    },
    /// Print the virtual tree below a cursor
    Tree {
        listing: PathBuf,
        cursor: Option<DirectoryCursor>,
        depth: Option<usize>,
    },
    /// Print breadcrumbs for a cursor
    Crumbs { cursor: DirectoryCursor },
    /// Filtered, paginated view of the flat list
    View { listing: PathBuf, args: ViewArgs },
    /// Classify a single name/location/MIME triple
    Classify {
        mime: String,
        location: String,
        name: String,
    },
    /// Compute (and optionally execute) a deletion plan
    PlanDelete {
        listing: PathBuf,
        target: DeletionTarget,
        execute: bool,
    },
    Help,
    Version,
}

/// Application configuration from CLI args and config file
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub format: OutputFormat,
    pub settings: Settings,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        // Load config file first (provides defaults)
        let config_file = ConfigFile::load();
        Self::parse(env::args().skip(1), &config_file)
    }

    /// Parse arguments (without the program name) on top of a config file
    pub fn parse<I>(args: I, config_file: &ConfigFile) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut settings = Settings::from(config_file);
        let mut format = OutputFormat::default();

        let mut subcommand: Option<String> = None;
        let mut positional: Vec<String> = Vec::new();
        let mut cursor: Option<DirectoryCursor> = None;
        let mut depth: Option<usize> = None;
        let mut view = ViewArgs {
            page: 1,
            ..ViewArgs::default()
        };
        let mut from: Option<String> = None;
        let mut to: Option<String> = None;
        let mut mime = String::new();
        let mut location = String::new();
        let mut name = String::new();
        let mut folder: Option<String> = None;
        let mut ids: Option<Vec<RecordId>> = None;
        let mut execute = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => {
                    return Ok(Self {
                        command: Command::Help,
                        format,
                        settings,
                    })
                }
                "--version" | "-V" => {
                    return Ok(Self {
                        command: Command::Version,
                        format,
                        settings,
                    })
                }
                "--format" | "-f" => {
                    let fmt = next_value(&mut args, "--format")?;
                    format = OutputFormat::from_str(&fmt).map_err(|_| {
                        anyhow::anyhow!("Invalid format '{}'. Valid formats: lines, json", fmt)
                    })?;
                }
                "--json" => format = OutputFormat::Json,
                "--root" => {
                    settings.media_root = DirectoryCursor::root(&next_value(&mut args, "--root")?)
                }
                "--home-label" => settings.home_label = next_value(&mut args, "--home-label")?,
                "--hidden-sentinel" => {
                    settings.hidden_sentinel = next_value(&mut args, "--hidden-sentinel")?
                }
                "--owner" => settings.search_owner = true,
                "--allow-root-delete" => settings.allow_root_delete = true,
                "--cursor" | "-c" => {
                    cursor = Some(DirectoryCursor::new(next_value(&mut args, "--cursor")?))
                }
                "--depth" => depth = Some(parse_number(&next_value(&mut args, "--depth")?, "--depth")?),
                "--recent" => view.recent = true,
                "--limit" => {
                    view.query.limit =
                        Some(parse_number(&next_value(&mut args, "--limit")?, "--limit")?)
                }
                "--category" => {
                    let raw = next_value(&mut args, "--category")?;
                    let category = Category::from_str(&raw).map_err(|_| {
                        anyhow::anyhow!(
                            "Invalid category '{}'. Valid categories: image, audio, video, document, archive, other",
                            raw
                        )
                    })?;
                    view.query.category = Some(category);
                }
                "--search" | "-s" => view.query.search = Some(next_value(&mut args, "--search")?),
                "--from" => from = Some(next_value(&mut args, "--from")?),
                "--to" => to = Some(next_value(&mut args, "--to")?),
                "--page" => view.page = parse_number(&next_value(&mut args, "--page")?, "--page")?,
                "--per-page" => {
                    view.per_page = Some(parse_number(
                        &next_value(&mut args, "--per-page")?,
                        "--per-page",
                    )?)
                }
                "--mime" => mime = next_value(&mut args, "--mime")?,
                "--location" => location = next_value(&mut args, "--location")?,
                "--name" => name = next_value(&mut args, "--name")?,
                "--folder" => folder = Some(next_value(&mut args, "--folder")?),
                "--ids" => {
                    let raw = next_value(&mut args, "--ids")?;
                    ids = Some(
                        raw.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(RecordId::from)
                            .collect(),
                    );
                }
                "--execute" => execute = true,
                value if !value.starts_with('-') || value == "-" => {
                    if subcommand.is_none() {
                        subcommand = Some(value.to_string());
                    } else {
                        positional.push(value.to_string());
                    }
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        if from.is_some() || to.is_some() {
            let from = from.map(|s| parse_date_bound(&s, false)).transpose()?;
            let to = to.map(|s| parse_date_bound(&s, true)).transpose()?;
            view.query.date_range = Some(DateRange::new(from, to));
        }

        let Some(subcommand) = subcommand else {
            anyhow::bail!("Missing command. Use --help for usage information.");
        };
        let mut positional = positional.into_iter();

        let command = match subcommand.as_str() {
            "ls" | "list" => Command::Ls {
                listing: require_listing(&mut positional, &subcommand)?,
                cursor,
            },
            "tree" => Command::Tree {
                listing: require_listing(&mut positional, &subcommand)?,
                cursor,
                depth,
            },
            "crumbs" | "breadcrumbs" => {
                let cursor = positional
                    .next()
                    .map(DirectoryCursor::new)
                    .or(cursor)
                    .ok_or_else(|| anyhow::anyhow!("crumbs requires a cursor"))?;
                Command::Crumbs { cursor }
            }
            "view" => Command::View {
                listing: require_listing(&mut positional, &subcommand)?,
                args: view,
            },
            "classify" => {
                if let Some(extra) = positional.next() {
                    location = extra;
                }
                Command::Classify {
                    mime,
                    location,
                    name,
                }
            }
            "plan-delete" | "rm" => {
                let target = match (folder, ids) {
                    (Some(folder), None) => DeletionTarget::FolderPrefix(folder),
                    (None, Some(ids)) => DeletionTarget::RecordIds(ids),
                    (Some(_), Some(_)) => {
                        anyhow::bail!("plan-delete takes either --folder or --ids, not both")
                    }
                    (None, None) => anyhow::bail!("plan-delete requires --folder or --ids"),
                };
                Command::PlanDelete {
                    listing: require_listing(&mut positional, &subcommand)?,
                    target,
                    execute,
                }
            }
            other => anyhow::bail!(
                "Unknown command: {}. Use --help for usage information.",
                other
            ),
        };

        if let Some(extra) = positional.next() {
            anyhow::bail!("Unexpected argument: {}", extra);
        }

        Ok(Self {
            command,
            format,
            settings,
        })
    }
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> anyhow::Result<String> {
    args.next()
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", flag))
}

fn parse_number(raw: &str, flag: &str) -> anyhow::Result<usize> {
    raw.parse()
        .map_err(|_| anyhow::anyhow!("{} requires a positive integer, got '{}'", flag, raw))
}

fn require_listing<I: Iterator<Item = String>>(
    positional: &mut I,
    command: &str,
) -> anyhow::Result<PathBuf> {
    positional
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("{} requires a listing file (JSON array of records)", command))
}

pub fn help_text() -> String {
    format!(
        r#"mtree {} - browse a flat media listing as a folder tree

USAGE:
    mtree <COMMAND> [OPTIONS]

COMMANDS:
    ls LISTING              List one directory level (folders first)
    tree LISTING            Print the folder tree below the cursor
    crumbs CURSOR           Print breadcrumbs for a cursor
    view LISTING            Filtered, paginated view of all records
    classify [LOCATION]     Classify a file from its location, name and MIME type
    plan-delete LISTING     Compute the records a deletion would remove

OPTIONS:
    -c, --cursor PATH       Directory to browse (default: media root)
    --depth N               Limit tree depth to N levels
    --recent                Only the most recent records (arrival order)
    --limit N               Keep the first N matches
    --category CAT          image, audio, video, document, archive, other
    -s, --search TERM       Case-insensitive substring match on names
    --owner                 Also match uploader display names
    --from DATE             Updated on or after DATE (YYYY-MM-DD or RFC 3339)
    --to DATE               Updated on or before DATE
    --page N                Page number (1-based)
    --per-page N            Page size
    --mime TYPE             MIME hint for classify
    --location PATH         Storage location for classify
    --name NAME             Display name for classify
    --folder PREFIX         Delete everything under PREFIX
    --ids A,B,...           Delete exactly these record ids
    --execute               Apply the deletion plan to the listing file
    --allow-root-delete     Permit deleting the whole media root
    --root PREFIX           Media root (default: media/)
    --home-label LABEL      Label of the first breadcrumb
    --hidden-sentinel NAME  Records containing NAME are hidden
    -f, --format FMT        Output format: lines, json
    --json                  Same as --format json
    -h, --help              Show this help message
    -V, --version           Show version

CONFIG FILE:
    ~/.config/mediatree/config.toml    Main configuration file

ENVIRONMENT:
    MTREE_LOG               Log filter (e.g. debug, mediatree=trace)
"#,
        env!("CARGO_PKG_VERSION")
    )
}
