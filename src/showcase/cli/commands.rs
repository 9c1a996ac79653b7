//! Argument dispatch for the `showcase` binary.
//!
//! `run()` parses the command line, builds an [`AppContext`] and hands off to one `handle_*`
//! function per subcommand. Handlers call the API and render what comes back; they hold no
//! browsing logic.

use super::logging::init_tracing;
use super::render::{print_result, print_views};
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use directories::ProjectDirs;
use showcase::api::{CmdResult, ConfigAction, ShowcaseApi, ShowcasePaths};
use showcase::commands::config as config_cmd;
use showcase::config::ShowcaseConfig;
use showcase::error::{Result, ShowcaseError};
use showcase::model::{ItemId, ProfileField, ViewKind};
use showcase::store::builtin::BuiltinSource;
use showcase::store::dir::DirSource;
use showcase::store::CatalogSource;
use std::path::PathBuf;
use tracing::debug;

const HOME_ENV: &str = "SHOWCASE_HOME";

type Api = ShowcaseApi<Box<dyn CatalogSource>>;

struct AppContext {
    config: ShowcaseConfig,
    paths: ShowcasePaths,
    catalog_dir: Option<PathBuf>,
}

impl AppContext {
    fn api(&self, view: ViewKind) -> Result<Api> {
        let source: Box<dyn CatalogSource> = match &self.catalog_dir {
            Some(dir) => Box::new(DirSource::new(dir)),
            None => Box::new(BuiltinSource::new()),
        };
        ShowcaseApi::new(source, view, self.config.trim_query)
    }

    fn resolve_view(&self, view: Option<String>) -> Result<ViewKind> {
        match view {
            Some(name) => name.parse(),
            None => Ok(self.config.default_view),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Browse {
            view,
            category,
            search,
            like,
            liked,
        }) => handle_browse(&ctx, view, category, search, like, liked),
        Some(Commands::Categories { view }) => handle_categories(&ctx, view),
        Some(Commands::Views) => {
            print_views(ctx.config.default_view);
            Ok(())
        }
        Some(Commands::Account { name, email }) => handle_account(&ctx, name, email),
        Some(Commands::Shell { view }) => handle_shell(&ctx, view),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_browse(&ctx, None, None, Vec::new(), Vec::new(), false),
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "showcase", "showcase")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ShowcaseError::Config("Could not determine config dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = ShowcaseConfig::load(&config_dir)?;
    let catalog_dir = cli
        .catalog_dir
        .clone()
        .or_else(|| config.catalog_dir.clone());
    debug!(config_dir = %config_dir.display(), ?catalog_dir, "context ready");

    Ok(AppContext {
        config,
        paths: ShowcasePaths { config_dir },
        catalog_dir,
    })
}

pub(super) fn parse_item_id(input: &str) -> Result<ItemId> {
    input.parse().map_err(ShowcaseError::Input)
}

pub(super) fn parse_field(input: &str) -> Result<ProfileField> {
    input.parse().map_err(ShowcaseError::Input)
}

fn handle_browse(
    ctx: &AppContext,
    view: Option<String>,
    category: Option<String>,
    search: Vec<String>,
    like: Vec<String>,
    liked: bool,
) -> Result<()> {
    let view = ctx.resolve_view(view)?;
    let mut api = ctx.api(view)?;

    if let Some(category) = category {
        api.select_category(&category)?;
    }
    if !search.is_empty() {
        api.search(&search.join(" "))?;
    }

    let mut notes = CmdResult::default();
    for raw in &like {
        let result = api.toggle_like(parse_item_id(raw)?)?;
        notes.messages.extend(result.messages);
    }

    let result = if liked { api.liked()? } else { api.list()? };
    print_result(&result);
    print_result(&notes);
    Ok(())
}

fn handle_categories(ctx: &AppContext, view: Option<String>) -> Result<()> {
    let view = ctx.resolve_view(view)?;
    let api = ctx.api(view)?;
    print_result(&api.categories()?);
    Ok(())
}

fn handle_account(ctx: &AppContext, name: Option<String>, email: Option<String>) -> Result<()> {
    let mut api = ctx.api(ViewKind::Account)?;
    let edits: Vec<(ProfileField, String)> = [
        (ProfileField::Name, name),
        (ProfileField::Email, email),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect();

    if edits.is_empty() {
        print_result(&api.show_profile()?);
        return Ok(());
    }

    api.begin_edit()?;
    for (field, value) in &edits {
        api.set_field(*field, value)?;
    }
    print_result(&api.save_profile()?);
    Ok(())
}

fn handle_shell(ctx: &AppContext, view: Option<String>) -> Result<()> {
    let view = ctx.resolve_view(view)?;
    let mut api = ctx.api(view)?;
    let stdin = std::io::stdin();
    shell::run(&mut api, stdin.lock())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    print_result(&config_cmd::run(&ctx.paths, action)?);
    Ok(())
}
