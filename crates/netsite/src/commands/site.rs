//! Site command handlers.
//!
//! Each verb loads the state file, runs one reconciler operation, and
//! writes the record back.

use std::path::Path;

use netsite_core::{CoreError, NetlifyClient, SiteId, SiteState, TrackedSite, reconciler};

use crate::cli::{GlobalOpts, SiteArgs, SiteCommand};
use crate::config;
use crate::error::CliError;
use crate::output;
use crate::state;

use super::util;

// ── Rendering ───────────────────────────────────────────────────────

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

fn detail(s: &SiteState) -> String {
    let mut lines = vec![
        format!("ID:            {}", s.id),
        format!("Name:          {}", or_dash(&s.name)),
        format!("Custom domain: {}", or_dash(&s.custom_domain)),
        format!("Deploy URL:    {}", or_dash(&s.deploy_url)),
        format!("Account:       {}", or_dash(&s.account_slug)),
        format!("Account name:  {}", or_dash(&s.account_name)),
    ];
    match s.repo {
        Some(ref repo) => {
            lines.push(format!(
                "Repository:    {} {}@{}",
                repo.provider, repo.repo_path, repo.repo_branch
            ));
            if let Some(ref cmd) = repo.command {
                lines.push(format!("Build command: {cmd}"));
            }
            if let Some(ref dir) = repo.dir {
                lines.push(format!("Publish dir:   {dir}"));
            }
            if let Some(id) = repo.installation_id {
                lines.push(format!("Installation:  {id}"));
            }
        }
        None => lines.push("Repository:    -".into()),
    }
    lines.join("\n")
}

fn print_state(s: &SiteState, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.output, s, detail, |s| s.id.to_string())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn tracked_id(tracked: &TrackedSite, path: &Path) -> Result<SiteId, CliError> {
    tracked.id.clone().ok_or_else(|| CliError::NotTracked {
        path: path.to_path_buf(),
    })
}

/// A remote 404 on a tracked site reports as `NotFound` for that ID.
fn site_error(id: &SiteId, err: CoreError) -> CliError {
    if err.is_not_found() {
        CliError::NotFound { id: id.to_string() }
    } else {
        err.into()
    }
}

fn connect(global: &GlobalOpts) -> Result<NetlifyClient, CliError> {
    Ok(config::resolve_client_config(global)?.connect()?)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: SiteArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = args.state.as_path();
    let tracked = state::load(path)?;

    match args.command {
        SiteCommand::Create { file } => create(tracked, path, &file, global).await,
        SiteCommand::Read => read(tracked, path, global).await,
        SiteCommand::Update { file } => update(tracked, path, file.as_deref(), global).await,
        SiteCommand::Delete => delete(tracked, path, global).await,
        SiteCommand::Import { id } => import(&tracked, path, &id, global).await,
        SiteCommand::Show => {
            tracked_id(&tracked, path)?;
            print_tracked(&tracked, global)
        }
    }
}

fn ensure_untracked(tracked: &TrackedSite, path: &Path) -> Result<(), CliError> {
    match tracked.id {
        Some(ref id) => Err(CliError::AlreadyTracked {
            id: id.to_string(),
            path: path.to_path_buf(),
        }),
        None => Ok(()),
    }
}

async fn create(
    mut tracked: TrackedSite,
    path: &Path,
    file: &Path,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    ensure_untracked(&tracked, path)?;
    tracked.declared = state::load_declared(file)?;

    let client = connect(global)?;
    let result = reconciler::create(&client, &mut tracked).await;
    // An ID recorded before a failed trailing read must not be lost.
    if result.is_ok() || tracked.exists() {
        state::save(path, &tracked)?;
    }
    result?;

    match tracked.id {
        Some(ref id) => {
            output::print_success(&format!("Site {id} created"), &global.color, global.quiet);
            print_tracked(&tracked, global)
        }
        None => {
            output::print_warning(
                "Site was created but no longer exists; tracking cleared",
                &global.color,
            );
            Ok(())
        }
    }
}

async fn read(mut tracked: TrackedSite, path: &Path, global: &GlobalOpts) -> Result<(), CliError> {
    let id = tracked_id(&tracked, path)?;

    let client = connect(global)?;
    reconciler::read(&client, &mut tracked).await?;
    state::save(path, &tracked)?;

    if tracked.exists() {
        print_tracked(&tracked, global)
    } else {
        output::print_warning(
            &format!("Site {id} no longer exists; tracking cleared"),
            &global.color,
        );
        Ok(())
    }
}

async fn update(
    mut tracked: TrackedSite,
    path: &Path,
    file: Option<&Path>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let id = tracked_id(&tracked, path)?;
    if let Some(file) = file {
        tracked.declared = state::load_declared(file)?;
    }

    let client = connect(global)?;
    reconciler::update(&client, &mut tracked)
        .await
        .map_err(|e| site_error(&id, e))?;
    state::save(path, &tracked)?;

    if tracked.exists() {
        output::print_success(&format!("Site {id} updated"), &global.color, global.quiet);
        print_tracked(&tracked, global)
    } else {
        output::print_warning(
            &format!("Site {id} no longer exists; tracking cleared"),
            &global.color,
        );
        Ok(())
    }
}

async fn delete(mut tracked: TrackedSite, path: &Path, global: &GlobalOpts) -> Result<(), CliError> {
    let id = tracked_id(&tracked, path)?;
    if !util::confirm(
        &format!("Delete site '{id}'? This cannot be undone."),
        "site delete",
        global.yes,
    )? {
        return Ok(());
    }

    let client = connect(global)?;
    reconciler::delete(&client, &mut tracked)
        .await
        .map_err(|e| site_error(&id, e))?;
    state::save(path, &tracked)?;

    output::print_success(&format!("Site {id} deleted"), &global.color, global.quiet);
    Ok(())
}

async fn import(
    tracked: &TrackedSite,
    path: &Path,
    raw_id: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    ensure_untracked(tracked, path)?;
    let id: SiteId = raw_id.parse()?;

    let client = connect(global)?;
    let imported = reconciler::import(&client, id.clone())
        .await?
        .ok_or_else(|| CliError::NotFound { id: id.to_string() })?;
    state::save(path, &imported)?;

    output::print_success(&format!("Site {id} imported"), &global.color, global.quiet);
    print_tracked(&imported, global)
}

fn print_tracked(tracked: &TrackedSite, global: &GlobalOpts) -> Result<(), CliError> {
    match (&tracked.state, &tracked.id) {
        (Some(s), _) => print_state(s, global),
        (None, Some(id)) => {
            output::print_output(&format!("ID: {id} (not yet read)"), global.quiet);
            Ok(())
        }
        (None, None) => Ok(()),
    }
}
