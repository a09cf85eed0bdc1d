use anyhow::{Context, Result};
use serde::Serialize;

use truststack_console::console::{ProjectView, Session};
use truststack_console::model::PackKey;
use truststack_console::remote::ApiClient;

use crate::Commands;

mod checklist;
mod dispatch;
mod packs;
mod projects;

pub(super) fn handle_command(client: ApiClient, command: Commands) -> Result<()> {
    dispatch::handle_command(client, command)
}

/// Loads a project screen. A failed project load is fatal; a failed catalog
/// load is reported and the session continues without it.
fn open_session(client: ApiClient, project_id: &str) -> Result<Session<ApiClient>> {
    let mut session = Session::open(client, project_id);
    if session.view().project().is_none() {
        let msg = session.view().error().unwrap_or("no response").to_string();
        anyhow::bail!("load project {}: {}", project_id, msg);
    }
    if let Some(msg) = session.view().error() {
        eprintln!("warning: {}", msg);
        session.dispatch(|v| {
            v.dismiss_error();
            Vec::new()
        });
    }
    Ok(session)
}

fn ensure_no_error(view: &ProjectView, action: &str) -> Result<()> {
    match view.error() {
        Some(msg) => anyhow::bail!("{}: {}", action, msg),
        None => Ok(()),
    }
}

fn parse_pack_key(s: &str) -> Result<PackKey> {
    PackKey::parse(s).with_context(|| format!("invalid pack {:?} (expected domain/pack_id)", s))
}

fn print_json<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}
