use std::io::Write;

use truststack_console::console::{EMPTY_CHECKLIST_HINT, evidence_preview, item_detail_lines};
use truststack_console::model::{ChecklistItem, ItemPatch};

use crate::cli_commands::checklist::{ChecklistArgs, ItemArgs, ReportArgs, UploadArgs};

use super::*;

pub(super) fn handle_checklist_command(client: ApiClient, args: ChecklistArgs) -> Result<()> {
    let session = open_session(client, &args.project_id)?;
    let view = session.view();
    let Some(checklist) = view.checklist() else {
        anyhow::bail!("checklist for {} not loaded", args.project_id);
    };
    if args.json {
        return print_json(checklist, "checklist");
    }

    let progress = view.progress();
    println!(
        "{}: {}% ({}/{} implemented)",
        view.display_name(),
        progress.percent,
        progress.implemented,
        progress.total
    );
    if checklist.items.is_empty() {
        println!("{}", EMPTY_CHECKLIST_HINT);
        return Ok(());
    }
    for it in &checklist.items {
        println!(
            "{:<16} {:<14} {:<9} {:<11} {}  [{} file(s)]{}",
            it.item_id,
            it.status.as_str(),
            it.severity.as_str(),
            it.domain,
            it.title,
            it.evidence.len(),
            it.owner
                .as_deref()
                .filter(|o| !o.is_empty())
                .map(|o| format!("  owner: {}", o))
                .unwrap_or_default()
        );
    }
    Ok(())
}

pub(super) fn handle_item_command(client: ApiClient, args: ItemArgs) -> Result<()> {
    let mut session = open_session(client, &args.project_id)?;
    let patch = ItemPatch {
        status: args.status,
        owner: args.owner,
        notes: args.notes,
    };

    if patch != ItemPatch::default() {
        require_item(session.view(), &args.item_id)?;
        let item_id = args.item_id.clone();
        session.dispatch(|v| v.update_item(&item_id, patch));
        ensure_no_error(session.view(), "update checklist item")?;
    }

    let item = require_item(session.view(), &args.item_id)?;
    if args.json {
        return print_json(item, "checklist item");
    }
    print_item(item);
    Ok(())
}

pub(super) fn handle_upload_command(client: ApiClient, args: UploadArgs) -> Result<()> {
    if !args.file.is_file() {
        anyhow::bail!("{} is not a file", args.file.display());
    }
    let mut session = open_session(client, &args.project_id)?;
    require_item(session.view(), &args.item_id)?;

    let item_id = args.item_id.clone();
    let file = args.file.clone();
    session.dispatch(|v| v.upload_evidence(&item_id, file));
    ensure_no_error(session.view(), "upload evidence")?;

    let item = require_item(session.view(), &args.item_id)?;
    if args.json {
        return print_json(&item.evidence, "evidence");
    }
    println!(
        "Uploaded {} to {} ({} file(s))",
        args.file.display(),
        item.item_id,
        item.evidence.len()
    );
    for line in evidence_preview(item) {
        println!("  {}", line);
    }
    Ok(())
}

pub(super) fn handle_report_command(client: &ApiClient, args: ReportArgs) -> Result<()> {
    if args.url {
        println!("{}", client.report_url(&args.project_id, args.format));
        return Ok(());
    }

    let bytes = client.download_report(&args.project_id, args.format)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, &bytes)
                .with_context(|| format!("write report {}", path.display()))?;
            println!("Wrote {} ({} bytes)", path.display(), bytes.len());
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(&bytes).context("write report to stdout")?;
            out.flush().context("flush stdout")?;
        }
    }
    Ok(())
}

fn require_item<'a>(view: &'a ProjectView, item_id: &str) -> Result<&'a ChecklistItem> {
    view.checklist()
        .and_then(|c| c.item(item_id))
        .with_context(|| format!("no checklist item {} in {}", item_id, view.project_id()))
}

fn print_item(it: &ChecklistItem) {
    for line in item_detail_lines(it) {
        println!("{}", line);
    }
}
