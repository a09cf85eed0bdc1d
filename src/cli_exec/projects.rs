use std::io::{self, Write};

use truststack_console::console::domain_counts;
use truststack_console::model::{CreateProjectRequest, ProjectSummary, SelectedPack};

use crate::cli_commands::projects::{CreateArgs, DeleteArgs, EditArgs, ShowArgs};

use super::*;

pub(super) fn handle_projects_command(client: &ApiClient, json: bool) -> Result<()> {
    let list = client.list_projects()?;
    if json {
        return print_json(&list.projects, "projects");
    }
    let projects: Vec<ProjectSummary> = list
        .projects
        .iter()
        .filter_map(ProjectSummary::from_value)
        .collect();
    if projects.is_empty() {
        println!("No projects");
        return Ok(());
    }
    for p in projects {
        match p.updated_at {
            Some(ts) => println!("{}  {}  (updated {})", p.id, p.name, ts),
            None => println!("{}  {}", p.id, p.name),
        }
    }
    Ok(())
}

pub(super) fn handle_create_command(client: &ApiClient, args: CreateArgs) -> Result<()> {
    let selected_packs = args
        .packs
        .iter()
        .map(|s| {
            SelectedPack::parse(s)
                .with_context(|| format!("invalid pack {:?} (expected domain/pack_id@version)", s))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut scope_answers = serde_json::Map::new();
    for raw in &args.answers {
        let (key, value) = raw
            .split_once('=')
            .with_context(|| format!("invalid answer {:?} (expected key=value)", raw))?;
        let value = serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
        scope_answers.insert(key.trim().to_string(), value);
    }

    let name = args.name.trim().to_string();
    if name.is_empty() {
        anyhow::bail!("project name cannot be empty");
    }
    let req = CreateProjectRequest {
        name,
        description: args
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        industry_id: args.industry,
        segment_id: args.segment,
        use_case_id: args.use_case,
        scope_answers,
        selected_packs,
    };
    let created = client.create_project(&req)?;
    if args.json {
        return print_json(&created, "created project");
    }
    println!("Created project {} ({})", created.project.name, created.project_id);
    Ok(())
}

pub(super) fn handle_show_command(client: ApiClient, args: ShowArgs) -> Result<()> {
    let session = open_session(client, &args.project_id)?;
    let view = session.view();
    let Some(doc) = view.project() else {
        anyhow::bail!("project {} not loaded", args.project_id);
    };
    if args.json {
        return print_json(doc, "project");
    }

    println!("{} ({})", view.display_name(), doc.project.id);
    if !doc.description().is_empty() {
        println!("description: {}", doc.description());
    }
    println!("use case: {}", doc.inputs.use_case_id);
    if let Some(ts) = &doc.project.updated_at {
        println!("updated: {}", ts);
    }

    let unavailable = view.unavailable_packs();
    println!("packs: {}", view.selection().len());
    for p in view.selection().iter() {
        if unavailable.contains(p) {
            println!("  {} (unavailable)", p);
        } else {
            println!("  {}", p);
        }
    }

    let progress = view.progress();
    println!(
        "progress: {}% ({}/{} implemented)",
        progress.percent, progress.implemented, progress.total
    );
    if let Some(checklist) = view.checklist() {
        let by_domain = domain_counts(checklist);
        if !by_domain.is_empty() {
            let parts: Vec<String> = by_domain.iter().map(|(d, n)| format!("{}={}", d, n)).collect();
            println!("by domain: {}", parts.join(" "));
        }
        if !checklist.counts.by_severity.is_empty() {
            let parts: Vec<String> = checklist
                .counts
                .by_severity
                .iter()
                .map(|(s, n)| format!("{}={}", s, n))
                .collect();
            println!("by severity: {}", parts.join(" "));
        }
    }
    Ok(())
}

pub(super) fn handle_edit_command(client: ApiClient, args: EditArgs) -> Result<()> {
    if args.name.is_none() && args.description.is_none() {
        anyhow::bail!("nothing to edit (pass --name and/or --description)");
    }
    let mut session = open_session(client, &args.project_id)?;
    session.dispatch(|v| {
        if let Some(name) = args.name {
            v.set_name(name);
        }
        if let Some(description) = args.description {
            v.set_description(description);
        }
        Vec::new()
    });

    if session.view().edit_name().trim().is_empty() {
        anyhow::bail!("project name cannot be empty");
    }
    if !session.view().can_save() {
        println!("No changes");
        return Ok(());
    }
    session.dispatch(ProjectView::save_project);
    ensure_no_error(session.view(), "save project")?;
    println!("Saved project {}", session.view().display_name());
    Ok(())
}

pub(super) fn handle_delete_command(client: ApiClient, args: DeleteArgs) -> Result<()> {
    let mut session = open_session(client, &args.project_id)?;
    if !args.yes && !confirm(&session.view().delete_prompt())? {
        println!("Aborted");
        return Ok(());
    }

    session.dispatch(ProjectView::delete_project);
    ensure_no_error(session.view(), "delete project")?;
    match session.view().deleted() {
        Some(d) => {
            let name = d.name.as_deref().unwrap_or(&d.project_id);
            match &d.deleted_by {
                Some(by) => println!("Deleted project {} ({}) by {}", name, d.project_id, by),
                None => println!("Deleted project {} ({})", name, d.project_id),
            }
            Ok(())
        }
        None => anyhow::bail!("delete project {}: no response", args.project_id),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{} [y/N] ", prompt);
    io::stderr().flush().context("flush stderr")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("read confirmation")?;
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
