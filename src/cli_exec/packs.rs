use truststack_console::console::{
    EnrichPass, NO_SOURCE_URL, PackDetailCache, Request, Response, execute, latest_targets,
    latest_version, learning_center,
};
use truststack_console::model::PackCatalogEntry;

use crate::cli_commands::packs::{PackArgs, SetVersionArgs, ToggleArgs};

use super::*;

pub(super) fn handle_packs_command(client: &ApiClient, json: bool) -> Result<()> {
    let packs = client.fetch_packs()?;
    if json {
        return print_json(&packs, "packs");
    }
    if packs.is_empty() {
        println!("No packs in the registry");
        return Ok(());
    }
    for p in &packs {
        println!(
            "{}/{}  versions: {}  latest: {}",
            p.domain,
            p.pack_id,
            p.versions.join(", "),
            latest_version(&p.versions).unwrap_or("-")
        );
    }
    Ok(())
}

pub(super) fn handle_pack_command(client: &ApiClient, args: PackArgs) -> Result<()> {
    let key = parse_pack_key(&args.pack)?;
    let version = match args.version {
        Some(v) => v,
        None => {
            let packs = client.fetch_packs()?;
            let entry = find_entry(&packs, &key)?;
            latest_version(&entry.versions)
                .with_context(|| format!("pack {} has no published versions", key))?
                .to_string()
        }
    };

    let detail = client.fetch_pack(&key.domain, &key.pack_id, &version)?;
    if args.json {
        return print_json(&detail, "pack");
    }
    let meta = &detail.pack;
    println!("{} ({}/{}@{})", meta.name, meta.domain, meta.id, meta.version);
    if let Some(d) = meta.description.as_deref().filter(|d| !d.is_empty()) {
        println!("{}", d);
    }
    if let Some(source) = &meta.source {
        let name = source.name.as_deref().unwrap_or("Reference");
        match source.reference.as_deref() {
            Some(r) => println!("source: {} - {}", name, r),
            None => println!("source: {}", name),
        }
        if let Some(url) = &source.url {
            println!("url: {}", url);
        }
    }
    Ok(())
}

pub(super) fn handle_learn_command(client: &ApiClient, json: bool) -> Result<()> {
    let catalog = client.fetch_packs()?;

    let mut cache = PackDetailCache::default();
    let keys = cache.claim_missing(&latest_targets(&catalog));
    let req = Request::FetchPackDetails {
        pass: EnrichPass::Catalog,
        keys: keys.clone(),
    };
    cache.release(&keys);
    if let Response::PackDetails { result, .. } = execute(client, "", req) {
        match result {
            Ok(details) => cache.merge(details),
            Err(err) => tracing::debug!(error = %err, "pack details unavailable"),
        }
    }

    let groups = learning_center(&catalog, &cache);
    if json {
        let out: Vec<serde_json::Value> = groups
            .iter()
            .map(|g| {
                serde_json::json!({
                    "domain": g.domain,
                    "title": g.title,
                    "intro": g.intro,
                    "packs": g.items.iter().map(|e| serde_json::json!({
                        "pack_id": e.pack_id,
                        "version": e.version,
                        "title": e.title(),
                        "description": e.description(),
                        "source": e.source_line(),
                        "url": e.source_url(),
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();
        return print_json(&out, "learning center");
    }

    for (i, g) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", g.title);
        println!("  {}", g.intro);
        if g.items.is_empty() {
            println!("  {}", g.empty_hint());
            continue;
        }
        for e in &g.items {
            println!("  - {} ({}@{})", e.title(), e.pack_id, e.version);
            println!("    {}", e.description());
            match e.source_url() {
                Some(url) => println!("    {} <{}>", e.source_line(), url),
                None => println!("    {} ({})", e.source_line(), NO_SOURCE_URL),
            }
        }
    }
    Ok(())
}

pub(super) fn handle_toggle_command(client: ApiClient, args: ToggleArgs) -> Result<()> {
    let key = parse_pack_key(&args.pack)?;
    let mut session = open_session(client, &args.project_id)?;
    if !session.view().selection().contains(&key) && session.view().catalog_entry(&key).is_none() {
        anyhow::bail!("pack {} is not in the catalog", key);
    }

    let executed = session.dispatch(|v| v.toggle_pack(&key));
    ensure_no_error(session.view(), "update packs")?;
    if executed == 0 {
        anyhow::bail!("pack {} has no published versions", key);
    }
    match session.view().selection().get(&key) {
        Some(p) => println!("Added {}", p),
        None => println!("Removed {}", key),
    }
    Ok(())
}

pub(super) fn handle_set_version_command(client: ApiClient, args: SetVersionArgs) -> Result<()> {
    let key = parse_pack_key(&args.pack)?;
    let mut session = open_session(client, &args.project_id)?;
    if !session.view().selection().contains(&key) {
        anyhow::bail!("pack {} is not selected in project {}", key, args.project_id);
    }
    if let Some(entry) = session.view().catalog_entry(&key)
        && !entry.versions.contains(&args.version)
    {
        anyhow::bail!(
            "version {} of {} is not published (available: {})",
            args.version,
            key,
            entry.versions.join(", ")
        );
    }

    session.dispatch(|v| v.set_pack_version(&key, &args.version));
    ensure_no_error(session.view(), "update packs")?;
    match session.view().selection().get(&key) {
        Some(p) => println!("Selected {}", p),
        None => println!("Removed {}", key),
    }
    Ok(())
}

pub(super) fn handle_industries_command(client: &ApiClient, json: bool) -> Result<()> {
    let industries = client.list_industries()?;
    if json {
        return print_json(&industries, "industries");
    }
    for ind in &industries {
        let id = ind.get("id").and_then(|v| v.as_str()).unwrap_or("?");
        let name = ind.get("name").and_then(|v| v.as_str()).unwrap_or(id);
        println!("{}  {}", id, name);
    }
    Ok(())
}

fn find_entry<'a>(packs: &'a [PackCatalogEntry], key: &PackKey) -> Result<&'a PackCatalogEntry> {
    packs
        .iter()
        .find(|p| p.key() == *key)
        .with_context(|| format!("pack {} is not in the catalog", key))
}
