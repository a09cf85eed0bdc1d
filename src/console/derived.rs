//! Pure computations over fetched records. Nothing here touches the network.

use std::collections::{BTreeMap, HashSet};

use crate::model::{
    Checklist, ChecklistItem, ItemStatus, PackCatalogEntry, PackKey, SelectedPack,
};

pub const EMPTY_CHECKLIST_HINT: &str = "No controls generated. Adjust packs/scoping.";

const EVIDENCE_PREVIEW: usize = 3;

/// Highest version by plain string ordering.
///
/// This is lexicographic, not numeric: `"1.9"` sorts after `"1.10"`.
pub fn latest_version(versions: &[String]) -> Option<&str> {
    versions
        .iter()
        .max()
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// Order-insensitive, version-sensitive encoding of a selection.
pub fn selection_signature(packs: &[SelectedPack]) -> String {
    let mut parts: Vec<String> = packs
        .iter()
        .map(|p| format!("{}|{}|{}", p.domain, p.pack_id, p.version))
        .collect();
    parts.sort();
    parts.join("||")
}

pub fn selections_equal(a: &[SelectedPack], b: &[SelectedPack]) -> bool {
    selection_signature(a) == selection_signature(b)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub implemented: u64,
    pub total: u64,
    pub percent: u64,
}

/// Rounded implemented percentage. Non-zero server aggregates win over
/// counting items; a zero aggregate falls back to the count.
pub fn progress(checklist: &Checklist) -> Progress {
    let total = checklist
        .counts
        .total
        .filter(|&t| t > 0)
        .unwrap_or(checklist.items.len() as u64);
    let implemented = checklist
        .counts
        .by_status
        .as_ref()
        .and_then(|m| m.get(ItemStatus::Implemented.as_str()).copied())
        .filter(|&n| n > 0)
        .unwrap_or_else(|| {
            checklist
                .items
                .iter()
                .filter(|i| i.status == ItemStatus::Implemented)
                .count() as u64
        });
    Progress {
        implemented,
        total,
        percent: rounded_percent(implemented, total),
    }
}

/// `round(100 * part / whole)` with halves rounded up; 0 when `whole` is 0.
pub fn rounded_percent(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    (200 * part + whole) / (2 * whole)
}

/// Controls per domain. Server aggregates win over counting items.
pub fn domain_counts(checklist: &Checklist) -> BTreeMap<String, u64> {
    if !checklist.counts.by_domain.is_empty() {
        return checklist.counts.by_domain.clone();
    }
    let mut counts = BTreeMap::new();
    for item in &checklist.items {
        *counts.entry(item.domain.clone()).or_insert(0) += 1;
    }
    counts
}

/// `file_name (hash…)` for the first few evidence files, then a lone `…` if more exist.
pub fn evidence_preview(item: &ChecklistItem) -> Vec<String> {
    let mut lines: Vec<String> = item
        .evidence
        .iter()
        .take(EVIDENCE_PREVIEW)
        .map(|ev| format!("{} ({}…)", ev.file_name, ev.short_hash()))
        .collect();
    if item.evidence.len() > EVIDENCE_PREVIEW {
        lines.push("…".to_string());
    }
    lines
}

/// Full description of one control, one display line per entry.
pub fn item_detail_lines(item: &ChecklistItem) -> Vec<String> {
    let mut lines = vec![
        format!("{}  {}", item.item_id, item.title),
        format!(
            "status: {}  severity: {}  domain: {}",
            item.status,
            item.severity.as_str(),
            item.domain
        ),
    ];
    if let Some(owner) = item.owner.as_deref().filter(|o| !o.is_empty()) {
        lines.push(format!("owner: {}", owner));
    }
    if !item.objective.is_empty() {
        lines.push(format!("objective: {}", item.objective));
    }
    if let Some(why) = item.why_applies.as_deref().filter(|w| !w.is_empty()) {
        lines.push(format!("why it applies: {}", why));
    }
    if !item.evidence_required.is_empty() {
        lines.push("expected evidence:".to_string());
        for e in &item.evidence_required {
            lines.push(format!("  - {}: {}", e.kind, e.name));
        }
    }
    lines.push(format!("evidence: {} file(s)", item.evidence.len()));
    for line in evidence_preview(item) {
        lines.push(format!("  {}", line));
    }
    if let Some(notes) = item.notes.as_deref().filter(|n| !n.is_empty()) {
        lines.push(format!("notes: {}", notes));
    }
    lines
}

/// Selected packs whose `(domain, pack_id)` is not in the catalog.
pub fn unavailable_selected(
    selected: &[SelectedPack],
    catalog: &[PackCatalogEntry],
) -> Vec<SelectedPack> {
    let known: HashSet<PackKey> = catalog.iter().map(PackCatalogEntry::key).collect();
    let mut seen = HashSet::new();
    selected
        .iter()
        .filter(|p| !known.contains(&p.key()))
        .filter(|p| seen.insert(p.key()))
        .cloned()
        .collect()
}

/// `(domain, pack_id, latest version)` for each catalog entry that has any version.
pub fn latest_targets(catalog: &[PackCatalogEntry]) -> Vec<SelectedPack> {
    catalog
        .iter()
        .filter_map(|p| {
            let version = latest_version(&p.versions)?;
            Some(SelectedPack::new(&p.domain, &p.pack_id, version))
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/console/derived_tests.rs"]
mod tests;
