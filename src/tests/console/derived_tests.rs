use super::*;

use crate::model::{ChecklistCounts, ChecklistItem, Severity};

fn sel(domain: &str, pack: &str, version: &str) -> SelectedPack {
    SelectedPack::new(domain, pack, version)
}

fn item(id: &str, status: ItemStatus) -> ChecklistItem {
    ChecklistItem {
        item_id: id.to_string(),
        domain: "safety".to_string(),
        severity: Severity::Medium,
        status,
        title: id.to_string(),
        objective: String::new(),
        why_applies: None,
        evidence_required: Vec::new(),
        owner: None,
        notes: None,
        evidence: Vec::new(),
    }
}

fn versions(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn latest_version_is_lexicographic() {
    assert_eq!(latest_version(&versions(&["1.0", "1.1"])), Some("1.1"));
    assert_eq!(latest_version(&versions(&["1.10", "1.9"])), Some("1.9"));
    assert_eq!(latest_version(&[]), None);
    assert_eq!(latest_version(&versions(&[""])), None);
}

#[test]
fn signature_ignores_order_but_not_version() {
    let a = vec![sel("security", "owasp-llm", "1.1"), sel("governance", "eu-ai-act", "2024.1")];
    let b = vec![sel("governance", "eu-ai-act", "2024.1"), sel("security", "owasp-llm", "1.1")];
    assert!(selections_equal(&a, &b));

    let c = vec![sel("governance", "eu-ai-act", "2024.1"), sel("security", "owasp-llm", "1.0")];
    assert!(!selections_equal(&a, &c));
    assert_eq!(selection_signature(&[]), "");
}

#[test]
fn progress_counts_items_without_server_aggregates() {
    let checklist = Checklist {
        items: vec![
            item("a", ItemStatus::Implemented),
            item("b", ItemStatus::NotStarted),
            item("c", ItemStatus::InProgress),
        ],
        ..Checklist::default()
    };
    assert_eq!(
        progress(&checklist),
        Progress {
            implemented: 1,
            total: 3,
            percent: 33
        }
    );
}

#[test]
fn progress_prefers_server_counts() {
    let checklist = Checklist {
        items: vec![item("a", ItemStatus::Implemented)],
        counts: ChecklistCounts {
            total: Some(8),
            by_status: Some([("implemented".to_string(), 3)].into_iter().collect()),
            ..ChecklistCounts::default()
        },
        ..Checklist::default()
    };
    let p = progress(&checklist);
    assert_eq!((p.implemented, p.total, p.percent), (3, 8, 38));
}

#[test]
fn zero_server_counts_fall_back_to_items() {
    let checklist = Checklist {
        items: vec![
            item("a", ItemStatus::Implemented),
            item("b", ItemStatus::NotStarted),
        ],
        counts: ChecklistCounts {
            total: Some(0),
            by_status: Some([("implemented".to_string(), 0)].into_iter().collect()),
            ..ChecklistCounts::default()
        },
        ..Checklist::default()
    };
    let p = progress(&checklist);
    assert_eq!((p.implemented, p.total, p.percent), (1, 2, 50));
}

#[test]
fn empty_checklist_is_zero_percent() {
    assert_eq!(progress(&Checklist::default()).percent, 0);
}

#[test]
fn rounding_goes_half_up() {
    assert_eq!(rounded_percent(1, 8), 13);
    assert_eq!(rounded_percent(1, 200), 1);
    assert_eq!(rounded_percent(2, 3), 67);
    assert_eq!(rounded_percent(5, 5), 100);
    assert_eq!(rounded_percent(0, 0), 0);
}

#[test]
fn unavailable_lists_each_missing_pack_once() {
    let catalog = vec![PackCatalogEntry {
        domain: "security".to_string(),
        pack_id: "owasp-llm".to_string(),
        versions: versions(&["1.0"]),
    }];
    let selected = vec![
        sel("security", "owasp-llm", "1.0"),
        sel("safety", "retired", "0.1"),
        sel("safety", "retired", "0.2"),
    ];
    assert_eq!(
        unavailable_selected(&selected, &catalog),
        vec![sel("safety", "retired", "0.1")]
    );
}

#[test]
fn latest_targets_skip_packs_without_versions() {
    let catalog = vec![
        PackCatalogEntry {
            domain: "security".to_string(),
            pack_id: "owasp-llm".to_string(),
            versions: versions(&["1.0", "1.1"]),
        },
        PackCatalogEntry {
            domain: "safety".to_string(),
            pack_id: "draft".to_string(),
            versions: Vec::new(),
        },
    ];
    assert_eq!(latest_targets(&catalog), vec![sel("security", "owasp-llm", "1.1")]);
}

#[test]
fn domain_counts_fall_back_to_items() {
    let mut checklist = Checklist {
        items: vec![item("a", ItemStatus::Implemented), item("b", ItemStatus::NotStarted)],
        ..Checklist::default()
    };
    checklist.items[1].domain = "security".to_string();
    let counts = domain_counts(&checklist);
    assert_eq!(counts.get("safety"), Some(&1));
    assert_eq!(counts.get("security"), Some(&1));

    checklist.counts.by_domain = [("governance".to_string(), 4)].into_iter().collect();
    assert_eq!(domain_counts(&checklist).len(), 1);
}

#[test]
fn evidence_preview_shows_three_files_then_ellipsis() {
    let mut it = item("a", ItemStatus::InProgress);
    assert!(evidence_preview(&it).is_empty());

    it.evidence = (0..4)
        .map(|i| crate::model::EvidenceRecord {
            file_name: format!("doc{}.pdf", i),
            sha256: format!("{}0123456789abcdef", i),
            size: None,
            content_type: None,
            uploaded_at: None,
        })
        .collect();
    let lines = evidence_preview(&it);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "doc0.pdf (0012345678…)");
    assert_eq!(lines[3], "…");
}

#[test]
fn item_detail_skips_empty_fields() {
    let mut it = item("gov-3", ItemStatus::RiskAccepted);
    it.title = "Maintain a model inventory".to_string();
    it.why_applies = Some("Selected pack eu-ai-act".to_string());
    it.evidence_required = vec![crate::model::EvidenceRequirement {
        kind: "document".to_string(),
        name: "Inventory export".to_string(),
    }];
    let lines = item_detail_lines(&it);
    assert_eq!(lines[0], "gov-3  Maintain a model inventory");
    assert!(lines.contains(&"why it applies: Selected pack eu-ai-act".to_string()));
    assert!(lines.contains(&"  - document: Inventory export".to_string()));
    assert!(lines.contains(&"evidence: 0 file(s)".to_string()));
    assert!(!lines.iter().any(|l| l.starts_with("owner:") || l.starts_with("notes:")));
}
