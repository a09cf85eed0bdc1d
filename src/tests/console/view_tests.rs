use super::*;

use crate::model::{
    ChecklistCounts, ChecklistItem, EvidenceRecord, PackDetail, PackMeta, ProjectInputs,
    ProjectRecord, Severity,
};

fn doc(name: &str, description: Option<&str>, packs: Vec<SelectedPack>, updated: &str) -> ProjectDoc {
    ProjectDoc {
        project: ProjectRecord {
            id: "claims-pilot".to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            created_at: Some("2026-01-01T00:00:00+00:00".to_string()),
            updated_at: Some(updated.to_string()),
        },
        inputs: ProjectInputs {
            use_case_id: "claims-assistant".to_string(),
            selected_packs: packs,
            ..ProjectInputs::default()
        },
    }
}

fn item(id: &str, status: ItemStatus, evidence: usize) -> ChecklistItem {
    ChecklistItem {
        item_id: id.to_string(),
        domain: "security".to_string(),
        severity: Severity::High,
        status,
        title: format!("Control {}", id),
        objective: String::new(),
        why_applies: None,
        evidence_required: Vec::new(),
        owner: None,
        notes: None,
        evidence: (0..evidence)
            .map(|i| EvidenceRecord {
                file_name: format!("file-{}.txt", i),
                sha256: format!("{:064x}", i),
                size: None,
                content_type: None,
                uploaded_at: None,
            })
            .collect(),
    }
}

fn checklist(items: Vec<ChecklistItem>) -> Checklist {
    Checklist {
        project_id: "claims-pilot".to_string(),
        generated_at: None,
        items,
        counts: ChecklistCounts::default(),
    }
}

fn catalog() -> Vec<PackCatalogEntry> {
    vec![
        PackCatalogEntry {
            domain: "security".to_string(),
            pack_id: "owasp-llm".to_string(),
            versions: vec!["1.0".to_string(), "1.1".to_string()],
        },
        PackCatalogEntry {
            domain: "governance".to_string(),
            pack_id: "eu-ai-act".to_string(),
            versions: vec!["2024.1".to_string()],
        },
    ]
}

fn owasp() -> PackKey {
    PackKey::new("security", "owasp-llm")
}

/// A view with the catalog and one snapshot applied, follow-ups discarded.
fn loaded(packs: Vec<SelectedPack>, items: Vec<ChecklistItem>) -> ProjectView {
    let mut view = ProjectView::new("claims-pilot");
    let reqs = view.mount();
    let ticket = refresh_ticket(&reqs);
    view.apply(Response::CatalogLoaded(Ok(catalog())));
    view.apply(Response::Refreshed {
        ticket,
        settle: None,
        result: Ok((
            doc("Claims Pilot", None, packs, "2026-01-01T00:00:00+00:00"),
            checklist(items),
        )),
    });
    view
}

fn refresh_ticket(reqs: &[Request]) -> u64 {
    reqs.iter()
        .find_map(|r| match r {
            Request::Refresh { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("refresh request")
}

fn patches(reqs: &[Request]) -> Vec<&ProjectPatch> {
    reqs.iter()
        .filter_map(|r| match r {
            Request::PatchProject(p) => Some(p),
            _ => None,
        })
        .collect()
}

/// Completes a project mutation: patch response, then the refresh it triggers.
fn settle_patch(view: &mut ProjectView, server: ProjectDoc, items: Vec<ChecklistItem>) {
    let follow = view.apply(Response::ProjectPatched(Ok(server.clone())));
    let ticket = refresh_ticket(&follow);
    view.apply(Response::Refreshed {
        ticket,
        settle: Some(Settle::Saving),
        result: Ok((server, checklist(items))),
    });
}

#[test]
fn mount_fetches_snapshot_and_catalog() {
    let mut view = ProjectView::new("claims-pilot");
    let reqs = view.mount();
    assert_eq!(reqs.len(), 2);
    assert!(matches!(reqs[0], Request::Refresh { settle: None, .. }));
    assert_eq!(reqs[1], Request::LoadCatalog);
}

#[test]
fn snapshot_populates_edit_fields_and_selection() {
    let sel = SelectedPack::new("security", "owasp-llm", "1.0");
    let view = loaded(vec![sel.clone()], Vec::new());
    assert_eq!(view.edit_name(), "Claims Pilot");
    assert_eq!(view.edit_description(), "");
    assert_eq!(view.selection().as_slice(), &[sel]);
    assert!(!view.packs_changed());
    assert!(!view.can_save());
}

#[test]
fn catalog_load_requests_latest_pack_details() {
    let mut view = ProjectView::new("p");
    let follow = view.apply(Response::CatalogLoaded(Ok(catalog())));
    let Some(Request::FetchPackDetails { pass, keys }) = follow.first() else {
        panic!("expected detail fetch, got {:?}", follow);
    };
    assert_eq!(*pass, EnrichPass::Catalog);
    let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["security/owasp-llm/1.1", "governance/eu-ai-act/2024.1"]);
}

#[test]
fn toggle_selects_latest_and_persists_once() {
    let mut view = loaded(Vec::new(), Vec::new());
    let reqs = view.toggle_pack(&owasp());

    let p = patches(&reqs);
    assert_eq!(p.len(), 1);
    assert_eq!(
        p[0],
        &ProjectPatch::selected_packs(vec![SelectedPack::new("security", "owasp-llm", "1.1")])
    );
    assert!(view.is_saving());
    assert!(view.controls_locked());

    // Locked while the persist is in flight.
    assert!(view.toggle_pack(&PackKey::new("governance", "eu-ai-act")).is_empty());
    assert!(!view.set_name("other"));

    let follow = view.apply(Response::ProjectPatched(Ok(doc(
        "Claims Pilot",
        None,
        vec![SelectedPack::new("security", "owasp-llm", "1.1")],
        "2026-01-02T00:00:00+00:00",
    ))));
    assert_eq!(follow.len(), 1);
    assert!(matches!(
        follow[0],
        Request::Refresh {
            settle: Some(Settle::Saving),
            ..
        }
    ));
    assert!(view.is_saving());
}

#[test]
fn toggle_on_then_off_restores_selection() {
    let base = vec![SelectedPack::new("governance", "eu-ai-act", "2024.1")];
    let mut view = loaded(base.clone(), Vec::new());

    let on = view.toggle_pack(&owasp());
    let mut with = base.clone();
    with.push(SelectedPack::new("security", "owasp-llm", "1.1"));
    assert_eq!(patches(&on).len(), 1);
    settle_patch(
        &mut view,
        doc("Claims Pilot", None, with, "2026-01-02T00:00:00+00:00"),
        Vec::new(),
    );

    let off = view.toggle_pack(&owasp());
    assert_eq!(patches(&off).len(), 1);
    assert_eq!(view.selection().as_slice(), base.as_slice());
}

#[test]
fn version_change_on_unselected_pack_is_noop() {
    let mut view = loaded(Vec::new(), Vec::new());
    assert!(view.set_pack_version(&owasp(), "1.0").is_empty());
    assert!(view.selection().is_empty());
    assert!(!view.is_saving());
}

#[test]
fn worked_example_owasp_version_then_save() {
    let mut view = loaded(Vec::new(), Vec::new());

    view.toggle_pack(&owasp());
    assert_eq!(view.selection().get(&owasp()).map(|p| p.version.as_str()), Some("1.1"));
    settle_patch(
        &mut view,
        doc(
            "Claims Pilot",
            None,
            vec![SelectedPack::new("security", "owasp-llm", "1.1")],
            "2026-01-02T00:00:00+00:00",
        ),
        Vec::new(),
    );

    let reqs = view.set_pack_version(&owasp(), "1.0");
    assert_eq!(
        patches(&reqs)[0].selected_packs,
        Some(vec![SelectedPack::new("security", "owasp-llm", "1.0")])
    );
    settle_patch(
        &mut view,
        doc(
            "Claims Pilot",
            None,
            vec![SelectedPack::new("security", "owasp-llm", "1.0")],
            "2026-01-03T00:00:00+00:00",
        ),
        Vec::new(),
    );

    assert!(view.set_name("Claims Pilot v2"));
    let reqs = view.save_project();
    let p = patches(&reqs);
    assert_eq!(p.len(), 1);
    assert_eq!(p[0].name.as_deref(), Some("Claims Pilot v2"));
    assert_eq!(p[0].description, Some(None));
    assert_eq!(
        p[0].selected_packs,
        Some(vec![SelectedPack::new("security", "owasp-llm", "1.0")])
    );
}

#[test]
fn save_gate_requires_name_and_a_difference() {
    let mut view = loaded(Vec::new(), Vec::new());
    assert!(!view.can_save());

    view.set_name("   ");
    assert!(!view.can_save());
    assert!(view.save_project().is_empty());

    view.set_name("Claims Pilot");
    assert!(!view.can_save());
    view.set_name("  Claims Pilot  ");
    assert!(!view.can_save());

    view.set_description("   ");
    assert!(!view.can_save());

    view.set_description("Pilot for claims triage");
    assert!(view.can_save());
}

#[test]
fn save_trims_and_sends_description() {
    let mut view = loaded(Vec::new(), Vec::new());
    view.set_name("  Renamed ");
    view.set_description(" scoped to EU ");
    let reqs = view.save_project();
    let p = patches(&reqs);
    assert_eq!(p[0].name.as_deref(), Some("Renamed"));
    assert_eq!(p[0].description, Some(Some("scoped to EU".to_string())));
    assert_eq!(p[0].selected_packs, Some(Vec::new()));
}

#[test]
fn unavailable_pack_listed_once_and_removed_alone() {
    let gone = SelectedPack::new("safety", "retired-pack", "0.9");
    let keep = SelectedPack::new("governance", "eu-ai-act", "2024.1");
    let mut view = loaded(vec![keep.clone(), gone.clone()], Vec::new());

    assert_eq!(view.unavailable_packs(), vec![gone.clone()]);

    // Catalog packs are not removable through this path.
    assert!(view.remove_unavailable(&keep.key()).is_empty());

    let reqs = view.remove_unavailable(&gone.key());
    let p = patches(&reqs);
    assert_eq!(p.len(), 1);
    assert_eq!(p[0], &ProjectPatch::selected_packs(vec![keep]));
}

#[test]
fn failed_persist_keeps_error_and_shows_server_selection() {
    let mut view = loaded(Vec::new(), Vec::new());
    view.toggle_pack(&owasp());
    assert_eq!(view.selection().len(), 1);

    let follow = view.apply(Response::ProjectPatched(Err(
        "API 400: Unknown pack".to_string()
    )));
    assert_eq!(view.error(), Some("API 400: Unknown pack"));
    let ticket = refresh_ticket(&follow);
    view.apply(Response::Refreshed {
        ticket,
        settle: Some(Settle::Saving),
        result: Ok((
            doc("Claims Pilot", None, Vec::new(), "2026-01-01T00:00:00+00:00"),
            checklist(Vec::new()),
        )),
    });

    assert!(view.selection().is_empty());
    assert!(!view.is_saving());
    assert_eq!(view.error(), Some("API 400: Unknown pack"));
}

#[test]
fn item_update_marks_busy_until_refresh_lands() {
    let mut view = loaded(Vec::new(), vec![item("sec-1", ItemStatus::NotStarted, 0)]);

    let reqs = view.set_item_status("sec-1", ItemStatus::Implemented);
    assert_eq!(
        reqs,
        vec![Request::PatchItem {
            item_id: "sec-1".to_string(),
            patch: ItemPatch::status(ItemStatus::Implemented),
        }]
    );
    assert!(view.is_item_busy("sec-1"));
    assert!(view.set_item_owner("sec-1", "alice").is_empty());

    let follow = view.apply(Response::ItemPatched {
        item_id: "sec-1".to_string(),
        result: Ok(item("sec-1", ItemStatus::Implemented, 0)),
    });
    assert!(view.is_item_busy("sec-1"));
    let ticket = refresh_ticket(&follow);

    view.apply(Response::Refreshed {
        ticket,
        settle: Some(Settle::Item("sec-1".to_string())),
        result: Ok((
            doc("Claims Pilot", None, Vec::new(), "2026-01-02T00:00:00+00:00"),
            checklist(vec![item("sec-1", ItemStatus::Implemented, 0)]),
        )),
    });
    assert!(!view.is_item_busy("sec-1"));
    assert_eq!(view.progress().percent, 100);
}

#[test]
fn item_failure_surfaces_error_and_allows_retry() {
    let mut view = loaded(Vec::new(), vec![item("sec-1", ItemStatus::NotStarted, 0)]);
    view.set_item_notes("sec-1", "reviewed");
    let follow = view.apply(Response::ItemPatched {
        item_id: "sec-1".to_string(),
        result: Err("API 404: Project or item not found".to_string()),
    });
    assert!(follow.is_empty());
    assert!(!view.is_item_busy("sec-1"));
    assert_eq!(view.error(), Some("API 404: Project or item not found"));
    assert_eq!(view.set_item_notes("sec-1", "reviewed").len(), 1);
}

#[test]
fn unknown_item_is_ignored() {
    let mut view = loaded(Vec::new(), vec![item("sec-1", ItemStatus::NotStarted, 0)]);
    assert!(view.set_item_status("nope", ItemStatus::Implemented).is_empty());
}

#[test]
fn evidence_count_changes_only_after_refresh() {
    let mut view = loaded(Vec::new(), vec![item("sec-1", ItemStatus::InProgress, 1)]);
    let count = |v: &ProjectView| v.checklist().and_then(|c| c.item("sec-1")).map(|i| i.evidence.len());

    view.upload_evidence("sec-1", "/tmp/policy.pdf");
    let follow = view.apply(Response::EvidenceUploaded {
        item_id: "sec-1".to_string(),
        result: Ok(EvidenceRecord {
            file_name: "policy.pdf".to_string(),
            sha256: "ab".repeat(32),
            size: Some(3),
            content_type: None,
            uploaded_at: None,
        }),
    });
    assert_eq!(count(&view), Some(1));

    let ticket = refresh_ticket(&follow);
    view.apply(Response::Refreshed {
        ticket,
        settle: Some(Settle::Item("sec-1".to_string())),
        result: Ok((
            doc("Claims Pilot", None, Vec::new(), "2026-01-02T00:00:00+00:00"),
            checklist(vec![item("sec-1", ItemStatus::InProgress, 2)]),
        )),
    });
    assert_eq!(count(&view), Some(2));
}

#[test]
fn stale_refresh_is_dropped_but_still_settles() {
    let mut view = loaded(Vec::new(), vec![item("sec-1", ItemStatus::NotStarted, 0)]);

    view.set_item_status("sec-1", ItemStatus::InProgress);
    let slow = refresh_ticket(&view.apply(Response::ItemPatched {
        item_id: "sec-1".to_string(),
        result: Ok(item("sec-1", ItemStatus::InProgress, 0)),
    }));
    let fast = refresh_ticket(&view.refresh());
    assert!(fast > slow);

    view.apply(Response::Refreshed {
        ticket: fast,
        settle: None,
        result: Ok((
            doc("Newer", None, Vec::new(), "2026-01-03T00:00:00+00:00"),
            checklist(vec![item("sec-1", ItemStatus::Implemented, 0)]),
        )),
    });
    view.apply(Response::Refreshed {
        ticket: slow,
        settle: Some(Settle::Item("sec-1".to_string())),
        result: Ok((
            doc("Older", None, Vec::new(), "2026-01-02T00:00:00+00:00"),
            checklist(vec![item("sec-1", ItemStatus::InProgress, 0)]),
        )),
    });

    assert_eq!(view.display_name(), "Newer");
    assert!(!view.is_item_busy("sec-1"));
}

#[test]
fn delete_failure_unlocks_and_success_closes() {
    let mut view = loaded(Vec::new(), Vec::new());
    assert_eq!(
        view.delete_prompt(),
        "Delete project \"Claims Pilot\"? This action cannot be undone."
    );

    assert_eq!(view.delete_project(), vec![Request::DeleteProject]);
    assert!(view.is_deleting());
    assert!(view.toggle_pack(&owasp()).is_empty());

    view.apply(Response::ProjectDeleted(Err("API 500: disk full".to_string())));
    assert!(!view.is_deleting());
    assert_eq!(view.error(), Some("API 500: disk full"));
    assert!(view.deleted().is_none());

    view.delete_project();
    view.apply(Response::ProjectDeleted(Ok(DeleteProjectResponse {
        project_id: "claims-pilot".to_string(),
        name: Some("Claims Pilot".to_string()),
        deleted_by: Some("anonymous".to_string()),
        deleted_at: None,
    })));
    assert!(view.deleted().is_some());
    assert!(view.delete_project().is_empty());
}

#[test]
fn enrichment_failures_stay_silent() {
    let mut view = ProjectView::new("p");
    let follow = view.apply(Response::CatalogLoaded(Ok(catalog())));
    let Some(Request::FetchPackDetails { pass, keys }) = follow.into_iter().next() else {
        panic!("expected detail fetch");
    };
    assert_eq!(view.details().in_flight(), 2);
    view.apply(Response::PackDetails {
        pass,
        keys,
        result: Err("API 502: bad gateway".to_string()),
    });
    assert_eq!(view.error(), None);
    assert_eq!(view.details().in_flight(), 0);
    assert!(view.details().is_empty());
}

#[test]
fn detail_merge_feeds_learning_center() {
    let mut view = ProjectView::new("p");
    let follow = view.apply(Response::CatalogLoaded(Ok(catalog())));
    let Some(Request::FetchPackDetails { pass, keys }) = follow.into_iter().next() else {
        panic!("expected detail fetch");
    };
    view.apply(Response::PackDetails {
        pass,
        keys,
        result: Ok(vec![PackDetail {
            pack: PackMeta {
                id: "owasp-llm".to_string(),
                name: "OWASP Top 10 for LLM Applications".to_string(),
                version: "1.1".to_string(),
                domain: "security".to_string(),
                description: None,
                source: None,
            },
        }]),
    });

    let groups = view.learning_center();
    let security = groups.iter().find(|g| g.domain == "security").unwrap();
    assert_eq!(security.items[0].title(), "OWASP Top 10 for LLM Applications");
    let governance = groups.iter().find(|g| g.domain == "governance").unwrap();
    assert_eq!(governance.items[0].title(), "eu-ai-act");
}

#[test]
fn refresh_error_is_surfaced() {
    let mut view = ProjectView::new("missing");
    let ticket = refresh_ticket(&view.mount());
    view.apply(Response::Refreshed {
        ticket,
        settle: None,
        result: Err("API 404: {\"detail\":\"Project not found\"}".to_string()),
    });
    assert_eq!(view.error(), Some("API 404: {\"detail\":\"Project not found\"}"));
    assert!(view.project().is_none());
    assert_eq!(view.display_name(), "missing");
}
