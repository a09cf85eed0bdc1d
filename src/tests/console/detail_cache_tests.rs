use super::*;

use crate::model::PackMeta;

fn detail(domain: &str, id: &str, version: &str, name: &str) -> PackDetail {
    PackDetail {
        pack: PackMeta {
            id: id.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            domain: domain.to_string(),
            description: None,
            source: None,
        },
    }
}

fn target(version: &str) -> SelectedPack {
    SelectedPack::new("security", "owasp-llm", version)
}

#[test]
fn claim_skips_cached_and_in_flight() {
    let mut cache = PackDetailCache::default();
    let first = cache.claim_missing(&[target("1.0"), target("1.1")]);
    assert_eq!(first.len(), 2);
    assert_eq!(cache.in_flight(), 2);

    assert!(cache.claim_missing(&[target("1.1")]).is_empty());

    cache.release(&first);
    cache.merge(vec![detail("security", "owasp-llm", "1.0", "OWASP")]);
    assert_eq!(cache.in_flight(), 0);
    assert_eq!(cache.claim_missing(&[target("1.0"), target("1.1")]).len(), 1);
}

#[test]
fn released_failures_can_be_retried() {
    let mut cache = PackDetailCache::default();
    let keys = cache.claim_missing(&[target("1.1")]);
    cache.release(&keys);
    assert!(cache.is_empty());
    assert_eq!(cache.claim_missing(&[target("1.1")]), keys);
}

#[test]
fn merge_keeps_first_entry() {
    let mut cache = PackDetailCache::default();
    cache.merge(vec![detail("security", "owasp-llm", "1.1", "first")]);
    cache.merge(vec![detail("security", "owasp-llm", "1.1", "second")]);
    assert_eq!(cache.len(), 1);
    assert_eq!(
        cache.lookup(&target("1.1")).map(|d| d.pack.name.as_str()),
        Some("first")
    );
    assert!(cache.lookup(&target("1.0")).is_none());
}
