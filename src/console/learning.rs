//! "Learning center": the catalog's latest packs grouped by domain, with whatever
//! metadata has been fetched so far.

use crate::model::{PackCatalogEntry, PackDetail};

use super::derived::latest_targets;
use super::detail_cache::PackDetailCache;

pub const NO_SOURCE_URL: &str = "No public source URL provided.";

struct DomainIntro {
    domain: &'static str,
    title: &'static str,
    intro: &'static str,
}

const DOMAINS: [DomainIntro; 3] = [
    DomainIntro {
        domain: "governance",
        title: "Governance Standards",
        intro: "Governance packs cover regulatory obligations, accountability, and risk management frameworks.",
    },
    DomainIntro {
        domain: "safety",
        title: "Safety Standards",
        intro: "Safety packs focus on model behavior, documentation, monitoring, and harm mitigation controls.",
    },
    DomainIntro {
        domain: "security",
        title: "Security Standards",
        intro: "Security packs address threats, vulnerabilities, and protective controls for AI systems and data.",
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearningEntry {
    pub domain: String,
    pub pack_id: String,
    pub version: String,
    pub detail: Option<PackDetail>,
}

impl LearningEntry {
    pub fn title(&self) -> &str {
        self.detail
            .as_ref()
            .map(|d| d.pack.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.pack_id)
    }

    pub fn description(&self) -> &str {
        self.detail
            .as_ref()
            .and_then(|d| d.pack.description.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or("Standard pack for this domain.")
    }

    pub fn source_line(&self) -> String {
        let source = self.detail.as_ref().and_then(|d| d.pack.source.as_ref());
        let name = source
            .and_then(|s| s.name.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or("Reference");
        match source
            .and_then(|s| s.reference.as_deref())
            .filter(|s| !s.is_empty())
        {
            Some(reference) => format!("{} - {}", name, reference),
            None => name.to_string(),
        }
    }

    pub fn source_url(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.pack.source.as_ref())
            .and_then(|s| s.url.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearningGroup {
    pub domain: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub items: Vec<LearningEntry>,
}

impl LearningGroup {
    pub fn empty_hint(&self) -> String {
        format!("No {} packs available in the registry.", self.domain)
    }
}

/// Always returns the three fixed domains in order. Packs of any other domain are omitted.
pub fn learning_center(catalog: &[PackCatalogEntry], cache: &PackDetailCache) -> Vec<LearningGroup> {
    let mut groups: Vec<LearningGroup> = DOMAINS
        .iter()
        .map(|d| LearningGroup {
            domain: d.domain,
            title: d.title,
            intro: d.intro,
            items: Vec::new(),
        })
        .collect();

    for target in latest_targets(catalog) {
        let Some(group) = groups.iter_mut().find(|g| g.domain == target.domain) else {
            continue;
        };
        let detail = cache.lookup(&target).cloned();
        group.items.push(LearningEntry {
            domain: target.domain,
            pack_id: target.pack_id,
            version: target.version,
            detail,
        });
    }
    groups
}

#[cfg(test)]
#[path = "../tests/console/learning_tests.rs"]
mod tests;
