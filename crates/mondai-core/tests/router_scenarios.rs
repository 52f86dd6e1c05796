//! Routing scenarios against the embedded corpora and against mock knowledge bases.
//!
//! Run with: `cargo test -p mondai-core --test router_scenarios`

use mondai_core::{
    CoynKnowledgeBase, IQubesKnowledgeBase, KnowledgeBase, KnowledgeDomain, KnowledgeError,
    KnowledgeItem, KnowledgeResult, KnowledgeRouter, MetaKnytsKnowledgeBase, NO_KNOWLEDGE_BASE,
};
use std::sync::Arc;

/// Returns its items for every query, regardless of content.
struct Echo {
    domain: KnowledgeDomain,
    items: Vec<KnowledgeItem>,
}

impl KnowledgeBase for Echo {
    fn domain(&self) -> KnowledgeDomain {
        self.domain
    }
    fn get_all_knowledge(&self) -> Vec<KnowledgeItem> {
        self.items.clone()
    }
    fn search_knowledge(&self, _query: &str) -> KnowledgeResult<Vec<KnowledgeItem>> {
        Ok(self.items.clone())
    }
}

struct Broken(KnowledgeDomain);

impl KnowledgeBase for Broken {
    fn domain(&self) -> KnowledgeDomain {
        self.0
    }
    fn get_all_knowledge(&self) -> Vec<KnowledgeItem> {
        Vec::new()
    }
    fn search_knowledge(&self, _query: &str) -> KnowledgeResult<Vec<KnowledgeItem>> {
        Err(KnowledgeError::SearchFailed {
            kb: self.0.source_name().to_string(),
            reason: "simulated outage".to_string(),
        })
    }
}

fn item(id: &str, source: &str) -> KnowledgeItem {
    KnowledgeItem {
        id: id.to_string(),
        title: format!("Title {}", id),
        content: format!("Content for {}", id),
        category: "test".to_string(),
        section: String::new(),
        source: source.to_string(),
        keywords: vec![],
        connections: None,
    }
}

fn echo(domain: KnowledgeDomain, count: usize) -> Arc<dyn KnowledgeBase> {
    Arc::new(Echo {
        domain,
        items: (0..count)
            .map(|n| item(&format!("{}-{}", domain.source_name(), n), domain.label()))
            .collect(),
    })
}

fn default_router() -> KnowledgeRouter {
    KnowledgeRouter::with_defaults().expect("embedded corpora load")
}

#[test]
fn what_is_an_iqube_routes_to_iqubes() {
    let route = default_router().route_query("what is an iqube");
    assert!(route.classification.iqubes);
    assert_eq!(route.primary_source, "iQubes Knowledge Base");
    assert_eq!(route.sources_used, ["iQubes"]);
    assert!(!route.results.is_empty());
    assert!(route.results.iter().all(|i| i.source.starts_with("iQube")));
}

#[test]
fn iqubes_only_query_uses_only_iqubes() {
    let route = default_router().route_query("blakqube encryption layer");
    assert!(!route.classification.coyn);
    assert!(!route.classification.metaknyts);
    assert_eq!(route.sources_used, ["iQubes"]);
    assert_eq!(route.results[0].id, "blakqube-private-layer");
}

#[test]
fn empty_query_searches_all_three_and_caps() {
    let route = default_router().route_query("");
    assert!(route.classification.is_unclassified());
    assert_eq!(route.sources_used, ["iQubes", "COYN", "metaKnyts"]);
    assert_eq!(
        route.primary_source,
        "Multiple Knowledge Bases (iQubes, COYN, metaKnyts)"
    );
    assert_eq!(route.results.len(), 5);
    assert_eq!(route.total_found, 5);
    // Priority order: the iQubes corpus alone fills the cap.
    assert_eq!(route.results[0].id, "iqube-overview");
    assert!(route.results.iter().all(|i| i.source.starts_with("iQube")));
}

#[test]
fn metaknyts_character_stays_in_metaknyts() {
    let route = default_router().route_query("metaknyts character");
    assert_eq!(route.sources_used, ["metaKnyts"]);
    assert_eq!(route.primary_source, "metaKnyts Knowledge Base");
    assert!(route.results.iter().any(|i| i.id == "knowone"));
}

#[test]
fn metaknyts_query_never_falls_back() {
    let router = KnowledgeRouter::new(
        Arc::new(IQubesKnowledgeBase::new().unwrap()),
        Arc::new(CoynKnowledgeBase::new().unwrap()),
        Arc::new(MetaKnytsKnowledgeBase::from_items(vec![]).unwrap()),
    );
    let route = router.route_query("metaknyts character");
    assert!(route.results.is_empty());
    assert!(route.sources_used.is_empty());
    assert_eq!(route.primary_source, NO_KNOWLEDGE_BASE);
    assert_eq!(route.total_found, 0);
}

#[test]
fn empty_iqubes_promotes_coyn_on_tech_query() {
    let router = KnowledgeRouter::new(
        Arc::new(IQubesKnowledgeBase::from_items(vec![]).unwrap()),
        Arc::new(CoynKnowledgeBase::new().unwrap()),
        Arc::new(MetaKnytsKnowledgeBase::new().unwrap()),
    );
    let route = router.route_query("iqube token");
    assert!(route.classification.iqubes);
    assert!(route.classification.general_tech);
    assert_eq!(route.primary_source, "COYN Knowledge Base");
    assert_eq!(route.sources_used, ["COYN"]);
}

fn empty_iqubes_router() -> KnowledgeRouter {
    KnowledgeRouter::new(
        echo(KnowledgeDomain::IQubes, 0),
        echo(KnowledgeDomain::Coyn, 2),
        echo(KnowledgeDomain::MetaKnyts, 2),
    )
}

#[test]
fn empty_iqubes_falls_back_on_coyn_keyword_alone() {
    let route = empty_iqubes_router().route_query("iqube treasury");
    assert!(route.classification.iqubes);
    assert!(route.classification.coyn);
    assert!(!route.classification.general_tech);
    assert_eq!(route.primary_source, "COYN Knowledge Base");
    assert_eq!(route.sources_used, ["COYN"]);
    assert_eq!(route.total_found, 2);
}

#[test]
fn empty_iqubes_falls_back_on_tech_keyword_alone() {
    let route = empty_iqubes_router().route_query("iqube blockchain");
    assert!(route.classification.iqubes);
    assert!(route.classification.general_tech);
    assert!(!route.classification.coyn);
    assert_eq!(route.primary_source, "COYN Knowledge Base");
    assert_eq!(route.sources_used, ["COYN"]);
    assert_eq!(route.total_found, 2);
}

#[test]
fn empty_iqubes_without_coyn_or_tech_signal_stays_empty() {
    let route = empty_iqubes_router().route_query("iqube");
    assert!(!route.classification.coyn);
    assert!(!route.classification.general_tech);
    assert!(route.results.is_empty());
    assert_eq!(route.primary_source, NO_KNOWLEDGE_BASE);
}

#[test]
fn coyn_and_iqubes_both_empty_yields_sentinel() {
    let router = KnowledgeRouter::new(
        echo(KnowledgeDomain::IQubes, 0),
        echo(KnowledgeDomain::Coyn, 0),
        echo(KnowledgeDomain::MetaKnyts, 3),
    );
    let route = router.route_query("coyn treasury");
    assert!(route.classification.coyn);
    assert!(!route.classification.iqubes);
    assert!(route.results.is_empty());
    assert!(route.sources_used.is_empty());
    assert_eq!(route.primary_source, NO_KNOWLEDGE_BASE);
    assert_eq!(route.total_found, 0);
}

#[test]
fn failing_iqubes_adapter_is_excluded() {
    let router = KnowledgeRouter::new(
        Arc::new(Broken(KnowledgeDomain::IQubes)),
        Arc::new(CoynKnowledgeBase::new().unwrap()),
        Arc::new(MetaKnytsKnowledgeBase::new().unwrap()),
    );
    let route = router.route_query("what is an iqube");
    assert!(!route.sources_used.iter().any(|s| s == "iQubes"));
    assert_eq!(route.total_found, route.results.len());
}

#[test]
fn every_adapter_failing_still_returns_sentinel() {
    let router = KnowledgeRouter::new(
        Arc::new(Broken(KnowledgeDomain::IQubes)),
        Arc::new(Broken(KnowledgeDomain::Coyn)),
        Arc::new(Broken(KnowledgeDomain::MetaKnyts)),
    );
    let route = router.route_query("");
    assert!(route.results.is_empty());
    assert_eq!(route.primary_source, NO_KNOWLEDGE_BASE);
}

#[test]
fn unclassified_query_keeps_priority_order_and_caps_after_dedup() {
    let router = KnowledgeRouter::new(
        echo(KnowledgeDomain::IQubes, 3),
        echo(KnowledgeDomain::Coyn, 4),
        echo(KnowledgeDomain::MetaKnyts, 4),
    );
    let route = router.route_query("zzz");
    let ids: Vec<&str> = route.results.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["iQubes-0", "iQubes-1", "iQubes-2", "COYN-0", "COYN-1"]);
    assert_eq!(route.total_found, 5);
    assert_eq!(route.sources_used, ["iQubes", "COYN", "metaKnyts"]);
}

#[test]
fn duplicate_hits_are_collapsed() {
    let dup = Arc::new(Echo {
        domain: KnowledgeDomain::MetaKnyts,
        items: vec![item("knowone", "lore"), item("knowone", "lore"), item("terra", "lore")],
    });
    let router = KnowledgeRouter::new(
        echo(KnowledgeDomain::IQubes, 0),
        echo(KnowledgeDomain::Coyn, 0),
        dup,
    );
    let route = router.route_query("saga");
    let ids: Vec<&str> = route.results.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["knowone", "terra"]);
    assert_eq!(route.total_found, 2);
}

#[test]
fn same_id_from_different_sources_is_kept() {
    let router = KnowledgeRouter::new(
        Arc::new(Echo {
            domain: KnowledgeDomain::IQubes,
            items: vec![item("overview", "iQubes Knowledge Base")],
        }),
        Arc::new(Echo {
            domain: KnowledgeDomain::Coyn,
            items: vec![item("overview", "COYN Knowledge Base")],
        }),
        echo(KnowledgeDomain::MetaKnyts, 0),
    );
    let route = router.route_query("zzz");
    assert_eq!(route.results.len(), 2);
    assert_eq!(route.primary_source, "Multiple Knowledge Bases (iQubes, COYN)");
}

#[test]
fn routing_is_idempotent() {
    let router = default_router();
    for query in ["what is an iqube", "", "coyn treasury", "metaknyts character", "zzz"] {
        assert_eq!(router.route_query(query), router.route_query(query), "query {:?}", query);
    }
}

#[test]
fn configured_cap_is_respected() {
    let router = default_router().with_max_results(2);
    let route = router.route_query("");
    assert_eq!(route.results.len(), 2);
    assert_eq!(route.total_found, 2);
}

#[test]
fn route_result_serializes_camel_case() {
    let route = default_router().route_query("coyn treasury");
    let json = serde_json::to_value(&route).unwrap();
    assert_eq!(json["primarySource"], "COYN Knowledge Base");
    assert_eq!(json["sourcesUsed"][0], "COYN");
    assert_eq!(json["totalFound"], route.results.len());
    assert_eq!(json["classification"]["coyn"], true);
}

#[test]
fn stats_cover_embedded_corpora() {
    let router = default_router();
    let stats = router.get_knowledge_stats();
    let names: Vec<&str> = stats.knowledge_bases.iter().map(|kb| kb.name.as_str()).collect();
    assert_eq!(
        names,
        ["iQubes Knowledge Base", "COYN Knowledge Base", "metaKnyts Knowledge Base"]
    );
    let sum: usize = stats.knowledge_bases.iter().map(|kb| kb.total_items).sum();
    assert_eq!(stats.total_items, sum);
    assert_eq!(stats.total_items, 22);
}
