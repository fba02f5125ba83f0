use async_trait::async_trait;
use gmaps_locate::acquisition::{NoopExpander, RedirectExpander};
use gmaps_locate::host::SearchQuery;
use gmaps_locate::resolve::{
    AddressForwarder, LocationResult, Provenance, Resolution, SearchHandler,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const SHORT: &str = "https://maps.app.goo.gl/XyZ123";
const SLOW: &str = "https://maps.app.goo.gl/slow";
const DELAYED: &str = "https://maps.app.goo.gl/delayed";

struct FakeQuery {
    term: String,
    results: Mutex<Vec<LocationResult>>,
}

impl FakeQuery {
    fn new(term: &str) -> Arc<Self> {
        Arc::new(Self {
            term: term.to_string(),
            results: Mutex::new(Vec::new()),
        })
    }

    fn results(&self) -> Vec<LocationResult> {
        self.results.lock().unwrap().clone()
    }
}

impl SearchQuery for FakeQuery {
    fn term(&self) -> &str {
        &self.term
    }

    fn add_result(&self, result: LocationResult) {
        self.results.lock().unwrap().push(result);
    }
}

#[derive(Default)]
struct FakeForwarder {
    addresses: Mutex<Vec<String>>,
}

impl AddressForwarder for FakeForwarder {
    fn forward(&self, address: &str) {
        self.addresses.lock().unwrap().push(address.to_string());
    }
}

/// Maps short links to fixed targets; `DELAYED` answers after a few
/// milliseconds and `SLOW` never resolves in test time.
struct FakeExpander {
    targets: HashMap<&'static str, &'static str>,
}

impl FakeExpander {
    fn new(targets: &[(&'static str, &'static str)]) -> Arc<Self> {
        Arc::new(Self {
            targets: targets.iter().copied().collect(),
        })
    }
}

#[async_trait]
impl RedirectExpander for FakeExpander {
    async fn expand(&self, url: &str) -> String {
        if url == SLOW {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        if url == DELAYED {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        self.targets.get(url).unwrap_or(&url).to_string()
    }
}

fn handler(expander: Arc<dyn RedirectExpander>) -> (SearchHandler, Arc<FakeForwarder>) {
    let forwarder = Arc::new(FakeForwarder::default());
    (SearchHandler::new(expander, forwarder.clone()), forwarder)
}

#[tokio::test]
async fn non_url_terms_are_ignored() {
    let (handler, forwarder) = handler(Arc::new(NoopExpander));
    for term in ["coffee shop", "", "   ", "maps.google.com/@35.0,139.0", "HTTPS://goo.gl/x"] {
        let query = FakeQuery::new(term);
        assert!(handler.handle_search(query.clone()).is_none(), "{term:?}");
        assert!(query.results().is_empty());
    }
    assert!(forwarder.addresses.lock().unwrap().is_empty());
}

#[tokio::test]
async fn direct_coordinate_url() {
    let (handler, _) = handler(Arc::new(NoopExpander));
    let query = FakeQuery::new("  https://www.google.com/maps/@35.681236,139.767125,17z  ");

    let task = handler.handle_search(query.clone()).unwrap();
    assert!(matches!(task.direct, Resolution::Located(_)));
    assert_eq!(task.expansion.await.unwrap(), None);

    let results = query.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].provenance, Provenance::Direct);
    assert_eq!((results[0].position.lat, results[0].position.lng), (35.681236, 139.767125));
}

#[tokio::test]
async fn short_url_resolves_through_expansion() {
    let expander = FakeExpander::new(&[(
        SHORT,
        "https://www.google.com/maps/place/Tokyo+Station/@35.6812,139.7671,17z/data=!3d35.681236!4d139.767125",
    )]);
    let (handler, forwarder) = handler(expander);
    let query = FakeQuery::new(SHORT);

    let task = handler.handle_search(query.clone()).unwrap();
    assert_eq!(task.direct, Resolution::Unresolved);
    assert!(matches!(task.expansion.await.unwrap(), Some(Resolution::Located(_))));

    let results = query.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].provenance, Provenance::Expanded);
    assert_eq!(
        results[0].description,
        "Jump to: 35.681236, 139.767125 (Expanded URL)"
    );
    assert!(forwarder.addresses.lock().unwrap().is_empty());
}

#[tokio::test]
async fn short_url_expanding_to_address_is_forwarded() {
    let expander = FakeExpander::new(&[(
        SHORT,
        "https://www.google.com/maps/search/%E4%BA%AC%E9%83%BD%E5%BA%9C%E4%BA%AC%E9%83%BD%E5%B8%82%E4%B8%8B%E4%BA%AC%E5%8C%BA%E6%9D%B1%E5%A1%A9%E5%B0%8F%E8%B7%AF%E7%94%BA+%E4%BA%AC%E9%83%BD%E9%A7%85?hl=ja",
    )]);
    let (handler, forwarder) = handler(expander);
    let query = FakeQuery::new(SHORT);

    let task = handler.handle_search(query.clone()).unwrap();
    task.expansion.await.unwrap();

    assert!(query.results().is_empty());
    assert_eq!(
        *forwarder.addresses.lock().unwrap(),
        vec!["京都府京都市下京区東塩小路町"]
    );
}

#[tokio::test]
async fn both_passes_emit_without_deduplication() {
    let direct = "https://www.google.com/maps/@35.1,139.2,15z";
    let expander = FakeExpander::new(&[(
        direct,
        "https://www.google.com/maps/@35.1,139.2,15z?entry=ttu",
    )]);
    let (handler, _) = handler(expander);
    let query = FakeQuery::new(direct);

    let task = handler.handle_search(query.clone()).unwrap();
    task.expansion.await.unwrap();

    let provenances: Vec<_> = query.results().iter().map(|r| r.provenance).collect();
    assert_eq!(provenances, vec![Provenance::Direct, Provenance::Expanded]);
}

#[tokio::test]
async fn stale_expansion_still_emits_by_default() {
    let (handler, _) = handler(FakeExpander::new(&[(
        DELAYED,
        "https://www.google.com/maps/@34.702485,135.495951,16z",
    )]));

    let stale_query = FakeQuery::new(DELAYED);
    let first = handler.handle_search(stale_query.clone()).unwrap();
    assert_eq!(first.direct, Resolution::Unresolved);

    let newer_query = FakeQuery::new("https://www.google.com/maps/@1.0,2.0");
    let second = handler.handle_search(newer_query.clone()).unwrap();

    assert!(!first.token.is_cancelled());
    assert!(matches!(
        first.expansion.await.unwrap(),
        Some(Resolution::Located(_))
    ));
    assert_eq!(second.expansion.await.unwrap(), None);

    let stale_results = stale_query.results();
    assert_eq!(stale_results.len(), 1);
    assert_eq!(stale_results[0].provenance, Provenance::Expanded);
    assert_eq!(
        (stale_results[0].position.lat, stale_results[0].position.lng),
        (34.702485, 135.495951)
    );

    // The newer query only has its own direct result
    let newer_results = newer_query.results();
    assert_eq!(newer_results.len(), 1);
    assert_eq!(newer_results[0].provenance, Provenance::Direct);
}

#[tokio::test]
async fn newer_search_cancels_stale_expansion() {
    let forwarder = Arc::new(FakeForwarder::default());
    let handler = SearchHandler::new(FakeExpander::new(&[]), forwarder).with_cancel_stale(true);

    let stale_query = FakeQuery::new(SLOW);
    let first = handler.handle_search(stale_query.clone()).unwrap();
    let second = handler
        .handle_search(FakeQuery::new("https://www.google.com/maps/@1.0,2.0"))
        .unwrap();

    assert!(first.token.is_cancelled());
    assert_eq!(first.expansion.await.unwrap(), None);
    assert!(stale_query.results().is_empty());
    assert_eq!(second.expansion.await.unwrap(), None);
}

#[tokio::test]
async fn caller_can_cancel_pending_expansion() {
    let (handler, _) = handler(FakeExpander::new(&[]));
    let task = handler.handle_search(FakeQuery::new(SLOW)).unwrap();
    task.token.cancel();
    assert_eq!(task.expansion.await.unwrap(), None);
}
