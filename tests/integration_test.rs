// Integration tests for RankX
use rankx_catalog::{sample_catalog, CatalogDocument, CatalogSource, CatalogStore};
use rankx_core::{
    AttributeSchema, AttributeSpec, Candidate, Catalog, Error, Preferences, RankingConfig,
    RankingEngine, BALANCED_SUMMARY,
};
use std::io::Write;

fn sample_engine() -> RankingEngine {
    RankingEngine::new(sample_catalog().unwrap()).unwrap()
}

fn price_perf_catalog(items: &[(&str, f64, f64)]) -> Catalog {
    let schema = AttributeSchema::new(vec![
        AttributeSpec::lower_is_better("price", "price", "price", "prioritizing value for money"),
        AttributeSpec::higher_is_better("performance", "performance", "performance", "focusing on raw performance"),
    ])
    .unwrap();
    Catalog::new(
        schema,
        items
            .iter()
            .map(|&(name, price, perf)| Candidate::new(name, vec![price, perf]))
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_engine_initialization() {
    let engine = sample_engine();
    assert_eq!(engine.len(), 20);
    assert_eq!(engine.features().len(), 20);
    assert_eq!(engine.features().dim(), 4);
    assert_eq!(engine.features().ranges().len(), 4);
}

#[test]
fn test_recommend_returns_correct_count() {
    let engine = sample_engine();
    let prefs = Preferences::new(vec![50.0, 50.0, 50.0, 50.0]);
    assert_eq!(engine.rank(&prefs, 5).unwrap().len(), 5);
    assert_eq!(engine.rank(&prefs, 3).unwrap().len(), 3);
    assert_eq!(engine.recommend(&prefs).unwrap().len(), 5);
}

#[test]
fn test_scores_bounded_and_sorted() {
    let engine = sample_engine();
    let prefs = Preferences::new(vec![80.0, 20.0, 50.0, 50.0]);
    let results = engine.rank(&prefs, 20).unwrap();

    assert!(results.iter().all(|r| (0.0..=100.0).contains(&r.score)));
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_budget_priority_recommends_cheaper() {
    let engine = sample_engine();

    let avg_price = |scores: Vec<f64>| {
        let results = engine.rank(&Preferences::new(scores), 3).unwrap();
        results.iter().map(|r| r.candidate.values[0]).sum::<f64>() / results.len() as f64
    };

    let budget = avg_price(vec![100.0, 0.0, 0.0, 0.0]);
    let performance = avg_price(vec![0.0, 100.0, 0.0, 0.0]);
    assert!(budget < performance);
}

#[test]
fn test_performance_priority_recommends_faster() {
    let engine = sample_engine();
    let results = engine.rank(&Preferences::new(vec![0.0, 100.0, 0.0, 0.0]), 3).unwrap();
    assert!(results[0].candidate.values[1] >= 25000.0);
    assert_eq!(results[0].name(), "NVIDIA RTX 4090");
    assert_eq!(results[0].score, 100.0);
}

#[test]
fn test_budget_only_cheapest_first() {
    let engine = sample_engine();
    let results = engine.rank(&Preferences::new(vec![100.0, 0.0, 0.0, 0.0]), 20).unwrap();
    assert_eq!(results[0].name(), "Intel Arc A750");
    assert_eq!(results[0].score, 100.0);
    assert_eq!(results[19].name(), "NVIDIA RTX 4090");
}

#[test]
fn test_price_performance_scenario() {
    let catalog = price_perf_catalog(&[
        ("cheap", 100.0, 10.0),
        ("mid", 500.0, 50.0),
        ("expensive", 1000.0, 100.0),
    ]);
    let engine = RankingEngine::new(catalog).unwrap();
    let prefs = Preferences::new(vec![100.0, 0.0]);

    assert_eq!(engine.weights(&prefs).unwrap().as_slice(), &[1.0, 0.0]);

    let results = engine.rank(&prefs, 3).unwrap();
    assert_eq!(results[0].name(), "cheap");
    assert_eq!(results[0].score, 100.0);
    assert_eq!(results[2].name(), "expensive");
}

#[test]
fn test_all_zero_preferences_two_attributes() {
    let catalog = price_perf_catalog(&[
        ("cheap", 100.0, 10.0),
        ("mid", 500.0, 50.0),
        ("expensive", 1000.0, 100.0),
    ]);
    let engine = RankingEngine::new(catalog).unwrap();
    let prefs = Preferences::new(vec![0.0, 0.0]);

    assert_eq!(engine.weights(&prefs).unwrap().as_slice(), &[0.5, 0.5]);
    assert_eq!(engine.explain(&prefs).unwrap(), BALANCED_SUMMARY.to_string());

    let results = engine.rank(&prefs, 3).unwrap();
    assert_eq!(results[0].name(), "mid");
}

#[test]
fn test_saturation() {
    let engine = sample_engine();
    let results = engine.rank(&Preferences::new(vec![1.0, 2.0, 3.0, 4.0]), 100).unwrap();
    assert_eq!(results.len(), 20);
}

#[test]
fn test_determinism() {
    let engine = sample_engine();
    let prefs = Preferences::new(vec![70.0, 80.0, 60.0, 40.0]);
    let other = sample_engine();
    let a = engine.rank(&prefs, 20).unwrap();
    let b = other.rank(&prefs, 20).unwrap();

    let key = |r: &rankx_core::RankedResult<'_>| (r.name().to_string(), r.score.to_bits());
    assert_eq!(
        a.iter().map(key).collect::<Vec<_>>(),
        b.iter().map(key).collect::<Vec<_>>()
    );
}

#[test]
fn test_invalid_requests() {
    let engine = sample_engine();
    assert!(matches!(
        engine.rank(&Preferences::new(vec![50.0; 4]), 0),
        Err(Error::InvalidRequest(_))
    ));
    assert!(matches!(
        engine.rank(&Preferences::new(vec![50.0, -1.0, 0.0, 0.0]), 3),
        Err(Error::InvalidRequest(_))
    ));
}

#[test]
fn test_empty_catalog() {
    let catalog = Catalog::new(AttributeSchema::gpu(), Vec::new()).unwrap();
    assert!(matches!(RankingEngine::new(catalog), Err(Error::EmptyCatalog)));
}

#[test]
fn test_analysis_generation() {
    let engine = sample_engine();
    let analysis = engine.explain(&Preferences::new(vec![80.0, 30.0, 40.0, 20.0])).unwrap();
    assert!(!analysis.is_empty());
    assert!(analysis.contains("value for money"));
    assert!(analysis.contains("budget as the primary consideration"));
}

#[test]
fn test_store_from_catalog_file() {
    let doc = CatalogDocument::from_catalog(&sample_catalog().unwrap());
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(doc.to_json_pretty().unwrap().as_bytes()).unwrap();

    let store = CatalogStore::open(
        CatalogSource::File(file.path().to_path_buf()),
        RankingConfig { default_k: 3 },
    )
    .unwrap();

    let engine = store.snapshot();
    let prefs = Preferences::new(vec![70.0, 80.0, 60.0, 40.0]);
    let from_file = engine.recommend(&prefs).unwrap();
    let sample = sample_engine();
    let from_sample = sample.rank(&prefs, 3).unwrap();

    assert_eq!(from_file.len(), 3);
    for (a, b) in from_file.iter().zip(&from_sample) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.score, b.score);
    }
}
