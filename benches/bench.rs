// Criterion benchmarks for clubmatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use clubmatch::core::{score_club, tokenize, Matcher};
use clubmatch::models::{Catalog, Club, KeywordMap, MatchPolicy, ScoringWeights};

fn create_club(id: usize) -> Club {
    let topics = ["swim", "dance", "coding", "music", "journalism", "finance"];
    let topic = topics[id % topics.len()];
    Club {
        name: format!("Club {} ({})", id, topic),
        description: format!("A club about {} with weekly meetings and events.", topic),
        category: topic.to_string(),
        tags: vec![topic.to_string(), "community".to_string()],
    }
}

fn create_catalog(size: usize) -> Catalog {
    Catalog::new((0..size).map(create_club).collect())
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box("I really like swimming and coding and music")));
    });
}

fn bench_score_club(c: &mut Criterion) {
    let club = create_club(0);
    let tokens = tokenize("i like swim and dance");
    let weights = ScoringWeights::default();

    c.bench_function("score_club", |b| {
        b.iter(|| score_club(black_box(&tokens), black_box(&club), black_box(&weights)));
    });
}

fn bench_scoring_match(c: &mut Criterion) {
    let matcher = Matcher::with_default_policy();
    let mut group = c.benchmark_group("scoring_match");

    for size in [10, 50, 200] {
        let catalog = create_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| matcher.match_clubs(black_box("i like swim and coding"), catalog));
        });
    }

    group.finish();
}

fn bench_keyword_match(c: &mut Criterion) {
    let catalog = create_catalog(50);
    let mut map = KeywordMap::new();
    map.insert("swim".to_string(), vec!["Club 0 (swim)".to_string()]);
    map.insert("dance".to_string(), vec!["Club 1 (dance)".to_string()]);
    let matcher = Matcher::new(MatchPolicy::Keyword(map), 3);

    c.bench_function("keyword_match", |b| {
        b.iter(|| matcher.match_clubs(black_box("i like to swim every day"), &catalog));
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_score_club,
    bench_scoring_match,
    bench_keyword_match
);
criterion_main!(benches);
