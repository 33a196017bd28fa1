use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tfidf_matcher::{scenario::Suite, Analyzer, Corpus, CorpusMatcher, DefaultTFIDFEngine, Matcher, MatcherConfig, TFIDFVectorizer};

fn documents() -> Vec<String> {
    let suite = Suite::builtin().expect("built-in suite parses");
    suite
        .scenarios
        .iter()
        .flat_map(|scenario| scenario.pairs.iter())
        .flat_map(|pair| [pair.left.clone(), pair.right.clone()])
        .collect()
}

fn matching_benchmark(c: &mut Criterion) {
    let docs = documents();
    let (left, right) = (&docs[2], &docs[3]);

    c.bench_function("transform_unigram", |b| {
        b.iter(|| {
            let mut vectorizer = TFIDFVectorizer::<DefaultTFIDFEngine>::new();
            for doc in &docs {
                black_box(vectorizer.transform(&[doc], 1).expect("order is non-zero"));
            }
        });
    });

    c.bench_function("average_matching_score", |b| {
        b.iter(|| {
            let mut matcher = Matcher::<DefaultTFIDFEngine>::new();
            black_box(matcher.average_matching_score(left, right))
        });
    });

    let analyzer = Analyzer::default();
    c.bench_function("corpus_fit_bigram", |b| {
        b.iter(|| black_box(Corpus::fit(&analyzer, &docs, 2).expect("order is non-zero")));
    });

    let matcher = CorpusMatcher::<DefaultTFIDFEngine>::fit(&MatcherConfig::default(), &docs)
        .expect("corpus fits");
    c.bench_function("corpus_average_matching_score", |b| {
        b.iter(|| black_box(matcher.average_matching_score(left, right)));
    });

    let suite = Suite::builtin().expect("built-in suite parses");
    let config = MatcherConfig::default();
    c.bench_function("builtin_sweep", |b| {
        b.iter(|| black_box(suite.sweep_default(&config).expect("sweep runs")));
    });
}

criterion_group!(benches, matching_benchmark);
criterion_main!(benches);
