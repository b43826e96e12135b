//! Criterion benchmarks for URL and shorthand classification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use url::Url;

use gh_locator::{parse_shorthand, parse_url, parse_url_with, MatcherSettings};

const URL_CASES: [(&str, &str); 7] = [
    ("user", "https://github.com/octocat"),
    ("repo", "https://github.com/octocat/Hello-World"),
    ("issue", "https://github.com/octocat/Hello-World/issues/1347"),
    (
        "issue_comment",
        "https://github.com/octocat/Hello-World/issues/1347#issuecomment-1234567890",
    ),
    (
        "review_comment_commit_page",
        "https://github.com/octocat/Hello-World/pull/42/commits/6dcb09b5b57875f334f61aebed695e2e4193db5e#r2269233870",
    ),
    (
        "release_tag",
        "https://github.com/octocat/Hello-World/releases/tag/v1.0.0",
    ),
    ("no_match", "https://github.com/octocat/Hello-World/tree/main/src"),
];

/// Benchmark: parse_url in strict and loose mode
fn bench_parse_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_url");

    let modes = [
        ("strict", MatcherSettings::default()),
        ("loose", MatcherSettings::default().with_require_strict_type(false)),
    ];

    for (mode, settings) in &modes {
        for (name, url) in URL_CASES {
            group.throughput(Throughput::Bytes(url.len() as u64));
            group.bench_with_input(BenchmarkId::new(*mode, name), &url, |b, url| {
                b.iter(|| parse_url(black_box(url), settings));
            });
        }
    }

    group.finish();
}

/// Benchmark: classification of a pre-parsed URL, excluding `Url::parse`
fn bench_parse_url_with(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_url_with");
    let settings = MatcherSettings::default();

    for (name, raw) in URL_CASES {
        let url = Url::parse(raw).expect("valid test URL");
        group.bench_with_input(BenchmarkId::new("classify", name), &url, |b, url| {
            b.iter(|| parse_url_with(black_box(url), &settings));
        });
    }

    group.finish();
}

/// Benchmark: parse_shorthand forms
fn bench_parse_shorthand(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_shorthand");
    let settings = MatcherSettings::default();

    let cases = [
        ("repo", "octocat/Hello-World", None),
        ("numbered", "octocat/Hello-World#1347", None),
        ("ref", "octocat/Hello-World@release/v1.0", None),
        ("default_user", "Hello-World#1347", Some("octocat")),
        ("invalid", "octocat/Hello-World#abc", None),
    ];

    for (name, input, default_user) in cases {
        group.bench_with_input(BenchmarkId::new("shorthand", name), &input, |b, input| {
            b.iter(|| parse_shorthand(black_box(input), default_user, &settings));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_url,
    bench_parse_url_with,
    bench_parse_shorthand,
);
criterion_main!(benches);
