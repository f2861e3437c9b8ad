// Criterion benchmarks for Ad Targeting

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use ad_targeting::core::{matches_targeting, select_ad, TargetingEngine};
use ad_targeting::models::{Advertisement, AgeRange, Targeting, UserProfile};
use ad_targeting::services::DataStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

const INTERESTS: &[&str] = &[
    "sports", "tech", "fashion", "travel", "music", "gaming", "cooking", "reading",
];

fn create_ad(id: usize) -> Advertisement {
    let lower = 13 + (id % 40) as u32;
    Advertisement {
        category: format!("category-{}", id),
        message: format!("Message {}", id),
        targeting: Targeting {
            age_range: AgeRange(lower, lower + 20),
            interests: vec![
                INTERESTS[id % INTERESTS.len()].to_string(),
                INTERESTS[(id * 3 + 1) % INTERESTS.len()].to_string(),
            ],
        },
    }
}

fn create_profile() -> UserProfile {
    UserProfile::new(30, &["sports", "music"])
}

fn bench_predicate(c: &mut Criterion) {
    let profile = create_profile();
    let ad = create_ad(0);

    c.bench_function("matches_targeting", |b| {
        b.iter(|| matches_targeting(black_box(&profile), black_box(&ad.targeting)));
    });
}

fn bench_selection(c: &mut Criterion) {
    let profile = create_profile();
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("selection");

    for ad_count in [10, 100, 1000, 10000].iter() {
        let ads: Vec<Advertisement> = (0..*ad_count).map(create_ad).collect();

        group.bench_with_input(
            BenchmarkId::new("select_ad", ad_count),
            ad_count,
            |b, _| {
                b.iter(|| select_ad(black_box(&profile), black_box(&ads), &mut rng));
            },
        );
    }

    group.finish();
}

fn bench_serve_ad(c: &mut Criterion) {
    let mut users = HashMap::new();
    users.insert("user1".to_string(), create_profile());
    let ads: Vec<Advertisement> = (0..1000).map(create_ad).collect();
    let engine = TargetingEngine::new(
        DataStore::from_parts(users, ads).expect("benchmark ads are valid"),
    );
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("serve_ad_1000_ads", |b| {
        b.iter(|| engine.serve_ad_with(black_box("user1"), &mut rng));
    });
}

criterion_group!(
    benches,
    bench_predicate,
    bench_selection,
    bench_serve_ad
);

criterion_main!(benches);
