// Criterion benchmarks for Intern City

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use intern_city::catalog::Catalog;
use intern_city::core::{haversine_distance, skills::{skill_match, SkillSet}, Ranker};
use intern_city::models::{GeoPoint, Internship};

const SKILLS: &[&str] = &["Python", "Java", "AI", "IoT", "Cloud", "SQL", "GIS", "5G", "CRM"];

fn create_listing(id: usize, lat: f64, lon: f64) -> Internship {
    Internship {
        company: format!("Company {}", id),
        title: "Intern".to_string(),
        latitude: lat,
        longitude: lon,
        skills: (0..3)
            .map(|k| SKILLS[(id + k * 4) % SKILLS.len()].to_string())
            .collect(),
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(25.1325),
                black_box(55.4201),
                black_box(25.234511),
                black_box(55.324905),
            )
        });
    });
}

fn bench_skill_match(c: &mut Criterion) {
    let user = SkillSet::new(["python", "ai", "cloud"]);
    let listing = SkillSet::new(["Python", "Machine Learning", "AI", "Cloud", "Mobile Development"]);

    c.bench_function("skill_match", |b| {
        b.iter(|| skill_match(black_box(&user), black_box(&listing)));
    });
}

fn bench_builtin_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();
    let catalog = Catalog::builtin();
    let query = ranker.query(GeoPoint::new(25.1325, 55.4201), ["AI", "Python", "Cloud Computing"]);

    c.bench_function("rank_builtin_catalog", |b| {
        b.iter(|| ranker.rank(black_box(catalog.internships()), black_box(&query)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();
    let query = ranker.query(GeoPoint::new(25.1325, 55.4201), ["ai", "sql"]);

    let mut group = c.benchmark_group("ranking");

    for listing_count in [10, 100, 1000, 10000].iter() {
        let listings: Vec<Internship> = (0..*listing_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.001) % 0.5;
                let lon_offset = (i as f64 * 0.0007) % 0.5;
                create_listing(i, 25.0 + lat_offset, 55.1 + lon_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("rank", listing_count),
            &listings,
            |b, listings| {
                b.iter(|| ranker.rank(black_box(listings), black_box(&query)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_skill_match,
    bench_builtin_ranking,
    bench_ranking
);

criterion_main!(benches);
