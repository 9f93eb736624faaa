use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lunar_calendar::converter::{civil_to_islamic, islamic_to_persian};
use lunar_calendar::grid::{build_month, GridContext};
use lunar_calendar::{CivilDate, EngineConfig, EventCatalog, IslamicDate};

fn grid_benches(c: &mut Criterion) {
    let catalog = EventCatalog::bundled();
    let config = EngineConfig::default();
    let ctx = GridContext {
        config: &config,
        official: catalog.events(),
        local: &[],
    };
    let today = IslamicDate::new(1445, 9, 1).unwrap();

    c.bench_function("build_month/ramadan_1445", |b| {
        b.iter(|| build_month(black_box(&ctx), black_box(&today), 0).unwrap())
    });

    // A year of navigation, as a host paging through months would do.
    c.bench_function("build_month/twelve_months", |b| {
        b.iter(|| {
            for offset in -6..6 {
                black_box(build_month(&ctx, &today, offset).unwrap());
            }
        })
    });
}

fn converter_benches(c: &mut Criterion) {
    let civil = CivilDate::new(2024, 3, 21).unwrap();
    let islamic = IslamicDate::new(1445, 9, 11).unwrap();

    c.bench_function("civil_to_islamic", |b| {
        b.iter(|| civil_to_islamic(black_box(&civil), 0).unwrap())
    });
    c.bench_function("islamic_to_persian", |b| {
        b.iter(|| islamic_to_persian(black_box(&islamic)).unwrap())
    });
    c.bench_function("catalog/parse_bundled", |b| b.iter(EventCatalog::bundled));
}

criterion_group!(benches, grid_benches, converter_benches);
criterion_main!(benches);
