use blockforge_path::{add_item, get, parse, set};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_item_path", |b| {
        b.iter(|| parse(black_box("hero.slides[12].cta.label")))
    });
}

fn bench_get_set(c: &mut Criterion) {
    let mut doc = json!({});
    for i in 0..50 {
        set(&mut doc, &format!("features[{i}].title"), json!(format!("Feature {i}"))).unwrap();
    }

    c.bench_function("get_item_field", |b| {
        b.iter(|| get(black_box(&doc), black_box("features[42].title")))
    });

    c.bench_function("set_item_field", |b| {
        let mut doc = doc.clone();
        b.iter(|| set(&mut doc, black_box("features[42].title"), json!("edited")))
    });

    c.bench_function("add_item", |b| {
        b.iter_batched(
            || doc.clone(),
            |mut doc| add_item(&mut doc, "features", json!({"title": "new"})),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_parse, bench_get_set);
criterion_main!(benches);
