use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeMap;
use tiktok_shop_sdk::{SearchProductsBody, Signer};

fn params(extra: usize) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    let _ = params.insert("app_key".to_string(), "bench-app-key".to_string());
    let _ = params.insert("timestamp".to_string(), "1700000000".to_string());
    let _ = params.insert("page_size".to_string(), "20".to_string());
    for i in 0..extra {
        let _ = params.insert(format!("extra_{}", i), format!("value-{}", i));
    }
    params
}

fn bench_sign(c: &mut Criterion) {
    let signer = Signer::new("bench-app-secret");
    let body = serde_json::to_string(&SearchProductsBody {
        seller_skus: Some((0..50).map(|i| format!("SKU-{}", i)).collect()),
        ..Default::default()
    })
    .unwrap();

    let mut group = c.benchmark_group("sign");
    for extra in [0usize, 8, 32] {
        let p = params(extra);
        let _ = group.bench_with_input(BenchmarkId::from_parameter(extra), &p, |b, p| {
            b.iter(|| {
                signer
                    .sign(
                        black_box("/product/202502/products/search"),
                        black_box(p),
                        "application/json",
                        black_box(&body),
                    )
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sign);
criterion_main!(benches);
