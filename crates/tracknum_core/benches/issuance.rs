use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tower::Service;
use tracknum_core::issuance::{
    api::{IssuanceParams, TrackingRequest},
    core::candidate,
    init_tracking,
};

fn acme_params() -> IssuanceParams {
    IssuanceParams {
        origin_country_id: Some("US".to_owned()),
        destination_country_id: Some("DE".to_owned()),
        weight: Some("2.5".to_owned()),
        customer_id: Some("de619854-b59b-425e-9db4-943979e1bd49".to_owned()),
        customer_name: Some("Acme Corp".to_owned()),
        customer_slug: None,
        created_at: None,
    }
}

fn bench_candidate_generate(c: &mut Criterion) {
    c.bench_function("candidate_generate", |b| {
        b.iter(|| black_box(candidate::generate("US", "DE", 2.5)));
    });
}

fn bench_issue_fresh_store(c: &mut Criterion) {
    c.bench_function("issue_fresh_store", |b| {
        b.to_async(tokio::runtime::Runtime::new().unwrap()).iter(|| async {
            let mut tracking = init_tracking();
            let _ = black_box(tracking.call(TrackingRequest::Issue(acme_params())).await);
        });
    });
}

fn bench_issue_populated_store(c: &mut Criterion) {
    c.bench_function("issue_populated_store", |b| {
        b.to_async(tokio::runtime::Runtime::new().unwrap()).iter(|| async {
            let mut tracking = init_tracking();
            for _ in 0..100 {
                let _ = tracking.call(TrackingRequest::Issue(acme_params())).await;
            }
            let _ = black_box(tracking.call(TrackingRequest::Issue(acme_params())).await);
        });
    });
}

criterion_group!(
    benches,
    bench_candidate_generate,
    bench_issue_fresh_store,
    bench_issue_populated_store
);
criterion_main!(benches);
