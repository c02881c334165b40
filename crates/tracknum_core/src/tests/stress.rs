use std::collections::HashSet;

use futures::future::join_all;
use tower::Service;

use crate::{issuance::init_tracking, tests::fixtures::acme_params};

#[tokio::test]
async fn integration_issuance_stress_concurrent_uniqueness() {
    #[cfg(feature = "tracknum_tracing")]
    crate::tracknum_tracing::init();
    let issuance_count = 100;
    let tracking = init_tracking();

    // One task per inbound request; every clone shares the same store.
    let tasks: Vec<_> = (0..issuance_count)
        .map(|_| {
            let mut tracking = tracking.clone();
            tokio::spawn(async move {
                let (tracking_number, _) = issue_ok!(tracking, acme_params());
                tracking_number
            })
        })
        .collect();

    let mut numbers = HashSet::new();
    for result in join_all(tasks).await {
        let tracking_number = result.expect("issuance task panicked");
        assert!(numbers.insert(tracking_number), "duplicate tracking number under concurrency");
    }
    assert_eq!(numbers.len(), issuance_count);

    let mut tracking = tracking;
    assert_eq!(list!(tracking).len(), issuance_count);
}

#[tokio::test]
async fn integration_issuance_seq_stress_uniqueness() {
    #[cfg(feature = "tracknum_tracing")]
    crate::tracknum_tracing::init();
    let issuance_count = 200;
    let mut tracking = init_tracking();

    let mut numbers = HashSet::new();
    for _ in 0..issuance_count {
        let (tracking_number, _) = issue_ok!(tracking, acme_params());
        assert!(numbers.insert(tracking_number), "duplicate tracking number issued");
    }
    assert_eq!(list!(tracking).len(), issuance_count);
}
