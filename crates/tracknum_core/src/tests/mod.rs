
mod stress;

use tower::Service;

use crate::issuance::{core::candidate, init_tracking};
use fixtures::acme_params;

#[tokio::test]
async fn integration_init_tracking() {
    #[cfg(feature = "tracknum_tracing")]
    crate::tracknum_tracing::init();
    let mut tracking = init_tracking();

    let (tracking_number, _) = issue_ok!(tracking, acme_params());
    assert!(candidate::is_well_formed(&tracking_number));

    let records = list!(tracking);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tracking_number, tracking_number);
}
