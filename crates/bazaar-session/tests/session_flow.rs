use bazaar_commerce::catalog::seed;
use bazaar_commerce::customer::NewOrder;
use bazaar_commerce::ids::ProductId;
use bazaar_session::{
    keys, DelayConfig, FileStore, PortalSession, Role, SessionContext, SessionError,
    SessionStore, SimulatedBackend,
};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_customer_login_writes_markers_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let backend = SimulatedBackend::new(DelayConfig::default());

    let started = tokio::time::Instant::now();
    let customer = backend.customer_login("05551234567").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1000));

    let mut ctx = SessionContext::new(FileStore::open(&path).unwrap());
    ctx.login_customer(&customer).unwrap();

    // A later run mounts from the file.
    let mut next = SessionContext::new(FileStore::open(&path).unwrap());
    assert_eq!(
        next.mount(Role::Customer).unwrap(),
        &PortalSession::Customer(customer.id.clone())
    );
    next.logout(Role::Customer).unwrap();

    let after = FileStore::open(&path).unwrap();
    assert!(!after.exists(keys::CUSTOMER_LOGGED_IN).unwrap());
    assert!(!after.exists(keys::CUSTOMER_ID).unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_login_errors() {
    let backend = SimulatedBackend::default();
    assert!(matches!(
        backend.customer_login("5551234567").await,
        Err(SessionError::InvalidPhone)
    ));
    match backend.customer_login("05550000000").await {
        Err(SessionError::CustomerNotFound(phone)) => assert_eq!(phone, "05550000000"),
        other => panic!("expected not found, got {other:?}"),
    }
    assert!(matches!(
        backend.admin_login("admin", "").await,
        Err(SessionError::MissingCredentials)
    ));
    assert_eq!(backend.admin_login("admin", "secret").await.unwrap().username, "admin");
}

#[tokio::test(start_paused = true)]
async fn test_second_submission_while_pending_is_refused() {
    let backend = SimulatedBackend::default();
    let customer = seed::customer_by_id("cust-2").unwrap();
    let mut form = NewOrder::new(&customer, seed::products());
    form.add_to_cart(&ProductId::new("prod-4")).unwrap();

    let (first, second) = tokio::join!(backend.submit_order(&form), async {
        tokio::task::yield_now().await;
        backend.submit_order(&form).await
    });

    assert_eq!(first.unwrap().customer_id.as_str(), "cust-2");
    assert!(matches!(second, Err(SessionError::SubmissionPending)));
    assert!(!backend.gate().is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_invalid_order_is_refused_without_delay() {
    let backend = SimulatedBackend::default();
    let customer = seed::customer_by_id("cust-1").unwrap();
    let form = NewOrder::new(&customer, seed::products());

    let started = tokio::time::Instant::now();
    let result = backend.submit_order(&form).await;
    assert!(matches!(result, Err(SessionError::Commerce(_))));
    assert_eq!(started.elapsed(), Duration::ZERO);
}
