//! End-to-end tests of the simulated flows with tokio's paused clock.
//!
//! The gateway sleeps for realistic delays; `start_paused` lets the runtime
//! skip ahead so the tests run instantly while still observing the timers.

use std::time::Duration;

use tokio::time::Instant;
use urbanskate_core::{
    CryptoCheckout, DashboardTab, DonationWizard, MockGateway, NftDashboard, PaymentMethod,
    PaymentStatus, PixCheckout, SimConfig, SkateError, WizardStep,
};

fn gateway() -> MockGateway {
    MockGateway::new(SimConfig {
        seed: Some(2024),
        ..SimConfig::default()
    })
}

fn wizard_at_payment(amount: u32, method: PaymentMethod) -> DonationWizard {
    let mut wizard = DonationWizard::new();
    wizard.select_preset(amount);
    wizard.next().unwrap();
    wizard.select_method(method);
    wizard.next().unwrap();
    wizard.set_name("Elissa Steamer");
    wizard.set_email("elissa@skate.org");
    assert_eq!(wizard.next().unwrap(), WizardStep::Payment);
    wizard
}

#[tokio::test(start_paused = true)]
async fn test_pix_charge_produced_exactly_once() {
    let gateway = gateway();
    let wizard = wizard_at_payment(100, PaymentMethod::Pix);
    let amount = wizard.amount().unwrap();

    let mut checkout = PixCheckout::new();
    assert!(checkout.begin());
    // A second mount or double click must not start another charge
    assert!(!checkout.begin());

    let start = Instant::now();
    let result = gateway.create_pix_charge(amount).await;
    assert!(start.elapsed() >= Duration::from_secs(2));
    checkout.finish(result);

    let charge = checkout.result().expect("charge generated");
    assert!(!charge.payload.is_empty());
    assert!(charge.payload.contains("540100.00"));
    assert!(charge.qr_data_uri.starts_with("data:image/svg+xml;base64,"));

    // Later results are ignored; the first charge stays
    let first = charge.clone();
    checkout.finish(gateway.create_pix_charge(amount).await);
    assert!(!checkout.begin());
    assert_eq!(checkout.result(), Some(&first));
}

#[tokio::test(start_paused = true)]
async fn test_crypto_donation_flow() {
    let gateway = gateway();
    let wizard = wizard_at_payment(250, PaymentMethod::Crypto);
    let mut checkout = CryptoCheckout::new();

    assert!(matches!(
        checkout.send(&gateway, 250.0).await,
        Err(SkateError::WalletNotConnected)
    ));

    let start = Instant::now();
    checkout.connect(&gateway).await;
    assert!(start.elapsed() >= Duration::from_secs(2));
    assert!(checkout.wallet().is_some());

    checkout.send(&gateway, wizard.amount().unwrap()).await.unwrap();
    match checkout.payment().status() {
        PaymentStatus::Success(hash) => {
            assert!(hash.as_str().starts_with("0x"));
            assert!(hash.explorer_url().starts_with("https://etherscan.io/tx/0x"));
        }
        other => panic!("unexpected status: {:?}", other),
    }

    let draft = wizard.submit().unwrap();
    assert_eq!(draft.payment_method, PaymentMethod::Crypto);
    assert_eq!(draft.amount, 250.0);
}

#[tokio::test(start_paused = true)]
async fn test_crypto_failure_and_retry() {
    let _ = tracing_subscriber::fmt::try_init();

    let failing = MockGateway::new(SimConfig {
        failure_rate: 1.0,
        ..SimConfig::instant()
    });
    let healthy = MockGateway::new(SimConfig::instant());

    let mut checkout = CryptoCheckout::new();
    checkout.connect(&healthy).await;
    checkout.send(&failing, 10.0).await.unwrap();
    assert!(checkout.payment().error().is_some());

    assert!(checkout.retry());
    checkout.send(&healthy, 10.0).await.unwrap();
    assert!(checkout.payment().result().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_connect_mint_disconnect() {
    let gateway = gateway();
    let mut dashboard = NftDashboard::new();

    let start = Instant::now();
    dashboard.connect(&gateway).await;
    // wallet delay plus collection load delay
    assert!(start.elapsed() >= Duration::from_secs(3));
    assert_eq!(dashboard.tokens().len(), 3);
    assert_eq!(dashboard.transactions().len(), 3);

    dashboard.set_tab(DashboardTab::Mint);
    dashboard.mint(&gateway).await.unwrap();
    assert_eq!(dashboard.tokens().len(), 4);
    assert_eq!(dashboard.transactions().len(), 4);
    assert_eq!(
        dashboard.transactions()[0].nft_name,
        dashboard.tokens()[3].name
    );

    dashboard.disconnect();
    assert!(dashboard.tokens().is_empty());
    assert!(dashboard.transactions().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_connect_failure_surfaces_error() {
    let _ = tracing_subscriber::fmt::try_init();

    let gateway = MockGateway::new(SimConfig {
        failure_rate: 1.0,
        ..SimConfig::default()
    });
    let mut dashboard = NftDashboard::new();
    dashboard.connect(&gateway).await;

    assert!(!dashboard.is_connected());
    assert!(!dashboard.is_connecting());
    assert!(dashboard.error().is_some());
    dashboard.dismiss_error();
    assert!(dashboard.error().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_mint_without_wallet_is_rejected() {
    let mut dashboard = NftDashboard::new();
    let result = dashboard.mint(&gateway()).await;
    assert!(matches!(result, Err(SkateError::WalletNotConnected)));
    assert!(dashboard.tokens().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_mint_across_disconnect_and_reload() {
    let gateway = gateway();
    let mut dashboard = NftDashboard::new();
    dashboard.connect(&gateway).await;

    // First connection: mint in flight when the wallet is dropped
    let stale = dashboard.begin_mint().unwrap().unwrap();
    let stale_mint = tokio::spawn({
        let gateway = gateway.clone();
        async move { gateway.mint_supporter_token().await }
    });
    dashboard.disconnect();

    // Second connection: minting waits for the collection
    let session = dashboard.begin_connect().unwrap();
    let wallet = gateway.connect_wallet().await;
    assert!(dashboard.finish_connect(session, wallet));
    let load = tokio::spawn({
        let gateway = gateway.clone();
        async move { gateway.load_collection().await }
    });
    assert!(dashboard.begin_mint().unwrap().is_none());
    assert!(!dashboard.is_minting());

    assert!(dashboard
        .finish_mint(stale, stale_mint.await.unwrap())
        .is_none());
    assert!(dashboard.tokens().is_empty());

    dashboard.finish_load(session, load.await.unwrap());
    assert_eq!(dashboard.tokens().len(), 3);

    dashboard.mint(&gateway).await.unwrap();
    assert_eq!(dashboard.tokens().len(), 4);
    assert_eq!(dashboard.transactions().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_crypto_send_across_disconnect() {
    let gateway = gateway();
    let mut checkout = CryptoCheckout::new();
    checkout.connect(&gateway).await;

    let stale = checkout.begin_send().unwrap().unwrap();
    let stale_send = tokio::spawn({
        let gateway = gateway.clone();
        async move { gateway.send_donation(25.0).await }
    });
    checkout.disconnect();

    checkout.connect(&gateway).await;
    let session = checkout.begin_send().unwrap().unwrap();
    let fresh_send = tokio::spawn({
        let gateway = gateway.clone();
        async move { gateway.send_donation(50.0).await }
    });

    checkout.finish_send(stale, stale_send.await.unwrap());
    assert!(checkout.payment().is_pending());

    let fresh = fresh_send.await.unwrap();
    let expected = fresh.as_ref().ok().cloned();
    checkout.finish_send(session, fresh);
    assert_eq!(checkout.payment().result().cloned(), expected);
    assert!(expected.is_some());
}
