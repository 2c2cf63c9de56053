pub mod mock_server;

use ethioverifypay_rust::{client::Environment, EthioVerifyPayClient};
use self::mock_server::EthioVerifyPayMockServer;

/// Test context binding a client to a fresh in-memory mock of the
/// business-record service.
pub struct TestContext {
    pub client: EthioVerifyPayClient,
    pub mock_server: EthioVerifyPayMockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        // Initialize tracing for easier debugging of failing tests
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let mock_server = EthioVerifyPayMockServer::start().await;

        let client = EthioVerifyPayClient::builder()
            .with_environment(Environment::from_single_url(mock_server.url()))
            .build();

        Self {
            client,
            mock_server,
        }
    }
}
