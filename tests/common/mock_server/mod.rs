mod routes;

use actix_web::{web, App, HttpServer};
use ethioverifypay_rust::apis::businesses::BusinessRecord;
use reqwest::Url;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tokio::sync::oneshot;

/// In-memory storage for business records created on the mock server,
/// keyed by verification code.
type MockServerStorage = Arc<RwLock<HashMap<String, BusinessRecord>>>;

/// Simple mock of the business-record service used in local integration tests.
pub struct EthioVerifyPayMockServer {
    url: Url,
    shutdown: Option<oneshot::Sender<()>>,
    storage: MockServerStorage,
}

impl EthioVerifyPayMockServer {
    pub async fn start() -> Self {
        // Setup the in-memory storage
        let storage = MockServerStorage::default();
        let storage_clone = storage.clone();

        // Setup the mock HTTP server and bind it to a random port
        let http_server_factory = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .service(
                    web::resource("/api/businesses")
                        .route(web::post().to(routes::create_business)),
                )
                .service(
                    web::resource("/api/businesses/{code}")
                        .route(web::get().to(routes::get_business_by_code)),
                )
        })
        .workers(1)
        .bind("127.0.0.1:0")
        .unwrap();

        // Retrieve the address and port the server was bound to
        let addr = http_server_factory.addrs().first().cloned().unwrap();

        // Prepare a oneshot channel to kill the HTTP server when this struct is dropped
        let (shutdown_sender, shutdown_recv) = oneshot::channel();

        // Start the server in another task
        let http_server = http_server_factory.run();
        tokio::spawn(async move {
            tokio::select! {
                _ = http_server => panic!("HTTP server crashed"),
                _ = shutdown_recv => { /* Intentional shutdown */ }
            }
        });

        Self {
            url: Url::parse(&format!("http://{}", addr)).unwrap(),
            shutdown: Some(shutdown_sender),
            storage: storage_clone,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Number of records currently stored. Lets tests assert on duplicate
    /// registrations, since creations carry no idempotency key.
    pub fn stored_record_count(&self) -> usize {
        self.storage.read().unwrap().len()
    }
}

impl Drop for EthioVerifyPayMockServer {
    fn drop(&mut self) {
        // Send a shutdown signal to the actix server on drop
        let _ = self.shutdown.take().unwrap().send(());
    }
}
