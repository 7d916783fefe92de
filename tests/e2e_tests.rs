//! End-to-end integration tests
//!
//! These tests run the real HTTP server on an ephemeral port and drive it
//! with an HTTP client. The fixture tests:
//! 1. Read receipt.json from a fixture directory
//! 2. POST it to /receipts/process
//! 3. GET /receipts/{id}/points
//! 4. Compare the response with expected.json
//!
//! Test fixtures are located in tests/fixtures/ and cover the published
//! sample receipts plus a time/total boundary case.
//!
//! Each test is run once per receipt store implementation.

#[cfg(test)]
mod tests {
    use futures::future::join_all;
    use receipt_processor::cli::StoreType;
    use receipt_processor::server;
    use receipt_processor::ReceiptProcessor;
    use reqwest::StatusCode;
    use rstest::rstest;
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use std::fs;
    use std::path::PathBuf;

    struct TestServer {
        base_url: String,
        client: reqwest::Client,
        handle: tokio::task::JoinHandle<()>,
    }

    impl TestServer {
        async fn spawn(store: StoreType) -> Self {
            let listener = server::bind("127.0.0.1:0".parse().unwrap())
                .await
                .expect("failed to bind ephemeral port");
            let addr = listener.local_addr().unwrap();
            let processor = ReceiptProcessor::new(server::create_store(store));

            let handle = tokio::spawn(async move {
                server::serve(listener, processor, std::future::pending())
                    .await
                    .unwrap();
            });

            Self {
                base_url: format!("http://{}", addr),
                client: reqwest::Client::new(),
                handle,
            }
        }

        async fn process(&self, body: &Value) -> (StatusCode, Value) {
            let response = self
                .client
                .post(format!("{}/receipts/process", self.base_url))
                .json(body)
                .send()
                .await
                .expect("process request failed");
            let status = response.status();
            (status, response.json().await.expect("process body not JSON"))
        }

        async fn points(&self, id: &str) -> (StatusCode, Value) {
            let response = self
                .client
                .get(format!("{}/receipts/{}/points", self.base_url, id))
                .send()
                .await
                .expect("points request failed");
            let status = response.status();
            (status, response.json().await.expect("points body not JSON"))
        }
    }

    impl Drop for TestServer {
        fn drop(&mut self) {
            self.handle.abort();
        }
    }

    fn read_fixture(fixture_name: &str, file: &str) -> Value {
        let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", fixture_name, file]
            .iter()
            .collect();
        let text = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("Fixture {} is not JSON: {}", path.display(), e))
    }

    fn sample_receipt() -> Value {
        read_fixture("morning", "receipt.json")
    }

    /// End-to-end test for all fixtures with both store implementations
    #[rstest]
    #[case("target")]
    #[case("corner_market")]
    #[case("simple")]
    #[case("morning")]
    #[case("afternoon_boundary")]
    #[tokio::test]
    async fn test_fixtures(
        #[case] fixture: &str,
        #[values(StoreType::Locked, StoreType::Sharded)] store: StoreType,
    ) {
        let server = TestServer::spawn(store).await;
        let receipt = read_fixture(fixture, "receipt.json");
        let expected = read_fixture(fixture, "expected.json");

        let (status, body) = server.process(&receipt).await;
        assert_eq!(status, StatusCode::OK, "process failed: {}", body);
        let id = body["id"].as_str().expect("response has no id");

        let (status, actual) = server.points(id).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            actual, expected,
            "\n\nPoints mismatch for fixture: {} (store: {:?})\n",
            fixture, store
        );
    }

    #[rstest]
    #[case::bad_total(json!({"retailer": "Target", "purchaseDate": "2022-01-02", "purchaseTime": "13:13", "items": [], "total": "1.2.3"}))]
    #[case::three_decimal_price(json!({"retailer": "Target", "purchaseDate": "2022-01-02", "purchaseTime": "13:13", "items": [{"shortDescription": "Pepsi", "price": "1.255"}], "total": "1.25"}))]
    #[case::bad_date(json!({"retailer": "Target", "purchaseDate": "01/02/2022", "purchaseTime": "13:13", "items": [], "total": "1.25"}))]
    #[case::bad_time(json!({"retailer": "Target", "purchaseDate": "2022-01-02", "purchaseTime": "1:13pm", "items": [], "total": "1.25"}))]
    #[case::unpadded_time(json!({"retailer": "Target", "purchaseDate": "2022-01-02", "purchaseTime": "14:5", "items": [], "total": "1.25"}))]
    #[case::missing_field(json!({"retailer": "Target", "purchaseDate": "2022-01-02", "purchaseTime": "13:13", "items": []}))]
    #[case::wrong_type(json!(["not", "a", "receipt"]))]
    #[tokio::test]
    async fn test_invalid_receipt_is_rejected(
        #[case] receipt: Value,
        #[values(StoreType::Locked, StoreType::Sharded)] store: StoreType,
    ) {
        let server = TestServer::spawn(store).await;

        let (status, body) = server.process(&receipt).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_receipt");

        let health: Value = server
            .client
            .get(format!("{}/health", server.base_url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["receipts"], 0);
    }

    #[tokio::test]
    async fn test_non_json_body_is_rejected() {
        let server = TestServer::spawn(StoreType::Sharded).await;

        let response = server
            .client
            .post(format!("{}/receipts/process", server.base_url))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "invalid_receipt");
    }

    #[rstest]
    #[tokio::test]
    async fn test_unknown_id_is_not_found(
        #[values(StoreType::Locked, StoreType::Sharded)] store: StoreType,
    ) {
        let server = TestServer::spawn(store).await;

        let (status, body) = server.points("non-existent").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[rstest]
    #[tokio::test]
    async fn test_points_are_stable_across_requests(
        #[values(StoreType::Locked, StoreType::Sharded)] store: StoreType,
    ) {
        let server = TestServer::spawn(store).await;
        let (_, body) = server.process(&sample_receipt()).await;
        let id = body["id"].as_str().unwrap().to_string();

        for _ in 0..5 {
            let (status, body) = server.points(&id).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"points": 15}));
        }
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_submissions_get_distinct_ids(
        #[values(StoreType::Locked, StoreType::Sharded)] store: StoreType,
    ) {
        let server = TestServer::spawn(store).await;
        let receipt = sample_receipt();

        let responses = join_all((0..50).map(|_| server.process(&receipt))).await;

        let ids: HashSet<String> = responses
            .into_iter()
            .map(|(status, body)| {
                assert_eq!(status, StatusCode::OK);
                body["id"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(ids.len(), 50);

        let scores = join_all(ids.iter().map(|id| server.points(id))).await;
        for (status, body) in scores {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["points"], 15);
        }
    }

    #[tokio::test]
    async fn test_health_counts_receipts() {
        let server = TestServer::spawn(StoreType::Locked).await;
        server.process(&sample_receipt()).await;
        server.process(&sample_receipt()).await;

        let response = server
            .client
            .get(format!("{}/health", server.base_url))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"status": "ok", "receipts": 2}));
    }
}
