//! Integration tests running the real HTTP client and controller
//! against a mock server. No live network required.

use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use user_console::api::{ApiClient, UserApi};
use user_console::config::Config;
use user_console::controller::{Controller, StatusKind, StatusMessage};
use user_console::view;

fn client_for(server: &MockServer) -> ApiClient {
    let config = Config {
        api_base_url: server.uri(),
        ..Config::default()
    };
    ApiClient::new(&config)
}

mod health {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn success_parses_snapshot() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "ok",
                "timestamp": "2024-01-01T00:00:00Z"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let health = client.check_health().await.unwrap();
        assert_eq!(health.message, "ok");
    }

    #[tokio::test]
    async fn server_error_maps_to_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.check_health().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unreachable_server_sets_connectivity_error() {
        let config = Config {
            api_base_url: "http://127.0.0.1:1".to_string(),
            ..Config::default()
        };
        let mut controller = Controller::new(ApiClient::new(&config));

        controller.check_health().await;

        let state = controller.state();
        assert!(state.health.is_none());
        assert_eq!(
            state.status,
            StatusMessage::error("Failed to connect to server")
        );
    }
}

mod listing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn list_preserves_server_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 2,
                    "name": "Grace",
                    "email": "grace@example.com",
                    "created_at": "2024-01-02T00:00:00Z"
                },
                {
                    "id": 1,
                    "name": "Ada",
                    "email": "ada@example.com",
                    "created_at": "2024-01-01T00:00:00Z"
                }
            ])))
            .mount(&server)
            .await;

        let mut controller = Controller::new(client_for(&server));
        controller.list_users().await;

        let users = &controller.state().users;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Grace");
        assert_eq!(users[1].name, "Ada");
    }

    #[tokio::test]
    async fn server_error_sets_fetch_failure_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut controller = Controller::new(client_for(&server));
        controller.list_users().await;

        let state = controller.state();
        assert!(state.users.is_empty());
        assert_eq!(state.status, StatusMessage::error("Failed to fetch users"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.list_users().await.is_err());
    }
}

mod mount {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn initialize_renders_health_and_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "ok",
                "timestamp": "2024-01-01T00:00:00Z"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let mut controller = Controller::new(client_for(&server));
        controller.initialize().await;

        let state = controller.state();
        assert_eq!(state.users.len(), 0);
        assert_eq!(state.status.kind, StatusKind::Success);

        let rendered = view::render(state);
        assert!(rendered.contains("Server Status: ok"));
        assert!(rendered.contains("Last Check: 2024-01-01 00:00:00"));
        assert!(rendered.contains("Users (0)"));
    }
}

mod submission {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn submit_posts_then_refreshes() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users"))
            .and(body_json(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 1,
                "name": "Ada",
                "email": "ada@example.com",
                "created_at": "2024-01-01T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 1,
                    "name": "Ada",
                    "email": "ada@example.com",
                    "created_at": "2024-01-01T00:00:00Z"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = Controller::new(client_for(&server));
        controller.set_name("Ada");
        controller.set_email("ada@example.com");
        controller.submit_user().await;

        let state = controller.state();
        assert!(state.form.name.is_empty());
        assert!(state.form.email.is_empty());
        assert_eq!(
            state.status,
            StatusMessage::success("User added successfully!")
        );
        assert_eq!(state.users.len(), 1);
        assert_eq!(state.users[0].id, 1);
    }

    #[tokio::test]
    async fn incomplete_form_issues_no_requests() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mut controller = Controller::new(client_for(&server));
        controller.set_name("Ada");
        controller.submit_user().await;

        assert_eq!(
            controller.state().status,
            StatusMessage::error("Please fill in all fields")
        );
    }

    #[tokio::test]
    async fn create_failure_keeps_form_and_skips_refresh() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let mut controller = Controller::new(client_for(&server));
        controller.set_name("Ada");
        controller.set_email("ada@example.com");
        controller.submit_user().await;

        let state = controller.state();
        assert_eq!(state.form.name, "Ada");
        assert_eq!(state.form.email, "ada@example.com");
        assert_eq!(state.status, StatusMessage::error("Failed to add user"));
    }
}
