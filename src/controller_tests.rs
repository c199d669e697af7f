//! Unit tests for the inventory controller against a mock service.

use std::time::Duration;

use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn controller_with_mock(mock_uri: &str) -> InventoryController {
    InventoryController::new(
        InventoryApi::new(mock_uri),
        Splash::new(Duration::ZERO, Instant::now()),
        std::env::temp_dir(),
    )
}

fn tyre_list() -> serde_json::Value {
    serde_json::json!([
        { "id": 1, "item": "Tyre A", "size": "205/55", "quantity": 4, "price": 50, "notes": "" },
        { "id": 2, "item": "Tyre B", "size": "195/65", "quantity": 2, "price": 65.5, "notes": "winter" }
    ])
}

async fn mock_list(mock_server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tyre_list()))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}

fn fill_form(controller: &mut InventoryController) {
    let form = controller.form_mut();
    form.item = "Tyre C".to_string();
    form.size = "225/45".to_string();
    form.quantity = "3".to_string();
    form.price = "80".to_string();
    form.notes = "new".to_string();
}

mod splash_gate_tests {
    use super::*;

    #[tokio::test]
    async fn first_load_waits_for_splash() {
        let mock_server = MockServer::start().await;
        mock_list(&mock_server, 1).await;

        let start = Instant::now();
        let mut controller = InventoryController::new(
            InventoryApi::new(mock_server.uri()),
            Splash::new(Duration::from_secs(2), start),
            std::env::temp_dir(),
        );

        controller.tick(start + Duration::from_millis(500)).await;
        assert!(controller.store().items().is_empty());
        assert!(controller.splash().is_showing());

        controller.tick(start + Duration::from_secs(2)).await;
        assert!(!controller.splash().is_showing());
        assert_eq!(controller.store().items().len(), 2);

        // later ticks do not reload
        controller.tick(start + Duration::from_secs(3)).await;
    }

    #[tokio::test]
    async fn cancelled_splash_does_not_load() {
        let mock_server = MockServer::start().await;
        mock_list(&mock_server, 0).await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller.cancel_splash();
        controller.tick(Instant::now() + Duration::from_secs(1)).await;
        assert!(controller.store().items().is_empty());
    }
}

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn valid_create_posts_once_then_refreshes_once() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/items"))
            .and(body_json(serde_json::json!({
                "item": "Tyre C",
                "size": "225/45",
                "quantity": 3,
                "price": 80.0,
                "notes": "new"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "saved" })))
            .expect(1)
            .mount(&mock_server)
            .await;
        mock_list(&mock_server, 1).await;

        let mut controller = controller_with_mock(&mock_server.uri());
        fill_form(&mut controller);
        controller.submit_create().await;

        assert_eq!(controller.form(), &ItemForm::default());
        assert!(controller.form_error().is_none());
        assert_eq!(controller.store().items().len(), 2);
        assert_eq!(
            controller.status().map(|s| s.kind),
            Some(StatusKind::Info)
        );
    }

    #[tokio::test]
    async fn blank_numbers_are_sent_as_zero() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/items"))
            .and(body_json(serde_json::json!({
                "item": "Tyre C",
                "size": "225/45",
                "quantity": 0,
                "price": 0.0,
                "notes": ""
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
        mock_list(&mock_server, 1).await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller.form_mut().item = "Tyre C".to_string();
        controller.form_mut().size = "225/45".to_string();
        controller.submit_create().await;
    }

    #[tokio::test]
    async fn empty_item_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut controller = controller_with_mock(&mock_server.uri());
        fill_form(&mut controller);
        controller.form_mut().item.clear();
        controller.submit_create().await;

        let message = controller.form_error().unwrap();
        assert!(!message.is_empty());
        // form keeps what the user typed
        assert_eq!(controller.form().size, "225/45");
    }

    #[tokio::test]
    async fn empty_size_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut controller = controller_with_mock(&mock_server.uri());
        fill_form(&mut controller);
        controller.form_mut().size = "  ".to_string();
        controller.submit_create().await;

        assert!(controller.form_error().is_some());
    }

    #[tokio::test]
    async fn negative_price_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut controller = controller_with_mock(&mock_server.uri());
        fill_form(&mut controller);
        controller.form_mut().price = "-5".to_string();
        controller.submit_create().await;

        assert!(controller.form_error().is_some());
    }

    #[tokio::test]
    async fn failed_create_keeps_form_and_skips_refresh() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;
        mock_list(&mock_server, 0).await;

        let mut controller = controller_with_mock(&mock_server.uri());
        fill_form(&mut controller);
        controller.submit_create().await;

        assert_eq!(controller.form().item, "Tyre C");
        let status = controller.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
    }

    #[tokio::test]
    async fn successful_create_clears_previous_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        mock_list(&mock_server, 1).await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller.submit_create().await;
        assert!(controller.form_error().is_some());

        fill_form(&mut controller);
        controller.submit_create().await;
        assert!(controller.form_error().is_none());
    }
}

mod edit_tests {
    use super::*;

    #[tokio::test]
    async fn save_edit_puts_by_id_and_refreshes() {
        let mock_server = MockServer::start().await;
        mock_list(&mock_server, 2).await;

        Mock::given(method("PUT"))
            .and(path("/items/update/2"))
            .and(body_json(serde_json::json!({
                "id": 2,
                "item": "Tyre B",
                "size": "195/65",
                "quantity": 8,
                "price": 65.5,
                "notes": "winter"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller.refresh().await;

        controller.apply_row_action(RowAction::Edit(2)).await;
        controller.edit_draft_mut().unwrap().quantity = "8".to_string();
        controller.save_edit().await;

        assert!(controller.edit_draft().is_none());
    }

    #[tokio::test]
    async fn cancel_edit_sends_nothing() {
        let mock_server = MockServer::start().await;
        mock_list(&mock_server, 1).await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller.refresh().await;

        controller.start_edit(1);
        assert_eq!(controller.edit_draft().map(|d| d.id), Some(1));
        controller.cancel_edit();
        assert!(controller.edit_draft().is_none());
    }

    #[tokio::test]
    async fn invalid_edit_stays_open() {
        let mock_server = MockServer::start().await;
        mock_list(&mock_server, 1).await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller.refresh().await;

        controller.start_edit(1);
        controller.edit_draft_mut().unwrap().item.clear();
        controller.save_edit().await;

        assert!(controller.edit_draft().is_some());
        assert!(controller.edit_error().is_some());
    }

    #[test]
    fn editing_unknown_id_opens_nothing() {
        let mut controller = controller_with_mock("http://127.0.0.1:1");
        controller.start_edit(99);
        assert!(controller.edit_draft().is_none());
    }
}

mod quantity_tests {
    use super::*;

    #[tokio::test]
    async fn commit_sets_quantity_by_name() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/items/Tyre%20A"))
            .and(query_param("new_quantity", "-2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
        mock_list(&mock_server, 1).await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller
            .apply_row_action(RowAction::SetQuantity {
                name: "Tyre A".to_string(),
                current: 4,
            })
            .await;
        controller.quantity_edit_mut().unwrap().new_quantity = "-2".to_string();
        controller.commit_quantity_edit().await;

        assert!(controller.quantity_edit().is_none());
    }

    #[tokio::test]
    async fn non_numeric_quantity_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller.start_quantity_edit("Tyre A", 4);
        controller.quantity_edit_mut().unwrap().new_quantity = "four".to_string();
        controller.commit_quantity_edit().await;

        assert!(controller.quantity_edit().is_some());
        assert_eq!(controller.status().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[tokio::test]
    async fn adjust_patches_then_refreshes() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/items/Tyre%20B"))
            .and(query_param("change", "1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
        mock_list(&mock_server, 1).await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller
            .apply_row_action(RowAction::Adjust {
                name: "Tyre B".to_string(),
                change: 1,
            })
            .await;
    }
}

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn row_delete_is_immediate() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/items/Tyre%20A"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
        mock_list(&mock_server, 1).await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller
            .apply_row_action(RowAction::Delete("Tyre A".to_string()))
            .await;
    }

    #[tokio::test]
    async fn delete_all_without_confirmation_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller.request_delete_all();
        assert!(controller.is_confirming_delete_all());

        controller.cancel_delete_all();
        assert!(!controller.is_confirming_delete_all());

        // confirming after cancel is a no-op
        controller.confirm_delete_all().await;
    }

    #[tokio::test]
    async fn confirmed_delete_all_sends_one_delete() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller.request_delete_all();
        controller.confirm_delete_all().await;

        assert!(!controller.is_confirming_delete_all());
        assert!(controller.store().items().is_empty());
    }
}

mod view_tests {
    use super::*;

    #[tokio::test]
    async fn search_narrows_rows_and_totals() {
        let mock_server = MockServer::start().await;
        mock_list(&mock_server, 1).await;

        let mut controller = controller_with_mock(&mock_server.uri());
        controller.refresh().await;

        assert_eq!(controller.rows().len(), 2);
        assert_eq!(controller.rows()[0].row_id, 2);
        assert_eq!(controller.totals().quantity, 6);

        controller.set_search("WINTER");
        let rows = controller.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item, "Tyre B");
        assert_eq!(rows[0].price, "€65.50");
        assert_eq!(controller.totals().value_display(), "€131.00");

        controller.search_mut().clear();
        assert_eq!(controller.visible_items().len(), 2);
    }

    #[tokio::test]
    async fn export_writes_full_list_regardless_of_search() {
        let mock_server = MockServer::start().await;
        mock_list(&mock_server, 1).await;

        let dir = tempfile::tempdir().unwrap();
        let mut controller = InventoryController::new(
            InventoryApi::new(mock_server.uri()),
            Splash::new(Duration::ZERO, Instant::now()),
            dir.path().to_path_buf(),
        );
        controller.refresh().await;
        controller.set_search("winter");

        let path = controller.suggested_export_path();
        assert!(controller.export_to(&path));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert_eq!(controller.status().map(|s| s.kind), Some(StatusKind::Info));
    }

    #[test]
    fn export_failure_sets_error_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller_with_mock("http://127.0.0.1:1");
        let path = dir.path().join("no_such_dir").join("out.csv");

        assert!(!controller.export_to(&path));
        assert_eq!(controller.status().map(|s| s.kind), Some(StatusKind::Error));

        controller.dismiss_status();
        assert!(controller.status().is_none());
    }
}
