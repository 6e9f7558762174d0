//! Relationship route tests.
//!
//! Covers the four relation routes (`projects/:id/tasks`,
//! `projects/:id/categories`, `todos/:id/categories`, `todos/:id/tasksof`),
//! the envelope keying, link/unlink semantics, cascade deletion, and the two
//! preserved quirks of the original service.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{empty_server, seeded_server};

fn messages(body: &Value) -> &Vec<Value> {
    body["errorMessages"].as_array().expect("errorMessages array")
}

// =============================================================================
// Listing Tests
// =============================================================================

mod listings {
    use super::*;

    #[tokio::test]
    async fn test_tasks_lists_linked_todos() {
        let (server, _store) = seeded_server();

        let response = server.get("/projects/1/tasks").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let todos = body["todos"].as_array().expect("todos array");
        assert_eq!(todos.len(), 2);
    }

    #[tokio::test]
    async fn test_envelope_is_keyed_by_target_plural_not_relation_name() {
        let (server, _store) = seeded_server();

        // The inverse route is named "tasksof" but answers projects.
        let response = server.get("/todos/1/tasksof").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body.get("tasksof").is_none());
        let projects = body["projects"].as_array().expect("projects array");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0]["title"], "Office Work");
    }

    #[tokio::test]
    async fn test_related_instances_use_their_familys_wire_format() {
        let (server, _store) = seeded_server();

        let response = server.get("/todos/1/tasksof").await;

        let body: Value = response.json();
        let project = &body["projects"][0];
        assert_eq!(project["completed"], "false");
        assert_eq!(project["active"], "false");
    }

    #[tokio::test]
    async fn test_unknown_relation_name_is_404() {
        let (server, _store) = seeded_server();

        let response = server.get("/todos/1/subtasks").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_relation_of_the_wrong_family_is_404() {
        let (server, _store) = seeded_server();

        // Only projects own "tasks".
        let response = server.get("/categories/1/tasks").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_missing_parent_answers_200_with_empty_listing() {
        let (server, _store) = seeded_server();

        // Preserved quirk: the parent id is never checked on reads.
        let response = server.get("/projects/99/tasks").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["todos"], json!([]));
    }

    #[tokio::test]
    async fn test_non_numeric_parent_answers_200_with_empty_listing() {
        let (server, _store) = seeded_server();

        let response = server.get("/projects/abc/tasks").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["todos"], json!([]));
    }
}

// =============================================================================
// Link Tests
// =============================================================================

mod links {
    use super::*;

    #[tokio::test]
    async fn test_link_answers_201_and_creates_the_edge() {
        let (server, _store) = seeded_server();

        let response = server
            .post("/projects/1/categories")
            .json(&json!({"id": "2"}))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert!(response.text().is_empty());

        let listing: Value = server.get("/projects/1/categories").await.json();
        let categories = listing["categories"].as_array().expect("categories array");
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0]["title"], "Home");
    }

    #[tokio::test]
    async fn test_link_accepts_a_numeric_id() {
        let (server, _store) = seeded_server();

        let response = server
            .post("/projects/1/categories")
            .json(&json!({"id": 2}))
            .await;

        response.assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_link_is_visible_from_the_inverse_route() {
        let (server, _store) = empty_server();
        server.post("/projects").json(&json!({"title": "p"})).await;
        server.post("/todos").json(&json!({"title": "t"})).await;

        let response = server
            .post("/todos/1/tasksof")
            .json(&json!({"id": "1"}))
            .await;
        response.assert_status(StatusCode::CREATED);

        let listing: Value = server.get("/projects/1/tasks").await.json();
        assert_eq!(listing["todos"].as_array().expect("todos array").len(), 1);
    }

    #[tokio::test]
    async fn test_relinking_an_existing_pair_still_answers_201() {
        let (server, _store) = seeded_server();
        let payload = json!({"id": "1"});

        let first = server.post("/projects/1/categories").json(&payload).await;
        first.assert_status(StatusCode::CREATED);
        let second = server.post("/projects/1/categories").json(&payload).await;
        second.assert_status(StatusCode::CREATED);

        let listing: Value = server.get("/projects/1/categories").await.json();
        assert_eq!(
            listing["categories"].as_array().expect("categories array").len(),
            1
        );
    }

    #[tokio::test]
    async fn test_link_without_an_id_member_is_400() {
        let (server, _store) = seeded_server();

        let response = server
            .post("/projects/1/tasks")
            .json(&json!({"title": "not an id"}))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(
            messages(&body)[0],
            "Could not find thing matching value for id"
        );
    }

    #[tokio::test]
    async fn test_link_to_a_missing_child_is_404() {
        let (server, _store) = seeded_server();

        let response = server
            .post("/projects/1/tasks")
            .json(&json!({"id": "42"}))
            .await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(
            messages(&body)[0],
            "Could not find thing matching value for id"
        );
    }

    #[tokio::test]
    async fn test_link_from_a_missing_parent_is_404() {
        let (server, _store) = seeded_server();

        let response = server
            .post("/projects/99/tasks")
            .json(&json!({"id": "1"}))
            .await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(
            messages(&body)[0],
            "Could not find parent thing for relationship projects/99/tasks"
        );
    }
}

// =============================================================================
// Unlink Tests
// =============================================================================

mod unlinks {
    use super::*;

    #[tokio::test]
    async fn test_unlink_answers_200_and_removes_only_the_edge() {
        let (server, store) = seeded_server();

        let response = server.delete("/projects/1/tasks/1").await;

        response.assert_status_ok();
        let listing: Value = server.get("/projects/1/tasks").await.json();
        let todos = listing["todos"].as_array().expect("todos array");
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0]["id"], "2");

        // Both instances survive the unlink.
        assert!(store.get(thingd_store::EntityType::Todo, "1").is_ok());
        assert!(store.get(thingd_store::EntityType::Project, "1").is_ok());
    }

    #[tokio::test]
    async fn test_unlinking_a_missing_edge_is_404() {
        let (server, _store) = seeded_server();

        let response = server.delete("/projects/1/categories/2").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(
            messages(&body)[0],
            "Could not find any instances with projects/1/categories/2"
        );
    }

    #[tokio::test]
    async fn test_double_unlink_reports_a_missing_edge() {
        let (server, _store) = seeded_server();

        server.delete("/projects/1/tasks/1").await.assert_status_ok();

        let response = server.delete("/projects/1/tasks/1").await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_non_numeric_parent_id_is_400() {
        let (server, _store) = seeded_server();

        // Preserved quirk: an internal null-parent fault surfaced as 400.
        let response = server.delete("/todos/abc/tasksof/1").await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(
            messages(&body)[0],
            "Could not resolve parent thing for todos/abc/tasksof/1"
        );
    }

    #[tokio::test]
    async fn test_non_numeric_child_id_is_404() {
        let (server, _store) = seeded_server();

        let response = server.delete("/projects/1/tasks/abc").await;

        response.assert_status_not_found();
    }
}

// =============================================================================
// Cascade Tests
// =============================================================================

mod cascades {
    use super::*;

    #[tokio::test]
    async fn test_deleting_a_todo_cascades_its_edges() {
        let (server, _store) = seeded_server();

        server.delete("/todos/1").await.assert_status_ok();

        let tasks: Value = server.get("/projects/1/tasks").await.json();
        let remaining = tasks["todos"].as_array().expect("todos array");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0]["id"], "2");
    }

    #[tokio::test]
    async fn test_deleting_a_parent_cascades_both_directions() {
        let (server, _store) = seeded_server();

        server.delete("/projects/1").await.assert_status_ok();

        let parents: Value = server.get("/todos/1/tasksof").await.json();
        assert_eq!(parents["projects"], json!([]));
    }

    #[tokio::test]
    async fn test_membership_stubs_disappear_after_cascade() {
        let (server, _store) = seeded_server();

        server.delete("/projects/1").await.assert_status_ok();

        let body: Value = server.get("/todos/1").await.json();
        let todo = &body["todos"][0];
        assert!(todo.get("tasksof").is_none());
        // The category filing is untouched.
        assert!(todo.get("categories").is_some());
    }
}
