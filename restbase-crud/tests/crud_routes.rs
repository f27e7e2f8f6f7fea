use restbase_core::attach_identity;
use restbase_core::http::middleware::from_fn;
use restbase_core::http::Router;
use restbase_crud::{CrudController, Dto};
use restbase_data::{Audit, Entity, InMemoryRepository, Repository};
use restbase_test::TestApp;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
struct Widget {
    id: u64,
    label: String,
    #[serde(flatten)]
    audit: Audit,
}

impl Entity for Widget {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
    fn audit(&self) -> &Audit {
        &self.audit
    }
    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}

#[derive(Debug, Clone, Serialize)]
struct WidgetDto {
    id: u64,
    label: String,
    #[serde(flatten)]
    audit: Audit,
}

impl Dto<Widget> for WidgetDto {
    fn from_entity(entity: &Widget) -> Self {
        Self {
            id: entity.id,
            label: entity.label.clone(),
            audit: entity.audit.clone(),
        }
    }

    fn into_entity(self) -> Widget {
        Widget {
            id: self.id,
            label: self.label,
            audit: self.audit,
        }
    }
}

async fn widget_app(count: u64) -> TestApp {
    let repo = InMemoryRepository::new();
    for i in 0..count {
        repo.save(&Widget {
            id: i,
            label: format!("widget-{i}"),
            audit: Audit::new(),
        })
        .await
        .unwrap();
    }

    let controller: CrudController<Widget, InMemoryRepository<Widget>, WidgetDto> =
        CrudController::builder(repo).resource("widget").build();

    TestApp::new(
        Router::new()
            .nest("/widgets", controller.into_router())
            .layer(from_fn(attach_identity)),
    )
}

#[tokio::test]
async fn list_returns_the_enveloped_wire_shape() {
    let app = widget_app(3).await;

    app.get("/widgets?page=0&size=2")
        .header("x-login", "alice")
        .send()
        .await
        .assert_ok()
        .assert_json_path("status", 200)
        .assert_json_path("message", "List of widget")
        .assert_json_path("data.items.len()", 2)
        .assert_json_path("data.items[0].label", "widget-0")
        .assert_json_path("data.totalPages", 2)
        .assert_json_path("data.totalElements", 3);
}

#[tokio::test]
async fn negative_params_fall_back_to_defaults_on_the_wire() {
    let app = widget_app(3).await;

    app.get("/widgets?page=-1&size=-9")
        .send()
        .await
        .assert_ok()
        .assert_json_path("data.items.len()", 3)
        .assert_json_path("data.totalPages", 1);
}

#[tokio::test]
async fn detail_envelope_omits_data_on_miss_and_nests_it_on_hit() {
    let app = widget_app(1).await;

    let body: Value = app
        .get("/widgets/99")
        .send()
        .await
        .assert_not_found()
        .json();
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "element with id 99 not found");
    assert!(body.get("data").is_none());

    app.get("/widgets/0")
        .send()
        .await
        .assert_ok()
        .assert_json_path("data.id", 0)
        .assert_json_path("data.label", "widget-0");
}

#[tokio::test]
async fn delete_restore_lifecycle_over_http() {
    let app = widget_app(1).await;

    app.delete("/widgets/0/delete")
        .send()
        .await
        .assert_ok()
        .assert_json_path("message", "widget deleted");

    app.get("/widgets/0")
        .send()
        .await
        .assert_unauthorized()
        .assert_json_path("status", 401)
        .assert_json_path("message", "element with id 0 has been deleted");

    app.delete("/widgets/0/delete")
        .send()
        .await
        .assert_unauthorized();

    app.put("/widgets/0/restore")
        .send()
        .await
        .assert_ok()
        .assert_json_path("message", "widget restored");

    app.get("/widgets/0").send().await.assert_ok();

    app.put("/widgets/0/restore")
        .send()
        .await
        .assert_unauthorized()
        .assert_json_path(
            "message",
            "element with id 0 cannot be restored because it is still active",
        );
}

#[tokio::test]
async fn deleted_timestamp_shows_up_in_the_dto() {
    let app = widget_app(1).await;

    let body: Value = app.delete("/widgets/0/delete").send().await.json();
    assert!(body["data"]["deletedAt"].is_string());
    assert!(body["data"]["createdAt"].is_string());
    assert_eq!(body["data"]["blocked"], false);
}
