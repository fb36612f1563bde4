use super::*;
use crate::error::{ApiError, ApiErrorStatus};
use crate::validation::{ItemDraft, validate};
use async_trait::async_trait;
use std::cell::RefCell;

// =========================================================
// Mock Gateway
// =========================================================

struct TestImage {
    name: &'static str,
}

#[derive(Default)]
struct MockGateway {
    /// Operation log to verify calling order
    log: RefCell<Vec<String>>,
    created: RefCell<Vec<NewItem>>,
    fail_upload: bool,
    fail_create: Option<ApiError>,
}

impl MockGateway {
    fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

#[async_trait(?Send)]
impl CatalogGateway for MockGateway {
    type Image = TestImage;

    async fn upload_image(&self, image: &TestImage) -> ApiResult<String> {
        self.log.borrow_mut().push(format!("upload:{}", image.name));
        if self.fail_upload {
            return Err(ApiError::from_response(400, r#"{"detail":"Solo se permiten imágenes"}"#));
        }
        Ok(format!("http://localhost:8000/uploads/{}", image.name))
    }

    async fn create_item(&self, payload: &NewItem) -> ApiResult<Item> {
        self.log.borrow_mut().push(format!("create:{}", payload.name));
        if let Some(err) = &self.fail_create {
            return Err(err.clone());
        }
        self.created.borrow_mut().push(payload.clone());
        Ok(Item {
            id: 99,
            name: payload.name.clone(),
            description: payload.description.clone(),
            price_per_h: payload.price_per_h,
            available: true,
            image_url: payload.image_url.clone(),
            image_urls: vec![],
            categories: vec![],
            owner_id: Some(1),
        })
    }
}

fn valid_item() -> ValidItem {
    validate(&ItemDraft {
        name: "Escalera 3 m".to_string(),
        description: String::new(),
        price: "2.5".to_string(),
        categories: vec![1, 2],
        image: None,
    })
    .unwrap()
}

// =========================================================
// publish_item 测试
// =========================================================

#[tokio::test]
async fn test_upload_happens_before_create_and_url_is_forwarded() {
    let gateway = MockGateway::default();
    let image = TestImage { name: "foto.png" };

    let item = publish_item(&gateway, valid_item(), Some(&image)).await.unwrap();

    assert_eq!(gateway.log(), vec!["upload:foto.png", "create:Escalera 3 m"]);
    let created = gateway.created.borrow();
    assert_eq!(
        created[0].image_url.as_deref(),
        Some("http://localhost:8000/uploads/foto.png")
    );
    assert_eq!(item.image_url, created[0].image_url);
}

#[tokio::test]
async fn test_without_image_upload_is_skipped() {
    let gateway = MockGateway::default();

    publish_item(&gateway, valid_item(), None).await.unwrap();

    assert_eq!(gateway.log(), vec!["create:Escalera 3 m"]);
    assert_eq!(gateway.created.borrow()[0].image_url, None);
}

#[tokio::test]
async fn test_upload_failure_aborts_before_create() {
    let gateway = MockGateway {
        fail_upload: true,
        ..Default::default()
    };
    let image = TestImage { name: "doc.pdf" };

    let err = publish_item(&gateway, valid_item(), Some(&image)).await.unwrap_err();

    assert_eq!(gateway.log(), vec!["upload:doc.pdf"]);
    assert!(gateway.created.borrow().is_empty());
    assert_eq!(err.user_message("Error al crear producto"), "Solo se permiten imágenes");
}

#[tokio::test]
async fn test_create_failure_surfaces_generic_message() {
    let gateway = MockGateway {
        fail_create: Some(ApiError::network("fetch failed")),
        ..Default::default()
    };

    let err = publish_item(&gateway, valid_item(), None).await.unwrap_err();

    assert_eq!(err.status, ApiErrorStatus::Network);
    assert_eq!(err.user_message("Error al crear producto"), "Error al crear producto");
}

// =========================================================
// CreationPhase 测试
// =========================================================

#[test]
fn test_phase_happy_path() {
    let phase = CreationPhase::default();
    assert!(!phase.is_open());

    let phase = phase.open();
    assert_eq!(phase, CreationPhase::Editing);

    let phase = phase.submit().unwrap();
    assert!(phase.is_submitting());

    assert_eq!(phase.finish(true), CreationPhase::Closed);
}

#[test]
fn test_phase_failure_returns_to_editing() {
    let phase = CreationPhase::Editing.submit().unwrap();
    assert_eq!(phase.finish(false), CreationPhase::Editing);
}

#[test]
fn test_phase_guards() {
    // 重复提交被忽略
    assert_eq!(CreationPhase::Submitting.submit(), None);
    assert_eq!(CreationPhase::Closed.submit(), None);
    // 提交中无法关闭
    assert_eq!(CreationPhase::Submitting.close(), CreationPhase::Submitting);
    assert_eq!(CreationPhase::Editing.close(), CreationPhase::Closed);
    // 非提交状态下 finish 无效
    assert_eq!(CreationPhase::Editing.finish(true), CreationPhase::Editing);
}
