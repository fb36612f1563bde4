use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;
pub mod presentation;
pub mod protocol;
pub mod publish;
pub mod query;
pub mod resource;
pub mod session;
pub mod validation;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中保存会话 token 的键
pub const SESSION_TOKEN_KEY: &str = "token";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_TOTAL_COUNT: &str = "X-Total-Count";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// 可出租的物品（服务端快照，客户端只读）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_h: f64,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub owner_id: Option<u32>,
}

fn default_true() -> bool {
    true
}

/// 发布新物品时提交的载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_per_h: f64,
    pub categories: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: u32,
    pub item_id: u32,
    /// 部分接口会内联物品信息
    #[serde(default)]
    pub item: Option<Item>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub deposit: f64,
    pub returned: bool,
}

impl Rental {
    /// 租期时长（小时，向上取整）
    pub fn hours(&self) -> i64 {
        let minutes = (self.end_at - self.start_at).num_minutes().max(0);
        (minutes + 59) / 60
    }
}

// =========================================================
// 认证相关 (Auth)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_tolerates_missing_optional_fields() {
        let json = r#"{"id":7,"name":"Taladro","price_per_h":4.5}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert!(item.available);
        assert!(item.categories.is_empty());
        assert!(item.image_urls.is_empty());
        assert_eq!(item.description, None);
    }

    #[test]
    fn new_item_omits_absent_image() {
        let payload = NewItem {
            name: "Taladro".to_string(),
            description: None,
            price_per_h: 3.5,
            categories: vec![1, 2],
            image_url: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("image_url"));
        assert!(!json.contains("description"));
        assert!(json.contains(r#""categories":[1,2]"#));
    }

    #[test]
    fn rental_hours_round_up() {
        let rental: Rental = serde_json::from_str(
            r#"{"id":1,"item_id":42,"start_at":"2025-01-01T10:00:00Z",
                "end_at":"2025-01-01T12:30:00Z","deposit":20.0,"returned":false}"#,
        )
        .unwrap();
        assert_eq!(rental.hours(), 3);
        assert!(rental.item.is_none());
    }
}
