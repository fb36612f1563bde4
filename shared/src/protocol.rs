use std::borrow::Cow;

use crate::{Category, Item, NewItem, Rental, SignupRequest};
use serde::{Serialize, de::DeserializeOwned, de::IgnoredAny};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// 是否以 JSON 形式携带请求体
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

// =========================================================
// 路径常量 (非 JSON 形式的接口)
// =========================================================

/// 表单编码登录
pub const PATH_AUTH_TOKEN: &str = "/api/auth/token";
/// 支持查询参数的物品列表
pub const PATH_ITEMS: &str = "/api/items/";
/// multipart 图片上传
pub const PATH_UPLOAD: &str = "/upload/";

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// 是否需要携带 Bearer token
    const REQUIRES_AUTH: bool = false;

    /// 实际请求路径，带路径参数的接口覆盖此方法
    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed(Self::PATH)
    }
}

// =========================================================
// Request Definitions
// =========================================================

/// Register a new account (400 on username/email conflict)
impl ApiRequest for SignupRequest {
    // 成功时返回的用户信息前端不使用
    type Response = IgnoredAny;
    const PATH: &'static str = "/api/auth/signup";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// List all categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesRequest;

impl ApiRequest for ListCategoriesRequest {
    type Response = Vec<Category>;
    const PATH: &'static str = "/api/categories/";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Publish a new item
impl ApiRequest for NewItem {
    type Response = Item;
    const PATH: &'static str = PATH_ITEMS;
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = true;
}

/// Rentals of the authenticated user
#[derive(Debug, Serialize)]
pub struct MyRentalsRequest;

impl ApiRequest for MyRentalsRequest {
    type Response = Vec<Rental>;
    const PATH: &'static str = "/api/rentals/me";
    const METHOD: HttpMethod = HttpMethod::Get;
    const REQUIRES_AUTH: bool = true;
}

/// Mark a rental as returned
#[derive(Debug, Serialize)]
pub struct ReturnRentalRequest {
    #[serde(skip)]
    pub rental_id: u32,
}

impl ApiRequest for ReturnRentalRequest {
    type Response = Rental;
    const PATH: &'static str = "/api/rentals/{id}/return";
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = true;

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(Self::PATH.replace("{id}", &self.rental_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths() {
        assert_eq!(ListCategoriesRequest.path(), "/api/categories/");
        assert_eq!(MyRentalsRequest.path(), "/api/rentals/me");
        assert!(MyRentalsRequest::REQUIRES_AUTH);
        assert!(!ListCategoriesRequest::REQUIRES_AUTH);
    }

    #[test]
    fn test_return_rental_path_substitutes_id() {
        let req = ReturnRentalRequest { rental_id: 31 };
        assert_eq!(req.path(), "/api/rentals/31/return");
        assert_eq!(ReturnRentalRequest::METHOD, HttpMethod::Post);
    }

    #[test]
    fn test_new_item_posts_to_items() {
        assert_eq!(<NewItem as ApiRequest>::PATH, PATH_ITEMS);
        assert!(<NewItem as ApiRequest>::REQUIRES_AUTH);
        assert!(<NewItem as ApiRequest>::METHOD.has_body());
    }
}
