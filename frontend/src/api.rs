//! REST 客户端
//!
//! JSON 接口统一走 `send::<R: ApiRequest>`，路径、方法与鉴权要求都声明在
//! `rentals_shared::protocol` 中。表单登录、带查询串的物品列表和 multipart 上传
//! 三个特殊接口单独实现。

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use rentals_shared::error::{ApiError, ApiErrorStatus, ApiResult};
use rentals_shared::protocol::{
    ApiRequest, HttpMethod, ListCategoriesRequest, MyRentalsRequest, PATH_AUTH_TOKEN, PATH_ITEMS,
    PATH_UPLOAD, ReturnRentalRequest,
};
use rentals_shared::publish::CatalogGateway;
use rentals_shared::query::{form_urlencode, with_query};
use rentals_shared::session::bearer_header;
use rentals_shared::{
    Category, HEADER_AUTHORIZATION, HEADER_TOTAL_COUNT, Item, NewItem, Rental, SignupRequest,
    TokenResponse, UploadResponse,
};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

/// 物品列表的一页结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemPage {
    pub items: Vec<Item>,
    /// 服务端 `X-Total-Count` 头，缺失时为 None
    pub total: Option<u32>,
}

impl ItemPage {
    /// 展示用的结果总数，缺少响应头时退化为本页数量
    pub fn count(&self) -> usize {
        self.total.map(|t| t as usize).unwrap_or(self.items.len())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RentalsApi {
    pub base_url: String,
    token: Option<String>,
}

impl RentalsApi {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 附加认证头；接口要求认证但没有 token 时直接拒绝，不发出请求
    fn authorize(&self, builder: RequestBuilder, required: bool) -> ApiResult<RequestBuilder> {
        match self.token.as_deref() {
            Some(token) => Ok(builder.header(HEADER_AUTHORIZATION, &bearer_header(token))),
            None if required => Err(ApiError::new(
                ApiErrorStatus::Unauthorized,
                "Debes haber iniciado sesión",
            )),
            None => Ok(builder),
        }
    }

    /// 非 2xx 响应转换为 `ApiError`，尽量保留服务端的 `detail`
    async fn check(res: Response) -> ApiResult<Response> {
        if res.ok() {
            return Ok(res);
        }
        let code = res.status();
        let body = res.text().await.unwrap_or_default();
        Err(ApiError::from_response(code, &body))
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> ApiResult<T> {
        res.json::<T>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    /// 发送协议中声明的 JSON 请求
    pub async fn send<R: ApiRequest>(&self, req: &R) -> ApiResult<R::Response> {
        let url = self.url(&req.path());
        let builder = match R::METHOD {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        };
        let builder = self.authorize(builder, R::REQUIRES_AUTH)?;

        let res = if R::METHOD.has_body() {
            builder
                .json(req)
                .map_err(|e| ApiError::decode(e.to_string()))?
                .send()
                .await
        } else {
            builder.send().await
        }
        .map_err(|e| ApiError::network(e.to_string()))?;

        Self::decode(Self::check(res).await?).await
    }

    /// 表单编码登录，返回 access token
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        let body = form_urlencode([("username", username), ("password", password)]);
        let res = Request::post(&self.url(PATH_AUTH_TOKEN))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let token: TokenResponse = Self::decode(Self::check(res).await?).await?;
        Ok(token.access_token)
    }

    pub async fn signup(&self, req: &SignupRequest) -> ApiResult<()> {
        self.send(req).await.map(|_| ())
    }

    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.send(&ListCategoriesRequest).await
    }

    /// 按查询串获取物品列表
    pub async fn list_items(&self, query: &str) -> ApiResult<ItemPage> {
        let url = self.url(&with_query(PATH_ITEMS, query));
        let res = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        let res = Self::check(res).await?;

        let total = parse_total_count(res.headers().get(HEADER_TOTAL_COUNT).as_deref());
        let items = Self::decode::<Vec<Item>>(res).await?;
        Ok(ItemPage { items, total })
    }

    /// multipart 上传图片（字段名 `file`），返回可访问的 URL
    pub async fn upload_image(&self, file: &File) -> ApiResult<String> {
        let form = FormData::new().map_err(|e| ApiError::decode(format!("{:?}", e)))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::decode(format!("{:?}", e)))?;

        let builder = self.authorize(Request::post(&self.url(PATH_UPLOAD)), true)?;
        let res = builder
            .body(form)
            .map_err(|e| ApiError::decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let uploaded: UploadResponse = Self::decode(Self::check(res).await?).await?;
        Ok(uploaded.url)
    }

    pub async fn create_item(&self, payload: &NewItem) -> ApiResult<Item> {
        self.send(payload).await
    }

    pub async fn my_rentals(&self) -> ApiResult<Vec<Rental>> {
        self.send(&MyRentalsRequest).await
    }

    pub async fn return_rental(&self, rental_id: u32) -> ApiResult<Rental> {
        self.send(&ReturnRentalRequest { rental_id }).await
    }
}

#[async_trait(?Send)]
impl CatalogGateway for RentalsApi {
    type Image = File;

    async fn upload_image(&self, image: &File) -> ApiResult<String> {
        RentalsApi::upload_image(self, image).await
    }

    async fn create_item(&self, payload: &NewItem) -> ApiResult<Item> {
        RentalsApi::create_item(self, payload).await
    }
}

fn parse_total_count(header: Option<&str>) -> Option<u32> {
    header.and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let api = RentalsApi::new("http://localhost:8000/", None);
        assert_eq!(api.url("/api/items/"), "http://localhost:8000/api/items/");
        assert_eq!(api.url("upload/"), "http://localhost:8000/upload/");

        let same_origin = RentalsApi::new("", None);
        assert_eq!(same_origin.url("/api/items/"), "/api/items/");
    }

    #[test]
    fn test_total_count_header() {
        assert_eq!(parse_total_count(Some(" 42 ")), Some(42));
        assert_eq!(parse_total_count(Some("n/a")), None);
        assert_eq!(parse_total_count(None), None);
    }

    #[test]
    fn test_page_count_falls_back_to_len() {
        let page = ItemPage::default();
        assert_eq!(page.count(), 0);
        let page = ItemPage {
            items: vec![],
            total: Some(12),
        };
        assert_eq!(page.count(), 12);
    }
}
