//! 浏览器 API 适配层
//!
//! - `storage`: 基于 gloo-storage 的会话 token 持久化
//! - `object_url`: 本地图片预览的 object URL（RAII 回收）
//! - `route`: 路由表（纯逻辑，不依赖 DOM）

mod object_url;
pub mod route;
mod storage;

pub use object_url::ObjectUrl;
pub use storage::BrowserTokenStore;
