//! 物品发布流程
//!
//! 两步网络调用：可选的图片上传 → 创建物品。任一步失败则整个流程中止，
//! 表单回到编辑状态并保留已输入的内容。

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::validation::ValidItem;
use crate::{Item, NewItem};

// =========================================================
// 网关抽象
// =========================================================

/// 发布流程依赖的后端操作
///
/// 浏览器中由 REST 客户端实现，测试中由内存 mock 实现。
#[async_trait(?Send)]
pub trait CatalogGateway {
    /// 待上传的图片句柄（浏览器中为 `web_sys::File`）
    type Image;

    /// 上传图片，返回可公开访问的地址
    async fn upload_image(&self, image: &Self::Image) -> ApiResult<String>;

    /// 创建物品
    async fn create_item(&self, payload: &NewItem) -> ApiResult<Item>;
}

/// 先上传（如有图片）再创建
pub async fn publish_item<G: CatalogGateway>(
    gateway: &G,
    item: ValidItem,
    image: Option<&G::Image>,
) -> ApiResult<Item> {
    let image_url = match image {
        Some(image) => Some(gateway.upload_image(image).await?),
        None => None,
    };
    let payload = item.into_payload(image_url);
    gateway.create_item(&payload).await
}

// =========================================================
// 弹窗状态机
// =========================================================

/// closed → editing → submitting → (success → closed) | (failure → editing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreationPhase {
    #[default]
    Closed,
    Editing,
    Submitting,
}

impl CreationPhase {
    pub fn is_open(&self) -> bool {
        !matches!(self, CreationPhase::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, CreationPhase::Submitting)
    }

    pub fn open(self) -> Self {
        match self {
            CreationPhase::Closed => CreationPhase::Editing,
            other => other,
        }
    }

    /// 提交中不允许关闭
    pub fn close(self) -> Self {
        match self {
            CreationPhase::Submitting => CreationPhase::Submitting,
            _ => CreationPhase::Closed,
        }
    }

    /// 开始提交；只有编辑状态可以提交，返回 None 表示忽略本次提交
    pub fn submit(self) -> Option<Self> {
        match self {
            CreationPhase::Editing => Some(CreationPhase::Submitting),
            _ => None,
        }
    }

    pub fn finish(self, succeeded: bool) -> Self {
        match (self, succeeded) {
            (CreationPhase::Submitting, true) => CreationPhase::Closed,
            (CreationPhase::Submitting, false) => CreationPhase::Editing,
            (other, _) => other,
        }
    }
}

#[cfg(test)]
mod tests;
