//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有（包括选中的图片与其预览地址）
//! - 数据的重置
//! - 数据到 `ItemDraft` 的转换，交给共享的校验规则

use leptos::prelude::*;
use rentals_shared::validation::{Field, FieldErrors, ImageMeta, ItemDraft};
use web_sys::File;

use crate::web::ObjectUrl;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
/// `File` 不是 `Send`，所以图片放在 local signal 中。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub categories: RwSignal<Vec<u32>>,
    pub image: RwSignal<Option<File>, LocalStorage>,
    /// 预览地址；被替换或随 signal 一起销毁时自动回收
    pub preview: RwSignal<Option<ObjectUrl>>,
    pub errors: RwSignal<FieldErrors>,
    /// 文件输入框；重置时清空它的值，否则再次选择同一文件不会触发 change
    pub file_input: NodeRef<leptos::html::Input>,
}

impl FormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            categories: RwSignal::new(Vec::new()),
            image: RwSignal::new_local(None),
            preview: RwSignal::new(None),
            errors: RwSignal::new(FieldErrors::default()),
            file_input: NodeRef::new(),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.price.set(String::new());
        self.categories.set(Vec::new());
        self.set_image(None);
        self.errors.set(FieldErrors::default());
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }

    /// 替换选中的图片，旧的预览地址随之回收
    pub fn set_image(&self, file: Option<File>) {
        self.preview.set(file.as_ref().and_then(ObjectUrl::from_file));
        self.image.set(file);
    }

    pub fn toggle_category(&self, id: u32) {
        self.categories.update(|list| {
            if let Some(pos) = list.iter().position(|c| *c == id) {
                list.remove(pos);
            } else {
                list.push(id);
            }
        });
    }

    /// 某个字段当前的错误信息（响应式）
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.with(|e| e.get(field))
    }

    /// 将表单状态转换为待校验的草稿
    pub fn to_draft(&self) -> ItemDraft {
        let image = self.image.with_untracked(|file| {
            file.as_ref().map(|f| ImageMeta {
                size: f.size() as u64,
                content_type: f.type_(),
            })
        });
        ItemDraft {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            categories: self.categories.get_untracked(),
            image,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_every_field() {
        let state = FormState::new();
        state.name.set("Taladro".to_string());
        state.description.set("Con brocas".to_string());
        state.price.set("3,5".to_string());
        state.toggle_category(2);
        state.toggle_category(5);
        state.toggle_category(2);
        assert_eq!(state.categories.get_untracked(), vec![5]);

        // 输入框未挂载时同样可以重置
        state.reset();

        let draft = state.to_draft();
        assert!(draft.name.is_empty());
        assert!(draft.description.is_empty());
        assert!(draft.price.is_empty());
        assert!(draft.categories.is_empty());
        assert!(draft.image.is_none());
        assert!(state.preview.with_untracked(Option::is_none));
    }
}
