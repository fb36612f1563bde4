//! 本地文件预览地址
//!
//! `URL.createObjectURL` 创建的地址必须手动回收，否则文件内容会一直驻留内存。
//! `ObjectUrl` 在 drop 时自动调用 `URL.revokeObjectURL`：替换选中的文件或组件卸载
//! 时，旧的地址随旧值一起被释放。

use web_sys::{File, Url};

#[derive(Debug, PartialEq, Eq)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn from_file(file: &File) -> Option<Self> {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => Some(Self { url }),
            Err(e) => {
                log_warn!("[Upload] 无法创建预览地址: {:?}", e);
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}
