//! 前端配置
//!
//! 默认值为常量，可在构建时通过环境变量覆盖：
//!
//! ```text
//! RENTALS_API_BASE=https://api.example.com trunk build --release
//! ```
//!
//! 未设置时使用相对路径，由 Trunk 的开发代理（或同源部署）转发到后端。

use leptos::prelude::*;

/// 后端基地址，空字符串表示与前端同源
const DEFAULT_API_BASE: &str = "";
/// toast 自动消失时间
const DEFAULT_TOAST_MILLIS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub toast_millis: u32,
}

impl AppConfig {
    /// 读取构建时注入的配置
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("RENTALS_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            toast_millis: DEFAULT_TOAST_MILLIS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_is_normalized() {
        assert_eq!(AppConfig::with_api_base(" http://localhost:8000/ ").api_base, "http://localhost:8000");
        assert_eq!(AppConfig::with_api_base("").api_base, "");
    }
}
