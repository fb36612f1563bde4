//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 页面的挂载由 leptos_router 负责，这里只描述每条路由的属性与守卫规则。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    /// 落地页
    Home,
    Login,
    Register,
    /// 物品目录（筛选、发布）
    Catalog,
    /// 我的租借 (需要认证)
    Rentals,
}

impl AppRoute {
    /// 头部导航中出现的路由
    pub const NAVIGATION: [AppRoute; 2] = [AppRoute::Catalog, AppRoute::Rentals];

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Catalog => "/dashboard",
            Self::Rentals => "/rentals",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::Login => "Login",
            Self::Register => "Registro",
            Self::Catalog => "Dashboard",
            Self::Rentals => "Mis alquileres",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Rentals)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Catalog
    }

    /// 守卫：给定认证状态，返回应当跳转到的路由（无需跳转时为 None）
    pub fn redirect_for(&self, is_authenticated: bool) -> Option<Self> {
        if self.requires_auth() && !is_authenticated {
            Some(Self::auth_failure_redirect())
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            Some(Self::auth_success_redirect())
        } else {
            None
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_targets_catalog_and_rentals() {
        let paths: Vec<_> = AppRoute::NAVIGATION.iter().map(AppRoute::to_path).collect();
        assert_eq!(paths, ["/dashboard", "/rentals"]);
        assert_eq!(AppRoute::Rentals.to_string(), "/rentals");
    }

    #[test]
    fn test_guards() {
        assert_eq!(AppRoute::Rentals.redirect_for(false), Some(AppRoute::Login));
        assert_eq!(AppRoute::Rentals.redirect_for(true), None);
        assert_eq!(AppRoute::Login.redirect_for(true), Some(AppRoute::Catalog));
        assert_eq!(AppRoute::Register.redirect_for(true), Some(AppRoute::Catalog));
        assert_eq!(AppRoute::Catalog.redirect_for(false), None);
        assert_eq!(AppRoute::Home.redirect_for(true), None);
    }
}
