//! 租赁市场前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义与守卫规则（领域模型）
//! - `auth`: 认证状态管理
//! - `hooks`: 数据获取（带代际编号的资源状态机）
//! - `components`: UI 组件层

#[macro_use]
mod log;

mod api;
mod auth;
mod config;
mod hooks;
mod components {
    pub mod add_item_dialog;
    pub mod filters_sidebar;
    pub mod home;
    pub mod icons;
    pub mod item_card;
    pub mod item_detail_modal;
    pub mod item_list;
    pub mod layout;
    pub mod lazy_image;
    pub mod login;
    pub mod modal;
    pub mod not_found;
    pub mod quick_view_modal;
    pub mod register;
    pub mod rentals_page;
    pub mod skeleton_card;
    pub mod toast;
}
pub(crate) mod web;

use crate::auth::{AuthContext, use_auth};
use crate::components::home::HomePage;
use crate::components::item_list::ItemList;
use crate::components::layout::{Footer, Header};
use crate::components::login::LoginPage;
use crate::components::not_found::NotFoundPage;
use crate::components::register::RegisterPage;
use crate::components::rentals_page::RentalsPage;
use crate::components::toast::{ToastContext, ToastHost};
use crate::config::AppConfig;
use crate::web::route::AppRoute;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

/// 路由守卫
///
/// 根据 `AppRoute` 的守卫规则和当前认证状态决定渲染内容或重定向，
/// 注销后停留在受保护页面时也会被自动送回登录页。
#[component]
fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let redirect = move || route.redirect_for(auth.is_authenticated());

    Effect::new(move |_| {
        if let Some(target) = redirect() {
            log_info!("[Router] {} -> {}", route, target);
            navigate(target.to_path(), Default::default());
        }
    });

    move || redirect().is_none().then(|| children())
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取配置
    let config = AppConfig::from_build_env();
    log_info!("[App] API base: {:?}", config.api_base);

    // 2. 创建认证上下文（从 LocalStorage 恢复 token）
    provide_context(AuthContext::new(&config));
    provide_context(ToastContext::new(config.toast_millis));
    provide_context(config);

    view! {
        <Router>
            <div class="flex min-h-screen flex-col bg-base-200/40 font-sans">
                <Header />
                <main class="flex-1">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route
                            path=path!("/login")
                            view=|| view! { <Guarded route=AppRoute::Login><LoginPage /></Guarded> }
                        />
                        <Route
                            path=path!("/register")
                            view=|| view! { <Guarded route=AppRoute::Register><RegisterPage /></Guarded> }
                        />
                        <Route path=path!("/dashboard") view=ItemList />
                        <Route
                            path=path!("/rentals")
                            view=|| view! { <Guarded route=AppRoute::Rentals><RentalsPage /></Guarded> }
                        />
                    </Routes>
                </main>
                <Footer />
            </div>
            <ToastHost />
        </Router>
    }
}
