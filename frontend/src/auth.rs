//! 认证模块
//!
//! 会话只有一个 bearer token，由 `App` 显式创建 `AuthContext` 并注入 Context。
//! 写入 token 的只有登录和注销两个入口。

use crate::api::RentalsApi;
use crate::config::AppConfig;
use crate::web::BrowserTokenStore;
use leptos::prelude::*;
use rentals_shared::SignupRequest;
use rentals_shared::error::ApiResult;
use rentals_shared::session::Session;

/// 认证上下文
///
/// 只包含 arena 中的句柄，可以 `Copy` 进任意闭包。
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session<BrowserTokenStore>>,
    api_base: StoredValue<String>,
}

impl AuthContext {
    /// 创建认证上下文，并从 LocalStorage 恢复上次的会话
    pub fn new(config: &AppConfig) -> Self {
        let session = Session::restore(BrowserTokenStore);
        if session.is_authenticated() {
            log_info!("[Auth] 已恢复会话");
        }
        Self {
            session: RwSignal::new(session),
            api_base: StoredValue::new(config.api_base.clone()),
        }
    }

    /// 当前 token（响应式）
    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token().map(str::to_string))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn is_authenticated_untracked(&self) -> bool {
        self.session.with_untracked(|s| s.is_authenticated())
    }

    /// 使用当前 token 构造 API 客户端（不建立响应式依赖）
    pub fn api(&self) -> RentalsApi {
        let token = self.session.with_untracked(|s| s.token().map(str::to_string));
        self.api_base.with_value(|base| RentalsApi::new(base, token))
    }

    /// 写入新 token 并持久化
    pub fn sign_in(&self, token: String) {
        self.session.update(|s| s.login(token));
        log_info!("[Auth] 登录成功");
    }

    /// 注销：同时清除内存与持久化副本
    pub fn sign_out(&self) {
        self.session.update(|s| s.logout());
        log_info!("[Auth] 已注销");
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 用户名密码登录
pub async fn login(ctx: AuthContext, username: String, password: String) -> ApiResult<()> {
    let token = ctx.api().login(&username, &password).await?;
    ctx.sign_in(token);
    Ok(())
}

/// 注册后使用同一组凭据直接登录
pub async fn register(ctx: AuthContext, req: SignupRequest) -> ApiResult<()> {
    let api = ctx.api();
    api.signup(&req).await?;
    log_info!("[Auth] 注册成功: {}", req.username);
    login(ctx, req.username, req.password).await
}

pub fn logout(ctx: AuthContext) {
    ctx.sign_out();
}
