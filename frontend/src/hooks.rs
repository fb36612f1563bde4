//! 数据获取 hooks
//!
//! `use_resource` 把 `rentals_shared::resource::Resource` 状态机接到 Leptos 的响应式系统上：
//!
//! 1. key 变化（或手动 `refetch`）时 `begin()` 发放新的凭据并在后台发起请求
//! 2. 响应返回后通过 `try_update` 结算；凭据过期的响应被丢弃
//! 3. 组件卸载时 `invalidate()`，在途请求的结果不会再写入任何状态
//!
//! key 为 None 时资源回到 `Idle`（例如未登录时的租借列表）。

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use rentals_shared::error::ApiResult;
use rentals_shared::resource::{Resource, ResourceState, Settlement};
use rentals_shared::{Category, Rental};

use crate::api::ItemPage;
use crate::auth::use_auth;

/// 资源句柄
pub struct UseResource<T: Send + Sync + 'static> {
    resource: RwSignal<Resource<T>>,
    trigger: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for UseResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for UseResource<T> {}

impl<T: Clone + Send + Sync + 'static> UseResource<T> {
    /// 当前状态快照
    pub fn state(&self) -> ResourceState<T> {
        self.resource.with(|r| r.state().clone())
    }

    /// 借用当前状态，不复制数据
    pub fn with_state<R>(&self, f: impl FnOnce(&ResourceState<T>) -> R) -> R {
        self.resource.with(|r| f(r.state()))
    }

    /// 最近一次成功的数据（重新加载期间仍然可用）
    pub fn data(&self) -> Option<T> {
        self.resource.with(|r| r.data().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.resource.with(|r| r.is_loading())
    }

    /// 强制重新请求，即使 key 没有变化
    pub fn refetch(&self) {
        self.trigger.update(|n| *n = n.wrapping_add(1));
    }
}

/// 通用资源 hook
///
/// `scope` 仅用于日志。
pub fn use_resource<K, T, Fut>(
    scope: &'static str,
    key: impl Fn() -> Option<K> + Send + Sync + 'static,
    fetcher: impl Fn(K) -> Fut + 'static,
) -> UseResource<T>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let resource = RwSignal::new(Resource::<T>::new());
    let trigger = RwSignal::new(0u64);
    // 语义相同的 key 不会触发重新请求
    let key = Memo::new(move |_| key());

    Effect::new(move |_| {
        trigger.track();
        let Some(key) = key.get() else {
            resource.update(Resource::reset);
            return;
        };
        let Some(ticket) = resource.try_update(Resource::begin) else {
            return;
        };

        let request = fetcher(key);
        spawn_local(async move {
            let result = request.await;
            if let Err(e) = &result {
                log_error!("[{}] 请求失败: {}", scope, e);
            }
            match resource.try_update(|r| r.settle(ticket, result)) {
                Some(Settlement::Stale) => log_info!("[{}] 丢弃过期响应", scope),
                None => log_info!("[{}] 视图已卸载，忽略响应", scope),
                Some(_) => {}
            }
        });
    });

    on_cleanup(move || {
        resource.try_update(Resource::invalidate);
    });

    UseResource { resource, trigger }
}

/// 物品列表，query 为规范化的查询串
pub fn use_items(query: Signal<String>) -> UseResource<ItemPage> {
    let auth = use_auth();
    use_resource(
        "Items",
        move || Some(query.get()),
        move |query: String| async move { auth.api().list_items(&query).await },
    )
}

pub fn use_categories() -> UseResource<Vec<Category>> {
    let auth = use_auth();
    use_resource(
        "Categories",
        || Some(()),
        move |_| async move { auth.api().list_categories().await },
    )
}

/// 当前用户的租借；未登录时保持 `Idle`，不发出请求
pub fn use_rentals() -> UseResource<Vec<Rental>> {
    let auth = use_auth();
    use_resource(
        "Rentals",
        move || auth.token(),
        move |_token: String| async move { auth.api().my_rentals().await },
    )
}
