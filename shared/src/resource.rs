//! 远程资源状态机
//!
//! 每次请求都带有代际编号（generation）。只有编号仍是最新的响应才会被采纳，
//! 较早发出但较晚返回的响应会被丢弃，视图卸载时调用 `invalidate` 使所有
//! 在途请求失效。

/// 请求凭据，由 `Resource::begin` 发放
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    /// 尚未发起请求（或已被禁用）
    Idle,
    /// 首次加载中，没有可展示的数据
    Loading,
    /// 重新加载中，继续展示旧数据
    Reloading(T),
    Ready(T),
    /// 首次加载失败，没有可展示的数据
    Failed,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        ResourceState::Idle
    }
}

impl<T> ResourceState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            ResourceState::Reloading(data) | ResourceState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResourceState::Loading | ResourceState::Reloading(_))
    }

    fn take_data(self) -> Option<T> {
        match self {
            ResourceState::Reloading(data) | ResourceState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// `settle` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// 请求失败，保留旧数据（如果有）
    Failed,
    /// 响应已过期，被丢弃
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    generation: u64,
    state: ResourceState<T>,
}

impl<T> Resource<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: ResourceState::Idle,
        }
    }

    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// 发起新请求：进入加载状态并返回本次请求的凭据
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        let previous = std::mem::take(&mut self.state);
        self.state = match previous.take_data() {
            Some(data) => ResourceState::Reloading(data),
            None => ResourceState::Loading,
        };
        FetchTicket(self.generation)
    }

    /// 处理响应；凭据过期的响应不会修改状态
    pub fn settle<E>(&mut self, ticket: FetchTicket, result: Result<T, E>) -> Settlement {
        if ticket.0 != self.generation {
            return Settlement::Stale;
        }
        let previous = std::mem::take(&mut self.state);
        match result {
            Ok(data) => {
                self.state = ResourceState::Ready(data);
                Settlement::Applied
            }
            Err(_) => {
                self.state = match previous.take_data() {
                    Some(data) => ResourceState::Ready(data),
                    None => ResourceState::Failed,
                };
                Settlement::Failed
            }
        }
    }

    /// 使所有在途请求失效，状态保持不变
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// 回到空闲状态并丢弃在途请求
    pub fn reset(&mut self) {
        self.invalidate();
        self.state = ResourceState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_load_then_ready() {
        let mut res: Resource<Vec<u32>> = Resource::new();
        assert_eq!(res.state(), &ResourceState::Idle);

        let ticket = res.begin();
        assert_eq!(res.state(), &ResourceState::Loading);
        assert!(res.is_loading());

        assert_eq!(res.settle::<()>(ticket, Ok(vec![1, 2])), Settlement::Applied);
        assert_eq!(res.data(), Some(&vec![1, 2]));
        assert!(!res.is_loading());
    }

    #[test]
    fn test_ready_empty_differs_from_loading() {
        let mut res: Resource<Vec<u32>> = Resource::new();
        let ticket = res.begin();
        assert_eq!(res.data(), None);
        res.settle::<()>(ticket, Ok(vec![]));
        assert_eq!(res.state(), &ResourceState::Ready(vec![]));
    }

    #[test]
    fn test_reload_keeps_previous_data_visible() {
        let mut res: Resource<Vec<u32>> = Resource::new();
        let first = res.begin();
        res.settle::<()>(first, Ok(vec![1]));

        let _second = res.begin();
        assert_eq!(res.state(), &ResourceState::Reloading(vec![1]));
        assert_eq!(res.data(), Some(&vec![1]));
    }

    #[test]
    fn test_late_response_from_older_request_is_discarded() {
        let mut res: Resource<&str> = Resource::new();
        let older = res.begin();
        let newer = res.begin();

        assert_eq!(res.settle::<()>(newer, Ok("newer")), Settlement::Applied);
        assert_eq!(res.settle::<()>(older, Ok("older")), Settlement::Stale);
        assert_eq!(res.data(), Some(&"newer"));
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut res: Resource<Vec<u32>> = Resource::new();
        let first = res.begin();
        res.settle::<()>(first, Ok(vec![5]));

        let second = res.begin();
        assert_eq!(res.settle(second, Err("boom")), Settlement::Failed);
        assert_eq!(res.state(), &ResourceState::Ready(vec![5]));
    }

    #[test]
    fn test_failure_without_data_is_failed() {
        let mut res: Resource<Vec<u32>> = Resource::new();
        let ticket = res.begin();
        res.settle(ticket, Err("boom"));
        assert_eq!(res.state(), &ResourceState::Failed);
        assert!(!res.is_loading());
    }

    #[test]
    fn test_invalidate_drops_in_flight_responses() {
        let mut res: Resource<u32> = Resource::new();
        let ticket = res.begin();
        res.invalidate();
        assert_eq!(res.settle::<()>(ticket, Ok(1)), Settlement::Stale);
        assert_eq!(res.state(), &ResourceState::Loading);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut res: Resource<u32> = Resource::new();
        let ticket = res.begin();
        res.settle::<()>(ticket, Ok(3));
        res.reset();
        assert_eq!(res.state(), &ResourceState::Idle);
        assert_eq!(res.data(), None);
    }
}
