//! 跨平台日志宏
//!
//! wasm32 下写入浏览器控制台，其他平台（单元测试）写入 stdout / stderr。
//! 约定消息以 `[Scope]` 开头，例如 `log_info!("[Items] 加载完成: {}", n)`。

#[cfg(target_arch = "wasm32")]
macro_rules! log_info {
    ($($t:tt)*) => (::web_sys::console::log_1(&::wasm_bindgen::JsValue::from(format!($($t)*))))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_warn {
    ($($t:tt)*) => (::web_sys::console::warn_1(&::wasm_bindgen::JsValue::from(format!($($t)*))))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_warn {
    ($($t:tt)*) => (eprintln!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_error {
    ($($t:tt)*) => (::web_sys::console::error_1(&::wasm_bindgen::JsValue::from(format!($($t)*))))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}
