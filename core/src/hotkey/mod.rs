//! 热键模块
//!
//! 提供热键按压的防抖与按住时长判定功能
//!
//! # 功能
//!
//! - 防抖：自最近一次成功激活起的窗口内拒绝幽灵按键
//! - 按住判定：按住时长达到阈值才产生激活，短按视为误触
//! - 去激活：激活后经配置的延迟自动回落，回调可取消
//!
//! # 使用方法
//!
//! ```no_run
//! use fair9_core::hotkey::{HotkeyConfig, HotkeyController, HotkeyEvent};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (mut controller, mut events) = HotkeyController::new(HotkeyConfig::default());
//!
//! // 外部按键钩子送入信号
//! if controller.on_key_down() {
//!     // ...按住...
//!     controller.on_key_up();
//! }
//!
//! // 在另一个任务中消费激活事件
//! tokio::spawn(async move {
//!     while let Some(event) = events.recv().await {
//!         match event {
//!             HotkeyEvent::Activated => println!("start recording"),
//!             HotkeyEvent::Deactivated => println!("armed again"),
//!         }
//!     }
//! });
//! # }
//! ```

mod config;
mod controller;

pub use config::{
    HotkeyConfig, DEFAULT_DEACTIVATION_DELAY_MS, DEFAULT_DEBOUNCE_MS, DEFAULT_HOLD_THRESHOLD_MS,
};
pub use controller::{HotkeyController, HotkeyEvent};
