//! 命令模式模块
//!
//! 提供"AI 命令"功能的五阶段管线状态机
//!
//! # 模块结构
//!
//! - `state` - 管线阶段、取消原因和状态变更载荷
//! - `config` - 命令模式配置
//! - `controller` - 管线控制器（防抖入口 + 守护转换）
//!
//! # 管线
//!
//! ```text
//! Idle → Copying → Recording → Processing → Pasting → Idle
//!   ↑________________________________________________|
//!                    (complete / cancel)
//! ```

mod config;
mod controller;
mod state;

pub use config::{CommandModeConfig, DEFAULT_COMMAND_DEBOUNCE_MS};
pub use controller::CommandModeController;
pub use state::{CancelReason, CommandState, CommandStateChange};
