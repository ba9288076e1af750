//! 定时器模块
//!
//! 提供统一的时间源和延迟回调调度功能
//!
//! # 模块结构
//!
//! - `handle` - 可取消的定时器句柄
//! - `scheduler` - 时间读取、延迟调度和秒表
//!
//! 所有控制器都通过本模块读取时间和调度回调，不直接采样系统时钟。
//! 时间源来自 tokio 运行时，测试中可以使用虚拟时钟
//! （`#[tokio::test(start_paused = true)]`）获得确定性的时序。

mod handle;
mod scheduler;

pub use handle::TimerHandle;
pub use scheduler::{now, schedule, Stopwatch};
