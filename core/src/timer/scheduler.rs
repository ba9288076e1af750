//! 时间读取与延迟调度
//!
//! 时间源是 tokio 运行时的时钟（[`tokio::time::Instant`]），
//! 在暂停时钟的测试运行时中自动变为虚拟时间。

use std::time::Duration;

use tokio::time::Instant;

use super::TimerHandle;

/// 读取当前单调时间
///
/// # Examples
///
/// ```no_run
/// use fair9_core::timer;
///
/// let start = timer::now();
/// // ... 做一些事情 ...
/// let elapsed = start.elapsed();
/// ```
pub fn now() -> Instant {
    Instant::now()
}

/// 调度延迟回调
///
/// 在 `delay` 之后的任务上下文中执行 `callback`，
/// 返回持有该回调的 [`TimerHandle`]。
/// 句柄被取消或丢弃后回调不会触发。
///
/// 必须在 tokio 运行时内调用。
pub fn schedule<F>(delay: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        callback();
    });

    TimerHandle::new(handle)
}

/// 单调秒表
///
/// 用于测量一段操作的总耗时
///
/// # Examples
///
/// ```no_run
/// use fair9_core::timer::Stopwatch;
///
/// let watch = Stopwatch::start();
/// // ... 做一些事情 ...
/// let elapsed = watch.elapsed();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// 启动秒表
    pub fn start() -> Self {
        Self { start: now() }
    }

    /// 读取从启动到现在经过的时间
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
