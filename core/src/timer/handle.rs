//! 定时器句柄模块
//!
//! 每个已调度的回调都由一个 [`TimerHandle`] 持有，
//! 句柄被取消或丢弃后回调保证不会再触发。

use tokio::task::JoinHandle;

/// 可取消的定时器句柄
///
/// 包装调度任务的 [`JoinHandle`]，持有者负责其生命周期：
/// 调用 [`cancel`](TimerHandle::cancel) 或直接丢弃句柄都会中止
/// 尚未触发的回调。控制器在析构时丢弃句柄，
/// 因此不存在针对已销毁控制器的悬挂回调。
#[derive(Debug)]
pub struct TimerHandle {
    inner: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// 从调度任务创建句柄
    pub(crate) fn new(handle: JoinHandle<()>) -> Self {
        Self {
            inner: Some(handle),
        }
    }

    /// 取消定时器
    ///
    /// 如果回调尚未触发则中止它；已触发或已取消时为空操作。
    pub fn cancel(&mut self) {
        if let Some(handle) = self.inner.take() {
            if !handle.is_finished() {
                tracing::debug!("Cancelling pending timer callback");
            }
            handle.abort();
        }
    }

    /// 检查回调是否已经执行完毕
    pub fn is_finished(&self) -> bool {
        match &self.inner {
            Some(handle) => handle.is_finished(),
            None => true,
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
