//! 命令模式控制器模块
//!
//! 守护"选中文本 → 录制命令 → 模型推理 → 粘贴结果"四步管线，
//! 防止重入和乱序触发。每个管线步骤本身（剪贴板、录音、推理、
//! 粘贴）由外部协作方完成，完成后驱动控制器进入下一阶段。

use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::config::CommandModeConfig;
use super::state::{CancelReason, CommandState, CommandStateChange};
use crate::timer;

/// 状态变更通道容量
const LISTENER_CHANNEL_CAPACITY: usize = 32;

/// 命令模式控制器
///
/// 管线状态机：
///
/// - [`activate`](CommandModeController::activate) 是防抖的入口，
///   只在 `Idle` 且防抖窗口外成功
/// - 三个中间步骤是守护转换：当前状态必须恰好是期望的前驱，
///   否则静默忽略、状态不变
/// - [`complete`](CommandModeController::complete) 和
///   [`cancel`](CommandModeController::cancel) 无条件回到 `Idle`
///
/// 状态读取无锁（[`ArcSwap`]），变更通知通过
/// [`subscribe`](CommandModeController::subscribe) 的通道同步送达。
///
/// # Examples
///
/// ```
/// use fair9_core::command::{CommandModeConfig, CommandModeController};
///
/// # #[tokio::main]
/// # async fn main() {
/// let controller = CommandModeController::new(CommandModeConfig::default());
///
/// assert!(controller.activate());
/// controller.start_recording();
/// controller.start_processing("open the browser");
/// controller.start_pasting();
/// controller.complete();
/// assert!(controller.current().is_idle());
/// # }
/// ```
pub struct CommandModeController {
    /// 配置
    config: CommandModeConfig,
    /// 当前状态（无锁读取）
    state: ArcSwap<CommandState>,
    /// 最近一次成功激活的时间戳
    last_activation: Mutex<Option<Instant>>,
    /// 状态变更监听器列表
    listeners: Mutex<Vec<mpsc::Sender<CommandStateChange>>>,
}

impl CommandModeController {
    /// 创建新的命令模式控制器
    pub fn new(config: CommandModeConfig) -> Self {
        tracing::debug!(
            debounce_ms = config.debounce_ms,
            "Created command mode controller"
        );

        Self {
            config,
            state: ArcSwap::new(Arc::new(CommandState::Idle)),
            last_activation: Mutex::new(None),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// 获取当前状态
    ///
    /// 此方法是无锁的，可以在任何线程安全地调用
    pub fn current(&self) -> CommandState {
        **self.state.load()
    }

    /// 添加状态变更监听器
    ///
    /// 返回的接收器将同步收到之后的所有状态变更通知
    pub fn subscribe(&self) -> mpsc::Receiver<CommandStateChange> {
        let (tx, rx) = mpsc::channel(LISTENER_CHANNEL_CAPACITY);
        let mut listeners = self.listeners.lock().unwrap();
        listeners.push(tx);
        rx
    }

    /// 移除所有已关闭的监听器
    pub fn cleanup_listeners(&self) {
        let mut listeners = self.listeners.lock().unwrap();
        listeners.retain(|tx| !tx.is_closed());
    }

    /// 获取当前监听器数量
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    /// 激活命令模式
    ///
    /// 防抖的入口：当前不是 `Idle`，或距最近一次成功激活不足
    /// 防抖窗口时拒绝。成功时记录激活时间戳并转换 `Idle → Copying`。
    ///
    /// 防抖从**成功的**激活开始计时，被拒绝的尝试不会重新武装窗口。
    ///
    /// # Returns
    ///
    /// 激活被接受返回 `true`
    pub fn activate(&self) -> bool {
        let now = timer::now();
        let current = self.current();

        if !current.is_idle() {
            tracing::debug!(
                current_state = current.name(),
                "Activation rejected: pipeline busy"
            );
            return false;
        }

        {
            let mut last = self.last_activation.lock().unwrap();
            if let Some(prev) = *last {
                let since = now.duration_since(prev);
                if since < self.config.debounce() {
                    tracing::debug!(
                        since_ms = since.as_millis() as u64,
                        debounce_ms = self.config.debounce_ms,
                        "Activation rejected: within debounce window"
                    );
                    return false;
                }
            }
            *last = Some(now);
        }

        self.set_state(CommandState::Copying, "Copying selection...".to_string());
        true
    }

    /// 复制完成，开始录制语音命令
    ///
    /// 守护转换：仅在 `Copying` 状态下生效，否则静默忽略
    pub fn start_recording(&self) {
        self.guarded_transition(
            CommandState::Copying,
            CommandState::Recording,
            "Listening for command...".to_string(),
        );
    }

    /// 录制完成，开始模型推理
    ///
    /// 守护转换：仅在 `Recording` 状态下生效，否则静默忽略
    ///
    /// # Arguments
    ///
    /// * `voice_command` - 识别出的语音命令文本
    pub fn start_processing(&self, voice_command: &str) {
        self.guarded_transition(
            CommandState::Recording,
            CommandState::Processing,
            format!("Processing command: {}", voice_command),
        );
    }

    /// 推理完成，开始粘贴结果
    ///
    /// 守护转换：仅在 `Processing` 状态下生效，否则静默忽略
    pub fn start_pasting(&self) {
        self.guarded_transition(
            CommandState::Processing,
            CommandState::Pasting,
            "Pasting result...".to_string(),
        );
    }

    /// 完成管线
    ///
    /// 无条件回到 `Idle` 并发出完成消息，不检查当前状态
    pub fn complete(&self) {
        tracing::info!(
            from_state = self.current().name(),
            "Command pipeline complete"
        );
        self.set_state(CommandState::Idle, "Command complete".to_string());
    }

    /// 取消管线
    ///
    /// 无条件从任何状态回到 `Idle`，取消原因的显示文本
    /// 通过状态变更通知转发给 UI
    pub fn cancel(&self, reason: CancelReason) {
        tracing::info!(
            from_state = self.current().name(),
            reason = %reason,
            "Command pipeline cancelled"
        );
        self.set_state(CommandState::Idle, reason.to_string());
    }

    /// 执行守护转换
    ///
    /// 当前状态必须恰好等于 `expected`，否则不做任何状态变更
    fn guarded_transition(&self, expected: CommandState, next: CommandState, message: String) {
        let current = self.current();
        if current != expected {
            tracing::debug!(
                current_state = current.name(),
                expected_state = expected.name(),
                target_state = next.name(),
                "Guarded transition skipped: unexpected predecessor"
            );
            return;
        }

        self.set_state(next, message);
    }

    /// 更新状态并通知所有监听器
    fn set_state(&self, new_state: CommandState, message: String) {
        self.state.store(Arc::new(new_state));

        tracing::info!(
            state = new_state.name(),
            message = %message,
            "Command mode state changed"
        );

        let change = CommandStateChange {
            state: new_state,
            message,
        };

        let listeners = self.listeners.lock().unwrap();
        for listener in listeners.iter() {
            // 使用 try_send 保证通知与转换同步完成，队列满则丢弃
            let _ = listener.try_send(change.clone());
        }
    }
}
