//! 热键控制器模块
//!
//! 将嘈杂的物理按键信号转换为"每次有意按住恰好一次激活"：
//! 拒绝误触的短按，也拒绝同一次物理按键产生的重复（幽灵）信号。
//!
//! 控制器本身不注册任何系统级钩子，只消费外部钩子送入的
//! 裸 key-down / key-up 信号，激活结果通过事件通道通知外部。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

use super::HotkeyConfig;
use crate::timer::{self, TimerHandle};

/// 热键事件通道容量
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// 热键事件
///
/// 用于通知外部（如录音管线）激活状态变化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyEvent {
    /// 一次有意按住被接受
    Activated,
    /// 去激活延迟到期，激活标志回落
    Deactivated,
}

/// 热键控制器
///
/// 防抖 + 按住时长状态机：
///
/// - key-down 只在防抖窗口外、非激活、且没有未决按压时被接受
/// - key-up 只在按住时长达到阈值时产生激活，并调度去激活回调
///
/// 防抖窗口从**最近一次成功激活**开始计时，被拒绝或过短的按压
/// 不会重新武装窗口。去激活回调由控制器持有的 [`TimerHandle`]
/// 管理，控制器被丢弃时回调一并取消。
///
/// # Examples
///
/// ```no_run
/// use fair9_core::hotkey::{HotkeyConfig, HotkeyController};
///
/// # #[tokio::main]
/// # async fn main() {
/// let (mut controller, _events) = HotkeyController::new(HotkeyConfig::default());
///
/// if controller.on_key_down() {
///     // ... 用户按住 ...
///     if let Some(held) = controller.on_key_up() {
///         println!("activated after {:?}", held);
///     }
/// }
/// # }
/// ```
pub struct HotkeyController {
    /// 时序配置
    config: HotkeyConfig,
    /// 激活标志（与去激活回调共享）
    is_active: Arc<AtomicBool>,
    /// 最近一次成功激活的时间戳
    last_activation: Option<Instant>,
    /// 当前未决按压的起始时间戳
    ///
    /// 只在已接受的 key-down 与其配对的 key-up 之间持有值
    press_start: Option<Instant>,
    /// 事件发送器
    event_tx: mpsc::Sender<HotkeyEvent>,
    /// 未决的去激活回调句柄
    deactivation_timer: Option<TimerHandle>,
}

impl HotkeyController {
    /// 创建新的热键控制器
    ///
    /// 返回控制器和接收 [`HotkeyEvent`] 的通道接收器
    pub fn new(config: HotkeyConfig) -> (Self, mpsc::Receiver<HotkeyEvent>) {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        tracing::debug!(
            debounce_ms = config.debounce_ms,
            hold_threshold_ms = config.hold_threshold_ms,
            deactivation_delay_ms = config.deactivation_delay_ms,
            "Created hotkey controller"
        );

        let controller = Self {
            config,
            is_active: Arc::new(AtomicBool::new(false)),
            last_activation: None,
            press_start: None,
            event_tx,
            deactivation_timer: None,
        };

        (controller, event_rx)
    }

    /// 处理 key-down 信号
    ///
    /// 按顺序检查：
    ///
    /// 1. 防抖窗口：距最近一次成功激活不足 `debounce` 时拒绝（反幽灵）
    /// 2. 激活标志：已处于激活状态时拒绝
    /// 3. 未决按压：已有未配对的 key-down 时拒绝（系统自动重复）
    ///
    /// 全部通过则记录按压起始时间并接受
    ///
    /// # Returns
    ///
    /// 按压被接受返回 `true`，被拒绝返回 `false`
    pub fn on_key_down(&mut self) -> bool {
        let now = timer::now();

        if let Some(last) = self.last_activation {
            let since = now.duration_since(last);
            if since < self.config.debounce() {
                tracing::debug!(
                    since_ms = since.as_millis() as u64,
                    debounce_ms = self.config.debounce_ms,
                    "Key down rejected: within debounce window"
                );
                return false;
            }
        }

        if self.is_active.load(Ordering::SeqCst) {
            tracing::debug!("Key down rejected: already active");
            return false;
        }

        if self.press_start.is_some() {
            // 未配对的重复 key-down（自动重复）不得重置按住计时
            tracing::debug!("Key down rejected: press already pending");
            return false;
        }

        self.press_start = Some(now);
        tracing::debug!("Key down accepted");
        true
    }

    /// 处理 key-up 信号
    ///
    /// 没有未决按压时返回 `None`。按住时长低于阈值时清除按压、
    /// 返回 `None` 且不做任何其他状态变更，过短的按压不会武装
    /// 防抖窗口。
    ///
    /// 达到阈值时：置位激活标志，记录激活时间戳，同步发出
    /// [`HotkeyEvent::Activated`]，并调度去激活回调（延迟
    /// `deactivation_delay` 后回落激活标志并发出
    /// [`HotkeyEvent::Deactivated`]）。
    ///
    /// # Returns
    ///
    /// 激活成功时返回实际按住时长
    pub fn on_key_up(&mut self) -> Option<Duration> {
        let press_start = self.press_start.take()?;

        let now = timer::now();
        let held = now.duration_since(press_start);

        if held < self.config.hold_threshold() {
            tracing::debug!(
                held_ms = held.as_millis() as u64,
                hold_threshold_ms = self.config.hold_threshold_ms,
                "Press too short, ignoring"
            );
            return None;
        }

        self.is_active.store(true, Ordering::SeqCst);
        self.last_activation = Some(now);

        if self.event_tx.try_send(HotkeyEvent::Activated).is_err() {
            tracing::warn!("Hotkey event channel full, dropping Activated event");
        }

        tracing::info!(
            held_ms = held.as_millis() as u64,
            "Hotkey activated"
        );

        // 替换掉可能仍未触发的上一次去激活回调
        if let Some(mut previous) = self.deactivation_timer.take() {
            previous.cancel();
        }

        let is_active = Arc::clone(&self.is_active);
        let event_tx = self.event_tx.clone();

        self.deactivation_timer = Some(timer::schedule(
            self.config.deactivation_delay(),
            move || {
                is_active.store(false, Ordering::SeqCst);
                if event_tx.try_send(HotkeyEvent::Deactivated).is_err() {
                    tracing::warn!("Hotkey event channel full, dropping Deactivated event");
                }
                tracing::debug!("Hotkey deactivated");
            },
        ));

        Some(held)
    }

    /// 检查是否处于激活状态
    pub fn is_active(&self) -> bool {
        self.is_active.load(Ordering::SeqCst)
    }

    /// 检查是否有未决按压
    pub fn is_press_pending(&self) -> bool {
        self.press_start.is_some()
    }

    /// 获取当前配置
    pub fn config(&self) -> &HotkeyConfig {
        &self.config
    }
}

// 去激活回调由 deactivation_timer 持有，
// 控制器被丢弃时 TimerHandle 的 Drop 会将其取消。
