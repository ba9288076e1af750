//! 热键配置模块
//!
//! 定义热键时序配置结构和默认值

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 默认防抖窗口（毫秒）
///
/// 自上次成功激活起，小于此间隔的新按键视为幽灵信号
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// 默认按住阈值（毫秒）
///
/// 按住时长达到此值才算有意激活，低于则视为误触
pub const DEFAULT_HOLD_THRESHOLD_MS: u64 = 100;

/// 默认去激活延迟（毫秒）
///
/// 激活后经过此延迟自动回落到非激活状态
pub const DEFAULT_DEACTIVATION_DELAY_MS: u64 = 50;

/// 热键时序配置
///
/// 存储热键控制器使用的全部时序参数
///
/// # Examples
///
/// ```
/// use fair9_core::hotkey::HotkeyConfig;
///
/// // 使用默认配置
/// let config = HotkeyConfig::default();
/// assert_eq!(config.debounce_ms, 200);
///
/// // 自定义配置
/// let config = HotkeyConfig::new(300, 150);
/// assert_eq!(config.debounce_ms, 300);
/// assert_eq!(config.hold_threshold_ms, 150);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// 防抖窗口（毫秒）
    ///
    /// 从最近一次成功激活开始计时；被拒绝的按键不会重新武装窗口
    pub debounce_ms: u64,

    /// 按住阈值（毫秒）
    pub hold_threshold_ms: u64,

    /// 去激活延迟（毫秒）
    ///
    /// 独立于防抖窗口和按住阈值，允许激活标志先于防抖窗口回落
    pub deactivation_delay_ms: u64,
}

impl HotkeyConfig {
    /// 创建新的热键配置
    ///
    /// 去激活延迟使用默认值
    ///
    /// # Arguments
    ///
    /// * `debounce_ms` - 防抖窗口（毫秒）
    /// * `hold_threshold_ms` - 按住阈值（毫秒）
    pub fn new(debounce_ms: u64, hold_threshold_ms: u64) -> Self {
        Self {
            debounce_ms,
            hold_threshold_ms,
            deactivation_delay_ms: DEFAULT_DEACTIVATION_DELAY_MS,
        }
    }

    /// 设置去激活延迟
    ///
    /// # Examples
    ///
    /// ```
    /// use fair9_core::hotkey::HotkeyConfig;
    ///
    /// let config = HotkeyConfig::default().with_deactivation_delay(80);
    /// assert_eq!(config.deactivation_delay_ms, 80);
    /// ```
    pub fn with_deactivation_delay(mut self, delay_ms: u64) -> Self {
        self.deactivation_delay_ms = delay_ms;
        self
    }

    /// 设置防抖窗口
    pub fn with_debounce(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// 设置按住阈值
    pub fn with_hold_threshold(mut self, hold_threshold_ms: u64) -> Self {
        self.hold_threshold_ms = hold_threshold_ms;
        self
    }

    /// 防抖窗口时长
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// 按住阈值时长
    pub fn hold_threshold(&self) -> Duration {
        Duration::from_millis(self.hold_threshold_ms)
    }

    /// 去激活延迟时长
    pub fn deactivation_delay(&self) -> Duration {
        Duration::from_millis(self.deactivation_delay_ms)
    }
}

impl Default for HotkeyConfig {
    /// 创建默认热键配置
    ///
    /// - 防抖窗口: 200ms
    /// - 按住阈值: 100ms
    /// - 去激活延迟: 50ms
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            hold_threshold_ms: DEFAULT_HOLD_THRESHOLD_MS,
            deactivation_delay_ms: DEFAULT_DEACTIVATION_DELAY_MS,
        }
    }
}
