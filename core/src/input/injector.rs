//! 文本注入器模块
//!
//! 提供逐字符、按节奏的文本发射功能
//!
//! # 功能
//!
//! - 逐字符发射：按逻辑字符迭代，完整保留多字节文本
//! - 自适应节奏：普通应用用短延迟，老旧应用用长延迟
//! - 中途切换：注入过程中切换 legacy 模式只影响后续字符
//!
//! 注入目标是进程内的输出缓冲区；真正把字符送进目标应用的
//! 系统级按键合成器是外部协作方，消费缓冲区内容。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::timer::Stopwatch;

/// 普通模式逐字符延迟（毫秒）
pub const NORMAL_DELAY_MS: u64 = 10;

/// Legacy 模式逐字符延迟（毫秒）
///
/// 面向输入处理跟不上快速合成按键的老旧应用
pub const LEGACY_DELAY_MS: u64 = 30;

/// 注入器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// 普通模式延迟（毫秒）
    pub normal_delay_ms: u64,
    /// Legacy 模式延迟（毫秒）
    pub legacy_delay_ms: u64,
    /// 初始是否处于 legacy 模式
    pub legacy_mode: bool,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            normal_delay_ms: NORMAL_DELAY_MS,
            legacy_delay_ms: LEGACY_DELAY_MS,
            legacy_mode: false,
        }
    }
}

/// 文本注入器
///
/// 把文本逐字符追加到输出缓冲区，每个字符之后按当前模式
/// 暂停一个节奏间隔。缓冲区只增不减，按序读取恒等于自上次
/// 清空以来所有已完成注入的拼接。
///
/// [`inject`](TextInjector::inject) 需要 `&mut self`，
/// 同一实例上的注入调用由借用规则天然串行化；legacy 模式标志
/// 是共享的原子值，可以在一次注入挂起期间从其他任务切换。
///
/// # Examples
///
/// ```no_run
/// use fair9_core::input::TextInjector;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut injector = TextInjector::new();
/// let elapsed = injector.inject("Hello").await;
/// assert_eq!(injector.buffer(), "Hello");
/// println!("took {:?}", elapsed);
/// # }
/// ```
pub struct TextInjector {
    /// 输出缓冲区（只增）
    buffer: String,
    /// 普通模式延迟
    normal_delay: Duration,
    /// Legacy 模式延迟
    legacy_delay: Duration,
    /// Legacy 模式标志（可在注入挂起期间切换）
    legacy_mode: Arc<AtomicBool>,
}

impl TextInjector {
    /// 创建使用默认延迟的注入器
    pub fn new() -> Self {
        Self::with_config(&InjectorConfig::default())
    }

    /// 创建带自定义配置的注入器
    pub fn with_config(config: &InjectorConfig) -> Self {
        tracing::debug!(
            normal_delay_ms = config.normal_delay_ms,
            legacy_delay_ms = config.legacy_delay_ms,
            legacy_mode = config.legacy_mode,
            "Created text injector"
        );

        Self {
            buffer: String::new(),
            normal_delay: Duration::from_millis(config.normal_delay_ms),
            legacy_delay: Duration::from_millis(config.legacy_delay_ms),
            legacy_mode: Arc::new(AtomicBool::new(config.legacy_mode)),
        }
    }

    /// 注入文本
    ///
    /// 按逻辑字符迭代输入：每个字符先追加到缓冲区，再按当前
    /// 生效的延迟暂停。延迟在每个字符处重新取值，注入挂起期间
    /// 切换 legacy 模式只改变后续字符的节奏。
    ///
    /// 空输入不触碰缓冲区，直接返回接近零的耗时。
    ///
    /// # Returns
    ///
    /// 整次调用的总耗时（单调秒表测量）
    pub async fn inject(&mut self, text: &str) -> Duration {
        let watch = Stopwatch::start();

        if text.is_empty() {
            tracing::debug!("Empty text, skipping injection");
            return watch.elapsed();
        }

        let mut count = 0usize;
        for ch in text.chars() {
            self.buffer.push(ch);
            count += 1;
            tokio::time::sleep(self.active_delay()).await;
        }

        let elapsed = watch.elapsed();
        tracing::info!(
            chars = count,
            elapsed_ms = elapsed.as_millis() as u64,
            legacy_mode = self.legacy_mode(),
            "Text injection finished"
        );

        elapsed
    }

    /// 当前生效的逐字符延迟
    fn active_delay(&self) -> Duration {
        if self.legacy_mode.load(Ordering::SeqCst) {
            self.legacy_delay
        } else {
            self.normal_delay
        }
    }

    /// 读取输出缓冲区
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// 清空输出缓冲区
    ///
    /// 只由调用方显式触发，注入本身从不清空
    pub fn clear_buffer(&mut self) {
        tracing::debug!(discarded = self.buffer.chars().count(), "Clearing buffer");
        self.buffer.clear();
    }

    /// 检查是否处于 legacy 模式
    pub fn legacy_mode(&self) -> bool {
        self.legacy_mode.load(Ordering::SeqCst)
    }

    /// 切换 legacy 模式
    pub fn set_legacy_mode(&self, legacy: bool) {
        tracing::debug!(legacy_mode = legacy, "Changing injection pacing mode");
        self.legacy_mode.store(legacy, Ordering::SeqCst);
    }

    /// 获取 legacy 模式标志的共享句柄
    ///
    /// 供其他任务在一次注入挂起期间切换节奏
    pub fn legacy_mode_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.legacy_mode)
    }

    /// 普通模式延迟
    pub fn normal_delay(&self) -> Duration {
        self.normal_delay
    }

    /// Legacy 模式延迟
    pub fn legacy_delay(&self) -> Duration {
        self.legacy_delay
    }
}

impl Default for TextInjector {
    fn default() -> Self {
        Self::new()
    }
}
