//! 命令模式配置模块

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 默认命令模式防抖窗口（毫秒）
pub const DEFAULT_COMMAND_DEBOUNCE_MS: u64 = 1000;

/// 命令模式配置
///
/// # Examples
///
/// ```
/// use fair9_core::command::CommandModeConfig;
///
/// let config = CommandModeConfig::default();
/// assert_eq!(config.debounce_ms, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandModeConfig {
    /// 防抖窗口（毫秒）
    ///
    /// 从最近一次成功的 `activate` 开始计时
    pub debounce_ms: u64,
}

impl CommandModeConfig {
    /// 创建新的命令模式配置
    pub fn new(debounce_ms: u64) -> Self {
        Self { debounce_ms }
    }

    /// 防抖窗口时长
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for CommandModeConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_COMMAND_DEBOUNCE_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CommandModeConfig::default();
        assert_eq!(config.debounce_ms, DEFAULT_COMMAND_DEBOUNCE_MS);
        assert_eq!(config.debounce(), Duration::from_millis(1000));
    }

    #[test]
    fn test_config_new() {
        let config = CommandModeConfig::new(500);
        assert_eq!(config.debounce_ms, 500);
    }

    #[test]
    fn test_config_serialization() {
        let config = CommandModeConfig::new(750);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CommandModeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
