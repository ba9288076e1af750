//! 配置模块
//!
//! 聚合各控制器的配置段，提供 JSON 序列化和校验。
//! 配置文件的读写由外层应用负责，这里只处理字符串形态的
//! 配置内容。
//!
//! # 使用示例
//!
//! ```
//! use fair9_core::config::CoreConfig;
//!
//! let config = CoreConfig::from_json(r#"{"hotkey": {"debounce_ms": 300}}"#).unwrap();
//! assert_eq!(config.hotkey.debounce_ms, 300);
//!
//! let json = config.to_json().unwrap();
//! assert!(json.contains("300"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::CommandModeConfig;
use crate::hotkey::HotkeyConfig;
use crate::input::InjectorConfig;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON 序列化/反序列化错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 校验错误
    #[error("Invalid config: {0}")]
    Validation(String),
}

/// 配置结果类型
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 核心配置
///
/// 包含全部时序相关设置，每个段都可缺省
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoreConfig {
    /// 热键配置
    pub hotkey: HotkeyConfig,
    /// 注入器配置
    pub injector: InjectorConfig,
    /// 命令模式配置
    pub command: CommandModeConfig,
}

impl CoreConfig {
    /// 从 JSON 字符串解析配置
    ///
    /// 解析后立即校验
    ///
    /// # Errors
    ///
    /// JSON 不合法返回 [`ConfigError::Json`]，
    /// 字段取值不合法返回 [`ConfigError::Validation`]
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!("Core config parsed");
        Ok(config)
    }

    /// 序列化为 JSON 字符串
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 校验配置取值
    ///
    /// # Errors
    ///
    /// - 按住阈值为 0
    /// - legacy 延迟小于普通延迟
    pub fn validate(&self) -> ConfigResult<()> {
        if self.hotkey.hold_threshold_ms == 0 {
            return Err(ConfigError::Validation(
                "hotkey.hold_threshold_ms must be greater than 0".to_string(),
            ));
        }

        if self.injector.legacy_delay_ms < self.injector.normal_delay_ms {
            return Err(ConfigError::Validation(format!(
                "injector.legacy_delay_ms ({}) must not be less than normal_delay_ms ({})",
                self.injector.legacy_delay_ms, self.injector.normal_delay_ms
            )));
        }

        Ok(())
    }
}
