//! 命令模式状态定义

use serde::Serialize;
use thiserror::Error;

/// 命令模式管线阶段
///
/// 前向转换严格按 `Idle → Copying → Recording → Processing →
/// Pasting → Idle` 顺序进行；任何阶段都可以被强制回到 `Idle`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommandState {
    /// 空闲，等待用户触发
    Idle,

    /// 正在复制选中文本
    Copying,

    /// 正在录制语音命令
    Recording,

    /// 正在等待模型推理
    Processing,

    /// 正在粘贴结果
    Pasting,
}

impl CommandState {
    /// 检查是否为空闲状态
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// 检查是否在复制中
    pub fn is_copying(&self) -> bool {
        matches!(self, Self::Copying)
    }

    /// 检查是否在录制中
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }

    /// 检查是否在推理中
    pub fn is_processing(&self) -> bool {
        matches!(self, Self::Processing)
    }

    /// 检查是否在粘贴中
    pub fn is_pasting(&self) -> bool {
        matches!(self, Self::Pasting)
    }

    /// 获取状态名称（用于日志和调试）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Copying => "Copying",
            Self::Recording => "Recording",
            Self::Processing => "Processing",
            Self::Pasting => "Pasting",
        }
    }

    /// 管线内的下一个阶段
    ///
    /// `Pasting` 之后回到 `Idle`
    pub fn next(&self) -> CommandState {
        match self {
            Self::Idle => Self::Copying,
            Self::Copying => Self::Recording,
            Self::Recording => Self::Processing,
            Self::Processing => Self::Pasting,
            Self::Pasting => Self::Idle,
        }
    }
}

impl Default for CommandState {
    fn default() -> Self {
        Self::Idle
    }
}

/// 取消原因
///
/// 管线中止的封闭原因集合，显示文本即发给 UI 的消息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum CancelReason {
    /// 没有可用的文本选区
    #[error("No text selected")]
    NoSelectionAvailable,

    /// 推理服务不可用
    #[error("AI service unavailable")]
    InferenceUnavailable,

    /// 管线被中止（连接丢失等）
    #[error("Command pipeline aborted")]
    PipelineAborted,

    /// 用户主动取消
    #[error("Cancelled")]
    UserCancelled,
}

/// 状态变更通知载荷
///
/// 携带新状态和一条面向 UI 显示的消息
#[derive(Debug, Clone, Serialize)]
pub struct CommandStateChange {
    /// 新状态
    pub state: CommandState,
    /// 显示消息
    pub message: String,
}
