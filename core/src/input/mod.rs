//! 输入模块
//!
//! 提供按节奏的文本发射和注入前的文本润色功能
//!
//! # 子模块
//!
//! - [`injector`] - 文本注入器（逐字符、自适应节奏）
//! - [`polish`] - 转写文本润色（填充词剔除）
//!
//! # 使用示例
//!
//! ```no_run
//! use fair9_core::input::{clean_filler_words, TextInjector};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let text = clean_filler_words("um hello world");
//!
//! let mut injector = TextInjector::new();
//! injector.inject(&text).await;
//! assert_eq!(injector.buffer(), "hello world");
//! # }
//! ```

pub mod injector;
pub mod polish;

// Re-export commonly used types
pub use injector::{InjectorConfig, TextInjector, LEGACY_DELAY_MS, NORMAL_DELAY_MS};
pub use polish::clean_filler_words;
