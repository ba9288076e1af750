//! 命令模式管线测试
//!
//! 走一遍完整管线，并演示守护转换和取消
//!
//! 运行: cargo run --example test_command

use fair9_core::command::{CancelReason, CommandModeConfig, CommandModeController};
use fair9_core::utils::logging::init_logging;

#[tokio::main]
async fn main() {
    init_logging();

    println!("=== 命令模式管线测试 ===\n");

    let controller = CommandModeController::new(CommandModeConfig::default());
    let mut rx = controller.subscribe();

    // 1. 完整管线
    println!("1. 完整管线");
    println!("{}", "-".repeat(40));

    controller.activate();
    controller.start_recording();
    controller.start_processing("summarize this paragraph");
    controller.start_pasting();
    controller.complete();

    while let Ok(change) = rx.try_recv() {
        println!("  {} - {}", change.state.name(), change.message);
    }
    println!();

    // 2. 乱序调用被忽略
    println!("2. 乱序调用");
    println!("{}", "-".repeat(40));

    controller.start_pasting();
    println!("  Idle 下 start_pasting 后状态: {}", controller.current().name());
    println!();

    // 3. 取消
    println!("3. 管线取消");
    println!("{}", "-".repeat(40));

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    controller.activate();
    controller.start_recording();
    controller.cancel(CancelReason::InferenceUnavailable);

    while let Ok(change) = rx.try_recv() {
        println!("  {} - {}", change.state.name(), change.message);
    }

    println!("\n=== 测试完成 ===");
}
