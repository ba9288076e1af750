//! 热键控制器测试
//!
//! 模拟按键信号，观察防抖和按住判定行为
//!
//! 运行: cargo run --example test_hotkey

use std::time::Duration;

use fair9_core::hotkey::{HotkeyConfig, HotkeyController, HotkeyEvent};
use fair9_core::utils::logging::init_logging;

#[tokio::main]
async fn main() {
    init_logging();

    println!("=== 热键控制器测试 ===\n");

    let config = HotkeyConfig::default();
    println!("配置: 防抖 {}ms / 阈值 {}ms / 去激活 {}ms\n",
        config.debounce_ms, config.hold_threshold_ms, config.deactivation_delay_ms);

    let (mut controller, mut events) = HotkeyController::new(config);

    // 1. 短按（误触）
    println!("1. 短按 20ms");
    println!("{}", "-".repeat(40));
    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(20)).await;
    match controller.on_key_up() {
        Some(held) => println!("  ?? 意外激活: {:?}", held),
        None => println!("  OK 低于阈值，已忽略"),
    }
    println!();

    // 2. 正常按住
    println!("2. 按住 500ms");
    println!("{}", "-".repeat(40));
    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(500)).await;
    match controller.on_key_up() {
        Some(held) => println!("  OK 激活，按住 {:?}", held),
        None => println!("  ?? 应当激活"),
    }
    println!();

    // 3. 防抖窗口内的幽灵按键
    println!("3. 激活后 50ms 的新按键");
    println!("{}", "-".repeat(40));
    tokio::time::sleep(Duration::from_millis(50)).await;
    if controller.on_key_down() {
        println!("  ?? 意外接受");
    } else {
        println!("  OK 防抖窗口内，已拒绝");
    }
    println!();

    // 4. 窗口外的按键
    println!("4. 再等 300ms 后的新按键");
    println!("{}", "-".repeat(40));
    tokio::time::sleep(Duration::from_millis(300)).await;
    if controller.on_key_down() {
        println!("  OK 已接受");
        controller.on_key_up();
    } else {
        println!("  ?? 意外拒绝");
    }
    println!();

    // 5. 事件回放
    println!("5. 收到的事件");
    println!("{}", "-".repeat(40));
    tokio::time::sleep(Duration::from_millis(100)).await;
    while let Ok(event) = events.try_recv() {
        match event {
            HotkeyEvent::Activated => println!("  -> Activated"),
            HotkeyEvent::Deactivated => println!("  -> Deactivated"),
        }
    }

    println!("\n=== 测试完成 ===");
}
