//! 热键控制器集成测试
//!
//! 所有时序相关测试都运行在暂停的虚拟时钟上
//! （`start_paused = true`），sleep 不真正等待

use std::time::Duration;

use fair9_core::hotkey::{HotkeyConfig, HotkeyController, HotkeyEvent};

/// 验收场景使用的配置：防抖 200ms，按住阈值 100ms
fn scenario_config() -> HotkeyConfig {
    HotkeyConfig::new(200, 100)
}

// ============================================================================
// 按住时长判定
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_long_hold_activates() {
    let (mut controller, mut events) = HotkeyController::new(scenario_config());

    // 按住 3000ms 后松开
    assert!(controller.on_key_down());
    tokio::time::sleep(Duration::from_millis(3000)).await;
    let held = controller.on_key_up();

    assert_eq!(held, Some(Duration::from_millis(3000)));
    assert!(controller.is_active());
    assert_eq!(events.try_recv(), Ok(HotkeyEvent::Activated));
}

#[tokio::test(start_paused = true)]
async fn test_short_tap_is_rejected() {
    let (mut controller, mut events) = HotkeyController::new(scenario_config());

    // 按住 20ms 视为误触
    assert!(controller.on_key_down());
    tokio::time::sleep(Duration::from_millis(20)).await;
    let held = controller.on_key_up();

    assert_eq!(held, None);
    assert!(!controller.is_active());
    assert!(events.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_hold_exactly_at_threshold_activates() {
    let (mut controller, mut events) = HotkeyController::new(scenario_config());

    assert!(controller.on_key_down());
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(controller.on_key_up(), Some(Duration::from_millis(100)));
    assert_eq!(events.try_recv(), Ok(HotkeyEvent::Activated));
}

#[tokio::test(start_paused = true)]
async fn test_activation_fires_exactly_once_per_hold() {
    let (mut controller, mut events) = HotkeyController::new(scenario_config());

    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(150)).await;
    controller.on_key_up();

    assert_eq!(events.try_recv(), Ok(HotkeyEvent::Activated));
    // 同一次按住不会产生第二个激活事件
    assert!(events.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_key_up_without_pending_press() {
    let (mut controller, mut events) = HotkeyController::new(scenario_config());

    assert_eq!(controller.on_key_up(), None);
    assert!(events.try_recv().is_err());
}

// ============================================================================
// 防抖（反幽灵）
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_key_down_within_debounce_window_rejected() {
    let (mut controller, _events) = HotkeyController::new(scenario_config());

    // 按住 150ms，激活成功
    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(controller.on_key_up().is_some());

    // 50ms 后的新按键落在 200ms 防抖窗口内
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!controller.on_key_down());
}

#[tokio::test(start_paused = true)]
async fn test_key_down_after_debounce_window_accepted() {
    let (mut controller, _events) = HotkeyController::new(scenario_config());

    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(controller.on_key_up().is_some());

    // 300ms 后窗口已过
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(controller.on_key_down());
}

#[tokio::test(start_paused = true)]
async fn test_key_down_exactly_at_debounce_boundary_accepted() {
    let (mut controller, _events) = HotkeyController::new(scenario_config());

    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(controller.on_key_up().is_some());

    // 恰好经过整个防抖窗口
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(controller.on_key_down());
}

#[tokio::test(start_paused = true)]
async fn test_short_tap_does_not_arm_debounce() {
    let (mut controller, _events) = HotkeyController::new(scenario_config());

    // 过短的按压被拒绝
    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(controller.on_key_up(), None);

    // 防抖从成功激活计时，拒绝不会武装窗口：立即重按被接受
    assert!(controller.on_key_down());
}

#[tokio::test(start_paused = true)]
async fn test_repeated_key_down_does_not_reset_hold() {
    let (mut controller, _events) = HotkeyController::new(scenario_config());

    assert!(controller.on_key_down());
    tokio::time::sleep(Duration::from_millis(80)).await;

    // 系统自动重复产生的 key-down 被拒绝，不影响按住计时
    assert!(!controller.on_key_down());
    tokio::time::sleep(Duration::from_millis(70)).await;

    assert_eq!(controller.on_key_up(), Some(Duration::from_millis(150)));
}

// ============================================================================
// 去激活延迟
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_deactivation_after_configured_delay() {
    let (mut controller, mut events) = HotkeyController::new(scenario_config());

    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(150)).await;
    controller.on_key_up();
    assert!(controller.is_active());

    tokio::time::sleep(Duration::from_millis(60)).await;

    assert!(!controller.is_active());
    assert_eq!(events.try_recv(), Ok(HotkeyEvent::Activated));
    assert_eq!(events.try_recv(), Ok(HotkeyEvent::Deactivated));
}

#[tokio::test(start_paused = true)]
async fn test_inactive_but_still_debounced_window() {
    let (mut controller, _events) = HotkeyController::new(scenario_config());

    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(150)).await;
    controller.on_key_up();

    // 60ms 后激活标志已回落，但防抖窗口（200ms）仍然打开
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(!controller.is_active());
    assert!(!controller.on_key_down());
}

#[tokio::test(start_paused = true)]
async fn test_long_deactivation_delay_blocks_key_down() {
    // 去激活延迟长于防抖窗口时，激活标志拦住新按键
    let config = HotkeyConfig::new(30, 20).with_deactivation_delay(500);
    let (mut controller, _events) = HotkeyController::new(config);

    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(50)).await;
    controller.on_key_up();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(controller.is_active());
    assert!(!controller.on_key_down());
}

#[tokio::test(start_paused = true)]
async fn test_custom_deactivation_delay() {
    let config = scenario_config().with_deactivation_delay(120);
    let (mut controller, _events) = HotkeyController::new(config);

    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(150)).await;
    controller.on_key_up();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(controller.is_active());

    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(!controller.is_active());
}

// ============================================================================
// 析构
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_deactivation() {
    let (mut controller, mut events) = HotkeyController::new(scenario_config());

    controller.on_key_down();
    tokio::time::sleep(Duration::from_millis(150)).await;
    controller.on_key_up();
    assert_eq!(events.try_recv(), Ok(HotkeyEvent::Activated));

    // 去激活回调仍未触发时丢弃控制器
    drop(controller);
    tokio::time::sleep(Duration::from_millis(200)).await;

    // 回调已被取消，不会出现 Deactivated 事件
    assert!(events.try_recv().is_err());
}

// ============================================================================
// 完整交互序列
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_two_full_activations_in_sequence() {
    let (mut controller, mut events) = HotkeyController::new(scenario_config());

    for _ in 0..2 {
        assert!(controller.on_key_down());
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(controller.on_key_up().is_some());

        // 等到激活标志回落且防抖窗口关闭
        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }
    assert_eq!(
        received,
        vec![
            HotkeyEvent::Activated,
            HotkeyEvent::Deactivated,
            HotkeyEvent::Activated,
            HotkeyEvent::Deactivated,
        ]
    );
}
