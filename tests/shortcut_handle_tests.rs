//! Integration tests for ShortcutHandle event emission.
//!
//! These tests verify that handles report parse failures and key presses
//! through their dispatcher exactly as hosts expect.

mod common;

use common::TestDispatcher;
use serde_json::{Value, json};
use shortcut_bridge::{
    Accelerator, AcceleratorMatcher, Dispatcher, KeyCode, Modifiers, Platform, ShortcutError, ShortcutEvent,
    ShortcutHandle, ShortcutId, ShortcutOptions, parse_shortcut,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use winit::keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn test_unparsable_key_emits_one_failed_event() {
    let dispatcher = TestDispatcher::new();
    let handle = dispatcher.handle(1, "ctrl+bogus");

    let events = dispatcher.drain();
    assert_eq!(events.len(), 1, "Expected exactly one event after construction");
    assert_eq!(events[0].source, ShortcutId::new(1));
    assert_eq!(events[0].name, "failed");
    assert_eq!(
        events[0].args,
        vec![Value::from("Can not parse shortcut: ctrl+bogus.")]
    );

    // The handle stays usable with the invalid accelerator.
    assert!(!handle.is_valid());
    assert_eq!(*handle.accelerator(), Accelerator::new(KeyCode::Unknown, Modifiers::CTRL));
}

#[test]
fn test_failed_precedes_any_active() {
    let dispatcher = TestDispatcher::new();
    let handle = dispatcher.handle(2, "a+b");
    handle.on_active();

    let names: Vec<String> = dispatcher.drain().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["failed", "active"]);
}

#[test]
fn test_missing_key_option_fails() {
    let dispatcher = TestDispatcher::new();
    let options = ShortcutOptions::from_value(&json!({ "other": true }));
    let _handle = ShortcutHandle::new(ShortcutId::new(3), dispatcher.weak(), &options);

    let events = dispatcher.drain();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].args, vec![Value::from("Can not parse shortcut: .")]);
}

#[test]
fn test_valid_key_emits_nothing_until_pressed() {
    let dispatcher = TestDispatcher::new();
    let handle = dispatcher.handle(4, "Ctrl+Shift+A");
    assert!(dispatcher.queue().is_empty());

    let pressed = parse_shortcut("ctrl+shift+a", Platform::Linux);
    assert!(handle.on_key_pressed(&pressed).unwrap());

    let events = dispatcher.drain();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "active");
    assert!(events[0].args.is_empty());
}

#[test]
fn test_platform_changes_accelerator() {
    let dispatcher = TestDispatcher::new();
    let mac = ShortcutHandle::with_platform(
        ShortcutId::new(5),
        dispatcher.weak(),
        &ShortcutOptions::new("ctrl+,"),
        Platform::MacOs,
    );
    assert_eq!(
        *mac.accelerator(),
        Accelerator::new(KeyCode::Comma, Modifiers::COMMAND)
    );
}

// ---------------------------------------------------------------------------
// Key presses
// ---------------------------------------------------------------------------

#[test]
fn test_mismatched_press_reports_error_without_event() {
    let dispatcher = TestDispatcher::new();
    let handle = dispatcher.handle(6, "alt+home");

    let wrong = parse_shortcut("alt+end", Platform::Linux);
    match handle.on_key_pressed(&wrong) {
        Err(ShortcutError::AcceleratorMismatch {
            id,
            expected,
            received,
        }) => {
            assert_eq!(id, ShortcutId::new(6));
            assert_eq!(expected.key, KeyCode::Home);
            assert_eq!(received.key, KeyCode::End);
        }
        other => panic!("Expected AcceleratorMismatch, got {other:?}"),
    }
    assert!(dispatcher.queue().is_empty());
}

#[test]
fn test_invalid_handle_never_activates() {
    let dispatcher = TestDispatcher::new();
    let handle = dispatcher.handle(8, "ctrl+bogus");
    dispatcher.drain();

    // Ctrl+F12 converts to the same (Unknown, Ctrl) accelerator the handle holds.
    let pressed = AcceleratorMatcher::from_parts(
        PhysicalKey::Code(WinitKeyCode::F12),
        ModifiersState::CONTROL,
    )
    .accelerator();
    assert_eq!(pressed, *handle.accelerator());
    assert!(!handle.on_key_pressed(&pressed).unwrap());

    let empty = dispatcher.handle(9, "");
    dispatcher.drain();
    assert!(!empty.on_key_pressed(&Accelerator::invalid()).unwrap());

    assert!(dispatcher.queue().is_empty(), "Invalid handles must not emit active");
}

#[test]
fn test_on_failed_carries_message() {
    let dispatcher = TestDispatcher::new();
    let handle = dispatcher.handle(7, "tab");
    assert!(handle.on_failed("registration refused"));

    let events = dispatcher.drain();
    assert_eq!(events[0].name, "failed");
    assert_eq!(events[0].args, vec![Value::from("registration refused")]);
}

// ---------------------------------------------------------------------------
// Dispatcher liveness
// ---------------------------------------------------------------------------

#[test]
fn test_dropped_dispatcher_skips_events() {
    let dispatcher = TestDispatcher::new();
    let handle = dispatcher.handle(8, "ctrl+q");
    drop(dispatcher);

    let pressed = parse_shortcut("ctrl+q", Platform::Linux);
    assert!(!handle.on_key_pressed(&pressed).unwrap());
    assert!(!handle.on_active());
}

#[test]
fn test_closed_dispatcher_refuses_events() {
    let dispatcher = TestDispatcher::new();
    let handle = dispatcher.handle(9, "ctrl+q");
    dispatcher.queue().close();

    assert!(!handle.on_active());
    assert!(dispatcher.drain().is_empty());
}

/// Dispatcher counting deliveries, standing in for a host event bus.
struct CountingDispatcher {
    active: AtomicUsize,
    failed: AtomicUsize,
}

impl Dispatcher for CountingDispatcher {
    fn try_send(&self, _source: ShortcutId, event: &ShortcutEvent) -> bool {
        match event {
            ShortcutEvent::Active => self.active.fetch_add(1, Ordering::SeqCst),
            ShortcutEvent::Failed { .. } => self.failed.fetch_add(1, Ordering::SeqCst),
        };
        true
    }
}

#[test]
fn test_custom_dispatcher() {
    let counting = Arc::new(CountingDispatcher {
        active: AtomicUsize::new(0),
        failed: AtomicUsize::new(0),
    });
    let dispatcher: Arc<dyn Dispatcher> = counting.clone();

    let good = ShortcutHandle::with_platform(
        ShortcutId::new(10),
        Arc::downgrade(&dispatcher),
        &ShortcutOptions::new("mediastop"),
        Platform::Windows,
    );
    let _bad = ShortcutHandle::with_platform(
        ShortcutId::new(11),
        Arc::downgrade(&dispatcher),
        &ShortcutOptions::new(""),
        Platform::Windows,
    );
    good.on_key_pressed(&parse_shortcut("MediaStop", Platform::Windows))
        .unwrap();

    assert_eq!(counting.active.load(Ordering::SeqCst), 1);
    assert_eq!(counting.failed.load(Ordering::SeqCst), 1);
}
