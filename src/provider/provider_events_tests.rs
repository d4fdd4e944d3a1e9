//! Tests for provider_events

use ratatui::crossterm::event::{
    Event, KeyCode, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::confirm::ConfirmOptions;
use crate::provider::ToastProvider;
use crate::test_utils::test_helpers::{
    buffer_lines, click, key, key_with_mods, render_provider,
};
use crate::toast::ToastRequest;

fn press(code: KeyCode) -> Event {
    Event::Key(key(code))
}

fn scroll_at(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

#[test]
fn test_click_close_button_removes_toast() {
    let provider = ToastProvider::default();
    let id = provider.show_toast(ToastRequest::success("Saved"));
    render_provider(&provider, 80, 24);

    let close = provider.regions().toasts[0].close.unwrap();
    assert!(provider.handle_event(&click(close.x, close.y)));

    assert_eq!(provider.toast_count(), 0);
    assert!(!provider.remove_toast(id));
}

#[test]
fn test_click_close_removes_only_that_toast() {
    let provider = ToastProvider::default();
    let first = provider.show_toast(ToastRequest::info("First"));
    let second = provider.show_toast(ToastRequest::info("Second"));
    render_provider(&provider, 80, 24);

    let close = provider.regions().toasts[1].close.unwrap();
    provider.handle_event(&click(close.x, close.y));

    let remaining: Vec<_> = provider.toasts().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![first]);
    assert!(provider.regions().toasts.iter().all(|r| r.id != second));
}

#[test]
fn test_click_toast_body_is_consumed_but_keeps_toast() {
    let provider = ToastProvider::default();
    provider.show_toast(ToastRequest::info("Body"));
    render_provider(&provider, 80, 24);

    let area = provider.regions().toasts[0].area;
    assert!(provider.handle_event(&click(area.x + 1, area.y + 1)));
    assert_eq!(provider.toast_count(), 1);
}

#[test]
fn test_click_outside_overlays_is_not_consumed() {
    let provider = ToastProvider::default();
    provider.show_toast(ToastRequest::info("Corner"));
    render_provider(&provider, 80, 24);

    assert!(!provider.handle_event(&click(5, 5)));
    assert!(!provider.handle_event(&scroll_at(5, 5)));
}

#[test]
fn test_keys_pass_through_when_idle() {
    let provider = ToastProvider::default();
    provider.show_toast(ToastRequest::info("Not modal"));

    assert!(!provider.handle_event(&press(KeyCode::Char('y'))));
    assert!(!provider.handle_event(&press(KeyCode::Esc)));
}

#[test]
fn test_click_confirm_button_resolves_true() {
    let provider = ToastProvider::default();
    let mut answer = provider.show_confirm(ConfirmOptions::new("Delete?"));
    render_provider(&provider, 80, 24);

    let confirm = provider.regions().confirm.unwrap().confirm;
    assert!(provider.handle_event(&click(confirm.x, confirm.y)));

    assert_eq!(answer.try_answer(), Some(true));
    assert!(!provider.is_confirm_pending());
}

#[test]
fn test_click_cancel_button_resolves_false() {
    let provider = ToastProvider::default();
    let mut answer = provider.show_confirm(ConfirmOptions::new("Delete?"));
    render_provider(&provider, 80, 24);

    let cancel = provider.regions().confirm.unwrap().cancel;
    assert!(provider.handle_event(&click(cancel.x + 1, cancel.y)));

    assert_eq!(answer.try_answer(), Some(false));
}

#[test]
fn test_click_backdrop_cancels() {
    let provider = ToastProvider::default();
    let mut answer = provider.show_confirm(ConfirmOptions::new("Delete?"));
    render_provider(&provider, 80, 24);

    assert!(provider.handle_event(&click(0, 0)));
    assert_eq!(answer.try_answer(), Some(false));
}

#[test]
fn test_click_panel_body_keeps_dialog_open() {
    let provider = ToastProvider::default();
    let mut answer = provider.show_confirm(ConfirmOptions::new("Delete?"));
    render_provider(&provider, 80, 24);

    let panel = provider.regions().confirm.unwrap().panel;
    assert!(provider.handle_event(&click(panel.x + 2, panel.y + 1)));

    assert_eq!(answer.try_answer(), None);
    assert!(provider.is_confirm_pending());
}

#[test]
fn test_toast_under_backdrop_is_not_clickable() {
    let provider = ToastProvider::default();
    provider.show_toast(ToastRequest::info("Behind"));
    let mut answer = provider.show_confirm(ConfirmOptions::new("Delete?"));
    render_provider(&provider, 80, 24);

    let close = provider.regions().toasts[0].close.unwrap();
    assert!(provider.handle_event(&click(close.x, close.y)));

    assert_eq!(provider.toast_count(), 1);
    assert_eq!(answer.try_answer(), Some(false));
}

#[test]
fn test_scroll_is_swallowed_while_dialog_open() {
    let provider = ToastProvider::default();
    let mut answer = provider.show_confirm(ConfirmOptions::new("Delete?"));
    render_provider(&provider, 80, 24);

    assert!(provider.handle_event(&scroll_at(3, 3)));
    assert_eq!(answer.try_answer(), None);
}

#[test]
fn test_enter_and_y_confirm() {
    for code in [KeyCode::Enter, KeyCode::Char('y')] {
        let provider = ToastProvider::default();
        let mut answer = provider.show_confirm(ConfirmOptions::new("Continue?"));

        assert!(provider.handle_event(&press(code)));
        assert_eq!(answer.try_answer(), Some(true), "{:?}", code);
    }
}

#[test]
fn test_esc_and_n_cancel() {
    for code in [KeyCode::Esc, KeyCode::Char('n')] {
        let provider = ToastProvider::default();
        let mut answer = provider.show_confirm(ConfirmOptions::new("Continue?"));

        assert!(provider.handle_event(&press(code)));
        assert_eq!(answer.try_answer(), Some(false), "{:?}", code);
    }
}

#[test]
fn test_other_keys_are_swallowed_while_pending() {
    let provider = ToastProvider::default();
    let mut answer = provider.show_confirm(ConfirmOptions::new("Continue?"));

    assert!(provider.handle_event(&press(KeyCode::Char('x'))));
    assert!(provider.handle_event(&Event::Key(key_with_mods(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    ))));

    assert_eq!(answer.try_answer(), None);
    assert!(provider.is_confirm_pending());
}

#[test]
fn test_key_answers_dialogs_in_order() {
    let provider = ToastProvider::default();
    let mut first = provider.show_confirm(ConfirmOptions::new("First?"));
    let mut second = provider.show_confirm(ConfirmOptions::new("Second?"));

    provider.handle_event(&press(KeyCode::Char('n')));
    provider.handle_event(&press(KeyCode::Char('y')));

    assert_eq!(first.try_answer(), Some(false));
    assert_eq!(second.try_answer(), Some(true));
}

#[test]
fn test_delete_confirmation_round_trip() {
    let provider = ToastProvider::default();
    let notifier = provider.notifier();
    let mut answer = notifier
        .show_confirm(ConfirmOptions::new("Delete?"))
        .unwrap();

    let terminal = render_provider(&provider, 80, 24);
    assert!(buffer_lines(&terminal).join("\n").contains("Delete?"));

    let confirm = provider.regions().confirm.unwrap().confirm;
    provider.handle_event(&click(confirm.x + 2, confirm.y));
    assert_eq!(answer.try_answer(), Some(true));

    let terminal = render_provider(&provider, 80, 24);
    assert!(!buffer_lines(&terminal).join("\n").contains("Delete?"));
}

#[test]
fn test_stale_click_after_answer_does_nothing() {
    let provider = ToastProvider::default();
    let _answer = provider.show_confirm(ConfirmOptions::new("Delete?"));
    render_provider(&provider, 80, 24);

    let confirm = provider.regions().confirm.unwrap().confirm;
    provider.answer_confirm(false);

    assert!(!provider.handle_event(&click(confirm.x, confirm.y)));
}

#[test]
fn test_promoted_dialog_blocks_clicks_before_next_render() {
    let provider = ToastProvider::default();
    provider.show_toast(ToastRequest::info("Pinned").persistent());
    let _first = provider.show_confirm(ConfirmOptions::new("First?"));
    let mut second = provider.show_confirm(ConfirmOptions::new("Second?"));
    render_provider(&provider, 80, 24);

    let close = provider.regions().toasts[0].close.unwrap();
    provider.answer_confirm(true);
    assert!(provider.is_confirm_pending());

    assert!(provider.handle_event(&click(close.x, close.y)));
    assert_eq!(provider.toast_count(), 1);

    assert!(provider.handle_event(&click(0, 0)));
    assert_eq!(second.try_answer(), None);
    assert!(provider.is_confirm_pending());
}

#[test]
fn test_new_dialog_blocks_clicks_before_first_render() {
    let provider = ToastProvider::default();
    provider.show_toast(ToastRequest::info("Pinned").persistent());
    render_provider(&provider, 80, 24);
    let close = provider.regions().toasts[0].close.unwrap();

    let mut answer = provider.show_confirm(ConfirmOptions::new("Delete?"));

    assert!(provider.handle_event(&click(close.x, close.y)));
    assert!(provider.handle_event(&scroll_at(5, 5)));
    assert_eq!(provider.toast_count(), 1);
    assert_eq!(answer.try_answer(), None);
}
