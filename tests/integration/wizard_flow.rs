//! Step navigation, skip, and submit through the running app

use crossterm::event::KeyCode;
use enroll::config::Config;
use enroll::ui::App;
use enroll::wizard::{SKIP_MESSAGE, SUBMIT_MESSAGE};

use super::common::keys::{press, press_ctrl};
use super::common::terminal::{render_app, render_app_sized, screen_contains};

fn app() -> App {
    App::new(Config::default())
}

fn toast_messages(app: &App) -> Vec<String> {
    app.toasts().visible().map(|n| n.message.clone()).collect()
}

#[test]
fn test_first_screen() {
    let app = app();
    let screen = render_app(&app);
    assert!(screen.contains("Complete Your Registration"));
    assert!(screen.contains("Identity & Address"));
    assert!(screen.contains("Complete Address"));
    assert!(screen.contains("0%"));
    assert!(screen.contains("Continue →"));
    assert!(screen.contains("Skip Registration"));
    assert!(!screen.contains("Submit Registration"));
}

#[test]
fn test_first_screen_fits_small_terminal() {
    let app = app();
    let screen = render_app_sized(&app, 80, 24);
    assert!(screen.contains("Upload CNIC Photos"));
    assert!(screen.contains("CNIC Back"));
}

#[test]
fn test_continue_and_back() {
    let mut app = app();
    press_ctrl(&mut app, 'n');
    assert_eq!(app.controller().current_step(), 2);
    assert!(screen_contains(&app, "This is step 2 - Personal Details"));

    press_ctrl(&mut app, 'p');
    assert_eq!(app.controller().current_step(), 1);
    assert!(screen_contains(&app, "Complete Address"));
}

#[test]
fn test_back_on_first_step_is_noop() {
    let mut app = app();
    press_ctrl(&mut app, 'p');
    assert_eq!(app.controller().current_step(), 1);
}

#[test]
fn test_enter_continues_on_placeholder_steps() {
    let mut app = app();
    press_ctrl(&mut app, 'n');
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller().current_step(), 3);
    assert!(screen_contains(&app, "This is step 3 - Verification"));
}

#[test]
fn test_submit_only_on_last_step() {
    let mut app = app();
    for _ in 0..3 {
        press_ctrl(&mut app, 'n');
    }
    assert!(app.controller().is_last_step());
    assert!(toast_messages(&app).is_empty());

    let screen = render_app(&app);
    assert!(screen.contains("Submit Registration"));
    assert!(screen.contains("100%"));

    press_ctrl(&mut app, 'n');
    assert_eq!(app.controller().current_step(), 4);
    assert_eq!(toast_messages(&app), vec![SUBMIT_MESSAGE.to_string()]);
    assert!(screen_contains(&app, SUBMIT_MESSAGE));
}

#[test]
fn test_skip_is_one_shot() {
    let mut app = app();
    press_ctrl(&mut app, 's');
    assert!(!app.controller().skip_visible());
    assert_eq!(app.controller().current_step(), 1);
    assert_eq!(toast_messages(&app), vec![SKIP_MESSAGE.to_string()]);
    assert!(!screen_contains(&app, "Skip Registration"));

    press_ctrl(&mut app, 's');
    assert_eq!(toast_messages(&app).len(), 1);
}

#[test]
fn test_skip_disabled_by_config() {
    let mut app = App::new(Config::default().with_show_skip(false));
    assert!(!screen_contains(&app, "Skip Registration"));
    press_ctrl(&mut app, 's');
    assert!(app.toasts().is_empty());
}

#[test]
fn test_toasts_expire_on_tick() {
    let mut app = app();
    press_ctrl(&mut app, 's');
    assert!(!app.toasts().is_empty());

    app.tick(std::time::Instant::now() + std::time::Duration::from_secs(10));
    assert!(app.toasts().is_empty());
}

#[test]
fn test_quit() {
    let mut app = app();
    assert!(!app.should_quit());
    press_ctrl(&mut app, 'q');
    assert!(app.should_quit());
}
