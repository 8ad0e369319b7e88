//! Editing the Identity & Address step through key events

use std::io::Write;

use crossterm::event::KeyCode;
use enroll::config::Config;
use enroll::data::{Country, DocumentType, UploadSlot};
use enroll::ui::{App, InputMode};

use super::common::keys::{press, press_ctrl, repeat, type_text};
use super::common::terminal::{render_app, screen_contains};

const ADDRESS_REQUIRED: &str = "Complete address is required";

fn app() -> App {
    App::new(Config::default())
}

/// Tab presses from the address field to each element
const TO_COUNTRY: usize = 1;
const TO_PROVINCE: usize = 2;
const TO_DOCUMENT_TYPE: usize = 3;
const TO_DOCUMENT_NUMBER: usize = 4;
const TO_FIRST_UPLOAD: usize = 5;

#[test]
fn test_blank_address_flagged_on_blur() {
    let mut app = app();
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Tab);
    assert!(screen_contains(&app, ADDRESS_REQUIRED));

    // Fixing the value and leaving again clears it
    press(&mut app, KeyCode::BackTab);
    type_text(&mut app, "12 Mall Road");
    press(&mut app, KeyCode::Tab);
    assert!(!screen_contains(&app, ADDRESS_REQUIRED));
    assert_eq!(app.controller().form().complete_address, "   12 Mall Road");
}

#[test]
fn test_cnic_is_formatted_while_typing() {
    let mut app = app();
    type_text(&mut app, "House 7");
    repeat(&mut app, KeyCode::Tab, TO_DOCUMENT_NUMBER);
    type_text(&mut app, "3520112345671");

    assert_eq!(app.controller().form().cnic, "35201-1234567-1");
    let screen = render_app(&app);
    assert!(screen.contains("35201-1234567-1"));
    assert!(!screen.contains("Invalid CNIC format"));

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.controller().form().cnic, "35201-1234567");
}

#[test]
fn test_empty_cnic_flagged_on_blur() {
    let mut app = app();
    type_text(&mut app, "House 7");
    repeat(&mut app, KeyCode::Tab, TO_DOCUMENT_NUMBER + 1);
    assert!(screen_contains(&app, "CNIC is required"));
}

#[test]
fn test_canada_provinces() {
    let mut app = app();
    repeat(&mut app, KeyCode::Tab, TO_COUNTRY);
    // Pakistan wraps back to Canada
    press(&mut app, KeyCode::Left);
    assert_eq!(app.controller().form().country, Country::Canada);
    assert!(app.controller().form().province.is_empty());
    assert!(screen_contains(&app, "Select Province/State"));

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.controller().form().province, "Ontario");
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.controller().form().province, "Manitoba");

    // Changing country again resets the province
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.controller().form().country, Country::Pakistan);
    assert!(app.controller().form().province.is_empty());
}

#[test]
fn test_country_from_config() {
    let app = App::new(Config::default().with_default_country(Country::UnitedKingdom));
    assert_eq!(app.controller().form().country, Country::UnitedKingdom);
    assert!(screen_contains(&app, "United Kingdom"));
}

#[test]
fn test_switch_to_passport_keeps_cnic() {
    let mut app = app();
    type_text(&mut app, "House 7");
    repeat(&mut app, KeyCode::Tab, TO_DOCUMENT_NUMBER);
    type_text(&mut app, "35201");

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Enter);
    let form = app.controller().form();
    assert_eq!(form.document_type, DocumentType::Passport);
    assert_eq!(form.cnic, "35201");
    assert!(form.passport.is_empty());

    let screen = render_app(&app);
    assert!(screen.contains("Passport Number"));
    assert!(screen.contains("Upload Passport"));
    assert!(screen.contains("Passport Photo Page"));
    assert!(!screen.contains("CNIC Front"));
}

#[test]
fn test_passport_required_on_blur() {
    let mut app = app();
    type_text(&mut app, "House 7");
    repeat(&mut app, KeyCode::Tab, TO_DOCUMENT_TYPE);
    press(&mut app, KeyCode::Right);
    repeat(&mut app, KeyCode::Tab, 2);
    assert!(screen_contains(&app, "Passport number is required"));

    // Switching back clears document errors
    repeat(&mut app, KeyCode::BackTab, 2);
    press(&mut app, KeyCode::Right);
    assert!(!screen_contains(&app, "Passport number is required"));
}

#[test]
fn test_upload_through_file_picker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("front.png");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"\x89PNG")
        .unwrap();

    let mut app = app();
    type_text(&mut app, "House 7");
    repeat(&mut app, KeyCode::Tab, TO_FIRST_UPLOAD);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.input_mode(),
        InputMode::PickingFile(UploadSlot::CnicFront)
    );
    assert!(screen_contains(&app, "Attach CNIC Front"));

    type_text(&mut app, &path.display().to_string());
    assert!(screen_contains(&app, "File found"));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode(), InputMode::Normal);
    let form = app.controller().form();
    assert_eq!(
        form.cnic_front.as_ref().map(|f| f.name.as_str()),
        Some("front.png")
    );
    assert!(form.cnic_back.is_none());
    assert!(screen_contains(&app, "✓ front.png"));
}

#[test]
fn test_unreadable_path_keeps_picker_open() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");

    let mut app = app();
    repeat(&mut app, KeyCode::Tab, TO_FIRST_UPLOAD + 1);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode(), InputMode::PickingFile(UploadSlot::CnicBack));

    type_text(&mut app, &missing.display().to_string());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode(), InputMode::PickingFile(UploadSlot::CnicBack));
    assert!(app.file_picker().error().is_some());
    assert!(screen_contains(&app, "Not a file"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode(), InputMode::Normal);
    assert!(app.controller().form().cnic_back.is_none());
}

#[test]
fn test_picker_blocks_navigation() {
    let mut app = app();
    repeat(&mut app, KeyCode::Tab, TO_FIRST_UPLOAD);
    press(&mut app, KeyCode::Enter);
    press_ctrl(&mut app, 'n');
    assert_eq!(app.controller().current_step(), 1);
    assert!(matches!(app.input_mode(), InputMode::PickingFile(_)));

    // Empty path means nothing chosen
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode(), InputMode::Normal);
    assert!(app.controller().form().cnic_front.is_none());
}

#[test]
fn test_errors_reset_after_leaving_step() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    assert!(screen_contains(&app, ADDRESS_REQUIRED));

    press_ctrl(&mut app, 'n');
    press_ctrl(&mut app, 'p');
    assert!(!screen_contains(&app, ADDRESS_REQUIRED));
}

#[test]
fn test_values_survive_navigation() {
    let mut app = app();
    type_text(&mut app, "House 7");
    repeat(&mut app, KeyCode::Tab, TO_DOCUMENT_NUMBER);
    type_text(&mut app, "3520112345671");

    press_ctrl(&mut app, 'n');
    press_ctrl(&mut app, 'n');
    press_ctrl(&mut app, 'p');
    press_ctrl(&mut app, 'p');

    let form = app.controller().form();
    assert_eq!(form.complete_address, "House 7");
    assert_eq!(form.cnic, "35201-1234567-1");
    assert!(screen_contains(&app, "35201-1234567-1"));
}
