// Tests for key handling and rendering against ratatui's TestBackend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use shapecalc::config::Config;
use shapecalc::geometry::{Field, ShapeKind};
use shapecalc::ui::app::{run_restoring, App, Focus};
use std::cell::Cell;
use std::io;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_focus_cycles_through_form() {
    assert_eq!(Focus::Selector.next(2), Focus::Input(0));
    assert_eq!(Focus::Input(0).next(2), Focus::Input(1));
    assert_eq!(Focus::Input(1).next(2), Focus::Button);
    assert_eq!(Focus::Button.next(2), Focus::Selector);
    assert_eq!(Focus::Selector.prev(2), Focus::Button);
    assert_eq!(Focus::Button.prev(2), Focus::Input(1));
    assert_eq!(Focus::Input(0).prev(2), Focus::Selector);
}

#[test]
fn test_type_and_calculate_circle() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_field(), Some(Field::Radius));

    type_text(&mut app, "10");
    press(&mut app, KeyCode::Enter);

    let result = app.form.result().expect("result after Enter");
    assert!((result.area - 314.159_265).abs() < 1e-5);
    assert!(app.animation.is_calculated());

    let screen = screen(&app);
    assert!(screen.contains("314.16"), "screen:\n{}", screen);
    assert!(screen.contains("62.83"), "screen:\n{}", screen);
}

#[test]
fn test_uncomputed_results_hint() {
    let app = App::new(&Config::default());
    let screen = screen(&app);
    assert!(screen.contains("Press Enter to calculate"));
    assert!(screen.contains("Enter radius"));
}

#[test]
fn test_unset_radius_renders_nan() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Enter);
    let screen = screen(&app);
    assert!(screen.contains("NaN"), "screen:\n{}", screen);
}

#[test]
fn test_arrow_on_selector_switches_and_resets() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "5");
    press(&mut app, KeyCode::Enter);
    assert!(app.form.is_calculated());

    // Back to the selector, then pick the next kind
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, Focus::Selector);
    press(&mut app, KeyCode::Right);

    assert_eq!(app.form.kind(), ShapeKind::Rectangle);
    assert!(!app.form.is_calculated());
    assert!(app.form.dimensions().is_empty());
    assert_eq!(app.animation.kind(), ShapeKind::Rectangle);
    assert!(!app.animation.is_calculated());

    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.form.kind(), ShapeKind::Triangle);
}

#[test]
fn test_letters_are_not_typed_into_inputs() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "1x2");
    assert_eq!(app.form.input(Field::Radius), "12");

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.form.input(Field::Radius), "1");
}

#[test]
fn test_space_on_button_calculates() {
    let mut app = App::new(&Config {
        initial_shape: ShapeKind::Square,
        ..Config::default()
    });
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "6");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Button);
    press(&mut app, KeyCode::Char(' '));

    let screen = screen(&app);
    assert!(screen.contains("36.00"), "screen:\n{}", screen);
    assert!(screen.contains("24.00"), "screen:\n{}", screen);
}

#[test]
fn test_quit_keys() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    let mut app = App::new(&Config::default());
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);

    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
}

#[test]
fn test_restore_runs_when_setup_fails() {
    let restored = Cell::new(false);
    let res: Result<(), io::Error> = run_restoring(
        || Err(io::Error::new(io::ErrorKind::Other, "no tty")),
        || {
            restored.set(true);
            Ok(())
        },
    );
    assert!(restored.get());
    assert_eq!(res.expect_err("setup error is kept").to_string(), "no tty");
}

#[test]
fn test_restore_error_reported_after_success() {
    let res: Result<u32, io::Error> = run_restoring(
        || Ok(7),
        || Err(io::Error::new(io::ErrorKind::Other, "restore failed")),
    );
    assert_eq!(res.expect_err("restore error surfaces").to_string(), "restore failed");

    let res: Result<u32, io::Error> = run_restoring(|| Ok(7), || Ok(()));
    assert_eq!(res.expect("both steps succeed"), 7);
}
