// End-to-end tests: settings into the app, key handling and rendering

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dsviz::input::FieldKind;
use dsviz::settings::{Cli, Settings, StructureKind};
use dsviz::snippet::Language;
use dsviz::ui::App;
use ratatui::{backend::TestBackend, Terminal};
use std::time::{Duration, Instant};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app() -> App {
    App::new(&Settings::default())
}

fn screen_text(app: &mut App) -> String {
    let backend = TestBackend::new(140, 36);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    let buffer = terminal.backend().buffer().clone();
    buffer
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>()
}

#[test]
fn test_initial_screen_shows_linked_list() {
    let mut app = app();
    let text = screen_text(&mut app);
    assert!(text.contains("Linked List"), "{}", text);
    assert!(text.contains("Step 0/4"));
    assert!(text.contains("insertAtTail"));
}

#[test]
fn test_settings_choose_first_page_and_language() {
    let cli = Cli {
        structure: Some(StructureKind::Queue),
        language: Some(Language::Java),
        ..Cli::default()
    };
    let settings = Settings::resolve(&cli).expect("settings");
    let mut app = App::new(&settings);
    assert_eq!(app.page().title(), "Queue");
    assert_eq!(app.value_field.value(), 40);

    let text = screen_text(&mut app);
    assert!(text.contains("new Queue(5)"), "{}", text);
}

#[test]
fn test_tab_cycles_pages_and_stops_outgoing() {
    let mut app = app();
    app.toggle_play(Instant::now());
    assert!(app.page().is_running());

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.active, 1);
    assert!(!app.pages[0].is_running());

    app.handle_key_event(key(KeyCode::BackTab));
    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.active, 2);
}

#[test]
fn test_editing_operands_updates_page() {
    let mut app = app();
    app.handle_key_event(key(KeyCode::Char('v')));
    assert_eq!(app.editing, Some(FieldKind::Value));
    for c in "-42".chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
    // Letters are ignored while editing and never reach the normal bindings
    app.handle_key_event(key(KeyCode::Char('q')));
    app.handle_key_event(key(KeyCode::Enter));

    assert!(!app.should_quit);
    assert_eq!(app.editing, None);
    assert_eq!(app.page().operands().value, -42);
}

#[test]
fn test_play_runs_insert_to_completion() {
    let mut app = app();
    app.handle_key_event(key(KeyCode::Right));
    assert_eq!(app.page().operation_index(), 1);

    let t0 = Instant::now();
    app.toggle_play(t0);
    app.on_tick(t0 + Duration::from_secs(60));

    assert!(!app.page().is_running());
    assert_eq!(app.page().collection().values(), &[10, 15, 20, 30]);
    assert!(app.status_message.starts_with("Done"));
}

#[test]
fn test_start_refused_on_full_queue() {
    let cli = Cli {
        structure: Some(StructureKind::Queue),
        capacity: Some(3),
        ..Cli::default()
    };
    let settings = Settings::resolve(&cli).expect("settings");
    let mut app = App::new(&settings);
    assert!(!app.page().can_start());

    app.toggle_play(Instant::now());
    assert!(!app.page().is_running());
    assert!(app.status_message.contains("disabled"));
}

#[test]
fn test_vector_reserve_and_shrink() {
    let mut app = app();
    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.page().title(), "Vector");

    app.handle_key_event(key(KeyCode::Char('v')));
    app.handle_key_event(key(KeyCode::Char('3')));
    app.handle_key_event(key(KeyCode::Char('2')));
    app.handle_key_event(key(KeyCode::Esc));
    app.handle_key_event(key(KeyCode::Char('+')));
    let text = screen_text(&mut app);
    assert!(text.contains("capacity: 32"), "{}", text);

    app.handle_key_event(key(KeyCode::Char('s')));
    let text = screen_text(&mut app);
    assert!(text.contains("capacity: 9"), "{}", text);
}

#[test]
fn test_language_toggle_and_quit() {
    let mut app = app();
    app.handle_key_event(key(KeyCode::Char('l')));
    assert_eq!(app.language, Language::Java);
    let text = screen_text(&mut app);
    assert!(text.contains("new LinkedList()"), "{}", text);

    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn test_operands_locked_while_playing() {
    let mut app = app();
    app.handle_key_event(key(KeyCode::Right));

    let t0 = Instant::now();
    app.toggle_play(t0);
    app.on_tick(t0 + Duration::from_millis(3000));
    assert_eq!(app.page().frame().step, 3);
    assert_eq!(app.page().frame().display.values(), &[10, 15, 20, 30]);

    for c in ['v', '9', '9'] {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.editing, None);
    assert_eq!(app.page().operands().value, 15);
    assert!(app.page().is_running());

    app.on_tick(t0 + Duration::from_secs(60));
    assert_eq!(app.page().collection().values(), &[10, 15, 20, 30]);
}
