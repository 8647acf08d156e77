//! End-to-end: events through the screen, into the store, back onto the screen

use std::cell::RefCell;
use std::rc::Rc;

use pill_picker::action::{choose, Action};
use pill_picker::binding::PillBinding;
use pill_picker::components::{Component, PillScreen};
use pill_picker::config::default_keybindings;
use pill_picker::state::{AppState, InitialState, Verdict};
use pill_picker::store::create_store;
use pill_picker::APP_NAME;
use redpill::testing::{click, key_event, RenderHarness, TestHarness};
use redpill::{assert_emitted, EventKind, Keybindings};

fn draw(screen: &mut PillScreen, binding: &PillBinding, keys: &Keybindings) -> String {
    let mut render = RenderHarness::new(40, 12);
    render.render_to_string_plain(|frame| screen.render(frame, frame.area(), binding.props(keys)))
}

fn feed(
    screen: &mut PillScreen,
    binding: &mut PillBinding,
    keys: &Keybindings,
    event: &EventKind,
) {
    let actions: Vec<Action> = screen
        .handle_event(event, binding.props(keys))
        .into_iter()
        .collect();
    for action in actions {
        binding.dispatch(action);
    }
}

#[test]
fn test_initial_screen() {
    let keys = default_keybindings();
    let binding = PillBinding::new(create_store(InitialState::default()));
    let mut screen = PillScreen::default();

    let output = draw(&mut screen, &binding, &keys);
    assert_eq!(APP_NAME, "ReactNativeRedux");
    assert!(output.lines().next().unwrap().contains(" ReactNativeRedux "));
    assert!(output.contains("Red"));
    assert!(output.contains("Blue"));
    assert!(output.contains("Choose wisely"));
    assert!(output.contains("r red"));
    assert!(output.contains("q quit"));
}

#[test]
fn test_keys_drive_the_verdict() {
    let keys = default_keybindings();
    let mut binding = PillBinding::new(create_store(InitialState::default()));
    let mut screen = PillScreen::default();
    draw(&mut screen, &binding, &keys);

    feed(&mut screen, &mut binding, &keys, &key_event("r"));
    assert_eq!(binding.state().result, Verdict::RealWorld);
    assert!(draw(&mut screen, &binding, &keys).contains("Welcome to the real world"));

    feed(&mut screen, &mut binding, &keys, &key_event("right"));
    assert_eq!(binding.state().result, Verdict::Matrix);
    assert!(draw(&mut screen, &binding, &keys).contains("Stay in the Matrix"));
}

#[test]
fn test_clicks_drive_the_verdict() {
    let keys = default_keybindings();
    let mut binding = PillBinding::new(create_store(InitialState::default()));
    let mut screen = PillScreen::default();
    draw(&mut screen, &binding, &keys);

    let red = screen.picker().red_area();
    let blue = screen.picker().blue_area();

    feed(&mut screen, &mut binding, &keys, &click(red.x + 2, red.y + 1));
    assert_eq!(binding.state().result, Verdict::RealWorld);

    feed(&mut screen, &mut binding, &keys, &click(blue.x + 2, blue.y + 1));
    assert_eq!(binding.state().result, Verdict::Matrix);

    // Clicking the frame does nothing
    feed(&mut screen, &mut binding, &keys, &click(0, 0));
    assert_eq!(binding.state().result, Verdict::Matrix);
}

#[test]
fn test_quit_key_emits_quit() {
    let keys = default_keybindings();
    let binding = PillBinding::new(create_store(InitialState::default()));
    let mut screen = PillScreen::default();
    let mut harness = TestHarness::<AppState, Action>::default();

    for k in ["q", "esc", "ctrl+c"] {
        harness.emit_all(screen.handle_event(&key_event(k), binding.props(&keys)));
    }
    harness.emit_all(screen.handle_event(&key_event("x"), binding.props(&keys)));

    let emitted = harness.drain_emitted();
    assert_eq!(emitted.len(), 3);
    assert_emitted!(emitted, Action::Quit);
}

#[test]
fn test_user_bindings_replace_defaults() {
    let keys = pill_picker::config::apply_user_bindings(
        Keybindings::new().with("choose_blue", &["2"]),
    )
    .unwrap();
    let mut binding = PillBinding::new(create_store(InitialState::default()));
    let mut screen = PillScreen::default();

    feed(&mut screen, &mut binding, &keys, &key_event("b"));
    assert_eq!(binding.state().result, Verdict::Undecided);

    feed(&mut screen, &mut binding, &keys, &key_event("2"));
    assert_eq!(binding.state().result, Verdict::Matrix);
    assert!(draw(&mut screen, &binding, &keys).contains("2 blue"));
}

#[test]
fn test_every_subscriber_sees_every_dispatch() {
    let mut store = create_store(InitialState {
        result: Some(Verdict::Matrix),
    });
    let seen = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&seen);
    let first = store.subscribe(move |state: &AppState| log.borrow_mut().push(("a", state.result)));
    let log = Rc::clone(&seen);
    store.subscribe(move |state: &AppState| log.borrow_mut().push(("b", state.result)));

    store.dispatch(choose("red"));
    store.dispatch(Action::Unknown {
        kind: "@@init".into(),
    });
    assert!(store.unsubscribe(first));
    store.dispatch(choose("purple"));

    assert_eq!(
        *seen.borrow(),
        vec![
            ("a", Verdict::RealWorld),
            ("b", Verdict::RealWorld),
            ("a", Verdict::RealWorld),
            ("b", Verdict::RealWorld),
            ("b", Verdict::Matrix),
        ]
    );
}
