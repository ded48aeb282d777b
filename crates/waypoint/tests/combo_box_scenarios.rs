//! End-to-end behavior of the combo box as seen through its public API.

use std::sync::Arc;

use parking_lot::Mutex;
use waypoint::widget::widgets::{ComboBox, ComboBoxProps, MAX_RESULTS, filter};
use waypoint::widget::{Key, KeyPressEvent};
use waypoint_core::{MouseButton, Point, PointerEventHub, PointerPressEvent, Rect};

const SAMPLE: [&str; 8] = [
    "Atlanta (ATL)",
    "Austin (AUS)",
    "Boston (BOS)",
    "Charlotte (CLT)",
    "Chicago (ORD)",
    "Dallas (DFW)",
    "Denver (DEN)",
    "Houston (IAH)",
];

fn options(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

fn mount(labels: &[&str]) -> (Arc<PointerEventHub>, ComboBox, Arc<Mutex<Vec<String>>>) {
    let hub = PointerEventHub::new();
    let combo = ComboBox::with_hub(ComboBoxProps::new("From", options(labels)), &hub);

    let commits = Arc::new(Mutex::new(Vec::new()));
    let commits_clone = commits.clone();
    combo
        .value_changed
        .connect(move |value| commits_clone.lock().push(value.clone()));

    (hub, combo, commits)
}

fn press_key(combo: &mut ComboBox, key: Key) -> bool {
    combo.handle_key_press(&KeyPressEvent::key(key))
}

fn type_text(combo: &mut ComboBox, text: &str) {
    for ch in text.chars() {
        combo.handle_key_press(&KeyPressEvent::typed(ch.to_string()));
    }
}

#[test]
fn test_scenario_query_narrows_to_one_city() {
    let opts = options(&["Dallas (DFW)", "Austin (AUS)", "Houston (IAH)"]);
    assert_eq!(filter("au", &opts), vec!["Austin (AUS)"]);

    let (_hub, mut combo, _) = mount(&["Dallas (DFW)", "Austin (AUS)", "Houston (IAH)"]);
    type_text(&mut combo, "au");
    assert_eq!(combo.view().dropdown.map(|rows| rows.len()), Some(1));
}

#[test]
fn test_scenario_arrow_down_opens_closed_list() {
    let (_hub, mut combo, _) = mount(&SAMPLE);
    assert!(!combo.is_open());

    assert!(press_key(&mut combo, Key::ArrowDown));

    assert!(combo.is_open());
    assert_eq!(combo.highlighted_index(), 0);
}

#[test]
fn test_scenario_arrow_then_enter_commits_second() {
    let (_hub, mut combo, commits) = mount(&["Austin (AUS)", "Atlanta (ATL)"]);
    combo.focus();
    assert_eq!(combo.highlighted_index(), 0);

    press_key(&mut combo, Key::ArrowDown);
    press_key(&mut combo, Key::Enter);

    assert_eq!(*commits.lock(), vec!["Atlanta (ATL)".to_string()]);
    assert_eq!(combo.query(), "Atlanta (ATL)");
    assert_eq!(combo.committed_value().as_deref(), Some("Atlanta (ATL)"));
    assert!(!combo.is_open());
}

#[test]
fn test_scenario_no_match_enter_is_noop() {
    let (_hub, mut combo, commits) = mount(&SAMPLE);
    type_text(&mut combo, "zz");

    assert!(combo.filtered().is_empty());
    assert!(!combo.is_dropdown_visible());
    assert_eq!(combo.view().dropdown, None);

    press_key(&mut combo, Key::Enter);
    assert!(commits.lock().is_empty());
    assert_eq!(combo.query(), "zz");
    assert_eq!(combo.committed_value(), None);
}

#[test]
fn test_scenario_owner_reset_clears_without_reopening() {
    let (_hub, mut combo, _) = mount(&SAMPLE);
    type_text(&mut combo, "dallas");
    press_key(&mut combo, Key::Enter);
    assert_eq!(combo.query(), "Dallas (DFW)");
    assert!(!combo.is_open());

    combo.sync_external_value(Some(""));

    assert_eq!(combo.query(), "");
    assert!(!combo.is_open());
}

#[test]
fn test_highlight_stays_in_bounds_for_any_moves() {
    let (_hub, mut combo, _) = mount(&SAMPLE);
    let keys = [
        Key::ArrowDown,
        Key::ArrowUp,
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::Escape,
        Key::ArrowUp,
        Key::ArrowUp,
    ];

    for key in keys {
        press_key(&mut combo, key);
        let len = combo.filtered().len();
        if combo.is_open() && len > 0 {
            assert!(combo.highlighted_index() < len);
        }
    }

    type_text(&mut combo, "on");
    for _ in 0..5 {
        press_key(&mut combo, Key::ArrowDown);
        assert!(combo.highlighted_index() < combo.filtered().len());
    }
}

#[test]
fn test_escape_closes_keeping_text_and_value() {
    let (_hub, mut combo, commits) = mount(&SAMPLE);
    type_text(&mut combo, "den");
    press_key(&mut combo, Key::Enter);
    type_text(&mut combo, "!");

    press_key(&mut combo, Key::Escape);

    assert!(!combo.is_open());
    assert_eq!(combo.query(), "Denver (DEN)!");
    assert_eq!(combo.committed_value().as_deref(), Some("Denver (DEN)"));
    assert_eq!(commits.lock().len(), 1);
}

#[test]
fn test_outside_press_closes_without_committing() {
    let (hub, mut combo, commits) = mount(&SAMPLE);
    combo.set_geometry(Rect::new(20.0, 20.0, 300.0, 44.0));
    type_text(&mut combo, "a");
    assert!(combo.is_open());

    hub.dispatch(PointerPressEvent::new(MouseButton::Left, Point::new(25.0, 30.0)));
    assert!(combo.is_open());

    let below_dropdown = combo.region().bottom() + 10.0;
    hub.dispatch(PointerPressEvent::new(
        MouseButton::Left,
        Point::new(25.0, below_dropdown),
    ));

    assert!(!combo.is_open());
    assert_eq!(combo.query(), "a");
    assert!(commits.lock().is_empty());
}

#[test]
fn test_filtered_list_never_exceeds_cap() {
    let many: Vec<String> = (0..50).map(|i| format!("Stop {i:02}")).collect();
    let labels: Vec<&str> = many.iter().map(String::as_str).collect();
    let (_hub, mut combo, _) = mount(&labels);

    combo.focus();
    assert_eq!(combo.filtered().len(), MAX_RESULTS);
    assert_eq!(
        combo.view().dropdown.map(|rows| rows.len()),
        Some(MAX_RESULTS)
    );

    for _ in 0..20 {
        press_key(&mut combo, Key::ArrowDown);
    }
    assert_eq!(combo.highlighted_index(), MAX_RESULTS - 1);
}

#[test]
fn test_initial_value_shown() {
    let hub = PointerEventHub::new();
    let combo = ComboBox::with_hub(
        ComboBoxProps::new("To", options(&SAMPLE)).with_value("Boston (BOS)"),
        &hub,
    );

    assert_eq!(combo.query(), "Boston (BOS)");
    assert!(!combo.is_open());
    assert_eq!(combo.committed_value(), None);
}

#[test]
fn test_two_controls_share_one_hub() {
    let hub = PointerEventHub::new();
    let mut from = ComboBox::with_hub(ComboBoxProps::new("From", options(&SAMPLE)), &hub);
    let mut to = ComboBox::with_hub(ComboBoxProps::new("To", options(&SAMPLE)), &hub);
    from.set_geometry(Rect::new(0.0, 0.0, 200.0, 44.0));
    to.set_geometry(Rect::new(300.0, 0.0, 200.0, 44.0));

    from.focus();
    to.focus();
    hub.dispatch(PointerPressEvent::new(MouseButton::Left, Point::new(310.0, 10.0)));

    assert!(!from.is_open());
    assert!(to.is_open());
    assert_eq!(hub.subscriber_count(), 2);
}
