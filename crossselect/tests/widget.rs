use crossdom::{Event, MonospaceMetrics};
use crossselect::{ButtonKind, CrossSelect, CrossSelectConfig, PaneKind, SourceControl};
use proptest::prelude::*;

fn abc() -> SourceControl {
    SourceControl::new("tags")
        .option("A", false)
        .option("B", true)
        .option("C", false)
}

fn attach(control: SourceControl, config: CrossSelectConfig) -> CrossSelect {
    CrossSelect::attach(control, config, &MonospaceMetrics::default()).unwrap()
}

/// Every option is in exactly one pane, and the pane matches its flag.
fn assert_partition(widget: &CrossSelect) {
    for (index, opt) in widget.control().options().iter().enumerate() {
        let in_options = widget.options_pane().contains(index);
        let in_chosen = widget.chosen_pane().contains(index);
        assert!(in_options != in_chosen, "option {index} must be in exactly one pane");
        assert_eq!(opt.selected, in_chosen, "option {index} flag matches pane");
    }
    assert_eq!(
        widget.options_pane().len() + widget.chosen_pane().len(),
        widget.control().len()
    );
}

/// Bulk buttons track pane emptiness; move buttons need focus.
fn assert_buttons(widget: &CrossSelect) {
    assert_eq!(
        widget.is_enabled(ButtonKind::SelectAll),
        !widget.options_pane().is_empty()
    );
    assert_eq!(
        widget.is_enabled(ButtonKind::RemoveAll),
        !widget.chosen_pane().is_empty()
    );
    if widget.focused_in(PaneKind::Options).is_empty() {
        assert!(!widget.is_enabled(ButtonKind::Select));
    }
    if widget.focused_in(PaneKind::Chosen).is_empty() {
        assert!(!widget.is_enabled(ButtonKind::Remove));
    }
}

// ============================================================================
// Attachment
// ============================================================================

#[test]
fn test_attach_splits_panes() {
    let widget = attach(abc(), CrossSelectConfig::default());

    assert_eq!(widget.options_pane().labels(), vec!["A", "C"]);
    assert_eq!(widget.chosen_pane().labels(), vec!["B"]);
    assert!(widget.is_enabled(ButtonKind::SelectAll));
    assert!(widget.is_enabled(ButtonKind::RemoveAll));
    assert!(!widget.is_enabled(ButtonKind::Select));
    assert!(!widget.is_enabled(ButtonKind::Remove));
    assert_eq!(widget.button(ButtonKind::RemoveAll).label, "remove all");
    assert_partition(&widget);
}

#[test]
fn test_attach_skips_single_select() {
    let control = abc().multiple(false);
    assert!(CrossSelect::attach(control, CrossSelectConfig::default(), &MonospaceMetrics::default()).is_none());
}

#[test]
fn test_attach_all_selected_disables_select_all() {
    let control = SourceControl::new("s").option("A", true).option("B", true);
    let widget = attach(control, CrossSelectConfig::default());
    assert!(!widget.is_enabled(ButtonKind::SelectAll));
    assert!(widget.is_enabled(ButtonKind::RemoveAll));
}

#[test]
fn test_attach_empty_control_disables_both_bulk_buttons() {
    let widget = attach(SourceControl::new("s"), CrossSelectConfig::default());
    assert!(!widget.is_enabled(ButtonKind::SelectAll));
    assert!(!widget.is_enabled(ButtonKind::RemoveAll));
    assert!(widget.options_pane().is_empty());
    assert!(widget.chosen_pane().is_empty());
}

// ============================================================================
// Click-selects mode
// ============================================================================

#[test]
fn test_click_selects_moves_immediately() {
    let mut widget = attach(abc(), CrossSelectConfig::default().click_selects(true));

    assert!(widget.click_item(PaneKind::Options, 0));

    assert_eq!(widget.options_pane().labels(), vec!["C"]);
    assert_eq!(widget.chosen_pane().labels(), vec!["B", "A"]);
    assert_eq!(widget.control().is_selected(0), Some(true));
    assert!(widget.focused_in(PaneKind::Chosen).is_empty());
    assert_partition(&widget);
    assert_buttons(&widget);
}

#[test]
fn test_click_selects_removes_from_chosen() {
    let mut widget = attach(abc(), CrossSelectConfig::default().click_selects(true));

    assert!(widget.click_item(PaneKind::Chosen, 1));

    assert_eq!(widget.options_pane().labels(), vec!["A", "C", "B"]);
    assert!(widget.chosen_pane().is_empty());
    assert!(!widget.is_enabled(ButtonKind::RemoveAll));
    assert_partition(&widget);
}

#[test]
fn test_stale_click_is_ignored() {
    let mut widget = attach(abc(), CrossSelectConfig::default().click_selects(true));
    assert!(widget.click_item(PaneKind::Options, 0));
    // Second click of a double click lands on the item that already moved
    assert!(!widget.click_item(PaneKind::Options, 0));
    assert_eq!(widget.chosen_pane().labels(), vec!["B", "A"]);
}

// ============================================================================
// Button-driven mode
// ============================================================================

#[test]
fn test_focus_then_select_button() {
    let mut widget = attach(abc(), CrossSelectConfig::default());

    assert!(widget.click_item(PaneKind::Options, 2));
    assert!(widget.is_focused(2));
    assert!(widget.is_enabled(ButtonKind::Select));
    assert!(!widget.is_enabled(ButtonKind::Remove));

    assert!(widget.press(ButtonKind::Select));

    assert_eq!(widget.options_pane().labels(), vec!["A"]);
    assert_eq!(widget.chosen_pane().labels(), vec!["B", "C"]);
    assert!(widget.is_enabled(ButtonKind::SelectAll));
    assert!(!widget.is_enabled(ButtonKind::Select));
    assert!(!widget.is_focused(2));
    assert_partition(&widget);
    assert_buttons(&widget);
}

#[test]
fn test_remove_all_appends_in_processing_order() {
    let mut widget = attach(abc(), CrossSelectConfig::default());
    widget.click_item(PaneKind::Options, 2);
    widget.press(ButtonKind::Select);

    assert!(widget.press(ButtonKind::RemoveAll));

    assert_eq!(widget.options_pane().labels(), vec!["A", "B", "C"]);
    assert!(widget.chosen_pane().is_empty());
    assert!(!widget.is_enabled(ButtonKind::RemoveAll));
    assert!(widget.is_enabled(ButtonKind::SelectAll));
    assert_eq!(widget.control().selected_count(), 0);
    assert_partition(&widget);
}

#[test]
fn test_clicking_focused_item_unfocuses() {
    let mut widget = attach(abc(), CrossSelectConfig::default());

    widget.click_item(PaneKind::Chosen, 1);
    assert!(widget.is_enabled(ButtonKind::Remove));
    assert!(!widget.is_enabled(ButtonKind::Select));

    assert!(widget.click_item(PaneKind::Chosen, 1));
    assert!(!widget.is_focused(1));
    assert!(!widget.is_enabled(ButtonKind::Remove));
    assert!(!widget.is_enabled(ButtonKind::Select));
}

#[test]
fn test_new_focus_clears_previous_without_accumulate() {
    let mut widget = attach(abc(), CrossSelectConfig::default());

    widget.click_item(PaneKind::Options, 0);
    widget.click_item(PaneKind::Options, 2);

    assert_eq!(widget.focused_in(PaneKind::Options), vec![2]);
}

#[test]
fn test_accumulate_keeps_same_pane_focus() {
    let config = CrossSelectConfig::default().clicks_accumulate(true);
    let control = SourceControl::new("s")
        .option("A", false)
        .option("B", true)
        .option("C", false)
        .option("D", true);
    let mut widget = attach(control, config);

    widget.click_item(PaneKind::Options, 0);
    widget.click_item(PaneKind::Options, 2);
    assert_eq!(widget.focused_in(PaneKind::Options), vec![0, 2]);

    widget.click_item(PaneKind::Chosen, 1);
    widget.click_item(PaneKind::Chosen, 3);
    assert!(widget.focused_in(PaneKind::Options).is_empty());
    assert_eq!(widget.focused_in(PaneKind::Chosen), vec![1, 3]);
    assert!(widget.is_enabled(ButtonKind::Remove));
    assert!(!widget.is_enabled(ButtonKind::Select));

    widget.click_item(PaneKind::Options, 2);
    assert!(widget.focused_in(PaneKind::Chosen).is_empty());
    assert_eq!(widget.focused_in(PaneKind::Options), vec![2]);
}

#[test]
fn test_accumulated_focus_moves_together() {
    let config = CrossSelectConfig::default().clicks_accumulate(true);
    let mut widget = attach(abc(), config);

    widget.click_item(PaneKind::Options, 2);
    widget.click_item(PaneKind::Options, 0);
    assert!(widget.press(ButtonKind::Select));

    // Pane order, not click order
    assert_eq!(widget.chosen_pane().labels(), vec!["B", "A", "C"]);
    assert!(widget.options_pane().is_empty());
    assert!(!widget.is_enabled(ButtonKind::SelectAll));
    assert_buttons(&widget);
}

fn abcd() -> SourceControl {
    SourceControl::new("s")
        .option("A", false)
        .option("B", true)
        .option("C", false)
        .option("D", true)
}

#[test]
fn test_accumulate_keeps_unmoved_focus_after_select() {
    let mut widget = attach(abcd(), CrossSelectConfig::default().clicks_accumulate(true));
    widget.click_item(PaneKind::Options, 0);
    widget.click_item(PaneKind::Options, 2);

    assert!(widget.double_click_item(PaneKind::Options, 0));

    assert_eq!(widget.focused_in(PaneKind::Options), vec![2]);
    assert!(widget.focused_in(PaneKind::Chosen).is_empty());
    assert!(!widget.is_focused(0));
    assert!(!widget.is_enabled(ButtonKind::Select));
    assert!(!widget.is_enabled(ButtonKind::Remove));
    assert_buttons(&widget);
}

#[test]
fn test_accumulate_keeps_unmoved_focus_after_remove() {
    let mut widget = attach(abcd(), CrossSelectConfig::default().clicks_accumulate(true));
    widget.click_item(PaneKind::Chosen, 1);
    widget.click_item(PaneKind::Chosen, 3);

    assert!(widget.double_click_item(PaneKind::Chosen, 1));

    assert_eq!(widget.focused_in(PaneKind::Chosen), vec![3]);
    assert!(widget.focused_in(PaneKind::Options).is_empty());
    assert!(!widget.is_focused(1));
    assert!(!widget.is_enabled(ButtonKind::Remove));
    assert!(!widget.is_enabled(ButtonKind::Select));
    assert_buttons(&widget);
}

#[test]
fn test_accumulate_move_clears_opposite_focus() {
    let mut widget = attach(abcd(), CrossSelectConfig::default().clicks_accumulate(true));
    widget.click_item(PaneKind::Chosen, 3);

    assert!(widget.double_click_item(PaneKind::Options, 2));

    assert!(widget.focused_in(PaneKind::Chosen).is_empty());
    assert!(!widget.is_enabled(ButtonKind::Remove));
}

#[test]
fn test_remove_button_moves_focused_chosen_items() {
    let mut widget = attach(abc(), CrossSelectConfig::default());
    widget.click_item(PaneKind::Chosen, 1);

    assert!(widget.press(ButtonKind::Remove));

    assert_eq!(widget.options_pane().labels(), vec!["A", "C", "B"]);
    assert!(!widget.is_enabled(ButtonKind::Remove));
    assert!(!widget.is_enabled(ButtonKind::RemoveAll));
    assert_partition(&widget);
}

#[test]
fn test_disabled_button_press_is_ignored() {
    let mut widget = attach(abc(), CrossSelectConfig::default());
    assert!(!widget.press(ButtonKind::Select));
    assert!(!widget.press(ButtonKind::Remove));
    assert_eq!(widget.options_pane().labels(), vec!["A", "C"]);
}

// ============================================================================
// Double click
// ============================================================================

#[test]
fn test_double_click_moves_without_focus() {
    let mut widget = attach(abc(), CrossSelectConfig::default());

    assert!(widget.double_click_item(PaneKind::Options, 0));
    assert_eq!(widget.chosen_pane().labels(), vec!["B", "A"]);

    assert!(widget.double_click_item(PaneKind::Chosen, 1));
    assert_eq!(widget.options_pane().labels(), vec!["C", "B"]);
    assert_partition(&widget);
    assert_buttons(&widget);
}

#[test]
fn test_double_click_disabled() {
    let mut widget = attach(abc(), CrossSelectConfig::default().dblclick(false));
    assert!(!widget.double_click_item(PaneKind::Options, 0));
    assert_eq!(widget.options_pane().labels(), vec!["A", "C"]);
}

#[test]
fn test_double_click_event_sequence() {
    let mut widget = attach(abc(), CrossSelectConfig::default());
    widget.render();

    let item = "tags-jqxs-options-0".to_string();
    let path = vec!["tags-jqxs".to_string(), "tags-jqxs-options".to_string(), item.clone()];

    assert!(widget.handle_event(&Event::click(item.clone()), &path));
    assert!(widget.is_focused(0));
    assert!(widget.handle_event(&Event::click(item.clone()), &path));
    assert!(!widget.is_focused(0));
    assert!(widget.handle_event(&Event::double_click(item), &path));

    assert_eq!(widget.chosen_pane().labels(), vec!["B", "A"]);
    assert!(widget.focused_in(PaneKind::Options).is_empty());
    assert_buttons(&widget);
}

// ============================================================================
// Move primitive
// ============================================================================

#[test]
fn test_remove_one_twice_is_noop() {
    let mut widget = attach(abc(), CrossSelectConfig::default());

    assert!(widget.remove_one(1));
    assert!(!widget.remove_one(1));
    assert_eq!(widget.options_pane().labels(), vec!["A", "C", "B"]);
    assert_partition(&widget);
}

#[test]
fn test_select_one_out_of_range() {
    let mut widget = attach(abc(), CrossSelectConfig::default());
    assert!(!widget.select_one(10));
    assert_partition(&widget);
}

#[test]
fn test_select_all_and_remove_all_totality() {
    let mut widget = attach(abc(), CrossSelectConfig::default());

    assert!(widget.press(ButtonKind::SelectAll));
    assert!(widget.options_pane().is_empty());
    assert!(widget.control().options().iter().all(|o| o.selected));
    assert_eq!(widget.chosen_pane().labels(), vec!["B", "A", "C"]);
    assert!(!widget.is_enabled(ButtonKind::SelectAll));
    assert!(!widget.is_enabled(ButtonKind::Remove));

    assert!(widget.press(ButtonKind::RemoveAll));
    assert!(widget.chosen_pane().is_empty());
    assert!(widget.control().options().iter().all(|o| !o.selected));
    assert_eq!(widget.options_pane().labels(), vec!["B", "A", "C"]);
    assert!(!widget.is_enabled(ButtonKind::RemoveAll));
    assert!(!widget.is_enabled(ButtonKind::Select));
}

// ============================================================================
// Invariants under arbitrary input
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Gesture {
    Click(PaneKind, usize),
    DoubleClick(PaneKind, usize),
    Press(ButtonKind),
}

fn pane_strategy() -> impl Strategy<Value = PaneKind> {
    prop_oneof![Just(PaneKind::Options), Just(PaneKind::Chosen)]
}

fn gesture_strategy() -> impl Strategy<Value = Gesture> {
    // Index 6 is one past the last option
    prop_oneof![
        (pane_strategy(), 0usize..7).prop_map(|(pane, i)| Gesture::Click(pane, i)),
        (pane_strategy(), 0usize..7).prop_map(|(pane, i)| Gesture::DoubleClick(pane, i)),
        (0usize..4).prop_map(|k| Gesture::Press(ButtonKind::ALL[k])),
    ]
}

fn config_strategy() -> impl Strategy<Value = CrossSelectConfig> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(click_selects, accumulate, dbl)| {
        CrossSelectConfig::default()
            .click_selects(click_selects)
            .clicks_accumulate(accumulate)
            .dblclick(dbl)
    })
}

proptest! {
    #[test]
    fn invariants_hold_for_any_gesture_sequence(
        config in config_strategy(),
        initial in prop::collection::vec(any::<bool>(), 6),
        gestures in prop::collection::vec(gesture_strategy(), 0..200),
    ) {
        let control = initial
            .iter()
            .enumerate()
            .fold(SourceControl::new("s"), |c, (i, &selected)| c.option(format!("opt{i}"), selected));
        let click_selects = config.click_selects;
        let mut widget = attach(control, config);
        assert_partition(&widget);
        assert_buttons(&widget);

        for gesture in gestures {
            match gesture {
                Gesture::Click(pane, index) => {
                    widget.click_item(pane, index);
                }
                Gesture::DoubleClick(pane, index) => {
                    widget.double_click_item(pane, index);
                }
                Gesture::Press(kind) => {
                    widget.press(kind);
                }
            }
            assert_partition(&widget);
            assert_buttons(&widget);
            if click_selects {
                prop_assert!(widget.focused_in(PaneKind::Options).is_empty());
                prop_assert!(widget.focused_in(PaneKind::Chosen).is_empty());
            }
        }
    }
}
