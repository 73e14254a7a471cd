use crossdom::{display_width, longest_width, MonospaceMetrics, TextMetrics};

#[test]
fn test_display_width_wide_chars() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("日本"), 4);
}

#[test]
fn test_monospace_metrics_scale_with_font() {
    let metrics = MonospaceMetrics::new(0.5);
    assert_eq!(metrics.text_width("abcd", 12), 24.0);
    assert_eq!(metrics.text_width("abcd", 20), 40.0);
}

#[test]
fn test_multiline_measures_widest_line() {
    let metrics = MonospaceMetrics::new(1.0);
    assert_eq!(metrics.text_width("ab\nabcdef\nabc", 10), 60.0);
}

#[test]
fn test_longest_width() {
    let metrics = MonospaceMetrics::new(1.0);
    assert_eq!(longest_width(&metrics, ["a", "abc", "ab"], 10), 30.0);
    assert_eq!(longest_width(&metrics, std::iter::empty::<&str>(), 10), 0.0);
}
