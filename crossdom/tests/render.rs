use crossdom::{px, to_html, Element, Style};

#[test]
fn test_render_attributes_in_stable_order() {
    let el = Element::li()
        .id("item")
        .class("a")
        .class("b")
        .attr("data-index", "2")
        .attr("aria-selected", "true")
        .style(Style::new().set("height", px(15.0)))
        .text_content("Label");

    assert_eq!(
        to_html(&el),
        r#"<li id="item" class="a b" aria-selected="true" data-index="2" style="height: 15px">Label</li>"#
    );
}

#[test]
fn test_render_hidden_appends_display_none() {
    let el = Element::select()
        .id("s")
        .style(Style::new().set("width", "10px"))
        .hidden(true);
    assert_eq!(
        to_html(&el),
        r#"<select id="s" style="width: 10px; display: none"></select>"#
    );
}

#[test]
fn test_render_void_and_text_nodes() {
    let el = Element::div()
        .id("d")
        .child(Element::button("go").id("b"))
        .child(Element::text("a < b & c"));
    assert_eq!(
        to_html(&el),
        r#"<div id="d"><input id="b" type="button" value="go">a &lt; b &amp; c</div>"#
    );
}

#[test]
fn test_render_escapes_attribute_quotes() {
    let el = Element::a("/edit?id=\"1\"").id("l");
    assert_eq!(to_html(&el), r#"<a id="l" href="/edit?id=&quot;1&quot;"></a>"#);
}

#[test]
fn test_px_formatting() {
    assert_eq!(px(15.0), "15px");
    assert_eq!(px(16.25), "16.25px");
}
