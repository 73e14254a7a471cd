//! Searchable single selects on edit forms.
//!
//! Every select inside `.edit-form` with no options gets a `__None`
//! placeholder option and is disabled. Single selects are then marked for
//! the searchable dropdown and given a placeholder built from their label;
//! multi-selects are left to the cross-select.

use crossdom::{find_element, find_element_mut, select_all, Element, Selector};

/// Value of the placeholder option injected into empty selects.
pub const NONE_VALUE: &str = "__None";
pub const NO_RESULTS_TEXT: &str = "No results matched";
pub const PLACEHOLDER_ATTR: &str = "data-placeholder";

const FORM_SELECTS: &str = ".edit-form select";

/// Text of the `<label for=...>` naming the control `id`, or an empty
/// string if there is none.
pub fn label_for(root: &Element, id: &str) -> String {
    let Some(selector) = Selector::parse(&format!(r#"label[for="{id}"]"#)) else {
        return String::new();
    };
    select_all(root, &selector)
        .first()
        .and_then(|label_id| find_element(root, label_id))
        .map(|label| label.text_value().trim().to_string())
        .unwrap_or_default()
}

/// Whether a select's only option is the injected placeholder.
fn only_placeholder(select: &Element) -> bool {
    let options = select.child_elements();
    options.len() == 1 && options[0].get_attr("value") == Some(NONE_VALUE)
}

/// Prepare the edit-form selects under `root`. Returns how many single
/// selects were styled.
pub fn style_selects(root: &mut Element) -> usize {
    let Some(selector) = Selector::parse(FORM_SELECTS) else {
        return 0;
    };

    let targets: Vec<(String, String)> = select_all(root, &selector)
        .into_iter()
        .map(|id| {
            let label = label_for(root, &id);
            (id, label)
        })
        .collect();

    let mut styled = 0;
    for (id, label) in targets {
        let Some(select) = find_element_mut(root, &id) else {
            continue;
        };

        if select.child_elements().is_empty() {
            select.push_child(
                Element::option("")
                    .id(format!("{id}-none"))
                    .attr("value", NONE_VALUE),
            );
        }

        if only_placeholder(select) {
            select.set_attr("disabled", "disabled");
            if !select.has_attr(PLACEHOLDER_ATTR) {
                select.set_attr(PLACEHOLDER_ATTR, format!("No {label} available to choose"));
            }
        }
        if select.has_attr("multiple") {
            continue;
        }
        if !select.has_attr(PLACEHOLDER_ATTR) {
            select.set_attr(PLACEHOLDER_ATTR, format!("Choose a {label}..."));
        }

        select.set_attr("data-no-results-text", NO_RESULTS_TEXT);
        select.set_attr("data-allow-single-deselect", "true");
        select.add_class("chzn-done");
        styled += 1;
    }

    log::debug!("[styled_select] styled {} selects", styled);
    styled
}
