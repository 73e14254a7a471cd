//! Numbered sections appended to a page on demand.
//!
//! The counter belongs to the list, so two lists on one page number
//! independently.

use crossdom::{find_element_mut, Element};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList {
    container_id: String,
    title: String,
    next: u32,
}

impl SectionList {
    /// Sections are appended to the element `container_id` and titled
    /// `"{title} {n}"`, numbering from 1.
    pub fn new(container_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            title: title.into(),
            next: 1,
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Number the next section will get.
    pub fn next_number(&self) -> u32 {
        self.next
    }

    /// How many sections have been appended.
    pub fn count(&self) -> u32 {
        self.next - 1
    }

    /// Wrap `fragment` in a titled fieldset and append it to the container.
    /// Returns the new fieldset's id, or None if the container is missing
    /// (the counter does not advance).
    pub fn append(&mut self, root: &mut Element, fragment: Element) -> Option<String> {
        let container = find_element_mut(root, &self.container_id)?;
        let number = self.next;
        let id = format!("{}-section-{}", self.container_id, number);
        container.push_child(
            Element::fieldset()
                .id(id.clone())
                .child(Element::legend(format!("{} {}", self.title, number)))
                .child(fragment),
        );
        self.next += 1;
        log::debug!("[sections] appended '{}'", id);
        Some(id)
    }
}
