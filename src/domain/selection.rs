// ============================================================
// Layer 3 - Selection and BrowseView Domain Types
// ============================================================
// Models three dependent dropdowns. A Selection is what the
// user asked for; a BrowseView is what the dropdowns actually
// show once stale or missing choices have been resolved.

use serde::{Deserialize, Serialize};

use crate::domain::tag::NamedValue;

/// Values requested at each level. `None` means "not chosen yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub section: Option<String>,
    pub topic: Option<String>,
    pub sub_topic: Option<String>,
}

impl Selection {
    pub fn new(
        section: Option<String>,
        topic: Option<String>,
        sub_topic: Option<String>,
    ) -> Self {
        Self { section, topic, sub_topic }
    }
}

/// One resolved dropdown: its options and the chosen entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dropdown {
    pub options: Vec<String>,
    pub chosen: Option<NamedValue>,
}

impl Dropdown {
    pub fn chosen_value(&self) -> Option<&str> {
        self.chosen.as_ref().map(|c| c.value.as_str())
    }
}

/// The three dropdowns after cascading resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseView {
    pub section: Dropdown,
    pub topic: Dropdown,
    pub sub_topic: Dropdown,
}
