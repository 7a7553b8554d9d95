// ============================================================
// Layer 2 - Browse Use Case
// ============================================================
// Resolves three dependent dropdowns against a Catalog:
//
//   Step 1: section options   = sections(index)
//   Step 2: topic options     = topics(index, chosen section)
//   Step 3: sub-topic options = sub_topics(index, section, topic)
//
// At each level the requested value is kept if it is one of the
// options; otherwise (not requested, or stale after a parent
// changed) the first option is chosen. A level with no options
// has nothing chosen, and neither do the levels below it.

use crate::application::catalog::Catalog;
use crate::data::lookup;
use crate::domain::selection::{BrowseView, Dropdown, Selection};
use crate::domain::tag::NamedValue;

pub struct BrowseUseCase<'a> {
    catalog: &'a Catalog,
}

impl<'a> BrowseUseCase<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn browse(&self, selection: &Selection) -> BrowseView {
        let catalog = self.catalog;

        // Sections carry no label in the document; show the value
        let section = resolve("section", catalog.sections(), selection.section.as_deref(), |v| {
            NamedValue::new(v, None)
        });

        let topic = match section.chosen_value() {
            Some(s) => resolve("topic", lookup::topics(catalog.index(), s), selection.topic.as_deref(), |v| {
                let label = catalog.topic_label(s, v);
                NamedValue::new(v, label)
            }),
            None => Dropdown::default(),
        };

        let sub_topic = match (section.chosen_value(), topic.chosen_value()) {
            (Some(s), Some(t)) => resolve(
                "sub-topic",
                lookup::sub_topics(catalog.index(), s, t),
                selection.sub_topic.as_deref(),
                |v| {
                    let label = catalog.sub_topic_label(s, t, v);
                    NamedValue::new(v, label)
                },
            ),
            _ => Dropdown::default(),
        };

        BrowseView { section, topic, sub_topic }
    }
}

/// Pick the requested option, or fall back to the first one.
fn resolve(
    level: &str,
    options: Vec<String>,
    requested: Option<&str>,
    describe: impl Fn(&str) -> NamedValue,
) -> Dropdown {
    let chosen = match requested {
        Some(want) if options.iter().any(|o| o == want) => Some(want),
        Some(want) => {
            tracing::debug!("Requested {level} '{want}' is not available; using first option");
            options.first().map(String::as_str)
        }
        None => options.first().map(String::as_str),
    }
    .map(&describe);

    Dropdown { options, chosen }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::new(json!({"question_tags": {
            "S1": [
                {"topic_name": {"value": "t2", "label": "Topic Two"}, "sub_topics": [
                    {"sub_topic_name": {"value": "b", "label": "B"}},
                    {"sub_topic_name": {"value": "a", "label": "A"}}
                ]},
                {"topic_name": {"value": "t1", "label": "Topic One"}, "sub_topics": []}
            ],
            "S2": []
        }}))
    }

    #[test]
    fn test_defaults_to_first_options() {
        let catalog = catalog();
        let view = BrowseUseCase::new(&catalog).browse(&Selection::default());

        assert_eq!(view.section.options, vec!["S1", "S2"]);
        assert_eq!(view.section.chosen_value(), Some("S1"));
        assert_eq!(view.topic.chosen.unwrap().display(), "Topic One");
        // t1 has no sub-topics
        assert!(view.sub_topic.options.is_empty());
        assert!(view.sub_topic.chosen.is_none());
    }

    #[test]
    fn test_explicit_selection_with_labels() {
        let catalog = catalog();
        let selection = Selection::new(Some("S1".into()), Some("t2".into()), Some("b".into()));
        let view = BrowseUseCase::new(&catalog).browse(&selection);

        assert_eq!(view.topic.chosen, Some(NamedValue::new("t2", Some("Topic Two".into()))));
        assert_eq!(view.sub_topic.options, vec!["a", "b"]);
        assert_eq!(view.sub_topic.chosen, Some(NamedValue::new("b", Some("B".into()))));
    }

    #[test]
    fn test_stale_selection_falls_back() {
        let catalog = catalog();
        let selection = Selection::new(Some("S1".into()), Some("gone".into()), Some("b".into()));
        let view = BrowseUseCase::new(&catalog).browse(&selection);

        // Topic falls back to t1, whose sub-topic list is empty
        assert_eq!(view.topic.chosen_value(), Some("t1"));
        assert!(view.sub_topic.chosen.is_none());
    }

    #[test]
    fn test_empty_section_stops_cascade() {
        let catalog = catalog();
        let selection = Selection::new(Some("S2".into()), None, None);
        let view = BrowseUseCase::new(&catalog).browse(&selection);

        assert_eq!(view.section.chosen_value(), Some("S2"));
        assert_eq!(view.topic, Dropdown::default());
        assert_eq!(view.sub_topic, Dropdown::default());
    }
}
