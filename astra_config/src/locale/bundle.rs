/// Contains the message fragment model and the merge that flattens an
/// ordered fragment list into one key to template map
use crate::error::LocaleError;
use std::collections::HashMap;

/// One source file's worth of message keys for a locale. Templates may carry
/// interpolation placeholders like `{amount}`; they pass through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageFragment {
    pub name: String,
    pub messages: HashMap<String, String>,
}

impl MessageFragment {
    pub fn new(name: &str, messages: HashMap<String, String>) -> MessageFragment {
        MessageFragment {
            name: name.to_string(),
            messages,
        }
    }

    /// Parses a fragment from a flat JSON object of string keys and values.
    pub fn from_json(name: &str, data: &str) -> Result<MessageFragment, LocaleError> {
        let messages = serde_json::from_str(data)
            .map_err(|e| LocaleError::InvalidFragment(name.to_string(), e))?;

        Ok(MessageFragment::new(name, messages))
    }
}

/// The assembled message set for one locale. Keeps both the flattened map
/// and the fragments it was merged from, since some consumers want the
/// itemized form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleBundle {
    locale: String,
    fragments: Vec<MessageFragment>,
    messages: HashMap<String, String>,
}

impl LocaleBundle {
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn fragments(&self) -> &[MessageFragment] {
        &self.fragments
    }

    pub fn messages(&self) -> &HashMap<String, String> {
        &self.messages
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(|template| template.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Flattens `fragments` in the given order. When two fragments define the
/// same key the later one wins, so brand override fragments belong at the
/// end of the list.
pub fn assemble(locale: &str, fragments: Vec<MessageFragment>) -> LocaleBundle {
    let mut messages = HashMap::new();
    for fragment in &fragments {
        for (key, template) in &fragment.messages {
            messages.insert(key.clone(), template.clone());
        }
    }

    LocaleBundle {
        locale: locale.to_string(),
        fragments,
        messages,
    }
}
