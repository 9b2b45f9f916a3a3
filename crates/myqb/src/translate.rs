//! Seam to the message translation collaborator.
//!
//! myqb never renders user-facing messages itself. Errors expose a message key and
//! a set of `::placeholder::` substitutions; a [`Translate`] implementation turns
//! them into text for a locale.

use indexmap::IndexMap;

/// Render a message key for a locale.
pub trait Translate {
    /// Translate `key` into `locale` (`None` = translator default), applying `params`.
    fn translate(&self, key: &str, locale: Option<&str>, params: &IndexMap<String, String>)
    -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, Option<&str>, &IndexMap<String, String>) -> String,
{
    fn translate(
        &self,
        key: &str,
        locale: Option<&str>,
        params: &IndexMap<String, String>,
    ) -> String {
        self(key, locale, params)
    }
}

/// A translator backed by an in-memory `key -> template` table.
///
/// Unknown keys render as the key itself. Locale is ignored.
#[derive(Debug, Clone, Default)]
pub struct StaticTranslator {
    templates: IndexMap<String, String>,
}

impl StaticTranslator {
    /// Create an empty translator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template for a key.
    pub fn with(mut self, key: &str, template: &str) -> Self {
        self.templates.insert(key.to_string(), template.to_string());
        self
    }
}

impl Translate for StaticTranslator {
    fn translate(
        &self,
        key: &str,
        _locale: Option<&str>,
        params: &IndexMap<String, String>,
    ) -> String {
        let mut out = self
            .templates
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string());
        for (placeholder, value) in params {
            out = out.replace(placeholder.as_str(), value);
        }
        out
    }
}
