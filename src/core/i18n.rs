//! Localization Service.
//!
//! Lifecycle of the current language: default on load, optionally overridden
//! by the persisted preference, then switched at runtime. Components that
//! need to react to a switch register an observer with
//! [`Localizer::subscribe`].

use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::config::{self, TAG_KEY_PREFIX};
use crate::core::catalog::Catalog;
use crate::core::error::TranslationError;
use crate::core::prefs::{self, PreferenceStore};
use crate::models::{Language, Tag};

/// One flat key → string table per language.
#[derive(Clone, Debug, Default)]
pub struct Translations {
    en: HashMap<String, String>,
    zh: HashMap<String, String>,
}

impl Translations {
    pub fn new(en: HashMap<String, String>, zh: HashMap<String, String>) -> Self {
        Self { en, zh }
    }

    pub fn from_toml(en: &str, zh: &str) -> Result<Self, TranslationError> {
        Ok(Self {
            en: parse_table(Language::En, en)?,
            zh: parse_table(Language::Zh, zh)?,
        })
    }

    /// The compiled-in tables; a malformed table is replaced by an empty one.
    pub fn bundled() -> Self {
        let load = |language, source| {
            parse_table(language, source).unwrap_or_else(|err| {
                tracing::error!(%err, "translations unusable, rendering raw keys");
                HashMap::new()
            })
        };
        Self {
            en: load(Language::En, config::EN_TOML),
            zh: load(Language::Zh, config::ZH_TOML),
        }
    }

    pub fn table(&self, language: Language) -> &HashMap<String, String> {
        match language {
            Language::En => &self.en,
            Language::Zh => &self.zh,
        }
    }

    /// Every key known to any language, sorted.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.en
            .keys()
            .chain(self.zh.keys())
            .map(String::as_str)
            .collect()
    }
}

fn parse_table(language: Language, source: &str) -> Result<HashMap<String, String>, TranslationError> {
    toml::from_str(source).map_err(|source| TranslationError::Parse { language, source })
}

/// Observer notified with the new language after a switch.
pub type LanguageListener = Rc<dyn Fn(Language)>;

/// Owner of the current language.
pub struct Localizer {
    translations: Translations,
    current: Language,
    store: Box<dyn PreferenceStore>,
    listeners: Vec<LanguageListener>,
}

impl Localizer {
    /// Start in the default language without consulting the store.
    pub fn new(translations: Translations, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            translations,
            current: config::DEFAULT_LANGUAGE,
            store,
            listeners: Vec::new(),
        }
    }

    /// Start in the persisted language when one is stored and valid.
    pub fn restore(translations: Translations, store: Box<dyn PreferenceStore>) -> Self {
        let mut localizer = Self::new(translations, store);
        localizer.current = prefs::load_language(localizer.store.as_ref(), config::DEFAULT_LANGUAGE);
        localizer
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.translations
            .table(self.current)
            .get(key)
            .map(String::as_str)
    }

    /// Localized string for `key`, or the key itself when untranslated.
    pub fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    /// Translate `key` and substitute `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.translate(key), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }

    pub fn tag_name(&self, tag: &Tag) -> String {
        self.lookup(&format!("{}{}", TAG_KEY_PREFIX, tag.id))
            .map(str::to_string)
            .unwrap_or_else(|| tag.name.clone())
    }

    /// Localized name for a tag id; unknown ids render as themselves.
    pub fn tag_label(&self, tag_id: &str, catalog: &Catalog) -> String {
        match catalog.find_tag(tag_id) {
            Some(tag) => self.tag_name(tag),
            None => self
                .lookup(&format!("{}{}", TAG_KEY_PREFIX, tag_id))
                .unwrap_or(tag_id)
                .to_string(),
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(Language) + 'static) {
        self.listeners.push(Rc::new(listener));
    }

    /// Switch and persist the language.
    ///
    /// Observers run only when the language actually changed; the preference
    /// is written either way. Returns whether the language changed.
    pub fn switch_language(&mut self, language: Language) -> bool {
        prefs::save_language(self.store.as_mut(), language);
        if self.current == language {
            return false;
        }
        self.current = language;
        tracing::info!(%language, "language switched");
        for listener in &self.listeners {
            listener(language);
        }
        true
    }
}
