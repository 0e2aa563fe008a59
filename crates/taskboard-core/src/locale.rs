//! Active language and text direction.
//!
//! The direction is a pure function of the language code: Arabic renders
//! right-to-left, everything else left-to-right. A [`LocaleBinding`] mirrors
//! the current language onto the document root and keeps it in sync with
//! [`LanguageEvents`] for as long as the binding lives.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::listeners::{Listeners, SubscriptionId};
use crate::storage::KeyValueStore;

/// Storage key of the persisted language code.
pub const LANGUAGE_KEY: &str = "language";

/// Language used when nothing has been persisted.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// Direction used to render `language_code`.
    #[must_use]
    pub fn for_language(language_code: &str) -> Self {
        if language_code == "ar" {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    /// Value of the `dir` attribute and of the class flag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    #[must_use]
    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language code together with its derived direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleState {
    language_code: String,
    direction: Direction,
}

impl LocaleState {
    pub fn new(language_code: impl Into<String>) -> Self {
        let language_code = language_code.into();
        let direction = Direction::for_language(&language_code);
        Self {
            language_code,
            direction,
        }
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Writes `dir`, `lang` and the `rtl`/`ltr` class flags onto `root`.
    pub fn apply_to(&self, root: &dyn DocumentRoot) {
        root.set_attribute("dir", self.direction.as_str());
        root.set_attribute("lang", &self.language_code);
        root.set_class_flag("rtl", self.direction == Direction::Rtl);
        root.set_class_flag("ltr", self.direction == Direction::Ltr);
    }
}

/// The document root element the locale is mirrored onto.
pub trait DocumentRoot {
    /// Sets attribute `name` to `value`.
    fn set_attribute(&self, name: &str, value: &str);

    /// Adds `class` when `enabled`, removes it otherwise.
    fn set_class_flag(&self, class: &str, enabled: bool);
}

/// Source of language-change events.
pub struct LanguageEvents {
    current: RefCell<String>,
    listeners: Listeners<String>,
}

impl LanguageEvents {
    pub fn new(language_code: impl Into<String>) -> Self {
        Self {
            current: RefCell::new(language_code.into()),
            listeners: Listeners::new(),
        }
    }

    /// The most recently selected language code.
    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    /// Switches language and notifies every listener.
    pub fn change_language(&self, language_code: &str) {
        *self.current.borrow_mut() = language_code.to_string();
        self.listeners.emit(&language_code.to_string());
    }

    /// Number of registered change listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Keeps a document root in sync with the active language.
///
/// Mounting applies the current language immediately and registers exactly
/// one change listener; dropping the binding deregisters it.
pub struct LocaleBinding {
    events: Rc<LanguageEvents>,
    subscription: SubscriptionId,
    state: Rc<RefCell<LocaleState>>,
}

impl LocaleBinding {
    pub fn mount(events: Rc<LanguageEvents>, root: Rc<dyn DocumentRoot>) -> Self {
        let initial = LocaleState::new(events.current());
        initial.apply_to(root.as_ref());
        let state = Rc::new(RefCell::new(initial));

        let tracked = Rc::clone(&state);
        let subscription = events.listeners.subscribe(Rc::new(move |code: &String| {
            let next = LocaleState::new(code.clone());
            next.apply_to(root.as_ref());
            tracing::debug!(language = %code, direction = %next.direction(), "Applied locale");
            *tracked.borrow_mut() = next;
        }));

        Self {
            events,
            subscription,
            state,
        }
    }

    /// The locale most recently applied to the document root.
    pub fn state(&self) -> LocaleState {
        self.state.borrow().clone()
    }
}

impl Drop for LocaleBinding {
    fn drop(&mut self) {
        self.events.listeners.unsubscribe(self.subscription);
    }
}

/// Reads the persisted language code, falling back to [`DEFAULT_LANGUAGE`].
pub fn restore_language(storage: &dyn KeyValueStore) -> String {
    storage
        .get(LANGUAGE_KEY)
        .filter(|code| !code.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Persists `language_code`. Failures are logged and otherwise ignored.
pub fn persist_language(storage: &dyn KeyValueStore, language_code: &str) {
    if let Err(e) = storage.set(LANGUAGE_KEY, language_code) {
        tracing::warn!(error = %e, "Failed to persist language");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use proptest::prelude::*;
    use std::collections::{BTreeMap, BTreeSet};

    #[derive(Default)]
    struct RecordingRoot {
        attributes: RefCell<BTreeMap<String, String>>,
        classes: RefCell<BTreeSet<String>>,
        writes: RefCell<usize>,
    }

    impl RecordingRoot {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attributes.borrow().get(name).cloned()
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }
    }

    impl DocumentRoot for RecordingRoot {
        fn set_attribute(&self, name: &str, value: &str) {
            *self.writes.borrow_mut() += 1;
            self.attributes
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
        }

        fn set_class_flag(&self, class: &str, enabled: bool) {
            let mut classes = self.classes.borrow_mut();
            if enabled {
                classes.insert(class.to_string());
            } else {
                classes.remove(class);
            }
        }
    }

    #[test]
    fn test_mount_applies_current_language() {
        let events = Rc::new(LanguageEvents::new("ar"));
        let root = Rc::new(RecordingRoot::default());
        let binding = LocaleBinding::mount(Rc::clone(&events), root.clone());

        assert_eq!(root.attribute("dir").as_deref(), Some("rtl"));
        assert_eq!(root.attribute("lang").as_deref(), Some("ar"));
        assert!(root.has_class("rtl"));
        assert!(!root.has_class("ltr"));
        assert_eq!(binding.state().direction(), Direction::Rtl);
    }

    #[test]
    fn test_language_change_is_mirrored() {
        let events = Rc::new(LanguageEvents::new("ar"));
        let root = Rc::new(RecordingRoot::default());
        let binding = LocaleBinding::mount(Rc::clone(&events), root.clone());

        events.change_language("en");

        assert_eq!(root.attribute("dir").as_deref(), Some("ltr"));
        assert_eq!(root.attribute("lang").as_deref(), Some("en"));
        assert!(root.has_class("ltr"));
        assert!(!root.has_class("rtl"));
        assert_eq!(binding.state().language_code(), "en");
    }

    #[test]
    fn test_one_listener_per_mount() {
        let events = Rc::new(LanguageEvents::new("en"));
        let root: Rc<dyn DocumentRoot> = Rc::new(RecordingRoot::default());

        let first = LocaleBinding::mount(Rc::clone(&events), Rc::clone(&root));
        assert_eq!(events.listener_count(), 1);
        drop(first);
        assert_eq!(events.listener_count(), 0);

        for _ in 0..3 {
            let binding = LocaleBinding::mount(Rc::clone(&events), Rc::clone(&root));
            assert_eq!(events.listener_count(), 1);
            drop(binding);
        }
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_unmounted_binding_stops_writing() {
        let events = Rc::new(LanguageEvents::new("en"));
        let root = Rc::new(RecordingRoot::default());
        drop(LocaleBinding::mount(Rc::clone(&events), root.clone()));

        events.change_language("ar");
        assert_eq!(root.attribute("dir").as_deref(), Some("ltr"));
        assert_eq!(events.current(), "ar");
    }

    #[test]
    fn test_same_language_twice_is_idempotent() {
        let events = Rc::new(LanguageEvents::new("en"));
        let root = Rc::new(RecordingRoot::default());
        let _binding = LocaleBinding::mount(Rc::clone(&events), root.clone());

        events.change_language("ar");
        let attributes = root.attributes.borrow().clone();
        let classes = root.classes.borrow().clone();

        events.change_language("ar");
        assert_eq!(*root.attributes.borrow(), attributes);
        assert_eq!(*root.classes.borrow(), classes);
        assert_eq!(*root.writes.borrow(), 6);
    }

    #[test]
    fn test_language_persistence() {
        let storage = MemoryStore::new();
        assert_eq!(restore_language(&storage), DEFAULT_LANGUAGE);

        persist_language(&storage, "ar");
        assert_eq!(restore_language(&storage), "ar");

        storage.set(LANGUAGE_KEY, "  ").unwrap();
        assert_eq!(restore_language(&storage), DEFAULT_LANGUAGE);
    }

    proptest! {
        #[test]
        fn prop_only_arabic_is_rtl(code in "[a-zA-Z-]{0,8}") {
            let expected = if code == "ar" { Direction::Rtl } else { Direction::Ltr };
            prop_assert_eq!(Direction::for_language(&code), expected);
            prop_assert_eq!(Direction::for_language(&code), Direction::for_language(&code));
        }
    }
}
