//! Theme scope component and context.
//!
//! ## Usage
//!
//! ```ignore
//! // At the root
//! ThemeProvider {
//!     default_theme: Theme::Dark,
//!     storage_key: "vite-ui-theme",
//!     store: ThemeStore::new(data_dir),
//!     Page {}
//! }
//!
//! // In descendants
//! let theme = use_theme();
//! theme.set_theme(Theme::Light);
//! ```

use dioxus::prelude::*;

use super::{Theme, ThemeStore, DEFAULT_STORAGE_KEY};

/// Theme state shared with every component under a [`ThemeProvider`]
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    storage_key: String,
    store: Option<ThemeStore>,
    prefers_dark: bool,
}

impl ThemeContext {
    /// Selected theme (may be `System`)
    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    /// Selected theme with `System` resolved
    pub fn resolved(&self) -> Theme {
        self.theme().resolve(self.prefers_dark)
    }

    /// Key the selection is persisted under
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Selects `theme` and persists it if the provider has a store.
    ///
    /// The selection changes even when persisting fails.
    pub fn set_theme(&self, theme: Theme) {
        persist_theme(self.store.as_ref(), &self.storage_key, theme);
        let mut signal = self.theme;
        signal.set(theme);
    }
}

/// Hook to access the nearest [`ThemeProvider`]'s context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Theme selected at mount: the stored value if any, else `default_theme`.
pub fn initial_theme(store: Option<&ThemeStore>, storage_key: &str, default_theme: Theme) -> Theme {
    let Some(store) = store else {
        return default_theme;
    };

    match store.load(storage_key) {
        Ok(Some(theme)) => theme,
        Ok(None) => default_theme,
        Err(e) => {
            tracing::warn!(
                storage_key,
                "Failed to read stored theme, using {}: {}",
                default_theme,
                e
            );
            default_theme
        }
    }
}

fn persist_theme(store: Option<&ThemeStore>, storage_key: &str, theme: Theme) {
    let Some(store) = store else {
        return;
    };

    if let Err(e) = store.save(storage_key, theme) {
        tracing::warn!(storage_key, %theme, "Failed to persist theme: {}", e);
    }
}

/// Properties for the ThemeProvider component
#[derive(Clone, PartialEq, Props)]
pub struct ThemeProviderProps {
    /// Theme used when nothing is stored
    #[props(default)]
    pub default_theme: Theme,
    /// Key the selection is persisted under
    #[props(default = DEFAULT_STORAGE_KEY.to_string(), into)]
    pub storage_key: String,
    /// Where selections are persisted; `None` keeps them in memory only
    #[props(default)]
    pub store: Option<ThemeStore>,
    /// Host preference used to resolve `Theme::System`
    #[props(default = true)]
    pub prefers_dark: bool,
    /// Themed content
    pub children: Element,
}

/// Establishes the appearance mode for all nested content.
///
/// Renders a single `div` scope carrying the resolved theme class, so
/// stylesheet rules under `.dark` / `.light` apply to the children.
#[component]
pub fn ThemeProvider(props: ThemeProviderProps) -> Element {
    let theme = use_signal(|| {
        initial_theme(props.store.as_ref(), &props.storage_key, props.default_theme)
    });

    let context = use_context_provider(|| ThemeContext {
        theme,
        storage_key: props.storage_key.clone(),
        store: props.store.clone(),
        prefers_dark: props.prefers_dark,
    });

    let selected = context.theme();
    let scope_class = selected.class(props.prefers_dark);
    let storage_key = context.storage_key();

    rsx! {
        div {
            class: "theme-scope {scope_class}",
            "data-theme": "{selected}",
            "data-storage-key": "{storage_key}",
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Clone, PartialEq, Props)]
    struct HarnessProps {
        store: Option<ThemeStore>,
        default_theme: Theme,
        prefers_dark: bool,
    }

    fn harness(props: HarnessProps) -> Element {
        rsx! {
            ThemeProvider {
                default_theme: props.default_theme,
                store: props.store.clone(),
                prefers_dark: props.prefers_dark,
                p { "content" }
            }
        }
    }

    fn render(store: Option<ThemeStore>, default_theme: Theme, prefers_dark: bool) -> String {
        let props = HarnessProps {
            store,
            default_theme,
            prefers_dark,
        };
        let mut dom = VirtualDom::new_with_props(harness, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn initial_theme_without_store_is_default() {
        assert_eq!(initial_theme(None, "k", Theme::Light), Theme::Light);
    }

    #[test]
    fn initial_theme_prefers_stored_value() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::new(dir.path());
        store.save("k", Theme::System).unwrap();

        assert_eq!(initial_theme(Some(&store), "k", Theme::Dark), Theme::System);
        assert_eq!(initial_theme(Some(&store), "other", Theme::Dark), Theme::Dark);
    }

    #[test]
    fn initial_theme_survives_broken_store() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::new(dir.path());
        fs::write(store.path(), "{").unwrap();

        assert_eq!(initial_theme(Some(&store), "k", Theme::Dark), Theme::Dark);
    }

    #[test]
    fn persist_writes_through_store() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::new(dir.path());

        persist_theme(Some(&store), "k", Theme::Light);
        assert_eq!(store.load("k").unwrap(), Some(Theme::Light));

        persist_theme(None, "k", Theme::Dark);
        assert_eq!(store.load("k").unwrap(), Some(Theme::Light));
    }

    #[test]
    fn renders_single_scope_with_default_theme() {
        let html = render(None, Theme::Dark, true);

        assert!(html.starts_with("<div"));
        assert_eq!(html.matches("data-theme=").count(), 1);
        assert!(html.contains(r#"class="theme-scope dark""#));
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains(r#"data-storage-key="vite-ui-theme""#));
        assert!(html.contains("<p>content</p>"));
    }

    #[test]
    fn renders_stored_theme() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::new(dir.path());
        store.save(DEFAULT_STORAGE_KEY, Theme::Light).unwrap();

        let html = render(Some(store), Theme::Dark, true);
        assert!(html.contains(r#"class="theme-scope light""#));
        assert!(html.contains(r#"data-theme="light""#));
    }

    #[test]
    fn system_theme_resolves_scope_class() {
        let html = render(None, Theme::System, false);
        assert!(html.contains(r#"class="theme-scope light""#));
        assert!(html.contains(r#"data-theme="system""#));
    }

    #[test]
    fn descendants_read_context() {
        #[component]
        fn Reader() -> Element {
            let context = use_theme();
            let selected = context.theme();
            let resolved = context.resolved();
            let key = context.storage_key().to_string();
            rsx! { span { "{selected}/{resolved}/{key}" } }
        }

        fn app() -> Element {
            rsx! {
                ThemeProvider { default_theme: Theme::System, Reader {} }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("<span>system/dark/vite-ui-theme</span>"));
    }

    #[derive(Clone, PartialEq, Props)]
    struct SwitchingProps {
        store: ThemeStore,
    }

    /// Selects the light theme once, when it mounts.
    #[component]
    fn SwitchToLight() -> Element {
        let context = use_theme();
        use_hook(move || context.set_theme(Theme::Light));
        rsx! { p { "content" } }
    }

    fn switching_app(props: SwitchingProps) -> Element {
        rsx! {
            ThemeProvider { store: props.store.clone(), SwitchToLight {} }
        }
    }

    fn render_after_switch(store: ThemeStore) -> String {
        let mut dom = VirtualDom::new_with_props(switching_app, SwitchingProps { store });
        dom.rebuild_in_place();
        dom.render_immediate(&mut NoOpMutations);
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn set_theme_persists_and_rerenders_scope() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::new(dir.path());

        let html = render_after_switch(store.clone());

        assert!(html.contains(r#"class="theme-scope light""#));
        assert!(html.contains(r#"data-theme="light""#));
        assert_eq!(store.load(DEFAULT_STORAGE_KEY).unwrap(), Some(Theme::Light));
    }

    #[test]
    fn set_theme_switches_even_when_persisting_fails() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::new(dir.path());
        fs::write(store.path(), "not json").unwrap();

        let html = render_after_switch(store.clone());

        assert!(html.contains(r#"class="theme-scope light""#));
        assert!(html.contains(r#"data-theme="light""#));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json");
    }
}
