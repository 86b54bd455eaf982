use dioxus::desktop::tao::window::Theme as WindowTheme;
use dioxus::desktop::DesktopContext;
use dioxus::prelude::*;
use jpm_ui::{Button, ButtonVariant, ThemeProvider, ThemeStore, DEFAULT_STORAGE_KEY, DEFAULT_THEME};

use crate::context::launch_config;
use crate::theme::GLOBAL_STYLES;

/// Path of the console icon, served from the window's resource directory
pub const ICON_SRC: &str = "/icon.svg";

/// Display width of the console icon
pub const ICON_WIDTH: &str = "300px";

/// Label of the scaffold's button
pub const BUTTON_LABEL: &str = "Click me";

/// Revisions of the console scaffold.
///
/// - `Initial` - centered button only
/// - `WithIcon` - icon above the button
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum Revision {
    Initial,
    #[default]
    WithIcon,
}

impl Revision {
    /// Whether this revision renders the icon
    pub fn shows_icon(&self) -> bool {
        matches!(self, Revision::WithIcon)
    }
}

/// Whether the host asks for a dark appearance. Without a reported window
/// theme the console stays dark.
pub fn prefers_dark(window_theme: Option<WindowTheme>) -> bool {
    !matches!(window_theme, Some(WindowTheme::Light))
}

/// Reads the window's light/dark setting once, at mount.
///
/// Outside a desktop window (server rendering, tests) no theme is reported.
fn use_prefers_dark() -> bool {
    use_hook(|| {
        let window_theme =
            try_consume_context::<DesktopContext>().map(|desktop| desktop.window.theme());
        prefers_dark(window_theme)
    })
}

/// Root application component.
///
/// Provides global styles and renders the scaffold chosen at launch.
#[component]
pub fn App() -> Element {
    let config = use_hook(launch_config);
    let store = config.theme_store();

    rsx! {
        style { {GLOBAL_STYLES} }
        Scaffold { revision: config.revision, store: store }
    }
}

/// Properties for the Scaffold component
#[derive(Clone, PartialEq, Props)]
pub struct ScaffoldProps {
    /// Which revision to render
    #[props(default)]
    pub revision: Revision,
    /// Theme persistence; `None` keeps the theme in memory
    #[props(default)]
    pub store: Option<ThemeStore>,
}

/// Theme scope around a full-height centered column holding the
/// (revision-dependent) icon and a decorative button.
#[component]
pub fn Scaffold(props: ScaffoldProps) -> Element {
    let host_prefers_dark = use_prefers_dark();

    rsx! {
        ThemeProvider {
            default_theme: DEFAULT_THEME,
            storage_key: DEFAULT_STORAGE_KEY,
            store: props.store.clone(),
            prefers_dark: host_prefers_dark,
            div { class: "flex min-h-svh flex-col items-center justify-center",
                if props.revision.shows_icon() {
                    img { src: ICON_SRC, width: ICON_WIDTH }
                }
                Button { variant: ButtonVariant::Default, "{BUTTON_LABEL}" }
            }
        }
    }
}
