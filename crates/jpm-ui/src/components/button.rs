//! Button Component
//!
//! The console's button primitive. Visual style is picked by name:
//! - Default: solid primary action
//! - Destructive: dangerous or irreversible actions
//! - Outline / Secondary / Ghost: lower-emphasis actions
//! - Link: rendered like an inline link

use std::fmt;

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid primary fill
    #[default]
    Default,
    /// Danger colouring
    Destructive,
    /// Transparent with a border
    Outline,
    /// Muted fill
    Secondary,
    /// No fill until hovered
    Ghost,
    /// Underlined text, no chrome
    Link,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Destructive => "btn-destructive",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Link => "btn-link",
        }
    }

    /// Returns the variant name as written in markup (`data-variant`)
    pub fn name(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    /// Square button holding a single icon
    Icon,
}

impl ButtonSize {
    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-size-default",
            ButtonSize::Sm => "btn-size-sm",
            ButtonSize::Lg => "btn-size-lg",
            ButtonSize::Icon => "btn-size-icon",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Size preset
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Builds the class list for a button
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let base = format!("btn {} {}", variant.class(), size.class());
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base,
    }
}

/// Styled button
///
/// Without an `onclick` handler the button is purely decorative.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button { "Click me" }
///
///     Button {
///         variant: ButtonVariant::Destructive,
///         onclick: move |_| stop_process(),
///         "Stop"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());
    let variant_name = props.variant.name();

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            "data-variant": "{variant_name}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
