use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

/// Visual configuration of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonConfig {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
}

impl ButtonConfig {
    pub const fn new(variant: ButtonVariant, size: ButtonSize) -> Self {
        Self { variant, size }
    }

    pub const fn variant(variant: ButtonVariant) -> Self {
        Self {
            variant,
            size: ButtonSize::Default,
        }
    }

    pub fn classes(&self) -> String {
        let variant = match self.variant {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Destructive => "btn-destructive",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Link => "btn-link",
        };
        let size = match self.size {
            ButtonSize::Default => "btn-default-size",
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Lg => "btn-lg",
            ButtonSize::Icon => "btn-icon",
        };
        format!("btn-base {variant} {size}")
    }

    /// Terminal rendering of a button labelled `label`.
    pub fn paint(&self, label: &str) -> ColoredString {
        tracing::trace!(label, classes = %self.classes(), "button");
        let text = match self.size {
            ButtonSize::Sm | ButtonSize::Icon => format!("[{label}]"),
            ButtonSize::Default => format!("[ {label} ]"),
            ButtonSize::Lg => format!("[  {label}  ]"),
        };
        match self.variant {
            ButtonVariant::Default => text.bold().cyan(),
            ButtonVariant::Destructive => text.bold().red(),
            ButtonVariant::Outline => text.normal(),
            ButtonVariant::Secondary => text.magenta(),
            ButtonVariant::Ghost => text.dimmed(),
            ButtonVariant::Link => text.underline().blue(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_classes() {
        assert_eq!(
            ButtonConfig::default().classes(),
            "btn-base btn-default btn-default-size"
        );
    }

    #[test]
    fn explicit_variant_and_size() {
        let config = ButtonConfig::new(ButtonVariant::Ghost, ButtonSize::Sm);
        assert_eq!(config.classes(), "btn-base btn-ghost btn-sm");
        assert_eq!(
            ButtonConfig::variant(ButtonVariant::Outline).classes(),
            "btn-base btn-outline btn-default-size"
        );
    }

    #[test]
    fn paint_keeps_label() {
        colored::control::set_override(false);
        let painted = ButtonConfig::new(ButtonVariant::Link, ButtonSize::Lg).paint("Go Home");
        assert_eq!(painted.to_string(), "[  Go Home  ]");
    }
}
