//! Palette and class mappings shared by the modal components.
//!
//! Styling is daisyUI; these helpers translate configuration enums into
//! class strings so components never build them ad hoc.

use crate::client::component::modal_system::config::{ButtonColor, ButtonVariant, ModalSize};

pub const PRIMARY: &str = "#1e88e5";
pub const SECONDARY: &str = "#f50057";
pub const SUCCESS: &str = "#43a047";
pub const WARNING: &str = "#fb8c00";
pub const ERROR: &str = "#e53935";
pub const INFO: &str = "#0288d1";

/// daisyUI theme variables overriding the default palette.
pub const THEME_STYLE: &str = r#"
:root {
  --color-primary: #1e88e5;
  --color-secondary: #f50057;
  --color-success: #43a047;
  --color-warning: #fb8c00;
  --color-error: #e53935;
  --color-info: #0288d1;
}
"#;

pub fn button_class(variant: ButtonVariant, color: ButtonColor) -> String {
    let color = match color {
        ButtonColor::Primary => "primary",
        ButtonColor::Secondary => "secondary",
        ButtonColor::Success => "success",
        ButtonColor::Warning => "warning",
        ButtonColor::Error => "error",
        ButtonColor::Info => "info",
    };

    match variant {
        ButtonVariant::Contained => format!("btn btn-{}", color),
        ButtonVariant::Outlined => format!("btn btn-outline btn-{}", color),
        ButtonVariant::Text => format!("btn btn-ghost text-{}", color),
    }
}

/// Maximum dialog width for each size step.
pub fn modal_width_class(size: ModalSize) -> &'static str {
    match size {
        ModalSize::Xs => "max-w-[444px]",
        ModalSize::Sm => "max-w-[600px]",
        ModalSize::Md => "max-w-[900px]",
        ModalSize::Lg => "max-w-[1200px]",
        ModalSize::Xl => "max-w-[1536px]",
    }
}
