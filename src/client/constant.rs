pub const SITE_NAME: &str = "Modal System";

pub const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@4.12.14/dist/full.min.css";
pub const TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";
