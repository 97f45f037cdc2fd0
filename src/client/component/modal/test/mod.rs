use super::*;

mod dismiss_reason;
mod variant;
