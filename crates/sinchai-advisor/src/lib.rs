//! Irrigation advice for Sinchai
//!
//! Turns a forecast into a three-tier irrigation verdict, with bilingual
//! text, rotating organic farming tips and a plain-text report.

pub mod decision;
pub mod i18n;
pub mod render;
pub mod state;
pub mod tips;

pub use decision::{evaluate, ReasoningNote, Tier, Verdict};
pub use state::{Advice, AppState, LocationLabel};
pub use tips::{Tip, TipCycle};
