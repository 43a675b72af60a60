pub mod theme;

pub use theme::{AppTheme, EffectiveTheme, ParseThemeError};
