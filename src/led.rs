//! The three-LED traffic palette.

use crate::palette_enum;

palette_enum! {
    /// One lamp of the red/yellow/green panel.
    ///
    /// Cycle order is `red → yellow → green → red`; a reset always returns
    /// to `red`.
    pub enum Led {
        Red => "red",
        Yellow => "yellow",
        Green => "green",
    }
}

impl Default for Led {
    fn default() -> Self {
        Led::Red
    }
}
