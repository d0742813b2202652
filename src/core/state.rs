//! The `State` trait shared by every cycle value.
//!
//! States are plain values: inspecting them never has side effects, and they
//! can be cloned into history records and serialized into checkpoints.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values a cycle machine can hold.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition records
/// - `PartialEq`: the tracker compares consecutive values
/// - `Debug`: diagnostics and log lines
/// - `Serialize` + `Deserialize`: checkpoints
///
/// # Example
///
/// ```rust
/// use ledlab::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "off",
///             Self::On => "on",
///         }
///     }
/// }
///
/// assert_eq!(Lamp::On.name(), "on");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Symbolic name used for display, parsing and logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Lamp {
        Off,
        Dim,
        On,
    }

    impl State for Lamp {
        fn name(&self) -> &str {
            match self {
                Self::Off => "off",
                Self::Dim => "dim",
                Self::On => "on",
            }
        }
    }

    #[test]
    fn name_returns_symbolic_value() {
        assert_eq!(Lamp::Off.name(), "off");
        assert_eq!(Lamp::Dim.name(), "dim");
        assert_eq!(Lamp::On.name(), "on");
    }

    #[test]
    fn state_survives_json() {
        let json = serde_json::to_string(&Lamp::Dim).unwrap();
        let back: Lamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Lamp::Dim);
    }
}
