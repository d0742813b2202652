//! Macros for declaring palettes.

/// Declare a palette enum.
///
/// Generates the enum together with its [`State`](crate::core::State),
/// [`Palette`](crate::core::Palette), `Display` and `FromStr` implementations.
/// Each variant carries its symbolic name, which is also its serialized form.
/// Cycle order is declaration order.
///
/// # Example
///
/// ```
/// use ledlab::core::Palette;
/// use ledlab::palette_enum;
///
/// palette_enum! {
///     pub enum Traffic {
///         Red => "red",
///         Amber => "amber",
///         Green => "green",
///     }
/// }
///
/// assert_eq!(Traffic::Amber.successor(), Traffic::Green);
/// assert_eq!("amber".parse::<Traffic>().unwrap(), Traffic::Amber);
/// assert_eq!(Traffic::Green.to_string(), "green");
/// ```
#[macro_export]
macro_rules! palette_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:tt
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),+
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl $crate::core::Palette for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn index(&self) -> usize {
                *self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ParseColorError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::core::Palette>::from_name(s).ok_or_else(|| {
                    $crate::error::ParseColorError {
                        input: s.to_string(),
                    }
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Palette, State};

    palette_enum! {
        enum Mood {
            Calm => "calm",
            Busy => "busy",
            Frantic => "frantic",
        }
    }

    #[test]
    fn palette_enum_generates_traits() {
        assert_eq!(Mood::Busy.name(), "busy");
        assert_eq!(Mood::ALL.len(), 3);
        assert_eq!(Mood::Frantic.index(), 2);
    }

    #[test]
    fn serialized_form_is_the_label() {
        assert_eq!(serde_json::to_string(&Mood::Calm).unwrap(), "\"calm\"");
        let back: Mood = serde_json::from_str("\"frantic\"").unwrap();
        assert_eq!(back, Mood::Frantic);
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "sleepy".parse::<Mood>().unwrap_err();
        assert_eq!(err.input, "sleepy");
    }

    #[test]
    fn palette_enum_supports_visibility() {
        palette_enum! {
            pub enum PublicMood {
                Up => "up",
                Down => "down",
            }
        }

        assert_eq!(PublicMood::Down.to_string(), "down");
    }
}
