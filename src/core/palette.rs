//! Fixed, ordered cycles of states.

use super::state::State;

/// A fixed ordered set of states that a cycle engine moves between.
///
/// The order of [`Palette::ALL`] is the cycle order: stepping forward from the
/// last member wraps to the first, stepping backward from the first wraps to
/// the last. `ALL` is never empty and holds each member exactly once.
///
/// Implementations are normally generated with [`palette_enum!`](crate::palette_enum).
///
/// # Example
///
/// ```rust
/// use ledlab::core::Palette;
/// use ledlab::Led;
///
/// assert_eq!(Led::first(), Led::Red);
/// assert_eq!(Led::Green.successor(), Led::Red);
/// assert_eq!(Led::Red.predecessor(), Led::Green);
/// ```
pub trait Palette: State + Copy + Eq + 'static {
    /// Every member, in cycle order.
    const ALL: &'static [Self];

    /// Position of this member within [`Palette::ALL`].
    fn index(&self) -> usize;

    /// The member a reset returns to.
    fn first() -> Self {
        Self::ALL[0]
    }

    /// The member following this one, wrapping from the last to the first.
    fn successor(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The member preceding this one, wrapping from the first to the last.
    fn predecessor(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Look a member up by its [`State::name`], ignoring case and surrounding
    /// whitespace.
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.name().eq_ignore_ascii_case(name))
    }
}
