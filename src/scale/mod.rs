//! Scales map data values onto drawable ranges.
//!
//! Two families live here:
//!
//! - [`Linear`] is the generic building block: an affine mapping between a
//!   numeric domain and a normalized `[0, 1]` range, plus "nice" tick
//!   generation. [`LinearScale`] puts it to work as the bar chart's value
//!   axis, mapping `[0, max]` onto `[inner_height, 0]`.
//! - [`BandScale`] maps a discrete set of categories onto evenly spaced,
//!   padded pixel bands.
//!
//! Everything in this module is a plain value computed from its inputs; nothing
//! is cached between calls.

mod band;
mod linear;
mod tick_iter;
pub(crate) mod util;

pub use band::{Band, BandScale, DEFAULT_PADDING, compute_band_scale};
pub use linear::{DEFAULT_TICK_COUNT, Linear, LinearScale, LinearTickIter, compute_linear_scale};
pub use tick_iter::TickIter;

use num_traits::Float;

/// Common interface of the normalized scales.
///
/// A scale maps values of its `Domain` onto a normalized range where the
/// domain's first endpoint lands on `0` and the second on `1`. Values outside
/// the domain are not clamped.
///
/// [`Scale::normalize_opt`] returns `None` when a numeric conversion between
/// the domain and normalized types fails; [`Scale::normalize`] returns NaN
/// instead.
pub trait Scale {
    /// Type of the data values.
    type Domain;
    /// Type of the normalized values.
    type Normalized: Float;

    /// The domain endpoints, in the order they were given.
    fn domain(&self) -> (&Self::Domain, &Self::Domain);

    /// Maps a domain value into normalized space.
    fn normalize_opt(&self, value: &Self::Domain) -> Option<Self::Normalized>;

    /// Iterator over tick values for an axis drawn with this scale.
    fn tick_iter(&self) -> TickIter<Self::Domain>;

    /// Like [`Scale::normalize_opt`], yielding NaN when conversion fails.
    fn normalize(&self, value: &Self::Domain) -> Self::Normalized {
        self.normalize_opt(value)
            .unwrap_or_else(<Self::Normalized as Float>::nan)
    }

    /// Collects [`Scale::tick_iter`] into a vector.
    fn ticks(&self) -> Vec<Self::Domain> {
        self.tick_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflowing_span_normalizes_to_nan() {
        // The span overflows to infinity, so normalizing divides inf by inf.
        let scale = Linear::<f64, f32>::new(-f64::MAX, f64::MAX);
        assert!(scale.normalize(&0.0).is_nan());
    }
}
