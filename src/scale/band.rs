use indexmap::IndexSet;

/// Padding fraction used by the bar chart's band scale.
pub const DEFAULT_PADDING: f64 = 0.1;

/// Pixel extent of one category band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Left edge of the band, relative to the plot area.
    pub start: f64,
    /// Width of the band.
    pub width: f64,
}

impl Band {
    /// Horizontal center of the band.
    pub fn center(&self) -> f64 {
        self.start + self.width / 2.0
    }
}

/// Categorical scale mapping each category onto an evenly spaced, padded band.
///
/// The range `[0, inner_width]` is split into one step per category
/// (`step = inner_width / n`). Each band occupies the inner `1 - padding`
/// fraction of its step, centered, so every band is flanked by
/// `step * padding / 2` on both sides.
///
/// Categories keep the order in which they were first seen; duplicates are
/// ignored. An inner width of zero or less is not rejected and simply yields
/// zero-width or negative-width bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range: (f64, f64),
    padding: f64,
}

/// Builds a band scale over `categories` spanning `[0, inner_width]`.
///
/// # Examples
///
/// ```
/// use stolpekart::scale::{compute_band_scale, DEFAULT_PADDING};
///
/// let x = compute_band_scale(["A", "B"], 510.0, DEFAULT_PADDING);
///
/// assert_eq!(x.bandwidth(), 229.5);
/// assert_eq!(x.band("A").map(|b| b.start), Some(12.75));
/// assert_eq!(x.band("B").map(|b| b.start), Some(267.75));
/// assert_eq!(x.band("C"), None);
/// ```
pub fn compute_band_scale<I, S>(categories: I, inner_width: f64, padding: f64) -> BandScale
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let domain: IndexSet<String> = categories.into_iter().map(Into::into).collect();
    tracing::trace!(
        categories = domain.len(),
        inner_width,
        padding,
        "computed band scale"
    );
    BandScale {
        domain,
        range: (0.0, inner_width),
        padding,
    }
}

impl BandScale {
    /// Distinct categories in first-seen order.
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Whether the scale has no categories.
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Range endpoints `(0, inner_width)`.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Padding fraction applied inside every step.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Distance between the starts of consecutive bands; `0` when empty.
    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.domain.len() as f64
    }

    /// Width shared by all bands.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Band for `category`, or `None` when the category is not in the domain.
    pub fn band(&self, category: &str) -> Option<Band> {
        let index = self.domain.get_index_of(category)?;
        Some(self.band_at(index))
    }

    /// Left edge for `category`, falling back to `0` for unknown categories.
    pub fn start_or_zero(&self, category: &str) -> f64 {
        self.band(category).map_or(0.0, |band| band.start)
    }

    /// All bands paired with their category, in domain order.
    pub fn bands(&self) -> impl Iterator<Item = (&str, Band)> {
        self.domain
            .iter()
            .enumerate()
            .map(|(index, category)| (category.as_str(), self.band_at(index)))
    }

    fn band_at(&self, index: usize) -> Band {
        let step = self.step();
        Band {
            start: self.range.0 + step * index as f64 + step * self.padding / 2.0,
            width: self.bandwidth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bands_are_centered_in_their_steps() {
        let x = compute_band_scale(["A", "B", "C", "D"], 400.0, 0.2);

        assert_eq!(x.step(), 100.0);
        assert!(approx_eq(x.bandwidth(), 80.0));
        for (i, (_, band)) in x.bands().enumerate() {
            assert!(approx_eq(band.start, 100.0 * i as f64 + 10.0));
            assert!(approx_eq(band.center(), 100.0 * i as f64 + 50.0));
        }
    }

    #[test]
    fn duplicate_categories_keep_first_position() {
        let x = compute_band_scale(["B", "A", "B", "C", "A"], 300.0, 0.0);

        assert_eq!(x.domain().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(x.len(), 3);
        assert_eq!(x.band("A").map(|b| b.start), Some(100.0));
    }

    #[test]
    fn unknown_category_is_none_and_falls_back_to_zero() {
        let x = compute_band_scale(["A"], 100.0, DEFAULT_PADDING);

        assert_eq!(x.band("missing"), None);
        assert_eq!(x.start_or_zero("missing"), 0.0);
        assert!(approx_eq(x.start_or_zero("A"), 5.0));
    }

    #[test]
    fn empty_domain_has_no_bands() {
        let x = compute_band_scale(Vec::<String>::new(), 510.0, DEFAULT_PADDING);

        assert!(x.is_empty());
        assert_eq!(x.step(), 0.0);
        assert_eq!(x.bandwidth(), 0.0);
        assert_eq!(x.bands().count(), 0);
    }

    #[test]
    fn negative_inner_width_passes_through() {
        let x = compute_band_scale(["A", "B"], -100.0, DEFAULT_PADDING);

        assert!(x.bandwidth() < 0.0);
        assert!(approx_eq(x.bandwidth(), -45.0));
    }

    #[test]
    fn bands_and_padding_fill_the_range() {
        let x = compute_band_scale(["a", "b", "c"], 517.0, 0.3);
        let bands: Vec<Band> = x.bands().map(|(_, b)| b).collect();

        let outer = bands[0].start + (x.range().1 - (bands[2].start + bands[2].width));
        let inner: f64 = bands
            .windows(2)
            .map(|pair| pair[1].start - (pair[0].start + pair[0].width))
            .sum();
        let widths: f64 = bands.iter().map(|b| b.width).sum();

        assert!(approx_eq(outer + inner + widths, 517.0));
    }
}
