//! Deterministic per-datum colour assignment.

use indexmap::IndexMap;

/// The d3 Category10 palette, used whenever no palette is configured.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Category10 as owned strings.
pub fn default_palette() -> Vec<String> {
    CATEGORY10.iter().map(|c| (*c).to_string()).collect()
}

/// Mapping from datum id to colour token, iterable in first-seen id order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorAssignment {
    colors: IndexMap<String, String>,
}

impl ColorAssignment {
    /// Colour assigned to `id`, if the id was part of the assignment.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.colors.get(id).map(String::as_str)
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no ids were assigned.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `(id, colour)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(id, color)| (id.as_str(), color.as_str()))
    }
}

/// Assigns `palette[index % palette.len()]` to each id, where `index` is the
/// position at which the id was first seen.
///
/// Repeated ids keep the colour of their first occurrence. An empty palette
/// falls back to [`CATEGORY10`].
///
/// # Examples
///
/// ```
/// use stolpekart::color::assign_colors;
///
/// let colors = assign_colors(["a", "b", "c"], &["red", "blue"]);
/// assert_eq!(colors.get("a"), Some("red"));
/// assert_eq!(colors.get("b"), Some("blue"));
/// assert_eq!(colors.get("c"), Some("red"));
/// ```
pub fn assign_colors<I, S, P>(ids: I, palette: &[P]) -> ColorAssignment
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    P: AsRef<str>,
{
    let palette: Vec<&str> = if palette.is_empty() {
        CATEGORY10.to_vec()
    } else {
        palette.iter().map(AsRef::as_ref).collect()
    };

    let mut colors: IndexMap<String, String> = IndexMap::new();
    for id in ids {
        let next = colors.len() % palette.len();
        colors
            .entry(id.into())
            .or_insert_with(|| palette[next].to_string());
    }
    ColorAssignment { colors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_short_palette() {
        let colors = assign_colors(["a", "b", "c", "d", "e"], &["red", "blue"]);
        let assigned: Vec<_> = colors.iter().map(|(_, c)| c).collect();

        assert_eq!(assigned, vec!["red", "blue", "red", "blue", "red"]);
    }

    #[test]
    fn is_deterministic() {
        let ids = ["x", "y", "z"];
        let palette = ["#000", "#fff"];

        assert_eq!(assign_colors(ids, &palette), assign_colors(ids, &palette));
    }

    #[test]
    fn empty_palette_falls_back_to_category10() {
        let ids: Vec<String> = (0..12).map(|i| i.to_string()).collect();
        let colors = assign_colors(ids, &[] as &[&str]);

        assert_eq!(colors.get("0"), Some(CATEGORY10[0]));
        assert_eq!(colors.get("9"), Some(CATEGORY10[9]));
        assert_eq!(colors.get("10"), Some(CATEGORY10[0]));
    }

    #[test]
    fn repeated_ids_keep_first_colour() {
        let colors = assign_colors(["a", "b", "a", "c"], &["red", "green", "blue"]);

        assert_eq!(colors.len(), 3);
        assert_eq!(colors.get("a"), Some("red"));
        assert_eq!(colors.get("c"), Some("blue"));
    }

    #[test]
    fn empty_ids_give_empty_assignment() {
        let colors = assign_colors(Vec::<String>::new(), &["red"]);

        assert!(colors.is_empty());
        assert_eq!(colors.get("a"), None);
    }
}
