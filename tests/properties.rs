use proptest::prelude::*;
use stolpekart::{
    color::assign_colors,
    geo::{LatLng, project_marker},
    scale::{compute_band_scale, compute_linear_scale},
};

const TOLERANCE: f64 = 1e-6;

proptest! {
    #[test]
    fn bands_and_padding_sum_to_inner_width(
        n in 1usize..40,
        width in 1.0f64..5000.0,
        padding in 0.0f64..0.9,
    ) {
        let categories: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
        let x = compute_band_scale(categories, width, padding);
        let bands: Vec<_> = x.bands().map(|(_, band)| band).collect();
        prop_assert_eq!(bands.len(), n);

        let mut covered = bands[0].start;
        for pair in bands.windows(2) {
            let gap = pair[1].start - (pair[0].start + pair[0].width);
            prop_assert!(gap >= -TOLERANCE, "bands overlap by {}", -gap);
            covered += pair[0].width + gap;
        }
        let last = bands[n - 1];
        covered += last.width + (width - (last.start + last.width));

        prop_assert!((covered - width).abs() < TOLERANCE * width.max(1.0));
    }

    #[test]
    fn value_scale_is_monotone_and_anchored(
        domain_max in 0.001f64..1e6,
        inner_height in 1.0f64..2000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let y = compute_linear_scale(domain_max, inner_height);
        prop_assert_eq!(y.y(0.0), inner_height);
        prop_assert!(y.y(domain_max).abs() < TOLERANCE);

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(y.y(lo * domain_max) >= y.y(hi * domain_max));
    }

    #[test]
    fn zero_domain_maps_everything_to_baseline(
        inner_height in 0.0f64..2000.0,
        value in -1e9f64..1e9,
    ) {
        let y = compute_linear_scale(0.0, inner_height);
        prop_assert_eq!(y.y(value), inner_height);
    }

    #[test]
    fn colour_assignment_is_deterministic_and_cyclic(
        n in 0usize..50,
        palette in prop::collection::vec("#[0-9a-f]{6}", 1..8),
    ) {
        let ids: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        let first = assign_colors(ids.clone(), palette.as_slice());
        let second = assign_colors(ids.clone(), palette.as_slice());
        prop_assert_eq!(&first, &second);

        for (i, id) in ids.iter().enumerate() {
            prop_assert_eq!(first.get(id), Some(palette[i % palette.len()].as_str()));
        }
    }

    #[test]
    fn viewport_center_projects_to_fifty_fifty(
        lat in -85.0f64..85.0,
        lng in -180.0f64..180.0,
        scale_factor in 1.0f64..1000.0,
    ) {
        let center = LatLng::new(lat, lng);
        let p = project_marker(center, center, scale_factor);
        prop_assert_eq!(p.left_percent, 50.0);
        prop_assert_eq!(p.top_percent, 50.0);
    }
}
