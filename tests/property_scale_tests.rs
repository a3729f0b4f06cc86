use draggable_chart::core::{CategoryScale, LinearScale, to_data, to_pixel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new(domain_start, domain_end, 1024.0, 0.0).expect("valid scale");
        let px = scale.domain_to_pixel(value).expect("to pixel");
        let recovered = scale.pixel_to_domain(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }

    #[test]
    fn to_data_inverts_to_pixel(
        pixel_min in -500.0f64..500.0,
        pixel_extent in 1.0f64..2_000.0,
        data_min in -1_000.0f64..1_000.0,
        data_extent in 0.01f64..1_000.0,
        factor in 0.0f64..1.0
    ) {
        let pixel_max = pixel_min + pixel_extent;
        let data_max = data_min + data_extent;
        let value = data_min + factor * data_extent;

        let px = to_pixel(value, pixel_min, pixel_max, data_min, data_max);
        let back = to_data(px, pixel_min, pixel_max, data_min, data_max);
        prop_assert!((back - value).abs() <= 1e-9 * (1.0 + value.abs() + data_extent));
    }

    #[test]
    fn category_mapping_always_returns_a_known_label(
        label_count in 1usize..20,
        pixel in -10_000.0f64..10_000.0
    ) {
        let labels: Vec<String> = (0..label_count).map(|i| format!("L{i}")).collect();
        let scale = CategoryScale::new(labels.clone(), 50.0, 650.0).expect("valid scale");
        let label = scale.pixel_to_label(pixel).expect("label");
        prop_assert!(labels.iter().any(|candidate| candidate == label));
    }

    #[test]
    fn category_mapping_clamps_outside_the_span(
        label_count in 1usize..20,
        overshoot in 0.001f64..10_000.0
    ) {
        let labels: Vec<String> = (0..label_count).map(|i| format!("L{i}")).collect();
        let scale = CategoryScale::new(labels.clone(), 50.0, 650.0).expect("valid scale");
        prop_assert_eq!(
            scale.pixel_to_label(50.0 - overshoot).expect("left"),
            labels[0].as_str()
        );
        prop_assert_eq!(
            scale.pixel_to_label(650.0 + overshoot).expect("right"),
            labels[label_count - 1].as_str()
        );

        // Vertical category axes run top to bottom: first label at the top.
        let vertical = CategoryScale::new(labels.clone(), 20.0, 420.0).expect("valid scale");
        prop_assert_eq!(
            vertical.pixel_to_label(20.0 - overshoot).expect("above"),
            labels[0].as_str()
        );
        prop_assert_eq!(
            vertical.pixel_to_label(420.0 + overshoot).expect("below"),
            labels[label_count - 1].as_str()
        );
    }

    #[test]
    fn category_pixels_round_trip_to_their_label(
        label_count in 1usize..20,
        index_seed in 0usize..1_000
    ) {
        let labels: Vec<String> = (0..label_count).map(|i| format!("L{i}")).collect();
        let label = &labels[index_seed % label_count];
        let scale = CategoryScale::new(labels.clone(), 0.0, 480.0).expect("valid scale");
        let px = scale.label_to_pixel(label).expect("to pixel");
        prop_assert_eq!(scale.pixel_to_label(px).expect("from pixel"), label.as_str());
    }
}
