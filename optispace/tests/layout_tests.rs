#[cfg(test)]
mod tests {
    use optispace::entities::{LayoutResult, PositionedRect, Rectangle};
    use optispace::io::ext_repr::ExtInstance;
    use optispace::io::svg::{SvgDrawOptions, layout_to_svg};
    use optispace::io::{export, import};
    use optispace::layout::{MARGIN, arrange, arrange_with_rotations};
    use optispace::util::assertions;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    fn rects(dims: &[(f64, f64)]) -> Vec<Rectangle> {
        dims.iter().map(|&(w, h)| Rectangle::new(w, h)).collect()
    }

    fn pr(x: f64, y: f64, width: f64, height: f64) -> PositionedRect {
        PositionedRect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn empty_input_yields_empty_layout() {
        let layout = arrange(&[], &mut SmallRng::seed_from_u64(0));
        assert_eq!(layout, LayoutResult::empty());
        assert_eq!(layout.container_width, 0.0);
        assert_eq!(layout.container_height, 0.0);
        assert!(layout.bbox().is_none());
    }

    #[test]
    fn every_rectangle_opens_a_new_row_when_rows_are_equally_wide() {
        let input = rects(&[(2.0, 2.0), (2.0, 2.0), (3.0, 1.0)]);
        let layout = arrange_with_rotations(&input, [false; 3]);

        assert_eq!(
            layout.positioned_rects,
            vec![
                pr(0.0, 5.0, 2.0, 2.0),
                pr(0.0, 12.0, 2.0, 2.0),
                pr(0.0, 19.0, 3.0, 1.0),
            ]
        );
        assert_eq!(layout.container_width, 8.0);
        assert_eq!(layout.container_height, 25.0);
    }

    #[test]
    fn narrow_rectangles_share_a_row_below_a_wider_one() {
        let input = rects(&[(10.0, 1.0), (2.0, 1.0), (2.0, 1.0)]);
        let layout = arrange_with_rotations(&input, [false; 3]);

        assert_eq!(
            layout.positioned_rects,
            vec![
                pr(0.0, 5.0, 10.0, 1.0),
                pr(0.0, 11.0, 2.0, 1.0),
                pr(7.0, 11.0, 2.0, 1.0),
            ]
        );
        assert_eq!(layout.container_width, 15.0);
        assert_eq!(layout.container_height, 17.0);

        //container includes trailing margins, the tight bounding box does not
        let bbox = layout.bbox().unwrap();
        assert_eq!((bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max), (0.0, 5.0, 10.0, 12.0));
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let input = rects(&[(2.0, 3.0)]);
        let layout = arrange_with_rotations(&input, [true]);
        assert_eq!(layout.positioned_rects, vec![pr(0.0, 5.0, 3.0, 2.0)]);
        assert_eq!(layout.container_width, 8.0);
        assert_eq!(layout.container_height, 12.0);
    }

    #[test]
    fn missing_rotations_keep_orientation() {
        let input = rects(&[(2.0, 3.0), (4.0, 1.0)]);
        let with_none = arrange_with_rotations(&input, std::iter::empty());
        let with_false = arrange_with_rotations(&input, [false, false]);
        assert_eq!(with_none, with_false);
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(42; "seed 42")]
    fn layout_is_deterministic_for_a_fixed_seed(seed: u64) {
        let input = rects(&[(12.0, 4.0), (3.0, 9.0), (7.5, 7.5), (1.0, 20.0), (6.0, 2.0)]);
        let a = arrange(&input, &mut SmallRng::seed_from_u64(seed));
        let b = arrange(&input, &mut SmallRng::seed_from_u64(seed));
        assert_eq!(a, b);
    }

    #[test_case(1, 5; "few rectangles")]
    #[test_case(2, 50; "many rectangles")]
    #[test_case(3, 200; "lots of rectangles")]
    fn random_layouts_respect_placement_properties(seed: u64, n_rects: usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let input: Vec<Rectangle> = (0..n_rects)
            .map(|_| Rectangle::new(rng.random_range(1.0..50.0), rng.random_range(1.0..50.0)))
            .collect();
        let layout = arrange(&input, &mut rng);

        assert_eq!(layout.len(), input.len());
        assert!(assertions::rows_do_not_overlap(&layout, MARGIN));
        assert!(assertions::rows_are_monotone(&layout));
        assert!(assertions::container_covers_rects(&layout));

        //every placed rectangle is an input rectangle, possibly rotated
        for (rect, placed) in input.iter().zip(layout.positioned_rects.iter()) {
            assert!(placed.dims() == *rect || placed.dims() == rect.rotated());
        }
    }

    #[test]
    fn rectangle_measures() {
        let r = Rectangle::new(2.0, 3.0);
        assert_eq!(r.area(), 6.0);
        assert_eq!(r.perimeter(), 10.0);
        assert_eq!(r.rotated(), Rectangle::new(3.0, 2.0));
        assert_ne!(r.dim_key(), r.rotated().dim_key());
    }

    #[test]
    fn instance_import_preserves_order() {
        let json = r#"{"name": "demo", "rectangles": [{"width": 2, "height": 2}, {"width": 3.5, "height": 1}]}"#;
        let ext_instance: ExtInstance = serde_json::from_str(json).unwrap();
        let imported = import::import_instance(&ext_instance).unwrap();
        assert_eq!(imported, rects(&[(2.0, 2.0), (3.5, 1.0)]));
    }

    #[test_case(0.0, 1.0; "zero width")]
    #[test_case(1.0, -2.0; "negative height")]
    #[test_case(f64::NAN, 1.0; "nan width")]
    #[test_case(1.0, f64::INFINITY; "infinite height")]
    fn instance_import_rejects_degenerate_rectangles(width: f64, height: f64) {
        let ext_instance = ExtInstance {
            name: "degenerate".into(),
            rectangles: vec![optispace::io::ext_repr::ExtRectangle { width, height }],
        };
        assert!(import::import_instance(&ext_instance).is_err());
    }

    #[test]
    fn exported_layout_mirrors_internal_one() {
        let input = rects(&[(10.0, 1.0), (2.0, 1.0)]);
        let layout = arrange_with_rotations(&input, [false, true]);
        let ext_layout = export::export_layout(&layout);
        assert_eq!(ext_layout.rectangles.len(), 2);
        assert_eq!(ext_layout.container_width, layout.container_width);
        assert_eq!(ext_layout.container_height, layout.container_height);
        for (ext, int) in ext_layout.rectangles.iter().zip(layout.positioned_rects.iter()) {
            assert_eq!((ext.x, ext.y, ext.width, ext.height), (int.x, int.y, int.width, int.height));
        }
    }

    #[test]
    fn svg_draws_container_rectangles_and_bbox() {
        let layout = arrange_with_rotations(&rects(&[(10.0, 1.0), (2.0, 1.0)]), [false, false]);
        let svg = layout_to_svg(&layout, SvgDrawOptions::default(), "two rects").to_string();
        assert!(svg.contains("id=\"container\""));
        assert!(svg.contains("id=\"rect_0\""));
        assert!(svg.contains("id=\"rect_1\""));
        assert!(svg.contains("id=\"bbox\""));

        let empty = layout_to_svg(&LayoutResult::empty(), SvgDrawOptions::default(), "").to_string();
        assert!(!empty.contains("id=\"bbox\""));
    }
}
