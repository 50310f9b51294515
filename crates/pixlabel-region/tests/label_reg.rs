//! Label analysis regression test
//!
//! Measures labeled components: sizes, bounding boxes, centroids, the area
//! transform and single-component extraction.
//!
//! Run with:
//! ```
//! cargo test -p pixlabel-region --test label_reg
//! ```

use pixlabel_core::{Box, FPix, LabelPix};
use pixlabel_region::{
    LabelMethod, component_area_transform, extract_component, filter_by_area,
    get_component_bounds, get_component_sizes, get_component_stats, label_connected_components,
    label_with,
};
use pixlabel_test::{RegParams, make_random_image, make_rect_image};

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    // Two 2x2 blocks in opposite corners plus a 1x3 bar in the middle
    let mut fpix = make_rect_image(6, 6, 0, 0, 2, 2, 1.0).unwrap();
    for y in 4..6 {
        for x in 4..6 {
            fpix.set_pixel(x, y, 2.0).unwrap();
        }
    }
    for x in 1..4 {
        fpix.set_pixel(x, 3, 3.0).unwrap();
    }

    // --- Test 1: sizes and bounds ---
    eprintln!("=== sizes and bounds ===");
    let labels = label_connected_components(&fpix);
    let sizes = get_component_sizes(&labels);
    eprintln!("  sizes: {:?}", sizes);
    rp.compare_values(3.0, sizes.len() as f64, 0.0);
    rp.check(sizes == vec![4, 3, 4]);

    let bounds = get_component_bounds(&labels);
    rp.check(bounds[0] == Box::new_unchecked(0, 0, 2, 2));
    rp.check(bounds[1] == Box::new_unchecked(1, 3, 3, 1));
    rp.check(bounds[2] == Box::new_unchecked(4, 4, 2, 2));

    // --- Test 2: centroids ---
    eprintln!("=== centroids ===");
    let stats = get_component_stats(&labels);
    rp.compare_values(0.5, stats[0].centroid_x, 1e-9);
    rp.compare_values(0.5, stats[0].centroid_y, 1e-9);
    rp.compare_values(2.0, stats[1].centroid_x, 1e-9);
    rp.compare_values(3.0, stats[1].centroid_y, 1e-9);
    rp.compare_values(4.5, stats[2].centroid_x, 1e-9);
    for (s, b) in stats.iter().zip(&bounds) {
        rp.check(b.contains_point(s.centroid_x.floor() as i32, s.centroid_y.floor() as i32));
    }

    // --- Test 3: area transform ---
    eprintln!("=== area transform ===");
    let areas = component_area_transform(&labels);
    rp.compare_values(4.0, areas.get_label(1, 1).unwrap() as f64, 0.0);
    rp.compare_values(3.0, areas.get_label(2, 3).unwrap() as f64, 0.0);
    rp.compare_values(0.0, areas.get_label(3, 0).unwrap() as f64, 0.0);

    // --- Test 4: component extraction ---
    eprintln!("=== extraction ===");
    let mask = extract_component(&labels, 2).unwrap();
    rp.compare_values(3.0, mask.count_present() as f64, 0.0);
    rp.compare_values(3.0, mask.sum() as f64, 0.0);
    rp.compare_values(1.0, label_connected_components(&mask).max_label() as f64, 0.0);
    rp.check(extract_component(&labels, 0).is_err());
    rp.check(extract_component(&labels, 4).is_err());

    assert!(rp.cleanup(), "label regression test failed");
}

#[test]
fn label_reg_random() {
    let mut rp = RegParams::new("label_random");

    for seed in 1..=8u32 {
        let fpix = make_random_image(40, 30, 0.5, seed).unwrap();

        for method in [LabelMethod::FloodFill, LabelMethod::TwoPass] {
            let labels = label_with(&fpix, method);

            // Component sizes cover every foreground pixel exactly once
            let sizes = get_component_sizes(&labels);
            rp.compare_values(labels.max_label() as f64, sizes.len() as f64, 0.0);
            rp.compare_values(
                fpix.count_present() as f64,
                sizes.iter().map(|&s| s as f64).sum(),
                0.0,
            );

            // Each mask has exactly one component of the reported size
            for stat in get_component_stats(&labels).iter().take(10) {
                let mask = extract_component(&labels, stat.label).unwrap();
                rp.compare_values(stat.pixel_count as f64, mask.count_present() as f64, 0.0);
                rp.compare_values(1.0, label_connected_components(&mask).max_label() as f64, 0.0);
            }

            // The area transform predicts what the area filter keeps
            let areas = component_area_transform(&labels);
            let filtered = filter_by_area(&fpix, 4).unwrap();
            let predicted: Vec<bool> = areas.data().iter().map(|&a| a >= 4).collect();
            let kept: Vec<bool> = filtered.data().iter().map(|&v| v != 0.0).collect();
            rp.check(predicted == kept);
        }
    }

    // An image with no foreground has no components to measure
    let empty = FPix::new(7, 5).unwrap();
    let labels = label_connected_components(&empty);
    rp.check(get_component_stats(&labels).is_empty());
    rp.check(extract_component(&labels, 1).is_err());

    assert!(rp.cleanup(), "label random regression test failed");
}

#[test]
fn label_reg_sparse_labels() {
    let mut rp = RegParams::new("label_sparse");

    // Label values far larger than the grid, as a caller-built labeling may
    // carry; the analysis must not scale with the largest label
    let labels = LabelPix::from_data(
        4,
        2,
        vec![
            400_000_000, 400_000_000, 0, u32::MAX, //
            0, 3, 0, u32::MAX,
        ],
    )
    .unwrap();

    let sizes = get_component_sizes(&labels);
    eprintln!("  sparse sizes: {:?}", sizes);
    rp.check(sizes == vec![1, 2, 2]);

    let areas = component_area_transform(&labels);
    rp.check(areas.data() == [2, 2, 0, 2, 0, 1, 0, 2]);

    let stats = get_component_stats(&labels);
    rp.compare_values(3.0, stats.len() as f64, 0.0);
    rp.compare_values(u32::MAX as f64, stats[2].label as f64, 0.0);
    rp.check(stats[2].bounds == Box::new_unchecked(3, 0, 1, 2));

    let mask = extract_component(&labels, 400_000_000).unwrap();
    rp.compare_values(2.0, mask.count_present() as f64, 0.0);

    assert!(rp.cleanup(), "label sparse regression test failed");
}
