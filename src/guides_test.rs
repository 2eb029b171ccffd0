use super::*;
use crate::layer::LayerPosition;

const TOL: f64 = 0.02;

fn layers_at(top: (f64, f64), bottom: (f64, f64)) -> Layers {
    let mut layers = Layers::new();
    layers.top.text = "top".into();
    layers.bottom.text = "bottom".into();
    layers.top.position = LayerPosition { x: top.0, y: top.1 };
    layers.bottom.position = LayerPosition { x: bottom.0, y: bottom.1 };
    layers
}

#[test]
fn defaults_are_centered_and_symmetric() {
    let g = AlignmentGuides::detect(&layers_at((0.5, 0.08), (0.5, 0.92)), TOL);
    assert!(g.show_horizontal_center);
    assert!(!g.show_vertical_alignment);
    assert!(g.show_symmetric_spacing);
    assert!(g.any());
}

#[test]
fn off_center_but_aligned_is_vertical_alignment() {
    let g = AlignmentGuides::detect(&layers_at((0.3, 0.2), (0.31, 0.5)), TOL);
    assert!(!g.show_horizontal_center);
    assert!(g.show_vertical_alignment);
    assert!(!g.show_symmetric_spacing);
}

#[test]
fn symmetric_spacing_only() {
    let g = AlignmentGuides::detect(&layers_at((0.2, 0.3), (0.7, 0.7)), TOL);
    assert!(!g.show_horizontal_center);
    assert!(!g.show_vertical_alignment);
    assert!(g.show_symmetric_spacing);
}

#[test]
fn nothing_aligned() {
    let g = AlignmentGuides::detect(&layers_at((0.2, 0.1), (0.7, 0.6)), TOL);
    assert_eq!(g, AlignmentGuides::default());
    assert!(!g.any());
}

#[test]
fn tolerance_boundary() {
    let inside = AlignmentGuides::detect(&layers_at((0.515, 0.3), (0.5, 0.5)), TOL);
    assert!(inside.show_horizontal_center);
    let outside = AlignmentGuides::detect(&layers_at((0.53, 0.3), (0.5, 0.5)), TOL);
    assert!(!outside.show_horizontal_center);
    assert!(!outside.show_vertical_alignment);
}

#[test]
fn empty_top_text_suppresses_everything() {
    let mut layers = layers_at((0.5, 0.08), (0.5, 0.92));
    layers.top.text.clear();
    assert_eq!(AlignmentGuides::detect(&layers, TOL), AlignmentGuides::default());
}

#[test]
fn empty_bottom_text_suppresses_everything() {
    let mut layers = layers_at((0.5, 0.08), (0.5, 0.92));
    layers.bottom.text.clear();
    assert_eq!(AlignmentGuides::detect(&layers, TOL), AlignmentGuides::default());
}

#[test]
fn centered_and_vertical_are_never_both_set() {
    let steps: Vec<f64> = (0..=80).map(|i| 0.1 + f64::from(i) * 0.01).collect();
    for &tx in &steps {
        for &bx in &steps {
            let g = AlignmentGuides::detect(&layers_at((tx, 0.2), (bx, 0.8)), TOL);
            assert!(
                !(g.show_horizontal_center && g.show_vertical_alignment),
                "both flags set for top.x={tx} bottom.x={bx}"
            );
        }
    }
}
