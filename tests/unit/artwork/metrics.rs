use super::*;
use crate::animation::warp::Warp;
use kurbo::Shape;

#[test]
fn variant_lookup_covers_every_layer_combination() {
    assert_eq!(Variant::select(true, true, false), Variant::VerticalIsologotype);
    assert_eq!(Variant::select(true, true, true), Variant::HorizontalIsologotype);
    assert_eq!(Variant::select(true, false, false), Variant::Isotype);
    assert_eq!(Variant::select(true, false, true), Variant::Isotype);
    assert_eq!(Variant::select(false, true, false), Variant::Logotype);
    assert_eq!(Variant::select(false, true, true), Variant::Logotype);
    assert_eq!(Variant::select(false, false, false), Variant::Isotype);
}

#[test]
fn metrics_table_is_fixed() {
    let v = Variant::VerticalIsologotype.metrics();
    assert_eq!((v.width, v.height), (600.0, 689.0));
    assert!((v.ratio() - 600.0 / 689.0).abs() < 1e-12);

    let h = Variant::HorizontalIsologotype.metrics();
    assert!((h.width - 2190.0).abs() < 1e-9);
    assert_eq!(h.height, 600.0);

    let t = Variant::Logotype.metrics();
    assert_eq!(t.height, TEXT_HEIGHT);
    assert_eq!(t.top_offset, TEXT_TOP_OFFSET);

    assert_eq!(Variant::Isotype.metrics().top_offset, 0.0);
}

#[test]
fn static_mark_stays_inside_its_square() {
    let bbox = mark_perimeter().to_bezpath(None).bounding_box();
    assert!(bbox.x0 >= 0.0 && bbox.x1 <= MARK_WIDTH);
    assert!(bbox.y0 >= 0.0 && bbox.y1 <= MARK_HEIGHT);
}

#[test]
fn wordmark_sits_in_the_text_band() {
    let mut bbox: Option<kurbo::Rect> = None;
    for letter in wordmark_letters() {
        let b = letter.to_bezpath(None).bounding_box();
        bbox = Some(bbox.map_or(b, |acc| acc.union(b)));
    }
    let bbox = bbox.unwrap();
    assert!(bbox.y0 >= TEXT_TOP_OFFSET - 1.0);
    assert!(bbox.y1 <= FULL_HEIGHT + 0.5);
    assert!(bbox.x0 >= 0.0 && bbox.x1 <= MARK_WIDTH);
}

#[test]
fn horizontal_wordmark_fits_right_of_the_mark() {
    let placement = Variant::HorizontalIsologotype.wordmark_placement();
    let metrics = Variant::HorizontalIsologotype.metrics();
    for letter in wordmark_letters() {
        let b = (placement * letter.to_bezpath(None)).bounding_box();
        assert!(b.x0 > MARK_WIDTH, "{} starts at {}", letter.name, b.x0);
        assert!(b.x1 < metrics.width);
        assert!(b.y0 > 0.0 && b.y1 < metrics.height);
    }
    assert_eq!(
        Variant::VerticalIsologotype.wordmark_placement(),
        Affine::IDENTITY
    );
}

#[test]
fn rest_warp_leaves_wings_in_place() {
    let rest = Warp::new(310.0, 1.0);
    for detail in mark_details() {
        let warped = detail.to_bezpath(Some(&rest)).bounding_box();
        let plain = detail.to_bezpath(None).bounding_box();
        assert!((warped.x0 - plain.x0).abs() < 1e-9, "{}", detail.name);
        assert!((warped.x1 - plain.x1).abs() < 1e-9, "{}", detail.name);
        assert_eq!(warped.y0, plain.y0);
    }
}

#[test]
fn flapping_warp_narrows_the_wingspan() {
    let plain = mark_perimeter().to_bezpath(None).bounding_box();
    let flap = Warp::new(310.0, 0.7);
    let warped = mark_perimeter().to_bezpath(Some(&flap)).bounding_box();
    assert!(warped.width() < plain.width());
}
