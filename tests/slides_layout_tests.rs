use brick_carousel::layout::{track_offset, uniform_widths, visible_range};
use brick_carousel::{Error, SlideSet};

#[test]
fn empty_slide_set_is_rejected() {
    assert!(matches!(
        SlideSet::new(Vec::new()),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn negative_or_non_finite_widths_are_rejected() {
    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        let err = SlideSet::new(vec![10.0, bad]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)), "{bad}");
    }
}

#[test]
fn width_lookup_checks_range() {
    let set = SlideSet::new(vec![100.0, 150.0, 200.0]).unwrap();
    assert_eq!(set.count(), 3);
    assert_eq!(set.width_of(1).unwrap(), 150.0);
    assert_eq!(
        set.width_of(3).unwrap_err(),
        Error::IndexOutOfRange { index: 3, count: 3 }
    );
}

#[test]
fn span_and_offset_follow_prefix_sums() {
    let set = SlideSet::new(vec![100.0, 150.0, 200.0, 100.0, 50.0]).unwrap();
    assert_eq!(set.span(0..3).unwrap(), 450.0);
    assert_eq!(set.span(1..3).unwrap(), 350.0);
    assert_eq!(set.offset_of(0).unwrap(), 0.0);
    assert!(set.offset_of(0).unwrap().is_sign_positive());
    assert_eq!(set.offset_of(5).unwrap(), -600.0);
    assert!(matches!(
        set.offset_of(6),
        Err(Error::IndexOutOfRange { index: 6, count: 5 })
    ));
    assert!(set.span(2..7).is_err());
}

#[test]
fn uniform_widths_divide_container_by_items_per_slide() {
    assert_eq!(uniform_widths(900.0, 4, 3), vec![300.0; 4]);
    assert_eq!(uniform_widths(900.0, 2, 0), vec![900.0; 2]);
    assert_eq!(uniform_widths(f64::NAN, 2, 1), vec![0.0; 2]);
    assert!(uniform_widths(500.0, 0, 1).is_empty());
}

#[test]
fn track_offset_sums_widths_before_anchor() {
    let widths = [100.0, 150.0, 200.0];
    assert_eq!(track_offset(&widths, 0), 0.0);
    assert!(track_offset(&widths, 0).is_sign_positive());
    assert_eq!(track_offset(&widths, 2), -250.0);
    assert_eq!(track_offset(&widths, 10), -450.0);
}

#[test]
fn visible_range_truncates_at_end() {
    assert_eq!(visible_range(0, 2, 5), 0..2);
    assert_eq!(visible_range(3, 2, 5), 3..5);
    assert_eq!(visible_range(4, 3, 5), 4..5);
    assert_eq!(visible_range(9, 1, 5), 5..5);
}
