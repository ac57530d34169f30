//! Tests for copy plan validation order

use super::*;
use crate::element::ElementKind;
use pretty_assertions::assert_eq;

fn grid() -> Buffer {
    Buffer::with_shape(&[3, 3])
}

// ============================================================================
// Whole-source copies
// ============================================================================

#[test]
fn test_whole_null_target_first() {
    assert_eq!(CopyPlan::whole(0, None, 0), Err(Error::NullTarget));
    assert_eq!(CopyPlan::whole(5, None, -1), Err(Error::NullTarget));
}

#[test]
fn test_whole_rank_before_offset_and_space() {
    let target = grid();
    assert_eq!(
        CopyPlan::whole(3, Some(&target), -1),
        Err(Error::RankMismatch { rank: 2 })
    );
    assert_eq!(
        CopyPlan::whole(100, Some(&target), 1),
        Err(Error::RankMismatch { rank: 2 })
    );
}

#[test]
fn test_whole_offset_before_space() {
    let target = Buffer::new(0);
    assert_eq!(
        CopyPlan::whole(10, Some(&target), -1),
        Err(Error::OffsetOutOfRange { offset: -1 })
    );
}

#[test]
fn test_whole_space() {
    let target = Buffer::new(11);
    assert_eq!(
        CopyPlan::whole(10, Some(&target), 2),
        Err(Error::InsufficientSpace {
            needed: 10,
            available: 9,
        })
    );
    assert_eq!(
        CopyPlan::whole(10, Some(&target), 1),
        Ok(CopyPlan {
            source_index: 0,
            target_start: 1,
            count: 10,
        })
    );
}

#[test]
fn test_whole_empty_source_fits_up_to_len() {
    let target = Buffer::new(2);
    assert!(CopyPlan::whole(0, Some(&target), 0).is_ok());
    assert!(CopyPlan::whole(0, Some(&target), 2).is_ok());
    assert_eq!(
        CopyPlan::whole(0, Some(&target), 3),
        Err(Error::InsufficientSpace {
            needed: 0,
            available: -1,
        })
    );
}

// ============================================================================
// Windowed copies
// ============================================================================

#[test]
fn test_window_negative_index_first() {
    assert_eq!(
        CopyPlan::window(3, -1, None, -1, -1),
        Err(Error::IndexOutOfRange {
            param: "source_index",
            value: -1,
        })
    );
}

#[test]
fn test_window_negative_count_before_target_checks() {
    let target = grid();
    assert_eq!(
        CopyPlan::window(3, 0, Some(&target), 0, -1),
        Err(Error::IndexOutOfRange {
            param: "count",
            value: -1,
        })
    );
    assert_eq!(
        CopyPlan::window(3, 0, None, 0, -1),
        Err(Error::IndexOutOfRange {
            param: "count",
            value: -1,
        })
    );
}

#[test]
fn test_window_target_checks_before_source_window() {
    assert_eq!(CopyPlan::window(3, 0, None, 3, 15), Err(Error::NullTarget));
    assert_eq!(
        CopyPlan::window(3, 0, Some(&grid()), 0, 15),
        Err(Error::RankMismatch { rank: 2 })
    );
    assert_eq!(
        CopyPlan::window(3, 0, Some(&Buffer::new(1)), -100, 1000),
        Err(Error::OffsetOutOfRange { offset: -100 })
    );
}

#[test]
fn test_window_source_before_space() {
    let target = Buffer::new(1);
    assert_eq!(
        CopyPlan::window(24, 23, Some(&target), 0, 24),
        Err(Error::InvalidRange {
            index: 23,
            count: 24,
            len: 24,
        })
    );
    assert_eq!(
        CopyPlan::window(24, 0, Some(&target), 3, 15),
        Err(Error::InsufficientSpace {
            needed: 15,
            available: -2,
        })
    );
}

#[test]
fn test_window_zero_at_end_is_valid() {
    let target = Buffer::new(100);
    let plan = CopyPlan::window(24, 24, Some(&target), 0, 0).unwrap();
    assert_eq!(plan.source_window(), 24..24);
}

#[test]
fn test_window_overflowing_index_is_invalid_range() {
    let target = Buffer::new(1);
    assert!(matches!(
        CopyPlan::window(3, isize::MAX, Some(&target), 0, isize::MAX),
        Err(Error::InvalidRange { .. })
    ));
}

// ============================================================================
// Transfer
// ============================================================================

#[test]
fn test_copy_slice_leaves_other_slots() {
    let source = [Element::from(1), Element::from(2)];
    let mut target = Buffer::from_elements((0..5).map(|_| Element::from("x")));

    copy_slice(&source, Some(&mut target), 2).unwrap();

    assert_eq!(
        target.into_vec(),
        vec![
            Element::from("x"),
            Element::from("x"),
            Element::from(1),
            Element::from(2),
            Element::from("x"),
        ]
    );
}

#[test]
fn test_copy_slice_range_window() {
    let source: Vec<Element> = (0..6).map(Element::Int).collect();
    let mut target = Buffer::new(4);

    copy_slice_range(&source, 2, Some(&mut target), 1, 3).unwrap();

    assert_eq!(
        target.into_vec(),
        vec![Element::Null, Element::Int(2), Element::Int(3), Element::Int(4)]
    );
}

#[test]
fn test_type_mismatch_writes_nothing() {
    let source = [Element::from("a"), Element::from(2), Element::Null];
    let mut target = Buffer::of_kind(ElementKind::Str, 3);

    assert_eq!(
        copy_slice(&source, Some(&mut target), 0),
        Err(Error::ElementTypeMismatch {
            index: 1,
            expected: ElementKind::Str,
            found: ElementKind::Int,
        })
    );
    assert!(target.iter().all(Element::is_null));
}

#[test]
fn test_null_fits_typed_buffer() {
    let source = [Element::from("a"), Element::Null];
    let mut target = Buffer::of_kind(ElementKind::Str, 2);

    copy_slice(&source, Some(&mut target), 0).unwrap();
    assert_eq!(target.get(0), Some(&Element::from("a")));
}
