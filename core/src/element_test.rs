//! Tests for element identity and kinds

use super::*;
use crate::list::{ArrayList, List};
use pretty_assertions::assert_eq;

#[test]
fn test_scalars_compare_by_value() {
    assert_eq!(Element::from("a"), Element::str(String::from("a")));
    assert_eq!(Element::from(3), Element::Int(3));
    assert_ne!(Element::from(3), Element::from(3.0));
    assert_ne!(Element::Null, Element::from(false));
}

#[test]
fn test_lists_compare_by_identity() {
    let list = ArrayList::from_elements([Element::from(1)]);
    let twin = ArrayList::from_elements([Element::from(1)]);

    let a = Element::from(list.clone().into_dyn());
    let b = Element::from(list.into_dyn());
    assert_eq!(a, b);
    assert_ne!(a, Element::from(twin.into_dyn()));
}

#[test]
fn test_opaque_compares_by_pointer() {
    let handle = Element::opaque(7_u8);
    assert_eq!(handle, handle.clone());
    assert_ne!(handle, Element::opaque(7_u8));
    assert_eq!(handle.downcast_ref::<u8>(), Some(&7));
    assert_eq!(handle.downcast_ref::<u16>(), None);
}

#[test]
fn test_option_maps_none_to_null() {
    assert!(Element::from(None::<&str>).is_null());
    assert_eq!(Element::from(Some("x")).as_str(), Some("x"));
}

#[test]
fn test_kind_admits() {
    let text = Element::from("x");
    assert!(ElementKind::Any.admits(&text));
    assert!(ElementKind::Str.admits(&text));
    assert!(ElementKind::Str.admits(&Element::Null));
    assert!(!ElementKind::Int.admits(&text));
    assert!(!ElementKind::Null.admits(&text));
}

#[test]
fn test_debug_prints_list_id() {
    let list = ArrayList::new();
    let element = Element::from(list.clone().into_dyn());
    assert_eq!(format!("{element:?}"), format!("List({})", list.id()));
}
