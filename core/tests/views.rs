//! Integration tests for stacked views.
//!
//! Views alias the storage of the list they wrap, so changes made through
//! one handle are visible through every other handle of the same root.

use dynlist_core::views::Adapter;
use dynlist_core::{
    ArrayList, Buffer, Element, Error, List, Result, adapt, fixed_size, range, read_only,
    synchronized,
};
use pretty_assertions::assert_eq;

fn numbers(len: i64) -> ArrayList {
    (0..len).map(Element::Int).collect()
}

#[test]
fn test_changes_visible_through_every_handle() {
    let list = numbers(6);
    let root = list.clone().into_dyn();
    let frozen = read_only(root.clone());
    let fixed = fixed_size(root.clone());
    let window = range(root.clone(), 2, 3).unwrap();

    fixed.set(2, Element::from("two")).unwrap();

    assert_eq!(frozen.get(2).unwrap(), Element::from("two"));
    assert_eq!(window.get(0).unwrap(), Element::from("two"));
    assert_eq!(list.get(2).unwrap(), Element::from("two"));
}

#[test]
fn test_range_of_range_translates_twice() {
    let list = numbers(10);
    let outer = range(list.clone().into_dyn(), 2, 6).unwrap();
    let inner = range(outer.clone(), 1, 3).unwrap();

    assert_eq!(inner.to_vec().unwrap(), [3, 4, 5].map(Element::Int).to_vec());

    inner.add(Element::Null).unwrap();
    assert_eq!(outer.count().unwrap(), 7);
    assert_eq!(list.get(6).unwrap(), Element::Null);

    let mut target = Buffer::new(2);
    inner.copy_range_to(2, Some(&mut target), 0, 2).unwrap();
    assert_eq!(target.into_vec(), vec![Element::Int(5), Element::Null]);

    // The outer range saw the change made through `inner`, but a mutation
    // through `outer` is invisible to `inner`.
    outer.remove_at(0).unwrap();
    assert!(matches!(inner.count(), Err(Error::StaleView { .. })));
}

#[test]
fn test_stale_range_stays_stale() {
    let list = numbers(4);
    let window = list.get_range(0, 2).unwrap();

    list.insert(0, Element::Null).unwrap();
    assert!(window.count().is_err());

    // A non-structural change does not make it valid again.
    list.set(0, Element::Int(0)).unwrap();
    assert!(matches!(window.get(0), Err(Error::StaleView { .. })));
}

#[test]
fn test_read_only_range_of_synchronized() {
    let list = numbers(5);
    let view = read_only(range(synchronized(list.clone().into_dyn()), 1, 3).unwrap());

    assert!(view.is_read_only());
    assert!(view.is_synchronized());
    assert_eq!(view.count().unwrap(), 3);
    assert_eq!(view.index_of(&Element::Int(3)).unwrap(), Some(2));
    assert!(matches!(
        view.clear(),
        Err(Error::UnsupportedOperation { op: "clear", .. })
    ));
    assert_eq!(list.count().unwrap(), 5);
}

#[test]
fn test_fixed_size_range_allows_set() {
    let list = numbers(5);
    let view = fixed_size(range(list.clone().into_dyn(), 1, 2).unwrap());

    view.set(1, Element::from("x")).unwrap();
    assert_eq!(list.get(2).unwrap(), Element::from("x"));
    assert!(view.add(Element::Null).is_err());
    assert!(view.is_fixed_size());
}

/// A read-only sequence owned by the caller.
struct Frozen(Vec<Element>);

// Not imported: `ArrayList` and `Vec<Element>` implement both traits, so their
// `get` calls would resolve to `ListLike`.
impl dynlist_core::views::ListLike for Frozen {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, index: usize) -> Result<Element> {
        self.0.as_slice().get(index).cloned().ok_or(Error::IndexOutOfRange {
            param: "index",
            value: index as isize,
        })
    }

    fn set(&mut self, _index: usize, _value: Element) -> Result<()> {
        Err(Error::UnsupportedOperation {
            op: "set",
            policy: "frozen",
        })
    }

    fn insert(&mut self, _index: usize, _value: Element) -> Result<()> {
        Err(Error::UnsupportedOperation {
            op: "insert",
            policy: "frozen",
        })
    }

    fn remove_at(&mut self, _index: usize) -> Result<()> {
        Err(Error::UnsupportedOperation {
            op: "remove_at",
            policy: "frozen",
        })
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn is_fixed_size(&self) -> bool {
        true
    }
}

#[test]
fn test_adapter_reports_foreign_policy() {
    let adapter = Adapter::new(Frozen(vec![Element::from(1), Element::from(2)]));

    assert!(adapter.is_read_only());
    assert!(adapter.is_fixed_size());
    assert_eq!(
        adapter.add(Element::Null),
        Err(Error::UnsupportedOperation {
            op: "insert",
            policy: "frozen",
        })
    );
    assert_eq!(adapter.version(), 0);

    let mut target = Buffer::new(2);
    adapter.copy_to(Some(&mut target), 0).unwrap();
    assert_eq!(target.into_vec(), vec![Element::from(1), Element::from(2)]);
}

#[test]
fn test_adapter_of_view_handles() {
    let list = numbers(3);
    let view = adapt(list.clone());
    let frozen = read_only(view.clone());

    view.add(Element::Int(3)).unwrap();

    assert_eq!(frozen.count().unwrap(), 4);
    assert_eq!(view.version(), List::version(&list));
}

#[test]
fn test_list_holding_views_of_itself() {
    let list = numbers(2);
    let view = read_only(list.clone().into_dyn());

    list.add(Element::List(view.clone())).unwrap();
    let held = list.get(2).unwrap();
    let nested = held.as_list().unwrap();

    assert_eq!(nested.count().unwrap(), 3);
    assert_eq!(nested.id(), view.id());

    list.remove(&Element::List(view)).unwrap();
    assert_eq!(list.count().unwrap(), 2);
}
