use lockvec::{Cursor, LockVec};

#[test]
fn test_begin_and_end_positions() {
    let v = LockVec::from(vec![1, 2, 3]);

    assert_eq!(v.begin().index(), 0);
    assert_eq!(v.end().index(), 3);
}

#[test]
fn test_offset_addition() {
    let v = LockVec::from(vec![1, 2, 3, 4]);

    let c = v.begin() + 3;
    assert_eq!(c.index(), 3);
    assert_eq!((c - 2).index(), 1);
}

#[test]
fn test_symmetric_addition() {
    let v = LockVec::from(vec![1, 2, 3, 4]);

    assert_eq!(2 + v.begin(), v.begin() + 2);
}

#[test]
fn test_stepping() {
    let v = LockVec::from(vec![1, 2, 3]);

    let mut c = v.begin();
    c += 1;
    c += 1;
    assert_eq!(c.index(), 2);
    c -= 1;
    assert_eq!(c.index(), 1);
}

#[test]
fn test_distance() {
    let v = LockVec::from(vec![1, 2, 3, 4, 5]);

    assert_eq!(v.end() - v.begin(), 5);
    assert_eq!(v.begin() - v.end(), -5);
    assert_eq!((v.begin() + 2) - (v.begin() + 2), 0);
}

#[test]
fn test_ordering() {
    let v = LockVec::from(vec![1, 2, 3]);

    assert!(v.begin() < v.end());
    assert!(v.begin() + 1 <= v.begin() + 1);
    assert!(v.end() > v.begin() + 2);
    assert!(v.end() >= v.end());
    assert_ne!(v.begin(), v.end());
}

#[test]
fn test_begin_equals_end_when_empty() {
    let v: LockVec<i32> = LockVec::new();

    assert_eq!(v.begin(), v.end());
    assert_eq!(v.end() - v.begin(), 0);
}

#[test]
fn test_default_cursor_is_position_zero() {
    assert_eq!(Cursor::default().index(), 0);
}

#[test]
fn test_cursor_addresses_element_through_container() {
    let v = LockVec::from(vec![10, 20, 30]);

    let c = v.begin() + 1;
    assert_eq!(*v.get(c.index()).unwrap(), 20);
}

#[test]
#[should_panic(expected = "Cursor offset out of range")]
fn test_offset_below_zero_panics() {
    let v: LockVec<i32> = LockVec::new();
    let _ = v.begin() - 1;
}
