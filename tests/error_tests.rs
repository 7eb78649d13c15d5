use lockvec::{LockVec, LockVecError};

#[test]
fn test_get_at_len_is_out_of_bounds() {
    let v = LockVec::from(vec![1, 2, 3]);

    assert_eq!(
        v.get(3).unwrap_err(),
        LockVecError::IndexOutOfBounds {
            index: 3,
            length: 3
        }
    );
}

#[test]
fn test_get_last_valid_index_succeeds() {
    let v = LockVec::from(vec![1, 2, 3]);

    assert_eq!(*v.get(2).unwrap(), 3);
}

#[test]
fn test_get_on_empty_vector() {
    let v: LockVec<i32> = LockVec::new();

    assert_eq!(
        v.get(0).unwrap_err(),
        LockVecError::IndexOutOfBounds {
            index: 0,
            length: 0
        }
    );
}

#[test]
fn test_get_mut_out_of_bounds() {
    let v = LockVec::from(vec![1]);

    assert_eq!(
        v.get_mut(5).unwrap_err(),
        LockVecError::IndexOutOfBounds {
            index: 5,
            length: 1
        }
    );
}

#[test]
fn test_insert_past_end_is_rejected() {
    let v = LockVec::from(vec![1, 2]);

    let result = v.insert(v.end() + 1, 9);
    assert_eq!(
        result.unwrap_err(),
        LockVecError::IndexOutOfBounds {
            index: 3,
            length: 2
        }
    );
    // The failed insert left the contents untouched.
    assert_eq!(v.to_vec(), [1, 2]);
}

#[test]
fn test_insert_many_past_end_is_rejected() {
    let v = LockVec::from(vec![1]);

    assert_eq!(
        v.insert_many(v.end() + 2, 3, 0).unwrap_err(),
        LockVecError::IndexOutOfBounds {
            index: 3,
            length: 1
        }
    );
}

#[test]
fn test_erase_at_end_is_rejected() {
    let v = LockVec::from(vec![1, 2]);

    assert_eq!(
        v.erase(v.end()).unwrap_err(),
        LockVecError::IndexOutOfBounds {
            index: 2,
            length: 2
        }
    );
}

#[test]
fn test_erase_range_inverted_is_rejected() {
    let v = LockVec::from(vec![1, 2, 3]);

    assert_eq!(
        v.erase_range(v.begin() + 2, v.begin() + 1).unwrap_err(),
        LockVecError::InvalidRange {
            first: 2,
            last: 1,
            length: 3
        }
    );
}

#[test]
fn test_erase_range_past_end_is_rejected() {
    let v = LockVec::from(vec![1, 2, 3]);

    assert_eq!(
        v.erase_range(v.begin() + 1, v.end() + 2).unwrap_err(),
        LockVecError::InvalidRange {
            first: 1,
            last: 5,
            length: 3
        }
    );
    assert_eq!(v.to_vec(), [1, 2, 3]);
}

#[test]
fn test_stale_cursor_surfaces_as_error() {
    let v = LockVec::from(vec![1, 2, 3]);
    let stale = v.end() - 1;

    // A structural mutation invalidates the cursor; using it afterward
    // reports an error instead of touching freed memory.
    v.erase_range(v.begin(), v.end()).unwrap();
    assert_eq!(
        v.erase(stale).unwrap_err(),
        LockVecError::IndexOutOfBounds {
            index: 2,
            length: 0
        }
    );
}

#[test]
fn test_error_messages() {
    let out_of_bounds = LockVecError::IndexOutOfBounds {
        index: 4,
        length: 2,
    };
    assert_eq!(
        out_of_bounds.to_string(),
        "Index out of bounds: index 4 is beyond vector length 2"
    );

    let invalid_range = LockVecError::InvalidRange {
        first: 3,
        last: 1,
        length: 5,
    };
    assert_eq!(
        invalid_range.to_string(),
        "Invalid range: [3, 1) does not fit vector length 5"
    );
}
