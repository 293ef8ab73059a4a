use super::*;

#[test]
fn new_storage_has_no_capacity() {
  let storage: StackStorage<i32> = StackStorage::new();
  assert_eq!(storage.len(), 0);
  assert_eq!(storage.capacity(), 0);
  assert!(storage.is_empty());
  assert!(storage.is_full());
}

#[test]
fn with_capacity_creates_empty_storage() {
  let storage: StackStorage<i32> = StackStorage::with_capacity(10).unwrap();
  assert_eq!(storage.len(), 0);
  assert_eq!(storage.capacity(), 10);
  assert!(storage.is_empty());
  assert!(!storage.is_full());
}

#[test]
fn with_capacity_reports_alloc_error_on_overflow() {
  let result: Result<StackStorage<u64>, StackError> = StackStorage::with_capacity(usize::MAX);
  assert_eq!(result.unwrap_err(), StackError::AllocError);
}

#[test]
fn push_and_pop_operations() {
  let mut storage = StackStorage::with_capacity(5).unwrap();

  storage.push(1);
  storage.push(2);
  storage.push(3);

  assert_eq!(storage.len(), 3);
  assert!(!storage.is_empty());

  assert_eq!(storage.pop(), Some(3));
  assert_eq!(storage.pop(), Some(2));
  assert_eq!(storage.pop(), Some(1));
  assert_eq!(storage.pop(), None);
  assert!(storage.is_empty());
}

#[test]
fn peek_returns_last_element() {
  let mut storage = StackStorage::with_capacity(5).unwrap();

  assert_eq!(storage.peek(), None);

  storage.push(10);
  assert_eq!(storage.peek(), Some(&10));

  storage.push(20);
  assert_eq!(storage.peek(), Some(&20));

  if let Some(top) = storage.peek_mut() {
    *top = 21;
  }
  assert_eq!(storage.pop(), Some(21));
  assert_eq!(storage.peek(), Some(&10));
}

#[test]
fn try_grow_increases_capacity() {
  let mut storage = StackStorage::with_capacity(5).unwrap();

  storage.push(1);
  storage.push(2);

  assert_eq!(storage.capacity(), 5);

  assert!(storage.try_grow(10).is_ok());
  assert_eq!(storage.capacity(), 10);

  // Growing to same or smaller capacity is no-op
  assert!(storage.try_grow(8).is_ok());
  assert_eq!(storage.capacity(), 10);

  assert_eq!(storage.as_slice(), &[1, 2]);
}

#[test]
fn try_grow_failure_leaves_storage_intact() {
  let mut storage = StackStorage::with_capacity(2).unwrap();
  storage.push(7_u64);

  assert_eq!(storage.try_grow(usize::MAX), Err(StackError::AllocError));
  assert_eq!(storage.capacity(), 2);
  assert_eq!(storage.as_slice(), &[7]);
}

#[test]
fn clear_keeps_capacity() {
  let mut storage = StackStorage::with_capacity(3).unwrap();
  storage.push('a');
  storage.push('b');
  storage.clear();
  assert!(storage.is_empty());
  assert_eq!(storage.capacity(), 3);
}

#[test]
fn clone_copies_occupied_prefix_and_capacity() {
  let mut storage = StackStorage::with_capacity(4).unwrap();
  storage.push(1);
  storage.push(2);

  let copy = storage.clone();
  assert_eq!(copy.capacity(), 4);
  assert_eq!(copy.as_slice(), &[1, 2]);
  assert_ne!(copy.as_slice().as_ptr(), storage.as_slice().as_ptr());
}

#[test]
fn clone_from_replaces_contents() {
  let mut source = StackStorage::with_capacity(6).unwrap();
  source.push(3);
  let mut target = StackStorage::with_capacity(1).unwrap();
  target.push(9);

  target.clone_from(&source);
  assert_eq!(target.capacity(), 6);
  assert_eq!(target.as_slice(), &[3]);
}

#[test]
fn try_clone_copies_contents() {
  let mut storage = StackStorage::with_capacity(2).unwrap();
  storage.push(5);
  let copy = storage.try_clone().unwrap();
  assert_eq!(copy.capacity(), 2);
  assert_eq!(copy.as_slice(), &[5]);
}
