use crate::collections::stack::Stack;

fn abc() -> Stack<char> {
  let mut stack = Stack::new();
  for value in ['a', 'b', 'c'] {
    stack.push(value).unwrap();
  }
  stack
}

#[test]
fn begin_points_at_bottom_element() {
  let stack = abc();
  let cursor = stack.begin();
  assert_eq!(cursor.index(), 0);
  assert_eq!(cursor.current(), Some(&'a'));
  assert!(!cursor.is_end());
}

#[test]
fn end_points_past_top_element() {
  let stack = abc();
  let cursor = stack.end();
  assert_eq!(cursor.index(), 3);
  assert_eq!(cursor.current(), None);
  assert!(cursor.is_end());
}

#[test]
fn walking_from_begin_reaches_end() {
  let stack = abc();
  let end = stack.end();
  let mut cursor = stack.begin();
  let mut seen = Vec::new();
  while cursor != end {
    seen.extend(cursor.current().copied());
    assert!(cursor.move_next());
  }
  assert_eq!(seen, vec!['a', 'b', 'c']);
  assert!(!cursor.move_next());
  assert_eq!(cursor, end);
}

#[test]
fn walking_back_from_end_reaches_begin() {
  let stack = abc();
  let begin = stack.begin();
  let mut cursor = stack.end();
  let mut seen = Vec::new();
  while cursor != begin {
    assert!(cursor.move_prev());
    seen.extend(cursor.current().copied());
  }
  assert_eq!(seen, vec!['c', 'b', 'a']);
  assert!(!cursor.move_prev());
}

#[test]
fn copies_keep_their_own_position() {
  let stack = abc();
  let mut cursor = stack.begin();
  let snapshot = cursor;
  cursor.move_next();
  assert_eq!(snapshot.current(), Some(&'a'));
  assert_eq!(cursor.current(), Some(&'b'));
  assert_ne!(snapshot, cursor);
}

#[test]
fn cursors_of_different_stacks_differ() {
  let left = abc();
  let right = abc();
  assert_ne!(left.begin(), right.begin());
}
