//! This module is for testing only

use std::cell::RefCell;
use std::rc::Rc;

pub type DropFlag<T> = Rc<RefCell<T>>;

/// Counts how many times it was dropped.
pub struct Droppable {
    pub dropflag: DropFlag<usize>,
}

impl Drop for Droppable {
    fn drop(&mut self) {
        *self.dropflag.borrow_mut() += 1;
    }
}

/// Records its data on drop, so tests can tell which value was released.
pub struct DroppableWithData {
    pub data: i32,
    pub dropflag: DropFlag<Vec<i32>>,
}

impl Drop for DroppableWithData {
    fn drop(&mut self) {
        self.dropflag.borrow_mut().push(self.data);
    }
}

#[test]
fn dropflag() {
    let flag = DropFlag::new(RefCell::new(0));
    let droppable = Droppable { dropflag: flag.clone() };
    assert_eq!(0, *flag.borrow());
    std::mem::drop(droppable);
    assert_eq!(1, *flag.borrow());
}

#[test]
fn dropflag_with_data() {
    let flag = DropFlag::new(RefCell::new(Vec::new()));
    std::mem::drop(DroppableWithData { data: 42, dropflag: flag.clone() });
    std::mem::drop(DroppableWithData { data: 7, dropflag: flag.clone() });
    assert_eq!(vec![42, 7], *flag.borrow());
}
