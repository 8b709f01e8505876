//! The ordered container used as the A* open set.
//!
//! [`Frontier`] is a sequence of elements that is either kept sorted by a
//! comparator (stable among equal keys) or, without a comparator, behaves as
//! a plain double-ended queue. Membership and removal compare elements by
//! [`Identity`], never by value.
//!
//! Two kinds of removal exist and behave differently with respect to the
//! optional discard hook:
//!
//! | Operation | Ownership | Discard hook |
//! |---|---|---|
//! | [`pop_front`](Frontier::pop_front), [`detach_all`](Frontier::detach_all) | moves to the caller | not called |
//! | [`remove`](Frontier::remove), [`reset`](Frontier::reset), drop | discarded | called once per element |

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Identity comparison for frontier elements.
///
/// Two elements are "the same" when they refer to the same underlying
/// object, regardless of any value they carry.
pub trait Identity {
    fn is_same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for &T {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

type Comparator<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;
type DiscardHook<'a, T> = Box<dyn FnMut(T) + 'a>;

/// Sorted sequence with stable ties, or a plain FIFO/LIFO queue.
pub struct Frontier<'a, T> {
    items: VecDeque<T>,
    cmp: Option<Comparator<'a, T>>,
    on_discard: Option<DiscardHook<'a, T>>,
}

impl<T> Default for Frontier<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Frontier<'a, T> {
    /// Create an unordered frontier (plain queue).
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            cmp: None,
            on_discard: None,
        }
    }

    /// Create a frontier kept in ascending order by `cmp`.
    pub fn ordered_by(cmp: impl Fn(&T, &T) -> Ordering + 'a) -> Self {
        Self {
            items: VecDeque::new(),
            cmp: Some(Box::new(cmp)),
            on_discard: None,
        }
    }

    /// Install a hook called with every element that is discarded by
    /// [`remove`](Self::remove), [`reset`](Self::reset) or drop (builder).
    pub fn with_discard(mut self, hook: impl FnMut(T) + 'a) -> Self {
        self.on_discard = Some(Box::new(hook));
        self
    }

    /// Whether a comparator was configured.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.cmp.is_some()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert `e` before the first element `c` with `cmp(e, c) == Less`, or
    /// at the end if there is none. Equal keys keep insertion order.
    ///
    /// Without a comparator this is [`push_back`](Self::push_back).
    pub fn insert_ordered(&mut self, e: T) {
        let Some(cmp) = self.cmp.as_ref() else {
            self.items.push_back(e);
            return;
        };
        let at = self
            .items
            .iter()
            .position(|c| cmp(&e, c) == Ordering::Less)
            .unwrap_or(self.items.len());
        self.items.insert(at, e);
    }

    /// Append `e`. Ordered frontiers insert by key instead.
    pub fn push_back(&mut self, e: T) {
        if self.cmp.is_some() {
            self.insert_ordered(e);
        } else {
            self.items.push_back(e);
        }
    }

    /// Prepend `e`. Ordered frontiers insert by key instead.
    pub fn push_front(&mut self, e: T) {
        if self.cmp.is_some() {
            self.insert_ordered(e);
        } else {
            self.items.push_front(e);
        }
    }

    /// First element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Remove and return the first element. The discard hook is not called.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Remove every element and hand them back in order. The discard hook is
    /// not called.
    pub fn detach_all(&mut self) -> Vec<T> {
        Vec::from(std::mem::take(&mut self.items))
    }

    /// Remove every element, passing each one to the discard hook.
    pub fn reset(&mut self) {
        while let Some(e) = self.items.pop_front() {
            if let Some(hook) = self.on_discard.as_mut() {
                hook(e);
            }
        }
    }

    /// Iterate over the elements front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T: Identity> Frontier<'_, T> {
    /// Remove the first element identical to `e`, passing it to the discard
    /// hook. Returns whether an element was removed.
    pub fn remove(&mut self, e: &T) -> bool {
        let Some(at) = self.items.iter().position(|c| c.is_same(e)) else {
            return false;
        };
        if let Some(removed) = self.items.remove(at) {
            if let Some(hook) = self.on_discard.as_mut() {
                hook(removed);
            }
        }
        true
    }

    /// Whether an element identical to `e` is present.
    pub fn exists(&self, e: &T) -> bool {
        self.items.iter().any(|c| c.is_same(e))
    }
}

impl<T> Drop for Frontier<'_, T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T: fmt::Debug> fmt::Debug for Frontier<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frontier")
            .field("items", &self.items)
            .field("ordered", &self.cmp.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug)]
    struct Item {
        key: i32,
        name: &'static str,
    }

    fn item(key: i32, name: &'static str) -> Rc<Item> {
        Rc::new(Item { key, name })
    }

    fn by_key(a: &Rc<Item>, b: &Rc<Item>) -> Ordering {
        a.key.cmp(&b.key)
    }

    fn names(f: &Frontier<'_, Rc<Item>>) -> Vec<&'static str> {
        f.iter().map(|i| i.name).collect()
    }

    #[test]
    fn ordered_insert_keeps_sorted() {
        let mut f = Frontier::ordered_by(by_key);
        for (k, n) in [(5, "e"), (1, "a"), (3, "c"), (4, "d"), (2, "b")] {
            f.insert_ordered(item(k, n));
        }
        assert_eq!(names(&f), ["a", "b", "c", "d", "e"]);
        let keys: Vec<_> = f.iter().map(|i| i.key).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut f = Frontier::ordered_by(by_key);
        f.insert_ordered(item(2, "first"));
        f.insert_ordered(item(1, "low"));
        f.insert_ordered(item(2, "second"));
        f.insert_ordered(item(2, "third"));
        f.insert_ordered(item(3, "high"));
        assert_eq!(names(&f), ["low", "first", "second", "third", "high"]);
    }

    #[test]
    fn unordered_queue_operations() {
        let mut f = Frontier::new();
        f.push_back(item(0, "b"));
        f.push_back(item(0, "c"));
        f.push_front(item(0, "a"));
        assert!(!f.is_ordered());
        assert_eq!(names(&f), ["a", "b", "c"]);
        assert_eq!(f.pop_front().map(|i| i.name), Some("a"));
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn push_degrades_to_ordered_insert() {
        let mut f = Frontier::ordered_by(by_key);
        f.push_front(item(3, "c"));
        f.push_back(item(1, "a"));
        f.push_front(item(2, "b"));
        assert_eq!(names(&f), ["a", "b", "c"]);
    }

    #[test]
    fn pop_front_on_empty_is_none() {
        let mut f: Frontier<'_, Rc<Item>> = Frontier::new();
        assert!(f.pop_front().is_none());
        assert!(f.front().is_none());
        assert!(f.is_empty());
    }

    #[test]
    fn identity_not_value() {
        let a = item(7, "same");
        let b = item(7, "same");
        let mut f = Frontier::ordered_by(by_key);
        f.insert_ordered(Rc::clone(&a));
        assert!(f.exists(&a));
        assert!(!f.exists(&b));

        f.insert_ordered(Rc::clone(&b));
        assert!(f.remove(&b));
        assert_eq!(f.len(), 1);
        assert!(Rc::ptr_eq(f.front().unwrap(), &a));
        assert!(!f.remove(&b));
    }

    #[test]
    fn reference_elements_use_pointer_identity() {
        let values = [1, 1, 1];
        let mut f = Frontier::new();
        f.push_back(&values[0]);
        f.push_back(&values[1]);
        assert!(f.exists(&&values[1]));
        assert!(!f.exists(&&values[2]));
        assert!(f.remove(&&values[0]));
        assert!(std::ptr::eq(*f.front().unwrap(), &values[1]));
    }

    #[test]
    fn discard_hook_fires_on_remove_and_reset_only() {
        let discarded = RefCell::new(Vec::new());
        let mut f = Frontier::ordered_by(by_key).with_discard(|i: Rc<Item>| {
            discarded.borrow_mut().push(i.name);
        });
        let items: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .enumerate()
            .map(|(k, n)| item(k as i32, *n))
            .collect();
        for i in &items {
            f.insert_ordered(Rc::clone(i));
        }

        let popped = f.pop_front();
        assert_eq!(popped.map(|i| i.name), Some("a"));
        assert!(discarded.borrow().is_empty());

        assert!(f.remove(&items[2]));
        assert_eq!(*discarded.borrow(), ["c"]);

        f.reset();
        assert!(f.is_empty());
        drop(f);
        assert_eq!(*discarded.borrow(), ["c", "b", "d", "e"]);
    }

    #[test]
    fn detach_all_transfers_without_discard() {
        let count = Cell::new(0);
        let mut f = Frontier::new().with_discard(|_: Rc<Item>| count.set(count.get() + 1));
        f.push_back(item(0, "x"));
        f.push_back(item(0, "y"));
        let out = f.detach_all();
        assert_eq!(out.iter().map(|i| i.name).collect::<Vec<_>>(), ["x", "y"]);
        assert!(f.is_empty());
        drop(f);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn drop_discards_remaining_elements_once() {
        let count = Cell::new(0);
        {
            let mut f = Frontier::new().with_discard(|_: Rc<Item>| count.set(count.get() + 1));
            f.push_back(item(0, "x"));
            f.push_back(item(0, "y"));
            f.push_back(item(0, "z"));
        }
        assert_eq!(count.get(), 3);
    }
}
