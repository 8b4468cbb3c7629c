//! Singly-linked list and LIFO stack.
//!
//! Scratch containers for the iterative tree traversals in
//! `garnet-rbtree`. The list owns its nodes through `Box` links; the
//! stack is a thin adapter over the list's head end.

use static_assertions::assert_eq_size;

struct Node<T> {
    element: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

// A link is a nullable pointer, nothing more.
assert_eq_size!(Link<u64>, usize);

/// Singly-linked list holding any element type.
///
/// Supports O(1) insertion and removal at the head. Elements are
/// dropped iteratively so long lists cannot overflow the call stack.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Create an initially empty list.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Add an element to the front of the list.
    pub fn push_front(&mut self, element: T) {
        self.head = Some(Box::new(Node {
            element,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.element
        })
    }

    /// Iterate over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // push_front reverses, so collect and fold back to front.
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        for element in items.into_iter().rev() {
            list.push_front(element);
        }
        list
    }
}

/// Borrowing iterator over a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.element
        })
    }
}

/// LIFO stack backed by a [`SinglyLinkedList`].
pub struct Stack<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Create an initially empty stack.
    pub const fn new() -> Self {
        Self {
            list: SinglyLinkedList::new(),
        }
    }

    /// Number of elements on the stack.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Push an element onto the top of the stack.
    pub fn push(&mut self, element: T) {
        self.list.push_front(element);
    }

    /// Remove and return the element at the top of the stack.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// The element at the top of the stack, if any.
    pub fn top(&self) -> Option<&T> {
        self.list.first()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
