//! Self-organizing singly linked list with the move-to-front heuristic.
//!
//! Nodes sit in an arena and link through `next` indices. The order changes
//! only through [`SelfOrganizingList::insert`] (new head) and
//! [`SelfOrganizingList::move_to_front`].

use tracing::trace;

use crate::types::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListNode {
    pub v: Value,
    pub next: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelfOrganizingList {
    head: Option<u32>,
    arena: Vec<ListNode>,
}

impl SelfOrganizingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Front-inserts every value in order, so the last value ends up first.
    pub fn from_values(values: &[Value]) -> Self {
        let mut list = Self::new();
        for &v in values {
            list.insert(v);
        }
        list
    }

    pub fn insert(&mut self, v: Value) {
        self.arena.push(ListNode {
            v,
            next: self.head,
        });
        self.head = Some((self.arena.len() - 1) as u32);
    }

    /// Moves the first node holding `v` to the head.
    ///
    /// Returns `false`, leaving the list as is, when `v` is absent or already
    /// at the head.
    pub fn move_to_front(&mut self, v: Value) -> bool {
        let Some(head) = self.head else {
            return false;
        };
        if self.arena[head as usize].v == v {
            return false;
        }

        let mut prev = head;
        let mut curr = self.arena[head as usize].next;
        while let Some(c) = curr {
            if self.arena[c as usize].v == v {
                self.arena[prev as usize].next = self.arena[c as usize].next;
                self.arena[c as usize].next = Some(head);
                self.head = Some(c);
                return true;
            }
            prev = c;
            curr = self.arena[c as usize].next;
        }
        trace!(value = v, "move_to_front: not found");
        false
    }

    pub fn head(&self) -> Option<Value> {
        self.head.map(|h| self.arena[h as usize].v)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            curr: self.head,
        }
    }

    /// Values from head to tail.
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().collect()
    }

    pub fn contains(&self, v: Value) -> bool {
        self.iter().any(|x| x == v)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

pub struct Iter<'a> {
    arena: &'a [ListNode],
    curr: Option<u32>,
}

impl Iterator for Iter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let idx = self.curr?;
        let node = &self.arena[idx as usize];
        self.curr = node.next;
        Some(node.v)
    }
}

impl<'a> IntoIterator for &'a SelfOrganizingList {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
