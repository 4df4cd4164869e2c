//! Singly-linked node chain with tagged payload ownership
//!
//! This crate holds the node-level algorithms behind `boundlist`: walking,
//! wraparound addressing, deep copy and teardown. Every node carries its
//! payload as either a borrow of caller memory or a buffer the chain owns,
//! so releasing a chain can never free memory it did not allocate.
//!
//! Teardown and copy are iterative. A chain of any length is walked with a
//! constant amount of stack.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

/// Result type for chain operations.
pub type Result<T> = core::result::Result<T, ChainError>;

/// Errors raised while copying a chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("record {index} holds {actual} bytes, copy requested {expected}")]
    ShortRecord {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Payload of a single node.
///
/// `Owned` is produced only by [`deep_copy`]; appending caller memory always
/// yields `Borrowed`.
#[derive(Debug)]
pub enum Payload<'a> {
    /// Caller memory. The caller keeps ownership; the borrow ends with the node.
    Borrowed(&'a mut [u8]),
    /// A buffer allocated by a copy operation and freed with the node.
    Owned(Box<[u8]>),
}

static_assertions::assert_impl_all!(Payload<'static>: Send, Sync);

impl Payload<'_> {
    /// View the record bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Borrowed(data) => data,
            Payload::Owned(data) => data,
        }
    }

    /// Mutable view of the record bytes. The length cannot change.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Payload::Borrowed(data) => data,
            Payload::Owned(data) => data,
        }
    }

    /// True if this payload was allocated by the chain.
    pub fn is_owned(&self) -> bool {
        matches!(self, Payload::Owned(_))
    }
}

/// Link to the next node; `None` terminates the chain.
pub type Link<'a> = Option<Box<Node<'a>>>;

/// A chain node.
pub struct Node<'a> {
    pub payload: Payload<'a>,
    pub next: Link<'a>,
}

static_assertions::assert_impl_all!(Node<'static>: Send);

impl<'a> Node<'a> {
    /// Node referencing caller memory.
    pub fn borrowed(data: &'a mut [u8]) -> Box<Self> {
        Box::new(Self {
            payload: Payload::Borrowed(data),
            next: None,
        })
    }

    /// Node owning a freshly allocated record.
    pub fn owned(data: Box<[u8]>) -> Box<Self> {
        Box::new(Self {
            payload: Payload::Owned(data),
            next: None,
        })
    }
}

impl Drop for Node<'_> {
    fn drop(&mut self) {
        // Unlink one node at a time so the default recursive drop never runs.
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("payload", &self.payload)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// Counts returned by [`release`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Released {
    /// Nodes freed.
    pub nodes: usize,
    /// Of those, nodes whose payload was owned and freed with them.
    pub owned: usize,
}

/// Tear down a chain head to tail.
///
/// Owned payloads are freed with their node. Borrowed payloads are left to
/// the caller.
pub fn release(link: Link<'_>) -> Released {
    let mut released = Released::default();
    let mut next = link;
    while let Some(mut node) = next {
        next = node.next.take();
        released.nodes += 1;
        if node.payload.is_owned() {
            released.owned += 1;
        }
    }
    released
}

/// Number of nodes reachable from `link`.
pub fn len(link: &Link<'_>) -> usize {
    iter(link).count()
}

/// Deep copy of the chain rooted at `src`.
///
/// Every new node owns an `element_size`-byte buffer copied from the
/// corresponding source record. Nothing is shared with the source. A source
/// record shorter than `element_size` aborts the copy; the partial copy is
/// released before returning.
pub fn deep_copy<'b>(src: &Link<'_>, element_size: usize) -> Result<Link<'b>> {
    let mut head: Link<'b> = None;
    let mut tail = &mut head;

    for (index, bytes) in iter(src).enumerate() {
        let record = bytes.get(..element_size).ok_or(ChainError::ShortRecord {
            index,
            expected: element_size,
            actual: bytes.len(),
        })?;
        let node = tail.insert(Node::owned(Box::from(record)));
        tail = &mut node.next;
    }

    Ok(head)
}

/// Last link of the chain (the `None` slot after the tail).
pub fn tail_slot<'c, 'a>(mut link: &'c mut Link<'a>) -> &'c mut Link<'a> {
    while let Some(ref mut node) = *link {
        link = &mut node.next;
    }
    link
}

/// Link reached after walking `steps` nodes, without wraparound.
///
/// `steps == 0` is the head slot itself; `steps == len` is the slot after the
/// tail. Returns `None` when the chain ends first.
pub fn link_at<'c, 'a>(mut link: &'c Link<'a>, steps: usize) -> Option<&'c Link<'a>> {
    for _ in 0..steps {
        link = &link.as_ref()?.next;
    }
    Some(link)
}

/// Mutable form of [`link_at`].
pub fn link_at_mut<'c, 'a>(mut link: &'c mut Link<'a>, steps: usize) -> Option<&'c mut Link<'a>> {
    for _ in 0..steps {
        match *link {
            Some(ref mut node) => link = &mut node.next,
            None => return None,
        }
    }
    Some(link)
}

/// Index reached by walking `steps` nodes from `head` with wraparound.
///
/// After the first lap the remaining steps are reduced modulo the chain
/// length, so large counts cost at most two laps.
fn wrapped_index(head: &Node<'_>, steps: usize) -> usize {
    let mut node = head;
    let mut index = 0;
    let mut remaining = steps;

    while remaining > 0 {
        remaining -= 1;
        match node.next.as_deref() {
            Some(next) => {
                node = next;
                index += 1;
            }
            None => {
                node = head;
                remaining %= index + 1;
                index = 0;
            }
        }
    }
    index
}

/// Walk `steps` nodes from `head`, restarting at `head` whenever the walk
/// would step past the tail.
///
/// Any step count resolves to a node: the one at `steps % len`. Taking `head`
/// by reference leaves the empty-chain case to the caller.
pub fn advance_with_wrap<'c, 'a>(head: &'c Node<'a>, steps: usize) -> &'c Node<'a> {
    let mut node = head;
    for _ in 0..wrapped_index(head, steps) {
        match node.next.as_deref() {
            Some(next) => node = next,
            None => break,
        }
    }
    node
}

/// Mutable form of [`advance_with_wrap`].
pub fn advance_with_wrap_mut<'c, 'a>(head: &'c mut Node<'a>, steps: usize) -> &'c mut Node<'a> {
    let index = wrapped_index(head, steps);
    let mut node = head;
    for _ in 0..index {
        match node.next {
            Some(ref mut next) => node = &mut **next,
            None => break,
        }
    }
    node
}

/// Iterator over the records of a chain, head to tail.
pub struct Iter<'c, 'a> {
    next: Option<&'c Node<'a>>,
}

impl<'c> Iterator for Iter<'c, '_> {
    type Item = &'c [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.payload.as_bytes()
        })
    }
}

/// Mutable iterator over the records of a chain, head to tail.
pub struct IterMut<'c, 'a> {
    next: Option<&'c mut Node<'a>>,
}

impl<'c> Iterator for IterMut<'c, '_> {
    type Item = &'c mut [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            node.payload.as_bytes_mut()
        })
    }
}

/// Records of the chain rooted at `link`.
pub fn iter<'c, 'a>(link: &'c Link<'a>) -> Iter<'c, 'a> {
    Iter {
        next: link.as_deref(),
    }
}

/// Mutable records of the chain rooted at `link`.
pub fn iter_mut<'c, 'a>(link: &'c mut Link<'a>) -> IterMut<'c, 'a> {
    IterMut {
        next: link.as_deref_mut(),
    }
}
