//! In-memory input channel.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use toroid_language::{InputPoll, InputSource};

/// An input queue the host fills as input arrives.
///
/// An empty open queue reports [`InputPoll::Pending`], which suspends the
/// run until more input is queued. A closed queue reports
/// [`InputPoll::Eof`] once drained.
#[derive(Clone, Debug, Default)]
pub struct QueuedInput {
    chars: VecDeque<char>,
    closed: bool,
}

impl QueuedInput {
    /// Creates an empty, open queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a closed queue holding `text`.
    #[must_use]
    pub fn closed(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            closed: true,
        }
    }

    /// Queues more input.
    pub fn push_str(&mut self, text: &str) {
        self.chars.extend(text.chars());
    }

    /// Marks the end of input.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Characters waiting to be read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl InputSource for QueuedInput {
    fn poll_char(&mut self) -> InputPoll {
        match self.chars.pop_front() {
            Some(c) => InputPoll::Ready(c),
            None if self.closed => InputPoll::Eof,
            None => InputPoll::Pending,
        }
    }
}

/// A [`QueuedInput`] the host keeps a handle to after handing it to an
/// interpreter.
#[derive(Clone, Debug, Default)]
pub struct SharedInput(Rc<RefCell<QueuedInput>>);

impl SharedInput {
    /// Creates an empty, open shared queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues more input.
    pub fn push_str(&self, text: &str) {
        self.0.borrow_mut().push_str(text);
    }

    /// Marks the end of input.
    pub fn close(&self) {
        self.0.borrow_mut().close();
    }

    /// Characters waiting to be read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns true if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl InputSource for SharedInput {
    fn poll_char(&mut self) -> InputPoll {
        self.0.borrow_mut().poll_char()
    }
}
