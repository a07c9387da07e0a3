//! Request identity for in-flight searches.
//!
//! Every submit allocates a fresh id from a monotonic sequence. The session
//! stores the id of the most recently issued request and only a completion
//! carrying that id may mutate state; completions for superseded requests
//! are discarded by the reducer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

#[derive(Debug, Default)]
pub struct RequestSeq {
    next: u64,
}

impl RequestSeq {
    pub fn next_id(&mut self) -> RequestId {
        let id = RequestId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
