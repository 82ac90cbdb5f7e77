multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Issue — a citizen-submitted civic complaint
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Issue<M: ManagedTypeApi> {
    /// Sequential, starting at 1. Never reused.
    pub id: u64,
    pub author: ManagedAddress<M>,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub upvotes: u64,
    pub downvotes: u64,
    /// Block timestamp of the creating transaction
    pub created_at: u64,
}

// ============================================================
// User Vote — one per (issue, voter), immutable once cast
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct UserVote {
    pub has_voted: bool,
    /// `true` for an upvote. Only meaningful when `has_voted` is set.
    pub direction: bool,
}
