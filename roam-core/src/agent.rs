use core::fmt::Debug;

/// Stable identifier for a wandering character.
///
/// Determinism depends on two things an id must provide:
/// - stable ordering (`Ord`) so multi-agent ticking happens in a fixed order
/// - a stable numeric id (`stable_id`) for per-agent RNG streams and logs
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}
