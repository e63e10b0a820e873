use std::fmt;

use crate::error::BodyError;

/// Identifier naming a body within a simulation.
///
/// Valid values are `0..=BodyId::MAX`. Uniqueness is the caller's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(u32);

impl BodyId {
    pub const MAX: BodyId = BodyId(i32::MAX as u32);

    pub fn new(raw: u32) -> Result<Self, BodyError> {
        if raw > Self::MAX.0 {
            return Err(BodyError::IdOutOfRange(raw));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out sequential identifiers starting at zero. Never wraps.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting at `first`.
    pub fn starting_at(first: BodyId) -> Self {
        Self { next: first.0 }
    }

    pub fn allocate(&mut self) -> Result<BodyId, BodyError> {
        if self.next > BodyId::MAX.0 {
            return Err(BodyError::IdsExhausted);
        }
        let id = BodyId(self.next);
        self.next += 1;
        Ok(id)
    }

    /// Number of identifiers handed out so far.
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_max() {
        let id = BodyId::new(2_147_483_647).unwrap();
        assert_eq!(id, BodyId::MAX);
    }

    #[test]
    fn test_new_rejects_above_max() {
        assert_eq!(
            BodyId::new(2_147_483_648),
            Err(BodyError::IdOutOfRange(2_147_483_648))
        );
        assert!(BodyId::new(u32::MAX).is_err());
    }

    #[test]
    fn test_allocator_is_sequential() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate().unwrap().get(), 0);
        assert_eq!(ids.allocate().unwrap().get(), 1);
        assert_eq!(ids.allocate().unwrap().get(), 2);
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_allocator_does_not_wrap() {
        let mut ids = IdAllocator::starting_at(BodyId::MAX);
        assert_eq!(ids.allocate().unwrap(), BodyId::MAX);
        assert_eq!(ids.allocate(), Err(BodyError::IdsExhausted));
        // Stays exhausted.
        assert_eq!(ids.allocate(), Err(BodyError::IdsExhausted));
    }

    #[test]
    fn test_display() {
        assert_eq!(BodyId::new(42).unwrap().to_string(), "#42");
    }
}
