//! Slot arithmetic for a buffer addressed through a front offset.

/// Physical slot `offset` positions after `front`, wrapping at `capacity`.
#[inline]
pub fn slot_after(front: usize, offset: usize, capacity: usize) -> usize {
    debug_assert!(front < capacity && offset <= capacity);
    let slot = front + offset;
    if slot >= capacity { slot - capacity } else { slot }
}

/// Physical slot just before `front`, wrapping to the last slot.
#[inline]
pub fn slot_before(front: usize, capacity: usize) -> usize {
    debug_assert!(front < capacity);
    if front == 0 { capacity - 1 } else { front - 1 }
}
