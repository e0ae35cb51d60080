use std::fmt;

/// Capacity multiplier applied every time the buffer runs out of room.
pub const GROWTH_FACTOR: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    OutOfMemory,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::OutOfMemory => write!(f, "can't allocate memory space"),
        }
    }
}

impl std::error::Error for BufferError {}

/// Byte buffer that grows geometrically before a write would overflow.
///
/// The logical capacity always keeps two bytes of slack at the write cursor:
/// one for the incoming byte and one for a terminator. It never shrinks.
#[derive(Debug)]
pub struct GrowableBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl GrowableBuffer {
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError> {
        let capacity = capacity.max(2);
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| BufferError::OutOfMemory)?;
        Ok(Self { data, capacity })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Makes sure a byte can be written at `write_index` with room left for a
    /// terminator. On allocation failure the storage is released.
    pub fn ensure_capacity(&mut self, write_index: usize) -> Result<(), BufferError> {
        let needed = write_index.saturating_add(2);
        if needed <= self.capacity {
            return Ok(());
        }

        let mut target = self.capacity;
        while target < needed {
            target = target
                .checked_mul(GROWTH_FACTOR)
                .ok_or(BufferError::OutOfMemory)
                .inspect_err(|_| self.release())?;
        }

        let additional = target - self.data.len();
        if self.data.try_reserve_exact(additional).is_err() {
            self.release();
            return Err(BufferError::OutOfMemory);
        }
        self.capacity = target;
        Ok(())
    }

    pub fn push(&mut self, byte: u8) -> Result<(), BufferError> {
        self.ensure_capacity(self.data.len())?;
        self.data.push(byte);
        Ok(())
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        for &byte in bytes {
            self.push(byte)?;
        }
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, replacing invalid UTF-8 sequences.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.data) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    fn release(&mut self) {
        self.data = Vec::new();
        self.capacity = 0;
    }
}
