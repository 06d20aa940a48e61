use crate::MEMORY_SIZE;

/// Byte-addressable memory covering the full 16-bit address space.
///
/// The backing array is fixed-size and never reallocated; every 16-bit
/// address is valid, so reads and writes cannot fail.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            bytes: [0; MEMORY_SIZE],
        }
    }
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    /// Read a little-endian 16-bit word: low byte at `addr`, high byte at
    /// `addr + 1` (wrapping at the top of the address space).
    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr);
        let hi = self.read(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Set every byte to zero.
    pub fn clear(&mut self) {
        self.bytes = [0; MEMORY_SIZE];
    }

    /// Raw view of `len` bytes starting at `start`, for external
    /// formatters (hex dumps and the like). Clamped to the end of the
    /// address space.
    pub fn view(&self, start: u16, len: usize) -> &[u8] {
        let start = start as usize;
        let end = (start + len).min(MEMORY_SIZE);
        &self.bytes[start..end]
    }
}
