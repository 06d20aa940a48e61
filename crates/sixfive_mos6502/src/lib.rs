pub mod cpu;
pub mod instructions;
pub mod memory;
pub mod status;

pub use cpu::{Cpu, Step};
pub use instructions::{standard_set, Instruction, InstructionSet};
pub use memory::Memory;
pub use status::Status;

/// Size of the addressable memory space: the full 16-bit range.
pub const MEMORY_SIZE: usize = 64 * 1024;

/// Address of the reset vector. The two bytes at `RESET_VECTOR` and
/// `RESET_VECTOR + 1` hold the little-endian address execution starts
/// at after a reset.
pub const RESET_VECTOR: u16 = 0xFFFC;
