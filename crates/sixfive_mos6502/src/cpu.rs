use crate::instructions::{Instruction, InstructionSet};
use crate::memory::Memory;
use crate::status::Status;
use crate::RESET_VECTOR;

/// Outcome of a single fetch-decode-execute step.
///
/// An unrecognized opcode is not fatal: the opcode byte has already been
/// fetched (PC and the cycle counter advanced past it), and the next call
/// to `step` simply continues with the following byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Executed { name: &'static str, opcode: u8 },
    UnknownOpcode(u8),
}

/// The 6502 CPU: memory, register file, and the fetch-decode-execute
/// driver.
///
/// Single-threaded and synchronous; `step` runs one instruction to
/// completion, including any operand fetches the instruction body
/// performs. The dispatch table is a shared immutable reference populated
/// before the first step (see `instructions::standard_set`).
pub struct Cpu {
    pub memory: Memory,

    /// Program counter. Wraps modulo the address space.
    pub pc: u16,
    /// Accumulator.
    pub ac: u8,
    /// X index register.
    pub xr: u8,
    /// Y index register.
    pub yr: u8,
    /// Stack pointer. Reserved for push/pop support; no instruction in
    /// the current set touches it.
    pub sp: u16,
    pub status: Status,

    /// Accumulated cost of every fetch performed, in cycles.
    pub cycles: u64,

    instructions: &'static InstructionSet,
    current: Option<Instruction>,
    halted: bool,
}

impl Cpu {
    /// A new CPU with zeroed memory, zeroed registers, and an all-clear
    /// status register. Memory must be prepared (program bytes and reset
    /// vector) before calling `reset`.
    pub fn new(instructions: &'static InstructionSet) -> Self {
        Self {
            memory: Memory::new(),
            pc: 0,
            ac: 0,
            xr: 0,
            yr: 0,
            sp: 0,
            status: Status::default(),
            cycles: 0,
            instructions,
            current: None,
            halted: false,
        }
    }

    /// Clear the status register and load PC from the reset vector.
    /// Other registers and memory contents are left as they are.
    pub fn reset(&mut self) {
        self.status = Status::default();
        self.pc = self.memory.read_word(RESET_VECTOR);
    }

    /// Read one byte, then advance PC by 1 and the cycle counter by 1.
    ///
    /// The advancement happens regardless of `addr`; callers must pass the
    /// current PC for the semantics to make sense.
    #[inline]
    pub fn fetch_byte(&mut self, addr: u16) -> u8 {
        let value = self.memory.read(addr);
        self.pc = self.pc.wrapping_add(1);
        self.cycles += 1;
        value
    }

    /// Read one little-endian word, then advance PC by 2 and the cycle
    /// counter by 2. Same caller contract as `fetch_byte`.
    #[inline]
    pub fn fetch_word(&mut self, addr: u16) -> u16 {
        let value = self.memory.read_word(addr);
        self.pc = self.pc.wrapping_add(2);
        self.cycles += 2;
        value
    }

    /// Run one fetch-decode-execute cycle.
    pub fn step(&mut self) -> Step {
        let at = self.pc;
        let opcode = self.fetch_byte(at);

        let Some(&instruction) = self.instructions.lookup(opcode) else {
            self.current = None;
            log::warn!("unknown opcode {:#04X} at {:#06X}", opcode, at);
            return Step::UnknownOpcode(opcode);
        };

        // Keep a copy of the descriptor with the opcode fetch (already
        // charged to the cycle counter) deducted from its base cost. The
        // field is informational; it is never added back to the counter.
        let mut current = instruction;
        current.cycles = current.cycles.saturating_sub(1);
        self.current = Some(current);

        log::trace!(
            "executing {} ({:#04X}) at {:#06X}",
            current.name,
            opcode,
            at
        );
        (current.execute)(self);

        Step::Executed {
            name: current.name,
            opcode,
        }
    }

    /// The last successfully decoded instruction, or `None` if the last
    /// opcode was unrecognized (or nothing has executed yet).
    pub fn current_instruction(&self) -> Option<&Instruction> {
        self.current.as_ref()
    }

    /// Request a halt. No instruction in the current set consults this;
    /// it is reserved for a future halting instruction or external driver
    /// policy.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }
}
