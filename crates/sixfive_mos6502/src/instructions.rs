use anyhow::{bail, Result};
use once_cell::sync::OnceCell;

use crate::cpu::Cpu;

/// Descriptor for a single opcode.
///
/// `cycles` is the base cycle cost of the whole instruction including the
/// opcode fetch. `execute` is a plain function pointer so descriptors stay
/// `Copy` and carry no hidden captured state; operand fetches happen inside
/// the body through the CPU's fetch primitives.
#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    pub name: &'static str,
    pub opcode: u8,
    pub cycles: u8,
    pub execute: fn(&mut Cpu),
}

/// Dispatch table mapping opcode bytes to instruction descriptors.
///
/// The table is populated once during startup and treated as immutable
/// afterwards; `standard_set` hands out a shared `&'static` reference.
pub struct InstructionSet {
    table: [Option<Instruction>; 256],
}

impl Default for InstructionSet {
    fn default() -> Self {
        Self { table: [None; 256] }
    }
}

impl InstructionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its opcode.
    ///
    /// Registering the same opcode twice is a startup-time error rather
    /// than a silent overwrite: a typo in an opcode constant would
    /// otherwise corrupt the table without any symptom until the affected
    /// opcode executes.
    pub fn register(&mut self, instruction: Instruction) -> Result<()> {
        let slot = &mut self.table[instruction.opcode as usize];
        if let Some(existing) = slot {
            bail!(
                "opcode {:#04X} already registered as {} (rejecting {})",
                instruction.opcode,
                existing.name,
                instruction.name
            );
        }
        *slot = Some(instruction);
        Ok(())
    }

    #[inline]
    pub fn lookup(&self, opcode: u8) -> Option<&Instruction> {
        self.table[opcode as usize].as_ref()
    }

    /// Build the currently supported instruction set: immediate loads,
    /// absolute increment/decrement/stores, and NOP.
    pub fn standard() -> Result<Self> {
        let mut set = Self::new();

        set.register(Instruction {
            name: "LDA_Immediate",
            opcode: 0xA9,
            cycles: 2,
            execute: lda_immediate,
        })?;
        set.register(Instruction {
            name: "LDX_Immediate",
            opcode: 0xA2,
            cycles: 2,
            execute: ldx_immediate,
        })?;
        set.register(Instruction {
            name: "LDY_Immediate",
            opcode: 0xA0,
            cycles: 2,
            execute: ldy_immediate,
        })?;
        set.register(Instruction {
            name: "NOP",
            opcode: 0xEA,
            cycles: 1,
            execute: nop,
        })?;
        set.register(Instruction {
            name: "DEC_Absolute",
            opcode: 0xCE,
            cycles: 6,
            execute: dec_absolute,
        })?;
        set.register(Instruction {
            name: "INC_Absolute",
            opcode: 0xEE,
            cycles: 6,
            execute: inc_absolute,
        })?;
        set.register(Instruction {
            name: "STA_Absolute",
            opcode: 0x8D,
            cycles: 4,
            execute: sta_absolute,
        })?;
        set.register(Instruction {
            name: "STX_Absolute",
            opcode: 0x8E,
            cycles: 4,
            execute: stx_absolute,
        })?;
        set.register(Instruction {
            name: "STY_Absolute",
            opcode: 0x8C,
            cycles: 4,
            execute: sty_absolute,
        })?;

        Ok(set)
    }
}

/// Shared standard instruction set, built on first use and immutable
/// afterwards. Every CPU instance dispatches through the same table.
pub fn standard_set() -> Result<&'static InstructionSet> {
    static STANDARD: OnceCell<InstructionSet> = OnceCell::new();
    STANDARD.get_or_try_init(InstructionSet::standard)
}

// Instruction bodies. Immediate addressing pulls one operand byte from the
// program stream; absolute addressing pulls a little-endian 16-bit address.

fn lda_immediate(cpu: &mut Cpu) {
    let value = cpu.fetch_byte(cpu.pc);
    cpu.ac = value;
    cpu.status.set_zn(value);
}

fn ldx_immediate(cpu: &mut Cpu) {
    let value = cpu.fetch_byte(cpu.pc);
    cpu.xr = value;
    cpu.status.set_zn(value);
}

fn ldy_immediate(cpu: &mut Cpu) {
    let value = cpu.fetch_byte(cpu.pc);
    cpu.yr = value;
    cpu.status.set_zn(value);
}

fn nop(_cpu: &mut Cpu) {}

fn dec_absolute(cpu: &mut Cpu) {
    let addr = cpu.fetch_word(cpu.pc);
    let value = cpu.memory.read(addr).wrapping_sub(1);
    cpu.memory.write(addr, value);
    cpu.status.set_zn(value);
}

fn inc_absolute(cpu: &mut Cpu) {
    let addr = cpu.fetch_word(cpu.pc);
    let value = cpu.memory.read(addr).wrapping_add(1);
    cpu.memory.write(addr, value);
    cpu.status.set_zn(value);
}

// The store instructions assign the register to the addressed cell.
// Stores do not touch any flags.

fn sta_absolute(cpu: &mut Cpu) {
    let addr = cpu.fetch_word(cpu.pc);
    cpu.memory.write(addr, cpu.ac);
}

fn stx_absolute(cpu: &mut Cpu) {
    let addr = cpu.fetch_word(cpu.pc);
    cpu.memory.write(addr, cpu.xr);
}

fn sty_absolute(cpu: &mut Cpu) {
    let addr = cpu.fetch_word(cpu.pc);
    cpu.memory.write(addr, cpu.yr);
}
