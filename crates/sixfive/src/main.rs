use anyhow::Result;
use sixfive_common::hex_line;
use sixfive_mos6502::{standard_set, Cpu, RESET_VECTOR};

/// Hand-written demonstration program, placed at 0x0000.
const PROGRAM: &[u8] = &[
    0xA9, 0xFF, // LDA #$FF
    0xA2, 0xFE, // LDX #$FE
    0xA0, 0xFD, // LDY #$FD
    0xCE, 0xCD, 0xAB, // DEC $ABCD
    0xEE, 0xCE, 0xAB, // INC $ABCE
    0x8D, 0xCF, 0xAB, // STA $ABCF
];

fn main() -> Result<()> {
    env_logger::init();

    let instructions = standard_set()?;
    let mut cpu = Cpu::new(instructions);

    // Reset vector -> 0x0000, where the program lives.
    cpu.memory.write(RESET_VECTOR, 0x00);
    cpu.memory.write(RESET_VECTOR.wrapping_add(1), 0x00);
    for (i, byte) in PROGRAM.iter().enumerate() {
        cpu.memory.write(i as u16, *byte);
    }

    // Data cells the program operates on.
    cpu.memory.write(0xABCD, 0x43);
    cpu.memory.write(0xABCE, 0x41);

    cpu.reset();
    log::info!("reset complete, PC at {:#06X}", cpu.pc);
    print_registers(&cpu);

    for _ in 0..6 {
        let outcome = cpu.step();
        log::debug!("step outcome: {:?}", outcome);
        println!();
        print_registers(&cpu);
    }

    println!();
    println!("{}", hex_line(0xABC8, cpu.memory.view(0xABC8, 16)));

    Ok(())
}

fn print_registers(cpu: &Cpu) {
    match cpu.current_instruction() {
        Some(ins) => println!("Current instruction: {} ({:#04X})", ins.name, ins.opcode),
        None => println!(
            "Current instruction: <none> (next byte {:#04X})",
            cpu.memory.read(cpu.pc)
        ),
    }
    let sr = cpu.status.bits();
    println!("PC: 0x{:04X} 0b{:016b}", cpu.pc, cpu.pc);
    println!("SR: 0x{:02X}   0b{:08b}", sr, sr);
    println!("AC: 0x{:02X}   0b{:08b} ({})", cpu.ac, cpu.ac, cpu.ac);
    println!("XR: 0x{:02X}   0b{:08b} ({})", cpu.xr, cpu.xr, cpu.xr);
    println!("YR: 0x{:02X}   0b{:08b} ({})", cpu.yr, cpu.yr, cpu.yr);
    println!("Cycles: {}", cpu.cycles);
}
