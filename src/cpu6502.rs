use bitflags::bitflags;

use crate::bus::Mem;
use crate::opcodes::OPERAND_MAP;

bitflags! {
    // Status register (P) layout, bit 7 down to bit 0:
    //
    //   N V - B D I Z C
    //   | |   | | | | +--- Carry
    //   | |   | | | +----- Zero
    //   | |   | | +------- Interrupt Disable
    //   | |   | +--------- Decimal Mode (ignored on the NES)
    //   | |   +----------- Break
    //   | +--------------- Overflow
    //   +----------------- Negative
    //
    // Bit 5 has no hardware meaning; software sees it set whenever P is
    // pushed, hence the BREAK2 member.
    pub struct CpuFlags: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL_MODE = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const BREAK2 = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

/// How an instruction finds its operand. Implied and accumulator
/// instructions, relative branches and JMP indirect carry `NoneAddressing`
/// and resolve the operand in their handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddressingMode {
    Immediate, // e.g. LDA #$10
    ZeroPage,  // e.g. LDA $10
    ZeroPageX, // e.g. LDA $10,X
    ZeroPageY, // e.g. LDX $10,Y
    Absolute,  // e.g. LDA $1234
    AbsoluteX, // e.g. LDA $1234,X
    AbsoluteY, // e.g. LDA $1234,Y
    IndirectX, // e.g. LDA ($10,X)
    IndirectY, // e.g. LDA ($10),Y
    NoneAddressing,
}

#[derive(Debug)]
pub(crate) struct CPU<M: Mem> {
    // The program counter holds the memory address of the next instruction
    // byte to be fetched.
    pub program_counter: u16,

    // The stack pointer holds the low 8 bits of the next free location on
    // the stack page at 0x0100 - 0x01FF.
    pub stack_pointer: u8,

    pub accumulator: u8,
    pub x_register: u8,
    pub y_register: u8,

    pub status: CpuFlags,

    // Global cycle counter (counts CPU cycles executed).
    pub cycles: u64,

    // Every memory access goes through the bus, including the stack.
    pub bus: M,
}

pub(crate) fn new_cpu<M: Mem>(bus: M) -> CPU<M> {
    CPU {
        program_counter: 0x0000,
        stack_pointer: STACK_RESET,
        accumulator: 0x00,
        x_register: 0x00,
        y_register: 0x00,
        status: CpuFlags::empty(),
        cycles: 0,
        bus,
    }
}

const STACK_BASE_ADDRESS: u16 = 0x0100;
const STACK_RESET: u8 = 0xFD;
const RESET_VECTOR_ADDRESS: u16 = 0xFFFC;

impl<M: Mem> Mem for CPU<M> {
    fn read_u8(&self, addr: u16) -> u8 {
        self.bus.read_u8(addr)
    }

    fn write_u8(&mut self, addr: u16, data: u8) {
        self.bus.write_u8(addr, data)
    }
}

impl<M: Mem> CPU<M> {
    /// Pushes a byte onto the stack.
    pub(crate) fn push_u8(&mut self, value: u8) {
        self.write_u8(STACK_BASE_ADDRESS + self.stack_pointer as u16, value);
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
    }

    /// Pushes a 16-bit word onto the stack, high byte first, so the two
    /// bytes sit in little-endian order in memory.
    pub(crate) fn push_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_u8(high);
        self.push_u8(low);
    }

    /// Pops a byte from the stack.
    pub(crate) fn pop_u8(&mut self) -> u8 {
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
        self.read_u8(STACK_BASE_ADDRESS + self.stack_pointer as u16)
    }

    /// Pops a 16-bit word from the stack, low byte first.
    pub(crate) fn pop_u16(&mut self) -> u16 {
        let low = self.pop_u8();
        let high = self.pop_u8();
        u16::from_le_bytes([low, high])
    }

    /// Copies a raw machine-code image into memory at `base` and points the
    /// reset vector at it. Only meaningful on a bus whose `base` and vector
    /// regions are writable (see `FlatBus`).
    pub(crate) fn load_program(&mut self, program: &[u8], base: u16) {
        if base as usize + program.len() > 0x10000 {
            panic!("Program size exceeds memory bounds");
        }
        for (i, byte) in program.iter().enumerate() {
            self.write_u8(base + i as u16, *byte);
        }
        self.write_u16(RESET_VECTOR_ADDRESS, base);
    }

    pub(crate) fn reset(&mut self) {
        self.accumulator = 0;
        self.x_register = 0;
        self.y_register = 0;
        self.stack_pointer = STACK_RESET;
        self.status = CpuFlags::from_bits_truncate(0b0010_0100);

        self.program_counter = self.read_u16(RESET_VECTOR_ADDRESS);
    }

    /// Executes a single instruction. Returns the cycles it consumed, or
    /// `None` when the instruction was BRK and the program is done.
    pub(crate) fn step(&mut self) -> Option<u8> {
        let code = self.read_u8(self.program_counter);
        self.program_counter = self.program_counter.wrapping_add(1);
        let pc_state = self.program_counter;

        let operand = OPERAND_MAP.get(&code).unwrap_or_else(|| {
            panic!(
                "Unknown opcode {:02X} at {:04X}",
                code,
                pc_state.wrapping_sub(1)
            )
        });
        let mode = operand.addressing_mode;

        let extra_cycles = match code {
            0x00 => return None, // BRK ends the program in this interpreter

            0x69 | 0x65 | 0x75 | 0x6D | 0x7D | 0x79 | 0x61 | 0x71 => self.handle_adc(mode),
            0x29 | 0x25 | 0x35 | 0x2D | 0x3D | 0x39 | 0x21 | 0x31 => self.handle_and(mode),

            0x0A => self.handle_asl_accumulator(),
            0x06 | 0x16 | 0x0E | 0x1E => self.handle_asl(mode),

            0x90 => self.handle_bcc(),
            0xB0 => self.handle_bcs(),
            0xF0 => self.handle_beq(),
            0x30 => self.handle_bmi(),
            0xD0 => self.handle_bne(),
            0x10 => self.handle_bpl(),
            0x50 => self.handle_bvc(),
            0x70 => self.handle_bvs(),

            0x24 | 0x2C => self.handle_bit(mode),

            0x18 => self.handle_clc(),
            0xD8 => self.handle_cld(),
            0x58 => self.handle_cli(),
            0xB8 => self.handle_clv(),
            0x38 => self.handle_sec(),
            0xF8 => self.handle_sed(),
            0x78 => self.handle_sei(),

            0xC9 | 0xC5 | 0xD5 | 0xCD | 0xDD | 0xD9 | 0xC1 | 0xD1 => self.handle_cmp(mode),
            0xE0 | 0xE4 | 0xEC => self.handle_cpx(mode),
            0xC0 | 0xC4 | 0xCC => self.handle_cpy(mode),

            0xC6 | 0xD6 | 0xCE | 0xDE => self.handle_dec(mode),
            0xCA => self.handle_dex(),
            0x88 => self.handle_dey(),

            0x49 | 0x45 | 0x55 | 0x4D | 0x5D | 0x59 | 0x41 | 0x51 => self.handle_eor(mode),

            0xE6 | 0xF6 | 0xEE | 0xFE => self.handle_inc(mode),
            0xE8 => self.handle_inx(),
            0xC8 => self.handle_iny(),

            0x4C => self.handle_jmp_absolute(),
            0x6C => self.handle_jmp_indirect(),
            0x20 => self.handle_jsr(),

            0xA9 | 0xA5 | 0xB5 | 0xAD | 0xBD | 0xB9 | 0xA1 | 0xB1 => self.handle_lda(mode),
            0xA2 | 0xA6 | 0xB6 | 0xAE | 0xBE => self.handle_ldx(mode),
            0xA0 | 0xA4 | 0xB4 | 0xAC | 0xBC => self.handle_ldy(mode),

            0x4A => self.handle_lsr_accumulator(),
            0x46 | 0x56 | 0x4E | 0x5E => self.handle_lsr(mode),

            0xEA => self.handle_nop(),

            0x09 | 0x05 | 0x15 | 0x0D | 0x1D | 0x19 | 0x01 | 0x11 => self.handle_ora(mode),

            0x48 => self.handle_pha(),
            0x08 => self.handle_php(),
            0x68 => self.handle_pla(),
            0x28 => self.handle_plp(),

            0x2A => self.handle_rol_accumulator(),
            0x26 | 0x36 | 0x2E | 0x3E => self.handle_rol(mode),
            0x6A => self.handle_ror_accumulator(),
            0x66 | 0x76 | 0x6E | 0x7E => self.handle_ror(mode),

            0x40 => self.handle_rti(),
            0x60 => self.handle_rts(),

            0xE9 | 0xE5 | 0xF5 | 0xED | 0xFD | 0xF9 | 0xE1 | 0xF1 => self.handle_sbc(mode),

            0x85 | 0x95 | 0x8D | 0x9D | 0x99 | 0x81 | 0x91 => self.handle_sta(mode),
            0x86 | 0x96 | 0x8E => self.handle_stx(mode),
            0x84 | 0x94 | 0x8C => self.handle_sty(mode),

            0xAA => self.handle_tax(),
            0xA8 => self.handle_tay(),
            0xBA => self.handle_tsx(),
            0x8A => self.handle_txa(),
            0x9A => self.handle_txs(),
            0x98 => self.handle_tya(),

            _ => panic!("Opcode {:02X} is mapped but not dispatched", operand.opcode),
        };

        // Jump and branch handlers set the program counter themselves; for
        // everything else, skip over the operand bytes.
        if self.program_counter == pc_state {
            self.program_counter = self
                .program_counter
                .wrapping_add(operand.bytes as u16 - 1);
        }

        let cycles = operand.cycles + extra_cycles;
        self.cycles += cycles as u64;
        Some(cycles)
    }

    /// Runs until BRK, handing control to `callback` before every
    /// instruction so a host can inject input and render between steps.
    pub(crate) fn run_with_callback<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut CPU<M>),
    {
        loop {
            callback(self);
            if self.step().is_none() {
                return;
            }
        }
    }

    pub(crate) fn run(&mut self) {
        self.run_with_callback(|_| {});
    }

    /// Effective address of an operand located at `addr` (the byte after
    /// the opcode). Callers inside the dispatch loop pass the program
    /// counter; the trace formatter passes historical addresses.
    pub(crate) fn get_operand_address(&self, mode: AddressingMode, addr: u16) -> u16 {
        match mode {
            AddressingMode::Immediate => addr,

            AddressingMode::ZeroPage => self.read_u8(addr) as u16,

            AddressingMode::ZeroPageX => {
                let base = self.read_u8(addr);
                base.wrapping_add(self.x_register) as u16
            }

            AddressingMode::ZeroPageY => {
                let base = self.read_u8(addr);
                base.wrapping_add(self.y_register) as u16
            }

            AddressingMode::Absolute => self.read_u16(addr),

            AddressingMode::AbsoluteX => {
                let base = self.read_u16(addr);
                base.wrapping_add(self.x_register as u16)
            }

            AddressingMode::AbsoluteY => {
                let base = self.read_u16(addr);
                base.wrapping_add(self.y_register as u16)
            }

            AddressingMode::IndirectX => {
                let base = self.read_u8(addr);
                // The pointer lives in the zero page and wraps within it.
                let ptr = base.wrapping_add(self.x_register);
                let low = self.read_u8(ptr as u16);
                let high = self.read_u8(ptr.wrapping_add(1) as u16);
                u16::from_le_bytes([low, high])
            }

            AddressingMode::IndirectY => {
                let base = self.read_u8(addr);
                let low = self.read_u8(base as u16);
                let high = self.read_u8(base.wrapping_add(1) as u16);
                let deref_base = u16::from_le_bytes([low, high]);
                deref_base.wrapping_add(self.y_register as u16)
            }

            AddressingMode::NoneAddressing => {
                panic!("No effective address for {mode:?}")
            }
        }
    }

    pub(crate) fn update_zero_and_negative_flags(&mut self, value: u8) {
        self.status.set(CpuFlags::ZERO, value == 0);
        self.status.set(CpuFlags::NEGATIVE, value & 0x80 != 0);
    }

    /// Binary add into the accumulator with carry-in, setting C, V, Z and N.
    /// SBC goes through here too, with the operand inverted.
    pub(crate) fn add_to_register_a(&mut self, value: u8) {
        let carry_in = if self.status.contains(CpuFlags::CARRY) {
            1
        } else {
            0
        };
        let sum = self.accumulator as u16 + value as u16 + carry_in;
        self.status.set(CpuFlags::CARRY, sum > 0xFF);

        let result = sum as u8;
        // Overflow: the operands agree in sign but the result does not.
        self.status.set(
            CpuFlags::OVERFLOW,
            (value ^ result) & (result ^ self.accumulator) & 0x80 != 0,
        );

        self.accumulator = result;
        self.update_zero_and_negative_flags(result);
    }

    /// Shared CMP/CPX/CPY core: carry when the register is >= the operand,
    /// Z and N from the wrapped difference.
    pub(crate) fn compare(&mut self, mode: AddressingMode, compare_with: u8) -> u8 {
        let addr = self.get_operand_address(mode, self.program_counter);
        let value = self.read_u8(addr);
        self.status.set(CpuFlags::CARRY, compare_with >= value);
        self.update_zero_and_negative_flags(compare_with.wrapping_sub(value));
        0
    }

    /// Relative-branch core. `offset` is the signed displacement from the
    /// instruction after the branch. Returns the extra cycles: +1 when
    /// taken, +1 more when the target sits on a different page.
    pub(crate) fn branch(&mut self, condition: bool, offset: i8) -> u8 {
        if !condition {
            return 0;
        }
        let mut extra_cycles = 1;
        let next_instruction = self.program_counter.wrapping_add(1);
        let target = next_instruction.wrapping_add(offset as u16);
        if next_instruction & 0xFF00 != target & 0xFF00 {
            extra_cycles += 1;
        }
        self.program_counter = target;
        extra_cycles
    }
}

/// Renders the instruction at the current program counter as one line in
/// the nestest log format, for diffing runs against known-good traces.
pub(crate) fn trace<M: Mem>(cpu: &CPU<M>) -> String {
    let begin = cpu.program_counter;
    let code = cpu.read_u8(begin);
    let ops = OPERAND_MAP
        .get(&code)
        .unwrap_or_else(|| panic!("Unknown opcode {code:02X} at {begin:04X}"));

    let mut hex_dump = vec![code];

    let (mem_addr, stored_value) = match ops.addressing_mode {
        AddressingMode::Immediate | AddressingMode::NoneAddressing => (0, 0),
        mode => {
            let addr = cpu.get_operand_address(mode, begin.wrapping_add(1));
            (addr, cpu.read_u8(addr))
        }
    };

    let asm_operand = match ops.bytes {
        1 => match code {
            0x0A | 0x4A | 0x2A | 0x6A => "A ".to_string(),
            _ => String::new(),
        },
        2 => {
            let operand = cpu.read_u8(begin.wrapping_add(1));
            hex_dump.push(operand);

            match ops.addressing_mode {
                AddressingMode::Immediate => format!("#${operand:02x}"),
                AddressingMode::ZeroPage => format!("${mem_addr:02x} = {stored_value:02x}"),
                AddressingMode::ZeroPageX => {
                    format!("${operand:02x},X @ {mem_addr:02x} = {stored_value:02x}")
                }
                AddressingMode::ZeroPageY => {
                    format!("${operand:02x},Y @ {mem_addr:02x} = {stored_value:02x}")
                }
                AddressingMode::IndirectX => format!(
                    "(${:02x},X) @ {:02x} = {:04x} = {:02x}",
                    operand,
                    operand.wrapping_add(cpu.x_register),
                    mem_addr,
                    stored_value
                ),
                AddressingMode::IndirectY => format!(
                    "(${:02x}),Y = {:04x} @ {:04x} = {:02x}",
                    operand,
                    mem_addr.wrapping_sub(cpu.y_register as u16),
                    mem_addr,
                    stored_value
                ),
                AddressingMode::NoneAddressing => {
                    // Relative branch: show the resolved target.
                    let target = begin
                        .wrapping_add(2)
                        .wrapping_add((operand as i8) as u16);
                    format!("${target:04x}")
                }
                _ => panic!(
                    "Unexpected addressing mode {:?} for 2-byte opcode {:02X}",
                    ops.addressing_mode, code
                ),
            }
        }
        3 => {
            hex_dump.push(cpu.read_u8(begin.wrapping_add(1)));
            hex_dump.push(cpu.read_u8(begin.wrapping_add(2)));
            let operand = cpu.read_u16(begin.wrapping_add(1));

            match ops.addressing_mode {
                AddressingMode::Absolute => {
                    // Jumps name the target, everything else shows memory.
                    if code == 0x4C || code == 0x20 {
                        format!("${operand:04x}")
                    } else {
                        format!("${mem_addr:04x} = {stored_value:02x}")
                    }
                }
                AddressingMode::AbsoluteX => {
                    format!("${operand:04x},X @ {mem_addr:04x} = {stored_value:02x}")
                }
                AddressingMode::AbsoluteY => {
                    format!("${operand:04x},Y @ {mem_addr:04x} = {stored_value:02x}")
                }
                AddressingMode::NoneAddressing => {
                    // JMP indirect, including the page-boundary quirk.
                    let target = if operand & 0x00FF == 0x00FF {
                        let low = cpu.read_u8(operand);
                        let high = cpu.read_u8(operand & 0xFF00);
                        u16::from_le_bytes([low, high])
                    } else {
                        cpu.read_u16(operand)
                    };
                    format!("(${operand:04x}) = {target:04x}")
                }
                _ => panic!(
                    "Unexpected addressing mode {:?} for 3-byte opcode {:02X}",
                    ops.addressing_mode, code
                ),
            }
        }
        _ => String::new(),
    };

    let hex_str = hex_dump
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<String>>()
        .join(" ");
    let asm_str = format!("{:04x}  {:8} {: >4} {}", begin, hex_str, ops.name, asm_operand)
        .trim()
        .to_string();

    format!(
        "{:47} A:{:02x} X:{:02x} Y:{:02x} P:{:02x} SP:{:02x}",
        asm_str,
        cpu.accumulator,
        cpu.x_register,
        cpu.y_register,
        cpu.status.bits(),
        cpu.stack_pointer
    )
    .to_ascii_uppercase()
}

#[cfg(test)]
pub(crate) fn new_test_cpu() -> CPU<crate::bus::FlatBus> {
    new_cpu(crate::bus::FlatBus::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::{Bus, FlatBus};
    use crate::rom::Rom;

    fn run_program(program: &[u8]) -> CPU<FlatBus> {
        let mut cpu = new_test_cpu();
        cpu.load_program(program, 0x8000);
        cpu.reset();
        cpu.run();
        cpu
    }

    #[test]
    fn test_reset() {
        let mut cpu = new_test_cpu();
        cpu.accumulator = 0x12;
        cpu.x_register = 0x34;
        cpu.y_register = 0x56;
        cpu.write_u16(0xFFFC, 0x8000);

        cpu.reset();

        assert_eq!(cpu.accumulator, 0);
        assert_eq!(cpu.x_register, 0);
        assert_eq!(cpu.y_register, 0);
        assert_eq!(cpu.stack_pointer, 0xFD);
        assert_eq!(cpu.status.bits(), 0b0010_0100);
        assert_eq!(cpu.program_counter, 0x8000);
    }

    #[test]
    fn test_reset_vector_comes_from_the_cartridge() {
        let mut rom = Rom::test_rom();
        rom.prg_rom = vec![0; 0x4000];
        // 16KB cartridges mirror, so 0xFFFC lands at offset 0x3FFC.
        rom.prg_rom[0x3FFC] = 0x00;
        rom.prg_rom[0x3FFD] = 0xC0;
        let mut cpu = new_cpu(Bus::new(rom));

        cpu.reset();
        assert_eq!(cpu.program_counter, 0xC000);
    }

    #[test]
    fn test_lda_immediate() {
        let cpu = run_program(&[0xA9, 0x05, 0x00]);
        assert_eq!(cpu.accumulator, 0x05);
        assert!(!cpu.status.contains(CpuFlags::ZERO));
        assert!(!cpu.status.contains(CpuFlags::NEGATIVE));
    }

    #[test]
    fn test_lda_zero_sets_zero_flag() {
        let cpu = run_program(&[0xA9, 0x00, 0x00]);
        assert_eq!(cpu.accumulator, 0x00);
        assert!(cpu.status.contains(CpuFlags::ZERO));
    }

    #[test]
    fn test_lda_negative_sets_negative_flag() {
        let cpu = run_program(&[0xA9, 0xFF, 0x00]);
        assert_eq!(cpu.accumulator, 0xFF);
        assert!(cpu.status.contains(CpuFlags::NEGATIVE));
    }

    #[test]
    fn test_lda_then_tax() {
        let cpu = run_program(&[0xA9, 0x0A, 0xAA, 0x00]);
        assert_eq!(cpu.x_register, 10);
    }

    #[test]
    fn test_five_ops_working_together() {
        let cpu = run_program(&[0xA9, 0xC0, 0xAA, 0xE8, 0x00]);
        assert_eq!(cpu.x_register, 0xC1);
    }

    #[test]
    fn test_lda_from_memory() {
        let mut cpu = new_test_cpu();
        cpu.write_u8(0x10, 0x55);
        cpu.load_program(&[0xA5, 0x10, 0x00], 0x8000);
        cpu.reset();
        cpu.run();

        assert_eq!(cpu.accumulator, 0x55);
    }

    #[test]
    fn test_inx_overflow() {
        let mut cpu = new_test_cpu();
        cpu.load_program(&[0xE8, 0xE8, 0x00], 0x8000);
        cpu.reset();
        cpu.x_register = 0xFF;
        cpu.run();

        assert_eq!(cpu.x_register, 1);
        assert!(!cpu.status.contains(CpuFlags::ZERO));
    }

    #[test]
    fn test_jsr_then_rts_resumes_after_the_call() {
        // 8000: JSR $8006, 8003: LDA #$05, 8005: BRK, 8006: RTS.
        // LDA only runs if RTS lands on the byte after the JSR operand.
        let cpu = run_program(&[0x20, 0x06, 0x80, 0xA9, 0x05, 0x00, 0x60]);
        assert_eq!(cpu.accumulator, 0x05);
        assert_eq!(cpu.stack_pointer, 0xFD);
    }

    #[test]
    fn test_jmp_indirect_page_boundary_bug() {
        let mut cpu = new_test_cpu();
        cpu.write_u8(0x3000, 0x40);
        cpu.write_u8(0x30FF, 0x80);
        cpu.write_u8(0x3100, 0x50);
        // Target must be 0x4080, not 0x5080: the high pointer byte wraps
        // within the page.
        cpu.write_u8(0x4080, 0xE8); // INX
        cpu.load_program(&[0x6C, 0xFF, 0x30], 0x8000);
        cpu.reset();
        cpu.run();

        assert_eq!(cpu.x_register, 1);
    }

    #[test]
    fn test_step_returns_cycles_and_advances_pc() {
        let mut cpu = new_test_cpu();
        cpu.load_program(&[0xA9, 0x05, 0x00], 0x8000);
        cpu.reset();

        assert_eq!(cpu.step(), Some(2));
        assert_eq!(cpu.program_counter, 0x8002);
        assert_eq!(cpu.cycles, 2);

        // BRK reports the halt.
        assert_eq!(cpu.step(), None);
    }

    #[test]
    fn test_branch_cycle_accounting() {
        let mut cpu = new_test_cpu();
        // BEQ +0x10 with the zero flag set: 2 base + 1 taken.
        cpu.load_program(&[0xF0, 0x10, 0x00], 0x8000);
        cpu.reset();
        cpu.status.insert(CpuFlags::ZERO);

        assert_eq!(cpu.step(), Some(3));
        assert_eq!(cpu.program_counter, 0x8012);
    }

    #[test]
    #[should_panic(expected = "Unknown opcode")]
    fn test_unknown_opcode_panics() {
        let mut cpu = new_test_cpu();
        cpu.load_program(&[0x02], 0x8000);
        cpu.reset();
        cpu.step();
    }

    #[test]
    fn test_stack_push_pop_u8() {
        let mut cpu = new_test_cpu();
        cpu.stack_pointer = 0xFF;

        cpu.push_u8(0xAB);
        assert_eq!(cpu.stack_pointer, 0xFE);
        assert_eq!(cpu.read_u8(0x01FF), 0xAB);

        assert_eq!(cpu.pop_u8(), 0xAB);
        assert_eq!(cpu.stack_pointer, 0xFF);
    }

    #[test]
    fn test_stack_push_pop_u16() {
        let mut cpu = new_test_cpu();
        cpu.stack_pointer = 0xFF;

        cpu.push_u16(0x1234);
        assert_eq!(cpu.stack_pointer, 0xFD);
        // Stored little-endian: low byte below the high byte.
        assert_eq!(cpu.read_u8(0x01FE), 0x34);
        assert_eq!(cpu.read_u8(0x01FF), 0x12);

        assert_eq!(cpu.pop_u16(), 0x1234);
        assert_eq!(cpu.stack_pointer, 0xFF);
    }

    #[test]
    fn test_stack_pointer_wraps() {
        let mut cpu = new_test_cpu();
        cpu.stack_pointer = 0x00;
        cpu.push_u8(0x42);
        assert_eq!(cpu.stack_pointer, 0xFF);
        assert_eq!(cpu.read_u8(0x0100), 0x42);
    }

    #[test]
    fn test_get_operand_address() {
        let mut cpu = new_test_cpu();
        let base_addr = 0x1000;

        cpu.write_u16(base_addr, 0x3456);
        assert_eq!(
            cpu.get_operand_address(AddressingMode::Absolute, base_addr),
            0x3456
        );

        cpu.x_register = 0x10;
        assert_eq!(
            cpu.get_operand_address(AddressingMode::AbsoluteX, base_addr),
            0x3466
        );

        cpu.y_register = 0x20;
        assert_eq!(
            cpu.get_operand_address(AddressingMode::AbsoluteY, base_addr),
            0x3476
        );

        assert_eq!(
            cpu.get_operand_address(AddressingMode::Immediate, base_addr),
            base_addr
        );

        cpu.write_u8(base_addr + 2, 0x42);
        assert_eq!(
            cpu.get_operand_address(AddressingMode::ZeroPage, base_addr + 2),
            0x0042
        );
        cpu.x_register = 0x08;
        assert_eq!(
            cpu.get_operand_address(AddressingMode::ZeroPageX, base_addr + 2),
            0x004A
        );
        cpu.y_register = 0x09;
        assert_eq!(
            cpu.get_operand_address(AddressingMode::ZeroPageY, base_addr + 2),
            0x004B
        );

        cpu.write_u8(base_addr + 4, 0x20);
        cpu.x_register = 0x04;
        cpu.write_u8(0x24, 0x34);
        cpu.write_u8(0x25, 0x56);
        assert_eq!(
            cpu.get_operand_address(AddressingMode::IndirectX, base_addr + 4),
            0x5634
        );

        cpu.write_u8(base_addr + 6, 0x20);
        cpu.write_u8(0x20, 0x34);
        cpu.write_u8(0x21, 0x56);
        cpu.y_register = 0x10;
        assert_eq!(
            cpu.get_operand_address(AddressingMode::IndirectY, base_addr + 6),
            0x5644
        );
    }

    #[test]
    fn test_zero_page_x_wraps_within_the_page() {
        let mut cpu = new_test_cpu();
        cpu.write_u8(0x1000, 0xFF);
        cpu.x_register = 0x02;
        assert_eq!(
            cpu.get_operand_address(AddressingMode::ZeroPageX, 0x1000),
            0x0001
        );
    }

    #[test]
    fn test_trace_format() {
        let mut cpu = new_test_cpu();
        cpu.write_u8(0x64, 0xA2); // LDX #$01
        cpu.write_u8(0x65, 0x01);
        cpu.write_u8(0x66, 0xCA); // DEX
        cpu.write_u8(0x67, 0x88); // DEY
        cpu.write_u8(0x68, 0x00); // BRK
        cpu.program_counter = 0x64;
        cpu.accumulator = 1;
        cpu.x_register = 2;
        cpu.y_register = 3;
        cpu.status = CpuFlags::from_bits_truncate(0x24);

        let mut result: Vec<String> = vec![];
        cpu.run_with_callback(|cpu| {
            result.push(trace(cpu));
        });

        assert_eq!(
            "0064  A2 01     LDX #$01                        A:01 X:02 Y:03 P:24 SP:FD",
            result[0]
        );
        assert_eq!(
            "0066  CA        DEX                             A:01 X:01 Y:03 P:24 SP:FD",
            result[1]
        );
        assert_eq!(
            "0067  88        DEY                             A:01 X:00 Y:03 P:26 SP:FD",
            result[2]
        );
    }

    #[test]
    fn test_trace_format_mem_access() {
        let mut cpu = new_test_cpu();
        cpu.write_u8(0x64, 0x11); // ORA ($33),Y
        cpu.write_u8(0x65, 0x33);
        cpu.write_u8(0x33, 0x00); // pointer -> 0x0400
        cpu.write_u8(0x34, 0x04);
        cpu.write_u8(0x0400, 0xAA);
        cpu.program_counter = 0x64;
        cpu.status = CpuFlags::from_bits_truncate(0x24);

        assert_eq!(
            "0064  11 33     ORA ($33),Y = 0400 @ 0400 = AA  A:00 X:00 Y:00 P:24 SP:FD",
            trace(&cpu)
        );
    }
}
