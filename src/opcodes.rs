use phf::phf_map;

use crate::cpu6502::AddressingMode;

/// One row of the dispatch table: the documented encoding of a 6502
/// instruction. `bytes` includes the opcode itself; `cycles` is the base
/// cost before branch/page-cross penalties.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operand {
    pub opcode: u8,
    pub name: &'static str,
    pub bytes: u8,
    pub cycles: u8,
    pub addressing_mode: AddressingMode,
}

// The 151 documented opcodes. Accumulator variants, implied instructions,
// relative branches and JMP indirect carry NoneAddressing; their handlers
// resolve the operand themselves.
pub(crate) static OPERAND_MAP: phf::Map<u8, Operand> = phf_map! {
    // ADC Instructions
    0x69u8 => Operand { opcode: 0x69, name: "ADC", bytes: 2, cycles: 2, addressing_mode: AddressingMode::Immediate },
    0x65u8 => Operand { opcode: 0x65, name: "ADC", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0x75u8 => Operand { opcode: 0x75, name: "ADC", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageX },
    0x6Du8 => Operand { opcode: 0x6D, name: "ADC", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },
    0x7Du8 => Operand { opcode: 0x7D, name: "ADC", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteX },
    0x79u8 => Operand { opcode: 0x79, name: "ADC", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteY },
    0x61u8 => Operand { opcode: 0x61, name: "ADC", bytes: 2, cycles: 6, addressing_mode: AddressingMode::IndirectX },
    0x71u8 => Operand { opcode: 0x71, name: "ADC", bytes: 2, cycles: 5 /* +1 if page crossed */, addressing_mode: AddressingMode::IndirectY },

    // AND Instructions
    0x29u8 => Operand { opcode: 0x29, name: "AND", bytes: 2, cycles: 2, addressing_mode: AddressingMode::Immediate },
    0x25u8 => Operand { opcode: 0x25, name: "AND", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0x35u8 => Operand { opcode: 0x35, name: "AND", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageX },
    0x2Du8 => Operand { opcode: 0x2D, name: "AND", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },
    0x3Du8 => Operand { opcode: 0x3D, name: "AND", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteX },
    0x39u8 => Operand { opcode: 0x39, name: "AND", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteY },
    0x21u8 => Operand { opcode: 0x21, name: "AND", bytes: 2, cycles: 6, addressing_mode: AddressingMode::IndirectX },
    0x31u8 => Operand { opcode: 0x31, name: "AND", bytes: 2, cycles: 5 /* +1 if page crossed */, addressing_mode: AddressingMode::IndirectY },

    // ASL Instructions
    0x0Au8 => Operand { opcode: 0x0A, name: "ASL", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x06u8 => Operand { opcode: 0x06, name: "ASL", bytes: 2, cycles: 5, addressing_mode: AddressingMode::ZeroPage },
    0x16u8 => Operand { opcode: 0x16, name: "ASL", bytes: 2, cycles: 6, addressing_mode: AddressingMode::ZeroPageX },
    0x0Eu8 => Operand { opcode: 0x0E, name: "ASL", bytes: 3, cycles: 6, addressing_mode: AddressingMode::Absolute },
    0x1Eu8 => Operand { opcode: 0x1E, name: "ASL", bytes: 3, cycles: 7, addressing_mode: AddressingMode::AbsoluteX },

    // Branch Instructions (relative, +1 cycle if taken, +1 more if page crossed)
    0x90u8 => Operand { opcode: 0x90, name: "BCC", bytes: 2, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0xB0u8 => Operand { opcode: 0xB0, name: "BCS", bytes: 2, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0xF0u8 => Operand { opcode: 0xF0, name: "BEQ", bytes: 2, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x30u8 => Operand { opcode: 0x30, name: "BMI", bytes: 2, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0xD0u8 => Operand { opcode: 0xD0, name: "BNE", bytes: 2, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x10u8 => Operand { opcode: 0x10, name: "BPL", bytes: 2, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x50u8 => Operand { opcode: 0x50, name: "BVC", bytes: 2, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x70u8 => Operand { opcode: 0x70, name: "BVS", bytes: 2, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },

    // BIT Instructions
    0x24u8 => Operand { opcode: 0x24, name: "BIT", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0x2Cu8 => Operand { opcode: 0x2C, name: "BIT", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },

    // BRK Instructions
    0x00u8 => Operand { opcode: 0x00, name: "BRK", bytes: 1, cycles: 7, addressing_mode: AddressingMode::NoneAddressing },

    // Flag Instructions
    0x18u8 => Operand { opcode: 0x18, name: "CLC", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0xD8u8 => Operand { opcode: 0xD8, name: "CLD", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x58u8 => Operand { opcode: 0x58, name: "CLI", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0xB8u8 => Operand { opcode: 0xB8, name: "CLV", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x38u8 => Operand { opcode: 0x38, name: "SEC", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0xF8u8 => Operand { opcode: 0xF8, name: "SED", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x78u8 => Operand { opcode: 0x78, name: "SEI", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },

    // CMP Instructions
    0xC9u8 => Operand { opcode: 0xC9, name: "CMP", bytes: 2, cycles: 2, addressing_mode: AddressingMode::Immediate },
    0xC5u8 => Operand { opcode: 0xC5, name: "CMP", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0xD5u8 => Operand { opcode: 0xD5, name: "CMP", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageX },
    0xCDu8 => Operand { opcode: 0xCD, name: "CMP", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },
    0xDDu8 => Operand { opcode: 0xDD, name: "CMP", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteX },
    0xD9u8 => Operand { opcode: 0xD9, name: "CMP", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteY },
    0xC1u8 => Operand { opcode: 0xC1, name: "CMP", bytes: 2, cycles: 6, addressing_mode: AddressingMode::IndirectX },
    0xD1u8 => Operand { opcode: 0xD1, name: "CMP", bytes: 2, cycles: 5 /* +1 if page crossed */, addressing_mode: AddressingMode::IndirectY },

    // CPX Instructions
    0xE0u8 => Operand { opcode: 0xE0, name: "CPX", bytes: 2, cycles: 2, addressing_mode: AddressingMode::Immediate },
    0xE4u8 => Operand { opcode: 0xE4, name: "CPX", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0xECu8 => Operand { opcode: 0xEC, name: "CPX", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },

    // CPY Instructions
    0xC0u8 => Operand { opcode: 0xC0, name: "CPY", bytes: 2, cycles: 2, addressing_mode: AddressingMode::Immediate },
    0xC4u8 => Operand { opcode: 0xC4, name: "CPY", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0xCCu8 => Operand { opcode: 0xCC, name: "CPY", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },

    // DEC Instructions
    0xC6u8 => Operand { opcode: 0xC6, name: "DEC", bytes: 2, cycles: 5, addressing_mode: AddressingMode::ZeroPage },
    0xD6u8 => Operand { opcode: 0xD6, name: "DEC", bytes: 2, cycles: 6, addressing_mode: AddressingMode::ZeroPageX },
    0xCEu8 => Operand { opcode: 0xCE, name: "DEC", bytes: 3, cycles: 6, addressing_mode: AddressingMode::Absolute },
    0xDEu8 => Operand { opcode: 0xDE, name: "DEC", bytes: 3, cycles: 7, addressing_mode: AddressingMode::AbsoluteX },

    // DEX Instructions
    0xCAu8 => Operand { opcode: 0xCA, name: "DEX", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },

    // DEY Instructions
    0x88u8 => Operand { opcode: 0x88, name: "DEY", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },

    // EOR Instructions
    0x49u8 => Operand { opcode: 0x49, name: "EOR", bytes: 2, cycles: 2, addressing_mode: AddressingMode::Immediate },
    0x45u8 => Operand { opcode: 0x45, name: "EOR", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0x55u8 => Operand { opcode: 0x55, name: "EOR", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageX },
    0x4Du8 => Operand { opcode: 0x4D, name: "EOR", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },
    0x5Du8 => Operand { opcode: 0x5D, name: "EOR", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteX },
    0x59u8 => Operand { opcode: 0x59, name: "EOR", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteY },
    0x41u8 => Operand { opcode: 0x41, name: "EOR", bytes: 2, cycles: 6, addressing_mode: AddressingMode::IndirectX },
    0x51u8 => Operand { opcode: 0x51, name: "EOR", bytes: 2, cycles: 5 /* +1 if page crossed */, addressing_mode: AddressingMode::IndirectY },

    // INC Instructions
    0xE6u8 => Operand { opcode: 0xE6, name: "INC", bytes: 2, cycles: 5, addressing_mode: AddressingMode::ZeroPage },
    0xF6u8 => Operand { opcode: 0xF6, name: "INC", bytes: 2, cycles: 6, addressing_mode: AddressingMode::ZeroPageX },
    0xEEu8 => Operand { opcode: 0xEE, name: "INC", bytes: 3, cycles: 6, addressing_mode: AddressingMode::Absolute },
    0xFEu8 => Operand { opcode: 0xFE, name: "INC", bytes: 3, cycles: 7, addressing_mode: AddressingMode::AbsoluteX },

    // INX Instructions
    0xE8u8 => Operand { opcode: 0xE8, name: "INX", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },

    // INY Instructions
    0xC8u8 => Operand { opcode: 0xC8, name: "INY", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },

    // JMP Instructions
    0x4Cu8 => Operand { opcode: 0x4C, name: "JMP", bytes: 3, cycles: 3, addressing_mode: AddressingMode::Absolute },
    0x6Cu8 => Operand { opcode: 0x6C, name: "JMP", bytes: 3, cycles: 5, addressing_mode: AddressingMode::NoneAddressing },

    // JSR Instructions
    0x20u8 => Operand { opcode: 0x20, name: "JSR", bytes: 3, cycles: 6, addressing_mode: AddressingMode::Absolute },

    // LDA Instructions
    0xA9u8 => Operand { opcode: 0xA9, name: "LDA", bytes: 2, cycles: 2, addressing_mode: AddressingMode::Immediate },
    0xA5u8 => Operand { opcode: 0xA5, name: "LDA", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0xB5u8 => Operand { opcode: 0xB5, name: "LDA", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageX },
    0xADu8 => Operand { opcode: 0xAD, name: "LDA", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },
    0xBDu8 => Operand { opcode: 0xBD, name: "LDA", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteX },
    0xB9u8 => Operand { opcode: 0xB9, name: "LDA", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteY },
    0xA1u8 => Operand { opcode: 0xA1, name: "LDA", bytes: 2, cycles: 6, addressing_mode: AddressingMode::IndirectX },
    0xB1u8 => Operand { opcode: 0xB1, name: "LDA", bytes: 2, cycles: 5 /* +1 if page crossed */, addressing_mode: AddressingMode::IndirectY },

    // LDX Instructions
    0xA2u8 => Operand { opcode: 0xA2, name: "LDX", bytes: 2, cycles: 2, addressing_mode: AddressingMode::Immediate },
    0xA6u8 => Operand { opcode: 0xA6, name: "LDX", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0xB6u8 => Operand { opcode: 0xB6, name: "LDX", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageY },
    0xAEu8 => Operand { opcode: 0xAE, name: "LDX", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },
    0xBEu8 => Operand { opcode: 0xBE, name: "LDX", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteY },

    // LDY Instructions
    0xA0u8 => Operand { opcode: 0xA0, name: "LDY", bytes: 2, cycles: 2, addressing_mode: AddressingMode::Immediate },
    0xA4u8 => Operand { opcode: 0xA4, name: "LDY", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0xB4u8 => Operand { opcode: 0xB4, name: "LDY", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageX },
    0xACu8 => Operand { opcode: 0xAC, name: "LDY", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },
    0xBCu8 => Operand { opcode: 0xBC, name: "LDY", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteX },

    // LSR Instructions
    0x4Au8 => Operand { opcode: 0x4A, name: "LSR", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x46u8 => Operand { opcode: 0x46, name: "LSR", bytes: 2, cycles: 5, addressing_mode: AddressingMode::ZeroPage },
    0x56u8 => Operand { opcode: 0x56, name: "LSR", bytes: 2, cycles: 6, addressing_mode: AddressingMode::ZeroPageX },
    0x4Eu8 => Operand { opcode: 0x4E, name: "LSR", bytes: 3, cycles: 6, addressing_mode: AddressingMode::Absolute },
    0x5Eu8 => Operand { opcode: 0x5E, name: "LSR", bytes: 3, cycles: 7, addressing_mode: AddressingMode::AbsoluteX },

    // NOP Instructions
    0xEAu8 => Operand { opcode: 0xEA, name: "NOP", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },

    // ORA Instructions
    0x09u8 => Operand { opcode: 0x09, name: "ORA", bytes: 2, cycles: 2, addressing_mode: AddressingMode::Immediate },
    0x05u8 => Operand { opcode: 0x05, name: "ORA", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0x15u8 => Operand { opcode: 0x15, name: "ORA", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageX },
    0x0Du8 => Operand { opcode: 0x0D, name: "ORA", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },
    0x1Du8 => Operand { opcode: 0x1D, name: "ORA", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteX },
    0x19u8 => Operand { opcode: 0x19, name: "ORA", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteY },
    0x01u8 => Operand { opcode: 0x01, name: "ORA", bytes: 2, cycles: 6, addressing_mode: AddressingMode::IndirectX },
    0x11u8 => Operand { opcode: 0x11, name: "ORA", bytes: 2, cycles: 5 /* +1 if page crossed */, addressing_mode: AddressingMode::IndirectY },

    // Stack Instructions
    0x48u8 => Operand { opcode: 0x48, name: "PHA", bytes: 1, cycles: 3, addressing_mode: AddressingMode::NoneAddressing },
    0x08u8 => Operand { opcode: 0x08, name: "PHP", bytes: 1, cycles: 3, addressing_mode: AddressingMode::NoneAddressing },
    0x68u8 => Operand { opcode: 0x68, name: "PLA", bytes: 1, cycles: 4, addressing_mode: AddressingMode::NoneAddressing },
    0x28u8 => Operand { opcode: 0x28, name: "PLP", bytes: 1, cycles: 4, addressing_mode: AddressingMode::NoneAddressing },

    // ROL Instructions
    0x2Au8 => Operand { opcode: 0x2A, name: "ROL", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x26u8 => Operand { opcode: 0x26, name: "ROL", bytes: 2, cycles: 5, addressing_mode: AddressingMode::ZeroPage },
    0x36u8 => Operand { opcode: 0x36, name: "ROL", bytes: 2, cycles: 6, addressing_mode: AddressingMode::ZeroPageX },
    0x2Eu8 => Operand { opcode: 0x2E, name: "ROL", bytes: 3, cycles: 6, addressing_mode: AddressingMode::Absolute },
    0x3Eu8 => Operand { opcode: 0x3E, name: "ROL", bytes: 3, cycles: 7, addressing_mode: AddressingMode::AbsoluteX },

    // ROR Instructions
    0x6Au8 => Operand { opcode: 0x6A, name: "ROR", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x66u8 => Operand { opcode: 0x66, name: "ROR", bytes: 2, cycles: 5, addressing_mode: AddressingMode::ZeroPage },
    0x76u8 => Operand { opcode: 0x76, name: "ROR", bytes: 2, cycles: 6, addressing_mode: AddressingMode::ZeroPageX },
    0x6Eu8 => Operand { opcode: 0x6E, name: "ROR", bytes: 3, cycles: 6, addressing_mode: AddressingMode::Absolute },
    0x7Eu8 => Operand { opcode: 0x7E, name: "ROR", bytes: 3, cycles: 7, addressing_mode: AddressingMode::AbsoluteX },

    // RTI Instructions
    0x40u8 => Operand { opcode: 0x40, name: "RTI", bytes: 1, cycles: 6, addressing_mode: AddressingMode::NoneAddressing },

    // RTS Instructions
    0x60u8 => Operand { opcode: 0x60, name: "RTS", bytes: 1, cycles: 6, addressing_mode: AddressingMode::NoneAddressing },

    // SBC Instructions
    0xE9u8 => Operand { opcode: 0xE9, name: "SBC", bytes: 2, cycles: 2, addressing_mode: AddressingMode::Immediate },
    0xE5u8 => Operand { opcode: 0xE5, name: "SBC", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0xF5u8 => Operand { opcode: 0xF5, name: "SBC", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageX },
    0xEDu8 => Operand { opcode: 0xED, name: "SBC", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },
    0xFDu8 => Operand { opcode: 0xFD, name: "SBC", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteX },
    0xF9u8 => Operand { opcode: 0xF9, name: "SBC", bytes: 3, cycles: 4 /* +1 if page crossed */, addressing_mode: AddressingMode::AbsoluteY },
    0xE1u8 => Operand { opcode: 0xE1, name: "SBC", bytes: 2, cycles: 6, addressing_mode: AddressingMode::IndirectX },
    0xF1u8 => Operand { opcode: 0xF1, name: "SBC", bytes: 2, cycles: 5 /* +1 if page crossed */, addressing_mode: AddressingMode::IndirectY },

    // STA Instructions
    0x85u8 => Operand { opcode: 0x85, name: "STA", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0x95u8 => Operand { opcode: 0x95, name: "STA", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageX },
    0x8Du8 => Operand { opcode: 0x8D, name: "STA", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },
    0x9Du8 => Operand { opcode: 0x9D, name: "STA", bytes: 3, cycles: 5, addressing_mode: AddressingMode::AbsoluteX },
    0x99u8 => Operand { opcode: 0x99, name: "STA", bytes: 3, cycles: 5, addressing_mode: AddressingMode::AbsoluteY },
    0x81u8 => Operand { opcode: 0x81, name: "STA", bytes: 2, cycles: 6, addressing_mode: AddressingMode::IndirectX },
    0x91u8 => Operand { opcode: 0x91, name: "STA", bytes: 2, cycles: 6, addressing_mode: AddressingMode::IndirectY },

    // STX Instructions
    0x86u8 => Operand { opcode: 0x86, name: "STX", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0x96u8 => Operand { opcode: 0x96, name: "STX", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageY },
    0x8Eu8 => Operand { opcode: 0x8E, name: "STX", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },

    // STY Instructions
    0x84u8 => Operand { opcode: 0x84, name: "STY", bytes: 2, cycles: 3, addressing_mode: AddressingMode::ZeroPage },
    0x94u8 => Operand { opcode: 0x94, name: "STY", bytes: 2, cycles: 4, addressing_mode: AddressingMode::ZeroPageX },
    0x8Cu8 => Operand { opcode: 0x8C, name: "STY", bytes: 3, cycles: 4, addressing_mode: AddressingMode::Absolute },

    // Transfer Instructions
    0xAAu8 => Operand { opcode: 0xAA, name: "TAX", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0xA8u8 => Operand { opcode: 0xA8, name: "TAY", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0xBAu8 => Operand { opcode: 0xBA, name: "TSX", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x8Au8 => Operand { opcode: 0x8A, name: "TXA", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x9Au8 => Operand { opcode: 0x9A, name: "TXS", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
    0x98u8 => Operand { opcode: 0x98, name: "TYA", bytes: 1, cycles: 2, addressing_mode: AddressingMode::NoneAddressing },
};
