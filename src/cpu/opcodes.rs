// Autogenerated 6502 opcode dispatch table: addressing mode, byte length,
// base cycle count and page-cross penalty flag for every opcode value.
// The eight stable unofficial opcodes (SLO, RLA, SRE, RRA, SAX, LAX, DCP,
// ISC) decode to their real RMW operation; every other undocumented opcode
// falls back to a one-byte, two-cycle NOP, matching `execute_instruction`'s
// catch-all arm.

use crate::cpu::addressing::AddressingMode;

#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub bytes: u8,
    pub cycles: u8,
    pub page_cycle: bool,
}

const fn op(mnemonic: &'static str, mode: AddressingMode, bytes: u8, cycles: u8, page_cycle: bool) -> OpcodeInfo {
    OpcodeInfo { mnemonic, mode, bytes, cycles, page_cycle }
}

const NOP1: OpcodeInfo = op("NOP", AddressingMode::Implied, 1, 2, false);

pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    op("BRK", AddressingMode::Implied, 1, 7, false), // 0x00
    op("ORA", AddressingMode::IndexedIndirect, 2, 6, false), // 0x01
    NOP1, // 0x02 unofficial
    op("SLO", AddressingMode::IndexedIndirect, 2, 8, false), // 0x03
    NOP1, // 0x04 unofficial
    op("ORA", AddressingMode::ZeroPage, 2, 3, false), // 0x05
    op("ASL", AddressingMode::ZeroPage, 2, 5, false), // 0x06
    op("SLO", AddressingMode::ZeroPage, 2, 5, false), // 0x07
    op("PHP", AddressingMode::Implied, 1, 3, false), // 0x08
    op("ORA", AddressingMode::Immediate, 2, 2, false), // 0x09
    op("ASL", AddressingMode::Accumulator, 1, 2, false), // 0x0a
    NOP1, // 0x0b unofficial
    NOP1, // 0x0c unofficial
    op("ORA", AddressingMode::Absolute, 3, 4, false), // 0x0d
    op("ASL", AddressingMode::Absolute, 3, 6, false), // 0x0e
    op("SLO", AddressingMode::Absolute, 3, 6, false), // 0x0f
    op("BPL", AddressingMode::Relative, 2, 2, false), // 0x10
    op("ORA", AddressingMode::IndirectIndexed, 2, 5, true), // 0x11
    NOP1, // 0x12 unofficial
    op("SLO", AddressingMode::IndirectIndexed, 2, 8, false), // 0x13
    NOP1, // 0x14 unofficial
    op("ORA", AddressingMode::ZeroPageX, 2, 4, false), // 0x15
    op("ASL", AddressingMode::ZeroPageX, 2, 6, false), // 0x16
    op("SLO", AddressingMode::ZeroPageX, 2, 6, false), // 0x17
    op("CLC", AddressingMode::Implied, 1, 2, false), // 0x18
    op("ORA", AddressingMode::AbsoluteY, 3, 4, true), // 0x19
    NOP1, // 0x1a unofficial
    op("SLO", AddressingMode::AbsoluteY, 3, 7, false), // 0x1b
    NOP1, // 0x1c unofficial
    op("ORA", AddressingMode::AbsoluteX, 3, 4, true), // 0x1d
    op("ASL", AddressingMode::AbsoluteX, 3, 7, false), // 0x1e
    op("SLO", AddressingMode::AbsoluteX, 3, 7, false), // 0x1f
    op("JSR", AddressingMode::Absolute, 3, 6, false), // 0x20
    op("AND", AddressingMode::IndexedIndirect, 2, 6, false), // 0x21
    NOP1, // 0x22 unofficial
    op("RLA", AddressingMode::IndexedIndirect, 2, 8, false), // 0x23
    op("BIT", AddressingMode::ZeroPage, 2, 3, false), // 0x24
    op("AND", AddressingMode::ZeroPage, 2, 3, false), // 0x25
    op("ROL", AddressingMode::ZeroPage, 2, 5, false), // 0x26
    op("RLA", AddressingMode::ZeroPage, 2, 5, false), // 0x27
    op("PLP", AddressingMode::Implied, 1, 4, false), // 0x28
    op("AND", AddressingMode::Immediate, 2, 2, false), // 0x29
    op("ROL", AddressingMode::Accumulator, 1, 2, false), // 0x2a
    NOP1, // 0x2b unofficial
    op("BIT", AddressingMode::Absolute, 3, 4, false), // 0x2c
    op("AND", AddressingMode::Absolute, 3, 4, false), // 0x2d
    op("ROL", AddressingMode::Absolute, 3, 6, false), // 0x2e
    op("RLA", AddressingMode::Absolute, 3, 6, false), // 0x2f
    op("BMI", AddressingMode::Relative, 2, 2, false), // 0x30
    op("AND", AddressingMode::IndirectIndexed, 2, 5, true), // 0x31
    NOP1, // 0x32 unofficial
    op("RLA", AddressingMode::IndirectIndexed, 2, 8, false), // 0x33
    NOP1, // 0x34 unofficial
    op("AND", AddressingMode::ZeroPageX, 2, 4, false), // 0x35
    op("ROL", AddressingMode::ZeroPageX, 2, 6, false), // 0x36
    op("RLA", AddressingMode::ZeroPageX, 2, 6, false), // 0x37
    op("SEC", AddressingMode::Implied, 1, 2, false), // 0x38
    op("AND", AddressingMode::AbsoluteY, 3, 4, true), // 0x39
    NOP1, // 0x3a unofficial
    op("RLA", AddressingMode::AbsoluteY, 3, 7, false), // 0x3b
    NOP1, // 0x3c unofficial
    op("AND", AddressingMode::AbsoluteX, 3, 4, true), // 0x3d
    op("ROL", AddressingMode::AbsoluteX, 3, 7, false), // 0x3e
    op("RLA", AddressingMode::AbsoluteX, 3, 7, false), // 0x3f
    op("RTI", AddressingMode::Implied, 1, 6, false), // 0x40
    op("EOR", AddressingMode::IndexedIndirect, 2, 6, false), // 0x41
    NOP1, // 0x42 unofficial
    op("SRE", AddressingMode::IndexedIndirect, 2, 8, false), // 0x43
    NOP1, // 0x44 unofficial
    op("EOR", AddressingMode::ZeroPage, 2, 3, false), // 0x45
    op("LSR", AddressingMode::ZeroPage, 2, 5, false), // 0x46
    op("SRE", AddressingMode::ZeroPage, 2, 5, false), // 0x47
    op("PHA", AddressingMode::Implied, 1, 3, false), // 0x48
    op("EOR", AddressingMode::Immediate, 2, 2, false), // 0x49
    op("LSR", AddressingMode::Accumulator, 1, 2, false), // 0x4a
    NOP1, // 0x4b unofficial
    op("JMP", AddressingMode::Absolute, 3, 3, false), // 0x4c
    op("EOR", AddressingMode::Absolute, 3, 4, false), // 0x4d
    op("LSR", AddressingMode::Absolute, 3, 6, false), // 0x4e
    op("SRE", AddressingMode::Absolute, 3, 6, false), // 0x4f
    op("BVC", AddressingMode::Relative, 2, 2, false), // 0x50
    op("EOR", AddressingMode::IndirectIndexed, 2, 5, true), // 0x51
    NOP1, // 0x52 unofficial
    op("SRE", AddressingMode::IndirectIndexed, 2, 8, false), // 0x53
    NOP1, // 0x54 unofficial
    op("EOR", AddressingMode::ZeroPageX, 2, 4, false), // 0x55
    op("LSR", AddressingMode::ZeroPageX, 2, 6, false), // 0x56
    op("SRE", AddressingMode::ZeroPageX, 2, 6, false), // 0x57
    op("CLI", AddressingMode::Implied, 1, 2, false), // 0x58
    op("EOR", AddressingMode::AbsoluteY, 3, 4, true), // 0x59
    NOP1, // 0x5a unofficial
    op("SRE", AddressingMode::AbsoluteY, 3, 7, false), // 0x5b
    NOP1, // 0x5c unofficial
    op("EOR", AddressingMode::AbsoluteX, 3, 4, true), // 0x5d
    op("LSR", AddressingMode::AbsoluteX, 3, 7, false), // 0x5e
    op("SRE", AddressingMode::AbsoluteX, 3, 7, false), // 0x5f
    op("RTS", AddressingMode::Implied, 1, 6, false), // 0x60
    op("ADC", AddressingMode::IndexedIndirect, 2, 6, false), // 0x61
    NOP1, // 0x62 unofficial
    op("RRA", AddressingMode::IndexedIndirect, 2, 8, false), // 0x63
    NOP1, // 0x64 unofficial
    op("ADC", AddressingMode::ZeroPage, 2, 3, false), // 0x65
    op("ROR", AddressingMode::ZeroPage, 2, 5, false), // 0x66
    op("RRA", AddressingMode::ZeroPage, 2, 5, false), // 0x67
    op("PLA", AddressingMode::Implied, 1, 4, false), // 0x68
    op("ADC", AddressingMode::Immediate, 2, 2, false), // 0x69
    op("ROR", AddressingMode::Accumulator, 1, 2, false), // 0x6a
    NOP1, // 0x6b unofficial
    op("JMP", AddressingMode::Indirect, 3, 5, false), // 0x6c
    op("ADC", AddressingMode::Absolute, 3, 4, false), // 0x6d
    op("ROR", AddressingMode::Absolute, 3, 6, false), // 0x6e
    op("RRA", AddressingMode::Absolute, 3, 6, false), // 0x6f
    op("BVS", AddressingMode::Relative, 2, 2, false), // 0x70
    op("ADC", AddressingMode::IndirectIndexed, 2, 5, true), // 0x71
    NOP1, // 0x72 unofficial
    op("RRA", AddressingMode::IndirectIndexed, 2, 8, false), // 0x73
    NOP1, // 0x74 unofficial
    op("ADC", AddressingMode::ZeroPageX, 2, 4, false), // 0x75
    op("ROR", AddressingMode::ZeroPageX, 2, 6, false), // 0x76
    op("RRA", AddressingMode::ZeroPageX, 2, 6, false), // 0x77
    op("SEI", AddressingMode::Implied, 1, 2, false), // 0x78
    op("ADC", AddressingMode::AbsoluteY, 3, 4, true), // 0x79
    NOP1, // 0x7a unofficial
    op("RRA", AddressingMode::AbsoluteY, 3, 7, false), // 0x7b
    NOP1, // 0x7c unofficial
    op("ADC", AddressingMode::AbsoluteX, 3, 4, true), // 0x7d
    op("ROR", AddressingMode::AbsoluteX, 3, 7, false), // 0x7e
    op("RRA", AddressingMode::AbsoluteX, 3, 7, false), // 0x7f
    NOP1, // 0x80 unofficial
    op("STA", AddressingMode::IndexedIndirect, 2, 6, false), // 0x81
    NOP1, // 0x82 unofficial
    op("SAX", AddressingMode::IndexedIndirect, 2, 6, false), // 0x83
    op("STY", AddressingMode::ZeroPage, 2, 3, false), // 0x84
    op("STA", AddressingMode::ZeroPage, 2, 3, false), // 0x85
    op("STX", AddressingMode::ZeroPage, 2, 3, false), // 0x86
    op("SAX", AddressingMode::ZeroPage, 2, 3, false), // 0x87
    op("DEY", AddressingMode::Implied, 1, 2, false), // 0x88
    NOP1, // 0x89 unofficial
    op("TXA", AddressingMode::Implied, 1, 2, false), // 0x8a
    NOP1, // 0x8b unofficial
    op("STY", AddressingMode::Absolute, 3, 4, false), // 0x8c
    op("STA", AddressingMode::Absolute, 3, 4, false), // 0x8d
    op("STX", AddressingMode::Absolute, 3, 4, false), // 0x8e
    op("SAX", AddressingMode::Absolute, 3, 4, false), // 0x8f
    op("BCC", AddressingMode::Relative, 2, 2, false), // 0x90
    op("STA", AddressingMode::IndirectIndexed, 2, 6, false), // 0x91
    NOP1, // 0x92 unofficial
    NOP1, // 0x93 unofficial
    op("STY", AddressingMode::ZeroPageX, 2, 4, false), // 0x94
    op("STA", AddressingMode::ZeroPageX, 2, 4, false), // 0x95
    op("STX", AddressingMode::ZeroPageY, 2, 4, false), // 0x96
    op("SAX", AddressingMode::ZeroPageY, 2, 4, false), // 0x97
    op("TYA", AddressingMode::Implied, 1, 2, false), // 0x98
    op("STA", AddressingMode::AbsoluteY, 3, 5, false), // 0x99
    op("TXS", AddressingMode::Implied, 1, 2, false), // 0x9a
    NOP1, // 0x9b unofficial
    NOP1, // 0x9c unofficial
    op("STA", AddressingMode::AbsoluteX, 3, 5, false), // 0x9d
    NOP1, // 0x9e unofficial
    NOP1, // 0x9f unofficial
    op("LDY", AddressingMode::Immediate, 2, 2, false), // 0xa0
    op("LDA", AddressingMode::IndexedIndirect, 2, 6, false), // 0xa1
    op("LDX", AddressingMode::Immediate, 2, 2, false), // 0xa2
    op("LAX", AddressingMode::IndexedIndirect, 2, 6, false), // 0xa3
    op("LDY", AddressingMode::ZeroPage, 2, 3, false), // 0xa4
    op("LDA", AddressingMode::ZeroPage, 2, 3, false), // 0xa5
    op("LDX", AddressingMode::ZeroPage, 2, 3, false), // 0xa6
    op("LAX", AddressingMode::ZeroPage, 2, 3, false), // 0xa7
    op("TAY", AddressingMode::Implied, 1, 2, false), // 0xa8
    op("LDA", AddressingMode::Immediate, 2, 2, false), // 0xa9
    op("TAX", AddressingMode::Implied, 1, 2, false), // 0xaa
    NOP1, // 0xab unofficial
    op("LDY", AddressingMode::Absolute, 3, 4, false), // 0xac
    op("LDA", AddressingMode::Absolute, 3, 4, false), // 0xad
    op("LDX", AddressingMode::Absolute, 3, 4, false), // 0xae
    op("LAX", AddressingMode::Absolute, 3, 4, false), // 0xaf
    op("BCS", AddressingMode::Relative, 2, 2, false), // 0xb0
    op("LDA", AddressingMode::IndirectIndexed, 2, 5, true), // 0xb1
    NOP1, // 0xb2 unofficial
    op("LAX", AddressingMode::IndirectIndexed, 2, 5, true), // 0xb3
    op("LDY", AddressingMode::ZeroPageX, 2, 4, false), // 0xb4
    op("LDA", AddressingMode::ZeroPageX, 2, 4, false), // 0xb5
    op("LDX", AddressingMode::ZeroPageY, 2, 4, false), // 0xb6
    op("LAX", AddressingMode::ZeroPageY, 2, 4, false), // 0xb7
    op("CLV", AddressingMode::Implied, 1, 2, false), // 0xb8
    op("LDA", AddressingMode::AbsoluteY, 3, 4, true), // 0xb9
    op("TSX", AddressingMode::Implied, 1, 2, false), // 0xba
    NOP1, // 0xbb unofficial
    op("LDY", AddressingMode::AbsoluteX, 3, 4, true), // 0xbc
    op("LDA", AddressingMode::AbsoluteX, 3, 4, true), // 0xbd
    op("LDX", AddressingMode::AbsoluteY, 3, 4, true), // 0xbe
    op("LAX", AddressingMode::AbsoluteY, 3, 4, true), // 0xbf
    op("CPY", AddressingMode::Immediate, 2, 2, false), // 0xc0
    op("CMP", AddressingMode::IndexedIndirect, 2, 6, false), // 0xc1
    NOP1, // 0xc2 unofficial
    op("DCP", AddressingMode::IndexedIndirect, 2, 8, false), // 0xc3
    op("CPY", AddressingMode::ZeroPage, 2, 3, false), // 0xc4
    op("CMP", AddressingMode::ZeroPage, 2, 3, false), // 0xc5
    op("DEC", AddressingMode::ZeroPage, 2, 5, false), // 0xc6
    op("DCP", AddressingMode::ZeroPage, 2, 5, false), // 0xc7
    op("INY", AddressingMode::Implied, 1, 2, false), // 0xc8
    op("CMP", AddressingMode::Immediate, 2, 2, false), // 0xc9
    op("DEX", AddressingMode::Implied, 1, 2, false), // 0xca
    NOP1, // 0xcb unofficial
    op("CPY", AddressingMode::Absolute, 3, 4, false), // 0xcc
    op("CMP", AddressingMode::Absolute, 3, 4, false), // 0xcd
    op("DEC", AddressingMode::Absolute, 3, 6, false), // 0xce
    op("DCP", AddressingMode::Absolute, 3, 6, false), // 0xcf
    op("BNE", AddressingMode::Relative, 2, 2, false), // 0xd0
    op("CMP", AddressingMode::IndirectIndexed, 2, 5, true), // 0xd1
    NOP1, // 0xd2 unofficial
    op("DCP", AddressingMode::IndirectIndexed, 2, 8, false), // 0xd3
    NOP1, // 0xd4 unofficial
    op("CMP", AddressingMode::ZeroPageX, 2, 4, false), // 0xd5
    op("DEC", AddressingMode::ZeroPageX, 2, 6, false), // 0xd6
    op("DCP", AddressingMode::ZeroPageX, 2, 6, false), // 0xd7
    op("CLD", AddressingMode::Implied, 1, 2, false), // 0xd8
    op("CMP", AddressingMode::AbsoluteY, 3, 4, true), // 0xd9
    NOP1, // 0xda unofficial
    op("DCP", AddressingMode::AbsoluteY, 3, 7, false), // 0xdb
    NOP1, // 0xdc unofficial
    op("CMP", AddressingMode::AbsoluteX, 3, 4, true), // 0xdd
    op("DEC", AddressingMode::AbsoluteX, 3, 7, false), // 0xde
    op("DCP", AddressingMode::AbsoluteX, 3, 7, false), // 0xdf
    op("CPX", AddressingMode::Immediate, 2, 2, false), // 0xe0
    op("SBC", AddressingMode::IndexedIndirect, 2, 6, false), // 0xe1
    NOP1, // 0xe2 unofficial
    op("ISC", AddressingMode::IndexedIndirect, 2, 8, false), // 0xe3
    op("CPX", AddressingMode::ZeroPage, 2, 3, false), // 0xe4
    op("SBC", AddressingMode::ZeroPage, 2, 3, false), // 0xe5
    op("INC", AddressingMode::ZeroPage, 2, 5, false), // 0xe6
    op("ISC", AddressingMode::ZeroPage, 2, 5, false), // 0xe7
    op("INX", AddressingMode::Implied, 1, 2, false), // 0xe8
    op("SBC", AddressingMode::Immediate, 2, 2, false), // 0xe9
    op("NOP", AddressingMode::Implied, 1, 2, false), // 0xea
    NOP1, // 0xeb unofficial
    op("CPX", AddressingMode::Absolute, 3, 4, false), // 0xec
    op("SBC", AddressingMode::Absolute, 3, 4, false), // 0xed
    op("INC", AddressingMode::Absolute, 3, 6, false), // 0xee
    op("ISC", AddressingMode::Absolute, 3, 6, false), // 0xef
    op("BEQ", AddressingMode::Relative, 2, 2, false), // 0xf0
    op("SBC", AddressingMode::IndirectIndexed, 2, 5, true), // 0xf1
    NOP1, // 0xf2 unofficial
    op("ISC", AddressingMode::IndirectIndexed, 2, 8, false), // 0xf3
    NOP1, // 0xf4 unofficial
    op("SBC", AddressingMode::ZeroPageX, 2, 4, false), // 0xf5
    op("INC", AddressingMode::ZeroPageX, 2, 6, false), // 0xf6
    op("ISC", AddressingMode::ZeroPageX, 2, 6, false), // 0xf7
    op("SED", AddressingMode::Implied, 1, 2, false), // 0xf8
    op("SBC", AddressingMode::AbsoluteY, 3, 4, true), // 0xf9
    NOP1, // 0xfa unofficial
    op("ISC", AddressingMode::AbsoluteY, 3, 7, false), // 0xfb
    NOP1, // 0xfc unofficial
    op("SBC", AddressingMode::AbsoluteX, 3, 4, true), // 0xfd
    op("INC", AddressingMode::AbsoluteX, 3, 7, false), // 0xfe
    op("ISC", AddressingMode::AbsoluteX, 3, 7, false), // 0xff
];

