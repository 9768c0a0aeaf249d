use crate::bus::Mem;
use crate::cpu6502::{AddressingMode, CPU, CpuFlags};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_rol_accumulator(&mut self) -> u8 {
        let value = self.accumulator;
        let carry_in = self.status.contains(CpuFlags::CARRY) as u8;
        self.status.set(CpuFlags::CARRY, value & 0x80 != 0);
        self.accumulator = (value << 1) | carry_in;
        self.update_zero_and_negative_flags(self.accumulator);
        0
    }

    pub(crate) fn handle_rol(&mut self, mode: AddressingMode) -> u8 {
        let addr = self.get_operand_address(mode, self.program_counter);
        let value = self.read_u8(addr);
        let carry_in = self.status.contains(CpuFlags::CARRY) as u8;
        self.status.set(CpuFlags::CARRY, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.write_u8(addr, result);
        self.update_zero_and_negative_flags(result);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu6502::new_test_cpu;

    #[test]
    fn test_rol_rotates_carry_into_bit_0() {
        let mut cpu = new_test_cpu();
        cpu.accumulator = 0b0100_0000;
        cpu.status.insert(CpuFlags::CARRY);
        cpu.handle_rol_accumulator();

        assert_eq!(cpu.accumulator, 0b1000_0001);
        assert!(!cpu.status.contains(CpuFlags::CARRY));
        assert!(cpu.status.contains(CpuFlags::NEGATIVE));
    }

    #[test]
    fn test_rol_memory_pushes_bit_7_out() {
        let mut cpu = new_test_cpu();
        cpu.program_counter = 0x0200;
        cpu.write_u8(0x0200, 0x10);
        cpu.write_u8(0x10, 0b1000_0000);
        cpu.handle_rol(AddressingMode::ZeroPage);

        assert_eq!(cpu.read_u8(0x10), 0b0000_0000);
        assert!(cpu.status.contains(CpuFlags::CARRY));
        assert!(cpu.status.contains(CpuFlags::ZERO));
    }
}
