use crate::bus::Mem;
use crate::cpu6502::{AddressingMode, CPU, CpuFlags};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_lsr_accumulator(&mut self) -> u8 {
        let value = self.accumulator;
        self.status.set(CpuFlags::CARRY, value & 0x01 != 0);
        self.accumulator = value >> 1;
        self.update_zero_and_negative_flags(self.accumulator);
        0
    }

    pub(crate) fn handle_lsr(&mut self, mode: AddressingMode) -> u8 {
        let addr = self.get_operand_address(mode, self.program_counter);
        let value = self.read_u8(addr);
        self.status.set(CpuFlags::CARRY, value & 0x01 != 0);
        let result = value >> 1;
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
    fn test_lsr_accumulator_shifts_into_carry() {
        let mut cpu = new_test_cpu();
        cpu.accumulator = 0b0000_0011;
        cpu.handle_lsr_accumulator();

        assert_eq!(cpu.accumulator, 0b0000_0001);
        assert!(cpu.status.contains(CpuFlags::CARRY));
        // Bit 7 always becomes 0.
        assert!(!cpu.status.contains(CpuFlags::NEGATIVE));
    }

    #[test]
    fn test_lsr_memory() {
        let mut cpu = new_test_cpu();
        cpu.program_counter = 0x0200;
        cpu.write_u8(0x0200, 0x10);
        cpu.write_u8(0x10, 0b1000_0010);
        cpu.handle_lsr(AddressingMode::ZeroPage);

        assert_eq!(cpu.read_u8(0x10), 0b0100_0001);
        assert!(!cpu.status.contains(CpuFlags::CARRY));
    }

    #[test]
    fn test_lsr_to_zero() {
        let mut cpu = new_test_cpu();
        cpu.accumulator = 0x01;
        cpu.handle_lsr_accumulator();

        assert_eq!(cpu.accumulator, 0);
        assert!(cpu.status.contains(CpuFlags::CARRY));
        assert!(cpu.status.contains(CpuFlags::ZERO));
    }
}
