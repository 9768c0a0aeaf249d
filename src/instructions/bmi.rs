use crate::bus::Mem;
use crate::cpu6502::{CPU, CpuFlags};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_bmi(&mut self) -> u8 {
        let offset = self.read_u8(self.program_counter) as i8;
        self.branch(self.status.contains(CpuFlags::NEGATIVE), offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu6502::new_test_cpu;

    #[test]
    fn test_bmi_taken_when_negative_set() {
        let mut cpu = new_test_cpu();
        cpu.program_counter = 0x1000;
        cpu.write_u8(0x1000, 0x08);
        cpu.status.insert(CpuFlags::NEGATIVE);
        cpu.handle_bmi();

        assert_eq!(cpu.program_counter, 0x1009);
    }
}
