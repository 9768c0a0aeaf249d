use crate::bus::Mem;
use crate::cpu6502::{CPU, CpuFlags};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_plp(&mut self) -> u8 {
        let bits = self.pop_u8();
        self.status = CpuFlags::from_bits_truncate(bits);
        // The break bits only exist on the stack copy of P.
        self.status.remove(CpuFlags::BREAK);
        self.status.insert(CpuFlags::BREAK2);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu6502::new_test_cpu;

    #[test]
    fn test_plp_restores_flags_but_normalizes_break_bits() {
        let mut cpu = new_test_cpu();
        cpu.push_u8(0b1101_0011); // N, V, B, Z, C

        cpu.handle_plp();

        assert!(cpu.status.contains(CpuFlags::NEGATIVE));
        assert!(cpu.status.contains(CpuFlags::OVERFLOW));
        assert!(cpu.status.contains(CpuFlags::ZERO));
        assert!(cpu.status.contains(CpuFlags::CARRY));
        assert!(!cpu.status.contains(CpuFlags::BREAK));
        assert!(cpu.status.contains(CpuFlags::BREAK2));
    }
}
