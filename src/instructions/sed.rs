use crate::bus::Mem;
use crate::cpu6502::{CPU, CpuFlags};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_sed(&mut self) -> u8 {
        // The flag is tracked even though decimal arithmetic is not
        // implemented, exactly like the NES hardware ignores it.
        self.status.insert(CpuFlags::DECIMAL_MODE);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu6502::new_test_cpu;

    #[test]
    fn test_sed_sets_decimal_mode() {
        let mut cpu = new_test_cpu();
        cpu.handle_sed();
        assert!(cpu.status.contains(CpuFlags::DECIMAL_MODE));
    }
}
