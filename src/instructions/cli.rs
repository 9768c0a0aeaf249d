use crate::bus::Mem;
use crate::cpu6502::{CPU, CpuFlags};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_cli(&mut self) -> u8 {
        self.status.remove(CpuFlags::INTERRUPT_DISABLE);
        0
    }
}
