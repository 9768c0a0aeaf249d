use crate::bus::Mem;
use crate::cpu6502::{CPU, CpuFlags};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_sei(&mut self) -> u8 {
        self.status.insert(CpuFlags::INTERRUPT_DISABLE);
        0
    }
}
