use crate::bus::Mem;
use crate::cpu6502::{CPU, CpuFlags};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_cld(&mut self) -> u8 {
        self.status.remove(CpuFlags::DECIMAL_MODE);
        0
    }
}
