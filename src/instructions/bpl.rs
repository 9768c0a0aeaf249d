use crate::bus::Mem;
use crate::cpu6502::{CPU, CpuFlags};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_bpl(&mut self) -> u8 {
        let offset = self.read_u8(self.program_counter) as i8;
        self.branch(!self.status.contains(CpuFlags::NEGATIVE), offset)
    }
}
