use crate::bus::Mem;
use crate::cpu6502::{CPU, CpuFlags};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_rti(&mut self) -> u8 {
        let bits = self.pop_u8();
        self.status = CpuFlags::from_bits_truncate(bits);
        // The break bits only exist on the stack copy of P.
        self.status.remove(CpuFlags::BREAK);
        self.status.insert(CpuFlags::BREAK2);

        self.program_counter = self.pop_u16();
        0
    }
}
