use crate::bus::Mem;
use crate::cpu6502::{AddressingMode, CPU};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_cpx(&mut self, mode: AddressingMode) -> u8 {
        self.compare(mode, self.x_register)
    }
}
