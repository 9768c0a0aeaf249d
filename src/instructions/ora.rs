use crate::bus::Mem;
use crate::cpu6502::{AddressingMode, CPU};

impl<M: Mem> CPU<M> {
    pub(crate) fn handle_ora(&mut self, mode: AddressingMode) -> u8 {
        let addr = self.get_operand_address(mode, self.program_counter);
        self.accumulator |= self.read_u8(addr);
        self.update_zero_and_negative_flags(self.accumulator);
        0
    }
}
