use bitflags::bitflags;

bitflags! {
    /// The 6502 status register: one byte, seven named flags.
    ///
    /// Bit 5 is unused on the 6502 and stays clear here. `set(flag, bool)`
    /// clears the target bit before applying the new value, so every flag
    /// is independently invertible without disturbing the others.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Recompute Z and N from an operation result: Z when the value is
    /// zero, N when bit 7 is set. Other flags are left untouched.
    #[inline]
    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}
