use super::super::Cpu;

impl Cpu {
    /// Apply the delayed IME change requested by EI.
    ///
    /// `armed` is the value of `ime_enable_pending` sampled before the
    /// instruction that just finished. EI itself therefore never arms the
    /// enable, and a DI in between cancels it.
    #[inline]
    pub(in crate::cpu) fn apply_ime_delay(&mut self, armed: bool) {
        if armed && self.ime_enable_pending {
            self.ime = true;
            self.ime_enable_pending = false;
        }
    }
}
