use crate::map::RCC_AHB1ENR;
use crate::reg::RegisterBank;

/// Sets the AHB1 clock enable bit of one GPIO bank.
///
/// GPIO registers of a bank ignore accesses until its clock is on. The bit is
/// never cleared again.
pub fn enable_port_clock<R>(rcc: &mut R, bit: u32) -> u32
where
    R: RegisterBank + ?Sized,
{
    let enr = rcc.modify(RCC_AHB1ENR, |r| r | (1 << bit));
    debug!("AHB1ENR = {=u32:#x}", enr);
    enr
}
