// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Clock tree frequencies from the `SYSCLK` control registers.
//!
//! The root clock is selected by `CLKCON0.CLKMUX` from the internal
//! oscillator, the crystal, the system PLL or an external clock on a GPIO.
//! `HCLK` (core, bus, AFE, SPIH) and `PCLK` (UART, I2C, I2S, SPI0/1) are
//! divided down from the root clock by the 6-bit counts in `CLKCON1`.
//!
//! ```rust,ignore
//! use aducm350::chip_config::Config;
//! use aducm350::clocks::ClockTree;
//! use aducm350::registers::sysclk_regs::SYSCLK_BASE;
//!
//! let tree = ClockTree::<Config>::from_registers(&SYSCLK_BASE, 0);
//! let core_hz = tree.hclk();
//! ```

use core::fmt;
use core::marker::PhantomData;

use tock_registers::interfaces::Readable;
use tock_registers::LocalRegisterCopy;

use crate::chip_config::Aducm350Config;
use crate::registers::sysclk_regs::{SysClkRegisters, CLKCON0, CLKCON1, CLKCON3, CLKCON5};

pub type ClkCon0 = LocalRegisterCopy<u16, CLKCON0::Register>;
pub type ClkCon1 = LocalRegisterCopy<u16, CLKCON1::Register>;
pub type ClkCon3 = LocalRegisterCopy<u16, CLKCON3::Register>;

/// Largest value the `HCLKDIVCNT` and `PCLKDIVCNT` counts hold.
pub const MAX_DIVIDER: u8 = 0x3f;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootClock {
    HfOsc,
    HfXtal,
    Spll,
    Gpio,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockError {
    DivideOutOfRange(u8),
    /// `PCLK` would run faster than `HCLK`.
    InvalidSpeed { hclk_div: u8, pclk_div: u8 },
    /// `PCLK` divider is not a whole multiple of the `HCLK` divider.
    InvalidRatio { hclk_div: u8, pclk_div: u8 },
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ClockError::DivideOutOfRange(div) => {
                write!(f, "clock divider {} outside 1..={}", div, MAX_DIVIDER)
            }
            ClockError::InvalidSpeed { hclk_div, pclk_div } => write!(
                f,
                "PCLK divider {} faster than HCLK divider {}",
                pclk_div, hclk_div
            ),
            ClockError::InvalidRatio { hclk_div, pclk_div } => write!(
                f,
                "PCLK divider {} not a multiple of HCLK divider {}",
                pclk_div, hclk_div
            ),
        }
    }
}

/// Peripheral clocks that can be gated off in `CLKCON5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockGate {
    Spi0,
    Spi1,
    Spih,
    I2c,
    Uart,
    I2s,
    Aclk,
    CapTouch,
}

impl ClockGate {
    /// The `CLKCON5` bit that turns this clock off when set.
    pub fn off_bit(self) -> tock_registers::fields::Field<u16, CLKCON5::Register> {
        match self {
            ClockGate::Spi0 => CLKCON5::UCLKSPI0OFF,
            ClockGate::Spi1 => CLKCON5::UCLKSPI1OFF,
            ClockGate::Spih => CLKCON5::UCLKSPIHOFF,
            ClockGate::I2c => CLKCON5::UCLKI2COFF,
            ClockGate::Uart => CLKCON5::UCLKUARTOFF,
            ClockGate::I2s => CLKCON5::UCLKI2SOFF,
            ClockGate::Aclk => CLKCON5::ACLKOFF,
            ClockGate::CapTouch => CLKCON5::CTCLKOFF,
        }
    }
}

/// Snapshot of the clock control registers, evaluated against the
/// oscillator frequencies of `C`.
pub struct ClockTree<C: Aducm350Config> {
    clkcon0: ClkCon0,
    clkcon1: ClkCon1,
    clkcon3: ClkCon3,
    gpio_freq: u32,
    _config: PhantomData<C>,
}

impl<C: Aducm350Config> ClockTree<C> {
    /// `gpio_freq` is the frequency of the external clock input, used only
    /// when the root mux selects it.
    pub fn new(clkcon0: u16, clkcon1: u16, clkcon3: u16, gpio_freq: u32) -> ClockTree<C> {
        ClockTree {
            clkcon0: ClkCon0::new(clkcon0),
            clkcon1: ClkCon1::new(clkcon1),
            clkcon3: ClkCon3::new(clkcon3),
            gpio_freq,
            _config: PhantomData,
        }
    }

    pub fn from_registers(regs: &SysClkRegisters, gpio_freq: u32) -> ClockTree<C> {
        ClockTree {
            clkcon0: regs.clkcon0.extract(),
            clkcon1: regs.clkcon1.extract(),
            clkcon3: regs.clkcon3.extract(),
            gpio_freq,
            _config: PhantomData,
        }
    }

    pub fn root_source(&self) -> RootClock {
        match self.clkcon0.read_as_enum(CLKCON0::CLKMUX) {
            Some(CLKCON0::CLKMUX::Value::HFXTAL) => RootClock::HfXtal,
            Some(CLKCON0::CLKMUX::Value::SPLL) => RootClock::Spll,
            Some(CLKCON0::CLKMUX::Value::GPIO) => RootClock::Gpio,
            Some(CLKCON0::CLKMUX::Value::HFOSC) | None => RootClock::HfOsc,
        }
    }

    /// Output of the system PLL, whether or not it is selected.
    pub fn spll(&self) -> u32 {
        let input = if self.clkcon0.is_set(CLKCON0::PLLMUX) {
            C::HFXTAL_FREQ
        } else {
            C::HFOSC_FREQ
        };
        let mut freq = input * self.clkcon3.read(CLKCON3::SPLLNSEL) as u32;
        freq >>= match self.clkcon3.read_as_enum(CLKCON3::SPLLMSEL) {
            Some(CLKCON3::SPLLMSEL::Value::DIV2) => 1,
            Some(CLKCON3::SPLLMSEL::Value::DIV4) => 2,
            _ => 0,
        };
        if self.clkcon3.is_set(CLKCON3::SPLLDIV2) {
            freq >>= 1;
        }
        freq
    }

    /// Root (high frequency) clock.
    pub fn root(&self) -> u32 {
        match self.root_source() {
            RootClock::HfOsc => C::HFOSC_FREQ,
            RootClock::HfXtal => C::HFXTAL_FREQ,
            RootClock::Spll => self.spll(),
            RootClock::Gpio => self.gpio_freq,
        }
    }

    pub fn hclk_divider(&self) -> u8 {
        self.clkcon1.read(CLKCON1::HCLKDIVCNT) as u8
    }

    pub fn pclk_divider(&self) -> u8 {
        self.clkcon1.read(CLKCON1::PCLKDIVCNT) as u8
    }

    pub fn hclk(&self) -> u32 {
        self.root() / effective(self.hclk_divider())
    }

    pub fn pclk(&self) -> u32 {
        self.root() / effective(self.pclk_divider())
    }

    /// USB controller clock, derived from the fixed PHY clock.
    pub fn usb_ctl(&self) -> u32 {
        let hdiv = self.hclk_divider();
        if hdiv <= 1 {
            return C::USBPHY_FREQ;
        }
        let div = if self.clkcon1.is_set(CLKCON1::USBCTLCLKDIVMUX) {
            hdiv >> 1
        } else {
            hdiv
        };
        C::USBPHY_FREQ / effective(div)
    }

    pub fn lfclk(&self) -> u32 {
        C::LFCLK_FREQ
    }
}

// A zero count divides by one.
fn effective(div: u8) -> u32 {
    core::cmp::max(div, 1) as u32
}

/// Computes a `CLKCON1` value with new `HCLK` and `PCLK` dividers, keeping
/// the USB divider select of `current`.
pub fn set_dividers(current: u16, hclk_div: u8, pclk_div: u8) -> Result<u16, ClockError> {
    for div in [hclk_div, pclk_div] {
        if div == 0 || div > MAX_DIVIDER {
            return Err(ClockError::DivideOutOfRange(div));
        }
    }
    if hclk_div > pclk_div {
        return Err(ClockError::InvalidSpeed { hclk_div, pclk_div });
    }
    if pclk_div % hclk_div != 0 {
        return Err(ClockError::InvalidRatio { hclk_div, pclk_div });
    }
    let mut clkcon1 = ClkCon1::new(current);
    clkcon1.modify(
        CLKCON1::HCLKDIVCNT.val(hclk_div as u16) + CLKCON1::PCLKDIVCNT.val(pclk_div as u16),
    );
    Ok(clkcon1.get())
}

impl<C: Aducm350Config> fmt::Display for ClockTree<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}] root {:?} {} Hz, hclk {} Hz, pclk {} Hz",
            C::NAME,
            self.root_source(),
            self.root(),
            self.hclk(),
            self.pclk()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip_config::{Crystal16MHz, Crystal8MHz};
    use crate::defs::*;

    #[test]
    fn internal_oscillator_undivided() {
        let tree = ClockTree::<Crystal16MHz>::new(ENUM_SYSCLK_CLKCON0_CLKMUX_HFOSC, 0x0101, 0, 0);
        assert_eq!(tree.root_source(), RootClock::HfOsc);
        assert_eq!(tree.hclk(), 16_000_000);
        assert_eq!(tree.pclk(), 16_000_000);
    }

    #[test]
    fn zero_divider_counts_as_one() {
        let tree = ClockTree::<Crystal16MHz>::new(ENUM_SYSCLK_CLKCON0_CLKMUX_HFOSC, 0, 0, 0);
        assert_eq!(tree.hclk(), 16_000_000);
    }

    #[test]
    fn crystal_with_dividers() {
        let clkcon1 = set_dividers(0, 2, 8).unwrap();
        let tree = ClockTree::<Crystal8MHz>::new(ENUM_SYSCLK_CLKCON0_CLKMUX_HFXTAL, clkcon1, 0, 0);
        assert_eq!(tree.root(), 8_000_000);
        assert_eq!(tree.hclk(), 4_000_000);
        assert_eq!(tree.pclk(), 1_000_000);
    }

    #[test]
    fn spll_from_crystal() {
        // 16 MHz * 8 / 2 / 2 = 32 MHz
        let clkcon0 = ENUM_SYSCLK_CLKCON0_CLKMUX_SPLL | BITM_SYSCLK_CLKCON0_PLLMUX;
        let clkcon3 = 8 | ENUM_SYSCLK_CLKCON3_SPLLMSEL_DIV2 | BITM_SYSCLK_CLKCON3_SPLLDIV2;
        let tree = ClockTree::<Crystal16MHz>::new(clkcon0, 0x0101, clkcon3, 0);
        assert_eq!(tree.root_source(), RootClock::Spll);
        assert_eq!(tree.root(), 32_000_000);

        // Same settings from the 8 MHz crystal.
        let tree = ClockTree::<Crystal8MHz>::new(clkcon0, 0x0101, clkcon3, 0);
        assert_eq!(tree.root(), 16_000_000);
    }

    #[test]
    fn spll_from_oscillator_div4() {
        let clkcon3 = 16 | ENUM_SYSCLK_CLKCON3_SPLLMSEL_DIV4;
        let tree = ClockTree::<Crystal8MHz>::new(ENUM_SYSCLK_CLKCON0_CLKMUX_SPLL, 0x0101, clkcon3, 0);
        assert_eq!(tree.spll(), 64_000_000);
    }

    #[test]
    fn gpio_clock() {
        let tree = ClockTree::<Crystal16MHz>::new(ENUM_SYSCLK_CLKCON0_CLKMUX_GPIO, 0x0101, 0, 12_000_000);
        assert_eq!(tree.hclk(), 12_000_000);
    }

    #[test]
    fn usb_controller_clock() {
        let tree = ClockTree::<Crystal16MHz>::new(0, 0x0101, 0, 0);
        assert_eq!(tree.usb_ctl(), 60_000_000);
        let tree = ClockTree::<Crystal16MHz>::new(0, 0x0404 | BITM_SYSCLK_CLKCON1_USBCTLCLKDIVMUX, 0, 0);
        assert_eq!(tree.usb_ctl(), 30_000_000);
    }

    #[test]
    fn divider_validation() {
        assert_eq!(set_dividers(0, 0, 1), Err(ClockError::DivideOutOfRange(0)));
        assert_eq!(set_dividers(0, 1, 64), Err(ClockError::DivideOutOfRange(64)));
        assert_eq!(
            set_dividers(0, 4, 2),
            Err(ClockError::InvalidSpeed { hclk_div: 4, pclk_div: 2 })
        );
        assert_eq!(
            set_dividers(0, 3, 4),
            Err(ClockError::InvalidRatio { hclk_div: 3, pclk_div: 4 })
        );
        assert_eq!(
            set_dividers(BITM_SYSCLK_CLKCON1_USBCTLCLKDIVMUX, 1, 63),
            Ok(BITM_SYSCLK_CLKCON1_USBCTLCLKDIVMUX | 0x3f01)
        );
    }

    #[test]
    fn gate_bits_match_constants() {
        let g = ClockGate::Uart.off_bit();
        assert_eq!(g.mask << g.shift, BITM_SYSCLK_CLKCON5_UCLKUARTOFF);
        let g = ClockGate::CapTouch.off_bit();
        assert_eq!(g.mask << g.shift, BITM_SYSCLK_CLKCON5_CTCLKOFF);
    }
}
