// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Board specific oscillator configuration.
//!
//! The internal oscillators are fixed, but the high frequency crystal fitted
//! to a board can be either 16 MHz or 8 MHz. The clock tree calculations in
//! [`crate::clocks`] take their source frequencies from a type implementing
//! [`Aducm350Config`], and a default is chosen through Cargo features.

/// Oscillator frequencies of a particular board.
pub trait Aducm350Config {
    /// Identifier for the configuration. This is useful for debugging to
    /// confirm the correct configuration of the chip is being used.
    const NAME: &'static str;

    /// Internal high frequency oscillator, in Hz.
    const HFOSC_FREQ: u32;

    /// External high frequency crystal, in Hz.
    const HFXTAL_FREQ: u32;

    /// Low frequency clock, in Hz. The same whether taken from the internal
    /// oscillator or the 32 kHz crystal.
    const LFCLK_FREQ: u32;

    /// USB PHY clock, in Hz.
    const USBPHY_FREQ: u32;
}

/// Board with the 16 MHz crystal.
pub enum Crystal16MHz {}

impl Aducm350Config for Crystal16MHz {
    const NAME: &'static str = "hfxtal-16mhz";
    const HFOSC_FREQ: u32 = 16_000_000;
    const HFXTAL_FREQ: u32 = 16_000_000;
    const LFCLK_FREQ: u32 = 32_768;
    const USBPHY_FREQ: u32 = 60_000_000;
}

/// Board with the 8 MHz crystal.
pub enum Crystal8MHz {}

impl Aducm350Config for Crystal8MHz {
    const NAME: &'static str = "hfxtal-8mhz";
    const HFOSC_FREQ: u32 = 16_000_000;
    const HFXTAL_FREQ: u32 = 8_000_000;
    const LFCLK_FREQ: u32 = 32_768;
    const USBPHY_FREQ: u32 = 60_000_000;
}

#[cfg(all(feature = "config_hfxtal_16mhz", feature = "config_hfxtal_8mhz"))]
compile_error!("only one of `config_hfxtal_16mhz` and `config_hfxtal_8mhz` can be enabled");

#[cfg(any(not(feature = "config_disable_default"), feature = "config_hfxtal_16mhz"))]
pub type Config = Crystal16MHz;

#[cfg(all(feature = "config_hfxtal_8mhz", not(feature = "config_hfxtal_16mhz")))]
pub type Config = Crystal8MHz;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_crystal() {
        #[cfg(not(feature = "config_hfxtal_8mhz"))]
        assert_eq!(Config::NAME, Crystal16MHz::NAME);
        #[cfg(feature = "config_hfxtal_8mhz")]
        assert_eq!(Config::NAME, Crystal8MHz::NAME);
        assert_eq!(Config::HFOSC_FREQ, 16_000_000);
    }
}
