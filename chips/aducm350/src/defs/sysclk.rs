// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Clock gating and dividers.

// Generated register constants for sysclk.

// SYSCLK registers
/// Misc clock settings
pub const REG_SYSCLK_CLKCON0: u32 = 0x4002_8000;
/// Clock dividers
pub const REG_SYSCLK_CLKCON1: u32 = 0x4002_8004;
/// System PLL
pub const REG_SYSCLK_CLKCON3: u32 = 0x4002_800C;
/// USB PLL
pub const REG_SYSCLK_CLKCON4: u32 = 0x4002_8010;
/// User clock gating control
pub const REG_SYSCLK_CLKCON5: u32 = 0x4002_8014;
/// Clocking status
pub const REG_SYSCLK_CLKSTAT0: u32 = 0x4002_8018;

// SYSCLK_CLKCON0
pub const BITP_SYSCLK_CLKCON0_CLKMUX: u32 = 0;
pub const BITP_SYSCLK_CLKCON0_CLKCOUT: u32 = 2;
pub const BITP_SYSCLK_CLKCON0_PLLMUX: u32 = 5;
pub const BITP_SYSCLK_CLKCON0_LFCLKMUX: u32 = 6;
/// Clock mux select
pub const BITM_SYSCLK_CLKCON0_CLKMUX: u16 = 0x0003;
/// GPIO clock out select
pub const BITM_SYSCLK_CLKCON0_CLKCOUT: u16 = 0x001C;
/// PLL source select
pub const BITM_SYSCLK_CLKCON0_PLLMUX: u16 = 0x0020;
/// 32 kHz clock select
pub const BITM_SYSCLK_CLKCON0_LFCLKMUX: u16 = 0x0040;
/// Internal high frequency oscillator
pub const ENUM_SYSCLK_CLKCON0_CLKMUX_HFOSC: u16 = 0x0000;
/// External high frequency crystal
pub const ENUM_SYSCLK_CLKCON0_CLKMUX_HFXTAL: u16 = 0x0001;
/// System PLL
pub const ENUM_SYSCLK_CLKCON0_CLKMUX_SPLL: u16 = 0x0002;
/// External GPIO clock input
pub const ENUM_SYSCLK_CLKCON0_CLKMUX_GPIO: u16 = 0x0003;

// SYSCLK_CLKCON1
pub const BITP_SYSCLK_CLKCON1_HCLKDIVCNT: u32 = 0;
pub const BITP_SYSCLK_CLKCON1_PCLKDIVCNT: u32 = 8;
pub const BITP_SYSCLK_CLKCON1_USBCTLCLKDIVMUX: u32 = 14;
/// HCLK divide count
pub const BITM_SYSCLK_CLKCON1_HCLKDIVCNT: u16 = 0x003F;
/// PCLK divide count
pub const BITM_SYSCLK_CLKCON1_PCLKDIVCNT: u16 = 0x3F00;
/// USB control clock divider select
pub const BITM_SYSCLK_CLKCON1_USBCTLCLKDIVMUX: u16 = 0x4000;

// SYSCLK_CLKCON3
pub const BITP_SYSCLK_CLKCON3_SPLLNSEL: u32 = 0;
pub const BITP_SYSCLK_CLKCON3_SPLLMSEL: u32 = 6;
pub const BITP_SYSCLK_CLKCON3_SPLLDIV2: u32 = 8;
pub const BITP_SYSCLK_CLKCON3_SPLLEN: u32 = 9;
/// System PLL N multiplier
pub const BITM_SYSCLK_CLKCON3_SPLLNSEL: u16 = 0x003F;
/// System PLL M divider
pub const BITM_SYSCLK_CLKCON3_SPLLMSEL: u16 = 0x00C0;
/// System PLL division by 2
pub const BITM_SYSCLK_CLKCON3_SPLLDIV2: u16 = 0x0100;
/// System PLL enable
pub const BITM_SYSCLK_CLKCON3_SPLLEN: u16 = 0x0200;
/// Divide by 1
pub const ENUM_SYSCLK_CLKCON3_SPLLMSEL_DIV1: u16 = 0x0000;
/// Divide by 2
pub const ENUM_SYSCLK_CLKCON3_SPLLMSEL_DIV2: u16 = 0x0040;
/// Divide by 4
pub const ENUM_SYSCLK_CLKCON3_SPLLMSEL_DIV4: u16 = 0x0080;

// SYSCLK_CLKCON4
pub const BITP_SYSCLK_CLKCON4_UPLLNSEL: u32 = 0;
pub const BITP_SYSCLK_CLKCON4_UPLLMSEL: u32 = 6;
pub const BITP_SYSCLK_CLKCON4_UPLLDIV2: u32 = 8;
pub const BITP_SYSCLK_CLKCON4_UPLLEN: u32 = 9;
/// USB PLL N multiplier
pub const BITM_SYSCLK_CLKCON4_UPLLNSEL: u16 = 0x003F;
/// USB PLL M divider
pub const BITM_SYSCLK_CLKCON4_UPLLMSEL: u16 = 0x00C0;
/// USB PLL division by 2
pub const BITM_SYSCLK_CLKCON4_UPLLDIV2: u16 = 0x0100;
/// USB PLL enable
pub const BITM_SYSCLK_CLKCON4_UPLLEN: u16 = 0x0200;
/// Divide by 1
pub const ENUM_SYSCLK_CLKCON4_UPLLMSEL_DIV1: u16 = 0x0000;
/// Divide by 2
pub const ENUM_SYSCLK_CLKCON4_UPLLMSEL_DIV2: u16 = 0x0040;
/// Divide by 4
pub const ENUM_SYSCLK_CLKCON4_UPLLMSEL_DIV4: u16 = 0x0080;

// SYSCLK_CLKCON5
pub const BITP_SYSCLK_CLKCON5_UCLKSPI0OFF: u32 = 0;
pub const BITP_SYSCLK_CLKCON5_UCLKSPI1OFF: u32 = 1;
pub const BITP_SYSCLK_CLKCON5_UCLKSPIHOFF: u32 = 2;
pub const BITP_SYSCLK_CLKCON5_UCLKI2COFF: u32 = 3;
pub const BITP_SYSCLK_CLKCON5_UCLKUARTOFF: u32 = 4;
pub const BITP_SYSCLK_CLKCON5_UCLKI2SOFF: u32 = 5;
pub const BITP_SYSCLK_CLKCON5_ACLKOFF: u32 = 7;
pub const BITP_SYSCLK_CLKCON5_CTCLKOFF: u32 = 8;
/// SPI0 clock user control
pub const BITM_SYSCLK_CLKCON5_UCLKSPI0OFF: u16 = 0x0001;
/// SPI1 clock user control
pub const BITM_SYSCLK_CLKCON5_UCLKSPI1OFF: u16 = 0x0002;
/// SPIH clock user control
pub const BITM_SYSCLK_CLKCON5_UCLKSPIHOFF: u16 = 0x0004;
/// I2C clock user control
pub const BITM_SYSCLK_CLKCON5_UCLKI2COFF: u16 = 0x0008;
/// UART clock user control
pub const BITM_SYSCLK_CLKCON5_UCLKUARTOFF: u16 = 0x0010;
/// I2S clock user control
pub const BITM_SYSCLK_CLKCON5_UCLKI2SOFF: u16 = 0x0020;
/// Analog front end clock user control
pub const BITM_SYSCLK_CLKCON5_ACLKOFF: u16 = 0x0080;
/// CapTouch clock user control
pub const BITM_SYSCLK_CLKCON5_CTCLKOFF: u16 = 0x0100;

// SYSCLK_CLKSTAT0
pub const BITP_SYSCLK_CLKSTAT0_SPLLSTATUS: u32 = 0;
pub const BITP_SYSCLK_CLKSTAT0_UPLLSTATUS: u32 = 4;
/// System PLL status
pub const BITM_SYSCLK_CLKSTAT0_SPLLSTATUS: u16 = 0x0001;
/// USB PLL status
pub const BITM_SYSCLK_CLKSTAT0_UPLLSTATUS: u16 = 0x0010;
