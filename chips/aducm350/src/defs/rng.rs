// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Random number generator.

// Generated register constants for rng.

// RNG registers
/// RNG Control Register
pub const REG_RNG_RNGCTL: u32 = 0x4000_6000;
/// RNG Sample Length Register
pub const REG_RNG_RNGLEN: u32 = 0x4000_6004;
/// RNG Status Register
pub const REG_RNG_RNGSTAT: u32 = 0x4000_6008;
/// RNG Data Register
pub const REG_RNG_RNGDATA: u32 = 0x4000_600C;
/// Oscillator Count Low
pub const REG_RNG_RNGCNTL: u32 = 0x4000_6010;
/// Oscillator Count High
pub const REG_RNG_RNGCNTH: u32 = 0x4000_6014;

// RNG_RNGCTL
pub const BITP_RNG_RNGCTL_RNGEN: u32 = 0;
pub const BITP_RNG_RNGCTL_CNTEN: u32 = 1;
pub const BITP_RNG_RNGCTL_TMRMODE: u32 = 2;
/// RNG enable
pub const BITM_RNG_RNGCTL_RNGEN: u16 = 0x0001;
/// Oscillator counter enable
pub const BITM_RNG_RNGCTL_CNTEN: u16 = 0x0002;
/// Timer mode
pub const BITM_RNG_RNGCTL_TMRMODE: u16 = 0x0004;

// RNG_RNGLEN
pub const BITP_RNG_RNGLEN_LENRLD: u32 = 0;
pub const BITP_RNG_RNGLEN_LENPRE: u32 = 12;
/// Reload value for the sample counter
pub const BITM_RNG_RNGLEN_LENRLD: u16 = 0x0FFF;
/// Prescaler for the sample counter
pub const BITM_RNG_RNGLEN_LENPRE: u16 = 0xF000;

// RNG_RNGSTAT
pub const BITP_RNG_RNGSTAT_RNGRDY: u32 = 0;
/// Random number ready
pub const BITM_RNG_RNGSTAT_RNGRDY: u16 = 0x0001;

// RNG_RNGDATA
pub const BITP_RNG_RNGDATA_VALUE: u32 = 0;
pub const BITP_RNG_RNGDATA_BUFF: u32 = 8;
/// Value of the CRC accumulator
pub const BITM_RNG_RNGDATA_VALUE: u16 = 0x00FF;
/// Buffer for RNGDATA
pub const BITM_RNG_RNGDATA_BUFF: u16 = 0xFF00;

// RNG_RNGCNTL
pub const BITP_RNG_RNGCNTL_VALUE: u32 = 0;
/// Oscillator Count Low
pub const BITM_RNG_RNGCNTL_VALUE: u16 = 0xFFFF;

// RNG_RNGCNTH
pub const BITP_RNG_RNGCNTH_VALUE: u32 = 0;
/// Oscillator Count High
pub const BITM_RNG_RNGCNTH_VALUE: u16 = 0xFFFF;
