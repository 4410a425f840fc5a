// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! General purpose timers.

// Generated register constants for gpt.

// GPT0 registers
/// 16-bit load value
pub const REG_GPT0_GPTLD: u32 = 0x4000_0000;
/// 16-bit timer value
pub const REG_GPT0_GPTVAL: u32 = 0x4000_0004;
/// Control
pub const REG_GPT0_GPTCON: u32 = 0x4000_0008;
/// Clear Interrupt
pub const REG_GPT0_GPTCLRI: u32 = 0x4000_000C;
/// Capture
pub const REG_GPT0_GPTCAP: u32 = 0x4000_0010;
/// 16-bit load value, asynchronous
pub const REG_GPT0_GPTALD: u32 = 0x4000_0014;
/// 16-bit timer value, asynchronous
pub const REG_GPT0_GPTAVAL: u32 = 0x4000_0018;
/// Status
pub const REG_GPT0_GPTSTA: u32 = 0x4000_001C;
/// PWM Control Register
pub const REG_GPT0_GPTPCON: u32 = 0x4000_0020;
/// PWM Match Value
pub const REG_GPT0_GPTPMAT: u32 = 0x4000_0024;

// GPT1 registers
/// 16-bit load value
pub const REG_GPT1_GPTLD: u32 = 0x4000_0400;
/// 16-bit timer value
pub const REG_GPT1_GPTVAL: u32 = 0x4000_0404;
/// Control
pub const REG_GPT1_GPTCON: u32 = 0x4000_0408;
/// Clear Interrupt
pub const REG_GPT1_GPTCLRI: u32 = 0x4000_040C;
/// Capture
pub const REG_GPT1_GPTCAP: u32 = 0x4000_0410;
/// 16-bit load value, asynchronous
pub const REG_GPT1_GPTALD: u32 = 0x4000_0414;
/// 16-bit timer value, asynchronous
pub const REG_GPT1_GPTAVAL: u32 = 0x4000_0418;
/// Status
pub const REG_GPT1_GPTSTA: u32 = 0x4000_041C;
/// PWM Control Register
pub const REG_GPT1_GPTPCON: u32 = 0x4000_0420;
/// PWM Match Value
pub const REG_GPT1_GPTPMAT: u32 = 0x4000_0424;

// GPT2 registers
/// 16-bit load value
pub const REG_GPT2_GPTLD: u32 = 0x4000_0800;
/// 16-bit timer value
pub const REG_GPT2_GPTVAL: u32 = 0x4000_0804;
/// Control
pub const REG_GPT2_GPTCON: u32 = 0x4000_0808;
/// Clear Interrupt
pub const REG_GPT2_GPTCLRI: u32 = 0x4000_080C;
/// Capture
pub const REG_GPT2_GPTCAP: u32 = 0x4000_0810;
/// 16-bit load value, asynchronous
pub const REG_GPT2_GPTALD: u32 = 0x4000_0814;
/// 16-bit timer value, asynchronous
pub const REG_GPT2_GPTAVAL: u32 = 0x4000_0818;
/// Status
pub const REG_GPT2_GPTSTA: u32 = 0x4000_081C;
/// PWM Control Register
pub const REG_GPT2_GPTPCON: u32 = 0x4000_0820;
/// PWM Match Value
pub const REG_GPT2_GPTPMAT: u32 = 0x4000_0824;

// GPT_GPTCON
pub const BITP_GPT_GPTCON_PRE: u32 = 0;
pub const BITP_GPT_GPTCON_UP: u32 = 2;
pub const BITP_GPT_GPTCON_MOD: u32 = 3;
pub const BITP_GPT_GPTCON_ENABLE: u32 = 4;
pub const BITP_GPT_GPTCON_CLK: u32 = 5;
pub const BITP_GPT_GPTCON_RLD: u32 = 7;
pub const BITP_GPT_GPTCON_EVENT: u32 = 8;
pub const BITP_GPT_GPTCON_EVENTEN: u32 = 12;
/// Prescaler
pub const BITM_GPT_GPTCON_PRE: u16 = 0x0003;
/// Count up
pub const BITM_GPT_GPTCON_UP: u16 = 0x0004;
/// Timer mode
pub const BITM_GPT_GPTCON_MOD: u16 = 0x0008;
/// Timer enable
pub const BITM_GPT_GPTCON_ENABLE: u16 = 0x0010;
/// Clock select
pub const BITM_GPT_GPTCON_CLK: u16 = 0x0060;
/// Reload control
pub const BITM_GPT_GPTCON_RLD: u16 = 0x0080;
/// Event select
pub const BITM_GPT_GPTCON_EVENT: u16 = 0x0F00;
/// Event select enable
pub const BITM_GPT_GPTCON_EVENTEN: u16 = 0x1000;
/// Source clock divided by 1 (by 4 when the source is UCLK)
pub const ENUM_GPT_GPTCON_PRE_DIV1: u16 = 0x0000;
/// Source clock divided by 16
pub const ENUM_GPT_GPTCON_PRE_DIV16: u16 = 0x0001;
/// Source clock divided by 256
pub const ENUM_GPT_GPTCON_PRE_DIV256: u16 = 0x0002;
/// Source clock divided by 32768
pub const ENUM_GPT_GPTCON_PRE_DIV32768: u16 = 0x0003;
/// Free running mode
pub const ENUM_GPT_GPTCON_MOD_FREERUN: u16 = 0x0000;
/// Periodic mode
pub const ENUM_GPT_GPTCON_MOD_PERIODIC: u16 = 0x0008;
/// System clock (PCLK)
pub const ENUM_GPT_GPTCON_CLK_UCLK: u16 = 0x0000;
/// Internal 16 MHz oscillator
pub const ENUM_GPT_GPTCON_CLK_HFOSC: u16 = 0x0020;
/// Internal 32 kHz oscillator
pub const ENUM_GPT_GPTCON_CLK_LFOSC: u16 = 0x0040;
/// External 32 kHz crystal
pub const ENUM_GPT_GPTCON_CLK_LFXTAL: u16 = 0x0060;

// GPT_GPTCLRI
pub const BITP_GPT_GPTCLRI_TMOUT: u32 = 0;
pub const BITP_GPT_GPTCLRI_CAP: u32 = 1;
/// Clear timeout interrupt
pub const BITM_GPT_GPTCLRI_TMOUT: u16 = 0x0001;
/// Clear captured event interrupt
pub const BITM_GPT_GPTCLRI_CAP: u16 = 0x0002;

// GPT_GPTSTA
pub const BITP_GPT_GPTSTA_TMOUT: u32 = 0;
pub const BITP_GPT_GPTSTA_CAP: u32 = 1;
pub const BITP_GPT_GPTSTA_BUSY: u32 = 6;
pub const BITP_GPT_GPTSTA_PDOK: u32 = 7;
/// Timeout event occurred
pub const BITM_GPT_GPTSTA_TMOUT: u16 = 0x0001;
/// Capture event pending
pub const BITM_GPT_GPTSTA_CAP: u16 = 0x0002;
/// Timer busy
pub const BITM_GPT_GPTSTA_BUSY: u16 = 0x0040;
/// GPTCLRI synchronization done
pub const BITM_GPT_GPTSTA_PDOK: u16 = 0x0080;

// GPT_GPTPCON
pub const BITP_GPT_GPTPCON_MATCH_EN: u32 = 0;
pub const BITP_GPT_GPTPCON_IDLE_STATE: u32 = 1;
/// PWM match enable
pub const BITM_GPT_GPTPCON_MATCH_EN: u16 = 0x0001;
/// PWM idle state
pub const BITM_GPT_GPTPCON_IDLE_STATE: u16 = 0x0002;

// GPT_GPTLD
pub const BITP_GPT_GPTLD_VALUE: u32 = 0;
/// 16-bit load value
pub const BITM_GPT_GPTLD_VALUE: u16 = 0xFFFF;

// GPT_GPTVAL
pub const BITP_GPT_GPTVAL_VALUE: u32 = 0;
/// 16-bit timer value
pub const BITM_GPT_GPTVAL_VALUE: u16 = 0xFFFF;

// GPT_GPTCAP
pub const BITP_GPT_GPTCAP_VALUE: u32 = 0;
/// Capture
pub const BITM_GPT_GPTCAP_VALUE: u16 = 0xFFFF;

// GPT_GPTALD
pub const BITP_GPT_GPTALD_VALUE: u32 = 0;
/// 16-bit load value, asynchronous
pub const BITM_GPT_GPTALD_VALUE: u16 = 0xFFFF;

// GPT_GPTAVAL
pub const BITP_GPT_GPTAVAL_VALUE: u32 = 0;
/// 16-bit timer value, asynchronous
pub const BITM_GPT_GPTAVAL_VALUE: u16 = 0xFFFF;

// GPT_GPTPMAT
pub const BITP_GPT_GPTPMAT_VALUE: u32 = 0;
/// PWM Match Value
pub const BITM_GPT_GPTPMAT_VALUE: u16 = 0xFFFF;
