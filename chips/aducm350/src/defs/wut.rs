// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Wakeup timer.

// Generated register constants for wut.

// WUT registers
/// Current count value - LS halfword.
pub const REG_WUT_T2VAL0: u32 = 0x4000_2500;
/// Current count value - MS halfword
pub const REG_WUT_T2VAL1: u32 = 0x4000_2504;
/// Control
pub const REG_WUT_T2CON: u32 = 0x4000_2508;
/// 12-bit interval for wakeup field A
pub const REG_WUT_T2INC: u32 = 0x4000_250C;
/// Wakeup field B - LS halfword
pub const REG_WUT_T2WUFB0: u32 = 0x4000_2510;
/// Wakeup field B - MS halfword
pub const REG_WUT_T2WUFB1: u32 = 0x4000_2514;
/// Wakeup field C - LS halfword
pub const REG_WUT_T2WUFC0: u32 = 0x4000_2518;
/// Wakeup field C - MS halfword
pub const REG_WUT_T2WUFC1: u32 = 0x4000_251C;
/// Wakeup field D - LS halfword
pub const REG_WUT_T2WUFD0: u32 = 0x4000_2520;
/// Wakeup field D - MS halfword
pub const REG_WUT_T2WUFD1: u32 = 0x4000_2524;
/// Interrupt enable
pub const REG_WUT_T2IEN: u32 = 0x4000_2528;
/// Status
pub const REG_WUT_T2STA: u32 = 0x4000_252C;
/// Clear interrupts
pub const REG_WUT_T2CLRI: u32 = 0x4000_2530;
/// Unsynchronized lower 16 bits of WU Timer counter value.
pub const REG_WUT_WUTVAL_LOW: u32 = 0x4000_2534;
/// Unsynchronized upper 16 bits of WU Timer counter value.
pub const REG_WUT_WUTVAL_HIGH: u32 = 0x4000_2538;
/// Wakeup field A - LS halfword
pub const REG_WUT_T2WUFA0: u32 = 0x4000_253C;
/// Wakeup field A - MS halfword
pub const REG_WUT_T2WUFA1: u32 = 0x4000_2540;

// WUT_T2CON
pub const BITP_WUT_T2CON_PRE: u32 = 0;
pub const BITP_WUT_T2CON_FREEZE: u32 = 3;
pub const BITP_WUT_T2CON_MOD: u32 = 6;
pub const BITP_WUT_T2CON_ENABLE: u32 = 7;
pub const BITP_WUT_T2CON_WUEN: u32 = 8;
pub const BITP_WUT_T2CON_CLK: u32 = 9;
pub const BITP_WUT_T2CON_STOP_WUFA: u32 = 11;
/// Prescaler
pub const BITM_WUT_T2CON_PRE: u16 = 0x0003;
/// Freeze the T2VAL1 register on a T2VAL0 read
pub const BITM_WUT_T2CON_FREEZE: u16 = 0x0008;
/// Timer mode
pub const BITM_WUT_T2CON_MOD: u16 = 0x0040;
/// Timer enable
pub const BITM_WUT_T2CON_ENABLE: u16 = 0x0080;
/// Wakeup enable
pub const BITM_WUT_T2CON_WUEN: u16 = 0x0100;
/// Clock select
pub const BITM_WUT_T2CON_CLK: u16 = 0x0600;
/// Disable updates of field A
pub const BITM_WUT_T2CON_STOP_WUFA: u16 = 0x0800;
/// Source clock divided by 1
pub const ENUM_WUT_T2CON_PRE_DIV1: u16 = 0x0000;
/// Source clock divided by 16
pub const ENUM_WUT_T2CON_PRE_DIV16: u16 = 0x0001;
/// Source clock divided by 256
pub const ENUM_WUT_T2CON_PRE_DIV256: u16 = 0x0002;
/// Source clock divided by 32768
pub const ENUM_WUT_T2CON_PRE_DIV32768: u16 = 0x0003;
/// Periodic mode
pub const ENUM_WUT_T2CON_MOD_PERIODIC: u16 = 0x0000;
/// Free running mode
pub const ENUM_WUT_T2CON_MOD_FREERUN: u16 = 0x0040;
/// Peripheral clock
pub const ENUM_WUT_T2CON_CLK_PCLK: u16 = 0x0000;
/// External 32 kHz crystal
pub const ENUM_WUT_T2CON_CLK_LFXTAL: u16 = 0x0200;
/// Internal 32 kHz oscillator
pub const ENUM_WUT_T2CON_CLK_LFOSC: u16 = 0x0400;
/// External clock input
pub const ENUM_WUT_T2CON_CLK_EXTCLK: u16 = 0x0600;

// WUT_T2INC
pub const BITP_WUT_T2INC_VALUE: u32 = 0;
/// Interval for wakeup field A
pub const BITM_WUT_T2INC_VALUE: u16 = 0x0FFF;

// WUT_T2IEN
pub const BITP_WUT_T2IEN_WUFA: u32 = 0;
pub const BITP_WUT_T2IEN_WUFB: u32 = 1;
pub const BITP_WUT_T2IEN_WUFC: u32 = 2;
pub const BITP_WUT_T2IEN_WUFD: u32 = 3;
pub const BITP_WUT_T2IEN_ROLL: u32 = 4;
/// Field A interrupt enable
pub const BITM_WUT_T2IEN_WUFA: u16 = 0x0001;
/// Field B interrupt enable
pub const BITM_WUT_T2IEN_WUFB: u16 = 0x0002;
/// Field C interrupt enable
pub const BITM_WUT_T2IEN_WUFC: u16 = 0x0004;
/// Field D interrupt enable
pub const BITM_WUT_T2IEN_WUFD: u16 = 0x0008;
/// Rollover interrupt enable
pub const BITM_WUT_T2IEN_ROLL: u16 = 0x0010;

// WUT_T2STA
pub const BITP_WUT_T2STA_WUFA: u32 = 0;
pub const BITP_WUT_T2STA_WUFB: u32 = 1;
pub const BITP_WUT_T2STA_WUFC: u32 = 2;
pub const BITP_WUT_T2STA_WUFD: u32 = 3;
pub const BITP_WUT_T2STA_ROLL: u32 = 4;
pub const BITP_WUT_T2STA_IRQCRY: u32 = 6;
pub const BITP_WUT_T2STA_FREEZE: u32 = 7;
pub const BITP_WUT_T2STA_PDOK: u32 = 8;
/// Field A interrupt pending
pub const BITM_WUT_T2STA_WUFA: u16 = 0x0001;
/// Field B interrupt pending
pub const BITM_WUT_T2STA_WUFB: u16 = 0x0002;
/// Field C interrupt pending
pub const BITM_WUT_T2STA_WUFC: u16 = 0x0004;
/// Field D interrupt pending
pub const BITM_WUT_T2STA_WUFD: u16 = 0x0008;
/// Rollover interrupt pending
pub const BITM_WUT_T2STA_ROLL: u16 = 0x0010;
/// Wakeup status to powerdown
pub const BITM_WUT_T2STA_IRQCRY: u16 = 0x0040;
/// Timer value freeze
pub const BITM_WUT_T2STA_FREEZE: u16 = 0x0080;
/// Enable bit synchronized
pub const BITM_WUT_T2STA_PDOK: u16 = 0x0100;

// WUT_T2CLRI
pub const BITP_WUT_T2CLRI_WUFA: u32 = 0;
pub const BITP_WUT_T2CLRI_WUFB: u32 = 1;
pub const BITP_WUT_T2CLRI_WUFC: u32 = 2;
pub const BITP_WUT_T2CLRI_WUFD: u32 = 3;
pub const BITP_WUT_T2CLRI_ROLL: u32 = 4;
/// Clear field A interrupt
pub const BITM_WUT_T2CLRI_WUFA: u16 = 0x0001;
/// Clear field B interrupt
pub const BITM_WUT_T2CLRI_WUFB: u16 = 0x0002;
/// Clear field C interrupt
pub const BITM_WUT_T2CLRI_WUFC: u16 = 0x0004;
/// Clear field D interrupt
pub const BITM_WUT_T2CLRI_WUFD: u16 = 0x0008;
/// Clear rollover interrupt
pub const BITM_WUT_T2CLRI_ROLL: u16 = 0x0010;

// WUT_T2VAL0
pub const BITP_WUT_T2VAL0_VALUE: u32 = 0;
/// Current count value - LS halfword.
pub const BITM_WUT_T2VAL0_VALUE: u16 = 0xFFFF;

// WUT_T2VAL1
pub const BITP_WUT_T2VAL1_VALUE: u32 = 0;
/// Current count value - MS halfword
pub const BITM_WUT_T2VAL1_VALUE: u16 = 0xFFFF;

// WUT_T2WUFB0
pub const BITP_WUT_T2WUFB0_VALUE: u32 = 0;
/// Wakeup field B - LS halfword
pub const BITM_WUT_T2WUFB0_VALUE: u16 = 0xFFFF;

// WUT_T2WUFB1
pub const BITP_WUT_T2WUFB1_VALUE: u32 = 0;
/// Wakeup field B - MS halfword
pub const BITM_WUT_T2WUFB1_VALUE: u16 = 0xFFFF;

// WUT_T2WUFC0
pub const BITP_WUT_T2WUFC0_VALUE: u32 = 0;
/// Wakeup field C - LS halfword
pub const BITM_WUT_T2WUFC0_VALUE: u16 = 0xFFFF;

// WUT_T2WUFC1
pub const BITP_WUT_T2WUFC1_VALUE: u32 = 0;
/// Wakeup field C - MS halfword
pub const BITM_WUT_T2WUFC1_VALUE: u16 = 0xFFFF;

// WUT_T2WUFD0
pub const BITP_WUT_T2WUFD0_VALUE: u32 = 0;
/// Wakeup field D - LS halfword
pub const BITM_WUT_T2WUFD0_VALUE: u16 = 0xFFFF;

// WUT_T2WUFD1
pub const BITP_WUT_T2WUFD1_VALUE: u32 = 0;
/// Wakeup field D - MS halfword
pub const BITM_WUT_T2WUFD1_VALUE: u16 = 0xFFFF;

// WUT_WUTVAL_LOW
pub const BITP_WUT_WUTVAL_LOW_VALUE: u32 = 0;
/// Unsynchronized lower 16 bits of WU Timer counter value.
pub const BITM_WUT_WUTVAL_LOW_VALUE: u16 = 0xFFFF;

// WUT_WUTVAL_HIGH
pub const BITP_WUT_WUTVAL_HIGH_VALUE: u32 = 0;
/// Unsynchronized upper 16 bits of WU Timer counter value.
pub const BITM_WUT_WUTVAL_HIGH_VALUE: u16 = 0xFFFF;

// WUT_T2WUFA0
pub const BITP_WUT_T2WUFA0_VALUE: u32 = 0;
/// Wakeup field A - LS halfword
pub const BITM_WUT_T2WUFA0_VALUE: u16 = 0xFFFF;

// WUT_T2WUFA1
pub const BITP_WUT_T2WUFA1_VALUE: u32 = 0;
/// Wakeup field A - MS halfword
pub const BITM_WUT_T2WUFA1_VALUE: u16 = 0xFFFF;
