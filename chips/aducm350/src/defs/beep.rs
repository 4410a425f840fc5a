// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Beeper driver.

// Generated register constants for beep.

// BEEP registers
/// Beeper configuration
pub const REG_BEEP_BEEP_CFG: u32 = 0x4000_5C00;
/// Beeper status
pub const REG_BEEP_BEEP_STAT: u32 = 0x4000_5C04;
/// Tone A Data
pub const REG_BEEP_BEEP_TONE_A: u32 = 0x4000_5C08;
/// Tone B Data
pub const REG_BEEP_BEEP_TONE_B: u32 = 0x4000_5C0C;

// BEEP_BEEP_CFG
pub const BITP_BEEP_BEEP_CFG_SEQ_REPEAT: u32 = 0;
pub const BITP_BEEP_BEEP_CFG_BEEP_EN: u32 = 8;
pub const BITP_BEEP_BEEP_CFG_IRQ_TONEA_START: u32 = 10;
pub const BITP_BEEP_BEEP_CFG_IRQ_TONEA_END: u32 = 11;
pub const BITP_BEEP_BEEP_CFG_IRQ_TONEB_START: u32 = 12;
pub const BITP_BEEP_BEEP_CFG_IRQ_TONEB_END: u32 = 13;
pub const BITP_BEEP_BEEP_CFG_IRQ_SEQ_NEAR_END: u32 = 14;
pub const BITP_BEEP_BEEP_CFG_IRQ_SEQ_END: u32 = 15;
/// Beeper sequence repeat value
pub const BITM_BEEP_BEEP_CFG_SEQ_REPEAT: u16 = 0x00FF;
/// Beeper enable
pub const BITM_BEEP_BEEP_CFG_BEEP_EN: u16 = 0x0100;
/// Tone A start interrupt enable
pub const BITM_BEEP_BEEP_CFG_IRQ_TONEA_START: u16 = 0x0400;
/// Tone A end interrupt enable
pub const BITM_BEEP_BEEP_CFG_IRQ_TONEA_END: u16 = 0x0800;
/// Tone B start interrupt enable
pub const BITM_BEEP_BEEP_CFG_IRQ_TONEB_START: u16 = 0x1000;
/// Tone B end interrupt enable
pub const BITM_BEEP_BEEP_CFG_IRQ_TONEB_END: u16 = 0x2000;
/// Sequence one cycle from end interrupt enable
pub const BITM_BEEP_BEEP_CFG_IRQ_SEQ_NEAR_END: u16 = 0x4000;
/// Sequence end interrupt enable
pub const BITM_BEEP_BEEP_CFG_IRQ_SEQ_END: u16 = 0x8000;

// BEEP_BEEP_STAT
pub const BITP_BEEP_BEEP_STAT_SEQ_REMAIN: u32 = 0;
pub const BITP_BEEP_BEEP_STAT_BEEP_BUSY: u32 = 8;
pub const BITP_BEEP_BEEP_STAT_EVT_TONEA_START: u32 = 10;
pub const BITP_BEEP_BEEP_STAT_EVT_TONEA_END: u32 = 11;
pub const BITP_BEEP_BEEP_STAT_EVT_TONEB_START: u32 = 12;
pub const BITP_BEEP_BEEP_STAT_EVT_TONEB_END: u32 = 13;
pub const BITP_BEEP_BEEP_STAT_EVT_SEQ_NEAR_END: u32 = 14;
pub const BITP_BEEP_BEEP_STAT_EVT_SEQ_END: u32 = 15;
/// Remaining tone-pair iterations to play in sequence mode
pub const BITM_BEEP_BEEP_STAT_SEQ_REMAIN: u16 = 0x00FF;
/// Beeper is busy
pub const BITM_BEEP_BEEP_STAT_BEEP_BUSY: u16 = 0x0100;
/// Tone A has started
pub const BITM_BEEP_BEEP_STAT_EVT_TONEA_START: u16 = 0x0400;
/// Tone A has ended
pub const BITM_BEEP_BEEP_STAT_EVT_TONEA_END: u16 = 0x0800;
/// Tone B has started
pub const BITM_BEEP_BEEP_STAT_EVT_TONEB_START: u16 = 0x1000;
/// Tone B has ended
pub const BITM_BEEP_BEEP_STAT_EVT_TONEB_END: u16 = 0x2000;
/// Sequencer is near the end
pub const BITM_BEEP_BEEP_STAT_EVT_SEQ_NEAR_END: u16 = 0x4000;
/// Sequencer has ended
pub const BITM_BEEP_BEEP_STAT_EVT_SEQ_END: u16 = 0x8000;

// BEEP_BEEP_TONE_A
pub const BITP_BEEP_BEEP_TONE_A_DUR: u32 = 0;
pub const BITP_BEEP_BEEP_TONE_A_FREQ: u32 = 8;
pub const BITP_BEEP_BEEP_TONE_A_DISABLE: u32 = 15;
/// Tone duration
pub const BITM_BEEP_BEEP_TONE_A_DUR: u16 = 0x00FF;
/// Tone frequency
pub const BITM_BEEP_BEEP_TONE_A_FREQ: u16 = 0x7F00;
/// Output disable
pub const BITM_BEEP_BEEP_TONE_A_DISABLE: u16 = 0x8000;

// BEEP_BEEP_TONE_B
pub const BITP_BEEP_BEEP_TONE_B_DUR: u32 = 0;
pub const BITP_BEEP_BEEP_TONE_B_FREQ: u32 = 8;
pub const BITP_BEEP_BEEP_TONE_B_DISABLE: u32 = 15;
/// Tone duration
pub const BITM_BEEP_BEEP_TONE_B_DUR: u16 = 0x00FF;
/// Tone frequency
pub const BITM_BEEP_BEEP_TONE_B_FREQ: u16 = 0x7F00;
/// Output disable
pub const BITM_BEEP_BEEP_TONE_B_DISABLE: u16 = 0x8000;
