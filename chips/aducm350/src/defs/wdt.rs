// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Watchdog timer.

// Generated register constants for wdt.

// WDT registers
/// Load value
pub const REG_WDT_T3LD: u32 = 0x4000_2580;
/// Current count value
pub const REG_WDT_T3VAL: u32 = 0x4000_2584;
/// Control
pub const REG_WDT_T3CON: u32 = 0x4000_2588;
/// Clear interrupt
pub const REG_WDT_T3CLRI: u32 = 0x4000_258C;
/// Status
pub const REG_WDT_T3STA: u32 = 0x4000_2598;

// WDT_T3CON
pub const BITP_WDT_T3CON_PMD: u32 = 0;
pub const BITP_WDT_T3CON_IRQ: u32 = 1;
pub const BITP_WDT_T3CON_PRE: u32 = 2;
pub const BITP_WDT_T3CON_ENABLE: u32 = 5;
pub const BITP_WDT_T3CON_MOD: u32 = 6;
/// Power mode disable
pub const BITM_WDT_T3CON_PMD: u16 = 0x0001;
/// Timer interrupt instead of reset
pub const BITM_WDT_T3CON_IRQ: u16 = 0x0002;
/// Prescaler
pub const BITM_WDT_T3CON_PRE: u16 = 0x000C;
/// Timer enable
pub const BITM_WDT_T3CON_ENABLE: u16 = 0x0020;
/// Timer mode
pub const BITM_WDT_T3CON_MOD: u16 = 0x0040;
/// Source clock divided by 1
pub const ENUM_WDT_T3CON_PRE_DIV1: u16 = 0x0000;
/// Source clock divided by 16
pub const ENUM_WDT_T3CON_PRE_DIV16: u16 = 0x0004;
/// Source clock divided by 256
pub const ENUM_WDT_T3CON_PRE_DIV256: u16 = 0x0008;
/// Source clock divided by 4096
pub const ENUM_WDT_T3CON_PRE_DIV4096: u16 = 0x000C;
/// Free running mode
pub const ENUM_WDT_T3CON_MOD_FREERUN: u16 = 0x0000;
/// Periodic mode
pub const ENUM_WDT_T3CON_MOD_PERIODIC: u16 = 0x0040;

// WDT_T3CLRI
pub const BITP_WDT_T3CLRI_VALUE: u32 = 0;
/// Clear watchdog
pub const BITM_WDT_T3CLRI_VALUE: u16 = 0xFFFF;
/// Key that refreshes the watchdog
pub const ENUM_WDT_T3CLRI_VALUE_CLR: u16 = 0xCCCC;

// WDT_T3STA
pub const BITP_WDT_T3STA_IRQ: u32 = 0;
pub const BITP_WDT_T3STA_CLRI: u32 = 1;
pub const BITP_WDT_T3STA_LD: u32 = 2;
pub const BITP_WDT_T3STA_CON: u32 = 3;
pub const BITP_WDT_T3STA_LOCK: u32 = 4;
/// Interrupt pending
pub const BITM_WDT_T3STA_IRQ: u16 = 0x0001;
/// T3CLRI write sync in progress
pub const BITM_WDT_T3STA_CLRI: u16 = 0x0002;
/// T3LD write sync in progress
pub const BITM_WDT_T3STA_LD: u16 = 0x0004;
/// T3CON write sync in progress
pub const BITM_WDT_T3STA_CON: u16 = 0x0008;
/// Lock status
pub const BITM_WDT_T3STA_LOCK: u16 = 0x0010;

// WDT_T3LD
pub const BITP_WDT_T3LD_VALUE: u32 = 0;
/// Load value
pub const BITM_WDT_T3LD_VALUE: u16 = 0xFFFF;

// WDT_T3VAL
pub const BITP_WDT_T3VAL_VALUE: u32 = 0;
/// Current count value
pub const BITM_WDT_T3VAL_VALUE: u16 = 0xFFFF;
