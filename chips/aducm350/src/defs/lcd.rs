// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! LCD controller.

// Generated register constants for lcd.

// LCD registers
/// LCD Configuration Register
pub const REG_LCD_LCDCON: u32 = 0x4000_8000;
/// LCD Status Register
pub const REG_LCD_LCDSTAT: u32 = 0x4000_8004;
/// LCD Blink Control Register
pub const REG_LCD_LCDBLINK: u32 = 0x4000_8008;
/// LCD Contrast Control Register
pub const REG_LCD_LCDCONTRAST: u32 = 0x4000_800C;
/// Screen 0 LCD Data Register n
pub const REG_LCD_LCDDATA0_S0: u32 = 0x4000_8010;
/// Screen 0 LCD Data Register n
pub const REG_LCD_LCDDATA1_S0: u32 = 0x4000_8014;
/// Screen 0 LCD Data Register n
pub const REG_LCD_LCDDATA2_S0: u32 = 0x4000_8018;
/// Screen 0 LCD Data Register n
pub const REG_LCD_LCDDATA3_S0: u32 = 0x4000_801C;
/// Screen 0 LCD Data Register n
pub const REG_LCD_LCDDATA4_S0: u32 = 0x4000_8020;
/// Screen 0 LCD Data Register n
pub const REG_LCD_LCDDATA5_S0: u32 = 0x4000_8024;
/// Screen 0 LCD Data Register n
pub const REG_LCD_LCDDATA6_S0: u32 = 0x4000_8028;
/// Screen 0 LCD Data Register n
pub const REG_LCD_LCDDATA7_S0: u32 = 0x4000_802C;
/// Screen 1 LCD Data Register n
pub const REG_LCD_LCDDATA0_S1: u32 = 0x4000_8030;
/// Screen 1 LCD Data Register n
pub const REG_LCD_LCDDATA1_S1: u32 = 0x4000_8034;
/// Screen 1 LCD Data Register n
pub const REG_LCD_LCDDATA2_S1: u32 = 0x4000_8038;
/// Screen 1 LCD Data Register n
pub const REG_LCD_LCDDATA3_S1: u32 = 0x4000_803C;
/// Screen 1 LCD Data Register n
pub const REG_LCD_LCDDATA4_S1: u32 = 0x4000_8040;
/// Screen 1 LCD Data Register n
pub const REG_LCD_LCDDATA5_S1: u32 = 0x4000_8044;
/// Screen 1 LCD Data Register n
pub const REG_LCD_LCDDATA6_S1: u32 = 0x4000_8048;
/// Screen 1 LCD Data Register n
pub const REG_LCD_LCDDATA7_S1: u32 = 0x4000_804C;

// LCD_LCDCON
pub const BITP_LCD_LCDCON_LCDEN: u32 = 0;
pub const BITP_LCD_LCDCON_LCDMUX: u32 = 1;
pub const BITP_LCD_LCDCON_SCREENSEL: u32 = 2;
pub const BITP_LCD_LCDCON_FRAMEINV: u32 = 3;
pub const BITP_LCD_LCDCON_FRAMESEL: u32 = 4;
pub const BITP_LCD_LCDCON_LCDRST: u32 = 8;
pub const BITP_LCD_LCDCON_FRAMEINT_EN: u32 = 9;
pub const BITP_LCD_LCDCON_CPINT_EN: u32 = 10;
pub const BITP_LCD_LCDCON_BLINKEN: u32 = 11;
/// LCD enable
pub const BITM_LCD_LCDCON_LCDEN: u16 = 0x0001;
/// Multiplex selection
pub const BITM_LCD_LCDCON_LCDMUX: u16 = 0x0002;
/// Screen select
pub const BITM_LCD_LCDCON_SCREENSEL: u16 = 0x0004;
/// Frame inversion mode enable
pub const BITM_LCD_LCDCON_FRAMEINV: u16 = 0x0008;
/// LCD frame rate selection
pub const BITM_LCD_LCDCON_FRAMESEL: u16 = 0x00F0;
/// LCD data registers reset
pub const BITM_LCD_LCDCON_LCDRST: u16 = 0x0100;
/// Frame boundary interrupt enable
pub const BITM_LCD_LCDCON_FRAMEINT_EN: u16 = 0x0200;
/// Charge pump bad interrupt enable
pub const BITM_LCD_LCDCON_CPINT_EN: u16 = 0x0400;
/// Blink enable
pub const BITM_LCD_LCDCON_BLINKEN: u16 = 0x0800;
/// 128 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_128HZ: u16 = 0x0000;
/// 102.4 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_102_4HZ: u16 = 0x0010;
/// 85.3 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_85_3HZ: u16 = 0x0020;
/// 73.1 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_73_1HZ: u16 = 0x0030;
/// 64 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_64HZ: u16 = 0x0040;
/// 56.9 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_56_9HZ: u16 = 0x0050;
/// 51.2 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_51_2HZ: u16 = 0x0060;
/// 46.5 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_46_5HZ: u16 = 0x0070;
/// 42.7 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_42_7HZ: u16 = 0x0080;
/// 39.4 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_39_4HZ: u16 = 0x0090;
/// 36.6 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_36_6HZ: u16 = 0x00A0;
/// 34.1 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_34_1HZ: u16 = 0x00B0;
/// 32 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_32HZ: u16 = 0x00C0;
/// 30.1 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_30_1HZ: u16 = 0x00D0;
/// 28.4 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_28_4HZ: u16 = 0x00E0;
/// 26.9 Hz
pub const ENUM_LCD_LCDCON_FRAMESEL_26_9HZ: u16 = 0x00F0;

// LCD_LCDSTAT
pub const BITP_LCD_LCDSTAT_FRAMEINT: u32 = 0;
pub const BITP_LCD_LCDSTAT_CP_GD: u32 = 1;
pub const BITP_LCD_LCDSTAT_LCD_IDLE: u32 = 2;
pub const BITP_LCD_LCDSTAT_VLCD_OK: u32 = 3;
pub const BITP_LCD_LCDSTAT_SAFE_TO_WR: u32 = 4;
/// Frame boundary interrupt
pub const BITM_LCD_LCDSTAT_FRAMEINT: u16 = 0x0001;
/// Charge pump good
pub const BITM_LCD_LCDSTAT_CP_GD: u16 = 0x0002;
/// LCD idle
pub const BITM_LCD_LCDSTAT_LCD_IDLE: u16 = 0x0004;
/// VLCD voltage is at the programmed level
pub const BITM_LCD_LCDSTAT_VLCD_OK: u16 = 0x0008;
/// Safe to write the LCD data registers
pub const BITM_LCD_LCDSTAT_SAFE_TO_WR: u16 = 0x0010;

// LCD_LCDBLINK
pub const BITP_LCD_LCDBLINK_BLKMOD: u32 = 0;
pub const BITP_LCD_LCDBLINK_BLKFREQ: u32 = 2;
pub const BITP_LCD_LCDBLINK_AUTOSWITCH: u32 = 5;
/// Blink mode clock source
pub const BITM_LCD_LCDBLINK_BLKMOD: u16 = 0x0003;
/// Blink rate configuration
pub const BITM_LCD_LCDBLINK_BLKFREQ: u16 = 0x001C;
/// Automatic screen switching
pub const BITM_LCD_LCDBLINK_AUTOSWITCH: u16 = 0x0020;

// LCD_LCDCONTRAST
pub const BITP_LCD_LCDCONTRAST_BIASLVL: u32 = 0;
pub const BITP_LCD_LCDCONTRAST_CP_EN: u32 = 5;
pub const BITP_LCD_LCDCONTRAST_CP_PD: u32 = 6;
/// Bias level selection
pub const BITM_LCD_LCDCONTRAST_BIASLVL: u16 = 0x001F;
/// Charge pump enable
pub const BITM_LCD_LCDCONTRAST_CP_EN: u16 = 0x0020;
/// Charge pump power down
pub const BITM_LCD_LCDCONTRAST_CP_PD: u16 = 0x0040;

// LCD_LCDDATA0_S0
pub const BITP_LCD_LCDDATA0_S0_VALUE: u32 = 0;
/// Screen 0 LCD Data Register n
pub const BITM_LCD_LCDDATA0_S0_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA1_S0
pub const BITP_LCD_LCDDATA1_S0_VALUE: u32 = 0;
/// Screen 0 LCD Data Register n
pub const BITM_LCD_LCDDATA1_S0_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA2_S0
pub const BITP_LCD_LCDDATA2_S0_VALUE: u32 = 0;
/// Screen 0 LCD Data Register n
pub const BITM_LCD_LCDDATA2_S0_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA3_S0
pub const BITP_LCD_LCDDATA3_S0_VALUE: u32 = 0;
/// Screen 0 LCD Data Register n
pub const BITM_LCD_LCDDATA3_S0_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA4_S0
pub const BITP_LCD_LCDDATA4_S0_VALUE: u32 = 0;
/// Screen 0 LCD Data Register n
pub const BITM_LCD_LCDDATA4_S0_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA5_S0
pub const BITP_LCD_LCDDATA5_S0_VALUE: u32 = 0;
/// Screen 0 LCD Data Register n
pub const BITM_LCD_LCDDATA5_S0_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA6_S0
pub const BITP_LCD_LCDDATA6_S0_VALUE: u32 = 0;
/// Screen 0 LCD Data Register n
pub const BITM_LCD_LCDDATA6_S0_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA7_S0
pub const BITP_LCD_LCDDATA7_S0_VALUE: u32 = 0;
/// Screen 0 LCD Data Register n
pub const BITM_LCD_LCDDATA7_S0_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA0_S1
pub const BITP_LCD_LCDDATA0_S1_VALUE: u32 = 0;
/// Screen 1 LCD Data Register n
pub const BITM_LCD_LCDDATA0_S1_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA1_S1
pub const BITP_LCD_LCDDATA1_S1_VALUE: u32 = 0;
/// Screen 1 LCD Data Register n
pub const BITM_LCD_LCDDATA1_S1_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA2_S1
pub const BITP_LCD_LCDDATA2_S1_VALUE: u32 = 0;
/// Screen 1 LCD Data Register n
pub const BITM_LCD_LCDDATA2_S1_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA3_S1
pub const BITP_LCD_LCDDATA3_S1_VALUE: u32 = 0;
/// Screen 1 LCD Data Register n
pub const BITM_LCD_LCDDATA3_S1_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA4_S1
pub const BITP_LCD_LCDDATA4_S1_VALUE: u32 = 0;
/// Screen 1 LCD Data Register n
pub const BITM_LCD_LCDDATA4_S1_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA5_S1
pub const BITP_LCD_LCDDATA5_S1_VALUE: u32 = 0;
/// Screen 1 LCD Data Register n
pub const BITM_LCD_LCDDATA5_S1_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA6_S1
pub const BITP_LCD_LCDDATA6_S1_VALUE: u32 = 0;
/// Screen 1 LCD Data Register n
pub const BITM_LCD_LCDDATA6_S1_VALUE: u16 = 0xFFFF;

// LCD_LCDDATA7_S1
pub const BITP_LCD_LCDDATA7_S1_VALUE: u32 = 0;
/// Screen 1 LCD Data Register n
pub const BITM_LCD_LCDDATA7_S1_VALUE: u16 = 0xFFFF;
