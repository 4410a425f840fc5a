// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Real-time clock.

// Generated register constants for rtc.

// RTC registers
/// RTC Control
pub const REG_RTC_RTCCR: u32 = 0x4000_2600;
/// RTC Status 0
pub const REG_RTC_RTCSR0: u32 = 0x4000_2604;
/// RTC Status 1
pub const REG_RTC_RTCSR1: u32 = 0x4000_2608;
/// RTC Count 0
pub const REG_RTC_RTCCNT0: u32 = 0x4000_260C;
/// RTC Count 1
pub const REG_RTC_RTCCNT1: u32 = 0x4000_2610;
/// RTC Alarm 0
pub const REG_RTC_RTCALM0: u32 = 0x4000_2614;
/// RTC Alarm 1
pub const REG_RTC_RTCALM1: u32 = 0x4000_2618;
/// RTC Trim
pub const REG_RTC_RTCTRM: u32 = 0x4000_261C;
/// RTC Gateway
pub const REG_RTC_RTCGWY: u32 = 0x4000_2620;

// RTC_RTCCR
pub const BITP_RTC_RTCCR_CNTEN: u32 = 0;
pub const BITP_RTC_RTCCR_ALMEN: u32 = 1;
pub const BITP_RTC_RTCCR_ALMINTEN: u32 = 2;
pub const BITP_RTC_RTCCR_TRMEN: u32 = 3;
/// Global enable for the RTC
pub const BITM_RTC_RTCCR_CNTEN: u32 = 0x0000_0001;
/// Enable the RTC alarm operation
pub const BITM_RTC_RTCCR_ALMEN: u32 = 0x0000_0002;
/// Enable alarm interrupt source
pub const BITM_RTC_RTCCR_ALMINTEN: u32 = 0x0000_0004;
/// Enable RTC digital trimming
pub const BITM_RTC_RTCCR_TRMEN: u32 = 0x0000_0008;

// RTC_RTCSR0
pub const BITP_RTC_RTCSR0_VALUE: u32 = 0;
/// RTC Status 0
pub const BITM_RTC_RTCSR0_VALUE: u16 = 0xFFFF;

// RTC_RTCSR1
pub const BITP_RTC_RTCSR1_VALUE: u32 = 0;
/// RTC Status 1
pub const BITM_RTC_RTCSR1_VALUE: u16 = 0xFFFF;

// RTC_RTCCNT0
pub const BITP_RTC_RTCCNT0_VALUE: u32 = 0;
/// RTC Count 0
pub const BITM_RTC_RTCCNT0_VALUE: u16 = 0xFFFF;

// RTC_RTCCNT1
pub const BITP_RTC_RTCCNT1_VALUE: u32 = 0;
/// RTC Count 1
pub const BITM_RTC_RTCCNT1_VALUE: u16 = 0xFFFF;

// RTC_RTCALM0
pub const BITP_RTC_RTCALM0_VALUE: u32 = 0;
/// RTC Alarm 0
pub const BITM_RTC_RTCALM0_VALUE: u16 = 0xFFFF;

// RTC_RTCALM1
pub const BITP_RTC_RTCALM1_VALUE: u32 = 0;
/// RTC Alarm 1
pub const BITM_RTC_RTCALM1_VALUE: u16 = 0xFFFF;

// RTC_RTCTRM
pub const BITP_RTC_RTCTRM_VALUE: u32 = 0;
/// RTC Trim
pub const BITM_RTC_RTCTRM_VALUE: u16 = 0xFFFF;

// RTC_RTCGWY
pub const BITP_RTC_RTCGWY_VALUE: u32 = 0;
/// RTC Gateway
pub const BITM_RTC_RTCGWY_VALUE: u16 = 0xFFFF;
