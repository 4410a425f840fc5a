// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for rtc.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub RtcRegisters {
        /// RTC Control
        (0x0000 => pub rtccr: ReadWrite<u32, RTCCR::Register>),
        /// RTC Status 0
        (0x0004 => pub rtcsr0: ReadWrite<u16>),
        (0x0006 => _reserved0),
        /// RTC Status 1
        (0x0008 => pub rtcsr1: ReadOnly<u16>),
        (0x000a => _reserved1),
        /// RTC Count 0
        (0x000c => pub rtccnt0: ReadWrite<u16>),
        (0x000e => _reserved2),
        /// RTC Count 1
        (0x0010 => pub rtccnt1: ReadWrite<u16>),
        (0x0012 => _reserved3),
        /// RTC Alarm 0
        (0x0014 => pub rtcalm0: ReadWrite<u16>),
        (0x0016 => _reserved4),
        /// RTC Alarm 1
        (0x0018 => pub rtcalm1: ReadWrite<u16>),
        (0x001a => _reserved5),
        /// RTC Trim
        (0x001c => pub rtctrm: ReadWrite<u16>),
        (0x001e => _reserved6),
        /// RTC Gateway
        (0x0020 => pub rtcgwy: ReadWrite<u16>),
        (0x0022 => _reserved7),
        (0x0024 => @END),
    }
}

register_bitfields![u32,
    pub RTCCR [
        CNTEN OFFSET(0) NUMBITS(1) [],
        ALMEN OFFSET(1) NUMBITS(1) [],
        ALMINTEN OFFSET(2) NUMBITS(1) [],
        TRMEN OFFSET(3) NUMBITS(1) [],
    ],
];

pub const RTC_BASE: StaticRef<RtcRegisters> =
    unsafe { StaticRef::new(0x4000_2600 as *const RtcRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(RTCCR::CNTEN.mask << RTCCR::CNTEN.shift, BITM_RTC_RTCCR_CNTEN);
        assert_eq!(RTCCR::CNTEN.shift as u32, BITP_RTC_RTCCR_CNTEN);
        assert_eq!(RTCCR::ALMEN.mask << RTCCR::ALMEN.shift, BITM_RTC_RTCCR_ALMEN);
        assert_eq!(RTCCR::ALMEN.shift as u32, BITP_RTC_RTCCR_ALMEN);
        assert_eq!(RTCCR::ALMINTEN.mask << RTCCR::ALMINTEN.shift, BITM_RTC_RTCCR_ALMINTEN);
        assert_eq!(RTCCR::ALMINTEN.shift as u32, BITP_RTC_RTCCR_ALMINTEN);
        assert_eq!(RTCCR::TRMEN.mask << RTCCR::TRMEN.shift, BITM_RTC_RTCCR_TRMEN);
        assert_eq!(RTCCR::TRMEN.shift as u32, BITP_RTC_RTCCR_TRMEN);
    }

    #[test]
    fn registers_match_addresses() {
        let rtc = RTC_BASE.address();
        assert_eq!(REG_RTC_RTCCR as usize, rtc + offset_of!(RtcRegisters, rtccr));
        assert_eq!(REG_RTC_RTCSR0 as usize, rtc + offset_of!(RtcRegisters, rtcsr0));
        assert_eq!(REG_RTC_RTCSR1 as usize, rtc + offset_of!(RtcRegisters, rtcsr1));
        assert_eq!(REG_RTC_RTCCNT0 as usize, rtc + offset_of!(RtcRegisters, rtccnt0));
        assert_eq!(REG_RTC_RTCCNT1 as usize, rtc + offset_of!(RtcRegisters, rtccnt1));
        assert_eq!(REG_RTC_RTCALM0 as usize, rtc + offset_of!(RtcRegisters, rtcalm0));
        assert_eq!(REG_RTC_RTCALM1 as usize, rtc + offset_of!(RtcRegisters, rtcalm1));
        assert_eq!(REG_RTC_RTCTRM as usize, rtc + offset_of!(RtcRegisters, rtctrm));
        assert_eq!(REG_RTC_RTCGWY as usize, rtc + offset_of!(RtcRegisters, rtcgwy));
    }
}
