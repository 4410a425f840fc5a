// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for wdt.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub WdtRegisters {
        /// Load value
        (0x0000 => pub t3ld: ReadWrite<u16>),
        (0x0002 => _reserved0),
        /// Current count value
        (0x0004 => pub t3val: ReadOnly<u16>),
        (0x0006 => _reserved1),
        /// Control
        (0x0008 => pub t3con: ReadWrite<u16, T3CON::Register>),
        (0x000a => _reserved2),
        /// Clear interrupt
        (0x000c => pub t3clri: WriteOnly<u16, T3CLRI::Register>),
        (0x000e => _reserved3),
        /// Status
        (0x0018 => pub t3sta: ReadOnly<u16, T3STA::Register>),
        (0x001a => _reserved4),
        (0x001c => @END),
    }
}

register_bitfields![u16,
    pub T3CON [
        PMD OFFSET(0) NUMBITS(1) [],
        IRQ OFFSET(1) NUMBITS(1) [],
        PRE OFFSET(2) NUMBITS(2) [
            DIV1 = 0,
            DIV16 = 1,
            DIV256 = 2,
            DIV4096 = 3,
        ],
        ENABLE OFFSET(5) NUMBITS(1) [],
        MOD OFFSET(6) NUMBITS(1) [
            FREERUN = 0,
            PERIODIC = 1,
        ],
    ],
    pub T3CLRI [
        VALUE OFFSET(0) NUMBITS(16) [
            CLR = 52428,
        ],
    ],
    pub T3STA [
        IRQ OFFSET(0) NUMBITS(1) [],
        CLRI OFFSET(1) NUMBITS(1) [],
        LD OFFSET(2) NUMBITS(1) [],
        CON OFFSET(3) NUMBITS(1) [],
        LOCK OFFSET(4) NUMBITS(1) [],
    ],
];

pub const WDT_BASE: StaticRef<WdtRegisters> =
    unsafe { StaticRef::new(0x4000_2580 as *const WdtRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(T3CON::PMD.mask << T3CON::PMD.shift, BITM_WDT_T3CON_PMD);
        assert_eq!(T3CON::PMD.shift as u32, BITP_WDT_T3CON_PMD);
        assert_eq!(T3CON::IRQ.mask << T3CON::IRQ.shift, BITM_WDT_T3CON_IRQ);
        assert_eq!(T3CON::IRQ.shift as u32, BITP_WDT_T3CON_IRQ);
        assert_eq!(T3CON::PRE.mask << T3CON::PRE.shift, BITM_WDT_T3CON_PRE);
        assert_eq!(T3CON::PRE.shift as u32, BITP_WDT_T3CON_PRE);
        assert_eq!(T3CON::ENABLE.mask << T3CON::ENABLE.shift, BITM_WDT_T3CON_ENABLE);
        assert_eq!(T3CON::ENABLE.shift as u32, BITP_WDT_T3CON_ENABLE);
        assert_eq!(T3CON::MOD.mask << T3CON::MOD.shift, BITM_WDT_T3CON_MOD);
        assert_eq!(T3CON::MOD.shift as u32, BITP_WDT_T3CON_MOD);
        assert_eq!(T3CLRI::VALUE.mask << T3CLRI::VALUE.shift, BITM_WDT_T3CLRI_VALUE);
        assert_eq!(T3CLRI::VALUE.shift as u32, BITP_WDT_T3CLRI_VALUE);
        assert_eq!(T3STA::IRQ.mask << T3STA::IRQ.shift, BITM_WDT_T3STA_IRQ);
        assert_eq!(T3STA::IRQ.shift as u32, BITP_WDT_T3STA_IRQ);
        assert_eq!(T3STA::CLRI.mask << T3STA::CLRI.shift, BITM_WDT_T3STA_CLRI);
        assert_eq!(T3STA::CLRI.shift as u32, BITP_WDT_T3STA_CLRI);
        assert_eq!(T3STA::LD.mask << T3STA::LD.shift, BITM_WDT_T3STA_LD);
        assert_eq!(T3STA::LD.shift as u32, BITP_WDT_T3STA_LD);
        assert_eq!(T3STA::CON.mask << T3STA::CON.shift, BITM_WDT_T3STA_CON);
        assert_eq!(T3STA::CON.shift as u32, BITP_WDT_T3STA_CON);
        assert_eq!(T3STA::LOCK.mask << T3STA::LOCK.shift, BITM_WDT_T3STA_LOCK);
        assert_eq!(T3STA::LOCK.shift as u32, BITP_WDT_T3STA_LOCK);
    }

    #[test]
    fn registers_match_addresses() {
        let wdt = WDT_BASE.address();
        assert_eq!(REG_WDT_T3LD as usize, wdt + offset_of!(WdtRegisters, t3ld));
        assert_eq!(REG_WDT_T3VAL as usize, wdt + offset_of!(WdtRegisters, t3val));
        assert_eq!(REG_WDT_T3CON as usize, wdt + offset_of!(WdtRegisters, t3con));
        assert_eq!(REG_WDT_T3CLRI as usize, wdt + offset_of!(WdtRegisters, t3clri));
        assert_eq!(REG_WDT_T3STA as usize, wdt + offset_of!(WdtRegisters, t3sta));
    }
}
