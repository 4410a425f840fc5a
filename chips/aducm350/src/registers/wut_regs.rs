// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for wut.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub WutRegisters {
        /// Current count value - LS halfword.
        (0x0000 => pub t2val0: ReadOnly<u16>),
        (0x0002 => _reserved0),
        /// Current count value - MS halfword
        (0x0004 => pub t2val1: ReadOnly<u16>),
        (0x0006 => _reserved1),
        /// Control
        (0x0008 => pub t2con: ReadWrite<u16, T2CON::Register>),
        (0x000a => _reserved2),
        /// 12-bit interval for wakeup field A
        (0x000c => pub t2inc: ReadWrite<u16, T2INC::Register>),
        (0x000e => _reserved3),
        /// Wakeup field B - LS halfword
        (0x0010 => pub t2wufb0: ReadWrite<u16>),
        (0x0012 => _reserved4),
        /// Wakeup field B - MS halfword
        (0x0014 => pub t2wufb1: ReadWrite<u16>),
        (0x0016 => _reserved5),
        /// Wakeup field C - LS halfword
        (0x0018 => pub t2wufc0: ReadWrite<u16>),
        (0x001a => _reserved6),
        /// Wakeup field C - MS halfword
        (0x001c => pub t2wufc1: ReadWrite<u16>),
        (0x001e => _reserved7),
        /// Wakeup field D - LS halfword
        (0x0020 => pub t2wufd0: ReadWrite<u16>),
        (0x0022 => _reserved8),
        /// Wakeup field D - MS halfword
        (0x0024 => pub t2wufd1: ReadWrite<u16>),
        (0x0026 => _reserved9),
        /// Interrupt enable
        (0x0028 => pub t2ien: ReadWrite<u16, T2IEN::Register>),
        (0x002a => _reserved10),
        /// Status
        (0x002c => pub t2sta: ReadOnly<u16, T2STA::Register>),
        (0x002e => _reserved11),
        /// Clear interrupts
        (0x0030 => pub t2clri: WriteOnly<u16, T2CLRI::Register>),
        (0x0032 => _reserved12),
        /// Unsynchronized lower 16 bits of WU Timer counter value.
        (0x0034 => pub wutval_low: ReadWrite<u16>),
        (0x0036 => _reserved13),
        /// Unsynchronized upper 16 bits of WU Timer counter value.
        (0x0038 => pub wutval_high: ReadWrite<u16>),
        (0x003a => _reserved14),
        /// Wakeup field A - LS halfword
        (0x003c => pub t2wufa0: ReadWrite<u16>),
        (0x003e => _reserved15),
        /// Wakeup field A - MS halfword
        (0x0040 => pub t2wufa1: ReadWrite<u16>),
        (0x0042 => _reserved16),
        (0x0044 => @END),
    }
}

register_bitfields![u16,
    pub T2CON [
        PRE OFFSET(0) NUMBITS(2) [
            DIV1 = 0,
            DIV16 = 1,
            DIV256 = 2,
            DIV32768 = 3,
        ],
        FREEZE OFFSET(3) NUMBITS(1) [],
        MOD OFFSET(6) NUMBITS(1) [
            PERIODIC = 0,
            FREERUN = 1,
        ],
        ENABLE OFFSET(7) NUMBITS(1) [],
        WUEN OFFSET(8) NUMBITS(1) [],
        CLK OFFSET(9) NUMBITS(2) [
            PCLK = 0,
            LFXTAL = 1,
            LFOSC = 2,
            EXTCLK = 3,
        ],
        STOP_WUFA OFFSET(11) NUMBITS(1) [],
    ],
    pub T2INC [
        VALUE OFFSET(0) NUMBITS(12) [],
    ],
    pub T2IEN [
        WUFA OFFSET(0) NUMBITS(1) [],
        WUFB OFFSET(1) NUMBITS(1) [],
        WUFC OFFSET(2) NUMBITS(1) [],
        WUFD OFFSET(3) NUMBITS(1) [],
        ROLL OFFSET(4) NUMBITS(1) [],
    ],
    pub T2STA [
        WUFA OFFSET(0) NUMBITS(1) [],
        WUFB OFFSET(1) NUMBITS(1) [],
        WUFC OFFSET(2) NUMBITS(1) [],
        WUFD OFFSET(3) NUMBITS(1) [],
        ROLL OFFSET(4) NUMBITS(1) [],
        IRQCRY OFFSET(6) NUMBITS(1) [],
        FREEZE OFFSET(7) NUMBITS(1) [],
        PDOK OFFSET(8) NUMBITS(1) [],
    ],
    pub T2CLRI [
        WUFA OFFSET(0) NUMBITS(1) [],
        WUFB OFFSET(1) NUMBITS(1) [],
        WUFC OFFSET(2) NUMBITS(1) [],
        WUFD OFFSET(3) NUMBITS(1) [],
        ROLL OFFSET(4) NUMBITS(1) [],
    ],
];

pub const WUT_BASE: StaticRef<WutRegisters> =
    unsafe { StaticRef::new(0x4000_2500 as *const WutRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(T2CON::PRE.mask << T2CON::PRE.shift, BITM_WUT_T2CON_PRE);
        assert_eq!(T2CON::PRE.shift as u32, BITP_WUT_T2CON_PRE);
        assert_eq!(T2CON::FREEZE.mask << T2CON::FREEZE.shift, BITM_WUT_T2CON_FREEZE);
        assert_eq!(T2CON::FREEZE.shift as u32, BITP_WUT_T2CON_FREEZE);
        assert_eq!(T2CON::MOD.mask << T2CON::MOD.shift, BITM_WUT_T2CON_MOD);
        assert_eq!(T2CON::MOD.shift as u32, BITP_WUT_T2CON_MOD);
        assert_eq!(T2CON::ENABLE.mask << T2CON::ENABLE.shift, BITM_WUT_T2CON_ENABLE);
        assert_eq!(T2CON::ENABLE.shift as u32, BITP_WUT_T2CON_ENABLE);
        assert_eq!(T2CON::WUEN.mask << T2CON::WUEN.shift, BITM_WUT_T2CON_WUEN);
        assert_eq!(T2CON::WUEN.shift as u32, BITP_WUT_T2CON_WUEN);
        assert_eq!(T2CON::CLK.mask << T2CON::CLK.shift, BITM_WUT_T2CON_CLK);
        assert_eq!(T2CON::CLK.shift as u32, BITP_WUT_T2CON_CLK);
        assert_eq!(T2CON::STOP_WUFA.mask << T2CON::STOP_WUFA.shift, BITM_WUT_T2CON_STOP_WUFA);
        assert_eq!(T2CON::STOP_WUFA.shift as u32, BITP_WUT_T2CON_STOP_WUFA);
        assert_eq!(T2INC::VALUE.mask << T2INC::VALUE.shift, BITM_WUT_T2INC_VALUE);
        assert_eq!(T2INC::VALUE.shift as u32, BITP_WUT_T2INC_VALUE);
        assert_eq!(T2IEN::WUFA.mask << T2IEN::WUFA.shift, BITM_WUT_T2IEN_WUFA);
        assert_eq!(T2IEN::WUFA.shift as u32, BITP_WUT_T2IEN_WUFA);
        assert_eq!(T2IEN::WUFB.mask << T2IEN::WUFB.shift, BITM_WUT_T2IEN_WUFB);
        assert_eq!(T2IEN::WUFB.shift as u32, BITP_WUT_T2IEN_WUFB);
        assert_eq!(T2IEN::WUFC.mask << T2IEN::WUFC.shift, BITM_WUT_T2IEN_WUFC);
        assert_eq!(T2IEN::WUFC.shift as u32, BITP_WUT_T2IEN_WUFC);
        assert_eq!(T2IEN::WUFD.mask << T2IEN::WUFD.shift, BITM_WUT_T2IEN_WUFD);
        assert_eq!(T2IEN::WUFD.shift as u32, BITP_WUT_T2IEN_WUFD);
        assert_eq!(T2IEN::ROLL.mask << T2IEN::ROLL.shift, BITM_WUT_T2IEN_ROLL);
        assert_eq!(T2IEN::ROLL.shift as u32, BITP_WUT_T2IEN_ROLL);
        assert_eq!(T2STA::WUFA.mask << T2STA::WUFA.shift, BITM_WUT_T2STA_WUFA);
        assert_eq!(T2STA::WUFA.shift as u32, BITP_WUT_T2STA_WUFA);
        assert_eq!(T2STA::WUFB.mask << T2STA::WUFB.shift, BITM_WUT_T2STA_WUFB);
        assert_eq!(T2STA::WUFB.shift as u32, BITP_WUT_T2STA_WUFB);
        assert_eq!(T2STA::WUFC.mask << T2STA::WUFC.shift, BITM_WUT_T2STA_WUFC);
        assert_eq!(T2STA::WUFC.shift as u32, BITP_WUT_T2STA_WUFC);
        assert_eq!(T2STA::WUFD.mask << T2STA::WUFD.shift, BITM_WUT_T2STA_WUFD);
        assert_eq!(T2STA::WUFD.shift as u32, BITP_WUT_T2STA_WUFD);
        assert_eq!(T2STA::ROLL.mask << T2STA::ROLL.shift, BITM_WUT_T2STA_ROLL);
        assert_eq!(T2STA::ROLL.shift as u32, BITP_WUT_T2STA_ROLL);
        assert_eq!(T2STA::IRQCRY.mask << T2STA::IRQCRY.shift, BITM_WUT_T2STA_IRQCRY);
        assert_eq!(T2STA::IRQCRY.shift as u32, BITP_WUT_T2STA_IRQCRY);
        assert_eq!(T2STA::FREEZE.mask << T2STA::FREEZE.shift, BITM_WUT_T2STA_FREEZE);
        assert_eq!(T2STA::FREEZE.shift as u32, BITP_WUT_T2STA_FREEZE);
        assert_eq!(T2STA::PDOK.mask << T2STA::PDOK.shift, BITM_WUT_T2STA_PDOK);
        assert_eq!(T2STA::PDOK.shift as u32, BITP_WUT_T2STA_PDOK);
        assert_eq!(T2CLRI::WUFA.mask << T2CLRI::WUFA.shift, BITM_WUT_T2CLRI_WUFA);
        assert_eq!(T2CLRI::WUFA.shift as u32, BITP_WUT_T2CLRI_WUFA);
        assert_eq!(T2CLRI::WUFB.mask << T2CLRI::WUFB.shift, BITM_WUT_T2CLRI_WUFB);
        assert_eq!(T2CLRI::WUFB.shift as u32, BITP_WUT_T2CLRI_WUFB);
        assert_eq!(T2CLRI::WUFC.mask << T2CLRI::WUFC.shift, BITM_WUT_T2CLRI_WUFC);
        assert_eq!(T2CLRI::WUFC.shift as u32, BITP_WUT_T2CLRI_WUFC);
        assert_eq!(T2CLRI::WUFD.mask << T2CLRI::WUFD.shift, BITM_WUT_T2CLRI_WUFD);
        assert_eq!(T2CLRI::WUFD.shift as u32, BITP_WUT_T2CLRI_WUFD);
        assert_eq!(T2CLRI::ROLL.mask << T2CLRI::ROLL.shift, BITM_WUT_T2CLRI_ROLL);
        assert_eq!(T2CLRI::ROLL.shift as u32, BITP_WUT_T2CLRI_ROLL);
    }

    #[test]
    fn registers_match_addresses() {
        let wut = WUT_BASE.address();
        assert_eq!(REG_WUT_T2VAL0 as usize, wut + offset_of!(WutRegisters, t2val0));
        assert_eq!(REG_WUT_T2VAL1 as usize, wut + offset_of!(WutRegisters, t2val1));
        assert_eq!(REG_WUT_T2CON as usize, wut + offset_of!(WutRegisters, t2con));
        assert_eq!(REG_WUT_T2INC as usize, wut + offset_of!(WutRegisters, t2inc));
        assert_eq!(REG_WUT_T2WUFB0 as usize, wut + offset_of!(WutRegisters, t2wufb0));
        assert_eq!(REG_WUT_T2WUFB1 as usize, wut + offset_of!(WutRegisters, t2wufb1));
        assert_eq!(REG_WUT_T2WUFC0 as usize, wut + offset_of!(WutRegisters, t2wufc0));
        assert_eq!(REG_WUT_T2WUFC1 as usize, wut + offset_of!(WutRegisters, t2wufc1));
        assert_eq!(REG_WUT_T2WUFD0 as usize, wut + offset_of!(WutRegisters, t2wufd0));
        assert_eq!(REG_WUT_T2WUFD1 as usize, wut + offset_of!(WutRegisters, t2wufd1));
        assert_eq!(REG_WUT_T2IEN as usize, wut + offset_of!(WutRegisters, t2ien));
        assert_eq!(REG_WUT_T2STA as usize, wut + offset_of!(WutRegisters, t2sta));
        assert_eq!(REG_WUT_T2CLRI as usize, wut + offset_of!(WutRegisters, t2clri));
        assert_eq!(REG_WUT_WUTVAL_LOW as usize, wut + offset_of!(WutRegisters, wutval_low));
        assert_eq!(REG_WUT_WUTVAL_HIGH as usize, wut + offset_of!(WutRegisters, wutval_high));
        assert_eq!(REG_WUT_T2WUFA0 as usize, wut + offset_of!(WutRegisters, t2wufa0));
        assert_eq!(REG_WUT_T2WUFA1 as usize, wut + offset_of!(WutRegisters, t2wufa1));
    }
}
