// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for fee.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub FeeRegisters {
        /// Status
        (0x0000 => pub feesta: ReadOnly<u16, FEESTA::Register>),
        (0x0002 => _reserved0),
        /// Command Control
        (0x0004 => pub feecon0: ReadWrite<u16, FEECON0::Register>),
        (0x0006 => _reserved1),
        /// Command
        (0x0008 => pub feecmd: ReadWrite<u16, FEECMD::Register>),
        (0x000a => _reserved2),
        /// Lower page address
        (0x0010 => pub feeadr0l: ReadWrite<u16>),
        (0x0012 => _reserved3),
        /// Upper page address
        (0x0014 => pub feeadr0h: ReadWrite<u16, FEEADRH::Register>),
        (0x0016 => _reserved4),
        /// Lower page address
        (0x0018 => pub feeadr1l: ReadWrite<u16>),
        (0x001a => _reserved5),
        /// Upper page address
        (0x001c => pub feeadr1h: ReadWrite<u16, FEEADRH::Register>),
        (0x001e => _reserved6),
        /// Key
        (0x0020 => pub feekey: WriteOnly<u16>),
        (0x0022 => _reserved7),
        /// Lower halfword of write protection
        (0x0028 => pub feeprol: ReadWrite<u16>),
        (0x002a => _reserved8),
        /// Upper halfword of write protection
        (0x002c => pub feeproh: ReadWrite<u16>),
        (0x002e => _reserved9),
        /// Lower halfword of signature
        (0x0030 => pub feesigl: ReadOnly<u16>),
        (0x0032 => _reserved10),
        /// Upper halfword of signature
        (0x0034 => pub feesigh: ReadOnly<u16, FEESIGH::Register>),
        (0x0036 => _reserved11),
        /// User Setup
        (0x0038 => pub feecon1: ReadWrite<u16, FEECON1::Register>),
        (0x003a => _reserved12),
        /// Lower halfword of write abort address
        (0x0048 => pub feeadral: ReadOnly<u16>),
        (0x004a => _reserved13),
        /// Upper halfword of write abort address
        (0x004c => pub feeadrah: ReadOnly<u16, FEEADRAH::Register>),
        (0x004e => _reserved14),
        /// Parity Control Register
        (0x0050 => pub feeparctl: ReadWrite<u16, FEEPARCTL::Register>),
        (0x0052 => _reserved15),
        /// Parity Status Register
        (0x0054 => pub feeparsta: ReadWrite<u16, FEEPARSTA::Register>),
        (0x0056 => _reserved16),
        /// Parity Error Address Low
        (0x0058 => pub feeparadrl: ReadOnly<u16>),
        (0x005a => _reserved17),
        /// Parity Error Address High
        (0x005c => pub feeparadrh: ReadOnly<u16, FEEPARADRH::Register>),
        (0x005e => _reserved18),
        /// System IRQ abort enable for interrupts 15 to 0
        (0x0078 => pub feeaen0: ReadWrite<u16>),
        (0x007a => _reserved19),
        /// System IRQ abort enable for interrupts 31 to 16
        (0x007c => pub feeaen1: ReadWrite<u16>),
        (0x007e => _reserved20),
        /// System IRQ abort enable for interrupts 47 to 32
        (0x0080 => pub feeaen2: ReadWrite<u16>),
        (0x0082 => _reserved21),
        /// System IRQ abort enable for interrupts 60 to 48
        (0x0084 => pub feeaen3: ReadWrite<u16>),
        (0x0086 => _reserved22),
        (0x0088 => @END),
    }
}

register_bitfields![u16,
    pub FEESTA [
        CMDBUSY OFFSET(0) NUMBITS(1) [],
        WRBUSY OFFSET(1) NUMBITS(1) [],
        CMDDONE OFFSET(2) NUMBITS(1) [],
        WRDONE OFFSET(3) NUMBITS(1) [],
        CMDRES OFFSET(4) NUMBITS(2) [
            SUCCESS = 0,
            PROTECTED = 1,
            VERIFYERR = 2,
            ABORT = 3,
        ],
    ],
    pub FEECON0 [
        IENCMD OFFSET(0) NUMBITS(1) [],
        IENERR OFFSET(1) NUMBITS(1) [],
        WREN OFFSET(2) NUMBITS(1) [],
    ],
    pub FEECMD [
        CMD OFFSET(0) NUMBITS(4) [
            IDLE = 0,
            ERASEPAGE = 1,
            SIGN = 2,
            MASSERASE = 3,
            ABORT = 4,
        ],
    ],
    pub FEEADRH [
        VALUE OFFSET(0) NUMBITS(3) [],
    ],
    pub FEESIGH [
        VALUE OFFSET(0) NUMBITS(8) [],
    ],
    pub FEECON1 [
        DBG OFFSET(0) NUMBITS(1) [],
        PRTCT OFFSET(1) NUMBITS(1) [],
    ],
    pub FEEADRAH [
        VALUE OFFSET(0) NUMBITS(3) [],
    ],
    pub FEEPARCTL [
        PAREN OFFSET(0) NUMBITS(1) [],
        PERREXEN OFFSET(1) NUMBITS(1) [],
    ],
    pub FEEPARSTA [
        PARERR OFFSET(0) NUMBITS(1) [],
    ],
    pub FEEPARADRH [
        VALUE OFFSET(0) NUMBITS(3) [],
    ],
];

pub const FEE0_BASE: StaticRef<FeeRegisters> =
    unsafe { StaticRef::new(0x4001_8000 as *const FeeRegisters) };
pub const FEE1_BASE: StaticRef<FeeRegisters> =
    unsafe { StaticRef::new(0x4001_8100 as *const FeeRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(FEESTA::CMDBUSY.mask << FEESTA::CMDBUSY.shift, BITM_FEE_FEESTA_CMDBUSY);
        assert_eq!(FEESTA::CMDBUSY.shift as u32, BITP_FEE_FEESTA_CMDBUSY);
        assert_eq!(FEESTA::WRBUSY.mask << FEESTA::WRBUSY.shift, BITM_FEE_FEESTA_WRBUSY);
        assert_eq!(FEESTA::WRBUSY.shift as u32, BITP_FEE_FEESTA_WRBUSY);
        assert_eq!(FEESTA::CMDDONE.mask << FEESTA::CMDDONE.shift, BITM_FEE_FEESTA_CMDDONE);
        assert_eq!(FEESTA::CMDDONE.shift as u32, BITP_FEE_FEESTA_CMDDONE);
        assert_eq!(FEESTA::WRDONE.mask << FEESTA::WRDONE.shift, BITM_FEE_FEESTA_WRDONE);
        assert_eq!(FEESTA::WRDONE.shift as u32, BITP_FEE_FEESTA_WRDONE);
        assert_eq!(FEESTA::CMDRES.mask << FEESTA::CMDRES.shift, BITM_FEE_FEESTA_CMDRES);
        assert_eq!(FEESTA::CMDRES.shift as u32, BITP_FEE_FEESTA_CMDRES);
        assert_eq!(FEECON0::IENCMD.mask << FEECON0::IENCMD.shift, BITM_FEE_FEECON0_IENCMD);
        assert_eq!(FEECON0::IENCMD.shift as u32, BITP_FEE_FEECON0_IENCMD);
        assert_eq!(FEECON0::IENERR.mask << FEECON0::IENERR.shift, BITM_FEE_FEECON0_IENERR);
        assert_eq!(FEECON0::IENERR.shift as u32, BITP_FEE_FEECON0_IENERR);
        assert_eq!(FEECON0::WREN.mask << FEECON0::WREN.shift, BITM_FEE_FEECON0_WREN);
        assert_eq!(FEECON0::WREN.shift as u32, BITP_FEE_FEECON0_WREN);
        assert_eq!(FEECMD::CMD.mask << FEECMD::CMD.shift, BITM_FEE_FEECMD_CMD);
        assert_eq!(FEECMD::CMD.shift as u32, BITP_FEE_FEECMD_CMD);
        assert_eq!(FEEADRH::VALUE.mask << FEEADRH::VALUE.shift, BITM_FEE_FEEADR0H_VALUE);
        assert_eq!(FEEADRH::VALUE.shift as u32, BITP_FEE_FEEADR0H_VALUE);
        assert_eq!(FEESIGH::VALUE.mask << FEESIGH::VALUE.shift, BITM_FEE_FEESIGH_VALUE);
        assert_eq!(FEESIGH::VALUE.shift as u32, BITP_FEE_FEESIGH_VALUE);
        assert_eq!(FEECON1::DBG.mask << FEECON1::DBG.shift, BITM_FEE_FEECON1_DBG);
        assert_eq!(FEECON1::DBG.shift as u32, BITP_FEE_FEECON1_DBG);
        assert_eq!(FEECON1::PRTCT.mask << FEECON1::PRTCT.shift, BITM_FEE_FEECON1_PRTCT);
        assert_eq!(FEECON1::PRTCT.shift as u32, BITP_FEE_FEECON1_PRTCT);
        assert_eq!(FEEADRAH::VALUE.mask << FEEADRAH::VALUE.shift, BITM_FEE_FEEADRAH_VALUE);
        assert_eq!(FEEADRAH::VALUE.shift as u32, BITP_FEE_FEEADRAH_VALUE);
        assert_eq!(FEEPARCTL::PAREN.mask << FEEPARCTL::PAREN.shift, BITM_FEE_FEEPARCTL_PAREN);
        assert_eq!(FEEPARCTL::PAREN.shift as u32, BITP_FEE_FEEPARCTL_PAREN);
        assert_eq!(FEEPARCTL::PERREXEN.mask << FEEPARCTL::PERREXEN.shift, BITM_FEE_FEEPARCTL_PERREXEN);
        assert_eq!(FEEPARCTL::PERREXEN.shift as u32, BITP_FEE_FEEPARCTL_PERREXEN);
        assert_eq!(FEEPARSTA::PARERR.mask << FEEPARSTA::PARERR.shift, BITM_FEE_FEEPARSTA_PARERR);
        assert_eq!(FEEPARSTA::PARERR.shift as u32, BITP_FEE_FEEPARSTA_PARERR);
        assert_eq!(FEEPARADRH::VALUE.mask << FEEPARADRH::VALUE.shift, BITM_FEE_FEEPARADRH_VALUE);
        assert_eq!(FEEPARADRH::VALUE.shift as u32, BITP_FEE_FEEPARADRH_VALUE);
    }

    #[test]
    fn registers_match_addresses() {
        let fee0 = FEE0_BASE.address();
        let fee1 = FEE1_BASE.address();
        assert_eq!(REG_FEE0_FEESTA as usize, fee0 + offset_of!(FeeRegisters, feesta));
        assert_eq!(REG_FEE0_FEECON0 as usize, fee0 + offset_of!(FeeRegisters, feecon0));
        assert_eq!(REG_FEE0_FEECMD as usize, fee0 + offset_of!(FeeRegisters, feecmd));
        assert_eq!(REG_FEE0_FEEADR0L as usize, fee0 + offset_of!(FeeRegisters, feeadr0l));
        assert_eq!(REG_FEE0_FEEADR0H as usize, fee0 + offset_of!(FeeRegisters, feeadr0h));
        assert_eq!(REG_FEE0_FEEADR1L as usize, fee0 + offset_of!(FeeRegisters, feeadr1l));
        assert_eq!(REG_FEE0_FEEADR1H as usize, fee0 + offset_of!(FeeRegisters, feeadr1h));
        assert_eq!(REG_FEE0_FEEKEY as usize, fee0 + offset_of!(FeeRegisters, feekey));
        assert_eq!(REG_FEE0_FEEPROL as usize, fee0 + offset_of!(FeeRegisters, feeprol));
        assert_eq!(REG_FEE0_FEEPROH as usize, fee0 + offset_of!(FeeRegisters, feeproh));
        assert_eq!(REG_FEE0_FEESIGL as usize, fee0 + offset_of!(FeeRegisters, feesigl));
        assert_eq!(REG_FEE0_FEESIGH as usize, fee0 + offset_of!(FeeRegisters, feesigh));
        assert_eq!(REG_FEE0_FEECON1 as usize, fee0 + offset_of!(FeeRegisters, feecon1));
        assert_eq!(REG_FEE0_FEEADRAL as usize, fee0 + offset_of!(FeeRegisters, feeadral));
        assert_eq!(REG_FEE0_FEEADRAH as usize, fee0 + offset_of!(FeeRegisters, feeadrah));
        assert_eq!(REG_FEE0_FEEPARCTL as usize, fee0 + offset_of!(FeeRegisters, feeparctl));
        assert_eq!(REG_FEE0_FEEPARSTA as usize, fee0 + offset_of!(FeeRegisters, feeparsta));
        assert_eq!(REG_FEE0_FEEPARADRL as usize, fee0 + offset_of!(FeeRegisters, feeparadrl));
        assert_eq!(REG_FEE0_FEEPARADRH as usize, fee0 + offset_of!(FeeRegisters, feeparadrh));
        assert_eq!(REG_FEE0_FEEAEN0 as usize, fee0 + offset_of!(FeeRegisters, feeaen0));
        assert_eq!(REG_FEE0_FEEAEN1 as usize, fee0 + offset_of!(FeeRegisters, feeaen1));
        assert_eq!(REG_FEE0_FEEAEN2 as usize, fee0 + offset_of!(FeeRegisters, feeaen2));
        assert_eq!(REG_FEE0_FEEAEN3 as usize, fee0 + offset_of!(FeeRegisters, feeaen3));
        assert_eq!(REG_FEE1_FEESTA as usize, fee1 + offset_of!(FeeRegisters, feesta));
        assert_eq!(REG_FEE1_FEECON0 as usize, fee1 + offset_of!(FeeRegisters, feecon0));
        assert_eq!(REG_FEE1_FEECMD as usize, fee1 + offset_of!(FeeRegisters, feecmd));
        assert_eq!(REG_FEE1_FEEADR0L as usize, fee1 + offset_of!(FeeRegisters, feeadr0l));
        assert_eq!(REG_FEE1_FEEADR0H as usize, fee1 + offset_of!(FeeRegisters, feeadr0h));
        assert_eq!(REG_FEE1_FEEADR1L as usize, fee1 + offset_of!(FeeRegisters, feeadr1l));
        assert_eq!(REG_FEE1_FEEADR1H as usize, fee1 + offset_of!(FeeRegisters, feeadr1h));
        assert_eq!(REG_FEE1_FEEKEY as usize, fee1 + offset_of!(FeeRegisters, feekey));
        assert_eq!(REG_FEE1_FEEPROL as usize, fee1 + offset_of!(FeeRegisters, feeprol));
        assert_eq!(REG_FEE1_FEEPROH as usize, fee1 + offset_of!(FeeRegisters, feeproh));
        assert_eq!(REG_FEE1_FEESIGL as usize, fee1 + offset_of!(FeeRegisters, feesigl));
        assert_eq!(REG_FEE1_FEESIGH as usize, fee1 + offset_of!(FeeRegisters, feesigh));
        assert_eq!(REG_FEE1_FEECON1 as usize, fee1 + offset_of!(FeeRegisters, feecon1));
        assert_eq!(REG_FEE1_FEEADRAL as usize, fee1 + offset_of!(FeeRegisters, feeadral));
        assert_eq!(REG_FEE1_FEEADRAH as usize, fee1 + offset_of!(FeeRegisters, feeadrah));
        assert_eq!(REG_FEE1_FEEPARCTL as usize, fee1 + offset_of!(FeeRegisters, feeparctl));
        assert_eq!(REG_FEE1_FEEPARSTA as usize, fee1 + offset_of!(FeeRegisters, feeparsta));
        assert_eq!(REG_FEE1_FEEPARADRL as usize, fee1 + offset_of!(FeeRegisters, feeparadrl));
        assert_eq!(REG_FEE1_FEEPARADRH as usize, fee1 + offset_of!(FeeRegisters, feeparadrh));
        assert_eq!(REG_FEE1_FEEAEN0 as usize, fee1 + offset_of!(FeeRegisters, feeaen0));
        assert_eq!(REG_FEE1_FEEAEN1 as usize, fee1 + offset_of!(FeeRegisters, feeaen1));
        assert_eq!(REG_FEE1_FEEAEN2 as usize, fee1 + offset_of!(FeeRegisters, feeaen2));
        assert_eq!(REG_FEE1_FEEAEN3 as usize, fee1 + offset_of!(FeeRegisters, feeaen3));
    }
}
