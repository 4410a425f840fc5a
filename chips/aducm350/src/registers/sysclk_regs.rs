// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for sysclk.

use crate::static_ref::StaticRef;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub SysClkRegisters {
        /// Misc clock settings
        (0x0000 => pub clkcon0: ReadWrite<u16, CLKCON0::Register>),
        (0x0002 => _reserved0),
        /// Clock dividers
        (0x0004 => pub clkcon1: ReadWrite<u16, CLKCON1::Register>),
        (0x0006 => _reserved1),
        /// System PLL
        (0x000c => pub clkcon3: ReadWrite<u16, CLKCON3::Register>),
        (0x000e => _reserved2),
        /// USB PLL
        (0x0010 => pub clkcon4: ReadWrite<u16, CLKCON4::Register>),
        (0x0012 => _reserved3),
        /// User clock gating control
        (0x0014 => pub clkcon5: ReadWrite<u16, CLKCON5::Register>),
        (0x0016 => _reserved4),
        /// Clocking status
        (0x0018 => pub clkstat0: ReadWrite<u16, CLKSTAT0::Register>),
        (0x001a => _reserved5),
        (0x001c => @END),
    }
}

register_bitfields![u16,
    pub CLKCON0 [
        CLKMUX OFFSET(0) NUMBITS(2) [
            HFOSC = 0,
            HFXTAL = 1,
            SPLL = 2,
            GPIO = 3,
        ],
        CLKCOUT OFFSET(2) NUMBITS(3) [],
        PLLMUX OFFSET(5) NUMBITS(1) [],
        LFCLKMUX OFFSET(6) NUMBITS(1) [],
    ],
    pub CLKCON1 [
        HCLKDIVCNT OFFSET(0) NUMBITS(6) [],
        PCLKDIVCNT OFFSET(8) NUMBITS(6) [],
        USBCTLCLKDIVMUX OFFSET(14) NUMBITS(1) [],
    ],
    pub CLKCON3 [
        SPLLNSEL OFFSET(0) NUMBITS(6) [],
        SPLLMSEL OFFSET(6) NUMBITS(2) [
            DIV1 = 0,
            DIV2 = 1,
            DIV4 = 2,
        ],
        SPLLDIV2 OFFSET(8) NUMBITS(1) [],
        SPLLEN OFFSET(9) NUMBITS(1) [],
    ],
    pub CLKCON4 [
        UPLLNSEL OFFSET(0) NUMBITS(6) [],
        UPLLMSEL OFFSET(6) NUMBITS(2) [
            DIV1 = 0,
            DIV2 = 1,
            DIV4 = 2,
        ],
        UPLLDIV2 OFFSET(8) NUMBITS(1) [],
        UPLLEN OFFSET(9) NUMBITS(1) [],
    ],
    pub CLKCON5 [
        UCLKSPI0OFF OFFSET(0) NUMBITS(1) [],
        UCLKSPI1OFF OFFSET(1) NUMBITS(1) [],
        UCLKSPIHOFF OFFSET(2) NUMBITS(1) [],
        UCLKI2COFF OFFSET(3) NUMBITS(1) [],
        UCLKUARTOFF OFFSET(4) NUMBITS(1) [],
        UCLKI2SOFF OFFSET(5) NUMBITS(1) [],
        ACLKOFF OFFSET(7) NUMBITS(1) [],
        CTCLKOFF OFFSET(8) NUMBITS(1) [],
    ],
    pub CLKSTAT0 [
        SPLLSTATUS OFFSET(0) NUMBITS(1) [],
        UPLLSTATUS OFFSET(4) NUMBITS(1) [],
    ],
];

pub const SYSCLK_BASE: StaticRef<SysClkRegisters> =
    unsafe { StaticRef::new(0x4002_8000 as *const SysClkRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(CLKCON0::CLKMUX.mask << CLKCON0::CLKMUX.shift, BITM_SYSCLK_CLKCON0_CLKMUX);
        assert_eq!(CLKCON0::CLKMUX.shift as u32, BITP_SYSCLK_CLKCON0_CLKMUX);
        assert_eq!(CLKCON0::CLKCOUT.mask << CLKCON0::CLKCOUT.shift, BITM_SYSCLK_CLKCON0_CLKCOUT);
        assert_eq!(CLKCON0::CLKCOUT.shift as u32, BITP_SYSCLK_CLKCON0_CLKCOUT);
        assert_eq!(CLKCON0::PLLMUX.mask << CLKCON0::PLLMUX.shift, BITM_SYSCLK_CLKCON0_PLLMUX);
        assert_eq!(CLKCON0::PLLMUX.shift as u32, BITP_SYSCLK_CLKCON0_PLLMUX);
        assert_eq!(CLKCON0::LFCLKMUX.mask << CLKCON0::LFCLKMUX.shift, BITM_SYSCLK_CLKCON0_LFCLKMUX);
        assert_eq!(CLKCON0::LFCLKMUX.shift as u32, BITP_SYSCLK_CLKCON0_LFCLKMUX);
        assert_eq!(CLKCON1::HCLKDIVCNT.mask << CLKCON1::HCLKDIVCNT.shift, BITM_SYSCLK_CLKCON1_HCLKDIVCNT);
        assert_eq!(CLKCON1::HCLKDIVCNT.shift as u32, BITP_SYSCLK_CLKCON1_HCLKDIVCNT);
        assert_eq!(CLKCON1::PCLKDIVCNT.mask << CLKCON1::PCLKDIVCNT.shift, BITM_SYSCLK_CLKCON1_PCLKDIVCNT);
        assert_eq!(CLKCON1::PCLKDIVCNT.shift as u32, BITP_SYSCLK_CLKCON1_PCLKDIVCNT);
        assert_eq!(CLKCON1::USBCTLCLKDIVMUX.mask << CLKCON1::USBCTLCLKDIVMUX.shift, BITM_SYSCLK_CLKCON1_USBCTLCLKDIVMUX);
        assert_eq!(CLKCON1::USBCTLCLKDIVMUX.shift as u32, BITP_SYSCLK_CLKCON1_USBCTLCLKDIVMUX);
        assert_eq!(CLKCON3::SPLLNSEL.mask << CLKCON3::SPLLNSEL.shift, BITM_SYSCLK_CLKCON3_SPLLNSEL);
        assert_eq!(CLKCON3::SPLLNSEL.shift as u32, BITP_SYSCLK_CLKCON3_SPLLNSEL);
        assert_eq!(CLKCON3::SPLLMSEL.mask << CLKCON3::SPLLMSEL.shift, BITM_SYSCLK_CLKCON3_SPLLMSEL);
        assert_eq!(CLKCON3::SPLLMSEL.shift as u32, BITP_SYSCLK_CLKCON3_SPLLMSEL);
        assert_eq!(CLKCON3::SPLLDIV2.mask << CLKCON3::SPLLDIV2.shift, BITM_SYSCLK_CLKCON3_SPLLDIV2);
        assert_eq!(CLKCON3::SPLLDIV2.shift as u32, BITP_SYSCLK_CLKCON3_SPLLDIV2);
        assert_eq!(CLKCON3::SPLLEN.mask << CLKCON3::SPLLEN.shift, BITM_SYSCLK_CLKCON3_SPLLEN);
        assert_eq!(CLKCON3::SPLLEN.shift as u32, BITP_SYSCLK_CLKCON3_SPLLEN);
        assert_eq!(CLKCON4::UPLLNSEL.mask << CLKCON4::UPLLNSEL.shift, BITM_SYSCLK_CLKCON4_UPLLNSEL);
        assert_eq!(CLKCON4::UPLLNSEL.shift as u32, BITP_SYSCLK_CLKCON4_UPLLNSEL);
        assert_eq!(CLKCON4::UPLLMSEL.mask << CLKCON4::UPLLMSEL.shift, BITM_SYSCLK_CLKCON4_UPLLMSEL);
        assert_eq!(CLKCON4::UPLLMSEL.shift as u32, BITP_SYSCLK_CLKCON4_UPLLMSEL);
        assert_eq!(CLKCON4::UPLLDIV2.mask << CLKCON4::UPLLDIV2.shift, BITM_SYSCLK_CLKCON4_UPLLDIV2);
        assert_eq!(CLKCON4::UPLLDIV2.shift as u32, BITP_SYSCLK_CLKCON4_UPLLDIV2);
        assert_eq!(CLKCON4::UPLLEN.mask << CLKCON4::UPLLEN.shift, BITM_SYSCLK_CLKCON4_UPLLEN);
        assert_eq!(CLKCON4::UPLLEN.shift as u32, BITP_SYSCLK_CLKCON4_UPLLEN);
        assert_eq!(CLKCON5::UCLKSPI0OFF.mask << CLKCON5::UCLKSPI0OFF.shift, BITM_SYSCLK_CLKCON5_UCLKSPI0OFF);
        assert_eq!(CLKCON5::UCLKSPI0OFF.shift as u32, BITP_SYSCLK_CLKCON5_UCLKSPI0OFF);
        assert_eq!(CLKCON5::UCLKSPI1OFF.mask << CLKCON5::UCLKSPI1OFF.shift, BITM_SYSCLK_CLKCON5_UCLKSPI1OFF);
        assert_eq!(CLKCON5::UCLKSPI1OFF.shift as u32, BITP_SYSCLK_CLKCON5_UCLKSPI1OFF);
        assert_eq!(CLKCON5::UCLKSPIHOFF.mask << CLKCON5::UCLKSPIHOFF.shift, BITM_SYSCLK_CLKCON5_UCLKSPIHOFF);
        assert_eq!(CLKCON5::UCLKSPIHOFF.shift as u32, BITP_SYSCLK_CLKCON5_UCLKSPIHOFF);
        assert_eq!(CLKCON5::UCLKI2COFF.mask << CLKCON5::UCLKI2COFF.shift, BITM_SYSCLK_CLKCON5_UCLKI2COFF);
        assert_eq!(CLKCON5::UCLKI2COFF.shift as u32, BITP_SYSCLK_CLKCON5_UCLKI2COFF);
        assert_eq!(CLKCON5::UCLKUARTOFF.mask << CLKCON5::UCLKUARTOFF.shift, BITM_SYSCLK_CLKCON5_UCLKUARTOFF);
        assert_eq!(CLKCON5::UCLKUARTOFF.shift as u32, BITP_SYSCLK_CLKCON5_UCLKUARTOFF);
        assert_eq!(CLKCON5::UCLKI2SOFF.mask << CLKCON5::UCLKI2SOFF.shift, BITM_SYSCLK_CLKCON5_UCLKI2SOFF);
        assert_eq!(CLKCON5::UCLKI2SOFF.shift as u32, BITP_SYSCLK_CLKCON5_UCLKI2SOFF);
        assert_eq!(CLKCON5::ACLKOFF.mask << CLKCON5::ACLKOFF.shift, BITM_SYSCLK_CLKCON5_ACLKOFF);
        assert_eq!(CLKCON5::ACLKOFF.shift as u32, BITP_SYSCLK_CLKCON5_ACLKOFF);
        assert_eq!(CLKCON5::CTCLKOFF.mask << CLKCON5::CTCLKOFF.shift, BITM_SYSCLK_CLKCON5_CTCLKOFF);
        assert_eq!(CLKCON5::CTCLKOFF.shift as u32, BITP_SYSCLK_CLKCON5_CTCLKOFF);
        assert_eq!(CLKSTAT0::SPLLSTATUS.mask << CLKSTAT0::SPLLSTATUS.shift, BITM_SYSCLK_CLKSTAT0_SPLLSTATUS);
        assert_eq!(CLKSTAT0::SPLLSTATUS.shift as u32, BITP_SYSCLK_CLKSTAT0_SPLLSTATUS);
        assert_eq!(CLKSTAT0::UPLLSTATUS.mask << CLKSTAT0::UPLLSTATUS.shift, BITM_SYSCLK_CLKSTAT0_UPLLSTATUS);
        assert_eq!(CLKSTAT0::UPLLSTATUS.shift as u32, BITP_SYSCLK_CLKSTAT0_UPLLSTATUS);
    }

    #[test]
    fn registers_match_addresses() {
        let sysclk = SYSCLK_BASE.address();
        assert_eq!(REG_SYSCLK_CLKCON0 as usize, sysclk + offset_of!(SysClkRegisters, clkcon0));
        assert_eq!(REG_SYSCLK_CLKCON1 as usize, sysclk + offset_of!(SysClkRegisters, clkcon1));
        assert_eq!(REG_SYSCLK_CLKCON3 as usize, sysclk + offset_of!(SysClkRegisters, clkcon3));
        assert_eq!(REG_SYSCLK_CLKCON4 as usize, sysclk + offset_of!(SysClkRegisters, clkcon4));
        assert_eq!(REG_SYSCLK_CLKCON5 as usize, sysclk + offset_of!(SysClkRegisters, clkcon5));
        assert_eq!(REG_SYSCLK_CLKSTAT0 as usize, sysclk + offset_of!(SysClkRegisters, clkstat0));
    }
}
