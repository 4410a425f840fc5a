// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for pwr.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub PwrRegisters {
        /// Power modes
        (0x0000 => pub pwrmod: ReadWrite<u16, PWRMOD::Register>),
        (0x0002 => _reserved0),
        /// Key protection for PWRMOD
        (0x0004 => pub pwrkey: ReadWrite<u16, PWRKEY::Register>),
        (0x0006 => _reserved1),
        /// PSM Configuration
        (0x0008 => pub psmcon: ReadWrite<u16>),
        (0x000a => _reserved2),
        /// Key protection for OSCCTRL
        (0x000c => pub osckey: ReadWrite<u16, OSCKEY::Register>),
        (0x000e => _reserved3),
        /// Oscillator control
        (0x0010 => pub oscctrl: ReadWrite<u16, OSCCTRL::Register>),
        (0x0012 => _reserved4),
        /// External Interrupt configuration 0
        (0x0020 => pub ei0cfg: ReadWrite<u16, EI0CFG::Register>),
        (0x0022 => _reserved5),
        /// External Interrupt configuration 1
        (0x0024 => pub ei1cfg: ReadWrite<u16, EI1CFG::Register>),
        (0x0026 => _reserved6),
        /// External Interrupt configuration 2
        (0x0028 => pub ei2cfg: ReadWrite<u16, EI2CFG::Register>),
        (0x002a => _reserved7),
        /// External Interrupt clear
        (0x0030 => pub eiclr: ReadWrite<u16, EICLR::Register>),
        (0x0032 => _reserved8),
        /// Non-maskable interrupt clear
        (0x0034 => pub nmiclr: ReadWrite<u16, NMICLR::Register>),
        (0x0036 => _reserved9),
        /// USB Wakeup Status
        (0x0038 => pub usbwkstat: ReadOnly<u16>),
        (0x003a => _reserved10),
        /// Reset status
        (0x0040 => pub rststa: ReadWrite<u16, RSTSTA::Register>),
        (0x0042 => _reserved11),
        /// VCCM Control and Status
        (0x0088 => pub vccmcon: ReadWrite<u16>),
        (0x008a => _reserved12),
        /// VBACK control and status
        (0x008c => pub vbackcon: ReadWrite<u16>),
        (0x008e => _reserved13),
        (0x0090 => @END),
    }
}

register_bitfields![u16,
    pub PWRMOD [
        PWRMOD OFFSET(0) NUMBITS(2) [
            ACTIVE = 0,
            CORE_SLEEP = 1,
            SYS_SLEEP = 2,
            HIBERNATE = 3,
        ],
        RAM0_RET OFFSET(3) NUMBITS(1) [],
    ],
    pub PWRKEY [
        VALUE OFFSET(0) NUMBITS(16) [
            KEY1 = 18521,
            KEY2 = 62075,
        ],
    ],
    pub OSCKEY [
        VALUE OFFSET(0) NUMBITS(16) [
            UNLOCK = 51988,
        ],
    ],
    pub OSCCTRL [
        HFOSCEN OFFSET(0) NUMBITS(1) [],
        LFOSCEN OFFSET(1) NUMBITS(1) [],
        HFXTALEN OFFSET(2) NUMBITS(1) [],
        LFXTALEN OFFSET(3) NUMBITS(1) [],
        HFOSCOK OFFSET(8) NUMBITS(1) [],
        LFOSCOK OFFSET(9) NUMBITS(1) [],
        HFXTALOK OFFSET(10) NUMBITS(1) [],
        LFXTALOK OFFSET(11) NUMBITS(1) [],
    ],
    pub EI0CFG [
        IRQ0MDE OFFSET(0) NUMBITS(3) [],
        IRQ0EN OFFSET(3) NUMBITS(1) [],
        IRQ1MDE OFFSET(4) NUMBITS(3) [],
        IRQ1EN OFFSET(7) NUMBITS(1) [],
        IRQ2MDE OFFSET(8) NUMBITS(3) [],
        IRQ2EN OFFSET(11) NUMBITS(1) [],
        IRQ3MDE OFFSET(12) NUMBITS(3) [],
        IRQ3EN OFFSET(15) NUMBITS(1) [],
    ],
    pub EI1CFG [
        IRQ4MDE OFFSET(0) NUMBITS(3) [],
        IRQ4EN OFFSET(3) NUMBITS(1) [],
        IRQ5MDE OFFSET(4) NUMBITS(3) [],
        IRQ5EN OFFSET(7) NUMBITS(1) [],
        IRQ6MDE OFFSET(8) NUMBITS(3) [],
        IRQ6EN OFFSET(11) NUMBITS(1) [],
        IRQ7MDE OFFSET(12) NUMBITS(3) [],
        IRQ7EN OFFSET(15) NUMBITS(1) [],
    ],
    pub EI2CFG [
        IRQ8MDE OFFSET(0) NUMBITS(3) [],
        IRQ8EN OFFSET(3) NUMBITS(1) [],
    ],
    pub EICLR [
        IRQ0 OFFSET(0) NUMBITS(1) [],
        IRQ1 OFFSET(1) NUMBITS(1) [],
        IRQ2 OFFSET(2) NUMBITS(1) [],
        IRQ3 OFFSET(3) NUMBITS(1) [],
        IRQ4 OFFSET(4) NUMBITS(1) [],
        IRQ5 OFFSET(5) NUMBITS(1) [],
        IRQ6 OFFSET(6) NUMBITS(1) [],
        IRQ7 OFFSET(7) NUMBITS(1) [],
        IRQ8 OFFSET(8) NUMBITS(1) [],
    ],
    pub NMICLR [
        CLR OFFSET(0) NUMBITS(1) [],
    ],
    pub RSTSTA [
        POR OFFSET(0) NUMBITS(1) [],
        EXTRST OFFSET(1) NUMBITS(1) [],
        WDRST OFFSET(2) NUMBITS(1) [],
        SWRST OFFSET(3) NUMBITS(1) [],
    ],
];

pub const PWR_BASE: StaticRef<PwrRegisters> =
    unsafe { StaticRef::new(0x4000_2400 as *const PwrRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(PWRMOD::PWRMOD.mask << PWRMOD::PWRMOD.shift, BITM_PWR_PWRMOD_PWRMOD);
        assert_eq!(PWRMOD::PWRMOD.shift as u32, BITP_PWR_PWRMOD_PWRMOD);
        assert_eq!(PWRMOD::RAM0_RET.mask << PWRMOD::RAM0_RET.shift, BITM_PWR_PWRMOD_RAM0_RET);
        assert_eq!(PWRMOD::RAM0_RET.shift as u32, BITP_PWR_PWRMOD_RAM0_RET);
        assert_eq!(PWRKEY::VALUE.mask << PWRKEY::VALUE.shift, BITM_PWR_PWRKEY_VALUE);
        assert_eq!(PWRKEY::VALUE.shift as u32, BITP_PWR_PWRKEY_VALUE);
        assert_eq!(OSCKEY::VALUE.mask << OSCKEY::VALUE.shift, BITM_PWR_OSCKEY_VALUE);
        assert_eq!(OSCKEY::VALUE.shift as u32, BITP_PWR_OSCKEY_VALUE);
        assert_eq!(OSCCTRL::HFOSCEN.mask << OSCCTRL::HFOSCEN.shift, BITM_PWR_OSCCTRL_HFOSCEN);
        assert_eq!(OSCCTRL::HFOSCEN.shift as u32, BITP_PWR_OSCCTRL_HFOSCEN);
        assert_eq!(OSCCTRL::LFOSCEN.mask << OSCCTRL::LFOSCEN.shift, BITM_PWR_OSCCTRL_LFOSCEN);
        assert_eq!(OSCCTRL::LFOSCEN.shift as u32, BITP_PWR_OSCCTRL_LFOSCEN);
        assert_eq!(OSCCTRL::HFXTALEN.mask << OSCCTRL::HFXTALEN.shift, BITM_PWR_OSCCTRL_HFXTALEN);
        assert_eq!(OSCCTRL::HFXTALEN.shift as u32, BITP_PWR_OSCCTRL_HFXTALEN);
        assert_eq!(OSCCTRL::LFXTALEN.mask << OSCCTRL::LFXTALEN.shift, BITM_PWR_OSCCTRL_LFXTALEN);
        assert_eq!(OSCCTRL::LFXTALEN.shift as u32, BITP_PWR_OSCCTRL_LFXTALEN);
        assert_eq!(OSCCTRL::HFOSCOK.mask << OSCCTRL::HFOSCOK.shift, BITM_PWR_OSCCTRL_HFOSCOK);
        assert_eq!(OSCCTRL::HFOSCOK.shift as u32, BITP_PWR_OSCCTRL_HFOSCOK);
        assert_eq!(OSCCTRL::LFOSCOK.mask << OSCCTRL::LFOSCOK.shift, BITM_PWR_OSCCTRL_LFOSCOK);
        assert_eq!(OSCCTRL::LFOSCOK.shift as u32, BITP_PWR_OSCCTRL_LFOSCOK);
        assert_eq!(OSCCTRL::HFXTALOK.mask << OSCCTRL::HFXTALOK.shift, BITM_PWR_OSCCTRL_HFXTALOK);
        assert_eq!(OSCCTRL::HFXTALOK.shift as u32, BITP_PWR_OSCCTRL_HFXTALOK);
        assert_eq!(OSCCTRL::LFXTALOK.mask << OSCCTRL::LFXTALOK.shift, BITM_PWR_OSCCTRL_LFXTALOK);
        assert_eq!(OSCCTRL::LFXTALOK.shift as u32, BITP_PWR_OSCCTRL_LFXTALOK);
        assert_eq!(EI0CFG::IRQ0MDE.mask << EI0CFG::IRQ0MDE.shift, BITM_PWR_EI0CFG_IRQ0MDE);
        assert_eq!(EI0CFG::IRQ0MDE.shift as u32, BITP_PWR_EI0CFG_IRQ0MDE);
        assert_eq!(EI0CFG::IRQ0EN.mask << EI0CFG::IRQ0EN.shift, BITM_PWR_EI0CFG_IRQ0EN);
        assert_eq!(EI0CFG::IRQ0EN.shift as u32, BITP_PWR_EI0CFG_IRQ0EN);
        assert_eq!(EI0CFG::IRQ1MDE.mask << EI0CFG::IRQ1MDE.shift, BITM_PWR_EI0CFG_IRQ1MDE);
        assert_eq!(EI0CFG::IRQ1MDE.shift as u32, BITP_PWR_EI0CFG_IRQ1MDE);
        assert_eq!(EI0CFG::IRQ1EN.mask << EI0CFG::IRQ1EN.shift, BITM_PWR_EI0CFG_IRQ1EN);
        assert_eq!(EI0CFG::IRQ1EN.shift as u32, BITP_PWR_EI0CFG_IRQ1EN);
        assert_eq!(EI0CFG::IRQ2MDE.mask << EI0CFG::IRQ2MDE.shift, BITM_PWR_EI0CFG_IRQ2MDE);
        assert_eq!(EI0CFG::IRQ2MDE.shift as u32, BITP_PWR_EI0CFG_IRQ2MDE);
        assert_eq!(EI0CFG::IRQ2EN.mask << EI0CFG::IRQ2EN.shift, BITM_PWR_EI0CFG_IRQ2EN);
        assert_eq!(EI0CFG::IRQ2EN.shift as u32, BITP_PWR_EI0CFG_IRQ2EN);
        assert_eq!(EI0CFG::IRQ3MDE.mask << EI0CFG::IRQ3MDE.shift, BITM_PWR_EI0CFG_IRQ3MDE);
        assert_eq!(EI0CFG::IRQ3MDE.shift as u32, BITP_PWR_EI0CFG_IRQ3MDE);
        assert_eq!(EI0CFG::IRQ3EN.mask << EI0CFG::IRQ3EN.shift, BITM_PWR_EI0CFG_IRQ3EN);
        assert_eq!(EI0CFG::IRQ3EN.shift as u32, BITP_PWR_EI0CFG_IRQ3EN);
        assert_eq!(EI1CFG::IRQ4MDE.mask << EI1CFG::IRQ4MDE.shift, BITM_PWR_EI1CFG_IRQ4MDE);
        assert_eq!(EI1CFG::IRQ4MDE.shift as u32, BITP_PWR_EI1CFG_IRQ4MDE);
        assert_eq!(EI1CFG::IRQ4EN.mask << EI1CFG::IRQ4EN.shift, BITM_PWR_EI1CFG_IRQ4EN);
        assert_eq!(EI1CFG::IRQ4EN.shift as u32, BITP_PWR_EI1CFG_IRQ4EN);
        assert_eq!(EI1CFG::IRQ5MDE.mask << EI1CFG::IRQ5MDE.shift, BITM_PWR_EI1CFG_IRQ5MDE);
        assert_eq!(EI1CFG::IRQ5MDE.shift as u32, BITP_PWR_EI1CFG_IRQ5MDE);
        assert_eq!(EI1CFG::IRQ5EN.mask << EI1CFG::IRQ5EN.shift, BITM_PWR_EI1CFG_IRQ5EN);
        assert_eq!(EI1CFG::IRQ5EN.shift as u32, BITP_PWR_EI1CFG_IRQ5EN);
        assert_eq!(EI1CFG::IRQ6MDE.mask << EI1CFG::IRQ6MDE.shift, BITM_PWR_EI1CFG_IRQ6MDE);
        assert_eq!(EI1CFG::IRQ6MDE.shift as u32, BITP_PWR_EI1CFG_IRQ6MDE);
        assert_eq!(EI1CFG::IRQ6EN.mask << EI1CFG::IRQ6EN.shift, BITM_PWR_EI1CFG_IRQ6EN);
        assert_eq!(EI1CFG::IRQ6EN.shift as u32, BITP_PWR_EI1CFG_IRQ6EN);
        assert_eq!(EI1CFG::IRQ7MDE.mask << EI1CFG::IRQ7MDE.shift, BITM_PWR_EI1CFG_IRQ7MDE);
        assert_eq!(EI1CFG::IRQ7MDE.shift as u32, BITP_PWR_EI1CFG_IRQ7MDE);
        assert_eq!(EI1CFG::IRQ7EN.mask << EI1CFG::IRQ7EN.shift, BITM_PWR_EI1CFG_IRQ7EN);
        assert_eq!(EI1CFG::IRQ7EN.shift as u32, BITP_PWR_EI1CFG_IRQ7EN);
        assert_eq!(EI2CFG::IRQ8MDE.mask << EI2CFG::IRQ8MDE.shift, BITM_PWR_EI2CFG_IRQ8MDE);
        assert_eq!(EI2CFG::IRQ8MDE.shift as u32, BITP_PWR_EI2CFG_IRQ8MDE);
        assert_eq!(EI2CFG::IRQ8EN.mask << EI2CFG::IRQ8EN.shift, BITM_PWR_EI2CFG_IRQ8EN);
        assert_eq!(EI2CFG::IRQ8EN.shift as u32, BITP_PWR_EI2CFG_IRQ8EN);
        assert_eq!(EICLR::IRQ0.mask << EICLR::IRQ0.shift, BITM_PWR_EICLR_IRQ0);
        assert_eq!(EICLR::IRQ0.shift as u32, BITP_PWR_EICLR_IRQ0);
        assert_eq!(EICLR::IRQ1.mask << EICLR::IRQ1.shift, BITM_PWR_EICLR_IRQ1);
        assert_eq!(EICLR::IRQ1.shift as u32, BITP_PWR_EICLR_IRQ1);
        assert_eq!(EICLR::IRQ2.mask << EICLR::IRQ2.shift, BITM_PWR_EICLR_IRQ2);
        assert_eq!(EICLR::IRQ2.shift as u32, BITP_PWR_EICLR_IRQ2);
        assert_eq!(EICLR::IRQ3.mask << EICLR::IRQ3.shift, BITM_PWR_EICLR_IRQ3);
        assert_eq!(EICLR::IRQ3.shift as u32, BITP_PWR_EICLR_IRQ3);
        assert_eq!(EICLR::IRQ4.mask << EICLR::IRQ4.shift, BITM_PWR_EICLR_IRQ4);
        assert_eq!(EICLR::IRQ4.shift as u32, BITP_PWR_EICLR_IRQ4);
        assert_eq!(EICLR::IRQ5.mask << EICLR::IRQ5.shift, BITM_PWR_EICLR_IRQ5);
        assert_eq!(EICLR::IRQ5.shift as u32, BITP_PWR_EICLR_IRQ5);
        assert_eq!(EICLR::IRQ6.mask << EICLR::IRQ6.shift, BITM_PWR_EICLR_IRQ6);
        assert_eq!(EICLR::IRQ6.shift as u32, BITP_PWR_EICLR_IRQ6);
        assert_eq!(EICLR::IRQ7.mask << EICLR::IRQ7.shift, BITM_PWR_EICLR_IRQ7);
        assert_eq!(EICLR::IRQ7.shift as u32, BITP_PWR_EICLR_IRQ7);
        assert_eq!(EICLR::IRQ8.mask << EICLR::IRQ8.shift, BITM_PWR_EICLR_IRQ8);
        assert_eq!(EICLR::IRQ8.shift as u32, BITP_PWR_EICLR_IRQ8);
        assert_eq!(NMICLR::CLR.mask << NMICLR::CLR.shift, BITM_PWR_NMICLR_CLR);
        assert_eq!(NMICLR::CLR.shift as u32, BITP_PWR_NMICLR_CLR);
        assert_eq!(RSTSTA::POR.mask << RSTSTA::POR.shift, BITM_PWR_RSTSTA_POR);
        assert_eq!(RSTSTA::POR.shift as u32, BITP_PWR_RSTSTA_POR);
        assert_eq!(RSTSTA::EXTRST.mask << RSTSTA::EXTRST.shift, BITM_PWR_RSTSTA_EXTRST);
        assert_eq!(RSTSTA::EXTRST.shift as u32, BITP_PWR_RSTSTA_EXTRST);
        assert_eq!(RSTSTA::WDRST.mask << RSTSTA::WDRST.shift, BITM_PWR_RSTSTA_WDRST);
        assert_eq!(RSTSTA::WDRST.shift as u32, BITP_PWR_RSTSTA_WDRST);
        assert_eq!(RSTSTA::SWRST.mask << RSTSTA::SWRST.shift, BITM_PWR_RSTSTA_SWRST);
        assert_eq!(RSTSTA::SWRST.shift as u32, BITP_PWR_RSTSTA_SWRST);
    }

    #[test]
    fn registers_match_addresses() {
        let pwr = PWR_BASE.address();
        assert_eq!(REG_PWR_PWRMOD as usize, pwr + offset_of!(PwrRegisters, pwrmod));
        assert_eq!(REG_PWR_PWRKEY as usize, pwr + offset_of!(PwrRegisters, pwrkey));
        assert_eq!(REG_PWR_PSMCON as usize, pwr + offset_of!(PwrRegisters, psmcon));
        assert_eq!(REG_PWR_OSCKEY as usize, pwr + offset_of!(PwrRegisters, osckey));
        assert_eq!(REG_PWR_OSCCTRL as usize, pwr + offset_of!(PwrRegisters, oscctrl));
        assert_eq!(REG_PWR_EI0CFG as usize, pwr + offset_of!(PwrRegisters, ei0cfg));
        assert_eq!(REG_PWR_EI1CFG as usize, pwr + offset_of!(PwrRegisters, ei1cfg));
        assert_eq!(REG_PWR_EI2CFG as usize, pwr + offset_of!(PwrRegisters, ei2cfg));
        assert_eq!(REG_PWR_EICLR as usize, pwr + offset_of!(PwrRegisters, eiclr));
        assert_eq!(REG_PWR_NMICLR as usize, pwr + offset_of!(PwrRegisters, nmiclr));
        assert_eq!(REG_PWR_USBWKSTAT as usize, pwr + offset_of!(PwrRegisters, usbwkstat));
        assert_eq!(REG_PWR_RSTSTA as usize, pwr + offset_of!(PwrRegisters, rststa));
        assert_eq!(REG_PWR_VCCMCON as usize, pwr + offset_of!(PwrRegisters, vccmcon));
        assert_eq!(REG_PWR_VBACKCON as usize, pwr + offset_of!(PwrRegisters, vbackcon));
    }
}
