// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for nvic.

use crate::static_ref::StaticRef;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub NvicRegisters {
        (0x0000 => _reserved0),
        /// Interrupt Control Type
        (0x0004 => pub intnum: ReadWrite<u32, INTNUM::Register>),
        (0x0008 => _reserved1),
        /// Systick Control and Status
        (0x0010 => pub stksta: ReadWrite<u32, STKSTA::Register>),
        /// Systick Reload Value
        (0x0014 => pub stkld: ReadWrite<u32, STKLD::Register>),
        /// Systick Current Value
        (0x0018 => pub stkval: ReadWrite<u32, STKVAL::Register>),
        /// Systick Calibration Value
        (0x001c => pub stkcal: ReadWrite<u32, STKCAL::Register>),
        (0x0020 => _reserved2),
        /// IRQ0..31 Set_Enable
        (0x0100 => pub intsete0: ReadWrite<u32>),
        /// IRQ32..63 Set_Enable
        (0x0104 => pub intsete1: ReadWrite<u32>),
        (0x0108 => _reserved3),
        /// IRQ0..31 Clear_Enable
        (0x0180 => pub intclre0: ReadWrite<u32>),
        /// IRQ32..63 Clear_Enable
        (0x0184 => pub intclre1: ReadWrite<u32>),
        (0x0188 => _reserved4),
        /// IRQ0..31 Set_Pending
        (0x0200 => pub intsetp0: ReadWrite<u32>),
        /// IRQ32..63 Set_Pending
        (0x0204 => pub intsetp1: ReadWrite<u32>),
        (0x0208 => _reserved5),
        /// IRQ0..31 Clear_Pending
        (0x0280 => pub intclrp0: ReadWrite<u32>),
        /// IRQ32..63 Clear_Pending
        (0x0284 => pub intclrp1: ReadWrite<u32>),
        (0x0288 => _reserved6),
        /// IRQ0..31 Active Bit
        (0x0300 => pub intact0: ReadWrite<u32>),
        /// IRQ32..63 Active Bit
        (0x0304 => pub intact1: ReadWrite<u32>),
        (0x0308 => _reserved7),
        /// IRQ0..3 Priority
        (0x0400 => pub intpri0: ReadWrite<u32>),
        /// IRQ4..7 Priority
        (0x0404 => pub intpri1: ReadWrite<u32>),
        /// IRQ8..11 Priority
        (0x0408 => pub intpri2: ReadWrite<u32>),
        /// IRQ12..15 Priority
        (0x040c => pub intpri3: ReadWrite<u32>),
        /// IRQ16..19 Priority
        (0x0410 => pub intpri4: ReadWrite<u32>),
        /// IRQ20..23 Priority
        (0x0414 => pub intpri5: ReadWrite<u32>),
        /// IRQ24..27 Priority
        (0x0418 => pub intpri6: ReadWrite<u32>),
        /// IRQ28..31 Priority
        (0x041c => pub intpri7: ReadWrite<u32>),
        /// IRQ32..35 Priority
        (0x0420 => pub intpri8: ReadWrite<u32>),
        /// IRQ36..39 Priority
        (0x0424 => pub intpri9: ReadWrite<u32>),
        /// IRQ40..43 Priority
        (0x0428 => pub intpri10: ReadWrite<u32>),
        (0x042c => _reserved8),
        /// CPUID Base
        (0x0d00 => pub intcpid: ReadWrite<u32>),
        /// Interrupt Control State
        (0x0d04 => pub intsta: ReadWrite<u32, INTSTA::Register>),
        /// Vector Table Offset
        (0x0d08 => pub intvec: ReadWrite<u32, INTVEC::Register>),
        /// Application Interrupt/Reset Control
        (0x0d0c => pub intairc: ReadWrite<u32, INTAIRC::Register>),
        /// System Control
        (0x0d10 => pub intcon0: ReadWrite<u16, INTCON0::Register>),
        (0x0d12 => _reserved9),
        /// Configuration Control
        (0x0d14 => pub intcon1: ReadWrite<u32, INTCON1::Register>),
        /// System Handlers 4-7 Priority
        (0x0d18 => pub intshprio0: ReadWrite<u32>),
        /// System Handlers 8-11 Priority
        (0x0d1c => pub intshprio1: ReadWrite<u32>),
        /// System Handlers 12-15 Priority
        (0x0d20 => pub intshprio3: ReadWrite<u32>),
        /// System Handler Control and State
        (0x0d24 => pub intshcsr: ReadWrite<u32, INTSHCSR::Register>),
        /// Configurable Fault Status
        (0x0d28 => pub intcfsr: ReadWrite<u32, INTCFSR::Register>),
        /// Hard Fault Status
        (0x0d2c => pub inthfsr: ReadWrite<u32, INTHFSR::Register>),
        /// Debug Fault Status
        (0x0d30 => pub intdfsr: ReadWrite<u32>),
        /// Mem Manage Address
        (0x0d34 => pub intmmar: ReadWrite<u32>),
        /// Bus Fault Address
        (0x0d38 => pub intbfar: ReadWrite<u32>),
        /// Auxiliary Fault Status
        (0x0d3c => pub intafsr: ReadWrite<u32>),
        /// Processor Feature Register 0
        (0x0d40 => pub intpfr0: ReadWrite<u32>),
        /// Processor Feature Register 1
        (0x0d44 => pub intpfr1: ReadWrite<u32>),
        /// Debug Feature Register 0
        (0x0d48 => pub intdfr0: ReadWrite<u32>),
        /// Auxiliary Feature Register 0
        (0x0d4c => pub intafr0: ReadWrite<u32>),
        /// Memory Model Feature Register 0
        (0x0d50 => pub intmmfr0: ReadWrite<u32>),
        /// Memory Model Feature Register 1
        (0x0d54 => pub intmmfr1: ReadWrite<u32>),
        /// Memory Model Feature Register 2
        (0x0d58 => pub intmmfr2: ReadWrite<u32>),
        /// Memory Model Feature Register 3
        (0x0d5c => pub intmmfr3: ReadWrite<u32>),
        /// ISA Feature Register 0
        (0x0d60 => pub intisar0: ReadWrite<u32>),
        /// ISA Feature Register 1
        (0x0d64 => pub intisar1: ReadWrite<u32>),
        /// ISA Feature Register 2
        (0x0d68 => pub intisar2: ReadWrite<u32>),
        /// ISA Feature Register 3
        (0x0d6c => pub intisar3: ReadWrite<u32>),
        /// ISA Feature Register 4
        (0x0d70 => pub intisar4: ReadWrite<u32>),
        (0x0d74 => _reserved10),
        /// Software Trigger Interrupt Register
        (0x0f00 => pub inttrgi: ReadWrite<u32, INTTRGI::Register>),
        (0x0f04 => _reserved11),
        /// Peripheral Identification Register 4
        (0x0fd0 => pub intpid4: ReadWrite<u32>),
        /// Peripheral Identification Register 5
        (0x0fd4 => pub intpid5: ReadWrite<u32>),
        /// Peripheral Identification Register 6
        (0x0fd8 => pub intpid6: ReadWrite<u32>),
        /// Peripheral Identification Register 7
        (0x0fdc => pub intpid7: ReadWrite<u32>),
        /// Peripheral Identification Bits7:0
        (0x0fe0 => pub intpid0: ReadWrite<u32>),
        /// Peripheral Identification Bits15:8
        (0x0fe4 => pub intpid1: ReadWrite<u32>),
        /// Peripheral Identification Bits16:23
        (0x0fe8 => pub intpid2: ReadWrite<u32>),
        /// Peripheral Identification Bits24:31
        (0x0fec => pub intpid3: ReadWrite<u32>),
        /// Component Identification Bits7:0
        (0x0ff0 => pub intcid0: ReadWrite<u32>),
        /// Component Identification Bits15:8
        (0x0ff4 => pub intcid1: ReadWrite<u32>),
        /// Component Identification Bits16:23
        (0x0ff8 => pub intcid2: ReadWrite<u32>),
        /// Component Identification Bits24:31
        (0x0ffc => pub intcid3: ReadWrite<u32>),
        (0x1000 => @END),
    }
}

register_bitfields![u16,
    pub INTCON0 [
        SLEEPONEXIT OFFSET(1) NUMBITS(1) [],
        SLEEPDEEP OFFSET(2) NUMBITS(1) [],
        SEVONPEND OFFSET(4) NUMBITS(1) [],
    ],
];

register_bitfields![u32,
    pub INTNUM [
        INTNUM OFFSET(0) NUMBITS(9) [],
    ],
    pub STKSTA [
        ENABLE OFFSET(0) NUMBITS(1) [],
        TICKINT OFFSET(1) NUMBITS(1) [],
        CLKSOURCE OFFSET(2) NUMBITS(1) [],
        COUNTFLAG OFFSET(16) NUMBITS(1) [],
    ],
    pub STKLD [
        RELOAD OFFSET(0) NUMBITS(24) [],
    ],
    pub STKVAL [
        CURRENT OFFSET(0) NUMBITS(24) [],
    ],
    pub STKCAL [
        TENMS OFFSET(0) NUMBITS(24) [],
        SKEW OFFSET(30) NUMBITS(1) [],
        NOREF OFFSET(31) NUMBITS(1) [],
    ],
    pub INTSTA [
        VECTACTIVE OFFSET(0) NUMBITS(9) [],
        RETTOBASE OFFSET(11) NUMBITS(1) [],
        VECTPENDING OFFSET(12) NUMBITS(9) [],
        ISRPENDING OFFSET(22) NUMBITS(1) [],
        PENDSTCLR OFFSET(25) NUMBITS(1) [],
        PENDSTSET OFFSET(26) NUMBITS(1) [],
        PENDSVCLR OFFSET(27) NUMBITS(1) [],
        PENDSVSET OFFSET(28) NUMBITS(1) [],
        NMIPENDSET OFFSET(31) NUMBITS(1) [],
    ],
    pub INTVEC [
        TBLOFF OFFSET(7) NUMBITS(22) [],
        TBLBASE OFFSET(29) NUMBITS(1) [],
    ],
    pub INTAIRC [
        VECTRESET OFFSET(0) NUMBITS(1) [],
        VECTCLRACTIVE OFFSET(1) NUMBITS(1) [],
        SYSRESETREQ OFFSET(2) NUMBITS(1) [],
        PRIGROUP OFFSET(8) NUMBITS(3) [],
        ENDIANNESS OFFSET(15) NUMBITS(1) [],
        VECTKEY OFFSET(16) NUMBITS(16) [
            KEY = 1530,
        ],
    ],
    pub INTCON1 [
        NONBASETHRDENA OFFSET(0) NUMBITS(1) [],
        USERSETMPEND OFFSET(1) NUMBITS(1) [],
        UNALIGN_TRP OFFSET(3) NUMBITS(1) [],
        DIV_0_TRP OFFSET(4) NUMBITS(1) [],
        BFHFNMIGN OFFSET(8) NUMBITS(1) [],
        STKALIGN OFFSET(9) NUMBITS(1) [],
    ],
    pub INTSHCSR [
        MEMFAULTACT OFFSET(0) NUMBITS(1) [],
        BUSFAULTACT OFFSET(1) NUMBITS(1) [],
        USGFAULTACT OFFSET(3) NUMBITS(1) [],
        SVCALLACT OFFSET(7) NUMBITS(1) [],
        MONITORACT OFFSET(8) NUMBITS(1) [],
        PENDSVACT OFFSET(10) NUMBITS(1) [],
        SYSTICKACT OFFSET(11) NUMBITS(1) [],
        USGFAULTPENDED OFFSET(12) NUMBITS(1) [],
        MEMFAULTPENDED OFFSET(13) NUMBITS(1) [],
        BUSFAULTPENDED OFFSET(14) NUMBITS(1) [],
        SVCALLPENDED OFFSET(15) NUMBITS(1) [],
        MEMFAULTENA OFFSET(16) NUMBITS(1) [],
        BUSFAULTENA OFFSET(17) NUMBITS(1) [],
        USGFAULTENA OFFSET(18) NUMBITS(1) [],
    ],
    pub INTCFSR [
        MMFSR OFFSET(0) NUMBITS(8) [],
        BFSR OFFSET(8) NUMBITS(8) [],
        UFSR OFFSET(16) NUMBITS(16) [],
    ],
    pub INTHFSR [
        VECTTBL OFFSET(1) NUMBITS(1) [],
        FORCED OFFSET(30) NUMBITS(1) [],
        DEBUGEVT OFFSET(31) NUMBITS(1) [],
    ],
    pub INTTRGI [
        INTID OFFSET(0) NUMBITS(9) [],
    ],
];

pub const NVIC_BASE: StaticRef<NvicRegisters> =
    unsafe { StaticRef::new(0xE000_E000 as *const NvicRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(INTNUM::INTNUM.mask << INTNUM::INTNUM.shift, BITM_NVIC_INTNUM_INTNUM);
        assert_eq!(INTNUM::INTNUM.shift as u32, BITP_NVIC_INTNUM_INTNUM);
        assert_eq!(STKSTA::ENABLE.mask << STKSTA::ENABLE.shift, BITM_NVIC_STKSTA_ENABLE);
        assert_eq!(STKSTA::ENABLE.shift as u32, BITP_NVIC_STKSTA_ENABLE);
        assert_eq!(STKSTA::TICKINT.mask << STKSTA::TICKINT.shift, BITM_NVIC_STKSTA_TICKINT);
        assert_eq!(STKSTA::TICKINT.shift as u32, BITP_NVIC_STKSTA_TICKINT);
        assert_eq!(STKSTA::CLKSOURCE.mask << STKSTA::CLKSOURCE.shift, BITM_NVIC_STKSTA_CLKSOURCE);
        assert_eq!(STKSTA::CLKSOURCE.shift as u32, BITP_NVIC_STKSTA_CLKSOURCE);
        assert_eq!(STKSTA::COUNTFLAG.mask << STKSTA::COUNTFLAG.shift, BITM_NVIC_STKSTA_COUNTFLAG);
        assert_eq!(STKSTA::COUNTFLAG.shift as u32, BITP_NVIC_STKSTA_COUNTFLAG);
        assert_eq!(STKLD::RELOAD.mask << STKLD::RELOAD.shift, BITM_NVIC_STKLD_RELOAD);
        assert_eq!(STKLD::RELOAD.shift as u32, BITP_NVIC_STKLD_RELOAD);
        assert_eq!(STKVAL::CURRENT.mask << STKVAL::CURRENT.shift, BITM_NVIC_STKVAL_CURRENT);
        assert_eq!(STKVAL::CURRENT.shift as u32, BITP_NVIC_STKVAL_CURRENT);
        assert_eq!(STKCAL::TENMS.mask << STKCAL::TENMS.shift, BITM_NVIC_STKCAL_TENMS);
        assert_eq!(STKCAL::TENMS.shift as u32, BITP_NVIC_STKCAL_TENMS);
        assert_eq!(STKCAL::SKEW.mask << STKCAL::SKEW.shift, BITM_NVIC_STKCAL_SKEW);
        assert_eq!(STKCAL::SKEW.shift as u32, BITP_NVIC_STKCAL_SKEW);
        assert_eq!(STKCAL::NOREF.mask << STKCAL::NOREF.shift, BITM_NVIC_STKCAL_NOREF);
        assert_eq!(STKCAL::NOREF.shift as u32, BITP_NVIC_STKCAL_NOREF);
        assert_eq!(INTSTA::VECTACTIVE.mask << INTSTA::VECTACTIVE.shift, BITM_NVIC_INTSTA_VECTACTIVE);
        assert_eq!(INTSTA::VECTACTIVE.shift as u32, BITP_NVIC_INTSTA_VECTACTIVE);
        assert_eq!(INTSTA::RETTOBASE.mask << INTSTA::RETTOBASE.shift, BITM_NVIC_INTSTA_RETTOBASE);
        assert_eq!(INTSTA::RETTOBASE.shift as u32, BITP_NVIC_INTSTA_RETTOBASE);
        assert_eq!(INTSTA::VECTPENDING.mask << INTSTA::VECTPENDING.shift, BITM_NVIC_INTSTA_VECTPENDING);
        assert_eq!(INTSTA::VECTPENDING.shift as u32, BITP_NVIC_INTSTA_VECTPENDING);
        assert_eq!(INTSTA::ISRPENDING.mask << INTSTA::ISRPENDING.shift, BITM_NVIC_INTSTA_ISRPENDING);
        assert_eq!(INTSTA::ISRPENDING.shift as u32, BITP_NVIC_INTSTA_ISRPENDING);
        assert_eq!(INTSTA::PENDSTCLR.mask << INTSTA::PENDSTCLR.shift, BITM_NVIC_INTSTA_PENDSTCLR);
        assert_eq!(INTSTA::PENDSTCLR.shift as u32, BITP_NVIC_INTSTA_PENDSTCLR);
        assert_eq!(INTSTA::PENDSTSET.mask << INTSTA::PENDSTSET.shift, BITM_NVIC_INTSTA_PENDSTSET);
        assert_eq!(INTSTA::PENDSTSET.shift as u32, BITP_NVIC_INTSTA_PENDSTSET);
        assert_eq!(INTSTA::PENDSVCLR.mask << INTSTA::PENDSVCLR.shift, BITM_NVIC_INTSTA_PENDSVCLR);
        assert_eq!(INTSTA::PENDSVCLR.shift as u32, BITP_NVIC_INTSTA_PENDSVCLR);
        assert_eq!(INTSTA::PENDSVSET.mask << INTSTA::PENDSVSET.shift, BITM_NVIC_INTSTA_PENDSVSET);
        assert_eq!(INTSTA::PENDSVSET.shift as u32, BITP_NVIC_INTSTA_PENDSVSET);
        assert_eq!(INTSTA::NMIPENDSET.mask << INTSTA::NMIPENDSET.shift, BITM_NVIC_INTSTA_NMIPENDSET);
        assert_eq!(INTSTA::NMIPENDSET.shift as u32, BITP_NVIC_INTSTA_NMIPENDSET);
        assert_eq!(INTVEC::TBLOFF.mask << INTVEC::TBLOFF.shift, BITM_NVIC_INTVEC_TBLOFF);
        assert_eq!(INTVEC::TBLOFF.shift as u32, BITP_NVIC_INTVEC_TBLOFF);
        assert_eq!(INTVEC::TBLBASE.mask << INTVEC::TBLBASE.shift, BITM_NVIC_INTVEC_TBLBASE);
        assert_eq!(INTVEC::TBLBASE.shift as u32, BITP_NVIC_INTVEC_TBLBASE);
        assert_eq!(INTAIRC::VECTRESET.mask << INTAIRC::VECTRESET.shift, BITM_NVIC_INTAIRC_VECTRESET);
        assert_eq!(INTAIRC::VECTRESET.shift as u32, BITP_NVIC_INTAIRC_VECTRESET);
        assert_eq!(INTAIRC::VECTCLRACTIVE.mask << INTAIRC::VECTCLRACTIVE.shift, BITM_NVIC_INTAIRC_VECTCLRACTIVE);
        assert_eq!(INTAIRC::VECTCLRACTIVE.shift as u32, BITP_NVIC_INTAIRC_VECTCLRACTIVE);
        assert_eq!(INTAIRC::SYSRESETREQ.mask << INTAIRC::SYSRESETREQ.shift, BITM_NVIC_INTAIRC_SYSRESETREQ);
        assert_eq!(INTAIRC::SYSRESETREQ.shift as u32, BITP_NVIC_INTAIRC_SYSRESETREQ);
        assert_eq!(INTAIRC::PRIGROUP.mask << INTAIRC::PRIGROUP.shift, BITM_NVIC_INTAIRC_PRIGROUP);
        assert_eq!(INTAIRC::PRIGROUP.shift as u32, BITP_NVIC_INTAIRC_PRIGROUP);
        assert_eq!(INTAIRC::ENDIANNESS.mask << INTAIRC::ENDIANNESS.shift, BITM_NVIC_INTAIRC_ENDIANNESS);
        assert_eq!(INTAIRC::ENDIANNESS.shift as u32, BITP_NVIC_INTAIRC_ENDIANNESS);
        assert_eq!(INTAIRC::VECTKEY.mask << INTAIRC::VECTKEY.shift, BITM_NVIC_INTAIRC_VECTKEY);
        assert_eq!(INTAIRC::VECTKEY.shift as u32, BITP_NVIC_INTAIRC_VECTKEY);
        assert_eq!(INTCON0::SLEEPONEXIT.mask << INTCON0::SLEEPONEXIT.shift, BITM_NVIC_INTCON0_SLEEPONEXIT);
        assert_eq!(INTCON0::SLEEPONEXIT.shift as u32, BITP_NVIC_INTCON0_SLEEPONEXIT);
        assert_eq!(INTCON0::SLEEPDEEP.mask << INTCON0::SLEEPDEEP.shift, BITM_NVIC_INTCON0_SLEEPDEEP);
        assert_eq!(INTCON0::SLEEPDEEP.shift as u32, BITP_NVIC_INTCON0_SLEEPDEEP);
        assert_eq!(INTCON0::SEVONPEND.mask << INTCON0::SEVONPEND.shift, BITM_NVIC_INTCON0_SEVONPEND);
        assert_eq!(INTCON0::SEVONPEND.shift as u32, BITP_NVIC_INTCON0_SEVONPEND);
        assert_eq!(INTCON1::NONBASETHRDENA.mask << INTCON1::NONBASETHRDENA.shift, BITM_NVIC_INTCON1_NONBASETHRDENA);
        assert_eq!(INTCON1::NONBASETHRDENA.shift as u32, BITP_NVIC_INTCON1_NONBASETHRDENA);
        assert_eq!(INTCON1::USERSETMPEND.mask << INTCON1::USERSETMPEND.shift, BITM_NVIC_INTCON1_USERSETMPEND);
        assert_eq!(INTCON1::USERSETMPEND.shift as u32, BITP_NVIC_INTCON1_USERSETMPEND);
        assert_eq!(INTCON1::UNALIGN_TRP.mask << INTCON1::UNALIGN_TRP.shift, BITM_NVIC_INTCON1_UNALIGN_TRP);
        assert_eq!(INTCON1::UNALIGN_TRP.shift as u32, BITP_NVIC_INTCON1_UNALIGN_TRP);
        assert_eq!(INTCON1::DIV_0_TRP.mask << INTCON1::DIV_0_TRP.shift, BITM_NVIC_INTCON1_DIV_0_TRP);
        assert_eq!(INTCON1::DIV_0_TRP.shift as u32, BITP_NVIC_INTCON1_DIV_0_TRP);
        assert_eq!(INTCON1::BFHFNMIGN.mask << INTCON1::BFHFNMIGN.shift, BITM_NVIC_INTCON1_BFHFNMIGN);
        assert_eq!(INTCON1::BFHFNMIGN.shift as u32, BITP_NVIC_INTCON1_BFHFNMIGN);
        assert_eq!(INTCON1::STKALIGN.mask << INTCON1::STKALIGN.shift, BITM_NVIC_INTCON1_STKALIGN);
        assert_eq!(INTCON1::STKALIGN.shift as u32, BITP_NVIC_INTCON1_STKALIGN);
        assert_eq!(INTSHCSR::MEMFAULTACT.mask << INTSHCSR::MEMFAULTACT.shift, BITM_NVIC_INTSHCSR_MEMFAULTACT);
        assert_eq!(INTSHCSR::MEMFAULTACT.shift as u32, BITP_NVIC_INTSHCSR_MEMFAULTACT);
        assert_eq!(INTSHCSR::BUSFAULTACT.mask << INTSHCSR::BUSFAULTACT.shift, BITM_NVIC_INTSHCSR_BUSFAULTACT);
        assert_eq!(INTSHCSR::BUSFAULTACT.shift as u32, BITP_NVIC_INTSHCSR_BUSFAULTACT);
        assert_eq!(INTSHCSR::USGFAULTACT.mask << INTSHCSR::USGFAULTACT.shift, BITM_NVIC_INTSHCSR_USGFAULTACT);
        assert_eq!(INTSHCSR::USGFAULTACT.shift as u32, BITP_NVIC_INTSHCSR_USGFAULTACT);
        assert_eq!(INTSHCSR::SVCALLACT.mask << INTSHCSR::SVCALLACT.shift, BITM_NVIC_INTSHCSR_SVCALLACT);
        assert_eq!(INTSHCSR::SVCALLACT.shift as u32, BITP_NVIC_INTSHCSR_SVCALLACT);
        assert_eq!(INTSHCSR::MONITORACT.mask << INTSHCSR::MONITORACT.shift, BITM_NVIC_INTSHCSR_MONITORACT);
        assert_eq!(INTSHCSR::MONITORACT.shift as u32, BITP_NVIC_INTSHCSR_MONITORACT);
        assert_eq!(INTSHCSR::PENDSVACT.mask << INTSHCSR::PENDSVACT.shift, BITM_NVIC_INTSHCSR_PENDSVACT);
        assert_eq!(INTSHCSR::PENDSVACT.shift as u32, BITP_NVIC_INTSHCSR_PENDSVACT);
        assert_eq!(INTSHCSR::SYSTICKACT.mask << INTSHCSR::SYSTICKACT.shift, BITM_NVIC_INTSHCSR_SYSTICKACT);
        assert_eq!(INTSHCSR::SYSTICKACT.shift as u32, BITP_NVIC_INTSHCSR_SYSTICKACT);
        assert_eq!(INTSHCSR::USGFAULTPENDED.mask << INTSHCSR::USGFAULTPENDED.shift, BITM_NVIC_INTSHCSR_USGFAULTPENDED);
        assert_eq!(INTSHCSR::USGFAULTPENDED.shift as u32, BITP_NVIC_INTSHCSR_USGFAULTPENDED);
        assert_eq!(INTSHCSR::MEMFAULTPENDED.mask << INTSHCSR::MEMFAULTPENDED.shift, BITM_NVIC_INTSHCSR_MEMFAULTPENDED);
        assert_eq!(INTSHCSR::MEMFAULTPENDED.shift as u32, BITP_NVIC_INTSHCSR_MEMFAULTPENDED);
        assert_eq!(INTSHCSR::BUSFAULTPENDED.mask << INTSHCSR::BUSFAULTPENDED.shift, BITM_NVIC_INTSHCSR_BUSFAULTPENDED);
        assert_eq!(INTSHCSR::BUSFAULTPENDED.shift as u32, BITP_NVIC_INTSHCSR_BUSFAULTPENDED);
        assert_eq!(INTSHCSR::SVCALLPENDED.mask << INTSHCSR::SVCALLPENDED.shift, BITM_NVIC_INTSHCSR_SVCALLPENDED);
        assert_eq!(INTSHCSR::SVCALLPENDED.shift as u32, BITP_NVIC_INTSHCSR_SVCALLPENDED);
        assert_eq!(INTSHCSR::MEMFAULTENA.mask << INTSHCSR::MEMFAULTENA.shift, BITM_NVIC_INTSHCSR_MEMFAULTENA);
        assert_eq!(INTSHCSR::MEMFAULTENA.shift as u32, BITP_NVIC_INTSHCSR_MEMFAULTENA);
        assert_eq!(INTSHCSR::BUSFAULTENA.mask << INTSHCSR::BUSFAULTENA.shift, BITM_NVIC_INTSHCSR_BUSFAULTENA);
        assert_eq!(INTSHCSR::BUSFAULTENA.shift as u32, BITP_NVIC_INTSHCSR_BUSFAULTENA);
        assert_eq!(INTSHCSR::USGFAULTENA.mask << INTSHCSR::USGFAULTENA.shift, BITM_NVIC_INTSHCSR_USGFAULTENA);
        assert_eq!(INTSHCSR::USGFAULTENA.shift as u32, BITP_NVIC_INTSHCSR_USGFAULTENA);
        assert_eq!(INTCFSR::MMFSR.mask << INTCFSR::MMFSR.shift, BITM_NVIC_INTCFSR_MMFSR);
        assert_eq!(INTCFSR::MMFSR.shift as u32, BITP_NVIC_INTCFSR_MMFSR);
        assert_eq!(INTCFSR::BFSR.mask << INTCFSR::BFSR.shift, BITM_NVIC_INTCFSR_BFSR);
        assert_eq!(INTCFSR::BFSR.shift as u32, BITP_NVIC_INTCFSR_BFSR);
        assert_eq!(INTCFSR::UFSR.mask << INTCFSR::UFSR.shift, BITM_NVIC_INTCFSR_UFSR);
        assert_eq!(INTCFSR::UFSR.shift as u32, BITP_NVIC_INTCFSR_UFSR);
        assert_eq!(INTHFSR::VECTTBL.mask << INTHFSR::VECTTBL.shift, BITM_NVIC_INTHFSR_VECTTBL);
        assert_eq!(INTHFSR::VECTTBL.shift as u32, BITP_NVIC_INTHFSR_VECTTBL);
        assert_eq!(INTHFSR::FORCED.mask << INTHFSR::FORCED.shift, BITM_NVIC_INTHFSR_FORCED);
        assert_eq!(INTHFSR::FORCED.shift as u32, BITP_NVIC_INTHFSR_FORCED);
        assert_eq!(INTHFSR::DEBUGEVT.mask << INTHFSR::DEBUGEVT.shift, BITM_NVIC_INTHFSR_DEBUGEVT);
        assert_eq!(INTHFSR::DEBUGEVT.shift as u32, BITP_NVIC_INTHFSR_DEBUGEVT);
        assert_eq!(INTTRGI::INTID.mask << INTTRGI::INTID.shift, BITM_NVIC_INTTRGI_INTID);
        assert_eq!(INTTRGI::INTID.shift as u32, BITP_NVIC_INTTRGI_INTID);
    }

    #[test]
    fn registers_match_addresses() {
        let nvic = NVIC_BASE.address();
        assert_eq!(REG_NVIC_INTNUM as usize, nvic + offset_of!(NvicRegisters, intnum));
        assert_eq!(REG_NVIC_STKSTA as usize, nvic + offset_of!(NvicRegisters, stksta));
        assert_eq!(REG_NVIC_STKLD as usize, nvic + offset_of!(NvicRegisters, stkld));
        assert_eq!(REG_NVIC_STKVAL as usize, nvic + offset_of!(NvicRegisters, stkval));
        assert_eq!(REG_NVIC_STKCAL as usize, nvic + offset_of!(NvicRegisters, stkcal));
        assert_eq!(REG_NVIC_INTSETE0 as usize, nvic + offset_of!(NvicRegisters, intsete0));
        assert_eq!(REG_NVIC_INTSETE1 as usize, nvic + offset_of!(NvicRegisters, intsete1));
        assert_eq!(REG_NVIC_INTCLRE0 as usize, nvic + offset_of!(NvicRegisters, intclre0));
        assert_eq!(REG_NVIC_INTCLRE1 as usize, nvic + offset_of!(NvicRegisters, intclre1));
        assert_eq!(REG_NVIC_INTSETP0 as usize, nvic + offset_of!(NvicRegisters, intsetp0));
        assert_eq!(REG_NVIC_INTSETP1 as usize, nvic + offset_of!(NvicRegisters, intsetp1));
        assert_eq!(REG_NVIC_INTCLRP0 as usize, nvic + offset_of!(NvicRegisters, intclrp0));
        assert_eq!(REG_NVIC_INTCLRP1 as usize, nvic + offset_of!(NvicRegisters, intclrp1));
        assert_eq!(REG_NVIC_INTACT0 as usize, nvic + offset_of!(NvicRegisters, intact0));
        assert_eq!(REG_NVIC_INTACT1 as usize, nvic + offset_of!(NvicRegisters, intact1));
        assert_eq!(REG_NVIC_INTPRI0 as usize, nvic + offset_of!(NvicRegisters, intpri0));
        assert_eq!(REG_NVIC_INTPRI1 as usize, nvic + offset_of!(NvicRegisters, intpri1));
        assert_eq!(REG_NVIC_INTPRI2 as usize, nvic + offset_of!(NvicRegisters, intpri2));
        assert_eq!(REG_NVIC_INTPRI3 as usize, nvic + offset_of!(NvicRegisters, intpri3));
        assert_eq!(REG_NVIC_INTPRI4 as usize, nvic + offset_of!(NvicRegisters, intpri4));
        assert_eq!(REG_NVIC_INTPRI5 as usize, nvic + offset_of!(NvicRegisters, intpri5));
        assert_eq!(REG_NVIC_INTPRI6 as usize, nvic + offset_of!(NvicRegisters, intpri6));
        assert_eq!(REG_NVIC_INTPRI7 as usize, nvic + offset_of!(NvicRegisters, intpri7));
        assert_eq!(REG_NVIC_INTPRI8 as usize, nvic + offset_of!(NvicRegisters, intpri8));
        assert_eq!(REG_NVIC_INTPRI9 as usize, nvic + offset_of!(NvicRegisters, intpri9));
        assert_eq!(REG_NVIC_INTPRI10 as usize, nvic + offset_of!(NvicRegisters, intpri10));
        assert_eq!(REG_NVIC_INTCPID as usize, nvic + offset_of!(NvicRegisters, intcpid));
        assert_eq!(REG_NVIC_INTSTA as usize, nvic + offset_of!(NvicRegisters, intsta));
        assert_eq!(REG_NVIC_INTVEC as usize, nvic + offset_of!(NvicRegisters, intvec));
        assert_eq!(REG_NVIC_INTAIRC as usize, nvic + offset_of!(NvicRegisters, intairc));
        assert_eq!(REG_NVIC_INTCON0 as usize, nvic + offset_of!(NvicRegisters, intcon0));
        assert_eq!(REG_NVIC_INTCON1 as usize, nvic + offset_of!(NvicRegisters, intcon1));
        assert_eq!(REG_NVIC_INTSHPRIO0 as usize, nvic + offset_of!(NvicRegisters, intshprio0));
        assert_eq!(REG_NVIC_INTSHPRIO1 as usize, nvic + offset_of!(NvicRegisters, intshprio1));
        assert_eq!(REG_NVIC_INTSHPRIO3 as usize, nvic + offset_of!(NvicRegisters, intshprio3));
        assert_eq!(REG_NVIC_INTSHCSR as usize, nvic + offset_of!(NvicRegisters, intshcsr));
        assert_eq!(REG_NVIC_INTCFSR as usize, nvic + offset_of!(NvicRegisters, intcfsr));
        assert_eq!(REG_NVIC_INTHFSR as usize, nvic + offset_of!(NvicRegisters, inthfsr));
        assert_eq!(REG_NVIC_INTDFSR as usize, nvic + offset_of!(NvicRegisters, intdfsr));
        assert_eq!(REG_NVIC_INTMMAR as usize, nvic + offset_of!(NvicRegisters, intmmar));
        assert_eq!(REG_NVIC_INTBFAR as usize, nvic + offset_of!(NvicRegisters, intbfar));
        assert_eq!(REG_NVIC_INTAFSR as usize, nvic + offset_of!(NvicRegisters, intafsr));
        assert_eq!(REG_NVIC_INTPFR0 as usize, nvic + offset_of!(NvicRegisters, intpfr0));
        assert_eq!(REG_NVIC_INTPFR1 as usize, nvic + offset_of!(NvicRegisters, intpfr1));
        assert_eq!(REG_NVIC_INTDFR0 as usize, nvic + offset_of!(NvicRegisters, intdfr0));
        assert_eq!(REG_NVIC_INTAFR0 as usize, nvic + offset_of!(NvicRegisters, intafr0));
        assert_eq!(REG_NVIC_INTMMFR0 as usize, nvic + offset_of!(NvicRegisters, intmmfr0));
        assert_eq!(REG_NVIC_INTMMFR1 as usize, nvic + offset_of!(NvicRegisters, intmmfr1));
        assert_eq!(REG_NVIC_INTMMFR2 as usize, nvic + offset_of!(NvicRegisters, intmmfr2));
        assert_eq!(REG_NVIC_INTMMFR3 as usize, nvic + offset_of!(NvicRegisters, intmmfr3));
        assert_eq!(REG_NVIC_INTISAR0 as usize, nvic + offset_of!(NvicRegisters, intisar0));
        assert_eq!(REG_NVIC_INTISAR1 as usize, nvic + offset_of!(NvicRegisters, intisar1));
        assert_eq!(REG_NVIC_INTISAR2 as usize, nvic + offset_of!(NvicRegisters, intisar2));
        assert_eq!(REG_NVIC_INTISAR3 as usize, nvic + offset_of!(NvicRegisters, intisar3));
        assert_eq!(REG_NVIC_INTISAR4 as usize, nvic + offset_of!(NvicRegisters, intisar4));
        assert_eq!(REG_NVIC_INTTRGI as usize, nvic + offset_of!(NvicRegisters, inttrgi));
        assert_eq!(REG_NVIC_INTPID4 as usize, nvic + offset_of!(NvicRegisters, intpid4));
        assert_eq!(REG_NVIC_INTPID5 as usize, nvic + offset_of!(NvicRegisters, intpid5));
        assert_eq!(REG_NVIC_INTPID6 as usize, nvic + offset_of!(NvicRegisters, intpid6));
        assert_eq!(REG_NVIC_INTPID7 as usize, nvic + offset_of!(NvicRegisters, intpid7));
        assert_eq!(REG_NVIC_INTPID0 as usize, nvic + offset_of!(NvicRegisters, intpid0));
        assert_eq!(REG_NVIC_INTPID1 as usize, nvic + offset_of!(NvicRegisters, intpid1));
        assert_eq!(REG_NVIC_INTPID2 as usize, nvic + offset_of!(NvicRegisters, intpid2));
        assert_eq!(REG_NVIC_INTPID3 as usize, nvic + offset_of!(NvicRegisters, intpid3));
        assert_eq!(REG_NVIC_INTCID0 as usize, nvic + offset_of!(NvicRegisters, intcid0));
        assert_eq!(REG_NVIC_INTCID1 as usize, nvic + offset_of!(NvicRegisters, intcid1));
        assert_eq!(REG_NVIC_INTCID2 as usize, nvic + offset_of!(NvicRegisters, intcid2));
        assert_eq!(REG_NVIC_INTCID3 as usize, nvic + offset_of!(NvicRegisters, intcid3));
    }
}
