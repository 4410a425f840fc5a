// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for crc.

use crate::static_ref::StaticRef;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub CrcRegisters {
        /// CRC Control Register
        (0x0000 => pub crc_ctl: ReadWrite<u32, CRC_CTL::Register>),
        /// Input Data Register
        (0x0004 => pub crc_ipdata: ReadWrite<u32>),
        /// CRC Result Register
        (0x0008 => pub crc_result: ReadWrite<u32>),
        (0x000c => @END),
    }
}

register_bitfields![u32,
    pub CRC_CTL [
        BLKEN OFFSET(0) NUMBITS(1) [],
        STRT_CRC OFFSET(1) NUMBITS(1) [],
        DMAREQEN OFFSET(2) NUMBITS(1) [],
        AUTORST OFFSET(3) NUMBITS(2) [],
        BITMIRR OFFSET(5) NUMBITS(1) [],
        BYTMIRR OFFSET(6) NUMBITS(1) [],
        W16SWP OFFSET(7) NUMBITS(1) [],
    ],
];

pub const CRC_BASE: StaticRef<CrcRegisters> =
    unsafe { StaticRef::new(0x4002_C000 as *const CrcRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(CRC_CTL::BLKEN.mask << CRC_CTL::BLKEN.shift, BITM_CRC_CRC_CTL_BLKEN);
        assert_eq!(CRC_CTL::BLKEN.shift as u32, BITP_CRC_CRC_CTL_BLKEN);
        assert_eq!(CRC_CTL::STRT_CRC.mask << CRC_CTL::STRT_CRC.shift, BITM_CRC_CRC_CTL_STRT_CRC);
        assert_eq!(CRC_CTL::STRT_CRC.shift as u32, BITP_CRC_CRC_CTL_STRT_CRC);
        assert_eq!(CRC_CTL::DMAREQEN.mask << CRC_CTL::DMAREQEN.shift, BITM_CRC_CRC_CTL_DMAREQEN);
        assert_eq!(CRC_CTL::DMAREQEN.shift as u32, BITP_CRC_CRC_CTL_DMAREQEN);
        assert_eq!(CRC_CTL::AUTORST.mask << CRC_CTL::AUTORST.shift, BITM_CRC_CRC_CTL_AUTORST);
        assert_eq!(CRC_CTL::AUTORST.shift as u32, BITP_CRC_CRC_CTL_AUTORST);
        assert_eq!(CRC_CTL::BITMIRR.mask << CRC_CTL::BITMIRR.shift, BITM_CRC_CRC_CTL_BITMIRR);
        assert_eq!(CRC_CTL::BITMIRR.shift as u32, BITP_CRC_CRC_CTL_BITMIRR);
        assert_eq!(CRC_CTL::BYTMIRR.mask << CRC_CTL::BYTMIRR.shift, BITM_CRC_CRC_CTL_BYTMIRR);
        assert_eq!(CRC_CTL::BYTMIRR.shift as u32, BITP_CRC_CRC_CTL_BYTMIRR);
        assert_eq!(CRC_CTL::W16SWP.mask << CRC_CTL::W16SWP.shift, BITM_CRC_CRC_CTL_W16SWP);
        assert_eq!(CRC_CTL::W16SWP.shift as u32, BITP_CRC_CRC_CTL_W16SWP);
    }

    #[test]
    fn registers_match_addresses() {
        let crc = CRC_BASE.address();
        assert_eq!(REG_CRC_CRC_CTL as usize, crc + offset_of!(CrcRegisters, crc_ctl));
        assert_eq!(REG_CRC_CRC_IPDATA as usize, crc + offset_of!(CrcRegisters, crc_ipdata));
        assert_eq!(REG_CRC_CRC_RESULT as usize, crc + offset_of!(CrcRegisters, crc_result));
    }
}
