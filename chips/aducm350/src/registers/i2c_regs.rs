// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for i2c.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub I2cRegisters {
        /// Master control
        (0x0000 => pub i2cmcon: ReadWrite<u16, I2CMCON::Register>),
        (0x0002 => _reserved0),
        /// Master status
        (0x0004 => pub i2cmsta: ReadOnly<u16, I2CMSTA::Register>),
        (0x0006 => _reserved1),
        /// Master receive data
        (0x0008 => pub i2cmrx: ReadOnly<u16>),
        (0x000a => _reserved2),
        /// Master transmit data
        (0x000c => pub i2cmtx: ReadWrite<u16>),
        (0x000e => _reserved3),
        /// Master receive data count
        (0x0010 => pub i2cmrxcnt: ReadWrite<u16, I2CMRXCNT::Register>),
        (0x0012 => _reserved4),
        /// Master current receive data count
        (0x0014 => pub i2cmcrxcnt: ReadOnly<u16>),
        (0x0016 => _reserved5),
        /// 1st master address byte
        (0x0018 => pub i2cadr1: ReadWrite<u16>),
        (0x001a => _reserved6),
        /// 2nd master address byte
        (0x001c => pub i2cadr2: ReadWrite<u16>),
        (0x001e => _reserved7),
        /// Start byte
        (0x0020 => pub i2cbyt: ReadWrite<u16>),
        (0x0022 => _reserved8),
        /// Serial clock period divisor
        (0x0024 => pub i2cdiv: ReadWrite<u16, I2CDIV::Register>),
        (0x0026 => _reserved9),
        /// Slave control
        (0x0028 => pub i2cscon: ReadWrite<u16, I2CSCON::Register>),
        (0x002a => _reserved10),
        /// Slave I2C Status/Error/IRQ
        (0x002c => pub i2cssta: ReadOnly<u16, I2CSSTA::Register>),
        (0x002e => _reserved11),
        /// Slave receive
        (0x0030 => pub i2csrx: ReadOnly<u16>),
        (0x0032 => _reserved12),
        /// Slave transmit
        (0x0034 => pub i2cstx: ReadWrite<u16>),
        (0x0036 => _reserved13),
        /// Hardware general call ID
        (0x0038 => pub i2calt: ReadWrite<u16>),
        (0x003a => _reserved14),
        /// 1st slave address device ID
        (0x003c => pub i2cid0: ReadWrite<u16>),
        (0x003e => _reserved15),
        /// 2nd slave address device ID
        (0x0040 => pub i2cid1: ReadWrite<u16>),
        (0x0042 => _reserved16),
        /// 3rd slave address device ID
        (0x0044 => pub i2cid2: ReadWrite<u16>),
        (0x0046 => _reserved17),
        /// 4th slave address device ID
        (0x0048 => pub i2cid3: ReadWrite<u16>),
        (0x004a => _reserved18),
        /// Master and slave FIFO status
        (0x004c => pub i2cfsta: ReadWrite<u16, I2CFSTA::Register>),
        (0x004e => _reserved19),
        /// Shared control
        (0x0050 => pub i2cshcon: WriteOnly<u16, I2CSHCON::Register>),
        (0x0052 => _reserved20),
        /// Timing Control Register
        (0x0054 => pub i2ctctl: ReadWrite<u16, I2CTCTL::Register>),
        (0x0056 => _reserved21),
        (0x0058 => @END),
    }
}

register_bitfields![u16,
    pub I2CMCON [
        MASEN OFFSET(0) NUMBITS(1) [],
        COMPLETE OFFSET(1) NUMBITS(1) [],
        LOOPBACK OFFSET(2) NUMBITS(1) [],
        STRETCH OFFSET(3) NUMBITS(1) [],
        IENMRX OFFSET(4) NUMBITS(1) [],
        IENMTX OFFSET(5) NUMBITS(1) [],
        IENALOST OFFSET(6) NUMBITS(1) [],
        IENACK OFFSET(7) NUMBITS(1) [],
        IENCMP OFFSET(8) NUMBITS(1) [],
        MXMITDEC OFFSET(9) NUMBITS(1) [],
        MRXDMA OFFSET(10) NUMBITS(1) [],
        MTXDMA OFFSET(11) NUMBITS(1) [],
        BUS_CLR_EN OFFSET(12) NUMBITS(1) [],
        PRESTOP_BUS_CLR OFFSET(13) NUMBITS(1) [],
    ],
    pub I2CMSTA [
        TXFSTA OFFSET(0) NUMBITS(2) [],
        TXREQ OFFSET(2) NUMBITS(1) [],
        RXREQ OFFSET(3) NUMBITS(1) [],
        NACKADDR OFFSET(4) NUMBITS(1) [],
        ALOST OFFSET(5) NUMBITS(1) [],
        BUSY OFFSET(6) NUMBITS(1) [],
        NACKDATA OFFSET(7) NUMBITS(1) [],
        TCOMP OFFSET(8) NUMBITS(1) [],
        RXOF OFFSET(9) NUMBITS(1) [],
        LINEBUSY OFFSET(10) NUMBITS(1) [],
        MSTOP OFFSET(11) NUMBITS(1) [],
        TXUR OFFSET(12) NUMBITS(1) [],
    ],
    pub I2CMRXCNT [
        VALUE OFFSET(0) NUMBITS(8) [],
        EXTEND OFFSET(8) NUMBITS(1) [],
    ],
    pub I2CDIV [
        LOW OFFSET(0) NUMBITS(8) [],
        HIGH OFFSET(8) NUMBITS(8) [],
    ],
    pub I2CSCON [
        SLVEN OFFSET(0) NUMBITS(1) [],
        ADR10EN OFFSET(1) NUMBITS(1) [],
        GCEN OFFSET(2) NUMBITS(1) [],
        HGCEN OFFSET(3) NUMBITS(1) [],
        GCSBCLR OFFSET(4) NUMBITS(1) [],
        EARLYTXR OFFSET(5) NUMBITS(1) [],
        STRETCHSCL OFFSET(6) NUMBITS(1) [],
        NACK OFFSET(7) NUMBITS(1) [],
        IENSTOP OFFSET(8) NUMBITS(1) [],
        IENSRX OFFSET(9) NUMBITS(1) [],
        IENSTX OFFSET(10) NUMBITS(1) [],
        SXMITDEC OFFSET(11) NUMBITS(1) [],
        IENREPST OFFSET(12) NUMBITS(1) [],
        SRXDMA OFFSET(13) NUMBITS(1) [],
        STXDMA OFFSET(14) NUMBITS(1) [],
    ],
    pub I2CSSTA [
        TXFSEREQ OFFSET(0) NUMBITS(1) [],
        TXUR OFFSET(1) NUMBITS(1) [],
        TXREQ OFFSET(2) NUMBITS(1) [],
        RXREQ OFFSET(3) NUMBITS(1) [],
        RXOF OFFSET(4) NUMBITS(1) [],
        NOACK OFFSET(5) NUMBITS(1) [],
        BUSY OFFSET(6) NUMBITS(1) [],
        GCINT OFFSET(7) NUMBITS(1) [],
        GCID OFFSET(8) NUMBITS(2) [],
        STOP OFFSET(10) NUMBITS(1) [],
        IDMAT OFFSET(11) NUMBITS(2) [],
        REPSTART OFFSET(13) NUMBITS(1) [],
        START OFFSET(14) NUMBITS(1) [],
    ],
    pub I2CFSTA [
        STXFSTA OFFSET(0) NUMBITS(2) [
            EMPTY = 0,
            ONEBYTE = 1,
            TWOBYTES = 2,
        ],
        SRXFSTA OFFSET(2) NUMBITS(2) [
            EMPTY = 0,
            ONEBYTE = 1,
            TWOBYTES = 2,
        ],
        MTXFSTA OFFSET(4) NUMBITS(2) [
            EMPTY = 0,
            ONEBYTE = 1,
            TWOBYTES = 2,
        ],
        MRXFSTA OFFSET(6) NUMBITS(2) [
            EMPTY = 0,
            ONEBYTE = 1,
            TWOBYTES = 2,
        ],
        SFLUSH OFFSET(8) NUMBITS(1) [],
        MFLUSH OFFSET(9) NUMBITS(1) [],
    ],
    pub I2CSHCON [
        RESET OFFSET(0) NUMBITS(1) [],
    ],
    pub I2CTCTL [
        THDATIN OFFSET(0) NUMBITS(5) [],
    ],
];

pub const I2C_BASE: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new(0x4000_3000 as *const I2cRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(I2CMCON::MASEN.mask << I2CMCON::MASEN.shift, BITM_I2C_I2CMCON_MASEN);
        assert_eq!(I2CMCON::MASEN.shift as u32, BITP_I2C_I2CMCON_MASEN);
        assert_eq!(I2CMCON::COMPLETE.mask << I2CMCON::COMPLETE.shift, BITM_I2C_I2CMCON_COMPLETE);
        assert_eq!(I2CMCON::COMPLETE.shift as u32, BITP_I2C_I2CMCON_COMPLETE);
        assert_eq!(I2CMCON::LOOPBACK.mask << I2CMCON::LOOPBACK.shift, BITM_I2C_I2CMCON_LOOPBACK);
        assert_eq!(I2CMCON::LOOPBACK.shift as u32, BITP_I2C_I2CMCON_LOOPBACK);
        assert_eq!(I2CMCON::STRETCH.mask << I2CMCON::STRETCH.shift, BITM_I2C_I2CMCON_STRETCH);
        assert_eq!(I2CMCON::STRETCH.shift as u32, BITP_I2C_I2CMCON_STRETCH);
        assert_eq!(I2CMCON::IENMRX.mask << I2CMCON::IENMRX.shift, BITM_I2C_I2CMCON_IENMRX);
        assert_eq!(I2CMCON::IENMRX.shift as u32, BITP_I2C_I2CMCON_IENMRX);
        assert_eq!(I2CMCON::IENMTX.mask << I2CMCON::IENMTX.shift, BITM_I2C_I2CMCON_IENMTX);
        assert_eq!(I2CMCON::IENMTX.shift as u32, BITP_I2C_I2CMCON_IENMTX);
        assert_eq!(I2CMCON::IENALOST.mask << I2CMCON::IENALOST.shift, BITM_I2C_I2CMCON_IENALOST);
        assert_eq!(I2CMCON::IENALOST.shift as u32, BITP_I2C_I2CMCON_IENALOST);
        assert_eq!(I2CMCON::IENACK.mask << I2CMCON::IENACK.shift, BITM_I2C_I2CMCON_IENACK);
        assert_eq!(I2CMCON::IENACK.shift as u32, BITP_I2C_I2CMCON_IENACK);
        assert_eq!(I2CMCON::IENCMP.mask << I2CMCON::IENCMP.shift, BITM_I2C_I2CMCON_IENCMP);
        assert_eq!(I2CMCON::IENCMP.shift as u32, BITP_I2C_I2CMCON_IENCMP);
        assert_eq!(I2CMCON::MXMITDEC.mask << I2CMCON::MXMITDEC.shift, BITM_I2C_I2CMCON_MXMITDEC);
        assert_eq!(I2CMCON::MXMITDEC.shift as u32, BITP_I2C_I2CMCON_MXMITDEC);
        assert_eq!(I2CMCON::MRXDMA.mask << I2CMCON::MRXDMA.shift, BITM_I2C_I2CMCON_MRXDMA);
        assert_eq!(I2CMCON::MRXDMA.shift as u32, BITP_I2C_I2CMCON_MRXDMA);
        assert_eq!(I2CMCON::MTXDMA.mask << I2CMCON::MTXDMA.shift, BITM_I2C_I2CMCON_MTXDMA);
        assert_eq!(I2CMCON::MTXDMA.shift as u32, BITP_I2C_I2CMCON_MTXDMA);
        assert_eq!(I2CMCON::BUS_CLR_EN.mask << I2CMCON::BUS_CLR_EN.shift, BITM_I2C_I2CMCON_BUS_CLR_EN);
        assert_eq!(I2CMCON::BUS_CLR_EN.shift as u32, BITP_I2C_I2CMCON_BUS_CLR_EN);
        assert_eq!(I2CMCON::PRESTOP_BUS_CLR.mask << I2CMCON::PRESTOP_BUS_CLR.shift, BITM_I2C_I2CMCON_PRESTOP_BUS_CLR);
        assert_eq!(I2CMCON::PRESTOP_BUS_CLR.shift as u32, BITP_I2C_I2CMCON_PRESTOP_BUS_CLR);
        assert_eq!(I2CMSTA::TXFSTA.mask << I2CMSTA::TXFSTA.shift, BITM_I2C_I2CMSTA_TXFSTA);
        assert_eq!(I2CMSTA::TXFSTA.shift as u32, BITP_I2C_I2CMSTA_TXFSTA);
        assert_eq!(I2CMSTA::TXREQ.mask << I2CMSTA::TXREQ.shift, BITM_I2C_I2CMSTA_TXREQ);
        assert_eq!(I2CMSTA::TXREQ.shift as u32, BITP_I2C_I2CMSTA_TXREQ);
        assert_eq!(I2CMSTA::RXREQ.mask << I2CMSTA::RXREQ.shift, BITM_I2C_I2CMSTA_RXREQ);
        assert_eq!(I2CMSTA::RXREQ.shift as u32, BITP_I2C_I2CMSTA_RXREQ);
        assert_eq!(I2CMSTA::NACKADDR.mask << I2CMSTA::NACKADDR.shift, BITM_I2C_I2CMSTA_NACKADDR);
        assert_eq!(I2CMSTA::NACKADDR.shift as u32, BITP_I2C_I2CMSTA_NACKADDR);
        assert_eq!(I2CMSTA::ALOST.mask << I2CMSTA::ALOST.shift, BITM_I2C_I2CMSTA_ALOST);
        assert_eq!(I2CMSTA::ALOST.shift as u32, BITP_I2C_I2CMSTA_ALOST);
        assert_eq!(I2CMSTA::BUSY.mask << I2CMSTA::BUSY.shift, BITM_I2C_I2CMSTA_BUSY);
        assert_eq!(I2CMSTA::BUSY.shift as u32, BITP_I2C_I2CMSTA_BUSY);
        assert_eq!(I2CMSTA::NACKDATA.mask << I2CMSTA::NACKDATA.shift, BITM_I2C_I2CMSTA_NACKDATA);
        assert_eq!(I2CMSTA::NACKDATA.shift as u32, BITP_I2C_I2CMSTA_NACKDATA);
        assert_eq!(I2CMSTA::TCOMP.mask << I2CMSTA::TCOMP.shift, BITM_I2C_I2CMSTA_TCOMP);
        assert_eq!(I2CMSTA::TCOMP.shift as u32, BITP_I2C_I2CMSTA_TCOMP);
        assert_eq!(I2CMSTA::RXOF.mask << I2CMSTA::RXOF.shift, BITM_I2C_I2CMSTA_RXOF);
        assert_eq!(I2CMSTA::RXOF.shift as u32, BITP_I2C_I2CMSTA_RXOF);
        assert_eq!(I2CMSTA::LINEBUSY.mask << I2CMSTA::LINEBUSY.shift, BITM_I2C_I2CMSTA_LINEBUSY);
        assert_eq!(I2CMSTA::LINEBUSY.shift as u32, BITP_I2C_I2CMSTA_LINEBUSY);
        assert_eq!(I2CMSTA::MSTOP.mask << I2CMSTA::MSTOP.shift, BITM_I2C_I2CMSTA_MSTOP);
        assert_eq!(I2CMSTA::MSTOP.shift as u32, BITP_I2C_I2CMSTA_MSTOP);
        assert_eq!(I2CMSTA::TXUR.mask << I2CMSTA::TXUR.shift, BITM_I2C_I2CMSTA_TXUR);
        assert_eq!(I2CMSTA::TXUR.shift as u32, BITP_I2C_I2CMSTA_TXUR);
        assert_eq!(I2CMRXCNT::VALUE.mask << I2CMRXCNT::VALUE.shift, BITM_I2C_I2CMRXCNT_VALUE);
        assert_eq!(I2CMRXCNT::VALUE.shift as u32, BITP_I2C_I2CMRXCNT_VALUE);
        assert_eq!(I2CMRXCNT::EXTEND.mask << I2CMRXCNT::EXTEND.shift, BITM_I2C_I2CMRXCNT_EXTEND);
        assert_eq!(I2CMRXCNT::EXTEND.shift as u32, BITP_I2C_I2CMRXCNT_EXTEND);
        assert_eq!(I2CDIV::LOW.mask << I2CDIV::LOW.shift, BITM_I2C_I2CDIV_LOW);
        assert_eq!(I2CDIV::LOW.shift as u32, BITP_I2C_I2CDIV_LOW);
        assert_eq!(I2CDIV::HIGH.mask << I2CDIV::HIGH.shift, BITM_I2C_I2CDIV_HIGH);
        assert_eq!(I2CDIV::HIGH.shift as u32, BITP_I2C_I2CDIV_HIGH);
        assert_eq!(I2CSCON::SLVEN.mask << I2CSCON::SLVEN.shift, BITM_I2C_I2CSCON_SLVEN);
        assert_eq!(I2CSCON::SLVEN.shift as u32, BITP_I2C_I2CSCON_SLVEN);
        assert_eq!(I2CSCON::ADR10EN.mask << I2CSCON::ADR10EN.shift, BITM_I2C_I2CSCON_ADR10EN);
        assert_eq!(I2CSCON::ADR10EN.shift as u32, BITP_I2C_I2CSCON_ADR10EN);
        assert_eq!(I2CSCON::GCEN.mask << I2CSCON::GCEN.shift, BITM_I2C_I2CSCON_GCEN);
        assert_eq!(I2CSCON::GCEN.shift as u32, BITP_I2C_I2CSCON_GCEN);
        assert_eq!(I2CSCON::HGCEN.mask << I2CSCON::HGCEN.shift, BITM_I2C_I2CSCON_HGCEN);
        assert_eq!(I2CSCON::HGCEN.shift as u32, BITP_I2C_I2CSCON_HGCEN);
        assert_eq!(I2CSCON::GCSBCLR.mask << I2CSCON::GCSBCLR.shift, BITM_I2C_I2CSCON_GCSBCLR);
        assert_eq!(I2CSCON::GCSBCLR.shift as u32, BITP_I2C_I2CSCON_GCSBCLR);
        assert_eq!(I2CSCON::EARLYTXR.mask << I2CSCON::EARLYTXR.shift, BITM_I2C_I2CSCON_EARLYTXR);
        assert_eq!(I2CSCON::EARLYTXR.shift as u32, BITP_I2C_I2CSCON_EARLYTXR);
        assert_eq!(I2CSCON::STRETCHSCL.mask << I2CSCON::STRETCHSCL.shift, BITM_I2C_I2CSCON_STRETCHSCL);
        assert_eq!(I2CSCON::STRETCHSCL.shift as u32, BITP_I2C_I2CSCON_STRETCHSCL);
        assert_eq!(I2CSCON::NACK.mask << I2CSCON::NACK.shift, BITM_I2C_I2CSCON_NACK);
        assert_eq!(I2CSCON::NACK.shift as u32, BITP_I2C_I2CSCON_NACK);
        assert_eq!(I2CSCON::IENSTOP.mask << I2CSCON::IENSTOP.shift, BITM_I2C_I2CSCON_IENSTOP);
        assert_eq!(I2CSCON::IENSTOP.shift as u32, BITP_I2C_I2CSCON_IENSTOP);
        assert_eq!(I2CSCON::IENSRX.mask << I2CSCON::IENSRX.shift, BITM_I2C_I2CSCON_IENSRX);
        assert_eq!(I2CSCON::IENSRX.shift as u32, BITP_I2C_I2CSCON_IENSRX);
        assert_eq!(I2CSCON::IENSTX.mask << I2CSCON::IENSTX.shift, BITM_I2C_I2CSCON_IENSTX);
        assert_eq!(I2CSCON::IENSTX.shift as u32, BITP_I2C_I2CSCON_IENSTX);
        assert_eq!(I2CSCON::SXMITDEC.mask << I2CSCON::SXMITDEC.shift, BITM_I2C_I2CSCON_SXMITDEC);
        assert_eq!(I2CSCON::SXMITDEC.shift as u32, BITP_I2C_I2CSCON_SXMITDEC);
        assert_eq!(I2CSCON::IENREPST.mask << I2CSCON::IENREPST.shift, BITM_I2C_I2CSCON_IENREPST);
        assert_eq!(I2CSCON::IENREPST.shift as u32, BITP_I2C_I2CSCON_IENREPST);
        assert_eq!(I2CSCON::SRXDMA.mask << I2CSCON::SRXDMA.shift, BITM_I2C_I2CSCON_SRXDMA);
        assert_eq!(I2CSCON::SRXDMA.shift as u32, BITP_I2C_I2CSCON_SRXDMA);
        assert_eq!(I2CSCON::STXDMA.mask << I2CSCON::STXDMA.shift, BITM_I2C_I2CSCON_STXDMA);
        assert_eq!(I2CSCON::STXDMA.shift as u32, BITP_I2C_I2CSCON_STXDMA);
        assert_eq!(I2CSSTA::TXFSEREQ.mask << I2CSSTA::TXFSEREQ.shift, BITM_I2C_I2CSSTA_TXFSEREQ);
        assert_eq!(I2CSSTA::TXFSEREQ.shift as u32, BITP_I2C_I2CSSTA_TXFSEREQ);
        assert_eq!(I2CSSTA::TXUR.mask << I2CSSTA::TXUR.shift, BITM_I2C_I2CSSTA_TXUR);
        assert_eq!(I2CSSTA::TXUR.shift as u32, BITP_I2C_I2CSSTA_TXUR);
        assert_eq!(I2CSSTA::TXREQ.mask << I2CSSTA::TXREQ.shift, BITM_I2C_I2CSSTA_TXREQ);
        assert_eq!(I2CSSTA::TXREQ.shift as u32, BITP_I2C_I2CSSTA_TXREQ);
        assert_eq!(I2CSSTA::RXREQ.mask << I2CSSTA::RXREQ.shift, BITM_I2C_I2CSSTA_RXREQ);
        assert_eq!(I2CSSTA::RXREQ.shift as u32, BITP_I2C_I2CSSTA_RXREQ);
        assert_eq!(I2CSSTA::RXOF.mask << I2CSSTA::RXOF.shift, BITM_I2C_I2CSSTA_RXOF);
        assert_eq!(I2CSSTA::RXOF.shift as u32, BITP_I2C_I2CSSTA_RXOF);
        assert_eq!(I2CSSTA::NOACK.mask << I2CSSTA::NOACK.shift, BITM_I2C_I2CSSTA_NOACK);
        assert_eq!(I2CSSTA::NOACK.shift as u32, BITP_I2C_I2CSSTA_NOACK);
        assert_eq!(I2CSSTA::BUSY.mask << I2CSSTA::BUSY.shift, BITM_I2C_I2CSSTA_BUSY);
        assert_eq!(I2CSSTA::BUSY.shift as u32, BITP_I2C_I2CSSTA_BUSY);
        assert_eq!(I2CSSTA::GCINT.mask << I2CSSTA::GCINT.shift, BITM_I2C_I2CSSTA_GCINT);
        assert_eq!(I2CSSTA::GCINT.shift as u32, BITP_I2C_I2CSSTA_GCINT);
        assert_eq!(I2CSSTA::GCID.mask << I2CSSTA::GCID.shift, BITM_I2C_I2CSSTA_GCID);
        assert_eq!(I2CSSTA::GCID.shift as u32, BITP_I2C_I2CSSTA_GCID);
        assert_eq!(I2CSSTA::STOP.mask << I2CSSTA::STOP.shift, BITM_I2C_I2CSSTA_STOP);
        assert_eq!(I2CSSTA::STOP.shift as u32, BITP_I2C_I2CSSTA_STOP);
        assert_eq!(I2CSSTA::IDMAT.mask << I2CSSTA::IDMAT.shift, BITM_I2C_I2CSSTA_IDMAT);
        assert_eq!(I2CSSTA::IDMAT.shift as u32, BITP_I2C_I2CSSTA_IDMAT);
        assert_eq!(I2CSSTA::REPSTART.mask << I2CSSTA::REPSTART.shift, BITM_I2C_I2CSSTA_REPSTART);
        assert_eq!(I2CSSTA::REPSTART.shift as u32, BITP_I2C_I2CSSTA_REPSTART);
        assert_eq!(I2CSSTA::START.mask << I2CSSTA::START.shift, BITM_I2C_I2CSSTA_START);
        assert_eq!(I2CSSTA::START.shift as u32, BITP_I2C_I2CSSTA_START);
        assert_eq!(I2CFSTA::STXFSTA.mask << I2CFSTA::STXFSTA.shift, BITM_I2C_I2CFSTA_STXFSTA);
        assert_eq!(I2CFSTA::STXFSTA.shift as u32, BITP_I2C_I2CFSTA_STXFSTA);
        assert_eq!(I2CFSTA::SRXFSTA.mask << I2CFSTA::SRXFSTA.shift, BITM_I2C_I2CFSTA_SRXFSTA);
        assert_eq!(I2CFSTA::SRXFSTA.shift as u32, BITP_I2C_I2CFSTA_SRXFSTA);
        assert_eq!(I2CFSTA::MTXFSTA.mask << I2CFSTA::MTXFSTA.shift, BITM_I2C_I2CFSTA_MTXFSTA);
        assert_eq!(I2CFSTA::MTXFSTA.shift as u32, BITP_I2C_I2CFSTA_MTXFSTA);
        assert_eq!(I2CFSTA::MRXFSTA.mask << I2CFSTA::MRXFSTA.shift, BITM_I2C_I2CFSTA_MRXFSTA);
        assert_eq!(I2CFSTA::MRXFSTA.shift as u32, BITP_I2C_I2CFSTA_MRXFSTA);
        assert_eq!(I2CFSTA::SFLUSH.mask << I2CFSTA::SFLUSH.shift, BITM_I2C_I2CFSTA_SFLUSH);
        assert_eq!(I2CFSTA::SFLUSH.shift as u32, BITP_I2C_I2CFSTA_SFLUSH);
        assert_eq!(I2CFSTA::MFLUSH.mask << I2CFSTA::MFLUSH.shift, BITM_I2C_I2CFSTA_MFLUSH);
        assert_eq!(I2CFSTA::MFLUSH.shift as u32, BITP_I2C_I2CFSTA_MFLUSH);
        assert_eq!(I2CSHCON::RESET.mask << I2CSHCON::RESET.shift, BITM_I2C_I2CSHCON_RESET);
        assert_eq!(I2CSHCON::RESET.shift as u32, BITP_I2C_I2CSHCON_RESET);
        assert_eq!(I2CTCTL::THDATIN.mask << I2CTCTL::THDATIN.shift, BITM_I2C_I2CTCTL_THDATIN);
        assert_eq!(I2CTCTL::THDATIN.shift as u32, BITP_I2C_I2CTCTL_THDATIN);
    }

    #[test]
    fn registers_match_addresses() {
        let i2c = I2C_BASE.address();
        assert_eq!(REG_I2C_I2CMCON as usize, i2c + offset_of!(I2cRegisters, i2cmcon));
        assert_eq!(REG_I2C_I2CMSTA as usize, i2c + offset_of!(I2cRegisters, i2cmsta));
        assert_eq!(REG_I2C_I2CMRX as usize, i2c + offset_of!(I2cRegisters, i2cmrx));
        assert_eq!(REG_I2C_I2CMTX as usize, i2c + offset_of!(I2cRegisters, i2cmtx));
        assert_eq!(REG_I2C_I2CMRXCNT as usize, i2c + offset_of!(I2cRegisters, i2cmrxcnt));
        assert_eq!(REG_I2C_I2CMCRXCNT as usize, i2c + offset_of!(I2cRegisters, i2cmcrxcnt));
        assert_eq!(REG_I2C_I2CADR1 as usize, i2c + offset_of!(I2cRegisters, i2cadr1));
        assert_eq!(REG_I2C_I2CADR2 as usize, i2c + offset_of!(I2cRegisters, i2cadr2));
        assert_eq!(REG_I2C_I2CBYT as usize, i2c + offset_of!(I2cRegisters, i2cbyt));
        assert_eq!(REG_I2C_I2CDIV as usize, i2c + offset_of!(I2cRegisters, i2cdiv));
        assert_eq!(REG_I2C_I2CSCON as usize, i2c + offset_of!(I2cRegisters, i2cscon));
        assert_eq!(REG_I2C_I2CSSTA as usize, i2c + offset_of!(I2cRegisters, i2cssta));
        assert_eq!(REG_I2C_I2CSRX as usize, i2c + offset_of!(I2cRegisters, i2csrx));
        assert_eq!(REG_I2C_I2CSTX as usize, i2c + offset_of!(I2cRegisters, i2cstx));
        assert_eq!(REG_I2C_I2CALT as usize, i2c + offset_of!(I2cRegisters, i2calt));
        assert_eq!(REG_I2C_I2CID0 as usize, i2c + offset_of!(I2cRegisters, i2cid0));
        assert_eq!(REG_I2C_I2CID1 as usize, i2c + offset_of!(I2cRegisters, i2cid1));
        assert_eq!(REG_I2C_I2CID2 as usize, i2c + offset_of!(I2cRegisters, i2cid2));
        assert_eq!(REG_I2C_I2CID3 as usize, i2c + offset_of!(I2cRegisters, i2cid3));
        assert_eq!(REG_I2C_I2CFSTA as usize, i2c + offset_of!(I2cRegisters, i2cfsta));
        assert_eq!(REG_I2C_I2CSHCON as usize, i2c + offset_of!(I2cRegisters, i2cshcon));
        assert_eq!(REG_I2C_I2CTCTL as usize, i2c + offset_of!(I2cRegisters, i2ctctl));
    }
}
