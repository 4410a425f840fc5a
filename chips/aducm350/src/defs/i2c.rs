// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! I2C master/slave.

// Generated register constants for i2c.

// I2C registers
/// Master control
pub const REG_I2C_I2CMCON: u32 = 0x4000_3000;
/// Master status
pub const REG_I2C_I2CMSTA: u32 = 0x4000_3004;
/// Master receive data
pub const REG_I2C_I2CMRX: u32 = 0x4000_3008;
/// Master transmit data
pub const REG_I2C_I2CMTX: u32 = 0x4000_300C;
/// Master receive data count
pub const REG_I2C_I2CMRXCNT: u32 = 0x4000_3010;
/// Master current receive data count
pub const REG_I2C_I2CMCRXCNT: u32 = 0x4000_3014;
/// 1st master address byte
pub const REG_I2C_I2CADR1: u32 = 0x4000_3018;
/// 2nd master address byte
pub const REG_I2C_I2CADR2: u32 = 0x4000_301C;
/// Start byte
pub const REG_I2C_I2CBYT: u32 = 0x4000_3020;
/// Serial clock period divisor
pub const REG_I2C_I2CDIV: u32 = 0x4000_3024;
/// Slave control
pub const REG_I2C_I2CSCON: u32 = 0x4000_3028;
/// Slave I2C Status/Error/IRQ
pub const REG_I2C_I2CSSTA: u32 = 0x4000_302C;
/// Slave receive
pub const REG_I2C_I2CSRX: u32 = 0x4000_3030;
/// Slave transmit
pub const REG_I2C_I2CSTX: u32 = 0x4000_3034;
/// Hardware general call ID
pub const REG_I2C_I2CALT: u32 = 0x4000_3038;
/// 1st slave address device ID
pub const REG_I2C_I2CID0: u32 = 0x4000_303C;
/// 2nd slave address device ID
pub const REG_I2C_I2CID1: u32 = 0x4000_3040;
/// 3rd slave address device ID
pub const REG_I2C_I2CID2: u32 = 0x4000_3044;
/// 4th slave address device ID
pub const REG_I2C_I2CID3: u32 = 0x4000_3048;
/// Master and slave FIFO status
pub const REG_I2C_I2CFSTA: u32 = 0x4000_304C;
/// Shared control
pub const REG_I2C_I2CSHCON: u32 = 0x4000_3050;
/// Timing Control Register
pub const REG_I2C_I2CTCTL: u32 = 0x4000_3054;

// I2C_I2CMCON
pub const BITP_I2C_I2CMCON_MASEN: u32 = 0;
pub const BITP_I2C_I2CMCON_COMPLETE: u32 = 1;
pub const BITP_I2C_I2CMCON_LOOPBACK: u32 = 2;
pub const BITP_I2C_I2CMCON_STRETCH: u32 = 3;
pub const BITP_I2C_I2CMCON_IENMRX: u32 = 4;
pub const BITP_I2C_I2CMCON_IENMTX: u32 = 5;
pub const BITP_I2C_I2CMCON_IENALOST: u32 = 6;
pub const BITP_I2C_I2CMCON_IENACK: u32 = 7;
pub const BITP_I2C_I2CMCON_IENCMP: u32 = 8;
pub const BITP_I2C_I2CMCON_MXMITDEC: u32 = 9;
pub const BITP_I2C_I2CMCON_MRXDMA: u32 = 10;
pub const BITP_I2C_I2CMCON_MTXDMA: u32 = 11;
pub const BITP_I2C_I2CMCON_BUS_CLR_EN: u32 = 12;
pub const BITP_I2C_I2CMCON_PRESTOP_BUS_CLR: u32 = 13;
/// Master enable
pub const BITM_I2C_I2CMCON_MASEN: u16 = 0x0001;
/// Start back-off disable
pub const BITM_I2C_I2CMCON_COMPLETE: u16 = 0x0002;
/// Internal loopback enable
pub const BITM_I2C_I2CMCON_LOOPBACK: u16 = 0x0004;
/// Stretch SCL enable
pub const BITM_I2C_I2CMCON_STRETCH: u16 = 0x0008;
/// Receive request interrupt enable
pub const BITM_I2C_I2CMCON_IENMRX: u16 = 0x0010;
/// Transmit request interrupt enable
pub const BITM_I2C_I2CMCON_IENMTX: u16 = 0x0020;
/// Arbitration lost interrupt enable
pub const BITM_I2C_I2CMCON_IENALOST: u16 = 0x0040;
/// ACK not received interrupt enable
pub const BITM_I2C_I2CMCON_IENACK: u16 = 0x0080;
/// Transaction completed interrupt enable
pub const BITM_I2C_I2CMCON_IENCMP: u16 = 0x0100;
/// Decrement master TX FIFO status when a byte has been transmitted
pub const BITM_I2C_I2CMCON_MXMITDEC: u16 = 0x0200;
/// Enable master Rx DMA request
pub const BITM_I2C_I2CMCON_MRXDMA: u16 = 0x0400;
/// Enable master Tx DMA request
pub const BITM_I2C_I2CMCON_MTXDMA: u16 = 0x0800;
/// Bus-clear enable
pub const BITM_I2C_I2CMCON_BUS_CLR_EN: u16 = 0x1000;
/// Prestop bus-clear
pub const BITM_I2C_I2CMCON_PRESTOP_BUS_CLR: u16 = 0x2000;

// I2C_I2CMSTA
pub const BITP_I2C_I2CMSTA_TXFSTA: u32 = 0;
pub const BITP_I2C_I2CMSTA_TXREQ: u32 = 2;
pub const BITP_I2C_I2CMSTA_RXREQ: u32 = 3;
pub const BITP_I2C_I2CMSTA_NACKADDR: u32 = 4;
pub const BITP_I2C_I2CMSTA_ALOST: u32 = 5;
pub const BITP_I2C_I2CMSTA_BUSY: u32 = 6;
pub const BITP_I2C_I2CMSTA_NACKDATA: u32 = 7;
pub const BITP_I2C_I2CMSTA_TCOMP: u32 = 8;
pub const BITP_I2C_I2CMSTA_RXOF: u32 = 9;
pub const BITP_I2C_I2CMSTA_LINEBUSY: u32 = 10;
pub const BITP_I2C_I2CMSTA_MSTOP: u32 = 11;
pub const BITP_I2C_I2CMSTA_TXUR: u32 = 12;
/// Master transmit FIFO status
pub const BITM_I2C_I2CMSTA_TXFSTA: u16 = 0x0003;
/// Master transmit request
pub const BITM_I2C_I2CMSTA_TXREQ: u16 = 0x0004;
/// Master receive request
pub const BITM_I2C_I2CMSTA_RXREQ: u16 = 0x0008;
/// ACK not received in response to an address
pub const BITM_I2C_I2CMSTA_NACKADDR: u16 = 0x0010;
/// Arbitration lost
pub const BITM_I2C_I2CMSTA_ALOST: u16 = 0x0020;
/// Master busy
pub const BITM_I2C_I2CMSTA_BUSY: u16 = 0x0040;
/// ACK not received in response to data write
pub const BITM_I2C_I2CMSTA_NACKDATA: u16 = 0x0080;
/// Transaction complete or stop detected
pub const BITM_I2C_I2CMSTA_TCOMP: u16 = 0x0100;
/// Master receive FIFO overflow
pub const BITM_I2C_I2CMSTA_RXOF: u16 = 0x0200;
/// Line is busy
pub const BITM_I2C_I2CMSTA_LINEBUSY: u16 = 0x0400;
/// STOP driven by this I2C master
pub const BITM_I2C_I2CMSTA_MSTOP: u16 = 0x0800;
/// Master transmit underflow
pub const BITM_I2C_I2CMSTA_TXUR: u16 = 0x1000;

// I2C_I2CMRXCNT
pub const BITP_I2C_I2CMRXCNT_VALUE: u32 = 0;
pub const BITP_I2C_I2CMRXCNT_EXTEND: u32 = 8;
/// Receive count
pub const BITM_I2C_I2CMRXCNT_VALUE: u16 = 0x00FF;
/// Extended read
pub const BITM_I2C_I2CMRXCNT_EXTEND: u16 = 0x0100;

// I2C_I2CDIV
pub const BITP_I2C_I2CDIV_LOW: u32 = 0;
pub const BITP_I2C_I2CDIV_HIGH: u32 = 8;
/// Serial clock low time
pub const BITM_I2C_I2CDIV_LOW: u16 = 0x00FF;
/// Serial clock high time
pub const BITM_I2C_I2CDIV_HIGH: u16 = 0xFF00;

// I2C_I2CSCON
pub const BITP_I2C_I2CSCON_SLVEN: u32 = 0;
pub const BITP_I2C_I2CSCON_ADR10EN: u32 = 1;
pub const BITP_I2C_I2CSCON_GCEN: u32 = 2;
pub const BITP_I2C_I2CSCON_HGCEN: u32 = 3;
pub const BITP_I2C_I2CSCON_GCSBCLR: u32 = 4;
pub const BITP_I2C_I2CSCON_EARLYTXR: u32 = 5;
pub const BITP_I2C_I2CSCON_STRETCHSCL: u32 = 6;
pub const BITP_I2C_I2CSCON_NACK: u32 = 7;
pub const BITP_I2C_I2CSCON_IENSTOP: u32 = 8;
pub const BITP_I2C_I2CSCON_IENSRX: u32 = 9;
pub const BITP_I2C_I2CSCON_IENSTX: u32 = 10;
pub const BITP_I2C_I2CSCON_SXMITDEC: u32 = 11;
pub const BITP_I2C_I2CSCON_IENREPST: u32 = 12;
pub const BITP_I2C_I2CSCON_SRXDMA: u32 = 13;
pub const BITP_I2C_I2CSCON_STXDMA: u32 = 14;
/// Slave enable
pub const BITM_I2C_I2CSCON_SLVEN: u16 = 0x0001;
/// Enabled 10-bit addressing
pub const BITM_I2C_I2CSCON_ADR10EN: u16 = 0x0002;
/// General call enable
pub const BITM_I2C_I2CSCON_GCEN: u16 = 0x0004;
/// Hardware general call enable
pub const BITM_I2C_I2CSCON_HGCEN: u16 = 0x0008;
/// General call status bit clear
pub const BITM_I2C_I2CSCON_GCSBCLR: u16 = 0x0010;
/// Early transmit request mode
pub const BITM_I2C_I2CSCON_EARLYTXR: u16 = 0x0020;
/// Stretch SCL enable
pub const BITM_I2C_I2CSCON_STRETCHSCL: u16 = 0x0040;
/// NACK next communication
pub const BITM_I2C_I2CSCON_NACK: u16 = 0x0080;
/// Stop condition detected interrupt enable
pub const BITM_I2C_I2CSCON_IENSTOP: u16 = 0x0100;
/// Slave receive request interrupt enable
pub const BITM_I2C_I2CSCON_IENSRX: u16 = 0x0200;
/// Slave transmit request interrupt enable
pub const BITM_I2C_I2CSCON_IENSTX: u16 = 0x0400;
/// Decrement slave TX FIFO status when a byte has been transmitted
pub const BITM_I2C_I2CSCON_SXMITDEC: u16 = 0x0800;
/// Repeated start interrupt enable
pub const BITM_I2C_I2CSCON_IENREPST: u16 = 0x1000;
/// Enable slave Rx DMA request
pub const BITM_I2C_I2CSCON_SRXDMA: u16 = 0x2000;
/// Enable slave Tx DMA request
pub const BITM_I2C_I2CSCON_STXDMA: u16 = 0x4000;

// I2C_I2CSSTA
pub const BITP_I2C_I2CSSTA_TXFSEREQ: u32 = 0;
pub const BITP_I2C_I2CSSTA_TXUR: u32 = 1;
pub const BITP_I2C_I2CSSTA_TXREQ: u32 = 2;
pub const BITP_I2C_I2CSSTA_RXREQ: u32 = 3;
pub const BITP_I2C_I2CSSTA_RXOF: u32 = 4;
pub const BITP_I2C_I2CSSTA_NOACK: u32 = 5;
pub const BITP_I2C_I2CSSTA_BUSY: u32 = 6;
pub const BITP_I2C_I2CSSTA_GCINT: u32 = 7;
pub const BITP_I2C_I2CSSTA_GCID: u32 = 8;
pub const BITP_I2C_I2CSSTA_STOP: u32 = 10;
pub const BITP_I2C_I2CSSTA_IDMAT: u32 = 11;
pub const BITP_I2C_I2CSSTA_REPSTART: u32 = 13;
pub const BITP_I2C_I2CSSTA_START: u32 = 14;
/// Slave Tx FIFO status or early request
pub const BITM_I2C_I2CSSTA_TXFSEREQ: u16 = 0x0001;
/// Slave transmit FIFO underflow
pub const BITM_I2C_I2CSSTA_TXUR: u16 = 0x0002;
/// Slave transmit request or slave transmit interrupt
pub const BITM_I2C_I2CSSTA_TXREQ: u16 = 0x0004;
/// Slave receive request
pub const BITM_I2C_I2CSSTA_RXREQ: u16 = 0x0008;
/// Slave receive FIFO overflow
pub const BITM_I2C_I2CSSTA_RXOF: u16 = 0x0010;
/// ACK not generated by the slave
pub const BITM_I2C_I2CSSTA_NOACK: u16 = 0x0020;
/// Slave busy
pub const BITM_I2C_I2CSSTA_BUSY: u16 = 0x0040;
/// General call interrupt
pub const BITM_I2C_I2CSSTA_GCINT: u16 = 0x0080;
/// General ID
pub const BITM_I2C_I2CSSTA_GCID: u16 = 0x0300;
/// Stop after start and matching address
pub const BITM_I2C_I2CSSTA_STOP: u16 = 0x0400;
/// Device ID matched
pub const BITM_I2C_I2CSSTA_IDMAT: u16 = 0x1800;
/// Repeated start and matching address
pub const BITM_I2C_I2CSSTA_REPSTART: u16 = 0x2000;
/// Start and matching address
pub const BITM_I2C_I2CSSTA_START: u16 = 0x4000;

// I2C_I2CFSTA
pub const BITP_I2C_I2CFSTA_STXFSTA: u32 = 0;
pub const BITP_I2C_I2CFSTA_SRXFSTA: u32 = 2;
pub const BITP_I2C_I2CFSTA_MTXFSTA: u32 = 4;
pub const BITP_I2C_I2CFSTA_MRXFSTA: u32 = 6;
pub const BITP_I2C_I2CFSTA_SFLUSH: u32 = 8;
pub const BITP_I2C_I2CFSTA_MFLUSH: u32 = 9;
/// Slave transmit FIFO status
pub const BITM_I2C_I2CFSTA_STXFSTA: u16 = 0x0003;
/// Slave receive FIFO status
pub const BITM_I2C_I2CFSTA_SRXFSTA: u16 = 0x000C;
/// Master transmit FIFO status
pub const BITM_I2C_I2CFSTA_MTXFSTA: u16 = 0x0030;
/// Master receive FIFO status
pub const BITM_I2C_I2CFSTA_MRXFSTA: u16 = 0x00C0;
/// Flush the slave transmit FIFO
pub const BITM_I2C_I2CFSTA_SFLUSH: u16 = 0x0100;
/// Flush the master transmit FIFO
pub const BITM_I2C_I2CFSTA_MFLUSH: u16 = 0x0200;
/// FIFO empty
pub const ENUM_I2C_I2CFSTA_STXFSTA_EMPTY: u16 = 0x0000;
/// One byte in FIFO
pub const ENUM_I2C_I2CFSTA_STXFSTA_ONEBYTE: u16 = 0x0001;
/// FIFO full
pub const ENUM_I2C_I2CFSTA_STXFSTA_TWOBYTES: u16 = 0x0002;
/// FIFO empty
pub const ENUM_I2C_I2CFSTA_SRXFSTA_EMPTY: u16 = 0x0000;
/// One byte in FIFO
pub const ENUM_I2C_I2CFSTA_SRXFSTA_ONEBYTE: u16 = 0x0004;
/// FIFO full
pub const ENUM_I2C_I2CFSTA_SRXFSTA_TWOBYTES: u16 = 0x0008;
/// FIFO empty
pub const ENUM_I2C_I2CFSTA_MTXFSTA_EMPTY: u16 = 0x0000;
/// One byte in FIFO
pub const ENUM_I2C_I2CFSTA_MTXFSTA_ONEBYTE: u16 = 0x0010;
/// FIFO full
pub const ENUM_I2C_I2CFSTA_MTXFSTA_TWOBYTES: u16 = 0x0020;
/// FIFO empty
pub const ENUM_I2C_I2CFSTA_MRXFSTA_EMPTY: u16 = 0x0000;
/// One byte in FIFO
pub const ENUM_I2C_I2CFSTA_MRXFSTA_ONEBYTE: u16 = 0x0040;
/// FIFO full
pub const ENUM_I2C_I2CFSTA_MRXFSTA_TWOBYTES: u16 = 0x0080;

// I2C_I2CSHCON
pub const BITP_I2C_I2CSHCON_RESET: u32 = 0;
/// Reset START STOP detect circuit
pub const BITM_I2C_I2CSHCON_RESET: u16 = 0x0001;

// I2C_I2CTCTL
pub const BITP_I2C_I2CTCTL_THDATIN: u32 = 0;
/// Data in hold start
pub const BITM_I2C_I2CTCTL_THDATIN: u16 = 0x001F;

// I2C_I2CMRX
pub const BITP_I2C_I2CMRX_VALUE: u32 = 0;
/// Master receive data
pub const BITM_I2C_I2CMRX_VALUE: u16 = 0xFFFF;

// I2C_I2CMTX
pub const BITP_I2C_I2CMTX_VALUE: u32 = 0;
/// Master transmit data
pub const BITM_I2C_I2CMTX_VALUE: u16 = 0xFFFF;

// I2C_I2CMCRXCNT
pub const BITP_I2C_I2CMCRXCNT_VALUE: u32 = 0;
/// Master current receive data count
pub const BITM_I2C_I2CMCRXCNT_VALUE: u16 = 0xFFFF;

// I2C_I2CADR1
pub const BITP_I2C_I2CADR1_VALUE: u32 = 0;
/// 1st master address byte
pub const BITM_I2C_I2CADR1_VALUE: u16 = 0xFFFF;

// I2C_I2CADR2
pub const BITP_I2C_I2CADR2_VALUE: u32 = 0;
/// 2nd master address byte
pub const BITM_I2C_I2CADR2_VALUE: u16 = 0xFFFF;

// I2C_I2CBYT
pub const BITP_I2C_I2CBYT_VALUE: u32 = 0;
/// Start byte
pub const BITM_I2C_I2CBYT_VALUE: u16 = 0xFFFF;

// I2C_I2CSRX
pub const BITP_I2C_I2CSRX_VALUE: u32 = 0;
/// Slave receive
pub const BITM_I2C_I2CSRX_VALUE: u16 = 0xFFFF;

// I2C_I2CSTX
pub const BITP_I2C_I2CSTX_VALUE: u32 = 0;
/// Slave transmit
pub const BITM_I2C_I2CSTX_VALUE: u16 = 0xFFFF;

// I2C_I2CALT
pub const BITP_I2C_I2CALT_VALUE: u32 = 0;
/// Hardware general call ID
pub const BITM_I2C_I2CALT_VALUE: u16 = 0xFFFF;

// I2C_I2CID0
pub const BITP_I2C_I2CID0_VALUE: u32 = 0;
/// 1st slave address device ID
pub const BITM_I2C_I2CID0_VALUE: u16 = 0xFFFF;

// I2C_I2CID1
pub const BITP_I2C_I2CID1_VALUE: u32 = 0;
/// 2nd slave address device ID
pub const BITM_I2C_I2CID1_VALUE: u16 = 0xFFFF;

// I2C_I2CID2
pub const BITP_I2C_I2CID2_VALUE: u32 = 0;
/// 3rd slave address device ID
pub const BITM_I2C_I2CID2_VALUE: u16 = 0xFFFF;

// I2C_I2CID3
pub const BITP_I2C_I2CID3_VALUE: u32 = 0;
/// 4th slave address device ID
pub const BITM_I2C_I2CID3_VALUE: u16 = 0xFFFF;
