// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Parallel display interface.

// Generated register constants for pdi.

// PDI registers
/// PDI Configuration Register
pub const REG_PDI_PDI_CFG: u32 = 0x4003_0000;
/// PDI Interrupt Set Register
pub const REG_PDI_PDI_INT_SET: u32 = 0x4003_0004;
/// PDI Interrupt Clear Register
pub const REG_PDI_PDI_INT_CLR: u32 = 0x4003_0008;
/// PDI Status Register
pub const REG_PDI_PDI_STAT: u32 = 0x4003_000C;
/// PDI Command Register
pub const REG_PDI_PDI_CMD: u32 = 0x4003_0010;
/// PDI Frame Data Count Register
pub const REG_PDI_PDI_FRDATA_N: u32 = 0x4003_0014;
/// PDI Parameter FIFO
pub const REG_PDI_PDI_FIFO: u32 = 0x4003_0018;
/// PDI Interface Timing Register
pub const REG_PDI_PDI_IF_TIMING: u32 = 0x4003_001C;

// PDI_PDI_CFG
pub const BITP_PDI_PDI_CFG_PDI_EN: u32 = 0;
pub const BITP_PDI_PDI_CFG_DWIDTH_BPP: u32 = 1;
pub const BITP_PDI_PDI_CFG_DBI_TYPE: u32 = 3;
pub const BITP_PDI_PDI_CFG_DMA_EN: u32 = 5;
pub const BITP_PDI_PDI_CFG_FLSH_FIFO: u32 = 6;
pub const BITP_PDI_PDI_CFG_END_XFER: u32 = 7;
/// PDI enable
pub const BITM_PDI_PDI_CFG_PDI_EN: u32 = 0x0000_0001;
/// Data width in bits per pixel
pub const BITM_PDI_PDI_CFG_DWIDTH_BPP: u32 = 0x0000_0006;
/// DBI interface type
pub const BITM_PDI_PDI_CFG_DBI_TYPE: u32 = 0x0000_0018;
/// DMA enable
pub const BITM_PDI_PDI_CFG_DMA_EN: u32 = 0x0000_0020;
/// Flush the FIFO
pub const BITM_PDI_PDI_CFG_FLSH_FIFO: u32 = 0x0000_0040;
/// End the current transfer
pub const BITM_PDI_PDI_CFG_END_XFER: u32 = 0x0000_0080;

// PDI_PDI_INT_SET
pub const BITP_PDI_PDI_INT_SET_SET_TX_IEN: u32 = 0;
pub const BITP_PDI_PDI_INT_SET_SET_RX_IEN: u32 = 1;
pub const BITP_PDI_PDI_INT_SET_SET_TE_IEN: u32 = 2;
pub const BITP_PDI_PDI_INT_SET_SET_DONE_IEN: u32 = 3;
pub const BITP_PDI_PDI_INT_SET_SET_CMD_DONE_IEN: u32 = 4;
pub const BITP_PDI_PDI_INT_SET_SET_CMD_WR_ERR_IEN: u32 = 5;
pub const BITP_PDI_PDI_INT_SET_SET_FIFO_OVF_IEN: u32 = 6;
pub const BITP_PDI_PDI_INT_SET_SET_FIFO_UDF_IEN: u32 = 7;
/// Set transmit interrupt enable
pub const BITM_PDI_PDI_INT_SET_SET_TX_IEN: u32 = 0x0000_0001;
/// Set receive interrupt enable
pub const BITM_PDI_PDI_INT_SET_SET_RX_IEN: u32 = 0x0000_0002;
/// Set tearing effect interrupt enable
pub const BITM_PDI_PDI_INT_SET_SET_TE_IEN: u32 = 0x0000_0004;
/// Set transfer done interrupt enable
pub const BITM_PDI_PDI_INT_SET_SET_DONE_IEN: u32 = 0x0000_0008;
/// Set command done interrupt enable
pub const BITM_PDI_PDI_INT_SET_SET_CMD_DONE_IEN: u32 = 0x0000_0010;
/// Set command write error interrupt enable
pub const BITM_PDI_PDI_INT_SET_SET_CMD_WR_ERR_IEN: u32 = 0x0000_0020;
/// Set FIFO overflow interrupt enable
pub const BITM_PDI_PDI_INT_SET_SET_FIFO_OVF_IEN: u32 = 0x0000_0040;
/// Set FIFO underflow interrupt enable
pub const BITM_PDI_PDI_INT_SET_SET_FIFO_UDF_IEN: u32 = 0x0000_0080;

// PDI_PDI_INT_CLR
pub const BITP_PDI_PDI_INT_CLR_CLR_TX_IEN: u32 = 0;
pub const BITP_PDI_PDI_INT_CLR_CLR_RX_IEN: u32 = 1;
pub const BITP_PDI_PDI_INT_CLR_CLR_TE_IEN: u32 = 2;
pub const BITP_PDI_PDI_INT_CLR_CLR_DONE_IEN: u32 = 3;
pub const BITP_PDI_PDI_INT_CLR_CLR_CMD_DONE_IEN: u32 = 4;
pub const BITP_PDI_PDI_INT_CLR_CLR_CMD_WR_ERR_IEN: u32 = 5;
pub const BITP_PDI_PDI_INT_CLR_CLR_FIFO_OVF_IEN: u32 = 6;
pub const BITP_PDI_PDI_INT_CLR_CLR_FIFO_UDF_IEN: u32 = 7;
/// Clear transmit interrupt enable
pub const BITM_PDI_PDI_INT_CLR_CLR_TX_IEN: u32 = 0x0000_0001;
/// Clear receive interrupt enable
pub const BITM_PDI_PDI_INT_CLR_CLR_RX_IEN: u32 = 0x0000_0002;
/// Clear tearing effect interrupt enable
pub const BITM_PDI_PDI_INT_CLR_CLR_TE_IEN: u32 = 0x0000_0004;
/// Clear transfer done interrupt enable
pub const BITM_PDI_PDI_INT_CLR_CLR_DONE_IEN: u32 = 0x0000_0008;
/// Clear command done interrupt enable
pub const BITM_PDI_PDI_INT_CLR_CLR_CMD_DONE_IEN: u32 = 0x0000_0010;
/// Clear command write error interrupt enable
pub const BITM_PDI_PDI_INT_CLR_CLR_CMD_WR_ERR_IEN: u32 = 0x0000_0020;
/// Clear FIFO overflow interrupt enable
pub const BITM_PDI_PDI_INT_CLR_CLR_FIFO_OVF_IEN: u32 = 0x0000_0040;
/// Clear FIFO underflow interrupt enable
pub const BITM_PDI_PDI_INT_CLR_CLR_FIFO_UDF_IEN: u32 = 0x0000_0080;

// PDI_PDI_STAT
pub const BITP_PDI_PDI_STAT_TX_IRQ: u32 = 0;
pub const BITP_PDI_PDI_STAT_RX_IRQ: u32 = 1;
pub const BITP_PDI_PDI_STAT_TE_IRQ: u32 = 2;
pub const BITP_PDI_PDI_STAT_DONE_IRQ: u32 = 3;
pub const BITP_PDI_PDI_STAT_CMD_DONE: u32 = 4;
pub const BITP_PDI_PDI_STAT_CMD_WR_ERR: u32 = 5;
pub const BITP_PDI_PDI_STAT_FIFO_OVF: u32 = 6;
pub const BITP_PDI_PDI_STAT_FIFO_UDF: u32 = 7;
pub const BITP_PDI_PDI_STAT_FIFO_STAT: u32 = 8;
pub const BITP_PDI_PDI_STAT_FIFO_EMPTY: u32 = 11;
pub const BITP_PDI_PDI_STAT_FIFO_FULL: u32 = 12;
/// Transmit interrupt
pub const BITM_PDI_PDI_STAT_TX_IRQ: u32 = 0x0000_0001;
/// Receive interrupt
pub const BITM_PDI_PDI_STAT_RX_IRQ: u32 = 0x0000_0002;
/// Tearing effect interrupt
pub const BITM_PDI_PDI_STAT_TE_IRQ: u32 = 0x0000_0004;
/// Transfer done interrupt
pub const BITM_PDI_PDI_STAT_DONE_IRQ: u32 = 0x0000_0008;
/// Command done
pub const BITM_PDI_PDI_STAT_CMD_DONE: u32 = 0x0000_0010;
/// Command write error
pub const BITM_PDI_PDI_STAT_CMD_WR_ERR: u32 = 0x0000_0020;
/// FIFO overflow
pub const BITM_PDI_PDI_STAT_FIFO_OVF: u32 = 0x0000_0040;
/// FIFO underflow
pub const BITM_PDI_PDI_STAT_FIFO_UDF: u32 = 0x0000_0080;
/// FIFO fill level
pub const BITM_PDI_PDI_STAT_FIFO_STAT: u32 = 0x0000_0700;
/// FIFO empty
pub const BITM_PDI_PDI_STAT_FIFO_EMPTY: u32 = 0x0000_0800;
/// FIFO full
pub const BITM_PDI_PDI_STAT_FIFO_FULL: u32 = 0x0000_1000;

// PDI_PDI_CMD
pub const BITP_PDI_PDI_CMD_CMD: u32 = 0;
pub const BITP_PDI_PDI_CMD_N_PARAM: u32 = 8;
pub const BITP_PDI_PDI_CMD_FR_DATA: u32 = 14;
pub const BITP_PDI_PDI_CMD_WR_RD: u32 = 15;
/// Display command
pub const BITM_PDI_PDI_CMD_CMD: u32 = 0x0000_00FF;
/// Number of command parameters
pub const BITM_PDI_PDI_CMD_N_PARAM: u32 = 0x0000_3F00;
/// Frame data transfer
pub const BITM_PDI_PDI_CMD_FR_DATA: u32 = 0x0000_4000;
/// Write or read transfer
pub const BITM_PDI_PDI_CMD_WR_RD: u32 = 0x0000_8000;

// PDI_PDI_FRDATA_N
pub const BITP_PDI_PDI_FRDATA_N_FR_DATA_N: u32 = 0;
/// Number of frame data words
pub const BITM_PDI_PDI_FRDATA_N_FR_DATA_N: u32 = 0x0003_FFFF;

// PDI_PDI_IF_TIMING
pub const BITP_PDI_PDI_IF_TIMING_TCSF: u32 = 0;
pub const BITP_PDI_PDI_IF_TIMING_TWRL_RDL: u32 = 4;
pub const BITP_PDI_PDI_IF_TIMING_TWRH_RDH: u32 = 12;
pub const BITP_PDI_PDI_IF_TIMING_TCSH: u32 = 20;
pub const BITP_PDI_PDI_IF_TIMING_TAS_AH: u32 = 24;
/// Chip select setup time
pub const BITM_PDI_PDI_IF_TIMING_TCSF: u32 = 0x0000_000F;
/// Write or read strobe low time
pub const BITM_PDI_PDI_IF_TIMING_TWRL_RDL: u32 = 0x0000_0FF0;
/// Write or read strobe high time
pub const BITM_PDI_PDI_IF_TIMING_TWRH_RDH: u32 = 0x000F_F000;
/// Chip select hold time
pub const BITM_PDI_PDI_IF_TIMING_TCSH: u32 = 0x00F0_0000;
/// Address setup and hold time
pub const BITM_PDI_PDI_IF_TIMING_TAS_AH: u32 = 0x0F00_0000;

// PDI_PDI_FIFO
pub const BITP_PDI_PDI_FIFO_VALUE: u32 = 0;
/// PDI Parameter FIFO
pub const BITM_PDI_PDI_FIFO_VALUE: u32 = 0xFFFF_FFFF;
