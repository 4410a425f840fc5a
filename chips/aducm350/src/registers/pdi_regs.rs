// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for pdi.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub PdiRegisters {
        /// PDI Configuration Register
        (0x0000 => pub pdi_cfg: ReadWrite<u32, PDI_CFG::Register>),
        /// PDI Interrupt Set Register
        (0x0004 => pub pdi_int_set: WriteOnly<u32, PDI_INT_SET::Register>),
        /// PDI Interrupt Clear Register
        (0x0008 => pub pdi_int_clr: WriteOnly<u32, PDI_INT_CLR::Register>),
        /// PDI Status Register
        (0x000c => pub pdi_stat: ReadWrite<u32, PDI_STAT::Register>),
        /// PDI Command Register
        (0x0010 => pub pdi_cmd: ReadWrite<u32, PDI_CMD::Register>),
        /// PDI Frame Data Count Register
        (0x0014 => pub pdi_frdata_n: ReadWrite<u32, PDI_FRDATA_N::Register>),
        /// PDI Parameter FIFO
        (0x0018 => pub pdi_fifo: ReadWrite<u32>),
        /// PDI Interface Timing Register
        (0x001c => pub pdi_if_timing: ReadWrite<u32, PDI_IF_TIMING::Register>),
        (0x0020 => @END),
    }
}

register_bitfields![u32,
    pub PDI_CFG [
        PDI_EN OFFSET(0) NUMBITS(1) [],
        DWIDTH_BPP OFFSET(1) NUMBITS(2) [],
        DBI_TYPE OFFSET(3) NUMBITS(2) [],
        DMA_EN OFFSET(5) NUMBITS(1) [],
        FLSH_FIFO OFFSET(6) NUMBITS(1) [],
        END_XFER OFFSET(7) NUMBITS(1) [],
    ],
    pub PDI_INT_SET [
        SET_TX_IEN OFFSET(0) NUMBITS(1) [],
        SET_RX_IEN OFFSET(1) NUMBITS(1) [],
        SET_TE_IEN OFFSET(2) NUMBITS(1) [],
        SET_DONE_IEN OFFSET(3) NUMBITS(1) [],
        SET_CMD_DONE_IEN OFFSET(4) NUMBITS(1) [],
        SET_CMD_WR_ERR_IEN OFFSET(5) NUMBITS(1) [],
        SET_FIFO_OVF_IEN OFFSET(6) NUMBITS(1) [],
        SET_FIFO_UDF_IEN OFFSET(7) NUMBITS(1) [],
    ],
    pub PDI_INT_CLR [
        CLR_TX_IEN OFFSET(0) NUMBITS(1) [],
        CLR_RX_IEN OFFSET(1) NUMBITS(1) [],
        CLR_TE_IEN OFFSET(2) NUMBITS(1) [],
        CLR_DONE_IEN OFFSET(3) NUMBITS(1) [],
        CLR_CMD_DONE_IEN OFFSET(4) NUMBITS(1) [],
        CLR_CMD_WR_ERR_IEN OFFSET(5) NUMBITS(1) [],
        CLR_FIFO_OVF_IEN OFFSET(6) NUMBITS(1) [],
        CLR_FIFO_UDF_IEN OFFSET(7) NUMBITS(1) [],
    ],
    pub PDI_STAT [
        TX_IRQ OFFSET(0) NUMBITS(1) [],
        RX_IRQ OFFSET(1) NUMBITS(1) [],
        TE_IRQ OFFSET(2) NUMBITS(1) [],
        DONE_IRQ OFFSET(3) NUMBITS(1) [],
        CMD_DONE OFFSET(4) NUMBITS(1) [],
        CMD_WR_ERR OFFSET(5) NUMBITS(1) [],
        FIFO_OVF OFFSET(6) NUMBITS(1) [],
        FIFO_UDF OFFSET(7) NUMBITS(1) [],
        FIFO_STAT OFFSET(8) NUMBITS(3) [],
        FIFO_EMPTY OFFSET(11) NUMBITS(1) [],
        FIFO_FULL OFFSET(12) NUMBITS(1) [],
    ],
    pub PDI_CMD [
        CMD OFFSET(0) NUMBITS(8) [],
        N_PARAM OFFSET(8) NUMBITS(6) [],
        FR_DATA OFFSET(14) NUMBITS(1) [],
        WR_RD OFFSET(15) NUMBITS(1) [],
    ],
    pub PDI_FRDATA_N [
        FR_DATA_N OFFSET(0) NUMBITS(18) [],
    ],
    pub PDI_IF_TIMING [
        TCSF OFFSET(0) NUMBITS(4) [],
        TWRL_RDL OFFSET(4) NUMBITS(8) [],
        TWRH_RDH OFFSET(12) NUMBITS(8) [],
        TCSH OFFSET(20) NUMBITS(4) [],
        TAS_AH OFFSET(24) NUMBITS(4) [],
    ],
];

pub const PDI_BASE: StaticRef<PdiRegisters> =
    unsafe { StaticRef::new(0x4003_0000 as *const PdiRegisters) };
