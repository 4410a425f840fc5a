// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for i2s.

use crate::static_ref::StaticRef;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub I2sRegisters {
        /// Channel 1 LSBs
        (0x0000 => pub i2s_out1l: ReadWrite<u16, IS_OUTL::Register>),
        (0x0002 => _reserved0),
        /// Channel 1 MSBs
        (0x0004 => pub i2s_out1h: ReadWrite<u16, IS_OUTH::Register>),
        (0x0006 => _reserved1),
        /// Channel 2 LSBs
        (0x0008 => pub i2s_out2l: ReadWrite<u16, IS_OUTL::Register>),
        (0x000a => _reserved2),
        /// Channel 2 MSBs
        (0x000c => pub i2s_out2h: ReadWrite<u16, IS_OUTH::Register>),
        (0x000e => _reserved3),
        /// I2S format modes 1
        (0x0010 => pub i2s_mode1: ReadWrite<u16, I2S_MODE1::Register>),
        (0x0012 => _reserved4),
        /// I2S format modes 2
        (0x0014 => pub i2s_mode2: ReadWrite<u16, I2S_MODE2::Register>),
        (0x0016 => _reserved5),
        /// I2S configuration 1
        (0x0018 => pub i2s_cfg1: ReadWrite<u16, I2S_CFG1::Register>),
        (0x001a => _reserved6),
        /// I2S configuration 2
        (0x001c => pub i2s_cfg2: ReadWrite<u16, I2S_CFG2::Register>),
        (0x001e => _reserved7),
        /// I2S status
        (0x0020 => pub i2s_stat: ReadWrite<u16, I2S_STAT::Register>),
        (0x0022 => _reserved8),
        (0x0024 => @END),
    }
}

register_bitfields![u16,
    pub IS_OUTL [
        SAMPLE OFFSET(0) NUMBITS(16) [],
    ],
    pub IS_OUTH [
        SAMPLE OFFSET(0) NUMBITS(8) [],
    ],
    pub I2S_MODE1 [
        SDATA_FMT OFFSET(0) NUMBITS(2) [
            I2S = 0,
            LJ = 1,
            RJ24 = 2,
            RJ16 = 3,
        ],
        SAI OFFSET(2) NUMBITS(3) [],
        FS OFFSET(5) NUMBITS(3) [],
        SLOT_WIDTH OFFSET(8) NUMBITS(2) [],
        DATA_WIDTH OFFSET(10) NUMBITS(1) [],
        LR_MODE OFFSET(11) NUMBITS(1) [],
        SAI_MSB OFFSET(12) NUMBITS(1) [],
        BCLK_RATE OFFSET(13) NUMBITS(1) [],
        SAI_MS OFFSET(14) NUMBITS(1) [],
        DRV_HIZ OFFSET(15) NUMBITS(1) [],
    ],
    pub I2S_MODE2 [
        CMAP_C1 OFFSET(0) NUMBITS(4) [],
        CMAP_C2 OFFSET(4) NUMBITS(4) [],
        DRV_CH1 OFFSET(8) NUMBITS(1) [],
        DRV_CH2 OFFSET(9) NUMBITS(1) [],
        BCLK_EDGE OFFSET(10) NUMBITS(1) [],
        LR_POL OFFSET(11) NUMBITS(1) [],
    ],
    pub I2S_CFG1 [
        I2S_EN OFFSET(0) NUMBITS(1) [],
        CHAN_SEL1 OFFSET(1) NUMBITS(1) [],
        CHAN_SEL2 OFFSET(2) NUMBITS(1) [],
        TRAN_MODE OFFSET(3) NUMBITS(1) [],
        DMA_EN OFFSET(4) NUMBITS(1) [],
        REQ_EN OFFSET(5) NUMBITS(1) [],
        STAT_EN OFFSET(6) NUMBITS(1) [],
        AUTO_INCR OFFSET(7) NUMBITS(1) [],
        INCR_RST OFFSET(8) NUMBITS(1) [],
        FIFO_RST OFFSET(9) NUMBITS(1) [],
    ],
    pub I2S_CFG2 [
        SAMP_FREQ OFFSET(0) NUMBITS(4) [],
        REQ_FREQ OFFSET(4) NUMBITS(3) [],
        DMA_FREQ OFFSET(7) NUMBITS(3) [],
    ],
    pub I2S_STAT [
        FIFO_STAT OFFSET(0) NUMBITS(4) [],
        REQ_PEND OFFSET(4) NUMBITS(1) [],
        STAT_PEND OFFSET(5) NUMBITS(1) [],
    ],
];

pub const I2S_BASE: StaticRef<I2sRegisters> =
    unsafe { StaticRef::new(0x4000_5800 as *const I2sRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(IS_OUTL::SAMPLE.mask << IS_OUTL::SAMPLE.shift, BITM_I2S_I2S_OUT1L_SAMPLE);
        assert_eq!(IS_OUTL::SAMPLE.shift as u32, BITP_I2S_I2S_OUT1L_SAMPLE);
        assert_eq!(IS_OUTH::SAMPLE.mask << IS_OUTH::SAMPLE.shift, BITM_I2S_I2S_OUT1H_SAMPLE);
        assert_eq!(IS_OUTH::SAMPLE.shift as u32, BITP_I2S_I2S_OUT1H_SAMPLE);
        assert_eq!(I2S_MODE1::SDATA_FMT.mask << I2S_MODE1::SDATA_FMT.shift, BITM_I2S_I2S_MODE1_SDATA_FMT);
        assert_eq!(I2S_MODE1::SDATA_FMT.shift as u32, BITP_I2S_I2S_MODE1_SDATA_FMT);
        assert_eq!(I2S_MODE1::SAI.mask << I2S_MODE1::SAI.shift, BITM_I2S_I2S_MODE1_SAI);
        assert_eq!(I2S_MODE1::SAI.shift as u32, BITP_I2S_I2S_MODE1_SAI);
        assert_eq!(I2S_MODE1::FS.mask << I2S_MODE1::FS.shift, BITM_I2S_I2S_MODE1_FS);
        assert_eq!(I2S_MODE1::FS.shift as u32, BITP_I2S_I2S_MODE1_FS);
        assert_eq!(I2S_MODE1::SLOT_WIDTH.mask << I2S_MODE1::SLOT_WIDTH.shift, BITM_I2S_I2S_MODE1_SLOT_WIDTH);
        assert_eq!(I2S_MODE1::SLOT_WIDTH.shift as u32, BITP_I2S_I2S_MODE1_SLOT_WIDTH);
        assert_eq!(I2S_MODE1::DATA_WIDTH.mask << I2S_MODE1::DATA_WIDTH.shift, BITM_I2S_I2S_MODE1_DATA_WIDTH);
        assert_eq!(I2S_MODE1::DATA_WIDTH.shift as u32, BITP_I2S_I2S_MODE1_DATA_WIDTH);
        assert_eq!(I2S_MODE1::LR_MODE.mask << I2S_MODE1::LR_MODE.shift, BITM_I2S_I2S_MODE1_LR_MODE);
        assert_eq!(I2S_MODE1::LR_MODE.shift as u32, BITP_I2S_I2S_MODE1_LR_MODE);
        assert_eq!(I2S_MODE1::SAI_MSB.mask << I2S_MODE1::SAI_MSB.shift, BITM_I2S_I2S_MODE1_SAI_MSB);
        assert_eq!(I2S_MODE1::SAI_MSB.shift as u32, BITP_I2S_I2S_MODE1_SAI_MSB);
        assert_eq!(I2S_MODE1::BCLK_RATE.mask << I2S_MODE1::BCLK_RATE.shift, BITM_I2S_I2S_MODE1_BCLK_RATE);
        assert_eq!(I2S_MODE1::BCLK_RATE.shift as u32, BITP_I2S_I2S_MODE1_BCLK_RATE);
        assert_eq!(I2S_MODE1::SAI_MS.mask << I2S_MODE1::SAI_MS.shift, BITM_I2S_I2S_MODE1_SAI_MS);
        assert_eq!(I2S_MODE1::SAI_MS.shift as u32, BITP_I2S_I2S_MODE1_SAI_MS);
        assert_eq!(I2S_MODE1::DRV_HIZ.mask << I2S_MODE1::DRV_HIZ.shift, BITM_I2S_I2S_MODE1_DRV_HIZ);
        assert_eq!(I2S_MODE1::DRV_HIZ.shift as u32, BITP_I2S_I2S_MODE1_DRV_HIZ);
        assert_eq!(I2S_MODE2::CMAP_C1.mask << I2S_MODE2::CMAP_C1.shift, BITM_I2S_I2S_MODE2_CMAP_C1);
        assert_eq!(I2S_MODE2::CMAP_C1.shift as u32, BITP_I2S_I2S_MODE2_CMAP_C1);
        assert_eq!(I2S_MODE2::CMAP_C2.mask << I2S_MODE2::CMAP_C2.shift, BITM_I2S_I2S_MODE2_CMAP_C2);
        assert_eq!(I2S_MODE2::CMAP_C2.shift as u32, BITP_I2S_I2S_MODE2_CMAP_C2);
        assert_eq!(I2S_MODE2::DRV_CH1.mask << I2S_MODE2::DRV_CH1.shift, BITM_I2S_I2S_MODE2_DRV_CH1);
        assert_eq!(I2S_MODE2::DRV_CH1.shift as u32, BITP_I2S_I2S_MODE2_DRV_CH1);
        assert_eq!(I2S_MODE2::DRV_CH2.mask << I2S_MODE2::DRV_CH2.shift, BITM_I2S_I2S_MODE2_DRV_CH2);
        assert_eq!(I2S_MODE2::DRV_CH2.shift as u32, BITP_I2S_I2S_MODE2_DRV_CH2);
        assert_eq!(I2S_MODE2::BCLK_EDGE.mask << I2S_MODE2::BCLK_EDGE.shift, BITM_I2S_I2S_MODE2_BCLK_EDGE);
        assert_eq!(I2S_MODE2::BCLK_EDGE.shift as u32, BITP_I2S_I2S_MODE2_BCLK_EDGE);
        assert_eq!(I2S_MODE2::LR_POL.mask << I2S_MODE2::LR_POL.shift, BITM_I2S_I2S_MODE2_LR_POL);
        assert_eq!(I2S_MODE2::LR_POL.shift as u32, BITP_I2S_I2S_MODE2_LR_POL);
        assert_eq!(I2S_CFG1::I2S_EN.mask << I2S_CFG1::I2S_EN.shift, BITM_I2S_I2S_CFG1_I2S_EN);
        assert_eq!(I2S_CFG1::I2S_EN.shift as u32, BITP_I2S_I2S_CFG1_I2S_EN);
        assert_eq!(I2S_CFG1::CHAN_SEL1.mask << I2S_CFG1::CHAN_SEL1.shift, BITM_I2S_I2S_CFG1_CHAN_SEL1);
        assert_eq!(I2S_CFG1::CHAN_SEL1.shift as u32, BITP_I2S_I2S_CFG1_CHAN_SEL1);
        assert_eq!(I2S_CFG1::CHAN_SEL2.mask << I2S_CFG1::CHAN_SEL2.shift, BITM_I2S_I2S_CFG1_CHAN_SEL2);
        assert_eq!(I2S_CFG1::CHAN_SEL2.shift as u32, BITP_I2S_I2S_CFG1_CHAN_SEL2);
        assert_eq!(I2S_CFG1::TRAN_MODE.mask << I2S_CFG1::TRAN_MODE.shift, BITM_I2S_I2S_CFG1_TRAN_MODE);
        assert_eq!(I2S_CFG1::TRAN_MODE.shift as u32, BITP_I2S_I2S_CFG1_TRAN_MODE);
        assert_eq!(I2S_CFG1::DMA_EN.mask << I2S_CFG1::DMA_EN.shift, BITM_I2S_I2S_CFG1_DMA_EN);
        assert_eq!(I2S_CFG1::DMA_EN.shift as u32, BITP_I2S_I2S_CFG1_DMA_EN);
        assert_eq!(I2S_CFG1::REQ_EN.mask << I2S_CFG1::REQ_EN.shift, BITM_I2S_I2S_CFG1_REQ_EN);
        assert_eq!(I2S_CFG1::REQ_EN.shift as u32, BITP_I2S_I2S_CFG1_REQ_EN);
        assert_eq!(I2S_CFG1::STAT_EN.mask << I2S_CFG1::STAT_EN.shift, BITM_I2S_I2S_CFG1_STAT_EN);
        assert_eq!(I2S_CFG1::STAT_EN.shift as u32, BITP_I2S_I2S_CFG1_STAT_EN);
        assert_eq!(I2S_CFG1::AUTO_INCR.mask << I2S_CFG1::AUTO_INCR.shift, BITM_I2S_I2S_CFG1_AUTO_INCR);
        assert_eq!(I2S_CFG1::AUTO_INCR.shift as u32, BITP_I2S_I2S_CFG1_AUTO_INCR);
        assert_eq!(I2S_CFG1::INCR_RST.mask << I2S_CFG1::INCR_RST.shift, BITM_I2S_I2S_CFG1_INCR_RST);
        assert_eq!(I2S_CFG1::INCR_RST.shift as u32, BITP_I2S_I2S_CFG1_INCR_RST);
        assert_eq!(I2S_CFG1::FIFO_RST.mask << I2S_CFG1::FIFO_RST.shift, BITM_I2S_I2S_CFG1_FIFO_RST);
        assert_eq!(I2S_CFG1::FIFO_RST.shift as u32, BITP_I2S_I2S_CFG1_FIFO_RST);
        assert_eq!(I2S_CFG2::SAMP_FREQ.mask << I2S_CFG2::SAMP_FREQ.shift, BITM_I2S_I2S_CFG2_SAMP_FREQ);
        assert_eq!(I2S_CFG2::SAMP_FREQ.shift as u32, BITP_I2S_I2S_CFG2_SAMP_FREQ);
        assert_eq!(I2S_CFG2::REQ_FREQ.mask << I2S_CFG2::REQ_FREQ.shift, BITM_I2S_I2S_CFG2_REQ_FREQ);
        assert_eq!(I2S_CFG2::REQ_FREQ.shift as u32, BITP_I2S_I2S_CFG2_REQ_FREQ);
        assert_eq!(I2S_CFG2::DMA_FREQ.mask << I2S_CFG2::DMA_FREQ.shift, BITM_I2S_I2S_CFG2_DMA_FREQ);
        assert_eq!(I2S_CFG2::DMA_FREQ.shift as u32, BITP_I2S_I2S_CFG2_DMA_FREQ);
        assert_eq!(I2S_STAT::FIFO_STAT.mask << I2S_STAT::FIFO_STAT.shift, BITM_I2S_I2S_STAT_FIFO_STAT);
        assert_eq!(I2S_STAT::FIFO_STAT.shift as u32, BITP_I2S_I2S_STAT_FIFO_STAT);
        assert_eq!(I2S_STAT::REQ_PEND.mask << I2S_STAT::REQ_PEND.shift, BITM_I2S_I2S_STAT_REQ_PEND);
        assert_eq!(I2S_STAT::REQ_PEND.shift as u32, BITP_I2S_I2S_STAT_REQ_PEND);
        assert_eq!(I2S_STAT::STAT_PEND.mask << I2S_STAT::STAT_PEND.shift, BITM_I2S_I2S_STAT_STAT_PEND);
        assert_eq!(I2S_STAT::STAT_PEND.shift as u32, BITP_I2S_I2S_STAT_STAT_PEND);
    }

    #[test]
    fn registers_match_addresses() {
        let i2s = I2S_BASE.address();
        assert_eq!(REG_I2S_I2S_OUT1L as usize, i2s + offset_of!(I2sRegisters, i2s_out1l));
        assert_eq!(REG_I2S_I2S_OUT1H as usize, i2s + offset_of!(I2sRegisters, i2s_out1h));
        assert_eq!(REG_I2S_I2S_OUT2L as usize, i2s + offset_of!(I2sRegisters, i2s_out2l));
        assert_eq!(REG_I2S_I2S_OUT2H as usize, i2s + offset_of!(I2sRegisters, i2s_out2h));
        assert_eq!(REG_I2S_I2S_MODE1 as usize, i2s + offset_of!(I2sRegisters, i2s_mode1));
        assert_eq!(REG_I2S_I2S_MODE2 as usize, i2s + offset_of!(I2sRegisters, i2s_mode2));
        assert_eq!(REG_I2S_I2S_CFG1 as usize, i2s + offset_of!(I2sRegisters, i2s_cfg1));
        assert_eq!(REG_I2S_I2S_CFG2 as usize, i2s + offset_of!(I2sRegisters, i2s_cfg2));
        assert_eq!(REG_I2S_I2S_STAT as usize, i2s + offset_of!(I2sRegisters, i2s_stat));
    }
}
