// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! I2S serial port.

// Generated register constants for i2s.

// I2S registers
/// Channel 1 LSBs
pub const REG_I2S_I2S_OUT1L: u32 = 0x4000_5800;
/// Channel 1 MSBs
pub const REG_I2S_I2S_OUT1H: u32 = 0x4000_5804;
/// Channel 2 LSBs
pub const REG_I2S_I2S_OUT2L: u32 = 0x4000_5808;
/// Channel 2 MSBs
pub const REG_I2S_I2S_OUT2H: u32 = 0x4000_580C;
/// I2S format modes 1
pub const REG_I2S_I2S_MODE1: u32 = 0x4000_5810;
/// I2S format modes 2
pub const REG_I2S_I2S_MODE2: u32 = 0x4000_5814;
/// I2S configuration 1
pub const REG_I2S_I2S_CFG1: u32 = 0x4000_5818;
/// I2S configuration 2
pub const REG_I2S_I2S_CFG2: u32 = 0x4000_581C;
/// I2S status
pub const REG_I2S_I2S_STAT: u32 = 0x4000_5820;

// I2S_I2S_OUT1L
pub const BITP_I2S_I2S_OUT1L_SAMPLE: u32 = 0;
/// Lower half of the channel 1 sample
pub const BITM_I2S_I2S_OUT1L_SAMPLE: u16 = 0xFFFF;

// I2S_I2S_OUT1H
pub const BITP_I2S_I2S_OUT1H_SAMPLE: u32 = 0;
/// Upper byte of the channel 1 sample
pub const BITM_I2S_I2S_OUT1H_SAMPLE: u16 = 0x00FF;

// I2S_I2S_OUT2L
pub const BITP_I2S_I2S_OUT2L_SAMPLE: u32 = 0;
/// Lower half of the channel 2 sample
pub const BITM_I2S_I2S_OUT2L_SAMPLE: u16 = 0xFFFF;

// I2S_I2S_OUT2H
pub const BITP_I2S_I2S_OUT2H_SAMPLE: u32 = 0;
/// Upper byte of the channel 2 sample
pub const BITM_I2S_I2S_OUT2H_SAMPLE: u16 = 0x00FF;

// I2S_I2S_MODE1
pub const BITP_I2S_I2S_MODE1_SDATA_FMT: u32 = 0;
pub const BITP_I2S_I2S_MODE1_SAI: u32 = 2;
pub const BITP_I2S_I2S_MODE1_FS: u32 = 5;
pub const BITP_I2S_I2S_MODE1_SLOT_WIDTH: u32 = 8;
pub const BITP_I2S_I2S_MODE1_DATA_WIDTH: u32 = 10;
pub const BITP_I2S_I2S_MODE1_LR_MODE: u32 = 11;
pub const BITP_I2S_I2S_MODE1_SAI_MSB: u32 = 12;
pub const BITP_I2S_I2S_MODE1_BCLK_RATE: u32 = 13;
pub const BITP_I2S_I2S_MODE1_SAI_MS: u32 = 14;
pub const BITP_I2S_I2S_MODE1_DRV_HIZ: u32 = 15;
/// Serial data format
pub const BITM_I2S_I2S_MODE1_SDATA_FMT: u16 = 0x0003;
/// Serial audio interface channels per frame
pub const BITM_I2S_I2S_MODE1_SAI: u16 = 0x001C;
/// Sampling frequency
pub const BITM_I2S_I2S_MODE1_FS: u16 = 0x00E0;
/// Number of BCLK cycles per channel slot
pub const BITM_I2S_I2S_MODE1_SLOT_WIDTH: u16 = 0x0300;
/// Serial output data width
pub const BITM_I2S_I2S_MODE1_DATA_WIDTH: u16 = 0x0400;
/// Shape of LRCLK
pub const BITM_I2S_I2S_MODE1_LR_MODE: u16 = 0x0800;
/// First bit of each slot
pub const BITM_I2S_I2S_MODE1_SAI_MSB: u16 = 0x1000;
/// BCLKs per channel in a TDM stream
pub const BITM_I2S_I2S_MODE1_BCLK_RATE: u16 = 0x2000;
/// Master or slave mode
pub const BITM_I2S_I2S_MODE1_SAI_MS: u16 = 0x4000;
/// Drive or tristate unused bits
pub const BITM_I2S_I2S_MODE1_DRV_HIZ: u16 = 0x8000;
/// I2S, BCLK delay by 1
pub const ENUM_I2S_I2S_MODE1_SDATA_FMT_I2S: u16 = 0x0000;
/// Left justified
pub const ENUM_I2S_I2S_MODE1_SDATA_FMT_LJ: u16 = 0x0001;
/// Right justified, 24-bit data
pub const ENUM_I2S_I2S_MODE1_SDATA_FMT_RJ24: u16 = 0x0002;
/// Right justified, 16-bit data
pub const ENUM_I2S_I2S_MODE1_SDATA_FMT_RJ16: u16 = 0x0003;

// I2S_I2S_MODE2
pub const BITP_I2S_I2S_MODE2_CMAP_C1: u32 = 0;
pub const BITP_I2S_I2S_MODE2_CMAP_C2: u32 = 4;
pub const BITP_I2S_I2S_MODE2_DRV_CH1: u32 = 8;
pub const BITP_I2S_I2S_MODE2_DRV_CH2: u32 = 9;
pub const BITP_I2S_I2S_MODE2_BCLK_EDGE: u32 = 10;
pub const BITP_I2S_I2S_MODE2_LR_POL: u32 = 11;
/// Output slot for channel 1
pub const BITM_I2S_I2S_MODE2_CMAP_C1: u16 = 0x000F;
/// Output slot for channel 2
pub const BITM_I2S_I2S_MODE2_CMAP_C2: u16 = 0x00F0;
/// Drive channel 1 output
pub const BITM_I2S_I2S_MODE2_DRV_CH1: u16 = 0x0100;
/// Drive channel 2 output
pub const BITM_I2S_I2S_MODE2_DRV_CH2: u16 = 0x0200;
/// BCLK edge on which data is driven
pub const BITM_I2S_I2S_MODE2_BCLK_EDGE: u16 = 0x0400;
/// LRCLK polarity
pub const BITM_I2S_I2S_MODE2_LR_POL: u16 = 0x0800;

// I2S_I2S_CFG1
pub const BITP_I2S_I2S_CFG1_I2S_EN: u32 = 0;
pub const BITP_I2S_I2S_CFG1_CHAN_SEL1: u32 = 1;
pub const BITP_I2S_I2S_CFG1_CHAN_SEL2: u32 = 2;
pub const BITP_I2S_I2S_CFG1_TRAN_MODE: u32 = 3;
pub const BITP_I2S_I2S_CFG1_DMA_EN: u32 = 4;
pub const BITP_I2S_I2S_CFG1_REQ_EN: u32 = 5;
pub const BITP_I2S_I2S_CFG1_STAT_EN: u32 = 6;
pub const BITP_I2S_I2S_CFG1_AUTO_INCR: u32 = 7;
pub const BITP_I2S_I2S_CFG1_INCR_RST: u32 = 8;
pub const BITP_I2S_I2S_CFG1_FIFO_RST: u32 = 9;
/// I2S enable
pub const BITM_I2S_I2S_CFG1_I2S_EN: u16 = 0x0001;
/// Channel 1 enable
pub const BITM_I2S_I2S_CFG1_CHAN_SEL1: u16 = 0x0002;
/// Channel 2 enable
pub const BITM_I2S_I2S_CFG1_CHAN_SEL2: u16 = 0x0004;
/// Transfer mode
pub const BITM_I2S_I2S_CFG1_TRAN_MODE: u16 = 0x0008;
/// DMA enable
pub const BITM_I2S_I2S_CFG1_DMA_EN: u16 = 0x0010;
/// Data request interrupt enable
pub const BITM_I2S_I2S_CFG1_REQ_EN: u16 = 0x0020;
/// Status interrupt enable
pub const BITM_I2S_I2S_CFG1_STAT_EN: u16 = 0x0040;
/// Address auto increment
pub const BITM_I2S_I2S_CFG1_AUTO_INCR: u16 = 0x0080;
/// Reset address increment
pub const BITM_I2S_I2S_CFG1_INCR_RST: u16 = 0x0100;
/// Reset the FIFO
pub const BITM_I2S_I2S_CFG1_FIFO_RST: u16 = 0x0200;

// I2S_I2S_CFG2
pub const BITP_I2S_I2S_CFG2_SAMP_FREQ: u32 = 0;
pub const BITP_I2S_I2S_CFG2_REQ_FREQ: u32 = 4;
pub const BITP_I2S_I2S_CFG2_DMA_FREQ: u32 = 7;
/// Sampling frequency of the stream
pub const BITM_I2S_I2S_CFG2_SAMP_FREQ: u16 = 0x000F;
/// Data request interrupt frequency
pub const BITM_I2S_I2S_CFG2_REQ_FREQ: u16 = 0x0070;
/// DMA request frequency
pub const BITM_I2S_I2S_CFG2_DMA_FREQ: u16 = 0x0380;

// I2S_I2S_STAT
pub const BITP_I2S_I2S_STAT_FIFO_STAT: u32 = 0;
pub const BITP_I2S_I2S_STAT_REQ_PEND: u32 = 4;
pub const BITP_I2S_I2S_STAT_STAT_PEND: u32 = 5;
/// FIFO fill level
pub const BITM_I2S_I2S_STAT_FIFO_STAT: u16 = 0x000F;
/// Data request interrupt pending
pub const BITM_I2S_I2S_STAT_REQ_PEND: u16 = 0x0010;
/// Status interrupt pending
pub const BITM_I2S_I2S_STAT_STAT_PEND: u16 = 0x0020;
