// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! SPI controllers.

// Generated register constants for spi.

// SPI0 registers
/// Status
pub const REG_SPI0_SPISTA: u32 = 0x4000_4000;
/// Receive
pub const REG_SPI0_SPIRX: u32 = 0x4000_4004;
/// Transmit
pub const REG_SPI0_SPITX: u32 = 0x4000_4008;
/// Baud rate selection
pub const REG_SPI0_SPIDIV: u32 = 0x4000_400C;
/// SPI configuration
pub const REG_SPI0_SPICON: u32 = 0x4000_4010;
/// SPI DMA enable
pub const REG_SPI0_SPIDMA: u32 = 0x4000_4014;
/// Transfer byte count
pub const REG_SPI0_SPICNT: u32 = 0x4000_4018;

// SPI1 registers
/// Status
pub const REG_SPI1_SPISTA: u32 = 0x4000_4400;
/// Receive
pub const REG_SPI1_SPIRX: u32 = 0x4000_4404;
/// Transmit
pub const REG_SPI1_SPITX: u32 = 0x4000_4408;
/// Baud rate selection
pub const REG_SPI1_SPIDIV: u32 = 0x4000_440C;
/// SPI configuration
pub const REG_SPI1_SPICON: u32 = 0x4000_4410;
/// SPI DMA enable
pub const REG_SPI1_SPIDMA: u32 = 0x4000_4414;
/// Transfer byte count
pub const REG_SPI1_SPICNT: u32 = 0x4000_4418;

// SPIH registers
/// Status
pub const REG_SPIH_SPIH0STA: u32 = 0x4002_4000;
/// Receive
pub const REG_SPIH_SPIH0RX: u32 = 0x4002_4004;
/// Transmit
pub const REG_SPIH_SPIH0TX: u32 = 0x4002_4008;
/// Baud rate selection
pub const REG_SPIH_SPIH0DIV: u32 = 0x4002_400C;
/// SPI configuration
pub const REG_SPIH_SPIH0CON: u32 = 0x4002_4010;
/// SPI DMA enable
pub const REG_SPIH_SPIH0DMA: u32 = 0x4002_4014;
/// Transfer byte count
pub const REG_SPIH_SPIH0CNT: u32 = 0x4002_4018;

// SPI_SPISTA
pub const BITP_SPI_SPISTA_IRQ: u32 = 0;
pub const BITP_SPI_SPISTA_TXFSTA: u32 = 1;
pub const BITP_SPI_SPISTA_TXUR: u32 = 4;
pub const BITP_SPI_SPISTA_TX: u32 = 5;
pub const BITP_SPI_SPISTA_RX: u32 = 6;
pub const BITP_SPI_SPISTA_RXOF: u32 = 7;
pub const BITP_SPI_SPISTA_RXFSTA: u32 = 8;
pub const BITP_SPI_SPISTA_RXS: u32 = 11;
pub const BITP_SPI_SPISTA_CSERR: u32 = 12;
/// SPI interrupt status
pub const BITM_SPI_SPISTA_IRQ: u16 = 0x0001;
/// SPI Tx FIFO status
pub const BITM_SPI_SPISTA_TXFSTA: u16 = 0x000E;
/// SPI Tx FIFO underflow
pub const BITM_SPI_SPISTA_TXUR: u16 = 0x0010;
/// SPI Tx IRQ status
pub const BITM_SPI_SPISTA_TX: u16 = 0x0020;
/// SPI Rx IRQ status
pub const BITM_SPI_SPISTA_RX: u16 = 0x0040;
/// SPI Rx FIFO overflow
pub const BITM_SPI_SPISTA_RXOF: u16 = 0x0080;
/// SPI Rx FIFO status
pub const BITM_SPI_SPISTA_RXFSTA: u16 = 0x0700;
/// SPI Rx FIFO excess bytes present
pub const BITM_SPI_SPISTA_RXS: u16 = 0x0800;
/// Detected a CS error condition in slave mode
pub const BITM_SPI_SPISTA_CSERR: u16 = 0x1000;
/// Tx FIFO empty
pub const ENUM_SPI_SPISTA_TXFSTA_EMPTY: u16 = 0x0000;
/// One byte in Tx FIFO
pub const ENUM_SPI_SPISTA_TXFSTA_ONEBYTE: u16 = 0x0002;
/// Two bytes in Tx FIFO
pub const ENUM_SPI_SPISTA_TXFSTA_TWOBYTES: u16 = 0x0004;
/// Three bytes in Tx FIFO
pub const ENUM_SPI_SPISTA_TXFSTA_THREEBYTES: u16 = 0x0006;
/// Four bytes in Tx FIFO
pub const ENUM_SPI_SPISTA_TXFSTA_FOURBYTES: u16 = 0x0008;
/// Rx FIFO empty
pub const ENUM_SPI_SPISTA_RXFSTA_EMPTY: u16 = 0x0000;
/// One byte in Rx FIFO
pub const ENUM_SPI_SPISTA_RXFSTA_ONEBYTE: u16 = 0x0100;
/// Two bytes in Rx FIFO
pub const ENUM_SPI_SPISTA_RXFSTA_TWOBYTES: u16 = 0x0200;
/// Three bytes in Rx FIFO
pub const ENUM_SPI_SPISTA_RXFSTA_THREEBYTES: u16 = 0x0300;
/// Four bytes in Rx FIFO
pub const ENUM_SPI_SPISTA_RXFSTA_FOURBYTES: u16 = 0x0400;

// SPI_SPIRX
pub const BITP_SPI_SPIRX_DMA_DATA_BYTE_1: u32 = 0;
pub const BITP_SPI_SPIRX_DMA_DATA_BYTE_2: u32 = 8;
/// 8-bit receive buffer
pub const BITM_SPI_SPIRX_DMA_DATA_BYTE_1: u16 = 0x00FF;
/// 8-bit receive buffer, used only in DMA modes
pub const BITM_SPI_SPIRX_DMA_DATA_BYTE_2: u16 = 0xFF00;

// SPI_SPITX
pub const BITP_SPI_SPITX_DMA_DATA_BYTE_1: u32 = 0;
pub const BITP_SPI_SPITX_DMA_DATA_BYTE_2: u32 = 8;
/// 8-bit transmit buffer
pub const BITM_SPI_SPITX_DMA_DATA_BYTE_1: u16 = 0x00FF;
/// 8-bit transmit buffer, used only in DMA modes
pub const BITM_SPI_SPITX_DMA_DATA_BYTE_2: u16 = 0xFF00;

// SPI_SPIDIV
pub const BITP_SPI_SPIDIV_DIV: u32 = 0;
pub const BITP_SPI_SPIDIV_HFM: u32 = 6;
pub const BITP_SPI_SPIDIV_MD_CS_RST: u32 = 7;
pub const BITP_SPI_SPIDIV_CSIRQ_EN: u32 = 8;
/// SPI clock divider
pub const BITM_SPI_SPIDIV_DIV: u16 = 0x003F;
/// High frequency mode
pub const BITM_SPI_SPIDIV_HFM: u16 = 0x0040;
/// Reset mode for CSERR
pub const BITM_SPI_SPIDIV_MD_CS_RST: u16 = 0x0080;
/// Enable interrupt on every CS edge in slave CON mode
pub const BITM_SPI_SPIDIV_CSIRQ_EN: u16 = 0x0100;

// SPI_SPICON
pub const BITP_SPI_SPICON_ENABLE: u32 = 0;
pub const BITP_SPI_SPICON_MASEN: u32 = 1;
pub const BITP_SPI_SPICON_CPHA: u32 = 2;
pub const BITP_SPI_SPICON_CPOL: u32 = 3;
pub const BITP_SPI_SPICON_WOM: u32 = 4;
pub const BITP_SPI_SPICON_LSB: u32 = 5;
pub const BITP_SPI_SPICON_TIM: u32 = 6;
pub const BITP_SPI_SPICON_ZEN: u32 = 7;
pub const BITP_SPI_SPICON_RXOF: u32 = 8;
pub const BITP_SPI_SPICON_OEN: u32 = 9;
pub const BITP_SPI_SPICON_LOOPBACK: u32 = 10;
pub const BITP_SPI_SPICON_CON: u32 = 11;
pub const BITP_SPI_SPICON_RFLUSH: u32 = 12;
pub const BITP_SPI_SPICON_TFLUSH: u32 = 13;
pub const BITP_SPI_SPICON_MOD: u32 = 14;
/// SPI enable
pub const BITM_SPI_SPICON_ENABLE: u16 = 0x0001;
/// Master mode enable
pub const BITM_SPI_SPICON_MASEN: u16 = 0x0002;
/// Serial clock phase mode
pub const BITM_SPI_SPICON_CPHA: u16 = 0x0004;
/// Serial clock polarity
pub const BITM_SPI_SPICON_CPOL: u16 = 0x0008;
/// SPI wired-OR mode
pub const BITM_SPI_SPICON_WOM: u16 = 0x0010;
/// LSB first transfer enable
pub const BITM_SPI_SPICON_LSB: u16 = 0x0020;
/// SPI transfer and interrupt mode
pub const BITM_SPI_SPICON_TIM: u16 = 0x0040;
/// Transmit zeros enable
pub const BITM_SPI_SPICON_ZEN: u16 = 0x0080;
/// SPIRX overflow overwrite enable
pub const BITM_SPI_SPICON_RXOF: u16 = 0x0100;
/// Slave MISO output enable
pub const BITM_SPI_SPICON_OEN: u16 = 0x0200;
/// Loopback enable
pub const BITM_SPI_SPICON_LOOPBACK: u16 = 0x0400;
/// Continuous transfer enable
pub const BITM_SPI_SPICON_CON: u16 = 0x0800;
/// SPI Rx FIFO flush enable
pub const BITM_SPI_SPICON_RFLUSH: u16 = 0x1000;
/// SPI Tx FIFO flush enable
pub const BITM_SPI_SPICON_TFLUSH: u16 = 0x2000;
/// SPI IRQ mode bits
pub const BITM_SPI_SPICON_MOD: u16 = 0xC000;
/// Sample on the leading clock edge
pub const ENUM_SPI_SPICON_CPHA_SAMPLELEADING: u16 = 0x0000;
/// Sample on the trailing clock edge
pub const ENUM_SPI_SPICON_CPHA_SAMPLETRAILING: u16 = 0x0004;
/// Initiate transfer with a read of SPIRX
pub const ENUM_SPI_SPICON_TIM_RXRD: u16 = 0x0000;
/// Initiate transfer with a write to SPITX
pub const ENUM_SPI_SPICON_TIM_TXWR: u16 = 0x0040;
/// Interrupt after one byte
pub const ENUM_SPI_SPICON_MOD_TX1RX1: u16 = 0x0000;
/// Interrupt after two bytes
pub const ENUM_SPI_SPICON_MOD_TX2RX2: u16 = 0x4000;
/// Interrupt after three bytes
pub const ENUM_SPI_SPICON_MOD_TX3RX3: u16 = 0x8000;
/// Interrupt after four bytes
pub const ENUM_SPI_SPICON_MOD_TX4RX4: u16 = 0xC000;

// SPI_SPIDMA
pub const BITP_SPI_SPIDMA_ENABLE: u32 = 0;
pub const BITP_SPI_SPIDMA_IENTXDMA: u32 = 1;
pub const BITP_SPI_SPIDMA_IENRXDMA: u32 = 2;
/// Enable DMA for data transfer
pub const BITM_SPI_SPIDMA_ENABLE: u16 = 0x0001;
/// Enable transmit DMA request
pub const BITM_SPI_SPIDMA_IENTXDMA: u16 = 0x0002;
/// Enable receive DMA request
pub const BITM_SPI_SPIDMA_IENRXDMA: u16 = 0x0004;

// SPI_SPICNT
pub const BITP_SPI_SPICNT_COUNT: u32 = 0;
/// Transfer byte count
pub const BITM_SPI_SPICNT_COUNT: u16 = 0x00FF;
