// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for spi.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub SpiRegisters {
        /// Status
        (0x0000 => pub spista: ReadOnly<u16, SPISTA::Register>),
        (0x0002 => _reserved0),
        /// Receive
        (0x0004 => pub spirx: ReadOnly<u16, SPIRX::Register>),
        (0x0006 => _reserved1),
        /// Transmit
        (0x0008 => pub spitx: WriteOnly<u16, SPITX::Register>),
        (0x000a => _reserved2),
        /// Baud rate selection
        (0x000c => pub spidiv: ReadWrite<u16, SPIDIV::Register>),
        (0x000e => _reserved3),
        /// SPI configuration
        (0x0010 => pub spicon: ReadWrite<u16, SPICON::Register>),
        (0x0012 => _reserved4),
        /// SPI DMA enable
        (0x0014 => pub spidma: ReadWrite<u16, SPIDMA::Register>),
        (0x0016 => _reserved5),
        /// Transfer byte count
        (0x0018 => pub spicnt: ReadWrite<u16, SPICNT::Register>),
        (0x001a => _reserved6),
        (0x001c => @END),
    }
}

register_bitfields![u16,
    pub SPISTA [
        IRQ OFFSET(0) NUMBITS(1) [],
        TXFSTA OFFSET(1) NUMBITS(3) [
            EMPTY = 0,
            ONEBYTE = 1,
            TWOBYTES = 2,
            THREEBYTES = 3,
            FOURBYTES = 4,
        ],
        TXUR OFFSET(4) NUMBITS(1) [],
        TX OFFSET(5) NUMBITS(1) [],
        RX OFFSET(6) NUMBITS(1) [],
        RXOF OFFSET(7) NUMBITS(1) [],
        RXFSTA OFFSET(8) NUMBITS(3) [
            EMPTY = 0,
            ONEBYTE = 1,
            TWOBYTES = 2,
            THREEBYTES = 3,
            FOURBYTES = 4,
        ],
        RXS OFFSET(11) NUMBITS(1) [],
        CSERR OFFSET(12) NUMBITS(1) [],
    ],
    pub SPIRX [
        DMA_DATA_BYTE_1 OFFSET(0) NUMBITS(8) [],
        DMA_DATA_BYTE_2 OFFSET(8) NUMBITS(8) [],
    ],
    pub SPITX [
        DMA_DATA_BYTE_1 OFFSET(0) NUMBITS(8) [],
        DMA_DATA_BYTE_2 OFFSET(8) NUMBITS(8) [],
    ],
    pub SPIDIV [
        DIV OFFSET(0) NUMBITS(6) [],
        HFM OFFSET(6) NUMBITS(1) [],
        MD_CS_RST OFFSET(7) NUMBITS(1) [],
        CSIRQ_EN OFFSET(8) NUMBITS(1) [],
    ],
    pub SPICON [
        ENABLE OFFSET(0) NUMBITS(1) [],
        MASEN OFFSET(1) NUMBITS(1) [],
        CPHA OFFSET(2) NUMBITS(1) [
            SAMPLELEADING = 0,
            SAMPLETRAILING = 1,
        ],
        CPOL OFFSET(3) NUMBITS(1) [],
        WOM OFFSET(4) NUMBITS(1) [],
        LSB OFFSET(5) NUMBITS(1) [],
        TIM OFFSET(6) NUMBITS(1) [
            RXRD = 0,
            TXWR = 1,
        ],
        ZEN OFFSET(7) NUMBITS(1) [],
        RXOF OFFSET(8) NUMBITS(1) [],
        OEN OFFSET(9) NUMBITS(1) [],
        LOOPBACK OFFSET(10) NUMBITS(1) [],
        CON OFFSET(11) NUMBITS(1) [],
        RFLUSH OFFSET(12) NUMBITS(1) [],
        TFLUSH OFFSET(13) NUMBITS(1) [],
        MOD OFFSET(14) NUMBITS(2) [
            TX1RX1 = 0,
            TX2RX2 = 1,
            TX3RX3 = 2,
            TX4RX4 = 3,
        ],
    ],
    pub SPIDMA [
        ENABLE OFFSET(0) NUMBITS(1) [],
        IENTXDMA OFFSET(1) NUMBITS(1) [],
        IENRXDMA OFFSET(2) NUMBITS(1) [],
    ],
    pub SPICNT [
        COUNT OFFSET(0) NUMBITS(8) [],
    ],
];

pub const SPI0_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(0x4000_4000 as *const SpiRegisters) };
pub const SPI1_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(0x4000_4400 as *const SpiRegisters) };
pub const SPIH_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(0x4002_4000 as *const SpiRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(SPISTA::IRQ.mask << SPISTA::IRQ.shift, BITM_SPI_SPISTA_IRQ);
        assert_eq!(SPISTA::IRQ.shift as u32, BITP_SPI_SPISTA_IRQ);
        assert_eq!(SPISTA::TXFSTA.mask << SPISTA::TXFSTA.shift, BITM_SPI_SPISTA_TXFSTA);
        assert_eq!(SPISTA::TXFSTA.shift as u32, BITP_SPI_SPISTA_TXFSTA);
        assert_eq!(SPISTA::TXUR.mask << SPISTA::TXUR.shift, BITM_SPI_SPISTA_TXUR);
        assert_eq!(SPISTA::TXUR.shift as u32, BITP_SPI_SPISTA_TXUR);
        assert_eq!(SPISTA::TX.mask << SPISTA::TX.shift, BITM_SPI_SPISTA_TX);
        assert_eq!(SPISTA::TX.shift as u32, BITP_SPI_SPISTA_TX);
        assert_eq!(SPISTA::RX.mask << SPISTA::RX.shift, BITM_SPI_SPISTA_RX);
        assert_eq!(SPISTA::RX.shift as u32, BITP_SPI_SPISTA_RX);
        assert_eq!(SPISTA::RXOF.mask << SPISTA::RXOF.shift, BITM_SPI_SPISTA_RXOF);
        assert_eq!(SPISTA::RXOF.shift as u32, BITP_SPI_SPISTA_RXOF);
        assert_eq!(SPISTA::RXFSTA.mask << SPISTA::RXFSTA.shift, BITM_SPI_SPISTA_RXFSTA);
        assert_eq!(SPISTA::RXFSTA.shift as u32, BITP_SPI_SPISTA_RXFSTA);
        assert_eq!(SPISTA::RXS.mask << SPISTA::RXS.shift, BITM_SPI_SPISTA_RXS);
        assert_eq!(SPISTA::RXS.shift as u32, BITP_SPI_SPISTA_RXS);
        assert_eq!(SPISTA::CSERR.mask << SPISTA::CSERR.shift, BITM_SPI_SPISTA_CSERR);
        assert_eq!(SPISTA::CSERR.shift as u32, BITP_SPI_SPISTA_CSERR);
        assert_eq!(SPIRX::DMA_DATA_BYTE_1.mask << SPIRX::DMA_DATA_BYTE_1.shift, BITM_SPI_SPIRX_DMA_DATA_BYTE_1);
        assert_eq!(SPIRX::DMA_DATA_BYTE_1.shift as u32, BITP_SPI_SPIRX_DMA_DATA_BYTE_1);
        assert_eq!(SPIRX::DMA_DATA_BYTE_2.mask << SPIRX::DMA_DATA_BYTE_2.shift, BITM_SPI_SPIRX_DMA_DATA_BYTE_2);
        assert_eq!(SPIRX::DMA_DATA_BYTE_2.shift as u32, BITP_SPI_SPIRX_DMA_DATA_BYTE_2);
        assert_eq!(SPITX::DMA_DATA_BYTE_1.mask << SPITX::DMA_DATA_BYTE_1.shift, BITM_SPI_SPITX_DMA_DATA_BYTE_1);
        assert_eq!(SPITX::DMA_DATA_BYTE_1.shift as u32, BITP_SPI_SPITX_DMA_DATA_BYTE_1);
        assert_eq!(SPITX::DMA_DATA_BYTE_2.mask << SPITX::DMA_DATA_BYTE_2.shift, BITM_SPI_SPITX_DMA_DATA_BYTE_2);
        assert_eq!(SPITX::DMA_DATA_BYTE_2.shift as u32, BITP_SPI_SPITX_DMA_DATA_BYTE_2);
        assert_eq!(SPIDIV::DIV.mask << SPIDIV::DIV.shift, BITM_SPI_SPIDIV_DIV);
        assert_eq!(SPIDIV::DIV.shift as u32, BITP_SPI_SPIDIV_DIV);
        assert_eq!(SPIDIV::HFM.mask << SPIDIV::HFM.shift, BITM_SPI_SPIDIV_HFM);
        assert_eq!(SPIDIV::HFM.shift as u32, BITP_SPI_SPIDIV_HFM);
        assert_eq!(SPIDIV::MD_CS_RST.mask << SPIDIV::MD_CS_RST.shift, BITM_SPI_SPIDIV_MD_CS_RST);
        assert_eq!(SPIDIV::MD_CS_RST.shift as u32, BITP_SPI_SPIDIV_MD_CS_RST);
        assert_eq!(SPIDIV::CSIRQ_EN.mask << SPIDIV::CSIRQ_EN.shift, BITM_SPI_SPIDIV_CSIRQ_EN);
        assert_eq!(SPIDIV::CSIRQ_EN.shift as u32, BITP_SPI_SPIDIV_CSIRQ_EN);
        assert_eq!(SPICON::ENABLE.mask << SPICON::ENABLE.shift, BITM_SPI_SPICON_ENABLE);
        assert_eq!(SPICON::ENABLE.shift as u32, BITP_SPI_SPICON_ENABLE);
        assert_eq!(SPICON::MASEN.mask << SPICON::MASEN.shift, BITM_SPI_SPICON_MASEN);
        assert_eq!(SPICON::MASEN.shift as u32, BITP_SPI_SPICON_MASEN);
        assert_eq!(SPICON::CPHA.mask << SPICON::CPHA.shift, BITM_SPI_SPICON_CPHA);
        assert_eq!(SPICON::CPHA.shift as u32, BITP_SPI_SPICON_CPHA);
        assert_eq!(SPICON::CPOL.mask << SPICON::CPOL.shift, BITM_SPI_SPICON_CPOL);
        assert_eq!(SPICON::CPOL.shift as u32, BITP_SPI_SPICON_CPOL);
        assert_eq!(SPICON::WOM.mask << SPICON::WOM.shift, BITM_SPI_SPICON_WOM);
        assert_eq!(SPICON::WOM.shift as u32, BITP_SPI_SPICON_WOM);
        assert_eq!(SPICON::LSB.mask << SPICON::LSB.shift, BITM_SPI_SPICON_LSB);
        assert_eq!(SPICON::LSB.shift as u32, BITP_SPI_SPICON_LSB);
        assert_eq!(SPICON::TIM.mask << SPICON::TIM.shift, BITM_SPI_SPICON_TIM);
        assert_eq!(SPICON::TIM.shift as u32, BITP_SPI_SPICON_TIM);
        assert_eq!(SPICON::ZEN.mask << SPICON::ZEN.shift, BITM_SPI_SPICON_ZEN);
        assert_eq!(SPICON::ZEN.shift as u32, BITP_SPI_SPICON_ZEN);
        assert_eq!(SPICON::RXOF.mask << SPICON::RXOF.shift, BITM_SPI_SPICON_RXOF);
        assert_eq!(SPICON::RXOF.shift as u32, BITP_SPI_SPICON_RXOF);
        assert_eq!(SPICON::OEN.mask << SPICON::OEN.shift, BITM_SPI_SPICON_OEN);
        assert_eq!(SPICON::OEN.shift as u32, BITP_SPI_SPICON_OEN);
        assert_eq!(SPICON::LOOPBACK.mask << SPICON::LOOPBACK.shift, BITM_SPI_SPICON_LOOPBACK);
        assert_eq!(SPICON::LOOPBACK.shift as u32, BITP_SPI_SPICON_LOOPBACK);
        assert_eq!(SPICON::CON.mask << SPICON::CON.shift, BITM_SPI_SPICON_CON);
        assert_eq!(SPICON::CON.shift as u32, BITP_SPI_SPICON_CON);
        assert_eq!(SPICON::RFLUSH.mask << SPICON::RFLUSH.shift, BITM_SPI_SPICON_RFLUSH);
        assert_eq!(SPICON::RFLUSH.shift as u32, BITP_SPI_SPICON_RFLUSH);
        assert_eq!(SPICON::TFLUSH.mask << SPICON::TFLUSH.shift, BITM_SPI_SPICON_TFLUSH);
        assert_eq!(SPICON::TFLUSH.shift as u32, BITP_SPI_SPICON_TFLUSH);
        assert_eq!(SPICON::MOD.mask << SPICON::MOD.shift, BITM_SPI_SPICON_MOD);
        assert_eq!(SPICON::MOD.shift as u32, BITP_SPI_SPICON_MOD);
        assert_eq!(SPIDMA::ENABLE.mask << SPIDMA::ENABLE.shift, BITM_SPI_SPIDMA_ENABLE);
        assert_eq!(SPIDMA::ENABLE.shift as u32, BITP_SPI_SPIDMA_ENABLE);
        assert_eq!(SPIDMA::IENTXDMA.mask << SPIDMA::IENTXDMA.shift, BITM_SPI_SPIDMA_IENTXDMA);
        assert_eq!(SPIDMA::IENTXDMA.shift as u32, BITP_SPI_SPIDMA_IENTXDMA);
        assert_eq!(SPIDMA::IENRXDMA.mask << SPIDMA::IENRXDMA.shift, BITM_SPI_SPIDMA_IENRXDMA);
        assert_eq!(SPIDMA::IENRXDMA.shift as u32, BITP_SPI_SPIDMA_IENRXDMA);
        assert_eq!(SPICNT::COUNT.mask << SPICNT::COUNT.shift, BITM_SPI_SPICNT_COUNT);
        assert_eq!(SPICNT::COUNT.shift as u32, BITP_SPI_SPICNT_COUNT);
    }

    #[test]
    fn registers_match_addresses() {
        let spi0 = SPI0_BASE.address();
        let spi1 = SPI1_BASE.address();
        let spih = SPIH_BASE.address();
        assert_eq!(REG_SPI0_SPISTA as usize, spi0 + offset_of!(SpiRegisters, spista));
        assert_eq!(REG_SPI0_SPIRX as usize, spi0 + offset_of!(SpiRegisters, spirx));
        assert_eq!(REG_SPI0_SPITX as usize, spi0 + offset_of!(SpiRegisters, spitx));
        assert_eq!(REG_SPI0_SPIDIV as usize, spi0 + offset_of!(SpiRegisters, spidiv));
        assert_eq!(REG_SPI0_SPICON as usize, spi0 + offset_of!(SpiRegisters, spicon));
        assert_eq!(REG_SPI0_SPIDMA as usize, spi0 + offset_of!(SpiRegisters, spidma));
        assert_eq!(REG_SPI0_SPICNT as usize, spi0 + offset_of!(SpiRegisters, spicnt));
        assert_eq!(REG_SPI1_SPISTA as usize, spi1 + offset_of!(SpiRegisters, spista));
        assert_eq!(REG_SPI1_SPIRX as usize, spi1 + offset_of!(SpiRegisters, spirx));
        assert_eq!(REG_SPI1_SPITX as usize, spi1 + offset_of!(SpiRegisters, spitx));
        assert_eq!(REG_SPI1_SPIDIV as usize, spi1 + offset_of!(SpiRegisters, spidiv));
        assert_eq!(REG_SPI1_SPICON as usize, spi1 + offset_of!(SpiRegisters, spicon));
        assert_eq!(REG_SPI1_SPIDMA as usize, spi1 + offset_of!(SpiRegisters, spidma));
        assert_eq!(REG_SPI1_SPICNT as usize, spi1 + offset_of!(SpiRegisters, spicnt));
        assert_eq!(REG_SPIH_SPIH0STA as usize, spih + offset_of!(SpiRegisters, spista));
        assert_eq!(REG_SPIH_SPIH0RX as usize, spih + offset_of!(SpiRegisters, spirx));
        assert_eq!(REG_SPIH_SPIH0TX as usize, spih + offset_of!(SpiRegisters, spitx));
        assert_eq!(REG_SPIH_SPIH0DIV as usize, spih + offset_of!(SpiRegisters, spidiv));
        assert_eq!(REG_SPIH_SPIH0CON as usize, spih + offset_of!(SpiRegisters, spicon));
        assert_eq!(REG_SPIH_SPIH0DMA as usize, spih + offset_of!(SpiRegisters, spidma));
        assert_eq!(REG_SPIH_SPIH0CNT as usize, spih + offset_of!(SpiRegisters, spicnt));
    }
}
