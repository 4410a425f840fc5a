// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for dma.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub DmaRegisters {
        /// DMA Status
        (0x0000 => pub dmasta: ReadOnly<u32, DMASTA::Register>),
        /// DMA Configuration
        (0x0004 => pub dmacfg: WriteOnly<u32, DMACFG::Register>),
        /// DMA channel primary control data base pointer
        (0x0008 => pub dmapdbptr: ReadWrite<u32>),
        /// DMA channel alternate control data base pointer
        (0x000c => pub dmaadbptr: ReadOnly<u32>),
        (0x0010 => _reserved0),
        /// DMA channel software request
        (0x0014 => pub dmaswreq: WriteOnly<u32>),
        (0x0018 => _reserved1),
        /// DMA channel request mask set
        (0x0020 => pub dmarmskset: ReadWrite<u32>),
        /// DMA channel request mask clear
        (0x0024 => pub dmarmskclr: WriteOnly<u32>),
        /// DMA channel enable set
        (0x0028 => pub dmaenset: ReadWrite<u32>),
        /// DMA channel enable clear
        (0x002c => pub dmaenclr: WriteOnly<u32>),
        /// DMA channel primary-alternate set
        (0x0030 => pub dmaaltset: ReadWrite<u32>),
        /// DMA channel primary-alternate clear
        (0x0034 => pub dmaaltclr: WriteOnly<u32>),
        /// DMA channel priority set
        (0x0038 => pub dmapriset: ReadWrite<u32>),
        /// DMA channel priority clear
        (0x003c => pub dmapriclr: WriteOnly<u32>),
        (0x0040 => _reserved2),
        /// DMA Per Channel Error Clear
        (0x0048 => pub dmaerrchnlclr: ReadWrite<u32>),
        /// DMA bus error clear
        (0x004c => pub dmaerrclr: ReadWrite<u32, DMAERRCLR::Register>),
        /// DMA Per Channel Invalid Descriptor Clear
        (0x0050 => pub dmainvaliddescclr: ReadWrite<u32>),
        (0x0054 => _reserved3),
        /// DMA channel bytes swap enable set
        (0x0800 => pub dmabsset: ReadWrite<u32>),
        /// DMA channel bytes swap enable clear
        (0x0804 => pub dmabsclr: WriteOnly<u32>),
        (0x0808 => _reserved4),
        /// DMA channel source address decrement enable set
        (0x0810 => pub dmasrcadsset: ReadWrite<u32>),
        /// DMA channel source address decrement enable clear
        (0x0814 => pub dmasrcadclr: WriteOnly<u32>),
        /// DMA channel destination address decrement enable set
        (0x0818 => pub dmadstadset: ReadWrite<u32>),
        /// DMA channel destination address decrement enable clear
        (0x081c => pub dmadstadclr: WriteOnly<u32>),
        (0x0820 => _reserved5),
        /// DMA Controller Revision ID
        (0x0fe0 => pub dmarevid: ReadOnly<u32, DMAREVID::Register>),
        (0x0fe4 => @END),
    }
}

register_bitfields![u32,
    pub DMASTA [
        ENABLE OFFSET(0) NUMBITS(1) [],
        STATE OFFSET(4) NUMBITS(4) [
            IDLE = 0,
            RDCHNLDATA = 1,
            RDSRCENDPTR = 2,
            RDDSTENDPTR = 3,
            RDSRCDATA = 4,
            WRDSTDATA = 5,
            WAITDMAREQCLR = 6,
            WRCHNLDATA = 7,
            STALLED = 8,
            DONE = 9,
            SCATRGATHR = 10,
        ],
        CHANM1 OFFSET(16) NUMBITS(5) [],
    ],
    pub DMACFG [
        ENABLE OFFSET(0) NUMBITS(1) [],
    ],
    pub DMAERRCLR [
        ERROR OFFSET(0) NUMBITS(8) [],
    ],
    pub DMAREVID [
        VALUE OFFSET(0) NUMBITS(8) [],
    ],
];

pub const DMA_BASE: StaticRef<DmaRegisters> =
    unsafe { StaticRef::new(0x4001_0000 as *const DmaRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(DMASTA::ENABLE.mask << DMASTA::ENABLE.shift, BITM_DMA_DMASTA_ENABLE);
        assert_eq!(DMASTA::ENABLE.shift as u32, BITP_DMA_DMASTA_ENABLE);
        assert_eq!(DMASTA::STATE.mask << DMASTA::STATE.shift, BITM_DMA_DMASTA_STATE);
        assert_eq!(DMASTA::STATE.shift as u32, BITP_DMA_DMASTA_STATE);
        assert_eq!(DMASTA::CHANM1.mask << DMASTA::CHANM1.shift, BITM_DMA_DMASTA_CHANM1);
        assert_eq!(DMASTA::CHANM1.shift as u32, BITP_DMA_DMASTA_CHANM1);
        assert_eq!(DMACFG::ENABLE.mask << DMACFG::ENABLE.shift, BITM_DMA_DMACFG_ENABLE);
        assert_eq!(DMACFG::ENABLE.shift as u32, BITP_DMA_DMACFG_ENABLE);
        assert_eq!(DMAERRCLR::ERROR.mask << DMAERRCLR::ERROR.shift, BITM_DMA_DMAERRCLR_ERROR);
        assert_eq!(DMAERRCLR::ERROR.shift as u32, BITP_DMA_DMAERRCLR_ERROR);
        assert_eq!(DMAREVID::VALUE.mask << DMAREVID::VALUE.shift, BITM_DMA_DMAREVID_VALUE);
        assert_eq!(DMAREVID::VALUE.shift as u32, BITP_DMA_DMAREVID_VALUE);
    }

    #[test]
    fn registers_match_addresses() {
        let dma = DMA_BASE.address();
        assert_eq!(REG_DMA_DMASTA as usize, dma + offset_of!(DmaRegisters, dmasta));
        assert_eq!(REG_DMA_DMACFG as usize, dma + offset_of!(DmaRegisters, dmacfg));
        assert_eq!(REG_DMA_DMAPDBPTR as usize, dma + offset_of!(DmaRegisters, dmapdbptr));
        assert_eq!(REG_DMA_DMAADBPTR as usize, dma + offset_of!(DmaRegisters, dmaadbptr));
        assert_eq!(REG_DMA_DMASWREQ as usize, dma + offset_of!(DmaRegisters, dmaswreq));
        assert_eq!(REG_DMA_DMARMSKSET as usize, dma + offset_of!(DmaRegisters, dmarmskset));
        assert_eq!(REG_DMA_DMARMSKCLR as usize, dma + offset_of!(DmaRegisters, dmarmskclr));
        assert_eq!(REG_DMA_DMAENSET as usize, dma + offset_of!(DmaRegisters, dmaenset));
        assert_eq!(REG_DMA_DMAENCLR as usize, dma + offset_of!(DmaRegisters, dmaenclr));
        assert_eq!(REG_DMA_DMAALTSET as usize, dma + offset_of!(DmaRegisters, dmaaltset));
        assert_eq!(REG_DMA_DMAALTCLR as usize, dma + offset_of!(DmaRegisters, dmaaltclr));
        assert_eq!(REG_DMA_DMAPRISET as usize, dma + offset_of!(DmaRegisters, dmapriset));
        assert_eq!(REG_DMA_DMAPRICLR as usize, dma + offset_of!(DmaRegisters, dmapriclr));
        assert_eq!(REG_DMA_DMAERRCHNLCLR as usize, dma + offset_of!(DmaRegisters, dmaerrchnlclr));
        assert_eq!(REG_DMA_DMAERRCLR as usize, dma + offset_of!(DmaRegisters, dmaerrclr));
        assert_eq!(
            REG_DMA_DMAINVALIDDESCCLR as usize,
            dma + offset_of!(DmaRegisters, dmainvaliddescclr)
        );
        assert_eq!(REG_DMA_DMABSSET as usize, dma + offset_of!(DmaRegisters, dmabsset));
        assert_eq!(REG_DMA_DMABSCLR as usize, dma + offset_of!(DmaRegisters, dmabsclr));
        assert_eq!(REG_DMA_DMASRCADSSET as usize, dma + offset_of!(DmaRegisters, dmasrcadsset));
        assert_eq!(REG_DMA_DMASRCADCLR as usize, dma + offset_of!(DmaRegisters, dmasrcadclr));
        assert_eq!(REG_DMA_DMADSTADSET as usize, dma + offset_of!(DmaRegisters, dmadstadset));
        assert_eq!(REG_DMA_DMADSTADCLR as usize, dma + offset_of!(DmaRegisters, dmadstadclr));
        assert_eq!(REG_DMA_DMAREVID as usize, dma + offset_of!(DmaRegisters, dmarevid));
    }
}
