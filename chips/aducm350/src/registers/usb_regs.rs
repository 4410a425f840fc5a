// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for usb.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub UsbEpRegisters {
        /// Maximum packet size for transmit endpoint
        (0x00 => pub txmaxp: ReadWrite<u16, EP_TXMAXP::Register>),
        /// Transmit configuration and status (peripheral mode). Aliases CSR0 for endpoint 0
        (0x02 => pub txcsr: ReadWrite<u16, EP_TXCSR_P::Register>),
        /// Maximum packet size for receive endpoint
        (0x04 => pub rxmaxp: ReadWrite<u16, EP_RXMAXP::Register>),
        /// Receive configuration and status (peripheral mode)
        (0x06 => pub rxcsr: ReadWrite<u16, EP_RXCSR_P::Register>),
        /// Number of bytes received. Aliases CNT0 for endpoint 0
        (0x08 => pub rxcnt: ReadOnly<u16, EP_RXCNT::Register>),
        (0x0a => _reserved0),
        /// FIFO size
        (0x0f => pub fifosize: ReadWrite<u8>),
        (0x10 => @END),
    },
    pub UsbDmaRegisters {
        /// DMA channel control
        (0x00 => pub ctl: ReadWrite<u16, DMA_CTL::Register>),
        (0x02 => _reserved0),
        /// DMA channel address
        (0x04 => pub addr: ReadWrite<u32>),
        /// DMA channel transfer count
        (0x08 => pub cnt: ReadWrite<u32>),
        (0x0c => _reserved1),
        (0x10 => @END),
    },
    pub UsbRegisters {
        /// Function Address Register
        (0x0000 => pub faddr: ReadWrite<u8, FADDR::Register>),
        /// Power and Device Control Register
        (0x0001 => pub power: ReadWrite<u8, POWER::Register>),
        /// Transmit Interrupt Register
        (0x0002 => pub intrtx: ReadOnly<u16, INTRTX::Register>),
        /// Receive Interrupt Register
        (0x0004 => pub intrrx: ReadOnly<u16, INTRRX::Register>),
        /// Transmit Interrupt Enable Register
        (0x0006 => pub intrtxe: ReadWrite<u16, INTRTXE::Register>),
        /// Receive Interrupt Enable Register
        (0x0008 => pub intrrxe: ReadWrite<u16, INTRRXE::Register>),
        /// Common Interrupts Register
        (0x000a => pub irq: ReadOnly<u8, IRQ::Register>),
        /// Common Interrupts Enable Register
        (0x000b => pub ien: ReadWrite<u8, IEN::Register>),
        /// Frame Number Register
        (0x000c => pub frame: ReadOnly<u16, FRAME::Register>),
        /// Index Register
        (0x000e => pub index: ReadWrite<u8, INDEX::Register>),
        /// Testmode Register
        (0x000f => pub testmode: ReadWrite<u8, TESTMODE::Register>),
        /// Endpoint registers selected by INDEX
        (0x0010 => pub epi: UsbEpRegisters),
        /// Endpoint FIFOs (word, halfword and byte access)
        (0x0020 => pub fifo: [ReadWrite<u32>; 4]),
        (0x0030 => _reserved0),
        /// Device Control Register
        (0x0060 => pub dev_ctl: ReadWrite<u8, DEV_CTL::Register>),
        /// Miscellaneous Register
        (0x0061 => pub misc: ReadWrite<u8>),
        (0x0062 => _reserved1),
        /// Endpoint Information Register
        (0x0078 => pub epinfo: ReadOnly<u8, EPINFO::Register>),
        /// RAM Information Register
        (0x0079 => pub raminfo: ReadOnly<u8, RAMINFO::Register>),
        /// Link Information Register
        (0x007a => pub linkinfo: ReadWrite<u8, LINKINFO::Register>),
        (0x007b => _reserved2),
        /// Full-Speed EOF 1 Register
        (0x007d => pub fs_eof1: ReadWrite<u8>),
        (0x007e => _reserved3),
        /// Software Reset Register
        (0x007f => pub soft_rst: ReadWrite<u8, SOFT_RST::Register>),
        (0x0080 => _reserved4),
        /// Per-endpoint registers
        (0x0100 => pub ep: [UsbEpRegisters; 4]),
        (0x0140 => _reserved5),
        /// DMA Interrupt Register
        (0x0200 => pub dma_irq: ReadOnly<u8, DMA_IRQ::Register>),
        (0x0201 => _reserved6),
        /// DMA channels
        (0x0204 => pub dma: [UsbDmaRegisters; 2]),
        (0x0224 => _reserved7),
        /// RX Double Packet Buffer Disable for Endpoints 1 to 3
        (0x0340 => pub rxdpktbufdis: ReadWrite<u16>),
        /// TX Double Packet Buffer Disable for Endpoints 1 to 3
        (0x0342 => pub txdpktbufdis: ReadWrite<u16>),
        /// Chirp Timeout Register
        (0x0344 => pub ct_uch: ReadWrite<u16, CT_UCH::Register>),
        (0x0346 => _reserved8),
        /// LPM Attribute Register
        (0x0360 => pub lpm_attr: ReadWrite<u16, LPM_ATTR::Register>),
        /// LPM Control Register
        (0x0362 => pub lpm_ctl: ReadWrite<u8, LPM_CTL::Register>),
        /// LPM Interrupt Enable Register
        (0x0363 => pub lpm_ien: ReadWrite<u8, LPM_IEN::Register>),
        /// LPM Interrupt Status Register
        (0x0364 => pub lpm_irq: ReadOnly<u8, LPM_IRQ::Register>),
        (0x0365 => _reserved9),
        /// FS PHY Control
        (0x039c => pub phy_ctl: ReadWrite<u16, PHY_CTL::Register>),
        /// FS PHY Status
        (0x039e => pub phy_stat: ReadOnly<u16>),
        (0x03a0 => _reserved10),
        /// RAM Address Register
        (0x03b0 => pub ram_addr: ReadWrite<u32>),
        /// RAM Data Register
        (0x03b4 => pub ram_data: ReadWrite<u32>),
        (0x03b8 => @END),
    }
}

register_bitfields![u8,
    pub FADDR [
        VALUE OFFSET(0) NUMBITS(7) [],
    ],
    pub POWER [
        ISOUPDT OFFSET(7) NUMBITS(1) [
            NO_ISOUPDT = 0,
            ISOUPDT = 1,
        ],
        SOFTCONN OFFSET(6) NUMBITS(1) [
            NO_SOFTCONN = 0,
            SOFTCONN = 1,
        ],
        HSEN OFFSET(5) NUMBITS(1) [
            HSDIS = 0,
            HSEN = 1,
        ],
        HSMODE OFFSET(4) NUMBITS(1) [
            NO_HSMODE = 0,
            HSMODE = 1,
        ],
        RESET OFFSET(3) NUMBITS(1) [
            NO_RESET = 0,
            RESET = 1,
        ],
        RESUME OFFSET(2) NUMBITS(1) [
            NO_RESUME = 0,
            RESUME = 1,
        ],
        SUSPEND OFFSET(1) NUMBITS(1) [
            NO_SUSPEND = 0,
            SUSPEND = 1,
        ],
        SUSEN OFFSET(0) NUMBITS(1) [
            SUSDIS = 0,
            SUSEN = 1,
        ],
    ],
    pub IRQ [
        VBUSERR OFFSET(7) NUMBITS(1) [
            NO_VBUSERR = 0,
            VBUSERR = 1,
        ],
        SESSREQ OFFSET(6) NUMBITS(1) [
            NO_SESSREQ = 0,
            SESSREQ = 1,
        ],
        DISCON OFFSET(5) NUMBITS(1) [
            NO_DISCON = 0,
            DISCON = 1,
        ],
        CON OFFSET(4) NUMBITS(1) [
            NO_CON = 0,
            CON = 1,
        ],
        SOF OFFSET(3) NUMBITS(1) [
            NO_SOF = 0,
            SOF = 1,
        ],
        RSTBABBLE OFFSET(2) NUMBITS(1) [
            NO_RSTBABBLE = 0,
            RSTBABBLE = 1,
        ],
        RESUME OFFSET(1) NUMBITS(1) [
            NO_RESUME = 0,
            RESUME = 1,
        ],
        SUSPEND OFFSET(0) NUMBITS(1) [
            NO_SUSPEND = 0,
            SUSPEND = 1,
        ],
    ],
    pub IEN [
        VBUSERR OFFSET(7) NUMBITS(1) [
            VBUSERRDIS = 0,
            VBUSERREN = 1,
        ],
        SESSREQ OFFSET(6) NUMBITS(1) [
            SESSREQDIS = 0,
            SESSREQEN = 1,
        ],
        DISCON OFFSET(5) NUMBITS(1) [
            DISCONDIS = 0,
            DISCONEN = 1,
        ],
        CON OFFSET(4) NUMBITS(1) [
            CONDIS = 0,
            CONEN = 1,
        ],
        SOF OFFSET(3) NUMBITS(1) [
            SOFDIS = 0,
            SOFEN = 1,
        ],
        RSTBABBLE OFFSET(2) NUMBITS(1) [
            RSTBABBLEDIS = 0,
            RSTBABBLEEN = 1,
        ],
        RESUME OFFSET(1) NUMBITS(1) [
            RESUMEDIS = 0,
            RESUMEEN = 1,
        ],
        SUSPEND OFFSET(0) NUMBITS(1) [
            SUSPENDDIS = 0,
            SUSPENDEN = 1,
        ],
    ],
    pub INDEX [
        EP OFFSET(0) NUMBITS(4) [],
    ],
    pub TESTMODE [
        FIFOACCESS OFFSET(6) NUMBITS(1) [],
        TESTPACKET OFFSET(3) NUMBITS(1) [],
        TESTK OFFSET(2) NUMBITS(1) [],
        TESTJ OFFSET(1) NUMBITS(1) [],
        TESTSE0NAK OFFSET(0) NUMBITS(1) [],
    ],
    pub EP0I_CFGDATA [
        MPRX OFFSET(7) NUMBITS(1) [
            MPRXDIS = 0,
            MPRXEN = 1,
        ],
        MPTX OFFSET(6) NUMBITS(1) [
            MPTXDIS = 0,
            MPTXEN = 1,
        ],
        BIGEND OFFSET(5) NUMBITS(1) [
            BIGENDDIS = 0,
            BIGENDEN = 1,
        ],
        HBRX OFFSET(4) NUMBITS(1) [
            HBRXDIS = 0,
            HBRXEN = 1,
        ],
        HBTX OFFSET(3) NUMBITS(1) [
            HBTXDIS = 0,
            HBTXEN = 1,
        ],
        DYNFIFO OFFSET(2) NUMBITS(1) [
            DYNSZDIS = 0,
            DYNSZEN = 1,
        ],
        SOFTCON OFFSET(1) NUMBITS(1) [
            SFTCONDIS = 0,
            SFTCONEN = 1,
        ],
        UTMIWID OFFSET(0) NUMBITS(1) [
            UTMIWID8 = 0,
            UTMIWID16 = 1,
        ],
    ],
    pub DEV_CTL [
        BDEVICE OFFSET(7) NUMBITS(1) [
            ADEVICE = 0,
            BDEVICE = 1,
        ],
        FSDEV OFFSET(6) NUMBITS(1) [
            NO_FSDEV = 0,
            FSDEV = 1,
        ],
        LSDEV OFFSET(5) NUMBITS(1) [
            NO_LSDEV = 0,
            LSDEV = 1,
        ],
        VBUS OFFSET(3) NUMBITS(2) [
            BS = 0,
            ASBA = 1,
            AABV = 2,
            AV = 3,
        ],
        HOSTMODE OFFSET(2) NUMBITS(1) [
            NO_HOSTMODE = 0,
            HOSTMODE = 1,
        ],
        HOSTREQ OFFSET(1) NUMBITS(1) [
            NO_HOSTREQ = 0,
            HOSTREQ = 1,
        ],
        SESSION OFFSET(0) NUMBITS(1) [
            NO_SESSION = 0,
            SESSION = 1,
        ],
    ],
    pub EPINFO [
        RXEP OFFSET(4) NUMBITS(4) [],
        TXEP OFFSET(0) NUMBITS(4) [],
    ],
    pub RAMINFO [
        DMACHANS OFFSET(4) NUMBITS(4) [],
        RAMBITS OFFSET(0) NUMBITS(4) [],
    ],
    pub LINKINFO [
        WTCON OFFSET(4) NUMBITS(4) [],
        WTID OFFSET(0) NUMBITS(4) [],
    ],
    pub SOFT_RST [
        RSTX OFFSET(1) NUMBITS(1) [
            NO_RSTX = 0,
            RSTX = 1,
        ],
        RST OFFSET(0) NUMBITS(1) [
            NO_RST = 0,
            RST = 1,
        ],
    ],
    pub EP0_CFGDATA [
        MPRX OFFSET(7) NUMBITS(1) [
            MPRXDIS = 0,
            MPRXEN = 1,
        ],
        MPTX OFFSET(6) NUMBITS(1) [
            MPTXDIS = 0,
            MPTXEN = 1,
        ],
        BIGEND OFFSET(5) NUMBITS(1) [
            BIGENDDIS = 0,
            BIGENDEN = 1,
        ],
        HBRX OFFSET(4) NUMBITS(1) [
            HBRXDIS = 0,
            HBRXEN = 1,
        ],
        HBTX OFFSET(3) NUMBITS(1) [
            HBTXDIS = 0,
            HBTXEN = 1,
        ],
        DYNFIFO OFFSET(2) NUMBITS(1) [
            DYNSZDIS = 0,
            DYNSZEN = 1,
        ],
        SOFTCON OFFSET(1) NUMBITS(1) [
            SFTCONDIS = 0,
            SFTCONEN = 1,
        ],
        UTMIWID OFFSET(0) NUMBITS(1) [
            UTMIWID8 = 0,
            UTMIWID16 = 1,
        ],
    ],
    pub DMA_IRQ [
        D7 OFFSET(7) NUMBITS(1) [],
        D6 OFFSET(6) NUMBITS(1) [],
        D5 OFFSET(5) NUMBITS(1) [],
        D4 OFFSET(4) NUMBITS(1) [],
        D3 OFFSET(3) NUMBITS(1) [],
        D2 OFFSET(2) NUMBITS(1) [],
        D1 OFFSET(1) NUMBITS(1) [],
        D0 OFFSET(0) NUMBITS(1) [],
    ],
    pub LPM_CTL [
        NAK OFFSET(4) NUMBITS(1) [],
        EN OFFSET(2) NUMBITS(2) [],
        RESUME OFFSET(1) NUMBITS(1) [],
        TX OFFSET(0) NUMBITS(1) [],
    ],
    pub LPM_IEN [
        LPMERR OFFSET(5) NUMBITS(1) [],
        LPMRES OFFSET(4) NUMBITS(1) [],
        LPMNC OFFSET(3) NUMBITS(1) [],
        LPMACK OFFSET(2) NUMBITS(1) [],
        LPMNY OFFSET(1) NUMBITS(1) [],
        LPMST OFFSET(0) NUMBITS(1) [],
    ],
    pub LPM_IRQ [
        LPMERR OFFSET(5) NUMBITS(1) [],
        LPMRES OFFSET(4) NUMBITS(1) [],
        LPMNC OFFSET(3) NUMBITS(1) [],
        LPMACK OFFSET(2) NUMBITS(1) [],
        LPMNY OFFSET(1) NUMBITS(1) [],
        LPMST OFFSET(0) NUMBITS(1) [],
    ],
];

register_bitfields![u16,
    pub INTRTX [
        EP11 OFFSET(11) NUMBITS(1) [],
        EP10 OFFSET(10) NUMBITS(1) [],
        EP9 OFFSET(9) NUMBITS(1) [],
        EP8 OFFSET(8) NUMBITS(1) [],
        EP7 OFFSET(7) NUMBITS(1) [],
        EP6 OFFSET(6) NUMBITS(1) [],
        EP5 OFFSET(5) NUMBITS(1) [],
        EP4 OFFSET(4) NUMBITS(1) [],
        EP3 OFFSET(3) NUMBITS(1) [],
        EP2 OFFSET(2) NUMBITS(1) [],
        EP1 OFFSET(1) NUMBITS(1) [],
        EP0 OFFSET(0) NUMBITS(1) [],
    ],
    pub INTRRX [
        EP11 OFFSET(11) NUMBITS(1) [],
        EP10 OFFSET(10) NUMBITS(1) [],
        EP9 OFFSET(9) NUMBITS(1) [],
        EP8 OFFSET(8) NUMBITS(1) [],
        EP7 OFFSET(7) NUMBITS(1) [],
        EP6 OFFSET(6) NUMBITS(1) [],
        EP5 OFFSET(5) NUMBITS(1) [],
        EP4 OFFSET(4) NUMBITS(1) [],
        EP3 OFFSET(3) NUMBITS(1) [],
        EP2 OFFSET(2) NUMBITS(1) [],
        EP1 OFFSET(1) NUMBITS(1) [],
    ],
    pub INTRTXE [
        EP11 OFFSET(11) NUMBITS(1) [],
        EP10 OFFSET(10) NUMBITS(1) [],
        EP9 OFFSET(9) NUMBITS(1) [],
        EP8 OFFSET(8) NUMBITS(1) [],
        EP7 OFFSET(7) NUMBITS(1) [],
        EP6 OFFSET(6) NUMBITS(1) [],
        EP5 OFFSET(5) NUMBITS(1) [],
        EP4 OFFSET(4) NUMBITS(1) [],
        EP3 OFFSET(3) NUMBITS(1) [],
        EP2 OFFSET(2) NUMBITS(1) [],
        EP1 OFFSET(1) NUMBITS(1) [],
        EP0 OFFSET(0) NUMBITS(1) [],
    ],
    pub INTRRXE [
        EP11 OFFSET(11) NUMBITS(1) [],
        EP10 OFFSET(10) NUMBITS(1) [],
        EP9 OFFSET(9) NUMBITS(1) [],
        EP8 OFFSET(8) NUMBITS(1) [],
        EP7 OFFSET(7) NUMBITS(1) [],
        EP6 OFFSET(6) NUMBITS(1) [],
        EP5 OFFSET(5) NUMBITS(1) [],
        EP4 OFFSET(4) NUMBITS(1) [],
        EP3 OFFSET(3) NUMBITS(1) [],
        EP2 OFFSET(2) NUMBITS(1) [],
        EP1 OFFSET(1) NUMBITS(1) [],
    ],
    pub FRAME [
        VALUE OFFSET(0) NUMBITS(11) [],
    ],
    pub EPI_TXMAXP [
        MULTM1 OFFSET(11) NUMBITS(2) [],
        MAXPAY OFFSET(0) NUMBITS(11) [],
    ],
    pub EPI_TXCSR_H [
        AUTOSET OFFSET(15) NUMBITS(1) [
            NO_AUTOSET = 0,
            AUTOSET = 1,
        ],
        DMAREQEN OFFSET(12) NUMBITS(1) [
            DMAREQDIS = 0,
            DMAREQEN = 1,
        ],
        FRCDATATGL OFFSET(11) NUMBITS(1) [
            NO_FRCTGL = 0,
            FRCTGL = 1,
        ],
        DMAREQMODE OFFSET(10) NUMBITS(1) [
            DMARQMODE0 = 0,
            DMARQMODE1 = 1,
        ],
        DATGLEN OFFSET(9) NUMBITS(1) [
            NO_DATGLEN = 0,
            DATGLEN = 1,
        ],
        DATGL OFFSET(8) NUMBITS(1) [
            NO_DATGL = 0,
            DATGL = 1,
        ],
        NAKTOINCMP OFFSET(7) NUMBITS(1) [
            NO_NAKTO = 0,
            NAKTO = 1,
        ],
        CLRDATATGL OFFSET(6) NUMBITS(1) [
            NO_CLRTGL = 0,
            CLRTGL = 1,
        ],
        RXSTALL OFFSET(5) NUMBITS(1) [
            NO_RXSTALL = 0,
            RXSTALL = 1,
        ],
        SETUPPKT OFFSET(4) NUMBITS(1) [
            NO_SETUPPK = 0,
            SETUPPKT = 1,
        ],
        FLUSHFIFO OFFSET(3) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        TXTOERR OFFSET(2) NUMBITS(1) [
            NO_TXTOERR = 0,
            TXTOERR = 1,
        ],
        NEFIFO OFFSET(1) NUMBITS(1) [
            NO_NEFIFO = 0,
            NEFIFO = 1,
        ],
        TXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_PKTRDY = 0,
            PKTRDY = 1,
        ],
    ],
    pub EP0I_CSR_P [
        FLUSHFIFO OFFSET(8) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        SSETUPEND OFFSET(7) NUMBITS(1) [
            NOSSETUPEND = 0,
            SSETUPEND = 1,
        ],
        SPKTRDY OFFSET(6) NUMBITS(1) [
            NO_SPKTRDY = 0,
            SPKTRDY = 1,
        ],
        SENDSTALL OFFSET(5) NUMBITS(1) [
            NO_STALL = 0,
            STALL = 1,
        ],
        SETUPEND OFFSET(4) NUMBITS(1) [
            NO_SETUPEND = 0,
            SETUPEND = 1,
        ],
        DATAEND OFFSET(3) NUMBITS(1) [
            NO_DATAEND = 0,
            DATAEND = 1,
        ],
        SENTSTALL OFFSET(2) NUMBITS(1) [
            NO_STALSNT = 0,
            STALSNT = 1,
        ],
        TXPKTRDY OFFSET(1) NUMBITS(1) [
            NO_TXPKTRDY = 0,
            TXPKTRDY = 1,
        ],
        RXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_PKTRDY = 0,
            PKTRDY = 1,
        ],
    ],
    pub EP0I_CSR_H [
        DISPING OFFSET(11) NUMBITS(1) [
            NO_DISPING = 0,
            DISPING = 1,
        ],
        DATGLEN OFFSET(10) NUMBITS(1) [
            NO_DATGLEN = 0,
            DATGLEN = 1,
        ],
        DATGL OFFSET(9) NUMBITS(1) [
            NO_DATATGL = 0,
            DATATGL = 1,
        ],
        FLUSHFIFO OFFSET(8) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        NAKTO OFFSET(7) NUMBITS(1) [
            NO_NAKTO = 0,
            NAKTO = 1,
        ],
        STATUSPKT OFFSET(6) NUMBITS(1) [
            NO_STATPKT = 0,
            STATPKT = 1,
        ],
        REQPKT OFFSET(5) NUMBITS(1) [
            NO_REQPKT = 0,
            REQPKT = 1,
        ],
        TOERR OFFSET(4) NUMBITS(1) [
            NO_TOERR = 0,
            TOERR = 1,
        ],
        SETUPPKT OFFSET(3) NUMBITS(1) [
            NO_SETUPPKT = 0,
            SETUPPKT = 1,
        ],
        RXSTALL OFFSET(2) NUMBITS(1) [
            NO_RXSTALL = 0,
            RXSTALL = 1,
        ],
        TXPKTRDY OFFSET(1) NUMBITS(1) [
            NO_TXPKTRDY = 0,
            TXPKTRDY = 1,
        ],
        RXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_RXPKTRDY = 0,
            RXPKTRDY = 1,
        ],
    ],
    pub EPI_TXCSR_P [
        AUTOSET OFFSET(15) NUMBITS(1) [
            NO_AUTOSET = 0,
            AUTOSET = 1,
        ],
        ISO OFFSET(14) NUMBITS(1) [
            ISODIS = 0,
            ISOEN = 1,
        ],
        DMAREQEN OFFSET(12) NUMBITS(1) [
            DMAREQDIS = 0,
            DMAREQEN = 1,
        ],
        FRCDATATGL OFFSET(11) NUMBITS(1) [
            NO_FRCTGL = 0,
            FRCTGL = 1,
        ],
        DMAREQMODE OFFSET(10) NUMBITS(1) [
            DMARQMODE0 = 0,
            DMARQMODE1 = 1,
        ],
        INCOMPTX OFFSET(7) NUMBITS(1) [
            NO_INCOMP = 0,
            INCOMP = 1,
        ],
        CLRDATATGL OFFSET(6) NUMBITS(1) [
            NO_CLRTGL = 0,
            CLRTGL = 1,
        ],
        SENTSTALL OFFSET(5) NUMBITS(1) [
            NO_STALSNT = 0,
            STALSNT = 1,
        ],
        SENDSTALL OFFSET(4) NUMBITS(1) [
            NO_STALL = 0,
            STALL = 1,
        ],
        FLUSHFIFO OFFSET(3) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        URUNERR OFFSET(2) NUMBITS(1) [
            NO_URUNERR = 0,
            URUNERR = 1,
        ],
        NEFIFO OFFSET(1) NUMBITS(1) [
            NO_FIFONE = 0,
            FIFONE = 1,
        ],
        TXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_PKTRDY = 0,
            PKTRDY = 1,
        ],
    ],
    pub EPI_RXMAXP [
        MULTM1 OFFSET(11) NUMBITS(2) [],
        MAXPAY OFFSET(0) NUMBITS(11) [],
    ],
    pub EPI_RXCSR_H [
        AUTOCLR OFFSET(15) NUMBITS(1) [
            NO_AUTOCLR = 0,
            AUTOCLR = 1,
        ],
        AUTOREQ OFFSET(14) NUMBITS(1) [
            NO_AUTOREQ = 0,
            AUTOREQ = 1,
        ],
        DMAREQEN OFFSET(13) NUMBITS(1) [
            DMAREQDIS = 0,
            DMAREQEN = 1,
        ],
        PIDERR OFFSET(12) NUMBITS(1) [
            NO_PIDERR = 0,
            PIDERR = 1,
        ],
        DMAREQMODE OFFSET(11) NUMBITS(1) [
            DMARQMODE0 = 0,
            DMARQMODE1 = 1,
        ],
        DATGLEN OFFSET(10) NUMBITS(1) [
            DATGLDIS = 0,
            DATGLEN = 1,
        ],
        DATGL OFFSET(9) NUMBITS(1) [
            NO_DATGL = 0,
            DATGL = 1,
        ],
        INCOMPRX OFFSET(8) NUMBITS(1) [
            NO_INCOMP = 0,
            INCOMP = 1,
        ],
        CLRDATATGL OFFSET(7) NUMBITS(1) [
            NO_CLRTGL = 0,
            CLRTGL = 1,
        ],
        RXSTALL OFFSET(6) NUMBITS(1) [
            NO_RXSTALL = 0,
            RXSTALL = 1,
        ],
        REQPKT OFFSET(5) NUMBITS(1) [
            NO_REQPKT = 0,
            REQPKT = 1,
        ],
        FLUSHFIFO OFFSET(4) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        NAKTODERR OFFSET(3) NUMBITS(1) [
            NO_NAKTO = 0,
            NAKTO = 1,
        ],
        RXTOERR OFFSET(2) NUMBITS(1) [
            NO_RXTOERR = 0,
            RXTOERR = 1,
        ],
        FIFOFULL OFFSET(1) NUMBITS(1) [
            NO_FIFOFUL = 0,
            FIFOFUL = 1,
        ],
        RXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_PKTRDY = 0,
            PKTRDY = 1,
        ],
    ],
    pub EPI_RXCSR_P [
        AUTOCLR OFFSET(15) NUMBITS(1) [
            NO_AUTOCLR = 0,
            AUTOCLR = 1,
        ],
        ISO OFFSET(14) NUMBITS(1) [
            ISODIS = 0,
            ISOEN = 1,
        ],
        DMAREQEN OFFSET(13) NUMBITS(1) [
            DMAREQDIS = 0,
            DMAREQEN = 1,
        ],
        DNYETPERR OFFSET(12) NUMBITS(1) [
            DNYTERREN = 0,
            DNYTERRDIS = 1,
        ],
        DMAREQMODE OFFSET(11) NUMBITS(1) [
            DMARQMODE0 = 0,
            DMARQMODE1 = 1,
        ],
        INCOMPRX OFFSET(8) NUMBITS(1) [
            NO_INCOMP = 0,
            INCOMP = 1,
        ],
        CLRDATATGL OFFSET(7) NUMBITS(1) [
            NO_CLRTGL = 0,
            CLRTGL = 1,
        ],
        SENTSTALL OFFSET(6) NUMBITS(1) [
            NO_STALSNT = 0,
            STALSNT = 1,
        ],
        SENDSTALL OFFSET(5) NUMBITS(1) [
            NO_STALL = 0,
            STALL = 1,
        ],
        FLUSHFIFO OFFSET(4) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        DATAERR OFFSET(3) NUMBITS(1) [
            NO_DATAERR = 0,
            DATAERR = 1,
        ],
        ORUNERR OFFSET(2) NUMBITS(1) [
            NO_ORUNERR = 0,
            ORUNERR = 1,
        ],
        FIFOFULL OFFSET(1) NUMBITS(1) [
            NO_FIFOFUL = 0,
            FIFOFUL = 1,
        ],
        RXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_PKTRDY = 0,
            PKTRDY = 1,
        ],
    ],
    pub EP0I_CNT [
        RXCNT OFFSET(0) NUMBITS(7) [],
    ],
    pub EPI_RXCNT [
        EPRXCNT OFFSET(0) NUMBITS(14) [],
    ],
    pub EP_TXMAXP [
        MULTM1 OFFSET(11) NUMBITS(2) [],
        MAXPAY OFFSET(0) NUMBITS(11) [],
    ],
    pub EP_TXCSR_P [
        AUTOSET OFFSET(15) NUMBITS(1) [
            NO_AUTOSET = 0,
            AUTOSET = 1,
        ],
        ISO OFFSET(14) NUMBITS(1) [
            ISODIS = 0,
            ISOEN = 1,
        ],
        DMAREQEN OFFSET(12) NUMBITS(1) [
            DMAREQDIS = 0,
            DMAREQEN = 1,
        ],
        FRCDATATGL OFFSET(11) NUMBITS(1) [
            NO_FRCTGL = 0,
            FRCTGL = 1,
        ],
        DMAREQMODE OFFSET(10) NUMBITS(1) [
            DMARQMODE0 = 0,
            DMARQMODE1 = 1,
        ],
        INCOMPTX OFFSET(7) NUMBITS(1) [
            NO_INCOMP = 0,
            INCOMP = 1,
        ],
        CLRDATATGL OFFSET(6) NUMBITS(1) [
            NO_CLRTGL = 0,
            CLRTGL = 1,
        ],
        SENTSTALL OFFSET(5) NUMBITS(1) [
            NO_STALSNT = 0,
            STALSNT = 1,
        ],
        SENDSTALL OFFSET(4) NUMBITS(1) [
            NO_STALL = 0,
            STALL = 1,
        ],
        FLUSHFIFO OFFSET(3) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        URUNERR OFFSET(2) NUMBITS(1) [
            NO_URUNERR = 0,
            URUNERR = 1,
        ],
        NEFIFO OFFSET(1) NUMBITS(1) [
            NO_FIFONE = 0,
            FIFONE = 1,
        ],
        TXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_PKTRDY = 0,
            PKTRDY = 1,
        ],
    ],
    pub EP0_CSR_P [
        FLUSHFIFO OFFSET(8) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        SSETUPEND OFFSET(7) NUMBITS(1) [
            NOSSETUPEND = 0,
            SSETUPEND = 1,
        ],
        SPKTRDY OFFSET(6) NUMBITS(1) [
            NO_SPKTRDY = 0,
            SPKTRDY = 1,
        ],
        SENDSTALL OFFSET(5) NUMBITS(1) [
            NO_STALL = 0,
            STALL = 1,
        ],
        SETUPEND OFFSET(4) NUMBITS(1) [
            NO_SETUPEND = 0,
            SETUPEND = 1,
        ],
        DATAEND OFFSET(3) NUMBITS(1) [
            NO_DATAEND = 0,
            DATAEND = 1,
        ],
        SENTSTALL OFFSET(2) NUMBITS(1) [
            NO_STALSNT = 0,
            STALSNT = 1,
        ],
        TXPKTRDY OFFSET(1) NUMBITS(1) [
            NO_TXPKTRDY = 0,
            TXPKTRDY = 1,
        ],
        RXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_PKTRDY = 0,
            PKTRDY = 1,
        ],
    ],
    pub EP0_CSR_H [
        DISPING OFFSET(11) NUMBITS(1) [
            NO_DISPING = 0,
            DISPING = 1,
        ],
        DATGLEN OFFSET(10) NUMBITS(1) [
            NO_DATGLEN = 0,
            DATGLEN = 1,
        ],
        DATGL OFFSET(9) NUMBITS(1) [
            NO_DATATGL = 0,
            DATATGL = 1,
        ],
        FLUSHFIFO OFFSET(8) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        NAKTO OFFSET(7) NUMBITS(1) [
            NO_NAKTO = 0,
            NAKTO = 1,
        ],
        STATUSPKT OFFSET(6) NUMBITS(1) [
            NO_STATPKT = 0,
            STATPKT = 1,
        ],
        REQPKT OFFSET(5) NUMBITS(1) [
            NO_REQPKT = 0,
            REQPKT = 1,
        ],
        TOERR OFFSET(4) NUMBITS(1) [
            NO_TOERR = 0,
            TOERR = 1,
        ],
        SETUPPKT OFFSET(3) NUMBITS(1) [
            NO_SETUPPKT = 0,
            SETUPPKT = 1,
        ],
        RXSTALL OFFSET(2) NUMBITS(1) [
            NO_RXSTALL = 0,
            RXSTALL = 1,
        ],
        TXPKTRDY OFFSET(1) NUMBITS(1) [
            NO_TXPKTRDY = 0,
            TXPKTRDY = 1,
        ],
        RXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_RXPKTRDY = 0,
            RXPKTRDY = 1,
        ],
    ],
    pub EP_TXCSR_H [
        AUTOSET OFFSET(15) NUMBITS(1) [
            NO_AUTOSET = 0,
            AUTOSET = 1,
        ],
        DMAREQEN OFFSET(12) NUMBITS(1) [
            DMAREQDIS = 0,
            DMAREQEN = 1,
        ],
        FRCDATATGL OFFSET(11) NUMBITS(1) [
            NO_FRCTGL = 0,
            FRCTGL = 1,
        ],
        DMAREQMODE OFFSET(10) NUMBITS(1) [
            DMARQMODE0 = 0,
            DMARQMODE1 = 1,
        ],
        DATGLEN OFFSET(9) NUMBITS(1) [
            NO_DATGLEN = 0,
            DATGLEN = 1,
        ],
        DATGL OFFSET(8) NUMBITS(1) [
            NO_DATGL = 0,
            DATGL = 1,
        ],
        NAKTOINCMP OFFSET(7) NUMBITS(1) [
            NO_NAKTO = 0,
            NAKTO = 1,
        ],
        CLRDATATGL OFFSET(6) NUMBITS(1) [
            NO_CLRTGL = 0,
            CLRTGL = 1,
        ],
        RXSTALL OFFSET(5) NUMBITS(1) [
            NO_RXSTALL = 0,
            RXSTALL = 1,
        ],
        SETUPPKT OFFSET(4) NUMBITS(1) [
            NO_SETUPPK = 0,
            SETUPPKT = 1,
        ],
        FLUSHFIFO OFFSET(3) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        TXTOERR OFFSET(2) NUMBITS(1) [
            NO_TXTOERR = 0,
            TXTOERR = 1,
        ],
        NEFIFO OFFSET(1) NUMBITS(1) [
            NO_NEFIFO = 0,
            NEFIFO = 1,
        ],
        TXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_PKTRDY = 0,
            PKTRDY = 1,
        ],
    ],
    pub EP_RXMAXP [
        MULTM1 OFFSET(11) NUMBITS(2) [],
        MAXPAY OFFSET(0) NUMBITS(11) [],
    ],
    pub EP_RXCSR_P [
        AUTOCLR OFFSET(15) NUMBITS(1) [
            NO_AUTOCLR = 0,
            AUTOCLR = 1,
        ],
        ISO OFFSET(14) NUMBITS(1) [
            ISODIS = 0,
            ISOEN = 1,
        ],
        DMAREQEN OFFSET(13) NUMBITS(1) [
            DMAREQDIS = 0,
            DMAREQEN = 1,
        ],
        DNYETPERR OFFSET(12) NUMBITS(1) [
            DNYTERREN = 0,
            DNYTERRDIS = 1,
        ],
        DMAREQMODE OFFSET(11) NUMBITS(1) [
            DMARQMODE0 = 0,
            DMARQMODE1 = 1,
        ],
        INCOMPRX OFFSET(8) NUMBITS(1) [
            NO_INCOMP = 0,
            INCOMP = 1,
        ],
        CLRDATATGL OFFSET(7) NUMBITS(1) [
            NO_CLRTGL = 0,
            CLRTGL = 1,
        ],
        SENTSTALL OFFSET(6) NUMBITS(1) [
            NO_STALSNT = 0,
            STALSNT = 1,
        ],
        SENDSTALL OFFSET(5) NUMBITS(1) [
            NO_STALL = 0,
            STALL = 1,
        ],
        FLUSHFIFO OFFSET(4) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        DATAERR OFFSET(3) NUMBITS(1) [
            NO_DATAERR = 0,
            DATAERR = 1,
        ],
        ORUNERR OFFSET(2) NUMBITS(1) [
            NO_ORUNERR = 0,
            ORUNERR = 1,
        ],
        FIFOFULL OFFSET(1) NUMBITS(1) [
            NO_FIFOFUL = 0,
            FIFOFUL = 1,
        ],
        RXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_PKTRDY = 0,
            PKTRDY = 1,
        ],
    ],
    pub EP_RXCSR_H [
        AUTOCLR OFFSET(15) NUMBITS(1) [
            NO_AUTOCLR = 0,
            AUTOCLR = 1,
        ],
        AUTOREQ OFFSET(14) NUMBITS(1) [
            NO_AUTOREQ = 0,
            AUTOREQ = 1,
        ],
        DMAREQEN OFFSET(13) NUMBITS(1) [
            DMAREQDIS = 0,
            DMAREQEN = 1,
        ],
        PIDERR OFFSET(12) NUMBITS(1) [
            NO_PIDERR = 0,
            PIDERR = 1,
        ],
        DMAREQMODE OFFSET(11) NUMBITS(1) [
            DMARQMODE0 = 0,
            DMARQMODE1 = 1,
        ],
        DATGLEN OFFSET(10) NUMBITS(1) [
            DATGLDIS = 0,
            DATGLEN = 1,
        ],
        DATGL OFFSET(9) NUMBITS(1) [
            NO_DATGL = 0,
            DATGL = 1,
        ],
        INCOMPRX OFFSET(8) NUMBITS(1) [
            NO_INCOMP = 0,
            INCOMP = 1,
        ],
        CLRDATATGL OFFSET(7) NUMBITS(1) [
            NO_CLRTGL = 0,
            CLRTGL = 1,
        ],
        RXSTALL OFFSET(6) NUMBITS(1) [
            NO_RXSTALL = 0,
            RXSTALL = 1,
        ],
        REQPKT OFFSET(5) NUMBITS(1) [
            NO_REQPKT = 0,
            REQPKT = 1,
        ],
        FLUSHFIFO OFFSET(4) NUMBITS(1) [
            NO_FLUSH = 0,
            FLUSH = 1,
        ],
        NAKTODERR OFFSET(3) NUMBITS(1) [
            NO_NAKTO = 0,
            NAKTO = 1,
        ],
        RXTOERR OFFSET(2) NUMBITS(1) [
            NO_RXTOERR = 0,
            RXTOERR = 1,
        ],
        FIFOFULL OFFSET(1) NUMBITS(1) [
            NO_FIFOFUL = 0,
            FIFOFUL = 1,
        ],
        RXPKTRDY OFFSET(0) NUMBITS(1) [
            NO_PKTRDY = 0,
            PKTRDY = 1,
        ],
    ],
    pub EP0_CNT [
        RXCNT OFFSET(0) NUMBITS(7) [],
    ],
    pub EP_RXCNT [
        EPRXCNT OFFSET(0) NUMBITS(14) [],
    ],
    pub DMA_CTL [
        BRSTM OFFSET(9) NUMBITS(2) [
            BRSTM00 = 0,
            BRSTM01 = 1,
            BRSTM10 = 2,
            BRSTM11 = 3,
        ],
        ERR OFFSET(8) NUMBITS(1) [
            NO_DMAERR = 0,
            DMAERR = 1,
        ],
        EP OFFSET(4) NUMBITS(4) [
            DMAEP0 = 0,
            DMAEP1 = 1,
            DMAEP10 = 10,
            DMAEP11 = 11,
            DMAEP12 = 12,
            DMAEP13 = 13,
            DMAEP14 = 14,
            DMAEP15 = 15,
            DMAEP2 = 2,
            DMAEP3 = 3,
            DMAEP4 = 4,
            DMAEP5 = 5,
            DMAEP6 = 6,
            DMAEP7 = 7,
            DMAEP8 = 8,
            DMAEP9 = 9,
        ],
        IE OFFSET(3) NUMBITS(1) [
            DMAINTDIS = 0,
            DMAINTEN = 1,
        ],
        MODE OFFSET(2) NUMBITS(1) [
            DMAMODE0 = 0,
            DMAMODE1 = 1,
        ],
        DIR OFFSET(1) NUMBITS(1) [
            DMADIR_RX = 0,
            DMADIR_TX = 1,
        ],
        EN OFFSET(0) NUMBITS(1) [
            DMADIS = 0,
            DMAEN = 1,
        ],
    ],
    pub CT_UCH [
        VALUE OFFSET(0) NUMBITS(15) [],
    ],
    pub LPM_ATTR [
        EP OFFSET(12) NUMBITS(4) [],
        RMTWAK OFFSET(8) NUMBITS(1) [
            RMTWAKDIS = 0,
            RMTWAKEN = 1,
        ],
        HIRD OFFSET(4) NUMBITS(4) [],
        LINKSTATE OFFSET(0) NUMBITS(4) [
            LNKSTATE_SSL1 = 1,
        ],
    ],
    pub PHY_CTL [
        EN OFFSET(7) NUMBITS(1) [],
        RESTORE OFFSET(1) NUMBITS(1) [],
        HIBER OFFSET(0) NUMBITS(1) [],
    ],
];

pub const USB0_BASE: StaticRef<UsbRegisters> =
    unsafe { StaticRef::new(0x400A_0000 as *const UsbRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn fields_match_constants() {
        assert_eq!(FADDR::VALUE.mask << FADDR::VALUE.shift, BITM_USB_FADDR_VALUE);
        assert_eq!(FADDR::VALUE.shift as u32, BITP_USB_FADDR_VALUE);
        assert_eq!(POWER::ISOUPDT.mask << POWER::ISOUPDT.shift, BITM_USB_POWER_ISOUPDT);
        assert_eq!(POWER::ISOUPDT.shift as u32, BITP_USB_POWER_ISOUPDT);
        assert_eq!(POWER::SOFTCONN.mask << POWER::SOFTCONN.shift, BITM_USB_POWER_SOFTCONN);
        assert_eq!(POWER::SOFTCONN.shift as u32, BITP_USB_POWER_SOFTCONN);
        assert_eq!(POWER::HSEN.mask << POWER::HSEN.shift, BITM_USB_POWER_HSEN);
        assert_eq!(POWER::HSEN.shift as u32, BITP_USB_POWER_HSEN);
        assert_eq!(POWER::HSMODE.mask << POWER::HSMODE.shift, BITM_USB_POWER_HSMODE);
        assert_eq!(POWER::HSMODE.shift as u32, BITP_USB_POWER_HSMODE);
        assert_eq!(POWER::RESET.mask << POWER::RESET.shift, BITM_USB_POWER_RESET);
        assert_eq!(POWER::RESET.shift as u32, BITP_USB_POWER_RESET);
        assert_eq!(POWER::RESUME.mask << POWER::RESUME.shift, BITM_USB_POWER_RESUME);
        assert_eq!(POWER::RESUME.shift as u32, BITP_USB_POWER_RESUME);
        assert_eq!(POWER::SUSPEND.mask << POWER::SUSPEND.shift, BITM_USB_POWER_SUSPEND);
        assert_eq!(POWER::SUSPEND.shift as u32, BITP_USB_POWER_SUSPEND);
        assert_eq!(POWER::SUSEN.mask << POWER::SUSEN.shift, BITM_USB_POWER_SUSEN);
        assert_eq!(POWER::SUSEN.shift as u32, BITP_USB_POWER_SUSEN);
        assert_eq!(INTRTX::EP11.mask << INTRTX::EP11.shift, BITM_USB_INTRTX_EP11);
        assert_eq!(INTRTX::EP11.shift as u32, BITP_USB_INTRTX_EP11);
        assert_eq!(INTRTX::EP10.mask << INTRTX::EP10.shift, BITM_USB_INTRTX_EP10);
        assert_eq!(INTRTX::EP10.shift as u32, BITP_USB_INTRTX_EP10);
        assert_eq!(INTRTX::EP9.mask << INTRTX::EP9.shift, BITM_USB_INTRTX_EP9);
        assert_eq!(INTRTX::EP9.shift as u32, BITP_USB_INTRTX_EP9);
        assert_eq!(INTRTX::EP8.mask << INTRTX::EP8.shift, BITM_USB_INTRTX_EP8);
        assert_eq!(INTRTX::EP8.shift as u32, BITP_USB_INTRTX_EP8);
        assert_eq!(INTRTX::EP7.mask << INTRTX::EP7.shift, BITM_USB_INTRTX_EP7);
        assert_eq!(INTRTX::EP7.shift as u32, BITP_USB_INTRTX_EP7);
        assert_eq!(INTRTX::EP6.mask << INTRTX::EP6.shift, BITM_USB_INTRTX_EP6);
        assert_eq!(INTRTX::EP6.shift as u32, BITP_USB_INTRTX_EP6);
        assert_eq!(INTRTX::EP5.mask << INTRTX::EP5.shift, BITM_USB_INTRTX_EP5);
        assert_eq!(INTRTX::EP5.shift as u32, BITP_USB_INTRTX_EP5);
        assert_eq!(INTRTX::EP4.mask << INTRTX::EP4.shift, BITM_USB_INTRTX_EP4);
        assert_eq!(INTRTX::EP4.shift as u32, BITP_USB_INTRTX_EP4);
        assert_eq!(INTRTX::EP3.mask << INTRTX::EP3.shift, BITM_USB_INTRTX_EP3);
        assert_eq!(INTRTX::EP3.shift as u32, BITP_USB_INTRTX_EP3);
        assert_eq!(INTRTX::EP2.mask << INTRTX::EP2.shift, BITM_USB_INTRTX_EP2);
        assert_eq!(INTRTX::EP2.shift as u32, BITP_USB_INTRTX_EP2);
        assert_eq!(INTRTX::EP1.mask << INTRTX::EP1.shift, BITM_USB_INTRTX_EP1);
        assert_eq!(INTRTX::EP1.shift as u32, BITP_USB_INTRTX_EP1);
        assert_eq!(INTRTX::EP0.mask << INTRTX::EP0.shift, BITM_USB_INTRTX_EP0);
        assert_eq!(INTRTX::EP0.shift as u32, BITP_USB_INTRTX_EP0);
        assert_eq!(INTRRX::EP11.mask << INTRRX::EP11.shift, BITM_USB_INTRRX_EP11);
        assert_eq!(INTRRX::EP11.shift as u32, BITP_USB_INTRRX_EP11);
        assert_eq!(INTRRX::EP10.mask << INTRRX::EP10.shift, BITM_USB_INTRRX_EP10);
        assert_eq!(INTRRX::EP10.shift as u32, BITP_USB_INTRRX_EP10);
        assert_eq!(INTRRX::EP9.mask << INTRRX::EP9.shift, BITM_USB_INTRRX_EP9);
        assert_eq!(INTRRX::EP9.shift as u32, BITP_USB_INTRRX_EP9);
        assert_eq!(INTRRX::EP8.mask << INTRRX::EP8.shift, BITM_USB_INTRRX_EP8);
        assert_eq!(INTRRX::EP8.shift as u32, BITP_USB_INTRRX_EP8);
        assert_eq!(INTRRX::EP7.mask << INTRRX::EP7.shift, BITM_USB_INTRRX_EP7);
        assert_eq!(INTRRX::EP7.shift as u32, BITP_USB_INTRRX_EP7);
        assert_eq!(INTRRX::EP6.mask << INTRRX::EP6.shift, BITM_USB_INTRRX_EP6);
        assert_eq!(INTRRX::EP6.shift as u32, BITP_USB_INTRRX_EP6);
        assert_eq!(INTRRX::EP5.mask << INTRRX::EP5.shift, BITM_USB_INTRRX_EP5);
        assert_eq!(INTRRX::EP5.shift as u32, BITP_USB_INTRRX_EP5);
        assert_eq!(INTRRX::EP4.mask << INTRRX::EP4.shift, BITM_USB_INTRRX_EP4);
        assert_eq!(INTRRX::EP4.shift as u32, BITP_USB_INTRRX_EP4);
        assert_eq!(INTRRX::EP3.mask << INTRRX::EP3.shift, BITM_USB_INTRRX_EP3);
        assert_eq!(INTRRX::EP3.shift as u32, BITP_USB_INTRRX_EP3);
        assert_eq!(INTRRX::EP2.mask << INTRRX::EP2.shift, BITM_USB_INTRRX_EP2);
        assert_eq!(INTRRX::EP2.shift as u32, BITP_USB_INTRRX_EP2);
        assert_eq!(INTRRX::EP1.mask << INTRRX::EP1.shift, BITM_USB_INTRRX_EP1);
        assert_eq!(INTRRX::EP1.shift as u32, BITP_USB_INTRRX_EP1);
        assert_eq!(INTRTXE::EP11.mask << INTRTXE::EP11.shift, BITM_USB_INTRTXE_EP11);
        assert_eq!(INTRTXE::EP11.shift as u32, BITP_USB_INTRTXE_EP11);
        assert_eq!(INTRTXE::EP10.mask << INTRTXE::EP10.shift, BITM_USB_INTRTXE_EP10);
        assert_eq!(INTRTXE::EP10.shift as u32, BITP_USB_INTRTXE_EP10);
        assert_eq!(INTRTXE::EP9.mask << INTRTXE::EP9.shift, BITM_USB_INTRTXE_EP9);
        assert_eq!(INTRTXE::EP9.shift as u32, BITP_USB_INTRTXE_EP9);
        assert_eq!(INTRTXE::EP8.mask << INTRTXE::EP8.shift, BITM_USB_INTRTXE_EP8);
        assert_eq!(INTRTXE::EP8.shift as u32, BITP_USB_INTRTXE_EP8);
        assert_eq!(INTRTXE::EP7.mask << INTRTXE::EP7.shift, BITM_USB_INTRTXE_EP7);
        assert_eq!(INTRTXE::EP7.shift as u32, BITP_USB_INTRTXE_EP7);
        assert_eq!(INTRTXE::EP6.mask << INTRTXE::EP6.shift, BITM_USB_INTRTXE_EP6);
        assert_eq!(INTRTXE::EP6.shift as u32, BITP_USB_INTRTXE_EP6);
        assert_eq!(INTRTXE::EP5.mask << INTRTXE::EP5.shift, BITM_USB_INTRTXE_EP5);
        assert_eq!(INTRTXE::EP5.shift as u32, BITP_USB_INTRTXE_EP5);
        assert_eq!(INTRTXE::EP4.mask << INTRTXE::EP4.shift, BITM_USB_INTRTXE_EP4);
        assert_eq!(INTRTXE::EP4.shift as u32, BITP_USB_INTRTXE_EP4);
        assert_eq!(INTRTXE::EP3.mask << INTRTXE::EP3.shift, BITM_USB_INTRTXE_EP3);
        assert_eq!(INTRTXE::EP3.shift as u32, BITP_USB_INTRTXE_EP3);
        assert_eq!(INTRTXE::EP2.mask << INTRTXE::EP2.shift, BITM_USB_INTRTXE_EP2);
        assert_eq!(INTRTXE::EP2.shift as u32, BITP_USB_INTRTXE_EP2);
        assert_eq!(INTRTXE::EP1.mask << INTRTXE::EP1.shift, BITM_USB_INTRTXE_EP1);
        assert_eq!(INTRTXE::EP1.shift as u32, BITP_USB_INTRTXE_EP1);
        assert_eq!(INTRTXE::EP0.mask << INTRTXE::EP0.shift, BITM_USB_INTRTXE_EP0);
        assert_eq!(INTRTXE::EP0.shift as u32, BITP_USB_INTRTXE_EP0);
        assert_eq!(INTRRXE::EP11.mask << INTRRXE::EP11.shift, BITM_USB_INTRRXE_EP11);
        assert_eq!(INTRRXE::EP11.shift as u32, BITP_USB_INTRRXE_EP11);
        assert_eq!(INTRRXE::EP10.mask << INTRRXE::EP10.shift, BITM_USB_INTRRXE_EP10);
        assert_eq!(INTRRXE::EP10.shift as u32, BITP_USB_INTRRXE_EP10);
        assert_eq!(INTRRXE::EP9.mask << INTRRXE::EP9.shift, BITM_USB_INTRRXE_EP9);
        assert_eq!(INTRRXE::EP9.shift as u32, BITP_USB_INTRRXE_EP9);
        assert_eq!(INTRRXE::EP8.mask << INTRRXE::EP8.shift, BITM_USB_INTRRXE_EP8);
        assert_eq!(INTRRXE::EP8.shift as u32, BITP_USB_INTRRXE_EP8);
        assert_eq!(INTRRXE::EP7.mask << INTRRXE::EP7.shift, BITM_USB_INTRRXE_EP7);
        assert_eq!(INTRRXE::EP7.shift as u32, BITP_USB_INTRRXE_EP7);
        assert_eq!(INTRRXE::EP6.mask << INTRRXE::EP6.shift, BITM_USB_INTRRXE_EP6);
        assert_eq!(INTRRXE::EP6.shift as u32, BITP_USB_INTRRXE_EP6);
        assert_eq!(INTRRXE::EP5.mask << INTRRXE::EP5.shift, BITM_USB_INTRRXE_EP5);
        assert_eq!(INTRRXE::EP5.shift as u32, BITP_USB_INTRRXE_EP5);
        assert_eq!(INTRRXE::EP4.mask << INTRRXE::EP4.shift, BITM_USB_INTRRXE_EP4);
        assert_eq!(INTRRXE::EP4.shift as u32, BITP_USB_INTRRXE_EP4);
        assert_eq!(INTRRXE::EP3.mask << INTRRXE::EP3.shift, BITM_USB_INTRRXE_EP3);
        assert_eq!(INTRRXE::EP3.shift as u32, BITP_USB_INTRRXE_EP3);
        assert_eq!(INTRRXE::EP2.mask << INTRRXE::EP2.shift, BITM_USB_INTRRXE_EP2);
        assert_eq!(INTRRXE::EP2.shift as u32, BITP_USB_INTRRXE_EP2);
        assert_eq!(INTRRXE::EP1.mask << INTRRXE::EP1.shift, BITM_USB_INTRRXE_EP1);
        assert_eq!(INTRRXE::EP1.shift as u32, BITP_USB_INTRRXE_EP1);
        assert_eq!(IRQ::VBUSERR.mask << IRQ::VBUSERR.shift, BITM_USB_IRQ_VBUSERR);
        assert_eq!(IRQ::VBUSERR.shift as u32, BITP_USB_IRQ_VBUSERR);
        assert_eq!(IRQ::SESSREQ.mask << IRQ::SESSREQ.shift, BITM_USB_IRQ_SESSREQ);
        assert_eq!(IRQ::SESSREQ.shift as u32, BITP_USB_IRQ_SESSREQ);
        assert_eq!(IRQ::DISCON.mask << IRQ::DISCON.shift, BITM_USB_IRQ_DISCON);
        assert_eq!(IRQ::DISCON.shift as u32, BITP_USB_IRQ_DISCON);
        assert_eq!(IRQ::CON.mask << IRQ::CON.shift, BITM_USB_IRQ_CON);
        assert_eq!(IRQ::CON.shift as u32, BITP_USB_IRQ_CON);
        assert_eq!(IRQ::SOF.mask << IRQ::SOF.shift, BITM_USB_IRQ_SOF);
        assert_eq!(IRQ::SOF.shift as u32, BITP_USB_IRQ_SOF);
        assert_eq!(IRQ::RSTBABBLE.mask << IRQ::RSTBABBLE.shift, BITM_USB_IRQ_RSTBABBLE);
        assert_eq!(IRQ::RSTBABBLE.shift as u32, BITP_USB_IRQ_RSTBABBLE);
        assert_eq!(IRQ::RESUME.mask << IRQ::RESUME.shift, BITM_USB_IRQ_RESUME);
        assert_eq!(IRQ::RESUME.shift as u32, BITP_USB_IRQ_RESUME);
        assert_eq!(IRQ::SUSPEND.mask << IRQ::SUSPEND.shift, BITM_USB_IRQ_SUSPEND);
        assert_eq!(IRQ::SUSPEND.shift as u32, BITP_USB_IRQ_SUSPEND);
        assert_eq!(IEN::VBUSERR.mask << IEN::VBUSERR.shift, BITM_USB_IEN_VBUSERR);
        assert_eq!(IEN::VBUSERR.shift as u32, BITP_USB_IEN_VBUSERR);
        assert_eq!(IEN::SESSREQ.mask << IEN::SESSREQ.shift, BITM_USB_IEN_SESSREQ);
        assert_eq!(IEN::SESSREQ.shift as u32, BITP_USB_IEN_SESSREQ);
        assert_eq!(IEN::DISCON.mask << IEN::DISCON.shift, BITM_USB_IEN_DISCON);
        assert_eq!(IEN::DISCON.shift as u32, BITP_USB_IEN_DISCON);
        assert_eq!(IEN::CON.mask << IEN::CON.shift, BITM_USB_IEN_CON);
        assert_eq!(IEN::CON.shift as u32, BITP_USB_IEN_CON);
        assert_eq!(IEN::SOF.mask << IEN::SOF.shift, BITM_USB_IEN_SOF);
        assert_eq!(IEN::SOF.shift as u32, BITP_USB_IEN_SOF);
        assert_eq!(IEN::RSTBABBLE.mask << IEN::RSTBABBLE.shift, BITM_USB_IEN_RSTBABBLE);
        assert_eq!(IEN::RSTBABBLE.shift as u32, BITP_USB_IEN_RSTBABBLE);
        assert_eq!(IEN::RESUME.mask << IEN::RESUME.shift, BITM_USB_IEN_RESUME);
        assert_eq!(IEN::RESUME.shift as u32, BITP_USB_IEN_RESUME);
        assert_eq!(IEN::SUSPEND.mask << IEN::SUSPEND.shift, BITM_USB_IEN_SUSPEND);
        assert_eq!(IEN::SUSPEND.shift as u32, BITP_USB_IEN_SUSPEND);
        assert_eq!(FRAME::VALUE.mask << FRAME::VALUE.shift, BITM_USB_FRAME_VALUE);
        assert_eq!(FRAME::VALUE.shift as u32, BITP_USB_FRAME_VALUE);
        assert_eq!(INDEX::EP.mask << INDEX::EP.shift, BITM_USB_INDEX_EP);
        assert_eq!(INDEX::EP.shift as u32, BITP_USB_INDEX_EP);
        assert_eq!(TESTMODE::FIFOACCESS.mask << TESTMODE::FIFOACCESS.shift, BITM_USB_TESTMODE_FIFOACCESS);
        assert_eq!(TESTMODE::FIFOACCESS.shift as u32, BITP_USB_TESTMODE_FIFOACCESS);
        assert_eq!(TESTMODE::TESTPACKET.mask << TESTMODE::TESTPACKET.shift, BITM_USB_TESTMODE_TESTPACKET);
        assert_eq!(TESTMODE::TESTPACKET.shift as u32, BITP_USB_TESTMODE_TESTPACKET);
        assert_eq!(TESTMODE::TESTK.mask << TESTMODE::TESTK.shift, BITM_USB_TESTMODE_TESTK);
        assert_eq!(TESTMODE::TESTK.shift as u32, BITP_USB_TESTMODE_TESTK);
        assert_eq!(TESTMODE::TESTJ.mask << TESTMODE::TESTJ.shift, BITM_USB_TESTMODE_TESTJ);
        assert_eq!(TESTMODE::TESTJ.shift as u32, BITP_USB_TESTMODE_TESTJ);
        assert_eq!(TESTMODE::TESTSE0NAK.mask << TESTMODE::TESTSE0NAK.shift, BITM_USB_TESTMODE_TESTSE0NAK);
        assert_eq!(TESTMODE::TESTSE0NAK.shift as u32, BITP_USB_TESTMODE_TESTSE0NAK);
        assert_eq!(EPI_TXMAXP::MULTM1.mask << EPI_TXMAXP::MULTM1.shift, BITM_USB_EPI_TXMAXP_MULTM1);
        assert_eq!(EPI_TXMAXP::MULTM1.shift as u32, BITP_USB_EPI_TXMAXP_MULTM1);
        assert_eq!(EPI_TXMAXP::MAXPAY.mask << EPI_TXMAXP::MAXPAY.shift, BITM_USB_EPI_TXMAXP_MAXPAY);
        assert_eq!(EPI_TXMAXP::MAXPAY.shift as u32, BITP_USB_EPI_TXMAXP_MAXPAY);
        assert_eq!(EPI_TXCSR_H::AUTOSET.mask << EPI_TXCSR_H::AUTOSET.shift, BITM_USB_EPI_TXCSR_H_AUTOSET);
        assert_eq!(EPI_TXCSR_H::AUTOSET.shift as u32, BITP_USB_EPI_TXCSR_H_AUTOSET);
        assert_eq!(EPI_TXCSR_H::DMAREQEN.mask << EPI_TXCSR_H::DMAREQEN.shift, BITM_USB_EPI_TXCSR_H_DMAREQEN);
        assert_eq!(EPI_TXCSR_H::DMAREQEN.shift as u32, BITP_USB_EPI_TXCSR_H_DMAREQEN);
        assert_eq!(EPI_TXCSR_H::FRCDATATGL.mask << EPI_TXCSR_H::FRCDATATGL.shift, BITM_USB_EPI_TXCSR_H_FRCDATATGL);
        assert_eq!(EPI_TXCSR_H::FRCDATATGL.shift as u32, BITP_USB_EPI_TXCSR_H_FRCDATATGL);
        assert_eq!(EPI_TXCSR_H::DMAREQMODE.mask << EPI_TXCSR_H::DMAREQMODE.shift, BITM_USB_EPI_TXCSR_H_DMAREQMODE);
        assert_eq!(EPI_TXCSR_H::DMAREQMODE.shift as u32, BITP_USB_EPI_TXCSR_H_DMAREQMODE);
        assert_eq!(EPI_TXCSR_H::DATGLEN.mask << EPI_TXCSR_H::DATGLEN.shift, BITM_USB_EPI_TXCSR_H_DATGLEN);
        assert_eq!(EPI_TXCSR_H::DATGLEN.shift as u32, BITP_USB_EPI_TXCSR_H_DATGLEN);
        assert_eq!(EPI_TXCSR_H::DATGL.mask << EPI_TXCSR_H::DATGL.shift, BITM_USB_EPI_TXCSR_H_DATGL);
        assert_eq!(EPI_TXCSR_H::DATGL.shift as u32, BITP_USB_EPI_TXCSR_H_DATGL);
        assert_eq!(EPI_TXCSR_H::NAKTOINCMP.mask << EPI_TXCSR_H::NAKTOINCMP.shift, BITM_USB_EPI_TXCSR_H_NAKTOINCMP);
        assert_eq!(EPI_TXCSR_H::NAKTOINCMP.shift as u32, BITP_USB_EPI_TXCSR_H_NAKTOINCMP);
        assert_eq!(EPI_TXCSR_H::CLRDATATGL.mask << EPI_TXCSR_H::CLRDATATGL.shift, BITM_USB_EPI_TXCSR_H_CLRDATATGL);
        assert_eq!(EPI_TXCSR_H::CLRDATATGL.shift as u32, BITP_USB_EPI_TXCSR_H_CLRDATATGL);
        assert_eq!(EPI_TXCSR_H::RXSTALL.mask << EPI_TXCSR_H::RXSTALL.shift, BITM_USB_EPI_TXCSR_H_RXSTALL);
        assert_eq!(EPI_TXCSR_H::RXSTALL.shift as u32, BITP_USB_EPI_TXCSR_H_RXSTALL);
        assert_eq!(EPI_TXCSR_H::SETUPPKT.mask << EPI_TXCSR_H::SETUPPKT.shift, BITM_USB_EPI_TXCSR_H_SETUPPKT);
        assert_eq!(EPI_TXCSR_H::SETUPPKT.shift as u32, BITP_USB_EPI_TXCSR_H_SETUPPKT);
        assert_eq!(EPI_TXCSR_H::FLUSHFIFO.mask << EPI_TXCSR_H::FLUSHFIFO.shift, BITM_USB_EPI_TXCSR_H_FLUSHFIFO);
        assert_eq!(EPI_TXCSR_H::FLUSHFIFO.shift as u32, BITP_USB_EPI_TXCSR_H_FLUSHFIFO);
        assert_eq!(EPI_TXCSR_H::TXTOERR.mask << EPI_TXCSR_H::TXTOERR.shift, BITM_USB_EPI_TXCSR_H_TXTOERR);
        assert_eq!(EPI_TXCSR_H::TXTOERR.shift as u32, BITP_USB_EPI_TXCSR_H_TXTOERR);
        assert_eq!(EPI_TXCSR_H::NEFIFO.mask << EPI_TXCSR_H::NEFIFO.shift, BITM_USB_EPI_TXCSR_H_NEFIFO);
        assert_eq!(EPI_TXCSR_H::NEFIFO.shift as u32, BITP_USB_EPI_TXCSR_H_NEFIFO);
        assert_eq!(EPI_TXCSR_H::TXPKTRDY.mask << EPI_TXCSR_H::TXPKTRDY.shift, BITM_USB_EPI_TXCSR_H_TXPKTRDY);
        assert_eq!(EPI_TXCSR_H::TXPKTRDY.shift as u32, BITP_USB_EPI_TXCSR_H_TXPKTRDY);
        assert_eq!(EP0I_CSR_P::FLUSHFIFO.mask << EP0I_CSR_P::FLUSHFIFO.shift, BITM_USB_EP0I_CSR_P_FLUSHFIFO);
        assert_eq!(EP0I_CSR_P::FLUSHFIFO.shift as u32, BITP_USB_EP0I_CSR_P_FLUSHFIFO);
        assert_eq!(EP0I_CSR_P::SSETUPEND.mask << EP0I_CSR_P::SSETUPEND.shift, BITM_USB_EP0I_CSR_P_SSETUPEND);
        assert_eq!(EP0I_CSR_P::SSETUPEND.shift as u32, BITP_USB_EP0I_CSR_P_SSETUPEND);
        assert_eq!(EP0I_CSR_P::SPKTRDY.mask << EP0I_CSR_P::SPKTRDY.shift, BITM_USB_EP0I_CSR_P_SPKTRDY);
        assert_eq!(EP0I_CSR_P::SPKTRDY.shift as u32, BITP_USB_EP0I_CSR_P_SPKTRDY);
        assert_eq!(EP0I_CSR_P::SENDSTALL.mask << EP0I_CSR_P::SENDSTALL.shift, BITM_USB_EP0I_CSR_P_SENDSTALL);
        assert_eq!(EP0I_CSR_P::SENDSTALL.shift as u32, BITP_USB_EP0I_CSR_P_SENDSTALL);
        assert_eq!(EP0I_CSR_P::SETUPEND.mask << EP0I_CSR_P::SETUPEND.shift, BITM_USB_EP0I_CSR_P_SETUPEND);
        assert_eq!(EP0I_CSR_P::SETUPEND.shift as u32, BITP_USB_EP0I_CSR_P_SETUPEND);
        assert_eq!(EP0I_CSR_P::DATAEND.mask << EP0I_CSR_P::DATAEND.shift, BITM_USB_EP0I_CSR_P_DATAEND);
        assert_eq!(EP0I_CSR_P::DATAEND.shift as u32, BITP_USB_EP0I_CSR_P_DATAEND);
        assert_eq!(EP0I_CSR_P::SENTSTALL.mask << EP0I_CSR_P::SENTSTALL.shift, BITM_USB_EP0I_CSR_P_SENTSTALL);
        assert_eq!(EP0I_CSR_P::SENTSTALL.shift as u32, BITP_USB_EP0I_CSR_P_SENTSTALL);
        assert_eq!(EP0I_CSR_P::TXPKTRDY.mask << EP0I_CSR_P::TXPKTRDY.shift, BITM_USB_EP0I_CSR_P_TXPKTRDY);
        assert_eq!(EP0I_CSR_P::TXPKTRDY.shift as u32, BITP_USB_EP0I_CSR_P_TXPKTRDY);
        assert_eq!(EP0I_CSR_P::RXPKTRDY.mask << EP0I_CSR_P::RXPKTRDY.shift, BITM_USB_EP0I_CSR_P_RXPKTRDY);
        assert_eq!(EP0I_CSR_P::RXPKTRDY.shift as u32, BITP_USB_EP0I_CSR_P_RXPKTRDY);
        assert_eq!(EP0I_CSR_H::DISPING.mask << EP0I_CSR_H::DISPING.shift, BITM_USB_EP0I_CSR_H_DISPING);
        assert_eq!(EP0I_CSR_H::DISPING.shift as u32, BITP_USB_EP0I_CSR_H_DISPING);
        assert_eq!(EP0I_CSR_H::DATGLEN.mask << EP0I_CSR_H::DATGLEN.shift, BITM_USB_EP0I_CSR_H_DATGLEN);
        assert_eq!(EP0I_CSR_H::DATGLEN.shift as u32, BITP_USB_EP0I_CSR_H_DATGLEN);
        assert_eq!(EP0I_CSR_H::DATGL.mask << EP0I_CSR_H::DATGL.shift, BITM_USB_EP0I_CSR_H_DATGL);
        assert_eq!(EP0I_CSR_H::DATGL.shift as u32, BITP_USB_EP0I_CSR_H_DATGL);
        assert_eq!(EP0I_CSR_H::FLUSHFIFO.mask << EP0I_CSR_H::FLUSHFIFO.shift, BITM_USB_EP0I_CSR_H_FLUSHFIFO);
        assert_eq!(EP0I_CSR_H::FLUSHFIFO.shift as u32, BITP_USB_EP0I_CSR_H_FLUSHFIFO);
        assert_eq!(EP0I_CSR_H::NAKTO.mask << EP0I_CSR_H::NAKTO.shift, BITM_USB_EP0I_CSR_H_NAKTO);
        assert_eq!(EP0I_CSR_H::NAKTO.shift as u32, BITP_USB_EP0I_CSR_H_NAKTO);
        assert_eq!(EP0I_CSR_H::STATUSPKT.mask << EP0I_CSR_H::STATUSPKT.shift, BITM_USB_EP0I_CSR_H_STATUSPKT);
        assert_eq!(EP0I_CSR_H::STATUSPKT.shift as u32, BITP_USB_EP0I_CSR_H_STATUSPKT);
        assert_eq!(EP0I_CSR_H::REQPKT.mask << EP0I_CSR_H::REQPKT.shift, BITM_USB_EP0I_CSR_H_REQPKT);
        assert_eq!(EP0I_CSR_H::REQPKT.shift as u32, BITP_USB_EP0I_CSR_H_REQPKT);
        assert_eq!(EP0I_CSR_H::TOERR.mask << EP0I_CSR_H::TOERR.shift, BITM_USB_EP0I_CSR_H_TOERR);
        assert_eq!(EP0I_CSR_H::TOERR.shift as u32, BITP_USB_EP0I_CSR_H_TOERR);
        assert_eq!(EP0I_CSR_H::SETUPPKT.mask << EP0I_CSR_H::SETUPPKT.shift, BITM_USB_EP0I_CSR_H_SETUPPKT);
        assert_eq!(EP0I_CSR_H::SETUPPKT.shift as u32, BITP_USB_EP0I_CSR_H_SETUPPKT);
        assert_eq!(EP0I_CSR_H::RXSTALL.mask << EP0I_CSR_H::RXSTALL.shift, BITM_USB_EP0I_CSR_H_RXSTALL);
        assert_eq!(EP0I_CSR_H::RXSTALL.shift as u32, BITP_USB_EP0I_CSR_H_RXSTALL);
        assert_eq!(EP0I_CSR_H::TXPKTRDY.mask << EP0I_CSR_H::TXPKTRDY.shift, BITM_USB_EP0I_CSR_H_TXPKTRDY);
        assert_eq!(EP0I_CSR_H::TXPKTRDY.shift as u32, BITP_USB_EP0I_CSR_H_TXPKTRDY);
        assert_eq!(EP0I_CSR_H::RXPKTRDY.mask << EP0I_CSR_H::RXPKTRDY.shift, BITM_USB_EP0I_CSR_H_RXPKTRDY);
        assert_eq!(EP0I_CSR_H::RXPKTRDY.shift as u32, BITP_USB_EP0I_CSR_H_RXPKTRDY);
        assert_eq!(EPI_TXCSR_P::AUTOSET.mask << EPI_TXCSR_P::AUTOSET.shift, BITM_USB_EPI_TXCSR_P_AUTOSET);
        assert_eq!(EPI_TXCSR_P::AUTOSET.shift as u32, BITP_USB_EPI_TXCSR_P_AUTOSET);
        assert_eq!(EPI_TXCSR_P::ISO.mask << EPI_TXCSR_P::ISO.shift, BITM_USB_EPI_TXCSR_P_ISO);
        assert_eq!(EPI_TXCSR_P::ISO.shift as u32, BITP_USB_EPI_TXCSR_P_ISO);
        assert_eq!(EPI_TXCSR_P::DMAREQEN.mask << EPI_TXCSR_P::DMAREQEN.shift, BITM_USB_EPI_TXCSR_P_DMAREQEN);
        assert_eq!(EPI_TXCSR_P::DMAREQEN.shift as u32, BITP_USB_EPI_TXCSR_P_DMAREQEN);
        assert_eq!(EPI_TXCSR_P::FRCDATATGL.mask << EPI_TXCSR_P::FRCDATATGL.shift, BITM_USB_EPI_TXCSR_P_FRCDATATGL);
        assert_eq!(EPI_TXCSR_P::FRCDATATGL.shift as u32, BITP_USB_EPI_TXCSR_P_FRCDATATGL);
        assert_eq!(EPI_TXCSR_P::DMAREQMODE.mask << EPI_TXCSR_P::DMAREQMODE.shift, BITM_USB_EPI_TXCSR_P_DMAREQMODE);
        assert_eq!(EPI_TXCSR_P::DMAREQMODE.shift as u32, BITP_USB_EPI_TXCSR_P_DMAREQMODE);
        assert_eq!(EPI_TXCSR_P::INCOMPTX.mask << EPI_TXCSR_P::INCOMPTX.shift, BITM_USB_EPI_TXCSR_P_INCOMPTX);
        assert_eq!(EPI_TXCSR_P::INCOMPTX.shift as u32, BITP_USB_EPI_TXCSR_P_INCOMPTX);
        assert_eq!(EPI_TXCSR_P::CLRDATATGL.mask << EPI_TXCSR_P::CLRDATATGL.shift, BITM_USB_EPI_TXCSR_P_CLRDATATGL);
        assert_eq!(EPI_TXCSR_P::CLRDATATGL.shift as u32, BITP_USB_EPI_TXCSR_P_CLRDATATGL);
        assert_eq!(EPI_TXCSR_P::SENTSTALL.mask << EPI_TXCSR_P::SENTSTALL.shift, BITM_USB_EPI_TXCSR_P_SENTSTALL);
        assert_eq!(EPI_TXCSR_P::SENTSTALL.shift as u32, BITP_USB_EPI_TXCSR_P_SENTSTALL);
        assert_eq!(EPI_TXCSR_P::SENDSTALL.mask << EPI_TXCSR_P::SENDSTALL.shift, BITM_USB_EPI_TXCSR_P_SENDSTALL);
        assert_eq!(EPI_TXCSR_P::SENDSTALL.shift as u32, BITP_USB_EPI_TXCSR_P_SENDSTALL);
        assert_eq!(EPI_TXCSR_P::FLUSHFIFO.mask << EPI_TXCSR_P::FLUSHFIFO.shift, BITM_USB_EPI_TXCSR_P_FLUSHFIFO);
        assert_eq!(EPI_TXCSR_P::FLUSHFIFO.shift as u32, BITP_USB_EPI_TXCSR_P_FLUSHFIFO);
        assert_eq!(EPI_TXCSR_P::URUNERR.mask << EPI_TXCSR_P::URUNERR.shift, BITM_USB_EPI_TXCSR_P_URUNERR);
        assert_eq!(EPI_TXCSR_P::URUNERR.shift as u32, BITP_USB_EPI_TXCSR_P_URUNERR);
        assert_eq!(EPI_TXCSR_P::NEFIFO.mask << EPI_TXCSR_P::NEFIFO.shift, BITM_USB_EPI_TXCSR_P_NEFIFO);
        assert_eq!(EPI_TXCSR_P::NEFIFO.shift as u32, BITP_USB_EPI_TXCSR_P_NEFIFO);
        assert_eq!(EPI_TXCSR_P::TXPKTRDY.mask << EPI_TXCSR_P::TXPKTRDY.shift, BITM_USB_EPI_TXCSR_P_TXPKTRDY);
        assert_eq!(EPI_TXCSR_P::TXPKTRDY.shift as u32, BITP_USB_EPI_TXCSR_P_TXPKTRDY);
        assert_eq!(EPI_RXMAXP::MULTM1.mask << EPI_RXMAXP::MULTM1.shift, BITM_USB_EPI_RXMAXP_MULTM1);
        assert_eq!(EPI_RXMAXP::MULTM1.shift as u32, BITP_USB_EPI_RXMAXP_MULTM1);
        assert_eq!(EPI_RXMAXP::MAXPAY.mask << EPI_RXMAXP::MAXPAY.shift, BITM_USB_EPI_RXMAXP_MAXPAY);
        assert_eq!(EPI_RXMAXP::MAXPAY.shift as u32, BITP_USB_EPI_RXMAXP_MAXPAY);
        assert_eq!(EPI_RXCSR_H::AUTOCLR.mask << EPI_RXCSR_H::AUTOCLR.shift, BITM_USB_EPI_RXCSR_H_AUTOCLR);
        assert_eq!(EPI_RXCSR_H::AUTOCLR.shift as u32, BITP_USB_EPI_RXCSR_H_AUTOCLR);
        assert_eq!(EPI_RXCSR_H::AUTOREQ.mask << EPI_RXCSR_H::AUTOREQ.shift, BITM_USB_EPI_RXCSR_H_AUTOREQ);
        assert_eq!(EPI_RXCSR_H::AUTOREQ.shift as u32, BITP_USB_EPI_RXCSR_H_AUTOREQ);
        assert_eq!(EPI_RXCSR_H::DMAREQEN.mask << EPI_RXCSR_H::DMAREQEN.shift, BITM_USB_EPI_RXCSR_H_DMAREQEN);
        assert_eq!(EPI_RXCSR_H::DMAREQEN.shift as u32, BITP_USB_EPI_RXCSR_H_DMAREQEN);
        assert_eq!(EPI_RXCSR_H::PIDERR.mask << EPI_RXCSR_H::PIDERR.shift, BITM_USB_EPI_RXCSR_H_PIDERR);
        assert_eq!(EPI_RXCSR_H::PIDERR.shift as u32, BITP_USB_EPI_RXCSR_H_PIDERR);
        assert_eq!(EPI_RXCSR_H::DMAREQMODE.mask << EPI_RXCSR_H::DMAREQMODE.shift, BITM_USB_EPI_RXCSR_H_DMAREQMODE);
        assert_eq!(EPI_RXCSR_H::DMAREQMODE.shift as u32, BITP_USB_EPI_RXCSR_H_DMAREQMODE);
        assert_eq!(EPI_RXCSR_H::DATGLEN.mask << EPI_RXCSR_H::DATGLEN.shift, BITM_USB_EPI_RXCSR_H_DATGLEN);
        assert_eq!(EPI_RXCSR_H::DATGLEN.shift as u32, BITP_USB_EPI_RXCSR_H_DATGLEN);
        assert_eq!(EPI_RXCSR_H::DATGL.mask << EPI_RXCSR_H::DATGL.shift, BITM_USB_EPI_RXCSR_H_DATGL);
        assert_eq!(EPI_RXCSR_H::DATGL.shift as u32, BITP_USB_EPI_RXCSR_H_DATGL);
        assert_eq!(EPI_RXCSR_H::INCOMPRX.mask << EPI_RXCSR_H::INCOMPRX.shift, BITM_USB_EPI_RXCSR_H_INCOMPRX);
        assert_eq!(EPI_RXCSR_H::INCOMPRX.shift as u32, BITP_USB_EPI_RXCSR_H_INCOMPRX);
        assert_eq!(EPI_RXCSR_H::CLRDATATGL.mask << EPI_RXCSR_H::CLRDATATGL.shift, BITM_USB_EPI_RXCSR_H_CLRDATATGL);
        assert_eq!(EPI_RXCSR_H::CLRDATATGL.shift as u32, BITP_USB_EPI_RXCSR_H_CLRDATATGL);
        assert_eq!(EPI_RXCSR_H::RXSTALL.mask << EPI_RXCSR_H::RXSTALL.shift, BITM_USB_EPI_RXCSR_H_RXSTALL);
        assert_eq!(EPI_RXCSR_H::RXSTALL.shift as u32, BITP_USB_EPI_RXCSR_H_RXSTALL);
        assert_eq!(EPI_RXCSR_H::REQPKT.mask << EPI_RXCSR_H::REQPKT.shift, BITM_USB_EPI_RXCSR_H_REQPKT);
        assert_eq!(EPI_RXCSR_H::REQPKT.shift as u32, BITP_USB_EPI_RXCSR_H_REQPKT);
        assert_eq!(EPI_RXCSR_H::FLUSHFIFO.mask << EPI_RXCSR_H::FLUSHFIFO.shift, BITM_USB_EPI_RXCSR_H_FLUSHFIFO);
        assert_eq!(EPI_RXCSR_H::FLUSHFIFO.shift as u32, BITP_USB_EPI_RXCSR_H_FLUSHFIFO);
        assert_eq!(EPI_RXCSR_H::NAKTODERR.mask << EPI_RXCSR_H::NAKTODERR.shift, BITM_USB_EPI_RXCSR_H_NAKTODERR);
        assert_eq!(EPI_RXCSR_H::NAKTODERR.shift as u32, BITP_USB_EPI_RXCSR_H_NAKTODERR);
        assert_eq!(EPI_RXCSR_H::RXTOERR.mask << EPI_RXCSR_H::RXTOERR.shift, BITM_USB_EPI_RXCSR_H_RXTOERR);
        assert_eq!(EPI_RXCSR_H::RXTOERR.shift as u32, BITP_USB_EPI_RXCSR_H_RXTOERR);
        assert_eq!(EPI_RXCSR_H::FIFOFULL.mask << EPI_RXCSR_H::FIFOFULL.shift, BITM_USB_EPI_RXCSR_H_FIFOFULL);
        assert_eq!(EPI_RXCSR_H::FIFOFULL.shift as u32, BITP_USB_EPI_RXCSR_H_FIFOFULL);
        assert_eq!(EPI_RXCSR_H::RXPKTRDY.mask << EPI_RXCSR_H::RXPKTRDY.shift, BITM_USB_EPI_RXCSR_H_RXPKTRDY);
        assert_eq!(EPI_RXCSR_H::RXPKTRDY.shift as u32, BITP_USB_EPI_RXCSR_H_RXPKTRDY);
        assert_eq!(EPI_RXCSR_P::AUTOCLR.mask << EPI_RXCSR_P::AUTOCLR.shift, BITM_USB_EPI_RXCSR_P_AUTOCLR);
        assert_eq!(EPI_RXCSR_P::AUTOCLR.shift as u32, BITP_USB_EPI_RXCSR_P_AUTOCLR);
        assert_eq!(EPI_RXCSR_P::ISO.mask << EPI_RXCSR_P::ISO.shift, BITM_USB_EPI_RXCSR_P_ISO);
        assert_eq!(EPI_RXCSR_P::ISO.shift as u32, BITP_USB_EPI_RXCSR_P_ISO);
        assert_eq!(EPI_RXCSR_P::DMAREQEN.mask << EPI_RXCSR_P::DMAREQEN.shift, BITM_USB_EPI_RXCSR_P_DMAREQEN);
        assert_eq!(EPI_RXCSR_P::DMAREQEN.shift as u32, BITP_USB_EPI_RXCSR_P_DMAREQEN);
        assert_eq!(EPI_RXCSR_P::DNYETPERR.mask << EPI_RXCSR_P::DNYETPERR.shift, BITM_USB_EPI_RXCSR_P_DNYETPERR);
        assert_eq!(EPI_RXCSR_P::DNYETPERR.shift as u32, BITP_USB_EPI_RXCSR_P_DNYETPERR);
        assert_eq!(EPI_RXCSR_P::DMAREQMODE.mask << EPI_RXCSR_P::DMAREQMODE.shift, BITM_USB_EPI_RXCSR_P_DMAREQMODE);
        assert_eq!(EPI_RXCSR_P::DMAREQMODE.shift as u32, BITP_USB_EPI_RXCSR_P_DMAREQMODE);
        assert_eq!(EPI_RXCSR_P::INCOMPRX.mask << EPI_RXCSR_P::INCOMPRX.shift, BITM_USB_EPI_RXCSR_P_INCOMPRX);
        assert_eq!(EPI_RXCSR_P::INCOMPRX.shift as u32, BITP_USB_EPI_RXCSR_P_INCOMPRX);
        assert_eq!(EPI_RXCSR_P::CLRDATATGL.mask << EPI_RXCSR_P::CLRDATATGL.shift, BITM_USB_EPI_RXCSR_P_CLRDATATGL);
        assert_eq!(EPI_RXCSR_P::CLRDATATGL.shift as u32, BITP_USB_EPI_RXCSR_P_CLRDATATGL);
        assert_eq!(EPI_RXCSR_P::SENTSTALL.mask << EPI_RXCSR_P::SENTSTALL.shift, BITM_USB_EPI_RXCSR_P_SENTSTALL);
        assert_eq!(EPI_RXCSR_P::SENTSTALL.shift as u32, BITP_USB_EPI_RXCSR_P_SENTSTALL);
        assert_eq!(EPI_RXCSR_P::SENDSTALL.mask << EPI_RXCSR_P::SENDSTALL.shift, BITM_USB_EPI_RXCSR_P_SENDSTALL);
        assert_eq!(EPI_RXCSR_P::SENDSTALL.shift as u32, BITP_USB_EPI_RXCSR_P_SENDSTALL);
        assert_eq!(EPI_RXCSR_P::FLUSHFIFO.mask << EPI_RXCSR_P::FLUSHFIFO.shift, BITM_USB_EPI_RXCSR_P_FLUSHFIFO);
        assert_eq!(EPI_RXCSR_P::FLUSHFIFO.shift as u32, BITP_USB_EPI_RXCSR_P_FLUSHFIFO);
        assert_eq!(EPI_RXCSR_P::DATAERR.mask << EPI_RXCSR_P::DATAERR.shift, BITM_USB_EPI_RXCSR_P_DATAERR);
        assert_eq!(EPI_RXCSR_P::DATAERR.shift as u32, BITP_USB_EPI_RXCSR_P_DATAERR);
        assert_eq!(EPI_RXCSR_P::ORUNERR.mask << EPI_RXCSR_P::ORUNERR.shift, BITM_USB_EPI_RXCSR_P_ORUNERR);
        assert_eq!(EPI_RXCSR_P::ORUNERR.shift as u32, BITP_USB_EPI_RXCSR_P_ORUNERR);
        assert_eq!(EPI_RXCSR_P::FIFOFULL.mask << EPI_RXCSR_P::FIFOFULL.shift, BITM_USB_EPI_RXCSR_P_FIFOFULL);
        assert_eq!(EPI_RXCSR_P::FIFOFULL.shift as u32, BITP_USB_EPI_RXCSR_P_FIFOFULL);
        assert_eq!(EPI_RXCSR_P::RXPKTRDY.mask << EPI_RXCSR_P::RXPKTRDY.shift, BITM_USB_EPI_RXCSR_P_RXPKTRDY);
        assert_eq!(EPI_RXCSR_P::RXPKTRDY.shift as u32, BITP_USB_EPI_RXCSR_P_RXPKTRDY);
        assert_eq!(EP0I_CNT::RXCNT.mask << EP0I_CNT::RXCNT.shift, BITM_USB_EP0I_CNT_RXCNT);
        assert_eq!(EP0I_CNT::RXCNT.shift as u32, BITP_USB_EP0I_CNT_RXCNT);
        assert_eq!(EPI_RXCNT::EPRXCNT.mask << EPI_RXCNT::EPRXCNT.shift, BITM_USB_EPI_RXCNT_EPRXCNT);
        assert_eq!(EPI_RXCNT::EPRXCNT.shift as u32, BITP_USB_EPI_RXCNT_EPRXCNT);
        assert_eq!(EP0I_CFGDATA::MPRX.mask << EP0I_CFGDATA::MPRX.shift, BITM_USB_EP0I_CFGDATA_MPRX);
        assert_eq!(EP0I_CFGDATA::MPRX.shift as u32, BITP_USB_EP0I_CFGDATA_MPRX);
        assert_eq!(EP0I_CFGDATA::MPTX.mask << EP0I_CFGDATA::MPTX.shift, BITM_USB_EP0I_CFGDATA_MPTX);
        assert_eq!(EP0I_CFGDATA::MPTX.shift as u32, BITP_USB_EP0I_CFGDATA_MPTX);
        assert_eq!(EP0I_CFGDATA::BIGEND.mask << EP0I_CFGDATA::BIGEND.shift, BITM_USB_EP0I_CFGDATA_BIGEND);
        assert_eq!(EP0I_CFGDATA::BIGEND.shift as u32, BITP_USB_EP0I_CFGDATA_BIGEND);
        assert_eq!(EP0I_CFGDATA::HBRX.mask << EP0I_CFGDATA::HBRX.shift, BITM_USB_EP0I_CFGDATA_HBRX);
        assert_eq!(EP0I_CFGDATA::HBRX.shift as u32, BITP_USB_EP0I_CFGDATA_HBRX);
        assert_eq!(EP0I_CFGDATA::HBTX.mask << EP0I_CFGDATA::HBTX.shift, BITM_USB_EP0I_CFGDATA_HBTX);
        assert_eq!(EP0I_CFGDATA::HBTX.shift as u32, BITP_USB_EP0I_CFGDATA_HBTX);
        assert_eq!(EP0I_CFGDATA::DYNFIFO.mask << EP0I_CFGDATA::DYNFIFO.shift, BITM_USB_EP0I_CFGDATA_DYNFIFO);
        assert_eq!(EP0I_CFGDATA::DYNFIFO.shift as u32, BITP_USB_EP0I_CFGDATA_DYNFIFO);
        assert_eq!(EP0I_CFGDATA::SOFTCON.mask << EP0I_CFGDATA::SOFTCON.shift, BITM_USB_EP0I_CFGDATA_SOFTCON);
        assert_eq!(EP0I_CFGDATA::SOFTCON.shift as u32, BITP_USB_EP0I_CFGDATA_SOFTCON);
        assert_eq!(EP0I_CFGDATA::UTMIWID.mask << EP0I_CFGDATA::UTMIWID.shift, BITM_USB_EP0I_CFGDATA_UTMIWID);
        assert_eq!(EP0I_CFGDATA::UTMIWID.shift as u32, BITP_USB_EP0I_CFGDATA_UTMIWID);
        assert_eq!(DEV_CTL::BDEVICE.mask << DEV_CTL::BDEVICE.shift, BITM_USB_DEV_CTL_BDEVICE);
        assert_eq!(DEV_CTL::BDEVICE.shift as u32, BITP_USB_DEV_CTL_BDEVICE);
        assert_eq!(DEV_CTL::FSDEV.mask << DEV_CTL::FSDEV.shift, BITM_USB_DEV_CTL_FSDEV);
        assert_eq!(DEV_CTL::FSDEV.shift as u32, BITP_USB_DEV_CTL_FSDEV);
        assert_eq!(DEV_CTL::LSDEV.mask << DEV_CTL::LSDEV.shift, BITM_USB_DEV_CTL_LSDEV);
        assert_eq!(DEV_CTL::LSDEV.shift as u32, BITP_USB_DEV_CTL_LSDEV);
        assert_eq!(DEV_CTL::VBUS.mask << DEV_CTL::VBUS.shift, BITM_USB_DEV_CTL_VBUS);
        assert_eq!(DEV_CTL::VBUS.shift as u32, BITP_USB_DEV_CTL_VBUS);
        assert_eq!(DEV_CTL::HOSTMODE.mask << DEV_CTL::HOSTMODE.shift, BITM_USB_DEV_CTL_HOSTMODE);
        assert_eq!(DEV_CTL::HOSTMODE.shift as u32, BITP_USB_DEV_CTL_HOSTMODE);
        assert_eq!(DEV_CTL::HOSTREQ.mask << DEV_CTL::HOSTREQ.shift, BITM_USB_DEV_CTL_HOSTREQ);
        assert_eq!(DEV_CTL::HOSTREQ.shift as u32, BITP_USB_DEV_CTL_HOSTREQ);
        assert_eq!(DEV_CTL::SESSION.mask << DEV_CTL::SESSION.shift, BITM_USB_DEV_CTL_SESSION);
        assert_eq!(DEV_CTL::SESSION.shift as u32, BITP_USB_DEV_CTL_SESSION);
        assert_eq!(EPINFO::RXEP.mask << EPINFO::RXEP.shift, BITM_USB_EPINFO_RXEP);
        assert_eq!(EPINFO::RXEP.shift as u32, BITP_USB_EPINFO_RXEP);
        assert_eq!(EPINFO::TXEP.mask << EPINFO::TXEP.shift, BITM_USB_EPINFO_TXEP);
        assert_eq!(EPINFO::TXEP.shift as u32, BITP_USB_EPINFO_TXEP);
        assert_eq!(RAMINFO::DMACHANS.mask << RAMINFO::DMACHANS.shift, BITM_USB_RAMINFO_DMACHANS);
        assert_eq!(RAMINFO::DMACHANS.shift as u32, BITP_USB_RAMINFO_DMACHANS);
        assert_eq!(RAMINFO::RAMBITS.mask << RAMINFO::RAMBITS.shift, BITM_USB_RAMINFO_RAMBITS);
        assert_eq!(RAMINFO::RAMBITS.shift as u32, BITP_USB_RAMINFO_RAMBITS);
        assert_eq!(LINKINFO::WTCON.mask << LINKINFO::WTCON.shift, BITM_USB_LINKINFO_WTCON);
        assert_eq!(LINKINFO::WTCON.shift as u32, BITP_USB_LINKINFO_WTCON);
        assert_eq!(LINKINFO::WTID.mask << LINKINFO::WTID.shift, BITM_USB_LINKINFO_WTID);
        assert_eq!(LINKINFO::WTID.shift as u32, BITP_USB_LINKINFO_WTID);
        assert_eq!(SOFT_RST::RSTX.mask << SOFT_RST::RSTX.shift, BITM_USB_SOFT_RST_RSTX);
        assert_eq!(SOFT_RST::RSTX.shift as u32, BITP_USB_SOFT_RST_RSTX);
        assert_eq!(SOFT_RST::RST.mask << SOFT_RST::RST.shift, BITM_USB_SOFT_RST_RST);
        assert_eq!(SOFT_RST::RST.shift as u32, BITP_USB_SOFT_RST_RST);
        assert_eq!(EP_TXMAXP::MULTM1.mask << EP_TXMAXP::MULTM1.shift, BITM_USB_EP_TXMAXP_MULTM1);
        assert_eq!(EP_TXMAXP::MULTM1.shift as u32, BITP_USB_EP_TXMAXP_MULTM1);
        assert_eq!(EP_TXMAXP::MAXPAY.mask << EP_TXMAXP::MAXPAY.shift, BITM_USB_EP_TXMAXP_MAXPAY);
        assert_eq!(EP_TXMAXP::MAXPAY.shift as u32, BITP_USB_EP_TXMAXP_MAXPAY);
        assert_eq!(EP_TXCSR_P::AUTOSET.mask << EP_TXCSR_P::AUTOSET.shift, BITM_USB_EP_TXCSR_P_AUTOSET);
        assert_eq!(EP_TXCSR_P::AUTOSET.shift as u32, BITP_USB_EP_TXCSR_P_AUTOSET);
        assert_eq!(EP_TXCSR_P::ISO.mask << EP_TXCSR_P::ISO.shift, BITM_USB_EP_TXCSR_P_ISO);
        assert_eq!(EP_TXCSR_P::ISO.shift as u32, BITP_USB_EP_TXCSR_P_ISO);
        assert_eq!(EP_TXCSR_P::DMAREQEN.mask << EP_TXCSR_P::DMAREQEN.shift, BITM_USB_EP_TXCSR_P_DMAREQEN);
        assert_eq!(EP_TXCSR_P::DMAREQEN.shift as u32, BITP_USB_EP_TXCSR_P_DMAREQEN);
        assert_eq!(EP_TXCSR_P::FRCDATATGL.mask << EP_TXCSR_P::FRCDATATGL.shift, BITM_USB_EP_TXCSR_P_FRCDATATGL);
        assert_eq!(EP_TXCSR_P::FRCDATATGL.shift as u32, BITP_USB_EP_TXCSR_P_FRCDATATGL);
        assert_eq!(EP_TXCSR_P::DMAREQMODE.mask << EP_TXCSR_P::DMAREQMODE.shift, BITM_USB_EP_TXCSR_P_DMAREQMODE);
        assert_eq!(EP_TXCSR_P::DMAREQMODE.shift as u32, BITP_USB_EP_TXCSR_P_DMAREQMODE);
        assert_eq!(EP_TXCSR_P::INCOMPTX.mask << EP_TXCSR_P::INCOMPTX.shift, BITM_USB_EP_TXCSR_P_INCOMPTX);
        assert_eq!(EP_TXCSR_P::INCOMPTX.shift as u32, BITP_USB_EP_TXCSR_P_INCOMPTX);
        assert_eq!(EP_TXCSR_P::CLRDATATGL.mask << EP_TXCSR_P::CLRDATATGL.shift, BITM_USB_EP_TXCSR_P_CLRDATATGL);
        assert_eq!(EP_TXCSR_P::CLRDATATGL.shift as u32, BITP_USB_EP_TXCSR_P_CLRDATATGL);
        assert_eq!(EP_TXCSR_P::SENTSTALL.mask << EP_TXCSR_P::SENTSTALL.shift, BITM_USB_EP_TXCSR_P_SENTSTALL);
        assert_eq!(EP_TXCSR_P::SENTSTALL.shift as u32, BITP_USB_EP_TXCSR_P_SENTSTALL);
        assert_eq!(EP_TXCSR_P::SENDSTALL.mask << EP_TXCSR_P::SENDSTALL.shift, BITM_USB_EP_TXCSR_P_SENDSTALL);
        assert_eq!(EP_TXCSR_P::SENDSTALL.shift as u32, BITP_USB_EP_TXCSR_P_SENDSTALL);
        assert_eq!(EP_TXCSR_P::FLUSHFIFO.mask << EP_TXCSR_P::FLUSHFIFO.shift, BITM_USB_EP_TXCSR_P_FLUSHFIFO);
        assert_eq!(EP_TXCSR_P::FLUSHFIFO.shift as u32, BITP_USB_EP_TXCSR_P_FLUSHFIFO);
        assert_eq!(EP_TXCSR_P::URUNERR.mask << EP_TXCSR_P::URUNERR.shift, BITM_USB_EP_TXCSR_P_URUNERR);
        assert_eq!(EP_TXCSR_P::URUNERR.shift as u32, BITP_USB_EP_TXCSR_P_URUNERR);
        assert_eq!(EP_TXCSR_P::NEFIFO.mask << EP_TXCSR_P::NEFIFO.shift, BITM_USB_EP_TXCSR_P_NEFIFO);
        assert_eq!(EP_TXCSR_P::NEFIFO.shift as u32, BITP_USB_EP_TXCSR_P_NEFIFO);
        assert_eq!(EP_TXCSR_P::TXPKTRDY.mask << EP_TXCSR_P::TXPKTRDY.shift, BITM_USB_EP_TXCSR_P_TXPKTRDY);
        assert_eq!(EP_TXCSR_P::TXPKTRDY.shift as u32, BITP_USB_EP_TXCSR_P_TXPKTRDY);
        assert_eq!(EP0_CSR_P::FLUSHFIFO.mask << EP0_CSR_P::FLUSHFIFO.shift, BITM_USB_EP0_CSR_P_FLUSHFIFO);
        assert_eq!(EP0_CSR_P::FLUSHFIFO.shift as u32, BITP_USB_EP0_CSR_P_FLUSHFIFO);
        assert_eq!(EP0_CSR_P::SSETUPEND.mask << EP0_CSR_P::SSETUPEND.shift, BITM_USB_EP0_CSR_P_SSETUPEND);
        assert_eq!(EP0_CSR_P::SSETUPEND.shift as u32, BITP_USB_EP0_CSR_P_SSETUPEND);
        assert_eq!(EP0_CSR_P::SPKTRDY.mask << EP0_CSR_P::SPKTRDY.shift, BITM_USB_EP0_CSR_P_SPKTRDY);
        assert_eq!(EP0_CSR_P::SPKTRDY.shift as u32, BITP_USB_EP0_CSR_P_SPKTRDY);
        assert_eq!(EP0_CSR_P::SENDSTALL.mask << EP0_CSR_P::SENDSTALL.shift, BITM_USB_EP0_CSR_P_SENDSTALL);
        assert_eq!(EP0_CSR_P::SENDSTALL.shift as u32, BITP_USB_EP0_CSR_P_SENDSTALL);
        assert_eq!(EP0_CSR_P::SETUPEND.mask << EP0_CSR_P::SETUPEND.shift, BITM_USB_EP0_CSR_P_SETUPEND);
        assert_eq!(EP0_CSR_P::SETUPEND.shift as u32, BITP_USB_EP0_CSR_P_SETUPEND);
        assert_eq!(EP0_CSR_P::DATAEND.mask << EP0_CSR_P::DATAEND.shift, BITM_USB_EP0_CSR_P_DATAEND);
        assert_eq!(EP0_CSR_P::DATAEND.shift as u32, BITP_USB_EP0_CSR_P_DATAEND);
        assert_eq!(EP0_CSR_P::SENTSTALL.mask << EP0_CSR_P::SENTSTALL.shift, BITM_USB_EP0_CSR_P_SENTSTALL);
        assert_eq!(EP0_CSR_P::SENTSTALL.shift as u32, BITP_USB_EP0_CSR_P_SENTSTALL);
        assert_eq!(EP0_CSR_P::TXPKTRDY.mask << EP0_CSR_P::TXPKTRDY.shift, BITM_USB_EP0_CSR_P_TXPKTRDY);
        assert_eq!(EP0_CSR_P::TXPKTRDY.shift as u32, BITP_USB_EP0_CSR_P_TXPKTRDY);
        assert_eq!(EP0_CSR_P::RXPKTRDY.mask << EP0_CSR_P::RXPKTRDY.shift, BITM_USB_EP0_CSR_P_RXPKTRDY);
        assert_eq!(EP0_CSR_P::RXPKTRDY.shift as u32, BITP_USB_EP0_CSR_P_RXPKTRDY);
        assert_eq!(EP0_CSR_H::DISPING.mask << EP0_CSR_H::DISPING.shift, BITM_USB_EP0_CSR_H_DISPING);
        assert_eq!(EP0_CSR_H::DISPING.shift as u32, BITP_USB_EP0_CSR_H_DISPING);
        assert_eq!(EP0_CSR_H::DATGLEN.mask << EP0_CSR_H::DATGLEN.shift, BITM_USB_EP0_CSR_H_DATGLEN);
        assert_eq!(EP0_CSR_H::DATGLEN.shift as u32, BITP_USB_EP0_CSR_H_DATGLEN);
        assert_eq!(EP0_CSR_H::DATGL.mask << EP0_CSR_H::DATGL.shift, BITM_USB_EP0_CSR_H_DATGL);
        assert_eq!(EP0_CSR_H::DATGL.shift as u32, BITP_USB_EP0_CSR_H_DATGL);
        assert_eq!(EP0_CSR_H::FLUSHFIFO.mask << EP0_CSR_H::FLUSHFIFO.shift, BITM_USB_EP0_CSR_H_FLUSHFIFO);
        assert_eq!(EP0_CSR_H::FLUSHFIFO.shift as u32, BITP_USB_EP0_CSR_H_FLUSHFIFO);
        assert_eq!(EP0_CSR_H::NAKTO.mask << EP0_CSR_H::NAKTO.shift, BITM_USB_EP0_CSR_H_NAKTO);
        assert_eq!(EP0_CSR_H::NAKTO.shift as u32, BITP_USB_EP0_CSR_H_NAKTO);
        assert_eq!(EP0_CSR_H::STATUSPKT.mask << EP0_CSR_H::STATUSPKT.shift, BITM_USB_EP0_CSR_H_STATUSPKT);
        assert_eq!(EP0_CSR_H::STATUSPKT.shift as u32, BITP_USB_EP0_CSR_H_STATUSPKT);
        assert_eq!(EP0_CSR_H::REQPKT.mask << EP0_CSR_H::REQPKT.shift, BITM_USB_EP0_CSR_H_REQPKT);
        assert_eq!(EP0_CSR_H::REQPKT.shift as u32, BITP_USB_EP0_CSR_H_REQPKT);
        assert_eq!(EP0_CSR_H::TOERR.mask << EP0_CSR_H::TOERR.shift, BITM_USB_EP0_CSR_H_TOERR);
        assert_eq!(EP0_CSR_H::TOERR.shift as u32, BITP_USB_EP0_CSR_H_TOERR);
        assert_eq!(EP0_CSR_H::SETUPPKT.mask << EP0_CSR_H::SETUPPKT.shift, BITM_USB_EP0_CSR_H_SETUPPKT);
        assert_eq!(EP0_CSR_H::SETUPPKT.shift as u32, BITP_USB_EP0_CSR_H_SETUPPKT);
        assert_eq!(EP0_CSR_H::RXSTALL.mask << EP0_CSR_H::RXSTALL.shift, BITM_USB_EP0_CSR_H_RXSTALL);
        assert_eq!(EP0_CSR_H::RXSTALL.shift as u32, BITP_USB_EP0_CSR_H_RXSTALL);
        assert_eq!(EP0_CSR_H::TXPKTRDY.mask << EP0_CSR_H::TXPKTRDY.shift, BITM_USB_EP0_CSR_H_TXPKTRDY);
        assert_eq!(EP0_CSR_H::TXPKTRDY.shift as u32, BITP_USB_EP0_CSR_H_TXPKTRDY);
        assert_eq!(EP0_CSR_H::RXPKTRDY.mask << EP0_CSR_H::RXPKTRDY.shift, BITM_USB_EP0_CSR_H_RXPKTRDY);
        assert_eq!(EP0_CSR_H::RXPKTRDY.shift as u32, BITP_USB_EP0_CSR_H_RXPKTRDY);
        assert_eq!(EP_TXCSR_H::AUTOSET.mask << EP_TXCSR_H::AUTOSET.shift, BITM_USB_EP_TXCSR_H_AUTOSET);
        assert_eq!(EP_TXCSR_H::AUTOSET.shift as u32, BITP_USB_EP_TXCSR_H_AUTOSET);
        assert_eq!(EP_TXCSR_H::DMAREQEN.mask << EP_TXCSR_H::DMAREQEN.shift, BITM_USB_EP_TXCSR_H_DMAREQEN);
        assert_eq!(EP_TXCSR_H::DMAREQEN.shift as u32, BITP_USB_EP_TXCSR_H_DMAREQEN);
        assert_eq!(EP_TXCSR_H::FRCDATATGL.mask << EP_TXCSR_H::FRCDATATGL.shift, BITM_USB_EP_TXCSR_H_FRCDATATGL);
        assert_eq!(EP_TXCSR_H::FRCDATATGL.shift as u32, BITP_USB_EP_TXCSR_H_FRCDATATGL);
        assert_eq!(EP_TXCSR_H::DMAREQMODE.mask << EP_TXCSR_H::DMAREQMODE.shift, BITM_USB_EP_TXCSR_H_DMAREQMODE);
        assert_eq!(EP_TXCSR_H::DMAREQMODE.shift as u32, BITP_USB_EP_TXCSR_H_DMAREQMODE);
        assert_eq!(EP_TXCSR_H::DATGLEN.mask << EP_TXCSR_H::DATGLEN.shift, BITM_USB_EP_TXCSR_H_DATGLEN);
        assert_eq!(EP_TXCSR_H::DATGLEN.shift as u32, BITP_USB_EP_TXCSR_H_DATGLEN);
        assert_eq!(EP_TXCSR_H::DATGL.mask << EP_TXCSR_H::DATGL.shift, BITM_USB_EP_TXCSR_H_DATGL);
        assert_eq!(EP_TXCSR_H::DATGL.shift as u32, BITP_USB_EP_TXCSR_H_DATGL);
        assert_eq!(EP_TXCSR_H::NAKTOINCMP.mask << EP_TXCSR_H::NAKTOINCMP.shift, BITM_USB_EP_TXCSR_H_NAKTOINCMP);
        assert_eq!(EP_TXCSR_H::NAKTOINCMP.shift as u32, BITP_USB_EP_TXCSR_H_NAKTOINCMP);
        assert_eq!(EP_TXCSR_H::CLRDATATGL.mask << EP_TXCSR_H::CLRDATATGL.shift, BITM_USB_EP_TXCSR_H_CLRDATATGL);
        assert_eq!(EP_TXCSR_H::CLRDATATGL.shift as u32, BITP_USB_EP_TXCSR_H_CLRDATATGL);
        assert_eq!(EP_TXCSR_H::RXSTALL.mask << EP_TXCSR_H::RXSTALL.shift, BITM_USB_EP_TXCSR_H_RXSTALL);
        assert_eq!(EP_TXCSR_H::RXSTALL.shift as u32, BITP_USB_EP_TXCSR_H_RXSTALL);
        assert_eq!(EP_TXCSR_H::SETUPPKT.mask << EP_TXCSR_H::SETUPPKT.shift, BITM_USB_EP_TXCSR_H_SETUPPKT);
        assert_eq!(EP_TXCSR_H::SETUPPKT.shift as u32, BITP_USB_EP_TXCSR_H_SETUPPKT);
        assert_eq!(EP_TXCSR_H::FLUSHFIFO.mask << EP_TXCSR_H::FLUSHFIFO.shift, BITM_USB_EP_TXCSR_H_FLUSHFIFO);
        assert_eq!(EP_TXCSR_H::FLUSHFIFO.shift as u32, BITP_USB_EP_TXCSR_H_FLUSHFIFO);
        assert_eq!(EP_TXCSR_H::TXTOERR.mask << EP_TXCSR_H::TXTOERR.shift, BITM_USB_EP_TXCSR_H_TXTOERR);
        assert_eq!(EP_TXCSR_H::TXTOERR.shift as u32, BITP_USB_EP_TXCSR_H_TXTOERR);
        assert_eq!(EP_TXCSR_H::NEFIFO.mask << EP_TXCSR_H::NEFIFO.shift, BITM_USB_EP_TXCSR_H_NEFIFO);
        assert_eq!(EP_TXCSR_H::NEFIFO.shift as u32, BITP_USB_EP_TXCSR_H_NEFIFO);
        assert_eq!(EP_TXCSR_H::TXPKTRDY.mask << EP_TXCSR_H::TXPKTRDY.shift, BITM_USB_EP_TXCSR_H_TXPKTRDY);
        assert_eq!(EP_TXCSR_H::TXPKTRDY.shift as u32, BITP_USB_EP_TXCSR_H_TXPKTRDY);
        assert_eq!(EP_RXMAXP::MULTM1.mask << EP_RXMAXP::MULTM1.shift, BITM_USB_EP_RXMAXP_MULTM1);
        assert_eq!(EP_RXMAXP::MULTM1.shift as u32, BITP_USB_EP_RXMAXP_MULTM1);
        assert_eq!(EP_RXMAXP::MAXPAY.mask << EP_RXMAXP::MAXPAY.shift, BITM_USB_EP_RXMAXP_MAXPAY);
        assert_eq!(EP_RXMAXP::MAXPAY.shift as u32, BITP_USB_EP_RXMAXP_MAXPAY);
        assert_eq!(EP_RXCSR_P::AUTOCLR.mask << EP_RXCSR_P::AUTOCLR.shift, BITM_USB_EP_RXCSR_P_AUTOCLR);
        assert_eq!(EP_RXCSR_P::AUTOCLR.shift as u32, BITP_USB_EP_RXCSR_P_AUTOCLR);
        assert_eq!(EP_RXCSR_P::ISO.mask << EP_RXCSR_P::ISO.shift, BITM_USB_EP_RXCSR_P_ISO);
        assert_eq!(EP_RXCSR_P::ISO.shift as u32, BITP_USB_EP_RXCSR_P_ISO);
        assert_eq!(EP_RXCSR_P::DMAREQEN.mask << EP_RXCSR_P::DMAREQEN.shift, BITM_USB_EP_RXCSR_P_DMAREQEN);
        assert_eq!(EP_RXCSR_P::DMAREQEN.shift as u32, BITP_USB_EP_RXCSR_P_DMAREQEN);
        assert_eq!(EP_RXCSR_P::DNYETPERR.mask << EP_RXCSR_P::DNYETPERR.shift, BITM_USB_EP_RXCSR_P_DNYETPERR);
        assert_eq!(EP_RXCSR_P::DNYETPERR.shift as u32, BITP_USB_EP_RXCSR_P_DNYETPERR);
        assert_eq!(EP_RXCSR_P::DMAREQMODE.mask << EP_RXCSR_P::DMAREQMODE.shift, BITM_USB_EP_RXCSR_P_DMAREQMODE);
        assert_eq!(EP_RXCSR_P::DMAREQMODE.shift as u32, BITP_USB_EP_RXCSR_P_DMAREQMODE);
        assert_eq!(EP_RXCSR_P::INCOMPRX.mask << EP_RXCSR_P::INCOMPRX.shift, BITM_USB_EP_RXCSR_P_INCOMPRX);
        assert_eq!(EP_RXCSR_P::INCOMPRX.shift as u32, BITP_USB_EP_RXCSR_P_INCOMPRX);
        assert_eq!(EP_RXCSR_P::CLRDATATGL.mask << EP_RXCSR_P::CLRDATATGL.shift, BITM_USB_EP_RXCSR_P_CLRDATATGL);
        assert_eq!(EP_RXCSR_P::CLRDATATGL.shift as u32, BITP_USB_EP_RXCSR_P_CLRDATATGL);
        assert_eq!(EP_RXCSR_P::SENTSTALL.mask << EP_RXCSR_P::SENTSTALL.shift, BITM_USB_EP_RXCSR_P_SENTSTALL);
        assert_eq!(EP_RXCSR_P::SENTSTALL.shift as u32, BITP_USB_EP_RXCSR_P_SENTSTALL);
        assert_eq!(EP_RXCSR_P::SENDSTALL.mask << EP_RXCSR_P::SENDSTALL.shift, BITM_USB_EP_RXCSR_P_SENDSTALL);
        assert_eq!(EP_RXCSR_P::SENDSTALL.shift as u32, BITP_USB_EP_RXCSR_P_SENDSTALL);
        assert_eq!(EP_RXCSR_P::FLUSHFIFO.mask << EP_RXCSR_P::FLUSHFIFO.shift, BITM_USB_EP_RXCSR_P_FLUSHFIFO);
        assert_eq!(EP_RXCSR_P::FLUSHFIFO.shift as u32, BITP_USB_EP_RXCSR_P_FLUSHFIFO);
        assert_eq!(EP_RXCSR_P::DATAERR.mask << EP_RXCSR_P::DATAERR.shift, BITM_USB_EP_RXCSR_P_DATAERR);
        assert_eq!(EP_RXCSR_P::DATAERR.shift as u32, BITP_USB_EP_RXCSR_P_DATAERR);
        assert_eq!(EP_RXCSR_P::ORUNERR.mask << EP_RXCSR_P::ORUNERR.shift, BITM_USB_EP_RXCSR_P_ORUNERR);
        assert_eq!(EP_RXCSR_P::ORUNERR.shift as u32, BITP_USB_EP_RXCSR_P_ORUNERR);
        assert_eq!(EP_RXCSR_P::FIFOFULL.mask << EP_RXCSR_P::FIFOFULL.shift, BITM_USB_EP_RXCSR_P_FIFOFULL);
        assert_eq!(EP_RXCSR_P::FIFOFULL.shift as u32, BITP_USB_EP_RXCSR_P_FIFOFULL);
        assert_eq!(EP_RXCSR_P::RXPKTRDY.mask << EP_RXCSR_P::RXPKTRDY.shift, BITM_USB_EP_RXCSR_P_RXPKTRDY);
        assert_eq!(EP_RXCSR_P::RXPKTRDY.shift as u32, BITP_USB_EP_RXCSR_P_RXPKTRDY);
        assert_eq!(EP_RXCSR_H::AUTOCLR.mask << EP_RXCSR_H::AUTOCLR.shift, BITM_USB_EP_RXCSR_H_AUTOCLR);
        assert_eq!(EP_RXCSR_H::AUTOCLR.shift as u32, BITP_USB_EP_RXCSR_H_AUTOCLR);
        assert_eq!(EP_RXCSR_H::AUTOREQ.mask << EP_RXCSR_H::AUTOREQ.shift, BITM_USB_EP_RXCSR_H_AUTOREQ);
        assert_eq!(EP_RXCSR_H::AUTOREQ.shift as u32, BITP_USB_EP_RXCSR_H_AUTOREQ);
        assert_eq!(EP_RXCSR_H::DMAREQEN.mask << EP_RXCSR_H::DMAREQEN.shift, BITM_USB_EP_RXCSR_H_DMAREQEN);
        assert_eq!(EP_RXCSR_H::DMAREQEN.shift as u32, BITP_USB_EP_RXCSR_H_DMAREQEN);
        assert_eq!(EP_RXCSR_H::PIDERR.mask << EP_RXCSR_H::PIDERR.shift, BITM_USB_EP_RXCSR_H_PIDERR);
        assert_eq!(EP_RXCSR_H::PIDERR.shift as u32, BITP_USB_EP_RXCSR_H_PIDERR);
        assert_eq!(EP_RXCSR_H::DMAREQMODE.mask << EP_RXCSR_H::DMAREQMODE.shift, BITM_USB_EP_RXCSR_H_DMAREQMODE);
        assert_eq!(EP_RXCSR_H::DMAREQMODE.shift as u32, BITP_USB_EP_RXCSR_H_DMAREQMODE);
        assert_eq!(EP_RXCSR_H::DATGLEN.mask << EP_RXCSR_H::DATGLEN.shift, BITM_USB_EP_RXCSR_H_DATGLEN);
        assert_eq!(EP_RXCSR_H::DATGLEN.shift as u32, BITP_USB_EP_RXCSR_H_DATGLEN);
        assert_eq!(EP_RXCSR_H::DATGL.mask << EP_RXCSR_H::DATGL.shift, BITM_USB_EP_RXCSR_H_DATGL);
        assert_eq!(EP_RXCSR_H::DATGL.shift as u32, BITP_USB_EP_RXCSR_H_DATGL);
        assert_eq!(EP_RXCSR_H::INCOMPRX.mask << EP_RXCSR_H::INCOMPRX.shift, BITM_USB_EP_RXCSR_H_INCOMPRX);
        assert_eq!(EP_RXCSR_H::INCOMPRX.shift as u32, BITP_USB_EP_RXCSR_H_INCOMPRX);
        assert_eq!(EP_RXCSR_H::CLRDATATGL.mask << EP_RXCSR_H::CLRDATATGL.shift, BITM_USB_EP_RXCSR_H_CLRDATATGL);
        assert_eq!(EP_RXCSR_H::CLRDATATGL.shift as u32, BITP_USB_EP_RXCSR_H_CLRDATATGL);
        assert_eq!(EP_RXCSR_H::RXSTALL.mask << EP_RXCSR_H::RXSTALL.shift, BITM_USB_EP_RXCSR_H_RXSTALL);
        assert_eq!(EP_RXCSR_H::RXSTALL.shift as u32, BITP_USB_EP_RXCSR_H_RXSTALL);
        assert_eq!(EP_RXCSR_H::REQPKT.mask << EP_RXCSR_H::REQPKT.shift, BITM_USB_EP_RXCSR_H_REQPKT);
        assert_eq!(EP_RXCSR_H::REQPKT.shift as u32, BITP_USB_EP_RXCSR_H_REQPKT);
        assert_eq!(EP_RXCSR_H::FLUSHFIFO.mask << EP_RXCSR_H::FLUSHFIFO.shift, BITM_USB_EP_RXCSR_H_FLUSHFIFO);
        assert_eq!(EP_RXCSR_H::FLUSHFIFO.shift as u32, BITP_USB_EP_RXCSR_H_FLUSHFIFO);
        assert_eq!(EP_RXCSR_H::NAKTODERR.mask << EP_RXCSR_H::NAKTODERR.shift, BITM_USB_EP_RXCSR_H_NAKTODERR);
        assert_eq!(EP_RXCSR_H::NAKTODERR.shift as u32, BITP_USB_EP_RXCSR_H_NAKTODERR);
        assert_eq!(EP_RXCSR_H::RXTOERR.mask << EP_RXCSR_H::RXTOERR.shift, BITM_USB_EP_RXCSR_H_RXTOERR);
        assert_eq!(EP_RXCSR_H::RXTOERR.shift as u32, BITP_USB_EP_RXCSR_H_RXTOERR);
        assert_eq!(EP_RXCSR_H::FIFOFULL.mask << EP_RXCSR_H::FIFOFULL.shift, BITM_USB_EP_RXCSR_H_FIFOFULL);
        assert_eq!(EP_RXCSR_H::FIFOFULL.shift as u32, BITP_USB_EP_RXCSR_H_FIFOFULL);
        assert_eq!(EP_RXCSR_H::RXPKTRDY.mask << EP_RXCSR_H::RXPKTRDY.shift, BITM_USB_EP_RXCSR_H_RXPKTRDY);
        assert_eq!(EP_RXCSR_H::RXPKTRDY.shift as u32, BITP_USB_EP_RXCSR_H_RXPKTRDY);
        assert_eq!(EP0_CNT::RXCNT.mask << EP0_CNT::RXCNT.shift, BITM_USB_EP0_CNT_RXCNT);
        assert_eq!(EP0_CNT::RXCNT.shift as u32, BITP_USB_EP0_CNT_RXCNT);
        assert_eq!(EP_RXCNT::EPRXCNT.mask << EP_RXCNT::EPRXCNT.shift, BITM_USB_EP_RXCNT_EPRXCNT);
        assert_eq!(EP_RXCNT::EPRXCNT.shift as u32, BITP_USB_EP_RXCNT_EPRXCNT);
        assert_eq!(EP0_CFGDATA::MPRX.mask << EP0_CFGDATA::MPRX.shift, BITM_USB_EP0_CFGDATA_MPRX);
        assert_eq!(EP0_CFGDATA::MPRX.shift as u32, BITP_USB_EP0_CFGDATA_MPRX);
        assert_eq!(EP0_CFGDATA::MPTX.mask << EP0_CFGDATA::MPTX.shift, BITM_USB_EP0_CFGDATA_MPTX);
        assert_eq!(EP0_CFGDATA::MPTX.shift as u32, BITP_USB_EP0_CFGDATA_MPTX);
        assert_eq!(EP0_CFGDATA::BIGEND.mask << EP0_CFGDATA::BIGEND.shift, BITM_USB_EP0_CFGDATA_BIGEND);
        assert_eq!(EP0_CFGDATA::BIGEND.shift as u32, BITP_USB_EP0_CFGDATA_BIGEND);
        assert_eq!(EP0_CFGDATA::HBRX.mask << EP0_CFGDATA::HBRX.shift, BITM_USB_EP0_CFGDATA_HBRX);
        assert_eq!(EP0_CFGDATA::HBRX.shift as u32, BITP_USB_EP0_CFGDATA_HBRX);
        assert_eq!(EP0_CFGDATA::HBTX.mask << EP0_CFGDATA::HBTX.shift, BITM_USB_EP0_CFGDATA_HBTX);
        assert_eq!(EP0_CFGDATA::HBTX.shift as u32, BITP_USB_EP0_CFGDATA_HBTX);
        assert_eq!(EP0_CFGDATA::DYNFIFO.mask << EP0_CFGDATA::DYNFIFO.shift, BITM_USB_EP0_CFGDATA_DYNFIFO);
        assert_eq!(EP0_CFGDATA::DYNFIFO.shift as u32, BITP_USB_EP0_CFGDATA_DYNFIFO);
        assert_eq!(EP0_CFGDATA::SOFTCON.mask << EP0_CFGDATA::SOFTCON.shift, BITM_USB_EP0_CFGDATA_SOFTCON);
        assert_eq!(EP0_CFGDATA::SOFTCON.shift as u32, BITP_USB_EP0_CFGDATA_SOFTCON);
        assert_eq!(EP0_CFGDATA::UTMIWID.mask << EP0_CFGDATA::UTMIWID.shift, BITM_USB_EP0_CFGDATA_UTMIWID);
        assert_eq!(EP0_CFGDATA::UTMIWID.shift as u32, BITP_USB_EP0_CFGDATA_UTMIWID);
        assert_eq!(DMA_IRQ::D7.mask << DMA_IRQ::D7.shift, BITM_USB_DMA_IRQ_D7);
        assert_eq!(DMA_IRQ::D7.shift as u32, BITP_USB_DMA_IRQ_D7);
        assert_eq!(DMA_IRQ::D6.mask << DMA_IRQ::D6.shift, BITM_USB_DMA_IRQ_D6);
        assert_eq!(DMA_IRQ::D6.shift as u32, BITP_USB_DMA_IRQ_D6);
        assert_eq!(DMA_IRQ::D5.mask << DMA_IRQ::D5.shift, BITM_USB_DMA_IRQ_D5);
        assert_eq!(DMA_IRQ::D5.shift as u32, BITP_USB_DMA_IRQ_D5);
        assert_eq!(DMA_IRQ::D4.mask << DMA_IRQ::D4.shift, BITM_USB_DMA_IRQ_D4);
        assert_eq!(DMA_IRQ::D4.shift as u32, BITP_USB_DMA_IRQ_D4);
        assert_eq!(DMA_IRQ::D3.mask << DMA_IRQ::D3.shift, BITM_USB_DMA_IRQ_D3);
        assert_eq!(DMA_IRQ::D3.shift as u32, BITP_USB_DMA_IRQ_D3);
        assert_eq!(DMA_IRQ::D2.mask << DMA_IRQ::D2.shift, BITM_USB_DMA_IRQ_D2);
        assert_eq!(DMA_IRQ::D2.shift as u32, BITP_USB_DMA_IRQ_D2);
        assert_eq!(DMA_IRQ::D1.mask << DMA_IRQ::D1.shift, BITM_USB_DMA_IRQ_D1);
        assert_eq!(DMA_IRQ::D1.shift as u32, BITP_USB_DMA_IRQ_D1);
        assert_eq!(DMA_IRQ::D0.mask << DMA_IRQ::D0.shift, BITM_USB_DMA_IRQ_D0);
        assert_eq!(DMA_IRQ::D0.shift as u32, BITP_USB_DMA_IRQ_D0);
        assert_eq!(DMA_CTL::BRSTM.mask << DMA_CTL::BRSTM.shift, BITM_USB_DMA_CTL_BRSTM);
        assert_eq!(DMA_CTL::BRSTM.shift as u32, BITP_USB_DMA_CTL_BRSTM);
        assert_eq!(DMA_CTL::ERR.mask << DMA_CTL::ERR.shift, BITM_USB_DMA_CTL_ERR);
        assert_eq!(DMA_CTL::ERR.shift as u32, BITP_USB_DMA_CTL_ERR);
        assert_eq!(DMA_CTL::EP.mask << DMA_CTL::EP.shift, BITM_USB_DMA_CTL_EP);
        assert_eq!(DMA_CTL::EP.shift as u32, BITP_USB_DMA_CTL_EP);
        assert_eq!(DMA_CTL::IE.mask << DMA_CTL::IE.shift, BITM_USB_DMA_CTL_IE);
        assert_eq!(DMA_CTL::IE.shift as u32, BITP_USB_DMA_CTL_IE);
        assert_eq!(DMA_CTL::MODE.mask << DMA_CTL::MODE.shift, BITM_USB_DMA_CTL_MODE);
        assert_eq!(DMA_CTL::MODE.shift as u32, BITP_USB_DMA_CTL_MODE);
        assert_eq!(DMA_CTL::DIR.mask << DMA_CTL::DIR.shift, BITM_USB_DMA_CTL_DIR);
        assert_eq!(DMA_CTL::DIR.shift as u32, BITP_USB_DMA_CTL_DIR);
        assert_eq!(DMA_CTL::EN.mask << DMA_CTL::EN.shift, BITM_USB_DMA_CTL_EN);
        assert_eq!(DMA_CTL::EN.shift as u32, BITP_USB_DMA_CTL_EN);
        assert_eq!(CT_UCH::VALUE.mask << CT_UCH::VALUE.shift, BITM_USB_CT_UCH_VALUE);
        assert_eq!(CT_UCH::VALUE.shift as u32, BITP_USB_CT_UCH_VALUE);
        assert_eq!(LPM_ATTR::EP.mask << LPM_ATTR::EP.shift, BITM_USB_LPM_ATTR_EP);
        assert_eq!(LPM_ATTR::EP.shift as u32, BITP_USB_LPM_ATTR_EP);
        assert_eq!(LPM_ATTR::RMTWAK.mask << LPM_ATTR::RMTWAK.shift, BITM_USB_LPM_ATTR_RMTWAK);
        assert_eq!(LPM_ATTR::RMTWAK.shift as u32, BITP_USB_LPM_ATTR_RMTWAK);
        assert_eq!(LPM_ATTR::HIRD.mask << LPM_ATTR::HIRD.shift, BITM_USB_LPM_ATTR_HIRD);
        assert_eq!(LPM_ATTR::HIRD.shift as u32, BITP_USB_LPM_ATTR_HIRD);
        assert_eq!(LPM_ATTR::LINKSTATE.mask << LPM_ATTR::LINKSTATE.shift, BITM_USB_LPM_ATTR_LINKSTATE);
        assert_eq!(LPM_ATTR::LINKSTATE.shift as u32, BITP_USB_LPM_ATTR_LINKSTATE);
        assert_eq!(LPM_CTL::NAK.mask << LPM_CTL::NAK.shift, BITM_USB_LPM_CTL_NAK);
        assert_eq!(LPM_CTL::NAK.shift as u32, BITP_USB_LPM_CTL_NAK);
        assert_eq!(LPM_CTL::EN.mask << LPM_CTL::EN.shift, BITM_USB_LPM_CTL_EN);
        assert_eq!(LPM_CTL::EN.shift as u32, BITP_USB_LPM_CTL_EN);
        assert_eq!(LPM_CTL::RESUME.mask << LPM_CTL::RESUME.shift, BITM_USB_LPM_CTL_RESUME);
        assert_eq!(LPM_CTL::RESUME.shift as u32, BITP_USB_LPM_CTL_RESUME);
        assert_eq!(LPM_CTL::TX.mask << LPM_CTL::TX.shift, BITM_USB_LPM_CTL_TX);
        assert_eq!(LPM_CTL::TX.shift as u32, BITP_USB_LPM_CTL_TX);
        assert_eq!(LPM_IEN::LPMERR.mask << LPM_IEN::LPMERR.shift, BITM_USB_LPM_IEN_LPMERR);
        assert_eq!(LPM_IEN::LPMERR.shift as u32, BITP_USB_LPM_IEN_LPMERR);
        assert_eq!(LPM_IEN::LPMRES.mask << LPM_IEN::LPMRES.shift, BITM_USB_LPM_IEN_LPMRES);
        assert_eq!(LPM_IEN::LPMRES.shift as u32, BITP_USB_LPM_IEN_LPMRES);
        assert_eq!(LPM_IEN::LPMNC.mask << LPM_IEN::LPMNC.shift, BITM_USB_LPM_IEN_LPMNC);
        assert_eq!(LPM_IEN::LPMNC.shift as u32, BITP_USB_LPM_IEN_LPMNC);
        assert_eq!(LPM_IEN::LPMACK.mask << LPM_IEN::LPMACK.shift, BITM_USB_LPM_IEN_LPMACK);
        assert_eq!(LPM_IEN::LPMACK.shift as u32, BITP_USB_LPM_IEN_LPMACK);
        assert_eq!(LPM_IEN::LPMNY.mask << LPM_IEN::LPMNY.shift, BITM_USB_LPM_IEN_LPMNY);
        assert_eq!(LPM_IEN::LPMNY.shift as u32, BITP_USB_LPM_IEN_LPMNY);
        assert_eq!(LPM_IEN::LPMST.mask << LPM_IEN::LPMST.shift, BITM_USB_LPM_IEN_LPMST);
        assert_eq!(LPM_IEN::LPMST.shift as u32, BITP_USB_LPM_IEN_LPMST);
        assert_eq!(LPM_IRQ::LPMERR.mask << LPM_IRQ::LPMERR.shift, BITM_USB_LPM_IRQ_LPMERR);
        assert_eq!(LPM_IRQ::LPMERR.shift as u32, BITP_USB_LPM_IRQ_LPMERR);
        assert_eq!(LPM_IRQ::LPMRES.mask << LPM_IRQ::LPMRES.shift, BITM_USB_LPM_IRQ_LPMRES);
        assert_eq!(LPM_IRQ::LPMRES.shift as u32, BITP_USB_LPM_IRQ_LPMRES);
        assert_eq!(LPM_IRQ::LPMNC.mask << LPM_IRQ::LPMNC.shift, BITM_USB_LPM_IRQ_LPMNC);
        assert_eq!(LPM_IRQ::LPMNC.shift as u32, BITP_USB_LPM_IRQ_LPMNC);
        assert_eq!(LPM_IRQ::LPMACK.mask << LPM_IRQ::LPMACK.shift, BITM_USB_LPM_IRQ_LPMACK);
        assert_eq!(LPM_IRQ::LPMACK.shift as u32, BITP_USB_LPM_IRQ_LPMACK);
        assert_eq!(LPM_IRQ::LPMNY.mask << LPM_IRQ::LPMNY.shift, BITM_USB_LPM_IRQ_LPMNY);
        assert_eq!(LPM_IRQ::LPMNY.shift as u32, BITP_USB_LPM_IRQ_LPMNY);
        assert_eq!(LPM_IRQ::LPMST.mask << LPM_IRQ::LPMST.shift, BITM_USB_LPM_IRQ_LPMST);
        assert_eq!(LPM_IRQ::LPMST.shift as u32, BITP_USB_LPM_IRQ_LPMST);
        assert_eq!(PHY_CTL::EN.mask << PHY_CTL::EN.shift, BITM_USB_PHY_CTL_EN);
        assert_eq!(PHY_CTL::EN.shift as u32, BITP_USB_PHY_CTL_EN);
        assert_eq!(PHY_CTL::RESTORE.mask << PHY_CTL::RESTORE.shift, BITM_USB_PHY_CTL_RESTORE);
        assert_eq!(PHY_CTL::RESTORE.shift as u32, BITP_USB_PHY_CTL_RESTORE);
        assert_eq!(PHY_CTL::HIBER.mask << PHY_CTL::HIBER.shift, BITM_USB_PHY_CTL_HIBER);
        assert_eq!(PHY_CTL::HIBER.shift as u32, BITP_USB_PHY_CTL_HIBER);
    }

    #[test]
    fn registers_match_addresses() {
        let usb0 = USB0_BASE.address();
        assert_eq!(REG_USB0_FADDR as usize, usb0 + offset_of!(UsbRegisters, faddr));
        assert_eq!(REG_USB0_POWER as usize, usb0 + offset_of!(UsbRegisters, power));
        assert_eq!(REG_USB0_INTRTX as usize, usb0 + offset_of!(UsbRegisters, intrtx));
        assert_eq!(REG_USB0_INTRRX as usize, usb0 + offset_of!(UsbRegisters, intrrx));
        assert_eq!(REG_USB0_INTRTXE as usize, usb0 + offset_of!(UsbRegisters, intrtxe));
        assert_eq!(REG_USB0_INTRRXE as usize, usb0 + offset_of!(UsbRegisters, intrrxe));
        assert_eq!(REG_USB0_IRQ as usize, usb0 + offset_of!(UsbRegisters, irq));
        assert_eq!(REG_USB0_IEN as usize, usb0 + offset_of!(UsbRegisters, ien));
        assert_eq!(REG_USB0_FRAME as usize, usb0 + offset_of!(UsbRegisters, frame));
        assert_eq!(REG_USB0_INDEX as usize, usb0 + offset_of!(UsbRegisters, index));
        assert_eq!(REG_USB0_TESTMODE as usize, usb0 + offset_of!(UsbRegisters, testmode));
        assert_eq!(
            REG_USB0_EPI_TXMAXP0 as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, txmaxp)
        );
        assert_eq!(
            REG_USB0_EPI_TXCSR_H0 as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP0I_CSR0_P as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP0I_CSR0_H as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EPI_TXCSR_P0 as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EPI_RXMAXP0 as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, rxmaxp)
        );
        assert_eq!(
            REG_USB0_EPI_RXCSR_H0 as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, rxcsr)
        );
        assert_eq!(
            REG_USB0_EPI_RXCSR_P0 as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, rxcsr)
        );
        assert_eq!(
            REG_USB0_EP0I_CNT0 as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, rxcnt)
        );
        assert_eq!(
            REG_USB0_EPI_RXCNT0 as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, rxcnt)
        );
        assert_eq!(
            REG_USB0_EP0I_CFGDATA0 as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, fifosize)
        );
        assert_eq!(
            REG_USB0_EPI_FIFOSIZE0 as usize,
            usb0 + offset_of!(UsbRegisters, epi) + offset_of!(UsbEpRegisters, fifosize)
        );
        assert_eq!(
            REG_USB0_FIFO0 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 0 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(
            REG_USB0_FIFO1 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 1 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(
            REG_USB0_FIFO2 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 2 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(
            REG_USB0_FIFO3 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 3 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(
            REG_USB0_FIFOH0 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 0 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(
            REG_USB0_FIFOH1 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 1 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(
            REG_USB0_FIFOH2 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 2 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(
            REG_USB0_FIFOH3 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 3 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(
            REG_USB0_FIFOB0 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 0 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(
            REG_USB0_FIFOB1 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 1 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(
            REG_USB0_FIFOB2 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 2 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(
            REG_USB0_FIFOB3 as usize,
            usb0 + offset_of!(UsbRegisters, fifo) + 3 * size_of::<ReadWrite<u32>>()
        );
        assert_eq!(REG_USB0_DEV_CTL as usize, usb0 + offset_of!(UsbRegisters, dev_ctl));
        assert_eq!(REG_USB0_MISC as usize, usb0 + offset_of!(UsbRegisters, misc));
        assert_eq!(REG_USB0_EPINFO as usize, usb0 + offset_of!(UsbRegisters, epinfo));
        assert_eq!(REG_USB0_RAMINFO as usize, usb0 + offset_of!(UsbRegisters, raminfo));
        assert_eq!(REG_USB0_LINKINFO as usize, usb0 + offset_of!(UsbRegisters, linkinfo));
        assert_eq!(REG_USB0_FS_EOF1 as usize, usb0 + offset_of!(UsbRegisters, fs_eof1));
        assert_eq!(REG_USB0_SOFT_RST as usize, usb0 + offset_of!(UsbRegisters, soft_rst));
        assert_eq!(
            REG_USB0_EP0_TXMAXP as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, txmaxp)
        );
        assert_eq!(
            REG_USB0_EP1_TXMAXP as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 1 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, txmaxp)
        );
        assert_eq!(
            REG_USB0_EP2_TXMAXP as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 2 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, txmaxp)
        );
        assert_eq!(
            REG_USB0_EP3_TXMAXP as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 3 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, txmaxp)
        );
        assert_eq!(
            REG_USB0_EP0_TXCSR_P as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP1_TXCSR_P as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 1 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP2_TXCSR_P as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 2 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP3_TXCSR_P as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 3 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP0_CSR0_P as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP0_CSR0_H as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP0_TXCSR_H as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP1_TXCSR_H as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 1 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP2_TXCSR_H as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 2 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP3_TXCSR_H as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 3 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, txcsr)
        );
        assert_eq!(
            REG_USB0_EP0_RXMAXP as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, rxmaxp)
        );
        assert_eq!(
            REG_USB0_EP1_RXMAXP as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 1 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxmaxp)
        );
        assert_eq!(
            REG_USB0_EP2_RXMAXP as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 2 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxmaxp)
        );
        assert_eq!(
            REG_USB0_EP3_RXMAXP as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 3 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxmaxp)
        );
        assert_eq!(
            REG_USB0_EP0_RXCSR_P as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, rxcsr)
        );
        assert_eq!(
            REG_USB0_EP1_RXCSR_P as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 1 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxcsr)
        );
        assert_eq!(
            REG_USB0_EP2_RXCSR_P as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 2 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxcsr)
        );
        assert_eq!(
            REG_USB0_EP3_RXCSR_P as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 3 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxcsr)
        );
        assert_eq!(
            REG_USB0_EP0_RXCSR_H as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, rxcsr)
        );
        assert_eq!(
            REG_USB0_EP1_RXCSR_H as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 1 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxcsr)
        );
        assert_eq!(
            REG_USB0_EP2_RXCSR_H as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 2 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxcsr)
        );
        assert_eq!(
            REG_USB0_EP3_RXCSR_H as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 3 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxcsr)
        );
        assert_eq!(
            REG_USB0_EP0_CNT0 as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, rxcnt)
        );
        assert_eq!(
            REG_USB0_EP0_RXCNT as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, rxcnt)
        );
        assert_eq!(
            REG_USB0_EP1_RXCNT as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 1 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxcnt)
        );
        assert_eq!(
            REG_USB0_EP2_RXCNT as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 2 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxcnt)
        );
        assert_eq!(
            REG_USB0_EP3_RXCNT as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 3 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, rxcnt)
        );
        assert_eq!(
            REG_USB0_EP0_FIFOSIZE as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, fifosize)
        );
        assert_eq!(
            REG_USB0_EP1_FIFOSIZE as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 1 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, fifosize)
        );
        assert_eq!(
            REG_USB0_EP2_FIFOSIZE as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 2 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, fifosize)
        );
        assert_eq!(
            REG_USB0_EP3_FIFOSIZE as usize,
            usb0 + offset_of!(UsbRegisters, ep) + 3 * size_of::<UsbEpRegisters>() + offset_of!(UsbEpRegisters, fifosize)
        );
        assert_eq!(
            REG_USB0_EP0_CFGDATA0 as usize,
            usb0 + offset_of!(UsbRegisters, ep) + offset_of!(UsbEpRegisters, fifosize)
        );
        assert_eq!(REG_USB0_DMA_IRQ as usize, usb0 + offset_of!(UsbRegisters, dma_irq));
        assert_eq!(
            REG_USB0_DMA0_CTL as usize,
            usb0 + offset_of!(UsbRegisters, dma) + 0 * size_of::<UsbDmaRegisters>() + offset_of!(UsbDmaRegisters, ctl)
        );
        assert_eq!(
            REG_USB0_DMA1_CTL as usize,
            usb0 + offset_of!(UsbRegisters, dma) + 1 * size_of::<UsbDmaRegisters>() + offset_of!(UsbDmaRegisters, ctl)
        );
        assert_eq!(
            REG_USB0_DMA0_ADDR as usize,
            usb0 + offset_of!(UsbRegisters, dma) + 0 * size_of::<UsbDmaRegisters>() + offset_of!(UsbDmaRegisters, addr)
        );
        assert_eq!(
            REG_USB0_DMA1_ADDR as usize,
            usb0 + offset_of!(UsbRegisters, dma) + 1 * size_of::<UsbDmaRegisters>() + offset_of!(UsbDmaRegisters, addr)
        );
        assert_eq!(
            REG_USB0_DMA0_CNT as usize,
            usb0 + offset_of!(UsbRegisters, dma) + 0 * size_of::<UsbDmaRegisters>() + offset_of!(UsbDmaRegisters, cnt)
        );
        assert_eq!(
            REG_USB0_DMA1_CNT as usize,
            usb0 + offset_of!(UsbRegisters, dma) + 1 * size_of::<UsbDmaRegisters>() + offset_of!(UsbDmaRegisters, cnt)
        );
        assert_eq!(REG_USB0_RXDPKTBUFDIS as usize, usb0 + offset_of!(UsbRegisters, rxdpktbufdis));
        assert_eq!(REG_USB0_TXDPKTBUFDIS as usize, usb0 + offset_of!(UsbRegisters, txdpktbufdis));
        assert_eq!(REG_USB0_CT_UCH as usize, usb0 + offset_of!(UsbRegisters, ct_uch));
        assert_eq!(REG_USB0_LPM_ATTR as usize, usb0 + offset_of!(UsbRegisters, lpm_attr));
        assert_eq!(REG_USB0_LPM_CTL as usize, usb0 + offset_of!(UsbRegisters, lpm_ctl));
        assert_eq!(REG_USB0_LPM_IEN as usize, usb0 + offset_of!(UsbRegisters, lpm_ien));
        assert_eq!(REG_USB0_LPM_IRQ as usize, usb0 + offset_of!(UsbRegisters, lpm_irq));
        assert_eq!(REG_USB0_PHY_CTL as usize, usb0 + offset_of!(UsbRegisters, phy_ctl));
        assert_eq!(REG_USB0_PHY_STAT as usize, usb0 + offset_of!(UsbRegisters, phy_stat));
        assert_eq!(REG_USB0_RAM_ADDR as usize, usb0 + offset_of!(UsbRegisters, ram_addr));
        assert_eq!(REG_USB0_RAM_DATA as usize, usb0 + offset_of!(UsbRegisters, ram_data));
    }
}
