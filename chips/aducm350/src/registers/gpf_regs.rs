// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for gpf.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub GpfRegisters {
        /// Status
        (0x0000 => pub feesta: ReadOnly<u16, GPFEESTA::Register>),
        (0x0002 => _reserved0),
        /// Command Control
        (0x0004 => pub feecon0: ReadWrite<u16, GPFEECON0::Register>),
        (0x0006 => _reserved1),
        /// Command
        (0x0008 => pub feecmd: ReadWrite<u16, GPFEECMD::Register>),
        (0x000a => _reserved2),
        /// Lower page address
        (0x0010 => pub feeadr0l: ReadWrite<u16>),
        (0x0012 => _reserved3),
        /// Lower page address
        (0x0018 => pub feeadr1l: ReadWrite<u16>),
        (0x001a => _reserved4),
        /// Key
        (0x0020 => pub feekey: WriteOnly<u16>),
        (0x0022 => _reserved5),
        /// Lower halfword of signature
        (0x0030 => pub feesigl: ReadOnly<u16>),
        (0x0032 => _reserved6),
        /// Upper halfword of signature
        (0x0034 => pub feesigh: ReadOnly<u16, GPFEESIGH::Register>),
        (0x0036 => _reserved7),
        /// Lower halfword of write abort address
        (0x0048 => pub feeadral: ReadOnly<u16>),
        (0x004a => _reserved8),
        /// Upper halfword of write abort address
        (0x004c => pub feeadrah: ReadOnly<u16, GPFEEADRAH::Register>),
        (0x004e => _reserved9),
        /// System IRQ abort enable for interrupts 15 to 0
        (0x0078 => pub feeaen0: ReadWrite<u16>),
        (0x007a => _reserved10),
        /// System IRQ abort enable for interrupts 31 to 16
        (0x007c => pub feeaen1: ReadWrite<u16>),
        (0x007e => _reserved11),
        /// System IRQ abort enable for interrupts 47 to 32
        (0x0080 => pub feeaen2: ReadWrite<u16>),
        (0x0082 => _reserved12),
        /// System IRQ abort enable for interrupts 60 to 48
        (0x0084 => pub feeaen3: ReadWrite<u16>),
        (0x0086 => _reserved13),
        (0x0088 => @END),
    }
}

register_bitfields![u16,
    pub GPFEESTA [
        CMDBUSY OFFSET(0) NUMBITS(1) [],
        WRBUSY OFFSET(1) NUMBITS(1) [],
        CMDDONE OFFSET(2) NUMBITS(1) [],
        WRDONE OFFSET(3) NUMBITS(1) [],
        CMDRES OFFSET(4) NUMBITS(2) [
            SUCCESS = 0,
            PROTECTED = 1,
            VERIFYERR = 2,
            ABORT = 3,
        ],
    ],
    pub GPFEECON0 [
        IENCMD OFFSET(0) NUMBITS(1) [],
        IENERR OFFSET(1) NUMBITS(1) [],
        WREN OFFSET(2) NUMBITS(1) [],
        DMA_EN OFFSET(3) NUMBITS(1) [],
    ],
    pub GPFEECMD [
        CMD OFFSET(0) NUMBITS(4) [
            IDLE = 0,
            ERASEPAGE = 1,
            SIGN = 2,
            MASSERASE = 3,
            ABORT = 4,
        ],
    ],
    pub GPFEESIGH [
        VALUE OFFSET(0) NUMBITS(8) [],
    ],
    pub GPFEEADRAH [
        VALUE OFFSET(0) NUMBITS(3) [],
    ],
];

pub const GPF_BASE: StaticRef<GpfRegisters> =
    unsafe { StaticRef::new(0x4001_C000 as *const GpfRegisters) };
