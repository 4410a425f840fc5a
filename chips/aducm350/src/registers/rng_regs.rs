// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for rng.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub RngRegisters {
        /// RNG Control Register
        (0x0000 => pub rngctl: ReadWrite<u16, RNGCTL::Register>),
        (0x0002 => _reserved0),
        /// RNG Sample Length Register
        (0x0004 => pub rnglen: ReadWrite<u16, RNGLEN::Register>),
        (0x0006 => _reserved1),
        /// RNG Status Register
        (0x0008 => pub rngstat: ReadWrite<u16, RNGSTAT::Register>),
        (0x000a => _reserved2),
        /// RNG Data Register
        (0x000c => pub rngdata: ReadOnly<u16, RNGDATA::Register>),
        (0x000e => _reserved3),
        /// Oscillator Count Low
        (0x0010 => pub rngcntl: ReadOnly<u16>),
        (0x0012 => _reserved4),
        /// Oscillator Count High
        (0x0014 => pub rngcnth: ReadOnly<u16>),
        (0x0016 => _reserved5),
        (0x0018 => @END),
    }
}

register_bitfields![u16,
    pub RNGCTL [
        RNGEN OFFSET(0) NUMBITS(1) [],
        CNTEN OFFSET(1) NUMBITS(1) [],
        TMRMODE OFFSET(2) NUMBITS(1) [],
    ],
    pub RNGLEN [
        LENRLD OFFSET(0) NUMBITS(12) [],
        LENPRE OFFSET(12) NUMBITS(4) [],
    ],
    pub RNGSTAT [
        RNGRDY OFFSET(0) NUMBITS(1) [],
    ],
    pub RNGDATA [
        VALUE OFFSET(0) NUMBITS(8) [],
        BUFF OFFSET(8) NUMBITS(8) [],
    ],
];

pub const RNG_BASE: StaticRef<RngRegisters> =
    unsafe { StaticRef::new(0x4000_6000 as *const RngRegisters) };
