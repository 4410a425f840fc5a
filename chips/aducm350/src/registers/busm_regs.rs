// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for busm.

use crate::static_ref::StaticRef;
use tock_registers::registers::ReadWrite;
use tock_registers::register_structs;

register_structs! {
    pub BusMRegisters {
        /// Arbitration Priority Configuration for Slave 0 (Flash)
        (0x0000 => pub bmarbit0: ReadWrite<u16>),
        (0x0002 => _reserved0),
        /// Arbitration Priority Configuration for Slave 1 (SRAM0)
        (0x0004 => pub bmarbit1: ReadWrite<u16>),
        (0x0006 => _reserved1),
        /// Arbitration Priority Configuration for Slave 2 (SRAM1 + EEPROM)
        (0x0008 => pub bmarbit2: ReadWrite<u16>),
        (0x000a => _reserved2),
        /// Arbitration Priority Configuration for Slave 3 (AFE)
        (0x000c => pub bmarbit3: ReadWrite<u16>),
        (0x000e => _reserved3),
        /// Arbitration Priority Configuration for Slave 4 (32-bit APB)
        (0x0010 => pub bmarbit4: ReadWrite<u16>),
        (0x0012 => _reserved4),
        /// Arbitration Priority Configuration for Slave 5 (16-bit APB with DMA access)
        (0x0014 => pub bmarbit5: ReadWrite<u16>),
        (0x0016 => _reserved5),
        (0x0018 => @END),
    }
}

pub const BUSM_BASE: StaticRef<BusMRegisters> =
    unsafe { StaticRef::new(0x4002_8040 as *const BusMRegisters) };
