// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Bus matrix arbitration.

// Generated register constants for busm.

// BUSM registers
/// Arbitration Priority Configuration for Slave 0 (Flash)
pub const REG_BUSM_BMARBIT0: u32 = 0x4002_8040;
/// Arbitration Priority Configuration for Slave 1 (SRAM0)
pub const REG_BUSM_BMARBIT1: u32 = 0x4002_8044;
/// Arbitration Priority Configuration for Slave 2 (SRAM1 + EEPROM)
pub const REG_BUSM_BMARBIT2: u32 = 0x4002_8048;
/// Arbitration Priority Configuration for Slave 3 (AFE)
pub const REG_BUSM_BMARBIT3: u32 = 0x4002_804C;
/// Arbitration Priority Configuration for Slave 4 (32-bit APB)
pub const REG_BUSM_BMARBIT4: u32 = 0x4002_8050;
/// Arbitration Priority Configuration for Slave 5 (16-bit APB with DMA access)
pub const REG_BUSM_BMARBIT5: u32 = 0x4002_8054;

// BUSM_BMARBIT0
pub const BITP_BUSM_BMARBIT0_VALUE: u32 = 0;
/// Arbitration Priority Configuration for Slave 0 (Flash)
pub const BITM_BUSM_BMARBIT0_VALUE: u16 = 0xFFFF;

// BUSM_BMARBIT1
pub const BITP_BUSM_BMARBIT1_VALUE: u32 = 0;
/// Arbitration Priority Configuration for Slave 1 (SRAM0)
pub const BITM_BUSM_BMARBIT1_VALUE: u16 = 0xFFFF;

// BUSM_BMARBIT2
pub const BITP_BUSM_BMARBIT2_VALUE: u32 = 0;
/// Arbitration Priority Configuration for Slave 2 (SRAM1 + EEPROM)
pub const BITM_BUSM_BMARBIT2_VALUE: u16 = 0xFFFF;

// BUSM_BMARBIT3
pub const BITP_BUSM_BMARBIT3_VALUE: u32 = 0;
/// Arbitration Priority Configuration for Slave 3 (AFE)
pub const BITM_BUSM_BMARBIT3_VALUE: u16 = 0xFFFF;

// BUSM_BMARBIT4
pub const BITP_BUSM_BMARBIT4_VALUE: u32 = 0;
/// Arbitration Priority Configuration for Slave 4 (32-bit APB)
pub const BITM_BUSM_BMARBIT4_VALUE: u16 = 0xFFFF;

// BUSM_BMARBIT5
pub const BITP_BUSM_BMARBIT5_VALUE: u32 = 0;
/// Arbitration Priority Configuration for Slave 5 (16-bit APB with DMA access)
pub const BITM_BUSM_BMARBIT5_VALUE: u16 = 0xFFFF;
