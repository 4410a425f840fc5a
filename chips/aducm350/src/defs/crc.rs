// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! CRC accelerator.

// Generated register constants for crc.

// CRC registers
/// CRC Control Register
pub const REG_CRC_CRC_CTL: u32 = 0x4002_C000;
/// Input Data Register
pub const REG_CRC_CRC_IPDATA: u32 = 0x4002_C004;
/// CRC Result Register
pub const REG_CRC_CRC_RESULT: u32 = 0x4002_C008;

// CRC_CRC_CTL
pub const BITP_CRC_CRC_CTL_BLKEN: u32 = 0;
pub const BITP_CRC_CRC_CTL_STRT_CRC: u32 = 1;
pub const BITP_CRC_CRC_CTL_DMAREQEN: u32 = 2;
pub const BITP_CRC_CRC_CTL_AUTORST: u32 = 3;
pub const BITP_CRC_CRC_CTL_BITMIRR: u32 = 5;
pub const BITP_CRC_CRC_CTL_BYTMIRR: u32 = 6;
pub const BITP_CRC_CRC_CTL_W16SWP: u32 = 7;
/// CRC peripheral enable
pub const BITM_CRC_CRC_CTL_BLKEN: u32 = 0x0000_0001;
/// Start CRC computation
pub const BITM_CRC_CRC_CTL_STRT_CRC: u32 = 0x0000_0002;
/// DMA request enable
pub const BITM_CRC_CRC_CTL_DMAREQEN: u32 = 0x0000_0004;
/// Auto reset of the CRC result
pub const BITM_CRC_CRC_CTL_AUTORST: u32 = 0x0000_0018;
/// Bit mirroring
pub const BITM_CRC_CRC_CTL_BITMIRR: u32 = 0x0000_0020;
/// Byte mirroring
pub const BITM_CRC_CRC_CTL_BYTMIRR: u32 = 0x0000_0040;
/// Word16 swap
pub const BITM_CRC_CRC_CTL_W16SWP: u32 = 0x0000_0080;

// CRC_CRC_IPDATA
pub const BITP_CRC_CRC_IPDATA_VALUE: u32 = 0;
/// Input Data Register
pub const BITM_CRC_CRC_IPDATA_VALUE: u32 = 0xFFFF_FFFF;

// CRC_CRC_RESULT
pub const BITP_CRC_CRC_RESULT_VALUE: u32 = 0;
/// CRC Result Register
pub const BITM_CRC_CRC_RESULT_VALUE: u32 = 0xFFFF_FFFF;
