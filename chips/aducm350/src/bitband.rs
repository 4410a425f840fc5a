// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Bit-band alias addresses.
//!
//! SRAM and the peripheral register space each have a 1 MB bit-band region.
//! Every bit in those regions is mirrored as a full word in the matching
//! alias region, so a single store to the alias word sets or clears one bit
//! atomically.

use core::fmt;

pub const RAM_BASE: u32 = 0x2000_0000;
pub const RAM_ALIAS: u32 = 0x2200_0000;
pub const MMR_BASE: u32 = 0x4000_0000;
pub const MMR_ALIAS: u32 = 0x4200_0000;

/// Span of each bit-band region.
pub const REGION_SIZE: u32 = 0x10_0000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitBandError {
    /// The address is outside both bit-band regions.
    OutOfRegion(u32),
    InvalidBit(u32),
}

impl fmt::Display for BitBandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BitBandError::OutOfRegion(addr) => {
                write!(f, "{:#010x} is not in a bit-band region", addr)
            }
            BitBandError::InvalidBit(bit) => write!(f, "bit {} out of range", bit),
        }
    }
}

/// The addressed bit must fall inside the region, so a byte address near
/// the end only accepts the bits of that byte and the ones below the end.
const fn alias(base: u32, alias_base: u32, addr: u32, bit: u32) -> Result<u32, BitBandError> {
    if addr < base || addr - base >= REGION_SIZE {
        return Err(BitBandError::OutOfRegion(addr));
    }
    if bit > 31 {
        return Err(BitBandError::InvalidBit(bit));
    }
    let offset = addr - base;
    if offset + bit / 8 >= REGION_SIZE {
        return Err(BitBandError::OutOfRegion(addr));
    }
    Ok(alias_base + (offset << 5) + (bit << 2))
}

/// Alias word for `bit` of the peripheral register at `addr`.
pub const fn mmr_alias(addr: u32, bit: u32) -> Result<u32, BitBandError> {
    alias(MMR_BASE, MMR_ALIAS, addr, bit)
}

/// Alias word for `bit` of the SRAM word at `addr`.
pub const fn ram_alias(addr: u32, bit: u32) -> Result<u32, BitBandError> {
    alias(RAM_BASE, RAM_ALIAS, addr, bit)
}

/// Picks the region from the address.
pub const fn alias_address(addr: u32, bit: u32) -> Result<u32, BitBandError> {
    if addr >= MMR_BASE {
        mmr_alias(addr, bit)
    } else {
        ram_alias(addr, bit)
    }
}

/// Inverse of [`alias_address`]: the byte address and bit an alias word
/// stands for.
pub const fn target_of(alias_addr: u32) -> Option<(u32, u32)> {
    let (base, region) = if alias_addr >= MMR_ALIAS && alias_addr - MMR_ALIAS < REGION_SIZE * 32 {
        (MMR_BASE, alias_addr - MMR_ALIAS)
    } else if alias_addr >= RAM_ALIAS && alias_addr - RAM_ALIAS < REGION_SIZE * 32 {
        (RAM_BASE, alias_addr - RAM_ALIAS)
    } else {
        return None;
    };
    if region & 0x3 != 0 {
        return None;
    }
    Some((base + ((region >> 5) & !0x3), (region >> 2) & 0x1f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;

    #[test]
    fn gpt_enable_alias() {
        // GPT0 GPTCON.ENABLE
        assert_eq!(
            mmr_alias(REG_GPT0_GPTCON, BITP_GPT_GPTCON_ENABLE),
            Ok(0x4200_0000 + (0x08 << 5) + (4 << 2))
        );
    }

    #[test]
    fn ram_alias_first_and_last() {
        assert_eq!(ram_alias(RAM_BASE, 0), Ok(RAM_ALIAS));
        assert_eq!(
            ram_alias(RAM_BASE + REGION_SIZE - 4, 31),
            Ok(RAM_ALIAS + ((REGION_SIZE - 4) << 5) + (31 << 2))
        );
        assert_eq!(
            ram_alias(RAM_BASE + REGION_SIZE, 0),
            Err(BitBandError::OutOfRegion(RAM_BASE + REGION_SIZE))
        );
    }

    #[test]
    fn last_byte_of_region() {
        let last = RAM_BASE + REGION_SIZE - 1;
        let a = ram_alias(last, 7).unwrap();
        assert!(a < RAM_ALIAS + REGION_SIZE * 32);
        assert_eq!(target_of(a), Some((RAM_BASE + REGION_SIZE - 4, 31)));
        assert_eq!(ram_alias(last, 8), Err(BitBandError::OutOfRegion(last)));
        assert_eq!(ram_alias(last, 31), Err(BitBandError::OutOfRegion(last)));

        let mmr_last = MMR_BASE + REGION_SIZE - 2;
        assert!(mmr_alias(mmr_last, 15).is_ok());
        assert_eq!(
            mmr_alias(mmr_last, 16),
            Err(BitBandError::OutOfRegion(mmr_last))
        );
    }

    #[test]
    fn rejects_outside_regions() {
        assert_eq!(
            alias_address(0x1000_0000, 0),
            Err(BitBandError::OutOfRegion(0x1000_0000))
        );
        assert_eq!(
            alias_address(REG_NVIC_INTNUM, 0),
            Err(BitBandError::OutOfRegion(REG_NVIC_INTNUM))
        );
        assert_eq!(
            alias_address(REG_GPT0_GPTCON, 32),
            Err(BitBandError::InvalidBit(32))
        );
    }

    #[test]
    fn inverse() {
        let a = alias_address(REG_UART_COMLSR, 5).unwrap();
        assert_eq!(target_of(a), Some((REG_UART_COMLSR, 5)));
        let r = alias_address(0x2000_1234, 17).unwrap();
        assert_eq!(target_of(r), Some((0x2000_1234, 17)));
        assert_eq!(target_of(MMR_ALIAS + 2), None);
        assert_eq!(target_of(0x3000_0000), None);
    }
}
