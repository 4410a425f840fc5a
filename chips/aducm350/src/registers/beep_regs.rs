// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for beep.

use crate::static_ref::StaticRef;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub BeepRegisters {
        /// Beeper configuration
        (0x0000 => pub beep_cfg: ReadWrite<u16, BEEP_CFG::Register>),
        (0x0002 => _reserved0),
        /// Beeper status
        (0x0004 => pub beep_stat: ReadWrite<u16, BEEP_STAT::Register>),
        (0x0006 => _reserved1),
        /// Tone A Data
        (0x0008 => pub beep_tone_a: ReadWrite<u16, BEEP_TONE_A::Register>),
        (0x000a => _reserved2),
        /// Tone B Data
        (0x000c => pub beep_tone_b: ReadWrite<u16, BEEP_TONE_B::Register>),
        (0x000e => _reserved3),
        (0x0010 => @END),
    }
}

register_bitfields![u16,
    pub BEEP_CFG [
        SEQ_REPEAT OFFSET(0) NUMBITS(8) [],
        BEEP_EN OFFSET(8) NUMBITS(1) [],
        IRQ_TONEA_START OFFSET(10) NUMBITS(1) [],
        IRQ_TONEA_END OFFSET(11) NUMBITS(1) [],
        IRQ_TONEB_START OFFSET(12) NUMBITS(1) [],
        IRQ_TONEB_END OFFSET(13) NUMBITS(1) [],
        IRQ_SEQ_NEAR_END OFFSET(14) NUMBITS(1) [],
        IRQ_SEQ_END OFFSET(15) NUMBITS(1) [],
    ],
    pub BEEP_STAT [
        SEQ_REMAIN OFFSET(0) NUMBITS(8) [],
        BEEP_BUSY OFFSET(8) NUMBITS(1) [],
        EVT_TONEA_START OFFSET(10) NUMBITS(1) [],
        EVT_TONEA_END OFFSET(11) NUMBITS(1) [],
        EVT_TONEB_START OFFSET(12) NUMBITS(1) [],
        EVT_TONEB_END OFFSET(13) NUMBITS(1) [],
        EVT_SEQ_NEAR_END OFFSET(14) NUMBITS(1) [],
        EVT_SEQ_END OFFSET(15) NUMBITS(1) [],
    ],
    pub BEEP_TONE_A [
        DUR OFFSET(0) NUMBITS(8) [],
        FREQ OFFSET(8) NUMBITS(7) [],
        DISABLE OFFSET(15) NUMBITS(1) [],
    ],
    pub BEEP_TONE_B [
        DUR OFFSET(0) NUMBITS(8) [],
        FREQ OFFSET(8) NUMBITS(7) [],
        DISABLE OFFSET(15) NUMBITS(1) [],
    ],
];

pub const BEEP_BASE: StaticRef<BeepRegisters> =
    unsafe { StaticRef::new(0x4000_5C00 as *const BeepRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(BEEP_CFG::SEQ_REPEAT.mask << BEEP_CFG::SEQ_REPEAT.shift, BITM_BEEP_BEEP_CFG_SEQ_REPEAT);
        assert_eq!(BEEP_CFG::SEQ_REPEAT.shift as u32, BITP_BEEP_BEEP_CFG_SEQ_REPEAT);
        assert_eq!(BEEP_CFG::BEEP_EN.mask << BEEP_CFG::BEEP_EN.shift, BITM_BEEP_BEEP_CFG_BEEP_EN);
        assert_eq!(BEEP_CFG::BEEP_EN.shift as u32, BITP_BEEP_BEEP_CFG_BEEP_EN);
        assert_eq!(BEEP_CFG::IRQ_TONEA_START.mask << BEEP_CFG::IRQ_TONEA_START.shift, BITM_BEEP_BEEP_CFG_IRQ_TONEA_START);
        assert_eq!(BEEP_CFG::IRQ_TONEA_START.shift as u32, BITP_BEEP_BEEP_CFG_IRQ_TONEA_START);
        assert_eq!(BEEP_CFG::IRQ_TONEA_END.mask << BEEP_CFG::IRQ_TONEA_END.shift, BITM_BEEP_BEEP_CFG_IRQ_TONEA_END);
        assert_eq!(BEEP_CFG::IRQ_TONEA_END.shift as u32, BITP_BEEP_BEEP_CFG_IRQ_TONEA_END);
        assert_eq!(BEEP_CFG::IRQ_TONEB_START.mask << BEEP_CFG::IRQ_TONEB_START.shift, BITM_BEEP_BEEP_CFG_IRQ_TONEB_START);
        assert_eq!(BEEP_CFG::IRQ_TONEB_START.shift as u32, BITP_BEEP_BEEP_CFG_IRQ_TONEB_START);
        assert_eq!(BEEP_CFG::IRQ_TONEB_END.mask << BEEP_CFG::IRQ_TONEB_END.shift, BITM_BEEP_BEEP_CFG_IRQ_TONEB_END);
        assert_eq!(BEEP_CFG::IRQ_TONEB_END.shift as u32, BITP_BEEP_BEEP_CFG_IRQ_TONEB_END);
        assert_eq!(BEEP_CFG::IRQ_SEQ_NEAR_END.mask << BEEP_CFG::IRQ_SEQ_NEAR_END.shift, BITM_BEEP_BEEP_CFG_IRQ_SEQ_NEAR_END);
        assert_eq!(BEEP_CFG::IRQ_SEQ_NEAR_END.shift as u32, BITP_BEEP_BEEP_CFG_IRQ_SEQ_NEAR_END);
        assert_eq!(BEEP_CFG::IRQ_SEQ_END.mask << BEEP_CFG::IRQ_SEQ_END.shift, BITM_BEEP_BEEP_CFG_IRQ_SEQ_END);
        assert_eq!(BEEP_CFG::IRQ_SEQ_END.shift as u32, BITP_BEEP_BEEP_CFG_IRQ_SEQ_END);
        assert_eq!(BEEP_STAT::SEQ_REMAIN.mask << BEEP_STAT::SEQ_REMAIN.shift, BITM_BEEP_BEEP_STAT_SEQ_REMAIN);
        assert_eq!(BEEP_STAT::SEQ_REMAIN.shift as u32, BITP_BEEP_BEEP_STAT_SEQ_REMAIN);
        assert_eq!(BEEP_STAT::BEEP_BUSY.mask << BEEP_STAT::BEEP_BUSY.shift, BITM_BEEP_BEEP_STAT_BEEP_BUSY);
        assert_eq!(BEEP_STAT::BEEP_BUSY.shift as u32, BITP_BEEP_BEEP_STAT_BEEP_BUSY);
        assert_eq!(BEEP_STAT::EVT_TONEA_START.mask << BEEP_STAT::EVT_TONEA_START.shift, BITM_BEEP_BEEP_STAT_EVT_TONEA_START);
        assert_eq!(BEEP_STAT::EVT_TONEA_START.shift as u32, BITP_BEEP_BEEP_STAT_EVT_TONEA_START);
        assert_eq!(BEEP_STAT::EVT_TONEA_END.mask << BEEP_STAT::EVT_TONEA_END.shift, BITM_BEEP_BEEP_STAT_EVT_TONEA_END);
        assert_eq!(BEEP_STAT::EVT_TONEA_END.shift as u32, BITP_BEEP_BEEP_STAT_EVT_TONEA_END);
        assert_eq!(BEEP_STAT::EVT_TONEB_START.mask << BEEP_STAT::EVT_TONEB_START.shift, BITM_BEEP_BEEP_STAT_EVT_TONEB_START);
        assert_eq!(BEEP_STAT::EVT_TONEB_START.shift as u32, BITP_BEEP_BEEP_STAT_EVT_TONEB_START);
        assert_eq!(BEEP_STAT::EVT_TONEB_END.mask << BEEP_STAT::EVT_TONEB_END.shift, BITM_BEEP_BEEP_STAT_EVT_TONEB_END);
        assert_eq!(BEEP_STAT::EVT_TONEB_END.shift as u32, BITP_BEEP_BEEP_STAT_EVT_TONEB_END);
        assert_eq!(BEEP_STAT::EVT_SEQ_NEAR_END.mask << BEEP_STAT::EVT_SEQ_NEAR_END.shift, BITM_BEEP_BEEP_STAT_EVT_SEQ_NEAR_END);
        assert_eq!(BEEP_STAT::EVT_SEQ_NEAR_END.shift as u32, BITP_BEEP_BEEP_STAT_EVT_SEQ_NEAR_END);
        assert_eq!(BEEP_STAT::EVT_SEQ_END.mask << BEEP_STAT::EVT_SEQ_END.shift, BITM_BEEP_BEEP_STAT_EVT_SEQ_END);
        assert_eq!(BEEP_STAT::EVT_SEQ_END.shift as u32, BITP_BEEP_BEEP_STAT_EVT_SEQ_END);
        assert_eq!(BEEP_TONE_A::DUR.mask << BEEP_TONE_A::DUR.shift, BITM_BEEP_BEEP_TONE_A_DUR);
        assert_eq!(BEEP_TONE_A::DUR.shift as u32, BITP_BEEP_BEEP_TONE_A_DUR);
        assert_eq!(BEEP_TONE_A::FREQ.mask << BEEP_TONE_A::FREQ.shift, BITM_BEEP_BEEP_TONE_A_FREQ);
        assert_eq!(BEEP_TONE_A::FREQ.shift as u32, BITP_BEEP_BEEP_TONE_A_FREQ);
        assert_eq!(BEEP_TONE_A::DISABLE.mask << BEEP_TONE_A::DISABLE.shift, BITM_BEEP_BEEP_TONE_A_DISABLE);
        assert_eq!(BEEP_TONE_A::DISABLE.shift as u32, BITP_BEEP_BEEP_TONE_A_DISABLE);
        assert_eq!(BEEP_TONE_B::DUR.mask << BEEP_TONE_B::DUR.shift, BITM_BEEP_BEEP_TONE_B_DUR);
        assert_eq!(BEEP_TONE_B::DUR.shift as u32, BITP_BEEP_BEEP_TONE_B_DUR);
        assert_eq!(BEEP_TONE_B::FREQ.mask << BEEP_TONE_B::FREQ.shift, BITM_BEEP_BEEP_TONE_B_FREQ);
        assert_eq!(BEEP_TONE_B::FREQ.shift as u32, BITP_BEEP_BEEP_TONE_B_FREQ);
        assert_eq!(BEEP_TONE_B::DISABLE.mask << BEEP_TONE_B::DISABLE.shift, BITM_BEEP_BEEP_TONE_B_DISABLE);
        assert_eq!(BEEP_TONE_B::DISABLE.shift as u32, BITP_BEEP_BEEP_TONE_B_DISABLE);
    }

    #[test]
    fn registers_match_addresses() {
        let beep = BEEP_BASE.address();
        assert_eq!(REG_BEEP_BEEP_CFG as usize, beep + offset_of!(BeepRegisters, beep_cfg));
        assert_eq!(REG_BEEP_BEEP_STAT as usize, beep + offset_of!(BeepRegisters, beep_stat));
        assert_eq!(REG_BEEP_BEEP_TONE_A as usize, beep + offset_of!(BeepRegisters, beep_tone_a));
        assert_eq!(REG_BEEP_BEEP_TONE_B as usize, beep + offset_of!(BeepRegisters, beep_tone_b));
    }
}
