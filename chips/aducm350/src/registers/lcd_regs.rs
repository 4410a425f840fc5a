// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for lcd.

use crate::static_ref::StaticRef;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub LcdDataRegisters {
        /// Segment data for one common line
        (0x00 => pub data: ReadWrite<u16>),
        (0x02 => _reserved0),
        (0x04 => @END),
    },
    pub LcdRegisters {
        /// LCD Configuration Register
        (0x0000 => pub lcdcon: ReadWrite<u16, LCDCON::Register>),
        (0x0002 => _reserved0),
        /// LCD Status Register
        (0x0004 => pub lcdstat: ReadWrite<u16, LCDSTAT::Register>),
        (0x0006 => _reserved1),
        /// LCD Blink Control Register
        (0x0008 => pub lcdblink: ReadWrite<u16, LCDBLINK::Register>),
        (0x000a => _reserved2),
        /// LCD Contrast Control Register
        (0x000c => pub lcdcontrast: ReadWrite<u16, LCDCONTRAST::Register>),
        (0x000e => _reserved3),
        /// Screen 0 segment data
        (0x0010 => pub lcddata_s0: [LcdDataRegisters; 8]),
        /// Screen 1 segment data
        (0x0030 => pub lcddata_s1: [LcdDataRegisters; 8]),
        (0x0050 => @END),
    }
}

register_bitfields![u16,
    pub LCDCON [
        LCDEN OFFSET(0) NUMBITS(1) [],
        LCDMUX OFFSET(1) NUMBITS(1) [],
        SCREENSEL OFFSET(2) NUMBITS(1) [],
        FRAMEINV OFFSET(3) NUMBITS(1) [],
        FRAMESEL OFFSET(4) NUMBITS(4) [
            FRAMESEL_128HZ = 0,
            FRAMESEL_102_4HZ = 1,
            FRAMESEL_85_3HZ = 2,
            FRAMESEL_73_1HZ = 3,
            FRAMESEL_64HZ = 4,
            FRAMESEL_56_9HZ = 5,
            FRAMESEL_51_2HZ = 6,
            FRAMESEL_46_5HZ = 7,
            FRAMESEL_42_7HZ = 8,
            FRAMESEL_39_4HZ = 9,
            FRAMESEL_36_6HZ = 10,
            FRAMESEL_34_1HZ = 11,
            FRAMESEL_32HZ = 12,
            FRAMESEL_30_1HZ = 13,
            FRAMESEL_28_4HZ = 14,
            FRAMESEL_26_9HZ = 15,
        ],
        LCDRST OFFSET(8) NUMBITS(1) [],
        FRAMEINT_EN OFFSET(9) NUMBITS(1) [],
        CPINT_EN OFFSET(10) NUMBITS(1) [],
        BLINKEN OFFSET(11) NUMBITS(1) [],
    ],
    pub LCDSTAT [
        FRAMEINT OFFSET(0) NUMBITS(1) [],
        CP_GD OFFSET(1) NUMBITS(1) [],
        LCD_IDLE OFFSET(2) NUMBITS(1) [],
        VLCD_OK OFFSET(3) NUMBITS(1) [],
        SAFE_TO_WR OFFSET(4) NUMBITS(1) [],
    ],
    pub LCDBLINK [
        BLKMOD OFFSET(0) NUMBITS(2) [],
        BLKFREQ OFFSET(2) NUMBITS(3) [],
        AUTOSWITCH OFFSET(5) NUMBITS(1) [],
    ],
    pub LCDCONTRAST [
        BIASLVL OFFSET(0) NUMBITS(5) [],
        CP_EN OFFSET(5) NUMBITS(1) [],
        CP_PD OFFSET(6) NUMBITS(1) [],
    ],
];

pub const LCD_BASE: StaticRef<LcdRegisters> =
    unsafe { StaticRef::new(0x4000_8000 as *const LcdRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn fields_match_constants() {
        assert_eq!(LCDCON::LCDEN.mask << LCDCON::LCDEN.shift, BITM_LCD_LCDCON_LCDEN);
        assert_eq!(LCDCON::LCDEN.shift as u32, BITP_LCD_LCDCON_LCDEN);
        assert_eq!(LCDCON::LCDMUX.mask << LCDCON::LCDMUX.shift, BITM_LCD_LCDCON_LCDMUX);
        assert_eq!(LCDCON::LCDMUX.shift as u32, BITP_LCD_LCDCON_LCDMUX);
        assert_eq!(LCDCON::SCREENSEL.mask << LCDCON::SCREENSEL.shift, BITM_LCD_LCDCON_SCREENSEL);
        assert_eq!(LCDCON::SCREENSEL.shift as u32, BITP_LCD_LCDCON_SCREENSEL);
        assert_eq!(LCDCON::FRAMEINV.mask << LCDCON::FRAMEINV.shift, BITM_LCD_LCDCON_FRAMEINV);
        assert_eq!(LCDCON::FRAMEINV.shift as u32, BITP_LCD_LCDCON_FRAMEINV);
        assert_eq!(LCDCON::FRAMESEL.mask << LCDCON::FRAMESEL.shift, BITM_LCD_LCDCON_FRAMESEL);
        assert_eq!(LCDCON::FRAMESEL.shift as u32, BITP_LCD_LCDCON_FRAMESEL);
        assert_eq!(LCDCON::LCDRST.mask << LCDCON::LCDRST.shift, BITM_LCD_LCDCON_LCDRST);
        assert_eq!(LCDCON::LCDRST.shift as u32, BITP_LCD_LCDCON_LCDRST);
        assert_eq!(LCDCON::FRAMEINT_EN.mask << LCDCON::FRAMEINT_EN.shift, BITM_LCD_LCDCON_FRAMEINT_EN);
        assert_eq!(LCDCON::FRAMEINT_EN.shift as u32, BITP_LCD_LCDCON_FRAMEINT_EN);
        assert_eq!(LCDCON::CPINT_EN.mask << LCDCON::CPINT_EN.shift, BITM_LCD_LCDCON_CPINT_EN);
        assert_eq!(LCDCON::CPINT_EN.shift as u32, BITP_LCD_LCDCON_CPINT_EN);
        assert_eq!(LCDCON::BLINKEN.mask << LCDCON::BLINKEN.shift, BITM_LCD_LCDCON_BLINKEN);
        assert_eq!(LCDCON::BLINKEN.shift as u32, BITP_LCD_LCDCON_BLINKEN);
        assert_eq!(LCDSTAT::FRAMEINT.mask << LCDSTAT::FRAMEINT.shift, BITM_LCD_LCDSTAT_FRAMEINT);
        assert_eq!(LCDSTAT::FRAMEINT.shift as u32, BITP_LCD_LCDSTAT_FRAMEINT);
        assert_eq!(LCDSTAT::CP_GD.mask << LCDSTAT::CP_GD.shift, BITM_LCD_LCDSTAT_CP_GD);
        assert_eq!(LCDSTAT::CP_GD.shift as u32, BITP_LCD_LCDSTAT_CP_GD);
        assert_eq!(LCDSTAT::LCD_IDLE.mask << LCDSTAT::LCD_IDLE.shift, BITM_LCD_LCDSTAT_LCD_IDLE);
        assert_eq!(LCDSTAT::LCD_IDLE.shift as u32, BITP_LCD_LCDSTAT_LCD_IDLE);
        assert_eq!(LCDSTAT::VLCD_OK.mask << LCDSTAT::VLCD_OK.shift, BITM_LCD_LCDSTAT_VLCD_OK);
        assert_eq!(LCDSTAT::VLCD_OK.shift as u32, BITP_LCD_LCDSTAT_VLCD_OK);
        assert_eq!(LCDSTAT::SAFE_TO_WR.mask << LCDSTAT::SAFE_TO_WR.shift, BITM_LCD_LCDSTAT_SAFE_TO_WR);
        assert_eq!(LCDSTAT::SAFE_TO_WR.shift as u32, BITP_LCD_LCDSTAT_SAFE_TO_WR);
        assert_eq!(LCDBLINK::BLKMOD.mask << LCDBLINK::BLKMOD.shift, BITM_LCD_LCDBLINK_BLKMOD);
        assert_eq!(LCDBLINK::BLKMOD.shift as u32, BITP_LCD_LCDBLINK_BLKMOD);
        assert_eq!(LCDBLINK::BLKFREQ.mask << LCDBLINK::BLKFREQ.shift, BITM_LCD_LCDBLINK_BLKFREQ);
        assert_eq!(LCDBLINK::BLKFREQ.shift as u32, BITP_LCD_LCDBLINK_BLKFREQ);
        assert_eq!(LCDBLINK::AUTOSWITCH.mask << LCDBLINK::AUTOSWITCH.shift, BITM_LCD_LCDBLINK_AUTOSWITCH);
        assert_eq!(LCDBLINK::AUTOSWITCH.shift as u32, BITP_LCD_LCDBLINK_AUTOSWITCH);
        assert_eq!(LCDCONTRAST::BIASLVL.mask << LCDCONTRAST::BIASLVL.shift, BITM_LCD_LCDCONTRAST_BIASLVL);
        assert_eq!(LCDCONTRAST::BIASLVL.shift as u32, BITP_LCD_LCDCONTRAST_BIASLVL);
        assert_eq!(LCDCONTRAST::CP_EN.mask << LCDCONTRAST::CP_EN.shift, BITM_LCD_LCDCONTRAST_CP_EN);
        assert_eq!(LCDCONTRAST::CP_EN.shift as u32, BITP_LCD_LCDCONTRAST_CP_EN);
        assert_eq!(LCDCONTRAST::CP_PD.mask << LCDCONTRAST::CP_PD.shift, BITM_LCD_LCDCONTRAST_CP_PD);
        assert_eq!(LCDCONTRAST::CP_PD.shift as u32, BITP_LCD_LCDCONTRAST_CP_PD);
    }

    #[test]
    fn registers_match_addresses() {
        let lcd = LCD_BASE.address();
        assert_eq!(REG_LCD_LCDCON as usize, lcd + offset_of!(LcdRegisters, lcdcon));
        assert_eq!(REG_LCD_LCDSTAT as usize, lcd + offset_of!(LcdRegisters, lcdstat));
        assert_eq!(REG_LCD_LCDBLINK as usize, lcd + offset_of!(LcdRegisters, lcdblink));
        assert_eq!(REG_LCD_LCDCONTRAST as usize, lcd + offset_of!(LcdRegisters, lcdcontrast));
        assert_eq!(
            REG_LCD_LCDDATA0_S0 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s0) + 0 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA1_S0 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s0) + 1 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA2_S0 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s0) + 2 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA3_S0 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s0) + 3 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA4_S0 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s0) + 4 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA5_S0 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s0) + 5 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA6_S0 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s0) + 6 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA7_S0 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s0) + 7 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA0_S1 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s1) + 0 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA1_S1 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s1) + 1 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA2_S1 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s1) + 2 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA3_S1 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s1) + 3 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA4_S1 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s1) + 4 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA5_S1 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s1) + 5 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA6_S1 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s1) + 6 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
        assert_eq!(
            REG_LCD_LCDDATA7_S1 as usize,
            lcd + offset_of!(LcdRegisters, lcddata_s1) + 7 * size_of::<LcdDataRegisters>() + offset_of!(LcdDataRegisters, data)
        );
    }
}
