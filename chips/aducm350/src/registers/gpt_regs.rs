// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for gpt.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub GptRegisters {
        /// 16-bit load value
        (0x0000 => pub gptld: ReadWrite<u16>),
        (0x0002 => _reserved0),
        /// 16-bit timer value
        (0x0004 => pub gptval: ReadOnly<u16>),
        (0x0006 => _reserved1),
        /// Control
        (0x0008 => pub gptcon: ReadWrite<u16, GPTCON::Register>),
        (0x000a => _reserved2),
        /// Clear Interrupt
        (0x000c => pub gptclri: WriteOnly<u16, GPTCLRI::Register>),
        (0x000e => _reserved3),
        /// Capture
        (0x0010 => pub gptcap: ReadOnly<u16>),
        (0x0012 => _reserved4),
        /// 16-bit load value, asynchronous
        (0x0014 => pub gptald: ReadWrite<u16>),
        (0x0016 => _reserved5),
        /// 16-bit timer value, asynchronous
        (0x0018 => pub gptaval: ReadOnly<u16>),
        (0x001a => _reserved6),
        /// Status
        (0x001c => pub gptsta: ReadOnly<u16, GPTSTA::Register>),
        (0x001e => _reserved7),
        /// PWM Control Register
        (0x0020 => pub gptpcon: ReadWrite<u16, GPTPCON::Register>),
        (0x0022 => _reserved8),
        /// PWM Match Value
        (0x0024 => pub gptpmat: ReadWrite<u16>),
        (0x0026 => _reserved9),
        (0x0028 => @END),
    }
}

register_bitfields![u16,
    pub GPTCON [
        PRE OFFSET(0) NUMBITS(2) [
            DIV1 = 0,
            DIV16 = 1,
            DIV256 = 2,
            DIV32768 = 3,
        ],
        UP OFFSET(2) NUMBITS(1) [],
        MOD OFFSET(3) NUMBITS(1) [
            FREERUN = 0,
            PERIODIC = 1,
        ],
        ENABLE OFFSET(4) NUMBITS(1) [],
        CLK OFFSET(5) NUMBITS(2) [
            UCLK = 0,
            HFOSC = 1,
            LFOSC = 2,
            LFXTAL = 3,
        ],
        RLD OFFSET(7) NUMBITS(1) [],
        EVENT OFFSET(8) NUMBITS(4) [],
        EVENTEN OFFSET(12) NUMBITS(1) [],
    ],
    pub GPTCLRI [
        TMOUT OFFSET(0) NUMBITS(1) [],
        CAP OFFSET(1) NUMBITS(1) [],
    ],
    pub GPTSTA [
        TMOUT OFFSET(0) NUMBITS(1) [],
        CAP OFFSET(1) NUMBITS(1) [],
        BUSY OFFSET(6) NUMBITS(1) [],
        PDOK OFFSET(7) NUMBITS(1) [],
    ],
    pub GPTPCON [
        MATCH_EN OFFSET(0) NUMBITS(1) [],
        IDLE_STATE OFFSET(1) NUMBITS(1) [],
    ],
];

pub const GPT0_BASE: StaticRef<GptRegisters> =
    unsafe { StaticRef::new(0x4000_0000 as *const GptRegisters) };
pub const GPT1_BASE: StaticRef<GptRegisters> =
    unsafe { StaticRef::new(0x4000_0400 as *const GptRegisters) };
pub const GPT2_BASE: StaticRef<GptRegisters> =
    unsafe { StaticRef::new(0x4000_0800 as *const GptRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(GPTCON::PRE.mask << GPTCON::PRE.shift, BITM_GPT_GPTCON_PRE);
        assert_eq!(GPTCON::PRE.shift as u32, BITP_GPT_GPTCON_PRE);
        assert_eq!(GPTCON::UP.mask << GPTCON::UP.shift, BITM_GPT_GPTCON_UP);
        assert_eq!(GPTCON::UP.shift as u32, BITP_GPT_GPTCON_UP);
        assert_eq!(GPTCON::MOD.mask << GPTCON::MOD.shift, BITM_GPT_GPTCON_MOD);
        assert_eq!(GPTCON::MOD.shift as u32, BITP_GPT_GPTCON_MOD);
        assert_eq!(GPTCON::ENABLE.mask << GPTCON::ENABLE.shift, BITM_GPT_GPTCON_ENABLE);
        assert_eq!(GPTCON::ENABLE.shift as u32, BITP_GPT_GPTCON_ENABLE);
        assert_eq!(GPTCON::CLK.mask << GPTCON::CLK.shift, BITM_GPT_GPTCON_CLK);
        assert_eq!(GPTCON::CLK.shift as u32, BITP_GPT_GPTCON_CLK);
        assert_eq!(GPTCON::RLD.mask << GPTCON::RLD.shift, BITM_GPT_GPTCON_RLD);
        assert_eq!(GPTCON::RLD.shift as u32, BITP_GPT_GPTCON_RLD);
        assert_eq!(GPTCON::EVENT.mask << GPTCON::EVENT.shift, BITM_GPT_GPTCON_EVENT);
        assert_eq!(GPTCON::EVENT.shift as u32, BITP_GPT_GPTCON_EVENT);
        assert_eq!(GPTCON::EVENTEN.mask << GPTCON::EVENTEN.shift, BITM_GPT_GPTCON_EVENTEN);
        assert_eq!(GPTCON::EVENTEN.shift as u32, BITP_GPT_GPTCON_EVENTEN);
        assert_eq!(GPTCLRI::TMOUT.mask << GPTCLRI::TMOUT.shift, BITM_GPT_GPTCLRI_TMOUT);
        assert_eq!(GPTCLRI::TMOUT.shift as u32, BITP_GPT_GPTCLRI_TMOUT);
        assert_eq!(GPTCLRI::CAP.mask << GPTCLRI::CAP.shift, BITM_GPT_GPTCLRI_CAP);
        assert_eq!(GPTCLRI::CAP.shift as u32, BITP_GPT_GPTCLRI_CAP);
        assert_eq!(GPTSTA::TMOUT.mask << GPTSTA::TMOUT.shift, BITM_GPT_GPTSTA_TMOUT);
        assert_eq!(GPTSTA::TMOUT.shift as u32, BITP_GPT_GPTSTA_TMOUT);
        assert_eq!(GPTSTA::CAP.mask << GPTSTA::CAP.shift, BITM_GPT_GPTSTA_CAP);
        assert_eq!(GPTSTA::CAP.shift as u32, BITP_GPT_GPTSTA_CAP);
        assert_eq!(GPTSTA::BUSY.mask << GPTSTA::BUSY.shift, BITM_GPT_GPTSTA_BUSY);
        assert_eq!(GPTSTA::BUSY.shift as u32, BITP_GPT_GPTSTA_BUSY);
        assert_eq!(GPTSTA::PDOK.mask << GPTSTA::PDOK.shift, BITM_GPT_GPTSTA_PDOK);
        assert_eq!(GPTSTA::PDOK.shift as u32, BITP_GPT_GPTSTA_PDOK);
        assert_eq!(GPTPCON::MATCH_EN.mask << GPTPCON::MATCH_EN.shift, BITM_GPT_GPTPCON_MATCH_EN);
        assert_eq!(GPTPCON::MATCH_EN.shift as u32, BITP_GPT_GPTPCON_MATCH_EN);
        assert_eq!(GPTPCON::IDLE_STATE.mask << GPTPCON::IDLE_STATE.shift, BITM_GPT_GPTPCON_IDLE_STATE);
        assert_eq!(GPTPCON::IDLE_STATE.shift as u32, BITP_GPT_GPTPCON_IDLE_STATE);
    }

    #[test]
    fn registers_match_addresses() {
        let gpt0 = GPT0_BASE.address();
        let gpt1 = GPT1_BASE.address();
        let gpt2 = GPT2_BASE.address();
        assert_eq!(REG_GPT0_GPTLD as usize, gpt0 + offset_of!(GptRegisters, gptld));
        assert_eq!(REG_GPT0_GPTVAL as usize, gpt0 + offset_of!(GptRegisters, gptval));
        assert_eq!(REG_GPT0_GPTCON as usize, gpt0 + offset_of!(GptRegisters, gptcon));
        assert_eq!(REG_GPT0_GPTCLRI as usize, gpt0 + offset_of!(GptRegisters, gptclri));
        assert_eq!(REG_GPT0_GPTCAP as usize, gpt0 + offset_of!(GptRegisters, gptcap));
        assert_eq!(REG_GPT0_GPTALD as usize, gpt0 + offset_of!(GptRegisters, gptald));
        assert_eq!(REG_GPT0_GPTAVAL as usize, gpt0 + offset_of!(GptRegisters, gptaval));
        assert_eq!(REG_GPT0_GPTSTA as usize, gpt0 + offset_of!(GptRegisters, gptsta));
        assert_eq!(REG_GPT0_GPTPCON as usize, gpt0 + offset_of!(GptRegisters, gptpcon));
        assert_eq!(REG_GPT0_GPTPMAT as usize, gpt0 + offset_of!(GptRegisters, gptpmat));
        assert_eq!(REG_GPT1_GPTLD as usize, gpt1 + offset_of!(GptRegisters, gptld));
        assert_eq!(REG_GPT1_GPTVAL as usize, gpt1 + offset_of!(GptRegisters, gptval));
        assert_eq!(REG_GPT1_GPTCON as usize, gpt1 + offset_of!(GptRegisters, gptcon));
        assert_eq!(REG_GPT1_GPTCLRI as usize, gpt1 + offset_of!(GptRegisters, gptclri));
        assert_eq!(REG_GPT1_GPTCAP as usize, gpt1 + offset_of!(GptRegisters, gptcap));
        assert_eq!(REG_GPT1_GPTALD as usize, gpt1 + offset_of!(GptRegisters, gptald));
        assert_eq!(REG_GPT1_GPTAVAL as usize, gpt1 + offset_of!(GptRegisters, gptaval));
        assert_eq!(REG_GPT1_GPTSTA as usize, gpt1 + offset_of!(GptRegisters, gptsta));
        assert_eq!(REG_GPT1_GPTPCON as usize, gpt1 + offset_of!(GptRegisters, gptpcon));
        assert_eq!(REG_GPT1_GPTPMAT as usize, gpt1 + offset_of!(GptRegisters, gptpmat));
        assert_eq!(REG_GPT2_GPTLD as usize, gpt2 + offset_of!(GptRegisters, gptld));
        assert_eq!(REG_GPT2_GPTVAL as usize, gpt2 + offset_of!(GptRegisters, gptval));
        assert_eq!(REG_GPT2_GPTCON as usize, gpt2 + offset_of!(GptRegisters, gptcon));
        assert_eq!(REG_GPT2_GPTCLRI as usize, gpt2 + offset_of!(GptRegisters, gptclri));
        assert_eq!(REG_GPT2_GPTCAP as usize, gpt2 + offset_of!(GptRegisters, gptcap));
        assert_eq!(REG_GPT2_GPTALD as usize, gpt2 + offset_of!(GptRegisters, gptald));
        assert_eq!(REG_GPT2_GPTAVAL as usize, gpt2 + offset_of!(GptRegisters, gptaval));
        assert_eq!(REG_GPT2_GPTSTA as usize, gpt2 + offset_of!(GptRegisters, gptsta));
        assert_eq!(REG_GPT2_GPTPCON as usize, gpt2 + offset_of!(GptRegisters, gptpcon));
        assert_eq!(REG_GPT2_GPTPMAT as usize, gpt2 + offset_of!(GptRegisters, gptpmat));
    }
}
