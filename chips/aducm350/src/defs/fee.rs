// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Flash controllers.

// Generated register constants for fee.

// FEE0 registers
/// Status
pub const REG_FEE0_FEESTA: u32 = 0x4001_8000;
/// Command Control
pub const REG_FEE0_FEECON0: u32 = 0x4001_8004;
/// Command
pub const REG_FEE0_FEECMD: u32 = 0x4001_8008;
/// Lower page address
pub const REG_FEE0_FEEADR0L: u32 = 0x4001_8010;
/// Upper page address
pub const REG_FEE0_FEEADR0H: u32 = 0x4001_8014;
/// Lower page address
pub const REG_FEE0_FEEADR1L: u32 = 0x4001_8018;
/// Upper page address
pub const REG_FEE0_FEEADR1H: u32 = 0x4001_801C;
/// Key
pub const REG_FEE0_FEEKEY: u32 = 0x4001_8020;
/// Lower halfword of write protection
pub const REG_FEE0_FEEPROL: u32 = 0x4001_8028;
/// Upper halfword of write protection
pub const REG_FEE0_FEEPROH: u32 = 0x4001_802C;
/// Lower halfword of signature
pub const REG_FEE0_FEESIGL: u32 = 0x4001_8030;
/// Upper halfword of signature
pub const REG_FEE0_FEESIGH: u32 = 0x4001_8034;
/// User Setup
pub const REG_FEE0_FEECON1: u32 = 0x4001_8038;
/// Lower halfword of write abort address
pub const REG_FEE0_FEEADRAL: u32 = 0x4001_8048;
/// Upper halfword of write abort address
pub const REG_FEE0_FEEADRAH: u32 = 0x4001_804C;
/// Parity Control Register
pub const REG_FEE0_FEEPARCTL: u32 = 0x4001_8050;
/// Parity Status Register
pub const REG_FEE0_FEEPARSTA: u32 = 0x4001_8054;
/// Parity Error Address Low
pub const REG_FEE0_FEEPARADRL: u32 = 0x4001_8058;
/// Parity Error Address High
pub const REG_FEE0_FEEPARADRH: u32 = 0x4001_805C;
/// System IRQ abort enable for interrupts 15 to 0
pub const REG_FEE0_FEEAEN0: u32 = 0x4001_8078;
/// System IRQ abort enable for interrupts 31 to 16
pub const REG_FEE0_FEEAEN1: u32 = 0x4001_807C;
/// System IRQ abort enable for interrupts 47 to 32
pub const REG_FEE0_FEEAEN2: u32 = 0x4001_8080;
/// System IRQ abort enable for interrupts 60 to 48
pub const REG_FEE0_FEEAEN3: u32 = 0x4001_8084;

// FEE1 registers
/// Status
pub const REG_FEE1_FEESTA: u32 = 0x4001_8100;
/// Command Control
pub const REG_FEE1_FEECON0: u32 = 0x4001_8104;
/// Command
pub const REG_FEE1_FEECMD: u32 = 0x4001_8108;
/// Lower page address
pub const REG_FEE1_FEEADR0L: u32 = 0x4001_8110;
/// Upper page address
pub const REG_FEE1_FEEADR0H: u32 = 0x4001_8114;
/// Lower page address
pub const REG_FEE1_FEEADR1L: u32 = 0x4001_8118;
/// Upper page address
pub const REG_FEE1_FEEADR1H: u32 = 0x4001_811C;
/// Key
pub const REG_FEE1_FEEKEY: u32 = 0x4001_8120;
/// Lower halfword of write protection
pub const REG_FEE1_FEEPROL: u32 = 0x4001_8128;
/// Upper halfword of write protection
pub const REG_FEE1_FEEPROH: u32 = 0x4001_812C;
/// Lower halfword of signature
pub const REG_FEE1_FEESIGL: u32 = 0x4001_8130;
/// Upper halfword of signature
pub const REG_FEE1_FEESIGH: u32 = 0x4001_8134;
/// User Setup
pub const REG_FEE1_FEECON1: u32 = 0x4001_8138;
/// Lower halfword of write abort address
pub const REG_FEE1_FEEADRAL: u32 = 0x4001_8148;
/// Upper halfword of write abort address
pub const REG_FEE1_FEEADRAH: u32 = 0x4001_814C;
/// Parity Control Register
pub const REG_FEE1_FEEPARCTL: u32 = 0x4001_8150;
/// Parity Status Register
pub const REG_FEE1_FEEPARSTA: u32 = 0x4001_8154;
/// Parity Error Address Low
pub const REG_FEE1_FEEPARADRL: u32 = 0x4001_8158;
/// Parity Error Address High
pub const REG_FEE1_FEEPARADRH: u32 = 0x4001_815C;
/// System IRQ abort enable for interrupts 15 to 0
pub const REG_FEE1_FEEAEN0: u32 = 0x4001_8178;
/// System IRQ abort enable for interrupts 31 to 16
pub const REG_FEE1_FEEAEN1: u32 = 0x4001_817C;
/// System IRQ abort enable for interrupts 47 to 32
pub const REG_FEE1_FEEAEN2: u32 = 0x4001_8180;
/// System IRQ abort enable for interrupts 60 to 48
pub const REG_FEE1_FEEAEN3: u32 = 0x4001_8184;

// FEE_FEESTA
pub const BITP_FEE_FEESTA_CMDBUSY: u32 = 0;
pub const BITP_FEE_FEESTA_WRBUSY: u32 = 1;
pub const BITP_FEE_FEESTA_CMDDONE: u32 = 2;
pub const BITP_FEE_FEESTA_WRDONE: u32 = 3;
pub const BITP_FEE_FEESTA_CMDRES: u32 = 4;
/// Command busy
pub const BITM_FEE_FEESTA_CMDBUSY: u16 = 0x0001;
/// Write busy
pub const BITM_FEE_FEESTA_WRBUSY: u16 = 0x0002;
/// Command complete
pub const BITM_FEE_FEESTA_CMDDONE: u16 = 0x0004;
/// Write complete
pub const BITM_FEE_FEESTA_WRDONE: u16 = 0x0008;
/// Command result
pub const BITM_FEE_FEESTA_CMDRES: u16 = 0x0030;
/// Successful completion of a command
pub const ENUM_FEE_FEESTA_CMDRES_SUCCESS: u16 = 0x0000;
/// Attempted signature check or erase of a protected location
pub const ENUM_FEE_FEESTA_CMDRES_PROTECTED: u16 = 0x0010;
/// Read verify error
pub const ENUM_FEE_FEESTA_CMDRES_VERIFYERR: u16 = 0x0020;
/// Command aborted
pub const ENUM_FEE_FEESTA_CMDRES_ABORT: u16 = 0x0030;

// FEE_FEECON0
pub const BITP_FEE_FEECON0_IENCMD: u32 = 0;
pub const BITP_FEE_FEECON0_IENERR: u32 = 1;
pub const BITP_FEE_FEECON0_WREN: u32 = 2;
/// Command complete interrupt enable
pub const BITM_FEE_FEECON0_IENCMD: u16 = 0x0001;
/// Command fail interrupt enable
pub const BITM_FEE_FEECON0_IENERR: u16 = 0x0002;
/// Write enable
pub const BITM_FEE_FEECON0_WREN: u16 = 0x0004;

// FEE_FEECMD
pub const BITP_FEE_FEECMD_CMD: u32 = 0;
/// Commands
pub const BITM_FEE_FEECMD_CMD: u16 = 0x000F;
/// No command executed
pub const ENUM_FEE_FEECMD_CMD_IDLE: u16 = 0x0000;
/// Erase page
pub const ENUM_FEE_FEECMD_CMD_ERASEPAGE: u16 = 0x0001;
/// Signature
pub const ENUM_FEE_FEECMD_CMD_SIGN: u16 = 0x0002;
/// Mass erase
pub const ENUM_FEE_FEECMD_CMD_MASSERASE: u16 = 0x0003;
/// Abort
pub const ENUM_FEE_FEECMD_CMD_ABORT: u16 = 0x0004;

// FEE_FEEADR0H
pub const BITP_FEE_FEEADR0H_VALUE: u32 = 0;
/// Upper bits of the page address
pub const BITM_FEE_FEEADR0H_VALUE: u16 = 0x0007;

// FEE_FEEADR1H
pub const BITP_FEE_FEEADR1H_VALUE: u32 = 0;
/// Upper bits of the page address
pub const BITM_FEE_FEEADR1H_VALUE: u16 = 0x0007;

// FEE_FEESIGH
pub const BITP_FEE_FEESIGH_VALUE: u32 = 0;
/// Upper 8 bits of the signature
pub const BITM_FEE_FEESIGH_VALUE: u16 = 0x00FF;

// FEE_FEECON1
pub const BITP_FEE_FEECON1_DBG: u32 = 0;
pub const BITP_FEE_FEECON1_PRTCT: u32 = 1;
/// Serial wire debug enable
pub const BITM_FEE_FEECON1_DBG: u16 = 0x0001;
/// Protection of the top page
pub const BITM_FEE_FEECON1_PRTCT: u16 = 0x0002;

// FEE_FEEADRAH
pub const BITP_FEE_FEEADRAH_VALUE: u32 = 0;
/// Upper bits of the abort address
pub const BITM_FEE_FEEADRAH_VALUE: u16 = 0x0007;

// FEE_FEEPARCTL
pub const BITP_FEE_FEEPARCTL_PAREN: u32 = 0;
pub const BITP_FEE_FEEPARCTL_PERREXEN: u32 = 1;
/// Parity checking enable
pub const BITM_FEE_FEEPARCTL_PAREN: u16 = 0x0001;
/// Parity error exception enable
pub const BITM_FEE_FEEPARCTL_PERREXEN: u16 = 0x0002;

// FEE_FEEPARSTA
pub const BITP_FEE_FEEPARSTA_PARERR: u32 = 0;
/// Parity error
pub const BITM_FEE_FEEPARSTA_PARERR: u16 = 0x0001;

// FEE_FEEPARADRH
pub const BITP_FEE_FEEPARADRH_VALUE: u32 = 0;
/// Upper bits of the parity error address
pub const BITM_FEE_FEEPARADRH_VALUE: u16 = 0x0007;

// FEE_FEEADR0L
pub const BITP_FEE_FEEADR0L_VALUE: u32 = 0;
/// Lower page address
pub const BITM_FEE_FEEADR0L_VALUE: u16 = 0xFFFF;

// FEE_FEEADR1L
pub const BITP_FEE_FEEADR1L_VALUE: u32 = 0;
/// Lower page address
pub const BITM_FEE_FEEADR1L_VALUE: u16 = 0xFFFF;

// FEE_FEEKEY
pub const BITP_FEE_FEEKEY_VALUE: u32 = 0;
/// Key
pub const BITM_FEE_FEEKEY_VALUE: u16 = 0xFFFF;

// FEE_FEEPROL
pub const BITP_FEE_FEEPROL_VALUE: u32 = 0;
/// Lower halfword of write protection
pub const BITM_FEE_FEEPROL_VALUE: u16 = 0xFFFF;

// FEE_FEEPROH
pub const BITP_FEE_FEEPROH_VALUE: u32 = 0;
/// Upper halfword of write protection
pub const BITM_FEE_FEEPROH_VALUE: u16 = 0xFFFF;

// FEE_FEESIGL
pub const BITP_FEE_FEESIGL_VALUE: u32 = 0;
/// Lower halfword of signature
pub const BITM_FEE_FEESIGL_VALUE: u16 = 0xFFFF;

// FEE_FEEADRAL
pub const BITP_FEE_FEEADRAL_VALUE: u32 = 0;
/// Lower halfword of write abort address
pub const BITM_FEE_FEEADRAL_VALUE: u16 = 0xFFFF;

// FEE_FEEPARADRL
pub const BITP_FEE_FEEPARADRL_VALUE: u32 = 0;
/// Parity Error Address Low
pub const BITM_FEE_FEEPARADRL_VALUE: u16 = 0xFFFF;

// FEE_FEEAEN0
pub const BITP_FEE_FEEAEN0_VALUE: u32 = 0;
/// System IRQ abort enable for interrupts 15 to 0
pub const BITM_FEE_FEEAEN0_VALUE: u16 = 0xFFFF;

// FEE_FEEAEN1
pub const BITP_FEE_FEEAEN1_VALUE: u32 = 0;
/// System IRQ abort enable for interrupts 31 to 16
pub const BITM_FEE_FEEAEN1_VALUE: u16 = 0xFFFF;

// FEE_FEEAEN2
pub const BITP_FEE_FEEAEN2_VALUE: u32 = 0;
/// System IRQ abort enable for interrupts 47 to 32
pub const BITM_FEE_FEEAEN2_VALUE: u16 = 0xFFFF;

// FEE_FEEAEN3
pub const BITP_FEE_FEEAEN3_VALUE: u32 = 0;
/// System IRQ abort enable for interrupts 60 to 48
pub const BITM_FEE_FEEAEN3_VALUE: u16 = 0xFFFF;
