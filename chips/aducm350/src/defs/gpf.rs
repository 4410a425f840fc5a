// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! General purpose flash controller.

// Generated register constants for gpf.

// GPF registers
/// Status
pub const REG_GPF_GPFEESTA: u32 = 0x4001_C000;
/// Command Control
pub const REG_GPF_GPFEECON0: u32 = 0x4001_C004;
/// Command
pub const REG_GPF_GPFEECMD: u32 = 0x4001_C008;
/// Lower page address
pub const REG_GPF_GPFEEADR0L: u32 = 0x4001_C010;
/// Lower page address
pub const REG_GPF_GPFEEADR1L: u32 = 0x4001_C018;
/// Key
pub const REG_GPF_GPFEEKEY: u32 = 0x4001_C020;
/// Lower halfword of signature
pub const REG_GPF_GPFEESIGL: u32 = 0x4001_C030;
/// Upper halfword of signature
pub const REG_GPF_GPFEESIGH: u32 = 0x4001_C034;
/// Lower halfword of write abort address
pub const REG_GPF_GPFEEADRAL: u32 = 0x4001_C048;
/// Upper halfword of write abort address
pub const REG_GPF_GPFEEADRAH: u32 = 0x4001_C04C;
/// System IRQ abort enable for interrupts 15 to 0
pub const REG_GPF_GPFEEAEN0: u32 = 0x4001_C078;
/// System IRQ abort enable for interrupts 31 to 16
pub const REG_GPF_GPFEEAEN1: u32 = 0x4001_C07C;
/// System IRQ abort enable for interrupts 47 to 32
pub const REG_GPF_GPFEEAEN2: u32 = 0x4001_C080;
/// System IRQ abort enable for interrupts 60 to 48
pub const REG_GPF_GPFEEAEN3: u32 = 0x4001_C084;

// GPF_GPFEESTA
pub const BITP_GPF_GPFEESTA_CMDBUSY: u32 = 0;
pub const BITP_GPF_GPFEESTA_WRBUSY: u32 = 1;
pub const BITP_GPF_GPFEESTA_CMDDONE: u32 = 2;
pub const BITP_GPF_GPFEESTA_WRDONE: u32 = 3;
pub const BITP_GPF_GPFEESTA_CMDRES: u32 = 4;
/// Command busy
pub const BITM_GPF_GPFEESTA_CMDBUSY: u16 = 0x0001;
/// Write busy
pub const BITM_GPF_GPFEESTA_WRBUSY: u16 = 0x0002;
/// Command complete
pub const BITM_GPF_GPFEESTA_CMDDONE: u16 = 0x0004;
/// Write complete
pub const BITM_GPF_GPFEESTA_WRDONE: u16 = 0x0008;
/// Command result
pub const BITM_GPF_GPFEESTA_CMDRES: u16 = 0x0030;
/// Successful completion of a command
pub const ENUM_GPF_GPFEESTA_CMDRES_SUCCESS: u16 = 0x0000;
/// Attempted signature check or erase of a protected location
pub const ENUM_GPF_GPFEESTA_CMDRES_PROTECTED: u16 = 0x0010;
/// Read verify error
pub const ENUM_GPF_GPFEESTA_CMDRES_VERIFYERR: u16 = 0x0020;
/// Command aborted
pub const ENUM_GPF_GPFEESTA_CMDRES_ABORT: u16 = 0x0030;

// GPF_GPFEECON0
pub const BITP_GPF_GPFEECON0_IENCMD: u32 = 0;
pub const BITP_GPF_GPFEECON0_IENERR: u32 = 1;
pub const BITP_GPF_GPFEECON0_WREN: u32 = 2;
pub const BITP_GPF_GPFEECON0_DMA_EN: u32 = 3;
/// Command complete interrupt enable
pub const BITM_GPF_GPFEECON0_IENCMD: u16 = 0x0001;
/// Command fail interrupt enable
pub const BITM_GPF_GPFEECON0_IENERR: u16 = 0x0002;
/// Write enable
pub const BITM_GPF_GPFEECON0_WREN: u16 = 0x0004;
/// DMA mode enable
pub const BITM_GPF_GPFEECON0_DMA_EN: u16 = 0x0008;

// GPF_GPFEECMD
pub const BITP_GPF_GPFEECMD_CMD: u32 = 0;
/// Commands
pub const BITM_GPF_GPFEECMD_CMD: u16 = 0x000F;
/// No command executed
pub const ENUM_GPF_GPFEECMD_CMD_IDLE: u16 = 0x0000;
/// Erase page
pub const ENUM_GPF_GPFEECMD_CMD_ERASEPAGE: u16 = 0x0001;
/// Signature
pub const ENUM_GPF_GPFEECMD_CMD_SIGN: u16 = 0x0002;
/// Mass erase
pub const ENUM_GPF_GPFEECMD_CMD_MASSERASE: u16 = 0x0003;
/// Abort
pub const ENUM_GPF_GPFEECMD_CMD_ABORT: u16 = 0x0004;

// GPF_GPFEESIGH
pub const BITP_GPF_GPFEESIGH_VALUE: u32 = 0;
/// Upper 8 bits of the signature
pub const BITM_GPF_GPFEESIGH_VALUE: u16 = 0x00FF;

// GPF_GPFEEADRAH
pub const BITP_GPF_GPFEEADRAH_VALUE: u32 = 0;
/// Upper bits of the abort address
pub const BITM_GPF_GPFEEADRAH_VALUE: u16 = 0x0007;

// GPF_GPFEEADR0L
pub const BITP_GPF_GPFEEADR0L_VALUE: u32 = 0;
/// Lower page address
pub const BITM_GPF_GPFEEADR0L_VALUE: u16 = 0xFFFF;

// GPF_GPFEEADR1L
pub const BITP_GPF_GPFEEADR1L_VALUE: u32 = 0;
/// Lower page address
pub const BITM_GPF_GPFEEADR1L_VALUE: u16 = 0xFFFF;

// GPF_GPFEEKEY
pub const BITP_GPF_GPFEEKEY_VALUE: u32 = 0;
/// Key
pub const BITM_GPF_GPFEEKEY_VALUE: u16 = 0xFFFF;

// GPF_GPFEESIGL
pub const BITP_GPF_GPFEESIGL_VALUE: u32 = 0;
/// Lower halfword of signature
pub const BITM_GPF_GPFEESIGL_VALUE: u16 = 0xFFFF;

// GPF_GPFEEADRAL
pub const BITP_GPF_GPFEEADRAL_VALUE: u32 = 0;
/// Lower halfword of write abort address
pub const BITM_GPF_GPFEEADRAL_VALUE: u16 = 0xFFFF;

// GPF_GPFEEAEN0
pub const BITP_GPF_GPFEEAEN0_VALUE: u32 = 0;
/// System IRQ abort enable for interrupts 15 to 0
pub const BITM_GPF_GPFEEAEN0_VALUE: u16 = 0xFFFF;

// GPF_GPFEEAEN1
pub const BITP_GPF_GPFEEAEN1_VALUE: u32 = 0;
/// System IRQ abort enable for interrupts 31 to 16
pub const BITM_GPF_GPFEEAEN1_VALUE: u16 = 0xFFFF;

// GPF_GPFEEAEN2
pub const BITP_GPF_GPFEEAEN2_VALUE: u32 = 0;
/// System IRQ abort enable for interrupts 47 to 32
pub const BITM_GPF_GPFEEAEN2_VALUE: u16 = 0xFFFF;

// GPF_GPFEEAEN3
pub const BITP_GPF_GPFEEAEN3_VALUE: u32 = 0;
/// System IRQ abort enable for interrupts 60 to 48
pub const BITM_GPF_GPFEEAEN3_VALUE: u16 = 0xFFFF;
