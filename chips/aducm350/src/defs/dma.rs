// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! DMA controller.

// Generated register constants for dma.

// DMA registers
/// DMA Status
pub const REG_DMA_DMASTA: u32 = 0x4001_0000;
/// DMA Configuration
pub const REG_DMA_DMACFG: u32 = 0x4001_0004;
/// DMA channel primary control data base pointer
pub const REG_DMA_DMAPDBPTR: u32 = 0x4001_0008;
/// DMA channel alternate control data base pointer
pub const REG_DMA_DMAADBPTR: u32 = 0x4001_000C;
/// DMA channel software request
pub const REG_DMA_DMASWREQ: u32 = 0x4001_0014;
/// DMA channel request mask set
pub const REG_DMA_DMARMSKSET: u32 = 0x4001_0020;
/// DMA channel request mask clear
pub const REG_DMA_DMARMSKCLR: u32 = 0x4001_0024;
/// DMA channel enable set
pub const REG_DMA_DMAENSET: u32 = 0x4001_0028;
/// DMA channel enable clear
pub const REG_DMA_DMAENCLR: u32 = 0x4001_002C;
/// DMA channel primary-alternate set
pub const REG_DMA_DMAALTSET: u32 = 0x4001_0030;
/// DMA channel primary-alternate clear
pub const REG_DMA_DMAALTCLR: u32 = 0x4001_0034;
/// DMA channel priority set
pub const REG_DMA_DMAPRISET: u32 = 0x4001_0038;
/// DMA channel priority clear
pub const REG_DMA_DMAPRICLR: u32 = 0x4001_003C;
/// DMA Per Channel Error Clear
pub const REG_DMA_DMAERRCHNLCLR: u32 = 0x4001_0048;
/// DMA bus error clear
pub const REG_DMA_DMAERRCLR: u32 = 0x4001_004C;
/// DMA Per Channel Invalid Descriptor Clear
pub const REG_DMA_DMAINVALIDDESCCLR: u32 = 0x4001_0050;
/// DMA channel bytes swap enable set
pub const REG_DMA_DMABSSET: u32 = 0x4001_0800;
/// DMA channel bytes swap enable clear
pub const REG_DMA_DMABSCLR: u32 = 0x4001_0804;
/// DMA channel source address decrement enable set
pub const REG_DMA_DMASRCADSSET: u32 = 0x4001_0810;
/// DMA channel source address decrement enable clear
pub const REG_DMA_DMASRCADCLR: u32 = 0x4001_0814;
/// DMA channel destination address decrement enable set
pub const REG_DMA_DMADSTADSET: u32 = 0x4001_0818;
/// DMA channel destination address decrement enable clear
pub const REG_DMA_DMADSTADCLR: u32 = 0x4001_081C;
/// DMA Controller Revision ID
pub const REG_DMA_DMAREVID: u32 = 0x4001_0FE0;

// DMA_DMASTA
pub const BITP_DMA_DMASTA_ENABLE: u32 = 0;
pub const BITP_DMA_DMASTA_STATE: u32 = 4;
pub const BITP_DMA_DMASTA_CHANM1: u32 = 16;
/// Enable status of the controller
pub const BITM_DMA_DMASTA_ENABLE: u32 = 0x0000_0001;
/// Current state of the control state machine
pub const BITM_DMA_DMASTA_STATE: u32 = 0x0000_00F0;
/// Number of available DMA channels minus 1
pub const BITM_DMA_DMASTA_CHANM1: u32 = 0x001F_0000;
/// Idle
pub const ENUM_DMA_DMASTA_STATE_IDLE: u32 = 0x0000_0000;
/// Reading channel controller data
pub const ENUM_DMA_DMASTA_STATE_RDCHNLDATA: u32 = 0x0000_0010;
/// Reading source data end pointer
pub const ENUM_DMA_DMASTA_STATE_RDSRCENDPTR: u32 = 0x0000_0020;
/// Reading destination data end pointer
pub const ENUM_DMA_DMASTA_STATE_RDDSTENDPTR: u32 = 0x0000_0030;
/// Reading source data
pub const ENUM_DMA_DMASTA_STATE_RDSRCDATA: u32 = 0x0000_0040;
/// Writing destination data
pub const ENUM_DMA_DMASTA_STATE_WRDSTDATA: u32 = 0x0000_0050;
/// Waiting for DMA request to clear
pub const ENUM_DMA_DMASTA_STATE_WAITDMAREQCLR: u32 = 0x0000_0060;
/// Writing channel controller data
pub const ENUM_DMA_DMASTA_STATE_WRCHNLDATA: u32 = 0x0000_0070;
/// Stalled
pub const ENUM_DMA_DMASTA_STATE_STALLED: u32 = 0x0000_0080;
/// Done
pub const ENUM_DMA_DMASTA_STATE_DONE: u32 = 0x0000_0090;
/// Peripheral scatter-gather transition
pub const ENUM_DMA_DMASTA_STATE_SCATRGATHR: u32 = 0x0000_00A0;

// DMA_DMACFG
pub const BITP_DMA_DMACFG_ENABLE: u32 = 0;
/// Controller enable
pub const BITM_DMA_DMACFG_ENABLE: u32 = 0x0000_0001;

// DMA_DMAERRCLR
pub const BITP_DMA_DMAERRCLR_ERROR: u32 = 0;
/// Bus error status
pub const BITM_DMA_DMAERRCLR_ERROR: u32 = 0x0000_00FF;

// DMA_DMAREVID
pub const BITP_DMA_DMAREVID_VALUE: u32 = 0;
/// DMA controller revision ID
pub const BITM_DMA_DMAREVID_VALUE: u32 = 0x0000_00FF;

// DMA_DMAPDBPTR
pub const BITP_DMA_DMAPDBPTR_VALUE: u32 = 0;
/// DMA channel primary control data base pointer
pub const BITM_DMA_DMAPDBPTR_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMAADBPTR
pub const BITP_DMA_DMAADBPTR_VALUE: u32 = 0;
/// DMA channel alternate control data base pointer
pub const BITM_DMA_DMAADBPTR_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMASWREQ
pub const BITP_DMA_DMASWREQ_VALUE: u32 = 0;
/// DMA channel software request
pub const BITM_DMA_DMASWREQ_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMARMSKSET
pub const BITP_DMA_DMARMSKSET_VALUE: u32 = 0;
/// DMA channel request mask set
pub const BITM_DMA_DMARMSKSET_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMARMSKCLR
pub const BITP_DMA_DMARMSKCLR_VALUE: u32 = 0;
/// DMA channel request mask clear
pub const BITM_DMA_DMARMSKCLR_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMAENSET
pub const BITP_DMA_DMAENSET_VALUE: u32 = 0;
/// DMA channel enable set
pub const BITM_DMA_DMAENSET_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMAENCLR
pub const BITP_DMA_DMAENCLR_VALUE: u32 = 0;
/// DMA channel enable clear
pub const BITM_DMA_DMAENCLR_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMAALTSET
pub const BITP_DMA_DMAALTSET_VALUE: u32 = 0;
/// DMA channel primary-alternate set
pub const BITM_DMA_DMAALTSET_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMAALTCLR
pub const BITP_DMA_DMAALTCLR_VALUE: u32 = 0;
/// DMA channel primary-alternate clear
pub const BITM_DMA_DMAALTCLR_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMAPRISET
pub const BITP_DMA_DMAPRISET_VALUE: u32 = 0;
/// DMA channel priority set
pub const BITM_DMA_DMAPRISET_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMAPRICLR
pub const BITP_DMA_DMAPRICLR_VALUE: u32 = 0;
/// DMA channel priority clear
pub const BITM_DMA_DMAPRICLR_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMAERRCHNLCLR
pub const BITP_DMA_DMAERRCHNLCLR_VALUE: u32 = 0;
/// DMA Per Channel Error Clear
pub const BITM_DMA_DMAERRCHNLCLR_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMAINVALIDDESCCLR
pub const BITP_DMA_DMAINVALIDDESCCLR_VALUE: u32 = 0;
/// DMA Per Channel Invalid Descriptor Clear
pub const BITM_DMA_DMAINVALIDDESCCLR_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMABSSET
pub const BITP_DMA_DMABSSET_VALUE: u32 = 0;
/// DMA channel bytes swap enable set
pub const BITM_DMA_DMABSSET_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMABSCLR
pub const BITP_DMA_DMABSCLR_VALUE: u32 = 0;
/// DMA channel bytes swap enable clear
pub const BITM_DMA_DMABSCLR_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMASRCADSSET
pub const BITP_DMA_DMASRCADSSET_VALUE: u32 = 0;
/// DMA channel source address decrement enable set
pub const BITM_DMA_DMASRCADSSET_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMASRCADCLR
pub const BITP_DMA_DMASRCADCLR_VALUE: u32 = 0;
/// DMA channel source address decrement enable clear
pub const BITM_DMA_DMASRCADCLR_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMADSTADSET
pub const BITP_DMA_DMADSTADSET_VALUE: u32 = 0;
/// DMA channel destination address decrement enable set
pub const BITM_DMA_DMADSTADSET_VALUE: u32 = 0xFFFF_FFFF;

// DMA_DMADSTADCLR
pub const BITP_DMA_DMADSTADCLR_VALUE: u32 = 0;
/// DMA channel destination address decrement enable clear
pub const BITM_DMA_DMADSTADCLR_VALUE: u32 = 0xFFFF_FFFF;
