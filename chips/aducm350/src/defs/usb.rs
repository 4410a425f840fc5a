// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! USB controller.

// Generated register constants for usb.

// USB0 registers
/// Function Address Register
pub const REG_USB0_FADDR: u32 = 0x400A_0000;
/// Power and Device Control Register
pub const REG_USB0_POWER: u32 = 0x400A_0001;
/// Transmit Interrupt Register
pub const REG_USB0_INTRTX: u32 = 0x400A_0002;
/// Receive Interrupt Register
pub const REG_USB0_INTRRX: u32 = 0x400A_0004;
/// Transmit Interrupt Enable Register
pub const REG_USB0_INTRTXE: u32 = 0x400A_0006;
/// Receive Interrupt Enable Register
pub const REG_USB0_INTRRXE: u32 = 0x400A_0008;
/// Common Interrupts Register
pub const REG_USB0_IRQ: u32 = 0x400A_000A;
/// Common Interrupts Enable Register
pub const REG_USB0_IEN: u32 = 0x400A_000B;
/// Frame Number Register
pub const REG_USB0_FRAME: u32 = 0x400A_000C;
/// Index Register
pub const REG_USB0_INDEX: u32 = 0x400A_000E;
/// Testmode Register
pub const REG_USB0_TESTMODE: u32 = 0x400A_000F;
/// EPn Transmit Maximum Packet Length Register
pub const REG_USB0_EPI_TXMAXP0: u32 = 0x400A_0010;
/// EPn Transmit Configuration and Status (Host) Register
pub const REG_USB0_EPI_TXCSR_H0: u32 = 0x400A_0012;
/// EP0 Configuration and Status (Peripheral) Register
pub const REG_USB0_EP0I_CSR0_P: u32 = 0x400A_0012;
/// EP0 Configuration and Status (Host) Register
pub const REG_USB0_EP0I_CSR0_H: u32 = 0x400A_0012;
/// EPn Transmit Configuration and Status (Peripheral) Register
pub const REG_USB0_EPI_TXCSR_P0: u32 = 0x400A_0012;
/// EPn Receive Maximum Packet Length Register
pub const REG_USB0_EPI_RXMAXP0: u32 = 0x400A_0014;
/// EPn Receive Configuration and Status (Host) Register
pub const REG_USB0_EPI_RXCSR_H0: u32 = 0x400A_0016;
/// EPn Receive Configuration and Status (Peripheral) Register
pub const REG_USB0_EPI_RXCSR_P0: u32 = 0x400A_0016;
/// EP0 Number of Received Bytes Register
pub const REG_USB0_EP0I_CNT0: u32 = 0x400A_0018;
/// EPn Number of Bytes Received Register
pub const REG_USB0_EPI_RXCNT0: u32 = 0x400A_0018;
/// EP0 Configuration Information Register
pub const REG_USB0_EP0I_CFGDATA0: u32 = 0x400A_001F;
/// FIFO size
pub const REG_USB0_EPI_FIFOSIZE0: u32 = 0x400A_001F;
/// FIFO Word (32-Bit) Register
pub const REG_USB0_FIFO0: u32 = 0x400A_0020;
/// FIFO Word (32-Bit) Register
pub const REG_USB0_FIFO1: u32 = 0x400A_0024;
/// FIFO Word (32-Bit) Register
pub const REG_USB0_FIFO2: u32 = 0x400A_0028;
/// FIFO Word (32-Bit) Register
pub const REG_USB0_FIFO3: u32 = 0x400A_002C;
/// FIFO Half-Word (16-Bit) Register
pub const REG_USB0_FIFOH0: u32 = 0x400A_0020;
/// FIFO Half-Word (16-Bit) Register
pub const REG_USB0_FIFOH1: u32 = 0x400A_0024;
/// FIFO Half-Word (16-Bit) Register
pub const REG_USB0_FIFOH2: u32 = 0x400A_0028;
/// FIFO Half-Word (16-Bit) Register
pub const REG_USB0_FIFOH3: u32 = 0x400A_002C;
/// FIFO Byte (8-Bit) Register
pub const REG_USB0_FIFOB0: u32 = 0x400A_0020;
/// FIFO Byte (8-Bit) Register
pub const REG_USB0_FIFOB1: u32 = 0x400A_0024;
/// FIFO Byte (8-Bit) Register
pub const REG_USB0_FIFOB2: u32 = 0x400A_0028;
/// FIFO Byte (8-Bit) Register
pub const REG_USB0_FIFOB3: u32 = 0x400A_002C;
/// Device Control Register
pub const REG_USB0_DEV_CTL: u32 = 0x400A_0060;
/// Miscellaneous Register
pub const REG_USB0_MISC: u32 = 0x400A_0061;
/// Endpoint Information Register
pub const REG_USB0_EPINFO: u32 = 0x400A_0078;
/// RAM Information Register
pub const REG_USB0_RAMINFO: u32 = 0x400A_0079;
/// Link Information Register
pub const REG_USB0_LINKINFO: u32 = 0x400A_007A;
/// Full-Speed EOF 1 Register
pub const REG_USB0_FS_EOF1: u32 = 0x400A_007D;
/// Software Reset Register
pub const REG_USB0_SOFT_RST: u32 = 0x400A_007F;
/// EPn Transmit Maximum Packet Length Register
pub const REG_USB0_EP0_TXMAXP: u32 = 0x400A_0100;
/// EPn Transmit Maximum Packet Length Register
pub const REG_USB0_EP1_TXMAXP: u32 = 0x400A_0110;
/// EPn Transmit Maximum Packet Length Register
pub const REG_USB0_EP2_TXMAXP: u32 = 0x400A_0120;
/// EPn Transmit Maximum Packet Length Register
pub const REG_USB0_EP3_TXMAXP: u32 = 0x400A_0130;
/// EPn Transmit Configuration and Status (Peripheral) Register
pub const REG_USB0_EP0_TXCSR_P: u32 = 0x400A_0102;
/// EPn Transmit Configuration and Status (Peripheral) Register
pub const REG_USB0_EP1_TXCSR_P: u32 = 0x400A_0112;
/// EPn Transmit Configuration and Status (Peripheral) Register
pub const REG_USB0_EP2_TXCSR_P: u32 = 0x400A_0122;
/// EPn Transmit Configuration and Status (Peripheral) Register
pub const REG_USB0_EP3_TXCSR_P: u32 = 0x400A_0132;
/// EP0 Configuration and Status (Peripheral) Register
pub const REG_USB0_EP0_CSR0_P: u32 = 0x400A_0102;
/// EP0 Configuration and Status (Host) Register
pub const REG_USB0_EP0_CSR0_H: u32 = 0x400A_0102;
/// EPn Transmit Configuration and Status (Host) Register
pub const REG_USB0_EP0_TXCSR_H: u32 = 0x400A_0102;
/// EPn Transmit Configuration and Status (Host) Register
pub const REG_USB0_EP1_TXCSR_H: u32 = 0x400A_0112;
/// EPn Transmit Configuration and Status (Host) Register
pub const REG_USB0_EP2_TXCSR_H: u32 = 0x400A_0122;
/// EPn Transmit Configuration and Status (Host) Register
pub const REG_USB0_EP3_TXCSR_H: u32 = 0x400A_0132;
/// EPn Receive Maximum Packet Length Register
pub const REG_USB0_EP0_RXMAXP: u32 = 0x400A_0104;
/// EPn Receive Maximum Packet Length Register
pub const REG_USB0_EP1_RXMAXP: u32 = 0x400A_0114;
/// EPn Receive Maximum Packet Length Register
pub const REG_USB0_EP2_RXMAXP: u32 = 0x400A_0124;
/// EPn Receive Maximum Packet Length Register
pub const REG_USB0_EP3_RXMAXP: u32 = 0x400A_0134;
/// EPn Receive Configuration and Status (Peripheral) Register
pub const REG_USB0_EP0_RXCSR_P: u32 = 0x400A_0106;
/// EPn Receive Configuration and Status (Peripheral) Register
pub const REG_USB0_EP1_RXCSR_P: u32 = 0x400A_0116;
/// EPn Receive Configuration and Status (Peripheral) Register
pub const REG_USB0_EP2_RXCSR_P: u32 = 0x400A_0126;
/// EPn Receive Configuration and Status (Peripheral) Register
pub const REG_USB0_EP3_RXCSR_P: u32 = 0x400A_0136;
/// EPn Receive Configuration and Status (Host) Register
pub const REG_USB0_EP0_RXCSR_H: u32 = 0x400A_0106;
/// EPn Receive Configuration and Status (Host) Register
pub const REG_USB0_EP1_RXCSR_H: u32 = 0x400A_0116;
/// EPn Receive Configuration and Status (Host) Register
pub const REG_USB0_EP2_RXCSR_H: u32 = 0x400A_0126;
/// EPn Receive Configuration and Status (Host) Register
pub const REG_USB0_EP3_RXCSR_H: u32 = 0x400A_0136;
/// EP0 Number of Received Bytes Register
pub const REG_USB0_EP0_CNT0: u32 = 0x400A_0108;
/// EPn Number of Bytes Received Register
pub const REG_USB0_EP0_RXCNT: u32 = 0x400A_0108;
/// EPn Number of Bytes Received Register
pub const REG_USB0_EP1_RXCNT: u32 = 0x400A_0118;
/// EPn Number of Bytes Received Register
pub const REG_USB0_EP2_RXCNT: u32 = 0x400A_0128;
/// EPn Number of Bytes Received Register
pub const REG_USB0_EP3_RXCNT: u32 = 0x400A_0138;
/// FIFO size
pub const REG_USB0_EP0_FIFOSIZE: u32 = 0x400A_010F;
/// FIFO size
pub const REG_USB0_EP1_FIFOSIZE: u32 = 0x400A_011F;
/// FIFO size
pub const REG_USB0_EP2_FIFOSIZE: u32 = 0x400A_012F;
/// FIFO size
pub const REG_USB0_EP3_FIFOSIZE: u32 = 0x400A_013F;
/// EP0 Configuration Information Register
pub const REG_USB0_EP0_CFGDATA0: u32 = 0x400A_010F;
/// DMA Interrupt Register
pub const REG_USB0_DMA_IRQ: u32 = 0x400A_0200;
/// DMA Channel n Control Register
pub const REG_USB0_DMA0_CTL: u32 = 0x400A_0204;
/// DMA Channel n Control Register
pub const REG_USB0_DMA1_CTL: u32 = 0x400A_0214;
/// DMA Channel n Address Register
pub const REG_USB0_DMA0_ADDR: u32 = 0x400A_0208;
/// DMA Channel n Address Register
pub const REG_USB0_DMA1_ADDR: u32 = 0x400A_0218;
/// DMA Channel n Count Register
pub const REG_USB0_DMA0_CNT: u32 = 0x400A_020C;
/// DMA Channel n Count Register
pub const REG_USB0_DMA1_CNT: u32 = 0x400A_021C;
/// RX Double Packet Buffer Disable for Endpoints 1 to 3
pub const REG_USB0_RXDPKTBUFDIS: u32 = 0x400A_0340;
/// TX Double Packet Buffer Disable for Endpoints 1 to 3
pub const REG_USB0_TXDPKTBUFDIS: u32 = 0x400A_0342;
/// Chirp Timeout Register
pub const REG_USB0_CT_UCH: u32 = 0x400A_0344;
/// LPM Attribute Register
pub const REG_USB0_LPM_ATTR: u32 = 0x400A_0360;
/// LPM Control Register
pub const REG_USB0_LPM_CTL: u32 = 0x400A_0362;
/// LPM Interrupt Enable Register
pub const REG_USB0_LPM_IEN: u32 = 0x400A_0363;
/// LPM Interrupt Status Register
pub const REG_USB0_LPM_IRQ: u32 = 0x400A_0364;
/// FS PHY Control
pub const REG_USB0_PHY_CTL: u32 = 0x400A_039C;
/// FS PHY Status
pub const REG_USB0_PHY_STAT: u32 = 0x400A_039E;
/// RAM Address Register
pub const REG_USB0_RAM_ADDR: u32 = 0x400A_03B0;
/// RAM Data Register
pub const REG_USB0_RAM_DATA: u32 = 0x400A_03B4;

// USB_FADDR
pub const BITP_USB_FADDR_VALUE: u32 = 0;
/// Function Address Value
pub const BITM_USB_FADDR_VALUE: u8 = 0x7F;

// USB_POWER
pub const BITP_USB_POWER_ISOUPDT: u32 = 7;
pub const BITP_USB_POWER_SOFTCONN: u32 = 6;
pub const BITP_USB_POWER_HSEN: u32 = 5;
pub const BITP_USB_POWER_HSMODE: u32 = 4;
pub const BITP_USB_POWER_RESET: u32 = 3;
pub const BITP_USB_POWER_RESUME: u32 = 2;
pub const BITP_USB_POWER_SUSPEND: u32 = 1;
pub const BITP_USB_POWER_SUSEN: u32 = 0;
/// ISO Update Enable
pub const BITM_USB_POWER_ISOUPDT: u8 = 0x80;
/// Soft Connect/Disconnect Enable
pub const BITM_USB_POWER_SOFTCONN: u8 = 0x40;
/// High Speed Mode Enable
pub const BITM_USB_POWER_HSEN: u8 = 0x20;
/// High Speed Mode
pub const BITM_USB_POWER_HSMODE: u8 = 0x10;
/// Reset USB
pub const BITM_USB_POWER_RESET: u8 = 0x08;
/// Resume Mode
pub const BITM_USB_POWER_RESUME: u8 = 0x04;
/// Suspend Mode
pub const BITM_USB_POWER_SUSPEND: u8 = 0x02;
/// SUSPENDM Output Enable
pub const BITM_USB_POWER_SUSEN: u8 = 0x01;
/// Disable ISO Update
pub const ENUM_USB_POWER_NO_ISOUPDT: u8 = 0x00;
/// Enable ISO Update
pub const ENUM_USB_POWER_ISOUPDT: u8 = 0x80;
/// Disable Soft Connect/Disconnect
pub const ENUM_USB_POWER_NO_SOFTCONN: u8 = 0x00;
/// Enable Soft Connect/Disconnect
pub const ENUM_USB_POWER_SOFTCONN: u8 = 0x40;
/// Disable Negotiation for HS Mode
pub const ENUM_USB_POWER_HSDIS: u8 = 0x00;
/// Enable Negotiation for HS Mode
pub const ENUM_USB_POWER_HSEN: u8 = 0x20;
/// Full Speed Mode (HS fail during reset)
pub const ENUM_USB_POWER_NO_HSMODE: u8 = 0x00;
/// High Speed Mode (HS success during reset)
pub const ENUM_USB_POWER_HSMODE: u8 = 0x10;
/// No Reset
pub const ENUM_USB_POWER_NO_RESET: u8 = 0x00;
/// Reset USB
pub const ENUM_USB_POWER_RESET: u8 = 0x08;
/// Disable Resume Signaling
pub const ENUM_USB_POWER_NO_RESUME: u8 = 0x00;
/// Enable Resume Signaling
pub const ENUM_USB_POWER_RESUME: u8 = 0x04;
/// Disable Suspend Mode (Host)
pub const ENUM_USB_POWER_NO_SUSPEND: u8 = 0x00;
/// Enable Suspend Mode (Host)
pub const ENUM_USB_POWER_SUSPEND: u8 = 0x02;
/// Disable SUSPENDM Output
pub const ENUM_USB_POWER_SUSDIS: u8 = 0x00;
/// Enable SUSPENDM Output
pub const ENUM_USB_POWER_SUSEN: u8 = 0x01;

// USB_INTRTX
pub const BITP_USB_INTRTX_EP11: u32 = 11;
pub const BITP_USB_INTRTX_EP10: u32 = 10;
pub const BITP_USB_INTRTX_EP9: u32 = 9;
pub const BITP_USB_INTRTX_EP8: u32 = 8;
pub const BITP_USB_INTRTX_EP7: u32 = 7;
pub const BITP_USB_INTRTX_EP6: u32 = 6;
pub const BITP_USB_INTRTX_EP5: u32 = 5;
pub const BITP_USB_INTRTX_EP4: u32 = 4;
pub const BITP_USB_INTRTX_EP3: u32 = 3;
pub const BITP_USB_INTRTX_EP2: u32 = 2;
pub const BITP_USB_INTRTX_EP1: u32 = 1;
pub const BITP_USB_INTRTX_EP0: u32 = 0;
/// End Point 11 Tx Interrupt
pub const BITM_USB_INTRTX_EP11: u16 = 0x0800;
/// End Point 10 Tx Interrupt
pub const BITM_USB_INTRTX_EP10: u16 = 0x0400;
/// End Point 9 Tx Interrupt
pub const BITM_USB_INTRTX_EP9: u16 = 0x0200;
/// End Point 8 Tx Interrupt
pub const BITM_USB_INTRTX_EP8: u16 = 0x0100;
/// End Point 7 Tx Interrupt
pub const BITM_USB_INTRTX_EP7: u16 = 0x0080;
/// End Point 6 Tx Interrupt
pub const BITM_USB_INTRTX_EP6: u16 = 0x0040;
/// End Point 5 Tx Interrupt
pub const BITM_USB_INTRTX_EP5: u16 = 0x0020;
/// End Point 4 Tx Interrupt
pub const BITM_USB_INTRTX_EP4: u16 = 0x0010;
/// End Point 3 Tx Interrupt
pub const BITM_USB_INTRTX_EP3: u16 = 0x0008;
/// End Point 2 Tx Interrupt
pub const BITM_USB_INTRTX_EP2: u16 = 0x0004;
/// End Point 1 Tx Interrupt
pub const BITM_USB_INTRTX_EP1: u16 = 0x0002;
/// End Point 0 Tx Interrupt
pub const BITM_USB_INTRTX_EP0: u16 = 0x0001;

// USB_INTRRX
pub const BITP_USB_INTRRX_EP11: u32 = 11;
pub const BITP_USB_INTRRX_EP10: u32 = 10;
pub const BITP_USB_INTRRX_EP9: u32 = 9;
pub const BITP_USB_INTRRX_EP8: u32 = 8;
pub const BITP_USB_INTRRX_EP7: u32 = 7;
pub const BITP_USB_INTRRX_EP6: u32 = 6;
pub const BITP_USB_INTRRX_EP5: u32 = 5;
pub const BITP_USB_INTRRX_EP4: u32 = 4;
pub const BITP_USB_INTRRX_EP3: u32 = 3;
pub const BITP_USB_INTRRX_EP2: u32 = 2;
pub const BITP_USB_INTRRX_EP1: u32 = 1;
/// End Point 11 Rx Interrupt.
pub const BITM_USB_INTRRX_EP11: u16 = 0x0800;
/// End Point 10 Rx Interrupt.
pub const BITM_USB_INTRRX_EP10: u16 = 0x0400;
/// End Point 9 Rx Interrupt.
pub const BITM_USB_INTRRX_EP9: u16 = 0x0200;
/// End Point 8 Rx Interrupt.
pub const BITM_USB_INTRRX_EP8: u16 = 0x0100;
/// End Point 7 Rx Interrupt.
pub const BITM_USB_INTRRX_EP7: u16 = 0x0080;
/// End Point 6 Rx Interrupt.
pub const BITM_USB_INTRRX_EP6: u16 = 0x0040;
/// End Point 5 Rx Interrupt.
pub const BITM_USB_INTRRX_EP5: u16 = 0x0020;
/// End Point 4 Rx Interrupt.
pub const BITM_USB_INTRRX_EP4: u16 = 0x0010;
/// End Point 3 Rx Interrupt.
pub const BITM_USB_INTRRX_EP3: u16 = 0x0008;
/// End Point 2 Rx Interrupt.
pub const BITM_USB_INTRRX_EP2: u16 = 0x0004;
/// End Point 1 Rx Interrupt.
pub const BITM_USB_INTRRX_EP1: u16 = 0x0002;

// USB_INTRTXE
pub const BITP_USB_INTRTXE_EP11: u32 = 11;
pub const BITP_USB_INTRTXE_EP10: u32 = 10;
pub const BITP_USB_INTRTXE_EP9: u32 = 9;
pub const BITP_USB_INTRTXE_EP8: u32 = 8;
pub const BITP_USB_INTRTXE_EP7: u32 = 7;
pub const BITP_USB_INTRTXE_EP6: u32 = 6;
pub const BITP_USB_INTRTXE_EP5: u32 = 5;
pub const BITP_USB_INTRTXE_EP4: u32 = 4;
pub const BITP_USB_INTRTXE_EP3: u32 = 3;
pub const BITP_USB_INTRTXE_EP2: u32 = 2;
pub const BITP_USB_INTRTXE_EP1: u32 = 1;
pub const BITP_USB_INTRTXE_EP0: u32 = 0;
/// End Point 11 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP11: u16 = 0x0800;
/// End Point 10 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP10: u16 = 0x0400;
/// End Point 9 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP9: u16 = 0x0200;
/// End Point 8 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP8: u16 = 0x0100;
/// End Point 7 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP7: u16 = 0x0080;
/// End Point 6 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP6: u16 = 0x0040;
/// End Point 5 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP5: u16 = 0x0020;
/// End Point 4 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP4: u16 = 0x0010;
/// End Point 3 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP3: u16 = 0x0008;
/// End Point 2 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP2: u16 = 0x0004;
/// End Point 1 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP1: u16 = 0x0002;
/// End Point 0 Tx Interrupt Enable
pub const BITM_USB_INTRTXE_EP0: u16 = 0x0001;

// USB_INTRRXE
pub const BITP_USB_INTRRXE_EP11: u32 = 11;
pub const BITP_USB_INTRRXE_EP10: u32 = 10;
pub const BITP_USB_INTRRXE_EP9: u32 = 9;
pub const BITP_USB_INTRRXE_EP8: u32 = 8;
pub const BITP_USB_INTRRXE_EP7: u32 = 7;
pub const BITP_USB_INTRRXE_EP6: u32 = 6;
pub const BITP_USB_INTRRXE_EP5: u32 = 5;
pub const BITP_USB_INTRRXE_EP4: u32 = 4;
pub const BITP_USB_INTRRXE_EP3: u32 = 3;
pub const BITP_USB_INTRRXE_EP2: u32 = 2;
pub const BITP_USB_INTRRXE_EP1: u32 = 1;
/// End Point 11 Rx Interrupt Enable
pub const BITM_USB_INTRRXE_EP11: u16 = 0x0800;
/// End Point 10 Rx Interrupt Enable
pub const BITM_USB_INTRRXE_EP10: u16 = 0x0400;
/// End Point 9 Rx Interrupt Enable
pub const BITM_USB_INTRRXE_EP9: u16 = 0x0200;
/// End Point 8 Rx Interrupt Enable
pub const BITM_USB_INTRRXE_EP8: u16 = 0x0100;
/// End Point 7 Rx Interrupt Enable
pub const BITM_USB_INTRRXE_EP7: u16 = 0x0080;
/// End Point 6 Rx Interrupt Enable
pub const BITM_USB_INTRRXE_EP6: u16 = 0x0040;
/// End Point 5 Rx Interrupt Enable
pub const BITM_USB_INTRRXE_EP5: u16 = 0x0020;
/// End Point 4 Rx Interrupt Enable
pub const BITM_USB_INTRRXE_EP4: u16 = 0x0010;
/// End Point 3 Rx Interrupt Enable
pub const BITM_USB_INTRRXE_EP3: u16 = 0x0008;
/// End Point 2 Rx Interrupt Enable
pub const BITM_USB_INTRRXE_EP2: u16 = 0x0004;
/// End Point 1 Rx Interrupt Enable
pub const BITM_USB_INTRRXE_EP1: u16 = 0x0002;

// USB_IRQ
pub const BITP_USB_IRQ_VBUSERR: u32 = 7;
pub const BITP_USB_IRQ_SESSREQ: u32 = 6;
pub const BITP_USB_IRQ_DISCON: u32 = 5;
pub const BITP_USB_IRQ_CON: u32 = 4;
pub const BITP_USB_IRQ_SOF: u32 = 3;
pub const BITP_USB_IRQ_RSTBABBLE: u32 = 2;
pub const BITP_USB_IRQ_RESUME: u32 = 1;
pub const BITP_USB_IRQ_SUSPEND: u32 = 0;
/// VBUS Threshold Indicator
pub const BITM_USB_IRQ_VBUSERR: u8 = 0x80;
/// Session Request Indicator
pub const BITM_USB_IRQ_SESSREQ: u8 = 0x40;
/// Disconnect Indicator
pub const BITM_USB_IRQ_DISCON: u8 = 0x20;
/// Connection Indicator
pub const BITM_USB_IRQ_CON: u8 = 0x10;
/// Start-of-frame Indicator
pub const BITM_USB_IRQ_SOF: u8 = 0x08;
/// Reset/Babble Indicator
pub const BITM_USB_IRQ_RSTBABBLE: u8 = 0x04;
/// Resume Indicator
pub const BITM_USB_IRQ_RESUME: u8 = 0x02;
/// Suspend Indicator
pub const BITM_USB_IRQ_SUSPEND: u8 = 0x01;
/// No Interrupt
pub const ENUM_USB_IRQ_NO_VBUSERR: u8 = 0x00;
/// Interrupt Pending
pub const ENUM_USB_IRQ_VBUSERR: u8 = 0x80;
/// No Interrupt
pub const ENUM_USB_IRQ_NO_SESSREQ: u8 = 0x00;
/// Interrupt Pending
pub const ENUM_USB_IRQ_SESSREQ: u8 = 0x40;
/// No Interrupt
pub const ENUM_USB_IRQ_NO_DISCON: u8 = 0x00;
/// Interrupt Pending
pub const ENUM_USB_IRQ_DISCON: u8 = 0x20;
/// No Interrupt
pub const ENUM_USB_IRQ_NO_CON: u8 = 0x00;
/// Interrupt Pending
pub const ENUM_USB_IRQ_CON: u8 = 0x10;
/// No Interrupt
pub const ENUM_USB_IRQ_NO_SOF: u8 = 0x00;
/// Interrupt Pending
pub const ENUM_USB_IRQ_SOF: u8 = 0x08;
/// No Interrupt
pub const ENUM_USB_IRQ_NO_RSTBABBLE: u8 = 0x00;
/// Interrupt Pending
pub const ENUM_USB_IRQ_RSTBABBLE: u8 = 0x04;
/// No Interrupt
pub const ENUM_USB_IRQ_NO_RESUME: u8 = 0x00;
/// Interrupt Pending
pub const ENUM_USB_IRQ_RESUME: u8 = 0x02;
/// No Interrupt
pub const ENUM_USB_IRQ_NO_SUSPEND: u8 = 0x00;
/// Interrupt Pending
pub const ENUM_USB_IRQ_SUSPEND: u8 = 0x01;

// USB_IEN
pub const BITP_USB_IEN_VBUSERR: u32 = 7;
pub const BITP_USB_IEN_SESSREQ: u32 = 6;
pub const BITP_USB_IEN_DISCON: u32 = 5;
pub const BITP_USB_IEN_CON: u32 = 4;
pub const BITP_USB_IEN_SOF: u32 = 3;
pub const BITP_USB_IEN_RSTBABBLE: u32 = 2;
pub const BITP_USB_IEN_RESUME: u32 = 1;
pub const BITP_USB_IEN_SUSPEND: u32 = 0;
/// VBUS Threshold Indicator Interrupt Enable
pub const BITM_USB_IEN_VBUSERR: u8 = 0x80;
/// Session Request Indicator Interrupt Enable
pub const BITM_USB_IEN_SESSREQ: u8 = 0x40;
/// Disconnect Indicator Interrupt Enable
pub const BITM_USB_IEN_DISCON: u8 = 0x20;
/// Connection Indicator Interrupt Enable
pub const BITM_USB_IEN_CON: u8 = 0x10;
/// Start-of-frame Indicator Interrupt Enable
pub const BITM_USB_IEN_SOF: u8 = 0x08;
/// Reset/Babble Indicator Interrupt Enable
pub const BITM_USB_IEN_RSTBABBLE: u8 = 0x04;
/// Resume Indicator Interrupt Enable
pub const BITM_USB_IEN_RESUME: u8 = 0x02;
/// Suspend Indicator Interrupt Enable
pub const BITM_USB_IEN_SUSPEND: u8 = 0x01;
/// Disable Interrupt
pub const ENUM_USB_IEN_VBUSERRDIS: u8 = 0x00;
/// Enable Interrupt
pub const ENUM_USB_IEN_VBUSERREN: u8 = 0x80;
/// Disable Interrupt
pub const ENUM_USB_IEN_SESSREQDIS: u8 = 0x00;
/// Enable Interrupt
pub const ENUM_USB_IEN_SESSREQEN: u8 = 0x40;
/// Disable Interrupt
pub const ENUM_USB_IEN_DISCONDIS: u8 = 0x00;
/// Enable Interrupt
pub const ENUM_USB_IEN_DISCONEN: u8 = 0x20;
/// Disable Interrupt
pub const ENUM_USB_IEN_CONDIS: u8 = 0x00;
/// Enable Interrupt
pub const ENUM_USB_IEN_CONEN: u8 = 0x10;
/// Disable Interrupt
pub const ENUM_USB_IEN_SOFDIS: u8 = 0x00;
/// Enable Interrupt
pub const ENUM_USB_IEN_SOFEN: u8 = 0x08;
/// Disable Interrupt
pub const ENUM_USB_IEN_RSTBABBLEDIS: u8 = 0x00;
/// Enable Interrupt
pub const ENUM_USB_IEN_RSTBABBLEEN: u8 = 0x04;
/// Disable Interrupt
pub const ENUM_USB_IEN_RESUMEDIS: u8 = 0x00;
/// Enable Interrupt
pub const ENUM_USB_IEN_RESUMEEN: u8 = 0x02;
/// Disable Interrupt
pub const ENUM_USB_IEN_SUSPENDDIS: u8 = 0x00;
/// Enable Interrupt
pub const ENUM_USB_IEN_SUSPENDEN: u8 = 0x01;

// USB_FRAME
pub const BITP_USB_FRAME_VALUE: u32 = 0;
/// Frame Number Value
pub const BITM_USB_FRAME_VALUE: u16 = 0x07FF;

// USB_INDEX
pub const BITP_USB_INDEX_EP: u32 = 0;
/// Endpoint Index
pub const BITM_USB_INDEX_EP: u8 = 0x0F;

// USB_TESTMODE
pub const BITP_USB_TESTMODE_FIFOACCESS: u32 = 6;
pub const BITP_USB_TESTMODE_TESTPACKET: u32 = 3;
pub const BITP_USB_TESTMODE_TESTK: u32 = 2;
pub const BITP_USB_TESTMODE_TESTJ: u32 = 1;
pub const BITP_USB_TESTMODE_TESTSE0NAK: u32 = 0;
/// FIFO Access
pub const BITM_USB_TESTMODE_FIFOACCESS: u8 = 0x40;
/// Test_Packet Mode
pub const BITM_USB_TESTMODE_TESTPACKET: u8 = 0x08;
/// Test_K Mode
pub const BITM_USB_TESTMODE_TESTK: u8 = 0x04;
/// Test_J Mode
pub const BITM_USB_TESTMODE_TESTJ: u8 = 0x02;
/// Test SE0 NAK
pub const BITM_USB_TESTMODE_TESTSE0NAK: u8 = 0x01;

// USB_EPI_TXMAXP
pub const BITP_USB_EPI_TXMAXP_MULTM1: u32 = 11;
pub const BITP_USB_EPI_TXMAXP_MAXPAY: u32 = 0;
/// Multi-Packets per Micro-frame
pub const BITM_USB_EPI_TXMAXP_MULTM1: u16 = 0x1800;
/// Maximum Payload
pub const BITM_USB_EPI_TXMAXP_MAXPAY: u16 = 0x07FF;

// USB_EPI_TXCSR_P
pub const BITP_USB_EPI_TXCSR_P_AUTOSET: u32 = 15;
pub const BITP_USB_EPI_TXCSR_P_ISO: u32 = 14;
pub const BITP_USB_EPI_TXCSR_P_DMAREQEN: u32 = 12;
pub const BITP_USB_EPI_TXCSR_P_FRCDATATGL: u32 = 11;
pub const BITP_USB_EPI_TXCSR_P_DMAREQMODE: u32 = 10;
pub const BITP_USB_EPI_TXCSR_P_INCOMPTX: u32 = 7;
pub const BITP_USB_EPI_TXCSR_P_CLRDATATGL: u32 = 6;
pub const BITP_USB_EPI_TXCSR_P_SENTSTALL: u32 = 5;
pub const BITP_USB_EPI_TXCSR_P_SENDSTALL: u32 = 4;
pub const BITP_USB_EPI_TXCSR_P_FLUSHFIFO: u32 = 3;
pub const BITP_USB_EPI_TXCSR_P_URUNERR: u32 = 2;
pub const BITP_USB_EPI_TXCSR_P_NEFIFO: u32 = 1;
pub const BITP_USB_EPI_TXCSR_P_TXPKTRDY: u32 = 0;
/// TxPkRdy Autoset Enable
pub const BITM_USB_EPI_TXCSR_P_AUTOSET: u16 = 0x8000;
/// Isochronous Transfers Enable
pub const BITM_USB_EPI_TXCSR_P_ISO: u16 = 0x4000;
/// DMA Request Enable Tx EP
pub const BITM_USB_EPI_TXCSR_P_DMAREQEN: u16 = 0x1000;
/// Force Data Toggle
pub const BITM_USB_EPI_TXCSR_P_FRCDATATGL: u16 = 0x0800;
/// DMA Mode Select
pub const BITM_USB_EPI_TXCSR_P_DMAREQMODE: u16 = 0x0400;
/// Incomplete Tx
pub const BITM_USB_EPI_TXCSR_P_INCOMPTX: u16 = 0x0080;
/// Clear Endpoint Data Toggle
pub const BITM_USB_EPI_TXCSR_P_CLRDATATGL: u16 = 0x0040;
/// Sent STALL
pub const BITM_USB_EPI_TXCSR_P_SENTSTALL: u16 = 0x0020;
/// Send STALL
pub const BITM_USB_EPI_TXCSR_P_SENDSTALL: u16 = 0x0010;
/// Flush Endpoint FIFO
pub const BITM_USB_EPI_TXCSR_P_FLUSHFIFO: u16 = 0x0008;
/// Underrun Error
pub const BITM_USB_EPI_TXCSR_P_URUNERR: u16 = 0x0004;
/// Not Empty FIFO
pub const BITM_USB_EPI_TXCSR_P_NEFIFO: u16 = 0x0002;
/// Tx Packet Ready
pub const BITM_USB_EPI_TXCSR_P_TXPKTRDY: u16 = 0x0001;
/// Disable Autoset
pub const ENUM_USB_EPI_TXCSR_P_NO_AUTOSET: u16 = 0x0000;
/// Enable Autoset
pub const ENUM_USB_EPI_TXCSR_P_AUTOSET: u16 = 0x8000;
/// Disable Tx EP Isochronous Transfers
pub const ENUM_USB_EPI_TXCSR_P_ISODIS: u16 = 0x0000;
/// Enable Tx EP Isochronous Transfers
pub const ENUM_USB_EPI_TXCSR_P_ISOEN: u16 = 0x4000;
/// Disable DMA Request
pub const ENUM_USB_EPI_TXCSR_P_DMAREQDIS: u16 = 0x0000;
/// Enable DMA Request
pub const ENUM_USB_EPI_TXCSR_P_DMAREQEN: u16 = 0x1000;
/// No Action
pub const ENUM_USB_EPI_TXCSR_P_NO_FRCTGL: u16 = 0x0000;
/// Toggle Endpoint Data
pub const ENUM_USB_EPI_TXCSR_P_FRCTGL: u16 = 0x0800;
/// DMA Request Mode 0
pub const ENUM_USB_EPI_TXCSR_P_DMARQMODE0: u16 = 0x0000;
/// DMA Request Mode 1
pub const ENUM_USB_EPI_TXCSR_P_DMARQMODE1: u16 = 0x0400;
/// No Status
pub const ENUM_USB_EPI_TXCSR_P_NO_INCOMP: u16 = 0x0000;
/// Incomplete Tx (Insufficient IN Tokens)
pub const ENUM_USB_EPI_TXCSR_P_INCOMP: u16 = 0x0080;
/// No Action
pub const ENUM_USB_EPI_TXCSR_P_NO_CLRTGL: u16 = 0x0000;
/// Reset EP Data Toggle to 0
pub const ENUM_USB_EPI_TXCSR_P_CLRTGL: u16 = 0x0040;
/// No Status
pub const ENUM_USB_EPI_TXCSR_P_NO_STALSNT: u16 = 0x0000;
/// STALL Handshake Transmitted
pub const ENUM_USB_EPI_TXCSR_P_STALSNT: u16 = 0x0020;
/// No Request
pub const ENUM_USB_EPI_TXCSR_P_NO_STALL: u16 = 0x0000;
/// Request STALL Handshake Transmission
pub const ENUM_USB_EPI_TXCSR_P_STALL: u16 = 0x0010;
/// No Flush
pub const ENUM_USB_EPI_TXCSR_P_NO_FLUSH: u16 = 0x0000;
/// Flush endpoint FIFO
pub const ENUM_USB_EPI_TXCSR_P_FLUSH: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EPI_TXCSR_P_NO_URUNERR: u16 = 0x0000;
/// Underrun Error
pub const ENUM_USB_EPI_TXCSR_P_URUNERR: u16 = 0x0004;
/// FIFO Empty
pub const ENUM_USB_EPI_TXCSR_P_NO_FIFONE: u16 = 0x0000;
/// FIFO Not Empty
pub const ENUM_USB_EPI_TXCSR_P_FIFONE: u16 = 0x0002;
/// No Tx Packet
pub const ENUM_USB_EPI_TXCSR_P_NO_PKTRDY: u16 = 0x0000;
/// Tx Packet in Endpoint FIFO
pub const ENUM_USB_EPI_TXCSR_P_PKTRDY: u16 = 0x0001;

// USB_EPI_TXCSR_H
pub const BITP_USB_EPI_TXCSR_H_AUTOSET: u32 = 15;
pub const BITP_USB_EPI_TXCSR_H_DMAREQEN: u32 = 12;
pub const BITP_USB_EPI_TXCSR_H_FRCDATATGL: u32 = 11;
pub const BITP_USB_EPI_TXCSR_H_DMAREQMODE: u32 = 10;
pub const BITP_USB_EPI_TXCSR_H_DATGLEN: u32 = 9;
pub const BITP_USB_EPI_TXCSR_H_DATGL: u32 = 8;
pub const BITP_USB_EPI_TXCSR_H_NAKTOINCMP: u32 = 7;
pub const BITP_USB_EPI_TXCSR_H_CLRDATATGL: u32 = 6;
pub const BITP_USB_EPI_TXCSR_H_RXSTALL: u32 = 5;
pub const BITP_USB_EPI_TXCSR_H_SETUPPKT: u32 = 4;
pub const BITP_USB_EPI_TXCSR_H_FLUSHFIFO: u32 = 3;
pub const BITP_USB_EPI_TXCSR_H_TXTOERR: u32 = 2;
pub const BITP_USB_EPI_TXCSR_H_NEFIFO: u32 = 1;
pub const BITP_USB_EPI_TXCSR_H_TXPKTRDY: u32 = 0;
/// TxPkRdy Autoset Enable
pub const BITM_USB_EPI_TXCSR_H_AUTOSET: u16 = 0x8000;
/// DMA Request Enable Tx EP
pub const BITM_USB_EPI_TXCSR_H_DMAREQEN: u16 = 0x1000;
/// Force Data Toggle
pub const BITM_USB_EPI_TXCSR_H_FRCDATATGL: u16 = 0x0800;
/// DMA Mode Select
pub const BITM_USB_EPI_TXCSR_H_DMAREQMODE: u16 = 0x0400;
/// Data Toggle Write Enable
pub const BITM_USB_EPI_TXCSR_H_DATGLEN: u16 = 0x0200;
/// Data Toggle
pub const BITM_USB_EPI_TXCSR_H_DATGL: u16 = 0x0100;
/// NAK Timeout Incomplete
pub const BITM_USB_EPI_TXCSR_H_NAKTOINCMP: u16 = 0x0080;
/// Clear Endpoint Data Toggle
pub const BITM_USB_EPI_TXCSR_H_CLRDATATGL: u16 = 0x0040;
/// Rx STALL
pub const BITM_USB_EPI_TXCSR_H_RXSTALL: u16 = 0x0020;
/// Setup Packet
pub const BITM_USB_EPI_TXCSR_H_SETUPPKT: u16 = 0x0010;
/// Flush Endpoint FIFO
pub const BITM_USB_EPI_TXCSR_H_FLUSHFIFO: u16 = 0x0008;
/// Tx Timeout Error
pub const BITM_USB_EPI_TXCSR_H_TXTOERR: u16 = 0x0004;
/// Not Empty FIFO
pub const BITM_USB_EPI_TXCSR_H_NEFIFO: u16 = 0x0002;
/// Tx Packet Ready
pub const BITM_USB_EPI_TXCSR_H_TXPKTRDY: u16 = 0x0001;
/// Disable Autoset
pub const ENUM_USB_EPI_TXCSR_H_NO_AUTOSET: u16 = 0x0000;
/// Enable Autoset
pub const ENUM_USB_EPI_TXCSR_H_AUTOSET: u16 = 0x8000;
/// Disable DMA Request
pub const ENUM_USB_EPI_TXCSR_H_DMAREQDIS: u16 = 0x0000;
/// Enable DMA Request
pub const ENUM_USB_EPI_TXCSR_H_DMAREQEN: u16 = 0x1000;
/// No Action
pub const ENUM_USB_EPI_TXCSR_H_NO_FRCTGL: u16 = 0x0000;
/// Toggle Endpoint Data
pub const ENUM_USB_EPI_TXCSR_H_FRCTGL: u16 = 0x0800;
/// DMA Request Mode 0
pub const ENUM_USB_EPI_TXCSR_H_DMARQMODE0: u16 = 0x0000;
/// DMA Request Mode 1
pub const ENUM_USB_EPI_TXCSR_H_DMARQMODE1: u16 = 0x0400;
/// Disable Write to DATGL
pub const ENUM_USB_EPI_TXCSR_H_NO_DATGLEN: u16 = 0x0000;
/// Enable Write to DATGL
pub const ENUM_USB_EPI_TXCSR_H_DATGLEN: u16 = 0x0200;
/// DATA0 is set
pub const ENUM_USB_EPI_TXCSR_H_NO_DATGL: u16 = 0x0000;
/// DATA1 is set
pub const ENUM_USB_EPI_TXCSR_H_DATGL: u16 = 0x0100;
/// No Status
pub const ENUM_USB_EPI_TXCSR_H_NO_NAKTO: u16 = 0x0000;
/// NAK Timeout Over Maximum
pub const ENUM_USB_EPI_TXCSR_H_NAKTO: u16 = 0x0080;
/// No Action
pub const ENUM_USB_EPI_TXCSR_H_NO_CLRTGL: u16 = 0x0000;
/// Reset EP Data Toggle to 0
pub const ENUM_USB_EPI_TXCSR_H_CLRTGL: u16 = 0x0040;
/// No Status
pub const ENUM_USB_EPI_TXCSR_H_NO_RXSTALL: u16 = 0x0000;
/// Stall Received from Device
pub const ENUM_USB_EPI_TXCSR_H_RXSTALL: u16 = 0x0020;
/// No Request
pub const ENUM_USB_EPI_TXCSR_H_NO_SETUPPK: u16 = 0x0000;
/// Send SETUP Token
pub const ENUM_USB_EPI_TXCSR_H_SETUPPKT: u16 = 0x0010;
/// No Flush
pub const ENUM_USB_EPI_TXCSR_H_NO_FLUSH: u16 = 0x0000;
/// Flush endpoint FIFO
pub const ENUM_USB_EPI_TXCSR_H_FLUSH: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EPI_TXCSR_H_NO_TXTOERR: u16 = 0x0000;
/// Tx Timeout Error
pub const ENUM_USB_EPI_TXCSR_H_TXTOERR: u16 = 0x0004;
/// FIFO Empty
pub const ENUM_USB_EPI_TXCSR_H_NO_NEFIFO: u16 = 0x0000;
/// FIFO Not Empty
pub const ENUM_USB_EPI_TXCSR_H_NEFIFO: u16 = 0x0002;
/// No Tx Packet
pub const ENUM_USB_EPI_TXCSR_H_NO_PKTRDY: u16 = 0x0000;
/// Tx Packet in Endpoint FIFO
pub const ENUM_USB_EPI_TXCSR_H_PKTRDY: u16 = 0x0001;

// USB_EP0I_CSR_P
pub const BITP_USB_EP0I_CSR_P_FLUSHFIFO: u32 = 8;
pub const BITP_USB_EP0I_CSR_P_SSETUPEND: u32 = 7;
pub const BITP_USB_EP0I_CSR_P_SPKTRDY: u32 = 6;
pub const BITP_USB_EP0I_CSR_P_SENDSTALL: u32 = 5;
pub const BITP_USB_EP0I_CSR_P_SETUPEND: u32 = 4;
pub const BITP_USB_EP0I_CSR_P_DATAEND: u32 = 3;
pub const BITP_USB_EP0I_CSR_P_SENTSTALL: u32 = 2;
pub const BITP_USB_EP0I_CSR_P_TXPKTRDY: u32 = 1;
pub const BITP_USB_EP0I_CSR_P_RXPKTRDY: u32 = 0;
/// Flush Endpoint FIFO
pub const BITM_USB_EP0I_CSR_P_FLUSHFIFO: u16 = 0x0100;
/// Service Setup End
pub const BITM_USB_EP0I_CSR_P_SSETUPEND: u16 = 0x0080;
/// Service Rx Packet Ready
pub const BITM_USB_EP0I_CSR_P_SPKTRDY: u16 = 0x0040;
/// Send Stall
pub const BITM_USB_EP0I_CSR_P_SENDSTALL: u16 = 0x0020;
/// Setup End
pub const BITM_USB_EP0I_CSR_P_SETUPEND: u16 = 0x0010;
/// Data End
pub const BITM_USB_EP0I_CSR_P_DATAEND: u16 = 0x0008;
/// Sent Stall
pub const BITM_USB_EP0I_CSR_P_SENTSTALL: u16 = 0x0004;
/// Tx Packet Ready
pub const BITM_USB_EP0I_CSR_P_TXPKTRDY: u16 = 0x0002;
/// Rx Packet Ready
pub const BITM_USB_EP0I_CSR_P_RXPKTRDY: u16 = 0x0001;
/// No Flush
pub const ENUM_USB_EP0I_CSR_P_NO_FLUSH: u16 = 0x0000;
/// Flush Endpoint FIFO
pub const ENUM_USB_EP0I_CSR_P_FLUSH: u16 = 0x0100;
/// No Action
pub const ENUM_USB_EP0I_CSR_P_NOSSETUPEND: u16 = 0x0000;
/// Clear SETUPEND Bit
pub const ENUM_USB_EP0I_CSR_P_SSETUPEND: u16 = 0x0080;
/// No Action
pub const ENUM_USB_EP0I_CSR_P_NO_SPKTRDY: u16 = 0x0000;
/// Clear RXPKTRDY Bit
pub const ENUM_USB_EP0I_CSR_P_SPKTRDY: u16 = 0x0040;
/// No Action
pub const ENUM_USB_EP0I_CSR_P_NO_STALL: u16 = 0x0000;
/// Terminate Current Transaction
pub const ENUM_USB_EP0I_CSR_P_STALL: u16 = 0x0020;
/// No Status
pub const ENUM_USB_EP0I_CSR_P_NO_SETUPEND: u16 = 0x0000;
/// Setup Ended before DATAEND
pub const ENUM_USB_EP0I_CSR_P_SETUPEND: u16 = 0x0010;
/// No Status
pub const ENUM_USB_EP0I_CSR_P_NO_DATAEND: u16 = 0x0000;
/// Data End Condition
pub const ENUM_USB_EP0I_CSR_P_DATAEND: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EP0I_CSR_P_NO_STALSNT: u16 = 0x0000;
/// Transmitted STALL Handshake
pub const ENUM_USB_EP0I_CSR_P_STALSNT: u16 = 0x0004;
pub const ENUM_USB_EP0I_CSR_P_NO_TXPKTRDY: u16 = 0x0000;
/// Set this bit after loading a data packet into the FIFO
pub const ENUM_USB_EP0I_CSR_P_TXPKTRDY: u16 = 0x0002;
/// No Rx Packet
pub const ENUM_USB_EP0I_CSR_P_NO_PKTRDY: u16 = 0x0000;
/// Rx Packet in Endpoint FIFO
pub const ENUM_USB_EP0I_CSR_P_PKTRDY: u16 = 0x0001;

// USB_EP0I_CSR_H
pub const BITP_USB_EP0I_CSR_H_DISPING: u32 = 11;
pub const BITP_USB_EP0I_CSR_H_DATGLEN: u32 = 10;
pub const BITP_USB_EP0I_CSR_H_DATGL: u32 = 9;
pub const BITP_USB_EP0I_CSR_H_FLUSHFIFO: u32 = 8;
pub const BITP_USB_EP0I_CSR_H_NAKTO: u32 = 7;
pub const BITP_USB_EP0I_CSR_H_STATUSPKT: u32 = 6;
pub const BITP_USB_EP0I_CSR_H_REQPKT: u32 = 5;
pub const BITP_USB_EP0I_CSR_H_TOERR: u32 = 4;
pub const BITP_USB_EP0I_CSR_H_SETUPPKT: u32 = 3;
pub const BITP_USB_EP0I_CSR_H_RXSTALL: u32 = 2;
pub const BITP_USB_EP0I_CSR_H_TXPKTRDY: u32 = 1;
pub const BITP_USB_EP0I_CSR_H_RXPKTRDY: u32 = 0;
/// Disable Ping
pub const BITM_USB_EP0I_CSR_H_DISPING: u16 = 0x0800;
/// Data Toggle Write Enable
pub const BITM_USB_EP0I_CSR_H_DATGLEN: u16 = 0x0400;
/// Data Toggle
pub const BITM_USB_EP0I_CSR_H_DATGL: u16 = 0x0200;
/// Flush Endpoint FIFO
pub const BITM_USB_EP0I_CSR_H_FLUSHFIFO: u16 = 0x0100;
/// NAK Timeout
pub const BITM_USB_EP0I_CSR_H_NAKTO: u16 = 0x0080;
/// Status Packet
pub const BITM_USB_EP0I_CSR_H_STATUSPKT: u16 = 0x0040;
/// Request Packet
pub const BITM_USB_EP0I_CSR_H_REQPKT: u16 = 0x0020;
/// Timeout Error
pub const BITM_USB_EP0I_CSR_H_TOERR: u16 = 0x0010;
/// Setup Packet
pub const BITM_USB_EP0I_CSR_H_SETUPPKT: u16 = 0x0008;
/// Rx Stall
pub const BITM_USB_EP0I_CSR_H_RXSTALL: u16 = 0x0004;
/// Tx Packet Ready
pub const BITM_USB_EP0I_CSR_H_TXPKTRDY: u16 = 0x0002;
/// Rx Packet Ready
pub const BITM_USB_EP0I_CSR_H_RXPKTRDY: u16 = 0x0001;
/// Issue PING tokens
pub const ENUM_USB_EP0I_CSR_H_NO_DISPING: u16 = 0x0000;
/// Do not issue PING
pub const ENUM_USB_EP0I_CSR_H_DISPING: u16 = 0x0800;
/// Disable Write to DATGL
pub const ENUM_USB_EP0I_CSR_H_NO_DATGLEN: u16 = 0x0000;
/// Enable Write to DATGL
pub const ENUM_USB_EP0I_CSR_H_DATGLEN: u16 = 0x0400;
/// DATA0 is Set
pub const ENUM_USB_EP0I_CSR_H_NO_DATATGL: u16 = 0x0000;
/// DATA1 is Set
pub const ENUM_USB_EP0I_CSR_H_DATATGL: u16 = 0x0200;
/// No Flush
pub const ENUM_USB_EP0I_CSR_H_NO_FLUSH: u16 = 0x0000;
/// Flush Endpoint FIFO
pub const ENUM_USB_EP0I_CSR_H_FLUSH: u16 = 0x0100;
/// No Status
pub const ENUM_USB_EP0I_CSR_H_NO_NAKTO: u16 = 0x0000;
/// Endpoint Halted (NAK Timeout)
pub const ENUM_USB_EP0I_CSR_H_NAKTO: u16 = 0x0080;
/// No Request
pub const ENUM_USB_EP0I_CSR_H_NO_STATPKT: u16 = 0x0000;
/// Request Status Transaction
pub const ENUM_USB_EP0I_CSR_H_STATPKT: u16 = 0x0040;
/// No Request
pub const ENUM_USB_EP0I_CSR_H_NO_REQPKT: u16 = 0x0000;
/// Send IN Tokens to Device
pub const ENUM_USB_EP0I_CSR_H_REQPKT: u16 = 0x0020;
/// No Status
pub const ENUM_USB_EP0I_CSR_H_NO_TOERR: u16 = 0x0000;
/// Timeout Error
pub const ENUM_USB_EP0I_CSR_H_TOERR: u16 = 0x0010;
/// No Request
pub const ENUM_USB_EP0I_CSR_H_NO_SETUPPKT: u16 = 0x0000;
/// Send SETUP token
pub const ENUM_USB_EP0I_CSR_H_SETUPPKT: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EP0I_CSR_H_NO_RXSTALL: u16 = 0x0000;
/// Stall Received from Device
pub const ENUM_USB_EP0I_CSR_H_RXSTALL: u16 = 0x0004;
/// No Tx Packet
pub const ENUM_USB_EP0I_CSR_H_NO_TXPKTRDY: u16 = 0x0000;
/// Tx Packet in Endpoint FIFO
pub const ENUM_USB_EP0I_CSR_H_TXPKTRDY: u16 = 0x0002;
/// No Rx Packet
pub const ENUM_USB_EP0I_CSR_H_NO_RXPKTRDY: u16 = 0x0000;
/// Rx Packet in Endpoint FIFO
pub const ENUM_USB_EP0I_CSR_H_RXPKTRDY: u16 = 0x0001;

// USB_EPI_RXMAXP
pub const BITP_USB_EPI_RXMAXP_MULTM1: u32 = 11;
pub const BITP_USB_EPI_RXMAXP_MAXPAY: u32 = 0;
/// Multi-Packets per Micro-frame
pub const BITM_USB_EPI_RXMAXP_MULTM1: u16 = 0x1800;
/// Maximum Payload
pub const BITM_USB_EPI_RXMAXP_MAXPAY: u16 = 0x07FF;

// USB_EPI_RXCSR_H
pub const BITP_USB_EPI_RXCSR_H_AUTOCLR: u32 = 15;
pub const BITP_USB_EPI_RXCSR_H_AUTOREQ: u32 = 14;
pub const BITP_USB_EPI_RXCSR_H_DMAREQEN: u32 = 13;
pub const BITP_USB_EPI_RXCSR_H_PIDERR: u32 = 12;
pub const BITP_USB_EPI_RXCSR_H_DMAREQMODE: u32 = 11;
pub const BITP_USB_EPI_RXCSR_H_DATGLEN: u32 = 10;
pub const BITP_USB_EPI_RXCSR_H_DATGL: u32 = 9;
pub const BITP_USB_EPI_RXCSR_H_INCOMPRX: u32 = 8;
pub const BITP_USB_EPI_RXCSR_H_CLRDATATGL: u32 = 7;
pub const BITP_USB_EPI_RXCSR_H_RXSTALL: u32 = 6;
pub const BITP_USB_EPI_RXCSR_H_REQPKT: u32 = 5;
pub const BITP_USB_EPI_RXCSR_H_FLUSHFIFO: u32 = 4;
pub const BITP_USB_EPI_RXCSR_H_NAKTODERR: u32 = 3;
pub const BITP_USB_EPI_RXCSR_H_RXTOERR: u32 = 2;
pub const BITP_USB_EPI_RXCSR_H_FIFOFULL: u32 = 1;
pub const BITP_USB_EPI_RXCSR_H_RXPKTRDY: u32 = 0;
/// Auto Clear Enable
pub const BITM_USB_EPI_RXCSR_H_AUTOCLR: u16 = 0x8000;
/// Auto Request Clear Enable
pub const BITM_USB_EPI_RXCSR_H_AUTOREQ: u16 = 0x4000;
/// DMA Request Enable Rx EP
pub const BITM_USB_EPI_RXCSR_H_DMAREQEN: u16 = 0x2000;
/// Packet ID Error
pub const BITM_USB_EPI_RXCSR_H_PIDERR: u16 = 0x1000;
/// DMA Mode Select
pub const BITM_USB_EPI_RXCSR_H_DMAREQMODE: u16 = 0x0800;
/// Data Toggle Write Enable
pub const BITM_USB_EPI_RXCSR_H_DATGLEN: u16 = 0x0400;
/// Data Toggle
pub const BITM_USB_EPI_RXCSR_H_DATGL: u16 = 0x0200;
/// Incomplete Rx
pub const BITM_USB_EPI_RXCSR_H_INCOMPRX: u16 = 0x0100;
/// Clear Endpoint Data Toggle
pub const BITM_USB_EPI_RXCSR_H_CLRDATATGL: u16 = 0x0080;
/// Rx STALL
pub const BITM_USB_EPI_RXCSR_H_RXSTALL: u16 = 0x0040;
/// Request Packet
pub const BITM_USB_EPI_RXCSR_H_REQPKT: u16 = 0x0020;
/// Flush Endpoint FIFO
pub const BITM_USB_EPI_RXCSR_H_FLUSHFIFO: u16 = 0x0010;
/// NAK Timeout Data Error
pub const BITM_USB_EPI_RXCSR_H_NAKTODERR: u16 = 0x0008;
/// Rx Timeout Error
pub const BITM_USB_EPI_RXCSR_H_RXTOERR: u16 = 0x0004;
/// FIFO Full
pub const BITM_USB_EPI_RXCSR_H_FIFOFULL: u16 = 0x0002;
/// Rx Packet Ready
pub const BITM_USB_EPI_RXCSR_H_RXPKTRDY: u16 = 0x0001;
/// Disable Auto Clear
pub const ENUM_USB_EPI_RXCSR_H_NO_AUTOCLR: u16 = 0x0000;
/// Enable Auto Clear
pub const ENUM_USB_EPI_RXCSR_H_AUTOCLR: u16 = 0x8000;
/// Disable Auto Request Clear
pub const ENUM_USB_EPI_RXCSR_H_NO_AUTOREQ: u16 = 0x0000;
/// Enable Auto Request Clear
pub const ENUM_USB_EPI_RXCSR_H_AUTOREQ: u16 = 0x4000;
/// Disable DMA Request
pub const ENUM_USB_EPI_RXCSR_H_DMAREQDIS: u16 = 0x0000;
/// Enable DMA Request
pub const ENUM_USB_EPI_RXCSR_H_DMAREQEN: u16 = 0x2000;
/// No Status
pub const ENUM_USB_EPI_RXCSR_H_NO_PIDERR: u16 = 0x0000;
/// PID Error
pub const ENUM_USB_EPI_RXCSR_H_PIDERR: u16 = 0x1000;
/// DMA Request Mode 0
pub const ENUM_USB_EPI_RXCSR_H_DMARQMODE0: u16 = 0x0000;
/// DMA Request Mode 1
pub const ENUM_USB_EPI_RXCSR_H_DMARQMODE1: u16 = 0x0800;
/// Disable Write to DATGL
pub const ENUM_USB_EPI_RXCSR_H_DATGLDIS: u16 = 0x0000;
/// Enable Write to DATGL
pub const ENUM_USB_EPI_RXCSR_H_DATGLEN: u16 = 0x0400;
/// DATA0 is Set
pub const ENUM_USB_EPI_RXCSR_H_NO_DATGL: u16 = 0x0000;
/// DATA1 is Set
pub const ENUM_USB_EPI_RXCSR_H_DATGL: u16 = 0x0200;
/// No Status
pub const ENUM_USB_EPI_RXCSR_H_NO_INCOMP: u16 = 0x0000;
/// Incomplete Rx
pub const ENUM_USB_EPI_RXCSR_H_INCOMP: u16 = 0x0100;
/// No Action
pub const ENUM_USB_EPI_RXCSR_H_NO_CLRTGL: u16 = 0x0000;
/// Reset EP Data Toggle to 0
pub const ENUM_USB_EPI_RXCSR_H_CLRTGL: u16 = 0x0080;
/// No Status
pub const ENUM_USB_EPI_RXCSR_H_NO_RXSTALL: u16 = 0x0000;
/// Stall Received from Device
pub const ENUM_USB_EPI_RXCSR_H_RXSTALL: u16 = 0x0040;
/// No Request
pub const ENUM_USB_EPI_RXCSR_H_NO_REQPKT: u16 = 0x0000;
/// Send IN Tokens to Device
pub const ENUM_USB_EPI_RXCSR_H_REQPKT: u16 = 0x0020;
/// No Flush
pub const ENUM_USB_EPI_RXCSR_H_NO_FLUSH: u16 = 0x0000;
/// Flush Endpoint FIFO
pub const ENUM_USB_EPI_RXCSR_H_FLUSH: u16 = 0x0010;
/// No Status
pub const ENUM_USB_EPI_RXCSR_H_NO_NAKTO: u16 = 0x0000;
/// NAK Timeout Data Error
pub const ENUM_USB_EPI_RXCSR_H_NAKTO: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EPI_RXCSR_H_NO_RXTOERR: u16 = 0x0000;
/// Rx Timeout Error
pub const ENUM_USB_EPI_RXCSR_H_RXTOERR: u16 = 0x0004;
/// No Status
pub const ENUM_USB_EPI_RXCSR_H_NO_FIFOFUL: u16 = 0x0000;
/// FIFO Full
pub const ENUM_USB_EPI_RXCSR_H_FIFOFUL: u16 = 0x0002;
/// No Rx Packet
pub const ENUM_USB_EPI_RXCSR_H_NO_PKTRDY: u16 = 0x0000;
/// Rx Packet in Endpoint FIFO
pub const ENUM_USB_EPI_RXCSR_H_PKTRDY: u16 = 0x0001;

// USB_EPI_RXCSR_P
pub const BITP_USB_EPI_RXCSR_P_AUTOCLR: u32 = 15;
pub const BITP_USB_EPI_RXCSR_P_ISO: u32 = 14;
pub const BITP_USB_EPI_RXCSR_P_DMAREQEN: u32 = 13;
pub const BITP_USB_EPI_RXCSR_P_DNYETPERR: u32 = 12;
pub const BITP_USB_EPI_RXCSR_P_DMAREQMODE: u32 = 11;
pub const BITP_USB_EPI_RXCSR_P_INCOMPRX: u32 = 8;
pub const BITP_USB_EPI_RXCSR_P_CLRDATATGL: u32 = 7;
pub const BITP_USB_EPI_RXCSR_P_SENTSTALL: u32 = 6;
pub const BITP_USB_EPI_RXCSR_P_SENDSTALL: u32 = 5;
pub const BITP_USB_EPI_RXCSR_P_FLUSHFIFO: u32 = 4;
pub const BITP_USB_EPI_RXCSR_P_DATAERR: u32 = 3;
pub const BITP_USB_EPI_RXCSR_P_ORUNERR: u32 = 2;
pub const BITP_USB_EPI_RXCSR_P_FIFOFULL: u32 = 1;
pub const BITP_USB_EPI_RXCSR_P_RXPKTRDY: u32 = 0;
/// Auto Clear Enable
pub const BITM_USB_EPI_RXCSR_P_AUTOCLR: u16 = 0x8000;
/// Isochronous Transfers
pub const BITM_USB_EPI_RXCSR_P_ISO: u16 = 0x4000;
/// DMA Request Enable Rx EP
pub const BITM_USB_EPI_RXCSR_P_DMAREQEN: u16 = 0x2000;
/// Disable NYET Handshake
pub const BITM_USB_EPI_RXCSR_P_DNYETPERR: u16 = 0x1000;
/// DMA Mode Select
pub const BITM_USB_EPI_RXCSR_P_DMAREQMODE: u16 = 0x0800;
/// Incomplete Rx
pub const BITM_USB_EPI_RXCSR_P_INCOMPRX: u16 = 0x0100;
/// Clear Endpoint Data Toggle
pub const BITM_USB_EPI_RXCSR_P_CLRDATATGL: u16 = 0x0080;
/// Sent STALL
pub const BITM_USB_EPI_RXCSR_P_SENTSTALL: u16 = 0x0040;
/// Send STALL
pub const BITM_USB_EPI_RXCSR_P_SENDSTALL: u16 = 0x0020;
/// Flush Endpoint FIFO
pub const BITM_USB_EPI_RXCSR_P_FLUSHFIFO: u16 = 0x0010;
/// Data Error
pub const BITM_USB_EPI_RXCSR_P_DATAERR: u16 = 0x0008;
/// OUT Run Error
pub const BITM_USB_EPI_RXCSR_P_ORUNERR: u16 = 0x0004;
/// FIFO Full
pub const BITM_USB_EPI_RXCSR_P_FIFOFULL: u16 = 0x0002;
/// Rx Packet Ready
pub const BITM_USB_EPI_RXCSR_P_RXPKTRDY: u16 = 0x0001;
/// Disable Auto Clear
pub const ENUM_USB_EPI_RXCSR_P_NO_AUTOCLR: u16 = 0x0000;
/// Enable Auto Clear
pub const ENUM_USB_EPI_RXCSR_P_AUTOCLR: u16 = 0x8000;
/// This bit should be cleared for bulk or interrupt transfers.
pub const ENUM_USB_EPI_RXCSR_P_ISODIS: u16 = 0x0000;
/// This bit should be set for isochronous transfers.
pub const ENUM_USB_EPI_RXCSR_P_ISOEN: u16 = 0x4000;
/// Disable DMA Request
pub const ENUM_USB_EPI_RXCSR_P_DMAREQDIS: u16 = 0x0000;
/// Enable DMA Request
pub const ENUM_USB_EPI_RXCSR_P_DMAREQEN: u16 = 0x2000;
/// Enable NYET Handshake
pub const ENUM_USB_EPI_RXCSR_P_DNYTERREN: u16 = 0x0000;
/// Disable NYET Handshake
pub const ENUM_USB_EPI_RXCSR_P_DNYTERRDIS: u16 = 0x1000;
/// DMA Request Mode 0
pub const ENUM_USB_EPI_RXCSR_P_DMARQMODE0: u16 = 0x0000;
/// DMA Request Mode 1
pub const ENUM_USB_EPI_RXCSR_P_DMARQMODE1: u16 = 0x0800;
/// No Status
pub const ENUM_USB_EPI_RXCSR_P_NO_INCOMP: u16 = 0x0000;
/// Incomplete Rx
pub const ENUM_USB_EPI_RXCSR_P_INCOMP: u16 = 0x0100;
/// No Action
pub const ENUM_USB_EPI_RXCSR_P_NO_CLRTGL: u16 = 0x0000;
/// Reset EP Data Toggle to 0
pub const ENUM_USB_EPI_RXCSR_P_CLRTGL: u16 = 0x0080;
/// No Status
pub const ENUM_USB_EPI_RXCSR_P_NO_STALSNT: u16 = 0x0000;
/// STALL Handshake Transmitted
pub const ENUM_USB_EPI_RXCSR_P_STALSNT: u16 = 0x0040;
/// No Action
pub const ENUM_USB_EPI_RXCSR_P_NO_STALL: u16 = 0x0000;
/// Request STALL Handshake
pub const ENUM_USB_EPI_RXCSR_P_STALL: u16 = 0x0020;
/// No Flush
pub const ENUM_USB_EPI_RXCSR_P_NO_FLUSH: u16 = 0x0000;
/// Flush Endpoint FIFO
pub const ENUM_USB_EPI_RXCSR_P_FLUSH: u16 = 0x0010;
/// No Status
pub const ENUM_USB_EPI_RXCSR_P_NO_DATAERR: u16 = 0x0000;
/// Data Error
pub const ENUM_USB_EPI_RXCSR_P_DATAERR: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EPI_RXCSR_P_NO_ORUNERR: u16 = 0x0000;
/// OUT Run Error
pub const ENUM_USB_EPI_RXCSR_P_ORUNERR: u16 = 0x0004;
/// No Status
pub const ENUM_USB_EPI_RXCSR_P_NO_FIFOFUL: u16 = 0x0000;
/// FIFO Full
pub const ENUM_USB_EPI_RXCSR_P_FIFOFUL: u16 = 0x0002;
/// No Rx Packet
pub const ENUM_USB_EPI_RXCSR_P_NO_PKTRDY: u16 = 0x0000;
/// Rx Packet in Endpoint FIFO
pub const ENUM_USB_EPI_RXCSR_P_PKTRDY: u16 = 0x0001;

// USB_EP0I_CNT
pub const BITP_USB_EP0I_CNT_RXCNT: u32 = 0;
/// Rx Byte Count Value
pub const BITM_USB_EP0I_CNT_RXCNT: u16 = 0x007F;

// USB_EPI_RXCNT
pub const BITP_USB_EPI_RXCNT_EPRXCNT: u32 = 0;
/// EP Rx Count
pub const BITM_USB_EPI_RXCNT_EPRXCNT: u16 = 0x3FFF;

// USB_EPI_TXTYPE
pub const BITP_USB_EPI_TXTYPE_SPEED: u32 = 6;
pub const BITP_USB_EPI_TXTYPE_PROTOCOL: u32 = 4;
pub const BITP_USB_EPI_TXTYPE_TGTEP: u32 = 0;
/// Speed of Operation Value
pub const BITM_USB_EPI_TXTYPE_SPEED: u8 = 0xC0;
/// Protocol for Transfer
pub const BITM_USB_EPI_TXTYPE_PROTOCOL: u8 = 0x30;
/// Target Endpoint Number
pub const BITM_USB_EPI_TXTYPE_TGTEP: u8 = 0x0F;
/// Same Speed as the Core
pub const ENUM_USB_EPI_TXTYPE_UNUSED: u8 = 0x00;
/// High Speed
pub const ENUM_USB_EPI_TXTYPE_HIGHSPEED: u8 = 0x40;
/// Full Speed
pub const ENUM_USB_EPI_TXTYPE_FULLSPEED: u8 = 0x80;
/// Low Speed
pub const ENUM_USB_EPI_TXTYPE_LOWSPEED: u8 = 0xC0;
/// Control
pub const ENUM_USB_EPI_TXTYPE_CONTROL: u8 = 0x00;
/// Isochronous
pub const ENUM_USB_EPI_TXTYPE_ISO: u8 = 0x10;
/// Bulk
pub const ENUM_USB_EPI_TXTYPE_BULK: u8 = 0x20;
/// Interrupt
pub const ENUM_USB_EPI_TXTYPE_INT: u8 = 0x30;
/// Endpoint 0
pub const ENUM_USB_EPI_TXTYPE_TGTEP0: u8 = 0x00;
/// Endpoint 1
pub const ENUM_USB_EPI_TXTYPE_TGTEP1: u8 = 0x01;
/// Endpoint 10
pub const ENUM_USB_EPI_TXTYPE_TGTEP10: u8 = 0x0A;
/// Endpoint 11
pub const ENUM_USB_EPI_TXTYPE_TGTEP11: u8 = 0x0B;
/// Endpoint 12
pub const ENUM_USB_EPI_TXTYPE_TGTEP12: u8 = 0x0C;
/// Endpoint 13
pub const ENUM_USB_EPI_TXTYPE_TGTEP13: u8 = 0x0D;
/// Endpoint 14
pub const ENUM_USB_EPI_TXTYPE_TGTEP14: u8 = 0x0E;
/// Endpoint 15
pub const ENUM_USB_EPI_TXTYPE_TGTEP15: u8 = 0x0F;
/// Endpoint 2
pub const ENUM_USB_EPI_TXTYPE_TGTEP2: u8 = 0x02;
/// Endpoint 3
pub const ENUM_USB_EPI_TXTYPE_TGTEP3: u8 = 0x03;
/// Endpoint 4
pub const ENUM_USB_EPI_TXTYPE_TGTEP4: u8 = 0x04;
/// Endpoint 5
pub const ENUM_USB_EPI_TXTYPE_TGTEP5: u8 = 0x05;
/// Endpoint 6
pub const ENUM_USB_EPI_TXTYPE_TGTEP6: u8 = 0x06;
/// Endpoint 7
pub const ENUM_USB_EPI_TXTYPE_TGTEP7: u8 = 0x07;
/// Endpoint 8
pub const ENUM_USB_EPI_TXTYPE_TGTEP8: u8 = 0x08;
/// Endpoint 9
pub const ENUM_USB_EPI_TXTYPE_TGTEP9: u8 = 0x09;

// USB_EP0I_TYPE
pub const BITP_USB_EP0I_TYPE_SPEED: u32 = 0;
/// Speed of Operation Value
pub const BITM_USB_EP0I_TYPE_SPEED: u8 = 0x03;

// USB_EP0I_NAKLIMIT
pub const BITP_USB_EP0I_NAKLIMIT_VALUE: u32 = 0;
/// Endpoint 0 Timeout Value (in Frames)
pub const BITM_USB_EP0I_NAKLIMIT_VALUE: u8 = 0x1F;

// USB_EPI_RXTYPE
pub const BITP_USB_EPI_RXTYPE_SPEED: u32 = 6;
pub const BITP_USB_EPI_RXTYPE_PROTOCOL: u32 = 4;
pub const BITP_USB_EPI_RXTYPE_TGTEP: u32 = 0;
/// Speed of Operation Value
pub const BITM_USB_EPI_RXTYPE_SPEED: u8 = 0xC0;
/// Protocol for Transfer
pub const BITM_USB_EPI_RXTYPE_PROTOCOL: u8 = 0x30;
/// Target Endpoint Number
pub const BITM_USB_EPI_RXTYPE_TGTEP: u8 = 0x0F;
/// Same Speed as the Core
pub const ENUM_USB_EPI_RXTYPE_UNUSED: u8 = 0x00;
/// High Speed
pub const ENUM_USB_EPI_RXTYPE_HIGHSPEED: u8 = 0x40;
/// Full Speed
pub const ENUM_USB_EPI_RXTYPE_FULLSPEED: u8 = 0x80;
/// Low Speed
pub const ENUM_USB_EPI_RXTYPE_LOWSPEED: u8 = 0xC0;
/// Control
pub const ENUM_USB_EPI_RXTYPE_CONTROL: u8 = 0x00;
/// Isochronous
pub const ENUM_USB_EPI_RXTYPE_ISO: u8 = 0x10;
/// Bulk
pub const ENUM_USB_EPI_RXTYPE_BULK: u8 = 0x20;
/// Interrupt
pub const ENUM_USB_EPI_RXTYPE_INT: u8 = 0x30;
/// Endpoint 0
pub const ENUM_USB_EPI_RXTYPE_TGTEP0: u8 = 0x00;
/// Endpoint 1
pub const ENUM_USB_EPI_RXTYPE_TGTEP1: u8 = 0x01;
/// Endpoint 10
pub const ENUM_USB_EPI_RXTYPE_TGTEP10: u8 = 0x0A;
/// Endpoint 11
pub const ENUM_USB_EPI_RXTYPE_TGTEP11: u8 = 0x0B;
/// Endpoint 12
pub const ENUM_USB_EPI_RXTYPE_TGTEP12: u8 = 0x0C;
/// Endpoint 13
pub const ENUM_USB_EPI_RXTYPE_TGTEP13: u8 = 0x0D;
/// Endpoint 14
pub const ENUM_USB_EPI_RXTYPE_TGTEP14: u8 = 0x0E;
/// Endpoint 15
pub const ENUM_USB_EPI_RXTYPE_TGTEP15: u8 = 0x0F;
/// Endpoint 2
pub const ENUM_USB_EPI_RXTYPE_TGTEP2: u8 = 0x02;
/// Endpoint 3
pub const ENUM_USB_EPI_RXTYPE_TGTEP3: u8 = 0x03;
/// Endpoint 4
pub const ENUM_USB_EPI_RXTYPE_TGTEP4: u8 = 0x04;
/// Endpoint 5
pub const ENUM_USB_EPI_RXTYPE_TGTEP5: u8 = 0x05;
/// Endpoint 6
pub const ENUM_USB_EPI_RXTYPE_TGTEP6: u8 = 0x06;
/// Endpoint 7
pub const ENUM_USB_EPI_RXTYPE_TGTEP7: u8 = 0x07;
/// Endpoint 8
pub const ENUM_USB_EPI_RXTYPE_TGTEP8: u8 = 0x08;
/// Endpoint 9
pub const ENUM_USB_EPI_RXTYPE_TGTEP9: u8 = 0x09;

// USB_EP0I_CFGDATA
pub const BITP_USB_EP0I_CFGDATA_MPRX: u32 = 7;
pub const BITP_USB_EP0I_CFGDATA_MPTX: u32 = 6;
pub const BITP_USB_EP0I_CFGDATA_BIGEND: u32 = 5;
pub const BITP_USB_EP0I_CFGDATA_HBRX: u32 = 4;
pub const BITP_USB_EP0I_CFGDATA_HBTX: u32 = 3;
pub const BITP_USB_EP0I_CFGDATA_DYNFIFO: u32 = 2;
pub const BITP_USB_EP0I_CFGDATA_SOFTCON: u32 = 1;
pub const BITP_USB_EP0I_CFGDATA_UTMIWID: u32 = 0;
/// Multi-Packet Aggregate for Rx Enable
pub const BITM_USB_EP0I_CFGDATA_MPRX: u8 = 0x80;
/// Multi-Packet Split for Tx Enable
pub const BITM_USB_EP0I_CFGDATA_MPTX: u8 = 0x40;
/// Big Endian Data
pub const BITM_USB_EP0I_CFGDATA_BIGEND: u8 = 0x20;
/// High Bandwidth Rx Enable
pub const BITM_USB_EP0I_CFGDATA_HBRX: u8 = 0x10;
/// High Bandwidth Tx Enable
pub const BITM_USB_EP0I_CFGDATA_HBTX: u8 = 0x08;
/// Dynamic FIFO Size Enable
pub const BITM_USB_EP0I_CFGDATA_DYNFIFO: u8 = 0x04;
/// Soft Connect Enable
pub const BITM_USB_EP0I_CFGDATA_SOFTCON: u8 = 0x02;
/// UTMI Data Width
pub const BITM_USB_EP0I_CFGDATA_UTMIWID: u8 = 0x01;
/// No Aggregate Rx Bulk Packets
pub const ENUM_USB_EP0I_CFGDATA_MPRXDIS: u8 = 0x00;
/// Aggregate Rx Bulk Packets
pub const ENUM_USB_EP0I_CFGDATA_MPRXEN: u8 = 0x80;
/// No Split Tx Bulk Packets
pub const ENUM_USB_EP0I_CFGDATA_MPTXDIS: u8 = 0x00;
/// Split Tx Bulk Packets
pub const ENUM_USB_EP0I_CFGDATA_MPTXEN: u8 = 0x40;
/// Little Endian Configuration
pub const ENUM_USB_EP0I_CFGDATA_BIGENDDIS: u8 = 0x00;
/// Big Endian Configuration
pub const ENUM_USB_EP0I_CFGDATA_BIGENDEN: u8 = 0x20;
/// No High Bandwidth Rx
pub const ENUM_USB_EP0I_CFGDATA_HBRXDIS: u8 = 0x00;
/// High Bandwidth Rx
pub const ENUM_USB_EP0I_CFGDATA_HBRXEN: u8 = 0x10;
/// No High Bandwidth Tx
pub const ENUM_USB_EP0I_CFGDATA_HBTXDIS: u8 = 0x00;
/// High Bandwidth Tx
pub const ENUM_USB_EP0I_CFGDATA_HBTXEN: u8 = 0x08;
/// No Dynamic FIFO Size
pub const ENUM_USB_EP0I_CFGDATA_DYNSZDIS: u8 = 0x00;
/// Dynamic FIFO Size
pub const ENUM_USB_EP0I_CFGDATA_DYNSZEN: u8 = 0x04;
/// No Soft Connect
pub const ENUM_USB_EP0I_CFGDATA_SFTCONDIS: u8 = 0x00;
/// Soft Connect
pub const ENUM_USB_EP0I_CFGDATA_SFTCONEN: u8 = 0x02;
/// 8-bit UTMI Data Width
pub const ENUM_USB_EP0I_CFGDATA_UTMIWID8: u8 = 0x00;
/// 16-bit UTMI Data Width
pub const ENUM_USB_EP0I_CFGDATA_UTMIWID16: u8 = 0x01;

// USB_DEV_CTL
pub const BITP_USB_DEV_CTL_BDEVICE: u32 = 7;
pub const BITP_USB_DEV_CTL_FSDEV: u32 = 6;
pub const BITP_USB_DEV_CTL_LSDEV: u32 = 5;
pub const BITP_USB_DEV_CTL_VBUS: u32 = 3;
pub const BITP_USB_DEV_CTL_HOSTMODE: u32 = 2;
pub const BITP_USB_DEV_CTL_HOSTREQ: u32 = 1;
pub const BITP_USB_DEV_CTL_SESSION: u32 = 0;
/// A or B Devices Indicator
pub const BITM_USB_DEV_CTL_BDEVICE: u8 = 0x80;
/// Full or High-Speed Indicator
pub const BITM_USB_DEV_CTL_FSDEV: u8 = 0x40;
/// Low-Speed Indicator
pub const BITM_USB_DEV_CTL_LSDEV: u8 = 0x20;
/// VBUS Level Indicator
pub const BITM_USB_DEV_CTL_VBUS: u8 = 0x18;
/// Host Mode Indicator
pub const BITM_USB_DEV_CTL_HOSTMODE: u8 = 0x04;
/// Host Negotiation Request
pub const BITM_USB_DEV_CTL_HOSTREQ: u8 = 0x02;
/// Session Indicator
pub const BITM_USB_DEV_CTL_SESSION: u8 = 0x01;
/// A Device Detected
pub const ENUM_USB_DEV_CTL_ADEVICE: u8 = 0x00;
/// B Device Detected
pub const ENUM_USB_DEV_CTL_BDEVICE: u8 = 0x80;
/// Not Detected
pub const ENUM_USB_DEV_CTL_NO_FSDEV: u8 = 0x00;
/// Full or High Speed Detected
pub const ENUM_USB_DEV_CTL_FSDEV: u8 = 0x40;
/// Not Detected
pub const ENUM_USB_DEV_CTL_NO_LSDEV: u8 = 0x00;
/// Low Speed Detected
pub const ENUM_USB_DEV_CTL_LSDEV: u8 = 0x20;
/// Below SessionEnd
pub const ENUM_USB_DEV_CTL_VBUS_BS: u8 = 0x00;
/// Above SessionEnd, below AValid
pub const ENUM_USB_DEV_CTL_VBUS_ASBA: u8 = 0x08;
/// Above AValid, below VBUSValid
pub const ENUM_USB_DEV_CTL_VBUS_AABV: u8 = 0x10;
/// Above VBUSValid
pub const ENUM_USB_DEV_CTL_VBUS_AV: u8 = 0x18;
/// Peripheral Mode
pub const ENUM_USB_DEV_CTL_NO_HOSTMODE: u8 = 0x00;
/// Host Mode
pub const ENUM_USB_DEV_CTL_HOSTMODE: u8 = 0x04;
/// No Request
pub const ENUM_USB_DEV_CTL_NO_HOSTREQ: u8 = 0x00;
/// Place Request
pub const ENUM_USB_DEV_CTL_HOSTREQ: u8 = 0x02;
/// Not Detected
pub const ENUM_USB_DEV_CTL_NO_SESSION: u8 = 0x00;
/// Detected Session
pub const ENUM_USB_DEV_CTL_SESSION: u8 = 0x01;

// USB_TXFIFOSZ
pub const BITP_USB_TXFIFOSZ_DPB: u32 = 4;
pub const BITP_USB_TXFIFOSZ_SZ: u32 = 0;
/// Double Packet Buffering Enable
pub const BITM_USB_TXFIFOSZ_DPB: u8 = 0x10;
/// Maximum Packet Size
pub const BITM_USB_TXFIFOSZ_SZ: u8 = 0x0F;
/// Single Packet Buffering
pub const ENUM_USB_TXFIFOSZ_DPNDIS: u8 = 0x00;
/// Double Packet Buffering
pub const ENUM_USB_TXFIFOSZ_DPBEN: u8 = 0x10;
/// PktSz=8, DPB0=8, DPB1=16
pub const ENUM_USB_TXFIFOSZ_SZ8: u8 = 0x00;
/// PktSz=16, DPB0=16, DPB1=32
pub const ENUM_USB_TXFIFOSZ_SZ16: u8 = 0x01;
/// PktSz=32, DPB0=32, DPB1=64
pub const ENUM_USB_TXFIFOSZ_SZ32: u8 = 0x02;
/// PktSz=64, DPB0=64, DPB1=128
pub const ENUM_USB_TXFIFOSZ_SZ64: u8 = 0x03;
/// PktSz=128, DPB0=128, DPB1=256
pub const ENUM_USB_TXFIFOSZ_SZ128: u8 = 0x04;
/// PktSz=256, DPB0=256, DPB1=512
pub const ENUM_USB_TXFIFOSZ_SZ256: u8 = 0x05;
/// PktSz=512, DPB0=512, DPB1=1024
pub const ENUM_USB_TXFIFOSZ_SZ512: u8 = 0x06;
/// PktSz=1024, DPB0=1024, DPB1=2048
pub const ENUM_USB_TXFIFOSZ_SZ1024: u8 = 0x07;
/// PktSz=2048, DPB0=2048, DPB1=4096
pub const ENUM_USB_TXFIFOSZ_SZ2048: u8 = 0x08;
/// PktSz=4096, DPB0=4096, DPB1=8192
pub const ENUM_USB_TXFIFOSZ_SZ4096: u8 = 0x09;

// USB_RXFIFOSZ
pub const BITP_USB_RXFIFOSZ_DPB: u32 = 4;
pub const BITP_USB_RXFIFOSZ_SZ: u32 = 0;
/// Double Packet Buffering Enable
pub const BITM_USB_RXFIFOSZ_DPB: u8 = 0x10;
/// Maximum Packet Size
pub const BITM_USB_RXFIFOSZ_SZ: u8 = 0x0F;
/// Single Packet Buffering
pub const ENUM_USB_RXFIFOSZ_DPBDIS: u8 = 0x00;
/// Double Packet Buffering
pub const ENUM_USB_RXFIFOSZ_DPBEN: u8 = 0x10;
/// PktSz=8, DPB0=8, DPB1=16
pub const ENUM_USB_RXFIFOSZ_SZ8: u8 = 0x00;
/// PktSz=16, DPB0=16, DPB1=32
pub const ENUM_USB_RXFIFOSZ_SZ16: u8 = 0x01;
/// PktSz=32, DPB0=32, DPB1=64
pub const ENUM_USB_RXFIFOSZ_SZ32: u8 = 0x02;
/// PktSz=64, DPB0=64, DPB1=128
pub const ENUM_USB_RXFIFOSZ_SZ64: u8 = 0x03;
/// PktSz=128, DPB0=128, DPB1=256
pub const ENUM_USB_RXFIFOSZ_SZ128: u8 = 0x04;
/// PktSz=256, DPB0=256, DPB1=512
pub const ENUM_USB_RXFIFOSZ_SZ256: u8 = 0x05;
/// PktSz=512, DPB0=512, DPB1=1024
pub const ENUM_USB_RXFIFOSZ_SZ512: u8 = 0x06;
/// PktSz=1024, DPB0=1024, DPB1=2048
pub const ENUM_USB_RXFIFOSZ_SZ1024: u8 = 0x07;
/// PktSz=2048, DPB0=2048, DPB1=4096
pub const ENUM_USB_RXFIFOSZ_SZ2048: u8 = 0x08;
/// PktSz=4096, DPB0=4096, DPB1=8192
pub const ENUM_USB_RXFIFOSZ_SZ4096: u8 = 0x09;

// USB_TXFIFOADDR
pub const BITP_USB_TXFIFOADDR_VALUE: u32 = 0;
/// Tx FIFO Start Address
pub const BITM_USB_TXFIFOADDR_VALUE: u16 = 0x1FFF;

// USB_RXFIFOADDR
pub const BITP_USB_RXFIFOADDR_VALUE: u32 = 0;
/// Rx FIFO Start Address
pub const BITM_USB_RXFIFOADDR_VALUE: u16 = 0x0FFF;

// USB_EPINFO
pub const BITP_USB_EPINFO_RXEP: u32 = 4;
pub const BITP_USB_EPINFO_TXEP: u32 = 0;
/// Rx Endpoints
pub const BITM_USB_EPINFO_RXEP: u8 = 0xF0;
/// Tx Endpoints
pub const BITM_USB_EPINFO_TXEP: u8 = 0x0F;

// USB_RAMINFO
pub const BITP_USB_RAMINFO_DMACHANS: u32 = 4;
pub const BITP_USB_RAMINFO_RAMBITS: u32 = 0;
/// DMA Channels
pub const BITM_USB_RAMINFO_DMACHANS: u8 = 0xF0;
/// RAM Address Bits
pub const BITM_USB_RAMINFO_RAMBITS: u8 = 0x0F;

// USB_LINKINFO
pub const BITP_USB_LINKINFO_WTCON: u32 = 4;
pub const BITP_USB_LINKINFO_WTID: u32 = 0;
/// Wait for Connect/Disconnect
pub const BITM_USB_LINKINFO_WTCON: u8 = 0xF0;
/// Wait from ID Pull-up
pub const BITM_USB_LINKINFO_WTID: u8 = 0x0F;

// USB_SOFT_RST
pub const BITP_USB_SOFT_RST_RSTX: u32 = 1;
pub const BITP_USB_SOFT_RST_RST: u32 = 0;
/// Reset USB XCLK Domain
pub const BITM_USB_SOFT_RST_RSTX: u8 = 0x02;
/// Reset USB CLK Domain
pub const BITM_USB_SOFT_RST_RST: u8 = 0x01;
/// No Reset
pub const ENUM_USB_SOFT_RST_NO_RSTX: u8 = 0x00;
/// Reset USB XCLK Domain
pub const ENUM_USB_SOFT_RST_RSTX: u8 = 0x02;
/// No Reset
pub const ENUM_USB_SOFT_RST_NO_RST: u8 = 0x00;
/// Reset USB CLK Domain
pub const ENUM_USB_SOFT_RST_RST: u8 = 0x01;

// USB_MP_TXFUNCADDR
pub const BITP_USB_MP_TXFUNCADDR_VALUE: u32 = 0;
/// Tx Function Address Value
pub const BITM_USB_MP_TXFUNCADDR_VALUE: u8 = 0x7F;

// USB_MP_TXHUBADDR
pub const BITP_USB_MP_TXHUBADDR_MULTTRANS: u32 = 7;
pub const BITP_USB_MP_TXHUBADDR_ADDR: u32 = 0;
/// Multiple Transaction Translators
pub const BITM_USB_MP_TXHUBADDR_MULTTRANS: u8 = 0x80;
/// Hub Address Value
pub const BITM_USB_MP_TXHUBADDR_ADDR: u8 = 0x7F;

// USB_MP_TXHUBPORT
pub const BITP_USB_MP_TXHUBPORT_VALUE: u32 = 0;
/// Hub Port Value
pub const BITM_USB_MP_TXHUBPORT_VALUE: u8 = 0x7F;

// USB_MP_RXFUNCADDR
pub const BITP_USB_MP_RXFUNCADDR_VALUE: u32 = 0;
/// Rx Function Address Value
pub const BITM_USB_MP_RXFUNCADDR_VALUE: u8 = 0x7F;

// USB_MP_RXHUBADDR
pub const BITP_USB_MP_RXHUBADDR_MULTTRANS: u32 = 7;
pub const BITP_USB_MP_RXHUBADDR_ADDR: u32 = 0;
/// Multiple Transaction Translators
pub const BITM_USB_MP_RXHUBADDR_MULTTRANS: u8 = 0x80;
/// Hub Address Value
pub const BITM_USB_MP_RXHUBADDR_ADDR: u8 = 0x7F;

// USB_MP_RXHUBPORT
pub const BITP_USB_MP_RXHUBPORT_VALUE: u32 = 0;
/// Hub Port Value
pub const BITM_USB_MP_RXHUBPORT_VALUE: u8 = 0x7F;

// USB_EP_TXMAXP
pub const BITP_USB_EP_TXMAXP_MULTM1: u32 = 11;
pub const BITP_USB_EP_TXMAXP_MAXPAY: u32 = 0;
/// Multi-Packets per Micro-frame
pub const BITM_USB_EP_TXMAXP_MULTM1: u16 = 0x1800;
/// Maximum Payload
pub const BITM_USB_EP_TXMAXP_MAXPAY: u16 = 0x07FF;

// USB_EP0_CSR_H
pub const BITP_USB_EP0_CSR_H_DISPING: u32 = 11;
pub const BITP_USB_EP0_CSR_H_DATGLEN: u32 = 10;
pub const BITP_USB_EP0_CSR_H_DATGL: u32 = 9;
pub const BITP_USB_EP0_CSR_H_FLUSHFIFO: u32 = 8;
pub const BITP_USB_EP0_CSR_H_NAKTO: u32 = 7;
pub const BITP_USB_EP0_CSR_H_STATUSPKT: u32 = 6;
pub const BITP_USB_EP0_CSR_H_REQPKT: u32 = 5;
pub const BITP_USB_EP0_CSR_H_TOERR: u32 = 4;
pub const BITP_USB_EP0_CSR_H_SETUPPKT: u32 = 3;
pub const BITP_USB_EP0_CSR_H_RXSTALL: u32 = 2;
pub const BITP_USB_EP0_CSR_H_TXPKTRDY: u32 = 1;
pub const BITP_USB_EP0_CSR_H_RXPKTRDY: u32 = 0;
/// Disable Ping
pub const BITM_USB_EP0_CSR_H_DISPING: u16 = 0x0800;
/// Data Toggle Write Enable
pub const BITM_USB_EP0_CSR_H_DATGLEN: u16 = 0x0400;
/// Data Toggle
pub const BITM_USB_EP0_CSR_H_DATGL: u16 = 0x0200;
/// Flush Endpoint FIFO
pub const BITM_USB_EP0_CSR_H_FLUSHFIFO: u16 = 0x0100;
/// NAK Timeout
pub const BITM_USB_EP0_CSR_H_NAKTO: u16 = 0x0080;
/// Status Packet
pub const BITM_USB_EP0_CSR_H_STATUSPKT: u16 = 0x0040;
/// Request Packet
pub const BITM_USB_EP0_CSR_H_REQPKT: u16 = 0x0020;
/// Timeout Error
pub const BITM_USB_EP0_CSR_H_TOERR: u16 = 0x0010;
/// Setup Packet
pub const BITM_USB_EP0_CSR_H_SETUPPKT: u16 = 0x0008;
/// Rx Stall
pub const BITM_USB_EP0_CSR_H_RXSTALL: u16 = 0x0004;
/// Tx Packet Ready
pub const BITM_USB_EP0_CSR_H_TXPKTRDY: u16 = 0x0002;
/// Rx Packet Ready
pub const BITM_USB_EP0_CSR_H_RXPKTRDY: u16 = 0x0001;
/// Issue PING tokens
pub const ENUM_USB_EP0_CSR_H_NO_DISPING: u16 = 0x0000;
/// Do not issue PING
pub const ENUM_USB_EP0_CSR_H_DISPING: u16 = 0x0800;
/// Disable Write to DATGL
pub const ENUM_USB_EP0_CSR_H_NO_DATGLEN: u16 = 0x0000;
/// Enable Write to DATGL
pub const ENUM_USB_EP0_CSR_H_DATGLEN: u16 = 0x0400;
/// DATA0 is Set
pub const ENUM_USB_EP0_CSR_H_NO_DATATGL: u16 = 0x0000;
/// DATA1 is Set
pub const ENUM_USB_EP0_CSR_H_DATATGL: u16 = 0x0200;
/// No Flush
pub const ENUM_USB_EP0_CSR_H_NO_FLUSH: u16 = 0x0000;
/// Flush Endpoint FIFO
pub const ENUM_USB_EP0_CSR_H_FLUSH: u16 = 0x0100;
/// No Status
pub const ENUM_USB_EP0_CSR_H_NO_NAKTO: u16 = 0x0000;
/// Endpoint Halted (NAK Timeout)
pub const ENUM_USB_EP0_CSR_H_NAKTO: u16 = 0x0080;
/// No Request
pub const ENUM_USB_EP0_CSR_H_NO_STATPKT: u16 = 0x0000;
/// Request Status Transaction
pub const ENUM_USB_EP0_CSR_H_STATPKT: u16 = 0x0040;
/// No Request
pub const ENUM_USB_EP0_CSR_H_NO_REQPKT: u16 = 0x0000;
/// Send IN Tokens to Device
pub const ENUM_USB_EP0_CSR_H_REQPKT: u16 = 0x0020;
/// No Status
pub const ENUM_USB_EP0_CSR_H_NO_TOERR: u16 = 0x0000;
/// Timeout Error
pub const ENUM_USB_EP0_CSR_H_TOERR: u16 = 0x0010;
/// No Request
pub const ENUM_USB_EP0_CSR_H_NO_SETUPPKT: u16 = 0x0000;
/// Send SETUP token
pub const ENUM_USB_EP0_CSR_H_SETUPPKT: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EP0_CSR_H_NO_RXSTALL: u16 = 0x0000;
/// Stall Received from Device
pub const ENUM_USB_EP0_CSR_H_RXSTALL: u16 = 0x0004;
/// No Tx Packet
pub const ENUM_USB_EP0_CSR_H_NO_TXPKTRDY: u16 = 0x0000;
/// Tx Packet in Endpoint FIFO
pub const ENUM_USB_EP0_CSR_H_TXPKTRDY: u16 = 0x0002;
/// No Rx Packet
pub const ENUM_USB_EP0_CSR_H_NO_RXPKTRDY: u16 = 0x0000;
/// Rx Packet in Endpoint FIFO
pub const ENUM_USB_EP0_CSR_H_RXPKTRDY: u16 = 0x0001;

// USB_EP_TXCSR_H
pub const BITP_USB_EP_TXCSR_H_AUTOSET: u32 = 15;
pub const BITP_USB_EP_TXCSR_H_DMAREQEN: u32 = 12;
pub const BITP_USB_EP_TXCSR_H_FRCDATATGL: u32 = 11;
pub const BITP_USB_EP_TXCSR_H_DMAREQMODE: u32 = 10;
pub const BITP_USB_EP_TXCSR_H_DATGLEN: u32 = 9;
pub const BITP_USB_EP_TXCSR_H_DATGL: u32 = 8;
pub const BITP_USB_EP_TXCSR_H_NAKTOINCMP: u32 = 7;
pub const BITP_USB_EP_TXCSR_H_CLRDATATGL: u32 = 6;
pub const BITP_USB_EP_TXCSR_H_RXSTALL: u32 = 5;
pub const BITP_USB_EP_TXCSR_H_SETUPPKT: u32 = 4;
pub const BITP_USB_EP_TXCSR_H_FLUSHFIFO: u32 = 3;
pub const BITP_USB_EP_TXCSR_H_TXTOERR: u32 = 2;
pub const BITP_USB_EP_TXCSR_H_NEFIFO: u32 = 1;
pub const BITP_USB_EP_TXCSR_H_TXPKTRDY: u32 = 0;
/// TxPkRdy Autoset Enable
pub const BITM_USB_EP_TXCSR_H_AUTOSET: u16 = 0x8000;
/// DMA Request Enable Tx EP
pub const BITM_USB_EP_TXCSR_H_DMAREQEN: u16 = 0x1000;
/// Force Data Toggle
pub const BITM_USB_EP_TXCSR_H_FRCDATATGL: u16 = 0x0800;
/// DMA Mode Select
pub const BITM_USB_EP_TXCSR_H_DMAREQMODE: u16 = 0x0400;
/// Data Toggle Write Enable
pub const BITM_USB_EP_TXCSR_H_DATGLEN: u16 = 0x0200;
/// Data Toggle
pub const BITM_USB_EP_TXCSR_H_DATGL: u16 = 0x0100;
/// NAK Timeout Incomplete
pub const BITM_USB_EP_TXCSR_H_NAKTOINCMP: u16 = 0x0080;
/// Clear Endpoint Data Toggle
pub const BITM_USB_EP_TXCSR_H_CLRDATATGL: u16 = 0x0040;
/// Rx STALL
pub const BITM_USB_EP_TXCSR_H_RXSTALL: u16 = 0x0020;
/// Setup Packet
pub const BITM_USB_EP_TXCSR_H_SETUPPKT: u16 = 0x0010;
/// Flush Endpoint FIFO
pub const BITM_USB_EP_TXCSR_H_FLUSHFIFO: u16 = 0x0008;
/// Tx Timeout Error
pub const BITM_USB_EP_TXCSR_H_TXTOERR: u16 = 0x0004;
/// Not Empty FIFO
pub const BITM_USB_EP_TXCSR_H_NEFIFO: u16 = 0x0002;
/// Tx Packet Ready
pub const BITM_USB_EP_TXCSR_H_TXPKTRDY: u16 = 0x0001;
/// Disable Autoset
pub const ENUM_USB_EP_TXCSR_H_NO_AUTOSET: u16 = 0x0000;
/// Enable Autoset
pub const ENUM_USB_EP_TXCSR_H_AUTOSET: u16 = 0x8000;
/// Disable DMA Request
pub const ENUM_USB_EP_TXCSR_H_DMAREQDIS: u16 = 0x0000;
/// Enable DMA Request
pub const ENUM_USB_EP_TXCSR_H_DMAREQEN: u16 = 0x1000;
/// No Action
pub const ENUM_USB_EP_TXCSR_H_NO_FRCTGL: u16 = 0x0000;
/// Toggle Endpoint Data
pub const ENUM_USB_EP_TXCSR_H_FRCTGL: u16 = 0x0800;
/// DMA Request Mode 0
pub const ENUM_USB_EP_TXCSR_H_DMARQMODE0: u16 = 0x0000;
/// DMA Request Mode 1
pub const ENUM_USB_EP_TXCSR_H_DMARQMODE1: u16 = 0x0400;
/// Disable Write to DATGL
pub const ENUM_USB_EP_TXCSR_H_NO_DATGLEN: u16 = 0x0000;
/// Enable Write to DATGL
pub const ENUM_USB_EP_TXCSR_H_DATGLEN: u16 = 0x0200;
/// DATA0 is set
pub const ENUM_USB_EP_TXCSR_H_NO_DATGL: u16 = 0x0000;
/// DATA1 is set
pub const ENUM_USB_EP_TXCSR_H_DATGL: u16 = 0x0100;
/// No Status
pub const ENUM_USB_EP_TXCSR_H_NO_NAKTO: u16 = 0x0000;
/// NAK Timeout Over Maximum
pub const ENUM_USB_EP_TXCSR_H_NAKTO: u16 = 0x0080;
/// No Action
pub const ENUM_USB_EP_TXCSR_H_NO_CLRTGL: u16 = 0x0000;
/// Reset EP Data Toggle to 0
pub const ENUM_USB_EP_TXCSR_H_CLRTGL: u16 = 0x0040;
/// No Status
pub const ENUM_USB_EP_TXCSR_H_NO_RXSTALL: u16 = 0x0000;
/// Stall Received from Device
pub const ENUM_USB_EP_TXCSR_H_RXSTALL: u16 = 0x0020;
/// No Request
pub const ENUM_USB_EP_TXCSR_H_NO_SETUPPK: u16 = 0x0000;
/// Send SETUP Token
pub const ENUM_USB_EP_TXCSR_H_SETUPPKT: u16 = 0x0010;
/// No Flush
pub const ENUM_USB_EP_TXCSR_H_NO_FLUSH: u16 = 0x0000;
/// Flush endpoint FIFO
pub const ENUM_USB_EP_TXCSR_H_FLUSH: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EP_TXCSR_H_NO_TXTOERR: u16 = 0x0000;
/// Tx Timeout Error
pub const ENUM_USB_EP_TXCSR_H_TXTOERR: u16 = 0x0004;
/// FIFO Empty
pub const ENUM_USB_EP_TXCSR_H_NO_NEFIFO: u16 = 0x0000;
/// FIFO Not Empty
pub const ENUM_USB_EP_TXCSR_H_NEFIFO: u16 = 0x0002;
/// No Tx Packet
pub const ENUM_USB_EP_TXCSR_H_NO_PKTRDY: u16 = 0x0000;
/// Tx Packet in Endpoint FIFO
pub const ENUM_USB_EP_TXCSR_H_PKTRDY: u16 = 0x0001;

// USB_EP0_CSR_P
pub const BITP_USB_EP0_CSR_P_FLUSHFIFO: u32 = 8;
pub const BITP_USB_EP0_CSR_P_SSETUPEND: u32 = 7;
pub const BITP_USB_EP0_CSR_P_SPKTRDY: u32 = 6;
pub const BITP_USB_EP0_CSR_P_SENDSTALL: u32 = 5;
pub const BITP_USB_EP0_CSR_P_SETUPEND: u32 = 4;
pub const BITP_USB_EP0_CSR_P_DATAEND: u32 = 3;
pub const BITP_USB_EP0_CSR_P_SENTSTALL: u32 = 2;
pub const BITP_USB_EP0_CSR_P_TXPKTRDY: u32 = 1;
pub const BITP_USB_EP0_CSR_P_RXPKTRDY: u32 = 0;
/// Flush Endpoint FIFO
pub const BITM_USB_EP0_CSR_P_FLUSHFIFO: u16 = 0x0100;
/// Service Setup End
pub const BITM_USB_EP0_CSR_P_SSETUPEND: u16 = 0x0080;
/// Service Rx Packet Ready
pub const BITM_USB_EP0_CSR_P_SPKTRDY: u16 = 0x0040;
/// Send Stall
pub const BITM_USB_EP0_CSR_P_SENDSTALL: u16 = 0x0020;
/// Setup End
pub const BITM_USB_EP0_CSR_P_SETUPEND: u16 = 0x0010;
/// Data End
pub const BITM_USB_EP0_CSR_P_DATAEND: u16 = 0x0008;
/// Sent Stall
pub const BITM_USB_EP0_CSR_P_SENTSTALL: u16 = 0x0004;
/// Tx Packet Ready
pub const BITM_USB_EP0_CSR_P_TXPKTRDY: u16 = 0x0002;
/// Rx Packet Ready
pub const BITM_USB_EP0_CSR_P_RXPKTRDY: u16 = 0x0001;
/// No Flush
pub const ENUM_USB_EP0_CSR_P_NO_FLUSH: u16 = 0x0000;
/// Flush Endpoint FIFO
pub const ENUM_USB_EP0_CSR_P_FLUSH: u16 = 0x0100;
/// No Action
pub const ENUM_USB_EP0_CSR_P_NOSSETUPEND: u16 = 0x0000;
/// Clear SETUPEND Bit
pub const ENUM_USB_EP0_CSR_P_SSETUPEND: u16 = 0x0080;
/// No Action
pub const ENUM_USB_EP0_CSR_P_NO_SPKTRDY: u16 = 0x0000;
/// Clear RXPKTRDY Bit
pub const ENUM_USB_EP0_CSR_P_SPKTRDY: u16 = 0x0040;
/// No Action
pub const ENUM_USB_EP0_CSR_P_NO_STALL: u16 = 0x0000;
/// Terminate Current Transaction
pub const ENUM_USB_EP0_CSR_P_STALL: u16 = 0x0020;
/// No Status
pub const ENUM_USB_EP0_CSR_P_NO_SETUPEND: u16 = 0x0000;
/// Setup Ended before DATAEND
pub const ENUM_USB_EP0_CSR_P_SETUPEND: u16 = 0x0010;
/// No Status
pub const ENUM_USB_EP0_CSR_P_NO_DATAEND: u16 = 0x0000;
/// Data End Condition
pub const ENUM_USB_EP0_CSR_P_DATAEND: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EP0_CSR_P_NO_STALSNT: u16 = 0x0000;
/// Transmitted STALL Handshake
pub const ENUM_USB_EP0_CSR_P_STALSNT: u16 = 0x0004;
pub const ENUM_USB_EP0_CSR_P_NO_TXPKTRDY: u16 = 0x0000;
/// Set this bit after loading a data packet into the FIFO
pub const ENUM_USB_EP0_CSR_P_TXPKTRDY: u16 = 0x0002;
/// No Rx Packet
pub const ENUM_USB_EP0_CSR_P_NO_PKTRDY: u16 = 0x0000;
/// Rx Packet in Endpoint FIFO
pub const ENUM_USB_EP0_CSR_P_PKTRDY: u16 = 0x0001;

// USB_EP_TXCSR_P
pub const BITP_USB_EP_TXCSR_P_AUTOSET: u32 = 15;
pub const BITP_USB_EP_TXCSR_P_ISO: u32 = 14;
pub const BITP_USB_EP_TXCSR_P_DMAREQEN: u32 = 12;
pub const BITP_USB_EP_TXCSR_P_FRCDATATGL: u32 = 11;
pub const BITP_USB_EP_TXCSR_P_DMAREQMODE: u32 = 10;
pub const BITP_USB_EP_TXCSR_P_INCOMPTX: u32 = 7;
pub const BITP_USB_EP_TXCSR_P_CLRDATATGL: u32 = 6;
pub const BITP_USB_EP_TXCSR_P_SENTSTALL: u32 = 5;
pub const BITP_USB_EP_TXCSR_P_SENDSTALL: u32 = 4;
pub const BITP_USB_EP_TXCSR_P_FLUSHFIFO: u32 = 3;
pub const BITP_USB_EP_TXCSR_P_URUNERR: u32 = 2;
pub const BITP_USB_EP_TXCSR_P_NEFIFO: u32 = 1;
pub const BITP_USB_EP_TXCSR_P_TXPKTRDY: u32 = 0;
/// TxPkRdy Autoset Enable
pub const BITM_USB_EP_TXCSR_P_AUTOSET: u16 = 0x8000;
/// Isochronous Transfers Enable
pub const BITM_USB_EP_TXCSR_P_ISO: u16 = 0x4000;
/// DMA Request Enable Tx EP
pub const BITM_USB_EP_TXCSR_P_DMAREQEN: u16 = 0x1000;
/// Force Data Toggle
pub const BITM_USB_EP_TXCSR_P_FRCDATATGL: u16 = 0x0800;
/// DMA Mode Select
pub const BITM_USB_EP_TXCSR_P_DMAREQMODE: u16 = 0x0400;
/// Incomplete Tx
pub const BITM_USB_EP_TXCSR_P_INCOMPTX: u16 = 0x0080;
/// Clear Endpoint Data Toggle
pub const BITM_USB_EP_TXCSR_P_CLRDATATGL: u16 = 0x0040;
/// Sent STALL
pub const BITM_USB_EP_TXCSR_P_SENTSTALL: u16 = 0x0020;
/// Send STALL
pub const BITM_USB_EP_TXCSR_P_SENDSTALL: u16 = 0x0010;
/// Flush Endpoint FIFO
pub const BITM_USB_EP_TXCSR_P_FLUSHFIFO: u16 = 0x0008;
/// Underrun Error
pub const BITM_USB_EP_TXCSR_P_URUNERR: u16 = 0x0004;
/// Not Empty FIFO
pub const BITM_USB_EP_TXCSR_P_NEFIFO: u16 = 0x0002;
/// Tx Packet Ready
pub const BITM_USB_EP_TXCSR_P_TXPKTRDY: u16 = 0x0001;
/// Disable Autoset
pub const ENUM_USB_EP_TXCSR_P_NO_AUTOSET: u16 = 0x0000;
/// Enable Autoset
pub const ENUM_USB_EP_TXCSR_P_AUTOSET: u16 = 0x8000;
/// Disable Tx EP Isochronous Transfers
pub const ENUM_USB_EP_TXCSR_P_ISODIS: u16 = 0x0000;
/// Enable Tx EP Isochronous Transfers
pub const ENUM_USB_EP_TXCSR_P_ISOEN: u16 = 0x4000;
/// Disable DMA Request
pub const ENUM_USB_EP_TXCSR_P_DMAREQDIS: u16 = 0x0000;
/// Enable DMA Request
pub const ENUM_USB_EP_TXCSR_P_DMAREQEN: u16 = 0x1000;
/// No Action
pub const ENUM_USB_EP_TXCSR_P_NO_FRCTGL: u16 = 0x0000;
/// Toggle Endpoint Data
pub const ENUM_USB_EP_TXCSR_P_FRCTGL: u16 = 0x0800;
/// DMA Request Mode 0
pub const ENUM_USB_EP_TXCSR_P_DMARQMODE0: u16 = 0x0000;
/// DMA Request Mode 1
pub const ENUM_USB_EP_TXCSR_P_DMARQMODE1: u16 = 0x0400;
/// No Status
pub const ENUM_USB_EP_TXCSR_P_NO_INCOMP: u16 = 0x0000;
/// Incomplete Tx (Insufficient IN Tokens)
pub const ENUM_USB_EP_TXCSR_P_INCOMP: u16 = 0x0080;
/// No Action
pub const ENUM_USB_EP_TXCSR_P_NO_CLRTGL: u16 = 0x0000;
/// Reset EP Data Toggle to 0
pub const ENUM_USB_EP_TXCSR_P_CLRTGL: u16 = 0x0040;
/// No Status
pub const ENUM_USB_EP_TXCSR_P_NO_STALSNT: u16 = 0x0000;
/// STALL Handshake Transmitted
pub const ENUM_USB_EP_TXCSR_P_STALSNT: u16 = 0x0020;
/// No Request
pub const ENUM_USB_EP_TXCSR_P_NO_STALL: u16 = 0x0000;
/// Request STALL Handshake Transmission
pub const ENUM_USB_EP_TXCSR_P_STALL: u16 = 0x0010;
/// No Flush
pub const ENUM_USB_EP_TXCSR_P_NO_FLUSH: u16 = 0x0000;
/// Flush endpoint FIFO
pub const ENUM_USB_EP_TXCSR_P_FLUSH: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EP_TXCSR_P_NO_URUNERR: u16 = 0x0000;
/// Underrun Error
pub const ENUM_USB_EP_TXCSR_P_URUNERR: u16 = 0x0004;
/// FIFO Empty
pub const ENUM_USB_EP_TXCSR_P_NO_FIFONE: u16 = 0x0000;
/// FIFO Not Empty
pub const ENUM_USB_EP_TXCSR_P_FIFONE: u16 = 0x0002;
/// No Tx Packet
pub const ENUM_USB_EP_TXCSR_P_NO_PKTRDY: u16 = 0x0000;
/// Tx Packet in Endpoint FIFO
pub const ENUM_USB_EP_TXCSR_P_PKTRDY: u16 = 0x0001;

// USB_EP_RXMAXP
pub const BITP_USB_EP_RXMAXP_MULTM1: u32 = 11;
pub const BITP_USB_EP_RXMAXP_MAXPAY: u32 = 0;
/// Multi-Packets per Micro-frame
pub const BITM_USB_EP_RXMAXP_MULTM1: u16 = 0x1800;
/// Maximum Payload
pub const BITM_USB_EP_RXMAXP_MAXPAY: u16 = 0x07FF;

// USB_EP_RXCSR_H
pub const BITP_USB_EP_RXCSR_H_AUTOCLR: u32 = 15;
pub const BITP_USB_EP_RXCSR_H_AUTOREQ: u32 = 14;
pub const BITP_USB_EP_RXCSR_H_DMAREQEN: u32 = 13;
pub const BITP_USB_EP_RXCSR_H_PIDERR: u32 = 12;
pub const BITP_USB_EP_RXCSR_H_DMAREQMODE: u32 = 11;
pub const BITP_USB_EP_RXCSR_H_DATGLEN: u32 = 10;
pub const BITP_USB_EP_RXCSR_H_DATGL: u32 = 9;
pub const BITP_USB_EP_RXCSR_H_INCOMPRX: u32 = 8;
pub const BITP_USB_EP_RXCSR_H_CLRDATATGL: u32 = 7;
pub const BITP_USB_EP_RXCSR_H_RXSTALL: u32 = 6;
pub const BITP_USB_EP_RXCSR_H_REQPKT: u32 = 5;
pub const BITP_USB_EP_RXCSR_H_FLUSHFIFO: u32 = 4;
pub const BITP_USB_EP_RXCSR_H_NAKTODERR: u32 = 3;
pub const BITP_USB_EP_RXCSR_H_RXTOERR: u32 = 2;
pub const BITP_USB_EP_RXCSR_H_FIFOFULL: u32 = 1;
pub const BITP_USB_EP_RXCSR_H_RXPKTRDY: u32 = 0;
/// Auto Clear Enable
pub const BITM_USB_EP_RXCSR_H_AUTOCLR: u16 = 0x8000;
/// Auto Request Clear Enable
pub const BITM_USB_EP_RXCSR_H_AUTOREQ: u16 = 0x4000;
/// DMA Request Enable Rx EP
pub const BITM_USB_EP_RXCSR_H_DMAREQEN: u16 = 0x2000;
/// Packet ID Error
pub const BITM_USB_EP_RXCSR_H_PIDERR: u16 = 0x1000;
/// DMA Mode Select
pub const BITM_USB_EP_RXCSR_H_DMAREQMODE: u16 = 0x0800;
/// Data Toggle Write Enable
pub const BITM_USB_EP_RXCSR_H_DATGLEN: u16 = 0x0400;
/// Data Toggle
pub const BITM_USB_EP_RXCSR_H_DATGL: u16 = 0x0200;
/// Incomplete Rx
pub const BITM_USB_EP_RXCSR_H_INCOMPRX: u16 = 0x0100;
/// Clear Endpoint Data Toggle
pub const BITM_USB_EP_RXCSR_H_CLRDATATGL: u16 = 0x0080;
/// Rx STALL
pub const BITM_USB_EP_RXCSR_H_RXSTALL: u16 = 0x0040;
/// Request Packet
pub const BITM_USB_EP_RXCSR_H_REQPKT: u16 = 0x0020;
/// Flush Endpoint FIFO
pub const BITM_USB_EP_RXCSR_H_FLUSHFIFO: u16 = 0x0010;
/// NAK Timeout Data Error
pub const BITM_USB_EP_RXCSR_H_NAKTODERR: u16 = 0x0008;
/// Rx Timeout Error
pub const BITM_USB_EP_RXCSR_H_RXTOERR: u16 = 0x0004;
/// FIFO Full
pub const BITM_USB_EP_RXCSR_H_FIFOFULL: u16 = 0x0002;
/// Rx Packet Ready
pub const BITM_USB_EP_RXCSR_H_RXPKTRDY: u16 = 0x0001;
/// Disable Auto Clear
pub const ENUM_USB_EP_RXCSR_H_NO_AUTOCLR: u16 = 0x0000;
/// Enable Auto Clear
pub const ENUM_USB_EP_RXCSR_H_AUTOCLR: u16 = 0x8000;
/// Disable Auto Request Clear
pub const ENUM_USB_EP_RXCSR_H_NO_AUTOREQ: u16 = 0x0000;
/// Enable Auto Request Clear
pub const ENUM_USB_EP_RXCSR_H_AUTOREQ: u16 = 0x4000;
/// Disable DMA Request
pub const ENUM_USB_EP_RXCSR_H_DMAREQDIS: u16 = 0x0000;
/// Enable DMA Request
pub const ENUM_USB_EP_RXCSR_H_DMAREQEN: u16 = 0x2000;
/// No Status
pub const ENUM_USB_EP_RXCSR_H_NO_PIDERR: u16 = 0x0000;
/// PID Error
pub const ENUM_USB_EP_RXCSR_H_PIDERR: u16 = 0x1000;
/// DMA Request Mode 0
pub const ENUM_USB_EP_RXCSR_H_DMARQMODE0: u16 = 0x0000;
/// DMA Request Mode 1
pub const ENUM_USB_EP_RXCSR_H_DMARQMODE1: u16 = 0x0800;
/// Disable Write to DATGL
pub const ENUM_USB_EP_RXCSR_H_DATGLDIS: u16 = 0x0000;
/// Enable Write to DATGL
pub const ENUM_USB_EP_RXCSR_H_DATGLEN: u16 = 0x0400;
/// DATA0 is Set
pub const ENUM_USB_EP_RXCSR_H_NO_DATGL: u16 = 0x0000;
/// DATA1 is Set
pub const ENUM_USB_EP_RXCSR_H_DATGL: u16 = 0x0200;
/// No Status
pub const ENUM_USB_EP_RXCSR_H_NO_INCOMP: u16 = 0x0000;
/// Incomplete Rx
pub const ENUM_USB_EP_RXCSR_H_INCOMP: u16 = 0x0100;
/// No Action
pub const ENUM_USB_EP_RXCSR_H_NO_CLRTGL: u16 = 0x0000;
/// Reset EP Data Toggle to 0
pub const ENUM_USB_EP_RXCSR_H_CLRTGL: u16 = 0x0080;
/// No Status
pub const ENUM_USB_EP_RXCSR_H_NO_RXSTALL: u16 = 0x0000;
/// Stall Received from Device
pub const ENUM_USB_EP_RXCSR_H_RXSTALL: u16 = 0x0040;
/// No Request
pub const ENUM_USB_EP_RXCSR_H_NO_REQPKT: u16 = 0x0000;
/// Send IN Tokens to Device
pub const ENUM_USB_EP_RXCSR_H_REQPKT: u16 = 0x0020;
/// No Flush
pub const ENUM_USB_EP_RXCSR_H_NO_FLUSH: u16 = 0x0000;
/// Flush Endpoint FIFO
pub const ENUM_USB_EP_RXCSR_H_FLUSH: u16 = 0x0010;
/// No Status
pub const ENUM_USB_EP_RXCSR_H_NO_NAKTO: u16 = 0x0000;
/// NAK Timeout Data Error
pub const ENUM_USB_EP_RXCSR_H_NAKTO: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EP_RXCSR_H_NO_RXTOERR: u16 = 0x0000;
/// Rx Timeout Error
pub const ENUM_USB_EP_RXCSR_H_RXTOERR: u16 = 0x0004;
/// No Status
pub const ENUM_USB_EP_RXCSR_H_NO_FIFOFUL: u16 = 0x0000;
/// FIFO Full
pub const ENUM_USB_EP_RXCSR_H_FIFOFUL: u16 = 0x0002;
/// No Rx Packet
pub const ENUM_USB_EP_RXCSR_H_NO_PKTRDY: u16 = 0x0000;
/// Rx Packet in Endpoint FIFO
pub const ENUM_USB_EP_RXCSR_H_PKTRDY: u16 = 0x0001;

// USB_EP_RXCSR_P
pub const BITP_USB_EP_RXCSR_P_AUTOCLR: u32 = 15;
pub const BITP_USB_EP_RXCSR_P_ISO: u32 = 14;
pub const BITP_USB_EP_RXCSR_P_DMAREQEN: u32 = 13;
pub const BITP_USB_EP_RXCSR_P_DNYETPERR: u32 = 12;
pub const BITP_USB_EP_RXCSR_P_DMAREQMODE: u32 = 11;
pub const BITP_USB_EP_RXCSR_P_INCOMPRX: u32 = 8;
pub const BITP_USB_EP_RXCSR_P_CLRDATATGL: u32 = 7;
pub const BITP_USB_EP_RXCSR_P_SENTSTALL: u32 = 6;
pub const BITP_USB_EP_RXCSR_P_SENDSTALL: u32 = 5;
pub const BITP_USB_EP_RXCSR_P_FLUSHFIFO: u32 = 4;
pub const BITP_USB_EP_RXCSR_P_DATAERR: u32 = 3;
pub const BITP_USB_EP_RXCSR_P_ORUNERR: u32 = 2;
pub const BITP_USB_EP_RXCSR_P_FIFOFULL: u32 = 1;
pub const BITP_USB_EP_RXCSR_P_RXPKTRDY: u32 = 0;
/// Auto Clear Enable
pub const BITM_USB_EP_RXCSR_P_AUTOCLR: u16 = 0x8000;
/// Isochronous Transfers
pub const BITM_USB_EP_RXCSR_P_ISO: u16 = 0x4000;
/// DMA Request Enable Rx EP
pub const BITM_USB_EP_RXCSR_P_DMAREQEN: u16 = 0x2000;
/// Disable NYET Handshake
pub const BITM_USB_EP_RXCSR_P_DNYETPERR: u16 = 0x1000;
/// DMA Mode Select
pub const BITM_USB_EP_RXCSR_P_DMAREQMODE: u16 = 0x0800;
/// Incomplete Rx
pub const BITM_USB_EP_RXCSR_P_INCOMPRX: u16 = 0x0100;
/// Clear Endpoint Data Toggle
pub const BITM_USB_EP_RXCSR_P_CLRDATATGL: u16 = 0x0080;
/// Sent STALL
pub const BITM_USB_EP_RXCSR_P_SENTSTALL: u16 = 0x0040;
/// Send STALL
pub const BITM_USB_EP_RXCSR_P_SENDSTALL: u16 = 0x0020;
/// Flush Endpoint FIFO
pub const BITM_USB_EP_RXCSR_P_FLUSHFIFO: u16 = 0x0010;
/// Data Error
pub const BITM_USB_EP_RXCSR_P_DATAERR: u16 = 0x0008;
/// OUT Run Error
pub const BITM_USB_EP_RXCSR_P_ORUNERR: u16 = 0x0004;
/// FIFO Full
pub const BITM_USB_EP_RXCSR_P_FIFOFULL: u16 = 0x0002;
/// Rx Packet Ready
pub const BITM_USB_EP_RXCSR_P_RXPKTRDY: u16 = 0x0001;
/// Disable Auto Clear
pub const ENUM_USB_EP_RXCSR_P_NO_AUTOCLR: u16 = 0x0000;
/// Enable Auto Clear
pub const ENUM_USB_EP_RXCSR_P_AUTOCLR: u16 = 0x8000;
/// This bit should be cleared for bulk or interrupt transfers.
pub const ENUM_USB_EP_RXCSR_P_ISODIS: u16 = 0x0000;
/// This bit should be set for isochronous transfers.
pub const ENUM_USB_EP_RXCSR_P_ISOEN: u16 = 0x4000;
/// Disable DMA Request
pub const ENUM_USB_EP_RXCSR_P_DMAREQDIS: u16 = 0x0000;
/// Enable DMA Request
pub const ENUM_USB_EP_RXCSR_P_DMAREQEN: u16 = 0x2000;
/// Enable NYET Handshake
pub const ENUM_USB_EP_RXCSR_P_DNYTERREN: u16 = 0x0000;
/// Disable NYET Handshake
pub const ENUM_USB_EP_RXCSR_P_DNYTERRDIS: u16 = 0x1000;
/// DMA Request Mode 0
pub const ENUM_USB_EP_RXCSR_P_DMARQMODE0: u16 = 0x0000;
/// DMA Request Mode 1
pub const ENUM_USB_EP_RXCSR_P_DMARQMODE1: u16 = 0x0800;
/// No Status
pub const ENUM_USB_EP_RXCSR_P_NO_INCOMP: u16 = 0x0000;
/// Incomplete Rx
pub const ENUM_USB_EP_RXCSR_P_INCOMP: u16 = 0x0100;
/// No Action
pub const ENUM_USB_EP_RXCSR_P_NO_CLRTGL: u16 = 0x0000;
/// Reset EP Data Toggle to 0
pub const ENUM_USB_EP_RXCSR_P_CLRTGL: u16 = 0x0080;
/// No Status
pub const ENUM_USB_EP_RXCSR_P_NO_STALSNT: u16 = 0x0000;
/// STALL Handshake Transmitted
pub const ENUM_USB_EP_RXCSR_P_STALSNT: u16 = 0x0040;
/// No Action
pub const ENUM_USB_EP_RXCSR_P_NO_STALL: u16 = 0x0000;
/// Request STALL Handshake
pub const ENUM_USB_EP_RXCSR_P_STALL: u16 = 0x0020;
/// No Flush
pub const ENUM_USB_EP_RXCSR_P_NO_FLUSH: u16 = 0x0000;
/// Flush Endpoint FIFO
pub const ENUM_USB_EP_RXCSR_P_FLUSH: u16 = 0x0010;
/// No Status
pub const ENUM_USB_EP_RXCSR_P_NO_DATAERR: u16 = 0x0000;
/// Data Error
pub const ENUM_USB_EP_RXCSR_P_DATAERR: u16 = 0x0008;
/// No Status
pub const ENUM_USB_EP_RXCSR_P_NO_ORUNERR: u16 = 0x0000;
/// OUT Run Error
pub const ENUM_USB_EP_RXCSR_P_ORUNERR: u16 = 0x0004;
/// No Status
pub const ENUM_USB_EP_RXCSR_P_NO_FIFOFUL: u16 = 0x0000;
/// FIFO Full
pub const ENUM_USB_EP_RXCSR_P_FIFOFUL: u16 = 0x0002;
/// No Rx Packet
pub const ENUM_USB_EP_RXCSR_P_NO_PKTRDY: u16 = 0x0000;
/// Rx Packet in Endpoint FIFO
pub const ENUM_USB_EP_RXCSR_P_PKTRDY: u16 = 0x0001;

// USB_EP0_CNT
pub const BITP_USB_EP0_CNT_RXCNT: u32 = 0;
/// Rx Byte Count Value
pub const BITM_USB_EP0_CNT_RXCNT: u16 = 0x007F;

// USB_EP_RXCNT
pub const BITP_USB_EP_RXCNT_EPRXCNT: u32 = 0;
/// EP Rx Count
pub const BITM_USB_EP_RXCNT_EPRXCNT: u16 = 0x3FFF;

// USB_EP0_TYPE
pub const BITP_USB_EP0_TYPE_SPEED: u32 = 0;
/// Speed of Operation Value
pub const BITM_USB_EP0_TYPE_SPEED: u8 = 0x03;

// USB_EP_TXTYPE
pub const BITP_USB_EP_TXTYPE_SPEED: u32 = 6;
pub const BITP_USB_EP_TXTYPE_PROTOCOL: u32 = 4;
pub const BITP_USB_EP_TXTYPE_TGTEP: u32 = 0;
/// Speed of Operation Value
pub const BITM_USB_EP_TXTYPE_SPEED: u8 = 0xC0;
/// Protocol for Transfer
pub const BITM_USB_EP_TXTYPE_PROTOCOL: u8 = 0x30;
/// Target Endpoint Number
pub const BITM_USB_EP_TXTYPE_TGTEP: u8 = 0x0F;
/// Same Speed as the Core
pub const ENUM_USB_EP_TXTYPE_UNUSED: u8 = 0x00;
/// High Speed
pub const ENUM_USB_EP_TXTYPE_HIGHSPEED: u8 = 0x40;
/// Full Speed
pub const ENUM_USB_EP_TXTYPE_FULLSPEED: u8 = 0x80;
/// Low Speed
pub const ENUM_USB_EP_TXTYPE_LOWSPEED: u8 = 0xC0;
/// Control
pub const ENUM_USB_EP_TXTYPE_CONTROL: u8 = 0x00;
/// Isochronous
pub const ENUM_USB_EP_TXTYPE_ISO: u8 = 0x10;
/// Bulk
pub const ENUM_USB_EP_TXTYPE_BULK: u8 = 0x20;
/// Interrupt
pub const ENUM_USB_EP_TXTYPE_INT: u8 = 0x30;
/// Endpoint 0
pub const ENUM_USB_EP_TXTYPE_TGTEP0: u8 = 0x00;
/// Endpoint 1
pub const ENUM_USB_EP_TXTYPE_TGTEP1: u8 = 0x01;
/// Endpoint 10
pub const ENUM_USB_EP_TXTYPE_TGTEP10: u8 = 0x0A;
/// Endpoint 11
pub const ENUM_USB_EP_TXTYPE_TGTEP11: u8 = 0x0B;
/// Endpoint 12
pub const ENUM_USB_EP_TXTYPE_TGTEP12: u8 = 0x0C;
/// Endpoint 13
pub const ENUM_USB_EP_TXTYPE_TGTEP13: u8 = 0x0D;
/// Endpoint 14
pub const ENUM_USB_EP_TXTYPE_TGTEP14: u8 = 0x0E;
/// Endpoint 15
pub const ENUM_USB_EP_TXTYPE_TGTEP15: u8 = 0x0F;
/// Endpoint 2
pub const ENUM_USB_EP_TXTYPE_TGTEP2: u8 = 0x02;
/// Endpoint 3
pub const ENUM_USB_EP_TXTYPE_TGTEP3: u8 = 0x03;
/// Endpoint 4
pub const ENUM_USB_EP_TXTYPE_TGTEP4: u8 = 0x04;
/// Endpoint 5
pub const ENUM_USB_EP_TXTYPE_TGTEP5: u8 = 0x05;
/// Endpoint 6
pub const ENUM_USB_EP_TXTYPE_TGTEP6: u8 = 0x06;
/// Endpoint 7
pub const ENUM_USB_EP_TXTYPE_TGTEP7: u8 = 0x07;
/// Endpoint 8
pub const ENUM_USB_EP_TXTYPE_TGTEP8: u8 = 0x08;
/// Endpoint 9
pub const ENUM_USB_EP_TXTYPE_TGTEP9: u8 = 0x09;

// USB_EP0_NAKLIMIT
pub const BITP_USB_EP0_NAKLIMIT_VALUE: u32 = 0;
/// Endpoint 0 Timeout Value (in Frames)
pub const BITM_USB_EP0_NAKLIMIT_VALUE: u8 = 0x1F;

// USB_EP_RXTYPE
pub const BITP_USB_EP_RXTYPE_SPEED: u32 = 6;
pub const BITP_USB_EP_RXTYPE_PROTOCOL: u32 = 4;
pub const BITP_USB_EP_RXTYPE_TGTEP: u32 = 0;
/// Speed of Operation Value
pub const BITM_USB_EP_RXTYPE_SPEED: u8 = 0xC0;
/// Protocol for Transfer
pub const BITM_USB_EP_RXTYPE_PROTOCOL: u8 = 0x30;
/// Target Endpoint Number
pub const BITM_USB_EP_RXTYPE_TGTEP: u8 = 0x0F;
/// Same Speed as the Core
pub const ENUM_USB_EP_RXTYPE_UNUSED: u8 = 0x00;
/// High Speed
pub const ENUM_USB_EP_RXTYPE_HIGHSPEED: u8 = 0x40;
/// Full Speed
pub const ENUM_USB_EP_RXTYPE_FULLSPEED: u8 = 0x80;
/// Low Speed
pub const ENUM_USB_EP_RXTYPE_LOWSPEED: u8 = 0xC0;
/// Control
pub const ENUM_USB_EP_RXTYPE_CONTROL: u8 = 0x00;
/// Isochronous
pub const ENUM_USB_EP_RXTYPE_ISO: u8 = 0x10;
/// Bulk
pub const ENUM_USB_EP_RXTYPE_BULK: u8 = 0x20;
/// Interrupt
pub const ENUM_USB_EP_RXTYPE_INT: u8 = 0x30;
/// Endpoint 0
pub const ENUM_USB_EP_RXTYPE_TGTEP0: u8 = 0x00;
/// Endpoint 1
pub const ENUM_USB_EP_RXTYPE_TGTEP1: u8 = 0x01;
/// Endpoint 10
pub const ENUM_USB_EP_RXTYPE_TGTEP10: u8 = 0x0A;
/// Endpoint 11
pub const ENUM_USB_EP_RXTYPE_TGTEP11: u8 = 0x0B;
/// Endpoint 12
pub const ENUM_USB_EP_RXTYPE_TGTEP12: u8 = 0x0C;
/// Endpoint 13
pub const ENUM_USB_EP_RXTYPE_TGTEP13: u8 = 0x0D;
/// Endpoint 14
pub const ENUM_USB_EP_RXTYPE_TGTEP14: u8 = 0x0E;
/// Endpoint 15
pub const ENUM_USB_EP_RXTYPE_TGTEP15: u8 = 0x0F;
/// Endpoint 2
pub const ENUM_USB_EP_RXTYPE_TGTEP2: u8 = 0x02;
/// Endpoint 3
pub const ENUM_USB_EP_RXTYPE_TGTEP3: u8 = 0x03;
/// Endpoint 4
pub const ENUM_USB_EP_RXTYPE_TGTEP4: u8 = 0x04;
/// Endpoint 5
pub const ENUM_USB_EP_RXTYPE_TGTEP5: u8 = 0x05;
/// Endpoint 6
pub const ENUM_USB_EP_RXTYPE_TGTEP6: u8 = 0x06;
/// Endpoint 7
pub const ENUM_USB_EP_RXTYPE_TGTEP7: u8 = 0x07;
/// Endpoint 8
pub const ENUM_USB_EP_RXTYPE_TGTEP8: u8 = 0x08;
/// Endpoint 9
pub const ENUM_USB_EP_RXTYPE_TGTEP9: u8 = 0x09;

// USB_EP0_CFGDATA
pub const BITP_USB_EP0_CFGDATA_MPRX: u32 = 7;
pub const BITP_USB_EP0_CFGDATA_MPTX: u32 = 6;
pub const BITP_USB_EP0_CFGDATA_BIGEND: u32 = 5;
pub const BITP_USB_EP0_CFGDATA_HBRX: u32 = 4;
pub const BITP_USB_EP0_CFGDATA_HBTX: u32 = 3;
pub const BITP_USB_EP0_CFGDATA_DYNFIFO: u32 = 2;
pub const BITP_USB_EP0_CFGDATA_SOFTCON: u32 = 1;
pub const BITP_USB_EP0_CFGDATA_UTMIWID: u32 = 0;
/// Multi-Packet Aggregate for Rx Enable
pub const BITM_USB_EP0_CFGDATA_MPRX: u8 = 0x80;
/// Multi-Packet Split for Tx Enable
pub const BITM_USB_EP0_CFGDATA_MPTX: u8 = 0x40;
/// Big Endian Data
pub const BITM_USB_EP0_CFGDATA_BIGEND: u8 = 0x20;
/// High Bandwidth Rx Enable
pub const BITM_USB_EP0_CFGDATA_HBRX: u8 = 0x10;
/// High Bandwidth Tx Enable
pub const BITM_USB_EP0_CFGDATA_HBTX: u8 = 0x08;
/// Dynamic FIFO Size Enable
pub const BITM_USB_EP0_CFGDATA_DYNFIFO: u8 = 0x04;
/// Soft Connect Enable
pub const BITM_USB_EP0_CFGDATA_SOFTCON: u8 = 0x02;
/// UTMI Data Width
pub const BITM_USB_EP0_CFGDATA_UTMIWID: u8 = 0x01;
/// No Aggregate Rx Bulk Packets
pub const ENUM_USB_EP0_CFGDATA_MPRXDIS: u8 = 0x00;
/// Aggregate Rx Bulk Packets
pub const ENUM_USB_EP0_CFGDATA_MPRXEN: u8 = 0x80;
/// No Split Tx Bulk Packets
pub const ENUM_USB_EP0_CFGDATA_MPTXDIS: u8 = 0x00;
/// Split Tx Bulk Packets
pub const ENUM_USB_EP0_CFGDATA_MPTXEN: u8 = 0x40;
/// Little Endian Configuration
pub const ENUM_USB_EP0_CFGDATA_BIGENDDIS: u8 = 0x00;
/// Big Endian Configuration
pub const ENUM_USB_EP0_CFGDATA_BIGENDEN: u8 = 0x20;
/// No High Bandwidth Rx
pub const ENUM_USB_EP0_CFGDATA_HBRXDIS: u8 = 0x00;
/// High Bandwidth Rx
pub const ENUM_USB_EP0_CFGDATA_HBRXEN: u8 = 0x10;
/// No High Bandwidth Tx
pub const ENUM_USB_EP0_CFGDATA_HBTXDIS: u8 = 0x00;
/// High Bandwidth Tx
pub const ENUM_USB_EP0_CFGDATA_HBTXEN: u8 = 0x08;
/// No Dynamic FIFO Size
pub const ENUM_USB_EP0_CFGDATA_DYNSZDIS: u8 = 0x00;
/// Dynamic FIFO Size
pub const ENUM_USB_EP0_CFGDATA_DYNSZEN: u8 = 0x04;
/// No Soft Connect
pub const ENUM_USB_EP0_CFGDATA_SFTCONDIS: u8 = 0x00;
/// Soft Connect
pub const ENUM_USB_EP0_CFGDATA_SFTCONEN: u8 = 0x02;
/// 8-bit UTMI Data Width
pub const ENUM_USB_EP0_CFGDATA_UTMIWID8: u8 = 0x00;
/// 16-bit UTMI Data Width
pub const ENUM_USB_EP0_CFGDATA_UTMIWID16: u8 = 0x01;

// USB_DMA_IRQ
pub const BITP_USB_DMA_IRQ_D7: u32 = 7;
pub const BITP_USB_DMA_IRQ_D6: u32 = 6;
pub const BITP_USB_DMA_IRQ_D5: u32 = 5;
pub const BITP_USB_DMA_IRQ_D4: u32 = 4;
pub const BITP_USB_DMA_IRQ_D3: u32 = 3;
pub const BITP_USB_DMA_IRQ_D2: u32 = 2;
pub const BITP_USB_DMA_IRQ_D1: u32 = 1;
pub const BITP_USB_DMA_IRQ_D0: u32 = 0;
/// DMA 7 Interrupt Pending Status
pub const BITM_USB_DMA_IRQ_D7: u8 = 0x80;
/// DMA 6 Interrupt Pending Status
pub const BITM_USB_DMA_IRQ_D6: u8 = 0x40;
/// DMA 5 Interrupt Pending Status
pub const BITM_USB_DMA_IRQ_D5: u8 = 0x20;
/// DMA 4 Interrupt Pending Status
pub const BITM_USB_DMA_IRQ_D4: u8 = 0x10;
/// DMA 3 Interrupt Pending Status
pub const BITM_USB_DMA_IRQ_D3: u8 = 0x08;
/// DMA 2 Interrupt Pending Status
pub const BITM_USB_DMA_IRQ_D2: u8 = 0x04;
/// DMA 1 Interrupt Pending Status
pub const BITM_USB_DMA_IRQ_D1: u8 = 0x02;
/// DMA 0 Interrupt Pending Status
pub const BITM_USB_DMA_IRQ_D0: u8 = 0x01;

// USB_DMA_CTL
pub const BITP_USB_DMA_CTL_BRSTM: u32 = 9;
pub const BITP_USB_DMA_CTL_ERR: u32 = 8;
pub const BITP_USB_DMA_CTL_EP: u32 = 4;
pub const BITP_USB_DMA_CTL_IE: u32 = 3;
pub const BITP_USB_DMA_CTL_MODE: u32 = 2;
pub const BITP_USB_DMA_CTL_DIR: u32 = 1;
pub const BITP_USB_DMA_CTL_EN: u32 = 0;
/// Burst Mode
pub const BITM_USB_DMA_CTL_BRSTM: u16 = 0x0600;
/// Bus Error
pub const BITM_USB_DMA_CTL_ERR: u16 = 0x0100;
/// DMA Channel Endpoint Assignment
pub const BITM_USB_DMA_CTL_EP: u16 = 0x00F0;
/// DMA Interrupt Enable
pub const BITM_USB_DMA_CTL_IE: u16 = 0x0008;
/// DMA Mode
pub const BITM_USB_DMA_CTL_MODE: u16 = 0x0004;
/// DMA Transfer Direction
pub const BITM_USB_DMA_CTL_DIR: u16 = 0x0002;
/// DMA Enable
pub const BITM_USB_DMA_CTL_EN: u16 = 0x0001;
/// Unspecified Length
pub const ENUM_USB_DMA_CTL_BRSTM00: u16 = 0x0000;
/// INCR4 or Unspecified Length
pub const ENUM_USB_DMA_CTL_BRSTM01: u16 = 0x0200;
/// INCR8, INCR4, or Unspecified Length
pub const ENUM_USB_DMA_CTL_BRSTM10: u16 = 0x0400;
/// INCR16, INCR8, INCR4, or Unspecified Length
pub const ENUM_USB_DMA_CTL_BRSTM11: u16 = 0x0600;
/// No Status
pub const ENUM_USB_DMA_CTL_NO_DMAERR: u16 = 0x0000;
/// Bus Error
pub const ENUM_USB_DMA_CTL_DMAERR: u16 = 0x0100;
/// Endpoint 0
pub const ENUM_USB_DMA_CTL_DMAEP0: u16 = 0x0000;
/// Endpoint 1
pub const ENUM_USB_DMA_CTL_DMAEP1: u16 = 0x0010;
/// Endpoint 10
pub const ENUM_USB_DMA_CTL_DMAEP10: u16 = 0x00A0;
/// Endpoint 11
pub const ENUM_USB_DMA_CTL_DMAEP11: u16 = 0x00B0;
/// Endpoint 12
pub const ENUM_USB_DMA_CTL_DMAEP12: u16 = 0x00C0;
/// Endpoint 13
pub const ENUM_USB_DMA_CTL_DMAEP13: u16 = 0x00D0;
/// Endpoint 14
pub const ENUM_USB_DMA_CTL_DMAEP14: u16 = 0x00E0;
/// Endpoint 15
pub const ENUM_USB_DMA_CTL_DMAEP15: u16 = 0x00F0;
/// Endpoint 2
pub const ENUM_USB_DMA_CTL_DMAEP2: u16 = 0x0020;
/// Endpoint 3
pub const ENUM_USB_DMA_CTL_DMAEP3: u16 = 0x0030;
/// Endpoint 4
pub const ENUM_USB_DMA_CTL_DMAEP4: u16 = 0x0040;
/// Endpoint 5
pub const ENUM_USB_DMA_CTL_DMAEP5: u16 = 0x0050;
/// Endpoint 6
pub const ENUM_USB_DMA_CTL_DMAEP6: u16 = 0x0060;
/// Endpoint 7
pub const ENUM_USB_DMA_CTL_DMAEP7: u16 = 0x0070;
/// Endpoint 8
pub const ENUM_USB_DMA_CTL_DMAEP8: u16 = 0x0080;
/// Endpoint 9
pub const ENUM_USB_DMA_CTL_DMAEP9: u16 = 0x0090;
/// Disable Interrupt
pub const ENUM_USB_DMA_CTL_DMAINTDIS: u16 = 0x0000;
/// Enable Interrupt
pub const ENUM_USB_DMA_CTL_DMAINTEN: u16 = 0x0008;
/// DMA Mode 0
pub const ENUM_USB_DMA_CTL_DMAMODE0: u16 = 0x0000;
/// DMA Mode 1
pub const ENUM_USB_DMA_CTL_DMAMODE1: u16 = 0x0004;
/// DMA Write (for Rx Endpoint)
pub const ENUM_USB_DMA_CTL_DMADIR_RX: u16 = 0x0000;
/// DMA Read (for Tx Endpoint)
pub const ENUM_USB_DMA_CTL_DMADIR_TX: u16 = 0x0002;
/// Disable DMA
pub const ENUM_USB_DMA_CTL_DMADIS: u16 = 0x0000;
/// Enable DMA (Start Transfer)
pub const ENUM_USB_DMA_CTL_DMAEN: u16 = 0x0001;

// USB_CT_UCH
pub const BITP_USB_CT_UCH_VALUE: u32 = 0;
/// Chirp Timeout Value
pub const BITM_USB_CT_UCH_VALUE: u16 = 0x7FFF;

// USB_CT_HHSRTN
pub const BITP_USB_CT_HHSRTN_VALUE: u32 = 0;
/// Host High Speed Return to Normal Value
pub const BITM_USB_CT_HHSRTN_VALUE: u16 = 0x7FFF;

// USB_CT_HSBT
pub const BITP_USB_CT_HSBT_VALUE: u32 = 0;
/// HS Timeout Adder
pub const BITM_USB_CT_HSBT_VALUE: u16 = 0x000F;

// USB_LPM_ATTR
pub const BITP_USB_LPM_ATTR_EP: u32 = 12;
pub const BITP_USB_LPM_ATTR_RMTWAK: u32 = 8;
pub const BITP_USB_LPM_ATTR_HIRD: u32 = 4;
pub const BITP_USB_LPM_ATTR_LINKSTATE: u32 = 0;
/// Endpoint
pub const BITM_USB_LPM_ATTR_EP: u16 = 0xF000;
/// Remote Wakeup Enable
pub const BITM_USB_LPM_ATTR_RMTWAK: u16 = 0x0100;
/// Host Initiated Resume Duration
pub const BITM_USB_LPM_ATTR_HIRD: u16 = 0x00F0;
/// Link State
pub const BITM_USB_LPM_ATTR_LINKSTATE: u16 = 0x000F;
/// Disable Remote Wakeup
pub const ENUM_USB_LPM_ATTR_RMTWAKDIS: u16 = 0x0000;
/// Enable Remote Wakeup
pub const ENUM_USB_LPM_ATTR_RMTWAKEN: u16 = 0x0100;
/// Sleep State (L1)
pub const ENUM_USB_LPM_ATTR_LNKSTATE_SSL1: u16 = 0x0001;

// USB_LPM_CTL
pub const BITP_USB_LPM_CTL_NAK: u32 = 4;
pub const BITP_USB_LPM_CTL_EN: u32 = 2;
pub const BITP_USB_LPM_CTL_RESUME: u32 = 1;
pub const BITP_USB_LPM_CTL_TX: u32 = 0;
/// LPM NAK Enable
pub const BITM_USB_LPM_CTL_NAK: u8 = 0x10;
/// LPM Enable
pub const BITM_USB_LPM_CTL_EN: u8 = 0x0C;
/// LPM Resume (Remote Wakeup)
pub const BITM_USB_LPM_CTL_RESUME: u8 = 0x02;
/// LPM Transmit
pub const BITM_USB_LPM_CTL_TX: u8 = 0x01;

// USB_LPM_IEN
pub const BITP_USB_LPM_IEN_LPMERR: u32 = 5;
pub const BITP_USB_LPM_IEN_LPMRES: u32 = 4;
pub const BITP_USB_LPM_IEN_LPMNC: u32 = 3;
pub const BITP_USB_LPM_IEN_LPMACK: u32 = 2;
pub const BITP_USB_LPM_IEN_LPMNY: u32 = 1;
pub const BITP_USB_LPM_IEN_LPMST: u32 = 0;
/// LPM Error Interrupt Enable
pub const BITM_USB_LPM_IEN_LPMERR: u8 = 0x20;
/// LPM Resume Interrupt Enable
pub const BITM_USB_LPM_IEN_LPMRES: u8 = 0x10;
/// LPM NYET Control Interrupt Enable
pub const BITM_USB_LPM_IEN_LPMNC: u8 = 0x08;
/// LPM ACK Interrupt Enable
pub const BITM_USB_LPM_IEN_LPMACK: u8 = 0x04;
/// LPM NYET Interrupt Enable
pub const BITM_USB_LPM_IEN_LPMNY: u8 = 0x02;
/// LPM STALL Interrupt Enable
pub const BITM_USB_LPM_IEN_LPMST: u8 = 0x01;

// USB_LPM_IRQ
pub const BITP_USB_LPM_IRQ_LPMERR: u32 = 5;
pub const BITP_USB_LPM_IRQ_LPMRES: u32 = 4;
pub const BITP_USB_LPM_IRQ_LPMNC: u32 = 3;
pub const BITP_USB_LPM_IRQ_LPMACK: u32 = 2;
pub const BITP_USB_LPM_IRQ_LPMNY: u32 = 1;
pub const BITP_USB_LPM_IRQ_LPMST: u32 = 0;
/// LPM Error Interrupt
pub const BITM_USB_LPM_IRQ_LPMERR: u8 = 0x20;
/// LPM Resume Interrupt
pub const BITM_USB_LPM_IRQ_LPMRES: u8 = 0x10;
/// LPM NYET Control Interrupt
pub const BITM_USB_LPM_IRQ_LPMNC: u8 = 0x08;
/// LPM ACK Interrupt
pub const BITM_USB_LPM_IRQ_LPMACK: u8 = 0x04;
/// LPM NYET Interrupt
pub const BITM_USB_LPM_IRQ_LPMNY: u8 = 0x02;
pub const BITM_USB_LPM_IRQ_LPMST: u8 = 0x01;

// USB_LPM_FADDR
pub const BITP_USB_LPM_FADDR_VALUE: u32 = 0;
/// Function Address Value
pub const BITM_USB_LPM_FADDR_VALUE: u8 = 0x7F;

// USB_VBUS_CTL
pub const BITP_USB_VBUS_CTL_DRV: u32 = 4;
pub const BITP_USB_VBUS_CTL_DRVINT: u32 = 3;
pub const BITP_USB_VBUS_CTL_DRVIEN: u32 = 2;
pub const BITP_USB_VBUS_CTL_DRVOD: u32 = 1;
pub const BITP_USB_VBUS_CTL_INVDRV: u32 = 0;
/// VBUS Drive
pub const BITM_USB_VBUS_CTL_DRV: u8 = 0x10;
/// VBUS Drive Interrupt
pub const BITM_USB_VBUS_CTL_DRVINT: u8 = 0x08;
/// VBUS Drive Interrupt Enable
pub const BITM_USB_VBUS_CTL_DRVIEN: u8 = 0x04;
/// VBUS Drive Open Drain
pub const BITM_USB_VBUS_CTL_DRVOD: u8 = 0x02;
/// VBUS Invert Drive
pub const BITM_USB_VBUS_CTL_INVDRV: u8 = 0x01;

// USB_BAT_CHG
pub const BITP_USB_BAT_CHG_DEDCHG: u32 = 4;
pub const BITP_USB_BAT_CHG_CHGDET: u32 = 3;
pub const BITP_USB_BAT_CHG_SNSCHGDET: u32 = 2;
pub const BITP_USB_BAT_CHG_CONDET: u32 = 1;
pub const BITP_USB_BAT_CHG_SNSCONDET: u32 = 0;
/// Dedicated Charging Port
pub const BITM_USB_BAT_CHG_DEDCHG: u8 = 0x10;
/// Charging Port Detected
pub const BITM_USB_BAT_CHG_CHGDET: u8 = 0x08;
/// Sense Charger Detection
pub const BITM_USB_BAT_CHG_SNSCHGDET: u8 = 0x04;
/// Connected Detected
pub const BITM_USB_BAT_CHG_CONDET: u8 = 0x02;
/// Sense Connection Detection
pub const BITM_USB_BAT_CHG_SNSCONDET: u8 = 0x01;

// USB_PHY_CTL
pub const BITP_USB_PHY_CTL_EN: u32 = 7;
pub const BITP_USB_PHY_CTL_RESTORE: u32 = 1;
pub const BITP_USB_PHY_CTL_HIBER: u32 = 0;
/// PHY Enable
pub const BITM_USB_PHY_CTL_EN: u16 = 0x0080;
/// Restore from Hibernate
pub const BITM_USB_PHY_CTL_RESTORE: u16 = 0x0002;
/// Hibernate
pub const BITM_USB_PHY_CTL_HIBER: u16 = 0x0001;

// USB_PLL_OSC
pub const BITP_USB_PLL_OSC_PLLMSEL: u32 = 7;
pub const BITP_USB_PLL_OSC_PLLM: u32 = 1;
pub const BITP_USB_PLL_OSC_DIVCLKIN: u32 = 0;
/// PLL Multiplier Select
pub const BITM_USB_PLL_OSC_PLLMSEL: u16 = 0x0080;
/// PLL Multiplier Value
pub const BITM_USB_PLL_OSC_PLLM: u16 = 0x007E;
/// Divide CLKIN
pub const BITM_USB_PLL_OSC_DIVCLKIN: u16 = 0x0001;

// USB_EPI_FIFOSIZE
pub const BITP_USB_EPI_FIFOSIZE_VALUE: u32 = 0;
/// FIFO size
pub const BITM_USB_EPI_FIFOSIZE_VALUE: u8 = 0xFF;

// USB_FIFO
pub const BITP_USB_FIFO_VALUE: u32 = 0;
/// FIFO Word (32-Bit) Register
pub const BITM_USB_FIFO_VALUE: u32 = 0xFFFF_FFFF;

// USB_FIFOH
pub const BITP_USB_FIFOH_VALUE: u32 = 0;
/// FIFO Half-Word (16-Bit) Register
pub const BITM_USB_FIFOH_VALUE: u16 = 0xFFFF;

// USB_FIFOB
pub const BITP_USB_FIFOB_VALUE: u32 = 0;
/// FIFO Byte (8-Bit) Register
pub const BITM_USB_FIFOB_VALUE: u8 = 0xFF;

// USB_MISC
pub const BITP_USB_MISC_VALUE: u32 = 0;
/// Miscellaneous Register
pub const BITM_USB_MISC_VALUE: u8 = 0xFF;

// USB_FS_EOF1
pub const BITP_USB_FS_EOF1_VALUE: u32 = 0;
/// Full-Speed EOF 1 Register
pub const BITM_USB_FS_EOF1_VALUE: u8 = 0xFF;

// USB_EP_FIFOSIZE
pub const BITP_USB_EP_FIFOSIZE_VALUE: u32 = 0;
/// FIFO size
pub const BITM_USB_EP_FIFOSIZE_VALUE: u8 = 0xFF;

// USB_DMA_ADDR
pub const BITP_USB_DMA_ADDR_VALUE: u32 = 0;
/// DMA Channel n Address Register
pub const BITM_USB_DMA_ADDR_VALUE: u32 = 0xFFFF_FFFF;

// USB_DMA_CNT
pub const BITP_USB_DMA_CNT_VALUE: u32 = 0;
/// DMA Channel n Count Register
pub const BITM_USB_DMA_CNT_VALUE: u32 = 0xFFFF_FFFF;

// USB_RXDPKTBUFDIS
pub const BITP_USB_RXDPKTBUFDIS_VALUE: u32 = 0;
/// RX Double Packet Buffer Disable for Endpoints 1 to 3
pub const BITM_USB_RXDPKTBUFDIS_VALUE: u16 = 0xFFFF;

// USB_TXDPKTBUFDIS
pub const BITP_USB_TXDPKTBUFDIS_VALUE: u32 = 0;
/// TX Double Packet Buffer Disable for Endpoints 1 to 3
pub const BITM_USB_TXDPKTBUFDIS_VALUE: u16 = 0xFFFF;

// USB_PHY_STAT
pub const BITP_USB_PHY_STAT_VALUE: u32 = 0;
/// FS PHY Status
pub const BITM_USB_PHY_STAT_VALUE: u16 = 0xFFFF;

// USB_RAM_ADDR
pub const BITP_USB_RAM_ADDR_VALUE: u32 = 0;
/// RAM Address Register
pub const BITM_USB_RAM_ADDR_VALUE: u32 = 0xFFFF_FFFF;

// USB_RAM_DATA
pub const BITP_USB_RAM_DATA_VALUE: u32 = 0;
/// RAM Data Register
pub const BITM_USB_RAM_DATA_VALUE: u32 = 0xFFFF_FFFF;
