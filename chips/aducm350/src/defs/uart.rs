// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! UART.

// Generated register constants for uart.

// UART registers
/// Receive Buffer Register
pub const REG_UART_COMRX: u32 = 0x4000_5000;
/// Transmit Holding Register
pub const REG_UART_COMTX: u32 = 0x4000_5000;
/// Interrupt Enable
pub const REG_UART_COMIEN: u32 = 0x4000_5004;
/// Interrupt ID
pub const REG_UART_COMIIR: u32 = 0x4000_5008;
/// Line Control
pub const REG_UART_COMLCR: u32 = 0x4000_500C;
/// Modem Control
pub const REG_UART_COMMCR: u32 = 0x4000_5010;
/// Line Status
pub const REG_UART_COMLSR: u32 = 0x4000_5014;
/// Modem Status
pub const REG_UART_COMMSR: u32 = 0x4000_5018;
/// Scratch buffer
pub const REG_UART_COMSCR: u32 = 0x4000_501C;
/// Fractional Baud Rate
pub const REG_UART_COMFBR: u32 = 0x4000_5024;
/// Baudrate divider
pub const REG_UART_COMDIV: u32 = 0x4000_5028;

// UART_COMRX
pub const BITP_UART_COMRX_RBR: u32 = 0;
/// Receive buffer register
pub const BITM_UART_COMRX_RBR: u16 = 0x00FF;

// UART_COMTX
pub const BITP_UART_COMTX_THR: u32 = 0;
/// Transmit holding register
pub const BITM_UART_COMTX_THR: u16 = 0x00FF;

// UART_COMIEN
pub const BITP_UART_COMIEN_ERBFI: u32 = 0;
pub const BITP_UART_COMIEN_ETBEI: u32 = 1;
pub const BITP_UART_COMIEN_ELSI: u32 = 2;
pub const BITP_UART_COMIEN_EDSSI: u32 = 3;
pub const BITP_UART_COMIEN_EDMAT: u32 = 4;
pub const BITP_UART_COMIEN_EDMAR: u32 = 5;
/// Receive buffer full interrupt
pub const BITM_UART_COMIEN_ERBFI: u16 = 0x0001;
/// Transmit buffer empty interrupt
pub const BITM_UART_COMIEN_ETBEI: u16 = 0x0002;
/// Rx status interrupt
pub const BITM_UART_COMIEN_ELSI: u16 = 0x0004;
/// Modem status interrupt
pub const BITM_UART_COMIEN_EDSSI: u16 = 0x0008;
/// DMA requests in transmit mode
pub const BITM_UART_COMIEN_EDMAT: u16 = 0x0010;
/// DMA requests in receive mode
pub const BITM_UART_COMIEN_EDMAR: u16 = 0x0020;

// UART_COMIIR
pub const BITP_UART_COMIIR_NINT: u32 = 0;
pub const BITP_UART_COMIIR_STA: u32 = 1;
/// Interrupt flag
pub const BITM_UART_COMIIR_NINT: u16 = 0x0001;
/// Interrupt status
pub const BITM_UART_COMIIR_STA: u16 = 0x0006;
/// Modem status interrupt
pub const ENUM_UART_COMIIR_STA_MODEMSTATUS: u16 = 0x0000;
/// Transmit buffer empty interrupt
pub const ENUM_UART_COMIIR_STA_TXBUFEMPTY: u16 = 0x0002;
/// Receive buffer full interrupt
pub const ENUM_UART_COMIIR_STA_RXBUFFULL: u16 = 0x0004;
/// Receive line status interrupt
pub const ENUM_UART_COMIIR_STA_RXLINESTATUS: u16 = 0x0006;

// UART_COMLCR
pub const BITP_UART_COMLCR_WLS: u32 = 0;
pub const BITP_UART_COMLCR_STOP: u32 = 2;
pub const BITP_UART_COMLCR_PEN: u32 = 3;
pub const BITP_UART_COMLCR_EPS: u32 = 4;
pub const BITP_UART_COMLCR_SP: u32 = 5;
pub const BITP_UART_COMLCR_BRK: u32 = 6;
/// Word length select
pub const BITM_UART_COMLCR_WLS: u16 = 0x0003;
/// Stop bit
pub const BITM_UART_COMLCR_STOP: u16 = 0x0004;
/// Parity enable
pub const BITM_UART_COMLCR_PEN: u16 = 0x0008;
/// Parity select
pub const BITM_UART_COMLCR_EPS: u16 = 0x0010;
/// Stick parity
pub const BITM_UART_COMLCR_SP: u16 = 0x0020;
/// Set break
pub const BITM_UART_COMLCR_BRK: u16 = 0x0040;
/// 5 bits
pub const ENUM_UART_COMLCR_WLS_5BITS: u16 = 0x0000;
/// 6 bits
pub const ENUM_UART_COMLCR_WLS_6BITS: u16 = 0x0001;
/// 7 bits
pub const ENUM_UART_COMLCR_WLS_7BITS: u16 = 0x0002;
/// 8 bits
pub const ENUM_UART_COMLCR_WLS_8BITS: u16 = 0x0003;

// UART_COMMCR
pub const BITP_UART_COMMCR_DTR: u32 = 0;
pub const BITP_UART_COMMCR_RTS: u32 = 1;
pub const BITP_UART_COMMCR_OUT1: u32 = 2;
pub const BITP_UART_COMMCR_OUT2: u32 = 3;
pub const BITP_UART_COMMCR_LOOPBACK: u32 = 4;
/// Data terminal ready
pub const BITM_UART_COMMCR_DTR: u16 = 0x0001;
/// Request to send
pub const BITM_UART_COMMCR_RTS: u16 = 0x0002;
/// Output 1
pub const BITM_UART_COMMCR_OUT1: u16 = 0x0004;
/// Output 2
pub const BITM_UART_COMMCR_OUT2: u16 = 0x0008;
/// Loopback mode
pub const BITM_UART_COMMCR_LOOPBACK: u16 = 0x0010;

// UART_COMLSR
pub const BITP_UART_COMLSR_DR: u32 = 0;
pub const BITP_UART_COMLSR_OE: u32 = 1;
pub const BITP_UART_COMLSR_PE: u32 = 2;
pub const BITP_UART_COMLSR_FE: u32 = 3;
pub const BITP_UART_COMLSR_BI: u32 = 4;
pub const BITP_UART_COMLSR_THRE: u32 = 5;
pub const BITP_UART_COMLSR_TEMT: u32 = 6;
/// Data ready
pub const BITM_UART_COMLSR_DR: u16 = 0x0001;
/// Overrun error
pub const BITM_UART_COMLSR_OE: u16 = 0x0002;
/// Parity error
pub const BITM_UART_COMLSR_PE: u16 = 0x0004;
/// Framing error
pub const BITM_UART_COMLSR_FE: u16 = 0x0008;
/// Break indicator
pub const BITM_UART_COMLSR_BI: u16 = 0x0010;
/// COMTX empty
pub const BITM_UART_COMLSR_THRE: u16 = 0x0020;
/// COMTX and shift register empty status
pub const BITM_UART_COMLSR_TEMT: u16 = 0x0040;

// UART_COMMSR
pub const BITP_UART_COMMSR_DCTS: u32 = 0;
pub const BITP_UART_COMMSR_DDSR: u32 = 1;
pub const BITP_UART_COMMSR_TERI: u32 = 2;
pub const BITP_UART_COMMSR_DDCD: u32 = 3;
pub const BITP_UART_COMMSR_CTS: u32 = 4;
pub const BITP_UART_COMMSR_DSR: u32 = 5;
pub const BITP_UART_COMMSR_RI: u32 = 6;
pub const BITP_UART_COMMSR_DCD: u32 = 7;
/// Delta CTS
pub const BITM_UART_COMMSR_DCTS: u16 = 0x0001;
/// Delta DSR
pub const BITM_UART_COMMSR_DDSR: u16 = 0x0002;
/// Trailing edge RI
pub const BITM_UART_COMMSR_TERI: u16 = 0x0004;
/// Delta DCD
pub const BITM_UART_COMMSR_DDCD: u16 = 0x0008;
/// Clear to send
pub const BITM_UART_COMMSR_CTS: u16 = 0x0010;
/// Data set ready
pub const BITM_UART_COMMSR_DSR: u16 = 0x0020;
/// Ring indicator
pub const BITM_UART_COMMSR_RI: u16 = 0x0040;
/// Data carrier detect
pub const BITM_UART_COMMSR_DCD: u16 = 0x0080;

// UART_COMSCR
pub const BITP_UART_COMSCR_SCR: u32 = 0;
/// Scratch
pub const BITM_UART_COMSCR_SCR: u16 = 0x00FF;

// UART_COMFBR
pub const BITP_UART_COMFBR_DIVN: u32 = 0;
pub const BITP_UART_COMFBR_DIVM: u32 = 11;
pub const BITP_UART_COMFBR_ENABLE: u32 = 15;
/// Fractional baud rate N divide bits 0 to 2047
pub const BITM_UART_COMFBR_DIVN: u16 = 0x07FF;
/// Fractional baud rate M divide bits 1 to 3
pub const BITM_UART_COMFBR_DIVM: u16 = 0x1800;
/// Fractional baud rate generator enable
pub const BITM_UART_COMFBR_ENABLE: u16 = 0x8000;

// UART_COMDIV
pub const BITP_UART_COMDIV_VALUE: u32 = 0;
/// Baudrate divider
pub const BITM_UART_COMDIV_VALUE: u16 = 0xFFFF;
