// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for uart.

use crate::static_ref::StaticRef;
use tock_registers::registers::{Aliased, ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub UartRegisters {
        /// Receive buffer (read) and transmit holding (write) register
        (0x0000 => pub comrx_comtx: Aliased<u16, COMRX::Register, COMTX::Register>),
        (0x0002 => _reserved0),
        /// Interrupt Enable
        (0x0004 => pub comien: ReadWrite<u16, COMIEN::Register>),
        (0x0006 => _reserved1),
        /// Interrupt ID
        (0x0008 => pub comiir: ReadOnly<u16, COMIIR::Register>),
        (0x000a => _reserved2),
        /// Line Control
        (0x000c => pub comlcr: ReadWrite<u16, COMLCR::Register>),
        (0x000e => _reserved3),
        /// Modem Control
        (0x0010 => pub commcr: ReadWrite<u16, COMMCR::Register>),
        (0x0012 => _reserved4),
        /// Line Status
        (0x0014 => pub comlsr: ReadOnly<u16, COMLSR::Register>),
        (0x0016 => _reserved5),
        /// Modem Status
        (0x0018 => pub commsr: ReadOnly<u16, COMMSR::Register>),
        (0x001a => _reserved6),
        /// Scratch buffer
        (0x001c => pub comscr: ReadWrite<u16, COMSCR::Register>),
        (0x001e => _reserved7),
        /// Fractional Baud Rate
        (0x0024 => pub comfbr: ReadWrite<u16, COMFBR::Register>),
        (0x0026 => _reserved8),
        /// Baudrate divider
        (0x0028 => pub comdiv: ReadWrite<u16>),
        (0x002a => _reserved9),
        (0x0034 => @END),
    }
}

register_bitfields![u16,
    pub COMRX [
        RBR OFFSET(0) NUMBITS(8) [],
    ],
    pub COMTX [
        THR OFFSET(0) NUMBITS(8) [],
    ],
    pub COMIEN [
        ERBFI OFFSET(0) NUMBITS(1) [],
        ETBEI OFFSET(1) NUMBITS(1) [],
        ELSI OFFSET(2) NUMBITS(1) [],
        EDSSI OFFSET(3) NUMBITS(1) [],
        EDMAT OFFSET(4) NUMBITS(1) [],
        EDMAR OFFSET(5) NUMBITS(1) [],
    ],
    pub COMIIR [
        NINT OFFSET(0) NUMBITS(1) [],
        STA OFFSET(1) NUMBITS(2) [
            MODEMSTATUS = 0,
            TXBUFEMPTY = 1,
            RXBUFFULL = 2,
            RXLINESTATUS = 3,
        ],
    ],
    pub COMLCR [
        WLS OFFSET(0) NUMBITS(2) [
            WLS_5BITS = 0,
            WLS_6BITS = 1,
            WLS_7BITS = 2,
            WLS_8BITS = 3,
        ],
        STOP OFFSET(2) NUMBITS(1) [],
        PEN OFFSET(3) NUMBITS(1) [],
        EPS OFFSET(4) NUMBITS(1) [],
        SP OFFSET(5) NUMBITS(1) [],
        BRK OFFSET(6) NUMBITS(1) [],
    ],
    pub COMMCR [
        DTR OFFSET(0) NUMBITS(1) [],
        RTS OFFSET(1) NUMBITS(1) [],
        OUT1 OFFSET(2) NUMBITS(1) [],
        OUT2 OFFSET(3) NUMBITS(1) [],
        LOOPBACK OFFSET(4) NUMBITS(1) [],
    ],
    pub COMLSR [
        DR OFFSET(0) NUMBITS(1) [],
        OE OFFSET(1) NUMBITS(1) [],
        PE OFFSET(2) NUMBITS(1) [],
        FE OFFSET(3) NUMBITS(1) [],
        BI OFFSET(4) NUMBITS(1) [],
        THRE OFFSET(5) NUMBITS(1) [],
        TEMT OFFSET(6) NUMBITS(1) [],
    ],
    pub COMMSR [
        DCTS OFFSET(0) NUMBITS(1) [],
        DDSR OFFSET(1) NUMBITS(1) [],
        TERI OFFSET(2) NUMBITS(1) [],
        DDCD OFFSET(3) NUMBITS(1) [],
        CTS OFFSET(4) NUMBITS(1) [],
        DSR OFFSET(5) NUMBITS(1) [],
        RI OFFSET(6) NUMBITS(1) [],
        DCD OFFSET(7) NUMBITS(1) [],
    ],
    pub COMSCR [
        SCR OFFSET(0) NUMBITS(8) [],
    ],
    pub COMFBR [
        DIVN OFFSET(0) NUMBITS(11) [],
        DIVM OFFSET(11) NUMBITS(2) [],
        ENABLE OFFSET(15) NUMBITS(1) [],
    ],
];

pub const UART_BASE: StaticRef<UartRegisters> =
    unsafe { StaticRef::new(0x4000_5000 as *const UartRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(COMRX::RBR.mask << COMRX::RBR.shift, BITM_UART_COMRX_RBR);
        assert_eq!(COMRX::RBR.shift as u32, BITP_UART_COMRX_RBR);
        assert_eq!(COMTX::THR.mask << COMTX::THR.shift, BITM_UART_COMTX_THR);
        assert_eq!(COMTX::THR.shift as u32, BITP_UART_COMTX_THR);
        assert_eq!(COMIEN::ERBFI.mask << COMIEN::ERBFI.shift, BITM_UART_COMIEN_ERBFI);
        assert_eq!(COMIEN::ERBFI.shift as u32, BITP_UART_COMIEN_ERBFI);
        assert_eq!(COMIEN::ETBEI.mask << COMIEN::ETBEI.shift, BITM_UART_COMIEN_ETBEI);
        assert_eq!(COMIEN::ETBEI.shift as u32, BITP_UART_COMIEN_ETBEI);
        assert_eq!(COMIEN::ELSI.mask << COMIEN::ELSI.shift, BITM_UART_COMIEN_ELSI);
        assert_eq!(COMIEN::ELSI.shift as u32, BITP_UART_COMIEN_ELSI);
        assert_eq!(COMIEN::EDSSI.mask << COMIEN::EDSSI.shift, BITM_UART_COMIEN_EDSSI);
        assert_eq!(COMIEN::EDSSI.shift as u32, BITP_UART_COMIEN_EDSSI);
        assert_eq!(COMIEN::EDMAT.mask << COMIEN::EDMAT.shift, BITM_UART_COMIEN_EDMAT);
        assert_eq!(COMIEN::EDMAT.shift as u32, BITP_UART_COMIEN_EDMAT);
        assert_eq!(COMIEN::EDMAR.mask << COMIEN::EDMAR.shift, BITM_UART_COMIEN_EDMAR);
        assert_eq!(COMIEN::EDMAR.shift as u32, BITP_UART_COMIEN_EDMAR);
        assert_eq!(COMIIR::NINT.mask << COMIIR::NINT.shift, BITM_UART_COMIIR_NINT);
        assert_eq!(COMIIR::NINT.shift as u32, BITP_UART_COMIIR_NINT);
        assert_eq!(COMIIR::STA.mask << COMIIR::STA.shift, BITM_UART_COMIIR_STA);
        assert_eq!(COMIIR::STA.shift as u32, BITP_UART_COMIIR_STA);
        assert_eq!(COMLCR::WLS.mask << COMLCR::WLS.shift, BITM_UART_COMLCR_WLS);
        assert_eq!(COMLCR::WLS.shift as u32, BITP_UART_COMLCR_WLS);
        assert_eq!(COMLCR::STOP.mask << COMLCR::STOP.shift, BITM_UART_COMLCR_STOP);
        assert_eq!(COMLCR::STOP.shift as u32, BITP_UART_COMLCR_STOP);
        assert_eq!(COMLCR::PEN.mask << COMLCR::PEN.shift, BITM_UART_COMLCR_PEN);
        assert_eq!(COMLCR::PEN.shift as u32, BITP_UART_COMLCR_PEN);
        assert_eq!(COMLCR::EPS.mask << COMLCR::EPS.shift, BITM_UART_COMLCR_EPS);
        assert_eq!(COMLCR::EPS.shift as u32, BITP_UART_COMLCR_EPS);
        assert_eq!(COMLCR::SP.mask << COMLCR::SP.shift, BITM_UART_COMLCR_SP);
        assert_eq!(COMLCR::SP.shift as u32, BITP_UART_COMLCR_SP);
        assert_eq!(COMLCR::BRK.mask << COMLCR::BRK.shift, BITM_UART_COMLCR_BRK);
        assert_eq!(COMLCR::BRK.shift as u32, BITP_UART_COMLCR_BRK);
        assert_eq!(COMMCR::DTR.mask << COMMCR::DTR.shift, BITM_UART_COMMCR_DTR);
        assert_eq!(COMMCR::DTR.shift as u32, BITP_UART_COMMCR_DTR);
        assert_eq!(COMMCR::RTS.mask << COMMCR::RTS.shift, BITM_UART_COMMCR_RTS);
        assert_eq!(COMMCR::RTS.shift as u32, BITP_UART_COMMCR_RTS);
        assert_eq!(COMMCR::OUT1.mask << COMMCR::OUT1.shift, BITM_UART_COMMCR_OUT1);
        assert_eq!(COMMCR::OUT1.shift as u32, BITP_UART_COMMCR_OUT1);
        assert_eq!(COMMCR::OUT2.mask << COMMCR::OUT2.shift, BITM_UART_COMMCR_OUT2);
        assert_eq!(COMMCR::OUT2.shift as u32, BITP_UART_COMMCR_OUT2);
        assert_eq!(COMMCR::LOOPBACK.mask << COMMCR::LOOPBACK.shift, BITM_UART_COMMCR_LOOPBACK);
        assert_eq!(COMMCR::LOOPBACK.shift as u32, BITP_UART_COMMCR_LOOPBACK);
        assert_eq!(COMLSR::DR.mask << COMLSR::DR.shift, BITM_UART_COMLSR_DR);
        assert_eq!(COMLSR::DR.shift as u32, BITP_UART_COMLSR_DR);
        assert_eq!(COMLSR::OE.mask << COMLSR::OE.shift, BITM_UART_COMLSR_OE);
        assert_eq!(COMLSR::OE.shift as u32, BITP_UART_COMLSR_OE);
        assert_eq!(COMLSR::PE.mask << COMLSR::PE.shift, BITM_UART_COMLSR_PE);
        assert_eq!(COMLSR::PE.shift as u32, BITP_UART_COMLSR_PE);
        assert_eq!(COMLSR::FE.mask << COMLSR::FE.shift, BITM_UART_COMLSR_FE);
        assert_eq!(COMLSR::FE.shift as u32, BITP_UART_COMLSR_FE);
        assert_eq!(COMLSR::BI.mask << COMLSR::BI.shift, BITM_UART_COMLSR_BI);
        assert_eq!(COMLSR::BI.shift as u32, BITP_UART_COMLSR_BI);
        assert_eq!(COMLSR::THRE.mask << COMLSR::THRE.shift, BITM_UART_COMLSR_THRE);
        assert_eq!(COMLSR::THRE.shift as u32, BITP_UART_COMLSR_THRE);
        assert_eq!(COMLSR::TEMT.mask << COMLSR::TEMT.shift, BITM_UART_COMLSR_TEMT);
        assert_eq!(COMLSR::TEMT.shift as u32, BITP_UART_COMLSR_TEMT);
        assert_eq!(COMMSR::DCTS.mask << COMMSR::DCTS.shift, BITM_UART_COMMSR_DCTS);
        assert_eq!(COMMSR::DCTS.shift as u32, BITP_UART_COMMSR_DCTS);
        assert_eq!(COMMSR::DDSR.mask << COMMSR::DDSR.shift, BITM_UART_COMMSR_DDSR);
        assert_eq!(COMMSR::DDSR.shift as u32, BITP_UART_COMMSR_DDSR);
        assert_eq!(COMMSR::TERI.mask << COMMSR::TERI.shift, BITM_UART_COMMSR_TERI);
        assert_eq!(COMMSR::TERI.shift as u32, BITP_UART_COMMSR_TERI);
        assert_eq!(COMMSR::DDCD.mask << COMMSR::DDCD.shift, BITM_UART_COMMSR_DDCD);
        assert_eq!(COMMSR::DDCD.shift as u32, BITP_UART_COMMSR_DDCD);
        assert_eq!(COMMSR::CTS.mask << COMMSR::CTS.shift, BITM_UART_COMMSR_CTS);
        assert_eq!(COMMSR::CTS.shift as u32, BITP_UART_COMMSR_CTS);
        assert_eq!(COMMSR::DSR.mask << COMMSR::DSR.shift, BITM_UART_COMMSR_DSR);
        assert_eq!(COMMSR::DSR.shift as u32, BITP_UART_COMMSR_DSR);
        assert_eq!(COMMSR::RI.mask << COMMSR::RI.shift, BITM_UART_COMMSR_RI);
        assert_eq!(COMMSR::RI.shift as u32, BITP_UART_COMMSR_RI);
        assert_eq!(COMMSR::DCD.mask << COMMSR::DCD.shift, BITM_UART_COMMSR_DCD);
        assert_eq!(COMMSR::DCD.shift as u32, BITP_UART_COMMSR_DCD);
        assert_eq!(COMSCR::SCR.mask << COMSCR::SCR.shift, BITM_UART_COMSCR_SCR);
        assert_eq!(COMSCR::SCR.shift as u32, BITP_UART_COMSCR_SCR);
        assert_eq!(COMFBR::DIVN.mask << COMFBR::DIVN.shift, BITM_UART_COMFBR_DIVN);
        assert_eq!(COMFBR::DIVN.shift as u32, BITP_UART_COMFBR_DIVN);
        assert_eq!(COMFBR::DIVM.mask << COMFBR::DIVM.shift, BITM_UART_COMFBR_DIVM);
        assert_eq!(COMFBR::DIVM.shift as u32, BITP_UART_COMFBR_DIVM);
        assert_eq!(COMFBR::ENABLE.mask << COMFBR::ENABLE.shift, BITM_UART_COMFBR_ENABLE);
        assert_eq!(COMFBR::ENABLE.shift as u32, BITP_UART_COMFBR_ENABLE);
    }

    #[test]
    fn registers_match_addresses() {
        let uart = UART_BASE.address();
        assert_eq!(REG_UART_COMRX as usize, uart + offset_of!(UartRegisters, comrx_comtx));
        assert_eq!(REG_UART_COMTX as usize, uart + offset_of!(UartRegisters, comrx_comtx));
        assert_eq!(REG_UART_COMIEN as usize, uart + offset_of!(UartRegisters, comien));
        assert_eq!(REG_UART_COMIIR as usize, uart + offset_of!(UartRegisters, comiir));
        assert_eq!(REG_UART_COMLCR as usize, uart + offset_of!(UartRegisters, comlcr));
        assert_eq!(REG_UART_COMMCR as usize, uart + offset_of!(UartRegisters, commcr));
        assert_eq!(REG_UART_COMLSR as usize, uart + offset_of!(UartRegisters, comlsr));
        assert_eq!(REG_UART_COMMSR as usize, uart + offset_of!(UartRegisters, commsr));
        assert_eq!(REG_UART_COMSCR as usize, uart + offset_of!(UartRegisters, comscr));
        assert_eq!(REG_UART_COMFBR as usize, uart + offset_of!(UartRegisters, comfbr));
        assert_eq!(REG_UART_COMDIV as usize, uart + offset_of!(UartRegisters, comdiv));
    }
}
