// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated lookup tables for the register map.

use super::{Access, EnumValue, Field, Peripheral, Register, Width};
use crate::defs::*;

pub(crate) static PERIPHERALS: [Peripheral; 33] = [
    Peripheral { name: "GPT0", base: 0x4000_0000, size: 0x400 },
    Peripheral { name: "GPT1", base: 0x4000_0400, size: 0x400 },
    Peripheral { name: "GPT2", base: 0x4000_0800, size: 0x400 },
    Peripheral { name: "PWR", base: 0x4000_2400, size: 0x100 },
    Peripheral { name: "WUT", base: 0x4000_2500, size: 0x80 },
    Peripheral { name: "WDT", base: 0x4000_2580, size: 0x80 },
    Peripheral { name: "RTC", base: 0x4000_2600, size: 0x100 },
    Peripheral { name: "I2C", base: 0x4000_3000, size: 0x400 },
    Peripheral { name: "SPI0", base: 0x4000_4000, size: 0x400 },
    Peripheral { name: "SPI1", base: 0x4000_4400, size: 0x400 },
    Peripheral { name: "UART", base: 0x4000_5000, size: 0x400 },
    Peripheral { name: "I2S", base: 0x4000_5800, size: 0x400 },
    Peripheral { name: "BEEP", base: 0x4000_5C00, size: 0x400 },
    Peripheral { name: "RNG", base: 0x4000_6000, size: 0x400 },
    Peripheral { name: "LCD", base: 0x4000_8000, size: 0x400 },
    Peripheral { name: "DMA", base: 0x4001_0000, size: 0x1000 },
    Peripheral { name: "FEE0", base: 0x4001_8000, size: 0x100 },
    Peripheral { name: "FEE1", base: 0x4001_8100, size: 0x100 },
    Peripheral { name: "GPF", base: 0x4001_C000, size: 0x100 },
    Peripheral { name: "GPIO0", base: 0x4002_0000, size: 0x40 },
    Peripheral { name: "GPIO1", base: 0x4002_0040, size: 0x40 },
    Peripheral { name: "GPIO2", base: 0x4002_0080, size: 0x40 },
    Peripheral { name: "GPIO3", base: 0x4002_00C0, size: 0x40 },
    Peripheral { name: "GPIO4", base: 0x4002_0100, size: 0x40 },
    Peripheral { name: "SPIH", base: 0x4002_4000, size: 0x400 },
    Peripheral { name: "SYSCLK", base: 0x4002_8000, size: 0x40 },
    Peripheral { name: "BUSM", base: 0x4002_8040, size: 0x40 },
    Peripheral { name: "CRC", base: 0x4002_C000, size: 0x400 },
    Peripheral { name: "PDI", base: 0x4003_0000, size: 0x400 },
    Peripheral { name: "AFE", base: 0x4008_0000, size: 0x400 },
    Peripheral { name: "CT", base: 0x4008_4000, size: 0x400 },
    Peripheral { name: "USB0", base: 0x400A_0000, size: 0x400 },
    Peripheral { name: "NVIC", base: 0xE000_E000, size: 0x1000 },
];

pub(crate) static REGISTERS: [Register; 640] = [
    Register { name: "GPT0_GPTLD", address: REG_GPT0_GPTLD, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTLD" },
    Register { name: "GPT0_GPTVAL", address: REG_GPT0_GPTVAL, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTVAL" },
    Register { name: "GPT0_GPTCON", address: REG_GPT0_GPTCON, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTCON" },
    Register { name: "GPT0_GPTCLRI", address: REG_GPT0_GPTCLRI, width: Width::HalfWord, access: Access::WriteOnly, group: "GPT_GPTCLRI" },
    Register { name: "GPT0_GPTCAP", address: REG_GPT0_GPTCAP, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTCAP" },
    Register { name: "GPT0_GPTALD", address: REG_GPT0_GPTALD, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTALD" },
    Register { name: "GPT0_GPTAVAL", address: REG_GPT0_GPTAVAL, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTAVAL" },
    Register { name: "GPT0_GPTSTA", address: REG_GPT0_GPTSTA, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTSTA" },
    Register { name: "GPT0_GPTPCON", address: REG_GPT0_GPTPCON, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTPCON" },
    Register { name: "GPT0_GPTPMAT", address: REG_GPT0_GPTPMAT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTPMAT" },
    Register { name: "GPT1_GPTLD", address: REG_GPT1_GPTLD, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTLD" },
    Register { name: "GPT1_GPTVAL", address: REG_GPT1_GPTVAL, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTVAL" },
    Register { name: "GPT1_GPTCON", address: REG_GPT1_GPTCON, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTCON" },
    Register { name: "GPT1_GPTCLRI", address: REG_GPT1_GPTCLRI, width: Width::HalfWord, access: Access::WriteOnly, group: "GPT_GPTCLRI" },
    Register { name: "GPT1_GPTCAP", address: REG_GPT1_GPTCAP, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTCAP" },
    Register { name: "GPT1_GPTALD", address: REG_GPT1_GPTALD, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTALD" },
    Register { name: "GPT1_GPTAVAL", address: REG_GPT1_GPTAVAL, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTAVAL" },
    Register { name: "GPT1_GPTSTA", address: REG_GPT1_GPTSTA, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTSTA" },
    Register { name: "GPT1_GPTPCON", address: REG_GPT1_GPTPCON, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTPCON" },
    Register { name: "GPT1_GPTPMAT", address: REG_GPT1_GPTPMAT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTPMAT" },
    Register { name: "GPT2_GPTLD", address: REG_GPT2_GPTLD, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTLD" },
    Register { name: "GPT2_GPTVAL", address: REG_GPT2_GPTVAL, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTVAL" },
    Register { name: "GPT2_GPTCON", address: REG_GPT2_GPTCON, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTCON" },
    Register { name: "GPT2_GPTCLRI", address: REG_GPT2_GPTCLRI, width: Width::HalfWord, access: Access::WriteOnly, group: "GPT_GPTCLRI" },
    Register { name: "GPT2_GPTCAP", address: REG_GPT2_GPTCAP, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTCAP" },
    Register { name: "GPT2_GPTALD", address: REG_GPT2_GPTALD, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTALD" },
    Register { name: "GPT2_GPTAVAL", address: REG_GPT2_GPTAVAL, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTAVAL" },
    Register { name: "GPT2_GPTSTA", address: REG_GPT2_GPTSTA, width: Width::HalfWord, access: Access::ReadOnly, group: "GPT_GPTSTA" },
    Register { name: "GPT2_GPTPCON", address: REG_GPT2_GPTPCON, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTPCON" },
    Register { name: "GPT2_GPTPMAT", address: REG_GPT2_GPTPMAT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPT_GPTPMAT" },
    Register { name: "PWR_PWRMOD", address: REG_PWR_PWRMOD, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_PWRMOD" },
    Register { name: "PWR_PWRKEY", address: REG_PWR_PWRKEY, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_PWRKEY" },
    Register { name: "PWR_PSMCON", address: REG_PWR_PSMCON, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_PSMCON" },
    Register { name: "PWR_OSCKEY", address: REG_PWR_OSCKEY, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_OSCKEY" },
    Register { name: "PWR_OSCCTRL", address: REG_PWR_OSCCTRL, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_OSCCTRL" },
    Register { name: "PWR_EI0CFG", address: REG_PWR_EI0CFG, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_EI0CFG" },
    Register { name: "PWR_EI1CFG", address: REG_PWR_EI1CFG, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_EI1CFG" },
    Register { name: "PWR_EI2CFG", address: REG_PWR_EI2CFG, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_EI2CFG" },
    Register { name: "PWR_EICLR", address: REG_PWR_EICLR, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_EICLR" },
    Register { name: "PWR_NMICLR", address: REG_PWR_NMICLR, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_NMICLR" },
    Register { name: "PWR_USBWKSTAT", address: REG_PWR_USBWKSTAT, width: Width::HalfWord, access: Access::ReadOnly, group: "PWR_USBWKSTAT" },
    Register { name: "PWR_RSTSTA", address: REG_PWR_RSTSTA, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_RSTSTA" },
    Register { name: "PWR_VCCMCON", address: REG_PWR_VCCMCON, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_VCCMCON" },
    Register { name: "PWR_VBACKCON", address: REG_PWR_VBACKCON, width: Width::HalfWord, access: Access::ReadWrite, group: "PWR_VBACKCON" },
    Register { name: "WUT_T2VAL0", address: REG_WUT_T2VAL0, width: Width::HalfWord, access: Access::ReadOnly, group: "WUT_T2VAL0" },
    Register { name: "WUT_T2VAL1", address: REG_WUT_T2VAL1, width: Width::HalfWord, access: Access::ReadOnly, group: "WUT_T2VAL1" },
    Register { name: "WUT_T2CON", address: REG_WUT_T2CON, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_T2CON" },
    Register { name: "WUT_T2INC", address: REG_WUT_T2INC, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_T2INC" },
    Register { name: "WUT_T2WUFB0", address: REG_WUT_T2WUFB0, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_T2WUFB0" },
    Register { name: "WUT_T2WUFB1", address: REG_WUT_T2WUFB1, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_T2WUFB1" },
    Register { name: "WUT_T2WUFC0", address: REG_WUT_T2WUFC0, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_T2WUFC0" },
    Register { name: "WUT_T2WUFC1", address: REG_WUT_T2WUFC1, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_T2WUFC1" },
    Register { name: "WUT_T2WUFD0", address: REG_WUT_T2WUFD0, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_T2WUFD0" },
    Register { name: "WUT_T2WUFD1", address: REG_WUT_T2WUFD1, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_T2WUFD1" },
    Register { name: "WUT_T2IEN", address: REG_WUT_T2IEN, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_T2IEN" },
    Register { name: "WUT_T2STA", address: REG_WUT_T2STA, width: Width::HalfWord, access: Access::ReadOnly, group: "WUT_T2STA" },
    Register { name: "WUT_T2CLRI", address: REG_WUT_T2CLRI, width: Width::HalfWord, access: Access::WriteOnly, group: "WUT_T2CLRI" },
    Register { name: "WUT_WUTVAL_LOW", address: REG_WUT_WUTVAL_LOW, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_WUTVAL_LOW" },
    Register { name: "WUT_WUTVAL_HIGH", address: REG_WUT_WUTVAL_HIGH, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_WUTVAL_HIGH" },
    Register { name: "WUT_T2WUFA0", address: REG_WUT_T2WUFA0, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_T2WUFA0" },
    Register { name: "WUT_T2WUFA1", address: REG_WUT_T2WUFA1, width: Width::HalfWord, access: Access::ReadWrite, group: "WUT_T2WUFA1" },
    Register { name: "WDT_T3LD", address: REG_WDT_T3LD, width: Width::HalfWord, access: Access::ReadWrite, group: "WDT_T3LD" },
    Register { name: "WDT_T3VAL", address: REG_WDT_T3VAL, width: Width::HalfWord, access: Access::ReadOnly, group: "WDT_T3VAL" },
    Register { name: "WDT_T3CON", address: REG_WDT_T3CON, width: Width::HalfWord, access: Access::ReadWrite, group: "WDT_T3CON" },
    Register { name: "WDT_T3CLRI", address: REG_WDT_T3CLRI, width: Width::HalfWord, access: Access::WriteOnly, group: "WDT_T3CLRI" },
    Register { name: "WDT_T3STA", address: REG_WDT_T3STA, width: Width::HalfWord, access: Access::ReadOnly, group: "WDT_T3STA" },
    Register { name: "RTC_RTCCR", address: REG_RTC_RTCCR, width: Width::Word, access: Access::ReadWrite, group: "RTC_RTCCR" },
    Register { name: "RTC_RTCSR0", address: REG_RTC_RTCSR0, width: Width::HalfWord, access: Access::ReadWrite, group: "RTC_RTCSR0" },
    Register { name: "RTC_RTCSR1", address: REG_RTC_RTCSR1, width: Width::HalfWord, access: Access::ReadOnly, group: "RTC_RTCSR1" },
    Register { name: "RTC_RTCCNT0", address: REG_RTC_RTCCNT0, width: Width::HalfWord, access: Access::ReadWrite, group: "RTC_RTCCNT0" },
    Register { name: "RTC_RTCCNT1", address: REG_RTC_RTCCNT1, width: Width::HalfWord, access: Access::ReadWrite, group: "RTC_RTCCNT1" },
    Register { name: "RTC_RTCALM0", address: REG_RTC_RTCALM0, width: Width::HalfWord, access: Access::ReadWrite, group: "RTC_RTCALM0" },
    Register { name: "RTC_RTCALM1", address: REG_RTC_RTCALM1, width: Width::HalfWord, access: Access::ReadWrite, group: "RTC_RTCALM1" },
    Register { name: "RTC_RTCTRM", address: REG_RTC_RTCTRM, width: Width::HalfWord, access: Access::ReadWrite, group: "RTC_RTCTRM" },
    Register { name: "RTC_RTCGWY", address: REG_RTC_RTCGWY, width: Width::HalfWord, access: Access::ReadWrite, group: "RTC_RTCGWY" },
    Register { name: "I2C_I2CMCON", address: REG_I2C_I2CMCON, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CMCON" },
    Register { name: "I2C_I2CMSTA", address: REG_I2C_I2CMSTA, width: Width::HalfWord, access: Access::ReadOnly, group: "I2C_I2CMSTA" },
    Register { name: "I2C_I2CMRX", address: REG_I2C_I2CMRX, width: Width::HalfWord, access: Access::ReadOnly, group: "I2C_I2CMRX" },
    Register { name: "I2C_I2CMTX", address: REG_I2C_I2CMTX, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CMTX" },
    Register { name: "I2C_I2CMRXCNT", address: REG_I2C_I2CMRXCNT, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CMRXCNT" },
    Register { name: "I2C_I2CMCRXCNT", address: REG_I2C_I2CMCRXCNT, width: Width::HalfWord, access: Access::ReadOnly, group: "I2C_I2CMCRXCNT" },
    Register { name: "I2C_I2CADR1", address: REG_I2C_I2CADR1, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CADR1" },
    Register { name: "I2C_I2CADR2", address: REG_I2C_I2CADR2, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CADR2" },
    Register { name: "I2C_I2CBYT", address: REG_I2C_I2CBYT, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CBYT" },
    Register { name: "I2C_I2CDIV", address: REG_I2C_I2CDIV, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CDIV" },
    Register { name: "I2C_I2CSCON", address: REG_I2C_I2CSCON, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CSCON" },
    Register { name: "I2C_I2CSSTA", address: REG_I2C_I2CSSTA, width: Width::HalfWord, access: Access::ReadOnly, group: "I2C_I2CSSTA" },
    Register { name: "I2C_I2CSRX", address: REG_I2C_I2CSRX, width: Width::HalfWord, access: Access::ReadOnly, group: "I2C_I2CSRX" },
    Register { name: "I2C_I2CSTX", address: REG_I2C_I2CSTX, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CSTX" },
    Register { name: "I2C_I2CALT", address: REG_I2C_I2CALT, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CALT" },
    Register { name: "I2C_I2CID0", address: REG_I2C_I2CID0, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CID0" },
    Register { name: "I2C_I2CID1", address: REG_I2C_I2CID1, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CID1" },
    Register { name: "I2C_I2CID2", address: REG_I2C_I2CID2, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CID2" },
    Register { name: "I2C_I2CID3", address: REG_I2C_I2CID3, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CID3" },
    Register { name: "I2C_I2CFSTA", address: REG_I2C_I2CFSTA, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CFSTA" },
    Register { name: "I2C_I2CSHCON", address: REG_I2C_I2CSHCON, width: Width::HalfWord, access: Access::WriteOnly, group: "I2C_I2CSHCON" },
    Register { name: "I2C_I2CTCTL", address: REG_I2C_I2CTCTL, width: Width::HalfWord, access: Access::ReadWrite, group: "I2C_I2CTCTL" },
    Register { name: "SPI0_SPISTA", address: REG_SPI0_SPISTA, width: Width::HalfWord, access: Access::ReadOnly, group: "SPI_SPISTA" },
    Register { name: "SPI0_SPIRX", address: REG_SPI0_SPIRX, width: Width::HalfWord, access: Access::ReadOnly, group: "SPI_SPIRX" },
    Register { name: "SPI0_SPITX", address: REG_SPI0_SPITX, width: Width::HalfWord, access: Access::WriteOnly, group: "SPI_SPITX" },
    Register { name: "SPI0_SPIDIV", address: REG_SPI0_SPIDIV, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPIDIV" },
    Register { name: "SPI0_SPICON", address: REG_SPI0_SPICON, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPICON" },
    Register { name: "SPI0_SPIDMA", address: REG_SPI0_SPIDMA, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPIDMA" },
    Register { name: "SPI0_SPICNT", address: REG_SPI0_SPICNT, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPICNT" },
    Register { name: "SPI1_SPISTA", address: REG_SPI1_SPISTA, width: Width::HalfWord, access: Access::ReadOnly, group: "SPI_SPISTA" },
    Register { name: "SPI1_SPIRX", address: REG_SPI1_SPIRX, width: Width::HalfWord, access: Access::ReadOnly, group: "SPI_SPIRX" },
    Register { name: "SPI1_SPITX", address: REG_SPI1_SPITX, width: Width::HalfWord, access: Access::WriteOnly, group: "SPI_SPITX" },
    Register { name: "SPI1_SPIDIV", address: REG_SPI1_SPIDIV, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPIDIV" },
    Register { name: "SPI1_SPICON", address: REG_SPI1_SPICON, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPICON" },
    Register { name: "SPI1_SPIDMA", address: REG_SPI1_SPIDMA, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPIDMA" },
    Register { name: "SPI1_SPICNT", address: REG_SPI1_SPICNT, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPICNT" },
    Register { name: "UART_COMRX", address: REG_UART_COMRX, width: Width::HalfWord, access: Access::ReadOnly, group: "UART_COMRX" },
    Register { name: "UART_COMTX", address: REG_UART_COMTX, width: Width::HalfWord, access: Access::WriteOnly, group: "UART_COMTX" },
    Register { name: "UART_COMIEN", address: REG_UART_COMIEN, width: Width::HalfWord, access: Access::ReadWrite, group: "UART_COMIEN" },
    Register { name: "UART_COMIIR", address: REG_UART_COMIIR, width: Width::HalfWord, access: Access::ReadOnly, group: "UART_COMIIR" },
    Register { name: "UART_COMLCR", address: REG_UART_COMLCR, width: Width::HalfWord, access: Access::ReadWrite, group: "UART_COMLCR" },
    Register { name: "UART_COMMCR", address: REG_UART_COMMCR, width: Width::HalfWord, access: Access::ReadWrite, group: "UART_COMMCR" },
    Register { name: "UART_COMLSR", address: REG_UART_COMLSR, width: Width::HalfWord, access: Access::ReadOnly, group: "UART_COMLSR" },
    Register { name: "UART_COMMSR", address: REG_UART_COMMSR, width: Width::HalfWord, access: Access::ReadOnly, group: "UART_COMMSR" },
    Register { name: "UART_COMSCR", address: REG_UART_COMSCR, width: Width::HalfWord, access: Access::ReadWrite, group: "UART_COMSCR" },
    Register { name: "UART_COMFBR", address: REG_UART_COMFBR, width: Width::HalfWord, access: Access::ReadWrite, group: "UART_COMFBR" },
    Register { name: "UART_COMDIV", address: REG_UART_COMDIV, width: Width::HalfWord, access: Access::ReadWrite, group: "UART_COMDIV" },
    Register { name: "I2S_I2S_OUT1L", address: REG_I2S_I2S_OUT1L, width: Width::HalfWord, access: Access::ReadWrite, group: "I2S_I2S_OUT1L" },
    Register { name: "I2S_I2S_OUT1H", address: REG_I2S_I2S_OUT1H, width: Width::HalfWord, access: Access::ReadWrite, group: "I2S_I2S_OUT1H" },
    Register { name: "I2S_I2S_OUT2L", address: REG_I2S_I2S_OUT2L, width: Width::HalfWord, access: Access::ReadWrite, group: "I2S_I2S_OUT2L" },
    Register { name: "I2S_I2S_OUT2H", address: REG_I2S_I2S_OUT2H, width: Width::HalfWord, access: Access::ReadWrite, group: "I2S_I2S_OUT2H" },
    Register { name: "I2S_I2S_MODE1", address: REG_I2S_I2S_MODE1, width: Width::HalfWord, access: Access::ReadWrite, group: "I2S_I2S_MODE1" },
    Register { name: "I2S_I2S_MODE2", address: REG_I2S_I2S_MODE2, width: Width::HalfWord, access: Access::ReadWrite, group: "I2S_I2S_MODE2" },
    Register { name: "I2S_I2S_CFG1", address: REG_I2S_I2S_CFG1, width: Width::HalfWord, access: Access::ReadWrite, group: "I2S_I2S_CFG1" },
    Register { name: "I2S_I2S_CFG2", address: REG_I2S_I2S_CFG2, width: Width::HalfWord, access: Access::ReadWrite, group: "I2S_I2S_CFG2" },
    Register { name: "I2S_I2S_STAT", address: REG_I2S_I2S_STAT, width: Width::HalfWord, access: Access::ReadWrite, group: "I2S_I2S_STAT" },
    Register { name: "BEEP_BEEP_CFG", address: REG_BEEP_BEEP_CFG, width: Width::HalfWord, access: Access::ReadWrite, group: "BEEP_BEEP_CFG" },
    Register { name: "BEEP_BEEP_STAT", address: REG_BEEP_BEEP_STAT, width: Width::HalfWord, access: Access::ReadWrite, group: "BEEP_BEEP_STAT" },
    Register { name: "BEEP_BEEP_TONE_A", address: REG_BEEP_BEEP_TONE_A, width: Width::HalfWord, access: Access::ReadWrite, group: "BEEP_BEEP_TONE_A" },
    Register { name: "BEEP_BEEP_TONE_B", address: REG_BEEP_BEEP_TONE_B, width: Width::HalfWord, access: Access::ReadWrite, group: "BEEP_BEEP_TONE_B" },
    Register { name: "RNG_RNGCTL", address: REG_RNG_RNGCTL, width: Width::HalfWord, access: Access::ReadWrite, group: "RNG_RNGCTL" },
    Register { name: "RNG_RNGLEN", address: REG_RNG_RNGLEN, width: Width::HalfWord, access: Access::ReadWrite, group: "RNG_RNGLEN" },
    Register { name: "RNG_RNGSTAT", address: REG_RNG_RNGSTAT, width: Width::HalfWord, access: Access::ReadWrite, group: "RNG_RNGSTAT" },
    Register { name: "RNG_RNGDATA", address: REG_RNG_RNGDATA, width: Width::HalfWord, access: Access::ReadOnly, group: "RNG_RNGDATA" },
    Register { name: "RNG_RNGCNTL", address: REG_RNG_RNGCNTL, width: Width::HalfWord, access: Access::ReadOnly, group: "RNG_RNGCNTL" },
    Register { name: "RNG_RNGCNTH", address: REG_RNG_RNGCNTH, width: Width::HalfWord, access: Access::ReadOnly, group: "RNG_RNGCNTH" },
    Register { name: "LCD_LCDCON", address: REG_LCD_LCDCON, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDCON" },
    Register { name: "LCD_LCDSTAT", address: REG_LCD_LCDSTAT, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDSTAT" },
    Register { name: "LCD_LCDBLINK", address: REG_LCD_LCDBLINK, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDBLINK" },
    Register { name: "LCD_LCDCONTRAST", address: REG_LCD_LCDCONTRAST, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDCONTRAST" },
    Register { name: "LCD_LCDDATA0_S0", address: REG_LCD_LCDDATA0_S0, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA0_S0" },
    Register { name: "LCD_LCDDATA1_S0", address: REG_LCD_LCDDATA1_S0, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA1_S0" },
    Register { name: "LCD_LCDDATA2_S0", address: REG_LCD_LCDDATA2_S0, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA2_S0" },
    Register { name: "LCD_LCDDATA3_S0", address: REG_LCD_LCDDATA3_S0, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA3_S0" },
    Register { name: "LCD_LCDDATA4_S0", address: REG_LCD_LCDDATA4_S0, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA4_S0" },
    Register { name: "LCD_LCDDATA5_S0", address: REG_LCD_LCDDATA5_S0, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA5_S0" },
    Register { name: "LCD_LCDDATA6_S0", address: REG_LCD_LCDDATA6_S0, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA6_S0" },
    Register { name: "LCD_LCDDATA7_S0", address: REG_LCD_LCDDATA7_S0, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA7_S0" },
    Register { name: "LCD_LCDDATA0_S1", address: REG_LCD_LCDDATA0_S1, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA0_S1" },
    Register { name: "LCD_LCDDATA1_S1", address: REG_LCD_LCDDATA1_S1, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA1_S1" },
    Register { name: "LCD_LCDDATA2_S1", address: REG_LCD_LCDDATA2_S1, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA2_S1" },
    Register { name: "LCD_LCDDATA3_S1", address: REG_LCD_LCDDATA3_S1, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA3_S1" },
    Register { name: "LCD_LCDDATA4_S1", address: REG_LCD_LCDDATA4_S1, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA4_S1" },
    Register { name: "LCD_LCDDATA5_S1", address: REG_LCD_LCDDATA5_S1, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA5_S1" },
    Register { name: "LCD_LCDDATA6_S1", address: REG_LCD_LCDDATA6_S1, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA6_S1" },
    Register { name: "LCD_LCDDATA7_S1", address: REG_LCD_LCDDATA7_S1, width: Width::HalfWord, access: Access::ReadWrite, group: "LCD_LCDDATA7_S1" },
    Register { name: "DMA_DMASTA", address: REG_DMA_DMASTA, width: Width::Word, access: Access::ReadOnly, group: "DMA_DMASTA" },
    Register { name: "DMA_DMACFG", address: REG_DMA_DMACFG, width: Width::Word, access: Access::WriteOnly, group: "DMA_DMACFG" },
    Register { name: "DMA_DMAPDBPTR", address: REG_DMA_DMAPDBPTR, width: Width::Word, access: Access::ReadWrite, group: "DMA_DMAPDBPTR" },
    Register { name: "DMA_DMAADBPTR", address: REG_DMA_DMAADBPTR, width: Width::Word, access: Access::ReadOnly, group: "DMA_DMAADBPTR" },
    Register { name: "DMA_DMASWREQ", address: REG_DMA_DMASWREQ, width: Width::Word, access: Access::WriteOnly, group: "DMA_DMASWREQ" },
    Register { name: "DMA_DMARMSKSET", address: REG_DMA_DMARMSKSET, width: Width::Word, access: Access::ReadWrite, group: "DMA_DMARMSKSET" },
    Register { name: "DMA_DMARMSKCLR", address: REG_DMA_DMARMSKCLR, width: Width::Word, access: Access::WriteOnly, group: "DMA_DMARMSKCLR" },
    Register { name: "DMA_DMAENSET", address: REG_DMA_DMAENSET, width: Width::Word, access: Access::ReadWrite, group: "DMA_DMAENSET" },
    Register { name: "DMA_DMAENCLR", address: REG_DMA_DMAENCLR, width: Width::Word, access: Access::WriteOnly, group: "DMA_DMAENCLR" },
    Register { name: "DMA_DMAALTSET", address: REG_DMA_DMAALTSET, width: Width::Word, access: Access::ReadWrite, group: "DMA_DMAALTSET" },
    Register { name: "DMA_DMAALTCLR", address: REG_DMA_DMAALTCLR, width: Width::Word, access: Access::WriteOnly, group: "DMA_DMAALTCLR" },
    Register { name: "DMA_DMAPRISET", address: REG_DMA_DMAPRISET, width: Width::Word, access: Access::ReadWrite, group: "DMA_DMAPRISET" },
    Register { name: "DMA_DMAPRICLR", address: REG_DMA_DMAPRICLR, width: Width::Word, access: Access::WriteOnly, group: "DMA_DMAPRICLR" },
    Register { name: "DMA_DMAERRCHNLCLR", address: REG_DMA_DMAERRCHNLCLR, width: Width::Word, access: Access::ReadWrite, group: "DMA_DMAERRCHNLCLR" },
    Register { name: "DMA_DMAERRCLR", address: REG_DMA_DMAERRCLR, width: Width::Word, access: Access::ReadWrite, group: "DMA_DMAERRCLR" },
    Register { name: "DMA_DMAINVALIDDESCCLR", address: REG_DMA_DMAINVALIDDESCCLR, width: Width::Word, access: Access::ReadWrite, group: "DMA_DMAINVALIDDESCCLR" },
    Register { name: "DMA_DMABSSET", address: REG_DMA_DMABSSET, width: Width::Word, access: Access::ReadWrite, group: "DMA_DMABSSET" },
    Register { name: "DMA_DMABSCLR", address: REG_DMA_DMABSCLR, width: Width::Word, access: Access::WriteOnly, group: "DMA_DMABSCLR" },
    Register { name: "DMA_DMASRCADSSET", address: REG_DMA_DMASRCADSSET, width: Width::Word, access: Access::ReadWrite, group: "DMA_DMASRCADSSET" },
    Register { name: "DMA_DMASRCADCLR", address: REG_DMA_DMASRCADCLR, width: Width::Word, access: Access::WriteOnly, group: "DMA_DMASRCADCLR" },
    Register { name: "DMA_DMADSTADSET", address: REG_DMA_DMADSTADSET, width: Width::Word, access: Access::ReadWrite, group: "DMA_DMADSTADSET" },
    Register { name: "DMA_DMADSTADCLR", address: REG_DMA_DMADSTADCLR, width: Width::Word, access: Access::WriteOnly, group: "DMA_DMADSTADCLR" },
    Register { name: "DMA_DMAREVID", address: REG_DMA_DMAREVID, width: Width::Word, access: Access::ReadOnly, group: "DMA_DMAREVID" },
    Register { name: "FEE0_FEESTA", address: REG_FEE0_FEESTA, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEESTA" },
    Register { name: "FEE0_FEECON0", address: REG_FEE0_FEECON0, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEECON0" },
    Register { name: "FEE0_FEECMD", address: REG_FEE0_FEECMD, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEECMD" },
    Register { name: "FEE0_FEEADR0L", address: REG_FEE0_FEEADR0L, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEADR0L" },
    Register { name: "FEE0_FEEADR0H", address: REG_FEE0_FEEADR0H, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEADR0H" },
    Register { name: "FEE0_FEEADR1L", address: REG_FEE0_FEEADR1L, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEADR1L" },
    Register { name: "FEE0_FEEADR1H", address: REG_FEE0_FEEADR1H, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEADR1H" },
    Register { name: "FEE0_FEEKEY", address: REG_FEE0_FEEKEY, width: Width::HalfWord, access: Access::WriteOnly, group: "FEE_FEEKEY" },
    Register { name: "FEE0_FEEPROL", address: REG_FEE0_FEEPROL, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEPROL" },
    Register { name: "FEE0_FEEPROH", address: REG_FEE0_FEEPROH, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEPROH" },
    Register { name: "FEE0_FEESIGL", address: REG_FEE0_FEESIGL, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEESIGL" },
    Register { name: "FEE0_FEESIGH", address: REG_FEE0_FEESIGH, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEESIGH" },
    Register { name: "FEE0_FEECON1", address: REG_FEE0_FEECON1, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEECON1" },
    Register { name: "FEE0_FEEADRAL", address: REG_FEE0_FEEADRAL, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEEADRAL" },
    Register { name: "FEE0_FEEADRAH", address: REG_FEE0_FEEADRAH, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEEADRAH" },
    Register { name: "FEE0_FEEPARCTL", address: REG_FEE0_FEEPARCTL, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEPARCTL" },
    Register { name: "FEE0_FEEPARSTA", address: REG_FEE0_FEEPARSTA, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEPARSTA" },
    Register { name: "FEE0_FEEPARADRL", address: REG_FEE0_FEEPARADRL, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEEPARADRL" },
    Register { name: "FEE0_FEEPARADRH", address: REG_FEE0_FEEPARADRH, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEEPARADRH" },
    Register { name: "FEE0_FEEAEN0", address: REG_FEE0_FEEAEN0, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEAEN0" },
    Register { name: "FEE0_FEEAEN1", address: REG_FEE0_FEEAEN1, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEAEN1" },
    Register { name: "FEE0_FEEAEN2", address: REG_FEE0_FEEAEN2, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEAEN2" },
    Register { name: "FEE0_FEEAEN3", address: REG_FEE0_FEEAEN3, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEAEN3" },
    Register { name: "FEE1_FEESTA", address: REG_FEE1_FEESTA, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEESTA" },
    Register { name: "FEE1_FEECON0", address: REG_FEE1_FEECON0, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEECON0" },
    Register { name: "FEE1_FEECMD", address: REG_FEE1_FEECMD, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEECMD" },
    Register { name: "FEE1_FEEADR0L", address: REG_FEE1_FEEADR0L, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEADR0L" },
    Register { name: "FEE1_FEEADR0H", address: REG_FEE1_FEEADR0H, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEADR0H" },
    Register { name: "FEE1_FEEADR1L", address: REG_FEE1_FEEADR1L, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEADR1L" },
    Register { name: "FEE1_FEEADR1H", address: REG_FEE1_FEEADR1H, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEADR1H" },
    Register { name: "FEE1_FEEKEY", address: REG_FEE1_FEEKEY, width: Width::HalfWord, access: Access::WriteOnly, group: "FEE_FEEKEY" },
    Register { name: "FEE1_FEEPROL", address: REG_FEE1_FEEPROL, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEPROL" },
    Register { name: "FEE1_FEEPROH", address: REG_FEE1_FEEPROH, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEPROH" },
    Register { name: "FEE1_FEESIGL", address: REG_FEE1_FEESIGL, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEESIGL" },
    Register { name: "FEE1_FEESIGH", address: REG_FEE1_FEESIGH, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEESIGH" },
    Register { name: "FEE1_FEECON1", address: REG_FEE1_FEECON1, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEECON1" },
    Register { name: "FEE1_FEEADRAL", address: REG_FEE1_FEEADRAL, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEEADRAL" },
    Register { name: "FEE1_FEEADRAH", address: REG_FEE1_FEEADRAH, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEEADRAH" },
    Register { name: "FEE1_FEEPARCTL", address: REG_FEE1_FEEPARCTL, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEPARCTL" },
    Register { name: "FEE1_FEEPARSTA", address: REG_FEE1_FEEPARSTA, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEPARSTA" },
    Register { name: "FEE1_FEEPARADRL", address: REG_FEE1_FEEPARADRL, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEEPARADRL" },
    Register { name: "FEE1_FEEPARADRH", address: REG_FEE1_FEEPARADRH, width: Width::HalfWord, access: Access::ReadOnly, group: "FEE_FEEPARADRH" },
    Register { name: "FEE1_FEEAEN0", address: REG_FEE1_FEEAEN0, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEAEN0" },
    Register { name: "FEE1_FEEAEN1", address: REG_FEE1_FEEAEN1, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEAEN1" },
    Register { name: "FEE1_FEEAEN2", address: REG_FEE1_FEEAEN2, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEAEN2" },
    Register { name: "FEE1_FEEAEN3", address: REG_FEE1_FEEAEN3, width: Width::HalfWord, access: Access::ReadWrite, group: "FEE_FEEAEN3" },
    Register { name: "GPF_GPFEESTA", address: REG_GPF_GPFEESTA, width: Width::HalfWord, access: Access::ReadOnly, group: "GPF_GPFEESTA" },
    Register { name: "GPF_GPFEECON0", address: REG_GPF_GPFEECON0, width: Width::HalfWord, access: Access::ReadWrite, group: "GPF_GPFEECON0" },
    Register { name: "GPF_GPFEECMD", address: REG_GPF_GPFEECMD, width: Width::HalfWord, access: Access::ReadWrite, group: "GPF_GPFEECMD" },
    Register { name: "GPF_GPFEEADR0L", address: REG_GPF_GPFEEADR0L, width: Width::HalfWord, access: Access::ReadWrite, group: "GPF_GPFEEADR0L" },
    Register { name: "GPF_GPFEEADR1L", address: REG_GPF_GPFEEADR1L, width: Width::HalfWord, access: Access::ReadWrite, group: "GPF_GPFEEADR1L" },
    Register { name: "GPF_GPFEEKEY", address: REG_GPF_GPFEEKEY, width: Width::HalfWord, access: Access::WriteOnly, group: "GPF_GPFEEKEY" },
    Register { name: "GPF_GPFEESIGL", address: REG_GPF_GPFEESIGL, width: Width::HalfWord, access: Access::ReadOnly, group: "GPF_GPFEESIGL" },
    Register { name: "GPF_GPFEESIGH", address: REG_GPF_GPFEESIGH, width: Width::HalfWord, access: Access::ReadOnly, group: "GPF_GPFEESIGH" },
    Register { name: "GPF_GPFEEADRAL", address: REG_GPF_GPFEEADRAL, width: Width::HalfWord, access: Access::ReadOnly, group: "GPF_GPFEEADRAL" },
    Register { name: "GPF_GPFEEADRAH", address: REG_GPF_GPFEEADRAH, width: Width::HalfWord, access: Access::ReadOnly, group: "GPF_GPFEEADRAH" },
    Register { name: "GPF_GPFEEAEN0", address: REG_GPF_GPFEEAEN0, width: Width::HalfWord, access: Access::ReadWrite, group: "GPF_GPFEEAEN0" },
    Register { name: "GPF_GPFEEAEN1", address: REG_GPF_GPFEEAEN1, width: Width::HalfWord, access: Access::ReadWrite, group: "GPF_GPFEEAEN1" },
    Register { name: "GPF_GPFEEAEN2", address: REG_GPF_GPFEEAEN2, width: Width::HalfWord, access: Access::ReadWrite, group: "GPF_GPFEEAEN2" },
    Register { name: "GPF_GPFEEAEN3", address: REG_GPF_GPFEEAEN3, width: Width::HalfWord, access: Access::ReadWrite, group: "GPF_GPFEEAEN3" },
    Register { name: "GPIO0_GPCON", address: REG_GPIO0_GPCON, width: Width::Word, access: Access::ReadWrite, group: "GPIO_GPCON" },
    Register { name: "GPIO0_GPOEN", address: REG_GPIO0_GPOEN, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPOEN" },
    Register { name: "GPIO0_GPPE", address: REG_GPIO0_GPPE, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPPE" },
    Register { name: "GPIO0_GPIEN", address: REG_GPIO0_GPIEN, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIEN" },
    Register { name: "GPIO0_GPIN", address: REG_GPIO0_GPIN, width: Width::HalfWord, access: Access::ReadOnly, group: "GPIO_GPIN" },
    Register { name: "GPIO0_GPOUT", address: REG_GPIO0_GPOUT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPOUT" },
    Register { name: "GPIO0_GPSET", address: REG_GPIO0_GPSET, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPSET" },
    Register { name: "GPIO0_GPCLR", address: REG_GPIO0_GPCLR, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPCLR" },
    Register { name: "GPIO0_GPTGL", address: REG_GPIO0_GPTGL, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPTGL" },
    Register { name: "GPIO0_GPPOL", address: REG_GPIO0_GPPOL, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPPOL" },
    Register { name: "GPIO0_GPIENA", address: REG_GPIO0_GPIENA, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIENA" },
    Register { name: "GPIO0_GPIENB", address: REG_GPIO0_GPIENB, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIENB" },
    Register { name: "GPIO0_GPINT", address: REG_GPIO0_GPINT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPINT" },
    Register { name: "GPIO1_GPCON", address: REG_GPIO1_GPCON, width: Width::Word, access: Access::ReadWrite, group: "GPIO_GPCON" },
    Register { name: "GPIO1_GPOEN", address: REG_GPIO1_GPOEN, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPOEN" },
    Register { name: "GPIO1_GPPE", address: REG_GPIO1_GPPE, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPPE" },
    Register { name: "GPIO1_GPIEN", address: REG_GPIO1_GPIEN, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIEN" },
    Register { name: "GPIO1_GPIN", address: REG_GPIO1_GPIN, width: Width::HalfWord, access: Access::ReadOnly, group: "GPIO_GPIN" },
    Register { name: "GPIO1_GPOUT", address: REG_GPIO1_GPOUT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPOUT" },
    Register { name: "GPIO1_GPSET", address: REG_GPIO1_GPSET, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPSET" },
    Register { name: "GPIO1_GPCLR", address: REG_GPIO1_GPCLR, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPCLR" },
    Register { name: "GPIO1_GPTGL", address: REG_GPIO1_GPTGL, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPTGL" },
    Register { name: "GPIO1_GPPOL", address: REG_GPIO1_GPPOL, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPPOL" },
    Register { name: "GPIO1_GPIENA", address: REG_GPIO1_GPIENA, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIENA" },
    Register { name: "GPIO1_GPIENB", address: REG_GPIO1_GPIENB, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIENB" },
    Register { name: "GPIO1_GPINT", address: REG_GPIO1_GPINT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPINT" },
    Register { name: "GPIO2_GPCON", address: REG_GPIO2_GPCON, width: Width::Word, access: Access::ReadWrite, group: "GPIO_GPCON" },
    Register { name: "GPIO2_GPOEN", address: REG_GPIO2_GPOEN, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPOEN" },
    Register { name: "GPIO2_GPPE", address: REG_GPIO2_GPPE, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPPE" },
    Register { name: "GPIO2_GPIEN", address: REG_GPIO2_GPIEN, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIEN" },
    Register { name: "GPIO2_GPIN", address: REG_GPIO2_GPIN, width: Width::HalfWord, access: Access::ReadOnly, group: "GPIO_GPIN" },
    Register { name: "GPIO2_GPOUT", address: REG_GPIO2_GPOUT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPOUT" },
    Register { name: "GPIO2_GPSET", address: REG_GPIO2_GPSET, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPSET" },
    Register { name: "GPIO2_GPCLR", address: REG_GPIO2_GPCLR, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPCLR" },
    Register { name: "GPIO2_GPTGL", address: REG_GPIO2_GPTGL, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPTGL" },
    Register { name: "GPIO2_GPPOL", address: REG_GPIO2_GPPOL, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPPOL" },
    Register { name: "GPIO2_GPIENA", address: REG_GPIO2_GPIENA, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIENA" },
    Register { name: "GPIO2_GPIENB", address: REG_GPIO2_GPIENB, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIENB" },
    Register { name: "GPIO2_GPINT", address: REG_GPIO2_GPINT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPINT" },
    Register { name: "GPIO3_GPCON", address: REG_GPIO3_GPCON, width: Width::Word, access: Access::ReadWrite, group: "GPIO_GPCON" },
    Register { name: "GPIO3_GPOEN", address: REG_GPIO3_GPOEN, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPOEN" },
    Register { name: "GPIO3_GPPE", address: REG_GPIO3_GPPE, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPPE" },
    Register { name: "GPIO3_GPIEN", address: REG_GPIO3_GPIEN, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIEN" },
    Register { name: "GPIO3_GPIN", address: REG_GPIO3_GPIN, width: Width::HalfWord, access: Access::ReadOnly, group: "GPIO_GPIN" },
    Register { name: "GPIO3_GPOUT", address: REG_GPIO3_GPOUT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPOUT" },
    Register { name: "GPIO3_GPSET", address: REG_GPIO3_GPSET, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPSET" },
    Register { name: "GPIO3_GPCLR", address: REG_GPIO3_GPCLR, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPCLR" },
    Register { name: "GPIO3_GPTGL", address: REG_GPIO3_GPTGL, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPTGL" },
    Register { name: "GPIO3_GPPOL", address: REG_GPIO3_GPPOL, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPPOL" },
    Register { name: "GPIO3_GPIENA", address: REG_GPIO3_GPIENA, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIENA" },
    Register { name: "GPIO3_GPIENB", address: REG_GPIO3_GPIENB, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIENB" },
    Register { name: "GPIO3_GPINT", address: REG_GPIO3_GPINT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPINT" },
    Register { name: "GPIO4_GPCON", address: REG_GPIO4_GPCON, width: Width::Word, access: Access::ReadWrite, group: "GPIO_GPCON" },
    Register { name: "GPIO4_GPOEN", address: REG_GPIO4_GPOEN, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPOEN" },
    Register { name: "GPIO4_GPPE", address: REG_GPIO4_GPPE, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPPE" },
    Register { name: "GPIO4_GPIEN", address: REG_GPIO4_GPIEN, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIEN" },
    Register { name: "GPIO4_GPIN", address: REG_GPIO4_GPIN, width: Width::HalfWord, access: Access::ReadOnly, group: "GPIO_GPIN" },
    Register { name: "GPIO4_GPOUT", address: REG_GPIO4_GPOUT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPOUT" },
    Register { name: "GPIO4_GPSET", address: REG_GPIO4_GPSET, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPSET" },
    Register { name: "GPIO4_GPCLR", address: REG_GPIO4_GPCLR, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPCLR" },
    Register { name: "GPIO4_GPTGL", address: REG_GPIO4_GPTGL, width: Width::HalfWord, access: Access::WriteOnly, group: "GPIO_GPTGL" },
    Register { name: "GPIO4_GPPOL", address: REG_GPIO4_GPPOL, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPPOL" },
    Register { name: "GPIO4_GPIENA", address: REG_GPIO4_GPIENA, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIENA" },
    Register { name: "GPIO4_GPIENB", address: REG_GPIO4_GPIENB, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPIENB" },
    Register { name: "GPIO4_GPINT", address: REG_GPIO4_GPINT, width: Width::HalfWord, access: Access::ReadWrite, group: "GPIO_GPINT" },
    Register { name: "SPIH_SPIH0STA", address: REG_SPIH_SPIH0STA, width: Width::HalfWord, access: Access::ReadOnly, group: "SPI_SPISTA" },
    Register { name: "SPIH_SPIH0RX", address: REG_SPIH_SPIH0RX, width: Width::HalfWord, access: Access::ReadOnly, group: "SPI_SPIRX" },
    Register { name: "SPIH_SPIH0TX", address: REG_SPIH_SPIH0TX, width: Width::HalfWord, access: Access::WriteOnly, group: "SPI_SPITX" },
    Register { name: "SPIH_SPIH0DIV", address: REG_SPIH_SPIH0DIV, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPIDIV" },
    Register { name: "SPIH_SPIH0CON", address: REG_SPIH_SPIH0CON, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPICON" },
    Register { name: "SPIH_SPIH0DMA", address: REG_SPIH_SPIH0DMA, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPIDMA" },
    Register { name: "SPIH_SPIH0CNT", address: REG_SPIH_SPIH0CNT, width: Width::HalfWord, access: Access::ReadWrite, group: "SPI_SPICNT" },
    Register { name: "SYSCLK_CLKCON0", address: REG_SYSCLK_CLKCON0, width: Width::HalfWord, access: Access::ReadWrite, group: "SYSCLK_CLKCON0" },
    Register { name: "SYSCLK_CLKCON1", address: REG_SYSCLK_CLKCON1, width: Width::HalfWord, access: Access::ReadWrite, group: "SYSCLK_CLKCON1" },
    Register { name: "SYSCLK_CLKCON3", address: REG_SYSCLK_CLKCON3, width: Width::HalfWord, access: Access::ReadWrite, group: "SYSCLK_CLKCON3" },
    Register { name: "SYSCLK_CLKCON4", address: REG_SYSCLK_CLKCON4, width: Width::HalfWord, access: Access::ReadWrite, group: "SYSCLK_CLKCON4" },
    Register { name: "SYSCLK_CLKCON5", address: REG_SYSCLK_CLKCON5, width: Width::HalfWord, access: Access::ReadWrite, group: "SYSCLK_CLKCON5" },
    Register { name: "SYSCLK_CLKSTAT0", address: REG_SYSCLK_CLKSTAT0, width: Width::HalfWord, access: Access::ReadWrite, group: "SYSCLK_CLKSTAT0" },
    Register { name: "BUSM_BMARBIT0", address: REG_BUSM_BMARBIT0, width: Width::HalfWord, access: Access::ReadWrite, group: "BUSM_BMARBIT0" },
    Register { name: "BUSM_BMARBIT1", address: REG_BUSM_BMARBIT1, width: Width::HalfWord, access: Access::ReadWrite, group: "BUSM_BMARBIT1" },
    Register { name: "BUSM_BMARBIT2", address: REG_BUSM_BMARBIT2, width: Width::HalfWord, access: Access::ReadWrite, group: "BUSM_BMARBIT2" },
    Register { name: "BUSM_BMARBIT3", address: REG_BUSM_BMARBIT3, width: Width::HalfWord, access: Access::ReadWrite, group: "BUSM_BMARBIT3" },
    Register { name: "BUSM_BMARBIT4", address: REG_BUSM_BMARBIT4, width: Width::HalfWord, access: Access::ReadWrite, group: "BUSM_BMARBIT4" },
    Register { name: "BUSM_BMARBIT5", address: REG_BUSM_BMARBIT5, width: Width::HalfWord, access: Access::ReadWrite, group: "BUSM_BMARBIT5" },
    Register { name: "CRC_CRC_CTL", address: REG_CRC_CRC_CTL, width: Width::Word, access: Access::ReadWrite, group: "CRC_CRC_CTL" },
    Register { name: "CRC_CRC_IPDATA", address: REG_CRC_CRC_IPDATA, width: Width::Word, access: Access::ReadWrite, group: "CRC_CRC_IPDATA" },
    Register { name: "CRC_CRC_RESULT", address: REG_CRC_CRC_RESULT, width: Width::Word, access: Access::ReadWrite, group: "CRC_CRC_RESULT" },
    Register { name: "PDI_PDI_CFG", address: REG_PDI_PDI_CFG, width: Width::Word, access: Access::ReadWrite, group: "PDI_PDI_CFG" },
    Register { name: "PDI_PDI_INT_SET", address: REG_PDI_PDI_INT_SET, width: Width::Word, access: Access::WriteOnly, group: "PDI_PDI_INT_SET" },
    Register { name: "PDI_PDI_INT_CLR", address: REG_PDI_PDI_INT_CLR, width: Width::Word, access: Access::WriteOnly, group: "PDI_PDI_INT_CLR" },
    Register { name: "PDI_PDI_STAT", address: REG_PDI_PDI_STAT, width: Width::Word, access: Access::ReadWrite, group: "PDI_PDI_STAT" },
    Register { name: "PDI_PDI_CMD", address: REG_PDI_PDI_CMD, width: Width::Word, access: Access::ReadWrite, group: "PDI_PDI_CMD" },
    Register { name: "PDI_PDI_FRDATA_N", address: REG_PDI_PDI_FRDATA_N, width: Width::Word, access: Access::ReadWrite, group: "PDI_PDI_FRDATA_N" },
    Register { name: "PDI_PDI_FIFO", address: REG_PDI_PDI_FIFO, width: Width::Word, access: Access::ReadWrite, group: "PDI_PDI_FIFO" },
    Register { name: "PDI_PDI_IF_TIMING", address: REG_PDI_PDI_IF_TIMING, width: Width::Word, access: Access::ReadWrite, group: "PDI_PDI_IF_TIMING" },
    Register { name: "AFE_AFE_CFG", address: REG_AFE_AFE_CFG, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_CFG" },
    Register { name: "AFE_AFE_SEQ_CFG", address: REG_AFE_AFE_SEQ_CFG, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_SEQ_CFG" },
    Register { name: "AFE_AFE_FIFO_CFG", address: REG_AFE_AFE_FIFO_CFG, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_FIFO_CFG" },
    Register { name: "AFE_AFE_SW_CFG", address: REG_AFE_AFE_SW_CFG, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_SW_CFG" },
    Register { name: "AFE_AFE_DAC_CFG", address: REG_AFE_AFE_DAC_CFG, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_DAC_CFG" },
    Register { name: "AFE_AFE_WG_CFG", address: REG_AFE_AFE_WG_CFG, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_CFG" },
    Register { name: "AFE_AFE_WG_DCLEVEL_1", address: REG_AFE_AFE_WG_DCLEVEL_1, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_DCLEVEL_1" },
    Register { name: "AFE_AFE_WG_DCLEVEL_2", address: REG_AFE_AFE_WG_DCLEVEL_2, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_DCLEVEL_2" },
    Register { name: "AFE_AFE_WG_DELAY_1", address: REG_AFE_AFE_WG_DELAY_1, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_DELAY_1" },
    Register { name: "AFE_AFE_WG_SLOPE_1", address: REG_AFE_AFE_WG_SLOPE_1, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_SLOPE_1" },
    Register { name: "AFE_AFE_WG_DELAY_2", address: REG_AFE_AFE_WG_DELAY_2, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_DELAY_2" },
    Register { name: "AFE_AFE_WG_SLOPE_2", address: REG_AFE_AFE_WG_SLOPE_2, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_SLOPE_2" },
    Register { name: "AFE_AFE_WG_FCW", address: REG_AFE_AFE_WG_FCW, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_FCW" },
    Register { name: "AFE_AFE_WG_PHASE", address: REG_AFE_AFE_WG_PHASE, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_PHASE" },
    Register { name: "AFE_AFE_WG_OFFSET", address: REG_AFE_AFE_WG_OFFSET, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_OFFSET" },
    Register { name: "AFE_AFE_WG_AMPLITUDE", address: REG_AFE_AFE_WG_AMPLITUDE, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_AMPLITUDE" },
    Register { name: "AFE_AFE_ADC_CFG", address: REG_AFE_AFE_ADC_CFG, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ADC_CFG" },
    Register { name: "AFE_AFE_SUPPLY_LPF_CFG", address: REG_AFE_AFE_SUPPLY_LPF_CFG, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_SUPPLY_LPF_CFG" },
    Register { name: "AFE_AFE_SW_FULL_CFG_MSB", address: REG_AFE_AFE_SW_FULL_CFG_MSB, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_SW_FULL_CFG_MSB" },
    Register { name: "AFE_AFE_SW_FULL_CFG_LSB", address: REG_AFE_AFE_SW_FULL_CFG_LSB, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_SW_FULL_CFG_LSB" },
    Register { name: "AFE_AFE_WG_DAC_CODE", address: REG_AFE_AFE_WG_DAC_CODE, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_WG_DAC_CODE" },
    Register { name: "AFE_AFE_STATUS", address: REG_AFE_AFE_STATUS, width: Width::Word, access: Access::ReadOnly, group: "AFE_AFE_STATUS" },
    Register { name: "AFE_AFE_SEQ_CRC", address: REG_AFE_AFE_SEQ_CRC, width: Width::Word, access: Access::ReadOnly, group: "AFE_AFE_SEQ_CRC" },
    Register { name: "AFE_AFE_SEQ_COUNT", address: REG_AFE_AFE_SEQ_COUNT, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_SEQ_COUNT" },
    Register { name: "AFE_AFE_SEQ_TIMEOUT", address: REG_AFE_AFE_SEQ_TIMEOUT, width: Width::Word, access: Access::ReadOnly, group: "AFE_AFE_SEQ_TIMEOUT" },
    Register { name: "AFE_AFE_DATA_FIFO_READ", address: REG_AFE_AFE_DATA_FIFO_READ, width: Width::Word, access: Access::ReadOnly, group: "AFE_AFE_DATA_FIFO_READ" },
    Register { name: "AFE_AFE_CMD_FIFO_WRITE", address: REG_AFE_AFE_CMD_FIFO_WRITE, width: Width::Word, access: Access::WriteOnly, group: "AFE_AFE_CMD_FIFO_WRITE" },
    Register { name: "AFE_AFE_ADC_RESULT", address: REG_AFE_AFE_ADC_RESULT, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ADC_RESULT" },
    Register { name: "AFE_AFE_DFT_RESULT_REAL", address: REG_AFE_AFE_DFT_RESULT_REAL, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_DFT_RESULT_REAL" },
    Register { name: "AFE_AFE_DFT_RESULT_IMAG", address: REG_AFE_AFE_DFT_RESULT_IMAG, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_DFT_RESULT_IMAG" },
    Register { name: "AFE_AFE_SUPPLY_LPF_RESULT", address: REG_AFE_AFE_SUPPLY_LPF_RESULT, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_SUPPLY_LPF_RESULT" },
    Register { name: "AFE_AFE_TEMP_SENSOR_RESULT", address: REG_AFE_AFE_TEMP_SENSOR_RESULT, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_TEMP_SENSOR_RESULT" },
    Register { name: "AFE_AFE_ANALOG_CAPTURE_IEN", address: REG_AFE_AFE_ANALOG_CAPTURE_IEN, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ANALOG_CAPTURE_IEN" },
    Register { name: "AFE_AFE_ANALOG_GEN_IEN", address: REG_AFE_AFE_ANALOG_GEN_IEN, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ANALOG_GEN_IEN" },
    Register { name: "AFE_AFE_CMD_FIFO_IEN", address: REG_AFE_AFE_CMD_FIFO_IEN, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_CMD_FIFO_IEN" },
    Register { name: "AFE_AFE_DATA_FIFO_IEN", address: REG_AFE_AFE_DATA_FIFO_IEN, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_DATA_FIFO_IEN" },
    Register { name: "AFE_AFE_ANALOG_CAPTURE_INT", address: REG_AFE_AFE_ANALOG_CAPTURE_INT, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ANALOG_CAPTURE_INT" },
    Register { name: "AFE_AFE_ANALOG_GEN_INT", address: REG_AFE_AFE_ANALOG_GEN_INT, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ANALOG_GEN_INT" },
    Register { name: "AFE_AFE_CMD_FIFO_INT", address: REG_AFE_AFE_CMD_FIFO_INT, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_CMD_FIFO_INT" },
    Register { name: "AFE_AFE_DATA_FIFO_INT", address: REG_AFE_AFE_DATA_FIFO_INT, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_DATA_FIFO_INT" },
    Register { name: "AFE_AFE_SW_STATUS_MSB", address: REG_AFE_AFE_SW_STATUS_MSB, width: Width::Word, access: Access::ReadOnly, group: "AFE_AFE_SW_STATUS_MSB" },
    Register { name: "AFE_AFE_SW_STATUS_LSB", address: REG_AFE_AFE_SW_STATUS_LSB, width: Width::Word, access: Access::ReadOnly, group: "AFE_AFE_SW_STATUS_LSB" },
    Register { name: "AFE_AFE_ADCMIN", address: REG_AFE_AFE_ADCMIN, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ADCMIN" },
    Register { name: "AFE_AFE_ADCMAX", address: REG_AFE_AFE_ADCMAX, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ADCMAX" },
    Register { name: "AFE_AFE_ADCDELTA", address: REG_AFE_AFE_ADCDELTA, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ADCDELTA" },
    Register { name: "AFE_AFE_CAL_DATA_LOCK", address: REG_AFE_AFE_CAL_DATA_LOCK, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_CAL_DATA_LOCK" },
    Register { name: "AFE_AFE_ADC_GAIN_TIA", address: REG_AFE_AFE_ADC_GAIN_TIA, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ADC_GAIN_TIA" },
    Register { name: "AFE_AFE_ADC_OFFSET_TIA", address: REG_AFE_AFE_ADC_OFFSET_TIA, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ADC_OFFSET_TIA" },
    Register { name: "AFE_AFE_ADC_GAIN_TEMP_SENS", address: REG_AFE_AFE_ADC_GAIN_TEMP_SENS, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ADC_GAIN_TEMP_SENS" },
    Register { name: "AFE_AFE_ADC_OFFSET_TEMP_SENS", address: REG_AFE_AFE_ADC_OFFSET_TEMP_SENS, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ADC_OFFSET_TEMP_SENS" },
    Register { name: "AFE_AFE_ADC_GAIN_AUX", address: REG_AFE_AFE_ADC_GAIN_AUX, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ADC_GAIN_AUX" },
    Register { name: "AFE_AFE_ADC_OFFSET_AUX", address: REG_AFE_AFE_ADC_OFFSET_AUX, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ADC_OFFSET_AUX" },
    Register { name: "AFE_AFE_DAC_OFFSET_UNITY", address: REG_AFE_AFE_DAC_OFFSET_UNITY, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_DAC_OFFSET_UNITY" },
    Register { name: "AFE_AFE_DAC_OFFSET_ATTEN", address: REG_AFE_AFE_DAC_OFFSET_ATTEN, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_DAC_OFFSET_ATTEN" },
    Register { name: "AFE_AFE_DAC_GAIN", address: REG_AFE_AFE_DAC_GAIN, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_DAC_GAIN" },
    Register { name: "AFE_AFE_REF_TRIM0", address: REG_AFE_AFE_REF_TRIM0, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_REF_TRIM0" },
    Register { name: "AFE_AFE_REF_TRIM1", address: REG_AFE_AFE_REF_TRIM1, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_REF_TRIM1" },
    Register { name: "AFE_AFE_ALDO_TRIM", address: REG_AFE_AFE_ALDO_TRIM, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_ALDO_TRIM" },
    Register { name: "AFE_AFE_DAC_TRIM", address: REG_AFE_AFE_DAC_TRIM, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_DAC_TRIM" },
    Register { name: "AFE_AFE_INAMP_TRIM", address: REG_AFE_AFE_INAMP_TRIM, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_INAMP_TRIM" },
    Register { name: "AFE_AFE_EXBUF_TRIM", address: REG_AFE_AFE_EXBUF_TRIM, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_EXBUF_TRIM" },
    Register { name: "AFE_AFE_TEMP_SENS_TRIM", address: REG_AFE_AFE_TEMP_SENS_TRIM, width: Width::Word, access: Access::ReadWrite, group: "AFE_AFE_TEMP_SENS_TRIM" },
    Register { name: "CT_CT_CDC_PWR", address: REG_CT_CT_CDC_PWR, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_CDC_PWR" },
    Register { name: "CT_CT_CFG1", address: REG_CT_CT_CFG1, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_CFG1" },
    Register { name: "CT_CT_CFG2", address: REG_CT_CT_CFG2, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_CFG2" },
    Register { name: "CT_CT_CFG3", address: REG_CT_CT_CFG3, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_CFG3" },
    Register { name: "CT_CT_MEAS_SEL", address: REG_CT_CT_MEAS_SEL, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_MEAS_SEL" },
    Register { name: "CT_CT_BASELINE_CTRL", address: REG_CT_CT_BASELINE_CTRL, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_BASELINE_CTRL" },
    Register { name: "CT_CT_AVG", address: REG_CT_CT_AVG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_AVG" },
    Register { name: "CT_CT_CAL_EN", address: REG_CT_CT_CAL_EN, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_CAL_EN" },
    Register { name: "CT_CT_TOUCH_CFG1", address: REG_CT_CT_TOUCH_CFG1, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_TOUCH_CFG1" },
    Register { name: "CT_CT_TOUCH_CFG2", address: REG_CT_CT_TOUCH_CFG2, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_TOUCH_CFG2" },
    Register { name: "CT_CT_RELEASE_CFG1", address: REG_CT_CT_RELEASE_CFG1, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_RELEASE_CFG1" },
    Register { name: "CT_CT_RELEASE_CFG2", address: REG_CT_CT_RELEASE_CFG2, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_RELEASE_CFG2" },
    Register { name: "CT_CT_IEN", address: REG_CT_CT_IEN, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_IEN" },
    Register { name: "CT_CT_INT", address: REG_CT_CT_INT, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_INT" },
    Register { name: "CT_CT_OFFS_HSTAT", address: REG_CT_CT_OFFS_HSTAT, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_OFFS_HSTAT" },
    Register { name: "CT_CT_OFFS_LSTAT", address: REG_CT_CT_OFFS_LSTAT, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_OFFS_LSTAT" },
    Register { name: "CT_CT_PROX_STAT", address: REG_CT_CT_PROX_STAT, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_PROX_STAT" },
    Register { name: "CT_CT_FPROX_STAT", address: REG_CT_CT_FPROX_STAT, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_FPROX_STAT" },
    Register { name: "CT_CT_TOUCH_STAT", address: REG_CT_CT_TOUCH_STAT, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_TOUCH_STAT" },
    Register { name: "CT_CT_STAGE0_CFG", address: REG_CT_CT_STAGE0_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE0_CFG" },
    Register { name: "CT_CT_STAGE1_CFG", address: REG_CT_CT_STAGE1_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE1_CFG" },
    Register { name: "CT_CT_STAGE2_CFG", address: REG_CT_CT_STAGE2_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE2_CFG" },
    Register { name: "CT_CT_STAGE3_CFG", address: REG_CT_CT_STAGE3_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE3_CFG" },
    Register { name: "CT_CT_STAGE4_CFG", address: REG_CT_CT_STAGE4_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE4_CFG" },
    Register { name: "CT_CT_STAGE5_CFG", address: REG_CT_CT_STAGE5_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE5_CFG" },
    Register { name: "CT_CT_STAGE6_CFG", address: REG_CT_CT_STAGE6_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE6_CFG" },
    Register { name: "CT_CT_STAGE7_CFG", address: REG_CT_CT_STAGE7_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE7_CFG" },
    Register { name: "CT_CT_STAGE8_CFG", address: REG_CT_CT_STAGE8_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE8_CFG" },
    Register { name: "CT_CT_STAGE9_CFG", address: REG_CT_CT_STAGE9_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE9_CFG" },
    Register { name: "CT_CT_STAGE10_CFG", address: REG_CT_CT_STAGE10_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE10_CFG" },
    Register { name: "CT_CT_STAGE11_CFG", address: REG_CT_CT_STAGE11_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE11_CFG" },
    Register { name: "CT_CT_STAGE12_CFG", address: REG_CT_CT_STAGE12_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE12_CFG" },
    Register { name: "CT_CT_STAGE13_CFG", address: REG_CT_CT_STAGE13_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE13_CFG" },
    Register { name: "CT_CT_STAGE14_CFG", address: REG_CT_CT_STAGE14_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE14_CFG" },
    Register { name: "CT_CT_STAGE15_CFG", address: REG_CT_CT_STAGE15_CFG, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_STAGE15_CFG" },
    Register { name: "CT_CT_SENSOR_THR_CFG0", address: REG_CT_CT_SENSOR_THR_CFG0, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_SENSOR_THR_CFG0" },
    Register { name: "CT_CT_SENSOR_THR_CFG1", address: REG_CT_CT_SENSOR_THR_CFG1, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_SENSOR_THR_CFG1" },
    Register { name: "CT_CT_SENSOR_THR_CFG2", address: REG_CT_CT_SENSOR_THR_CFG2, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_SENSOR_THR_CFG2" },
    Register { name: "CT_CT_SENSOR_THR_CFG3", address: REG_CT_CT_SENSOR_THR_CFG3, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_SENSOR_THR_CFG3" },
    Register { name: "CT_CT_SENSOR_THR_CFG4", address: REG_CT_CT_SENSOR_THR_CFG4, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_SENSOR_THR_CFG4" },
    Register { name: "CT_CT_SENSOR_THR_CFG5", address: REG_CT_CT_SENSOR_THR_CFG5, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_SENSOR_THR_CFG5" },
    Register { name: "CT_CT_SENSOR_THR_CFG6", address: REG_CT_CT_SENSOR_THR_CFG6, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_SENSOR_THR_CFG6" },
    Register { name: "CT_CT_SENSOR_THR_CFG7", address: REG_CT_CT_SENSOR_THR_CFG7, width: Width::Word, access: Access::ReadWrite, group: "CT_CT_SENSOR_THR_CFG7" },
    Register { name: "CT_CT_CDC_RES0", address: REG_CT_CT_CDC_RES0, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_CDC_RES0" },
    Register { name: "CT_CT_CDC_RES1", address: REG_CT_CT_CDC_RES1, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_CDC_RES1" },
    Register { name: "CT_CT_CDC_RES2", address: REG_CT_CT_CDC_RES2, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_CDC_RES2" },
    Register { name: "CT_CT_CDC_RES3", address: REG_CT_CT_CDC_RES3, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_CDC_RES3" },
    Register { name: "CT_CT_CDC_RES4", address: REG_CT_CT_CDC_RES4, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_CDC_RES4" },
    Register { name: "CT_CT_CDC_RES5", address: REG_CT_CT_CDC_RES5, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_CDC_RES5" },
    Register { name: "CT_CT_CDC_RES6", address: REG_CT_CT_CDC_RES6, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_CDC_RES6" },
    Register { name: "CT_CT_CDC_RES7", address: REG_CT_CT_CDC_RES7, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_CDC_RES7" },
    Register { name: "CT_CT_BASELINE0", address: REG_CT_CT_BASELINE0, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE0" },
    Register { name: "CT_CT_BASELINE1", address: REG_CT_CT_BASELINE1, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE1" },
    Register { name: "CT_CT_BASELINE2", address: REG_CT_CT_BASELINE2, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE2" },
    Register { name: "CT_CT_BASELINE3", address: REG_CT_CT_BASELINE3, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE3" },
    Register { name: "CT_CT_BASELINE4", address: REG_CT_CT_BASELINE4, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE4" },
    Register { name: "CT_CT_BASELINE5", address: REG_CT_CT_BASELINE5, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE5" },
    Register { name: "CT_CT_BASELINE6", address: REG_CT_CT_BASELINE6, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE6" },
    Register { name: "CT_CT_BASELINE7", address: REG_CT_CT_BASELINE7, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE7" },
    Register { name: "CT_CT_BASELINE8", address: REG_CT_CT_BASELINE8, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE8" },
    Register { name: "CT_CT_BASELINE9", address: REG_CT_CT_BASELINE9, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE9" },
    Register { name: "CT_CT_BASELINE10", address: REG_CT_CT_BASELINE10, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE10" },
    Register { name: "CT_CT_BASELINE11", address: REG_CT_CT_BASELINE11, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE11" },
    Register { name: "CT_CT_BASELINE12", address: REG_CT_CT_BASELINE12, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE12" },
    Register { name: "CT_CT_BASELINE13", address: REG_CT_CT_BASELINE13, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE13" },
    Register { name: "CT_CT_BASELINE14", address: REG_CT_CT_BASELINE14, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE14" },
    Register { name: "CT_CT_BASELINE15", address: REG_CT_CT_BASELINE15, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_BASELINE15" },
    Register { name: "CT_CT_PK2PK0", address: REG_CT_CT_PK2PK0, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_PK2PK0" },
    Register { name: "CT_CT_PK2PK1", address: REG_CT_CT_PK2PK1, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_PK2PK1" },
    Register { name: "CT_CT_PK2PK2", address: REG_CT_CT_PK2PK2, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_PK2PK2" },
    Register { name: "CT_CT_PK2PK3", address: REG_CT_CT_PK2PK3, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_PK2PK3" },
    Register { name: "CT_CT_PK2PK4", address: REG_CT_CT_PK2PK4, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_PK2PK4" },
    Register { name: "CT_CT_PK2PK5", address: REG_CT_CT_PK2PK5, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_PK2PK5" },
    Register { name: "CT_CT_PK2PK6", address: REG_CT_CT_PK2PK6, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_PK2PK6" },
    Register { name: "CT_CT_PK2PK7", address: REG_CT_CT_PK2PK7, width: Width::Word, access: Access::ReadOnly, group: "CT_CT_PK2PK7" },
    Register { name: "USB0_FADDR", address: REG_USB0_FADDR, width: Width::Byte, access: Access::ReadWrite, group: "USB_FADDR" },
    Register { name: "USB0_POWER", address: REG_USB0_POWER, width: Width::Byte, access: Access::ReadWrite, group: "USB_POWER" },
    Register { name: "USB0_INTRTX", address: REG_USB0_INTRTX, width: Width::HalfWord, access: Access::ReadOnly, group: "USB_INTRTX" },
    Register { name: "USB0_INTRRX", address: REG_USB0_INTRRX, width: Width::HalfWord, access: Access::ReadOnly, group: "USB_INTRRX" },
    Register { name: "USB0_INTRTXE", address: REG_USB0_INTRTXE, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_INTRTXE" },
    Register { name: "USB0_INTRRXE", address: REG_USB0_INTRRXE, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_INTRRXE" },
    Register { name: "USB0_IRQ", address: REG_USB0_IRQ, width: Width::Byte, access: Access::ReadOnly, group: "USB_IRQ" },
    Register { name: "USB0_IEN", address: REG_USB0_IEN, width: Width::Byte, access: Access::ReadWrite, group: "USB_IEN" },
    Register { name: "USB0_FRAME", address: REG_USB0_FRAME, width: Width::HalfWord, access: Access::ReadOnly, group: "USB_FRAME" },
    Register { name: "USB0_INDEX", address: REG_USB0_INDEX, width: Width::Byte, access: Access::ReadWrite, group: "USB_INDEX" },
    Register { name: "USB0_TESTMODE", address: REG_USB0_TESTMODE, width: Width::Byte, access: Access::ReadWrite, group: "USB_TESTMODE" },
    Register { name: "USB0_EPI_TXMAXP0", address: REG_USB0_EPI_TXMAXP0, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EPI_TXMAXP" },
    Register { name: "USB0_EPI_TXCSR_H0", address: REG_USB0_EPI_TXCSR_H0, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EPI_TXCSR_H" },
    Register { name: "USB0_EP0I_CSR0_P", address: REG_USB0_EP0I_CSR0_P, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP0I_CSR_P" },
    Register { name: "USB0_EP0I_CSR0_H", address: REG_USB0_EP0I_CSR0_H, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP0I_CSR_H" },
    Register { name: "USB0_EPI_TXCSR_P0", address: REG_USB0_EPI_TXCSR_P0, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EPI_TXCSR_P" },
    Register { name: "USB0_EPI_RXMAXP0", address: REG_USB0_EPI_RXMAXP0, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EPI_RXMAXP" },
    Register { name: "USB0_EPI_RXCSR_H0", address: REG_USB0_EPI_RXCSR_H0, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EPI_RXCSR_H" },
    Register { name: "USB0_EPI_RXCSR_P0", address: REG_USB0_EPI_RXCSR_P0, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EPI_RXCSR_P" },
    Register { name: "USB0_EP0I_CNT0", address: REG_USB0_EP0I_CNT0, width: Width::HalfWord, access: Access::ReadOnly, group: "USB_EP0I_CNT" },
    Register { name: "USB0_EPI_RXCNT0", address: REG_USB0_EPI_RXCNT0, width: Width::HalfWord, access: Access::ReadOnly, group: "USB_EPI_RXCNT" },
    Register { name: "USB0_EP0I_CFGDATA0", address: REG_USB0_EP0I_CFGDATA0, width: Width::Byte, access: Access::ReadOnly, group: "USB_EP0I_CFGDATA" },
    Register { name: "USB0_EPI_FIFOSIZE0", address: REG_USB0_EPI_FIFOSIZE0, width: Width::Byte, access: Access::ReadWrite, group: "USB_EPI_FIFOSIZE" },
    Register { name: "USB0_FIFO0", address: REG_USB0_FIFO0, width: Width::Word, access: Access::ReadWrite, group: "USB_FIFO" },
    Register { name: "USB0_FIFO1", address: REG_USB0_FIFO1, width: Width::Word, access: Access::ReadWrite, group: "USB_FIFO" },
    Register { name: "USB0_FIFO2", address: REG_USB0_FIFO2, width: Width::Word, access: Access::ReadWrite, group: "USB_FIFO" },
    Register { name: "USB0_FIFO3", address: REG_USB0_FIFO3, width: Width::Word, access: Access::ReadWrite, group: "USB_FIFO" },
    Register { name: "USB0_FIFOH0", address: REG_USB0_FIFOH0, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_FIFOH" },
    Register { name: "USB0_FIFOH1", address: REG_USB0_FIFOH1, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_FIFOH" },
    Register { name: "USB0_FIFOH2", address: REG_USB0_FIFOH2, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_FIFOH" },
    Register { name: "USB0_FIFOH3", address: REG_USB0_FIFOH3, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_FIFOH" },
    Register { name: "USB0_FIFOB0", address: REG_USB0_FIFOB0, width: Width::Byte, access: Access::ReadWrite, group: "USB_FIFOB" },
    Register { name: "USB0_FIFOB1", address: REG_USB0_FIFOB1, width: Width::Byte, access: Access::ReadWrite, group: "USB_FIFOB" },
    Register { name: "USB0_FIFOB2", address: REG_USB0_FIFOB2, width: Width::Byte, access: Access::ReadWrite, group: "USB_FIFOB" },
    Register { name: "USB0_FIFOB3", address: REG_USB0_FIFOB3, width: Width::Byte, access: Access::ReadWrite, group: "USB_FIFOB" },
    Register { name: "USB0_DEV_CTL", address: REG_USB0_DEV_CTL, width: Width::Byte, access: Access::ReadWrite, group: "USB_DEV_CTL" },
    Register { name: "USB0_MISC", address: REG_USB0_MISC, width: Width::Byte, access: Access::ReadWrite, group: "USB_MISC" },
    Register { name: "USB0_EPINFO", address: REG_USB0_EPINFO, width: Width::Byte, access: Access::ReadOnly, group: "USB_EPINFO" },
    Register { name: "USB0_RAMINFO", address: REG_USB0_RAMINFO, width: Width::Byte, access: Access::ReadOnly, group: "USB_RAMINFO" },
    Register { name: "USB0_LINKINFO", address: REG_USB0_LINKINFO, width: Width::Byte, access: Access::ReadWrite, group: "USB_LINKINFO" },
    Register { name: "USB0_FS_EOF1", address: REG_USB0_FS_EOF1, width: Width::Byte, access: Access::ReadWrite, group: "USB_FS_EOF1" },
    Register { name: "USB0_SOFT_RST", address: REG_USB0_SOFT_RST, width: Width::Byte, access: Access::ReadWrite, group: "USB_SOFT_RST" },
    Register { name: "USB0_EP0_TXMAXP", address: REG_USB0_EP0_TXMAXP, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXMAXP" },
    Register { name: "USB0_EP1_TXMAXP", address: REG_USB0_EP1_TXMAXP, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXMAXP" },
    Register { name: "USB0_EP2_TXMAXP", address: REG_USB0_EP2_TXMAXP, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXMAXP" },
    Register { name: "USB0_EP3_TXMAXP", address: REG_USB0_EP3_TXMAXP, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXMAXP" },
    Register { name: "USB0_EP0_TXCSR_P", address: REG_USB0_EP0_TXCSR_P, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXCSR_P" },
    Register { name: "USB0_EP1_TXCSR_P", address: REG_USB0_EP1_TXCSR_P, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXCSR_P" },
    Register { name: "USB0_EP2_TXCSR_P", address: REG_USB0_EP2_TXCSR_P, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXCSR_P" },
    Register { name: "USB0_EP3_TXCSR_P", address: REG_USB0_EP3_TXCSR_P, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXCSR_P" },
    Register { name: "USB0_EP0_CSR0_P", address: REG_USB0_EP0_CSR0_P, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP0_CSR_P" },
    Register { name: "USB0_EP0_CSR0_H", address: REG_USB0_EP0_CSR0_H, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP0_CSR_H" },
    Register { name: "USB0_EP0_TXCSR_H", address: REG_USB0_EP0_TXCSR_H, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXCSR_H" },
    Register { name: "USB0_EP1_TXCSR_H", address: REG_USB0_EP1_TXCSR_H, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXCSR_H" },
    Register { name: "USB0_EP2_TXCSR_H", address: REG_USB0_EP2_TXCSR_H, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXCSR_H" },
    Register { name: "USB0_EP3_TXCSR_H", address: REG_USB0_EP3_TXCSR_H, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_TXCSR_H" },
    Register { name: "USB0_EP0_RXMAXP", address: REG_USB0_EP0_RXMAXP, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXMAXP" },
    Register { name: "USB0_EP1_RXMAXP", address: REG_USB0_EP1_RXMAXP, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXMAXP" },
    Register { name: "USB0_EP2_RXMAXP", address: REG_USB0_EP2_RXMAXP, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXMAXP" },
    Register { name: "USB0_EP3_RXMAXP", address: REG_USB0_EP3_RXMAXP, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXMAXP" },
    Register { name: "USB0_EP0_RXCSR_P", address: REG_USB0_EP0_RXCSR_P, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXCSR_P" },
    Register { name: "USB0_EP1_RXCSR_P", address: REG_USB0_EP1_RXCSR_P, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXCSR_P" },
    Register { name: "USB0_EP2_RXCSR_P", address: REG_USB0_EP2_RXCSR_P, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXCSR_P" },
    Register { name: "USB0_EP3_RXCSR_P", address: REG_USB0_EP3_RXCSR_P, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXCSR_P" },
    Register { name: "USB0_EP0_RXCSR_H", address: REG_USB0_EP0_RXCSR_H, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXCSR_H" },
    Register { name: "USB0_EP1_RXCSR_H", address: REG_USB0_EP1_RXCSR_H, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXCSR_H" },
    Register { name: "USB0_EP2_RXCSR_H", address: REG_USB0_EP2_RXCSR_H, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXCSR_H" },
    Register { name: "USB0_EP3_RXCSR_H", address: REG_USB0_EP3_RXCSR_H, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_EP_RXCSR_H" },
    Register { name: "USB0_EP0_CNT0", address: REG_USB0_EP0_CNT0, width: Width::HalfWord, access: Access::ReadOnly, group: "USB_EP0_CNT" },
    Register { name: "USB0_EP0_RXCNT", address: REG_USB0_EP0_RXCNT, width: Width::HalfWord, access: Access::ReadOnly, group: "USB_EP_RXCNT" },
    Register { name: "USB0_EP1_RXCNT", address: REG_USB0_EP1_RXCNT, width: Width::HalfWord, access: Access::ReadOnly, group: "USB_EP_RXCNT" },
    Register { name: "USB0_EP2_RXCNT", address: REG_USB0_EP2_RXCNT, width: Width::HalfWord, access: Access::ReadOnly, group: "USB_EP_RXCNT" },
    Register { name: "USB0_EP3_RXCNT", address: REG_USB0_EP3_RXCNT, width: Width::HalfWord, access: Access::ReadOnly, group: "USB_EP_RXCNT" },
    Register { name: "USB0_EP0_FIFOSIZE", address: REG_USB0_EP0_FIFOSIZE, width: Width::Byte, access: Access::ReadWrite, group: "USB_EP_FIFOSIZE" },
    Register { name: "USB0_EP1_FIFOSIZE", address: REG_USB0_EP1_FIFOSIZE, width: Width::Byte, access: Access::ReadWrite, group: "USB_EP_FIFOSIZE" },
    Register { name: "USB0_EP2_FIFOSIZE", address: REG_USB0_EP2_FIFOSIZE, width: Width::Byte, access: Access::ReadWrite, group: "USB_EP_FIFOSIZE" },
    Register { name: "USB0_EP3_FIFOSIZE", address: REG_USB0_EP3_FIFOSIZE, width: Width::Byte, access: Access::ReadWrite, group: "USB_EP_FIFOSIZE" },
    Register { name: "USB0_EP0_CFGDATA0", address: REG_USB0_EP0_CFGDATA0, width: Width::Byte, access: Access::ReadOnly, group: "USB_EP0_CFGDATA" },
    Register { name: "USB0_DMA_IRQ", address: REG_USB0_DMA_IRQ, width: Width::Byte, access: Access::ReadOnly, group: "USB_DMA_IRQ" },
    Register { name: "USB0_DMA0_CTL", address: REG_USB0_DMA0_CTL, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_DMA_CTL" },
    Register { name: "USB0_DMA1_CTL", address: REG_USB0_DMA1_CTL, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_DMA_CTL" },
    Register { name: "USB0_DMA0_ADDR", address: REG_USB0_DMA0_ADDR, width: Width::Word, access: Access::ReadWrite, group: "USB_DMA_ADDR" },
    Register { name: "USB0_DMA1_ADDR", address: REG_USB0_DMA1_ADDR, width: Width::Word, access: Access::ReadWrite, group: "USB_DMA_ADDR" },
    Register { name: "USB0_DMA0_CNT", address: REG_USB0_DMA0_CNT, width: Width::Word, access: Access::ReadWrite, group: "USB_DMA_CNT" },
    Register { name: "USB0_DMA1_CNT", address: REG_USB0_DMA1_CNT, width: Width::Word, access: Access::ReadWrite, group: "USB_DMA_CNT" },
    Register { name: "USB0_RXDPKTBUFDIS", address: REG_USB0_RXDPKTBUFDIS, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_RXDPKTBUFDIS" },
    Register { name: "USB0_TXDPKTBUFDIS", address: REG_USB0_TXDPKTBUFDIS, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_TXDPKTBUFDIS" },
    Register { name: "USB0_CT_UCH", address: REG_USB0_CT_UCH, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_CT_UCH" },
    Register { name: "USB0_LPM_ATTR", address: REG_USB0_LPM_ATTR, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_LPM_ATTR" },
    Register { name: "USB0_LPM_CTL", address: REG_USB0_LPM_CTL, width: Width::Byte, access: Access::ReadWrite, group: "USB_LPM_CTL" },
    Register { name: "USB0_LPM_IEN", address: REG_USB0_LPM_IEN, width: Width::Byte, access: Access::ReadWrite, group: "USB_LPM_IEN" },
    Register { name: "USB0_LPM_IRQ", address: REG_USB0_LPM_IRQ, width: Width::Byte, access: Access::ReadOnly, group: "USB_LPM_IRQ" },
    Register { name: "USB0_PHY_CTL", address: REG_USB0_PHY_CTL, width: Width::HalfWord, access: Access::ReadWrite, group: "USB_PHY_CTL" },
    Register { name: "USB0_PHY_STAT", address: REG_USB0_PHY_STAT, width: Width::HalfWord, access: Access::ReadOnly, group: "USB_PHY_STAT" },
    Register { name: "USB0_RAM_ADDR", address: REG_USB0_RAM_ADDR, width: Width::Word, access: Access::ReadWrite, group: "USB_RAM_ADDR" },
    Register { name: "USB0_RAM_DATA", address: REG_USB0_RAM_DATA, width: Width::Word, access: Access::ReadWrite, group: "USB_RAM_DATA" },
    Register { name: "NVIC_INTNUM", address: REG_NVIC_INTNUM, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTNUM" },
    Register { name: "NVIC_STKSTA", address: REG_NVIC_STKSTA, width: Width::Word, access: Access::ReadWrite, group: "NVIC_STKSTA" },
    Register { name: "NVIC_STKLD", address: REG_NVIC_STKLD, width: Width::Word, access: Access::ReadWrite, group: "NVIC_STKLD" },
    Register { name: "NVIC_STKVAL", address: REG_NVIC_STKVAL, width: Width::Word, access: Access::ReadWrite, group: "NVIC_STKVAL" },
    Register { name: "NVIC_STKCAL", address: REG_NVIC_STKCAL, width: Width::Word, access: Access::ReadWrite, group: "NVIC_STKCAL" },
    Register { name: "NVIC_INTSETE0", address: REG_NVIC_INTSETE0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTSETE0" },
    Register { name: "NVIC_INTSETE1", address: REG_NVIC_INTSETE1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTSETE1" },
    Register { name: "NVIC_INTCLRE0", address: REG_NVIC_INTCLRE0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTCLRE0" },
    Register { name: "NVIC_INTCLRE1", address: REG_NVIC_INTCLRE1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTCLRE1" },
    Register { name: "NVIC_INTSETP0", address: REG_NVIC_INTSETP0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTSETP0" },
    Register { name: "NVIC_INTSETP1", address: REG_NVIC_INTSETP1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTSETP1" },
    Register { name: "NVIC_INTCLRP0", address: REG_NVIC_INTCLRP0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTCLRP0" },
    Register { name: "NVIC_INTCLRP1", address: REG_NVIC_INTCLRP1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTCLRP1" },
    Register { name: "NVIC_INTACT0", address: REG_NVIC_INTACT0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTACT0" },
    Register { name: "NVIC_INTACT1", address: REG_NVIC_INTACT1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTACT1" },
    Register { name: "NVIC_INTPRI0", address: REG_NVIC_INTPRI0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPRI0" },
    Register { name: "NVIC_INTPRI1", address: REG_NVIC_INTPRI1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPRI1" },
    Register { name: "NVIC_INTPRI2", address: REG_NVIC_INTPRI2, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPRI2" },
    Register { name: "NVIC_INTPRI3", address: REG_NVIC_INTPRI3, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPRI3" },
    Register { name: "NVIC_INTPRI4", address: REG_NVIC_INTPRI4, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPRI4" },
    Register { name: "NVIC_INTPRI5", address: REG_NVIC_INTPRI5, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPRI5" },
    Register { name: "NVIC_INTPRI6", address: REG_NVIC_INTPRI6, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPRI6" },
    Register { name: "NVIC_INTPRI7", address: REG_NVIC_INTPRI7, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPRI7" },
    Register { name: "NVIC_INTPRI8", address: REG_NVIC_INTPRI8, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPRI8" },
    Register { name: "NVIC_INTPRI9", address: REG_NVIC_INTPRI9, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPRI9" },
    Register { name: "NVIC_INTPRI10", address: REG_NVIC_INTPRI10, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPRI10" },
    Register { name: "NVIC_INTCPID", address: REG_NVIC_INTCPID, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTCPID" },
    Register { name: "NVIC_INTSTA", address: REG_NVIC_INTSTA, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTSTA" },
    Register { name: "NVIC_INTVEC", address: REG_NVIC_INTVEC, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTVEC" },
    Register { name: "NVIC_INTAIRC", address: REG_NVIC_INTAIRC, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTAIRC" },
    Register { name: "NVIC_INTCON0", address: REG_NVIC_INTCON0, width: Width::HalfWord, access: Access::ReadWrite, group: "NVIC_INTCON0" },
    Register { name: "NVIC_INTCON1", address: REG_NVIC_INTCON1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTCON1" },
    Register { name: "NVIC_INTSHPRIO0", address: REG_NVIC_INTSHPRIO0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTSHPRIO0" },
    Register { name: "NVIC_INTSHPRIO1", address: REG_NVIC_INTSHPRIO1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTSHPRIO1" },
    Register { name: "NVIC_INTSHPRIO3", address: REG_NVIC_INTSHPRIO3, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTSHPRIO3" },
    Register { name: "NVIC_INTSHCSR", address: REG_NVIC_INTSHCSR, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTSHCSR" },
    Register { name: "NVIC_INTCFSR", address: REG_NVIC_INTCFSR, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTCFSR" },
    Register { name: "NVIC_INTHFSR", address: REG_NVIC_INTHFSR, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTHFSR" },
    Register { name: "NVIC_INTDFSR", address: REG_NVIC_INTDFSR, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTDFSR" },
    Register { name: "NVIC_INTMMAR", address: REG_NVIC_INTMMAR, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTMMAR" },
    Register { name: "NVIC_INTBFAR", address: REG_NVIC_INTBFAR, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTBFAR" },
    Register { name: "NVIC_INTAFSR", address: REG_NVIC_INTAFSR, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTAFSR" },
    Register { name: "NVIC_INTPFR0", address: REG_NVIC_INTPFR0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPFR0" },
    Register { name: "NVIC_INTPFR1", address: REG_NVIC_INTPFR1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPFR1" },
    Register { name: "NVIC_INTDFR0", address: REG_NVIC_INTDFR0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTDFR0" },
    Register { name: "NVIC_INTAFR0", address: REG_NVIC_INTAFR0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTAFR0" },
    Register { name: "NVIC_INTMMFR0", address: REG_NVIC_INTMMFR0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTMMFR0" },
    Register { name: "NVIC_INTMMFR1", address: REG_NVIC_INTMMFR1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTMMFR1" },
    Register { name: "NVIC_INTMMFR2", address: REG_NVIC_INTMMFR2, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTMMFR2" },
    Register { name: "NVIC_INTMMFR3", address: REG_NVIC_INTMMFR3, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTMMFR3" },
    Register { name: "NVIC_INTISAR0", address: REG_NVIC_INTISAR0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTISAR0" },
    Register { name: "NVIC_INTISAR1", address: REG_NVIC_INTISAR1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTISAR1" },
    Register { name: "NVIC_INTISAR2", address: REG_NVIC_INTISAR2, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTISAR2" },
    Register { name: "NVIC_INTISAR3", address: REG_NVIC_INTISAR3, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTISAR3" },
    Register { name: "NVIC_INTISAR4", address: REG_NVIC_INTISAR4, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTISAR4" },
    Register { name: "NVIC_INTTRGI", address: REG_NVIC_INTTRGI, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTTRGI" },
    Register { name: "NVIC_INTPID4", address: REG_NVIC_INTPID4, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPID4" },
    Register { name: "NVIC_INTPID5", address: REG_NVIC_INTPID5, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPID5" },
    Register { name: "NVIC_INTPID6", address: REG_NVIC_INTPID6, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPID6" },
    Register { name: "NVIC_INTPID7", address: REG_NVIC_INTPID7, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPID7" },
    Register { name: "NVIC_INTPID0", address: REG_NVIC_INTPID0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPID0" },
    Register { name: "NVIC_INTPID1", address: REG_NVIC_INTPID1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPID1" },
    Register { name: "NVIC_INTPID2", address: REG_NVIC_INTPID2, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPID2" },
    Register { name: "NVIC_INTPID3", address: REG_NVIC_INTPID3, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTPID3" },
    Register { name: "NVIC_INTCID0", address: REG_NVIC_INTCID0, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTCID0" },
    Register { name: "NVIC_INTCID1", address: REG_NVIC_INTCID1, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTCID1" },
    Register { name: "NVIC_INTCID2", address: REG_NVIC_INTCID2, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTCID2" },
    Register { name: "NVIC_INTCID3", address: REG_NVIC_INTCID3, width: Width::Word, access: Access::ReadWrite, group: "NVIC_INTCID3" },
];

pub(crate) static FIELDS: [Field; 1507] = [
    Field { group: "GPT_GPTCON", name: "PRE", position: BITP_GPT_GPTCON_PRE, mask: BITM_GPT_GPTCON_PRE as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTCON", name: "UP", position: BITP_GPT_GPTCON_UP, mask: BITM_GPT_GPTCON_UP as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTCON", name: "MOD", position: BITP_GPT_GPTCON_MOD, mask: BITM_GPT_GPTCON_MOD as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTCON", name: "ENABLE", position: BITP_GPT_GPTCON_ENABLE, mask: BITM_GPT_GPTCON_ENABLE as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTCON", name: "CLK", position: BITP_GPT_GPTCON_CLK, mask: BITM_GPT_GPTCON_CLK as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTCON", name: "RLD", position: BITP_GPT_GPTCON_RLD, mask: BITM_GPT_GPTCON_RLD as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTCON", name: "EVENT", position: BITP_GPT_GPTCON_EVENT, mask: BITM_GPT_GPTCON_EVENT as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTCON", name: "EVENTEN", position: BITP_GPT_GPTCON_EVENTEN, mask: BITM_GPT_GPTCON_EVENTEN as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTCLRI", name: "TMOUT", position: BITP_GPT_GPTCLRI_TMOUT, mask: BITM_GPT_GPTCLRI_TMOUT as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTCLRI", name: "CAP", position: BITP_GPT_GPTCLRI_CAP, mask: BITM_GPT_GPTCLRI_CAP as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTSTA", name: "TMOUT", position: BITP_GPT_GPTSTA_TMOUT, mask: BITM_GPT_GPTSTA_TMOUT as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTSTA", name: "CAP", position: BITP_GPT_GPTSTA_CAP, mask: BITM_GPT_GPTSTA_CAP as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTSTA", name: "BUSY", position: BITP_GPT_GPTSTA_BUSY, mask: BITM_GPT_GPTSTA_BUSY as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTSTA", name: "PDOK", position: BITP_GPT_GPTSTA_PDOK, mask: BITM_GPT_GPTSTA_PDOK as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTPCON", name: "MATCH_EN", position: BITP_GPT_GPTPCON_MATCH_EN, mask: BITM_GPT_GPTPCON_MATCH_EN as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTPCON", name: "IDLE_STATE", position: BITP_GPT_GPTPCON_IDLE_STATE, mask: BITM_GPT_GPTPCON_IDLE_STATE as u32, width: Width::HalfWord },
    Field { group: "PWR_PWRMOD", name: "PWRMOD", position: BITP_PWR_PWRMOD_PWRMOD, mask: BITM_PWR_PWRMOD_PWRMOD as u32, width: Width::HalfWord },
    Field { group: "PWR_PWRMOD", name: "RAM0_RET", position: BITP_PWR_PWRMOD_RAM0_RET, mask: BITM_PWR_PWRMOD_RAM0_RET as u32, width: Width::HalfWord },
    Field { group: "PWR_PWRKEY", name: "VALUE", position: BITP_PWR_PWRKEY_VALUE, mask: BITM_PWR_PWRKEY_VALUE as u32, width: Width::HalfWord },
    Field { group: "PWR_OSCKEY", name: "VALUE", position: BITP_PWR_OSCKEY_VALUE, mask: BITM_PWR_OSCKEY_VALUE as u32, width: Width::HalfWord },
    Field { group: "PWR_OSCCTRL", name: "HFOSCEN", position: BITP_PWR_OSCCTRL_HFOSCEN, mask: BITM_PWR_OSCCTRL_HFOSCEN as u32, width: Width::HalfWord },
    Field { group: "PWR_OSCCTRL", name: "LFOSCEN", position: BITP_PWR_OSCCTRL_LFOSCEN, mask: BITM_PWR_OSCCTRL_LFOSCEN as u32, width: Width::HalfWord },
    Field { group: "PWR_OSCCTRL", name: "HFXTALEN", position: BITP_PWR_OSCCTRL_HFXTALEN, mask: BITM_PWR_OSCCTRL_HFXTALEN as u32, width: Width::HalfWord },
    Field { group: "PWR_OSCCTRL", name: "LFXTALEN", position: BITP_PWR_OSCCTRL_LFXTALEN, mask: BITM_PWR_OSCCTRL_LFXTALEN as u32, width: Width::HalfWord },
    Field { group: "PWR_OSCCTRL", name: "HFOSCOK", position: BITP_PWR_OSCCTRL_HFOSCOK, mask: BITM_PWR_OSCCTRL_HFOSCOK as u32, width: Width::HalfWord },
    Field { group: "PWR_OSCCTRL", name: "LFOSCOK", position: BITP_PWR_OSCCTRL_LFOSCOK, mask: BITM_PWR_OSCCTRL_LFOSCOK as u32, width: Width::HalfWord },
    Field { group: "PWR_OSCCTRL", name: "HFXTALOK", position: BITP_PWR_OSCCTRL_HFXTALOK, mask: BITM_PWR_OSCCTRL_HFXTALOK as u32, width: Width::HalfWord },
    Field { group: "PWR_OSCCTRL", name: "LFXTALOK", position: BITP_PWR_OSCCTRL_LFXTALOK, mask: BITM_PWR_OSCCTRL_LFXTALOK as u32, width: Width::HalfWord },
    Field { group: "PWR_EI0CFG", name: "IRQ0MDE", position: BITP_PWR_EI0CFG_IRQ0MDE, mask: BITM_PWR_EI0CFG_IRQ0MDE as u32, width: Width::HalfWord },
    Field { group: "PWR_EI0CFG", name: "IRQ0EN", position: BITP_PWR_EI0CFG_IRQ0EN, mask: BITM_PWR_EI0CFG_IRQ0EN as u32, width: Width::HalfWord },
    Field { group: "PWR_EI0CFG", name: "IRQ1MDE", position: BITP_PWR_EI0CFG_IRQ1MDE, mask: BITM_PWR_EI0CFG_IRQ1MDE as u32, width: Width::HalfWord },
    Field { group: "PWR_EI0CFG", name: "IRQ1EN", position: BITP_PWR_EI0CFG_IRQ1EN, mask: BITM_PWR_EI0CFG_IRQ1EN as u32, width: Width::HalfWord },
    Field { group: "PWR_EI0CFG", name: "IRQ2MDE", position: BITP_PWR_EI0CFG_IRQ2MDE, mask: BITM_PWR_EI0CFG_IRQ2MDE as u32, width: Width::HalfWord },
    Field { group: "PWR_EI0CFG", name: "IRQ2EN", position: BITP_PWR_EI0CFG_IRQ2EN, mask: BITM_PWR_EI0CFG_IRQ2EN as u32, width: Width::HalfWord },
    Field { group: "PWR_EI0CFG", name: "IRQ3MDE", position: BITP_PWR_EI0CFG_IRQ3MDE, mask: BITM_PWR_EI0CFG_IRQ3MDE as u32, width: Width::HalfWord },
    Field { group: "PWR_EI0CFG", name: "IRQ3EN", position: BITP_PWR_EI0CFG_IRQ3EN, mask: BITM_PWR_EI0CFG_IRQ3EN as u32, width: Width::HalfWord },
    Field { group: "PWR_EI1CFG", name: "IRQ4MDE", position: BITP_PWR_EI1CFG_IRQ4MDE, mask: BITM_PWR_EI1CFG_IRQ4MDE as u32, width: Width::HalfWord },
    Field { group: "PWR_EI1CFG", name: "IRQ4EN", position: BITP_PWR_EI1CFG_IRQ4EN, mask: BITM_PWR_EI1CFG_IRQ4EN as u32, width: Width::HalfWord },
    Field { group: "PWR_EI1CFG", name: "IRQ5MDE", position: BITP_PWR_EI1CFG_IRQ5MDE, mask: BITM_PWR_EI1CFG_IRQ5MDE as u32, width: Width::HalfWord },
    Field { group: "PWR_EI1CFG", name: "IRQ5EN", position: BITP_PWR_EI1CFG_IRQ5EN, mask: BITM_PWR_EI1CFG_IRQ5EN as u32, width: Width::HalfWord },
    Field { group: "PWR_EI1CFG", name: "IRQ6MDE", position: BITP_PWR_EI1CFG_IRQ6MDE, mask: BITM_PWR_EI1CFG_IRQ6MDE as u32, width: Width::HalfWord },
    Field { group: "PWR_EI1CFG", name: "IRQ6EN", position: BITP_PWR_EI1CFG_IRQ6EN, mask: BITM_PWR_EI1CFG_IRQ6EN as u32, width: Width::HalfWord },
    Field { group: "PWR_EI1CFG", name: "IRQ7MDE", position: BITP_PWR_EI1CFG_IRQ7MDE, mask: BITM_PWR_EI1CFG_IRQ7MDE as u32, width: Width::HalfWord },
    Field { group: "PWR_EI1CFG", name: "IRQ7EN", position: BITP_PWR_EI1CFG_IRQ7EN, mask: BITM_PWR_EI1CFG_IRQ7EN as u32, width: Width::HalfWord },
    Field { group: "PWR_EI2CFG", name: "IRQ8MDE", position: BITP_PWR_EI2CFG_IRQ8MDE, mask: BITM_PWR_EI2CFG_IRQ8MDE as u32, width: Width::HalfWord },
    Field { group: "PWR_EI2CFG", name: "IRQ8EN", position: BITP_PWR_EI2CFG_IRQ8EN, mask: BITM_PWR_EI2CFG_IRQ8EN as u32, width: Width::HalfWord },
    Field { group: "PWR_EICLR", name: "IRQ0", position: BITP_PWR_EICLR_IRQ0, mask: BITM_PWR_EICLR_IRQ0 as u32, width: Width::HalfWord },
    Field { group: "PWR_EICLR", name: "IRQ1", position: BITP_PWR_EICLR_IRQ1, mask: BITM_PWR_EICLR_IRQ1 as u32, width: Width::HalfWord },
    Field { group: "PWR_EICLR", name: "IRQ2", position: BITP_PWR_EICLR_IRQ2, mask: BITM_PWR_EICLR_IRQ2 as u32, width: Width::HalfWord },
    Field { group: "PWR_EICLR", name: "IRQ3", position: BITP_PWR_EICLR_IRQ3, mask: BITM_PWR_EICLR_IRQ3 as u32, width: Width::HalfWord },
    Field { group: "PWR_EICLR", name: "IRQ4", position: BITP_PWR_EICLR_IRQ4, mask: BITM_PWR_EICLR_IRQ4 as u32, width: Width::HalfWord },
    Field { group: "PWR_EICLR", name: "IRQ5", position: BITP_PWR_EICLR_IRQ5, mask: BITM_PWR_EICLR_IRQ5 as u32, width: Width::HalfWord },
    Field { group: "PWR_EICLR", name: "IRQ6", position: BITP_PWR_EICLR_IRQ6, mask: BITM_PWR_EICLR_IRQ6 as u32, width: Width::HalfWord },
    Field { group: "PWR_EICLR", name: "IRQ7", position: BITP_PWR_EICLR_IRQ7, mask: BITM_PWR_EICLR_IRQ7 as u32, width: Width::HalfWord },
    Field { group: "PWR_EICLR", name: "IRQ8", position: BITP_PWR_EICLR_IRQ8, mask: BITM_PWR_EICLR_IRQ8 as u32, width: Width::HalfWord },
    Field { group: "PWR_NMICLR", name: "CLR", position: BITP_PWR_NMICLR_CLR, mask: BITM_PWR_NMICLR_CLR as u32, width: Width::HalfWord },
    Field { group: "PWR_RSTSTA", name: "POR", position: BITP_PWR_RSTSTA_POR, mask: BITM_PWR_RSTSTA_POR as u32, width: Width::HalfWord },
    Field { group: "PWR_RSTSTA", name: "EXTRST", position: BITP_PWR_RSTSTA_EXTRST, mask: BITM_PWR_RSTSTA_EXTRST as u32, width: Width::HalfWord },
    Field { group: "PWR_RSTSTA", name: "WDRST", position: BITP_PWR_RSTSTA_WDRST, mask: BITM_PWR_RSTSTA_WDRST as u32, width: Width::HalfWord },
    Field { group: "PWR_RSTSTA", name: "SWRST", position: BITP_PWR_RSTSTA_SWRST, mask: BITM_PWR_RSTSTA_SWRST as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CON", name: "PRE", position: BITP_WUT_T2CON_PRE, mask: BITM_WUT_T2CON_PRE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CON", name: "FREEZE", position: BITP_WUT_T2CON_FREEZE, mask: BITM_WUT_T2CON_FREEZE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CON", name: "MOD", position: BITP_WUT_T2CON_MOD, mask: BITM_WUT_T2CON_MOD as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CON", name: "ENABLE", position: BITP_WUT_T2CON_ENABLE, mask: BITM_WUT_T2CON_ENABLE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CON", name: "WUEN", position: BITP_WUT_T2CON_WUEN, mask: BITM_WUT_T2CON_WUEN as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CON", name: "CLK", position: BITP_WUT_T2CON_CLK, mask: BITM_WUT_T2CON_CLK as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CON", name: "STOP_WUFA", position: BITP_WUT_T2CON_STOP_WUFA, mask: BITM_WUT_T2CON_STOP_WUFA as u32, width: Width::HalfWord },
    Field { group: "WUT_T2INC", name: "VALUE", position: BITP_WUT_T2INC_VALUE, mask: BITM_WUT_T2INC_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2IEN", name: "WUFA", position: BITP_WUT_T2IEN_WUFA, mask: BITM_WUT_T2IEN_WUFA as u32, width: Width::HalfWord },
    Field { group: "WUT_T2IEN", name: "WUFB", position: BITP_WUT_T2IEN_WUFB, mask: BITM_WUT_T2IEN_WUFB as u32, width: Width::HalfWord },
    Field { group: "WUT_T2IEN", name: "WUFC", position: BITP_WUT_T2IEN_WUFC, mask: BITM_WUT_T2IEN_WUFC as u32, width: Width::HalfWord },
    Field { group: "WUT_T2IEN", name: "WUFD", position: BITP_WUT_T2IEN_WUFD, mask: BITM_WUT_T2IEN_WUFD as u32, width: Width::HalfWord },
    Field { group: "WUT_T2IEN", name: "ROLL", position: BITP_WUT_T2IEN_ROLL, mask: BITM_WUT_T2IEN_ROLL as u32, width: Width::HalfWord },
    Field { group: "WUT_T2STA", name: "WUFA", position: BITP_WUT_T2STA_WUFA, mask: BITM_WUT_T2STA_WUFA as u32, width: Width::HalfWord },
    Field { group: "WUT_T2STA", name: "WUFB", position: BITP_WUT_T2STA_WUFB, mask: BITM_WUT_T2STA_WUFB as u32, width: Width::HalfWord },
    Field { group: "WUT_T2STA", name: "WUFC", position: BITP_WUT_T2STA_WUFC, mask: BITM_WUT_T2STA_WUFC as u32, width: Width::HalfWord },
    Field { group: "WUT_T2STA", name: "WUFD", position: BITP_WUT_T2STA_WUFD, mask: BITM_WUT_T2STA_WUFD as u32, width: Width::HalfWord },
    Field { group: "WUT_T2STA", name: "ROLL", position: BITP_WUT_T2STA_ROLL, mask: BITM_WUT_T2STA_ROLL as u32, width: Width::HalfWord },
    Field { group: "WUT_T2STA", name: "IRQCRY", position: BITP_WUT_T2STA_IRQCRY, mask: BITM_WUT_T2STA_IRQCRY as u32, width: Width::HalfWord },
    Field { group: "WUT_T2STA", name: "FREEZE", position: BITP_WUT_T2STA_FREEZE, mask: BITM_WUT_T2STA_FREEZE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2STA", name: "PDOK", position: BITP_WUT_T2STA_PDOK, mask: BITM_WUT_T2STA_PDOK as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CLRI", name: "WUFA", position: BITP_WUT_T2CLRI_WUFA, mask: BITM_WUT_T2CLRI_WUFA as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CLRI", name: "WUFB", position: BITP_WUT_T2CLRI_WUFB, mask: BITM_WUT_T2CLRI_WUFB as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CLRI", name: "WUFC", position: BITP_WUT_T2CLRI_WUFC, mask: BITM_WUT_T2CLRI_WUFC as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CLRI", name: "WUFD", position: BITP_WUT_T2CLRI_WUFD, mask: BITM_WUT_T2CLRI_WUFD as u32, width: Width::HalfWord },
    Field { group: "WUT_T2CLRI", name: "ROLL", position: BITP_WUT_T2CLRI_ROLL, mask: BITM_WUT_T2CLRI_ROLL as u32, width: Width::HalfWord },
    Field { group: "WDT_T3CON", name: "PMD", position: BITP_WDT_T3CON_PMD, mask: BITM_WDT_T3CON_PMD as u32, width: Width::HalfWord },
    Field { group: "WDT_T3CON", name: "IRQ", position: BITP_WDT_T3CON_IRQ, mask: BITM_WDT_T3CON_IRQ as u32, width: Width::HalfWord },
    Field { group: "WDT_T3CON", name: "PRE", position: BITP_WDT_T3CON_PRE, mask: BITM_WDT_T3CON_PRE as u32, width: Width::HalfWord },
    Field { group: "WDT_T3CON", name: "ENABLE", position: BITP_WDT_T3CON_ENABLE, mask: BITM_WDT_T3CON_ENABLE as u32, width: Width::HalfWord },
    Field { group: "WDT_T3CON", name: "MOD", position: BITP_WDT_T3CON_MOD, mask: BITM_WDT_T3CON_MOD as u32, width: Width::HalfWord },
    Field { group: "WDT_T3CLRI", name: "VALUE", position: BITP_WDT_T3CLRI_VALUE, mask: BITM_WDT_T3CLRI_VALUE as u32, width: Width::HalfWord },
    Field { group: "WDT_T3STA", name: "IRQ", position: BITP_WDT_T3STA_IRQ, mask: BITM_WDT_T3STA_IRQ as u32, width: Width::HalfWord },
    Field { group: "WDT_T3STA", name: "CLRI", position: BITP_WDT_T3STA_CLRI, mask: BITM_WDT_T3STA_CLRI as u32, width: Width::HalfWord },
    Field { group: "WDT_T3STA", name: "LD", position: BITP_WDT_T3STA_LD, mask: BITM_WDT_T3STA_LD as u32, width: Width::HalfWord },
    Field { group: "WDT_T3STA", name: "CON", position: BITP_WDT_T3STA_CON, mask: BITM_WDT_T3STA_CON as u32, width: Width::HalfWord },
    Field { group: "WDT_T3STA", name: "LOCK", position: BITP_WDT_T3STA_LOCK, mask: BITM_WDT_T3STA_LOCK as u32, width: Width::HalfWord },
    Field { group: "RTC_RTCCR", name: "CNTEN", position: BITP_RTC_RTCCR_CNTEN, mask: BITM_RTC_RTCCR_CNTEN as u32, width: Width::Word },
    Field { group: "RTC_RTCCR", name: "ALMEN", position: BITP_RTC_RTCCR_ALMEN, mask: BITM_RTC_RTCCR_ALMEN as u32, width: Width::Word },
    Field { group: "RTC_RTCCR", name: "ALMINTEN", position: BITP_RTC_RTCCR_ALMINTEN, mask: BITM_RTC_RTCCR_ALMINTEN as u32, width: Width::Word },
    Field { group: "RTC_RTCCR", name: "TRMEN", position: BITP_RTC_RTCCR_TRMEN, mask: BITM_RTC_RTCCR_TRMEN as u32, width: Width::Word },
    Field { group: "I2C_I2CMCON", name: "MASEN", position: BITP_I2C_I2CMCON_MASEN, mask: BITM_I2C_I2CMCON_MASEN as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "COMPLETE", position: BITP_I2C_I2CMCON_COMPLETE, mask: BITM_I2C_I2CMCON_COMPLETE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "LOOPBACK", position: BITP_I2C_I2CMCON_LOOPBACK, mask: BITM_I2C_I2CMCON_LOOPBACK as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "STRETCH", position: BITP_I2C_I2CMCON_STRETCH, mask: BITM_I2C_I2CMCON_STRETCH as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "IENMRX", position: BITP_I2C_I2CMCON_IENMRX, mask: BITM_I2C_I2CMCON_IENMRX as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "IENMTX", position: BITP_I2C_I2CMCON_IENMTX, mask: BITM_I2C_I2CMCON_IENMTX as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "IENALOST", position: BITP_I2C_I2CMCON_IENALOST, mask: BITM_I2C_I2CMCON_IENALOST as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "IENACK", position: BITP_I2C_I2CMCON_IENACK, mask: BITM_I2C_I2CMCON_IENACK as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "IENCMP", position: BITP_I2C_I2CMCON_IENCMP, mask: BITM_I2C_I2CMCON_IENCMP as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "MXMITDEC", position: BITP_I2C_I2CMCON_MXMITDEC, mask: BITM_I2C_I2CMCON_MXMITDEC as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "MRXDMA", position: BITP_I2C_I2CMCON_MRXDMA, mask: BITM_I2C_I2CMCON_MRXDMA as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "MTXDMA", position: BITP_I2C_I2CMCON_MTXDMA, mask: BITM_I2C_I2CMCON_MTXDMA as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "BUS_CLR_EN", position: BITP_I2C_I2CMCON_BUS_CLR_EN, mask: BITM_I2C_I2CMCON_BUS_CLR_EN as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCON", name: "PRESTOP_BUS_CLR", position: BITP_I2C_I2CMCON_PRESTOP_BUS_CLR, mask: BITM_I2C_I2CMCON_PRESTOP_BUS_CLR as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "TXFSTA", position: BITP_I2C_I2CMSTA_TXFSTA, mask: BITM_I2C_I2CMSTA_TXFSTA as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "TXREQ", position: BITP_I2C_I2CMSTA_TXREQ, mask: BITM_I2C_I2CMSTA_TXREQ as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "RXREQ", position: BITP_I2C_I2CMSTA_RXREQ, mask: BITM_I2C_I2CMSTA_RXREQ as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "NACKADDR", position: BITP_I2C_I2CMSTA_NACKADDR, mask: BITM_I2C_I2CMSTA_NACKADDR as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "ALOST", position: BITP_I2C_I2CMSTA_ALOST, mask: BITM_I2C_I2CMSTA_ALOST as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "BUSY", position: BITP_I2C_I2CMSTA_BUSY, mask: BITM_I2C_I2CMSTA_BUSY as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "NACKDATA", position: BITP_I2C_I2CMSTA_NACKDATA, mask: BITM_I2C_I2CMSTA_NACKDATA as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "TCOMP", position: BITP_I2C_I2CMSTA_TCOMP, mask: BITM_I2C_I2CMSTA_TCOMP as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "RXOF", position: BITP_I2C_I2CMSTA_RXOF, mask: BITM_I2C_I2CMSTA_RXOF as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "LINEBUSY", position: BITP_I2C_I2CMSTA_LINEBUSY, mask: BITM_I2C_I2CMSTA_LINEBUSY as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "MSTOP", position: BITP_I2C_I2CMSTA_MSTOP, mask: BITM_I2C_I2CMSTA_MSTOP as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMSTA", name: "TXUR", position: BITP_I2C_I2CMSTA_TXUR, mask: BITM_I2C_I2CMSTA_TXUR as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMRXCNT", name: "VALUE", position: BITP_I2C_I2CMRXCNT_VALUE, mask: BITM_I2C_I2CMRXCNT_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMRXCNT", name: "EXTEND", position: BITP_I2C_I2CMRXCNT_EXTEND, mask: BITM_I2C_I2CMRXCNT_EXTEND as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CDIV", name: "LOW", position: BITP_I2C_I2CDIV_LOW, mask: BITM_I2C_I2CDIV_LOW as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CDIV", name: "HIGH", position: BITP_I2C_I2CDIV_HIGH, mask: BITM_I2C_I2CDIV_HIGH as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "SLVEN", position: BITP_I2C_I2CSCON_SLVEN, mask: BITM_I2C_I2CSCON_SLVEN as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "ADR10EN", position: BITP_I2C_I2CSCON_ADR10EN, mask: BITM_I2C_I2CSCON_ADR10EN as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "GCEN", position: BITP_I2C_I2CSCON_GCEN, mask: BITM_I2C_I2CSCON_GCEN as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "HGCEN", position: BITP_I2C_I2CSCON_HGCEN, mask: BITM_I2C_I2CSCON_HGCEN as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "GCSBCLR", position: BITP_I2C_I2CSCON_GCSBCLR, mask: BITM_I2C_I2CSCON_GCSBCLR as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "EARLYTXR", position: BITP_I2C_I2CSCON_EARLYTXR, mask: BITM_I2C_I2CSCON_EARLYTXR as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "STRETCHSCL", position: BITP_I2C_I2CSCON_STRETCHSCL, mask: BITM_I2C_I2CSCON_STRETCHSCL as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "NACK", position: BITP_I2C_I2CSCON_NACK, mask: BITM_I2C_I2CSCON_NACK as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "IENSTOP", position: BITP_I2C_I2CSCON_IENSTOP, mask: BITM_I2C_I2CSCON_IENSTOP as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "IENSRX", position: BITP_I2C_I2CSCON_IENSRX, mask: BITM_I2C_I2CSCON_IENSRX as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "IENSTX", position: BITP_I2C_I2CSCON_IENSTX, mask: BITM_I2C_I2CSCON_IENSTX as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "SXMITDEC", position: BITP_I2C_I2CSCON_SXMITDEC, mask: BITM_I2C_I2CSCON_SXMITDEC as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "IENREPST", position: BITP_I2C_I2CSCON_IENREPST, mask: BITM_I2C_I2CSCON_IENREPST as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "SRXDMA", position: BITP_I2C_I2CSCON_SRXDMA, mask: BITM_I2C_I2CSCON_SRXDMA as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSCON", name: "STXDMA", position: BITP_I2C_I2CSCON_STXDMA, mask: BITM_I2C_I2CSCON_STXDMA as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "TXFSEREQ", position: BITP_I2C_I2CSSTA_TXFSEREQ, mask: BITM_I2C_I2CSSTA_TXFSEREQ as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "TXUR", position: BITP_I2C_I2CSSTA_TXUR, mask: BITM_I2C_I2CSSTA_TXUR as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "TXREQ", position: BITP_I2C_I2CSSTA_TXREQ, mask: BITM_I2C_I2CSSTA_TXREQ as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "RXREQ", position: BITP_I2C_I2CSSTA_RXREQ, mask: BITM_I2C_I2CSSTA_RXREQ as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "RXOF", position: BITP_I2C_I2CSSTA_RXOF, mask: BITM_I2C_I2CSSTA_RXOF as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "NOACK", position: BITP_I2C_I2CSSTA_NOACK, mask: BITM_I2C_I2CSSTA_NOACK as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "BUSY", position: BITP_I2C_I2CSSTA_BUSY, mask: BITM_I2C_I2CSSTA_BUSY as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "GCINT", position: BITP_I2C_I2CSSTA_GCINT, mask: BITM_I2C_I2CSSTA_GCINT as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "GCID", position: BITP_I2C_I2CSSTA_GCID, mask: BITM_I2C_I2CSSTA_GCID as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "STOP", position: BITP_I2C_I2CSSTA_STOP, mask: BITM_I2C_I2CSSTA_STOP as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "IDMAT", position: BITP_I2C_I2CSSTA_IDMAT, mask: BITM_I2C_I2CSSTA_IDMAT as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "REPSTART", position: BITP_I2C_I2CSSTA_REPSTART, mask: BITM_I2C_I2CSSTA_REPSTART as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSSTA", name: "START", position: BITP_I2C_I2CSSTA_START, mask: BITM_I2C_I2CSSTA_START as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CFSTA", name: "STXFSTA", position: BITP_I2C_I2CFSTA_STXFSTA, mask: BITM_I2C_I2CFSTA_STXFSTA as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CFSTA", name: "SRXFSTA", position: BITP_I2C_I2CFSTA_SRXFSTA, mask: BITM_I2C_I2CFSTA_SRXFSTA as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CFSTA", name: "MTXFSTA", position: BITP_I2C_I2CFSTA_MTXFSTA, mask: BITM_I2C_I2CFSTA_MTXFSTA as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CFSTA", name: "MRXFSTA", position: BITP_I2C_I2CFSTA_MRXFSTA, mask: BITM_I2C_I2CFSTA_MRXFSTA as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CFSTA", name: "SFLUSH", position: BITP_I2C_I2CFSTA_SFLUSH, mask: BITM_I2C_I2CFSTA_SFLUSH as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CFSTA", name: "MFLUSH", position: BITP_I2C_I2CFSTA_MFLUSH, mask: BITM_I2C_I2CFSTA_MFLUSH as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSHCON", name: "RESET", position: BITP_I2C_I2CSHCON_RESET, mask: BITM_I2C_I2CSHCON_RESET as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CTCTL", name: "THDATIN", position: BITP_I2C_I2CTCTL_THDATIN, mask: BITM_I2C_I2CTCTL_THDATIN as u32, width: Width::HalfWord },
    Field { group: "SPI_SPISTA", name: "IRQ", position: BITP_SPI_SPISTA_IRQ, mask: BITM_SPI_SPISTA_IRQ as u32, width: Width::HalfWord },
    Field { group: "SPI_SPISTA", name: "TXFSTA", position: BITP_SPI_SPISTA_TXFSTA, mask: BITM_SPI_SPISTA_TXFSTA as u32, width: Width::HalfWord },
    Field { group: "SPI_SPISTA", name: "TXUR", position: BITP_SPI_SPISTA_TXUR, mask: BITM_SPI_SPISTA_TXUR as u32, width: Width::HalfWord },
    Field { group: "SPI_SPISTA", name: "TX", position: BITP_SPI_SPISTA_TX, mask: BITM_SPI_SPISTA_TX as u32, width: Width::HalfWord },
    Field { group: "SPI_SPISTA", name: "RX", position: BITP_SPI_SPISTA_RX, mask: BITM_SPI_SPISTA_RX as u32, width: Width::HalfWord },
    Field { group: "SPI_SPISTA", name: "RXOF", position: BITP_SPI_SPISTA_RXOF, mask: BITM_SPI_SPISTA_RXOF as u32, width: Width::HalfWord },
    Field { group: "SPI_SPISTA", name: "RXFSTA", position: BITP_SPI_SPISTA_RXFSTA, mask: BITM_SPI_SPISTA_RXFSTA as u32, width: Width::HalfWord },
    Field { group: "SPI_SPISTA", name: "RXS", position: BITP_SPI_SPISTA_RXS, mask: BITM_SPI_SPISTA_RXS as u32, width: Width::HalfWord },
    Field { group: "SPI_SPISTA", name: "CSERR", position: BITP_SPI_SPISTA_CSERR, mask: BITM_SPI_SPISTA_CSERR as u32, width: Width::HalfWord },
    Field { group: "SPI_SPIRX", name: "DMA_DATA_BYTE_1", position: BITP_SPI_SPIRX_DMA_DATA_BYTE_1, mask: BITM_SPI_SPIRX_DMA_DATA_BYTE_1 as u32, width: Width::HalfWord },
    Field { group: "SPI_SPIRX", name: "DMA_DATA_BYTE_2", position: BITP_SPI_SPIRX_DMA_DATA_BYTE_2, mask: BITM_SPI_SPIRX_DMA_DATA_BYTE_2 as u32, width: Width::HalfWord },
    Field { group: "SPI_SPITX", name: "DMA_DATA_BYTE_1", position: BITP_SPI_SPITX_DMA_DATA_BYTE_1, mask: BITM_SPI_SPITX_DMA_DATA_BYTE_1 as u32, width: Width::HalfWord },
    Field { group: "SPI_SPITX", name: "DMA_DATA_BYTE_2", position: BITP_SPI_SPITX_DMA_DATA_BYTE_2, mask: BITM_SPI_SPITX_DMA_DATA_BYTE_2 as u32, width: Width::HalfWord },
    Field { group: "SPI_SPIDIV", name: "DIV", position: BITP_SPI_SPIDIV_DIV, mask: BITM_SPI_SPIDIV_DIV as u32, width: Width::HalfWord },
    Field { group: "SPI_SPIDIV", name: "HFM", position: BITP_SPI_SPIDIV_HFM, mask: BITM_SPI_SPIDIV_HFM as u32, width: Width::HalfWord },
    Field { group: "SPI_SPIDIV", name: "MD_CS_RST", position: BITP_SPI_SPIDIV_MD_CS_RST, mask: BITM_SPI_SPIDIV_MD_CS_RST as u32, width: Width::HalfWord },
    Field { group: "SPI_SPIDIV", name: "CSIRQ_EN", position: BITP_SPI_SPIDIV_CSIRQ_EN, mask: BITM_SPI_SPIDIV_CSIRQ_EN as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "ENABLE", position: BITP_SPI_SPICON_ENABLE, mask: BITM_SPI_SPICON_ENABLE as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "MASEN", position: BITP_SPI_SPICON_MASEN, mask: BITM_SPI_SPICON_MASEN as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "CPHA", position: BITP_SPI_SPICON_CPHA, mask: BITM_SPI_SPICON_CPHA as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "CPOL", position: BITP_SPI_SPICON_CPOL, mask: BITM_SPI_SPICON_CPOL as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "WOM", position: BITP_SPI_SPICON_WOM, mask: BITM_SPI_SPICON_WOM as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "LSB", position: BITP_SPI_SPICON_LSB, mask: BITM_SPI_SPICON_LSB as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "TIM", position: BITP_SPI_SPICON_TIM, mask: BITM_SPI_SPICON_TIM as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "ZEN", position: BITP_SPI_SPICON_ZEN, mask: BITM_SPI_SPICON_ZEN as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "RXOF", position: BITP_SPI_SPICON_RXOF, mask: BITM_SPI_SPICON_RXOF as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "OEN", position: BITP_SPI_SPICON_OEN, mask: BITM_SPI_SPICON_OEN as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "LOOPBACK", position: BITP_SPI_SPICON_LOOPBACK, mask: BITM_SPI_SPICON_LOOPBACK as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "CON", position: BITP_SPI_SPICON_CON, mask: BITM_SPI_SPICON_CON as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "RFLUSH", position: BITP_SPI_SPICON_RFLUSH, mask: BITM_SPI_SPICON_RFLUSH as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "TFLUSH", position: BITP_SPI_SPICON_TFLUSH, mask: BITM_SPI_SPICON_TFLUSH as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICON", name: "MOD", position: BITP_SPI_SPICON_MOD, mask: BITM_SPI_SPICON_MOD as u32, width: Width::HalfWord },
    Field { group: "SPI_SPIDMA", name: "ENABLE", position: BITP_SPI_SPIDMA_ENABLE, mask: BITM_SPI_SPIDMA_ENABLE as u32, width: Width::HalfWord },
    Field { group: "SPI_SPIDMA", name: "IENTXDMA", position: BITP_SPI_SPIDMA_IENTXDMA, mask: BITM_SPI_SPIDMA_IENTXDMA as u32, width: Width::HalfWord },
    Field { group: "SPI_SPIDMA", name: "IENRXDMA", position: BITP_SPI_SPIDMA_IENRXDMA, mask: BITM_SPI_SPIDMA_IENRXDMA as u32, width: Width::HalfWord },
    Field { group: "SPI_SPICNT", name: "COUNT", position: BITP_SPI_SPICNT_COUNT, mask: BITM_SPI_SPICNT_COUNT as u32, width: Width::HalfWord },
    Field { group: "UART_COMRX", name: "RBR", position: BITP_UART_COMRX_RBR, mask: BITM_UART_COMRX_RBR as u32, width: Width::HalfWord },
    Field { group: "UART_COMTX", name: "THR", position: BITP_UART_COMTX_THR, mask: BITM_UART_COMTX_THR as u32, width: Width::HalfWord },
    Field { group: "UART_COMIEN", name: "ERBFI", position: BITP_UART_COMIEN_ERBFI, mask: BITM_UART_COMIEN_ERBFI as u32, width: Width::HalfWord },
    Field { group: "UART_COMIEN", name: "ETBEI", position: BITP_UART_COMIEN_ETBEI, mask: BITM_UART_COMIEN_ETBEI as u32, width: Width::HalfWord },
    Field { group: "UART_COMIEN", name: "ELSI", position: BITP_UART_COMIEN_ELSI, mask: BITM_UART_COMIEN_ELSI as u32, width: Width::HalfWord },
    Field { group: "UART_COMIEN", name: "EDSSI", position: BITP_UART_COMIEN_EDSSI, mask: BITM_UART_COMIEN_EDSSI as u32, width: Width::HalfWord },
    Field { group: "UART_COMIEN", name: "EDMAT", position: BITP_UART_COMIEN_EDMAT, mask: BITM_UART_COMIEN_EDMAT as u32, width: Width::HalfWord },
    Field { group: "UART_COMIEN", name: "EDMAR", position: BITP_UART_COMIEN_EDMAR, mask: BITM_UART_COMIEN_EDMAR as u32, width: Width::HalfWord },
    Field { group: "UART_COMIIR", name: "NINT", position: BITP_UART_COMIIR_NINT, mask: BITM_UART_COMIIR_NINT as u32, width: Width::HalfWord },
    Field { group: "UART_COMIIR", name: "STA", position: BITP_UART_COMIIR_STA, mask: BITM_UART_COMIIR_STA as u32, width: Width::HalfWord },
    Field { group: "UART_COMLCR", name: "WLS", position: BITP_UART_COMLCR_WLS, mask: BITM_UART_COMLCR_WLS as u32, width: Width::HalfWord },
    Field { group: "UART_COMLCR", name: "STOP", position: BITP_UART_COMLCR_STOP, mask: BITM_UART_COMLCR_STOP as u32, width: Width::HalfWord },
    Field { group: "UART_COMLCR", name: "PEN", position: BITP_UART_COMLCR_PEN, mask: BITM_UART_COMLCR_PEN as u32, width: Width::HalfWord },
    Field { group: "UART_COMLCR", name: "EPS", position: BITP_UART_COMLCR_EPS, mask: BITM_UART_COMLCR_EPS as u32, width: Width::HalfWord },
    Field { group: "UART_COMLCR", name: "SP", position: BITP_UART_COMLCR_SP, mask: BITM_UART_COMLCR_SP as u32, width: Width::HalfWord },
    Field { group: "UART_COMLCR", name: "BRK", position: BITP_UART_COMLCR_BRK, mask: BITM_UART_COMLCR_BRK as u32, width: Width::HalfWord },
    Field { group: "UART_COMMCR", name: "DTR", position: BITP_UART_COMMCR_DTR, mask: BITM_UART_COMMCR_DTR as u32, width: Width::HalfWord },
    Field { group: "UART_COMMCR", name: "RTS", position: BITP_UART_COMMCR_RTS, mask: BITM_UART_COMMCR_RTS as u32, width: Width::HalfWord },
    Field { group: "UART_COMMCR", name: "OUT1", position: BITP_UART_COMMCR_OUT1, mask: BITM_UART_COMMCR_OUT1 as u32, width: Width::HalfWord },
    Field { group: "UART_COMMCR", name: "OUT2", position: BITP_UART_COMMCR_OUT2, mask: BITM_UART_COMMCR_OUT2 as u32, width: Width::HalfWord },
    Field { group: "UART_COMMCR", name: "LOOPBACK", position: BITP_UART_COMMCR_LOOPBACK, mask: BITM_UART_COMMCR_LOOPBACK as u32, width: Width::HalfWord },
    Field { group: "UART_COMLSR", name: "DR", position: BITP_UART_COMLSR_DR, mask: BITM_UART_COMLSR_DR as u32, width: Width::HalfWord },
    Field { group: "UART_COMLSR", name: "OE", position: BITP_UART_COMLSR_OE, mask: BITM_UART_COMLSR_OE as u32, width: Width::HalfWord },
    Field { group: "UART_COMLSR", name: "PE", position: BITP_UART_COMLSR_PE, mask: BITM_UART_COMLSR_PE as u32, width: Width::HalfWord },
    Field { group: "UART_COMLSR", name: "FE", position: BITP_UART_COMLSR_FE, mask: BITM_UART_COMLSR_FE as u32, width: Width::HalfWord },
    Field { group: "UART_COMLSR", name: "BI", position: BITP_UART_COMLSR_BI, mask: BITM_UART_COMLSR_BI as u32, width: Width::HalfWord },
    Field { group: "UART_COMLSR", name: "THRE", position: BITP_UART_COMLSR_THRE, mask: BITM_UART_COMLSR_THRE as u32, width: Width::HalfWord },
    Field { group: "UART_COMLSR", name: "TEMT", position: BITP_UART_COMLSR_TEMT, mask: BITM_UART_COMLSR_TEMT as u32, width: Width::HalfWord },
    Field { group: "UART_COMMSR", name: "DCTS", position: BITP_UART_COMMSR_DCTS, mask: BITM_UART_COMMSR_DCTS as u32, width: Width::HalfWord },
    Field { group: "UART_COMMSR", name: "DDSR", position: BITP_UART_COMMSR_DDSR, mask: BITM_UART_COMMSR_DDSR as u32, width: Width::HalfWord },
    Field { group: "UART_COMMSR", name: "TERI", position: BITP_UART_COMMSR_TERI, mask: BITM_UART_COMMSR_TERI as u32, width: Width::HalfWord },
    Field { group: "UART_COMMSR", name: "DDCD", position: BITP_UART_COMMSR_DDCD, mask: BITM_UART_COMMSR_DDCD as u32, width: Width::HalfWord },
    Field { group: "UART_COMMSR", name: "CTS", position: BITP_UART_COMMSR_CTS, mask: BITM_UART_COMMSR_CTS as u32, width: Width::HalfWord },
    Field { group: "UART_COMMSR", name: "DSR", position: BITP_UART_COMMSR_DSR, mask: BITM_UART_COMMSR_DSR as u32, width: Width::HalfWord },
    Field { group: "UART_COMMSR", name: "RI", position: BITP_UART_COMMSR_RI, mask: BITM_UART_COMMSR_RI as u32, width: Width::HalfWord },
    Field { group: "UART_COMMSR", name: "DCD", position: BITP_UART_COMMSR_DCD, mask: BITM_UART_COMMSR_DCD as u32, width: Width::HalfWord },
    Field { group: "UART_COMSCR", name: "SCR", position: BITP_UART_COMSCR_SCR, mask: BITM_UART_COMSCR_SCR as u32, width: Width::HalfWord },
    Field { group: "UART_COMFBR", name: "DIVN", position: BITP_UART_COMFBR_DIVN, mask: BITM_UART_COMFBR_DIVN as u32, width: Width::HalfWord },
    Field { group: "UART_COMFBR", name: "DIVM", position: BITP_UART_COMFBR_DIVM, mask: BITM_UART_COMFBR_DIVM as u32, width: Width::HalfWord },
    Field { group: "UART_COMFBR", name: "ENABLE", position: BITP_UART_COMFBR_ENABLE, mask: BITM_UART_COMFBR_ENABLE as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_OUT1L", name: "SAMPLE", position: BITP_I2S_I2S_OUT1L_SAMPLE, mask: BITM_I2S_I2S_OUT1L_SAMPLE as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_OUT1H", name: "SAMPLE", position: BITP_I2S_I2S_OUT1H_SAMPLE, mask: BITM_I2S_I2S_OUT1H_SAMPLE as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_OUT2L", name: "SAMPLE", position: BITP_I2S_I2S_OUT2L_SAMPLE, mask: BITM_I2S_I2S_OUT2L_SAMPLE as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_OUT2H", name: "SAMPLE", position: BITP_I2S_I2S_OUT2H_SAMPLE, mask: BITM_I2S_I2S_OUT2H_SAMPLE as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE1", name: "SDATA_FMT", position: BITP_I2S_I2S_MODE1_SDATA_FMT, mask: BITM_I2S_I2S_MODE1_SDATA_FMT as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE1", name: "SAI", position: BITP_I2S_I2S_MODE1_SAI, mask: BITM_I2S_I2S_MODE1_SAI as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE1", name: "FS", position: BITP_I2S_I2S_MODE1_FS, mask: BITM_I2S_I2S_MODE1_FS as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE1", name: "SLOT_WIDTH", position: BITP_I2S_I2S_MODE1_SLOT_WIDTH, mask: BITM_I2S_I2S_MODE1_SLOT_WIDTH as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE1", name: "DATA_WIDTH", position: BITP_I2S_I2S_MODE1_DATA_WIDTH, mask: BITM_I2S_I2S_MODE1_DATA_WIDTH as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE1", name: "LR_MODE", position: BITP_I2S_I2S_MODE1_LR_MODE, mask: BITM_I2S_I2S_MODE1_LR_MODE as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE1", name: "SAI_MSB", position: BITP_I2S_I2S_MODE1_SAI_MSB, mask: BITM_I2S_I2S_MODE1_SAI_MSB as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE1", name: "BCLK_RATE", position: BITP_I2S_I2S_MODE1_BCLK_RATE, mask: BITM_I2S_I2S_MODE1_BCLK_RATE as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE1", name: "SAI_MS", position: BITP_I2S_I2S_MODE1_SAI_MS, mask: BITM_I2S_I2S_MODE1_SAI_MS as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE1", name: "DRV_HIZ", position: BITP_I2S_I2S_MODE1_DRV_HIZ, mask: BITM_I2S_I2S_MODE1_DRV_HIZ as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE2", name: "CMAP_C1", position: BITP_I2S_I2S_MODE2_CMAP_C1, mask: BITM_I2S_I2S_MODE2_CMAP_C1 as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE2", name: "CMAP_C2", position: BITP_I2S_I2S_MODE2_CMAP_C2, mask: BITM_I2S_I2S_MODE2_CMAP_C2 as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE2", name: "DRV_CH1", position: BITP_I2S_I2S_MODE2_DRV_CH1, mask: BITM_I2S_I2S_MODE2_DRV_CH1 as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE2", name: "DRV_CH2", position: BITP_I2S_I2S_MODE2_DRV_CH2, mask: BITM_I2S_I2S_MODE2_DRV_CH2 as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE2", name: "BCLK_EDGE", position: BITP_I2S_I2S_MODE2_BCLK_EDGE, mask: BITM_I2S_I2S_MODE2_BCLK_EDGE as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_MODE2", name: "LR_POL", position: BITP_I2S_I2S_MODE2_LR_POL, mask: BITM_I2S_I2S_MODE2_LR_POL as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG1", name: "I2S_EN", position: BITP_I2S_I2S_CFG1_I2S_EN, mask: BITM_I2S_I2S_CFG1_I2S_EN as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG1", name: "CHAN_SEL1", position: BITP_I2S_I2S_CFG1_CHAN_SEL1, mask: BITM_I2S_I2S_CFG1_CHAN_SEL1 as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG1", name: "CHAN_SEL2", position: BITP_I2S_I2S_CFG1_CHAN_SEL2, mask: BITM_I2S_I2S_CFG1_CHAN_SEL2 as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG1", name: "TRAN_MODE", position: BITP_I2S_I2S_CFG1_TRAN_MODE, mask: BITM_I2S_I2S_CFG1_TRAN_MODE as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG1", name: "DMA_EN", position: BITP_I2S_I2S_CFG1_DMA_EN, mask: BITM_I2S_I2S_CFG1_DMA_EN as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG1", name: "REQ_EN", position: BITP_I2S_I2S_CFG1_REQ_EN, mask: BITM_I2S_I2S_CFG1_REQ_EN as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG1", name: "STAT_EN", position: BITP_I2S_I2S_CFG1_STAT_EN, mask: BITM_I2S_I2S_CFG1_STAT_EN as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG1", name: "AUTO_INCR", position: BITP_I2S_I2S_CFG1_AUTO_INCR, mask: BITM_I2S_I2S_CFG1_AUTO_INCR as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG1", name: "INCR_RST", position: BITP_I2S_I2S_CFG1_INCR_RST, mask: BITM_I2S_I2S_CFG1_INCR_RST as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG1", name: "FIFO_RST", position: BITP_I2S_I2S_CFG1_FIFO_RST, mask: BITM_I2S_I2S_CFG1_FIFO_RST as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG2", name: "SAMP_FREQ", position: BITP_I2S_I2S_CFG2_SAMP_FREQ, mask: BITM_I2S_I2S_CFG2_SAMP_FREQ as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG2", name: "REQ_FREQ", position: BITP_I2S_I2S_CFG2_REQ_FREQ, mask: BITM_I2S_I2S_CFG2_REQ_FREQ as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_CFG2", name: "DMA_FREQ", position: BITP_I2S_I2S_CFG2_DMA_FREQ, mask: BITM_I2S_I2S_CFG2_DMA_FREQ as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_STAT", name: "FIFO_STAT", position: BITP_I2S_I2S_STAT_FIFO_STAT, mask: BITM_I2S_I2S_STAT_FIFO_STAT as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_STAT", name: "REQ_PEND", position: BITP_I2S_I2S_STAT_REQ_PEND, mask: BITM_I2S_I2S_STAT_REQ_PEND as u32, width: Width::HalfWord },
    Field { group: "I2S_I2S_STAT", name: "STAT_PEND", position: BITP_I2S_I2S_STAT_STAT_PEND, mask: BITM_I2S_I2S_STAT_STAT_PEND as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_CFG", name: "SEQ_REPEAT", position: BITP_BEEP_BEEP_CFG_SEQ_REPEAT, mask: BITM_BEEP_BEEP_CFG_SEQ_REPEAT as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_CFG", name: "BEEP_EN", position: BITP_BEEP_BEEP_CFG_BEEP_EN, mask: BITM_BEEP_BEEP_CFG_BEEP_EN as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_CFG", name: "IRQ_TONEA_START", position: BITP_BEEP_BEEP_CFG_IRQ_TONEA_START, mask: BITM_BEEP_BEEP_CFG_IRQ_TONEA_START as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_CFG", name: "IRQ_TONEA_END", position: BITP_BEEP_BEEP_CFG_IRQ_TONEA_END, mask: BITM_BEEP_BEEP_CFG_IRQ_TONEA_END as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_CFG", name: "IRQ_TONEB_START", position: BITP_BEEP_BEEP_CFG_IRQ_TONEB_START, mask: BITM_BEEP_BEEP_CFG_IRQ_TONEB_START as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_CFG", name: "IRQ_TONEB_END", position: BITP_BEEP_BEEP_CFG_IRQ_TONEB_END, mask: BITM_BEEP_BEEP_CFG_IRQ_TONEB_END as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_CFG", name: "IRQ_SEQ_NEAR_END", position: BITP_BEEP_BEEP_CFG_IRQ_SEQ_NEAR_END, mask: BITM_BEEP_BEEP_CFG_IRQ_SEQ_NEAR_END as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_CFG", name: "IRQ_SEQ_END", position: BITP_BEEP_BEEP_CFG_IRQ_SEQ_END, mask: BITM_BEEP_BEEP_CFG_IRQ_SEQ_END as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_STAT", name: "SEQ_REMAIN", position: BITP_BEEP_BEEP_STAT_SEQ_REMAIN, mask: BITM_BEEP_BEEP_STAT_SEQ_REMAIN as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_STAT", name: "BEEP_BUSY", position: BITP_BEEP_BEEP_STAT_BEEP_BUSY, mask: BITM_BEEP_BEEP_STAT_BEEP_BUSY as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_STAT", name: "EVT_TONEA_START", position: BITP_BEEP_BEEP_STAT_EVT_TONEA_START, mask: BITM_BEEP_BEEP_STAT_EVT_TONEA_START as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_STAT", name: "EVT_TONEA_END", position: BITP_BEEP_BEEP_STAT_EVT_TONEA_END, mask: BITM_BEEP_BEEP_STAT_EVT_TONEA_END as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_STAT", name: "EVT_TONEB_START", position: BITP_BEEP_BEEP_STAT_EVT_TONEB_START, mask: BITM_BEEP_BEEP_STAT_EVT_TONEB_START as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_STAT", name: "EVT_TONEB_END", position: BITP_BEEP_BEEP_STAT_EVT_TONEB_END, mask: BITM_BEEP_BEEP_STAT_EVT_TONEB_END as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_STAT", name: "EVT_SEQ_NEAR_END", position: BITP_BEEP_BEEP_STAT_EVT_SEQ_NEAR_END, mask: BITM_BEEP_BEEP_STAT_EVT_SEQ_NEAR_END as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_STAT", name: "EVT_SEQ_END", position: BITP_BEEP_BEEP_STAT_EVT_SEQ_END, mask: BITM_BEEP_BEEP_STAT_EVT_SEQ_END as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_TONE_A", name: "DUR", position: BITP_BEEP_BEEP_TONE_A_DUR, mask: BITM_BEEP_BEEP_TONE_A_DUR as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_TONE_A", name: "FREQ", position: BITP_BEEP_BEEP_TONE_A_FREQ, mask: BITM_BEEP_BEEP_TONE_A_FREQ as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_TONE_A", name: "DISABLE", position: BITP_BEEP_BEEP_TONE_A_DISABLE, mask: BITM_BEEP_BEEP_TONE_A_DISABLE as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_TONE_B", name: "DUR", position: BITP_BEEP_BEEP_TONE_B_DUR, mask: BITM_BEEP_BEEP_TONE_B_DUR as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_TONE_B", name: "FREQ", position: BITP_BEEP_BEEP_TONE_B_FREQ, mask: BITM_BEEP_BEEP_TONE_B_FREQ as u32, width: Width::HalfWord },
    Field { group: "BEEP_BEEP_TONE_B", name: "DISABLE", position: BITP_BEEP_BEEP_TONE_B_DISABLE, mask: BITM_BEEP_BEEP_TONE_B_DISABLE as u32, width: Width::HalfWord },
    Field { group: "RNG_RNGCTL", name: "RNGEN", position: BITP_RNG_RNGCTL_RNGEN, mask: BITM_RNG_RNGCTL_RNGEN as u32, width: Width::HalfWord },
    Field { group: "RNG_RNGCTL", name: "CNTEN", position: BITP_RNG_RNGCTL_CNTEN, mask: BITM_RNG_RNGCTL_CNTEN as u32, width: Width::HalfWord },
    Field { group: "RNG_RNGCTL", name: "TMRMODE", position: BITP_RNG_RNGCTL_TMRMODE, mask: BITM_RNG_RNGCTL_TMRMODE as u32, width: Width::HalfWord },
    Field { group: "RNG_RNGLEN", name: "LENRLD", position: BITP_RNG_RNGLEN_LENRLD, mask: BITM_RNG_RNGLEN_LENRLD as u32, width: Width::HalfWord },
    Field { group: "RNG_RNGLEN", name: "LENPRE", position: BITP_RNG_RNGLEN_LENPRE, mask: BITM_RNG_RNGLEN_LENPRE as u32, width: Width::HalfWord },
    Field { group: "RNG_RNGSTAT", name: "RNGRDY", position: BITP_RNG_RNGSTAT_RNGRDY, mask: BITM_RNG_RNGSTAT_RNGRDY as u32, width: Width::HalfWord },
    Field { group: "RNG_RNGDATA", name: "VALUE", position: BITP_RNG_RNGDATA_VALUE, mask: BITM_RNG_RNGDATA_VALUE as u32, width: Width::HalfWord },
    Field { group: "RNG_RNGDATA", name: "BUFF", position: BITP_RNG_RNGDATA_BUFF, mask: BITM_RNG_RNGDATA_BUFF as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCON", name: "LCDEN", position: BITP_LCD_LCDCON_LCDEN, mask: BITM_LCD_LCDCON_LCDEN as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCON", name: "LCDMUX", position: BITP_LCD_LCDCON_LCDMUX, mask: BITM_LCD_LCDCON_LCDMUX as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCON", name: "SCREENSEL", position: BITP_LCD_LCDCON_SCREENSEL, mask: BITM_LCD_LCDCON_SCREENSEL as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCON", name: "FRAMEINV", position: BITP_LCD_LCDCON_FRAMEINV, mask: BITM_LCD_LCDCON_FRAMEINV as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCON", name: "FRAMESEL", position: BITP_LCD_LCDCON_FRAMESEL, mask: BITM_LCD_LCDCON_FRAMESEL as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCON", name: "LCDRST", position: BITP_LCD_LCDCON_LCDRST, mask: BITM_LCD_LCDCON_LCDRST as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCON", name: "FRAMEINT_EN", position: BITP_LCD_LCDCON_FRAMEINT_EN, mask: BITM_LCD_LCDCON_FRAMEINT_EN as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCON", name: "CPINT_EN", position: BITP_LCD_LCDCON_CPINT_EN, mask: BITM_LCD_LCDCON_CPINT_EN as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCON", name: "BLINKEN", position: BITP_LCD_LCDCON_BLINKEN, mask: BITM_LCD_LCDCON_BLINKEN as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDSTAT", name: "FRAMEINT", position: BITP_LCD_LCDSTAT_FRAMEINT, mask: BITM_LCD_LCDSTAT_FRAMEINT as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDSTAT", name: "CP_GD", position: BITP_LCD_LCDSTAT_CP_GD, mask: BITM_LCD_LCDSTAT_CP_GD as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDSTAT", name: "LCD_IDLE", position: BITP_LCD_LCDSTAT_LCD_IDLE, mask: BITM_LCD_LCDSTAT_LCD_IDLE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDSTAT", name: "VLCD_OK", position: BITP_LCD_LCDSTAT_VLCD_OK, mask: BITM_LCD_LCDSTAT_VLCD_OK as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDSTAT", name: "SAFE_TO_WR", position: BITP_LCD_LCDSTAT_SAFE_TO_WR, mask: BITM_LCD_LCDSTAT_SAFE_TO_WR as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDBLINK", name: "BLKMOD", position: BITP_LCD_LCDBLINK_BLKMOD, mask: BITM_LCD_LCDBLINK_BLKMOD as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDBLINK", name: "BLKFREQ", position: BITP_LCD_LCDBLINK_BLKFREQ, mask: BITM_LCD_LCDBLINK_BLKFREQ as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDBLINK", name: "AUTOSWITCH", position: BITP_LCD_LCDBLINK_AUTOSWITCH, mask: BITM_LCD_LCDBLINK_AUTOSWITCH as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCONTRAST", name: "BIASLVL", position: BITP_LCD_LCDCONTRAST_BIASLVL, mask: BITM_LCD_LCDCONTRAST_BIASLVL as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCONTRAST", name: "CP_EN", position: BITP_LCD_LCDCONTRAST_CP_EN, mask: BITM_LCD_LCDCONTRAST_CP_EN as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDCONTRAST", name: "CP_PD", position: BITP_LCD_LCDCONTRAST_CP_PD, mask: BITM_LCD_LCDCONTRAST_CP_PD as u32, width: Width::HalfWord },
    Field { group: "DMA_DMASTA", name: "ENABLE", position: BITP_DMA_DMASTA_ENABLE, mask: BITM_DMA_DMASTA_ENABLE as u32, width: Width::Word },
    Field { group: "DMA_DMASTA", name: "STATE", position: BITP_DMA_DMASTA_STATE, mask: BITM_DMA_DMASTA_STATE as u32, width: Width::Word },
    Field { group: "DMA_DMASTA", name: "CHANM1", position: BITP_DMA_DMASTA_CHANM1, mask: BITM_DMA_DMASTA_CHANM1 as u32, width: Width::Word },
    Field { group: "DMA_DMACFG", name: "ENABLE", position: BITP_DMA_DMACFG_ENABLE, mask: BITM_DMA_DMACFG_ENABLE as u32, width: Width::Word },
    Field { group: "DMA_DMAERRCLR", name: "ERROR", position: BITP_DMA_DMAERRCLR_ERROR, mask: BITM_DMA_DMAERRCLR_ERROR as u32, width: Width::Word },
    Field { group: "DMA_DMAREVID", name: "VALUE", position: BITP_DMA_DMAREVID_VALUE, mask: BITM_DMA_DMAREVID_VALUE as u32, width: Width::Word },
    Field { group: "FEE_FEESTA", name: "CMDBUSY", position: BITP_FEE_FEESTA_CMDBUSY, mask: BITM_FEE_FEESTA_CMDBUSY as u32, width: Width::HalfWord },
    Field { group: "FEE_FEESTA", name: "WRBUSY", position: BITP_FEE_FEESTA_WRBUSY, mask: BITM_FEE_FEESTA_WRBUSY as u32, width: Width::HalfWord },
    Field { group: "FEE_FEESTA", name: "CMDDONE", position: BITP_FEE_FEESTA_CMDDONE, mask: BITM_FEE_FEESTA_CMDDONE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEESTA", name: "WRDONE", position: BITP_FEE_FEESTA_WRDONE, mask: BITM_FEE_FEESTA_WRDONE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEESTA", name: "CMDRES", position: BITP_FEE_FEESTA_CMDRES, mask: BITM_FEE_FEESTA_CMDRES as u32, width: Width::HalfWord },
    Field { group: "FEE_FEECON0", name: "IENCMD", position: BITP_FEE_FEECON0_IENCMD, mask: BITM_FEE_FEECON0_IENCMD as u32, width: Width::HalfWord },
    Field { group: "FEE_FEECON0", name: "IENERR", position: BITP_FEE_FEECON0_IENERR, mask: BITM_FEE_FEECON0_IENERR as u32, width: Width::HalfWord },
    Field { group: "FEE_FEECON0", name: "WREN", position: BITP_FEE_FEECON0_WREN, mask: BITM_FEE_FEECON0_WREN as u32, width: Width::HalfWord },
    Field { group: "FEE_FEECMD", name: "CMD", position: BITP_FEE_FEECMD_CMD, mask: BITM_FEE_FEECMD_CMD as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEADR0H", name: "VALUE", position: BITP_FEE_FEEADR0H_VALUE, mask: BITM_FEE_FEEADR0H_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEADR1H", name: "VALUE", position: BITP_FEE_FEEADR1H_VALUE, mask: BITM_FEE_FEEADR1H_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEESIGH", name: "VALUE", position: BITP_FEE_FEESIGH_VALUE, mask: BITM_FEE_FEESIGH_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEECON1", name: "DBG", position: BITP_FEE_FEECON1_DBG, mask: BITM_FEE_FEECON1_DBG as u32, width: Width::HalfWord },
    Field { group: "FEE_FEECON1", name: "PRTCT", position: BITP_FEE_FEECON1_PRTCT, mask: BITM_FEE_FEECON1_PRTCT as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEADRAH", name: "VALUE", position: BITP_FEE_FEEADRAH_VALUE, mask: BITM_FEE_FEEADRAH_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEPARCTL", name: "PAREN", position: BITP_FEE_FEEPARCTL_PAREN, mask: BITM_FEE_FEEPARCTL_PAREN as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEPARCTL", name: "PERREXEN", position: BITP_FEE_FEEPARCTL_PERREXEN, mask: BITM_FEE_FEEPARCTL_PERREXEN as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEPARSTA", name: "PARERR", position: BITP_FEE_FEEPARSTA_PARERR, mask: BITM_FEE_FEEPARSTA_PARERR as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEPARADRH", name: "VALUE", position: BITP_FEE_FEEPARADRH_VALUE, mask: BITM_FEE_FEEPARADRH_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEESTA", name: "CMDBUSY", position: BITP_GPF_GPFEESTA_CMDBUSY, mask: BITM_GPF_GPFEESTA_CMDBUSY as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEESTA", name: "WRBUSY", position: BITP_GPF_GPFEESTA_WRBUSY, mask: BITM_GPF_GPFEESTA_WRBUSY as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEESTA", name: "CMDDONE", position: BITP_GPF_GPFEESTA_CMDDONE, mask: BITM_GPF_GPFEESTA_CMDDONE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEESTA", name: "WRDONE", position: BITP_GPF_GPFEESTA_WRDONE, mask: BITM_GPF_GPFEESTA_WRDONE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEESTA", name: "CMDRES", position: BITP_GPF_GPFEESTA_CMDRES, mask: BITM_GPF_GPFEESTA_CMDRES as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEECON0", name: "IENCMD", position: BITP_GPF_GPFEECON0_IENCMD, mask: BITM_GPF_GPFEECON0_IENCMD as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEECON0", name: "IENERR", position: BITP_GPF_GPFEECON0_IENERR, mask: BITM_GPF_GPFEECON0_IENERR as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEECON0", name: "WREN", position: BITP_GPF_GPFEECON0_WREN, mask: BITM_GPF_GPFEECON0_WREN as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEECON0", name: "DMA_EN", position: BITP_GPF_GPFEECON0_DMA_EN, mask: BITM_GPF_GPFEECON0_DMA_EN as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEECMD", name: "CMD", position: BITP_GPF_GPFEECMD_CMD, mask: BITM_GPF_GPFEECMD_CMD as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEESIGH", name: "VALUE", position: BITP_GPF_GPFEESIGH_VALUE, mask: BITM_GPF_GPFEESIGH_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEEADRAH", name: "VALUE", position: BITP_GPF_GPFEEADRAH_VALUE, mask: BITM_GPF_GPFEEADRAH_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPCON", name: "PIN0_CFG", position: BITP_GPIO_GPCON_PIN0_CFG, mask: BITM_GPIO_GPCON_PIN0_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN1_CFG", position: BITP_GPIO_GPCON_PIN1_CFG, mask: BITM_GPIO_GPCON_PIN1_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN2_CFG", position: BITP_GPIO_GPCON_PIN2_CFG, mask: BITM_GPIO_GPCON_PIN2_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN3_CFG", position: BITP_GPIO_GPCON_PIN3_CFG, mask: BITM_GPIO_GPCON_PIN3_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN4_CFG", position: BITP_GPIO_GPCON_PIN4_CFG, mask: BITM_GPIO_GPCON_PIN4_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN5_CFG", position: BITP_GPIO_GPCON_PIN5_CFG, mask: BITM_GPIO_GPCON_PIN5_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN6_CFG", position: BITP_GPIO_GPCON_PIN6_CFG, mask: BITM_GPIO_GPCON_PIN6_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN7_CFG", position: BITP_GPIO_GPCON_PIN7_CFG, mask: BITM_GPIO_GPCON_PIN7_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN8_CFG", position: BITP_GPIO_GPCON_PIN8_CFG, mask: BITM_GPIO_GPCON_PIN8_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN9_CFG", position: BITP_GPIO_GPCON_PIN9_CFG, mask: BITM_GPIO_GPCON_PIN9_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN10_CFG", position: BITP_GPIO_GPCON_PIN10_CFG, mask: BITM_GPIO_GPCON_PIN10_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN11_CFG", position: BITP_GPIO_GPCON_PIN11_CFG, mask: BITM_GPIO_GPCON_PIN11_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN12_CFG", position: BITP_GPIO_GPCON_PIN12_CFG, mask: BITM_GPIO_GPCON_PIN12_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN13_CFG", position: BITP_GPIO_GPCON_PIN13_CFG, mask: BITM_GPIO_GPCON_PIN13_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN14_CFG", position: BITP_GPIO_GPCON_PIN14_CFG, mask: BITM_GPIO_GPCON_PIN14_CFG as u32, width: Width::Word },
    Field { group: "GPIO_GPCON", name: "PIN15_CFG", position: BITP_GPIO_GPCON_PIN15_CFG, mask: BITM_GPIO_GPCON_PIN15_CFG as u32, width: Width::Word },
    Field { group: "SYSCLK_CLKCON0", name: "CLKMUX", position: BITP_SYSCLK_CLKCON0_CLKMUX, mask: BITM_SYSCLK_CLKCON0_CLKMUX as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON0", name: "CLKCOUT", position: BITP_SYSCLK_CLKCON0_CLKCOUT, mask: BITM_SYSCLK_CLKCON0_CLKCOUT as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON0", name: "PLLMUX", position: BITP_SYSCLK_CLKCON0_PLLMUX, mask: BITM_SYSCLK_CLKCON0_PLLMUX as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON0", name: "LFCLKMUX", position: BITP_SYSCLK_CLKCON0_LFCLKMUX, mask: BITM_SYSCLK_CLKCON0_LFCLKMUX as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON1", name: "HCLKDIVCNT", position: BITP_SYSCLK_CLKCON1_HCLKDIVCNT, mask: BITM_SYSCLK_CLKCON1_HCLKDIVCNT as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON1", name: "PCLKDIVCNT", position: BITP_SYSCLK_CLKCON1_PCLKDIVCNT, mask: BITM_SYSCLK_CLKCON1_PCLKDIVCNT as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON1", name: "USBCTLCLKDIVMUX", position: BITP_SYSCLK_CLKCON1_USBCTLCLKDIVMUX, mask: BITM_SYSCLK_CLKCON1_USBCTLCLKDIVMUX as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON3", name: "SPLLNSEL", position: BITP_SYSCLK_CLKCON3_SPLLNSEL, mask: BITM_SYSCLK_CLKCON3_SPLLNSEL as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON3", name: "SPLLMSEL", position: BITP_SYSCLK_CLKCON3_SPLLMSEL, mask: BITM_SYSCLK_CLKCON3_SPLLMSEL as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON3", name: "SPLLDIV2", position: BITP_SYSCLK_CLKCON3_SPLLDIV2, mask: BITM_SYSCLK_CLKCON3_SPLLDIV2 as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON3", name: "SPLLEN", position: BITP_SYSCLK_CLKCON3_SPLLEN, mask: BITM_SYSCLK_CLKCON3_SPLLEN as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON4", name: "UPLLNSEL", position: BITP_SYSCLK_CLKCON4_UPLLNSEL, mask: BITM_SYSCLK_CLKCON4_UPLLNSEL as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON4", name: "UPLLMSEL", position: BITP_SYSCLK_CLKCON4_UPLLMSEL, mask: BITM_SYSCLK_CLKCON4_UPLLMSEL as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON4", name: "UPLLDIV2", position: BITP_SYSCLK_CLKCON4_UPLLDIV2, mask: BITM_SYSCLK_CLKCON4_UPLLDIV2 as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON4", name: "UPLLEN", position: BITP_SYSCLK_CLKCON4_UPLLEN, mask: BITM_SYSCLK_CLKCON4_UPLLEN as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON5", name: "UCLKSPI0OFF", position: BITP_SYSCLK_CLKCON5_UCLKSPI0OFF, mask: BITM_SYSCLK_CLKCON5_UCLKSPI0OFF as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON5", name: "UCLKSPI1OFF", position: BITP_SYSCLK_CLKCON5_UCLKSPI1OFF, mask: BITM_SYSCLK_CLKCON5_UCLKSPI1OFF as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON5", name: "UCLKSPIHOFF", position: BITP_SYSCLK_CLKCON5_UCLKSPIHOFF, mask: BITM_SYSCLK_CLKCON5_UCLKSPIHOFF as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON5", name: "UCLKI2COFF", position: BITP_SYSCLK_CLKCON5_UCLKI2COFF, mask: BITM_SYSCLK_CLKCON5_UCLKI2COFF as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON5", name: "UCLKUARTOFF", position: BITP_SYSCLK_CLKCON5_UCLKUARTOFF, mask: BITM_SYSCLK_CLKCON5_UCLKUARTOFF as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON5", name: "UCLKI2SOFF", position: BITP_SYSCLK_CLKCON5_UCLKI2SOFF, mask: BITM_SYSCLK_CLKCON5_UCLKI2SOFF as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON5", name: "ACLKOFF", position: BITP_SYSCLK_CLKCON5_ACLKOFF, mask: BITM_SYSCLK_CLKCON5_ACLKOFF as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKCON5", name: "CTCLKOFF", position: BITP_SYSCLK_CLKCON5_CTCLKOFF, mask: BITM_SYSCLK_CLKCON5_CTCLKOFF as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKSTAT0", name: "SPLLSTATUS", position: BITP_SYSCLK_CLKSTAT0_SPLLSTATUS, mask: BITM_SYSCLK_CLKSTAT0_SPLLSTATUS as u32, width: Width::HalfWord },
    Field { group: "SYSCLK_CLKSTAT0", name: "UPLLSTATUS", position: BITP_SYSCLK_CLKSTAT0_UPLLSTATUS, mask: BITM_SYSCLK_CLKSTAT0_UPLLSTATUS as u32, width: Width::HalfWord },
    Field { group: "CRC_CRC_CTL", name: "BLKEN", position: BITP_CRC_CRC_CTL_BLKEN, mask: BITM_CRC_CRC_CTL_BLKEN as u32, width: Width::Word },
    Field { group: "CRC_CRC_CTL", name: "STRT_CRC", position: BITP_CRC_CRC_CTL_STRT_CRC, mask: BITM_CRC_CRC_CTL_STRT_CRC as u32, width: Width::Word },
    Field { group: "CRC_CRC_CTL", name: "DMAREQEN", position: BITP_CRC_CRC_CTL_DMAREQEN, mask: BITM_CRC_CRC_CTL_DMAREQEN as u32, width: Width::Word },
    Field { group: "CRC_CRC_CTL", name: "AUTORST", position: BITP_CRC_CRC_CTL_AUTORST, mask: BITM_CRC_CRC_CTL_AUTORST as u32, width: Width::Word },
    Field { group: "CRC_CRC_CTL", name: "BITMIRR", position: BITP_CRC_CRC_CTL_BITMIRR, mask: BITM_CRC_CRC_CTL_BITMIRR as u32, width: Width::Word },
    Field { group: "CRC_CRC_CTL", name: "BYTMIRR", position: BITP_CRC_CRC_CTL_BYTMIRR, mask: BITM_CRC_CRC_CTL_BYTMIRR as u32, width: Width::Word },
    Field { group: "CRC_CRC_CTL", name: "W16SWP", position: BITP_CRC_CRC_CTL_W16SWP, mask: BITM_CRC_CRC_CTL_W16SWP as u32, width: Width::Word },
    Field { group: "PDI_PDI_CFG", name: "PDI_EN", position: BITP_PDI_PDI_CFG_PDI_EN, mask: BITM_PDI_PDI_CFG_PDI_EN as u32, width: Width::Word },
    Field { group: "PDI_PDI_CFG", name: "DWIDTH_BPP", position: BITP_PDI_PDI_CFG_DWIDTH_BPP, mask: BITM_PDI_PDI_CFG_DWIDTH_BPP as u32, width: Width::Word },
    Field { group: "PDI_PDI_CFG", name: "DBI_TYPE", position: BITP_PDI_PDI_CFG_DBI_TYPE, mask: BITM_PDI_PDI_CFG_DBI_TYPE as u32, width: Width::Word },
    Field { group: "PDI_PDI_CFG", name: "DMA_EN", position: BITP_PDI_PDI_CFG_DMA_EN, mask: BITM_PDI_PDI_CFG_DMA_EN as u32, width: Width::Word },
    Field { group: "PDI_PDI_CFG", name: "FLSH_FIFO", position: BITP_PDI_PDI_CFG_FLSH_FIFO, mask: BITM_PDI_PDI_CFG_FLSH_FIFO as u32, width: Width::Word },
    Field { group: "PDI_PDI_CFG", name: "END_XFER", position: BITP_PDI_PDI_CFG_END_XFER, mask: BITM_PDI_PDI_CFG_END_XFER as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_SET", name: "SET_TX_IEN", position: BITP_PDI_PDI_INT_SET_SET_TX_IEN, mask: BITM_PDI_PDI_INT_SET_SET_TX_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_SET", name: "SET_RX_IEN", position: BITP_PDI_PDI_INT_SET_SET_RX_IEN, mask: BITM_PDI_PDI_INT_SET_SET_RX_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_SET", name: "SET_TE_IEN", position: BITP_PDI_PDI_INT_SET_SET_TE_IEN, mask: BITM_PDI_PDI_INT_SET_SET_TE_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_SET", name: "SET_DONE_IEN", position: BITP_PDI_PDI_INT_SET_SET_DONE_IEN, mask: BITM_PDI_PDI_INT_SET_SET_DONE_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_SET", name: "SET_CMD_DONE_IEN", position: BITP_PDI_PDI_INT_SET_SET_CMD_DONE_IEN, mask: BITM_PDI_PDI_INT_SET_SET_CMD_DONE_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_SET", name: "SET_CMD_WR_ERR_IEN", position: BITP_PDI_PDI_INT_SET_SET_CMD_WR_ERR_IEN, mask: BITM_PDI_PDI_INT_SET_SET_CMD_WR_ERR_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_SET", name: "SET_FIFO_OVF_IEN", position: BITP_PDI_PDI_INT_SET_SET_FIFO_OVF_IEN, mask: BITM_PDI_PDI_INT_SET_SET_FIFO_OVF_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_SET", name: "SET_FIFO_UDF_IEN", position: BITP_PDI_PDI_INT_SET_SET_FIFO_UDF_IEN, mask: BITM_PDI_PDI_INT_SET_SET_FIFO_UDF_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_CLR", name: "CLR_TX_IEN", position: BITP_PDI_PDI_INT_CLR_CLR_TX_IEN, mask: BITM_PDI_PDI_INT_CLR_CLR_TX_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_CLR", name: "CLR_RX_IEN", position: BITP_PDI_PDI_INT_CLR_CLR_RX_IEN, mask: BITM_PDI_PDI_INT_CLR_CLR_RX_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_CLR", name: "CLR_TE_IEN", position: BITP_PDI_PDI_INT_CLR_CLR_TE_IEN, mask: BITM_PDI_PDI_INT_CLR_CLR_TE_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_CLR", name: "CLR_DONE_IEN", position: BITP_PDI_PDI_INT_CLR_CLR_DONE_IEN, mask: BITM_PDI_PDI_INT_CLR_CLR_DONE_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_CLR", name: "CLR_CMD_DONE_IEN", position: BITP_PDI_PDI_INT_CLR_CLR_CMD_DONE_IEN, mask: BITM_PDI_PDI_INT_CLR_CLR_CMD_DONE_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_CLR", name: "CLR_CMD_WR_ERR_IEN", position: BITP_PDI_PDI_INT_CLR_CLR_CMD_WR_ERR_IEN, mask: BITM_PDI_PDI_INT_CLR_CLR_CMD_WR_ERR_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_CLR", name: "CLR_FIFO_OVF_IEN", position: BITP_PDI_PDI_INT_CLR_CLR_FIFO_OVF_IEN, mask: BITM_PDI_PDI_INT_CLR_CLR_FIFO_OVF_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_INT_CLR", name: "CLR_FIFO_UDF_IEN", position: BITP_PDI_PDI_INT_CLR_CLR_FIFO_UDF_IEN, mask: BITM_PDI_PDI_INT_CLR_CLR_FIFO_UDF_IEN as u32, width: Width::Word },
    Field { group: "PDI_PDI_STAT", name: "TX_IRQ", position: BITP_PDI_PDI_STAT_TX_IRQ, mask: BITM_PDI_PDI_STAT_TX_IRQ as u32, width: Width::Word },
    Field { group: "PDI_PDI_STAT", name: "RX_IRQ", position: BITP_PDI_PDI_STAT_RX_IRQ, mask: BITM_PDI_PDI_STAT_RX_IRQ as u32, width: Width::Word },
    Field { group: "PDI_PDI_STAT", name: "TE_IRQ", position: BITP_PDI_PDI_STAT_TE_IRQ, mask: BITM_PDI_PDI_STAT_TE_IRQ as u32, width: Width::Word },
    Field { group: "PDI_PDI_STAT", name: "DONE_IRQ", position: BITP_PDI_PDI_STAT_DONE_IRQ, mask: BITM_PDI_PDI_STAT_DONE_IRQ as u32, width: Width::Word },
    Field { group: "PDI_PDI_STAT", name: "CMD_DONE", position: BITP_PDI_PDI_STAT_CMD_DONE, mask: BITM_PDI_PDI_STAT_CMD_DONE as u32, width: Width::Word },
    Field { group: "PDI_PDI_STAT", name: "CMD_WR_ERR", position: BITP_PDI_PDI_STAT_CMD_WR_ERR, mask: BITM_PDI_PDI_STAT_CMD_WR_ERR as u32, width: Width::Word },
    Field { group: "PDI_PDI_STAT", name: "FIFO_OVF", position: BITP_PDI_PDI_STAT_FIFO_OVF, mask: BITM_PDI_PDI_STAT_FIFO_OVF as u32, width: Width::Word },
    Field { group: "PDI_PDI_STAT", name: "FIFO_UDF", position: BITP_PDI_PDI_STAT_FIFO_UDF, mask: BITM_PDI_PDI_STAT_FIFO_UDF as u32, width: Width::Word },
    Field { group: "PDI_PDI_STAT", name: "FIFO_STAT", position: BITP_PDI_PDI_STAT_FIFO_STAT, mask: BITM_PDI_PDI_STAT_FIFO_STAT as u32, width: Width::Word },
    Field { group: "PDI_PDI_STAT", name: "FIFO_EMPTY", position: BITP_PDI_PDI_STAT_FIFO_EMPTY, mask: BITM_PDI_PDI_STAT_FIFO_EMPTY as u32, width: Width::Word },
    Field { group: "PDI_PDI_STAT", name: "FIFO_FULL", position: BITP_PDI_PDI_STAT_FIFO_FULL, mask: BITM_PDI_PDI_STAT_FIFO_FULL as u32, width: Width::Word },
    Field { group: "PDI_PDI_CMD", name: "CMD", position: BITP_PDI_PDI_CMD_CMD, mask: BITM_PDI_PDI_CMD_CMD as u32, width: Width::Word },
    Field { group: "PDI_PDI_CMD", name: "N_PARAM", position: BITP_PDI_PDI_CMD_N_PARAM, mask: BITM_PDI_PDI_CMD_N_PARAM as u32, width: Width::Word },
    Field { group: "PDI_PDI_CMD", name: "FR_DATA", position: BITP_PDI_PDI_CMD_FR_DATA, mask: BITM_PDI_PDI_CMD_FR_DATA as u32, width: Width::Word },
    Field { group: "PDI_PDI_CMD", name: "WR_RD", position: BITP_PDI_PDI_CMD_WR_RD, mask: BITM_PDI_PDI_CMD_WR_RD as u32, width: Width::Word },
    Field { group: "PDI_PDI_FRDATA_N", name: "FR_DATA_N", position: BITP_PDI_PDI_FRDATA_N_FR_DATA_N, mask: BITM_PDI_PDI_FRDATA_N_FR_DATA_N as u32, width: Width::Word },
    Field { group: "PDI_PDI_IF_TIMING", name: "TCSF", position: BITP_PDI_PDI_IF_TIMING_TCSF, mask: BITM_PDI_PDI_IF_TIMING_TCSF as u32, width: Width::Word },
    Field { group: "PDI_PDI_IF_TIMING", name: "TWRL_RDL", position: BITP_PDI_PDI_IF_TIMING_TWRL_RDL, mask: BITM_PDI_PDI_IF_TIMING_TWRL_RDL as u32, width: Width::Word },
    Field { group: "PDI_PDI_IF_TIMING", name: "TWRH_RDH", position: BITP_PDI_PDI_IF_TIMING_TWRH_RDH, mask: BITM_PDI_PDI_IF_TIMING_TWRH_RDH as u32, width: Width::Word },
    Field { group: "PDI_PDI_IF_TIMING", name: "TCSH", position: BITP_PDI_PDI_IF_TIMING_TCSH, mask: BITM_PDI_PDI_IF_TIMING_TCSH as u32, width: Width::Word },
    Field { group: "PDI_PDI_IF_TIMING", name: "TAS_AH", position: BITP_PDI_PDI_IF_TIMING_TAS_AH, mask: BITM_PDI_PDI_IF_TIMING_TAS_AH as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "ALDO_EN", position: BITP_AFE_AFE_CFG_ALDO_EN, mask: BITM_AFE_AFE_CFG_ALDO_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "REF_EN", position: BITP_AFE_AFE_CFG_REF_EN, mask: BITM_AFE_AFE_CFG_REF_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "DAC_EN", position: BITP_AFE_AFE_CFG_DAC_EN, mask: BITM_AFE_AFE_CFG_DAC_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "ADC_EN", position: BITP_AFE_AFE_CFG_ADC_EN, mask: BITM_AFE_AFE_CFG_ADC_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "ADC_CONV_EN", position: BITP_AFE_AFE_CFG_ADC_CONV_EN, mask: BITM_AFE_AFE_CFG_ADC_CONV_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "BUF_EN", position: BITP_AFE_AFE_CFG_BUF_EN, mask: BITM_AFE_AFE_CFG_BUF_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "INAMP_EN", position: BITP_AFE_AFE_CFG_INAMP_EN, mask: BITM_AFE_AFE_CFG_INAMP_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "TIA_EN", position: BITP_AFE_AFE_CFG_TIA_EN, mask: BITM_AFE_AFE_CFG_TIA_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "TEMP_SENSOR_EN", position: BITP_AFE_AFE_CFG_TEMP_SENSOR_EN, mask: BITM_AFE_AFE_CFG_TEMP_SENSOR_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "TEMP_CONV_EN", position: BITP_AFE_AFE_CFG_TEMP_CONV_EN, mask: BITM_AFE_AFE_CFG_TEMP_CONV_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "WAVEGEN_EN", position: BITP_AFE_AFE_CFG_WAVEGEN_EN, mask: BITM_AFE_AFE_CFG_WAVEGEN_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "DFT_EN", position: BITP_AFE_AFE_CFG_DFT_EN, mask: BITM_AFE_AFE_CFG_DFT_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "SUPPLY_LPF_EN", position: BITP_AFE_AFE_CFG_SUPPLY_LPF_EN, mask: BITM_AFE_AFE_CFG_SUPPLY_LPF_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "VBIASBUF_EN", position: BITP_AFE_AFE_CFG_VBIASBUF_EN, mask: BITM_AFE_AFE_CFG_VBIASBUF_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "VREFBUFILIMIT_EN", position: BITP_AFE_AFE_CFG_VREFBUFILIMIT_EN, mask: BITM_AFE_AFE_CFG_VREFBUFILIMIT_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CFG", name: "ALDOILIMIT_EN", position: BITP_AFE_AFE_CFG_ALDOILIMIT_EN, mask: BITM_AFE_AFE_CFG_ALDOILIMIT_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_SEQ_CFG", name: "SEQ_EN", position: BITP_AFE_AFE_SEQ_CFG_SEQ_EN, mask: BITM_AFE_AFE_SEQ_CFG_SEQ_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_FIFO_CFG", name: "CMD_FIFO_EN", position: BITP_AFE_AFE_FIFO_CFG_CMD_FIFO_EN, mask: BITM_AFE_AFE_FIFO_CFG_CMD_FIFO_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_FIFO_CFG", name: "DATA_FIFO_EN", position: BITP_AFE_AFE_FIFO_CFG_DATA_FIFO_EN, mask: BITM_AFE_AFE_FIFO_CFG_DATA_FIFO_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_FIFO_CFG", name: "CMD_FIFO_DMA_REQ_EN", position: BITP_AFE_AFE_FIFO_CFG_CMD_FIFO_DMA_REQ_EN, mask: BITM_AFE_AFE_FIFO_CFG_CMD_FIFO_DMA_REQ_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_FIFO_CFG", name: "DATA_FIFO_DMA_REQ_EN", position: BITP_AFE_AFE_FIFO_CFG_DATA_FIFO_DMA_REQ_EN, mask: BITM_AFE_AFE_FIFO_CFG_DATA_FIFO_DMA_REQ_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_FIFO_CFG", name: "DATA_FIFO_SOURCE_SEL", position: BITP_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL, mask: BITM_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL as u32, width: Width::Word },
    Field { group: "AFE_AFE_SW_CFG", name: "DMUX_STATE", position: BITP_AFE_AFE_SW_CFG_DMUX_STATE, mask: BITM_AFE_AFE_SW_CFG_DMUX_STATE as u32, width: Width::Word },
    Field { group: "AFE_AFE_SW_CFG", name: "PMUX_STATE", position: BITP_AFE_AFE_SW_CFG_PMUX_STATE, mask: BITM_AFE_AFE_SW_CFG_PMUX_STATE as u32, width: Width::Word },
    Field { group: "AFE_AFE_SW_CFG", name: "NMUX_STATE", position: BITP_AFE_AFE_SW_CFG_NMUX_STATE, mask: BITM_AFE_AFE_SW_CFG_NMUX_STATE as u32, width: Width::Word },
    Field { group: "AFE_AFE_SW_CFG", name: "TMUX_STATE", position: BITP_AFE_AFE_SW_CFG_TMUX_STATE, mask: BITM_AFE_AFE_SW_CFG_TMUX_STATE as u32, width: Width::Word },
    Field { group: "AFE_AFE_DAC_CFG", name: "DAC_ATTEN_EN", position: BITP_AFE_AFE_DAC_CFG_DAC_ATTEN_EN, mask: BITM_AFE_AFE_DAC_CFG_DAC_ATTEN_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_CFG", name: "TYPE_SEL", position: BITP_AFE_AFE_WG_CFG_TYPE_SEL, mask: BITM_AFE_AFE_WG_CFG_TYPE_SEL as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_DCLEVEL_1", name: "TRAP_DC_LEVEL_1", position: BITP_AFE_AFE_WG_DCLEVEL_1_TRAP_DC_LEVEL_1, mask: BITM_AFE_AFE_WG_DCLEVEL_1_TRAP_DC_LEVEL_1 as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_DCLEVEL_2", name: "TRAP_DC_LEVEL_2", position: BITP_AFE_AFE_WG_DCLEVEL_2_TRAP_DC_LEVEL_2, mask: BITM_AFE_AFE_WG_DCLEVEL_2_TRAP_DC_LEVEL_2 as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_DELAY_1", name: "TRAP_DELAY_1", position: BITP_AFE_AFE_WG_DELAY_1_TRAP_DELAY_1, mask: BITM_AFE_AFE_WG_DELAY_1_TRAP_DELAY_1 as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_SLOPE_1", name: "TRAP_SLOPE_1", position: BITP_AFE_AFE_WG_SLOPE_1_TRAP_SLOPE_1, mask: BITM_AFE_AFE_WG_SLOPE_1_TRAP_SLOPE_1 as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_DELAY_2", name: "TRAP_DELAY_2", position: BITP_AFE_AFE_WG_DELAY_2_TRAP_DELAY_2, mask: BITM_AFE_AFE_WG_DELAY_2_TRAP_DELAY_2 as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_SLOPE_2", name: "TRAP_SLOPE_2", position: BITP_AFE_AFE_WG_SLOPE_2_TRAP_SLOPE_2, mask: BITM_AFE_AFE_WG_SLOPE_2_TRAP_SLOPE_2 as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_FCW", name: "SINE_FCW", position: BITP_AFE_AFE_WG_FCW_SINE_FCW, mask: BITM_AFE_AFE_WG_FCW_SINE_FCW as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_PHASE", name: "SINE_OFFSET", position: BITP_AFE_AFE_WG_PHASE_SINE_OFFSET, mask: BITM_AFE_AFE_WG_PHASE_SINE_OFFSET as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_OFFSET", name: "SINE_OFFSET", position: BITP_AFE_AFE_WG_OFFSET_SINE_OFFSET, mask: BITM_AFE_AFE_WG_OFFSET_SINE_OFFSET as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_AMPLITUDE", name: "SINE_AMPLITUDE", position: BITP_AFE_AFE_WG_AMPLITUDE_SINE_AMPLITUDE, mask: BITM_AFE_AFE_WG_AMPLITUDE_SINE_AMPLITUDE as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADC_CFG", name: "MUX_SEL", position: BITP_AFE_AFE_ADC_CFG_MUX_SEL, mask: BITM_AFE_AFE_ADC_CFG_MUX_SEL as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADC_CFG", name: "GAIN_OFFS_SEL", position: BITP_AFE_AFE_ADC_CFG_GAIN_OFFS_SEL, mask: BITM_AFE_AFE_ADC_CFG_GAIN_OFFS_SEL as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADC_CFG", name: "ANEXCITESW_EN", position: BITP_AFE_AFE_ADC_CFG_ANEXCITESW_EN, mask: BITM_AFE_AFE_ADC_CFG_ANEXCITESW_EN as u32, width: Width::Word },
    Field { group: "AFE_AFE_SUPPLY_LPF_CFG", name: "BYPASS_SUPPLY_LPF", position: BITP_AFE_AFE_SUPPLY_LPF_CFG_BYPASS_SUPPLY_LPF, mask: BITM_AFE_AFE_SUPPLY_LPF_CFG_BYPASS_SUPPLY_LPF as u32, width: Width::Word },
    Field { group: "AFE_AFE_WG_DAC_CODE", name: "DAC_CODE", position: BITP_AFE_AFE_WG_DAC_CODE_DAC_CODE, mask: BITM_AFE_AFE_WG_DAC_CODE_DAC_CODE as u32, width: Width::Word },
    Field { group: "AFE_AFE_STATUS", name: "TEMP_SENSOR_READY", position: BITP_AFE_AFE_STATUS_TEMP_SENSOR_READY, mask: BITM_AFE_AFE_STATUS_TEMP_SENSOR_READY as u32, width: Width::Word },
    Field { group: "AFE_AFE_STATUS", name: "ADC_READY", position: BITP_AFE_AFE_STATUS_ADC_READY, mask: BITM_AFE_AFE_STATUS_ADC_READY as u32, width: Width::Word },
    Field { group: "AFE_AFE_SEQ_COUNT", name: "COUNT", position: BITP_AFE_AFE_SEQ_COUNT_COUNT, mask: BITM_AFE_AFE_SEQ_COUNT_COUNT as u32, width: Width::Word },
    Field { group: "AFE_AFE_SEQ_TIMEOUT", name: "TIMEOUT", position: BITP_AFE_AFE_SEQ_TIMEOUT_TIMEOUT, mask: BITM_AFE_AFE_SEQ_TIMEOUT_TIMEOUT as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADC_RESULT", name: "ADC_RESULT", position: BITP_AFE_AFE_ADC_RESULT_ADC_RESULT, mask: BITM_AFE_AFE_ADC_RESULT_ADC_RESULT as u32, width: Width::Word },
    Field { group: "AFE_AFE_DFT_RESULT_REAL", name: "DFT_RESULT_REAL", position: BITP_AFE_AFE_DFT_RESULT_REAL_DFT_RESULT_REAL, mask: BITM_AFE_AFE_DFT_RESULT_REAL_DFT_RESULT_REAL as u32, width: Width::Word },
    Field { group: "AFE_AFE_DFT_RESULT_IMAG", name: "DFT_RESULT_IMAG", position: BITP_AFE_AFE_DFT_RESULT_IMAG_DFT_RESULT_IMAG, mask: BITM_AFE_AFE_DFT_RESULT_IMAG_DFT_RESULT_IMAG as u32, width: Width::Word },
    Field { group: "AFE_AFE_SUPPLY_LPF_RESULT", name: "SUPPLY_LPF_RESULT", position: BITP_AFE_AFE_SUPPLY_LPF_RESULT_SUPPLY_LPF_RESULT, mask: BITM_AFE_AFE_SUPPLY_LPF_RESULT_SUPPLY_LPF_RESULT as u32, width: Width::Word },
    Field { group: "AFE_AFE_TEMP_SENSOR_RESULT", name: "TEMP_SENSOR_RESULT", position: BITP_AFE_AFE_TEMP_SENSOR_RESULT_TEMP_SENSOR_RESULT, mask: BITM_AFE_AFE_TEMP_SENSOR_RESULT_TEMP_SENSOR_RESULT as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_IEN", name: "ADC_RESULT_READY_IEN", position: BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_RESULT_READY_IEN, mask: BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_RESULT_READY_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_IEN", name: "DFT_RESULT_READY_IEN", position: BITP_AFE_AFE_ANALOG_CAPTURE_IEN_DFT_RESULT_READY_IEN, mask: BITM_AFE_AFE_ANALOG_CAPTURE_IEN_DFT_RESULT_READY_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_IEN", name: "SUPPLY_LPF_RESULT_READY_IEN", position: BITP_AFE_AFE_ANALOG_CAPTURE_IEN_SUPPLY_LPF_RESULT_READY_IEN, mask: BITM_AFE_AFE_ANALOG_CAPTURE_IEN_SUPPLY_LPF_RESULT_READY_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_IEN", name: "TEMP_RESULT_READY_IEN", position: BITP_AFE_AFE_ANALOG_CAPTURE_IEN_TEMP_RESULT_READY_IEN, mask: BITM_AFE_AFE_ANALOG_CAPTURE_IEN_TEMP_RESULT_READY_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_IEN", name: "ADC_MIN_FAIL_IEN", position: BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MIN_FAIL_IEN, mask: BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MIN_FAIL_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_IEN", name: "ADC_MAX_FAIL_IEN", position: BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MAX_FAIL_IEN, mask: BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MAX_FAIL_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_IEN", name: "ADC_DELTA_FAIL_IEN", position: BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_DELTA_FAIL_IEN, mask: BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_DELTA_FAIL_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_GEN_IEN", name: "DELAY_COMMAND_DONE_IEN", position: BITP_AFE_AFE_ANALOG_GEN_IEN_DELAY_COMMAND_DONE_IEN, mask: BITM_AFE_AFE_ANALOG_GEN_IEN_DELAY_COMMAND_DONE_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_GEN_IEN", name: "HARDWARE_SETUP_DONE_IEN", position: BITP_AFE_AFE_ANALOG_GEN_IEN_HARDWARE_SETUP_DONE_IEN, mask: BITM_AFE_AFE_ANALOG_GEN_IEN_HARDWARE_SETUP_DONE_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_GEN_IEN", name: "BREAK_SEQUENCE_ORG_IEN", position: BITP_AFE_AFE_ANALOG_GEN_IEN_BREAK_SEQUENCE_ORG_IEN, mask: BITM_AFE_AFE_ANALOG_GEN_IEN_BREAK_SEQUENCE_ORG_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_GEN_IEN", name: "CUSTOM_INT_IEN", position: BITP_AFE_AFE_ANALOG_GEN_IEN_CUSTOM_INT_IEN, mask: BITM_AFE_AFE_ANALOG_GEN_IEN_CUSTOM_INT_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_IEN", name: "END_OF_SEQ_IEN", position: BITP_AFE_AFE_CMD_FIFO_IEN_END_OF_SEQ_IEN, mask: BITM_AFE_AFE_CMD_FIFO_IEN_END_OF_SEQ_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_IEN", name: "SEQ_TIMEOUT_FINISHED_IEN", position: BITP_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_FINISHED_IEN, mask: BITM_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_FINISHED_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_IEN", name: "SEQ_TIMEOUT_ERR_IEN", position: BITP_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_ERR_IEN, mask: BITM_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_ERR_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_IEN", name: "CMD_FIFO_FULL_IEN", position: BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_FULL_IEN, mask: BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_FULL_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_IEN", name: "CMD_FIFO_EMPTY_IEN", position: BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_EMPTY_IEN, mask: BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_EMPTY_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_IEN", name: "CMD_FIFO_THR_IEN", position: BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_THR_IEN, mask: BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_THR_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_IEN", name: "CMD_FIFO_OVF_IEN", position: BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_OVF_IEN, mask: BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_OVF_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_IEN", name: "CMD_FIFO_UDF_IEN", position: BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_UDF_IEN, mask: BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_UDF_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_DATA_FIFO_IEN", name: "DATA_FIFO_FULL_IEN", position: BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_FULL_IEN, mask: BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_FULL_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_DATA_FIFO_IEN", name: "DATA_FIFO_EMPTY_IEN", position: BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_EMPTY_IEN, mask: BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_EMPTY_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_DATA_FIFO_IEN", name: "DATA_FIFO_THR_IEN", position: BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_THR_IEN, mask: BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_THR_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_DATA_FIFO_IEN", name: "DATA_FIFO_OVF_IEN", position: BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_OVF_IEN, mask: BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_OVF_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_DATA_FIFO_IEN", name: "DATA_FIFO_UDF_IEN", position: BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_UDF_IEN, mask: BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_UDF_IEN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_INT", name: "ADC_RESULT_READY", position: BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_RESULT_READY, mask: BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_RESULT_READY as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_INT", name: "DFT_RESULT_READY", position: BITP_AFE_AFE_ANALOG_CAPTURE_INT_DFT_RESULT_READY, mask: BITM_AFE_AFE_ANALOG_CAPTURE_INT_DFT_RESULT_READY as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_INT", name: "SUPPLY_LPF_RESULT_READY", position: BITP_AFE_AFE_ANALOG_CAPTURE_INT_SUPPLY_LPF_RESULT_READY, mask: BITM_AFE_AFE_ANALOG_CAPTURE_INT_SUPPLY_LPF_RESULT_READY as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_INT", name: "TEMP_RESULT_READY", position: BITP_AFE_AFE_ANALOG_CAPTURE_INT_TEMP_RESULT_READY, mask: BITM_AFE_AFE_ANALOG_CAPTURE_INT_TEMP_RESULT_READY as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_INT", name: "ADC_MIN_FAIL", position: BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MIN_FAIL, mask: BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MIN_FAIL as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_INT", name: "ADC_MAX_FAIL", position: BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MAX_FAIL, mask: BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MAX_FAIL as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_CAPTURE_INT", name: "ADC_DELTA_FAIL", position: BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_DELTA_FAIL, mask: BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_DELTA_FAIL as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_GEN_INT", name: "DELAY_COMMAND_DONE", position: BITP_AFE_AFE_ANALOG_GEN_INT_DELAY_COMMAND_DONE, mask: BITM_AFE_AFE_ANALOG_GEN_INT_DELAY_COMMAND_DONE as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_GEN_INT", name: "HARDWARE_SETUP_DONE", position: BITP_AFE_AFE_ANALOG_GEN_INT_HARDWARE_SETUP_DONE, mask: BITM_AFE_AFE_ANALOG_GEN_INT_HARDWARE_SETUP_DONE as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_GEN_INT", name: "BREAK_SEQUENCE_ORG", position: BITP_AFE_AFE_ANALOG_GEN_INT_BREAK_SEQUENCE_ORG, mask: BITM_AFE_AFE_ANALOG_GEN_INT_BREAK_SEQUENCE_ORG as u32, width: Width::Word },
    Field { group: "AFE_AFE_ANALOG_GEN_INT", name: "CUSTOM_INT", position: BITP_AFE_AFE_ANALOG_GEN_INT_CUSTOM_INT, mask: BITM_AFE_AFE_ANALOG_GEN_INT_CUSTOM_INT as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_INT", name: "END_OF_SEQ", position: BITP_AFE_AFE_CMD_FIFO_INT_END_OF_SEQ, mask: BITM_AFE_AFE_CMD_FIFO_INT_END_OF_SEQ as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_INT", name: "SEQ_TIMEOUT_FINISHED", position: BITP_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_FINISHED, mask: BITM_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_FINISHED as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_INT", name: "SEQ_TIMEOUT_ERR", position: BITP_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_ERR, mask: BITM_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_ERR as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_INT", name: "CMD_FIFO_FULL", position: BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_FULL, mask: BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_FULL as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_INT", name: "CMD_FIFO_EMPTY", position: BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_EMPTY, mask: BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_EMPTY as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_INT", name: "CMD_FIFO_THR", position: BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_THR, mask: BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_THR as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_INT", name: "CMD_FIFO_OVF", position: BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_OVF, mask: BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_OVF as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_INT", name: "CMD_FIFO_UDF", position: BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_UDF, mask: BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_UDF as u32, width: Width::Word },
    Field { group: "AFE_AFE_DATA_FIFO_INT", name: "DATA_FIFO_FULL", position: BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_FULL, mask: BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_FULL as u32, width: Width::Word },
    Field { group: "AFE_AFE_DATA_FIFO_INT", name: "DATA_FIFO_EMPTY", position: BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_EMPTY, mask: BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_EMPTY as u32, width: Width::Word },
    Field { group: "AFE_AFE_DATA_FIFO_INT", name: "DATA_FIFO_THR", position: BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_THR, mask: BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_THR as u32, width: Width::Word },
    Field { group: "AFE_AFE_DATA_FIFO_INT", name: "DATA_FIFO_OVF", position: BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_OVF, mask: BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_OVF as u32, width: Width::Word },
    Field { group: "AFE_AFE_DATA_FIFO_INT", name: "DATA_FIFO_UDF", position: BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_UDF, mask: BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_UDF as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADCMIN", name: "ADCMIN", position: BITP_AFE_AFE_ADCMIN_ADCMIN, mask: BITM_AFE_AFE_ADCMIN_ADCMIN as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADCMAX", name: "ADCMAX", position: BITP_AFE_AFE_ADCMAX_ADCMAX, mask: BITM_AFE_AFE_ADCMAX_ADCMAX as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADCDELTA", name: "ADCDELTA", position: BITP_AFE_AFE_ADCDELTA_ADCDELTA, mask: BITM_AFE_AFE_ADCDELTA_ADCDELTA as u32, width: Width::Word },
    Field { group: "AFE_AFE_CAL_DATA_LOCK", name: "KEY", position: BITP_AFE_AFE_CAL_DATA_LOCK_KEY, mask: BITM_AFE_AFE_CAL_DATA_LOCK_KEY as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_PWR", name: "PWR_MODE", position: BITP_CT_CT_CDC_PWR_PWR_MODE, mask: BITM_CT_CT_CDC_PWR_PWR_MODE as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_PWR", name: "SW_START_SEQ", position: BITP_CT_CT_CDC_PWR_SW_START_SEQ, mask: BITM_CT_CT_CDC_PWR_SW_START_SEQ as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_PWR", name: "SW_STATUS", position: BITP_CT_CT_CDC_PWR_SW_STATUS, mask: BITM_CT_CT_CDC_PWR_SW_STATUS as u32, width: Width::Word },
    Field { group: "CT_CT_CFG1", name: "C2V_BIAS", position: BITP_CT_CT_CFG1_C2V_BIAS, mask: BITM_CT_CT_CFG1_C2V_BIAS as u32, width: Width::Word },
    Field { group: "CT_CT_CFG1", name: "PGA_BIAS", position: BITP_CT_CT_CFG1_PGA_BIAS, mask: BITM_CT_CT_CFG1_PGA_BIAS as u32, width: Width::Word },
    Field { group: "CT_CT_CFG1", name: "INT_BUFFER", position: BITP_CT_CT_CFG1_INT_BUFFER, mask: BITM_CT_CT_CFG1_INT_BUFFER as u32, width: Width::Word },
    Field { group: "CT_CT_CFG1", name: "BYPASS_GAIN", position: BITP_CT_CT_CFG1_BYPASS_GAIN, mask: BITM_CT_CT_CFG1_BYPASS_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_CFG1", name: "AUTOZERO_DUTY", position: BITP_CT_CT_CFG1_AUTOZERO_DUTY, mask: BITM_CT_CT_CFG1_AUTOZERO_DUTY as u32, width: Width::Word },
    Field { group: "CT_CT_CFG1", name: "AIN_SEL", position: BITP_CT_CT_CFG1_AIN_SEL, mask: BITM_CT_CT_CFG1_AIN_SEL as u32, width: Width::Word },
    Field { group: "CT_CT_CFG1", name: "INT_CYCLE", position: BITP_CT_CT_CFG1_INT_CYCLE, mask: BITM_CT_CT_CFG1_INT_CYCLE as u32, width: Width::Word },
    Field { group: "CT_CT_CFG2", name: "PH13_DUTY", position: BITP_CT_CT_CFG2_PH13_DUTY, mask: BITM_CT_CT_CFG2_PH13_DUTY as u32, width: Width::Word },
    Field { group: "CT_CT_CFG2", name: "PH24_DUTY", position: BITP_CT_CT_CFG2_PH24_DUTY, mask: BITM_CT_CT_CFG2_PH24_DUTY as u32, width: Width::Word },
    Field { group: "CT_CT_CFG2", name: "SELF_TIMER_WAIT", position: BITP_CT_CT_CFG2_SELF_TIMER_WAIT, mask: BITM_CT_CT_CFG2_SELF_TIMER_WAIT as u32, width: Width::Word },
    Field { group: "CT_CT_CFG2", name: "C2V_HOLD_TIME", position: BITP_CT_CT_CFG2_C2V_HOLD_TIME, mask: BITM_CT_CT_CFG2_C2V_HOLD_TIME as u32, width: Width::Word },
    Field { group: "CT_CT_CFG2", name: "STIMER_EN", position: BITP_CT_CT_CFG2_STIMER_EN, mask: BITM_CT_CT_CFG2_STIMER_EN as u32, width: Width::Word },
    Field { group: "CT_CT_CFG2", name: "C2V_LPF", position: BITP_CT_CT_CFG2_C2V_LPF, mask: BITM_CT_CT_CFG2_C2V_LPF as u32, width: Width::Word },
    Field { group: "CT_CT_CFG3", name: "IIR_EN", position: BITP_CT_CT_CFG3_IIR_EN, mask: BITM_CT_CT_CFG3_IIR_EN as u32, width: Width::Word },
    Field { group: "CT_CT_CFG3", name: "IIR_WEIGHT", position: BITP_CT_CT_CFG3_IIR_WEIGHT, mask: BITM_CT_CT_CFG3_IIR_WEIGHT as u32, width: Width::Word },
    Field { group: "CT_CT_CFG3", name: "DIG_CTOV_CAPTOUCH_EN", position: BITP_CT_CT_CFG3_DIG_CTOV_CAPTOUCH_EN, mask: BITM_CT_CT_CFG3_DIG_CTOV_CAPTOUCH_EN as u32, width: Width::Word },
    Field { group: "CT_CT_CFG3", name: "RES_SEL", position: BITP_CT_CT_CFG3_RES_SEL, mask: BITM_CT_CT_CFG3_RES_SEL as u32, width: Width::Word },
    Field { group: "CT_CT_CFG3", name: "PK2PK_NUM_SPLS", position: BITP_CT_CT_CFG3_PK2PK_NUM_SPLS, mask: BITM_CT_CT_CFG3_PK2PK_NUM_SPLS as u32, width: Width::Word },
    Field { group: "CT_CT_CFG3", name: "PK2PK_SUBSET", position: BITP_CT_CT_CFG3_PK2PK_SUBSET, mask: BITM_CT_CT_CFG3_PK2PK_SUBSET as u32, width: Width::Word },
    Field { group: "CT_CT_CFG3", name: "PK2PK_AVG_MIN", position: BITP_CT_CT_CFG3_PK2PK_AVG_MIN, mask: BITM_CT_CT_CFG3_PK2PK_AVG_MIN as u32, width: Width::Word },
    Field { group: "CT_CT_CFG3", name: "PK2PK_AVG", position: BITP_CT_CT_CFG3_PK2PK_AVG, mask: BITM_CT_CT_CFG3_PK2PK_AVG as u32, width: Width::Word },
    Field { group: "CT_CT_MEAS_SEL", name: "GND_SEL", position: BITP_CT_CT_MEAS_SEL_GND_SEL, mask: BITM_CT_CT_MEAS_SEL_GND_SEL as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE_CTRL", name: "CDC_COEFF", position: BITP_CT_CT_BASELINE_CTRL_CDC_COEFF, mask: BITM_CT_CT_BASELINE_CTRL_CDC_COEFF as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE_CTRL", name: "BL_COEFF", position: BITP_CT_CT_BASELINE_CTRL_BL_COEFF, mask: BITM_CT_CT_BASELINE_CTRL_BL_COEFF as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE_CTRL", name: "SLOW_PROX", position: BITP_CT_CT_BASELINE_CTRL_SLOW_PROX, mask: BITM_CT_CT_BASELINE_CTRL_SLOW_PROX as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE_CTRL", name: "FAST_PROX", position: BITP_CT_CT_BASELINE_CTRL_FAST_PROX, mask: BITM_CT_CT_BASELINE_CTRL_FAST_PROX as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE_CTRL", name: "FAST_FILTER_UPDATE", position: BITP_CT_CT_BASELINE_CTRL_FAST_FILTER_UPDATE, mask: BITM_CT_CT_BASELINE_CTRL_FAST_FILTER_UPDATE as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE_CTRL", name: "FORCE_CAL", position: BITP_CT_CT_BASELINE_CTRL_FORCE_CAL, mask: BITM_CT_CT_BASELINE_CTRL_FORCE_CAL as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE_CTRL", name: "BASELINE_CAL_DELAY", position: BITP_CT_CT_BASELINE_CTRL_BASELINE_CAL_DELAY, mask: BITM_CT_CT_BASELINE_CTRL_BASELINE_CAL_DELAY as u32, width: Width::Word },
    Field { group: "CT_CT_AVG", name: "AVG_MIN_GROUP1", position: BITP_CT_CT_AVG_AVG_MIN_GROUP1, mask: BITM_CT_CT_AVG_AVG_MIN_GROUP1 as u32, width: Width::Word },
    Field { group: "CT_CT_AVG", name: "AVG_MIN_GROUP2", position: BITP_CT_CT_AVG_AVG_MIN_GROUP2, mask: BITM_CT_CT_AVG_AVG_MIN_GROUP2 as u32, width: Width::Word },
    Field { group: "CT_CT_AVG", name: "AVG_GROUP1", position: BITP_CT_CT_AVG_AVG_GROUP1, mask: BITM_CT_CT_AVG_AVG_GROUP1 as u32, width: Width::Word },
    Field { group: "CT_CT_AVG", name: "AVG_GROUP2", position: BITP_CT_CT_AVG_AVG_GROUP2, mask: BITM_CT_CT_AVG_AVG_GROUP2 as u32, width: Width::Word },
    Field { group: "CT_CT_AVG", name: "AVG_OUTPUT", position: BITP_CT_CT_AVG_AVG_OUTPUT, mask: BITM_CT_CT_AVG_AVG_OUTPUT as u32, width: Width::Word },
    Field { group: "CT_CT_AVG", name: "RANK_FILT", position: BITP_CT_CT_AVG_RANK_FILT, mask: BITM_CT_CT_AVG_RANK_FILT as u32, width: Width::Word },
    Field { group: "CT_CT_CAL_EN", name: "CAL_EN", position: BITP_CT_CT_CAL_EN_CAL_EN, mask: BITM_CT_CT_CAL_EN_CAL_EN as u32, width: Width::Word },
    Field { group: "CT_CT_TOUCH_CFG1", name: "TCH_LOWER_THLD", position: BITP_CT_CT_TOUCH_CFG1_TCH_LOWER_THLD, mask: BITM_CT_CT_TOUCH_CFG1_TCH_LOWER_THLD as u32, width: Width::Word },
    Field { group: "CT_CT_TOUCH_CFG1", name: "TCH_UPPER_THLD", position: BITP_CT_CT_TOUCH_CFG1_TCH_UPPER_THLD, mask: BITM_CT_CT_TOUCH_CFG1_TCH_UPPER_THLD as u32, width: Width::Word },
    Field { group: "CT_CT_TOUCH_CFG2", name: "TCH_MIN_DURATION", position: BITP_CT_CT_TOUCH_CFG2_TCH_MIN_DURATION, mask: BITM_CT_CT_TOUCH_CFG2_TCH_MIN_DURATION as u32, width: Width::Word },
    Field { group: "CT_CT_TOUCH_CFG2", name: "TCH_DETECT_ENABLE", position: BITP_CT_CT_TOUCH_CFG2_TCH_DETECT_ENABLE, mask: BITM_CT_CT_TOUCH_CFG2_TCH_DETECT_ENABLE as u32, width: Width::Word },
    Field { group: "CT_CT_TOUCH_CFG2", name: "TCH_SEL_INPB", position: BITP_CT_CT_TOUCH_CFG2_TCH_SEL_INPB, mask: BITM_CT_CT_TOUCH_CFG2_TCH_SEL_INPB as u32, width: Width::Word },
    Field { group: "CT_CT_TOUCH_CFG2", name: "TCH_SEL_INPA", position: BITP_CT_CT_TOUCH_CFG2_TCH_SEL_INPA, mask: BITM_CT_CT_TOUCH_CFG2_TCH_SEL_INPA as u32, width: Width::Word },
    Field { group: "CT_CT_TOUCH_CFG2", name: "TCH_EVENT_ON_HIGH", position: BITP_CT_CT_TOUCH_CFG2_TCH_EVENT_ON_HIGH, mask: BITM_CT_CT_TOUCH_CFG2_TCH_EVENT_ON_HIGH as u32, width: Width::Word },
    Field { group: "CT_CT_TOUCH_CFG2", name: "INDIVIDUAL_THRESHOLD_EN", position: BITP_CT_CT_TOUCH_CFG2_INDIVIDUAL_THRESHOLD_EN, mask: BITM_CT_CT_TOUCH_CFG2_INDIVIDUAL_THRESHOLD_EN as u32, width: Width::Word },
    Field { group: "CT_CT_RELEASE_CFG1", name: "REL_LOWER_THLD", position: BITP_CT_CT_RELEASE_CFG1_REL_LOWER_THLD, mask: BITM_CT_CT_RELEASE_CFG1_REL_LOWER_THLD as u32, width: Width::Word },
    Field { group: "CT_CT_RELEASE_CFG1", name: "REL_UPPER_THLD", position: BITP_CT_CT_RELEASE_CFG1_REL_UPPER_THLD, mask: BITM_CT_CT_RELEASE_CFG1_REL_UPPER_THLD as u32, width: Width::Word },
    Field { group: "CT_CT_RELEASE_CFG2", name: "REL_MIN_DURATION", position: BITP_CT_CT_RELEASE_CFG2_REL_MIN_DURATION, mask: BITM_CT_CT_RELEASE_CFG2_REL_MIN_DURATION as u32, width: Width::Word },
    Field { group: "CT_CT_RELEASE_CFG2", name: "REL_DETECT_ENABLE", position: BITP_CT_CT_RELEASE_CFG2_REL_DETECT_ENABLE, mask: BITM_CT_CT_RELEASE_CFG2_REL_DETECT_ENABLE as u32, width: Width::Word },
    Field { group: "CT_CT_RELEASE_CFG2", name: "REL_SEL_INPB", position: BITP_CT_CT_RELEASE_CFG2_REL_SEL_INPB, mask: BITM_CT_CT_RELEASE_CFG2_REL_SEL_INPB as u32, width: Width::Word },
    Field { group: "CT_CT_RELEASE_CFG2", name: "REL_SEL_INPA", position: BITP_CT_CT_RELEASE_CFG2_REL_SEL_INPA, mask: BITM_CT_CT_RELEASE_CFG2_REL_SEL_INPA as u32, width: Width::Word },
    Field { group: "CT_CT_RELEASE_CFG2", name: "REL_EVENT_ON_HIGH", position: BITP_CT_CT_RELEASE_CFG2_REL_EVENT_ON_HIGH, mask: BITM_CT_CT_RELEASE_CFG2_REL_EVENT_ON_HIGH as u32, width: Width::Word },
    Field { group: "CT_CT_RELEASE_CFG2", name: "INDIVIDUAL_THRESHOLD_EN", position: BITP_CT_CT_RELEASE_CFG2_INDIVIDUAL_THRESHOLD_EN, mask: BITM_CT_CT_RELEASE_CFG2_INDIVIDUAL_THRESHOLD_EN as u32, width: Width::Word },
    Field { group: "CT_CT_IEN", name: "CONV_SET_COMPLETE_IEN", position: BITP_CT_CT_IEN_CONV_SET_COMPLETE_IEN, mask: BITM_CT_CT_IEN_CONV_SET_COMPLETE_IEN as u32, width: Width::Word },
    Field { group: "CT_CT_IEN", name: "STATUS_GT_THRESHOLD_IEN", position: BITP_CT_CT_IEN_STATUS_GT_THRESHOLD_IEN, mask: BITM_CT_CT_IEN_STATUS_GT_THRESHOLD_IEN as u32, width: Width::Word },
    Field { group: "CT_CT_IEN", name: "PROX_DETECTED_IEN", position: BITP_CT_CT_IEN_PROX_DETECTED_IEN, mask: BITM_CT_CT_IEN_PROX_DETECTED_IEN as u32, width: Width::Word },
    Field { group: "CT_CT_IEN", name: "TOUCH_DETECTED_IEN", position: BITP_CT_CT_IEN_TOUCH_DETECTED_IEN, mask: BITM_CT_CT_IEN_TOUCH_DETECTED_IEN as u32, width: Width::Word },
    Field { group: "CT_CT_IEN", name: "RELEASE_DETECTED_IEN", position: BITP_CT_CT_IEN_RELEASE_DETECTED_IEN, mask: BITM_CT_CT_IEN_RELEASE_DETECTED_IEN as u32, width: Width::Word },
    Field { group: "CT_CT_INT", name: "CONV_SET_COMPLETE", position: BITP_CT_CT_INT_CONV_SET_COMPLETE, mask: BITM_CT_CT_INT_CONV_SET_COMPLETE as u32, width: Width::Word },
    Field { group: "CT_CT_INT", name: "STATUS_GT_THRESHOLD", position: BITP_CT_CT_INT_STATUS_GT_THRESHOLD, mask: BITM_CT_CT_INT_STATUS_GT_THRESHOLD as u32, width: Width::Word },
    Field { group: "CT_CT_INT", name: "PROX_DETECTED", position: BITP_CT_CT_INT_PROX_DETECTED, mask: BITM_CT_CT_INT_PROX_DETECTED as u32, width: Width::Word },
    Field { group: "CT_CT_INT", name: "TOUCH_DETECTED", position: BITP_CT_CT_INT_TOUCH_DETECTED, mask: BITM_CT_CT_INT_TOUCH_DETECTED as u32, width: Width::Word },
    Field { group: "CT_CT_INT", name: "RELEASE_DETECTED", position: BITP_CT_CT_INT_RELEASE_DETECTED, mask: BITM_CT_CT_INT_RELEASE_DETECTED as u32, width: Width::Word },
    Field { group: "CT_CT_OFFS_HSTAT", name: "OFFS_HSTAT", position: BITP_CT_CT_OFFS_HSTAT_OFFS_HSTAT, mask: BITM_CT_CT_OFFS_HSTAT_OFFS_HSTAT as u32, width: Width::Word },
    Field { group: "CT_CT_OFFS_LSTAT", name: "OFFS_LSTAT", position: BITP_CT_CT_OFFS_LSTAT_OFFS_LSTAT, mask: BITM_CT_CT_OFFS_LSTAT_OFFS_LSTAT as u32, width: Width::Word },
    Field { group: "CT_CT_PROX_STAT", name: "PROX_STAT", position: BITP_CT_CT_PROX_STAT_PROX_STAT, mask: BITM_CT_CT_PROX_STAT_PROX_STAT as u32, width: Width::Word },
    Field { group: "CT_CT_FPROX_STAT", name: "FPROX_STAT", position: BITP_CT_CT_FPROX_STAT_FPROX_STAT, mask: BITM_CT_CT_FPROX_STAT_FPROX_STAT as u32, width: Width::Word },
    Field { group: "CT_CT_TOUCH_STAT", name: "TCH_DETECT_STAT", position: BITP_CT_CT_TOUCH_STAT_TCH_DETECT_STAT, mask: BITM_CT_CT_TOUCH_STAT_TCH_DETECT_STAT as u32, width: Width::Word },
    Field { group: "CT_CT_TOUCH_STAT", name: "REL_DETECT_STAT", position: BITP_CT_CT_TOUCH_STAT_REL_DETECT_STAT, mask: BITM_CT_CT_TOUCH_STAT_REL_DETECT_STAT as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE0_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE0_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE0_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE0_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE0_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE0_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE0_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE0_CFG_PK2PK, mask: BITM_CT_CT_STAGE0_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE0_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE0_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE0_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE0_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE0_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE0_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE0_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE0_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE0_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE0_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE0_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE0_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE0_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE0_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE0_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE0_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE0_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE0_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE0_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE0_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE0_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE1_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE1_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE1_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE1_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE1_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE1_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE1_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE1_CFG_PK2PK, mask: BITM_CT_CT_STAGE1_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE1_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE1_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE1_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE1_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE1_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE1_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE1_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE1_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE1_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE1_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE1_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE1_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE1_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE1_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE1_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE1_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE1_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE1_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE1_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE1_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE1_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE2_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE2_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE2_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE2_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE2_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE2_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE2_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE2_CFG_PK2PK, mask: BITM_CT_CT_STAGE2_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE2_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE2_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE2_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE2_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE2_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE2_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE2_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE2_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE2_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE2_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE2_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE2_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE2_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE2_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE2_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE2_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE2_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE2_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE2_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE2_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE2_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE3_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE3_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE3_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE3_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE3_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE3_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE3_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE3_CFG_PK2PK, mask: BITM_CT_CT_STAGE3_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE3_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE3_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE3_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE3_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE3_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE3_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE3_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE3_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE3_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE3_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE3_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE3_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE3_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE3_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE3_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE3_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE3_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE3_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE3_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE3_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE3_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE4_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE4_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE4_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE4_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE4_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE4_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE4_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE4_CFG_PK2PK, mask: BITM_CT_CT_STAGE4_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE4_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE4_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE4_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE4_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE4_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE4_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE4_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE4_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE4_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE4_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE4_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE4_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE4_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE4_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE4_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE4_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE4_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE4_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE4_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE4_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE4_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE5_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE5_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE5_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE5_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE5_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE5_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE5_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE5_CFG_PK2PK, mask: BITM_CT_CT_STAGE5_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE5_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE5_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE5_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE5_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE5_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE5_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE5_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE5_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE5_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE5_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE5_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE5_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE5_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE5_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE5_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE5_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE5_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE5_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE5_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE5_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE5_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE6_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE6_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE6_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE6_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE6_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE6_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE6_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE6_CFG_PK2PK, mask: BITM_CT_CT_STAGE6_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE6_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE6_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE6_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE6_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE6_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE6_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE6_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE6_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE6_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE6_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE6_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE6_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE6_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE6_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE6_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE6_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE6_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE6_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE6_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE6_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE6_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE7_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE7_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE7_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE7_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE7_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE7_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE7_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE7_CFG_PK2PK, mask: BITM_CT_CT_STAGE7_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE7_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE7_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE7_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE7_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE7_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE7_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE7_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE7_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE7_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE7_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE7_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE7_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE7_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE7_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE7_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE7_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE7_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE7_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE7_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE7_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE7_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE8_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE8_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE8_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE8_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE8_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE8_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE8_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE8_CFG_PK2PK, mask: BITM_CT_CT_STAGE8_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE8_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE8_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE8_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE8_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE8_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE8_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE8_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE8_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE8_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE8_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE8_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE8_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE8_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE8_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE8_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE8_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE8_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE8_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE8_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE8_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE8_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE9_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE9_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE9_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE9_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE9_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE9_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE9_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE9_CFG_PK2PK, mask: BITM_CT_CT_STAGE9_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE9_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE9_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE9_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE9_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE9_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE9_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE9_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE9_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE9_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE9_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE9_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE9_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE9_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE9_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE9_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE9_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE9_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE9_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE9_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE9_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE9_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE10_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE10_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE10_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE10_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE10_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE10_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE10_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE10_CFG_PK2PK, mask: BITM_CT_CT_STAGE10_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE10_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE10_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE10_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE10_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE10_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE10_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE10_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE10_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE10_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE10_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE10_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE10_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE10_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE10_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE10_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE10_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE10_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE10_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE10_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE10_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE10_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE11_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE11_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE11_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE11_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE11_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE11_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE11_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE11_CFG_PK2PK, mask: BITM_CT_CT_STAGE11_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE11_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE11_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE11_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE11_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE11_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE11_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE11_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE11_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE11_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE11_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE11_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE11_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE11_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE11_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE11_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE11_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE11_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE11_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE11_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE11_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE11_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE12_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE12_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE12_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE12_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE12_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE12_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE12_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE12_CFG_PK2PK, mask: BITM_CT_CT_STAGE12_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE12_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE12_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE12_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE12_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE12_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE12_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE12_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE12_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE12_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE12_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE12_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE12_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE12_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE12_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE12_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE12_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE12_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE12_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE12_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE12_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE12_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE13_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE13_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE13_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE13_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE13_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE13_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE13_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE13_CFG_PK2PK, mask: BITM_CT_CT_STAGE13_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE13_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE13_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE13_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE13_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE13_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE13_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE13_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE13_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE13_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE13_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE13_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE13_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE13_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE13_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE13_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE13_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE13_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE13_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE13_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE13_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE13_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE14_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE14_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE14_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE14_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE14_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE14_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE14_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE14_CFG_PK2PK, mask: BITM_CT_CT_STAGE14_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE14_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE14_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE14_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE14_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE14_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE14_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE14_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE14_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE14_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE14_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE14_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE14_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE14_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE14_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE14_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE14_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE14_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE14_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE14_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE14_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE14_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE15_CFG", name: "SUB_DAC", position: BITP_CT_CT_STAGE15_CFG_SUB_DAC, mask: BITM_CT_CT_STAGE15_CFG_SUB_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE15_CFG", name: "MAIN_DAC", position: BITP_CT_CT_STAGE15_CFG_MAIN_DAC, mask: BITM_CT_CT_STAGE15_CFG_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE15_CFG", name: "PK2PK", position: BITP_CT_CT_STAGE15_CFG_PK2PK, mask: BITM_CT_CT_STAGE15_CFG_PK2PK as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE15_CFG", name: "EN_MAIN_DAC", position: BITP_CT_CT_STAGE15_CFG_EN_MAIN_DAC, mask: BITM_CT_CT_STAGE15_CFG_EN_MAIN_DAC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE15_CFG", name: "C2V_IP_RANGE", position: BITP_CT_CT_STAGE15_CFG_C2V_IP_RANGE, mask: BITM_CT_CT_STAGE15_CFG_C2V_IP_RANGE as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE15_CFG", name: "PGA_GAIN", position: BITP_CT_CT_STAGE15_CFG_PGA_GAIN, mask: BITM_CT_CT_STAGE15_CFG_PGA_GAIN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE15_CFG", name: "NOISE_REDUCTION_EN", position: BITP_CT_CT_STAGE15_CFG_NOISE_REDUCTION_EN, mask: BITM_CT_CT_STAGE15_CFG_NOISE_REDUCTION_EN as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE15_CFG", name: "PGA_BYPASS", position: BITP_CT_CT_STAGE15_CFG_PGA_BYPASS, mask: BITM_CT_CT_STAGE15_CFG_PGA_BYPASS as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE15_CFG", name: "CIN_CON_POS_CDC", position: BITP_CT_CT_STAGE15_CFG_CIN_CON_POS_CDC, mask: BITM_CT_CT_STAGE15_CFG_CIN_CON_POS_CDC as u32, width: Width::Word },
    Field { group: "CT_CT_STAGE15_CFG", name: "CIN_CON_POS_CDC_EN", position: BITP_CT_CT_STAGE15_CFG_CIN_CON_POS_CDC_EN, mask: BITM_CT_CT_STAGE15_CFG_CIN_CON_POS_CDC_EN as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG0", name: "SENSOR_THRESHOLD0", position: BITP_CT_CT_SENSOR_THR_CFG0_SENSOR_THRESHOLD0, mask: BITM_CT_CT_SENSOR_THR_CFG0_SENSOR_THRESHOLD0 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG0", name: "SENSOR_THRESHOLD1", position: BITP_CT_CT_SENSOR_THR_CFG0_SENSOR_THRESHOLD1, mask: BITM_CT_CT_SENSOR_THR_CFG0_SENSOR_THRESHOLD1 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG1", name: "SENSOR_THRESHOLD2", position: BITP_CT_CT_SENSOR_THR_CFG1_SENSOR_THRESHOLD2, mask: BITM_CT_CT_SENSOR_THR_CFG1_SENSOR_THRESHOLD2 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG1", name: "SENSOR_THRESHOLD3", position: BITP_CT_CT_SENSOR_THR_CFG1_SENSOR_THRESHOLD3, mask: BITM_CT_CT_SENSOR_THR_CFG1_SENSOR_THRESHOLD3 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG2", name: "SENSOR_THRESHOLD4", position: BITP_CT_CT_SENSOR_THR_CFG2_SENSOR_THRESHOLD4, mask: BITM_CT_CT_SENSOR_THR_CFG2_SENSOR_THRESHOLD4 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG2", name: "SENSOR_THRESHOLD5", position: BITP_CT_CT_SENSOR_THR_CFG2_SENSOR_THRESHOLD5, mask: BITM_CT_CT_SENSOR_THR_CFG2_SENSOR_THRESHOLD5 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG3", name: "SENSOR_THRESHOLD6", position: BITP_CT_CT_SENSOR_THR_CFG3_SENSOR_THRESHOLD6, mask: BITM_CT_CT_SENSOR_THR_CFG3_SENSOR_THRESHOLD6 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG3", name: "SENSOR_THRESHOLD7", position: BITP_CT_CT_SENSOR_THR_CFG3_SENSOR_THRESHOLD7, mask: BITM_CT_CT_SENSOR_THR_CFG3_SENSOR_THRESHOLD7 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG4", name: "SENSOR_THRESHOLD8", position: BITP_CT_CT_SENSOR_THR_CFG4_SENSOR_THRESHOLD8, mask: BITM_CT_CT_SENSOR_THR_CFG4_SENSOR_THRESHOLD8 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG4", name: "SENSOR_THRESHOLD9", position: BITP_CT_CT_SENSOR_THR_CFG4_SENSOR_THRESHOLD9, mask: BITM_CT_CT_SENSOR_THR_CFG4_SENSOR_THRESHOLD9 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG5", name: "SENSOR_THRESHOLD10", position: BITP_CT_CT_SENSOR_THR_CFG5_SENSOR_THRESHOLD10, mask: BITM_CT_CT_SENSOR_THR_CFG5_SENSOR_THRESHOLD10 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG5", name: "SENSOR_THRESHOLD11", position: BITP_CT_CT_SENSOR_THR_CFG5_SENSOR_THRESHOLD11, mask: BITM_CT_CT_SENSOR_THR_CFG5_SENSOR_THRESHOLD11 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG6", name: "SENSOR_THRESHOLD12", position: BITP_CT_CT_SENSOR_THR_CFG6_SENSOR_THRESHOLD12, mask: BITM_CT_CT_SENSOR_THR_CFG6_SENSOR_THRESHOLD12 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG6", name: "SENSOR_THRESHOLD13", position: BITP_CT_CT_SENSOR_THR_CFG6_SENSOR_THRESHOLD13, mask: BITM_CT_CT_SENSOR_THR_CFG6_SENSOR_THRESHOLD13 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG7", name: "SENSOR_THRESHOLD14", position: BITP_CT_CT_SENSOR_THR_CFG7_SENSOR_THRESHOLD14, mask: BITM_CT_CT_SENSOR_THR_CFG7_SENSOR_THRESHOLD14 as u32, width: Width::Word },
    Field { group: "CT_CT_SENSOR_THR_CFG7", name: "SENSOR_THRESHOLD15", position: BITP_CT_CT_SENSOR_THR_CFG7_SENSOR_THRESHOLD15, mask: BITM_CT_CT_SENSOR_THR_CFG7_SENSOR_THRESHOLD15 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES0", name: "CDC_RES0", position: BITP_CT_CT_CDC_RES0_CDC_RES0, mask: BITM_CT_CT_CDC_RES0_CDC_RES0 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES0", name: "CDC_RES1", position: BITP_CT_CT_CDC_RES0_CDC_RES1, mask: BITM_CT_CT_CDC_RES0_CDC_RES1 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES1", name: "CDC_RES2", position: BITP_CT_CT_CDC_RES1_CDC_RES2, mask: BITM_CT_CT_CDC_RES1_CDC_RES2 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES1", name: "CDC_RES3", position: BITP_CT_CT_CDC_RES1_CDC_RES3, mask: BITM_CT_CT_CDC_RES1_CDC_RES3 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES2", name: "CDC_RES4", position: BITP_CT_CT_CDC_RES2_CDC_RES4, mask: BITM_CT_CT_CDC_RES2_CDC_RES4 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES2", name: "CDC_RES5", position: BITP_CT_CT_CDC_RES2_CDC_RES5, mask: BITM_CT_CT_CDC_RES2_CDC_RES5 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES3", name: "CDC_RES6", position: BITP_CT_CT_CDC_RES3_CDC_RES6, mask: BITM_CT_CT_CDC_RES3_CDC_RES6 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES3", name: "CDC_RES7", position: BITP_CT_CT_CDC_RES3_CDC_RES7, mask: BITM_CT_CT_CDC_RES3_CDC_RES7 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES4", name: "CDC_RES8", position: BITP_CT_CT_CDC_RES4_CDC_RES8, mask: BITM_CT_CT_CDC_RES4_CDC_RES8 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES4", name: "CDC_RES9", position: BITP_CT_CT_CDC_RES4_CDC_RES9, mask: BITM_CT_CT_CDC_RES4_CDC_RES9 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES5", name: "CDC_RES10", position: BITP_CT_CT_CDC_RES5_CDC_RES10, mask: BITM_CT_CT_CDC_RES5_CDC_RES10 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES5", name: "CDC_RES11", position: BITP_CT_CT_CDC_RES5_CDC_RES11, mask: BITM_CT_CT_CDC_RES5_CDC_RES11 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES6", name: "CDC_RES12", position: BITP_CT_CT_CDC_RES6_CDC_RES12, mask: BITM_CT_CT_CDC_RES6_CDC_RES12 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES6", name: "CDC_RES13", position: BITP_CT_CT_CDC_RES6_CDC_RES13, mask: BITM_CT_CT_CDC_RES6_CDC_RES13 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES7", name: "CDC_RES14", position: BITP_CT_CT_CDC_RES7_CDC_RES14, mask: BITM_CT_CT_CDC_RES7_CDC_RES14 as u32, width: Width::Word },
    Field { group: "CT_CT_CDC_RES7", name: "CDC_RES15", position: BITP_CT_CT_CDC_RES7_CDC_RES15, mask: BITM_CT_CT_CDC_RES7_CDC_RES15 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE0", name: "BASELINE0", position: BITP_CT_CT_BASELINE0_BASELINE0, mask: BITM_CT_CT_BASELINE0_BASELINE0 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE0", name: "CDC_AVG0", position: BITP_CT_CT_BASELINE0_CDC_AVG0, mask: BITM_CT_CT_BASELINE0_CDC_AVG0 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE1", name: "BASELINE1", position: BITP_CT_CT_BASELINE1_BASELINE1, mask: BITM_CT_CT_BASELINE1_BASELINE1 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE1", name: "CDC_AVG1", position: BITP_CT_CT_BASELINE1_CDC_AVG1, mask: BITM_CT_CT_BASELINE1_CDC_AVG1 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE2", name: "BASELINE2", position: BITP_CT_CT_BASELINE2_BASELINE2, mask: BITM_CT_CT_BASELINE2_BASELINE2 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE2", name: "CDC_AVG2", position: BITP_CT_CT_BASELINE2_CDC_AVG2, mask: BITM_CT_CT_BASELINE2_CDC_AVG2 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE3", name: "BASELINE3", position: BITP_CT_CT_BASELINE3_BASELINE3, mask: BITM_CT_CT_BASELINE3_BASELINE3 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE3", name: "CDC_AVG3", position: BITP_CT_CT_BASELINE3_CDC_AVG3, mask: BITM_CT_CT_BASELINE3_CDC_AVG3 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE4", name: "BASELINE4", position: BITP_CT_CT_BASELINE4_BASELINE4, mask: BITM_CT_CT_BASELINE4_BASELINE4 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE4", name: "CDC_AVG4", position: BITP_CT_CT_BASELINE4_CDC_AVG4, mask: BITM_CT_CT_BASELINE4_CDC_AVG4 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE5", name: "BASELINE5", position: BITP_CT_CT_BASELINE5_BASELINE5, mask: BITM_CT_CT_BASELINE5_BASELINE5 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE5", name: "CDC_AVG5", position: BITP_CT_CT_BASELINE5_CDC_AVG5, mask: BITM_CT_CT_BASELINE5_CDC_AVG5 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE6", name: "BASELINE6", position: BITP_CT_CT_BASELINE6_BASELINE6, mask: BITM_CT_CT_BASELINE6_BASELINE6 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE6", name: "CDC_AVG6", position: BITP_CT_CT_BASELINE6_CDC_AVG6, mask: BITM_CT_CT_BASELINE6_CDC_AVG6 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE7", name: "BASELINE7", position: BITP_CT_CT_BASELINE7_BASELINE7, mask: BITM_CT_CT_BASELINE7_BASELINE7 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE7", name: "CDC_AVG7", position: BITP_CT_CT_BASELINE7_CDC_AVG7, mask: BITM_CT_CT_BASELINE7_CDC_AVG7 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE8", name: "BASELINE8", position: BITP_CT_CT_BASELINE8_BASELINE8, mask: BITM_CT_CT_BASELINE8_BASELINE8 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE8", name: "CDC_AVG8", position: BITP_CT_CT_BASELINE8_CDC_AVG8, mask: BITM_CT_CT_BASELINE8_CDC_AVG8 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE9", name: "BASELINE9", position: BITP_CT_CT_BASELINE9_BASELINE9, mask: BITM_CT_CT_BASELINE9_BASELINE9 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE9", name: "CDC_AVG9", position: BITP_CT_CT_BASELINE9_CDC_AVG9, mask: BITM_CT_CT_BASELINE9_CDC_AVG9 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE10", name: "BASELINE10", position: BITP_CT_CT_BASELINE10_BASELINE10, mask: BITM_CT_CT_BASELINE10_BASELINE10 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE10", name: "CDC_AVG10", position: BITP_CT_CT_BASELINE10_CDC_AVG10, mask: BITM_CT_CT_BASELINE10_CDC_AVG10 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE11", name: "BASELINE11", position: BITP_CT_CT_BASELINE11_BASELINE11, mask: BITM_CT_CT_BASELINE11_BASELINE11 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE11", name: "CDC_AVG11", position: BITP_CT_CT_BASELINE11_CDC_AVG11, mask: BITM_CT_CT_BASELINE11_CDC_AVG11 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE12", name: "BASELINE12", position: BITP_CT_CT_BASELINE12_BASELINE12, mask: BITM_CT_CT_BASELINE12_BASELINE12 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE12", name: "CDC_AVG12", position: BITP_CT_CT_BASELINE12_CDC_AVG12, mask: BITM_CT_CT_BASELINE12_CDC_AVG12 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE13", name: "BASELINE13", position: BITP_CT_CT_BASELINE13_BASELINE13, mask: BITM_CT_CT_BASELINE13_BASELINE13 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE13", name: "CDC_AVG13", position: BITP_CT_CT_BASELINE13_CDC_AVG13, mask: BITM_CT_CT_BASELINE13_CDC_AVG13 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE14", name: "BASELINE14", position: BITP_CT_CT_BASELINE14_BASELINE14, mask: BITM_CT_CT_BASELINE14_BASELINE14 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE14", name: "CDC_AVG14", position: BITP_CT_CT_BASELINE14_CDC_AVG14, mask: BITM_CT_CT_BASELINE14_CDC_AVG14 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE15", name: "BASELINE15", position: BITP_CT_CT_BASELINE15_BASELINE15, mask: BITM_CT_CT_BASELINE15_BASELINE15 as u32, width: Width::Word },
    Field { group: "CT_CT_BASELINE15", name: "CDC_AVG15", position: BITP_CT_CT_BASELINE15_CDC_AVG15, mask: BITM_CT_CT_BASELINE15_CDC_AVG15 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK0", name: "PK2PK0", position: BITP_CT_CT_PK2PK0_PK2PK0, mask: BITM_CT_CT_PK2PK0_PK2PK0 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK0", name: "PK2PK1", position: BITP_CT_CT_PK2PK0_PK2PK1, mask: BITM_CT_CT_PK2PK0_PK2PK1 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK1", name: "PK2PK2", position: BITP_CT_CT_PK2PK1_PK2PK2, mask: BITM_CT_CT_PK2PK1_PK2PK2 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK1", name: "PK2PK3", position: BITP_CT_CT_PK2PK1_PK2PK3, mask: BITM_CT_CT_PK2PK1_PK2PK3 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK2", name: "PK2PK4", position: BITP_CT_CT_PK2PK2_PK2PK4, mask: BITM_CT_CT_PK2PK2_PK2PK4 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK2", name: "PK2PK5", position: BITP_CT_CT_PK2PK2_PK2PK5, mask: BITM_CT_CT_PK2PK2_PK2PK5 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK3", name: "PK2PK6", position: BITP_CT_CT_PK2PK3_PK2PK6, mask: BITM_CT_CT_PK2PK3_PK2PK6 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK3", name: "PK2PK7", position: BITP_CT_CT_PK2PK3_PK2PK7, mask: BITM_CT_CT_PK2PK3_PK2PK7 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK4", name: "PK2PK8", position: BITP_CT_CT_PK2PK4_PK2PK8, mask: BITM_CT_CT_PK2PK4_PK2PK8 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK4", name: "PK2PK9", position: BITP_CT_CT_PK2PK4_PK2PK9, mask: BITM_CT_CT_PK2PK4_PK2PK9 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK5", name: "PK2PK10", position: BITP_CT_CT_PK2PK5_PK2PK10, mask: BITM_CT_CT_PK2PK5_PK2PK10 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK5", name: "PK2PK11", position: BITP_CT_CT_PK2PK5_PK2PK11, mask: BITM_CT_CT_PK2PK5_PK2PK11 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK6", name: "PK2PK12", position: BITP_CT_CT_PK2PK6_PK2PK12, mask: BITM_CT_CT_PK2PK6_PK2PK12 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK6", name: "PK2PK13", position: BITP_CT_CT_PK2PK6_PK2PK13, mask: BITM_CT_CT_PK2PK6_PK2PK13 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK7", name: "PK2PK14", position: BITP_CT_CT_PK2PK7_PK2PK14, mask: BITM_CT_CT_PK2PK7_PK2PK14 as u32, width: Width::Word },
    Field { group: "CT_CT_PK2PK7", name: "PK2PK15", position: BITP_CT_CT_PK2PK7_PK2PK15, mask: BITM_CT_CT_PK2PK7_PK2PK15 as u32, width: Width::Word },
    Field { group: "NVIC_INTNUM", name: "INTNUM", position: BITP_NVIC_INTNUM_INTNUM, mask: BITM_NVIC_INTNUM_INTNUM as u32, width: Width::Word },
    Field { group: "NVIC_STKSTA", name: "ENABLE", position: BITP_NVIC_STKSTA_ENABLE, mask: BITM_NVIC_STKSTA_ENABLE as u32, width: Width::Word },
    Field { group: "NVIC_STKSTA", name: "TICKINT", position: BITP_NVIC_STKSTA_TICKINT, mask: BITM_NVIC_STKSTA_TICKINT as u32, width: Width::Word },
    Field { group: "NVIC_STKSTA", name: "CLKSOURCE", position: BITP_NVIC_STKSTA_CLKSOURCE, mask: BITM_NVIC_STKSTA_CLKSOURCE as u32, width: Width::Word },
    Field { group: "NVIC_STKSTA", name: "COUNTFLAG", position: BITP_NVIC_STKSTA_COUNTFLAG, mask: BITM_NVIC_STKSTA_COUNTFLAG as u32, width: Width::Word },
    Field { group: "NVIC_STKLD", name: "RELOAD", position: BITP_NVIC_STKLD_RELOAD, mask: BITM_NVIC_STKLD_RELOAD as u32, width: Width::Word },
    Field { group: "NVIC_STKVAL", name: "CURRENT", position: BITP_NVIC_STKVAL_CURRENT, mask: BITM_NVIC_STKVAL_CURRENT as u32, width: Width::Word },
    Field { group: "NVIC_STKCAL", name: "TENMS", position: BITP_NVIC_STKCAL_TENMS, mask: BITM_NVIC_STKCAL_TENMS as u32, width: Width::Word },
    Field { group: "NVIC_STKCAL", name: "SKEW", position: BITP_NVIC_STKCAL_SKEW, mask: BITM_NVIC_STKCAL_SKEW as u32, width: Width::Word },
    Field { group: "NVIC_STKCAL", name: "NOREF", position: BITP_NVIC_STKCAL_NOREF, mask: BITM_NVIC_STKCAL_NOREF as u32, width: Width::Word },
    Field { group: "NVIC_INTSTA", name: "VECTACTIVE", position: BITP_NVIC_INTSTA_VECTACTIVE, mask: BITM_NVIC_INTSTA_VECTACTIVE as u32, width: Width::Word },
    Field { group: "NVIC_INTSTA", name: "RETTOBASE", position: BITP_NVIC_INTSTA_RETTOBASE, mask: BITM_NVIC_INTSTA_RETTOBASE as u32, width: Width::Word },
    Field { group: "NVIC_INTSTA", name: "VECTPENDING", position: BITP_NVIC_INTSTA_VECTPENDING, mask: BITM_NVIC_INTSTA_VECTPENDING as u32, width: Width::Word },
    Field { group: "NVIC_INTSTA", name: "ISRPENDING", position: BITP_NVIC_INTSTA_ISRPENDING, mask: BITM_NVIC_INTSTA_ISRPENDING as u32, width: Width::Word },
    Field { group: "NVIC_INTSTA", name: "PENDSTCLR", position: BITP_NVIC_INTSTA_PENDSTCLR, mask: BITM_NVIC_INTSTA_PENDSTCLR as u32, width: Width::Word },
    Field { group: "NVIC_INTSTA", name: "PENDSTSET", position: BITP_NVIC_INTSTA_PENDSTSET, mask: BITM_NVIC_INTSTA_PENDSTSET as u32, width: Width::Word },
    Field { group: "NVIC_INTSTA", name: "PENDSVCLR", position: BITP_NVIC_INTSTA_PENDSVCLR, mask: BITM_NVIC_INTSTA_PENDSVCLR as u32, width: Width::Word },
    Field { group: "NVIC_INTSTA", name: "PENDSVSET", position: BITP_NVIC_INTSTA_PENDSVSET, mask: BITM_NVIC_INTSTA_PENDSVSET as u32, width: Width::Word },
    Field { group: "NVIC_INTSTA", name: "NMIPENDSET", position: BITP_NVIC_INTSTA_NMIPENDSET, mask: BITM_NVIC_INTSTA_NMIPENDSET as u32, width: Width::Word },
    Field { group: "NVIC_INTVEC", name: "TBLOFF", position: BITP_NVIC_INTVEC_TBLOFF, mask: BITM_NVIC_INTVEC_TBLOFF as u32, width: Width::Word },
    Field { group: "NVIC_INTVEC", name: "TBLBASE", position: BITP_NVIC_INTVEC_TBLBASE, mask: BITM_NVIC_INTVEC_TBLBASE as u32, width: Width::Word },
    Field { group: "NVIC_INTAIRC", name: "VECTRESET", position: BITP_NVIC_INTAIRC_VECTRESET, mask: BITM_NVIC_INTAIRC_VECTRESET as u32, width: Width::Word },
    Field { group: "NVIC_INTAIRC", name: "VECTCLRACTIVE", position: BITP_NVIC_INTAIRC_VECTCLRACTIVE, mask: BITM_NVIC_INTAIRC_VECTCLRACTIVE as u32, width: Width::Word },
    Field { group: "NVIC_INTAIRC", name: "SYSRESETREQ", position: BITP_NVIC_INTAIRC_SYSRESETREQ, mask: BITM_NVIC_INTAIRC_SYSRESETREQ as u32, width: Width::Word },
    Field { group: "NVIC_INTAIRC", name: "PRIGROUP", position: BITP_NVIC_INTAIRC_PRIGROUP, mask: BITM_NVIC_INTAIRC_PRIGROUP as u32, width: Width::Word },
    Field { group: "NVIC_INTAIRC", name: "ENDIANNESS", position: BITP_NVIC_INTAIRC_ENDIANNESS, mask: BITM_NVIC_INTAIRC_ENDIANNESS as u32, width: Width::Word },
    Field { group: "NVIC_INTAIRC", name: "VECTKEY", position: BITP_NVIC_INTAIRC_VECTKEY, mask: BITM_NVIC_INTAIRC_VECTKEY as u32, width: Width::Word },
    Field { group: "NVIC_INTCON0", name: "SLEEPONEXIT", position: BITP_NVIC_INTCON0_SLEEPONEXIT, mask: BITM_NVIC_INTCON0_SLEEPONEXIT as u32, width: Width::HalfWord },
    Field { group: "NVIC_INTCON0", name: "SLEEPDEEP", position: BITP_NVIC_INTCON0_SLEEPDEEP, mask: BITM_NVIC_INTCON0_SLEEPDEEP as u32, width: Width::HalfWord },
    Field { group: "NVIC_INTCON0", name: "SEVONPEND", position: BITP_NVIC_INTCON0_SEVONPEND, mask: BITM_NVIC_INTCON0_SEVONPEND as u32, width: Width::HalfWord },
    Field { group: "NVIC_INTCON1", name: "NONBASETHRDENA", position: BITP_NVIC_INTCON1_NONBASETHRDENA, mask: BITM_NVIC_INTCON1_NONBASETHRDENA as u32, width: Width::Word },
    Field { group: "NVIC_INTCON1", name: "USERSETMPEND", position: BITP_NVIC_INTCON1_USERSETMPEND, mask: BITM_NVIC_INTCON1_USERSETMPEND as u32, width: Width::Word },
    Field { group: "NVIC_INTCON1", name: "UNALIGN_TRP", position: BITP_NVIC_INTCON1_UNALIGN_TRP, mask: BITM_NVIC_INTCON1_UNALIGN_TRP as u32, width: Width::Word },
    Field { group: "NVIC_INTCON1", name: "DIV_0_TRP", position: BITP_NVIC_INTCON1_DIV_0_TRP, mask: BITM_NVIC_INTCON1_DIV_0_TRP as u32, width: Width::Word },
    Field { group: "NVIC_INTCON1", name: "BFHFNMIGN", position: BITP_NVIC_INTCON1_BFHFNMIGN, mask: BITM_NVIC_INTCON1_BFHFNMIGN as u32, width: Width::Word },
    Field { group: "NVIC_INTCON1", name: "STKALIGN", position: BITP_NVIC_INTCON1_STKALIGN, mask: BITM_NVIC_INTCON1_STKALIGN as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "MEMFAULTACT", position: BITP_NVIC_INTSHCSR_MEMFAULTACT, mask: BITM_NVIC_INTSHCSR_MEMFAULTACT as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "BUSFAULTACT", position: BITP_NVIC_INTSHCSR_BUSFAULTACT, mask: BITM_NVIC_INTSHCSR_BUSFAULTACT as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "USGFAULTACT", position: BITP_NVIC_INTSHCSR_USGFAULTACT, mask: BITM_NVIC_INTSHCSR_USGFAULTACT as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "SVCALLACT", position: BITP_NVIC_INTSHCSR_SVCALLACT, mask: BITM_NVIC_INTSHCSR_SVCALLACT as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "MONITORACT", position: BITP_NVIC_INTSHCSR_MONITORACT, mask: BITM_NVIC_INTSHCSR_MONITORACT as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "PENDSVACT", position: BITP_NVIC_INTSHCSR_PENDSVACT, mask: BITM_NVIC_INTSHCSR_PENDSVACT as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "SYSTICKACT", position: BITP_NVIC_INTSHCSR_SYSTICKACT, mask: BITM_NVIC_INTSHCSR_SYSTICKACT as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "USGFAULTPENDED", position: BITP_NVIC_INTSHCSR_USGFAULTPENDED, mask: BITM_NVIC_INTSHCSR_USGFAULTPENDED as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "MEMFAULTPENDED", position: BITP_NVIC_INTSHCSR_MEMFAULTPENDED, mask: BITM_NVIC_INTSHCSR_MEMFAULTPENDED as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "BUSFAULTPENDED", position: BITP_NVIC_INTSHCSR_BUSFAULTPENDED, mask: BITM_NVIC_INTSHCSR_BUSFAULTPENDED as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "SVCALLPENDED", position: BITP_NVIC_INTSHCSR_SVCALLPENDED, mask: BITM_NVIC_INTSHCSR_SVCALLPENDED as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "MEMFAULTENA", position: BITP_NVIC_INTSHCSR_MEMFAULTENA, mask: BITM_NVIC_INTSHCSR_MEMFAULTENA as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "BUSFAULTENA", position: BITP_NVIC_INTSHCSR_BUSFAULTENA, mask: BITM_NVIC_INTSHCSR_BUSFAULTENA as u32, width: Width::Word },
    Field { group: "NVIC_INTSHCSR", name: "USGFAULTENA", position: BITP_NVIC_INTSHCSR_USGFAULTENA, mask: BITM_NVIC_INTSHCSR_USGFAULTENA as u32, width: Width::Word },
    Field { group: "NVIC_INTCFSR", name: "MMFSR", position: BITP_NVIC_INTCFSR_MMFSR, mask: BITM_NVIC_INTCFSR_MMFSR as u32, width: Width::Word },
    Field { group: "NVIC_INTCFSR", name: "BFSR", position: BITP_NVIC_INTCFSR_BFSR, mask: BITM_NVIC_INTCFSR_BFSR as u32, width: Width::Word },
    Field { group: "NVIC_INTCFSR", name: "UFSR", position: BITP_NVIC_INTCFSR_UFSR, mask: BITM_NVIC_INTCFSR_UFSR as u32, width: Width::Word },
    Field { group: "NVIC_INTHFSR", name: "VECTTBL", position: BITP_NVIC_INTHFSR_VECTTBL, mask: BITM_NVIC_INTHFSR_VECTTBL as u32, width: Width::Word },
    Field { group: "NVIC_INTHFSR", name: "FORCED", position: BITP_NVIC_INTHFSR_FORCED, mask: BITM_NVIC_INTHFSR_FORCED as u32, width: Width::Word },
    Field { group: "NVIC_INTHFSR", name: "DEBUGEVT", position: BITP_NVIC_INTHFSR_DEBUGEVT, mask: BITM_NVIC_INTHFSR_DEBUGEVT as u32, width: Width::Word },
    Field { group: "NVIC_INTTRGI", name: "INTID", position: BITP_NVIC_INTTRGI_INTID, mask: BITM_NVIC_INTTRGI_INTID as u32, width: Width::Word },
    Field { group: "USB_FADDR", name: "VALUE", position: BITP_USB_FADDR_VALUE, mask: BITM_USB_FADDR_VALUE as u32, width: Width::Byte },
    Field { group: "USB_POWER", name: "ISOUPDT", position: BITP_USB_POWER_ISOUPDT, mask: BITM_USB_POWER_ISOUPDT as u32, width: Width::Byte },
    Field { group: "USB_POWER", name: "SOFTCONN", position: BITP_USB_POWER_SOFTCONN, mask: BITM_USB_POWER_SOFTCONN as u32, width: Width::Byte },
    Field { group: "USB_POWER", name: "HSEN", position: BITP_USB_POWER_HSEN, mask: BITM_USB_POWER_HSEN as u32, width: Width::Byte },
    Field { group: "USB_POWER", name: "HSMODE", position: BITP_USB_POWER_HSMODE, mask: BITM_USB_POWER_HSMODE as u32, width: Width::Byte },
    Field { group: "USB_POWER", name: "RESET", position: BITP_USB_POWER_RESET, mask: BITM_USB_POWER_RESET as u32, width: Width::Byte },
    Field { group: "USB_POWER", name: "RESUME", position: BITP_USB_POWER_RESUME, mask: BITM_USB_POWER_RESUME as u32, width: Width::Byte },
    Field { group: "USB_POWER", name: "SUSPEND", position: BITP_USB_POWER_SUSPEND, mask: BITM_USB_POWER_SUSPEND as u32, width: Width::Byte },
    Field { group: "USB_POWER", name: "SUSEN", position: BITP_USB_POWER_SUSEN, mask: BITM_USB_POWER_SUSEN as u32, width: Width::Byte },
    Field { group: "USB_INTRTX", name: "EP11", position: BITP_USB_INTRTX_EP11, mask: BITM_USB_INTRTX_EP11 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTX", name: "EP10", position: BITP_USB_INTRTX_EP10, mask: BITM_USB_INTRTX_EP10 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTX", name: "EP9", position: BITP_USB_INTRTX_EP9, mask: BITM_USB_INTRTX_EP9 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTX", name: "EP8", position: BITP_USB_INTRTX_EP8, mask: BITM_USB_INTRTX_EP8 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTX", name: "EP7", position: BITP_USB_INTRTX_EP7, mask: BITM_USB_INTRTX_EP7 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTX", name: "EP6", position: BITP_USB_INTRTX_EP6, mask: BITM_USB_INTRTX_EP6 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTX", name: "EP5", position: BITP_USB_INTRTX_EP5, mask: BITM_USB_INTRTX_EP5 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTX", name: "EP4", position: BITP_USB_INTRTX_EP4, mask: BITM_USB_INTRTX_EP4 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTX", name: "EP3", position: BITP_USB_INTRTX_EP3, mask: BITM_USB_INTRTX_EP3 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTX", name: "EP2", position: BITP_USB_INTRTX_EP2, mask: BITM_USB_INTRTX_EP2 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTX", name: "EP1", position: BITP_USB_INTRTX_EP1, mask: BITM_USB_INTRTX_EP1 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTX", name: "EP0", position: BITP_USB_INTRTX_EP0, mask: BITM_USB_INTRTX_EP0 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRX", name: "EP11", position: BITP_USB_INTRRX_EP11, mask: BITM_USB_INTRRX_EP11 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRX", name: "EP10", position: BITP_USB_INTRRX_EP10, mask: BITM_USB_INTRRX_EP10 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRX", name: "EP9", position: BITP_USB_INTRRX_EP9, mask: BITM_USB_INTRRX_EP9 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRX", name: "EP8", position: BITP_USB_INTRRX_EP8, mask: BITM_USB_INTRRX_EP8 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRX", name: "EP7", position: BITP_USB_INTRRX_EP7, mask: BITM_USB_INTRRX_EP7 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRX", name: "EP6", position: BITP_USB_INTRRX_EP6, mask: BITM_USB_INTRRX_EP6 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRX", name: "EP5", position: BITP_USB_INTRRX_EP5, mask: BITM_USB_INTRRX_EP5 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRX", name: "EP4", position: BITP_USB_INTRRX_EP4, mask: BITM_USB_INTRRX_EP4 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRX", name: "EP3", position: BITP_USB_INTRRX_EP3, mask: BITM_USB_INTRRX_EP3 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRX", name: "EP2", position: BITP_USB_INTRRX_EP2, mask: BITM_USB_INTRRX_EP2 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRX", name: "EP1", position: BITP_USB_INTRRX_EP1, mask: BITM_USB_INTRRX_EP1 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP11", position: BITP_USB_INTRTXE_EP11, mask: BITM_USB_INTRTXE_EP11 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP10", position: BITP_USB_INTRTXE_EP10, mask: BITM_USB_INTRTXE_EP10 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP9", position: BITP_USB_INTRTXE_EP9, mask: BITM_USB_INTRTXE_EP9 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP8", position: BITP_USB_INTRTXE_EP8, mask: BITM_USB_INTRTXE_EP8 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP7", position: BITP_USB_INTRTXE_EP7, mask: BITM_USB_INTRTXE_EP7 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP6", position: BITP_USB_INTRTXE_EP6, mask: BITM_USB_INTRTXE_EP6 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP5", position: BITP_USB_INTRTXE_EP5, mask: BITM_USB_INTRTXE_EP5 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP4", position: BITP_USB_INTRTXE_EP4, mask: BITM_USB_INTRTXE_EP4 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP3", position: BITP_USB_INTRTXE_EP3, mask: BITM_USB_INTRTXE_EP3 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP2", position: BITP_USB_INTRTXE_EP2, mask: BITM_USB_INTRTXE_EP2 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP1", position: BITP_USB_INTRTXE_EP1, mask: BITM_USB_INTRTXE_EP1 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRTXE", name: "EP0", position: BITP_USB_INTRTXE_EP0, mask: BITM_USB_INTRTXE_EP0 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRXE", name: "EP11", position: BITP_USB_INTRRXE_EP11, mask: BITM_USB_INTRRXE_EP11 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRXE", name: "EP10", position: BITP_USB_INTRRXE_EP10, mask: BITM_USB_INTRRXE_EP10 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRXE", name: "EP9", position: BITP_USB_INTRRXE_EP9, mask: BITM_USB_INTRRXE_EP9 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRXE", name: "EP8", position: BITP_USB_INTRRXE_EP8, mask: BITM_USB_INTRRXE_EP8 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRXE", name: "EP7", position: BITP_USB_INTRRXE_EP7, mask: BITM_USB_INTRRXE_EP7 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRXE", name: "EP6", position: BITP_USB_INTRRXE_EP6, mask: BITM_USB_INTRRXE_EP6 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRXE", name: "EP5", position: BITP_USB_INTRRXE_EP5, mask: BITM_USB_INTRRXE_EP5 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRXE", name: "EP4", position: BITP_USB_INTRRXE_EP4, mask: BITM_USB_INTRRXE_EP4 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRXE", name: "EP3", position: BITP_USB_INTRRXE_EP3, mask: BITM_USB_INTRRXE_EP3 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRXE", name: "EP2", position: BITP_USB_INTRRXE_EP2, mask: BITM_USB_INTRRXE_EP2 as u32, width: Width::HalfWord },
    Field { group: "USB_INTRRXE", name: "EP1", position: BITP_USB_INTRRXE_EP1, mask: BITM_USB_INTRRXE_EP1 as u32, width: Width::HalfWord },
    Field { group: "USB_IRQ", name: "VBUSERR", position: BITP_USB_IRQ_VBUSERR, mask: BITM_USB_IRQ_VBUSERR as u32, width: Width::Byte },
    Field { group: "USB_IRQ", name: "SESSREQ", position: BITP_USB_IRQ_SESSREQ, mask: BITM_USB_IRQ_SESSREQ as u32, width: Width::Byte },
    Field { group: "USB_IRQ", name: "DISCON", position: BITP_USB_IRQ_DISCON, mask: BITM_USB_IRQ_DISCON as u32, width: Width::Byte },
    Field { group: "USB_IRQ", name: "CON", position: BITP_USB_IRQ_CON, mask: BITM_USB_IRQ_CON as u32, width: Width::Byte },
    Field { group: "USB_IRQ", name: "SOF", position: BITP_USB_IRQ_SOF, mask: BITM_USB_IRQ_SOF as u32, width: Width::Byte },
    Field { group: "USB_IRQ", name: "RSTBABBLE", position: BITP_USB_IRQ_RSTBABBLE, mask: BITM_USB_IRQ_RSTBABBLE as u32, width: Width::Byte },
    Field { group: "USB_IRQ", name: "RESUME", position: BITP_USB_IRQ_RESUME, mask: BITM_USB_IRQ_RESUME as u32, width: Width::Byte },
    Field { group: "USB_IRQ", name: "SUSPEND", position: BITP_USB_IRQ_SUSPEND, mask: BITM_USB_IRQ_SUSPEND as u32, width: Width::Byte },
    Field { group: "USB_IEN", name: "VBUSERR", position: BITP_USB_IEN_VBUSERR, mask: BITM_USB_IEN_VBUSERR as u32, width: Width::Byte },
    Field { group: "USB_IEN", name: "SESSREQ", position: BITP_USB_IEN_SESSREQ, mask: BITM_USB_IEN_SESSREQ as u32, width: Width::Byte },
    Field { group: "USB_IEN", name: "DISCON", position: BITP_USB_IEN_DISCON, mask: BITM_USB_IEN_DISCON as u32, width: Width::Byte },
    Field { group: "USB_IEN", name: "CON", position: BITP_USB_IEN_CON, mask: BITM_USB_IEN_CON as u32, width: Width::Byte },
    Field { group: "USB_IEN", name: "SOF", position: BITP_USB_IEN_SOF, mask: BITM_USB_IEN_SOF as u32, width: Width::Byte },
    Field { group: "USB_IEN", name: "RSTBABBLE", position: BITP_USB_IEN_RSTBABBLE, mask: BITM_USB_IEN_RSTBABBLE as u32, width: Width::Byte },
    Field { group: "USB_IEN", name: "RESUME", position: BITP_USB_IEN_RESUME, mask: BITM_USB_IEN_RESUME as u32, width: Width::Byte },
    Field { group: "USB_IEN", name: "SUSPEND", position: BITP_USB_IEN_SUSPEND, mask: BITM_USB_IEN_SUSPEND as u32, width: Width::Byte },
    Field { group: "USB_FRAME", name: "VALUE", position: BITP_USB_FRAME_VALUE, mask: BITM_USB_FRAME_VALUE as u32, width: Width::HalfWord },
    Field { group: "USB_INDEX", name: "EP", position: BITP_USB_INDEX_EP, mask: BITM_USB_INDEX_EP as u32, width: Width::Byte },
    Field { group: "USB_TESTMODE", name: "FIFOACCESS", position: BITP_USB_TESTMODE_FIFOACCESS, mask: BITM_USB_TESTMODE_FIFOACCESS as u32, width: Width::Byte },
    Field { group: "USB_TESTMODE", name: "TESTPACKET", position: BITP_USB_TESTMODE_TESTPACKET, mask: BITM_USB_TESTMODE_TESTPACKET as u32, width: Width::Byte },
    Field { group: "USB_TESTMODE", name: "TESTK", position: BITP_USB_TESTMODE_TESTK, mask: BITM_USB_TESTMODE_TESTK as u32, width: Width::Byte },
    Field { group: "USB_TESTMODE", name: "TESTJ", position: BITP_USB_TESTMODE_TESTJ, mask: BITM_USB_TESTMODE_TESTJ as u32, width: Width::Byte },
    Field { group: "USB_TESTMODE", name: "TESTSE0NAK", position: BITP_USB_TESTMODE_TESTSE0NAK, mask: BITM_USB_TESTMODE_TESTSE0NAK as u32, width: Width::Byte },
    Field { group: "USB_EPI_TXMAXP", name: "MULTM1", position: BITP_USB_EPI_TXMAXP_MULTM1, mask: BITM_USB_EPI_TXMAXP_MULTM1 as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXMAXP", name: "MAXPAY", position: BITP_USB_EPI_TXMAXP_MAXPAY, mask: BITM_USB_EPI_TXMAXP_MAXPAY as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "AUTOSET", position: BITP_USB_EPI_TXCSR_P_AUTOSET, mask: BITM_USB_EPI_TXCSR_P_AUTOSET as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "ISO", position: BITP_USB_EPI_TXCSR_P_ISO, mask: BITM_USB_EPI_TXCSR_P_ISO as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "DMAREQEN", position: BITP_USB_EPI_TXCSR_P_DMAREQEN, mask: BITM_USB_EPI_TXCSR_P_DMAREQEN as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "FRCDATATGL", position: BITP_USB_EPI_TXCSR_P_FRCDATATGL, mask: BITM_USB_EPI_TXCSR_P_FRCDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "DMAREQMODE", position: BITP_USB_EPI_TXCSR_P_DMAREQMODE, mask: BITM_USB_EPI_TXCSR_P_DMAREQMODE as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "INCOMPTX", position: BITP_USB_EPI_TXCSR_P_INCOMPTX, mask: BITM_USB_EPI_TXCSR_P_INCOMPTX as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "CLRDATATGL", position: BITP_USB_EPI_TXCSR_P_CLRDATATGL, mask: BITM_USB_EPI_TXCSR_P_CLRDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "SENTSTALL", position: BITP_USB_EPI_TXCSR_P_SENTSTALL, mask: BITM_USB_EPI_TXCSR_P_SENTSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "SENDSTALL", position: BITP_USB_EPI_TXCSR_P_SENDSTALL, mask: BITM_USB_EPI_TXCSR_P_SENDSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "FLUSHFIFO", position: BITP_USB_EPI_TXCSR_P_FLUSHFIFO, mask: BITM_USB_EPI_TXCSR_P_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "URUNERR", position: BITP_USB_EPI_TXCSR_P_URUNERR, mask: BITM_USB_EPI_TXCSR_P_URUNERR as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "NEFIFO", position: BITP_USB_EPI_TXCSR_P_NEFIFO, mask: BITM_USB_EPI_TXCSR_P_NEFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_P", name: "TXPKTRDY", position: BITP_USB_EPI_TXCSR_P_TXPKTRDY, mask: BITM_USB_EPI_TXCSR_P_TXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "AUTOSET", position: BITP_USB_EPI_TXCSR_H_AUTOSET, mask: BITM_USB_EPI_TXCSR_H_AUTOSET as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "DMAREQEN", position: BITP_USB_EPI_TXCSR_H_DMAREQEN, mask: BITM_USB_EPI_TXCSR_H_DMAREQEN as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "FRCDATATGL", position: BITP_USB_EPI_TXCSR_H_FRCDATATGL, mask: BITM_USB_EPI_TXCSR_H_FRCDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "DMAREQMODE", position: BITP_USB_EPI_TXCSR_H_DMAREQMODE, mask: BITM_USB_EPI_TXCSR_H_DMAREQMODE as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "DATGLEN", position: BITP_USB_EPI_TXCSR_H_DATGLEN, mask: BITM_USB_EPI_TXCSR_H_DATGLEN as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "DATGL", position: BITP_USB_EPI_TXCSR_H_DATGL, mask: BITM_USB_EPI_TXCSR_H_DATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "NAKTOINCMP", position: BITP_USB_EPI_TXCSR_H_NAKTOINCMP, mask: BITM_USB_EPI_TXCSR_H_NAKTOINCMP as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "CLRDATATGL", position: BITP_USB_EPI_TXCSR_H_CLRDATATGL, mask: BITM_USB_EPI_TXCSR_H_CLRDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "RXSTALL", position: BITP_USB_EPI_TXCSR_H_RXSTALL, mask: BITM_USB_EPI_TXCSR_H_RXSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "SETUPPKT", position: BITP_USB_EPI_TXCSR_H_SETUPPKT, mask: BITM_USB_EPI_TXCSR_H_SETUPPKT as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "FLUSHFIFO", position: BITP_USB_EPI_TXCSR_H_FLUSHFIFO, mask: BITM_USB_EPI_TXCSR_H_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "TXTOERR", position: BITP_USB_EPI_TXCSR_H_TXTOERR, mask: BITM_USB_EPI_TXCSR_H_TXTOERR as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "NEFIFO", position: BITP_USB_EPI_TXCSR_H_NEFIFO, mask: BITM_USB_EPI_TXCSR_H_NEFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXCSR_H", name: "TXPKTRDY", position: BITP_USB_EPI_TXCSR_H_TXPKTRDY, mask: BITM_USB_EPI_TXCSR_H_TXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_P", name: "FLUSHFIFO", position: BITP_USB_EP0I_CSR_P_FLUSHFIFO, mask: BITM_USB_EP0I_CSR_P_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_P", name: "SSETUPEND", position: BITP_USB_EP0I_CSR_P_SSETUPEND, mask: BITM_USB_EP0I_CSR_P_SSETUPEND as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_P", name: "SPKTRDY", position: BITP_USB_EP0I_CSR_P_SPKTRDY, mask: BITM_USB_EP0I_CSR_P_SPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_P", name: "SENDSTALL", position: BITP_USB_EP0I_CSR_P_SENDSTALL, mask: BITM_USB_EP0I_CSR_P_SENDSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_P", name: "SETUPEND", position: BITP_USB_EP0I_CSR_P_SETUPEND, mask: BITM_USB_EP0I_CSR_P_SETUPEND as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_P", name: "DATAEND", position: BITP_USB_EP0I_CSR_P_DATAEND, mask: BITM_USB_EP0I_CSR_P_DATAEND as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_P", name: "SENTSTALL", position: BITP_USB_EP0I_CSR_P_SENTSTALL, mask: BITM_USB_EP0I_CSR_P_SENTSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_P", name: "TXPKTRDY", position: BITP_USB_EP0I_CSR_P_TXPKTRDY, mask: BITM_USB_EP0I_CSR_P_TXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_P", name: "RXPKTRDY", position: BITP_USB_EP0I_CSR_P_RXPKTRDY, mask: BITM_USB_EP0I_CSR_P_RXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "DISPING", position: BITP_USB_EP0I_CSR_H_DISPING, mask: BITM_USB_EP0I_CSR_H_DISPING as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "DATGLEN", position: BITP_USB_EP0I_CSR_H_DATGLEN, mask: BITM_USB_EP0I_CSR_H_DATGLEN as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "DATGL", position: BITP_USB_EP0I_CSR_H_DATGL, mask: BITM_USB_EP0I_CSR_H_DATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "FLUSHFIFO", position: BITP_USB_EP0I_CSR_H_FLUSHFIFO, mask: BITM_USB_EP0I_CSR_H_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "NAKTO", position: BITP_USB_EP0I_CSR_H_NAKTO, mask: BITM_USB_EP0I_CSR_H_NAKTO as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "STATUSPKT", position: BITP_USB_EP0I_CSR_H_STATUSPKT, mask: BITM_USB_EP0I_CSR_H_STATUSPKT as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "REQPKT", position: BITP_USB_EP0I_CSR_H_REQPKT, mask: BITM_USB_EP0I_CSR_H_REQPKT as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "TOERR", position: BITP_USB_EP0I_CSR_H_TOERR, mask: BITM_USB_EP0I_CSR_H_TOERR as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "SETUPPKT", position: BITP_USB_EP0I_CSR_H_SETUPPKT, mask: BITM_USB_EP0I_CSR_H_SETUPPKT as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "RXSTALL", position: BITP_USB_EP0I_CSR_H_RXSTALL, mask: BITM_USB_EP0I_CSR_H_RXSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "TXPKTRDY", position: BITP_USB_EP0I_CSR_H_TXPKTRDY, mask: BITM_USB_EP0I_CSR_H_TXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CSR_H", name: "RXPKTRDY", position: BITP_USB_EP0I_CSR_H_RXPKTRDY, mask: BITM_USB_EP0I_CSR_H_RXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXMAXP", name: "MULTM1", position: BITP_USB_EPI_RXMAXP_MULTM1, mask: BITM_USB_EPI_RXMAXP_MULTM1 as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXMAXP", name: "MAXPAY", position: BITP_USB_EPI_RXMAXP_MAXPAY, mask: BITM_USB_EPI_RXMAXP_MAXPAY as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "AUTOCLR", position: BITP_USB_EPI_RXCSR_H_AUTOCLR, mask: BITM_USB_EPI_RXCSR_H_AUTOCLR as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "AUTOREQ", position: BITP_USB_EPI_RXCSR_H_AUTOREQ, mask: BITM_USB_EPI_RXCSR_H_AUTOREQ as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "DMAREQEN", position: BITP_USB_EPI_RXCSR_H_DMAREQEN, mask: BITM_USB_EPI_RXCSR_H_DMAREQEN as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "PIDERR", position: BITP_USB_EPI_RXCSR_H_PIDERR, mask: BITM_USB_EPI_RXCSR_H_PIDERR as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "DMAREQMODE", position: BITP_USB_EPI_RXCSR_H_DMAREQMODE, mask: BITM_USB_EPI_RXCSR_H_DMAREQMODE as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "DATGLEN", position: BITP_USB_EPI_RXCSR_H_DATGLEN, mask: BITM_USB_EPI_RXCSR_H_DATGLEN as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "DATGL", position: BITP_USB_EPI_RXCSR_H_DATGL, mask: BITM_USB_EPI_RXCSR_H_DATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "INCOMPRX", position: BITP_USB_EPI_RXCSR_H_INCOMPRX, mask: BITM_USB_EPI_RXCSR_H_INCOMPRX as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "CLRDATATGL", position: BITP_USB_EPI_RXCSR_H_CLRDATATGL, mask: BITM_USB_EPI_RXCSR_H_CLRDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "RXSTALL", position: BITP_USB_EPI_RXCSR_H_RXSTALL, mask: BITM_USB_EPI_RXCSR_H_RXSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "REQPKT", position: BITP_USB_EPI_RXCSR_H_REQPKT, mask: BITM_USB_EPI_RXCSR_H_REQPKT as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "FLUSHFIFO", position: BITP_USB_EPI_RXCSR_H_FLUSHFIFO, mask: BITM_USB_EPI_RXCSR_H_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "NAKTODERR", position: BITP_USB_EPI_RXCSR_H_NAKTODERR, mask: BITM_USB_EPI_RXCSR_H_NAKTODERR as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "RXTOERR", position: BITP_USB_EPI_RXCSR_H_RXTOERR, mask: BITM_USB_EPI_RXCSR_H_RXTOERR as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "FIFOFULL", position: BITP_USB_EPI_RXCSR_H_FIFOFULL, mask: BITM_USB_EPI_RXCSR_H_FIFOFULL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_H", name: "RXPKTRDY", position: BITP_USB_EPI_RXCSR_H_RXPKTRDY, mask: BITM_USB_EPI_RXCSR_H_RXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "AUTOCLR", position: BITP_USB_EPI_RXCSR_P_AUTOCLR, mask: BITM_USB_EPI_RXCSR_P_AUTOCLR as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "ISO", position: BITP_USB_EPI_RXCSR_P_ISO, mask: BITM_USB_EPI_RXCSR_P_ISO as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "DMAREQEN", position: BITP_USB_EPI_RXCSR_P_DMAREQEN, mask: BITM_USB_EPI_RXCSR_P_DMAREQEN as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "DNYETPERR", position: BITP_USB_EPI_RXCSR_P_DNYETPERR, mask: BITM_USB_EPI_RXCSR_P_DNYETPERR as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "DMAREQMODE", position: BITP_USB_EPI_RXCSR_P_DMAREQMODE, mask: BITM_USB_EPI_RXCSR_P_DMAREQMODE as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "INCOMPRX", position: BITP_USB_EPI_RXCSR_P_INCOMPRX, mask: BITM_USB_EPI_RXCSR_P_INCOMPRX as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "CLRDATATGL", position: BITP_USB_EPI_RXCSR_P_CLRDATATGL, mask: BITM_USB_EPI_RXCSR_P_CLRDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "SENTSTALL", position: BITP_USB_EPI_RXCSR_P_SENTSTALL, mask: BITM_USB_EPI_RXCSR_P_SENTSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "SENDSTALL", position: BITP_USB_EPI_RXCSR_P_SENDSTALL, mask: BITM_USB_EPI_RXCSR_P_SENDSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "FLUSHFIFO", position: BITP_USB_EPI_RXCSR_P_FLUSHFIFO, mask: BITM_USB_EPI_RXCSR_P_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "DATAERR", position: BITP_USB_EPI_RXCSR_P_DATAERR, mask: BITM_USB_EPI_RXCSR_P_DATAERR as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "ORUNERR", position: BITP_USB_EPI_RXCSR_P_ORUNERR, mask: BITM_USB_EPI_RXCSR_P_ORUNERR as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "FIFOFULL", position: BITP_USB_EPI_RXCSR_P_FIFOFULL, mask: BITM_USB_EPI_RXCSR_P_FIFOFULL as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCSR_P", name: "RXPKTRDY", position: BITP_USB_EPI_RXCSR_P_RXPKTRDY, mask: BITM_USB_EPI_RXCSR_P_RXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0I_CNT", name: "RXCNT", position: BITP_USB_EP0I_CNT_RXCNT, mask: BITM_USB_EP0I_CNT_RXCNT as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_RXCNT", name: "EPRXCNT", position: BITP_USB_EPI_RXCNT_EPRXCNT, mask: BITM_USB_EPI_RXCNT_EPRXCNT as u32, width: Width::HalfWord },
    Field { group: "USB_EPI_TXTYPE", name: "SPEED", position: BITP_USB_EPI_TXTYPE_SPEED, mask: BITM_USB_EPI_TXTYPE_SPEED as u32, width: Width::Byte },
    Field { group: "USB_EPI_TXTYPE", name: "PROTOCOL", position: BITP_USB_EPI_TXTYPE_PROTOCOL, mask: BITM_USB_EPI_TXTYPE_PROTOCOL as u32, width: Width::Byte },
    Field { group: "USB_EPI_TXTYPE", name: "TGTEP", position: BITP_USB_EPI_TXTYPE_TGTEP, mask: BITM_USB_EPI_TXTYPE_TGTEP as u32, width: Width::Byte },
    Field { group: "USB_EP0I_TYPE", name: "SPEED", position: BITP_USB_EP0I_TYPE_SPEED, mask: BITM_USB_EP0I_TYPE_SPEED as u32, width: Width::Byte },
    Field { group: "USB_EP0I_NAKLIMIT", name: "VALUE", position: BITP_USB_EP0I_NAKLIMIT_VALUE, mask: BITM_USB_EP0I_NAKLIMIT_VALUE as u32, width: Width::Byte },
    Field { group: "USB_EPI_RXTYPE", name: "SPEED", position: BITP_USB_EPI_RXTYPE_SPEED, mask: BITM_USB_EPI_RXTYPE_SPEED as u32, width: Width::Byte },
    Field { group: "USB_EPI_RXTYPE", name: "PROTOCOL", position: BITP_USB_EPI_RXTYPE_PROTOCOL, mask: BITM_USB_EPI_RXTYPE_PROTOCOL as u32, width: Width::Byte },
    Field { group: "USB_EPI_RXTYPE", name: "TGTEP", position: BITP_USB_EPI_RXTYPE_TGTEP, mask: BITM_USB_EPI_RXTYPE_TGTEP as u32, width: Width::Byte },
    Field { group: "USB_EP0I_CFGDATA", name: "MPRX", position: BITP_USB_EP0I_CFGDATA_MPRX, mask: BITM_USB_EP0I_CFGDATA_MPRX as u32, width: Width::Byte },
    Field { group: "USB_EP0I_CFGDATA", name: "MPTX", position: BITP_USB_EP0I_CFGDATA_MPTX, mask: BITM_USB_EP0I_CFGDATA_MPTX as u32, width: Width::Byte },
    Field { group: "USB_EP0I_CFGDATA", name: "BIGEND", position: BITP_USB_EP0I_CFGDATA_BIGEND, mask: BITM_USB_EP0I_CFGDATA_BIGEND as u32, width: Width::Byte },
    Field { group: "USB_EP0I_CFGDATA", name: "HBRX", position: BITP_USB_EP0I_CFGDATA_HBRX, mask: BITM_USB_EP0I_CFGDATA_HBRX as u32, width: Width::Byte },
    Field { group: "USB_EP0I_CFGDATA", name: "HBTX", position: BITP_USB_EP0I_CFGDATA_HBTX, mask: BITM_USB_EP0I_CFGDATA_HBTX as u32, width: Width::Byte },
    Field { group: "USB_EP0I_CFGDATA", name: "DYNFIFO", position: BITP_USB_EP0I_CFGDATA_DYNFIFO, mask: BITM_USB_EP0I_CFGDATA_DYNFIFO as u32, width: Width::Byte },
    Field { group: "USB_EP0I_CFGDATA", name: "SOFTCON", position: BITP_USB_EP0I_CFGDATA_SOFTCON, mask: BITM_USB_EP0I_CFGDATA_SOFTCON as u32, width: Width::Byte },
    Field { group: "USB_EP0I_CFGDATA", name: "UTMIWID", position: BITP_USB_EP0I_CFGDATA_UTMIWID, mask: BITM_USB_EP0I_CFGDATA_UTMIWID as u32, width: Width::Byte },
    Field { group: "USB_DEV_CTL", name: "BDEVICE", position: BITP_USB_DEV_CTL_BDEVICE, mask: BITM_USB_DEV_CTL_BDEVICE as u32, width: Width::Byte },
    Field { group: "USB_DEV_CTL", name: "FSDEV", position: BITP_USB_DEV_CTL_FSDEV, mask: BITM_USB_DEV_CTL_FSDEV as u32, width: Width::Byte },
    Field { group: "USB_DEV_CTL", name: "LSDEV", position: BITP_USB_DEV_CTL_LSDEV, mask: BITM_USB_DEV_CTL_LSDEV as u32, width: Width::Byte },
    Field { group: "USB_DEV_CTL", name: "VBUS", position: BITP_USB_DEV_CTL_VBUS, mask: BITM_USB_DEV_CTL_VBUS as u32, width: Width::Byte },
    Field { group: "USB_DEV_CTL", name: "HOSTMODE", position: BITP_USB_DEV_CTL_HOSTMODE, mask: BITM_USB_DEV_CTL_HOSTMODE as u32, width: Width::Byte },
    Field { group: "USB_DEV_CTL", name: "HOSTREQ", position: BITP_USB_DEV_CTL_HOSTREQ, mask: BITM_USB_DEV_CTL_HOSTREQ as u32, width: Width::Byte },
    Field { group: "USB_DEV_CTL", name: "SESSION", position: BITP_USB_DEV_CTL_SESSION, mask: BITM_USB_DEV_CTL_SESSION as u32, width: Width::Byte },
    Field { group: "USB_TXFIFOSZ", name: "DPB", position: BITP_USB_TXFIFOSZ_DPB, mask: BITM_USB_TXFIFOSZ_DPB as u32, width: Width::Byte },
    Field { group: "USB_TXFIFOSZ", name: "SZ", position: BITP_USB_TXFIFOSZ_SZ, mask: BITM_USB_TXFIFOSZ_SZ as u32, width: Width::Byte },
    Field { group: "USB_RXFIFOSZ", name: "DPB", position: BITP_USB_RXFIFOSZ_DPB, mask: BITM_USB_RXFIFOSZ_DPB as u32, width: Width::Byte },
    Field { group: "USB_RXFIFOSZ", name: "SZ", position: BITP_USB_RXFIFOSZ_SZ, mask: BITM_USB_RXFIFOSZ_SZ as u32, width: Width::Byte },
    Field { group: "USB_TXFIFOADDR", name: "VALUE", position: BITP_USB_TXFIFOADDR_VALUE, mask: BITM_USB_TXFIFOADDR_VALUE as u32, width: Width::HalfWord },
    Field { group: "USB_RXFIFOADDR", name: "VALUE", position: BITP_USB_RXFIFOADDR_VALUE, mask: BITM_USB_RXFIFOADDR_VALUE as u32, width: Width::HalfWord },
    Field { group: "USB_EPINFO", name: "RXEP", position: BITP_USB_EPINFO_RXEP, mask: BITM_USB_EPINFO_RXEP as u32, width: Width::Byte },
    Field { group: "USB_EPINFO", name: "TXEP", position: BITP_USB_EPINFO_TXEP, mask: BITM_USB_EPINFO_TXEP as u32, width: Width::Byte },
    Field { group: "USB_RAMINFO", name: "DMACHANS", position: BITP_USB_RAMINFO_DMACHANS, mask: BITM_USB_RAMINFO_DMACHANS as u32, width: Width::Byte },
    Field { group: "USB_RAMINFO", name: "RAMBITS", position: BITP_USB_RAMINFO_RAMBITS, mask: BITM_USB_RAMINFO_RAMBITS as u32, width: Width::Byte },
    Field { group: "USB_LINKINFO", name: "WTCON", position: BITP_USB_LINKINFO_WTCON, mask: BITM_USB_LINKINFO_WTCON as u32, width: Width::Byte },
    Field { group: "USB_LINKINFO", name: "WTID", position: BITP_USB_LINKINFO_WTID, mask: BITM_USB_LINKINFO_WTID as u32, width: Width::Byte },
    Field { group: "USB_SOFT_RST", name: "RSTX", position: BITP_USB_SOFT_RST_RSTX, mask: BITM_USB_SOFT_RST_RSTX as u32, width: Width::Byte },
    Field { group: "USB_SOFT_RST", name: "RST", position: BITP_USB_SOFT_RST_RST, mask: BITM_USB_SOFT_RST_RST as u32, width: Width::Byte },
    Field { group: "USB_MP_TXFUNCADDR", name: "VALUE", position: BITP_USB_MP_TXFUNCADDR_VALUE, mask: BITM_USB_MP_TXFUNCADDR_VALUE as u32, width: Width::Byte },
    Field { group: "USB_MP_TXHUBADDR", name: "MULTTRANS", position: BITP_USB_MP_TXHUBADDR_MULTTRANS, mask: BITM_USB_MP_TXHUBADDR_MULTTRANS as u32, width: Width::Byte },
    Field { group: "USB_MP_TXHUBADDR", name: "ADDR", position: BITP_USB_MP_TXHUBADDR_ADDR, mask: BITM_USB_MP_TXHUBADDR_ADDR as u32, width: Width::Byte },
    Field { group: "USB_MP_TXHUBPORT", name: "VALUE", position: BITP_USB_MP_TXHUBPORT_VALUE, mask: BITM_USB_MP_TXHUBPORT_VALUE as u32, width: Width::Byte },
    Field { group: "USB_MP_RXFUNCADDR", name: "VALUE", position: BITP_USB_MP_RXFUNCADDR_VALUE, mask: BITM_USB_MP_RXFUNCADDR_VALUE as u32, width: Width::Byte },
    Field { group: "USB_MP_RXHUBADDR", name: "MULTTRANS", position: BITP_USB_MP_RXHUBADDR_MULTTRANS, mask: BITM_USB_MP_RXHUBADDR_MULTTRANS as u32, width: Width::Byte },
    Field { group: "USB_MP_RXHUBADDR", name: "ADDR", position: BITP_USB_MP_RXHUBADDR_ADDR, mask: BITM_USB_MP_RXHUBADDR_ADDR as u32, width: Width::Byte },
    Field { group: "USB_MP_RXHUBPORT", name: "VALUE", position: BITP_USB_MP_RXHUBPORT_VALUE, mask: BITM_USB_MP_RXHUBPORT_VALUE as u32, width: Width::Byte },
    Field { group: "USB_EP_TXMAXP", name: "MULTM1", position: BITP_USB_EP_TXMAXP_MULTM1, mask: BITM_USB_EP_TXMAXP_MULTM1 as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXMAXP", name: "MAXPAY", position: BITP_USB_EP_TXMAXP_MAXPAY, mask: BITM_USB_EP_TXMAXP_MAXPAY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "DISPING", position: BITP_USB_EP0_CSR_H_DISPING, mask: BITM_USB_EP0_CSR_H_DISPING as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "DATGLEN", position: BITP_USB_EP0_CSR_H_DATGLEN, mask: BITM_USB_EP0_CSR_H_DATGLEN as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "DATGL", position: BITP_USB_EP0_CSR_H_DATGL, mask: BITM_USB_EP0_CSR_H_DATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "FLUSHFIFO", position: BITP_USB_EP0_CSR_H_FLUSHFIFO, mask: BITM_USB_EP0_CSR_H_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "NAKTO", position: BITP_USB_EP0_CSR_H_NAKTO, mask: BITM_USB_EP0_CSR_H_NAKTO as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "STATUSPKT", position: BITP_USB_EP0_CSR_H_STATUSPKT, mask: BITM_USB_EP0_CSR_H_STATUSPKT as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "REQPKT", position: BITP_USB_EP0_CSR_H_REQPKT, mask: BITM_USB_EP0_CSR_H_REQPKT as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "TOERR", position: BITP_USB_EP0_CSR_H_TOERR, mask: BITM_USB_EP0_CSR_H_TOERR as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "SETUPPKT", position: BITP_USB_EP0_CSR_H_SETUPPKT, mask: BITM_USB_EP0_CSR_H_SETUPPKT as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "RXSTALL", position: BITP_USB_EP0_CSR_H_RXSTALL, mask: BITM_USB_EP0_CSR_H_RXSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "TXPKTRDY", position: BITP_USB_EP0_CSR_H_TXPKTRDY, mask: BITM_USB_EP0_CSR_H_TXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_H", name: "RXPKTRDY", position: BITP_USB_EP0_CSR_H_RXPKTRDY, mask: BITM_USB_EP0_CSR_H_RXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "AUTOSET", position: BITP_USB_EP_TXCSR_H_AUTOSET, mask: BITM_USB_EP_TXCSR_H_AUTOSET as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "DMAREQEN", position: BITP_USB_EP_TXCSR_H_DMAREQEN, mask: BITM_USB_EP_TXCSR_H_DMAREQEN as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "FRCDATATGL", position: BITP_USB_EP_TXCSR_H_FRCDATATGL, mask: BITM_USB_EP_TXCSR_H_FRCDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "DMAREQMODE", position: BITP_USB_EP_TXCSR_H_DMAREQMODE, mask: BITM_USB_EP_TXCSR_H_DMAREQMODE as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "DATGLEN", position: BITP_USB_EP_TXCSR_H_DATGLEN, mask: BITM_USB_EP_TXCSR_H_DATGLEN as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "DATGL", position: BITP_USB_EP_TXCSR_H_DATGL, mask: BITM_USB_EP_TXCSR_H_DATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "NAKTOINCMP", position: BITP_USB_EP_TXCSR_H_NAKTOINCMP, mask: BITM_USB_EP_TXCSR_H_NAKTOINCMP as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "CLRDATATGL", position: BITP_USB_EP_TXCSR_H_CLRDATATGL, mask: BITM_USB_EP_TXCSR_H_CLRDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "RXSTALL", position: BITP_USB_EP_TXCSR_H_RXSTALL, mask: BITM_USB_EP_TXCSR_H_RXSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "SETUPPKT", position: BITP_USB_EP_TXCSR_H_SETUPPKT, mask: BITM_USB_EP_TXCSR_H_SETUPPKT as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "FLUSHFIFO", position: BITP_USB_EP_TXCSR_H_FLUSHFIFO, mask: BITM_USB_EP_TXCSR_H_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "TXTOERR", position: BITP_USB_EP_TXCSR_H_TXTOERR, mask: BITM_USB_EP_TXCSR_H_TXTOERR as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "NEFIFO", position: BITP_USB_EP_TXCSR_H_NEFIFO, mask: BITM_USB_EP_TXCSR_H_NEFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_H", name: "TXPKTRDY", position: BITP_USB_EP_TXCSR_H_TXPKTRDY, mask: BITM_USB_EP_TXCSR_H_TXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_P", name: "FLUSHFIFO", position: BITP_USB_EP0_CSR_P_FLUSHFIFO, mask: BITM_USB_EP0_CSR_P_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_P", name: "SSETUPEND", position: BITP_USB_EP0_CSR_P_SSETUPEND, mask: BITM_USB_EP0_CSR_P_SSETUPEND as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_P", name: "SPKTRDY", position: BITP_USB_EP0_CSR_P_SPKTRDY, mask: BITM_USB_EP0_CSR_P_SPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_P", name: "SENDSTALL", position: BITP_USB_EP0_CSR_P_SENDSTALL, mask: BITM_USB_EP0_CSR_P_SENDSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_P", name: "SETUPEND", position: BITP_USB_EP0_CSR_P_SETUPEND, mask: BITM_USB_EP0_CSR_P_SETUPEND as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_P", name: "DATAEND", position: BITP_USB_EP0_CSR_P_DATAEND, mask: BITM_USB_EP0_CSR_P_DATAEND as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_P", name: "SENTSTALL", position: BITP_USB_EP0_CSR_P_SENTSTALL, mask: BITM_USB_EP0_CSR_P_SENTSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_P", name: "TXPKTRDY", position: BITP_USB_EP0_CSR_P_TXPKTRDY, mask: BITM_USB_EP0_CSR_P_TXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CSR_P", name: "RXPKTRDY", position: BITP_USB_EP0_CSR_P_RXPKTRDY, mask: BITM_USB_EP0_CSR_P_RXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "AUTOSET", position: BITP_USB_EP_TXCSR_P_AUTOSET, mask: BITM_USB_EP_TXCSR_P_AUTOSET as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "ISO", position: BITP_USB_EP_TXCSR_P_ISO, mask: BITM_USB_EP_TXCSR_P_ISO as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "DMAREQEN", position: BITP_USB_EP_TXCSR_P_DMAREQEN, mask: BITM_USB_EP_TXCSR_P_DMAREQEN as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "FRCDATATGL", position: BITP_USB_EP_TXCSR_P_FRCDATATGL, mask: BITM_USB_EP_TXCSR_P_FRCDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "DMAREQMODE", position: BITP_USB_EP_TXCSR_P_DMAREQMODE, mask: BITM_USB_EP_TXCSR_P_DMAREQMODE as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "INCOMPTX", position: BITP_USB_EP_TXCSR_P_INCOMPTX, mask: BITM_USB_EP_TXCSR_P_INCOMPTX as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "CLRDATATGL", position: BITP_USB_EP_TXCSR_P_CLRDATATGL, mask: BITM_USB_EP_TXCSR_P_CLRDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "SENTSTALL", position: BITP_USB_EP_TXCSR_P_SENTSTALL, mask: BITM_USB_EP_TXCSR_P_SENTSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "SENDSTALL", position: BITP_USB_EP_TXCSR_P_SENDSTALL, mask: BITM_USB_EP_TXCSR_P_SENDSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "FLUSHFIFO", position: BITP_USB_EP_TXCSR_P_FLUSHFIFO, mask: BITM_USB_EP_TXCSR_P_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "URUNERR", position: BITP_USB_EP_TXCSR_P_URUNERR, mask: BITM_USB_EP_TXCSR_P_URUNERR as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "NEFIFO", position: BITP_USB_EP_TXCSR_P_NEFIFO, mask: BITM_USB_EP_TXCSR_P_NEFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EP_TXCSR_P", name: "TXPKTRDY", position: BITP_USB_EP_TXCSR_P_TXPKTRDY, mask: BITM_USB_EP_TXCSR_P_TXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXMAXP", name: "MULTM1", position: BITP_USB_EP_RXMAXP_MULTM1, mask: BITM_USB_EP_RXMAXP_MULTM1 as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXMAXP", name: "MAXPAY", position: BITP_USB_EP_RXMAXP_MAXPAY, mask: BITM_USB_EP_RXMAXP_MAXPAY as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "AUTOCLR", position: BITP_USB_EP_RXCSR_H_AUTOCLR, mask: BITM_USB_EP_RXCSR_H_AUTOCLR as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "AUTOREQ", position: BITP_USB_EP_RXCSR_H_AUTOREQ, mask: BITM_USB_EP_RXCSR_H_AUTOREQ as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "DMAREQEN", position: BITP_USB_EP_RXCSR_H_DMAREQEN, mask: BITM_USB_EP_RXCSR_H_DMAREQEN as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "PIDERR", position: BITP_USB_EP_RXCSR_H_PIDERR, mask: BITM_USB_EP_RXCSR_H_PIDERR as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "DMAREQMODE", position: BITP_USB_EP_RXCSR_H_DMAREQMODE, mask: BITM_USB_EP_RXCSR_H_DMAREQMODE as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "DATGLEN", position: BITP_USB_EP_RXCSR_H_DATGLEN, mask: BITM_USB_EP_RXCSR_H_DATGLEN as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "DATGL", position: BITP_USB_EP_RXCSR_H_DATGL, mask: BITM_USB_EP_RXCSR_H_DATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "INCOMPRX", position: BITP_USB_EP_RXCSR_H_INCOMPRX, mask: BITM_USB_EP_RXCSR_H_INCOMPRX as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "CLRDATATGL", position: BITP_USB_EP_RXCSR_H_CLRDATATGL, mask: BITM_USB_EP_RXCSR_H_CLRDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "RXSTALL", position: BITP_USB_EP_RXCSR_H_RXSTALL, mask: BITM_USB_EP_RXCSR_H_RXSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "REQPKT", position: BITP_USB_EP_RXCSR_H_REQPKT, mask: BITM_USB_EP_RXCSR_H_REQPKT as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "FLUSHFIFO", position: BITP_USB_EP_RXCSR_H_FLUSHFIFO, mask: BITM_USB_EP_RXCSR_H_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "NAKTODERR", position: BITP_USB_EP_RXCSR_H_NAKTODERR, mask: BITM_USB_EP_RXCSR_H_NAKTODERR as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "RXTOERR", position: BITP_USB_EP_RXCSR_H_RXTOERR, mask: BITM_USB_EP_RXCSR_H_RXTOERR as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "FIFOFULL", position: BITP_USB_EP_RXCSR_H_FIFOFULL, mask: BITM_USB_EP_RXCSR_H_FIFOFULL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_H", name: "RXPKTRDY", position: BITP_USB_EP_RXCSR_H_RXPKTRDY, mask: BITM_USB_EP_RXCSR_H_RXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "AUTOCLR", position: BITP_USB_EP_RXCSR_P_AUTOCLR, mask: BITM_USB_EP_RXCSR_P_AUTOCLR as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "ISO", position: BITP_USB_EP_RXCSR_P_ISO, mask: BITM_USB_EP_RXCSR_P_ISO as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "DMAREQEN", position: BITP_USB_EP_RXCSR_P_DMAREQEN, mask: BITM_USB_EP_RXCSR_P_DMAREQEN as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "DNYETPERR", position: BITP_USB_EP_RXCSR_P_DNYETPERR, mask: BITM_USB_EP_RXCSR_P_DNYETPERR as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "DMAREQMODE", position: BITP_USB_EP_RXCSR_P_DMAREQMODE, mask: BITM_USB_EP_RXCSR_P_DMAREQMODE as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "INCOMPRX", position: BITP_USB_EP_RXCSR_P_INCOMPRX, mask: BITM_USB_EP_RXCSR_P_INCOMPRX as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "CLRDATATGL", position: BITP_USB_EP_RXCSR_P_CLRDATATGL, mask: BITM_USB_EP_RXCSR_P_CLRDATATGL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "SENTSTALL", position: BITP_USB_EP_RXCSR_P_SENTSTALL, mask: BITM_USB_EP_RXCSR_P_SENTSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "SENDSTALL", position: BITP_USB_EP_RXCSR_P_SENDSTALL, mask: BITM_USB_EP_RXCSR_P_SENDSTALL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "FLUSHFIFO", position: BITP_USB_EP_RXCSR_P_FLUSHFIFO, mask: BITM_USB_EP_RXCSR_P_FLUSHFIFO as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "DATAERR", position: BITP_USB_EP_RXCSR_P_DATAERR, mask: BITM_USB_EP_RXCSR_P_DATAERR as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "ORUNERR", position: BITP_USB_EP_RXCSR_P_ORUNERR, mask: BITM_USB_EP_RXCSR_P_ORUNERR as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "FIFOFULL", position: BITP_USB_EP_RXCSR_P_FIFOFULL, mask: BITM_USB_EP_RXCSR_P_FIFOFULL as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCSR_P", name: "RXPKTRDY", position: BITP_USB_EP_RXCSR_P_RXPKTRDY, mask: BITM_USB_EP_RXCSR_P_RXPKTRDY as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_CNT", name: "RXCNT", position: BITP_USB_EP0_CNT_RXCNT, mask: BITM_USB_EP0_CNT_RXCNT as u32, width: Width::HalfWord },
    Field { group: "USB_EP_RXCNT", name: "EPRXCNT", position: BITP_USB_EP_RXCNT_EPRXCNT, mask: BITM_USB_EP_RXCNT_EPRXCNT as u32, width: Width::HalfWord },
    Field { group: "USB_EP0_TYPE", name: "SPEED", position: BITP_USB_EP0_TYPE_SPEED, mask: BITM_USB_EP0_TYPE_SPEED as u32, width: Width::Byte },
    Field { group: "USB_EP_TXTYPE", name: "SPEED", position: BITP_USB_EP_TXTYPE_SPEED, mask: BITM_USB_EP_TXTYPE_SPEED as u32, width: Width::Byte },
    Field { group: "USB_EP_TXTYPE", name: "PROTOCOL", position: BITP_USB_EP_TXTYPE_PROTOCOL, mask: BITM_USB_EP_TXTYPE_PROTOCOL as u32, width: Width::Byte },
    Field { group: "USB_EP_TXTYPE", name: "TGTEP", position: BITP_USB_EP_TXTYPE_TGTEP, mask: BITM_USB_EP_TXTYPE_TGTEP as u32, width: Width::Byte },
    Field { group: "USB_EP0_NAKLIMIT", name: "VALUE", position: BITP_USB_EP0_NAKLIMIT_VALUE, mask: BITM_USB_EP0_NAKLIMIT_VALUE as u32, width: Width::Byte },
    Field { group: "USB_EP_RXTYPE", name: "SPEED", position: BITP_USB_EP_RXTYPE_SPEED, mask: BITM_USB_EP_RXTYPE_SPEED as u32, width: Width::Byte },
    Field { group: "USB_EP_RXTYPE", name: "PROTOCOL", position: BITP_USB_EP_RXTYPE_PROTOCOL, mask: BITM_USB_EP_RXTYPE_PROTOCOL as u32, width: Width::Byte },
    Field { group: "USB_EP_RXTYPE", name: "TGTEP", position: BITP_USB_EP_RXTYPE_TGTEP, mask: BITM_USB_EP_RXTYPE_TGTEP as u32, width: Width::Byte },
    Field { group: "USB_EP0_CFGDATA", name: "MPRX", position: BITP_USB_EP0_CFGDATA_MPRX, mask: BITM_USB_EP0_CFGDATA_MPRX as u32, width: Width::Byte },
    Field { group: "USB_EP0_CFGDATA", name: "MPTX", position: BITP_USB_EP0_CFGDATA_MPTX, mask: BITM_USB_EP0_CFGDATA_MPTX as u32, width: Width::Byte },
    Field { group: "USB_EP0_CFGDATA", name: "BIGEND", position: BITP_USB_EP0_CFGDATA_BIGEND, mask: BITM_USB_EP0_CFGDATA_BIGEND as u32, width: Width::Byte },
    Field { group: "USB_EP0_CFGDATA", name: "HBRX", position: BITP_USB_EP0_CFGDATA_HBRX, mask: BITM_USB_EP0_CFGDATA_HBRX as u32, width: Width::Byte },
    Field { group: "USB_EP0_CFGDATA", name: "HBTX", position: BITP_USB_EP0_CFGDATA_HBTX, mask: BITM_USB_EP0_CFGDATA_HBTX as u32, width: Width::Byte },
    Field { group: "USB_EP0_CFGDATA", name: "DYNFIFO", position: BITP_USB_EP0_CFGDATA_DYNFIFO, mask: BITM_USB_EP0_CFGDATA_DYNFIFO as u32, width: Width::Byte },
    Field { group: "USB_EP0_CFGDATA", name: "SOFTCON", position: BITP_USB_EP0_CFGDATA_SOFTCON, mask: BITM_USB_EP0_CFGDATA_SOFTCON as u32, width: Width::Byte },
    Field { group: "USB_EP0_CFGDATA", name: "UTMIWID", position: BITP_USB_EP0_CFGDATA_UTMIWID, mask: BITM_USB_EP0_CFGDATA_UTMIWID as u32, width: Width::Byte },
    Field { group: "USB_DMA_IRQ", name: "D7", position: BITP_USB_DMA_IRQ_D7, mask: BITM_USB_DMA_IRQ_D7 as u32, width: Width::Byte },
    Field { group: "USB_DMA_IRQ", name: "D6", position: BITP_USB_DMA_IRQ_D6, mask: BITM_USB_DMA_IRQ_D6 as u32, width: Width::Byte },
    Field { group: "USB_DMA_IRQ", name: "D5", position: BITP_USB_DMA_IRQ_D5, mask: BITM_USB_DMA_IRQ_D5 as u32, width: Width::Byte },
    Field { group: "USB_DMA_IRQ", name: "D4", position: BITP_USB_DMA_IRQ_D4, mask: BITM_USB_DMA_IRQ_D4 as u32, width: Width::Byte },
    Field { group: "USB_DMA_IRQ", name: "D3", position: BITP_USB_DMA_IRQ_D3, mask: BITM_USB_DMA_IRQ_D3 as u32, width: Width::Byte },
    Field { group: "USB_DMA_IRQ", name: "D2", position: BITP_USB_DMA_IRQ_D2, mask: BITM_USB_DMA_IRQ_D2 as u32, width: Width::Byte },
    Field { group: "USB_DMA_IRQ", name: "D1", position: BITP_USB_DMA_IRQ_D1, mask: BITM_USB_DMA_IRQ_D1 as u32, width: Width::Byte },
    Field { group: "USB_DMA_IRQ", name: "D0", position: BITP_USB_DMA_IRQ_D0, mask: BITM_USB_DMA_IRQ_D0 as u32, width: Width::Byte },
    Field { group: "USB_DMA_CTL", name: "BRSTM", position: BITP_USB_DMA_CTL_BRSTM, mask: BITM_USB_DMA_CTL_BRSTM as u32, width: Width::HalfWord },
    Field { group: "USB_DMA_CTL", name: "ERR", position: BITP_USB_DMA_CTL_ERR, mask: BITM_USB_DMA_CTL_ERR as u32, width: Width::HalfWord },
    Field { group: "USB_DMA_CTL", name: "EP", position: BITP_USB_DMA_CTL_EP, mask: BITM_USB_DMA_CTL_EP as u32, width: Width::HalfWord },
    Field { group: "USB_DMA_CTL", name: "IE", position: BITP_USB_DMA_CTL_IE, mask: BITM_USB_DMA_CTL_IE as u32, width: Width::HalfWord },
    Field { group: "USB_DMA_CTL", name: "MODE", position: BITP_USB_DMA_CTL_MODE, mask: BITM_USB_DMA_CTL_MODE as u32, width: Width::HalfWord },
    Field { group: "USB_DMA_CTL", name: "DIR", position: BITP_USB_DMA_CTL_DIR, mask: BITM_USB_DMA_CTL_DIR as u32, width: Width::HalfWord },
    Field { group: "USB_DMA_CTL", name: "EN", position: BITP_USB_DMA_CTL_EN, mask: BITM_USB_DMA_CTL_EN as u32, width: Width::HalfWord },
    Field { group: "USB_CT_UCH", name: "VALUE", position: BITP_USB_CT_UCH_VALUE, mask: BITM_USB_CT_UCH_VALUE as u32, width: Width::HalfWord },
    Field { group: "USB_CT_HHSRTN", name: "VALUE", position: BITP_USB_CT_HHSRTN_VALUE, mask: BITM_USB_CT_HHSRTN_VALUE as u32, width: Width::HalfWord },
    Field { group: "USB_CT_HSBT", name: "VALUE", position: BITP_USB_CT_HSBT_VALUE, mask: BITM_USB_CT_HSBT_VALUE as u32, width: Width::HalfWord },
    Field { group: "USB_LPM_ATTR", name: "EP", position: BITP_USB_LPM_ATTR_EP, mask: BITM_USB_LPM_ATTR_EP as u32, width: Width::HalfWord },
    Field { group: "USB_LPM_ATTR", name: "RMTWAK", position: BITP_USB_LPM_ATTR_RMTWAK, mask: BITM_USB_LPM_ATTR_RMTWAK as u32, width: Width::HalfWord },
    Field { group: "USB_LPM_ATTR", name: "HIRD", position: BITP_USB_LPM_ATTR_HIRD, mask: BITM_USB_LPM_ATTR_HIRD as u32, width: Width::HalfWord },
    Field { group: "USB_LPM_ATTR", name: "LINKSTATE", position: BITP_USB_LPM_ATTR_LINKSTATE, mask: BITM_USB_LPM_ATTR_LINKSTATE as u32, width: Width::HalfWord },
    Field { group: "USB_LPM_CTL", name: "NAK", position: BITP_USB_LPM_CTL_NAK, mask: BITM_USB_LPM_CTL_NAK as u32, width: Width::Byte },
    Field { group: "USB_LPM_CTL", name: "EN", position: BITP_USB_LPM_CTL_EN, mask: BITM_USB_LPM_CTL_EN as u32, width: Width::Byte },
    Field { group: "USB_LPM_CTL", name: "RESUME", position: BITP_USB_LPM_CTL_RESUME, mask: BITM_USB_LPM_CTL_RESUME as u32, width: Width::Byte },
    Field { group: "USB_LPM_CTL", name: "TX", position: BITP_USB_LPM_CTL_TX, mask: BITM_USB_LPM_CTL_TX as u32, width: Width::Byte },
    Field { group: "USB_LPM_IEN", name: "LPMERR", position: BITP_USB_LPM_IEN_LPMERR, mask: BITM_USB_LPM_IEN_LPMERR as u32, width: Width::Byte },
    Field { group: "USB_LPM_IEN", name: "LPMRES", position: BITP_USB_LPM_IEN_LPMRES, mask: BITM_USB_LPM_IEN_LPMRES as u32, width: Width::Byte },
    Field { group: "USB_LPM_IEN", name: "LPMNC", position: BITP_USB_LPM_IEN_LPMNC, mask: BITM_USB_LPM_IEN_LPMNC as u32, width: Width::Byte },
    Field { group: "USB_LPM_IEN", name: "LPMACK", position: BITP_USB_LPM_IEN_LPMACK, mask: BITM_USB_LPM_IEN_LPMACK as u32, width: Width::Byte },
    Field { group: "USB_LPM_IEN", name: "LPMNY", position: BITP_USB_LPM_IEN_LPMNY, mask: BITM_USB_LPM_IEN_LPMNY as u32, width: Width::Byte },
    Field { group: "USB_LPM_IEN", name: "LPMST", position: BITP_USB_LPM_IEN_LPMST, mask: BITM_USB_LPM_IEN_LPMST as u32, width: Width::Byte },
    Field { group: "USB_LPM_IRQ", name: "LPMERR", position: BITP_USB_LPM_IRQ_LPMERR, mask: BITM_USB_LPM_IRQ_LPMERR as u32, width: Width::Byte },
    Field { group: "USB_LPM_IRQ", name: "LPMRES", position: BITP_USB_LPM_IRQ_LPMRES, mask: BITM_USB_LPM_IRQ_LPMRES as u32, width: Width::Byte },
    Field { group: "USB_LPM_IRQ", name: "LPMNC", position: BITP_USB_LPM_IRQ_LPMNC, mask: BITM_USB_LPM_IRQ_LPMNC as u32, width: Width::Byte },
    Field { group: "USB_LPM_IRQ", name: "LPMACK", position: BITP_USB_LPM_IRQ_LPMACK, mask: BITM_USB_LPM_IRQ_LPMACK as u32, width: Width::Byte },
    Field { group: "USB_LPM_IRQ", name: "LPMNY", position: BITP_USB_LPM_IRQ_LPMNY, mask: BITM_USB_LPM_IRQ_LPMNY as u32, width: Width::Byte },
    Field { group: "USB_LPM_IRQ", name: "LPMST", position: BITP_USB_LPM_IRQ_LPMST, mask: BITM_USB_LPM_IRQ_LPMST as u32, width: Width::Byte },
    Field { group: "USB_LPM_FADDR", name: "VALUE", position: BITP_USB_LPM_FADDR_VALUE, mask: BITM_USB_LPM_FADDR_VALUE as u32, width: Width::Byte },
    Field { group: "USB_VBUS_CTL", name: "DRV", position: BITP_USB_VBUS_CTL_DRV, mask: BITM_USB_VBUS_CTL_DRV as u32, width: Width::Byte },
    Field { group: "USB_VBUS_CTL", name: "DRVINT", position: BITP_USB_VBUS_CTL_DRVINT, mask: BITM_USB_VBUS_CTL_DRVINT as u32, width: Width::Byte },
    Field { group: "USB_VBUS_CTL", name: "DRVIEN", position: BITP_USB_VBUS_CTL_DRVIEN, mask: BITM_USB_VBUS_CTL_DRVIEN as u32, width: Width::Byte },
    Field { group: "USB_VBUS_CTL", name: "DRVOD", position: BITP_USB_VBUS_CTL_DRVOD, mask: BITM_USB_VBUS_CTL_DRVOD as u32, width: Width::Byte },
    Field { group: "USB_VBUS_CTL", name: "INVDRV", position: BITP_USB_VBUS_CTL_INVDRV, mask: BITM_USB_VBUS_CTL_INVDRV as u32, width: Width::Byte },
    Field { group: "USB_BAT_CHG", name: "DEDCHG", position: BITP_USB_BAT_CHG_DEDCHG, mask: BITM_USB_BAT_CHG_DEDCHG as u32, width: Width::Byte },
    Field { group: "USB_BAT_CHG", name: "CHGDET", position: BITP_USB_BAT_CHG_CHGDET, mask: BITM_USB_BAT_CHG_CHGDET as u32, width: Width::Byte },
    Field { group: "USB_BAT_CHG", name: "SNSCHGDET", position: BITP_USB_BAT_CHG_SNSCHGDET, mask: BITM_USB_BAT_CHG_SNSCHGDET as u32, width: Width::Byte },
    Field { group: "USB_BAT_CHG", name: "CONDET", position: BITP_USB_BAT_CHG_CONDET, mask: BITM_USB_BAT_CHG_CONDET as u32, width: Width::Byte },
    Field { group: "USB_BAT_CHG", name: "SNSCONDET", position: BITP_USB_BAT_CHG_SNSCONDET, mask: BITM_USB_BAT_CHG_SNSCONDET as u32, width: Width::Byte },
    Field { group: "USB_PHY_CTL", name: "EN", position: BITP_USB_PHY_CTL_EN, mask: BITM_USB_PHY_CTL_EN as u32, width: Width::HalfWord },
    Field { group: "USB_PHY_CTL", name: "RESTORE", position: BITP_USB_PHY_CTL_RESTORE, mask: BITM_USB_PHY_CTL_RESTORE as u32, width: Width::HalfWord },
    Field { group: "USB_PHY_CTL", name: "HIBER", position: BITP_USB_PHY_CTL_HIBER, mask: BITM_USB_PHY_CTL_HIBER as u32, width: Width::HalfWord },
    Field { group: "USB_PLL_OSC", name: "PLLMSEL", position: BITP_USB_PLL_OSC_PLLMSEL, mask: BITM_USB_PLL_OSC_PLLMSEL as u32, width: Width::HalfWord },
    Field { group: "USB_PLL_OSC", name: "PLLM", position: BITP_USB_PLL_OSC_PLLM, mask: BITM_USB_PLL_OSC_PLLM as u32, width: Width::HalfWord },
    Field { group: "USB_PLL_OSC", name: "DIVCLKIN", position: BITP_USB_PLL_OSC_DIVCLKIN, mask: BITM_USB_PLL_OSC_DIVCLKIN as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTLD", name: "VALUE", position: BITP_GPT_GPTLD_VALUE, mask: BITM_GPT_GPTLD_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTVAL", name: "VALUE", position: BITP_GPT_GPTVAL_VALUE, mask: BITM_GPT_GPTVAL_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTCAP", name: "VALUE", position: BITP_GPT_GPTCAP_VALUE, mask: BITM_GPT_GPTCAP_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTALD", name: "VALUE", position: BITP_GPT_GPTALD_VALUE, mask: BITM_GPT_GPTALD_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTAVAL", name: "VALUE", position: BITP_GPT_GPTAVAL_VALUE, mask: BITM_GPT_GPTAVAL_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPT_GPTPMAT", name: "VALUE", position: BITP_GPT_GPTPMAT_VALUE, mask: BITM_GPT_GPTPMAT_VALUE as u32, width: Width::HalfWord },
    Field { group: "PWR_PSMCON", name: "VALUE", position: BITP_PWR_PSMCON_VALUE, mask: BITM_PWR_PSMCON_VALUE as u32, width: Width::HalfWord },
    Field { group: "PWR_USBWKSTAT", name: "VALUE", position: BITP_PWR_USBWKSTAT_VALUE, mask: BITM_PWR_USBWKSTAT_VALUE as u32, width: Width::HalfWord },
    Field { group: "PWR_VCCMCON", name: "VALUE", position: BITP_PWR_VCCMCON_VALUE, mask: BITM_PWR_VCCMCON_VALUE as u32, width: Width::HalfWord },
    Field { group: "PWR_VBACKCON", name: "VALUE", position: BITP_PWR_VBACKCON_VALUE, mask: BITM_PWR_VBACKCON_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2VAL0", name: "VALUE", position: BITP_WUT_T2VAL0_VALUE, mask: BITM_WUT_T2VAL0_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2VAL1", name: "VALUE", position: BITP_WUT_T2VAL1_VALUE, mask: BITM_WUT_T2VAL1_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2WUFB0", name: "VALUE", position: BITP_WUT_T2WUFB0_VALUE, mask: BITM_WUT_T2WUFB0_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2WUFB1", name: "VALUE", position: BITP_WUT_T2WUFB1_VALUE, mask: BITM_WUT_T2WUFB1_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2WUFC0", name: "VALUE", position: BITP_WUT_T2WUFC0_VALUE, mask: BITM_WUT_T2WUFC0_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2WUFC1", name: "VALUE", position: BITP_WUT_T2WUFC1_VALUE, mask: BITM_WUT_T2WUFC1_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2WUFD0", name: "VALUE", position: BITP_WUT_T2WUFD0_VALUE, mask: BITM_WUT_T2WUFD0_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2WUFD1", name: "VALUE", position: BITP_WUT_T2WUFD1_VALUE, mask: BITM_WUT_T2WUFD1_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_WUTVAL_LOW", name: "VALUE", position: BITP_WUT_WUTVAL_LOW_VALUE, mask: BITM_WUT_WUTVAL_LOW_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_WUTVAL_HIGH", name: "VALUE", position: BITP_WUT_WUTVAL_HIGH_VALUE, mask: BITM_WUT_WUTVAL_HIGH_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2WUFA0", name: "VALUE", position: BITP_WUT_T2WUFA0_VALUE, mask: BITM_WUT_T2WUFA0_VALUE as u32, width: Width::HalfWord },
    Field { group: "WUT_T2WUFA1", name: "VALUE", position: BITP_WUT_T2WUFA1_VALUE, mask: BITM_WUT_T2WUFA1_VALUE as u32, width: Width::HalfWord },
    Field { group: "WDT_T3LD", name: "VALUE", position: BITP_WDT_T3LD_VALUE, mask: BITM_WDT_T3LD_VALUE as u32, width: Width::HalfWord },
    Field { group: "WDT_T3VAL", name: "VALUE", position: BITP_WDT_T3VAL_VALUE, mask: BITM_WDT_T3VAL_VALUE as u32, width: Width::HalfWord },
    Field { group: "RTC_RTCSR0", name: "VALUE", position: BITP_RTC_RTCSR0_VALUE, mask: BITM_RTC_RTCSR0_VALUE as u32, width: Width::HalfWord },
    Field { group: "RTC_RTCSR1", name: "VALUE", position: BITP_RTC_RTCSR1_VALUE, mask: BITM_RTC_RTCSR1_VALUE as u32, width: Width::HalfWord },
    Field { group: "RTC_RTCCNT0", name: "VALUE", position: BITP_RTC_RTCCNT0_VALUE, mask: BITM_RTC_RTCCNT0_VALUE as u32, width: Width::HalfWord },
    Field { group: "RTC_RTCCNT1", name: "VALUE", position: BITP_RTC_RTCCNT1_VALUE, mask: BITM_RTC_RTCCNT1_VALUE as u32, width: Width::HalfWord },
    Field { group: "RTC_RTCALM0", name: "VALUE", position: BITP_RTC_RTCALM0_VALUE, mask: BITM_RTC_RTCALM0_VALUE as u32, width: Width::HalfWord },
    Field { group: "RTC_RTCALM1", name: "VALUE", position: BITP_RTC_RTCALM1_VALUE, mask: BITM_RTC_RTCALM1_VALUE as u32, width: Width::HalfWord },
    Field { group: "RTC_RTCTRM", name: "VALUE", position: BITP_RTC_RTCTRM_VALUE, mask: BITM_RTC_RTCTRM_VALUE as u32, width: Width::HalfWord },
    Field { group: "RTC_RTCGWY", name: "VALUE", position: BITP_RTC_RTCGWY_VALUE, mask: BITM_RTC_RTCGWY_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMRX", name: "VALUE", position: BITP_I2C_I2CMRX_VALUE, mask: BITM_I2C_I2CMRX_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMTX", name: "VALUE", position: BITP_I2C_I2CMTX_VALUE, mask: BITM_I2C_I2CMTX_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CMCRXCNT", name: "VALUE", position: BITP_I2C_I2CMCRXCNT_VALUE, mask: BITM_I2C_I2CMCRXCNT_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CADR1", name: "VALUE", position: BITP_I2C_I2CADR1_VALUE, mask: BITM_I2C_I2CADR1_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CADR2", name: "VALUE", position: BITP_I2C_I2CADR2_VALUE, mask: BITM_I2C_I2CADR2_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CBYT", name: "VALUE", position: BITP_I2C_I2CBYT_VALUE, mask: BITM_I2C_I2CBYT_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSRX", name: "VALUE", position: BITP_I2C_I2CSRX_VALUE, mask: BITM_I2C_I2CSRX_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CSTX", name: "VALUE", position: BITP_I2C_I2CSTX_VALUE, mask: BITM_I2C_I2CSTX_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CALT", name: "VALUE", position: BITP_I2C_I2CALT_VALUE, mask: BITM_I2C_I2CALT_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CID0", name: "VALUE", position: BITP_I2C_I2CID0_VALUE, mask: BITM_I2C_I2CID0_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CID1", name: "VALUE", position: BITP_I2C_I2CID1_VALUE, mask: BITM_I2C_I2CID1_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CID2", name: "VALUE", position: BITP_I2C_I2CID2_VALUE, mask: BITM_I2C_I2CID2_VALUE as u32, width: Width::HalfWord },
    Field { group: "I2C_I2CID3", name: "VALUE", position: BITP_I2C_I2CID3_VALUE, mask: BITM_I2C_I2CID3_VALUE as u32, width: Width::HalfWord },
    Field { group: "UART_COMDIV", name: "VALUE", position: BITP_UART_COMDIV_VALUE, mask: BITM_UART_COMDIV_VALUE as u32, width: Width::HalfWord },
    Field { group: "RNG_RNGCNTL", name: "VALUE", position: BITP_RNG_RNGCNTL_VALUE, mask: BITM_RNG_RNGCNTL_VALUE as u32, width: Width::HalfWord },
    Field { group: "RNG_RNGCNTH", name: "VALUE", position: BITP_RNG_RNGCNTH_VALUE, mask: BITM_RNG_RNGCNTH_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA0_S0", name: "VALUE", position: BITP_LCD_LCDDATA0_S0_VALUE, mask: BITM_LCD_LCDDATA0_S0_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA1_S0", name: "VALUE", position: BITP_LCD_LCDDATA1_S0_VALUE, mask: BITM_LCD_LCDDATA1_S0_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA2_S0", name: "VALUE", position: BITP_LCD_LCDDATA2_S0_VALUE, mask: BITM_LCD_LCDDATA2_S0_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA3_S0", name: "VALUE", position: BITP_LCD_LCDDATA3_S0_VALUE, mask: BITM_LCD_LCDDATA3_S0_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA4_S0", name: "VALUE", position: BITP_LCD_LCDDATA4_S0_VALUE, mask: BITM_LCD_LCDDATA4_S0_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA5_S0", name: "VALUE", position: BITP_LCD_LCDDATA5_S0_VALUE, mask: BITM_LCD_LCDDATA5_S0_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA6_S0", name: "VALUE", position: BITP_LCD_LCDDATA6_S0_VALUE, mask: BITM_LCD_LCDDATA6_S0_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA7_S0", name: "VALUE", position: BITP_LCD_LCDDATA7_S0_VALUE, mask: BITM_LCD_LCDDATA7_S0_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA0_S1", name: "VALUE", position: BITP_LCD_LCDDATA0_S1_VALUE, mask: BITM_LCD_LCDDATA0_S1_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA1_S1", name: "VALUE", position: BITP_LCD_LCDDATA1_S1_VALUE, mask: BITM_LCD_LCDDATA1_S1_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA2_S1", name: "VALUE", position: BITP_LCD_LCDDATA2_S1_VALUE, mask: BITM_LCD_LCDDATA2_S1_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA3_S1", name: "VALUE", position: BITP_LCD_LCDDATA3_S1_VALUE, mask: BITM_LCD_LCDDATA3_S1_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA4_S1", name: "VALUE", position: BITP_LCD_LCDDATA4_S1_VALUE, mask: BITM_LCD_LCDDATA4_S1_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA5_S1", name: "VALUE", position: BITP_LCD_LCDDATA5_S1_VALUE, mask: BITM_LCD_LCDDATA5_S1_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA6_S1", name: "VALUE", position: BITP_LCD_LCDDATA6_S1_VALUE, mask: BITM_LCD_LCDDATA6_S1_VALUE as u32, width: Width::HalfWord },
    Field { group: "LCD_LCDDATA7_S1", name: "VALUE", position: BITP_LCD_LCDDATA7_S1_VALUE, mask: BITM_LCD_LCDDATA7_S1_VALUE as u32, width: Width::HalfWord },
    Field { group: "DMA_DMAPDBPTR", name: "VALUE", position: BITP_DMA_DMAPDBPTR_VALUE, mask: BITM_DMA_DMAPDBPTR_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMAADBPTR", name: "VALUE", position: BITP_DMA_DMAADBPTR_VALUE, mask: BITM_DMA_DMAADBPTR_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMASWREQ", name: "VALUE", position: BITP_DMA_DMASWREQ_VALUE, mask: BITM_DMA_DMASWREQ_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMARMSKSET", name: "VALUE", position: BITP_DMA_DMARMSKSET_VALUE, mask: BITM_DMA_DMARMSKSET_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMARMSKCLR", name: "VALUE", position: BITP_DMA_DMARMSKCLR_VALUE, mask: BITM_DMA_DMARMSKCLR_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMAENSET", name: "VALUE", position: BITP_DMA_DMAENSET_VALUE, mask: BITM_DMA_DMAENSET_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMAENCLR", name: "VALUE", position: BITP_DMA_DMAENCLR_VALUE, mask: BITM_DMA_DMAENCLR_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMAALTSET", name: "VALUE", position: BITP_DMA_DMAALTSET_VALUE, mask: BITM_DMA_DMAALTSET_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMAALTCLR", name: "VALUE", position: BITP_DMA_DMAALTCLR_VALUE, mask: BITM_DMA_DMAALTCLR_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMAPRISET", name: "VALUE", position: BITP_DMA_DMAPRISET_VALUE, mask: BITM_DMA_DMAPRISET_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMAPRICLR", name: "VALUE", position: BITP_DMA_DMAPRICLR_VALUE, mask: BITM_DMA_DMAPRICLR_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMAERRCHNLCLR", name: "VALUE", position: BITP_DMA_DMAERRCHNLCLR_VALUE, mask: BITM_DMA_DMAERRCHNLCLR_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMAINVALIDDESCCLR", name: "VALUE", position: BITP_DMA_DMAINVALIDDESCCLR_VALUE, mask: BITM_DMA_DMAINVALIDDESCCLR_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMABSSET", name: "VALUE", position: BITP_DMA_DMABSSET_VALUE, mask: BITM_DMA_DMABSSET_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMABSCLR", name: "VALUE", position: BITP_DMA_DMABSCLR_VALUE, mask: BITM_DMA_DMABSCLR_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMASRCADSSET", name: "VALUE", position: BITP_DMA_DMASRCADSSET_VALUE, mask: BITM_DMA_DMASRCADSSET_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMASRCADCLR", name: "VALUE", position: BITP_DMA_DMASRCADCLR_VALUE, mask: BITM_DMA_DMASRCADCLR_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMADSTADSET", name: "VALUE", position: BITP_DMA_DMADSTADSET_VALUE, mask: BITM_DMA_DMADSTADSET_VALUE as u32, width: Width::Word },
    Field { group: "DMA_DMADSTADCLR", name: "VALUE", position: BITP_DMA_DMADSTADCLR_VALUE, mask: BITM_DMA_DMADSTADCLR_VALUE as u32, width: Width::Word },
    Field { group: "FEE_FEEADR0L", name: "VALUE", position: BITP_FEE_FEEADR0L_VALUE, mask: BITM_FEE_FEEADR0L_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEADR1L", name: "VALUE", position: BITP_FEE_FEEADR1L_VALUE, mask: BITM_FEE_FEEADR1L_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEKEY", name: "VALUE", position: BITP_FEE_FEEKEY_VALUE, mask: BITM_FEE_FEEKEY_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEPROL", name: "VALUE", position: BITP_FEE_FEEPROL_VALUE, mask: BITM_FEE_FEEPROL_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEPROH", name: "VALUE", position: BITP_FEE_FEEPROH_VALUE, mask: BITM_FEE_FEEPROH_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEESIGL", name: "VALUE", position: BITP_FEE_FEESIGL_VALUE, mask: BITM_FEE_FEESIGL_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEADRAL", name: "VALUE", position: BITP_FEE_FEEADRAL_VALUE, mask: BITM_FEE_FEEADRAL_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEPARADRL", name: "VALUE", position: BITP_FEE_FEEPARADRL_VALUE, mask: BITM_FEE_FEEPARADRL_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEAEN0", name: "VALUE", position: BITP_FEE_FEEAEN0_VALUE, mask: BITM_FEE_FEEAEN0_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEAEN1", name: "VALUE", position: BITP_FEE_FEEAEN1_VALUE, mask: BITM_FEE_FEEAEN1_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEAEN2", name: "VALUE", position: BITP_FEE_FEEAEN2_VALUE, mask: BITM_FEE_FEEAEN2_VALUE as u32, width: Width::HalfWord },
    Field { group: "FEE_FEEAEN3", name: "VALUE", position: BITP_FEE_FEEAEN3_VALUE, mask: BITM_FEE_FEEAEN3_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEEADR0L", name: "VALUE", position: BITP_GPF_GPFEEADR0L_VALUE, mask: BITM_GPF_GPFEEADR0L_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEEADR1L", name: "VALUE", position: BITP_GPF_GPFEEADR1L_VALUE, mask: BITM_GPF_GPFEEADR1L_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEEKEY", name: "VALUE", position: BITP_GPF_GPFEEKEY_VALUE, mask: BITM_GPF_GPFEEKEY_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEESIGL", name: "VALUE", position: BITP_GPF_GPFEESIGL_VALUE, mask: BITM_GPF_GPFEESIGL_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEEADRAL", name: "VALUE", position: BITP_GPF_GPFEEADRAL_VALUE, mask: BITM_GPF_GPFEEADRAL_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEEAEN0", name: "VALUE", position: BITP_GPF_GPFEEAEN0_VALUE, mask: BITM_GPF_GPFEEAEN0_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEEAEN1", name: "VALUE", position: BITP_GPF_GPFEEAEN1_VALUE, mask: BITM_GPF_GPFEEAEN1_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEEAEN2", name: "VALUE", position: BITP_GPF_GPFEEAEN2_VALUE, mask: BITM_GPF_GPFEEAEN2_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPF_GPFEEAEN3", name: "VALUE", position: BITP_GPF_GPFEEAEN3_VALUE, mask: BITM_GPF_GPFEEAEN3_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPOEN", name: "VALUE", position: BITP_GPIO_GPOEN_VALUE, mask: BITM_GPIO_GPOEN_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPPE", name: "VALUE", position: BITP_GPIO_GPPE_VALUE, mask: BITM_GPIO_GPPE_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPIEN", name: "VALUE", position: BITP_GPIO_GPIEN_VALUE, mask: BITM_GPIO_GPIEN_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPIN", name: "VALUE", position: BITP_GPIO_GPIN_VALUE, mask: BITM_GPIO_GPIN_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPOUT", name: "VALUE", position: BITP_GPIO_GPOUT_VALUE, mask: BITM_GPIO_GPOUT_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPSET", name: "VALUE", position: BITP_GPIO_GPSET_VALUE, mask: BITM_GPIO_GPSET_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPCLR", name: "VALUE", position: BITP_GPIO_GPCLR_VALUE, mask: BITM_GPIO_GPCLR_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPTGL", name: "VALUE", position: BITP_GPIO_GPTGL_VALUE, mask: BITM_GPIO_GPTGL_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPPOL", name: "VALUE", position: BITP_GPIO_GPPOL_VALUE, mask: BITM_GPIO_GPPOL_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPIENA", name: "VALUE", position: BITP_GPIO_GPIENA_VALUE, mask: BITM_GPIO_GPIENA_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPIENB", name: "VALUE", position: BITP_GPIO_GPIENB_VALUE, mask: BITM_GPIO_GPIENB_VALUE as u32, width: Width::HalfWord },
    Field { group: "GPIO_GPINT", name: "VALUE", position: BITP_GPIO_GPINT_VALUE, mask: BITM_GPIO_GPINT_VALUE as u32, width: Width::HalfWord },
    Field { group: "BUSM_BMARBIT0", name: "VALUE", position: BITP_BUSM_BMARBIT0_VALUE, mask: BITM_BUSM_BMARBIT0_VALUE as u32, width: Width::HalfWord },
    Field { group: "BUSM_BMARBIT1", name: "VALUE", position: BITP_BUSM_BMARBIT1_VALUE, mask: BITM_BUSM_BMARBIT1_VALUE as u32, width: Width::HalfWord },
    Field { group: "BUSM_BMARBIT2", name: "VALUE", position: BITP_BUSM_BMARBIT2_VALUE, mask: BITM_BUSM_BMARBIT2_VALUE as u32, width: Width::HalfWord },
    Field { group: "BUSM_BMARBIT3", name: "VALUE", position: BITP_BUSM_BMARBIT3_VALUE, mask: BITM_BUSM_BMARBIT3_VALUE as u32, width: Width::HalfWord },
    Field { group: "BUSM_BMARBIT4", name: "VALUE", position: BITP_BUSM_BMARBIT4_VALUE, mask: BITM_BUSM_BMARBIT4_VALUE as u32, width: Width::HalfWord },
    Field { group: "BUSM_BMARBIT5", name: "VALUE", position: BITP_BUSM_BMARBIT5_VALUE, mask: BITM_BUSM_BMARBIT5_VALUE as u32, width: Width::HalfWord },
    Field { group: "CRC_CRC_IPDATA", name: "VALUE", position: BITP_CRC_CRC_IPDATA_VALUE, mask: BITM_CRC_CRC_IPDATA_VALUE as u32, width: Width::Word },
    Field { group: "CRC_CRC_RESULT", name: "VALUE", position: BITP_CRC_CRC_RESULT_VALUE, mask: BITM_CRC_CRC_RESULT_VALUE as u32, width: Width::Word },
    Field { group: "PDI_PDI_FIFO", name: "VALUE", position: BITP_PDI_PDI_FIFO_VALUE, mask: BITM_PDI_PDI_FIFO_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_SW_FULL_CFG_MSB", name: "VALUE", position: BITP_AFE_AFE_SW_FULL_CFG_MSB_VALUE, mask: BITM_AFE_AFE_SW_FULL_CFG_MSB_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_SW_FULL_CFG_LSB", name: "VALUE", position: BITP_AFE_AFE_SW_FULL_CFG_LSB_VALUE, mask: BITM_AFE_AFE_SW_FULL_CFG_LSB_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_SEQ_CRC", name: "VALUE", position: BITP_AFE_AFE_SEQ_CRC_VALUE, mask: BITM_AFE_AFE_SEQ_CRC_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_DATA_FIFO_READ", name: "VALUE", position: BITP_AFE_AFE_DATA_FIFO_READ_VALUE, mask: BITM_AFE_AFE_DATA_FIFO_READ_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_CMD_FIFO_WRITE", name: "VALUE", position: BITP_AFE_AFE_CMD_FIFO_WRITE_VALUE, mask: BITM_AFE_AFE_CMD_FIFO_WRITE_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_SW_STATUS_MSB", name: "VALUE", position: BITP_AFE_AFE_SW_STATUS_MSB_VALUE, mask: BITM_AFE_AFE_SW_STATUS_MSB_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_SW_STATUS_LSB", name: "VALUE", position: BITP_AFE_AFE_SW_STATUS_LSB_VALUE, mask: BITM_AFE_AFE_SW_STATUS_LSB_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADC_GAIN_TIA", name: "VALUE", position: BITP_AFE_AFE_ADC_GAIN_TIA_VALUE, mask: BITM_AFE_AFE_ADC_GAIN_TIA_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADC_OFFSET_TIA", name: "VALUE", position: BITP_AFE_AFE_ADC_OFFSET_TIA_VALUE, mask: BITM_AFE_AFE_ADC_OFFSET_TIA_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADC_GAIN_TEMP_SENS", name: "VALUE", position: BITP_AFE_AFE_ADC_GAIN_TEMP_SENS_VALUE, mask: BITM_AFE_AFE_ADC_GAIN_TEMP_SENS_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADC_OFFSET_TEMP_SENS", name: "VALUE", position: BITP_AFE_AFE_ADC_OFFSET_TEMP_SENS_VALUE, mask: BITM_AFE_AFE_ADC_OFFSET_TEMP_SENS_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADC_GAIN_AUX", name: "VALUE", position: BITP_AFE_AFE_ADC_GAIN_AUX_VALUE, mask: BITM_AFE_AFE_ADC_GAIN_AUX_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_ADC_OFFSET_AUX", name: "VALUE", position: BITP_AFE_AFE_ADC_OFFSET_AUX_VALUE, mask: BITM_AFE_AFE_ADC_OFFSET_AUX_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_DAC_OFFSET_UNITY", name: "VALUE", position: BITP_AFE_AFE_DAC_OFFSET_UNITY_VALUE, mask: BITM_AFE_AFE_DAC_OFFSET_UNITY_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_DAC_OFFSET_ATTEN", name: "VALUE", position: BITP_AFE_AFE_DAC_OFFSET_ATTEN_VALUE, mask: BITM_AFE_AFE_DAC_OFFSET_ATTEN_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_DAC_GAIN", name: "VALUE", position: BITP_AFE_AFE_DAC_GAIN_VALUE, mask: BITM_AFE_AFE_DAC_GAIN_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_REF_TRIM0", name: "VALUE", position: BITP_AFE_AFE_REF_TRIM0_VALUE, mask: BITM_AFE_AFE_REF_TRIM0_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_REF_TRIM1", name: "VALUE", position: BITP_AFE_AFE_REF_TRIM1_VALUE, mask: BITM_AFE_AFE_REF_TRIM1_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_ALDO_TRIM", name: "VALUE", position: BITP_AFE_AFE_ALDO_TRIM_VALUE, mask: BITM_AFE_AFE_ALDO_TRIM_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_DAC_TRIM", name: "VALUE", position: BITP_AFE_AFE_DAC_TRIM_VALUE, mask: BITM_AFE_AFE_DAC_TRIM_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_INAMP_TRIM", name: "VALUE", position: BITP_AFE_AFE_INAMP_TRIM_VALUE, mask: BITM_AFE_AFE_INAMP_TRIM_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_EXBUF_TRIM", name: "VALUE", position: BITP_AFE_AFE_EXBUF_TRIM_VALUE, mask: BITM_AFE_AFE_EXBUF_TRIM_VALUE as u32, width: Width::Word },
    Field { group: "AFE_AFE_TEMP_SENS_TRIM", name: "VALUE", position: BITP_AFE_AFE_TEMP_SENS_TRIM_VALUE, mask: BITM_AFE_AFE_TEMP_SENS_TRIM_VALUE as u32, width: Width::Word },
    Field { group: "USB_EPI_FIFOSIZE", name: "VALUE", position: BITP_USB_EPI_FIFOSIZE_VALUE, mask: BITM_USB_EPI_FIFOSIZE_VALUE as u32, width: Width::Byte },
    Field { group: "USB_FIFO", name: "VALUE", position: BITP_USB_FIFO_VALUE, mask: BITM_USB_FIFO_VALUE as u32, width: Width::Word },
    Field { group: "USB_FIFOH", name: "VALUE", position: BITP_USB_FIFOH_VALUE, mask: BITM_USB_FIFOH_VALUE as u32, width: Width::HalfWord },
    Field { group: "USB_FIFOB", name: "VALUE", position: BITP_USB_FIFOB_VALUE, mask: BITM_USB_FIFOB_VALUE as u32, width: Width::Byte },
    Field { group: "USB_MISC", name: "VALUE", position: BITP_USB_MISC_VALUE, mask: BITM_USB_MISC_VALUE as u32, width: Width::Byte },
    Field { group: "USB_FS_EOF1", name: "VALUE", position: BITP_USB_FS_EOF1_VALUE, mask: BITM_USB_FS_EOF1_VALUE as u32, width: Width::Byte },
    Field { group: "USB_EP_FIFOSIZE", name: "VALUE", position: BITP_USB_EP_FIFOSIZE_VALUE, mask: BITM_USB_EP_FIFOSIZE_VALUE as u32, width: Width::Byte },
    Field { group: "USB_DMA_ADDR", name: "VALUE", position: BITP_USB_DMA_ADDR_VALUE, mask: BITM_USB_DMA_ADDR_VALUE as u32, width: Width::Word },
    Field { group: "USB_DMA_CNT", name: "VALUE", position: BITP_USB_DMA_CNT_VALUE, mask: BITM_USB_DMA_CNT_VALUE as u32, width: Width::Word },
    Field { group: "USB_RXDPKTBUFDIS", name: "VALUE", position: BITP_USB_RXDPKTBUFDIS_VALUE, mask: BITM_USB_RXDPKTBUFDIS_VALUE as u32, width: Width::HalfWord },
    Field { group: "USB_TXDPKTBUFDIS", name: "VALUE", position: BITP_USB_TXDPKTBUFDIS_VALUE, mask: BITM_USB_TXDPKTBUFDIS_VALUE as u32, width: Width::HalfWord },
    Field { group: "USB_PHY_STAT", name: "VALUE", position: BITP_USB_PHY_STAT_VALUE, mask: BITM_USB_PHY_STAT_VALUE as u32, width: Width::HalfWord },
    Field { group: "USB_RAM_ADDR", name: "VALUE", position: BITP_USB_RAM_ADDR_VALUE, mask: BITM_USB_RAM_ADDR_VALUE as u32, width: Width::Word },
    Field { group: "USB_RAM_DATA", name: "VALUE", position: BITP_USB_RAM_DATA_VALUE, mask: BITM_USB_RAM_DATA_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTSETE0", name: "VALUE", position: BITP_NVIC_INTSETE0_VALUE, mask: BITM_NVIC_INTSETE0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTSETE1", name: "VALUE", position: BITP_NVIC_INTSETE1_VALUE, mask: BITM_NVIC_INTSETE1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTCLRE0", name: "VALUE", position: BITP_NVIC_INTCLRE0_VALUE, mask: BITM_NVIC_INTCLRE0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTCLRE1", name: "VALUE", position: BITP_NVIC_INTCLRE1_VALUE, mask: BITM_NVIC_INTCLRE1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTSETP0", name: "VALUE", position: BITP_NVIC_INTSETP0_VALUE, mask: BITM_NVIC_INTSETP0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTSETP1", name: "VALUE", position: BITP_NVIC_INTSETP1_VALUE, mask: BITM_NVIC_INTSETP1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTCLRP0", name: "VALUE", position: BITP_NVIC_INTCLRP0_VALUE, mask: BITM_NVIC_INTCLRP0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTCLRP1", name: "VALUE", position: BITP_NVIC_INTCLRP1_VALUE, mask: BITM_NVIC_INTCLRP1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTACT0", name: "VALUE", position: BITP_NVIC_INTACT0_VALUE, mask: BITM_NVIC_INTACT0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTACT1", name: "VALUE", position: BITP_NVIC_INTACT1_VALUE, mask: BITM_NVIC_INTACT1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPRI0", name: "VALUE", position: BITP_NVIC_INTPRI0_VALUE, mask: BITM_NVIC_INTPRI0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPRI1", name: "VALUE", position: BITP_NVIC_INTPRI1_VALUE, mask: BITM_NVIC_INTPRI1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPRI2", name: "VALUE", position: BITP_NVIC_INTPRI2_VALUE, mask: BITM_NVIC_INTPRI2_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPRI3", name: "VALUE", position: BITP_NVIC_INTPRI3_VALUE, mask: BITM_NVIC_INTPRI3_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPRI4", name: "VALUE", position: BITP_NVIC_INTPRI4_VALUE, mask: BITM_NVIC_INTPRI4_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPRI5", name: "VALUE", position: BITP_NVIC_INTPRI5_VALUE, mask: BITM_NVIC_INTPRI5_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPRI6", name: "VALUE", position: BITP_NVIC_INTPRI6_VALUE, mask: BITM_NVIC_INTPRI6_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPRI7", name: "VALUE", position: BITP_NVIC_INTPRI7_VALUE, mask: BITM_NVIC_INTPRI7_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPRI8", name: "VALUE", position: BITP_NVIC_INTPRI8_VALUE, mask: BITM_NVIC_INTPRI8_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPRI9", name: "VALUE", position: BITP_NVIC_INTPRI9_VALUE, mask: BITM_NVIC_INTPRI9_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPRI10", name: "VALUE", position: BITP_NVIC_INTPRI10_VALUE, mask: BITM_NVIC_INTPRI10_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTCPID", name: "VALUE", position: BITP_NVIC_INTCPID_VALUE, mask: BITM_NVIC_INTCPID_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTSHPRIO0", name: "VALUE", position: BITP_NVIC_INTSHPRIO0_VALUE, mask: BITM_NVIC_INTSHPRIO0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTSHPRIO1", name: "VALUE", position: BITP_NVIC_INTSHPRIO1_VALUE, mask: BITM_NVIC_INTSHPRIO1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTSHPRIO3", name: "VALUE", position: BITP_NVIC_INTSHPRIO3_VALUE, mask: BITM_NVIC_INTSHPRIO3_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTDFSR", name: "VALUE", position: BITP_NVIC_INTDFSR_VALUE, mask: BITM_NVIC_INTDFSR_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTMMAR", name: "VALUE", position: BITP_NVIC_INTMMAR_VALUE, mask: BITM_NVIC_INTMMAR_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTBFAR", name: "VALUE", position: BITP_NVIC_INTBFAR_VALUE, mask: BITM_NVIC_INTBFAR_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTAFSR", name: "VALUE", position: BITP_NVIC_INTAFSR_VALUE, mask: BITM_NVIC_INTAFSR_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPFR0", name: "VALUE", position: BITP_NVIC_INTPFR0_VALUE, mask: BITM_NVIC_INTPFR0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPFR1", name: "VALUE", position: BITP_NVIC_INTPFR1_VALUE, mask: BITM_NVIC_INTPFR1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTDFR0", name: "VALUE", position: BITP_NVIC_INTDFR0_VALUE, mask: BITM_NVIC_INTDFR0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTAFR0", name: "VALUE", position: BITP_NVIC_INTAFR0_VALUE, mask: BITM_NVIC_INTAFR0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTMMFR0", name: "VALUE", position: BITP_NVIC_INTMMFR0_VALUE, mask: BITM_NVIC_INTMMFR0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTMMFR1", name: "VALUE", position: BITP_NVIC_INTMMFR1_VALUE, mask: BITM_NVIC_INTMMFR1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTMMFR2", name: "VALUE", position: BITP_NVIC_INTMMFR2_VALUE, mask: BITM_NVIC_INTMMFR2_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTMMFR3", name: "VALUE", position: BITP_NVIC_INTMMFR3_VALUE, mask: BITM_NVIC_INTMMFR3_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTISAR0", name: "VALUE", position: BITP_NVIC_INTISAR0_VALUE, mask: BITM_NVIC_INTISAR0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTISAR1", name: "VALUE", position: BITP_NVIC_INTISAR1_VALUE, mask: BITM_NVIC_INTISAR1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTISAR2", name: "VALUE", position: BITP_NVIC_INTISAR2_VALUE, mask: BITM_NVIC_INTISAR2_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTISAR3", name: "VALUE", position: BITP_NVIC_INTISAR3_VALUE, mask: BITM_NVIC_INTISAR3_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTISAR4", name: "VALUE", position: BITP_NVIC_INTISAR4_VALUE, mask: BITM_NVIC_INTISAR4_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPID4", name: "VALUE", position: BITP_NVIC_INTPID4_VALUE, mask: BITM_NVIC_INTPID4_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPID5", name: "VALUE", position: BITP_NVIC_INTPID5_VALUE, mask: BITM_NVIC_INTPID5_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPID6", name: "VALUE", position: BITP_NVIC_INTPID6_VALUE, mask: BITM_NVIC_INTPID6_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPID7", name: "VALUE", position: BITP_NVIC_INTPID7_VALUE, mask: BITM_NVIC_INTPID7_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPID0", name: "VALUE", position: BITP_NVIC_INTPID0_VALUE, mask: BITM_NVIC_INTPID0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPID1", name: "VALUE", position: BITP_NVIC_INTPID1_VALUE, mask: BITM_NVIC_INTPID1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPID2", name: "VALUE", position: BITP_NVIC_INTPID2_VALUE, mask: BITM_NVIC_INTPID2_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTPID3", name: "VALUE", position: BITP_NVIC_INTPID3_VALUE, mask: BITM_NVIC_INTPID3_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTCID0", name: "VALUE", position: BITP_NVIC_INTCID0_VALUE, mask: BITM_NVIC_INTCID0_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTCID1", name: "VALUE", position: BITP_NVIC_INTCID1_VALUE, mask: BITM_NVIC_INTCID1_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTCID2", name: "VALUE", position: BITP_NVIC_INTCID2_VALUE, mask: BITM_NVIC_INTCID2_VALUE as u32, width: Width::Word },
    Field { group: "NVIC_INTCID3", name: "VALUE", position: BITP_NVIC_INTCID3_VALUE, mask: BITM_NVIC_INTCID3_VALUE as u32, width: Width::Word },
];

pub(crate) static ENUMS: [EnumValue; 706] = [
    EnumValue { group: "GPT_GPTCON", field: "PRE", name: "PRE_DIV1", value: ENUM_GPT_GPTCON_PRE_DIV1 as u32 },
    EnumValue { group: "GPT_GPTCON", field: "PRE", name: "PRE_DIV16", value: ENUM_GPT_GPTCON_PRE_DIV16 as u32 },
    EnumValue { group: "GPT_GPTCON", field: "PRE", name: "PRE_DIV256", value: ENUM_GPT_GPTCON_PRE_DIV256 as u32 },
    EnumValue { group: "GPT_GPTCON", field: "PRE", name: "PRE_DIV32768", value: ENUM_GPT_GPTCON_PRE_DIV32768 as u32 },
    EnumValue { group: "GPT_GPTCON", field: "MOD", name: "MOD_FREERUN", value: ENUM_GPT_GPTCON_MOD_FREERUN as u32 },
    EnumValue { group: "GPT_GPTCON", field: "MOD", name: "MOD_PERIODIC", value: ENUM_GPT_GPTCON_MOD_PERIODIC as u32 },
    EnumValue { group: "GPT_GPTCON", field: "CLK", name: "CLK_UCLK", value: ENUM_GPT_GPTCON_CLK_UCLK as u32 },
    EnumValue { group: "GPT_GPTCON", field: "CLK", name: "CLK_HFOSC", value: ENUM_GPT_GPTCON_CLK_HFOSC as u32 },
    EnumValue { group: "GPT_GPTCON", field: "CLK", name: "CLK_LFOSC", value: ENUM_GPT_GPTCON_CLK_LFOSC as u32 },
    EnumValue { group: "GPT_GPTCON", field: "CLK", name: "CLK_LFXTAL", value: ENUM_GPT_GPTCON_CLK_LFXTAL as u32 },
    EnumValue { group: "PWR_PWRMOD", field: "PWRMOD", name: "PWRMOD_ACTIVE", value: ENUM_PWR_PWRMOD_PWRMOD_ACTIVE as u32 },
    EnumValue { group: "PWR_PWRMOD", field: "PWRMOD", name: "PWRMOD_CORE_SLEEP", value: ENUM_PWR_PWRMOD_PWRMOD_CORE_SLEEP as u32 },
    EnumValue { group: "PWR_PWRMOD", field: "PWRMOD", name: "PWRMOD_SYS_SLEEP", value: ENUM_PWR_PWRMOD_PWRMOD_SYS_SLEEP as u32 },
    EnumValue { group: "PWR_PWRMOD", field: "PWRMOD", name: "PWRMOD_HIBERNATE", value: ENUM_PWR_PWRMOD_PWRMOD_HIBERNATE as u32 },
    EnumValue { group: "PWR_PWRKEY", field: "VALUE", name: "VALUE_KEY1", value: ENUM_PWR_PWRKEY_VALUE_KEY1 as u32 },
    EnumValue { group: "PWR_PWRKEY", field: "VALUE", name: "VALUE_KEY2", value: ENUM_PWR_PWRKEY_VALUE_KEY2 as u32 },
    EnumValue { group: "PWR_OSCKEY", field: "VALUE", name: "VALUE_UNLOCK", value: ENUM_PWR_OSCKEY_VALUE_UNLOCK as u32 },
    EnumValue { group: "WUT_T2CON", field: "PRE", name: "PRE_DIV1", value: ENUM_WUT_T2CON_PRE_DIV1 as u32 },
    EnumValue { group: "WUT_T2CON", field: "PRE", name: "PRE_DIV16", value: ENUM_WUT_T2CON_PRE_DIV16 as u32 },
    EnumValue { group: "WUT_T2CON", field: "PRE", name: "PRE_DIV256", value: ENUM_WUT_T2CON_PRE_DIV256 as u32 },
    EnumValue { group: "WUT_T2CON", field: "PRE", name: "PRE_DIV32768", value: ENUM_WUT_T2CON_PRE_DIV32768 as u32 },
    EnumValue { group: "WUT_T2CON", field: "MOD", name: "MOD_PERIODIC", value: ENUM_WUT_T2CON_MOD_PERIODIC as u32 },
    EnumValue { group: "WUT_T2CON", field: "MOD", name: "MOD_FREERUN", value: ENUM_WUT_T2CON_MOD_FREERUN as u32 },
    EnumValue { group: "WUT_T2CON", field: "CLK", name: "CLK_PCLK", value: ENUM_WUT_T2CON_CLK_PCLK as u32 },
    EnumValue { group: "WUT_T2CON", field: "CLK", name: "CLK_LFXTAL", value: ENUM_WUT_T2CON_CLK_LFXTAL as u32 },
    EnumValue { group: "WUT_T2CON", field: "CLK", name: "CLK_LFOSC", value: ENUM_WUT_T2CON_CLK_LFOSC as u32 },
    EnumValue { group: "WUT_T2CON", field: "CLK", name: "CLK_EXTCLK", value: ENUM_WUT_T2CON_CLK_EXTCLK as u32 },
    EnumValue { group: "WDT_T3CON", field: "PRE", name: "PRE_DIV1", value: ENUM_WDT_T3CON_PRE_DIV1 as u32 },
    EnumValue { group: "WDT_T3CON", field: "PRE", name: "PRE_DIV16", value: ENUM_WDT_T3CON_PRE_DIV16 as u32 },
    EnumValue { group: "WDT_T3CON", field: "PRE", name: "PRE_DIV256", value: ENUM_WDT_T3CON_PRE_DIV256 as u32 },
    EnumValue { group: "WDT_T3CON", field: "PRE", name: "PRE_DIV4096", value: ENUM_WDT_T3CON_PRE_DIV4096 as u32 },
    EnumValue { group: "WDT_T3CON", field: "MOD", name: "MOD_FREERUN", value: ENUM_WDT_T3CON_MOD_FREERUN as u32 },
    EnumValue { group: "WDT_T3CON", field: "MOD", name: "MOD_PERIODIC", value: ENUM_WDT_T3CON_MOD_PERIODIC as u32 },
    EnumValue { group: "WDT_T3CLRI", field: "VALUE", name: "VALUE_CLR", value: ENUM_WDT_T3CLRI_VALUE_CLR as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "STXFSTA", name: "STXFSTA_EMPTY", value: ENUM_I2C_I2CFSTA_STXFSTA_EMPTY as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "STXFSTA", name: "STXFSTA_ONEBYTE", value: ENUM_I2C_I2CFSTA_STXFSTA_ONEBYTE as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "STXFSTA", name: "STXFSTA_TWOBYTES", value: ENUM_I2C_I2CFSTA_STXFSTA_TWOBYTES as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "SRXFSTA", name: "SRXFSTA_EMPTY", value: ENUM_I2C_I2CFSTA_SRXFSTA_EMPTY as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "SRXFSTA", name: "SRXFSTA_ONEBYTE", value: ENUM_I2C_I2CFSTA_SRXFSTA_ONEBYTE as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "SRXFSTA", name: "SRXFSTA_TWOBYTES", value: ENUM_I2C_I2CFSTA_SRXFSTA_TWOBYTES as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "MTXFSTA", name: "MTXFSTA_EMPTY", value: ENUM_I2C_I2CFSTA_MTXFSTA_EMPTY as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "MTXFSTA", name: "MTXFSTA_ONEBYTE", value: ENUM_I2C_I2CFSTA_MTXFSTA_ONEBYTE as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "MTXFSTA", name: "MTXFSTA_TWOBYTES", value: ENUM_I2C_I2CFSTA_MTXFSTA_TWOBYTES as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "MRXFSTA", name: "MRXFSTA_EMPTY", value: ENUM_I2C_I2CFSTA_MRXFSTA_EMPTY as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "MRXFSTA", name: "MRXFSTA_ONEBYTE", value: ENUM_I2C_I2CFSTA_MRXFSTA_ONEBYTE as u32 },
    EnumValue { group: "I2C_I2CFSTA", field: "MRXFSTA", name: "MRXFSTA_TWOBYTES", value: ENUM_I2C_I2CFSTA_MRXFSTA_TWOBYTES as u32 },
    EnumValue { group: "SPI_SPISTA", field: "TXFSTA", name: "TXFSTA_EMPTY", value: ENUM_SPI_SPISTA_TXFSTA_EMPTY as u32 },
    EnumValue { group: "SPI_SPISTA", field: "TXFSTA", name: "TXFSTA_ONEBYTE", value: ENUM_SPI_SPISTA_TXFSTA_ONEBYTE as u32 },
    EnumValue { group: "SPI_SPISTA", field: "TXFSTA", name: "TXFSTA_TWOBYTES", value: ENUM_SPI_SPISTA_TXFSTA_TWOBYTES as u32 },
    EnumValue { group: "SPI_SPISTA", field: "TXFSTA", name: "TXFSTA_THREEBYTES", value: ENUM_SPI_SPISTA_TXFSTA_THREEBYTES as u32 },
    EnumValue { group: "SPI_SPISTA", field: "TXFSTA", name: "TXFSTA_FOURBYTES", value: ENUM_SPI_SPISTA_TXFSTA_FOURBYTES as u32 },
    EnumValue { group: "SPI_SPISTA", field: "RXFSTA", name: "RXFSTA_EMPTY", value: ENUM_SPI_SPISTA_RXFSTA_EMPTY as u32 },
    EnumValue { group: "SPI_SPISTA", field: "RXFSTA", name: "RXFSTA_ONEBYTE", value: ENUM_SPI_SPISTA_RXFSTA_ONEBYTE as u32 },
    EnumValue { group: "SPI_SPISTA", field: "RXFSTA", name: "RXFSTA_TWOBYTES", value: ENUM_SPI_SPISTA_RXFSTA_TWOBYTES as u32 },
    EnumValue { group: "SPI_SPISTA", field: "RXFSTA", name: "RXFSTA_THREEBYTES", value: ENUM_SPI_SPISTA_RXFSTA_THREEBYTES as u32 },
    EnumValue { group: "SPI_SPISTA", field: "RXFSTA", name: "RXFSTA_FOURBYTES", value: ENUM_SPI_SPISTA_RXFSTA_FOURBYTES as u32 },
    EnumValue { group: "SPI_SPICON", field: "CPHA", name: "CPHA_SAMPLELEADING", value: ENUM_SPI_SPICON_CPHA_SAMPLELEADING as u32 },
    EnumValue { group: "SPI_SPICON", field: "CPHA", name: "CPHA_SAMPLETRAILING", value: ENUM_SPI_SPICON_CPHA_SAMPLETRAILING as u32 },
    EnumValue { group: "SPI_SPICON", field: "TIM", name: "TIM_RXRD", value: ENUM_SPI_SPICON_TIM_RXRD as u32 },
    EnumValue { group: "SPI_SPICON", field: "TIM", name: "TIM_TXWR", value: ENUM_SPI_SPICON_TIM_TXWR as u32 },
    EnumValue { group: "SPI_SPICON", field: "MOD", name: "MOD_TX1RX1", value: ENUM_SPI_SPICON_MOD_TX1RX1 as u32 },
    EnumValue { group: "SPI_SPICON", field: "MOD", name: "MOD_TX2RX2", value: ENUM_SPI_SPICON_MOD_TX2RX2 as u32 },
    EnumValue { group: "SPI_SPICON", field: "MOD", name: "MOD_TX3RX3", value: ENUM_SPI_SPICON_MOD_TX3RX3 as u32 },
    EnumValue { group: "SPI_SPICON", field: "MOD", name: "MOD_TX4RX4", value: ENUM_SPI_SPICON_MOD_TX4RX4 as u32 },
    EnumValue { group: "UART_COMIIR", field: "STA", name: "STA_MODEMSTATUS", value: ENUM_UART_COMIIR_STA_MODEMSTATUS as u32 },
    EnumValue { group: "UART_COMIIR", field: "STA", name: "STA_TXBUFEMPTY", value: ENUM_UART_COMIIR_STA_TXBUFEMPTY as u32 },
    EnumValue { group: "UART_COMIIR", field: "STA", name: "STA_RXBUFFULL", value: ENUM_UART_COMIIR_STA_RXBUFFULL as u32 },
    EnumValue { group: "UART_COMIIR", field: "STA", name: "STA_RXLINESTATUS", value: ENUM_UART_COMIIR_STA_RXLINESTATUS as u32 },
    EnumValue { group: "UART_COMLCR", field: "WLS", name: "WLS_5BITS", value: ENUM_UART_COMLCR_WLS_5BITS as u32 },
    EnumValue { group: "UART_COMLCR", field: "WLS", name: "WLS_6BITS", value: ENUM_UART_COMLCR_WLS_6BITS as u32 },
    EnumValue { group: "UART_COMLCR", field: "WLS", name: "WLS_7BITS", value: ENUM_UART_COMLCR_WLS_7BITS as u32 },
    EnumValue { group: "UART_COMLCR", field: "WLS", name: "WLS_8BITS", value: ENUM_UART_COMLCR_WLS_8BITS as u32 },
    EnumValue { group: "I2S_I2S_MODE1", field: "SDATA_FMT", name: "SDATA_FMT_I2S", value: ENUM_I2S_I2S_MODE1_SDATA_FMT_I2S as u32 },
    EnumValue { group: "I2S_I2S_MODE1", field: "SDATA_FMT", name: "SDATA_FMT_LJ", value: ENUM_I2S_I2S_MODE1_SDATA_FMT_LJ as u32 },
    EnumValue { group: "I2S_I2S_MODE1", field: "SDATA_FMT", name: "SDATA_FMT_RJ24", value: ENUM_I2S_I2S_MODE1_SDATA_FMT_RJ24 as u32 },
    EnumValue { group: "I2S_I2S_MODE1", field: "SDATA_FMT", name: "SDATA_FMT_RJ16", value: ENUM_I2S_I2S_MODE1_SDATA_FMT_RJ16 as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_128HZ", value: ENUM_LCD_LCDCON_FRAMESEL_128HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_102_4HZ", value: ENUM_LCD_LCDCON_FRAMESEL_102_4HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_85_3HZ", value: ENUM_LCD_LCDCON_FRAMESEL_85_3HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_73_1HZ", value: ENUM_LCD_LCDCON_FRAMESEL_73_1HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_64HZ", value: ENUM_LCD_LCDCON_FRAMESEL_64HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_56_9HZ", value: ENUM_LCD_LCDCON_FRAMESEL_56_9HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_51_2HZ", value: ENUM_LCD_LCDCON_FRAMESEL_51_2HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_46_5HZ", value: ENUM_LCD_LCDCON_FRAMESEL_46_5HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_42_7HZ", value: ENUM_LCD_LCDCON_FRAMESEL_42_7HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_39_4HZ", value: ENUM_LCD_LCDCON_FRAMESEL_39_4HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_36_6HZ", value: ENUM_LCD_LCDCON_FRAMESEL_36_6HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_34_1HZ", value: ENUM_LCD_LCDCON_FRAMESEL_34_1HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_32HZ", value: ENUM_LCD_LCDCON_FRAMESEL_32HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_30_1HZ", value: ENUM_LCD_LCDCON_FRAMESEL_30_1HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_28_4HZ", value: ENUM_LCD_LCDCON_FRAMESEL_28_4HZ as u32 },
    EnumValue { group: "LCD_LCDCON", field: "FRAMESEL", name: "FRAMESEL_26_9HZ", value: ENUM_LCD_LCDCON_FRAMESEL_26_9HZ as u32 },
    EnumValue { group: "DMA_DMASTA", field: "STATE", name: "STATE_IDLE", value: ENUM_DMA_DMASTA_STATE_IDLE as u32 },
    EnumValue { group: "DMA_DMASTA", field: "STATE", name: "STATE_RDCHNLDATA", value: ENUM_DMA_DMASTA_STATE_RDCHNLDATA as u32 },
    EnumValue { group: "DMA_DMASTA", field: "STATE", name: "STATE_RDSRCENDPTR", value: ENUM_DMA_DMASTA_STATE_RDSRCENDPTR as u32 },
    EnumValue { group: "DMA_DMASTA", field: "STATE", name: "STATE_RDDSTENDPTR", value: ENUM_DMA_DMASTA_STATE_RDDSTENDPTR as u32 },
    EnumValue { group: "DMA_DMASTA", field: "STATE", name: "STATE_RDSRCDATA", value: ENUM_DMA_DMASTA_STATE_RDSRCDATA as u32 },
    EnumValue { group: "DMA_DMASTA", field: "STATE", name: "STATE_WRDSTDATA", value: ENUM_DMA_DMASTA_STATE_WRDSTDATA as u32 },
    EnumValue { group: "DMA_DMASTA", field: "STATE", name: "STATE_WAITDMAREQCLR", value: ENUM_DMA_DMASTA_STATE_WAITDMAREQCLR as u32 },
    EnumValue { group: "DMA_DMASTA", field: "STATE", name: "STATE_WRCHNLDATA", value: ENUM_DMA_DMASTA_STATE_WRCHNLDATA as u32 },
    EnumValue { group: "DMA_DMASTA", field: "STATE", name: "STATE_STALLED", value: ENUM_DMA_DMASTA_STATE_STALLED as u32 },
    EnumValue { group: "DMA_DMASTA", field: "STATE", name: "STATE_DONE", value: ENUM_DMA_DMASTA_STATE_DONE as u32 },
    EnumValue { group: "DMA_DMASTA", field: "STATE", name: "STATE_SCATRGATHR", value: ENUM_DMA_DMASTA_STATE_SCATRGATHR as u32 },
    EnumValue { group: "FEE_FEESTA", field: "CMDRES", name: "CMDRES_SUCCESS", value: ENUM_FEE_FEESTA_CMDRES_SUCCESS as u32 },
    EnumValue { group: "FEE_FEESTA", field: "CMDRES", name: "CMDRES_PROTECTED", value: ENUM_FEE_FEESTA_CMDRES_PROTECTED as u32 },
    EnumValue { group: "FEE_FEESTA", field: "CMDRES", name: "CMDRES_VERIFYERR", value: ENUM_FEE_FEESTA_CMDRES_VERIFYERR as u32 },
    EnumValue { group: "FEE_FEESTA", field: "CMDRES", name: "CMDRES_ABORT", value: ENUM_FEE_FEESTA_CMDRES_ABORT as u32 },
    EnumValue { group: "FEE_FEECMD", field: "CMD", name: "CMD_IDLE", value: ENUM_FEE_FEECMD_CMD_IDLE as u32 },
    EnumValue { group: "FEE_FEECMD", field: "CMD", name: "CMD_ERASEPAGE", value: ENUM_FEE_FEECMD_CMD_ERASEPAGE as u32 },
    EnumValue { group: "FEE_FEECMD", field: "CMD", name: "CMD_SIGN", value: ENUM_FEE_FEECMD_CMD_SIGN as u32 },
    EnumValue { group: "FEE_FEECMD", field: "CMD", name: "CMD_MASSERASE", value: ENUM_FEE_FEECMD_CMD_MASSERASE as u32 },
    EnumValue { group: "FEE_FEECMD", field: "CMD", name: "CMD_ABORT", value: ENUM_FEE_FEECMD_CMD_ABORT as u32 },
    EnumValue { group: "GPF_GPFEESTA", field: "CMDRES", name: "CMDRES_SUCCESS", value: ENUM_GPF_GPFEESTA_CMDRES_SUCCESS as u32 },
    EnumValue { group: "GPF_GPFEESTA", field: "CMDRES", name: "CMDRES_PROTECTED", value: ENUM_GPF_GPFEESTA_CMDRES_PROTECTED as u32 },
    EnumValue { group: "GPF_GPFEESTA", field: "CMDRES", name: "CMDRES_VERIFYERR", value: ENUM_GPF_GPFEESTA_CMDRES_VERIFYERR as u32 },
    EnumValue { group: "GPF_GPFEESTA", field: "CMDRES", name: "CMDRES_ABORT", value: ENUM_GPF_GPFEESTA_CMDRES_ABORT as u32 },
    EnumValue { group: "GPF_GPFEECMD", field: "CMD", name: "CMD_IDLE", value: ENUM_GPF_GPFEECMD_CMD_IDLE as u32 },
    EnumValue { group: "GPF_GPFEECMD", field: "CMD", name: "CMD_ERASEPAGE", value: ENUM_GPF_GPFEECMD_CMD_ERASEPAGE as u32 },
    EnumValue { group: "GPF_GPFEECMD", field: "CMD", name: "CMD_SIGN", value: ENUM_GPF_GPFEECMD_CMD_SIGN as u32 },
    EnumValue { group: "GPF_GPFEECMD", field: "CMD", name: "CMD_MASSERASE", value: ENUM_GPF_GPFEECMD_CMD_MASSERASE as u32 },
    EnumValue { group: "GPF_GPFEECMD", field: "CMD", name: "CMD_ABORT", value: ENUM_GPF_GPFEECMD_CMD_ABORT as u32 },
    EnumValue { group: "SYSCLK_CLKCON0", field: "CLKMUX", name: "CLKMUX_HFOSC", value: ENUM_SYSCLK_CLKCON0_CLKMUX_HFOSC as u32 },
    EnumValue { group: "SYSCLK_CLKCON0", field: "CLKMUX", name: "CLKMUX_HFXTAL", value: ENUM_SYSCLK_CLKCON0_CLKMUX_HFXTAL as u32 },
    EnumValue { group: "SYSCLK_CLKCON0", field: "CLKMUX", name: "CLKMUX_SPLL", value: ENUM_SYSCLK_CLKCON0_CLKMUX_SPLL as u32 },
    EnumValue { group: "SYSCLK_CLKCON0", field: "CLKMUX", name: "CLKMUX_GPIO", value: ENUM_SYSCLK_CLKCON0_CLKMUX_GPIO as u32 },
    EnumValue { group: "SYSCLK_CLKCON3", field: "SPLLMSEL", name: "SPLLMSEL_DIV1", value: ENUM_SYSCLK_CLKCON3_SPLLMSEL_DIV1 as u32 },
    EnumValue { group: "SYSCLK_CLKCON3", field: "SPLLMSEL", name: "SPLLMSEL_DIV2", value: ENUM_SYSCLK_CLKCON3_SPLLMSEL_DIV2 as u32 },
    EnumValue { group: "SYSCLK_CLKCON3", field: "SPLLMSEL", name: "SPLLMSEL_DIV4", value: ENUM_SYSCLK_CLKCON3_SPLLMSEL_DIV4 as u32 },
    EnumValue { group: "SYSCLK_CLKCON4", field: "UPLLMSEL", name: "UPLLMSEL_DIV1", value: ENUM_SYSCLK_CLKCON4_UPLLMSEL_DIV1 as u32 },
    EnumValue { group: "SYSCLK_CLKCON4", field: "UPLLMSEL", name: "UPLLMSEL_DIV2", value: ENUM_SYSCLK_CLKCON4_UPLLMSEL_DIV2 as u32 },
    EnumValue { group: "SYSCLK_CLKCON4", field: "UPLLMSEL", name: "UPLLMSEL_DIV4", value: ENUM_SYSCLK_CLKCON4_UPLLMSEL_DIV4 as u32 },
    EnumValue { group: "AFE_AFE_FIFO_CFG", field: "DATA_FIFO_SOURCE_SEL", name: "DATA_FIFO_SOURCE_SEL_ADC", value: ENUM_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL_ADC as u32 },
    EnumValue { group: "AFE_AFE_FIFO_CFG", field: "DATA_FIFO_SOURCE_SEL", name: "DATA_FIFO_SOURCE_SEL_DFT", value: ENUM_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL_DFT as u32 },
    EnumValue { group: "AFE_AFE_FIFO_CFG", field: "DATA_FIFO_SOURCE_SEL", name: "DATA_FIFO_SOURCE_SEL_LPF", value: ENUM_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL_LPF as u32 },
    EnumValue { group: "AFE_AFE_FIFO_CFG", field: "DATA_FIFO_SOURCE_SEL", name: "DATA_FIFO_SOURCE_SEL_TEMP", value: ENUM_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL_TEMP as u32 },
    EnumValue { group: "AFE_AFE_WG_CFG", field: "TYPE_SEL", name: "TYPE_SEL_DIRECT", value: ENUM_AFE_AFE_WG_CFG_TYPE_SEL_DIRECT as u32 },
    EnumValue { group: "AFE_AFE_WG_CFG", field: "TYPE_SEL", name: "TYPE_SEL_SINE", value: ENUM_AFE_AFE_WG_CFG_TYPE_SEL_SINE as u32 },
    EnumValue { group: "AFE_AFE_WG_CFG", field: "TYPE_SEL", name: "TYPE_SEL_TRAPEZOID", value: ENUM_AFE_AFE_WG_CFG_TYPE_SEL_TRAPEZOID as u32 },
    EnumValue { group: "CT_CT_CDC_PWR", field: "PWR_MODE", name: "PWR_MODE_SHUTDOWN", value: ENUM_CT_CT_CDC_PWR_PWR_MODE_SHUTDOWN as u32 },
    EnumValue { group: "CT_CT_CDC_PWR", field: "PWR_MODE", name: "PWR_MODE_FULL_POWER", value: ENUM_CT_CT_CDC_PWR_PWR_MODE_FULL_POWER as u32 },
    EnumValue { group: "NVIC_INTAIRC", field: "VECTKEY", name: "VECTKEY_KEY", value: ENUM_NVIC_INTAIRC_VECTKEY_KEY as u32 },
    EnumValue { group: "USB_POWER", field: "ISOUPDT", name: "NO_ISOUPDT", value: ENUM_USB_POWER_NO_ISOUPDT as u32 },
    EnumValue { group: "USB_POWER", field: "ISOUPDT", name: "ISOUPDT", value: ENUM_USB_POWER_ISOUPDT as u32 },
    EnumValue { group: "USB_POWER", field: "SOFTCONN", name: "NO_SOFTCONN", value: ENUM_USB_POWER_NO_SOFTCONN as u32 },
    EnumValue { group: "USB_POWER", field: "SOFTCONN", name: "SOFTCONN", value: ENUM_USB_POWER_SOFTCONN as u32 },
    EnumValue { group: "USB_POWER", field: "HSEN", name: "HSDIS", value: ENUM_USB_POWER_HSDIS as u32 },
    EnumValue { group: "USB_POWER", field: "HSEN", name: "HSEN", value: ENUM_USB_POWER_HSEN as u32 },
    EnumValue { group: "USB_POWER", field: "HSMODE", name: "NO_HSMODE", value: ENUM_USB_POWER_NO_HSMODE as u32 },
    EnumValue { group: "USB_POWER", field: "HSMODE", name: "HSMODE", value: ENUM_USB_POWER_HSMODE as u32 },
    EnumValue { group: "USB_POWER", field: "RESET", name: "NO_RESET", value: ENUM_USB_POWER_NO_RESET as u32 },
    EnumValue { group: "USB_POWER", field: "RESET", name: "RESET", value: ENUM_USB_POWER_RESET as u32 },
    EnumValue { group: "USB_POWER", field: "RESUME", name: "NO_RESUME", value: ENUM_USB_POWER_NO_RESUME as u32 },
    EnumValue { group: "USB_POWER", field: "RESUME", name: "RESUME", value: ENUM_USB_POWER_RESUME as u32 },
    EnumValue { group: "USB_POWER", field: "SUSPEND", name: "NO_SUSPEND", value: ENUM_USB_POWER_NO_SUSPEND as u32 },
    EnumValue { group: "USB_POWER", field: "SUSPEND", name: "SUSPEND", value: ENUM_USB_POWER_SUSPEND as u32 },
    EnumValue { group: "USB_POWER", field: "SUSEN", name: "SUSDIS", value: ENUM_USB_POWER_SUSDIS as u32 },
    EnumValue { group: "USB_POWER", field: "SUSEN", name: "SUSEN", value: ENUM_USB_POWER_SUSEN as u32 },
    EnumValue { group: "USB_IRQ", field: "VBUSERR", name: "NO_VBUSERR", value: ENUM_USB_IRQ_NO_VBUSERR as u32 },
    EnumValue { group: "USB_IRQ", field: "VBUSERR", name: "VBUSERR", value: ENUM_USB_IRQ_VBUSERR as u32 },
    EnumValue { group: "USB_IRQ", field: "SESSREQ", name: "NO_SESSREQ", value: ENUM_USB_IRQ_NO_SESSREQ as u32 },
    EnumValue { group: "USB_IRQ", field: "SESSREQ", name: "SESSREQ", value: ENUM_USB_IRQ_SESSREQ as u32 },
    EnumValue { group: "USB_IRQ", field: "DISCON", name: "NO_DISCON", value: ENUM_USB_IRQ_NO_DISCON as u32 },
    EnumValue { group: "USB_IRQ", field: "DISCON", name: "DISCON", value: ENUM_USB_IRQ_DISCON as u32 },
    EnumValue { group: "USB_IRQ", field: "CON", name: "NO_CON", value: ENUM_USB_IRQ_NO_CON as u32 },
    EnumValue { group: "USB_IRQ", field: "CON", name: "CON", value: ENUM_USB_IRQ_CON as u32 },
    EnumValue { group: "USB_IRQ", field: "SOF", name: "NO_SOF", value: ENUM_USB_IRQ_NO_SOF as u32 },
    EnumValue { group: "USB_IRQ", field: "SOF", name: "SOF", value: ENUM_USB_IRQ_SOF as u32 },
    EnumValue { group: "USB_IRQ", field: "RSTBABBLE", name: "NO_RSTBABBLE", value: ENUM_USB_IRQ_NO_RSTBABBLE as u32 },
    EnumValue { group: "USB_IRQ", field: "RSTBABBLE", name: "RSTBABBLE", value: ENUM_USB_IRQ_RSTBABBLE as u32 },
    EnumValue { group: "USB_IRQ", field: "RESUME", name: "NO_RESUME", value: ENUM_USB_IRQ_NO_RESUME as u32 },
    EnumValue { group: "USB_IRQ", field: "RESUME", name: "RESUME", value: ENUM_USB_IRQ_RESUME as u32 },
    EnumValue { group: "USB_IRQ", field: "SUSPEND", name: "NO_SUSPEND", value: ENUM_USB_IRQ_NO_SUSPEND as u32 },
    EnumValue { group: "USB_IRQ", field: "SUSPEND", name: "SUSPEND", value: ENUM_USB_IRQ_SUSPEND as u32 },
    EnumValue { group: "USB_IEN", field: "VBUSERR", name: "VBUSERRDIS", value: ENUM_USB_IEN_VBUSERRDIS as u32 },
    EnumValue { group: "USB_IEN", field: "VBUSERR", name: "VBUSERREN", value: ENUM_USB_IEN_VBUSERREN as u32 },
    EnumValue { group: "USB_IEN", field: "SESSREQ", name: "SESSREQDIS", value: ENUM_USB_IEN_SESSREQDIS as u32 },
    EnumValue { group: "USB_IEN", field: "SESSREQ", name: "SESSREQEN", value: ENUM_USB_IEN_SESSREQEN as u32 },
    EnumValue { group: "USB_IEN", field: "DISCON", name: "DISCONDIS", value: ENUM_USB_IEN_DISCONDIS as u32 },
    EnumValue { group: "USB_IEN", field: "DISCON", name: "DISCONEN", value: ENUM_USB_IEN_DISCONEN as u32 },
    EnumValue { group: "USB_IEN", field: "CON", name: "CONDIS", value: ENUM_USB_IEN_CONDIS as u32 },
    EnumValue { group: "USB_IEN", field: "CON", name: "CONEN", value: ENUM_USB_IEN_CONEN as u32 },
    EnumValue { group: "USB_IEN", field: "SOF", name: "SOFDIS", value: ENUM_USB_IEN_SOFDIS as u32 },
    EnumValue { group: "USB_IEN", field: "SOF", name: "SOFEN", value: ENUM_USB_IEN_SOFEN as u32 },
    EnumValue { group: "USB_IEN", field: "RSTBABBLE", name: "RSTBABBLEDIS", value: ENUM_USB_IEN_RSTBABBLEDIS as u32 },
    EnumValue { group: "USB_IEN", field: "RSTBABBLE", name: "RSTBABBLEEN", value: ENUM_USB_IEN_RSTBABBLEEN as u32 },
    EnumValue { group: "USB_IEN", field: "RESUME", name: "RESUMEDIS", value: ENUM_USB_IEN_RESUMEDIS as u32 },
    EnumValue { group: "USB_IEN", field: "RESUME", name: "RESUMEEN", value: ENUM_USB_IEN_RESUMEEN as u32 },
    EnumValue { group: "USB_IEN", field: "SUSPEND", name: "SUSPENDDIS", value: ENUM_USB_IEN_SUSPENDDIS as u32 },
    EnumValue { group: "USB_IEN", field: "SUSPEND", name: "SUSPENDEN", value: ENUM_USB_IEN_SUSPENDEN as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "AUTOSET", name: "NO_AUTOSET", value: ENUM_USB_EPI_TXCSR_P_NO_AUTOSET as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "AUTOSET", name: "AUTOSET", value: ENUM_USB_EPI_TXCSR_P_AUTOSET as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "ISO", name: "ISODIS", value: ENUM_USB_EPI_TXCSR_P_ISODIS as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "ISO", name: "ISOEN", value: ENUM_USB_EPI_TXCSR_P_ISOEN as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "DMAREQEN", name: "DMAREQDIS", value: ENUM_USB_EPI_TXCSR_P_DMAREQDIS as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "DMAREQEN", name: "DMAREQEN", value: ENUM_USB_EPI_TXCSR_P_DMAREQEN as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "FRCDATATGL", name: "NO_FRCTGL", value: ENUM_USB_EPI_TXCSR_P_NO_FRCTGL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "FRCDATATGL", name: "FRCTGL", value: ENUM_USB_EPI_TXCSR_P_FRCTGL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "DMAREQMODE", name: "DMARQMODE0", value: ENUM_USB_EPI_TXCSR_P_DMARQMODE0 as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "DMAREQMODE", name: "DMARQMODE1", value: ENUM_USB_EPI_TXCSR_P_DMARQMODE1 as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "INCOMPTX", name: "NO_INCOMP", value: ENUM_USB_EPI_TXCSR_P_NO_INCOMP as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "INCOMPTX", name: "INCOMP", value: ENUM_USB_EPI_TXCSR_P_INCOMP as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "CLRDATATGL", name: "NO_CLRTGL", value: ENUM_USB_EPI_TXCSR_P_NO_CLRTGL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "CLRDATATGL", name: "CLRTGL", value: ENUM_USB_EPI_TXCSR_P_CLRTGL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "SENTSTALL", name: "NO_STALSNT", value: ENUM_USB_EPI_TXCSR_P_NO_STALSNT as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "SENTSTALL", name: "STALSNT", value: ENUM_USB_EPI_TXCSR_P_STALSNT as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "SENDSTALL", name: "NO_STALL", value: ENUM_USB_EPI_TXCSR_P_NO_STALL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "SENDSTALL", name: "STALL", value: ENUM_USB_EPI_TXCSR_P_STALL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EPI_TXCSR_P_NO_FLUSH as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EPI_TXCSR_P_FLUSH as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "URUNERR", name: "NO_URUNERR", value: ENUM_USB_EPI_TXCSR_P_NO_URUNERR as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "URUNERR", name: "URUNERR", value: ENUM_USB_EPI_TXCSR_P_URUNERR as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "NEFIFO", name: "NO_FIFONE", value: ENUM_USB_EPI_TXCSR_P_NO_FIFONE as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "NEFIFO", name: "FIFONE", value: ENUM_USB_EPI_TXCSR_P_FIFONE as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "TXPKTRDY", name: "NO_PKTRDY", value: ENUM_USB_EPI_TXCSR_P_NO_PKTRDY as u32 },
    EnumValue { group: "USB_EPI_TXCSR_P", field: "TXPKTRDY", name: "PKTRDY", value: ENUM_USB_EPI_TXCSR_P_PKTRDY as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "AUTOSET", name: "NO_AUTOSET", value: ENUM_USB_EPI_TXCSR_H_NO_AUTOSET as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "AUTOSET", name: "AUTOSET", value: ENUM_USB_EPI_TXCSR_H_AUTOSET as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "DMAREQEN", name: "DMAREQDIS", value: ENUM_USB_EPI_TXCSR_H_DMAREQDIS as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "DMAREQEN", name: "DMAREQEN", value: ENUM_USB_EPI_TXCSR_H_DMAREQEN as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "FRCDATATGL", name: "NO_FRCTGL", value: ENUM_USB_EPI_TXCSR_H_NO_FRCTGL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "FRCDATATGL", name: "FRCTGL", value: ENUM_USB_EPI_TXCSR_H_FRCTGL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "DMAREQMODE", name: "DMARQMODE0", value: ENUM_USB_EPI_TXCSR_H_DMARQMODE0 as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "DMAREQMODE", name: "DMARQMODE1", value: ENUM_USB_EPI_TXCSR_H_DMARQMODE1 as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "DATGLEN", name: "NO_DATGLEN", value: ENUM_USB_EPI_TXCSR_H_NO_DATGLEN as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "DATGLEN", name: "DATGLEN", value: ENUM_USB_EPI_TXCSR_H_DATGLEN as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "DATGL", name: "NO_DATGL", value: ENUM_USB_EPI_TXCSR_H_NO_DATGL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "DATGL", name: "DATGL", value: ENUM_USB_EPI_TXCSR_H_DATGL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "NAKTOINCMP", name: "NO_NAKTO", value: ENUM_USB_EPI_TXCSR_H_NO_NAKTO as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "NAKTOINCMP", name: "NAKTO", value: ENUM_USB_EPI_TXCSR_H_NAKTO as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "CLRDATATGL", name: "NO_CLRTGL", value: ENUM_USB_EPI_TXCSR_H_NO_CLRTGL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "CLRDATATGL", name: "CLRTGL", value: ENUM_USB_EPI_TXCSR_H_CLRTGL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "RXSTALL", name: "NO_RXSTALL", value: ENUM_USB_EPI_TXCSR_H_NO_RXSTALL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "RXSTALL", name: "RXSTALL", value: ENUM_USB_EPI_TXCSR_H_RXSTALL as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "SETUPPKT", name: "NO_SETUPPK", value: ENUM_USB_EPI_TXCSR_H_NO_SETUPPK as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "SETUPPKT", name: "SETUPPKT", value: ENUM_USB_EPI_TXCSR_H_SETUPPKT as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EPI_TXCSR_H_NO_FLUSH as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EPI_TXCSR_H_FLUSH as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "TXTOERR", name: "NO_TXTOERR", value: ENUM_USB_EPI_TXCSR_H_NO_TXTOERR as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "TXTOERR", name: "TXTOERR", value: ENUM_USB_EPI_TXCSR_H_TXTOERR as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "NEFIFO", name: "NO_NEFIFO", value: ENUM_USB_EPI_TXCSR_H_NO_NEFIFO as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "NEFIFO", name: "NEFIFO", value: ENUM_USB_EPI_TXCSR_H_NEFIFO as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "TXPKTRDY", name: "NO_PKTRDY", value: ENUM_USB_EPI_TXCSR_H_NO_PKTRDY as u32 },
    EnumValue { group: "USB_EPI_TXCSR_H", field: "TXPKTRDY", name: "PKTRDY", value: ENUM_USB_EPI_TXCSR_H_PKTRDY as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EP0I_CSR_P_NO_FLUSH as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EP0I_CSR_P_FLUSH as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "SSETUPEND", name: "NOSSETUPEND", value: ENUM_USB_EP0I_CSR_P_NOSSETUPEND as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "SSETUPEND", name: "SSETUPEND", value: ENUM_USB_EP0I_CSR_P_SSETUPEND as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "SPKTRDY", name: "NO_SPKTRDY", value: ENUM_USB_EP0I_CSR_P_NO_SPKTRDY as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "SPKTRDY", name: "SPKTRDY", value: ENUM_USB_EP0I_CSR_P_SPKTRDY as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "SENDSTALL", name: "NO_STALL", value: ENUM_USB_EP0I_CSR_P_NO_STALL as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "SENDSTALL", name: "STALL", value: ENUM_USB_EP0I_CSR_P_STALL as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "SETUPEND", name: "NO_SETUPEND", value: ENUM_USB_EP0I_CSR_P_NO_SETUPEND as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "SETUPEND", name: "SETUPEND", value: ENUM_USB_EP0I_CSR_P_SETUPEND as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "DATAEND", name: "NO_DATAEND", value: ENUM_USB_EP0I_CSR_P_NO_DATAEND as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "DATAEND", name: "DATAEND", value: ENUM_USB_EP0I_CSR_P_DATAEND as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "SENTSTALL", name: "NO_STALSNT", value: ENUM_USB_EP0I_CSR_P_NO_STALSNT as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "SENTSTALL", name: "STALSNT", value: ENUM_USB_EP0I_CSR_P_STALSNT as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "TXPKTRDY", name: "NO_TXPKTRDY", value: ENUM_USB_EP0I_CSR_P_NO_TXPKTRDY as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "TXPKTRDY", name: "TXPKTRDY", value: ENUM_USB_EP0I_CSR_P_TXPKTRDY as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "RXPKTRDY", name: "NO_PKTRDY", value: ENUM_USB_EP0I_CSR_P_NO_PKTRDY as u32 },
    EnumValue { group: "USB_EP0I_CSR_P", field: "RXPKTRDY", name: "PKTRDY", value: ENUM_USB_EP0I_CSR_P_PKTRDY as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "DISPING", name: "NO_DISPING", value: ENUM_USB_EP0I_CSR_H_NO_DISPING as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "DISPING", name: "DISPING", value: ENUM_USB_EP0I_CSR_H_DISPING as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "DATGLEN", name: "NO_DATGLEN", value: ENUM_USB_EP0I_CSR_H_NO_DATGLEN as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "DATGLEN", name: "DATGLEN", value: ENUM_USB_EP0I_CSR_H_DATGLEN as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "DATGL", name: "NO_DATATGL", value: ENUM_USB_EP0I_CSR_H_NO_DATATGL as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "DATGL", name: "DATATGL", value: ENUM_USB_EP0I_CSR_H_DATATGL as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EP0I_CSR_H_NO_FLUSH as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EP0I_CSR_H_FLUSH as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "NAKTO", name: "NO_NAKTO", value: ENUM_USB_EP0I_CSR_H_NO_NAKTO as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "NAKTO", name: "NAKTO", value: ENUM_USB_EP0I_CSR_H_NAKTO as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "STATUSPKT", name: "NO_STATPKT", value: ENUM_USB_EP0I_CSR_H_NO_STATPKT as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "STATUSPKT", name: "STATPKT", value: ENUM_USB_EP0I_CSR_H_STATPKT as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "REQPKT", name: "NO_REQPKT", value: ENUM_USB_EP0I_CSR_H_NO_REQPKT as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "REQPKT", name: "REQPKT", value: ENUM_USB_EP0I_CSR_H_REQPKT as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "TOERR", name: "NO_TOERR", value: ENUM_USB_EP0I_CSR_H_NO_TOERR as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "TOERR", name: "TOERR", value: ENUM_USB_EP0I_CSR_H_TOERR as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "SETUPPKT", name: "NO_SETUPPKT", value: ENUM_USB_EP0I_CSR_H_NO_SETUPPKT as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "SETUPPKT", name: "SETUPPKT", value: ENUM_USB_EP0I_CSR_H_SETUPPKT as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "RXSTALL", name: "NO_RXSTALL", value: ENUM_USB_EP0I_CSR_H_NO_RXSTALL as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "RXSTALL", name: "RXSTALL", value: ENUM_USB_EP0I_CSR_H_RXSTALL as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "TXPKTRDY", name: "NO_TXPKTRDY", value: ENUM_USB_EP0I_CSR_H_NO_TXPKTRDY as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "TXPKTRDY", name: "TXPKTRDY", value: ENUM_USB_EP0I_CSR_H_TXPKTRDY as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "RXPKTRDY", name: "NO_RXPKTRDY", value: ENUM_USB_EP0I_CSR_H_NO_RXPKTRDY as u32 },
    EnumValue { group: "USB_EP0I_CSR_H", field: "RXPKTRDY", name: "RXPKTRDY", value: ENUM_USB_EP0I_CSR_H_RXPKTRDY as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "AUTOCLR", name: "NO_AUTOCLR", value: ENUM_USB_EPI_RXCSR_H_NO_AUTOCLR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "AUTOCLR", name: "AUTOCLR", value: ENUM_USB_EPI_RXCSR_H_AUTOCLR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "AUTOREQ", name: "NO_AUTOREQ", value: ENUM_USB_EPI_RXCSR_H_NO_AUTOREQ as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "AUTOREQ", name: "AUTOREQ", value: ENUM_USB_EPI_RXCSR_H_AUTOREQ as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "DMAREQEN", name: "DMAREQDIS", value: ENUM_USB_EPI_RXCSR_H_DMAREQDIS as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "DMAREQEN", name: "DMAREQEN", value: ENUM_USB_EPI_RXCSR_H_DMAREQEN as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "PIDERR", name: "NO_PIDERR", value: ENUM_USB_EPI_RXCSR_H_NO_PIDERR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "PIDERR", name: "PIDERR", value: ENUM_USB_EPI_RXCSR_H_PIDERR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "DMAREQMODE", name: "DMARQMODE0", value: ENUM_USB_EPI_RXCSR_H_DMARQMODE0 as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "DMAREQMODE", name: "DMARQMODE1", value: ENUM_USB_EPI_RXCSR_H_DMARQMODE1 as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "DATGLEN", name: "DATGLDIS", value: ENUM_USB_EPI_RXCSR_H_DATGLDIS as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "DATGLEN", name: "DATGLEN", value: ENUM_USB_EPI_RXCSR_H_DATGLEN as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "DATGL", name: "NO_DATGL", value: ENUM_USB_EPI_RXCSR_H_NO_DATGL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "DATGL", name: "DATGL", value: ENUM_USB_EPI_RXCSR_H_DATGL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "INCOMPRX", name: "NO_INCOMP", value: ENUM_USB_EPI_RXCSR_H_NO_INCOMP as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "INCOMPRX", name: "INCOMP", value: ENUM_USB_EPI_RXCSR_H_INCOMP as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "CLRDATATGL", name: "NO_CLRTGL", value: ENUM_USB_EPI_RXCSR_H_NO_CLRTGL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "CLRDATATGL", name: "CLRTGL", value: ENUM_USB_EPI_RXCSR_H_CLRTGL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "RXSTALL", name: "NO_RXSTALL", value: ENUM_USB_EPI_RXCSR_H_NO_RXSTALL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "RXSTALL", name: "RXSTALL", value: ENUM_USB_EPI_RXCSR_H_RXSTALL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "REQPKT", name: "NO_REQPKT", value: ENUM_USB_EPI_RXCSR_H_NO_REQPKT as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "REQPKT", name: "REQPKT", value: ENUM_USB_EPI_RXCSR_H_REQPKT as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EPI_RXCSR_H_NO_FLUSH as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EPI_RXCSR_H_FLUSH as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "NAKTODERR", name: "NO_NAKTO", value: ENUM_USB_EPI_RXCSR_H_NO_NAKTO as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "NAKTODERR", name: "NAKTO", value: ENUM_USB_EPI_RXCSR_H_NAKTO as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "RXTOERR", name: "NO_RXTOERR", value: ENUM_USB_EPI_RXCSR_H_NO_RXTOERR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "RXTOERR", name: "RXTOERR", value: ENUM_USB_EPI_RXCSR_H_RXTOERR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "FIFOFULL", name: "NO_FIFOFUL", value: ENUM_USB_EPI_RXCSR_H_NO_FIFOFUL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "FIFOFULL", name: "FIFOFUL", value: ENUM_USB_EPI_RXCSR_H_FIFOFUL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "RXPKTRDY", name: "NO_PKTRDY", value: ENUM_USB_EPI_RXCSR_H_NO_PKTRDY as u32 },
    EnumValue { group: "USB_EPI_RXCSR_H", field: "RXPKTRDY", name: "PKTRDY", value: ENUM_USB_EPI_RXCSR_H_PKTRDY as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "AUTOCLR", name: "NO_AUTOCLR", value: ENUM_USB_EPI_RXCSR_P_NO_AUTOCLR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "AUTOCLR", name: "AUTOCLR", value: ENUM_USB_EPI_RXCSR_P_AUTOCLR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "ISO", name: "ISODIS", value: ENUM_USB_EPI_RXCSR_P_ISODIS as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "ISO", name: "ISOEN", value: ENUM_USB_EPI_RXCSR_P_ISOEN as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "DMAREQEN", name: "DMAREQDIS", value: ENUM_USB_EPI_RXCSR_P_DMAREQDIS as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "DMAREQEN", name: "DMAREQEN", value: ENUM_USB_EPI_RXCSR_P_DMAREQEN as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "DNYETPERR", name: "DNYTERREN", value: ENUM_USB_EPI_RXCSR_P_DNYTERREN as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "DNYETPERR", name: "DNYTERRDIS", value: ENUM_USB_EPI_RXCSR_P_DNYTERRDIS as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "DMAREQMODE", name: "DMARQMODE0", value: ENUM_USB_EPI_RXCSR_P_DMARQMODE0 as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "DMAREQMODE", name: "DMARQMODE1", value: ENUM_USB_EPI_RXCSR_P_DMARQMODE1 as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "INCOMPRX", name: "NO_INCOMP", value: ENUM_USB_EPI_RXCSR_P_NO_INCOMP as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "INCOMPRX", name: "INCOMP", value: ENUM_USB_EPI_RXCSR_P_INCOMP as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "CLRDATATGL", name: "NO_CLRTGL", value: ENUM_USB_EPI_RXCSR_P_NO_CLRTGL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "CLRDATATGL", name: "CLRTGL", value: ENUM_USB_EPI_RXCSR_P_CLRTGL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "SENTSTALL", name: "NO_STALSNT", value: ENUM_USB_EPI_RXCSR_P_NO_STALSNT as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "SENTSTALL", name: "STALSNT", value: ENUM_USB_EPI_RXCSR_P_STALSNT as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "SENDSTALL", name: "NO_STALL", value: ENUM_USB_EPI_RXCSR_P_NO_STALL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "SENDSTALL", name: "STALL", value: ENUM_USB_EPI_RXCSR_P_STALL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EPI_RXCSR_P_NO_FLUSH as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EPI_RXCSR_P_FLUSH as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "DATAERR", name: "NO_DATAERR", value: ENUM_USB_EPI_RXCSR_P_NO_DATAERR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "DATAERR", name: "DATAERR", value: ENUM_USB_EPI_RXCSR_P_DATAERR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "ORUNERR", name: "NO_ORUNERR", value: ENUM_USB_EPI_RXCSR_P_NO_ORUNERR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "ORUNERR", name: "ORUNERR", value: ENUM_USB_EPI_RXCSR_P_ORUNERR as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "FIFOFULL", name: "NO_FIFOFUL", value: ENUM_USB_EPI_RXCSR_P_NO_FIFOFUL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "FIFOFULL", name: "FIFOFUL", value: ENUM_USB_EPI_RXCSR_P_FIFOFUL as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "RXPKTRDY", name: "NO_PKTRDY", value: ENUM_USB_EPI_RXCSR_P_NO_PKTRDY as u32 },
    EnumValue { group: "USB_EPI_RXCSR_P", field: "RXPKTRDY", name: "PKTRDY", value: ENUM_USB_EPI_RXCSR_P_PKTRDY as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "SPEED", name: "UNUSED", value: ENUM_USB_EPI_TXTYPE_UNUSED as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "SPEED", name: "HIGHSPEED", value: ENUM_USB_EPI_TXTYPE_HIGHSPEED as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "SPEED", name: "FULLSPEED", value: ENUM_USB_EPI_TXTYPE_FULLSPEED as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "SPEED", name: "LOWSPEED", value: ENUM_USB_EPI_TXTYPE_LOWSPEED as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "PROTOCOL", name: "CONTROL", value: ENUM_USB_EPI_TXTYPE_CONTROL as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "PROTOCOL", name: "ISO", value: ENUM_USB_EPI_TXTYPE_ISO as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "PROTOCOL", name: "BULK", value: ENUM_USB_EPI_TXTYPE_BULK as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "PROTOCOL", name: "INT", value: ENUM_USB_EPI_TXTYPE_INT as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP0", value: ENUM_USB_EPI_TXTYPE_TGTEP0 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP1", value: ENUM_USB_EPI_TXTYPE_TGTEP1 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP10", value: ENUM_USB_EPI_TXTYPE_TGTEP10 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP11", value: ENUM_USB_EPI_TXTYPE_TGTEP11 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP12", value: ENUM_USB_EPI_TXTYPE_TGTEP12 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP13", value: ENUM_USB_EPI_TXTYPE_TGTEP13 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP14", value: ENUM_USB_EPI_TXTYPE_TGTEP14 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP15", value: ENUM_USB_EPI_TXTYPE_TGTEP15 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP2", value: ENUM_USB_EPI_TXTYPE_TGTEP2 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP3", value: ENUM_USB_EPI_TXTYPE_TGTEP3 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP4", value: ENUM_USB_EPI_TXTYPE_TGTEP4 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP5", value: ENUM_USB_EPI_TXTYPE_TGTEP5 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP6", value: ENUM_USB_EPI_TXTYPE_TGTEP6 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP7", value: ENUM_USB_EPI_TXTYPE_TGTEP7 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP8", value: ENUM_USB_EPI_TXTYPE_TGTEP8 as u32 },
    EnumValue { group: "USB_EPI_TXTYPE", field: "TGTEP", name: "TGTEP9", value: ENUM_USB_EPI_TXTYPE_TGTEP9 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "SPEED", name: "UNUSED", value: ENUM_USB_EPI_RXTYPE_UNUSED as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "SPEED", name: "HIGHSPEED", value: ENUM_USB_EPI_RXTYPE_HIGHSPEED as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "SPEED", name: "FULLSPEED", value: ENUM_USB_EPI_RXTYPE_FULLSPEED as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "SPEED", name: "LOWSPEED", value: ENUM_USB_EPI_RXTYPE_LOWSPEED as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "PROTOCOL", name: "CONTROL", value: ENUM_USB_EPI_RXTYPE_CONTROL as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "PROTOCOL", name: "ISO", value: ENUM_USB_EPI_RXTYPE_ISO as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "PROTOCOL", name: "BULK", value: ENUM_USB_EPI_RXTYPE_BULK as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "PROTOCOL", name: "INT", value: ENUM_USB_EPI_RXTYPE_INT as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP0", value: ENUM_USB_EPI_RXTYPE_TGTEP0 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP1", value: ENUM_USB_EPI_RXTYPE_TGTEP1 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP10", value: ENUM_USB_EPI_RXTYPE_TGTEP10 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP11", value: ENUM_USB_EPI_RXTYPE_TGTEP11 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP12", value: ENUM_USB_EPI_RXTYPE_TGTEP12 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP13", value: ENUM_USB_EPI_RXTYPE_TGTEP13 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP14", value: ENUM_USB_EPI_RXTYPE_TGTEP14 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP15", value: ENUM_USB_EPI_RXTYPE_TGTEP15 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP2", value: ENUM_USB_EPI_RXTYPE_TGTEP2 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP3", value: ENUM_USB_EPI_RXTYPE_TGTEP3 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP4", value: ENUM_USB_EPI_RXTYPE_TGTEP4 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP5", value: ENUM_USB_EPI_RXTYPE_TGTEP5 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP6", value: ENUM_USB_EPI_RXTYPE_TGTEP6 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP7", value: ENUM_USB_EPI_RXTYPE_TGTEP7 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP8", value: ENUM_USB_EPI_RXTYPE_TGTEP8 as u32 },
    EnumValue { group: "USB_EPI_RXTYPE", field: "TGTEP", name: "TGTEP9", value: ENUM_USB_EPI_RXTYPE_TGTEP9 as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "MPRX", name: "MPRXDIS", value: ENUM_USB_EP0I_CFGDATA_MPRXDIS as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "MPRX", name: "MPRXEN", value: ENUM_USB_EP0I_CFGDATA_MPRXEN as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "MPTX", name: "MPTXDIS", value: ENUM_USB_EP0I_CFGDATA_MPTXDIS as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "MPTX", name: "MPTXEN", value: ENUM_USB_EP0I_CFGDATA_MPTXEN as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "BIGEND", name: "BIGENDDIS", value: ENUM_USB_EP0I_CFGDATA_BIGENDDIS as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "BIGEND", name: "BIGENDEN", value: ENUM_USB_EP0I_CFGDATA_BIGENDEN as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "HBRX", name: "HBRXDIS", value: ENUM_USB_EP0I_CFGDATA_HBRXDIS as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "HBRX", name: "HBRXEN", value: ENUM_USB_EP0I_CFGDATA_HBRXEN as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "HBTX", name: "HBTXDIS", value: ENUM_USB_EP0I_CFGDATA_HBTXDIS as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "HBTX", name: "HBTXEN", value: ENUM_USB_EP0I_CFGDATA_HBTXEN as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "DYNFIFO", name: "DYNSZDIS", value: ENUM_USB_EP0I_CFGDATA_DYNSZDIS as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "DYNFIFO", name: "DYNSZEN", value: ENUM_USB_EP0I_CFGDATA_DYNSZEN as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "SOFTCON", name: "SFTCONDIS", value: ENUM_USB_EP0I_CFGDATA_SFTCONDIS as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "SOFTCON", name: "SFTCONEN", value: ENUM_USB_EP0I_CFGDATA_SFTCONEN as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "UTMIWID", name: "UTMIWID8", value: ENUM_USB_EP0I_CFGDATA_UTMIWID8 as u32 },
    EnumValue { group: "USB_EP0I_CFGDATA", field: "UTMIWID", name: "UTMIWID16", value: ENUM_USB_EP0I_CFGDATA_UTMIWID16 as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "BDEVICE", name: "ADEVICE", value: ENUM_USB_DEV_CTL_ADEVICE as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "BDEVICE", name: "BDEVICE", value: ENUM_USB_DEV_CTL_BDEVICE as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "FSDEV", name: "NO_FSDEV", value: ENUM_USB_DEV_CTL_NO_FSDEV as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "FSDEV", name: "FSDEV", value: ENUM_USB_DEV_CTL_FSDEV as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "LSDEV", name: "NO_LSDEV", value: ENUM_USB_DEV_CTL_NO_LSDEV as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "LSDEV", name: "LSDEV", value: ENUM_USB_DEV_CTL_LSDEV as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "VBUS", name: "VBUS_BS", value: ENUM_USB_DEV_CTL_VBUS_BS as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "VBUS", name: "VBUS_ASBA", value: ENUM_USB_DEV_CTL_VBUS_ASBA as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "VBUS", name: "VBUS_AABV", value: ENUM_USB_DEV_CTL_VBUS_AABV as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "VBUS", name: "VBUS_AV", value: ENUM_USB_DEV_CTL_VBUS_AV as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "HOSTMODE", name: "NO_HOSTMODE", value: ENUM_USB_DEV_CTL_NO_HOSTMODE as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "HOSTMODE", name: "HOSTMODE", value: ENUM_USB_DEV_CTL_HOSTMODE as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "HOSTREQ", name: "NO_HOSTREQ", value: ENUM_USB_DEV_CTL_NO_HOSTREQ as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "HOSTREQ", name: "HOSTREQ", value: ENUM_USB_DEV_CTL_HOSTREQ as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "SESSION", name: "NO_SESSION", value: ENUM_USB_DEV_CTL_NO_SESSION as u32 },
    EnumValue { group: "USB_DEV_CTL", field: "SESSION", name: "SESSION", value: ENUM_USB_DEV_CTL_SESSION as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "DPB", name: "DPNDIS", value: ENUM_USB_TXFIFOSZ_DPNDIS as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "DPB", name: "DPBEN", value: ENUM_USB_TXFIFOSZ_DPBEN as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "SZ", name: "SZ8", value: ENUM_USB_TXFIFOSZ_SZ8 as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "SZ", name: "SZ16", value: ENUM_USB_TXFIFOSZ_SZ16 as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "SZ", name: "SZ32", value: ENUM_USB_TXFIFOSZ_SZ32 as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "SZ", name: "SZ64", value: ENUM_USB_TXFIFOSZ_SZ64 as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "SZ", name: "SZ128", value: ENUM_USB_TXFIFOSZ_SZ128 as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "SZ", name: "SZ256", value: ENUM_USB_TXFIFOSZ_SZ256 as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "SZ", name: "SZ512", value: ENUM_USB_TXFIFOSZ_SZ512 as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "SZ", name: "SZ1024", value: ENUM_USB_TXFIFOSZ_SZ1024 as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "SZ", name: "SZ2048", value: ENUM_USB_TXFIFOSZ_SZ2048 as u32 },
    EnumValue { group: "USB_TXFIFOSZ", field: "SZ", name: "SZ4096", value: ENUM_USB_TXFIFOSZ_SZ4096 as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "DPB", name: "DPBDIS", value: ENUM_USB_RXFIFOSZ_DPBDIS as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "DPB", name: "DPBEN", value: ENUM_USB_RXFIFOSZ_DPBEN as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "SZ", name: "SZ8", value: ENUM_USB_RXFIFOSZ_SZ8 as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "SZ", name: "SZ16", value: ENUM_USB_RXFIFOSZ_SZ16 as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "SZ", name: "SZ32", value: ENUM_USB_RXFIFOSZ_SZ32 as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "SZ", name: "SZ64", value: ENUM_USB_RXFIFOSZ_SZ64 as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "SZ", name: "SZ128", value: ENUM_USB_RXFIFOSZ_SZ128 as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "SZ", name: "SZ256", value: ENUM_USB_RXFIFOSZ_SZ256 as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "SZ", name: "SZ512", value: ENUM_USB_RXFIFOSZ_SZ512 as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "SZ", name: "SZ1024", value: ENUM_USB_RXFIFOSZ_SZ1024 as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "SZ", name: "SZ2048", value: ENUM_USB_RXFIFOSZ_SZ2048 as u32 },
    EnumValue { group: "USB_RXFIFOSZ", field: "SZ", name: "SZ4096", value: ENUM_USB_RXFIFOSZ_SZ4096 as u32 },
    EnumValue { group: "USB_SOFT_RST", field: "RSTX", name: "NO_RSTX", value: ENUM_USB_SOFT_RST_NO_RSTX as u32 },
    EnumValue { group: "USB_SOFT_RST", field: "RSTX", name: "RSTX", value: ENUM_USB_SOFT_RST_RSTX as u32 },
    EnumValue { group: "USB_SOFT_RST", field: "RST", name: "NO_RST", value: ENUM_USB_SOFT_RST_NO_RST as u32 },
    EnumValue { group: "USB_SOFT_RST", field: "RST", name: "RST", value: ENUM_USB_SOFT_RST_RST as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "DISPING", name: "NO_DISPING", value: ENUM_USB_EP0_CSR_H_NO_DISPING as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "DISPING", name: "DISPING", value: ENUM_USB_EP0_CSR_H_DISPING as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "DATGLEN", name: "NO_DATGLEN", value: ENUM_USB_EP0_CSR_H_NO_DATGLEN as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "DATGLEN", name: "DATGLEN", value: ENUM_USB_EP0_CSR_H_DATGLEN as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "DATGL", name: "NO_DATATGL", value: ENUM_USB_EP0_CSR_H_NO_DATATGL as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "DATGL", name: "DATATGL", value: ENUM_USB_EP0_CSR_H_DATATGL as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EP0_CSR_H_NO_FLUSH as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EP0_CSR_H_FLUSH as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "NAKTO", name: "NO_NAKTO", value: ENUM_USB_EP0_CSR_H_NO_NAKTO as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "NAKTO", name: "NAKTO", value: ENUM_USB_EP0_CSR_H_NAKTO as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "STATUSPKT", name: "NO_STATPKT", value: ENUM_USB_EP0_CSR_H_NO_STATPKT as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "STATUSPKT", name: "STATPKT", value: ENUM_USB_EP0_CSR_H_STATPKT as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "REQPKT", name: "NO_REQPKT", value: ENUM_USB_EP0_CSR_H_NO_REQPKT as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "REQPKT", name: "REQPKT", value: ENUM_USB_EP0_CSR_H_REQPKT as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "TOERR", name: "NO_TOERR", value: ENUM_USB_EP0_CSR_H_NO_TOERR as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "TOERR", name: "TOERR", value: ENUM_USB_EP0_CSR_H_TOERR as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "SETUPPKT", name: "NO_SETUPPKT", value: ENUM_USB_EP0_CSR_H_NO_SETUPPKT as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "SETUPPKT", name: "SETUPPKT", value: ENUM_USB_EP0_CSR_H_SETUPPKT as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "RXSTALL", name: "NO_RXSTALL", value: ENUM_USB_EP0_CSR_H_NO_RXSTALL as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "RXSTALL", name: "RXSTALL", value: ENUM_USB_EP0_CSR_H_RXSTALL as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "TXPKTRDY", name: "NO_TXPKTRDY", value: ENUM_USB_EP0_CSR_H_NO_TXPKTRDY as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "TXPKTRDY", name: "TXPKTRDY", value: ENUM_USB_EP0_CSR_H_TXPKTRDY as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "RXPKTRDY", name: "NO_RXPKTRDY", value: ENUM_USB_EP0_CSR_H_NO_RXPKTRDY as u32 },
    EnumValue { group: "USB_EP0_CSR_H", field: "RXPKTRDY", name: "RXPKTRDY", value: ENUM_USB_EP0_CSR_H_RXPKTRDY as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "AUTOSET", name: "NO_AUTOSET", value: ENUM_USB_EP_TXCSR_H_NO_AUTOSET as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "AUTOSET", name: "AUTOSET", value: ENUM_USB_EP_TXCSR_H_AUTOSET as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "DMAREQEN", name: "DMAREQDIS", value: ENUM_USB_EP_TXCSR_H_DMAREQDIS as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "DMAREQEN", name: "DMAREQEN", value: ENUM_USB_EP_TXCSR_H_DMAREQEN as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "FRCDATATGL", name: "NO_FRCTGL", value: ENUM_USB_EP_TXCSR_H_NO_FRCTGL as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "FRCDATATGL", name: "FRCTGL", value: ENUM_USB_EP_TXCSR_H_FRCTGL as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "DMAREQMODE", name: "DMARQMODE0", value: ENUM_USB_EP_TXCSR_H_DMARQMODE0 as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "DMAREQMODE", name: "DMARQMODE1", value: ENUM_USB_EP_TXCSR_H_DMARQMODE1 as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "DATGLEN", name: "NO_DATGLEN", value: ENUM_USB_EP_TXCSR_H_NO_DATGLEN as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "DATGLEN", name: "DATGLEN", value: ENUM_USB_EP_TXCSR_H_DATGLEN as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "DATGL", name: "NO_DATGL", value: ENUM_USB_EP_TXCSR_H_NO_DATGL as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "DATGL", name: "DATGL", value: ENUM_USB_EP_TXCSR_H_DATGL as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "NAKTOINCMP", name: "NO_NAKTO", value: ENUM_USB_EP_TXCSR_H_NO_NAKTO as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "NAKTOINCMP", name: "NAKTO", value: ENUM_USB_EP_TXCSR_H_NAKTO as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "CLRDATATGL", name: "NO_CLRTGL", value: ENUM_USB_EP_TXCSR_H_NO_CLRTGL as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "CLRDATATGL", name: "CLRTGL", value: ENUM_USB_EP_TXCSR_H_CLRTGL as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "RXSTALL", name: "NO_RXSTALL", value: ENUM_USB_EP_TXCSR_H_NO_RXSTALL as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "RXSTALL", name: "RXSTALL", value: ENUM_USB_EP_TXCSR_H_RXSTALL as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "SETUPPKT", name: "NO_SETUPPK", value: ENUM_USB_EP_TXCSR_H_NO_SETUPPK as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "SETUPPKT", name: "SETUPPKT", value: ENUM_USB_EP_TXCSR_H_SETUPPKT as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EP_TXCSR_H_NO_FLUSH as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EP_TXCSR_H_FLUSH as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "TXTOERR", name: "NO_TXTOERR", value: ENUM_USB_EP_TXCSR_H_NO_TXTOERR as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "TXTOERR", name: "TXTOERR", value: ENUM_USB_EP_TXCSR_H_TXTOERR as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "NEFIFO", name: "NO_NEFIFO", value: ENUM_USB_EP_TXCSR_H_NO_NEFIFO as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "NEFIFO", name: "NEFIFO", value: ENUM_USB_EP_TXCSR_H_NEFIFO as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "TXPKTRDY", name: "NO_PKTRDY", value: ENUM_USB_EP_TXCSR_H_NO_PKTRDY as u32 },
    EnumValue { group: "USB_EP_TXCSR_H", field: "TXPKTRDY", name: "PKTRDY", value: ENUM_USB_EP_TXCSR_H_PKTRDY as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EP0_CSR_P_NO_FLUSH as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EP0_CSR_P_FLUSH as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "SSETUPEND", name: "NOSSETUPEND", value: ENUM_USB_EP0_CSR_P_NOSSETUPEND as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "SSETUPEND", name: "SSETUPEND", value: ENUM_USB_EP0_CSR_P_SSETUPEND as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "SPKTRDY", name: "NO_SPKTRDY", value: ENUM_USB_EP0_CSR_P_NO_SPKTRDY as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "SPKTRDY", name: "SPKTRDY", value: ENUM_USB_EP0_CSR_P_SPKTRDY as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "SENDSTALL", name: "NO_STALL", value: ENUM_USB_EP0_CSR_P_NO_STALL as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "SENDSTALL", name: "STALL", value: ENUM_USB_EP0_CSR_P_STALL as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "SETUPEND", name: "NO_SETUPEND", value: ENUM_USB_EP0_CSR_P_NO_SETUPEND as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "SETUPEND", name: "SETUPEND", value: ENUM_USB_EP0_CSR_P_SETUPEND as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "DATAEND", name: "NO_DATAEND", value: ENUM_USB_EP0_CSR_P_NO_DATAEND as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "DATAEND", name: "DATAEND", value: ENUM_USB_EP0_CSR_P_DATAEND as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "SENTSTALL", name: "NO_STALSNT", value: ENUM_USB_EP0_CSR_P_NO_STALSNT as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "SENTSTALL", name: "STALSNT", value: ENUM_USB_EP0_CSR_P_STALSNT as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "TXPKTRDY", name: "NO_TXPKTRDY", value: ENUM_USB_EP0_CSR_P_NO_TXPKTRDY as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "TXPKTRDY", name: "TXPKTRDY", value: ENUM_USB_EP0_CSR_P_TXPKTRDY as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "RXPKTRDY", name: "NO_PKTRDY", value: ENUM_USB_EP0_CSR_P_NO_PKTRDY as u32 },
    EnumValue { group: "USB_EP0_CSR_P", field: "RXPKTRDY", name: "PKTRDY", value: ENUM_USB_EP0_CSR_P_PKTRDY as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "AUTOSET", name: "NO_AUTOSET", value: ENUM_USB_EP_TXCSR_P_NO_AUTOSET as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "AUTOSET", name: "AUTOSET", value: ENUM_USB_EP_TXCSR_P_AUTOSET as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "ISO", name: "ISODIS", value: ENUM_USB_EP_TXCSR_P_ISODIS as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "ISO", name: "ISOEN", value: ENUM_USB_EP_TXCSR_P_ISOEN as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "DMAREQEN", name: "DMAREQDIS", value: ENUM_USB_EP_TXCSR_P_DMAREQDIS as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "DMAREQEN", name: "DMAREQEN", value: ENUM_USB_EP_TXCSR_P_DMAREQEN as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "FRCDATATGL", name: "NO_FRCTGL", value: ENUM_USB_EP_TXCSR_P_NO_FRCTGL as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "FRCDATATGL", name: "FRCTGL", value: ENUM_USB_EP_TXCSR_P_FRCTGL as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "DMAREQMODE", name: "DMARQMODE0", value: ENUM_USB_EP_TXCSR_P_DMARQMODE0 as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "DMAREQMODE", name: "DMARQMODE1", value: ENUM_USB_EP_TXCSR_P_DMARQMODE1 as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "INCOMPTX", name: "NO_INCOMP", value: ENUM_USB_EP_TXCSR_P_NO_INCOMP as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "INCOMPTX", name: "INCOMP", value: ENUM_USB_EP_TXCSR_P_INCOMP as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "CLRDATATGL", name: "NO_CLRTGL", value: ENUM_USB_EP_TXCSR_P_NO_CLRTGL as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "CLRDATATGL", name: "CLRTGL", value: ENUM_USB_EP_TXCSR_P_CLRTGL as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "SENTSTALL", name: "NO_STALSNT", value: ENUM_USB_EP_TXCSR_P_NO_STALSNT as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "SENTSTALL", name: "STALSNT", value: ENUM_USB_EP_TXCSR_P_STALSNT as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "SENDSTALL", name: "NO_STALL", value: ENUM_USB_EP_TXCSR_P_NO_STALL as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "SENDSTALL", name: "STALL", value: ENUM_USB_EP_TXCSR_P_STALL as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EP_TXCSR_P_NO_FLUSH as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EP_TXCSR_P_FLUSH as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "URUNERR", name: "NO_URUNERR", value: ENUM_USB_EP_TXCSR_P_NO_URUNERR as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "URUNERR", name: "URUNERR", value: ENUM_USB_EP_TXCSR_P_URUNERR as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "NEFIFO", name: "NO_FIFONE", value: ENUM_USB_EP_TXCSR_P_NO_FIFONE as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "NEFIFO", name: "FIFONE", value: ENUM_USB_EP_TXCSR_P_FIFONE as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "TXPKTRDY", name: "NO_PKTRDY", value: ENUM_USB_EP_TXCSR_P_NO_PKTRDY as u32 },
    EnumValue { group: "USB_EP_TXCSR_P", field: "TXPKTRDY", name: "PKTRDY", value: ENUM_USB_EP_TXCSR_P_PKTRDY as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "AUTOCLR", name: "NO_AUTOCLR", value: ENUM_USB_EP_RXCSR_H_NO_AUTOCLR as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "AUTOCLR", name: "AUTOCLR", value: ENUM_USB_EP_RXCSR_H_AUTOCLR as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "AUTOREQ", name: "NO_AUTOREQ", value: ENUM_USB_EP_RXCSR_H_NO_AUTOREQ as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "AUTOREQ", name: "AUTOREQ", value: ENUM_USB_EP_RXCSR_H_AUTOREQ as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "DMAREQEN", name: "DMAREQDIS", value: ENUM_USB_EP_RXCSR_H_DMAREQDIS as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "DMAREQEN", name: "DMAREQEN", value: ENUM_USB_EP_RXCSR_H_DMAREQEN as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "PIDERR", name: "NO_PIDERR", value: ENUM_USB_EP_RXCSR_H_NO_PIDERR as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "PIDERR", name: "PIDERR", value: ENUM_USB_EP_RXCSR_H_PIDERR as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "DMAREQMODE", name: "DMARQMODE0", value: ENUM_USB_EP_RXCSR_H_DMARQMODE0 as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "DMAREQMODE", name: "DMARQMODE1", value: ENUM_USB_EP_RXCSR_H_DMARQMODE1 as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "DATGLEN", name: "DATGLDIS", value: ENUM_USB_EP_RXCSR_H_DATGLDIS as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "DATGLEN", name: "DATGLEN", value: ENUM_USB_EP_RXCSR_H_DATGLEN as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "DATGL", name: "NO_DATGL", value: ENUM_USB_EP_RXCSR_H_NO_DATGL as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "DATGL", name: "DATGL", value: ENUM_USB_EP_RXCSR_H_DATGL as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "INCOMPRX", name: "NO_INCOMP", value: ENUM_USB_EP_RXCSR_H_NO_INCOMP as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "INCOMPRX", name: "INCOMP", value: ENUM_USB_EP_RXCSR_H_INCOMP as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "CLRDATATGL", name: "NO_CLRTGL", value: ENUM_USB_EP_RXCSR_H_NO_CLRTGL as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "CLRDATATGL", name: "CLRTGL", value: ENUM_USB_EP_RXCSR_H_CLRTGL as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "RXSTALL", name: "NO_RXSTALL", value: ENUM_USB_EP_RXCSR_H_NO_RXSTALL as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "RXSTALL", name: "RXSTALL", value: ENUM_USB_EP_RXCSR_H_RXSTALL as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "REQPKT", name: "NO_REQPKT", value: ENUM_USB_EP_RXCSR_H_NO_REQPKT as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "REQPKT", name: "REQPKT", value: ENUM_USB_EP_RXCSR_H_REQPKT as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EP_RXCSR_H_NO_FLUSH as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EP_RXCSR_H_FLUSH as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "NAKTODERR", name: "NO_NAKTO", value: ENUM_USB_EP_RXCSR_H_NO_NAKTO as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "NAKTODERR", name: "NAKTO", value: ENUM_USB_EP_RXCSR_H_NAKTO as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "RXTOERR", name: "NO_RXTOERR", value: ENUM_USB_EP_RXCSR_H_NO_RXTOERR as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "RXTOERR", name: "RXTOERR", value: ENUM_USB_EP_RXCSR_H_RXTOERR as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "FIFOFULL", name: "NO_FIFOFUL", value: ENUM_USB_EP_RXCSR_H_NO_FIFOFUL as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "FIFOFULL", name: "FIFOFUL", value: ENUM_USB_EP_RXCSR_H_FIFOFUL as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "RXPKTRDY", name: "NO_PKTRDY", value: ENUM_USB_EP_RXCSR_H_NO_PKTRDY as u32 },
    EnumValue { group: "USB_EP_RXCSR_H", field: "RXPKTRDY", name: "PKTRDY", value: ENUM_USB_EP_RXCSR_H_PKTRDY as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "AUTOCLR", name: "NO_AUTOCLR", value: ENUM_USB_EP_RXCSR_P_NO_AUTOCLR as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "AUTOCLR", name: "AUTOCLR", value: ENUM_USB_EP_RXCSR_P_AUTOCLR as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "ISO", name: "ISODIS", value: ENUM_USB_EP_RXCSR_P_ISODIS as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "ISO", name: "ISOEN", value: ENUM_USB_EP_RXCSR_P_ISOEN as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "DMAREQEN", name: "DMAREQDIS", value: ENUM_USB_EP_RXCSR_P_DMAREQDIS as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "DMAREQEN", name: "DMAREQEN", value: ENUM_USB_EP_RXCSR_P_DMAREQEN as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "DNYETPERR", name: "DNYTERREN", value: ENUM_USB_EP_RXCSR_P_DNYTERREN as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "DNYETPERR", name: "DNYTERRDIS", value: ENUM_USB_EP_RXCSR_P_DNYTERRDIS as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "DMAREQMODE", name: "DMARQMODE0", value: ENUM_USB_EP_RXCSR_P_DMARQMODE0 as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "DMAREQMODE", name: "DMARQMODE1", value: ENUM_USB_EP_RXCSR_P_DMARQMODE1 as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "INCOMPRX", name: "NO_INCOMP", value: ENUM_USB_EP_RXCSR_P_NO_INCOMP as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "INCOMPRX", name: "INCOMP", value: ENUM_USB_EP_RXCSR_P_INCOMP as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "CLRDATATGL", name: "NO_CLRTGL", value: ENUM_USB_EP_RXCSR_P_NO_CLRTGL as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "CLRDATATGL", name: "CLRTGL", value: ENUM_USB_EP_RXCSR_P_CLRTGL as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "SENTSTALL", name: "NO_STALSNT", value: ENUM_USB_EP_RXCSR_P_NO_STALSNT as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "SENTSTALL", name: "STALSNT", value: ENUM_USB_EP_RXCSR_P_STALSNT as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "SENDSTALL", name: "NO_STALL", value: ENUM_USB_EP_RXCSR_P_NO_STALL as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "SENDSTALL", name: "STALL", value: ENUM_USB_EP_RXCSR_P_STALL as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "FLUSHFIFO", name: "NO_FLUSH", value: ENUM_USB_EP_RXCSR_P_NO_FLUSH as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "FLUSHFIFO", name: "FLUSH", value: ENUM_USB_EP_RXCSR_P_FLUSH as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "DATAERR", name: "NO_DATAERR", value: ENUM_USB_EP_RXCSR_P_NO_DATAERR as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "DATAERR", name: "DATAERR", value: ENUM_USB_EP_RXCSR_P_DATAERR as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "ORUNERR", name: "NO_ORUNERR", value: ENUM_USB_EP_RXCSR_P_NO_ORUNERR as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "ORUNERR", name: "ORUNERR", value: ENUM_USB_EP_RXCSR_P_ORUNERR as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "FIFOFULL", name: "NO_FIFOFUL", value: ENUM_USB_EP_RXCSR_P_NO_FIFOFUL as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "FIFOFULL", name: "FIFOFUL", value: ENUM_USB_EP_RXCSR_P_FIFOFUL as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "RXPKTRDY", name: "NO_PKTRDY", value: ENUM_USB_EP_RXCSR_P_NO_PKTRDY as u32 },
    EnumValue { group: "USB_EP_RXCSR_P", field: "RXPKTRDY", name: "PKTRDY", value: ENUM_USB_EP_RXCSR_P_PKTRDY as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "SPEED", name: "UNUSED", value: ENUM_USB_EP_TXTYPE_UNUSED as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "SPEED", name: "HIGHSPEED", value: ENUM_USB_EP_TXTYPE_HIGHSPEED as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "SPEED", name: "FULLSPEED", value: ENUM_USB_EP_TXTYPE_FULLSPEED as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "SPEED", name: "LOWSPEED", value: ENUM_USB_EP_TXTYPE_LOWSPEED as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "PROTOCOL", name: "CONTROL", value: ENUM_USB_EP_TXTYPE_CONTROL as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "PROTOCOL", name: "ISO", value: ENUM_USB_EP_TXTYPE_ISO as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "PROTOCOL", name: "BULK", value: ENUM_USB_EP_TXTYPE_BULK as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "PROTOCOL", name: "INT", value: ENUM_USB_EP_TXTYPE_INT as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP0", value: ENUM_USB_EP_TXTYPE_TGTEP0 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP1", value: ENUM_USB_EP_TXTYPE_TGTEP1 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP10", value: ENUM_USB_EP_TXTYPE_TGTEP10 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP11", value: ENUM_USB_EP_TXTYPE_TGTEP11 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP12", value: ENUM_USB_EP_TXTYPE_TGTEP12 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP13", value: ENUM_USB_EP_TXTYPE_TGTEP13 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP14", value: ENUM_USB_EP_TXTYPE_TGTEP14 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP15", value: ENUM_USB_EP_TXTYPE_TGTEP15 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP2", value: ENUM_USB_EP_TXTYPE_TGTEP2 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP3", value: ENUM_USB_EP_TXTYPE_TGTEP3 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP4", value: ENUM_USB_EP_TXTYPE_TGTEP4 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP5", value: ENUM_USB_EP_TXTYPE_TGTEP5 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP6", value: ENUM_USB_EP_TXTYPE_TGTEP6 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP7", value: ENUM_USB_EP_TXTYPE_TGTEP7 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP8", value: ENUM_USB_EP_TXTYPE_TGTEP8 as u32 },
    EnumValue { group: "USB_EP_TXTYPE", field: "TGTEP", name: "TGTEP9", value: ENUM_USB_EP_TXTYPE_TGTEP9 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "SPEED", name: "UNUSED", value: ENUM_USB_EP_RXTYPE_UNUSED as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "SPEED", name: "HIGHSPEED", value: ENUM_USB_EP_RXTYPE_HIGHSPEED as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "SPEED", name: "FULLSPEED", value: ENUM_USB_EP_RXTYPE_FULLSPEED as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "SPEED", name: "LOWSPEED", value: ENUM_USB_EP_RXTYPE_LOWSPEED as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "PROTOCOL", name: "CONTROL", value: ENUM_USB_EP_RXTYPE_CONTROL as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "PROTOCOL", name: "ISO", value: ENUM_USB_EP_RXTYPE_ISO as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "PROTOCOL", name: "BULK", value: ENUM_USB_EP_RXTYPE_BULK as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "PROTOCOL", name: "INT", value: ENUM_USB_EP_RXTYPE_INT as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP0", value: ENUM_USB_EP_RXTYPE_TGTEP0 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP1", value: ENUM_USB_EP_RXTYPE_TGTEP1 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP10", value: ENUM_USB_EP_RXTYPE_TGTEP10 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP11", value: ENUM_USB_EP_RXTYPE_TGTEP11 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP12", value: ENUM_USB_EP_RXTYPE_TGTEP12 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP13", value: ENUM_USB_EP_RXTYPE_TGTEP13 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP14", value: ENUM_USB_EP_RXTYPE_TGTEP14 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP15", value: ENUM_USB_EP_RXTYPE_TGTEP15 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP2", value: ENUM_USB_EP_RXTYPE_TGTEP2 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP3", value: ENUM_USB_EP_RXTYPE_TGTEP3 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP4", value: ENUM_USB_EP_RXTYPE_TGTEP4 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP5", value: ENUM_USB_EP_RXTYPE_TGTEP5 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP6", value: ENUM_USB_EP_RXTYPE_TGTEP6 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP7", value: ENUM_USB_EP_RXTYPE_TGTEP7 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP8", value: ENUM_USB_EP_RXTYPE_TGTEP8 as u32 },
    EnumValue { group: "USB_EP_RXTYPE", field: "TGTEP", name: "TGTEP9", value: ENUM_USB_EP_RXTYPE_TGTEP9 as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "MPRX", name: "MPRXDIS", value: ENUM_USB_EP0_CFGDATA_MPRXDIS as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "MPRX", name: "MPRXEN", value: ENUM_USB_EP0_CFGDATA_MPRXEN as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "MPTX", name: "MPTXDIS", value: ENUM_USB_EP0_CFGDATA_MPTXDIS as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "MPTX", name: "MPTXEN", value: ENUM_USB_EP0_CFGDATA_MPTXEN as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "BIGEND", name: "BIGENDDIS", value: ENUM_USB_EP0_CFGDATA_BIGENDDIS as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "BIGEND", name: "BIGENDEN", value: ENUM_USB_EP0_CFGDATA_BIGENDEN as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "HBRX", name: "HBRXDIS", value: ENUM_USB_EP0_CFGDATA_HBRXDIS as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "HBRX", name: "HBRXEN", value: ENUM_USB_EP0_CFGDATA_HBRXEN as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "HBTX", name: "HBTXDIS", value: ENUM_USB_EP0_CFGDATA_HBTXDIS as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "HBTX", name: "HBTXEN", value: ENUM_USB_EP0_CFGDATA_HBTXEN as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "DYNFIFO", name: "DYNSZDIS", value: ENUM_USB_EP0_CFGDATA_DYNSZDIS as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "DYNFIFO", name: "DYNSZEN", value: ENUM_USB_EP0_CFGDATA_DYNSZEN as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "SOFTCON", name: "SFTCONDIS", value: ENUM_USB_EP0_CFGDATA_SFTCONDIS as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "SOFTCON", name: "SFTCONEN", value: ENUM_USB_EP0_CFGDATA_SFTCONEN as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "UTMIWID", name: "UTMIWID8", value: ENUM_USB_EP0_CFGDATA_UTMIWID8 as u32 },
    EnumValue { group: "USB_EP0_CFGDATA", field: "UTMIWID", name: "UTMIWID16", value: ENUM_USB_EP0_CFGDATA_UTMIWID16 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "BRSTM", name: "BRSTM00", value: ENUM_USB_DMA_CTL_BRSTM00 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "BRSTM", name: "BRSTM01", value: ENUM_USB_DMA_CTL_BRSTM01 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "BRSTM", name: "BRSTM10", value: ENUM_USB_DMA_CTL_BRSTM10 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "BRSTM", name: "BRSTM11", value: ENUM_USB_DMA_CTL_BRSTM11 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "ERR", name: "NO_DMAERR", value: ENUM_USB_DMA_CTL_NO_DMAERR as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "ERR", name: "DMAERR", value: ENUM_USB_DMA_CTL_DMAERR as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP0", value: ENUM_USB_DMA_CTL_DMAEP0 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP1", value: ENUM_USB_DMA_CTL_DMAEP1 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP10", value: ENUM_USB_DMA_CTL_DMAEP10 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP11", value: ENUM_USB_DMA_CTL_DMAEP11 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP12", value: ENUM_USB_DMA_CTL_DMAEP12 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP13", value: ENUM_USB_DMA_CTL_DMAEP13 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP14", value: ENUM_USB_DMA_CTL_DMAEP14 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP15", value: ENUM_USB_DMA_CTL_DMAEP15 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP2", value: ENUM_USB_DMA_CTL_DMAEP2 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP3", value: ENUM_USB_DMA_CTL_DMAEP3 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP4", value: ENUM_USB_DMA_CTL_DMAEP4 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP5", value: ENUM_USB_DMA_CTL_DMAEP5 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP6", value: ENUM_USB_DMA_CTL_DMAEP6 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP7", value: ENUM_USB_DMA_CTL_DMAEP7 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP8", value: ENUM_USB_DMA_CTL_DMAEP8 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EP", name: "DMAEP9", value: ENUM_USB_DMA_CTL_DMAEP9 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "IE", name: "DMAINTDIS", value: ENUM_USB_DMA_CTL_DMAINTDIS as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "IE", name: "DMAINTEN", value: ENUM_USB_DMA_CTL_DMAINTEN as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "MODE", name: "DMAMODE0", value: ENUM_USB_DMA_CTL_DMAMODE0 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "MODE", name: "DMAMODE1", value: ENUM_USB_DMA_CTL_DMAMODE1 as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "DIR", name: "DMADIR_RX", value: ENUM_USB_DMA_CTL_DMADIR_RX as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "DIR", name: "DMADIR_TX", value: ENUM_USB_DMA_CTL_DMADIR_TX as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EN", name: "DMADIS", value: ENUM_USB_DMA_CTL_DMADIS as u32 },
    EnumValue { group: "USB_DMA_CTL", field: "EN", name: "DMAEN", value: ENUM_USB_DMA_CTL_DMAEN as u32 },
    EnumValue { group: "USB_LPM_ATTR", field: "RMTWAK", name: "RMTWAKDIS", value: ENUM_USB_LPM_ATTR_RMTWAKDIS as u32 },
    EnumValue { group: "USB_LPM_ATTR", field: "RMTWAK", name: "RMTWAKEN", value: ENUM_USB_LPM_ATTR_RMTWAKEN as u32 },
    EnumValue { group: "USB_LPM_ATTR", field: "LINKSTATE", name: "LNKSTATE_SSL1", value: ENUM_USB_LPM_ATTR_LNKSTATE_SSL1 as u32 },
];
