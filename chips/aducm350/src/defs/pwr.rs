// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Power management.

// Generated register constants for pwr.

// PWR registers
/// Power modes
pub const REG_PWR_PWRMOD: u32 = 0x4000_2400;
/// Key protection for PWRMOD
pub const REG_PWR_PWRKEY: u32 = 0x4000_2404;
/// PSM Configuration
pub const REG_PWR_PSMCON: u32 = 0x4000_2408;
/// Key protection for OSCCTRL
pub const REG_PWR_OSCKEY: u32 = 0x4000_240C;
/// Oscillator control
pub const REG_PWR_OSCCTRL: u32 = 0x4000_2410;
/// External Interrupt configuration 0
pub const REG_PWR_EI0CFG: u32 = 0x4000_2420;
/// External Interrupt configuration 1
pub const REG_PWR_EI1CFG: u32 = 0x4000_2424;
/// External Interrupt configuration 2
pub const REG_PWR_EI2CFG: u32 = 0x4000_2428;
/// External Interrupt clear
pub const REG_PWR_EICLR: u32 = 0x4000_2430;
/// Non-maskable interrupt clear
pub const REG_PWR_NMICLR: u32 = 0x4000_2434;
/// USB Wakeup Status
pub const REG_PWR_USBWKSTAT: u32 = 0x4000_2438;
/// Reset status
pub const REG_PWR_RSTSTA: u32 = 0x4000_2440;
/// VCCM Control and Status
pub const REG_PWR_VCCMCON: u32 = 0x4000_2488;
/// VBACK control and status
pub const REG_PWR_VBACKCON: u32 = 0x4000_248C;

// PWR_PWRMOD
pub const BITP_PWR_PWRMOD_PWRMOD: u32 = 0;
pub const BITP_PWR_PWRMOD_RAM0_RET: u32 = 3;
/// Power mode bits
pub const BITM_PWR_PWRMOD_PWRMOD: u16 = 0x0003;
/// Retain SRAM bank 0 contents in hibernate
pub const BITM_PWR_PWRMOD_RAM0_RET: u16 = 0x0008;
/// Fully active
pub const ENUM_PWR_PWRMOD_PWRMOD_ACTIVE: u16 = 0x0000;
/// Core sleep
pub const ENUM_PWR_PWRMOD_PWRMOD_CORE_SLEEP: u16 = 0x0001;
/// System sleep
pub const ENUM_PWR_PWRMOD_PWRMOD_SYS_SLEEP: u16 = 0x0002;
/// Hibernate
pub const ENUM_PWR_PWRMOD_PWRMOD_HIBERNATE: u16 = 0x0003;

// PWR_PWRKEY
pub const BITP_PWR_PWRKEY_VALUE: u32 = 0;
/// Power control key register
pub const BITM_PWR_PWRKEY_VALUE: u16 = 0xFFFF;
/// First unlock key
pub const ENUM_PWR_PWRKEY_VALUE_KEY1: u16 = 0x4859;
/// Second unlock key
pub const ENUM_PWR_PWRKEY_VALUE_KEY2: u16 = 0xF27B;

// PWR_OSCKEY
pub const BITP_PWR_OSCKEY_VALUE: u32 = 0;
/// Oscillator control key register
pub const BITM_PWR_OSCKEY_VALUE: u16 = 0xFFFF;
/// OSCCTRL unlock key
pub const ENUM_PWR_OSCKEY_VALUE_UNLOCK: u16 = 0xCB14;

// PWR_OSCCTRL
pub const BITP_PWR_OSCCTRL_HFOSCEN: u32 = 0;
pub const BITP_PWR_OSCCTRL_LFOSCEN: u32 = 1;
pub const BITP_PWR_OSCCTRL_HFXTALEN: u32 = 2;
pub const BITP_PWR_OSCCTRL_LFXTALEN: u32 = 3;
pub const BITP_PWR_OSCCTRL_HFOSCOK: u32 = 8;
pub const BITP_PWR_OSCCTRL_LFOSCOK: u32 = 9;
pub const BITP_PWR_OSCCTRL_HFXTALOK: u32 = 10;
pub const BITP_PWR_OSCCTRL_LFXTALOK: u32 = 11;
/// High frequency internal oscillator enable
pub const BITM_PWR_OSCCTRL_HFOSCEN: u16 = 0x0001;
/// Low frequency internal oscillator enable
pub const BITM_PWR_OSCCTRL_LFOSCEN: u16 = 0x0002;
/// High frequency crystal oscillator enable
pub const BITM_PWR_OSCCTRL_HFXTALEN: u16 = 0x0004;
/// Low frequency crystal oscillator enable
pub const BITM_PWR_OSCCTRL_LFXTALEN: u16 = 0x0008;
/// Status of HFOSC oscillator
pub const BITM_PWR_OSCCTRL_HFOSCOK: u16 = 0x0100;
/// Status of LFOSC oscillator
pub const BITM_PWR_OSCCTRL_LFOSCOK: u16 = 0x0200;
/// Status of HFXTAL oscillator
pub const BITM_PWR_OSCCTRL_HFXTALOK: u16 = 0x0400;
/// Status of LFXTAL oscillator
pub const BITM_PWR_OSCCTRL_LFXTALOK: u16 = 0x0800;

// PWR_EI0CFG
pub const BITP_PWR_EI0CFG_IRQ0MDE: u32 = 0;
pub const BITP_PWR_EI0CFG_IRQ0EN: u32 = 3;
pub const BITP_PWR_EI0CFG_IRQ1MDE: u32 = 4;
pub const BITP_PWR_EI0CFG_IRQ1EN: u32 = 7;
pub const BITP_PWR_EI0CFG_IRQ2MDE: u32 = 8;
pub const BITP_PWR_EI0CFG_IRQ2EN: u32 = 11;
pub const BITP_PWR_EI0CFG_IRQ3MDE: u32 = 12;
pub const BITP_PWR_EI0CFG_IRQ3EN: u32 = 15;
/// External interrupt 0 mode
pub const BITM_PWR_EI0CFG_IRQ0MDE: u16 = 0x0007;
/// External interrupt 0 enable
pub const BITM_PWR_EI0CFG_IRQ0EN: u16 = 0x0008;
/// External interrupt 1 mode
pub const BITM_PWR_EI0CFG_IRQ1MDE: u16 = 0x0070;
/// External interrupt 1 enable
pub const BITM_PWR_EI0CFG_IRQ1EN: u16 = 0x0080;
/// External interrupt 2 mode
pub const BITM_PWR_EI0CFG_IRQ2MDE: u16 = 0x0700;
/// External interrupt 2 enable
pub const BITM_PWR_EI0CFG_IRQ2EN: u16 = 0x0800;
/// External interrupt 3 mode
pub const BITM_PWR_EI0CFG_IRQ3MDE: u16 = 0x7000;
/// External interrupt 3 enable
pub const BITM_PWR_EI0CFG_IRQ3EN: u16 = 0x8000;

// PWR_EI1CFG
pub const BITP_PWR_EI1CFG_IRQ4MDE: u32 = 0;
pub const BITP_PWR_EI1CFG_IRQ4EN: u32 = 3;
pub const BITP_PWR_EI1CFG_IRQ5MDE: u32 = 4;
pub const BITP_PWR_EI1CFG_IRQ5EN: u32 = 7;
pub const BITP_PWR_EI1CFG_IRQ6MDE: u32 = 8;
pub const BITP_PWR_EI1CFG_IRQ6EN: u32 = 11;
pub const BITP_PWR_EI1CFG_IRQ7MDE: u32 = 12;
pub const BITP_PWR_EI1CFG_IRQ7EN: u32 = 15;
/// External interrupt 4 mode
pub const BITM_PWR_EI1CFG_IRQ4MDE: u16 = 0x0007;
/// External interrupt 4 enable
pub const BITM_PWR_EI1CFG_IRQ4EN: u16 = 0x0008;
/// External interrupt 5 mode
pub const BITM_PWR_EI1CFG_IRQ5MDE: u16 = 0x0070;
/// External interrupt 5 enable
pub const BITM_PWR_EI1CFG_IRQ5EN: u16 = 0x0080;
/// External interrupt 6 mode
pub const BITM_PWR_EI1CFG_IRQ6MDE: u16 = 0x0700;
/// External interrupt 6 enable
pub const BITM_PWR_EI1CFG_IRQ6EN: u16 = 0x0800;
/// External interrupt 7 mode
pub const BITM_PWR_EI1CFG_IRQ7MDE: u16 = 0x7000;
/// External interrupt 7 enable
pub const BITM_PWR_EI1CFG_IRQ7EN: u16 = 0x8000;

// PWR_EI2CFG
pub const BITP_PWR_EI2CFG_IRQ8MDE: u32 = 0;
pub const BITP_PWR_EI2CFG_IRQ8EN: u32 = 3;
/// External interrupt 8 mode
pub const BITM_PWR_EI2CFG_IRQ8MDE: u16 = 0x0007;
/// External interrupt 8 enable
pub const BITM_PWR_EI2CFG_IRQ8EN: u16 = 0x0008;

// PWR_EICLR
pub const BITP_PWR_EICLR_IRQ0: u32 = 0;
pub const BITP_PWR_EICLR_IRQ1: u32 = 1;
pub const BITP_PWR_EICLR_IRQ2: u32 = 2;
pub const BITP_PWR_EICLR_IRQ3: u32 = 3;
pub const BITP_PWR_EICLR_IRQ4: u32 = 4;
pub const BITP_PWR_EICLR_IRQ5: u32 = 5;
pub const BITP_PWR_EICLR_IRQ6: u32 = 6;
pub const BITP_PWR_EICLR_IRQ7: u32 = 7;
pub const BITP_PWR_EICLR_IRQ8: u32 = 8;
/// Clear external interrupt 0
pub const BITM_PWR_EICLR_IRQ0: u16 = 0x0001;
/// Clear external interrupt 1
pub const BITM_PWR_EICLR_IRQ1: u16 = 0x0002;
/// Clear external interrupt 2
pub const BITM_PWR_EICLR_IRQ2: u16 = 0x0004;
/// Clear external interrupt 3
pub const BITM_PWR_EICLR_IRQ3: u16 = 0x0008;
/// Clear external interrupt 4
pub const BITM_PWR_EICLR_IRQ4: u16 = 0x0010;
/// Clear external interrupt 5
pub const BITM_PWR_EICLR_IRQ5: u16 = 0x0020;
/// Clear external interrupt 6
pub const BITM_PWR_EICLR_IRQ6: u16 = 0x0040;
/// Clear external interrupt 7
pub const BITM_PWR_EICLR_IRQ7: u16 = 0x0080;
/// Clear external interrupt 8
pub const BITM_PWR_EICLR_IRQ8: u16 = 0x0100;

// PWR_NMICLR
pub const BITP_PWR_NMICLR_CLR: u32 = 0;
/// Clear the NMI interrupt
pub const BITM_PWR_NMICLR_CLR: u16 = 0x0001;

// PWR_RSTSTA
pub const BITP_PWR_RSTSTA_POR: u32 = 0;
pub const BITP_PWR_RSTSTA_EXTRST: u32 = 1;
pub const BITP_PWR_RSTSTA_WDRST: u32 = 2;
pub const BITP_PWR_RSTSTA_SWRST: u32 = 3;
/// Power-on reset
pub const BITM_PWR_RSTSTA_POR: u16 = 0x0001;
/// External reset
pub const BITM_PWR_RSTSTA_EXTRST: u16 = 0x0002;
/// Watchdog timeout reset
pub const BITM_PWR_RSTSTA_WDRST: u16 = 0x0004;
/// Software reset
pub const BITM_PWR_RSTSTA_SWRST: u16 = 0x0008;

// PWR_PSMCON
pub const BITP_PWR_PSMCON_VALUE: u32 = 0;
/// PSM Configuration
pub const BITM_PWR_PSMCON_VALUE: u16 = 0xFFFF;

// PWR_USBWKSTAT
pub const BITP_PWR_USBWKSTAT_VALUE: u32 = 0;
/// USB Wakeup Status
pub const BITM_PWR_USBWKSTAT_VALUE: u16 = 0xFFFF;

// PWR_VCCMCON
pub const BITP_PWR_VCCMCON_VALUE: u32 = 0;
/// VCCM Control and Status
pub const BITM_PWR_VCCMCON_VALUE: u16 = 0xFFFF;

// PWR_VBACKCON
pub const BITP_PWR_VBACKCON_VALUE: u32 = 0;
/// VBACK control and status
pub const BITM_PWR_VBACKCON_VALUE: u16 = 0xFFFF;
