// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Nested vectored interrupt controller.

// Generated register constants for nvic.

// NVIC registers
/// Interrupt Control Type
pub const REG_NVIC_INTNUM: u32 = 0xE000_E004;
/// Systick Control and Status
pub const REG_NVIC_STKSTA: u32 = 0xE000_E010;
/// Systick Reload Value
pub const REG_NVIC_STKLD: u32 = 0xE000_E014;
/// Systick Current Value
pub const REG_NVIC_STKVAL: u32 = 0xE000_E018;
/// Systick Calibration Value
pub const REG_NVIC_STKCAL: u32 = 0xE000_E01C;
/// IRQ0..31 Set_Enable
pub const REG_NVIC_INTSETE0: u32 = 0xE000_E100;
/// IRQ32..63 Set_Enable
pub const REG_NVIC_INTSETE1: u32 = 0xE000_E104;
/// IRQ0..31 Clear_Enable
pub const REG_NVIC_INTCLRE0: u32 = 0xE000_E180;
/// IRQ32..63 Clear_Enable
pub const REG_NVIC_INTCLRE1: u32 = 0xE000_E184;
/// IRQ0..31 Set_Pending
pub const REG_NVIC_INTSETP0: u32 = 0xE000_E200;
/// IRQ32..63 Set_Pending
pub const REG_NVIC_INTSETP1: u32 = 0xE000_E204;
/// IRQ0..31 Clear_Pending
pub const REG_NVIC_INTCLRP0: u32 = 0xE000_E280;
/// IRQ32..63 Clear_Pending
pub const REG_NVIC_INTCLRP1: u32 = 0xE000_E284;
/// IRQ0..31 Active Bit
pub const REG_NVIC_INTACT0: u32 = 0xE000_E300;
/// IRQ32..63 Active Bit
pub const REG_NVIC_INTACT1: u32 = 0xE000_E304;
/// IRQ0..3 Priority
pub const REG_NVIC_INTPRI0: u32 = 0xE000_E400;
/// IRQ4..7 Priority
pub const REG_NVIC_INTPRI1: u32 = 0xE000_E404;
/// IRQ8..11 Priority
pub const REG_NVIC_INTPRI2: u32 = 0xE000_E408;
/// IRQ12..15 Priority
pub const REG_NVIC_INTPRI3: u32 = 0xE000_E40C;
/// IRQ16..19 Priority
pub const REG_NVIC_INTPRI4: u32 = 0xE000_E410;
/// IRQ20..23 Priority
pub const REG_NVIC_INTPRI5: u32 = 0xE000_E414;
/// IRQ24..27 Priority
pub const REG_NVIC_INTPRI6: u32 = 0xE000_E418;
/// IRQ28..31 Priority
pub const REG_NVIC_INTPRI7: u32 = 0xE000_E41C;
/// IRQ32..35 Priority
pub const REG_NVIC_INTPRI8: u32 = 0xE000_E420;
/// IRQ36..39 Priority
pub const REG_NVIC_INTPRI9: u32 = 0xE000_E424;
/// IRQ40..43 Priority
pub const REG_NVIC_INTPRI10: u32 = 0xE000_E428;
/// CPUID Base
pub const REG_NVIC_INTCPID: u32 = 0xE000_ED00;
/// Interrupt Control State
pub const REG_NVIC_INTSTA: u32 = 0xE000_ED04;
/// Vector Table Offset
pub const REG_NVIC_INTVEC: u32 = 0xE000_ED08;
/// Application Interrupt/Reset Control
pub const REG_NVIC_INTAIRC: u32 = 0xE000_ED0C;
/// System Control
pub const REG_NVIC_INTCON0: u32 = 0xE000_ED10;
/// Configuration Control
pub const REG_NVIC_INTCON1: u32 = 0xE000_ED14;
/// System Handlers 4-7 Priority
pub const REG_NVIC_INTSHPRIO0: u32 = 0xE000_ED18;
/// System Handlers 8-11 Priority
pub const REG_NVIC_INTSHPRIO1: u32 = 0xE000_ED1C;
/// System Handlers 12-15 Priority
pub const REG_NVIC_INTSHPRIO3: u32 = 0xE000_ED20;
/// System Handler Control and State
pub const REG_NVIC_INTSHCSR: u32 = 0xE000_ED24;
/// Configurable Fault Status
pub const REG_NVIC_INTCFSR: u32 = 0xE000_ED28;
/// Hard Fault Status
pub const REG_NVIC_INTHFSR: u32 = 0xE000_ED2C;
/// Debug Fault Status
pub const REG_NVIC_INTDFSR: u32 = 0xE000_ED30;
/// Mem Manage Address
pub const REG_NVIC_INTMMAR: u32 = 0xE000_ED34;
/// Bus Fault Address
pub const REG_NVIC_INTBFAR: u32 = 0xE000_ED38;
/// Auxiliary Fault Status
pub const REG_NVIC_INTAFSR: u32 = 0xE000_ED3C;
/// Processor Feature Register 0
pub const REG_NVIC_INTPFR0: u32 = 0xE000_ED40;
/// Processor Feature Register 1
pub const REG_NVIC_INTPFR1: u32 = 0xE000_ED44;
/// Debug Feature Register 0
pub const REG_NVIC_INTDFR0: u32 = 0xE000_ED48;
/// Auxiliary Feature Register 0
pub const REG_NVIC_INTAFR0: u32 = 0xE000_ED4C;
/// Memory Model Feature Register 0
pub const REG_NVIC_INTMMFR0: u32 = 0xE000_ED50;
/// Memory Model Feature Register 1
pub const REG_NVIC_INTMMFR1: u32 = 0xE000_ED54;
/// Memory Model Feature Register 2
pub const REG_NVIC_INTMMFR2: u32 = 0xE000_ED58;
/// Memory Model Feature Register 3
pub const REG_NVIC_INTMMFR3: u32 = 0xE000_ED5C;
/// ISA Feature Register 0
pub const REG_NVIC_INTISAR0: u32 = 0xE000_ED60;
/// ISA Feature Register 1
pub const REG_NVIC_INTISAR1: u32 = 0xE000_ED64;
/// ISA Feature Register 2
pub const REG_NVIC_INTISAR2: u32 = 0xE000_ED68;
/// ISA Feature Register 3
pub const REG_NVIC_INTISAR3: u32 = 0xE000_ED6C;
/// ISA Feature Register 4
pub const REG_NVIC_INTISAR4: u32 = 0xE000_ED70;
/// Software Trigger Interrupt Register
pub const REG_NVIC_INTTRGI: u32 = 0xE000_EF00;
/// Peripheral Identification Register 4
pub const REG_NVIC_INTPID4: u32 = 0xE000_EFD0;
/// Peripheral Identification Register 5
pub const REG_NVIC_INTPID5: u32 = 0xE000_EFD4;
/// Peripheral Identification Register 6
pub const REG_NVIC_INTPID6: u32 = 0xE000_EFD8;
/// Peripheral Identification Register 7
pub const REG_NVIC_INTPID7: u32 = 0xE000_EFDC;
/// Peripheral Identification Bits7:0
pub const REG_NVIC_INTPID0: u32 = 0xE000_EFE0;
/// Peripheral Identification Bits15:8
pub const REG_NVIC_INTPID1: u32 = 0xE000_EFE4;
/// Peripheral Identification Bits16:23
pub const REG_NVIC_INTPID2: u32 = 0xE000_EFE8;
/// Peripheral Identification Bits24:31
pub const REG_NVIC_INTPID3: u32 = 0xE000_EFEC;
/// Component Identification Bits7:0
pub const REG_NVIC_INTCID0: u32 = 0xE000_EFF0;
/// Component Identification Bits15:8
pub const REG_NVIC_INTCID1: u32 = 0xE000_EFF4;
/// Component Identification Bits16:23
pub const REG_NVIC_INTCID2: u32 = 0xE000_EFF8;
/// Component Identification Bits24:31
pub const REG_NVIC_INTCID3: u32 = 0xE000_EFFC;

// NVIC_INTNUM
pub const BITP_NVIC_INTNUM_INTNUM: u32 = 0;
/// Interrupt controller type
pub const BITM_NVIC_INTNUM_INTNUM: u32 = 0x0000_01FF;

// NVIC_STKSTA
pub const BITP_NVIC_STKSTA_ENABLE: u32 = 0;
pub const BITP_NVIC_STKSTA_TICKINT: u32 = 1;
pub const BITP_NVIC_STKSTA_CLKSOURCE: u32 = 2;
pub const BITP_NVIC_STKSTA_COUNTFLAG: u32 = 16;
/// SysTick counter enable
pub const BITM_NVIC_STKSTA_ENABLE: u32 = 0x0000_0001;
/// SysTick exception request enable
pub const BITM_NVIC_STKSTA_TICKINT: u32 = 0x0000_0002;
/// SysTick clock source
pub const BITM_NVIC_STKSTA_CLKSOURCE: u32 = 0x0000_0004;
/// Counter reached zero since last read
pub const BITM_NVIC_STKSTA_COUNTFLAG: u32 = 0x0001_0000;

// NVIC_STKLD
pub const BITP_NVIC_STKLD_RELOAD: u32 = 0;
/// SysTick reload value
pub const BITM_NVIC_STKLD_RELOAD: u32 = 0x00FF_FFFF;

// NVIC_STKVAL
pub const BITP_NVIC_STKVAL_CURRENT: u32 = 0;
/// SysTick current value
pub const BITM_NVIC_STKVAL_CURRENT: u32 = 0x00FF_FFFF;

// NVIC_STKCAL
pub const BITP_NVIC_STKCAL_TENMS: u32 = 0;
pub const BITP_NVIC_STKCAL_SKEW: u32 = 30;
pub const BITP_NVIC_STKCAL_NOREF: u32 = 31;
/// Reload value for a 10 ms timing
pub const BITM_NVIC_STKCAL_TENMS: u32 = 0x00FF_FFFF;
/// Calibration value is not exactly 10 ms
pub const BITM_NVIC_STKCAL_SKEW: u32 = 0x4000_0000;
/// No reference clock provided
pub const BITM_NVIC_STKCAL_NOREF: u32 = 0x8000_0000;

// NVIC_INTSTA
pub const BITP_NVIC_INTSTA_VECTACTIVE: u32 = 0;
pub const BITP_NVIC_INTSTA_RETTOBASE: u32 = 11;
pub const BITP_NVIC_INTSTA_VECTPENDING: u32 = 12;
pub const BITP_NVIC_INTSTA_ISRPENDING: u32 = 22;
pub const BITP_NVIC_INTSTA_PENDSTCLR: u32 = 25;
pub const BITP_NVIC_INTSTA_PENDSTSET: u32 = 26;
pub const BITP_NVIC_INTSTA_PENDSVCLR: u32 = 27;
pub const BITP_NVIC_INTSTA_PENDSVSET: u32 = 28;
pub const BITP_NVIC_INTSTA_NMIPENDSET: u32 = 31;
/// Active exception number
pub const BITM_NVIC_INTSTA_VECTACTIVE: u32 = 0x0000_01FF;
/// No other exception is active
pub const BITM_NVIC_INTSTA_RETTOBASE: u32 = 0x0000_0800;
/// Highest priority pending exception
pub const BITM_NVIC_INTSTA_VECTPENDING: u32 = 0x001F_F000;
/// External interrupt pending
pub const BITM_NVIC_INTSTA_ISRPENDING: u32 = 0x0040_0000;
/// Clear pending SysTick
pub const BITM_NVIC_INTSTA_PENDSTCLR: u32 = 0x0200_0000;
/// Set pending SysTick
pub const BITM_NVIC_INTSTA_PENDSTSET: u32 = 0x0400_0000;
/// Clear pending PendSV
pub const BITM_NVIC_INTSTA_PENDSVCLR: u32 = 0x0800_0000;
/// Set pending PendSV
pub const BITM_NVIC_INTSTA_PENDSVSET: u32 = 0x1000_0000;
/// Set pending NMI
pub const BITM_NVIC_INTSTA_NMIPENDSET: u32 = 0x8000_0000;

// NVIC_INTVEC
pub const BITP_NVIC_INTVEC_TBLOFF: u32 = 7;
pub const BITP_NVIC_INTVEC_TBLBASE: u32 = 29;
/// Vector table offset
pub const BITM_NVIC_INTVEC_TBLOFF: u32 = 0x1FFF_FF80;
/// Vector table base in RAM
pub const BITM_NVIC_INTVEC_TBLBASE: u32 = 0x2000_0000;

// NVIC_INTAIRC
pub const BITP_NVIC_INTAIRC_VECTRESET: u32 = 0;
pub const BITP_NVIC_INTAIRC_VECTCLRACTIVE: u32 = 1;
pub const BITP_NVIC_INTAIRC_SYSRESETREQ: u32 = 2;
pub const BITP_NVIC_INTAIRC_PRIGROUP: u32 = 8;
pub const BITP_NVIC_INTAIRC_ENDIANNESS: u32 = 15;
pub const BITP_NVIC_INTAIRC_VECTKEY: u32 = 16;
/// Reset the local system state
pub const BITM_NVIC_INTAIRC_VECTRESET: u32 = 0x0000_0001;
/// Clear active state information
pub const BITM_NVIC_INTAIRC_VECTCLRACTIVE: u32 = 0x0000_0002;
/// Request a system reset
pub const BITM_NVIC_INTAIRC_SYSRESETREQ: u32 = 0x0000_0004;
/// Priority grouping split point
pub const BITM_NVIC_INTAIRC_PRIGROUP: u32 = 0x0000_0700;
/// Data endianness
pub const BITM_NVIC_INTAIRC_ENDIANNESS: u32 = 0x0000_8000;
/// Register key
pub const BITM_NVIC_INTAIRC_VECTKEY: u32 = 0xFFFF_0000;
/// Write key
pub const ENUM_NVIC_INTAIRC_VECTKEY_KEY: u32 = 0x05FA_0000;

// NVIC_INTCON0
pub const BITP_NVIC_INTCON0_SLEEPONEXIT: u32 = 1;
pub const BITP_NVIC_INTCON0_SLEEPDEEP: u32 = 2;
pub const BITP_NVIC_INTCON0_SEVONPEND: u32 = 4;
/// Sleep on return from an ISR
pub const BITM_NVIC_INTCON0_SLEEPONEXIT: u16 = 0x0002;
/// Deep sleep flag
pub const BITM_NVIC_INTCON0_SLEEPDEEP: u16 = 0x0004;
/// Send an event on a pending interrupt
pub const BITM_NVIC_INTCON0_SEVONPEND: u16 = 0x0010;

// NVIC_INTCON1
pub const BITP_NVIC_INTCON1_NONBASETHRDENA: u32 = 0;
pub const BITP_NVIC_INTCON1_USERSETMPEND: u32 = 1;
pub const BITP_NVIC_INTCON1_UNALIGN_TRP: u32 = 3;
pub const BITP_NVIC_INTCON1_DIV_0_TRP: u32 = 4;
pub const BITP_NVIC_INTCON1_BFHFNMIGN: u32 = 8;
pub const BITP_NVIC_INTCON1_STKALIGN: u32 = 9;
/// Thread mode entry from any level
pub const BITM_NVIC_INTCON1_NONBASETHRDENA: u32 = 0x0000_0001;
/// Unprivileged access to the STIR
pub const BITM_NVIC_INTCON1_USERSETMPEND: u32 = 0x0000_0002;
/// Trap unaligned accesses
pub const BITM_NVIC_INTCON1_UNALIGN_TRP: u32 = 0x0000_0008;
/// Trap divide by zero
pub const BITM_NVIC_INTCON1_DIV_0_TRP: u32 = 0x0000_0010;
/// Ignore bus faults in high priority handlers
pub const BITM_NVIC_INTCON1_BFHFNMIGN: u32 = 0x0000_0100;
/// 8-byte stack alignment on exception entry
pub const BITM_NVIC_INTCON1_STKALIGN: u32 = 0x0000_0200;

// NVIC_INTSHCSR
pub const BITP_NVIC_INTSHCSR_MEMFAULTACT: u32 = 0;
pub const BITP_NVIC_INTSHCSR_BUSFAULTACT: u32 = 1;
pub const BITP_NVIC_INTSHCSR_USGFAULTACT: u32 = 3;
pub const BITP_NVIC_INTSHCSR_SVCALLACT: u32 = 7;
pub const BITP_NVIC_INTSHCSR_MONITORACT: u32 = 8;
pub const BITP_NVIC_INTSHCSR_PENDSVACT: u32 = 10;
pub const BITP_NVIC_INTSHCSR_SYSTICKACT: u32 = 11;
pub const BITP_NVIC_INTSHCSR_USGFAULTPENDED: u32 = 12;
pub const BITP_NVIC_INTSHCSR_MEMFAULTPENDED: u32 = 13;
pub const BITP_NVIC_INTSHCSR_BUSFAULTPENDED: u32 = 14;
pub const BITP_NVIC_INTSHCSR_SVCALLPENDED: u32 = 15;
pub const BITP_NVIC_INTSHCSR_MEMFAULTENA: u32 = 16;
pub const BITP_NVIC_INTSHCSR_BUSFAULTENA: u32 = 17;
pub const BITP_NVIC_INTSHCSR_USGFAULTENA: u32 = 18;
/// MemManage exception active
pub const BITM_NVIC_INTSHCSR_MEMFAULTACT: u32 = 0x0000_0001;
/// BusFault exception active
pub const BITM_NVIC_INTSHCSR_BUSFAULTACT: u32 = 0x0000_0002;
/// UsageFault exception active
pub const BITM_NVIC_INTSHCSR_USGFAULTACT: u32 = 0x0000_0008;
/// SVCall active
pub const BITM_NVIC_INTSHCSR_SVCALLACT: u32 = 0x0000_0080;
/// Debug monitor active
pub const BITM_NVIC_INTSHCSR_MONITORACT: u32 = 0x0000_0100;
/// PendSV exception active
pub const BITM_NVIC_INTSHCSR_PENDSVACT: u32 = 0x0000_0400;
/// SysTick exception active
pub const BITM_NVIC_INTSHCSR_SYSTICKACT: u32 = 0x0000_0800;
/// UsageFault exception pending
pub const BITM_NVIC_INTSHCSR_USGFAULTPENDED: u32 = 0x0000_1000;
/// MemManage exception pending
pub const BITM_NVIC_INTSHCSR_MEMFAULTPENDED: u32 = 0x0000_2000;
/// BusFault exception pending
pub const BITM_NVIC_INTSHCSR_BUSFAULTPENDED: u32 = 0x0000_4000;
/// SVCall pending
pub const BITM_NVIC_INTSHCSR_SVCALLPENDED: u32 = 0x0000_8000;
/// MemManage fault enable
pub const BITM_NVIC_INTSHCSR_MEMFAULTENA: u32 = 0x0001_0000;
/// BusFault enable
pub const BITM_NVIC_INTSHCSR_BUSFAULTENA: u32 = 0x0002_0000;
/// UsageFault enable
pub const BITM_NVIC_INTSHCSR_USGFAULTENA: u32 = 0x0004_0000;

// NVIC_INTCFSR
pub const BITP_NVIC_INTCFSR_MMFSR: u32 = 0;
pub const BITP_NVIC_INTCFSR_BFSR: u32 = 8;
pub const BITP_NVIC_INTCFSR_UFSR: u32 = 16;
/// Memory management fault status
pub const BITM_NVIC_INTCFSR_MMFSR: u32 = 0x0000_00FF;
/// Bus fault status
pub const BITM_NVIC_INTCFSR_BFSR: u32 = 0x0000_FF00;
/// Usage fault status
pub const BITM_NVIC_INTCFSR_UFSR: u32 = 0xFFFF_0000;

// NVIC_INTHFSR
pub const BITP_NVIC_INTHFSR_VECTTBL: u32 = 1;
pub const BITP_NVIC_INTHFSR_FORCED: u32 = 30;
pub const BITP_NVIC_INTHFSR_DEBUGEVT: u32 = 31;
/// Bus fault on a vector table read
pub const BITM_NVIC_INTHFSR_VECTTBL: u32 = 0x0000_0002;
/// Forced hard fault
pub const BITM_NVIC_INTHFSR_FORCED: u32 = 0x4000_0000;
/// Debug event hard fault
pub const BITM_NVIC_INTHFSR_DEBUGEVT: u32 = 0x8000_0000;

// NVIC_INTTRGI
pub const BITP_NVIC_INTTRGI_INTID: u32 = 0;
/// Interrupt ID to trigger
pub const BITM_NVIC_INTTRGI_INTID: u32 = 0x0000_01FF;

// NVIC_INTSETE0
pub const BITP_NVIC_INTSETE0_VALUE: u32 = 0;
/// IRQ0..31 Set_Enable
pub const BITM_NVIC_INTSETE0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTSETE1
pub const BITP_NVIC_INTSETE1_VALUE: u32 = 0;
/// IRQ32..63 Set_Enable
pub const BITM_NVIC_INTSETE1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTCLRE0
pub const BITP_NVIC_INTCLRE0_VALUE: u32 = 0;
/// IRQ0..31 Clear_Enable
pub const BITM_NVIC_INTCLRE0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTCLRE1
pub const BITP_NVIC_INTCLRE1_VALUE: u32 = 0;
/// IRQ32..63 Clear_Enable
pub const BITM_NVIC_INTCLRE1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTSETP0
pub const BITP_NVIC_INTSETP0_VALUE: u32 = 0;
/// IRQ0..31 Set_Pending
pub const BITM_NVIC_INTSETP0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTSETP1
pub const BITP_NVIC_INTSETP1_VALUE: u32 = 0;
/// IRQ32..63 Set_Pending
pub const BITM_NVIC_INTSETP1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTCLRP0
pub const BITP_NVIC_INTCLRP0_VALUE: u32 = 0;
/// IRQ0..31 Clear_Pending
pub const BITM_NVIC_INTCLRP0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTCLRP1
pub const BITP_NVIC_INTCLRP1_VALUE: u32 = 0;
/// IRQ32..63 Clear_Pending
pub const BITM_NVIC_INTCLRP1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTACT0
pub const BITP_NVIC_INTACT0_VALUE: u32 = 0;
/// IRQ0..31 Active Bit
pub const BITM_NVIC_INTACT0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTACT1
pub const BITP_NVIC_INTACT1_VALUE: u32 = 0;
/// IRQ32..63 Active Bit
pub const BITM_NVIC_INTACT1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPRI0
pub const BITP_NVIC_INTPRI0_VALUE: u32 = 0;
/// IRQ0..3 Priority
pub const BITM_NVIC_INTPRI0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPRI1
pub const BITP_NVIC_INTPRI1_VALUE: u32 = 0;
/// IRQ4..7 Priority
pub const BITM_NVIC_INTPRI1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPRI2
pub const BITP_NVIC_INTPRI2_VALUE: u32 = 0;
/// IRQ8..11 Priority
pub const BITM_NVIC_INTPRI2_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPRI3
pub const BITP_NVIC_INTPRI3_VALUE: u32 = 0;
/// IRQ12..15 Priority
pub const BITM_NVIC_INTPRI3_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPRI4
pub const BITP_NVIC_INTPRI4_VALUE: u32 = 0;
/// IRQ16..19 Priority
pub const BITM_NVIC_INTPRI4_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPRI5
pub const BITP_NVIC_INTPRI5_VALUE: u32 = 0;
/// IRQ20..23 Priority
pub const BITM_NVIC_INTPRI5_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPRI6
pub const BITP_NVIC_INTPRI6_VALUE: u32 = 0;
/// IRQ24..27 Priority
pub const BITM_NVIC_INTPRI6_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPRI7
pub const BITP_NVIC_INTPRI7_VALUE: u32 = 0;
/// IRQ28..31 Priority
pub const BITM_NVIC_INTPRI7_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPRI8
pub const BITP_NVIC_INTPRI8_VALUE: u32 = 0;
/// IRQ32..35 Priority
pub const BITM_NVIC_INTPRI8_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPRI9
pub const BITP_NVIC_INTPRI9_VALUE: u32 = 0;
/// IRQ36..39 Priority
pub const BITM_NVIC_INTPRI9_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPRI10
pub const BITP_NVIC_INTPRI10_VALUE: u32 = 0;
/// IRQ40..43 Priority
pub const BITM_NVIC_INTPRI10_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTCPID
pub const BITP_NVIC_INTCPID_VALUE: u32 = 0;
/// CPUID Base
pub const BITM_NVIC_INTCPID_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTSHPRIO0
pub const BITP_NVIC_INTSHPRIO0_VALUE: u32 = 0;
/// System Handlers 4-7 Priority
pub const BITM_NVIC_INTSHPRIO0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTSHPRIO1
pub const BITP_NVIC_INTSHPRIO1_VALUE: u32 = 0;
/// System Handlers 8-11 Priority
pub const BITM_NVIC_INTSHPRIO1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTSHPRIO3
pub const BITP_NVIC_INTSHPRIO3_VALUE: u32 = 0;
/// System Handlers 12-15 Priority
pub const BITM_NVIC_INTSHPRIO3_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTDFSR
pub const BITP_NVIC_INTDFSR_VALUE: u32 = 0;
/// Debug Fault Status
pub const BITM_NVIC_INTDFSR_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTMMAR
pub const BITP_NVIC_INTMMAR_VALUE: u32 = 0;
/// Mem Manage Address
pub const BITM_NVIC_INTMMAR_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTBFAR
pub const BITP_NVIC_INTBFAR_VALUE: u32 = 0;
/// Bus Fault Address
pub const BITM_NVIC_INTBFAR_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTAFSR
pub const BITP_NVIC_INTAFSR_VALUE: u32 = 0;
/// Auxiliary Fault Status
pub const BITM_NVIC_INTAFSR_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPFR0
pub const BITP_NVIC_INTPFR0_VALUE: u32 = 0;
/// Processor Feature Register 0
pub const BITM_NVIC_INTPFR0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPFR1
pub const BITP_NVIC_INTPFR1_VALUE: u32 = 0;
/// Processor Feature Register 1
pub const BITM_NVIC_INTPFR1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTDFR0
pub const BITP_NVIC_INTDFR0_VALUE: u32 = 0;
/// Debug Feature Register 0
pub const BITM_NVIC_INTDFR0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTAFR0
pub const BITP_NVIC_INTAFR0_VALUE: u32 = 0;
/// Auxiliary Feature Register 0
pub const BITM_NVIC_INTAFR0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTMMFR0
pub const BITP_NVIC_INTMMFR0_VALUE: u32 = 0;
/// Memory Model Feature Register 0
pub const BITM_NVIC_INTMMFR0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTMMFR1
pub const BITP_NVIC_INTMMFR1_VALUE: u32 = 0;
/// Memory Model Feature Register 1
pub const BITM_NVIC_INTMMFR1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTMMFR2
pub const BITP_NVIC_INTMMFR2_VALUE: u32 = 0;
/// Memory Model Feature Register 2
pub const BITM_NVIC_INTMMFR2_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTMMFR3
pub const BITP_NVIC_INTMMFR3_VALUE: u32 = 0;
/// Memory Model Feature Register 3
pub const BITM_NVIC_INTMMFR3_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTISAR0
pub const BITP_NVIC_INTISAR0_VALUE: u32 = 0;
/// ISA Feature Register 0
pub const BITM_NVIC_INTISAR0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTISAR1
pub const BITP_NVIC_INTISAR1_VALUE: u32 = 0;
/// ISA Feature Register 1
pub const BITM_NVIC_INTISAR1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTISAR2
pub const BITP_NVIC_INTISAR2_VALUE: u32 = 0;
/// ISA Feature Register 2
pub const BITM_NVIC_INTISAR2_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTISAR3
pub const BITP_NVIC_INTISAR3_VALUE: u32 = 0;
/// ISA Feature Register 3
pub const BITM_NVIC_INTISAR3_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTISAR4
pub const BITP_NVIC_INTISAR4_VALUE: u32 = 0;
/// ISA Feature Register 4
pub const BITM_NVIC_INTISAR4_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPID4
pub const BITP_NVIC_INTPID4_VALUE: u32 = 0;
/// Peripheral Identification Register 4
pub const BITM_NVIC_INTPID4_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPID5
pub const BITP_NVIC_INTPID5_VALUE: u32 = 0;
/// Peripheral Identification Register 5
pub const BITM_NVIC_INTPID5_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPID6
pub const BITP_NVIC_INTPID6_VALUE: u32 = 0;
/// Peripheral Identification Register 6
pub const BITM_NVIC_INTPID6_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPID7
pub const BITP_NVIC_INTPID7_VALUE: u32 = 0;
/// Peripheral Identification Register 7
pub const BITM_NVIC_INTPID7_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPID0
pub const BITP_NVIC_INTPID0_VALUE: u32 = 0;
/// Peripheral Identification Bits7:0
pub const BITM_NVIC_INTPID0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPID1
pub const BITP_NVIC_INTPID1_VALUE: u32 = 0;
/// Peripheral Identification Bits15:8
pub const BITM_NVIC_INTPID1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPID2
pub const BITP_NVIC_INTPID2_VALUE: u32 = 0;
/// Peripheral Identification Bits16:23
pub const BITM_NVIC_INTPID2_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTPID3
pub const BITP_NVIC_INTPID3_VALUE: u32 = 0;
/// Peripheral Identification Bits24:31
pub const BITM_NVIC_INTPID3_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTCID0
pub const BITP_NVIC_INTCID0_VALUE: u32 = 0;
/// Component Identification Bits7:0
pub const BITM_NVIC_INTCID0_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTCID1
pub const BITP_NVIC_INTCID1_VALUE: u32 = 0;
/// Component Identification Bits15:8
pub const BITM_NVIC_INTCID1_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTCID2
pub const BITP_NVIC_INTCID2_VALUE: u32 = 0;
/// Component Identification Bits16:23
pub const BITM_NVIC_INTCID2_VALUE: u32 = 0xFFFF_FFFF;

// NVIC_INTCID3
pub const BITP_NVIC_INTCID3_VALUE: u32 = 0;
/// Component Identification Bits24:31
pub const BITM_NVIC_INTCID3_VALUE: u32 = 0xFFFF_FFFF;
