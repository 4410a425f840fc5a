// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! GPIO ports.

// Generated register constants for gpio.

// GPIO0 registers
/// GPIO Port 0 Configuration
pub const REG_GPIO0_GPCON: u32 = 0x4002_0000;
/// GPIO Port 0 output enable
pub const REG_GPIO0_GPOEN: u32 = 0x4002_0004;
/// GPIO Port 0 output pullup/pulldown enable
pub const REG_GPIO0_GPPE: u32 = 0x4002_0008;
/// GPIO Port 0 Input Path Enable
pub const REG_GPIO0_GPIEN: u32 = 0x4002_000C;
/// GPIO Port 0 registered data input
pub const REG_GPIO0_GPIN: u32 = 0x4002_0010;
/// GPIO Port 0 data output
pub const REG_GPIO0_GPOUT: u32 = 0x4002_0014;
/// GPIO Port 0 data out set
pub const REG_GPIO0_GPSET: u32 = 0x4002_0018;
/// GPIO Port 0 data out clear
pub const REG_GPIO0_GPCLR: u32 = 0x4002_001C;
/// GPIO Port 0 pin toggle
pub const REG_GPIO0_GPTGL: u32 = 0x4002_0020;
/// GPIO Port 0 interrupt polarity
pub const REG_GPIO0_GPPOL: u32 = 0x4002_0024;
/// GPIO Port 0 interrupt A enable
pub const REG_GPIO0_GPIENA: u32 = 0x4002_0028;
/// GPIO Port 0 interrupt B enable
pub const REG_GPIO0_GPIENB: u32 = 0x4002_002C;
/// GPIO Port 0 interrupt Status
pub const REG_GPIO0_GPINT: u32 = 0x4002_0030;

// GPIO1 registers
/// GPIO Port 0 Configuration
pub const REG_GPIO1_GPCON: u32 = 0x4002_0040;
/// GPIO Port 0 output enable
pub const REG_GPIO1_GPOEN: u32 = 0x4002_0044;
/// GPIO Port 0 output pullup/pulldown enable
pub const REG_GPIO1_GPPE: u32 = 0x4002_0048;
/// GPIO Port 0 Input Path Enable
pub const REG_GPIO1_GPIEN: u32 = 0x4002_004C;
/// GPIO Port 0 registered data input
pub const REG_GPIO1_GPIN: u32 = 0x4002_0050;
/// GPIO Port 0 data output
pub const REG_GPIO1_GPOUT: u32 = 0x4002_0054;
/// GPIO Port 0 data out set
pub const REG_GPIO1_GPSET: u32 = 0x4002_0058;
/// GPIO Port 0 data out clear
pub const REG_GPIO1_GPCLR: u32 = 0x4002_005C;
/// GPIO Port 0 pin toggle
pub const REG_GPIO1_GPTGL: u32 = 0x4002_0060;
/// GPIO Port 0 interrupt polarity
pub const REG_GPIO1_GPPOL: u32 = 0x4002_0064;
/// GPIO Port 0 interrupt A enable
pub const REG_GPIO1_GPIENA: u32 = 0x4002_0068;
/// GPIO Port 0 interrupt B enable
pub const REG_GPIO1_GPIENB: u32 = 0x4002_006C;
/// GPIO Port 0 interrupt Status
pub const REG_GPIO1_GPINT: u32 = 0x4002_0070;

// GPIO2 registers
/// GPIO Port 0 Configuration
pub const REG_GPIO2_GPCON: u32 = 0x4002_0080;
/// GPIO Port 0 output enable
pub const REG_GPIO2_GPOEN: u32 = 0x4002_0084;
/// GPIO Port 0 output pullup/pulldown enable
pub const REG_GPIO2_GPPE: u32 = 0x4002_0088;
/// GPIO Port 0 Input Path Enable
pub const REG_GPIO2_GPIEN: u32 = 0x4002_008C;
/// GPIO Port 0 registered data input
pub const REG_GPIO2_GPIN: u32 = 0x4002_0090;
/// GPIO Port 0 data output
pub const REG_GPIO2_GPOUT: u32 = 0x4002_0094;
/// GPIO Port 0 data out set
pub const REG_GPIO2_GPSET: u32 = 0x4002_0098;
/// GPIO Port 0 data out clear
pub const REG_GPIO2_GPCLR: u32 = 0x4002_009C;
/// GPIO Port 0 pin toggle
pub const REG_GPIO2_GPTGL: u32 = 0x4002_00A0;
/// GPIO Port 0 interrupt polarity
pub const REG_GPIO2_GPPOL: u32 = 0x4002_00A4;
/// GPIO Port 0 interrupt A enable
pub const REG_GPIO2_GPIENA: u32 = 0x4002_00A8;
/// GPIO Port 0 interrupt B enable
pub const REG_GPIO2_GPIENB: u32 = 0x4002_00AC;
/// GPIO Port 0 interrupt Status
pub const REG_GPIO2_GPINT: u32 = 0x4002_00B0;

// GPIO3 registers
/// GPIO Port 0 Configuration
pub const REG_GPIO3_GPCON: u32 = 0x4002_00C0;
/// GPIO Port 0 output enable
pub const REG_GPIO3_GPOEN: u32 = 0x4002_00C4;
/// GPIO Port 0 output pullup/pulldown enable
pub const REG_GPIO3_GPPE: u32 = 0x4002_00C8;
/// GPIO Port 0 Input Path Enable
pub const REG_GPIO3_GPIEN: u32 = 0x4002_00CC;
/// GPIO Port 0 registered data input
pub const REG_GPIO3_GPIN: u32 = 0x4002_00D0;
/// GPIO Port 0 data output
pub const REG_GPIO3_GPOUT: u32 = 0x4002_00D4;
/// GPIO Port 0 data out set
pub const REG_GPIO3_GPSET: u32 = 0x4002_00D8;
/// GPIO Port 0 data out clear
pub const REG_GPIO3_GPCLR: u32 = 0x4002_00DC;
/// GPIO Port 0 pin toggle
pub const REG_GPIO3_GPTGL: u32 = 0x4002_00E0;
/// GPIO Port 0 interrupt polarity
pub const REG_GPIO3_GPPOL: u32 = 0x4002_00E4;
/// GPIO Port 0 interrupt A enable
pub const REG_GPIO3_GPIENA: u32 = 0x4002_00E8;
/// GPIO Port 0 interrupt B enable
pub const REG_GPIO3_GPIENB: u32 = 0x4002_00EC;
/// GPIO Port 0 interrupt Status
pub const REG_GPIO3_GPINT: u32 = 0x4002_00F0;

// GPIO4 registers
/// GPIO Port 0 Configuration
pub const REG_GPIO4_GPCON: u32 = 0x4002_0100;
/// GPIO Port 0 output enable
pub const REG_GPIO4_GPOEN: u32 = 0x4002_0104;
/// GPIO Port 0 output pullup/pulldown enable
pub const REG_GPIO4_GPPE: u32 = 0x4002_0108;
/// GPIO Port 0 Input Path Enable
pub const REG_GPIO4_GPIEN: u32 = 0x4002_010C;
/// GPIO Port 0 registered data input
pub const REG_GPIO4_GPIN: u32 = 0x4002_0110;
/// GPIO Port 0 data output
pub const REG_GPIO4_GPOUT: u32 = 0x4002_0114;
/// GPIO Port 0 data out set
pub const REG_GPIO4_GPSET: u32 = 0x4002_0118;
/// GPIO Port 0 data out clear
pub const REG_GPIO4_GPCLR: u32 = 0x4002_011C;
/// GPIO Port 0 pin toggle
pub const REG_GPIO4_GPTGL: u32 = 0x4002_0120;
/// GPIO Port 0 interrupt polarity
pub const REG_GPIO4_GPPOL: u32 = 0x4002_0124;
/// GPIO Port 0 interrupt A enable
pub const REG_GPIO4_GPIENA: u32 = 0x4002_0128;
/// GPIO Port 0 interrupt B enable
pub const REG_GPIO4_GPIENB: u32 = 0x4002_012C;
/// GPIO Port 0 interrupt Status
pub const REG_GPIO4_GPINT: u32 = 0x4002_0130;

// GPIO_GPCON
pub const BITP_GPIO_GPCON_PIN0_CFG: u32 = 0;
pub const BITP_GPIO_GPCON_PIN1_CFG: u32 = 2;
pub const BITP_GPIO_GPCON_PIN2_CFG: u32 = 4;
pub const BITP_GPIO_GPCON_PIN3_CFG: u32 = 6;
pub const BITP_GPIO_GPCON_PIN4_CFG: u32 = 8;
pub const BITP_GPIO_GPCON_PIN5_CFG: u32 = 10;
pub const BITP_GPIO_GPCON_PIN6_CFG: u32 = 12;
pub const BITP_GPIO_GPCON_PIN7_CFG: u32 = 14;
pub const BITP_GPIO_GPCON_PIN8_CFG: u32 = 16;
pub const BITP_GPIO_GPCON_PIN9_CFG: u32 = 18;
pub const BITP_GPIO_GPCON_PIN10_CFG: u32 = 20;
pub const BITP_GPIO_GPCON_PIN11_CFG: u32 = 22;
pub const BITP_GPIO_GPCON_PIN12_CFG: u32 = 24;
pub const BITP_GPIO_GPCON_PIN13_CFG: u32 = 26;
pub const BITP_GPIO_GPCON_PIN14_CFG: u32 = 28;
pub const BITP_GPIO_GPCON_PIN15_CFG: u32 = 30;
/// Pin 0 configuration bits
pub const BITM_GPIO_GPCON_PIN0_CFG: u32 = 0x0000_0003;
/// Pin 1 configuration bits
pub const BITM_GPIO_GPCON_PIN1_CFG: u32 = 0x0000_000C;
/// Pin 2 configuration bits
pub const BITM_GPIO_GPCON_PIN2_CFG: u32 = 0x0000_0030;
/// Pin 3 configuration bits
pub const BITM_GPIO_GPCON_PIN3_CFG: u32 = 0x0000_00C0;
/// Pin 4 configuration bits
pub const BITM_GPIO_GPCON_PIN4_CFG: u32 = 0x0000_0300;
/// Pin 5 configuration bits
pub const BITM_GPIO_GPCON_PIN5_CFG: u32 = 0x0000_0C00;
/// Pin 6 configuration bits
pub const BITM_GPIO_GPCON_PIN6_CFG: u32 = 0x0000_3000;
/// Pin 7 configuration bits
pub const BITM_GPIO_GPCON_PIN7_CFG: u32 = 0x0000_C000;
/// Pin 8 configuration bits
pub const BITM_GPIO_GPCON_PIN8_CFG: u32 = 0x0003_0000;
/// Pin 9 configuration bits
pub const BITM_GPIO_GPCON_PIN9_CFG: u32 = 0x000C_0000;
/// Pin 10 configuration bits
pub const BITM_GPIO_GPCON_PIN10_CFG: u32 = 0x0030_0000;
/// Pin 11 configuration bits
pub const BITM_GPIO_GPCON_PIN11_CFG: u32 = 0x00C0_0000;
/// Pin 12 configuration bits
pub const BITM_GPIO_GPCON_PIN12_CFG: u32 = 0x0300_0000;
/// Pin 13 configuration bits
pub const BITM_GPIO_GPCON_PIN13_CFG: u32 = 0x0C00_0000;
/// Pin 14 configuration bits
pub const BITM_GPIO_GPCON_PIN14_CFG: u32 = 0x3000_0000;
/// Pin 15 configuration bits
pub const BITM_GPIO_GPCON_PIN15_CFG: u32 = 0xC000_0000;

// GPIO_GPOEN
pub const BITP_GPIO_GPOEN_VALUE: u32 = 0;
/// GPIO Port 0 output enable
pub const BITM_GPIO_GPOEN_VALUE: u16 = 0xFFFF;

// GPIO_GPPE
pub const BITP_GPIO_GPPE_VALUE: u32 = 0;
/// GPIO Port 0 output pullup/pulldown enable
pub const BITM_GPIO_GPPE_VALUE: u16 = 0xFFFF;

// GPIO_GPIEN
pub const BITP_GPIO_GPIEN_VALUE: u32 = 0;
/// GPIO Port 0 Input Path Enable
pub const BITM_GPIO_GPIEN_VALUE: u16 = 0xFFFF;

// GPIO_GPIN
pub const BITP_GPIO_GPIN_VALUE: u32 = 0;
/// GPIO Port 0 registered data input
pub const BITM_GPIO_GPIN_VALUE: u16 = 0xFFFF;

// GPIO_GPOUT
pub const BITP_GPIO_GPOUT_VALUE: u32 = 0;
/// GPIO Port 0 data output
pub const BITM_GPIO_GPOUT_VALUE: u16 = 0xFFFF;

// GPIO_GPSET
pub const BITP_GPIO_GPSET_VALUE: u32 = 0;
/// GPIO Port 0 data out set
pub const BITM_GPIO_GPSET_VALUE: u16 = 0xFFFF;

// GPIO_GPCLR
pub const BITP_GPIO_GPCLR_VALUE: u32 = 0;
/// GPIO Port 0 data out clear
pub const BITM_GPIO_GPCLR_VALUE: u16 = 0xFFFF;

// GPIO_GPTGL
pub const BITP_GPIO_GPTGL_VALUE: u32 = 0;
/// GPIO Port 0 pin toggle
pub const BITM_GPIO_GPTGL_VALUE: u16 = 0xFFFF;

// GPIO_GPPOL
pub const BITP_GPIO_GPPOL_VALUE: u32 = 0;
/// GPIO Port 0 interrupt polarity
pub const BITM_GPIO_GPPOL_VALUE: u16 = 0xFFFF;

// GPIO_GPIENA
pub const BITP_GPIO_GPIENA_VALUE: u32 = 0;
/// GPIO Port 0 interrupt A enable
pub const BITM_GPIO_GPIENA_VALUE: u16 = 0xFFFF;

// GPIO_GPIENB
pub const BITP_GPIO_GPIENB_VALUE: u32 = 0;
/// GPIO Port 0 interrupt B enable
pub const BITM_GPIO_GPIENB_VALUE: u16 = 0xFFFF;

// GPIO_GPINT
pub const BITP_GPIO_GPINT_VALUE: u32 = 0;
/// GPIO Port 0 interrupt Status
pub const BITM_GPIO_GPINT_VALUE: u16 = 0xFFFF;
