// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for gpio.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub GpioRegisters {
        /// GPIO Port 0 Configuration
        (0x0000 => pub gpcon: ReadWrite<u32, GPCON::Register>),
        /// GPIO Port 0 output enable
        (0x0004 => pub gpoen: ReadWrite<u16>),
        (0x0006 => _reserved0),
        /// GPIO Port 0 output pullup/pulldown enable
        (0x0008 => pub gppe: ReadWrite<u16>),
        (0x000a => _reserved1),
        /// GPIO Port 0 Input Path Enable
        (0x000c => pub gpien: ReadWrite<u16>),
        (0x000e => _reserved2),
        /// GPIO Port 0 registered data input
        (0x0010 => pub gpin: ReadOnly<u16>),
        (0x0012 => _reserved3),
        /// GPIO Port 0 data output
        (0x0014 => pub gpout: ReadWrite<u16>),
        (0x0016 => _reserved4),
        /// GPIO Port 0 data out set
        (0x0018 => pub gpset: WriteOnly<u16>),
        (0x001a => _reserved5),
        /// GPIO Port 0 data out clear
        (0x001c => pub gpclr: WriteOnly<u16>),
        (0x001e => _reserved6),
        /// GPIO Port 0 pin toggle
        (0x0020 => pub gptgl: WriteOnly<u16>),
        (0x0022 => _reserved7),
        /// GPIO Port 0 interrupt polarity
        (0x0024 => pub gppol: ReadWrite<u16>),
        (0x0026 => _reserved8),
        /// GPIO Port 0 interrupt A enable
        (0x0028 => pub gpiena: ReadWrite<u16>),
        (0x002a => _reserved9),
        /// GPIO Port 0 interrupt B enable
        (0x002c => pub gpienb: ReadWrite<u16>),
        (0x002e => _reserved10),
        /// GPIO Port 0 interrupt Status
        (0x0030 => pub gpint: ReadWrite<u16>),
        (0x0032 => _reserved11),
        (0x0034 => @END),
    }
}

register_bitfields![u32,
    pub GPCON [
        PIN0_CFG OFFSET(0) NUMBITS(2) [],
        PIN1_CFG OFFSET(2) NUMBITS(2) [],
        PIN2_CFG OFFSET(4) NUMBITS(2) [],
        PIN3_CFG OFFSET(6) NUMBITS(2) [],
        PIN4_CFG OFFSET(8) NUMBITS(2) [],
        PIN5_CFG OFFSET(10) NUMBITS(2) [],
        PIN6_CFG OFFSET(12) NUMBITS(2) [],
        PIN7_CFG OFFSET(14) NUMBITS(2) [],
        PIN8_CFG OFFSET(16) NUMBITS(2) [],
        PIN9_CFG OFFSET(18) NUMBITS(2) [],
        PIN10_CFG OFFSET(20) NUMBITS(2) [],
        PIN11_CFG OFFSET(22) NUMBITS(2) [],
        PIN12_CFG OFFSET(24) NUMBITS(2) [],
        PIN13_CFG OFFSET(26) NUMBITS(2) [],
        PIN14_CFG OFFSET(28) NUMBITS(2) [],
        PIN15_CFG OFFSET(30) NUMBITS(2) [],
    ],
];

pub const GPIO0_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x4002_0000 as *const GpioRegisters) };
pub const GPIO1_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x4002_0040 as *const GpioRegisters) };
pub const GPIO2_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x4002_0080 as *const GpioRegisters) };
pub const GPIO3_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x4002_00C0 as *const GpioRegisters) };
pub const GPIO4_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x4002_0100 as *const GpioRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(GPCON::PIN0_CFG.mask << GPCON::PIN0_CFG.shift, BITM_GPIO_GPCON_PIN0_CFG);
        assert_eq!(GPCON::PIN0_CFG.shift as u32, BITP_GPIO_GPCON_PIN0_CFG);
        assert_eq!(GPCON::PIN1_CFG.mask << GPCON::PIN1_CFG.shift, BITM_GPIO_GPCON_PIN1_CFG);
        assert_eq!(GPCON::PIN1_CFG.shift as u32, BITP_GPIO_GPCON_PIN1_CFG);
        assert_eq!(GPCON::PIN2_CFG.mask << GPCON::PIN2_CFG.shift, BITM_GPIO_GPCON_PIN2_CFG);
        assert_eq!(GPCON::PIN2_CFG.shift as u32, BITP_GPIO_GPCON_PIN2_CFG);
        assert_eq!(GPCON::PIN3_CFG.mask << GPCON::PIN3_CFG.shift, BITM_GPIO_GPCON_PIN3_CFG);
        assert_eq!(GPCON::PIN3_CFG.shift as u32, BITP_GPIO_GPCON_PIN3_CFG);
        assert_eq!(GPCON::PIN4_CFG.mask << GPCON::PIN4_CFG.shift, BITM_GPIO_GPCON_PIN4_CFG);
        assert_eq!(GPCON::PIN4_CFG.shift as u32, BITP_GPIO_GPCON_PIN4_CFG);
        assert_eq!(GPCON::PIN5_CFG.mask << GPCON::PIN5_CFG.shift, BITM_GPIO_GPCON_PIN5_CFG);
        assert_eq!(GPCON::PIN5_CFG.shift as u32, BITP_GPIO_GPCON_PIN5_CFG);
        assert_eq!(GPCON::PIN6_CFG.mask << GPCON::PIN6_CFG.shift, BITM_GPIO_GPCON_PIN6_CFG);
        assert_eq!(GPCON::PIN6_CFG.shift as u32, BITP_GPIO_GPCON_PIN6_CFG);
        assert_eq!(GPCON::PIN7_CFG.mask << GPCON::PIN7_CFG.shift, BITM_GPIO_GPCON_PIN7_CFG);
        assert_eq!(GPCON::PIN7_CFG.shift as u32, BITP_GPIO_GPCON_PIN7_CFG);
        assert_eq!(GPCON::PIN8_CFG.mask << GPCON::PIN8_CFG.shift, BITM_GPIO_GPCON_PIN8_CFG);
        assert_eq!(GPCON::PIN8_CFG.shift as u32, BITP_GPIO_GPCON_PIN8_CFG);
        assert_eq!(GPCON::PIN9_CFG.mask << GPCON::PIN9_CFG.shift, BITM_GPIO_GPCON_PIN9_CFG);
        assert_eq!(GPCON::PIN9_CFG.shift as u32, BITP_GPIO_GPCON_PIN9_CFG);
        assert_eq!(GPCON::PIN10_CFG.mask << GPCON::PIN10_CFG.shift, BITM_GPIO_GPCON_PIN10_CFG);
        assert_eq!(GPCON::PIN10_CFG.shift as u32, BITP_GPIO_GPCON_PIN10_CFG);
        assert_eq!(GPCON::PIN11_CFG.mask << GPCON::PIN11_CFG.shift, BITM_GPIO_GPCON_PIN11_CFG);
        assert_eq!(GPCON::PIN11_CFG.shift as u32, BITP_GPIO_GPCON_PIN11_CFG);
        assert_eq!(GPCON::PIN12_CFG.mask << GPCON::PIN12_CFG.shift, BITM_GPIO_GPCON_PIN12_CFG);
        assert_eq!(GPCON::PIN12_CFG.shift as u32, BITP_GPIO_GPCON_PIN12_CFG);
        assert_eq!(GPCON::PIN13_CFG.mask << GPCON::PIN13_CFG.shift, BITM_GPIO_GPCON_PIN13_CFG);
        assert_eq!(GPCON::PIN13_CFG.shift as u32, BITP_GPIO_GPCON_PIN13_CFG);
        assert_eq!(GPCON::PIN14_CFG.mask << GPCON::PIN14_CFG.shift, BITM_GPIO_GPCON_PIN14_CFG);
        assert_eq!(GPCON::PIN14_CFG.shift as u32, BITP_GPIO_GPCON_PIN14_CFG);
        assert_eq!(GPCON::PIN15_CFG.mask << GPCON::PIN15_CFG.shift, BITM_GPIO_GPCON_PIN15_CFG);
        assert_eq!(GPCON::PIN15_CFG.shift as u32, BITP_GPIO_GPCON_PIN15_CFG);
    }

    #[test]
    fn registers_match_addresses() {
        let gpio0 = GPIO0_BASE.address();
        let gpio1 = GPIO1_BASE.address();
        let gpio2 = GPIO2_BASE.address();
        let gpio3 = GPIO3_BASE.address();
        let gpio4 = GPIO4_BASE.address();
        assert_eq!(REG_GPIO0_GPCON as usize, gpio0 + offset_of!(GpioRegisters, gpcon));
        assert_eq!(REG_GPIO0_GPOEN as usize, gpio0 + offset_of!(GpioRegisters, gpoen));
        assert_eq!(REG_GPIO0_GPPE as usize, gpio0 + offset_of!(GpioRegisters, gppe));
        assert_eq!(REG_GPIO0_GPIEN as usize, gpio0 + offset_of!(GpioRegisters, gpien));
        assert_eq!(REG_GPIO0_GPIN as usize, gpio0 + offset_of!(GpioRegisters, gpin));
        assert_eq!(REG_GPIO0_GPOUT as usize, gpio0 + offset_of!(GpioRegisters, gpout));
        assert_eq!(REG_GPIO0_GPSET as usize, gpio0 + offset_of!(GpioRegisters, gpset));
        assert_eq!(REG_GPIO0_GPCLR as usize, gpio0 + offset_of!(GpioRegisters, gpclr));
        assert_eq!(REG_GPIO0_GPTGL as usize, gpio0 + offset_of!(GpioRegisters, gptgl));
        assert_eq!(REG_GPIO0_GPPOL as usize, gpio0 + offset_of!(GpioRegisters, gppol));
        assert_eq!(REG_GPIO0_GPIENA as usize, gpio0 + offset_of!(GpioRegisters, gpiena));
        assert_eq!(REG_GPIO0_GPIENB as usize, gpio0 + offset_of!(GpioRegisters, gpienb));
        assert_eq!(REG_GPIO0_GPINT as usize, gpio0 + offset_of!(GpioRegisters, gpint));
        assert_eq!(REG_GPIO1_GPCON as usize, gpio1 + offset_of!(GpioRegisters, gpcon));
        assert_eq!(REG_GPIO1_GPOEN as usize, gpio1 + offset_of!(GpioRegisters, gpoen));
        assert_eq!(REG_GPIO1_GPPE as usize, gpio1 + offset_of!(GpioRegisters, gppe));
        assert_eq!(REG_GPIO1_GPIEN as usize, gpio1 + offset_of!(GpioRegisters, gpien));
        assert_eq!(REG_GPIO1_GPIN as usize, gpio1 + offset_of!(GpioRegisters, gpin));
        assert_eq!(REG_GPIO1_GPOUT as usize, gpio1 + offset_of!(GpioRegisters, gpout));
        assert_eq!(REG_GPIO1_GPSET as usize, gpio1 + offset_of!(GpioRegisters, gpset));
        assert_eq!(REG_GPIO1_GPCLR as usize, gpio1 + offset_of!(GpioRegisters, gpclr));
        assert_eq!(REG_GPIO1_GPTGL as usize, gpio1 + offset_of!(GpioRegisters, gptgl));
        assert_eq!(REG_GPIO1_GPPOL as usize, gpio1 + offset_of!(GpioRegisters, gppol));
        assert_eq!(REG_GPIO1_GPIENA as usize, gpio1 + offset_of!(GpioRegisters, gpiena));
        assert_eq!(REG_GPIO1_GPIENB as usize, gpio1 + offset_of!(GpioRegisters, gpienb));
        assert_eq!(REG_GPIO1_GPINT as usize, gpio1 + offset_of!(GpioRegisters, gpint));
        assert_eq!(REG_GPIO2_GPCON as usize, gpio2 + offset_of!(GpioRegisters, gpcon));
        assert_eq!(REG_GPIO2_GPOEN as usize, gpio2 + offset_of!(GpioRegisters, gpoen));
        assert_eq!(REG_GPIO2_GPPE as usize, gpio2 + offset_of!(GpioRegisters, gppe));
        assert_eq!(REG_GPIO2_GPIEN as usize, gpio2 + offset_of!(GpioRegisters, gpien));
        assert_eq!(REG_GPIO2_GPIN as usize, gpio2 + offset_of!(GpioRegisters, gpin));
        assert_eq!(REG_GPIO2_GPOUT as usize, gpio2 + offset_of!(GpioRegisters, gpout));
        assert_eq!(REG_GPIO2_GPSET as usize, gpio2 + offset_of!(GpioRegisters, gpset));
        assert_eq!(REG_GPIO2_GPCLR as usize, gpio2 + offset_of!(GpioRegisters, gpclr));
        assert_eq!(REG_GPIO2_GPTGL as usize, gpio2 + offset_of!(GpioRegisters, gptgl));
        assert_eq!(REG_GPIO2_GPPOL as usize, gpio2 + offset_of!(GpioRegisters, gppol));
        assert_eq!(REG_GPIO2_GPIENA as usize, gpio2 + offset_of!(GpioRegisters, gpiena));
        assert_eq!(REG_GPIO2_GPIENB as usize, gpio2 + offset_of!(GpioRegisters, gpienb));
        assert_eq!(REG_GPIO2_GPINT as usize, gpio2 + offset_of!(GpioRegisters, gpint));
        assert_eq!(REG_GPIO3_GPCON as usize, gpio3 + offset_of!(GpioRegisters, gpcon));
        assert_eq!(REG_GPIO3_GPOEN as usize, gpio3 + offset_of!(GpioRegisters, gpoen));
        assert_eq!(REG_GPIO3_GPPE as usize, gpio3 + offset_of!(GpioRegisters, gppe));
        assert_eq!(REG_GPIO3_GPIEN as usize, gpio3 + offset_of!(GpioRegisters, gpien));
        assert_eq!(REG_GPIO3_GPIN as usize, gpio3 + offset_of!(GpioRegisters, gpin));
        assert_eq!(REG_GPIO3_GPOUT as usize, gpio3 + offset_of!(GpioRegisters, gpout));
        assert_eq!(REG_GPIO3_GPSET as usize, gpio3 + offset_of!(GpioRegisters, gpset));
        assert_eq!(REG_GPIO3_GPCLR as usize, gpio3 + offset_of!(GpioRegisters, gpclr));
        assert_eq!(REG_GPIO3_GPTGL as usize, gpio3 + offset_of!(GpioRegisters, gptgl));
        assert_eq!(REG_GPIO3_GPPOL as usize, gpio3 + offset_of!(GpioRegisters, gppol));
        assert_eq!(REG_GPIO3_GPIENA as usize, gpio3 + offset_of!(GpioRegisters, gpiena));
        assert_eq!(REG_GPIO3_GPIENB as usize, gpio3 + offset_of!(GpioRegisters, gpienb));
        assert_eq!(REG_GPIO3_GPINT as usize, gpio3 + offset_of!(GpioRegisters, gpint));
        assert_eq!(REG_GPIO4_GPCON as usize, gpio4 + offset_of!(GpioRegisters, gpcon));
        assert_eq!(REG_GPIO4_GPOEN as usize, gpio4 + offset_of!(GpioRegisters, gpoen));
        assert_eq!(REG_GPIO4_GPPE as usize, gpio4 + offset_of!(GpioRegisters, gppe));
        assert_eq!(REG_GPIO4_GPIEN as usize, gpio4 + offset_of!(GpioRegisters, gpien));
        assert_eq!(REG_GPIO4_GPIN as usize, gpio4 + offset_of!(GpioRegisters, gpin));
        assert_eq!(REG_GPIO4_GPOUT as usize, gpio4 + offset_of!(GpioRegisters, gpout));
        assert_eq!(REG_GPIO4_GPSET as usize, gpio4 + offset_of!(GpioRegisters, gpset));
        assert_eq!(REG_GPIO4_GPCLR as usize, gpio4 + offset_of!(GpioRegisters, gpclr));
        assert_eq!(REG_GPIO4_GPTGL as usize, gpio4 + offset_of!(GpioRegisters, gptgl));
        assert_eq!(REG_GPIO4_GPPOL as usize, gpio4 + offset_of!(GpioRegisters, gppol));
        assert_eq!(REG_GPIO4_GPIENA as usize, gpio4 + offset_of!(GpioRegisters, gpiena));
        assert_eq!(REG_GPIO4_GPIENB as usize, gpio4 + offset_of!(GpioRegisters, gpienb));
        assert_eq!(REG_GPIO4_GPINT as usize, gpio4 + offset_of!(GpioRegisters, gpint));
    }
}
