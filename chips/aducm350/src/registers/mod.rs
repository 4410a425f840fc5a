// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Typed register blocks and bitfield definitions for each peripheral.

pub mod afe_regs;
pub mod beep_regs;
pub mod busm_regs;
pub mod crc_regs;
pub mod ct_regs;
pub mod dma_regs;
pub mod fee_regs;
pub mod gpf_regs;
pub mod gpio_regs;
pub mod gpt_regs;
pub mod i2c_regs;
pub mod i2s_regs;
pub mod lcd_regs;
pub mod nvic_regs;
pub mod pdi_regs;
pub mod pwr_regs;
pub mod rng_regs;
pub mod rtc_regs;
pub mod spi_regs;
pub mod sysclk_regs;
pub mod uart_regs;
pub mod usb_regs;
pub mod wdt_regs;
pub mod wut_regs;

#[cfg(test)]
mod tests {
    use crate::memory_map;


    #[test]
    fn instances_match_memory_map() {
        let instances: [(&str, usize, usize); 33] = [
            ("AFE", super::afe_regs::AFE_BASE.address(), core::mem::size_of::<super::afe_regs::AfeRegisters>()),
            ("BEEP", super::beep_regs::BEEP_BASE.address(), core::mem::size_of::<super::beep_regs::BeepRegisters>()),
            ("BUSM", super::busm_regs::BUSM_BASE.address(), core::mem::size_of::<super::busm_regs::BusMRegisters>()),
            ("CRC", super::crc_regs::CRC_BASE.address(), core::mem::size_of::<super::crc_regs::CrcRegisters>()),
            ("CT", super::ct_regs::CT_BASE.address(), core::mem::size_of::<super::ct_regs::CtRegisters>()),
            ("DMA", super::dma_regs::DMA_BASE.address(), core::mem::size_of::<super::dma_regs::DmaRegisters>()),
            ("FEE0", super::fee_regs::FEE0_BASE.address(), core::mem::size_of::<super::fee_regs::FeeRegisters>()),
            ("FEE1", super::fee_regs::FEE1_BASE.address(), core::mem::size_of::<super::fee_regs::FeeRegisters>()),
            ("GPF", super::gpf_regs::GPF_BASE.address(), core::mem::size_of::<super::gpf_regs::GpfRegisters>()),
            ("GPIO0", super::gpio_regs::GPIO0_BASE.address(), core::mem::size_of::<super::gpio_regs::GpioRegisters>()),
            ("GPIO1", super::gpio_regs::GPIO1_BASE.address(), core::mem::size_of::<super::gpio_regs::GpioRegisters>()),
            ("GPIO2", super::gpio_regs::GPIO2_BASE.address(), core::mem::size_of::<super::gpio_regs::GpioRegisters>()),
            ("GPIO3", super::gpio_regs::GPIO3_BASE.address(), core::mem::size_of::<super::gpio_regs::GpioRegisters>()),
            ("GPIO4", super::gpio_regs::GPIO4_BASE.address(), core::mem::size_of::<super::gpio_regs::GpioRegisters>()),
            ("GPT0", super::gpt_regs::GPT0_BASE.address(), core::mem::size_of::<super::gpt_regs::GptRegisters>()),
            ("GPT1", super::gpt_regs::GPT1_BASE.address(), core::mem::size_of::<super::gpt_regs::GptRegisters>()),
            ("GPT2", super::gpt_regs::GPT2_BASE.address(), core::mem::size_of::<super::gpt_regs::GptRegisters>()),
            ("I2C", super::i2c_regs::I2C_BASE.address(), core::mem::size_of::<super::i2c_regs::I2cRegisters>()),
            ("I2S", super::i2s_regs::I2S_BASE.address(), core::mem::size_of::<super::i2s_regs::I2sRegisters>()),
            ("LCD", super::lcd_regs::LCD_BASE.address(), core::mem::size_of::<super::lcd_regs::LcdRegisters>()),
            ("NVIC", super::nvic_regs::NVIC_BASE.address(), core::mem::size_of::<super::nvic_regs::NvicRegisters>()),
            ("PDI", super::pdi_regs::PDI_BASE.address(), core::mem::size_of::<super::pdi_regs::PdiRegisters>()),
            ("PWR", super::pwr_regs::PWR_BASE.address(), core::mem::size_of::<super::pwr_regs::PwrRegisters>()),
            ("RNG", super::rng_regs::RNG_BASE.address(), core::mem::size_of::<super::rng_regs::RngRegisters>()),
            ("RTC", super::rtc_regs::RTC_BASE.address(), core::mem::size_of::<super::rtc_regs::RtcRegisters>()),
            ("SPI0", super::spi_regs::SPI0_BASE.address(), core::mem::size_of::<super::spi_regs::SpiRegisters>()),
            ("SPI1", super::spi_regs::SPI1_BASE.address(), core::mem::size_of::<super::spi_regs::SpiRegisters>()),
            ("SPIH", super::spi_regs::SPIH_BASE.address(), core::mem::size_of::<super::spi_regs::SpiRegisters>()),
            ("SYSCLK", super::sysclk_regs::SYSCLK_BASE.address(), core::mem::size_of::<super::sysclk_regs::SysClkRegisters>()),
            ("UART", super::uart_regs::UART_BASE.address(), core::mem::size_of::<super::uart_regs::UartRegisters>()),
            ("USB0", super::usb_regs::USB0_BASE.address(), core::mem::size_of::<super::usb_regs::UsbRegisters>()),
            ("WDT", super::wdt_regs::WDT_BASE.address(), core::mem::size_of::<super::wdt_regs::WdtRegisters>()),
            ("WUT", super::wut_regs::WUT_BASE.address(), core::mem::size_of::<super::wut_regs::WutRegisters>()),
        ];
        assert_eq!(instances.len(), memory_map::peripherals().len());
        for (name, address, size) in instances {
            let p = memory_map::peripherals()
                .iter()
                .find(|p| p.name == name)
                .unwrap_or_else(|| panic!("{} missing from the memory map", name));
            assert_eq!(address, p.base as usize, "{}", name);
            assert!(size <= p.size as usize, "{} block larger than its window", name);
        }
    }
}
