// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Named constants for NVIC ids

pub const WUT: u32 = 0;
pub const EINT0: u32 = 1;
pub const EINT1: u32 = 2;
pub const EINT2: u32 = 3;
pub const EINT3: u32 = 4;
pub const EINT4: u32 = 5;
pub const EINT5: u32 = 6;
pub const EINT6: u32 = 7;
pub const EINT7: u32 = 8;
pub const EINT8: u32 = 9;
pub const WDT: u32 = 10;
pub const TIMER0: u32 = 11;
pub const TIMER1: u32 = 12;
pub const FLASH0: u32 = 13;
pub const UART: u32 = 14;
pub const SPI0: u32 = 15;
pub const SPIH: u32 = 16;
pub const I2CS: u32 = 17;
pub const I2CM: u32 = 18;
pub const DMA_ERR: u32 = 19;
pub const DMA_SPIH_TX: u32 = 20;
pub const DMA_SPIH_RX: u32 = 21;
pub const DMA_SPI0_TX: u32 = 22;
pub const DMA_SPI0_RX: u32 = 23;
pub const DMA_SPI1_TX: u32 = 24;
pub const DMA_SPI1_RX: u32 = 25;
pub const DMA_UART_TX: u32 = 26;
pub const DMA_UART_RX: u32 = 27;
pub const DMA_I2CS_TX: u32 = 28;
pub const DMA_I2CS_RX: u32 = 29;
pub const DMA_I2CM: u32 = 30;
pub const DMA_AFE_TX: u32 = 31;
pub const DMA_AFE_RX: u32 = 32;
pub const DMA_CRC: u32 = 33;
pub const DMA_PDI: u32 = 34;
pub const DMA_I2S: u32 = 35;
pub const USB_WAKEUP: u32 = 36;
pub const USB_CNTL: u32 = 37;
pub const USB_DMA: u32 = 38;
pub const I2S: u32 = 39;
pub const TIMER2: u32 = 40;
pub const FLASH1: u32 = 41;
pub const SPI1: u32 = 42;
pub const RTC: u32 = 43;
pub const BEEP: u32 = 45;
pub const LCD: u32 = 46;
pub const GPIOA: u32 = 47;
pub const GPIOB: u32 = 48;
pub const AFE_CAPTURE: u32 = 50;
pub const AFE_GENERATE: u32 = 51;
pub const AFE_CMD_FIFO: u32 = 52;
pub const AFE_DATA_FIFO: u32 = 53;
pub const CAP: u32 = 54;
pub const GP_FLASH: u32 = 55;
pub const XTAL_OSC: u32 = 56;
pub const PLL: u32 = 57;
pub const RAND: u32 = 58;
pub const PDI: u32 = 59;
pub const PARITY: u32 = 60;

/// Number of device interrupt lines, including the reserved ids 44 and 49.
pub const NUM_INTERRUPTS: u32 = 61;

/// Number of priority bits implemented by the NVIC.
pub const NVIC_PRIO_BITS: u32 = 3;

/// Cortex-M3 system exception numbers, relative to the first device
/// interrupt.
pub mod exceptions {
    pub const NON_MASKABLE_INT: i32 = -14;
    pub const HARD_FAULT: i32 = -13;
    pub const MEMORY_MANAGEMENT: i32 = -12;
    pub const BUS_FAULT: i32 = -11;
    pub const USAGE_FAULT: i32 = -10;
    pub const SV_CALL: i32 = -5;
    pub const DEBUG_MONITOR: i32 = -4;
    pub const PEND_SV: i32 = -2;
    pub const SYS_TICK: i32 = -1;
}

/// Name of a device interrupt, or `None` for reserved and out of range ids.
pub fn name(id: u32) -> Option<&'static str> {
    match id {
        WUT => Some("WUT"),
        EINT0 => Some("EINT0"),
        EINT1 => Some("EINT1"),
        EINT2 => Some("EINT2"),
        EINT3 => Some("EINT3"),
        EINT4 => Some("EINT4"),
        EINT5 => Some("EINT5"),
        EINT6 => Some("EINT6"),
        EINT7 => Some("EINT7"),
        EINT8 => Some("EINT8"),
        WDT => Some("WDT"),
        TIMER0 => Some("TIMER0"),
        TIMER1 => Some("TIMER1"),
        FLASH0 => Some("FLASH0"),
        UART => Some("UART"),
        SPI0 => Some("SPI0"),
        SPIH => Some("SPIH"),
        I2CS => Some("I2CS"),
        I2CM => Some("I2CM"),
        DMA_ERR => Some("DMA_ERR"),
        DMA_SPIH_TX => Some("DMA_SPIH_TX"),
        DMA_SPIH_RX => Some("DMA_SPIH_RX"),
        DMA_SPI0_TX => Some("DMA_SPI0_TX"),
        DMA_SPI0_RX => Some("DMA_SPI0_RX"),
        DMA_SPI1_TX => Some("DMA_SPI1_TX"),
        DMA_SPI1_RX => Some("DMA_SPI1_RX"),
        DMA_UART_TX => Some("DMA_UART_TX"),
        DMA_UART_RX => Some("DMA_UART_RX"),
        DMA_I2CS_TX => Some("DMA_I2CS_TX"),
        DMA_I2CS_RX => Some("DMA_I2CS_RX"),
        DMA_I2CM => Some("DMA_I2CM"),
        DMA_AFE_TX => Some("DMA_AFE_TX"),
        DMA_AFE_RX => Some("DMA_AFE_RX"),
        DMA_CRC => Some("DMA_CRC"),
        DMA_PDI => Some("DMA_PDI"),
        DMA_I2S => Some("DMA_I2S"),
        USB_WAKEUP => Some("USB_WAKEUP"),
        USB_CNTL => Some("USB_CNTL"),
        USB_DMA => Some("USB_DMA"),
        I2S => Some("I2S"),
        TIMER2 => Some("TIMER2"),
        FLASH1 => Some("FLASH1"),
        SPI1 => Some("SPI1"),
        RTC => Some("RTC"),
        BEEP => Some("BEEP"),
        LCD => Some("LCD"),
        GPIOA => Some("GPIOA"),
        GPIOB => Some("GPIOB"),
        AFE_CAPTURE => Some("AFE_CAPTURE"),
        AFE_GENERATE => Some("AFE_GENERATE"),
        AFE_CMD_FIFO => Some("AFE_CMD_FIFO"),
        AFE_DATA_FIFO => Some("AFE_DATA_FIFO"),
        CAP => Some("CAP"),
        GP_FLASH => Some("GP_FLASH"),
        XTAL_OSC => Some("XTAL_OSC"),
        PLL => Some("PLL"),
        RAND => Some("RAND"),
        PDI => Some("PDI"),
        PARITY => Some("PARITY"),
        _ => None,
    }
}

/// Bit in the NVIC set/clear enable register bank for a device interrupt.
///
/// Returns the index of the 32-bit `ISERn`/`ICERn` register and the mask
/// within it.
pub const fn enable_bit(id: u32) -> (usize, u32) {
    ((id / 32) as usize, 1 << (id % 32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_ids_have_no_name() {
        assert_eq!(name(44), None);
        assert_eq!(name(49), None);
        assert_eq!(name(NUM_INTERRUPTS), None);
    }

    #[test]
    fn names_follow_ids() {
        assert_eq!(name(WUT), Some("WUT"));
        assert_eq!(name(DMA_I2S), Some("DMA_I2S"));
        assert_eq!(name(RTC), Some("RTC"));
        assert_eq!(name(PARITY), Some("PARITY"));
        assert_eq!(PARITY, NUM_INTERRUPTS - 1);
    }

    #[test]
    fn dma_channel_interrupts_are_contiguous() {
        assert_eq!(DMA_SPIH_TX + crate::dma::I2S_CHAN, DMA_I2S);
        assert_eq!(DMA_SPIH_TX + crate::dma::CRC_CHAN, DMA_CRC);
    }

    #[test]
    fn enable_bits() {
        assert_eq!(enable_bit(WUT), (0, 1));
        assert_eq!(enable_bit(I2CM), (0, 1 << 18));
        assert_eq!(enable_bit(AFE_CAPTURE), (1, 1 << 18));
    }
}
