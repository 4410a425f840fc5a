// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! DMA channel assignments and channel control descriptors.
//!
//! The DMA controller reads its per-channel configuration from a table in
//! RAM whose base is written to `DMAPDBPTR`. The table holds one primary and
//! one alternate [`ChannelControl`] per channel and must be aligned to
//! [`DESCRIPTOR_TABLE_ALIGN`]. [`DescriptorTable`] has that layout.

use core::fmt;

use tock_registers::fields::FieldValue;
use tock_registers::{register_bitfields, LocalRegisterCopy};

use crate::defs::*;

pub const SPIH_TX_CHAN: u32 = 0;
pub const SPIH_RX_CHAN: u32 = 1;
pub const SPI0_TX_CHAN: u32 = 2;
pub const SPI0_RX_CHAN: u32 = 3;
pub const SPI1_TX_CHAN: u32 = 4;
pub const SPI1_RX_CHAN: u32 = 5;
pub const UART_TX_CHAN: u32 = 6;
pub const UART_RX_CHAN: u32 = 7;
pub const I2CS_TX_CHAN: u32 = 8;
pub const I2CS_RX_CHAN: u32 = 9;
pub const I2CM_CHAN: u32 = 10;
pub const AFE_TX_CHAN: u32 = 11;
pub const AFE_RX_CHAN: u32 = 12;
pub const CRC_CHAN: u32 = 13;
pub const PDI_CHAN: u32 = 14;
pub const I2S_CHAN: u32 = 15;

pub const NUM_CHANNELS: usize = 16;

/// Required alignment of the descriptor table, in bytes.
pub const DESCRIPTOR_TABLE_ALIGN: usize = 0x200;

/// Largest number of items a single descriptor can move.
pub const MAX_TRANSFER_LEN: u32 = 1024;

register_bitfields![u32,
    /// Channel data configuration word of a descriptor.
    pub CDC [
        CYCLE_CTRL OFFSET(0) NUMBITS(3) [
            Stop = 0,
            Basic = 1,
            Auto = 2,
            PingPong = 3,
            MemoryScatterGatherPrimary = 4,
            MemoryScatterGatherAlternate = 5,
            PeripheralScatterGatherPrimary = 6,
            PeripheralScatterGatherAlternate = 7
        ],
        NEXT_USEBURST OFFSET(3) NUMBITS(1) [],
        N_MINUS_1 OFFSET(4) NUMBITS(10) [],
        R_POWER OFFSET(14) NUMBITS(4) [],
        SRC_PROT_CTRL OFFSET(18) NUMBITS(3) [],
        DST_PROT_CTRL OFFSET(21) NUMBITS(3) [],
        SRC_SIZE OFFSET(24) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2
        ],
        SRC_INC OFFSET(26) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2,
            NoIncrement = 3
        ],
        DST_SIZE OFFSET(28) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2
        ],
        DST_INC OFFSET(30) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2,
            NoIncrement = 3
        ]
    ]
];

pub type CdcVal = LocalRegisterCopy<u32, CDC::Register>;

/// Size of a single item moved by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataWidth {
    Byte = 0,
    HalfWord = 1,
    Word = 2,
}

impl DataWidth {
    /// log2 of the item size in bytes.
    pub const fn shift(self) -> u32 {
        self as u32
    }
}

/// How an end pointer moves between items.
///
/// Decrementing channels are selected through `DMASRCADSSET` and
/// `DMADSTADSET`; the descriptor encodes the step size only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressStep {
    Increment(DataWidth),
    Decrement(DataWidth),
    Fixed,
}

impl AddressStep {
    fn encoding(self) -> u32 {
        match self {
            AddressStep::Increment(w) | AddressStep::Decrement(w) => w as u32,
            AddressStep::Fixed => 3,
        }
    }

    /// Offset from the user-supplied pointer to the last item's address.
    fn end_pointer(self, start: u32, len: u32) -> u32 {
        match self {
            AddressStep::Increment(w) => start.wrapping_add((len - 1) << w.shift()),
            AddressStep::Decrement(w) => start.wrapping_sub((len - 1) << w.shift()),
            AddressStep::Fixed => start,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Basic,
    Auto,
    PingPong,
    PeripheralScatterGather,
}

impl Mode {
    fn cycle(self) -> FieldValue<u32, CDC::Register> {
        match self {
            Mode::Basic => CDC::CYCLE_CTRL::Basic,
            Mode::Auto => CDC::CYCLE_CTRL::Auto,
            Mode::PingPong => CDC::CYCLE_CTRL::PingPong,
            Mode::PeripheralScatterGather => CDC::CYCLE_CTRL::PeripheralScatterGatherPrimary,
        }
    }
}

/// Which descriptor half a transfer is written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ccd {
    Primary,
    Alternate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DmaError {
    InvalidChannel(u32),
    InvalidLength(u32),
    /// Rearbitration interval above 2^10 transfers.
    InvalidArbitration(u8),
    InvalidState(u32),
}

impl fmt::Display for DmaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DmaError::InvalidChannel(c) => write!(f, "invalid DMA channel {}", c),
            DmaError::InvalidLength(l) => write!(
                f,
                "transfer length {} outside 1..={}",
                l, MAX_TRANSFER_LEN
            ),
            DmaError::InvalidArbitration(r) => {
                write!(f, "rearbitration power {} above 10", r)
            }
            DmaError::InvalidState(s) => write!(f, "unknown controller state {:#x}", s),
        }
    }
}

/// A single transfer to be encoded into a descriptor.
#[derive(Clone, Copy, Debug)]
pub struct Transfer {
    pub channel: u32,
    pub width: DataWidth,
    /// Number of items, 1 to [`MAX_TRANSFER_LEN`].
    pub len: u32,
    /// Buffer start for incrementing sources, buffer end for decrementing
    /// ones.
    pub src: u32,
    pub dst: u32,
    pub src_step: AddressStep,
    pub dst_step: AddressStep,
    /// Rearbitrate after `2^arbitration` items.
    pub arbitration: u8,
    pub mode: Mode,
}

impl Transfer {
    fn validate(&self) -> Result<(), DmaError> {
        if self.channel as usize >= NUM_CHANNELS {
            return Err(DmaError::InvalidChannel(self.channel));
        }
        if self.len == 0 || self.len > MAX_TRANSFER_LEN {
            return Err(DmaError::InvalidLength(self.len));
        }
        if self.arbitration > 10 {
            return Err(DmaError::InvalidArbitration(self.arbitration));
        }
        Ok(())
    }

    /// Bit for this transfer's channel in the `DMAENSET`-style registers.
    pub const fn channel_bit(&self) -> Result<u32, DmaError> {
        if self.channel as usize >= NUM_CHANNELS {
            return Err(DmaError::InvalidChannel(self.channel));
        }
        Ok(1 << self.channel)
    }
}

/// One entry of the descriptor table.
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelControl {
    pub src_end: u32,
    pub dst_end: u32,
    pub control: u32,
    _reserved: u32,
}

impl ChannelControl {
    pub const fn new() -> ChannelControl {
        ChannelControl {
            src_end: 0,
            dst_end: 0,
            control: 0,
            _reserved: 0,
        }
    }

    /// Encodes `transfer` the way the controller expects to find it.
    pub fn for_transfer(transfer: &Transfer) -> Result<ChannelControl, DmaError> {
        transfer.validate()?;

        let mut cdc = CdcVal::new(0);
        cdc.modify(
            CDC::DST_INC.val(transfer.dst_step.encoding())
                + CDC::SRC_INC.val(transfer.src_step.encoding())
                + CDC::SRC_SIZE.val(transfer.width as u32)
                + CDC::R_POWER.val(transfer.arbitration as u32)
                + CDC::N_MINUS_1.val(transfer.len - 1),
        );
        // DST_SIZE stays zero, the controller sizes both ends from SRC_SIZE.
        cdc.modify(transfer.mode.cycle());

        Ok(ChannelControl {
            src_end: transfer.src_step.end_pointer(transfer.src, transfer.len),
            dst_end: transfer.dst_step.end_pointer(transfer.dst, transfer.len),
            control: cdc.get(),
            _reserved: 0,
        })
    }

    /// Re-arms a descriptor with a new length and mode, keeping the pointers
    /// and the upper configuration bits.
    pub fn resubmit(&mut self, len: u32, mode: Mode) -> Result<(), DmaError> {
        if len == 0 || len > MAX_TRANSFER_LEN {
            return Err(DmaError::InvalidLength(len));
        }
        let mut cdc = CdcVal::new(self.control & 0xFFFF_C000);
        cdc.modify(CDC::N_MINUS_1.val(len - 1));
        cdc.modify(mode.cycle());
        self.control = cdc.get();
        Ok(())
    }

    /// Items still to be moved.
    ///
    /// The controller counts `N_MINUS_1` down past zero when it retires the
    /// last item, so a completed descriptor wraps to zero here.
    pub fn remaining(&self) -> u32 {
        (CdcVal::new(self.control).read(CDC::N_MINUS_1) + 1) & 0x3ff
    }
}

/// Primary and alternate descriptors for every channel.
#[repr(C, align(512))]
#[derive(Debug)]
pub struct DescriptorTable {
    pub primary: [ChannelControl; NUM_CHANNELS],
    pub alternate: [ChannelControl; NUM_CHANNELS],
}

impl DescriptorTable {
    pub const fn new() -> DescriptorTable {
        DescriptorTable {
            primary: [ChannelControl::new(); NUM_CHANNELS],
            alternate: [ChannelControl::new(); NUM_CHANNELS],
        }
    }

    pub fn get(&self, channel: u32, ccd: Ccd) -> Result<&ChannelControl, DmaError> {
        let table = match ccd {
            Ccd::Primary => &self.primary,
            Ccd::Alternate => &self.alternate,
        };
        table
            .get(channel as usize)
            .ok_or(DmaError::InvalidChannel(channel))
    }

    pub fn get_mut(&mut self, channel: u32, ccd: Ccd) -> Result<&mut ChannelControl, DmaError> {
        let table = match ccd {
            Ccd::Primary => &mut self.primary,
            Ccd::Alternate => &mut self.alternate,
        };
        table
            .get_mut(channel as usize)
            .ok_or(DmaError::InvalidChannel(channel))
    }

    /// Writes `transfer` into the selected descriptor.
    pub fn submit(&mut self, transfer: &Transfer, ccd: Ccd) -> Result<(), DmaError> {
        let entry = ChannelControl::for_transfer(transfer)?;
        *self.get_mut(transfer.channel, ccd)? = entry;
        Ok(())
    }
}

impl Default for DescriptorTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller state machine, as reported in `DMASTA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    ReadChannelData,
    ReadSrcEndPointer,
    ReadDstEndPointer,
    ReadSrcData,
    WriteDstData,
    WaitRequestClear,
    WriteChannelData,
    Stalled,
    Done,
    ScatterGatherTransition,
}

impl ControllerState {
    pub fn from_status(dmasta: u32) -> Result<ControllerState, DmaError> {
        let state = dmasta & BITM_DMA_DMASTA_STATE;
        Ok(match state {
            ENUM_DMA_DMASTA_STATE_IDLE => ControllerState::Idle,
            ENUM_DMA_DMASTA_STATE_RDCHNLDATA => ControllerState::ReadChannelData,
            ENUM_DMA_DMASTA_STATE_RDSRCENDPTR => ControllerState::ReadSrcEndPointer,
            ENUM_DMA_DMASTA_STATE_RDDSTENDPTR => ControllerState::ReadDstEndPointer,
            ENUM_DMA_DMASTA_STATE_RDSRCDATA => ControllerState::ReadSrcData,
            ENUM_DMA_DMASTA_STATE_WRDSTDATA => ControllerState::WriteDstData,
            ENUM_DMA_DMASTA_STATE_WAITDMAREQCLR => ControllerState::WaitRequestClear,
            ENUM_DMA_DMASTA_STATE_WRCHNLDATA => ControllerState::WriteChannelData,
            ENUM_DMA_DMASTA_STATE_STALLED => ControllerState::Stalled,
            ENUM_DMA_DMASTA_STATE_DONE => ControllerState::Done,
            ENUM_DMA_DMASTA_STATE_SCATRGATHR => ControllerState::ScatterGatherTransition,
            _ => return Err(DmaError::InvalidState(state)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem;

    fn uart_tx(len: u32) -> Transfer {
        Transfer {
            channel: UART_TX_CHAN,
            width: DataWidth::Byte,
            len,
            src: 0x2000_0100,
            dst: REG_UART_COMTX,
            src_step: AddressStep::Increment(DataWidth::Byte),
            dst_step: AddressStep::Fixed,
            arbitration: 0,
            mode: Mode::Basic,
        }
    }

    #[test]
    fn table_layout() {
        assert_eq!(mem::size_of::<ChannelControl>(), 16);
        assert_eq!(mem::size_of::<DescriptorTable>(), 512);
        assert_eq!(mem::align_of::<DescriptorTable>(), DESCRIPTOR_TABLE_ALIGN);
    }

    #[test]
    fn basic_transfer_encoding() {
        let ccd = ChannelControl::for_transfer(&uart_tx(8)).unwrap();
        assert_eq!(ccd.src_end, 0x2000_0107);
        assert_eq!(ccd.dst_end, REG_UART_COMTX);
        // DST_INC none, SRC_INC byte, SRC_SIZE byte, N-1 = 7, basic mode.
        assert_eq!(ccd.control, 0xC000_0000 | (7 << 4) | 1);
        assert_eq!(ccd.remaining(), 8);
    }

    #[test]
    fn decrementing_word_source() {
        let mut t = uart_tx(4);
        t.width = DataWidth::Word;
        t.src_step = AddressStep::Decrement(DataWidth::Word);
        let ccd = ChannelControl::for_transfer(&t).unwrap();
        assert_eq!(ccd.src_end, 0x2000_0100 - 12);
        let cdc = CdcVal::new(ccd.control);
        assert_eq!(cdc.read(CDC::SRC_INC), 2);
        assert_eq!(cdc.read(CDC::SRC_SIZE), 2);
    }

    #[test]
    fn length_limits() {
        assert_eq!(
            ChannelControl::for_transfer(&uart_tx(0)),
            Err(DmaError::InvalidLength(0))
        );
        assert_eq!(
            ChannelControl::for_transfer(&uart_tx(MAX_TRANSFER_LEN + 1)),
            Err(DmaError::InvalidLength(MAX_TRANSFER_LEN + 1))
        );
        let ccd = ChannelControl::for_transfer(&uart_tx(MAX_TRANSFER_LEN)).unwrap();
        assert_eq!(CdcVal::new(ccd.control).read(CDC::N_MINUS_1), 0x3ff);
    }

    #[test]
    fn completed_descriptor_has_nothing_left() {
        let mut ccd = ChannelControl::for_transfer(&uart_tx(8)).unwrap();
        ccd.control = (ccd.control & 0xFFFF_C000) | (0x3ff << 4);
        assert_eq!(ccd.remaining(), 0);
    }

    #[test]
    fn bad_channel_and_arbitration() {
        let mut t = uart_tx(1);
        t.channel = 16;
        assert_eq!(
            ChannelControl::for_transfer(&t),
            Err(DmaError::InvalidChannel(16))
        );
        assert_eq!(t.channel_bit(), Err(DmaError::InvalidChannel(16)));
        t.channel = 32;
        assert_eq!(t.channel_bit(), Err(DmaError::InvalidChannel(32)));
        t.channel = I2S_CHAN;
        assert_eq!(t.channel_bit(), Ok(1 << 15));
        t.arbitration = 11;
        assert_eq!(
            ChannelControl::for_transfer(&t),
            Err(DmaError::InvalidArbitration(11))
        );
    }

    #[test]
    fn resubmit_keeps_pointers() {
        let mut t = uart_tx(16);
        t.arbitration = 3;
        let mut ccd = ChannelControl::for_transfer(&t).unwrap();
        let upper = ccd.control & 0xFFFF_C000;
        ccd.resubmit(2, Mode::PingPong).unwrap();
        assert_eq!(ccd.control & 0xFFFF_C000, upper);
        assert_eq!(ccd.remaining(), 2);
        assert_eq!(ccd.src_end, 0x2000_010F);
    }

    #[test]
    fn table_submit() {
        let mut table = DescriptorTable::new();
        table.submit(&uart_tx(3), Ccd::Alternate).unwrap();
        assert_eq!(table.get(UART_TX_CHAN, Ccd::Alternate).unwrap().remaining(), 3);
        assert_eq!(table.get(UART_TX_CHAN, Ccd::Primary).unwrap().control, 0);
        assert!(table.get(NUM_CHANNELS as u32, Ccd::Primary).is_err());
    }

    #[test]
    fn controller_state() {
        assert_eq!(
            ControllerState::from_status(BITM_DMA_DMASTA_ENABLE | ENUM_DMA_DMASTA_STATE_DONE),
            Ok(ControllerState::Done)
        );
        assert_eq!(
            ControllerState::from_status(0xF0),
            Err(DmaError::InvalidState(0xF0))
        );
    }
}
