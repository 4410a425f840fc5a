// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Runtime view of the register map.
//!
//! The constants in [`crate::defs`] are the source of truth; the tables here
//! refer to them by name so that a register, its fields and their named
//! values can be looked up by address or by name. A panic handler or a
//! debug console can then print `GPT0_GPTCON = 0x0011 { PRE: PRE_DIV16, ..,
//! ENABLE: 0x1, .. }` instead of a bare number.
//!
//! Registers are grouped by the peripheral *type* they belong to, so all
//! three timers share the `GPT_GPTCON` field layout.

use core::fmt;

mod tables;

use self::tables::{ENUMS, FIELDS, PERIPHERALS, REGISTERS};

/// Natural access width of a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    Byte,
    HalfWord,
    Word,
}

impl Width {
    pub const fn bytes(self) -> u32 {
        match self {
            Width::Byte => 1,
            Width::HalfWord => 2,
            Width::Word => 4,
        }
    }

    pub const fn bits(self) -> u32 {
        self.bytes() * 8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl Access {
    pub const fn readable(self) -> bool {
        !matches!(self, Access::WriteOnly)
    }

    pub const fn writable(self) -> bool {
        !matches!(self, Access::ReadOnly)
    }
}

/// One instance of a peripheral block.
#[derive(Debug, PartialEq, Eq)]
pub struct Peripheral {
    pub name: &'static str,
    pub base: u32,
    /// Bytes of address space decoded by the block.
    pub size: u32,
}

impl Peripheral {
    pub const fn contains(&self, addr: u32) -> bool {
        addr >= self.base && addr - self.base < self.size
    }

    pub fn registers(&self) -> impl Iterator<Item = &'static Register> + '_ {
        REGISTERS.iter().filter(move |r| self.contains(r.address))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Register {
    /// Instance-qualified name, `GPT0_GPTCON`.
    pub name: &'static str,
    pub address: u32,
    pub width: Width,
    pub access: Access,
    /// Type-qualified name shared by every instance, `GPT_GPTCON`.
    pub group: &'static str,
}

impl Register {
    pub fn fields(&self) -> impl Iterator<Item = &'static Field> {
        fields_of(self.group)
    }

    pub fn peripheral(&self) -> Option<&'static Peripheral> {
        peripheral_for(self.address)
    }

    /// Pairs `value` with this register for display.
    pub fn decode(&'static self, value: u32) -> Decoded {
        Decoded {
            register: self,
            value,
        }
    }
}

/// A bitfield within a register group.
#[derive(Debug, PartialEq, Eq)]
pub struct Field {
    pub group: &'static str,
    pub name: &'static str,
    pub position: u32,
    /// In-place mask, widened to 32 bits.
    pub mask: u32,
    pub width: Width,
}

impl Field {
    pub const fn bits(&self) -> u32 {
        self.mask.count_ones()
    }

    pub const fn extract(&self, value: u32) -> u32 {
        (value & self.mask) >> self.position
    }

    /// Replaces this field in `reg` with `value`, which is not shifted.
    pub const fn insert(&self, reg: u32, value: u32) -> u32 {
        (reg & !self.mask) | ((value << self.position) & self.mask)
    }

    pub fn values(&self) -> impl Iterator<Item = &'static EnumValue> + '_ {
        ENUMS
            .iter()
            .filter(move |e| e.group == self.group && e.field == self.name)
    }

    /// Named value for the current contents of this field in `reg`.
    pub fn value_name(&self, reg: u32) -> Option<&'static str> {
        let current = reg & self.mask;
        self.values().find(|e| e.value == current).map(|e| e.name)
    }
}

/// A named field value, shifted into position.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumValue {
    pub group: &'static str,
    pub field: &'static str,
    pub name: &'static str,
    pub value: u32,
}

pub fn peripherals() -> &'static [Peripheral] {
    &PERIPHERALS
}

pub fn registers() -> &'static [Register] {
    &REGISTERS
}

pub fn peripheral_for(addr: u32) -> Option<&'static Peripheral> {
    PERIPHERALS.iter().find(|p| p.contains(addr))
}

/// Every register at `addr`. Some locations have more than one name, such
/// as the UART receive and transmit buffers or the USB host and peripheral
/// views of an endpoint's control register.
pub fn find_by_address(addr: u32) -> impl Iterator<Item = &'static Register> {
    REGISTERS.iter().filter(move |r| r.address == addr)
}

/// Looks up a register by its instance-qualified name, with or without the
/// `REG_` prefix.
pub fn find_by_name(name: &str) -> Option<&'static Register> {
    let name = name.strip_prefix("REG_").unwrap_or(name);
    REGISTERS.iter().find(|r| r.name == name)
}

pub fn fields_of(group: &str) -> impl Iterator<Item = &'static Field> + '_ {
    FIELDS.iter().filter(move |f| f.group == group)
}

/// A register value formatted field by field.
pub struct Decoded {
    register: &'static Register,
    value: u32,
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = (self.register.width.bytes() * 2) as usize;
        write!(
            f,
            "{} = {:#0w$x}",
            self.register.name,
            self.value,
            w = digits + 2
        )?;
        let mut fields = self.register.fields().peekable();
        if fields.peek().is_none() {
            return Ok(());
        }
        f.write_str(" {")?;
        for (i, field) in fields.enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match field.value_name(self.value) {
                Some(name) => write!(f, " {}: {}", field.name, name)?,
                None => write!(f, " {}: {:#x}", field.name, field.extract(self.value))?,
            }
        }
        f.write_str(" }")
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} @ {:#010x} ({}-bit, {:?})",
            self.name,
            self.address,
            self.width.bits(),
            self.access
        )
    }
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{:#010x}..{:#010x})",
            self.name,
            self.base,
            self.base + self.size
        )
    }
}
