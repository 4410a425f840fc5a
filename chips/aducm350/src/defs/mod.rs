// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Register address, bit position, bit mask and enumeration constants.
//!
//! Every peripheral module follows the same naming scheme:
//!
//! - `REG_<INSTANCE>_<REGISTER>`: absolute byte address of a register.
//! - `BITP_<TYPE>_<REGISTER>_<FIELD>`: position of a field's least
//!   significant bit.
//! - `BITM_<TYPE>_<REGISTER>_<FIELD>`: in-place mask of a field, typed with
//!   the width of the register it belongs to.
//! - `ENUM_<TYPE>_<REGISTER>_<NAME>`: a named field value, already shifted
//!   into position.
//!
//! All modules are re-exported flat, so `use aducm350::defs::*` brings the
//! whole map into scope.

pub mod afe;
pub mod beep;
pub mod busm;
pub mod crc;
pub mod ct;
pub mod dma;
pub mod fee;
pub mod gpf;
pub mod gpio;
pub mod gpt;
pub mod i2c;
pub mod i2s;
pub mod lcd;
pub mod nvic;
pub mod pdi;
pub mod pwr;
pub mod rng;
pub mod rtc;
pub mod spi;
pub mod sysclk;
pub mod uart;
pub mod usb;
pub mod wdt;
pub mod wut;

pub use self::afe::*;
pub use self::beep::*;
pub use self::busm::*;
pub use self::crc::*;
pub use self::ct::*;
pub use self::dma::*;
pub use self::fee::*;
pub use self::gpf::*;
pub use self::gpio::*;
pub use self::gpt::*;
pub use self::i2c::*;
pub use self::i2s::*;
pub use self::lcd::*;
pub use self::nvic::*;
pub use self::pdi::*;
pub use self::pwr::*;
pub use self::rng::*;
pub use self::rtc::*;
pub use self::spi::*;
pub use self::sysclk::*;
pub use self::uart::*;
pub use self::usb::*;
pub use self::wdt::*;
pub use self::wut::*;
