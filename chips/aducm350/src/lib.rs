// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Register map and chip support definitions for the ADuCM350.
//!
//! - [`defs`] holds the flat `REG_*`, `BITP_*`, `BITM_*` and `ENUM_*`
//!   constants, typed with each register's natural width.
//! - [`registers`] holds the same map as `tock-registers` structures and
//!   bitfields, with a `StaticRef` base for every peripheral instance.
//! - [`memory_map`] can look registers and fields up at runtime.

#![no_std]
#![crate_name = "aducm350"]
#![crate_type = "rlib"]
// `registers/nvic_regs` and `registers/ct_regs` have many register definitions
// in `register_structs()!` and require a deeper recursion limit than the
// default to fully expand.
#![recursion_limit = "256"]

pub mod chip_config;
pub mod static_ref;

pub mod bitband;
pub mod clocks;
pub mod defs;
pub mod dma;
pub mod interrupts;
pub mod memory_map;
pub mod registers;
