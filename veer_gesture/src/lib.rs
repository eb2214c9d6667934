// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Veer Gesture: pan-gesture session primitives for remote touchpads.
//!
//! A remote touchpad delivers a pan as a stream of positional deltas with no
//! meaningful absolute coordinates. The [`pan`] module turns that stream into
//! a small number of discrete events — threshold-gated direction commits for
//! focus movement, and raw angle samples for items that have claimed the
//! stream — while the caller decides what each event means.
//!
//! This crate is `no_std`.

#![no_std]

pub mod pan;
