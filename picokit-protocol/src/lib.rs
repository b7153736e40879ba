//! LiDAR Serial Protocol
//!
//! This crate defines the wire format emitted by single-point LiDAR
//! modules (TF-Luna / TFmini family) over UART. The module streams a
//! fixed-length frame per measurement with no request/response.
//!
//! # Frame Overview
//!
//! ```text
//! ┌───────────┬──────────┬──────────┬──────────┬──────────┐
//! │ HEADER    │ DISTANCE │ STRENGTH │ RESERVED │ CHECKSUM │
//! │ 0x59 0x59 │ u16 LE   │ u16 LE   │ 2B       │ 1B       │
//! └───────────┴──────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! The checksum is the low byte of the sum of the eight preceding bytes.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;

pub use frame::{checksum, FrameError, LidarFrame, FRAME_HEADER, FRAME_LEN};
