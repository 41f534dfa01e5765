//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in echometer-core:
//!
//! - HC-SR04 pulse timing and median-filtered batch sampling
//! - Proximity monitoring over any distance sensor

#![no_std]
#![deny(unsafe_code)]

pub mod sonar;
