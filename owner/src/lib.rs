#![no_std]

pub mod owner;
