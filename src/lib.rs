//! TalkPrep - Usage Entitlement and Metering Core
//!
//! Decides, for a given principal, whether a metered action (creating a
//! tutor, starting an interview, starting a story session) is currently
//! permitted, given a subscription tier, an optional 7-day trial window,
//! and a ledger of earned interview credits.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
