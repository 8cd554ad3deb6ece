//! Unified control of power distribution unit (PDU) outlets.
//!
//! One `Outlet` controls exactly one AC socket through one of several
//! hardware backends: a no-op placeholder, a file-backed test double, the
//! legacy shell-script controller, an Aviosys 8800 Pro USB relay, Rittal
//! and ATEN SNMP rack PDUs, or a TP-Link Kasa smart plug. Backends are
//! selected by URI ([`uri::uri_to_outlet`]) or from configuration
//! ([`config::config_to_outlet`]) and then drive the outlet through the
//! uniform [`outlet::Outlet`] `get`/`set` contract.
//!
//! Everything is synchronous and stateless: each call performs one
//! external round trip (file I/O, subprocess, SNMP exchange or serial
//! exchange) and nothing is cached between calls.

pub mod aten;
pub mod aviosys;
pub mod config;
pub mod error;
pub mod file;
pub mod kasa;
pub mod noop;
pub mod outlet;
pub mod rittal;
pub mod serial;
pub mod shell;
pub mod snmp;
pub mod uri;

pub use config::{Config, config_to_outlet, config_to_outlet_spec};
pub use error::{Error, ExitCode};
pub use outlet::Outlet;
pub use uri::{OutletSpec, parse_uri, uri_to_outlet};
