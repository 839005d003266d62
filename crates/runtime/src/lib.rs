//! Host-facing wiring of the totem engine.
//!
//! This crate owns everything that outlives a single evaluation: the live
//! settings with their change observers, the published scan sphere, the
//! switch timer and the switch-back memory. Hosts create one
//! [`OffhandModule`] and call
//! [`on_inventory_opportunity`](OffhandModule::on_inventory_opportunity)
//! whenever their inventory subsystem accepts requests.
//!
//! Modules are organized by responsibility:
//! - [`module`] runs the per-opportunity evaluation
//! - [`settings`] stores settings and notifies observers of changes
//! - [`requests`] records scheduler requests for simulation and tests
pub mod error;
pub mod module;
pub mod requests;
pub mod settings;

pub use error::{Result, RuntimeError};
pub use module::{OffhandModule, Opportunity, OpportunityReport, PolicyKind, SwitchBack};
pub use requests::{InventoryRequest, InventoryRequests};
pub use settings::{SettingChange, Settings, SettingsObserver, SettingsStore, SphereRecompute};
