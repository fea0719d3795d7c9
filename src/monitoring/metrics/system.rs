//! Host resource sampling
//!
//! The engine only needs memory and CPU figures for snapshots and health
//! classification, so the source is a small trait. With the `metrics`
//! feature the real values come from the sysinfo crate.

use crate::monitoring::types::MemoryUsage;
use std::sync::Arc;

#[cfg(feature = "metrics")]
use once_cell::sync::Lazy;
#[cfg(feature = "metrics")]
use sysinfo::System;

/// Source of memory and CPU usage figures
pub trait ResourceProbe: Send + Sync + std::fmt::Debug {
    /// Current memory usage
    fn memory_usage(&self) -> MemoryUsage;

    /// Current CPU usage percentage
    fn cpu_usage(&self) -> f64;
}

/// Probe returning fixed values
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    pub memory: MemoryUsage,
    pub cpu_usage: f64,
}

impl StaticProbe {
    pub fn new(memory: MemoryUsage, cpu_usage: f64) -> Self {
        Self { memory, cpu_usage }
    }
}

impl ResourceProbe for StaticProbe {
    fn memory_usage(&self) -> MemoryUsage {
        self.memory.clone()
    }

    fn cpu_usage(&self) -> f64 {
        self.cpu_usage
    }
}

#[cfg(feature = "metrics")]
static SYSTEM: Lazy<parking_lot::Mutex<System>> =
    Lazy::new(|| parking_lot::Mutex::new(System::new()));

/// Probe backed by the sysinfo crate
#[cfg(feature = "metrics")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoProbe;

#[cfg(feature = "metrics")]
impl ResourceProbe for SysinfoProbe {
    fn memory_usage(&self) -> MemoryUsage {
        let mut sys = SYSTEM.lock();
        sys.refresh_memory();
        MemoryUsage::new(sys.used_memory(), sys.total_memory())
    }

    fn cpu_usage(&self) -> f64 {
        let mut sys = SYSTEM.lock();
        sys.refresh_cpu_usage();
        sys.global_cpu_usage() as f64
    }
}

/// Probe used when the caller does not supply one
#[cfg(feature = "metrics")]
pub fn default_probe() -> Arc<dyn ResourceProbe> {
    Arc::new(SysinfoProbe)
}

#[cfg(not(feature = "metrics"))]
pub fn default_probe() -> Arc<dyn ResourceProbe> {
    Arc::new(StaticProbe::default())
}
