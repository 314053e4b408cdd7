//! Network interface lookup

use h3cauth_core::{Error, MacAddr, Result};
use pnet_datalink::{self, NetworkInterface};

/// Information about a network interface
#[derive(Debug, Clone)]
pub struct InterfaceInfo {
    /// Interface name (e.g., "eth0", "enp3s0")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Hardware address if the interface has one
    pub mac: Option<MacAddr>,
    /// Whether the interface is up
    pub is_up: bool,
    /// Whether the interface is a loopback
    pub is_loopback: bool,
}

impl From<&NetworkInterface> for InterfaceInfo {
    fn from(iface: &NetworkInterface) -> Self {
        let mac = iface
            .mac
            .map(|mac| MacAddr::new([mac.0, mac.1, mac.2, mac.3, mac.4, mac.5]));

        InterfaceInfo {
            name: iface.name.clone(),
            description: iface.description.clone(),
            mac,
            is_up: iface.is_up(),
            is_loopback: iface.is_loopback(),
        }
    }
}

impl InterfaceInfo {
    /// Whether 802.1X frames can be exchanged on this interface
    pub fn is_capture_capable(&self) -> bool {
        self.is_up && !self.is_loopback
    }

    /// Hardware address, or an error naming the interface
    pub fn hardware_address(&self) -> Result<MacAddr> {
        match self.mac {
            Some(mac) if mac != MacAddr::zero() => Ok(mac),
            _ => Err(Error::Capture(format!(
                "Interface '{}' has no hardware address",
                self.name
            ))),
        }
    }
}

/// Get information about a specific interface by name
pub fn get_interface(name: &str) -> Result<InterfaceInfo> {
    let interfaces = pnet_datalink::interfaces();

    interfaces
        .iter()
        .find(|iface| iface.name == name)
        .map(InterfaceInfo::from)
        .ok_or_else(|| Error::InterfaceNotFound(name.to_string()))
}
