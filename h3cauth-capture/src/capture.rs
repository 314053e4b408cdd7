//! pcap-backed 802.1X transport

use std::time::{Instant, SystemTime};

use h3cauth_core::{Error, MacAddr, Packet, Result, Transport};
use pcap::{Active, Capture, Device};
use tracing::{debug, info, warn};

use crate::filters::initial_filter;
use crate::interface::{get_interface, InterfaceInfo};
use crate::stats::CaptureStats;

/// Default snapshot length (maximum bytes per packet)
const DEFAULT_SNAPLEN: i32 = 65535;

/// Default timeout for packet capture (milliseconds)
const DEFAULT_TIMEOUT_MS: i32 = 1000;

/// Configuration for packet capture
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Maximum bytes to capture per packet
    pub snaplen: i32,
    /// Read timeout in milliseconds; bounds how long a stop request waits
    pub timeout_ms: i32,
    /// Enable promiscuous mode
    pub promiscuous: bool,
    /// Enable immediate mode (deliver packets immediately)
    pub immediate_mode: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            snaplen: DEFAULT_SNAPLEN,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            promiscuous: true,
            immediate_mode: true,
        }
    }
}

/// Live capture handle that sends and receives EAPOL frames on one interface
pub struct PcapTransport {
    interface: InterfaceInfo,
    local: MacAddr,
    capture: Capture<Active>,
    filter: String,
    peer: Option<MacAddr>,
    stats: CaptureStats,
    opened: Instant,
}

impl PcapTransport {
    /// Open `interface` with the default configuration
    pub fn open(interface: &str) -> Result<Self> {
        Self::with_config(interface, CaptureConfig::default())
    }

    /// Open `interface` and install the initial EAPOL filter
    pub fn with_config(interface: &str, config: CaptureConfig) -> Result<Self> {
        let info = get_interface(interface)?;
        if !info.is_capture_capable() {
            return Err(Error::Capture(format!(
                "Interface '{}' is down or loopback",
                interface
            )));
        }
        let local = info.hardware_address()?;

        debug!("Initializing pcap capture on {} ({:?})", interface, config);

        let device = Device::from(interface);
        let mut capture = Capture::from_device(device)
            .map_err(|e| Error::Capture(format!("Failed to create capture: {}", e)))?
            .promisc(config.promiscuous)
            .snaplen(config.snaplen)
            .timeout(config.timeout_ms)
            .immediate_mode(config.immediate_mode)
            .open()
            .map_err(|e| Error::Capture(format!("Failed to open capture: {}", e)))?;

        let filter = initial_filter(local);
        capture
            .filter(&filter, true)
            .map_err(|e| Error::Capture(format!("Failed to apply filter: {}", e)))?;

        info!("Capture opened on {} ({}) with filter: {}", interface, local, filter);

        Ok(Self {
            interface: info,
            local,
            capture,
            filter,
            peer: None,
            stats: CaptureStats::default(),
            opened: Instant::now(),
        })
    }

    /// Get interface information
    pub fn interface_info(&self) -> &InterfaceInfo {
        &self.interface
    }

    /// BPF filter currently installed
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Wait for the next frame.
    ///
    /// Returns `Ok(None)` when the read timeout expires without a frame.
    pub fn next_packet(&mut self) -> Result<Option<Packet>> {
        match self.capture.next_packet() {
            Ok(packet) => {
                self.stats.frames_received += 1;
                Ok(Some(Packet {
                    timestamp: SystemTime::now(),
                    interface: self.interface.name.clone(),
                    data: packet.data.to_vec(),
                    len: packet.header.len as usize,
                }))
            }
            Err(pcap::Error::TimeoutExpired) => Ok(None),
            Err(e) => Err(Error::Capture(format!("Packet capture error: {}", e))),
        }
    }

    /// Counters since the transport was opened
    pub fn stats(&mut self) -> CaptureStats {
        let stats = CaptureStats {
            duration: self.opened.elapsed(),
            ..self.stats.clone()
        };

        match self.capture.stats() {
            Ok(pcap_stats) => stats.with_pcap_stats(pcap_stats),
            Err(e) => {
                warn!("Failed to get pcap stats: {}", e);
                stats
            }
        }
    }
}

impl Transport for PcapTransport {
    fn send(&mut self, frame: &[u8]) -> Result<()> {
        self.capture
            .sendpacket(frame)
            .map_err(|e| Error::transport(format!("Failed to send frame: {}", e)))?;
        self.stats.frames_sent += 1;
        debug!("Sent {} byte frame on {}", frame.len(), self.interface.name);
        Ok(())
    }

    fn restrict_capture_to(&mut self, peer: MacAddr, filter: &str) -> Result<()> {
        self.capture
            .filter(filter, true)
            .map_err(|e| Error::transport(format!("Failed to apply filter: {}", e)))?;
        self.filter = filter.to_string();
        info!("Capture restricted to {} with filter: {}", peer, filter);
        Ok(())
    }

    fn local_address(&self) -> MacAddr {
        self.local
    }

    fn current_peer(&self) -> Option<MacAddr> {
        self.peer
    }

    fn set_peer(&mut self, peer: MacAddr) {
        self.peer = Some(peer);
    }
}
