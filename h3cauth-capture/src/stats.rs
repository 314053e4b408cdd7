//! Capture statistics

use std::fmt;
use std::time::Duration;

/// Frame counters of one transport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureStats {
    /// Frames handed to the caller
    pub frames_received: u64,
    /// Frames written to the wire
    pub frames_sent: u64,
    /// Frames the kernel dropped, as reported by pcap
    pub frames_dropped: u64,
    /// Time since the transport was opened
    pub duration: Duration,
}

impl CaptureStats {
    /// Merge the kernel counters reported by pcap
    pub fn with_pcap_stats(mut self, stats: pcap::Stat) -> Self {
        self.frames_dropped = u64::from(stats.dropped) + u64::from(stats.if_dropped);
        self
    }
}

impl fmt::Display for CaptureStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "received {} frames, sent {}, dropped {} in {:.2}s",
            self.frames_received,
            self.frames_sent,
            self.frames_dropped,
            self.duration.as_secs_f64()
        )
    }
}
