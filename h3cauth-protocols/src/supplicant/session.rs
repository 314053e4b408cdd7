//! Per-attempt authentication state

use std::fmt;

use h3cauth_core::MacAddr;

/// Why the server turned the supplicant away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Text the server attached to an H3C MD5-failure
    Server(String),
    /// Failure without a readable reason
    Unspecified,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Server(text) => write!(f, "{}", text),
            FailureReason::Unspecified => write!(f, "authentication failed without a reason"),
        }
    }
}

/// Outcome of processing one EAP message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing was sent
    NoAction,
    /// A response frame went out
    ResponseSent,
    /// The server accepted the supplicant (terminal)
    Authenticated,
    /// The server rejected the supplicant (terminal)
    Rejected(FailureReason),
}

impl Verdict {
    /// Whether the session is over after this verdict
    pub fn is_terminal(&self) -> bool {
        matches!(self, Verdict::Authenticated | Verdict::Rejected(_))
    }
}

/// Where the negotiation stands.
///
/// Only the states after the first EAP frame carry the authenticator's
/// address, so the peer can be latched exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No EAP frame seen yet
    AwaitingPeer,
    /// Handshake in progress with `peer`
    Negotiating { peer: MacAddr },
    /// Server sent EAP-Success
    Authenticated { peer: MacAddr },
    /// Server sent EAP-Failure
    Rejected { peer: MacAddr, reason: FailureReason },
    /// Challenge computation or transport failed
    Aborted {
        peer: Option<MacAddr>,
        reason: String,
    },
}

/// Mutable record of one authentication attempt
#[derive(Clone)]
pub struct AuthSession {
    state: SessionState,
    local_address: MacAddr,
    challenge_buffer: Option<Vec<u8>>,
    username: String,
    password: String,
}

impl AuthSession {
    /// Start a session for the interface with address `local_address`
    pub fn new(
        local_address: MacAddr,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            state: SessionState::AwaitingPeer,
            local_address,
            challenge_buffer: None,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Authenticator address, once latched
    pub fn target_address(&self) -> Option<MacAddr> {
        match &self.state {
            SessionState::AwaitingPeer => None,
            SessionState::Negotiating { peer }
            | SessionState::Authenticated { peer }
            | SessionState::Rejected { peer, .. } => Some(*peer),
            SessionState::Aborted { peer, .. } => *peer,
        }
    }

    /// Address of the local interface
    pub fn local_address(&self) -> MacAddr {
        self.local_address
    }

    /// Result of the latest H3C integrity challenge
    pub fn challenge_buffer(&self) -> Option<&[u8]> {
        self.challenge_buffer.as_deref()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether no further frame may change this session
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            SessionState::Authenticated { .. }
                | SessionState::Rejected { .. }
                | SessionState::Aborted { .. }
        )
    }

    /// Verdict of a session that ended on a protocol decision
    pub fn verdict(&self) -> Option<Verdict> {
        match &self.state {
            SessionState::Authenticated { .. } => Some(Verdict::Authenticated),
            SessionState::Rejected { reason, .. } => Some(Verdict::Rejected(reason.clone())),
            _ => None,
        }
    }

    /// Record the authenticator. Has no effect once a peer is known.
    pub(crate) fn latch_peer(&mut self, peer: MacAddr) -> bool {
        if self.state != SessionState::AwaitingPeer {
            return false;
        }
        self.state = SessionState::Negotiating { peer };
        true
    }

    pub(crate) fn set_challenge_buffer(&mut self, buffer: Vec<u8>) {
        self.challenge_buffer = Some(buffer);
    }

    pub(crate) fn authenticate(&mut self) {
        if let SessionState::Negotiating { peer } = self.state {
            self.state = SessionState::Authenticated { peer };
        }
    }

    pub(crate) fn reject(&mut self, reason: FailureReason) {
        if let SessionState::Negotiating { peer } = self.state {
            self.state = SessionState::Rejected { peer, reason };
        }
    }

    pub(crate) fn abort(&mut self, reason: String) {
        if !self.is_terminal() {
            let peer = self.target_address();
            self.state = SessionState::Aborted { peer, reason };
        }
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("state", &self.state)
            .field("local_address", &self.local_address)
            .field("challenge_buffer", &self.challenge_buffer)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCAL: MacAddr = MacAddr([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
    const PEER: MacAddr = MacAddr([0x00, 0x0F, 0xE2, 0x11, 0x22, 0x33]);
    const OTHER: MacAddr = MacAddr([0x00, 0x0F, 0xE2, 0x44, 0x55, 0x66]);

    #[test]
    fn test_new_session_awaits_peer() {
        let session = AuthSession::new(LOCAL, "alice", "secret");
        assert_eq!(session.state(), &SessionState::AwaitingPeer);
        assert_eq!(session.target_address(), None);
        assert_eq!(session.challenge_buffer(), None);
        assert!(!session.is_terminal());
    }

    #[test]
    fn test_peer_latches_once() {
        let mut session = AuthSession::new(LOCAL, "alice", "secret");
        assert!(session.latch_peer(PEER));
        assert!(!session.latch_peer(OTHER));
        assert_eq!(session.target_address(), Some(PEER));
    }

    #[test]
    fn test_terminal_states_are_sticky() {
        let mut session = AuthSession::new(LOCAL, "alice", "secret");
        session.latch_peer(PEER);
        session.authenticate();
        session.reject(FailureReason::Unspecified);
        session.abort("late".into());

        assert_eq!(session.state(), &SessionState::Authenticated { peer: PEER });
        assert_eq!(session.verdict(), Some(Verdict::Authenticated));
    }

    #[test]
    fn test_abort_keeps_peer() {
        let mut session = AuthSession::new(LOCAL, "alice", "secret");
        session.latch_peer(PEER);
        session.abort("send failed".into());

        assert!(session.is_terminal());
        assert_eq!(session.target_address(), Some(PEER));
        assert_eq!(session.verdict(), None);
    }

    #[test]
    fn test_debug_redacts_password() {
        let session = AuthSession::new(LOCAL, "alice", "hunter2");
        let rendered = format!("{:?}", session);
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_failure_reason_display() {
        assert_eq!(FailureReason::Server("bad password".into()).to_string(), "bad password");
        assert!(!FailureReason::Unspecified.to_string().is_empty());
    }
}
