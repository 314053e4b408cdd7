//! Authentication state machine
//!
//! Processes one EAP message at a time against an [`AuthSession`] owned by
//! the caller. The first EAP frame latches the authenticator and is always
//! answered with an Identity response; after that the code and the type of
//! each message are dispatched independently and their verdicts combined.

use h3cauth_core::{Error, MacAddr, Result, Transport};
use tracing::{debug, error, info, warn};

use super::credentials::{CredentialProvider, Md5Request};
use super::decoder::decode_frame;
use super::response::{build_response, eap_frame, eapol_frame, ResponseKind};
use super::session::{AuthSession, FailureReason, SessionState, Verdict};
use crate::dot1x::constants::{DOT1X_ETHERTYPE, DOT1X_PAE_MULTICAST};
use crate::dot1x::{EapCode, EapMessage, EapType, EapolPacket};
use crate::h3c::{decode_failure_message, IntegrityChallenge};

/// Capture filter admitting only EAPOL frames from `peer`
pub fn peer_filter(peer: MacAddr) -> String {
    format!("ether src {} and ether proto 0x{:04x}", peer, DOT1X_ETHERTYPE)
}

/// Drives an [`AuthSession`] over a transport with a credential provider
pub struct Supplicant<T, C> {
    transport: T,
    credentials: C,
}

impl<T: Transport, C: CredentialProvider> Supplicant<T, C> {
    pub fn new(transport: T, credentials: C) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    pub fn into_parts(self) -> (T, C) {
        (self.transport, self.credentials)
    }

    /// Solicit an identity request by sending EAPOL-Start to the PAE group
    pub fn start(&mut self, session: &AuthSession) -> Result<()> {
        let frame = eapol_frame(
            session.local_address(),
            DOT1X_PAE_MULTICAST,
            &EapolPacket::start(),
        );
        self.transport.send(&frame)?;
        info!("Sent EAPOL-Start from {}", session.local_address());
        Ok(())
    }

    /// Send EAPOL-Logoff to the authenticator, or the PAE group if none is known
    pub fn logoff(&mut self, session: &AuthSession) -> Result<()> {
        let destination = session
            .target_address()
            .or_else(|| self.transport.current_peer())
            .unwrap_or(DOT1X_PAE_MULTICAST);

        let frame = eapol_frame(session.local_address(), destination, &EapolPacket::logoff());
        self.transport.send(&frame)?;
        info!("Sent EAPOL-Logoff to {}", destination);
        Ok(())
    }

    /// Decode and process one captured frame.
    ///
    /// Returns `Ok(None)` for frames without an EAP sub-layer. Decode
    /// errors leave the session untouched; challenge and transport errors
    /// abort it. A finished session answers before the frame is decoded.
    pub fn handle_frame(
        &mut self,
        session: &mut AuthSession,
        frame: &[u8],
    ) -> Result<Option<Verdict>> {
        if session.is_terminal() {
            return finished(session).map(Some);
        }

        match decode_frame(frame)? {
            Some(decoded) => self
                .handle_message(session, decoded.source, &decoded.message)
                .map(Some),
            None => Ok(None),
        }
    }

    /// Process one decoded EAP message from `source`
    pub fn handle_message(
        &mut self,
        session: &mut AuthSession,
        source: MacAddr,
        message: &EapMessage<'_>,
    ) -> Result<Verdict> {
        debug!(
            id = message.identifier,
            code = ?message.code,
            eap_type = ?message.eap_type,
            "Server message"
        );

        match session.state() {
            SessionState::AwaitingPeer => {
                let result = self.acquire_peer(session, source, message.identifier);
                return abort_on_fatal(session, result);
            }
            SessionState::Negotiating { .. } => {}
            _ => return finished(session),
        }

        let result = self.dispatch(session, message);
        abort_on_fatal(session, result)
    }

    fn acquire_peer(
        &mut self,
        session: &mut AuthSession,
        peer: MacAddr,
        identifier: u8,
    ) -> Result<Verdict> {
        info!("Server {} asked for the first identity", peer);
        session.latch_peer(peer);

        self.transport.set_peer(peer);
        self.transport.restrict_capture_to(peer, &peer_filter(peer))?;

        let identity = ResponseKind::Identity(session.username().as_bytes());
        let response = build_response(identifier, identity)?;
        self.transport
            .send(&eap_frame(session.local_address(), peer, &response))?;

        info!("Answered first identity [{}]", identifier);
        Ok(Verdict::ResponseSent)
    }

    fn dispatch(&mut self, session: &mut AuthSession, message: &EapMessage<'_>) -> Result<Verdict> {
        let by_code = self.dispatch_code(session, message)?;
        if by_code.is_terminal() {
            return Ok(by_code);
        }

        let by_type = self.dispatch_type(session, message)?;
        Ok(match by_type {
            Verdict::NoAction => by_code,
            sent => sent,
        })
    }

    fn dispatch_code(
        &mut self,
        session: &mut AuthSession,
        message: &EapMessage<'_>,
    ) -> Result<Verdict> {
        match message.code {
            EapCode::Success => {
                session.authenticate();
                info!("Authenticated");
                Ok(Verdict::Authenticated)
            }
            EapCode::Failure => {
                let reason = failure_reason(message);
                session.reject(reason.clone());
                error!("Authentication rejected: {}", reason);
                Ok(Verdict::Rejected(reason))
            }
            EapCode::Request => {
                debug!("Server request [{}]", message.identifier);
                Ok(Verdict::NoAction)
            }
            EapCode::H3cData => {
                match IntegrityChallenge::parse(message.type_data)? {
                    Some(integrity) => {
                        info!("Server sent integrity challenge");
                        let buffer = self.credentials.integrity_response(integrity.challenge)?;
                        session.set_challenge_buffer(buffer);
                        info!("Integrity response stored");
                    }
                    None => debug!("Ignoring H3C data without integrity marker"),
                }
                Ok(Verdict::NoAction)
            }
            EapCode::Response | EapCode::Other(_) => {
                warn!("Unknown EAP code {:?}", message.code);
                Ok(Verdict::NoAction)
            }
        }
    }

    fn dispatch_type(
        &mut self,
        session: &AuthSession,
        message: &EapMessage<'_>,
    ) -> Result<Verdict> {
        match message.eap_type {
            Some(EapType::Md5Challenge) => {
                info!("Server asked for MD5 challenge [{}]", message.identifier);
                self.answer_md5(session, message)?;
                info!("Answered MD5 challenge [{}]", message.identifier);
                Ok(Verdict::ResponseSent)
            }
            Some(EapType::Identity) => {
                debug!("Server asked for identity [{}]", message.identifier);
                Ok(Verdict::NoAction)
            }
            None => {
                debug!("Message without type");
                Ok(Verdict::NoAction)
            }
            Some(other) => {
                debug!("Unknown EAP type {:?}", other);
                Ok(Verdict::NoAction)
            }
        }
    }

    fn answer_md5(&mut self, session: &AuthSession, message: &EapMessage<'_>) -> Result<()> {
        let peer = session
            .target_address()
            .ok_or_else(|| Error::transport("no authenticator address to answer"))?;

        let request = Md5Request {
            identifier: message.identifier,
            challenge: message.type_data,
            username: session.username(),
            password: session.password(),
            vendor_buffer: session.challenge_buffer(),
        };
        let payload = self.credentials.md5_response(&request)?;

        let response = build_response(message.identifier, ResponseKind::Md5Challenge(&payload))?;
        self.transport
            .send(&eap_frame(session.local_address(), peer, &response))
    }
}

/// Result repeated for every message reaching a terminal session
fn finished(session: &AuthSession) -> Result<Verdict> {
    match session.state() {
        SessionState::Aborted { reason, .. } => Err(Error::SessionAborted(reason.clone())),
        _ => {
            debug!("Session already finished, ignoring message");
            session
                .verdict()
                .ok_or_else(|| Error::SessionAborted("session has no verdict".to_string()))
        }
    }
}

fn failure_reason(message: &EapMessage<'_>) -> FailureReason {
    if message.eap_type != Some(EapType::Md5Failed) {
        return FailureReason::Unspecified;
    }

    match decode_failure_message(message.type_data) {
        Some(text) => FailureReason::Server(text),
        None => {
            warn!("Unreadable failure message from server");
            FailureReason::Unspecified
        }
    }
}

fn abort_on_fatal(session: &mut AuthSession, result: Result<Verdict>) -> Result<Verdict> {
    if let Err(err) = &result {
        if err.is_session_fatal() {
            error!("Aborting session: {}", err);
            session.abort(err.to_string());
        } else {
            warn!("Dropping frame: {}", err);
        }
    }
    result
}
