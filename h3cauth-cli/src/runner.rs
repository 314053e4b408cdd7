//! Blocking supplicant loop

use std::sync::atomic::{AtomicBool, Ordering};

use h3cauth_capture::PcapTransport;
use h3cauth_core::{Packet, Result, Transport};
use h3cauth_protocols::supplicant::{
    AuthSession, CredentialProvider, FailureReason, Md5Credentials, Supplicant, Verdict,
};
use tracing::{debug, info, warn};

use crate::args::SupplicantConfig;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The authenticator sent EAP-Success
    Authenticated,
    /// The authenticator sent EAP-Failure
    Rejected(FailureReason),
    /// Stopped before a verdict
    Interrupted,
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Authenticated => 0,
            Outcome::Rejected(_) | Outcome::Interrupted => 1,
        }
    }
}

/// Authenticate on the configured interface until a verdict or `stop`.
///
/// Uses [`Md5Credentials`] without an integrity responder, so a server that
/// sends an H3C integrity challenge aborts the run. Use
/// [`run_with_credentials`] to supply one.
pub fn run(config: &SupplicantConfig, stop: &AtomicBool) -> Result<Outcome> {
    run_with_credentials(config, Md5Credentials::new(), stop)
}

/// Like [`run`], with a caller-supplied credential provider
pub fn run_with_credentials<C: CredentialProvider>(
    config: &SupplicantConfig,
    credentials: C,
    stop: &AtomicBool,
) -> Result<Outcome> {
    let transport = PcapTransport::with_config(&config.interface, config.capture.clone())?;
    let mut session = AuthSession::new(
        transport.local_address(),
        config.username.as_str(),
        config.password.as_str(),
    );
    let mut supplicant = Supplicant::new(transport, credentials);

    let result = drive(&mut supplicant, &mut session, config, stop, |transport| {
        transport.next_packet()
    });

    let stats = supplicant.transport_mut().stats();
    info!("Capture finished: {}", stats);
    result
}

/// Feed frames from `next_frame` to the supplicant until the session ends.
///
/// Frames that fail to decode are dropped. EAPOL-Logoff goes out on every
/// exit path except authentication when `send_logoff` is set.
pub fn drive<T, C, F>(
    supplicant: &mut Supplicant<T, C>,
    session: &mut AuthSession,
    config: &SupplicantConfig,
    stop: &AtomicBool,
    next_frame: F,
) -> Result<Outcome>
where
    T: Transport,
    C: CredentialProvider,
    F: FnMut(&mut T) -> Result<Option<Packet>>,
{
    let result = receive(supplicant, session, config, stop, next_frame);

    if config.send_logoff && result.as_ref().ok() != Some(&Outcome::Authenticated) {
        if let Err(e) = supplicant.logoff(session) {
            warn!("Failed to send EAPOL-Logoff: {}", e);
        }
    }

    result
}

fn receive<T, C, F>(
    supplicant: &mut Supplicant<T, C>,
    session: &mut AuthSession,
    config: &SupplicantConfig,
    stop: &AtomicBool,
    mut next_frame: F,
) -> Result<Outcome>
where
    T: Transport,
    C: CredentialProvider,
    F: FnMut(&mut T) -> Result<Option<Packet>>,
{
    if config.send_start {
        supplicant.start(session)?;
    }

    while !stop.load(Ordering::Relaxed) {
        let packet = match next_frame(supplicant.transport_mut())? {
            Some(packet) => packet,
            None => continue,
        };

        if packet.is_truncated() {
            debug!("Captured frame truncated to {} of {} bytes", packet.data.len(), packet.len);
        }

        match supplicant.handle_frame(session, packet.data()) {
            Ok(Some(Verdict::Authenticated)) => return Ok(Outcome::Authenticated),
            Ok(Some(Verdict::Rejected(reason))) => return Ok(Outcome::Rejected(reason)),
            Ok(_) => {}
            Err(e) if !e.is_session_fatal() => debug!("Dropping frame: {}", e),
            Err(e) => return Err(e),
        }
    }

    info!("Stop requested");
    Ok(Outcome::Interrupted)
}
