use std::sync::Arc;

use rand::Rng;
use tokio::net::UdpSocket;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use super::{ErrorSlot, MediaHandler};
use crate::error::{Result, RtspError};

/// RTP ports are drawn from this range; the RTP port is always even and
/// RTCP takes the next odd port.
const MIN_PORT: u16 = 10_000;
const MAX_PORT: u16 = 65_000;

const RTP_BUF_SIZE: usize = 0x10000;
const RTCP_BUF_SIZE: usize = 0x800;

/// One allocated socket pair, waiting for play
struct UdpPair {
    media_index: usize,
    rtp: UdpSocket,
    rtcp: UdpSocket,
}

/// UDP transport: one RTP/RTCP socket pair per media track
pub struct UdpTransport {
    pairs: Vec<UdpPair>,
    slot: ErrorSlot,
    err_rx: Option<mpsc::Receiver<Option<RtspError>>>,
    shutdown: watch::Sender<bool>,
    closed: bool,
}

impl UdpTransport {
    #[must_use]
    pub(crate) fn new() -> Self {
        let (slot, err_rx) = ErrorSlot::new();
        let (shutdown, _) = watch::channel(false);

        Self {
            pairs: Vec::new(),
            slot,
            err_rx: Some(err_rx),
            shutdown,
            closed: false,
        }
    }

    /// Bind a socket pair for `media_index` and return the `Transport:`
    /// header value.
    ///
    /// Random even ports in [10000, 65000) are tried until both the RTP port
    /// and RTP+1 bind; a pair that fails halfway is released and retried.
    ///
    /// # Errors
    /// Allocation retries until a pair binds, so this does not fail today;
    /// the `Result` is part of the transport contract.
    pub async fn setup(&mut self, media_index: usize) -> Result<String> {
        let (rtp, rtcp, rtp_port) = loop {
            let rtp_port = random_even_port();

            let Ok(rtp) = UdpSocket::bind(("0.0.0.0", rtp_port)).await else {
                continue;
            };

            match UdpSocket::bind(("0.0.0.0", rtp_port + 1)).await {
                Ok(rtcp) => break (rtp, rtcp, rtp_port),
                // drop the RTP socket and pick a new pair
                Err(_) => continue,
            }
        };

        debug!(media_index, rtp_port, "bound udp socket pair");

        self.pairs.push(UdpPair {
            media_index,
            rtp,
            rtcp,
        });

        Ok(format!(
            "RTP/AVP;unicast;client_port={rtp_port}-{}",
            rtp_port + 1
        ))
    }

    /// Start two receive tasks per pair. Sockets move into their tasks; an
    /// I/O error closes only the affected socket and fires the error slot.
    pub fn play(&mut self, handler: Arc<dyn MediaHandler>) {
        let mut loops: Vec<JoinHandle<()>> = Vec::new();

        for pair in self.pairs.drain(..) {
            loops.push(spawn_receive_loop(
                pair.rtp,
                pair.media_index,
                RTP_BUF_SIZE,
                PacketKind::Rtp,
                Arc::clone(&handler),
                self.slot.clone(),
                self.shutdown.subscribe(),
            ));
            loops.push(spawn_receive_loop(
                pair.rtcp,
                pair.media_index,
                RTCP_BUF_SIZE,
                PacketKind::Rtcp,
                Arc::clone(&handler),
                self.slot.clone(),
                self.shutdown.subscribe(),
            ));
        }

        let slot = self.slot.clone();
        tokio::spawn(async move {
            for handle in loops {
                let _ = handle.await;
            }
            slot.fire(None);
        });
    }

    pub fn take_err(&mut self) -> Option<mpsc::Receiver<Option<RtspError>>> {
        self.err_rx.take()
    }

    /// Close every socket pair. Idempotent through the close-once guard.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        // sockets not yet moved into receive tasks are dropped here,
        // running tasks exit on the shutdown signal and drop theirs
        self.pairs.clear();
        let _ = self.shutdown.send(true);
    }
}

fn random_even_port() -> u16 {
    let port = rand::thread_rng().gen_range(MIN_PORT..MAX_PORT);
    port & !1
}

#[derive(Clone, Copy)]
enum PacketKind {
    Rtp,
    Rtcp,
}

fn spawn_receive_loop(
    socket: UdpSocket,
    media_index: usize,
    buf_size: usize,
    kind: PacketKind,
    handler: Arc<dyn MediaHandler>,
    slot: ErrorSlot,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut buf = vec![0u8; buf_size];

        loop {
            let received = tokio::select! {
                _ = shutdown.changed() => return,
                received = socket.recv_from(&mut buf) => received,
            };

            match received {
                Ok((size, _peer)) => {
                    let packet = &buf[..size];
                    match kind {
                        PacketKind::Rtp => handler.on_rtp(media_index, packet),
                        PacketKind::Rtcp => handler.on_rtcp(media_index, packet),
                    }
                }
                Err(err) => {
                    // the socket drops with this task, closing it
                    slot.fire(Some(RtspError::Io(err)));
                    return;
                }
            }
        }
    })
}
