//! Media transports: TCP interleaved (RFC 2326 §10.12) sharing the control
//! socket, and UDP with one socket pair per track.
//!
//! Both variants frame incoming packets and hand them to a [`MediaHandler`],
//! and surface the first fatal receive error through a one-shot channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::io::BufReader;
use tokio::net::tcp::OwnedReadHalf;
use tokio::sync::{mpsc, Mutex};

use crate::error::{Result, RtspError};

pub mod tcp;
pub mod udp;


pub use tcp::TcpTransport;
pub use udp::UdpTransport;

/// The buffered control-connection reader, shared between the client and the
/// TCP interleaved transport. During play the transport holds the lock and is
/// the sole reader.
pub(crate) type SharedReader = Arc<Mutex<BufReader<OwnedReadHalf>>>;

/// Consumer of received media packets.
///
/// Both callbacks run on transport tasks. The packet slice borrows a receive
/// buffer that is reused after the call returns; implementations must copy
/// the bytes to retain them. No ordering is guaranteed between media indices
/// or between RTP and RTCP of the same index beyond wire arrival order.
pub trait MediaHandler: Send + Sync {
    /// An RTP packet for the media at `media_index` in the SDP list.
    fn on_rtp(&self, media_index: usize, packet: &[u8]);

    /// An RTCP packet for the media at `media_index` in the SDP list.
    fn on_rtcp(&self, media_index: usize, packet: &[u8]);
}

/// One-shot error delivery: the first value (an error, or `None` for a
/// graceful end of all receive loops) wins, later ones are dropped.
#[derive(Clone)]
pub(crate) struct ErrorSlot {
    tx: mpsc::Sender<Option<RtspError>>,
    fired: Arc<AtomicBool>,
}

impl ErrorSlot {
    pub(crate) fn new() -> (Self, mpsc::Receiver<Option<RtspError>>) {
        let (tx, rx) = mpsc::channel(1);
        let slot = Self {
            tx,
            fired: Arc::new(AtomicBool::new(false)),
        };
        (slot, rx)
    }

    pub(crate) fn fire(&self, err: Option<RtspError>) {
        if !self.fired.swap(true, Ordering::SeqCst) {
            let _ = self.tx.try_send(err);
        }
    }
}

/// Active media transport for one session
pub enum Transport {
    /// Interleaved on the RTSP control connection
    Tcp(TcpTransport),
    /// Dedicated UDP socket pairs
    Udp(UdpTransport),
}

impl Transport {
    /// Produce the `Transport:` header value for the SETUP of `media_index`,
    /// allocating sockets where the variant needs them.
    ///
    /// # Errors
    /// UDP socket allocation may fail with an I/O error.
    pub async fn setup(&mut self, media_index: usize) -> Result<String> {
        match self {
            Transport::Tcp(transport) => Ok(transport.setup(media_index)),
            Transport::Udp(transport) => transport.setup(media_index).await,
        }
    }

    /// Start the receive loops, delivering packets to `handler`.
    pub fn play(&mut self, handler: Arc<dyn MediaHandler>) {
        match self {
            Transport::Tcp(transport) => transport.play(handler),
            Transport::Udp(transport) => transport.play(handler),
        }
    }

    /// Take the one-shot error channel. The first receive yields either the
    /// fatal receive error or `None` when every loop ended gracefully.
    pub fn take_err(&mut self) -> Option<mpsc::Receiver<Option<RtspError>>> {
        match self {
            Transport::Tcp(transport) => transport.take_err(),
            Transport::Udp(transport) => transport.take_err(),
        }
    }

    /// Stop the receive loops and release transport-owned sockets.
    /// Idempotent.
    pub fn close(&mut self) {
        match self {
            Transport::Tcp(transport) => transport.close(),
            Transport::Udp(transport) => transport.close(),
        }
    }
}
