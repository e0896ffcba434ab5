use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, BufReader};
use tokio::net::tcp::OwnedReadHalf;
use tokio::sync::{mpsc, watch};
use tracing::debug;

use super::{ErrorSlot, MediaHandler, SharedReader};
use crate::error::{Result, RtspError};

/// Interleaved frames carry at most one 16-bit length worth of payload.
const INTERLEAVED_BUF_SIZE: usize = 0x10000;

/// TCP interleaved transport (RFC 2326 §10.12)
///
/// Media packets arrive on the control connection framed as
/// `$ <channel:u8> <length:u16be> <payload>`. Even channels carry RTP, odd
/// channels RTCP; the media index is `channel >> 1`. The client must not
/// issue requests while the receive loop is running, as the loop is the sole
/// reader of the connection.
pub struct TcpTransport {
    reader: SharedReader,
    slot: ErrorSlot,
    err_rx: Option<mpsc::Receiver<Option<RtspError>>>,
    shutdown: watch::Sender<bool>,
}

impl TcpTransport {
    /// Create a transport aliasing the control-connection reader.
    #[must_use]
    pub(crate) fn new(reader: SharedReader) -> Self {
        let (slot, err_rx) = ErrorSlot::new();
        let (shutdown, _) = watch::channel(false);

        Self {
            reader,
            slot,
            err_rx: Some(err_rx),
            shutdown,
        }
    }

    /// `Transport:` header value: channels `2i` (RTP) and `2i+1` (RTCP).
    #[must_use]
    pub fn setup(&self, media_index: usize) -> String {
        let rtp_channel = media_index * 2;
        let rtcp_channel = rtp_channel + 1;

        format!("RTP/AVP/TCP;unicast;interleaved={rtp_channel}-{rtcp_channel}")
    }

    /// Start the interleaved receive loop on the shared reader.
    pub fn play(&mut self, handler: Arc<dyn MediaHandler>) {
        let reader = Arc::clone(&self.reader);
        let slot = self.slot.clone();
        let mut shutdown = self.shutdown.subscribe();

        let loop_handle = tokio::spawn(async move {
            // sole reader of the control connection from here on
            let mut guard = reader.lock_owned().await;
            let mut buf = vec![0u8; INTERLEAVED_BUF_SIZE];

            loop {
                let frame = tokio::select! {
                    _ = shutdown.changed() => {
                        debug!("interleaved receive loop shut down");
                        return;
                    }
                    frame = read_frame(&mut *guard, &mut buf) => frame,
                };

                match frame {
                    Ok((channel, size)) => {
                        let media_index = usize::from(channel >> 1);
                        let packet = &buf[..size];

                        if channel & 1 == 0 {
                            handler.on_rtp(media_index, packet);
                        } else {
                            handler.on_rtcp(media_index, packet);
                        }
                    }
                    Err(err) => {
                        slot.fire(Some(err));
                        return;
                    }
                }
            }
        });

        let slot = self.slot.clone();
        tokio::spawn(async move {
            let _ = loop_handle.await;
            slot.fire(None);
        });
    }

    pub fn take_err(&mut self) -> Option<mpsc::Receiver<Option<RtspError>>> {
        self.err_rx.take()
    }

    /// Signal the receive loop to stop. No socket is touched here; the
    /// control connection itself belongs to the client.
    pub fn close(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

/// Read one interleaved frame into `buf`; returns the channel and payload
/// length. The four-byte header comes first, then exactly `length` bytes.
async fn read_frame<R>(reader: &mut R, buf: &mut [u8]) -> Result<(u8, usize)>
where
    R: AsyncRead + Unpin,
{
    reader.read_exact(&mut buf[..4]).await?;

    if buf[0] != b'$' {
        return Err(RtspError::InvalidFraming);
    }

    let channel = buf[1];
    let size = usize::from(u16::from_be_bytes([buf[2], buf[3]]));

    reader.read_exact(&mut buf[..size]).await?;

    Ok((channel, size))
}

/// Wrap the read half of a fresh control connection for sharing between
/// the client and this transport.
pub(crate) fn shared_reader(read_half: OwnedReadHalf) -> SharedReader {
    Arc::new(tokio::sync::Mutex::new(BufReader::new(read_half)))
}
