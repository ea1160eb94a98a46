//! Length-prefixed JSON framing.
//!
//! A frame is a 4-byte big-endian payload length followed by that many bytes
//! of JSON. The decoder buffers until a whole frame is available, so a frame
//! split across reads or several frames in one read are both handled.

use core::marker::PhantomData;

use bytes::{Bytes, BytesMut};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::codec::length_delimited::LengthDelimitedCodecError;
use tokio_util::codec::{Decoder, Encoder, LengthDelimitedCodec};

use crate::error::ProtocolError;

use super::{ClientMessage, ServerMessage};

/// Default upper bound on a frame's payload, in bytes.
pub const DEFAULT_MAX_FRAME_LEN: usize = 64 * 1024;

/// Codec reading `D` and writing `E` as length-prefixed JSON.
#[derive(Debug)]
pub struct MessageCodec<D, E> {
    frames: LengthDelimitedCodec,
    _messages: PhantomData<fn(E) -> D>,
}

/// Server side: reads client messages, writes server messages.
pub type ServerCodec = MessageCodec<ClientMessage, ServerMessage>;

/// Client side: reads server messages, writes client messages.
pub type ClientCodec = MessageCodec<ServerMessage, ClientMessage>;

impl<D, E> MessageCodec<D, E> {
    /// Creates a codec rejecting payloads longer than `max_frame_len`.
    #[must_use]
    pub fn new(max_frame_len: usize) -> Self {
        let frames = LengthDelimitedCodec::builder()
            .length_field_length(4)
            .big_endian()
            .max_frame_length(max_frame_len)
            .new_codec();
        Self {
            frames,
            _messages: PhantomData,
        }
    }
}

impl<D, E> Default for MessageCodec<D, E> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRAME_LEN)
    }
}

fn framing_error(err: std::io::Error) -> ProtocolError {
    let too_large = err
        .get_ref()
        .is_some_and(|inner| inner.is::<LengthDelimitedCodecError>());
    if too_large {
        ProtocolError::FrameTooLarge
    } else {
        ProtocolError::Io(err)
    }
}

impl<D: DeserializeOwned, E> Decoder for MessageCodec<D, E> {
    type Item = D;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<D>, ProtocolError> {
        let Some(frame) = self.frames.decode(src).map_err(framing_error)? else {
            return Ok(None);
        };
        serde_json::from_slice(&frame)
            .map(Some)
            .map_err(ProtocolError::Decode)
    }
}

impl<D, E: Serialize> Encoder<E> for MessageCodec<D, E> {
    type Error = ProtocolError;

    fn encode(&mut self, item: E, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        let payload = serde_json::to_vec(&item).map_err(ProtocolError::Encode)?;
        self.frames
            .encode(Bytes::from(payload), dst)
            .map_err(framing_error)
    }
}
