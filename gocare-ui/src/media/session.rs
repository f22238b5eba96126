// SPDX-License-Identifier: MIT OR Apache-2.0

//! The connect sequence run by the room view.

use std::rc::Rc;

use gocare_types::ConnectIntent;

use super::{MediaClient, MediaError, Room};

/// Joins the room described by `intent` and publishes the microphone.
///
/// Steps run strictly in order: room handle, disconnect observer, microphone
/// capture, connect, publish. The first failure aborts the sequence. A track
/// captured before a later failure is left to the media client.
pub async fn join_and_publish(
    client: &dyn MediaClient,
    intent: &ConnectIntent,
    on_disconnected: Box<dyn Fn()>,
) -> Result<Rc<dyn Room>, MediaError> {
    let room = client.create_room().await?;
    room.on_disconnected(on_disconnected);

    let microphone = client.create_local_audio_track().await?;
    log::debug!("microphone captured, connecting to {}", intent.url());

    room.connect(intent.url(), intent.token()).await?;
    room.publish_track(&microphone).await?;
    Ok(room)
}
