use anyhow::Result;
use boot_api::{Envelope, Kind};
use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

use crate::dispatch::Dispatcher;
use crate::engine::Engine;
use crate::ipc::{read_envelope, write_envelope};

/// Topic announced once when the channel comes up.
pub const READY_TOPIC: &str = "shim.ready";

/// Serve the request channel until the peer closes it.
///
/// A `shim.ready` event goes out first, carrying the resolved root when
/// one exists. After that every request envelope is answered in order;
/// envelopes that are not requests are ignored.
pub async fn serve<R, W, E>(
    mut reader: R,
    mut writer: W,
    dispatcher: &mut Dispatcher<E>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: Engine,
{
    let payload = dispatcher
        .root()
        .map(|root| json!({ "root": root.display().to_string() }));
    write_envelope(&mut writer, &Envelope::event(READY_TOPIC, payload)).await?;

    while let Some(env) = read_envelope(&mut reader).await? {
        match env.kind {
            Kind::Request => {
                let resp = dispatcher.dispatch(&env);
                write_envelope(&mut writer, &resp).await?;
            }
            _ => debug!("ignoring non-request envelope"),
        }
    }
    info!("host closed the channel");
    Ok(())
}
