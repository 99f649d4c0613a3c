//! Transient MQTT publisher.
//!
//! One connection per publish: connect, authenticate when credentials are
//! configured, publish the payload retained, wait for the broker ack,
//! disconnect. The broker keeps the retained message as the topic's current
//! value for late subscribers. There is no retry and no reconnect.

use crate::config::MqttConfig;
use crate::domain::ports::MetricPublisher;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rumqttc::v5::mqttbytes::v5::Packet;
use rumqttc::v5::mqttbytes::QoS;
use rumqttc::v5::{AsyncClient, Event, MqttOptions};
use rumqttc::Outgoing;
use std::time::Duration;
use tracing::debug;

const KEEP_ALIVE: Duration = Duration::from_secs(60);

/// MQTT v5 implementation of [`MetricPublisher`].
pub struct MqttPublisher {
    config: MqttConfig,
}

impl MqttPublisher {
    pub fn new(config: &MqttConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait]
impl MetricPublisher for MqttPublisher {
    async fn publish(&self, payload: &[u8]) -> Result<()> {
        let mut options = MqttOptions::new(
            self.config.client_id.as_str(),
            self.config.broker.as_str(),
            self.config.port,
        );
        options.set_keep_alive(KEEP_ALIVE);
        if let Some((username, password)) = self.config.credentials() {
            options.set_credentials(username, password);
        }

        let (client, mut eventloop) = AsyncClient::new(options, 4);
        client
            .publish(
                self.config.topic.as_str(),
                QoS::AtLeastOnce,
                true,
                payload.to_vec(),
            )
            .await
            .context("failed to queue MQTT publish")?;

        // The client only queues requests; driving the event loop performs
        // the actual connect, publish, and disconnect. Stop once the
        // disconnect packet is on the wire.
        loop {
            match eventloop.poll().await {
                Ok(Event::Incoming(Packet::PubAck(_))) => {
                    debug!(
                        "broker acknowledged publish on '{}', disconnecting",
                        self.config.topic
                    );
                    client
                        .disconnect()
                        .await
                        .context("failed to queue MQTT disconnect")?;
                }
                Ok(Event::Outgoing(Outgoing::Disconnect)) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!(
                            "MQTT connection to {}:{} failed",
                            self.config.broker, self.config.port
                        )
                    });
                }
            }
        }

        Ok(())
    }
}
