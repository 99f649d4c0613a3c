pub mod mock;
pub mod mqtt;
pub mod sensors;

pub use mock::MockPublisher;
pub use mqtt::MqttPublisher;
