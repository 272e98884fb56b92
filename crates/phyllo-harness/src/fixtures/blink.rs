//! Ported from `BlinkHandler` in `examples/pubsub/Endpoints.h`: "blink
//! handling relies on internal state, so it's handled by a single endpoint
//! handler object which also has its own event-loop behavior." The
//! reference toggles a physical LED on a hardware timer; this fixture has
//! no LED to drive, so it only tracks the state a real one would be set to,
//! driven by the same injected millisecond clock every other layer uses.

use phyllo_codec::Document;
use phyllo_proto::schema::generic::primitive::BOOLEAN;
use phyllo_pubsub::{Endpoint, Message, NameFilter, SingleEndpoint, pack, unpack};

const BLINK_INTERVAL_MS: u64 = 100;
const UPDATE_COOLDOWN_MS: u64 = 5000;

/// Tracks a blink on/off state and a simulated LED value, toggled every
/// [`BLINK_INTERVAL_MS`] while enabled. Reconfiguring the enabled state via
/// an incoming message is refused while the [`UPDATE_COOLDOWN_MS`] cooldown
/// from the last reconfiguration is still running, mirroring the reference
/// implementation's `updateTimer.running()` guard.
pub struct BlinkHandler {
    endpoint: Endpoint,
    now_ms: u64,
    enabled: bool,
    led_state: bool,
    last_toggle_ms: u64,
    cooldown_until_ms: Option<u64>,
}

impl BlinkHandler {
    /// Creates a handler scoped to the `"blink"` topic, blinking disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoint: Endpoint::new(NameFilter::from("blink")),
            now_ms: 0,
            enabled: false,
            led_state: false,
            last_toggle_ms: 0,
            cooldown_until_ms: None,
        }
    }

    /// The simulated LED's current state.
    #[must_use]
    pub fn led_state(&self) -> bool {
        self.led_state
    }

    /// Whether blinking is currently enabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for BlinkHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleEndpoint for BlinkHandler {
    fn endpoint(&mut self) -> &mut Endpoint {
        &mut self.endpoint
    }

    fn filter(&self) -> &NameFilter {
        self.endpoint.filter()
    }

    fn on_update(&mut self, now_ms: u32) {
        self.now_ms = u64::from(now_ms);
        if !self.enabled {
            return;
        }
        if self.now_ms.saturating_sub(self.last_toggle_ms) < BLINK_INTERVAL_MS {
            return;
        }
        self.led_state = !self.led_state;
        self.last_toggle_ms = self.now_ms;
    }

    fn on_receive(&mut self, message: &Message) {
        if self.cooldown_until_ms.is_some_and(|deadline| self.now_ms < deadline) {
            return;
        }
        let Some(Ok(document)) = unpack(message) else { return };
        let Ok(enabled) = document.read_payload::<bool>() else { return };

        self.enabled = enabled;
        self.last_toggle_ms = self.now_ms;
        self.cooldown_until_ms = Some(self.now_ms + UPDATE_COOLDOWN_MS);

        let mut reply = Document::new();
        if reply.write(&self.enabled, BOOLEAN).is_err() {
            return;
        }
        if let Ok(outgoing) = pack(&reply, self.endpoint.filter().bytes()) {
            self.endpoint.send(outgoing);
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::BlinkHandler;
    use phyllo_codec::Document;
    use phyllo_proto::schema::generic::primitive::BOOLEAN;
    use phyllo_pubsub::{EndpointHandler, pack};

    #[test]
    fn enabling_blink_starts_toggling_the_led_over_time() {
        let mut handler = BlinkHandler::new();
        handler.set_send_delegate(Box::new(|_message| true));

        let mut request = Document::new();
        request.write(&true, BOOLEAN).expect("write succeeds");
        let message = pack(&request, b"blink").expect("pack succeeds");

        handler.update(0);
        handler.receive(&message);
        assert!(handler.enabled());
        assert!(!handler.led_state());

        handler.update(150);
        assert!(handler.led_state());
    }

    #[test]
    fn reconfiguring_during_the_cooldown_is_ignored() {
        let mut handler = BlinkHandler::new();
        handler.set_send_delegate(Box::new(|_message| true));

        let mut enable = Document::new();
        enable.write(&true, BOOLEAN).expect("write succeeds");
        let enable_message = pack(&enable, b"blink").expect("pack succeeds");

        handler.update(0);
        handler.receive(&enable_message);

        let mut disable = Document::new();
        disable.write(&false, BOOLEAN).expect("write succeeds");
        let disable_message = pack(&disable, b"blink").expect("pack succeeds");

        handler.update(10);
        handler.receive(&disable_message);
        assert!(handler.enabled(), "cooldown should have refused the reconfiguration");
    }
}
