use prometheus::{IntCounter, Registry};

/// Workspace metrics, constructed once in main and injected into whatever
/// needs to count. Nothing here is a global.
pub struct Metrics {
    pub registry: Registry,
    pub bookings_created: IntCounter,
    pub events_produced: IntCounter,
    pub events_consumed: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let bookings_created = IntCounter::new(
            "staybook_bookings_created_total",
            "Bookings successfully created",
        )?;
        let events_produced = IntCounter::new(
            "staybook_events_produced_total",
            "Booking events published to the event log",
        )?;
        let events_consumed = IntCounter::new(
            "staybook_events_consumed_total",
            "Booking events consumed from the event log",
        )?;

        registry.register(Box::new(bookings_created.clone()))?;
        registry.register(Box::new(events_produced.clone()))?;
        registry.register(Box::new(events_consumed.clone()))?;

        Ok(Self {
            registry,
            bookings_created,
            events_produced,
            events_consumed,
        })
    }
}
