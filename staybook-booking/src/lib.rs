pub mod orchestrator;

pub use orchestrator::BookingOrchestrator;
