use std::sync::{Arc, Mutex};

use aruxi_core::core::arch::process::ProcessState;
use aruxi_core::sim::signals::SignalError;
use aruxi_core::sim::{FaultReport, IoRequest, SignalAdapter};
use aruxi_core::soc::AddressSpace;
use mockall::mock;

mock! {
    pub Adapter {}
    impl SignalAdapter for Adapter {
        fn deliver_fault(&mut self, report: &FaultReport);
        fn request_io(
            &mut self,
            request: &IoRequest,
            memory: &mut AddressSpace,
        ) -> Result<(), SignalError>;
        fn process_exited(&mut self, process: &ProcessState);
    }
}

/// Everything an adapter was told, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Fault(FaultReport),
    Io(IoRequest),
    Exited(u8),
}

/// An adapter that records every call into a shared log.
///
/// Used where the simulator moves to its own thread and the test needs to look
/// at what was delivered while the core is still alive.
#[derive(Clone, Debug, Default)]
pub struct RecordingAdapter {
    pub events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl SignalAdapter for RecordingAdapter {
    fn deliver_fault(&mut self, report: &FaultReport) {
        self.events.lock().unwrap().push(Event::Fault(report.clone()));
    }

    fn request_io(
        &mut self,
        request: &IoRequest,
        _memory: &mut AddressSpace,
    ) -> Result<(), SignalError> {
        self.events.lock().unwrap().push(Event::Io(*request));
        Ok(())
    }

    fn process_exited(&mut self, process: &ProcessState) {
        self.events.lock().unwrap().push(Event::Exited(process.pid));
    }
}
