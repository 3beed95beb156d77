//! Service façade over the goo labs API, with call observers

pub mod observer;
pub mod registry;
pub mod service;

pub use observer::{CallContext, CallObserver, JsonlObserver, TracingObserver};
pub use registry::ObserverRegistry;
pub use service::{GoolabsService, MAX_NUM_RANGE};
