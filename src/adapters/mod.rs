// Adapters layer: concrete hosts that can be installed into the modal service.

pub mod console;

pub use console::ConsoleHost;
