//! Dispatcher seam between the route catalog and a physical vehicle.
//!
//! The catalog calls [`Dispatcher::send`] and turns the outcome into an
//! [`ExecutionReport`].  An unreachable vehicle is not a failure: the report
//! still succeeds and says the run is simulated, so the UI can animate the
//! route without hardware attached.  A vehicle that answers and refuses the
//! command is a failure.
//!
//! # Example
//!
//! A transport only has to move the JSON body.  Here a serial line is a
//! byte buffer:
//!
//! ```
//! use dr_dispatch::{Command, DispatchError, DispatchResult, Dispatcher, status, stop};
//!
//! struct SerialDispatcher {
//!     line: Vec<u8>,
//!     open: bool,
//! }
//!
//! impl Dispatcher for SerialDispatcher {
//!     fn send(&mut self, command: &Command) -> DispatchResult<()> {
//!         if !self.open {
//!             return Err(DispatchError::Offline("serial port closed".into()));
//!         }
//!         self.line.extend_from_slice(command.to_json()?.as_bytes());
//!         self.line.push(b'\n');
//!         Ok(())
//!     }
//!
//!     fn is_connected(&self) -> bool {
//!         self.open
//!     }
//! }
//!
//! let mut port = SerialDispatcher { line: Vec::new(), open: true };
//! assert!(status(&port).connected);
//! assert!(stop(&mut port).success);
//! assert_eq!(port.line, b"{\"comando\":\"STOP\"}\n");
//! ```

use log::{debug, info, warn};
use serde::Serialize;

use dr_core::RouteId;

use crate::{Command, DispatchError, DispatchResult};

/// Sends commands to a delivery vehicle.
pub trait Dispatcher {
    /// Deliver `command`.  Fire-and-forget from the caller's view: return as
    /// soon as the vehicle has accepted or refused it.
    fn send(&mut self, command: &Command) -> DispatchResult<()>;

    /// Whether a vehicle is currently reachable.
    fn is_connected(&self) -> bool {
        true
    }
}

/// A [`Dispatcher`] with no vehicle behind it.  Every send reports
/// [`DispatchError::Offline`], which callers treat as simulation mode.
pub struct OfflineDispatcher;

impl Dispatcher for OfflineDispatcher {
    fn send(&mut self, command: &Command) -> DispatchResult<()> {
        Err(DispatchError::Offline(format!("no vehicle attached, {command} not sent")))
    }

    fn is_connected(&self) -> bool {
        false
    }
}

/// A [`Dispatcher`] that keeps every accepted command, optionally refusing
/// all of them.
#[derive(Default)]
pub struct RecordingDispatcher {
    pub sent: Vec<Command>,
    reject:   Option<String>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher whose vehicle refuses every command with `reason`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self { sent: Vec::new(), reject: Some(reason.into()) }
    }
}

impl Dispatcher for RecordingDispatcher {
    fn send(&mut self, command: &Command) -> DispatchResult<()> {
        if let Some(reason) = &self.reject {
            return Err(DispatchError::Rejected(reason.clone()));
        }
        self.sent.push(*command);
        Ok(())
    }
}

// ── ExecutionReport ───────────────────────────────────────────────────────────

/// Outcome of asking a vehicle to run a route (or to stop).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExecutionReport {
    pub success:    bool,
    pub message:    String,
    /// Wire text of the command sent; `None` when nothing was sent.
    pub command:    Option<String>,
    pub route_id:   Option<RouteId>,
    pub route_name: Option<String>,
}

impl ExecutionReport {
    pub(crate) fn not_found(id: RouteId) -> Self {
        Self {
            success:    false,
            message:    "route not found".to_owned(),
            command:    None,
            route_id:   Some(id),
            route_name: None,
        }
    }
}

/// Send `command` and classify the outcome as `(success, message)`.
pub(crate) fn deliver(dispatcher: &mut dyn Dispatcher, command: Command, ok_message: &str) -> (bool, String) {
    match dispatcher.send(&command) {
        Ok(()) => {
            info!("dispatched {command}");
            (true, ok_message.to_owned())
        }
        Err(DispatchError::Offline(reason)) => {
            warn!("{reason}; continuing in simulation mode");
            (true, format!("{ok_message} (vehicle offline, simulation mode)"))
        }
        Err(e) => {
            warn!("dispatch of {command} failed: {e}");
            (false, e.to_string())
        }
    }
}

/// Tell the vehicle to halt.
pub fn stop(dispatcher: &mut dyn Dispatcher) -> ExecutionReport {
    let command = Command::Stop;
    let (success, message) = deliver(dispatcher, command, "vehicle stopped");
    ExecutionReport {
        success,
        message,
        command: Some(command.wire()),
        route_id: None,
        route_name: None,
    }
}

// ── VehicleStatus ─────────────────────────────────────────────────────────────

/// Whether a vehicle is reachable, with a message for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VehicleStatus {
    pub connected: bool,
    pub message:   String,
}

/// Ask `dispatcher` whether its vehicle is reachable.
pub fn status(dispatcher: &dyn Dispatcher) -> VehicleStatus {
    let connected = dispatcher.is_connected();
    debug!("vehicle connected: {connected}");
    let message = if connected {
        "vehicle connected and ready"
    } else {
        "vehicle not connected (simulation mode)"
    };
    VehicleStatus { connected, message: message.to_owned() }
}
