//! Commands understood by the delivery vehicle.
//!
//! # Wire format
//!
//! A command travels as a small JSON object, POSTed to the vehicle's
//! `/executar` endpoint.  The field name and texts are what the vehicle
//! firmware parses and must not change:
//!
//! ```json
//! { "comando": "ROTA_3" }
//! ```
//!
//! | Command           | Wire text  |
//! |-------------------|------------|
//! | `ExecuteRoute(n)` | `ROTA_<n>` |
//! | `Stop`            | `STOP`     |

use std::fmt;

use serde::Serialize;

use dr_core::RouteId;

use crate::DispatchResult;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Drive catalog route `n`.
    ExecuteRoute(RouteId),
    /// Halt immediately.
    Stop,
}

#[derive(Serialize)]
struct CommandBody<'a> {
    #[serde(rename = "comando")]
    command: &'a str,
}

impl Command {
    pub fn wire(self) -> String {
        match self {
            Command::ExecuteRoute(id) => format!("ROTA_{}", id.0),
            Command::Stop => "STOP".to_owned(),
        }
    }

    /// JSON request body for this command.
    pub fn to_json(self) -> DispatchResult<String> {
        let wire = self.wire();
        Ok(serde_json::to_string(&CommandBody { command: &wire })?)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire())
    }
}
