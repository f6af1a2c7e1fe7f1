// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::event::EventId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no element labelled `{0}` listens for activation")]
    NoSuchTarget(String),

    #[error("event {0} did not reach any listener")]
    Unhandled(EventId),
}
