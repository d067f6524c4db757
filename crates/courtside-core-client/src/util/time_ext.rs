// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt;

use chrono::{DateTime, TimeZone};

pub(crate) trait TimeExt {
    /// The archive's long date plus the 24-hour clock down to the minute,
    /// e.g. "Tue Nov 14 2023 @ 23:13".
    fn display_time(&self) -> String;
}

impl<Tz: TimeZone> TimeExt for DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn display_time(&self) -> String {
        self.format("%a %b %d %Y @ %H:%M").to_string()
    }
}
