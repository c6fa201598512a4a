//! Output line formats.
//!
//! Every wrapper implements `Display` and writes one line body without the
//! trailing newline; the caller decides line endings.

use std::fmt;

use rd_dispatch::{Board, DispatchError, DriverInfo, Standing};

pub const NO_DRIVERS: &str = "Soferi indisponibili";
pub const UNREACHABLE: &str = "Destinatie inaccesibila";

pub fn yes_no(reachable: bool) -> &'static str {
    if reachable { "y" } else { "n" }
}

/// The fixed message for a ride rejection, if it has one.
pub fn ride_failure(err: &DispatchError) -> Option<&'static str> {
    match err {
        DispatchError::NoneAvailable => Some(NO_DRIVERS),
        DispatchError::DestinationUnreachable { .. } => Some(UNREACHABLE),
        _ => None,
    }
}

/// A hop count, `-1` for no path.
pub struct Hops(pub Option<u32>);

impl fmt::Display for Hops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(h) => write!(f, "{h}"),
            None => f.write_str("-1"),
        }
    }
}

/// `name:value ` for each standing, value chosen by the board.
pub struct BoardLine<'a> {
    pub board:     Board,
    pub standings: &'a [Standing],
}

impl fmt::Display for BoardLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.standings {
            match self.board {
                Board::Rating => write!(f, "{}:{:.3} ", s.name, s.average_rating)?,
                Board::Distance => write!(f, "{}:{} ", s.name, s.distance)?,
                Board::Rides => write!(f, "{}:{} ", s.name, s.races)?,
            }
        }
        Ok(())
    }
}

/// `name: location rating races distance status`.
pub struct InfoLine<'a>(pub &'a DriverInfo);

impl fmt::Display for InfoLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = self.0;
        write!(
            f,
            "{}: {} {:.3} {} {} {}",
            i.name,
            i.location,
            i.average_rating,
            i.races,
            i.distance,
            i.status.as_str()
        )
    }
}

/// Space-terminated location names.
pub struct NameList<'a>(pub &'a [&'a str]);

impl fmt::Display for NameList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|n| write!(f, "{n} "))
    }
}
