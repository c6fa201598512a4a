//! The five-phase command runner.
//!
//! Input layout, one phase after another:
//!
//! ```text
//! Map        n m, n location names, m roads "from to", q, q × "from to"   → y/n
//! Distances  q, q × "from to"                                             → hops
//! Edits      q, q × "c a b code" | "q a b 0|1" | "q a b 2 via"
//! Drivers    q, q × "d name loc" | "b name" | "r from to rating"
//!                 | "top_rating k" | "top_dist k" | "top_rides k" | "<any> name"
//! Fuel       fuel driver count, count × location
//! ```
//!
//! A phase whose input is missing ends the run cleanly.  A road or command
//! that names an unknown location or driver is logged and skipped; queries
//! still print a line (`n` or `-1`) so output stays aligned with the commands.
//! Unknown fuel-query candidates are dropped from the answer.

use std::collections::HashSet;
use std::fmt;
use std::io::Write;

use anyhow::Result;
use log::{debug, info, warn};

use rd_core::SessionConfig;
use rd_dispatch::{Board, DispatchError, Session};
use rd_graph::TopologyEdit;

use crate::input::{InputError, Tokens};
use crate::render::{BoardLine, Hops, InfoLine, NameList, ride_failure, yes_no};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Map,
    Distances,
    Edits,
    Drivers,
    Fuel,
}

impl Phase {
    pub const ALL: [Phase; 5] =
        [Phase::Map, Phase::Distances, Phase::Edits, Phase::Drivers, Phase::Fuel];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Map => "map",
            Phase::Distances => "distances",
            Phase::Edits => "edits",
            Phase::Drivers => "drivers",
            Phase::Fuel => "fuel",
        })
    }
}

pub struct App<W: Write> {
    session: Session,
    out:     W,
}

impl<W: Write> App<W> {
    pub fn new(config: SessionConfig, out: W) -> Result<Self> {
        Ok(Self { session: Session::new(config)?, out })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process every phase present in `text`.
    pub fn run(&mut self, text: &str) -> Result<()> {
        let mut tokens = Tokens::new(text);
        for phase in Phase::ALL {
            if tokens.is_exhausted() {
                info!("input ends before the {phase} phase");
                break;
            }
            debug!("phase {phase}");
            match self.run_phase(phase, &mut tokens) {
                Ok(()) => {}
                Err(e) if e.downcast_ref::<InputError>() == Some(&InputError::Exhausted) => {
                    warn!("input ended inside the {phase} phase");
                    break;
                }
                Err(e) => return Err(e.context(format!("{phase} phase"))),
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn run_phase(&mut self, phase: Phase, tokens: &mut Tokens<'_>) -> Result<()> {
        match phase {
            Phase::Map => self.map(tokens),
            Phase::Distances => self.distances(tokens),
            Phase::Edits => self.edits(tokens),
            Phase::Drivers => self.drivers(tokens),
            Phase::Fuel => self.fuel(tokens),
        }
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn map(&mut self, tokens: &mut Tokens<'_>) -> Result<()> {
        let n = tokens.count()?;
        let m = tokens.count()?;
        let names = tokens.words(n)?;
        let mut roads = (0..m).map(|_| tokens.pair()).collect::<Result<Vec<_>, _>>()?;

        let known: HashSet<&str> = names.iter().copied().collect();
        roads.retain(|&(a, b)| {
            let ok = known.contains(a) && known.contains(b);
            if !ok {
                warn!("skipping road {a} -> {b}: unknown location");
            }
            ok
        });
        self.session.load_map(&names, &roads)?;

        for _ in 0..tokens.count()? {
            let (a, b) = tokens.pair()?;
            let reachable =
                self.session.path_exists(a, b).unwrap_or_else(|e| skip("path", &e, false));
            writeln!(self.out, "{}", yes_no(reachable))?;
        }
        Ok(())
    }

    fn distances(&mut self, tokens: &mut Tokens<'_>) -> Result<()> {
        for _ in 0..tokens.count()? {
            let (a, b) = tokens.pair()?;
            let hops =
                self.session.distance(a, b).unwrap_or_else(|e| skip("distance", &e, None));
            writeln!(self.out, "{}", Hops(hops))?;
        }
        Ok(())
    }

    fn edits(&mut self, tokens: &mut Tokens<'_>) -> Result<()> {
        for _ in 0..tokens.count()? {
            let kind = tokens.word()?;
            let (a, b) = tokens.pair()?;
            let code: i64 = tokens.parse("an edit or query code")?;

            if kind == "c" {
                // Negative codes fall through to reverse like any other unknown code.
                let edit =
                    u32::try_from(code).map_or(TopologyEdit::Reverse, TopologyEdit::from_code);
                if let Err(e) = self.session.edit(a, b, edit) {
                    reject("edit", &e);
                }
                continue;
            }

            match code {
                0 => {
                    let reachable =
                        self.session.path_exists(a, b).unwrap_or_else(|e| skip("path", &e, false));
                    writeln!(self.out, "{}", yes_no(reachable))?;
                }
                1 => {
                    let hops =
                        self.session.distance(a, b).unwrap_or_else(|e| skip("distance", &e, None));
                    writeln!(self.out, "{}", Hops(hops))?;
                }
                _ => {
                    let via = tokens.word()?;
                    let hops = self
                        .session
                        .distance_via(a, b, via)
                        .unwrap_or_else(|e| skip("distance", &e, None));
                    writeln!(self.out, "{}", Hops(hops))?;
                }
            }
        }
        Ok(())
    }

    fn drivers(&mut self, tokens: &mut Tokens<'_>) -> Result<()> {
        for _ in 0..tokens.count()? {
            let command = tokens.word()?;
            match command {
                "d" => {
                    let (driver, location) = tokens.pair()?;
                    if let Err(e) = self.session.go_online(driver, location) {
                        reject(command, &e);
                    }
                }
                "b" => {
                    let driver = tokens.word()?;
                    if let Err(e) = self.session.go_offline(driver) {
                        reject(command, &e);
                    }
                }
                "r" => {
                    let (pickup, dropoff) = tokens.pair()?;
                    let rating: f64 = tokens.parse("a rating")?;
                    if let Err(e) = self.session.request_ride(pickup, dropoff, rating) {
                        match ride_failure(&e) {
                            Some(msg) => writeln!(self.out, "{msg}")?,
                            None => reject(command, &e),
                        }
                    }
                }
                _ => {
                    if let Ok(board) = command.parse::<Board>() {
                        let k: i64 = tokens.parse("a leaderboard size")?;
                        let standings = self.session.top(board, usize::try_from(k).unwrap_or(0));
                        writeln!(self.out, "{}", BoardLine { board, standings: &standings })?;
                        continue;
                    }
                    let driver = tokens.word()?;
                    match self.session.driver_info(driver) {
                        Ok(info) => writeln!(self.out, "{}", InfoLine(&info))?,
                        Err(e) => reject(command, &e),
                    }
                }
            }
        }
        Ok(())
    }

    fn fuel(&mut self, tokens: &mut Tokens<'_>) -> Result<()> {
        let fuel: i64 = tokens.parse("a fuel amount")?;
        let driver = tokens.word()?;
        let n = tokens.count()?;
        let candidates = tokens.words(n)?;

        // Negative fuel reaches nothing.
        if fuel < 0 {
            return Ok(());
        }
        let fuel = u32::try_from(fuel).unwrap_or(u32::MAX);
        let found = match self.session.reachable_within(driver, fuel, &candidates) {
            Ok(found) => found,
            Err(e) => {
                reject("fuel", &e);
                return Ok(());
            }
        };
        let names = found
            .iter()
            .map(|&(node, _)| self.session.location_name(node))
            .collect::<Result<Vec<_>, _>>()?;
        write!(self.out, "{}", NameList(&names))?;
        Ok(())
    }
}

fn reject(command: &str, err: &DispatchError) {
    warn!("skipping {command}: {err}");
}

/// Log a rejected query and return the answer printed in its place.
fn skip<T>(command: &str, err: &DispatchError, fallback: T) -> T {
    reject(command, err);
    fallback
}
