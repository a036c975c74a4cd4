//! Rendering statistics.

use alloc::{format, string::String};
use core::fmt::{self, Display, Formatter};
use core::ops::AddAssign;
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

/// Counters accumulated while rendering, along with the time spent.
///
/// A [`Context`][super::Context] holds one of these; every draw call adds
/// to it. The [`Display`] impl prints a table of totals, per-second rates,
/// and per-frame averages. With the alternate flag (`{:#}`), the
/// throughput rows show the percentage of items that made it through
/// instead of the raw counts.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Time spent rendering.
    pub time: Duration,
    /// Number of draw calls.
    pub calls: f64,
    /// Number of frames started.
    pub frames: f64,
    /// Primitives submitted / drawn after culling.
    pub prims: Throughput,
    /// Fragments rasterized / written after depth testing.
    pub frags: Throughput,

    #[cfg(feature = "std")]
    start: Option<Instant>,
}

/// Number of items going into and coming out of a rendering stage.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    /// Items in.
    pub i: usize,
    /// Items out.
    pub o: usize,
}

impl Stats {
    /// Returns zeroed stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns zeroed stats with a running timer.
    ///
    /// [`finish`][Self::finish] stores the time elapsed since this call.
    /// Without the `std` feature there is no timer and this is the same as
    /// [`Stats::new`].
    pub fn start() -> Self {
        Self {
            #[cfg(feature = "std")]
            start: Some(Instant::now()),
            ..Self::default()
        }
    }

    /// Stops the timer, if any, and stores the elapsed time in `time`.
    pub fn finish(self) -> Self {
        #[cfg(feature = "std")]
        if let Some(start) = self.start {
            return Self {
                time: start.elapsed(),
                start: None,
                ..self
            };
        }
        self
    }

    /// Returns the counters divided by the elapsed time in seconds.
    ///
    /// If no time has elapsed, returns the counters unchanged.
    pub fn per_sec(&self) -> Self {
        let secs = match self.time.as_secs_f64() {
            s if s > 0.0 => s,
            _ => 1.0,
        };
        self.divided_by(secs, Duration::from_secs(1))
    }

    /// Returns the counters divided by the number of frames.
    ///
    /// If there are no frames, returns the counters unchanged.
    pub fn per_frame(&self) -> Self {
        let frames = self.frames.max(1.0);
        self.divided_by(frames, self.time.div_f64(frames))
    }

    fn divided_by(&self, d: f64, time: Duration) -> Self {
        let div = |t: Throughput| Throughput {
            i: (t.i as f64 / d) as usize,
            o: (t.o as f64 / d) as usize,
        };
        Self {
            time,
            calls: self.calls / d,
            frames: self.frames / d,
            prims: div(self.prims),
            frags: div(self.frags),
            ..Self::default()
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let w = f.width().unwrap_or(14);
        let alt = f.alternate();
        let (per_s, per_f) = (self.per_sec(), self.per_frame());

        let tput = |t: Throughput| {
            if alt { format!("{t:#}") } else { format!("{t}") }
        };
        let rows = [
            ("", ["total", "per sec", "per frame"].map(String::from)),
            (
                "time",
                [human_time(self.time), String::new(), human_time(per_f.time)],
            ),
            (
                "calls",
                [
                    format!("{}", self.calls),
                    format!("{:.1}", per_s.calls),
                    format!("{:.1}", per_f.calls),
                ],
            ),
            (
                "frames",
                [
                    format!("{}", self.frames),
                    format!("{:.1}", per_s.frames),
                    String::new(),
                ],
            ),
            ("prims", [self.prims, per_s.prims, per_f.prims].map(&tput)),
            ("frags", [self.frags, per_s.frags, per_f.frags].map(&tput)),
        ];
        for (label, [total, sec, frame]) in rows {
            let line = format!("{label:6} {total:>w$} {sec:>w$} {frame:>w$}");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl Display for Throughput {
    /// Formats `self` as `in / out`, or with the alternate flag, as the
    /// percentage of items out. A given width right-aligns the result.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cell = match (f.alternate(), self.i) {
            (true, 0) => String::from("-"),
            (true, i) => format!("{:.1}%", 100.0 * self.o as f64 / i as f64),
            (false, _) => {
                format!("{} / {}", human_num(self.i), human_num(self.o))
            }
        };
        match f.width() {
            Some(w) => write!(f, "{cell:>w$}"),
            None => f.write_str(&cell),
        }
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Self) {
        self.time += other.time;
        self.calls += other.calls;
        self.frames += other.frames;
        self.prims += other.prims;
        self.frags += other.frags;
    }
}

impl AddAssign for Throughput {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.o += rhs.o;
    }
}

/// Formats a count with a metric suffix and at most three significant
/// digits.
fn human_num(n: usize) -> String {
    const UNITS: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "k")];
    let x = n as f64;
    for (scale, unit) in UNITS {
        if x >= scale {
            let v = x / scale;
            return if v < 100.0 {
                format!("{v:.1}{unit}")
            } else {
                format!("{v:.0}{unit}")
            };
        }
    }
    format!("{n}")
}

fn human_time(d: Duration) -> String {
    match d.as_secs_f64() {
        s if s < 1e-3 => format!("{:.1}µs", s * 1e6),
        s if s < 1.0 => format!("{:.1}ms", s * 1e3),
        s if s < 60.0 => format!("{s:.2}s"),
        s => {
            let mins = (s / 60.0) as u64;
            format!("{mins}m{:02}s", (s as u64) - 60 * mins)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn stats() -> Stats {
        Stats {
            time: Duration::from_secs(4),
            calls: 3000.0,
            frames: 1000.0,
            prims: Throughput { i: 12_000, o: 6_000 },
            frags: Throughput { i: 2_400_000, o: 1_800_000 },
            ..Stats::default()
        }
    }

    #[test]
    fn stats_table() {
        let s = format!("{}", stats());
        assert_eq!(
            s.lines().collect::<Vec<_>>(),
            [
                "                total        per sec      per frame",
                "time            4.00s                         4.0ms",
                "calls            3000          750.0            3.0",
                "frames           1000          250.0",
                "prims    12.0k / 6.0k    3.0k / 1.5k         12 / 6",
                "frags     2.4M / 1.8M    600k / 450k    2.4k / 1.8k",
            ]
        );
    }

    #[test]
    fn stats_table_percentages() {
        let s = format!("{:#}", stats());
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], "prims           50.0%          50.0%          50.0%");
        assert_eq!(lines[5], "frags           75.0%          75.0%          75.0%");
    }

    #[test]
    fn throughput_display() {
        let t = Throughput { i: 1234, o: 56 };
        assert_eq!(format!("{t}"), "1.2k / 56");
        assert_eq!(format!("{t:12}"), "   1.2k / 56");
        assert_eq!(format!("{:#}", Throughput::default()), "-");
        assert_eq!(format!("{:#}", Throughput { i: 8, o: 2 }), "25.0%");
    }

    #[test]
    fn rates_without_time_or_frames() {
        let s = Stats {
            calls: 3.0,
            prims: Throughput { i: 10, o: 5 },
            ..Stats::default()
        };
        assert_eq!(s.per_frame().calls, 3.0);
        assert_eq!(s.per_frame().prims, Throughput { i: 10, o: 5 });
        assert_eq!(s.per_sec().prims, Throughput { i: 10, o: 5 });
    }

    #[test]
    fn rates() {
        let s = stats();
        assert_eq!(s.per_sec().frames, 250.0);
        assert_eq!(s.per_sec().frags, Throughput { i: 600_000, o: 450_000 });
        assert_eq!(s.per_frame().time, Duration::from_millis(4));
        assert_eq!(s.per_frame().prims, Throughput { i: 12, o: 6 });
    }

    #[test]
    fn add_assign_accumulates() {
        let mut s = stats();
        s += stats();
        assert_eq!(s.frames, 2000.0);
        assert_eq!(s.time, Duration::from_secs(8));
        assert_eq!(s.frags, Throughput { i: 4_800_000, o: 3_600_000 });
    }

    #[cfg(feature = "std")]
    #[test]
    fn timer() {
        let s = Stats::start().finish();
        assert!(s.time < Duration::from_secs(60));
        assert_eq!(Stats::new().finish().time, Duration::ZERO);
    }

    #[test]
    fn human_nums() {
        assert_eq!(human_num(0), "0");
        assert_eq!(human_num(999), "999");
        assert_eq!(human_num(1_234), "1.2k");
        assert_eq!(human_num(123_456), "123k");
        assert_eq!(human_num(1_234_567), "1.2M");
        assert_eq!(human_num(123_456_789), "123M");
        assert_eq!(human_num(1_234_567_890), "1.2G");
    }

    #[test]
    fn human_times() {
        assert_eq!(human_time(Duration::from_micros(250)), "250.0µs");
        assert_eq!(human_time(Duration::from_millis(125)), "125.0ms");
        assert_eq!(human_time(Duration::from_millis(1250)), "1.25s");
        assert_eq!(human_time(Duration::from_secs(1234)), "20m34s");
    }
}
