use rand::Rng;
use rand::seq::IndexedRandom;
use time::OffsetDateTime;
use time::UtcOffset;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::macros::offset;

/// Fixed catalog of instruments a signal can point at.
pub const ASSETS: [&str; 4] = ["EUR/USD", "BTC/USD", "GBP/USD", "USD/JPY"];

/// Display offset for signal timestamps (Asia/Dhaka, which has no DST).
pub const DISPLAY_OFFSET: UtcOffset = offset!(+6);

/// 12-hour clock with AM/PM, e.g. "03:05 PM".
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour repr:12]:[minute] [period]");

/// Direction of a signal, drawn independently of the asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn emoji(self) -> &'static str {
        match self {
            Direction::Up => "📈",
            Direction::Down => "📉",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => f.write_str("UP"),
            Direction::Down => f.write_str("DOWN"),
        }
    }
}

/// One emission: asset, direction and the moment it was drawn.
///
/// Ephemeral by design: the loop composes one, renders it, hands the text
/// to the sink and drops it. No history is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub asset: &'static str,
    pub direction: Direction,
    pub timestamp: OffsetDateTime,
}

impl Signal {
    /// Draws a uniformly random asset and direction.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, timestamp: OffsetDateTime) -> Self {
        let asset = *ASSETS.choose(rng).expect("asset catalog is non-empty");
        let direction = if rng.random_bool(0.5) { Direction::Up } else { Direction::Down };

        Self { asset, direction, timestamp }
    }

    /// Renders the outbound message.
    ///
    /// Pure formatting: identical signals render to identical text. The
    /// timestamp is shown in the fixed display offset regardless of the
    /// offset it was captured in.
    pub fn to_message(&self) -> String {
        let clock = self.timestamp.to_offset(DISPLAY_OFFSET).format(TIME_FORMAT).expect("static time format");

        format!(
            "🚨 Trade Signal Alert\n\n\
             Pair: {}\n\
             Direction: {} {}\n\
             Time: {}\n\
             Duration: 1 Minute\n\n\
             ⚠️ Place this trade manually on Quotex!",
            self.asset,
            self.direction.emoji(),
            self.direction,
            clock,
        )
    }
}
