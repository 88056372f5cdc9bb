//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`]): keys, mouse wheel, resize and
//!   paste.
//! - **Timers** ([`Every`], [`After`]): repeating ticks (spinner animation)
//!   and keyed one-shot delays (search debounce).

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
