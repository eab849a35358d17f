//! TuneLab numeric core.
//!
//! Pure discrete-time building blocks for the interactive widgets: PID
//! controller steps, plant dynamics (rotational pointer, thermal oven),
//! windowed-sinc FIR design, low-order IIR forms, history ring buffers, and
//! the challenge dwell state machine.
//!
//! Everything here is deterministic given state and parameters, performs no
//! I/O, and is total over the domains the simulation driver produces. The
//! app crate owns scheduling and rendering; this crate owns the math.
//!
//! # Example
//!
//! ```rust,ignore
//! use tunelab_core::{ClosedLoop, PidController, PointerPlant};
//! use tunelab_types::{ControllerGains, ControllerLimits, PointerParams};
//!
//! let plant = PointerPlant::new(PointerParams::default(), std::f64::consts::FRAC_PI_2);
//! let pid = PidController::new(ControllerGains::p(1.5), ControllerLimits::default());
//! let mut sim = ClosedLoop::new(plant, pid, 3.0 * std::f64::consts::FRAC_PI_4);
//! for _ in 0..600 {
//!     sim.step(1.0 / 60.0);
//! }
//! ```

pub mod challenge;
pub mod controller;
pub mod fir;
pub mod history;
pub mod iir;
pub mod plant;
pub mod sim;

pub use challenge::{FilterGoalCheck, RunHistory, SettleMonitor, SettleStatus};
pub use controller::{CascadeController, Controller, PidController, PidTerms};
pub use fir::{design, frequency_response, response_at, apply};
pub use history::{HistoryBuffer, Sample};
pub use iir::{FirstOrderIir, SecondOrderIir};
pub use plant::{steady_state_angle, OvenPlant, Plant, PointerPlant};
pub use sim::ClosedLoop;
