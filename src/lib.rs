//! Algebraic outcome types for explicit control flow.
//!
//! Two small, closed value types let calling code represent "how did this
//! operation end" and "which of two shapes is this value" without leaning on
//! nulls or panics for control flow. The crate owns no I/O, no concurrency,
//! and no state - it is a building block meant to be embedded in larger
//! programs.
//!
//! # Core Concepts
//!
//! - [`Outcome`]: A tri-state outcome wrapper. `Success` holds the produced
//! 	value, `Failure` records a conscious "no answer" and holds nothing, and
//! 	`Error` holds a captured [`Cause`]. Chain operations (`on_success`,
//! 	`on_failure`, `on_error`, `then`) conditionally act on the held value or
//! 	cause and hand back an outcome for further composition.
//!
//! - [`Either`]: A two-sided value wrapper for operations with two legitimate
//! 	output shapes. Neither side means failure; [`Either::either`] forces the
//! 	caller to handle both.
//!
//! - [`Cause`]: The boxed error object an `Error` outcome carries. Anything
//! 	implementing `std::error::Error` converts into it, as do message strings.
//!
//! - [`collect`]: Support for streams of outcomes and eithers -
//! 	[`OutcomeList`] accumulates per-variant, [`collect::partition`] splits
//! 	eithers by side.
//!
//! Every instance is immutable once constructed and every chain operation
//! runs its argument closure synchronously on the calling thread, so values
//! may be passed across threads and read concurrently without ceremony.
//!
//! # Example
//!
//! Closures handed to `capture`, `on_success`, `on_failure`, and `then`
//! signal faults by returning `Err`; the chain converts the fault into an
//! `Error` outcome instead of letting it propagate mid-chain.
//!
//! ```
//! use outcome::Outcome ;
//!
//! fn fetch_quantity( raw: &str ) -> Outcome<u32> {
//! 	if raw.is_empty() {
//! 		return Outcome::failure();
//! 	}
//! 	Outcome::capture(|| raw.parse::<u32>())
//! }
//!
//! // A failure can be recovered with a fallback value.
//! let quantity = fetch_quantity( "" )
//! 	.on_failure(|| Ok::<_, std::num::ParseIntError>( 1 ))
//! 	.get();
//! assert_eq!( quantity, Some( 1 ));
//!
//! // An error keeps its cause through the whole chain.
//! let doubled = fetch_quantity( "many" )
//! 	.then(| quantity | Ok::<_, std::io::Error>( quantity * 2 ));
//! assert!( doubled.is_error() );
//! ```
//!
//! Extraction is explicit about the error state. [`Outcome::get`] panics on
//! an `Error` with a [`Raised`] payload wrapping the cause;
//! [`Outcome::escalate`] surfaces the cause through the ordinary `Result`
//! channel instead, so `?` composes with outcome chains:
//!
//! ```
//! use outcome::{ Cause, Outcome };
//!
//! fn deliver( message: &str ) -> Result<Option<&str>, Cause> {
//! 	let delivered = Outcome::success( message )
//! 		.on_success(| text | match text.len() > 140 {
//! 			true => Err( "message too long" ),
//! 			false => Ok(()),
//! 		})
//! 		.escalate()?
//! 		.get();
//! 	Ok( delivered )
//! }
//!
//! assert_eq!( deliver( "short and sweet" ).unwrap(), Some( "short and sweet" ));
//! ```
//!
//! # Non-goals
//!
//! No asynchronous execution, no serialization, no retry policy. Any
//! "operation failed, retry N times" logic belongs in the caller.

mod outcome ;
mod either ;
pub mod collect ;

pub use outcome::{ Outcome, Cause, Raised };
pub use either::Either ;
pub use collect::OutcomeList ;
