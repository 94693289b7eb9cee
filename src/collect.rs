//! Collection support for streams of outcomes and eithers.
//!
//! Some parts of an operation may fail while others succeed. Collecting an
//! iterator of outcomes into an [`OutcomeList`] keeps every variant instead
//! of stopping at the first fault, allowing partial completion rather than
//! total failure.

use itertools::{ Either as Split, Itertools };

use crate::{ Cause, Either, Outcome };



/// Outcomes accumulated from an iterator, partitioned by variant.
///
/// Successes keep their values, errors keep their causes, and valueless
/// failures are counted.
#[derive( Debug )]
pub struct OutcomeList<T> {
    successes: Vec<T>,
    failures: usize,
    errors: Vec<Cause>,
}

impl<T> OutcomeList<T> {

    /// Creates an empty list.
    pub fn new() -> Self {
        Self { successes: Vec::new(), failures: 0, errors: Vec::new() }
    }

    /// Values held by the collected `Success` outcomes.
    #[inline] pub fn successes( &self ) -> &[T] { &self.successes }

    /// Number of collected `Failure` outcomes.
    #[inline] pub fn failures( &self ) -> usize { self.failures }

    /// Causes held by the collected `Error` outcomes.
    #[inline] pub fn errors( &self ) -> &[Cause] { &self.errors }

    /// Breaks the list into its parts: success values, failure count, causes.
    pub fn deconstruct( self ) -> ( Vec<T>, usize, Vec<Cause> ) {
        ( self.successes, self.failures, self.errors )
    }

}

impl<T> Default for OutcomeList<T> {
    fn default() -> Self { Self::new() }
}

impl<T> FromIterator<Outcome<T>> for OutcomeList<T> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>( iter: I ) -> Self {
        iter.into_iter().fold( OutcomeList::new(), | mut acc, item | {
            match item {
                Outcome::Success( value ) => acc.successes.push( value ),
                Outcome::Failure => acc.failures += 1,
                Outcome::Error( cause ) => acc.errors.push( cause ),
            }
            acc
        })
    }
}

/// Splits a stream of eithers into its left- and right-shaped values.
///
/// ```
/// use outcome::{ Either, collect::partition };
///
/// let ( numbers, words ) = partition( vec![
/// 	Either::<i64, String>::left( 4 ),
/// 	Either::right( "four".to_string() ),
/// 	Either::left( 7 ),
/// ]);
/// assert_eq!( numbers, vec![ 4, 7 ]);
/// assert_eq!( words, vec![ "four".to_string() ]);
/// ```
pub fn partition<L, R>( eithers: impl IntoIterator<Item = Either<L, R>> ) -> ( Vec<L>, Vec<R> ) {
    eithers.into_iter().partition_map(| either | match either {
        Either::Left( value ) => Split::Left( value ),
        Either::Right( value ) => Split::Right( value ),
    })
}
