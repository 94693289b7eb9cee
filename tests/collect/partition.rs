use outcome::Either ;
use outcome::collect::partition ;

#[test]
fn partition_splits_eithers_by_side() {

	let ( lefts, rights ) = partition( vec![
		Either::<i64, String>::left( 4 ),
		Either::right( "four".to_string() ),
		Either::left( 7 ),
	]);

	assert_eq!( lefts, vec![ 4, 7 ]);
	assert_eq!( rights, vec![ "four".to_string() ]);
}

#[test]
fn partition_of_an_empty_stream_is_empty() {
	let ( lefts, rights ) = partition( Vec::<Either<i64, String>>::new() );
	assert!( lefts.is_empty() );
	assert!( rights.is_empty() );
}
