use outcome::Outcome ;

#[test]
fn capture_wraps_a_normal_completion() {
	let returned = Outcome::capture(|| Ok::<_, String>( "SUCCESS VALUE" ));
	assert!( returned.is_success() );
	assert_eq!( returned.get(), Some( "SUCCESS VALUE" ));
}

#[test]
fn capture_wraps_a_fault_as_error() {

	let returned = Outcome::<String>::capture(|| Err( "ERROR" ));

	assert!( returned.is_error() );
	assert_raised!(
		std::panic::catch_unwind( std::panic::AssertUnwindSafe(|| returned.get() )),
		"ERROR",
	);
}

#[test]
fn capture_preserves_the_original_error_type() {
	let returned = Outcome::capture(|| "seventeen".parse::<i32>());
	let cause = returned.escalate().expect_err( "cause should surface" );
	assert!( cause.downcast_ref::<std::num::ParseIntError>().is_some() );
}
