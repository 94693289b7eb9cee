use outcome::Outcome ;

#[test]
fn failure_get_returns_none() {
	assert_eq!( Outcome::<String>::failure().get(), None );
}

#[test]
fn failure_on_success_is_not_invoked() {
	let returned = Outcome::<String>::failure()
		.on_success(| _ | Err( "should not have been executed" ));
	assert!( returned.is_failure() );
}

#[test]
fn failure_then_is_not_invoked() {
	let returned = Outcome::<String>::failure()
		.then(| _ | Err::<String, _>( "should not have been executed" ));
	assert!( returned.is_failure() );
}

#[test]
fn failure_on_failure_replaces_with_success() {

	let recorder = crate::Recorder::new();

	let returned = Outcome::failure()
		.on_failure(|| Ok::<_, String>( "FAIL-SUCCESS".to_string() ))
		.on_success(| value | { recorder.capture( value ); Ok::<_, String>(()) });

	assert_eq!( recorder.captured(), vec![ "FAIL-SUCCESS".to_string() ]);
	assert!( returned.is_success() );
}

#[test]
fn failure_on_failure_fault_downgrades_to_error() {

	let returned = Outcome::<String>::failure()
		.on_failure(|| Err( "TEST" ));

	assert!( returned.is_error() );
	assert_raised!(
		std::panic::catch_unwind( std::panic::AssertUnwindSafe(|| returned.get() )),
		"TEST",
	);
}

#[test]
fn failure_on_error_is_not_invoked() {
	let returned = Outcome::<String>::failure()
		.on_error(| _ | panic!( "should not have been executed" ));
	assert!( returned.is_failure() );
}

#[test]
fn failure_escalate_is_a_no_op() {
	let returned = Outcome::<String>::failure().escalate().expect( "no cause to surface" );
	assert!( returned.is_failure() );
}
