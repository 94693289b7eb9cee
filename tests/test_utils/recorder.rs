/// Captures the values handed to chain-operation closures so tests can
/// assert how often a closure ran and what it saw.
pub struct Recorder<T> {
	seen: std::cell::RefCell<Vec<T>>,
}

impl<T: Clone> Recorder<T> {

	pub fn new() -> Self {
		Self { seen: std::cell::RefCell::new( Vec::new() )}
	}

	pub fn capture( &self, value: &T ) {
		self.seen.borrow_mut().push( value.clone() );
	}

	pub fn captured( &self ) -> Vec<T> {
		self.seen.borrow().clone()
	}

	pub fn count( &self ) -> usize {
		self.seen.borrow().len()
	}

}
