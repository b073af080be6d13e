use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A reactive reference: a shared cell whose current value can be read, written,
/// and observed.
///
/// Clones share the same cell. Writes always succeed, with or without subscribers.
#[derive(Debug)]
pub struct Signal<T> {
	tx: Arc<watch::Sender<T>>,
}

/// Constructors
impl<T> Signal<T> {
	pub fn new(value: T) -> Self {
		let (tx, _rx) = watch::channel(value);
		Self { tx: Arc::new(tx) }
	}
}

/// Read & Write
impl<T> Signal<T> {
	/// Run `f` against the current value without cloning it.
	/// Do not hold across an `.await`, the value is read-locked during `f`.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.tx.borrow())
	}

	/// Replace the value and notify subscribers. Returns the previous value.
	pub fn set(&self, value: T) -> T {
		self.tx.send_replace(value)
	}

	/// Modify the value in place and notify subscribers.
	pub fn update(&self, f: impl FnOnce(&mut T)) {
		self.tx.send_modify(f);
	}

	/// Whether both handles point to the same cell.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.tx, &other.tx)
	}
}

impl<T: Clone> Signal<T> {
	pub fn get(&self) -> T {
		self.tx.borrow().clone()
	}
}

/// Observe
impl<T> Signal<T> {
	/// A receiver that sees the current value and is notified on every write.
	pub fn subscribe(&self) -> watch::Receiver<T> {
		self.tx.subscribe()
	}
}

impl<T: Clone + Send + Sync + 'static> Signal<T> {
	/// A stream yielding the current value, then the latest value after each write.
	/// Intermediate values may be skipped if the consumer is slower than the writer.
	pub fn stream(&self) -> WatchStream<T> {
		WatchStream::new(self.subscribe())
	}
}

// region:    --- Froms & Boilerplate

impl<T> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self { tx: self.tx.clone() }
	}
}

impl<T: Default> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T> From<T> for Signal<T> {
	fn from(value: T) -> Self {
		Self::new(value)
	}
}

// endregion: --- Froms & Boilerplate

// region:    --- Tests


// endregion: --- Tests
