//! UUIDv1 generator and related types.

use crate::Uuid;

pub mod with_rand08;

/// The number of 100-nanosecond intervals from 1582-10-15T00:00:00Z (the start of the Gregorian
/// calendar) to 1970-01-01T00:00:00Z (the Unix epoch).
pub const GREGORIAN_OFFSET: u64 = 122_192_928_000_000_000;

const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

const NODE_MASK: u64 = (1 << 48) - 1;

/// The least significant bit of the first node octet, i.e. the IEEE 802 multicast bit.
const MULTICAST_BIT: u64 = 1 << 40;

/// A trait that defines the minimum random number generator interface for [`V1Generator`].
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;

    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// A trait that defines the clock interface for [`V1Generator`].
pub trait TimeSource {
    /// Returns the current time as the count of 100-nanosecond intervals since
    /// 1582-10-15T00:00:00Z.
    ///
    /// A resolution coarser than 100 nanoseconds is acceptable; the generator bumps the clock
    /// sequence whenever the returned value does not advance.
    fn gregorian_ticks(&mut self) -> u64;
}

/// The default [`TimeSource`] that reads [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    /// # Panics
    ///
    /// Panics if the system clock points to a time before the Unix epoch.
    fn gregorian_ticks(&mut self) -> u64 {
        use std::time;
        let since_unix_epoch = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards");
        (since_unix_epoch.as_nanos() / 100) as u64 + GREGORIAN_OFFSET
    }
}

/// Represents a UUIDv1 generator that owns the state RFC 4122 requires to keep time-based UUIDs
/// unique: the last timestamp issued, the 14-bit clock sequence, and the 48-bit node ID.
///
/// The node ID is not an IEEE 802 address but a random 47-bit number with the multicast bit
/// set, as allowed by RFC 4122 Section 4.5. The clock sequence is incremented whenever the clock
/// fails to advance past the last timestamp, which covers both coarse clock resolution and clock
/// rollback.
///
/// Generation takes `&mut self`, so the check-and-increment of the clock sequence and the
/// stamping of the UUID form one critical section under whatever lock guards the generator. The
/// following example shares a single generator across threads with Rust's standard
/// synchronization mechanism.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use rfc4122::V1Generator;
/// use std::{sync, thread};
///
/// let g = sync::Arc::new(sync::Mutex::new(V1Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct V1Generator<R, T> {
    last_timestamp: u64,
    clock_seq: u16,
    node: u64,

    /// The random number generator used by the generator.
    rng: R,

    /// The system clock used by the generator.
    time_source: T,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> V1Generator<R, StdSystemTime> {
    /// Creates a generator instance that reads the system clock, drawing the node ID and the
    /// initial clock sequence from `rng`.
    pub fn new(rng: R) -> Self {
        Self::with_rand_and_time_sources(rng, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> V1Generator<R, T> {
    /// Creates a generator instance with the specified random number generator and clock,
    /// drawing the node ID and the initial clock sequence from `rng`.
    pub fn with_rand_and_time_sources(mut rng: R, time_source: T) -> Self {
        let node = (rng.next_u64() & NODE_MASK) | MULTICAST_BIT;
        let clock_seq = rng.next_u32() as u16 & MAX_CLOCK_SEQ;
        Self::with_state(node, clock_seq, rng, time_source)
    }

    /// Creates a generator instance with an explicit node ID and initial clock sequence.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a 48-bit integer or `clock_seq` is not a 14-bit integer.
    pub fn with_state(node: u64, clock_seq: u16, rng: R, time_source: T) -> Self {
        assert!(node <= NODE_MASK, "`node` must be a 48-bit integer");
        assert!(
            clock_seq <= MAX_CLOCK_SEQ,
            "`clock_seq` must be a 14-bit integer"
        );

        Self {
            last_timestamp: 0,
            clock_seq,
            node,
            rng,
            time_source,
        }
    }

    /// Returns the 48-bit node ID embedded in every UUID this generator produces.
    pub const fn node(&self) -> u64 {
        self.node
    }

    /// Returns the current 14-bit clock sequence.
    pub const fn clock_seq(&self) -> u16 {
        self.clock_seq
    }

    /// Generates a new UUIDv1 object from the current time.
    pub fn generate(&mut self) -> Uuid {
        let timestamp = self.time_source.gregorian_ticks();
        self.generate_core(timestamp)
    }

    /// Generates a new UUIDv1 object from the `timestamp` passed.
    ///
    /// `timestamp` is the count of 100-nanosecond intervals since 1582-10-15T00:00:00Z. The clock
    /// sequence is incremented (modulo 2^14) if `timestamp` is not greater than that of the
    /// immediately preceding call.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit integer.
    pub fn generate_core(&mut self, timestamp: u64) -> Uuid {
        assert!(timestamp < 1 << 60, "`timestamp` must be a 60-bit integer");

        if timestamp <= self.last_timestamp {
            if timestamp < self.last_timestamp {
                log::trace!(
                    "clock moved back from {} to {}; bumping clock sequence",
                    self.last_timestamp,
                    timestamp
                );
            }
            self.clock_seq = (self.clock_seq + 1) & MAX_CLOCK_SEQ;
        }
        self.last_timestamp = timestamp;

        Uuid::from_fields_v1(timestamp, self.clock_seq, self.node)
    }

    /// Generates a new UUIDv4 object utilizing the random number generator inside.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Uuid::stamp(bytes, 4)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv1 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::V1Generator;
///
/// V1Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{i}] {e}"));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for V1Generator<R, T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> core::iter::FusedIterator for V1Generator<R, T> {}
