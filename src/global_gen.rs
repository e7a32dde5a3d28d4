//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    // the generator state is consistent after every call, so a poisoned lock is still usable
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv1 object.
///
/// This function employs a global generator whose node ID and initial clock sequence are drawn
/// from the operating system's random source, and serializes all callers through one lock so that
/// no two calls in the process observe the same clock state. On Unix, this function resets the
/// generator when the process ID changes (i.e., upon process forks) so that parent and child never
/// share a node ID.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid1();
/// println!("{uuid}"); // e.g., "d1723894-5fe7-11e7-907b-a6006ad3dba0"
/// assert_eq!(uuid.version(), 1);
///
/// let uuid_string: String = rfc4122::uuid1().to_string();
/// ```
pub fn uuid1() -> Uuid {
    lock_global_gen().get_mut().generate()
}

mod inner {
    use rand::rngs::OsRng;

    use crate::generator::{with_rand08::Adapter, StdSystemTime, V1Generator};

    /// The concrete type of the global generator.
    pub type GlobalGen = V1Generator<Adapter<OsRng>, StdSystemTime>;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: GlobalGen,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let generator = V1Generator::with_rand08(OsRng);
            log::debug!(
                "initialized global UUIDv1 generator (node {:012x})",
                generator.node()
            );
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator,
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V1Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut GlobalGen {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                log::debug!("process ID changed; resetting global UUIDv1 generator");
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}

#[cfg(test)]
mod tests {
    use super::uuid1;
    use crate::Variant;

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| uuid1().into()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-1[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Sets constant bits properly
    #[test]
    fn sets_constant_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], 0, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], n, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");
        assert_eq!(bins[87], n, "multicast bit 87");

        // test if node bits stay constant within the process
        for i in 80..128 {
            assert!(bins[i] == 0 || bins[i] == n, "node bit {i}: {}", bins[i]);
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid1();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), 1);
        }
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use crate::generator::GREGORIAN_OFFSET;
        use std::time;
        for _ in 0..10_000 {
            let ts_now = (time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)
                .expect("clock may have gone backwards")
                .as_nanos()
                / 100) as i64
                + GREGORIAN_OFFSET as i64;
            let timestamp = uuid1().timestamp() as i64;
            // within 16 milliseconds
            assert!((ts_now - timestamp).abs() < 160_000);
        }
    }

    /// Generates no duplicates under multithreading
    #[test]
    fn generates_no_duplicates_under_multithreading() -> Result<(), Box<dyn std::error::Error>> {
        use std::{collections::HashSet, sync::mpsc, thread};

        let (tx, rx) = mpsc::channel();
        for _ in 0..4 {
            let tx = tx.clone();
            thread::Builder::new()
                .spawn(move || {
                    for _ in 0..50_000 {
                        tx.send(uuid1()).unwrap();
                    }
                })
                .map_err(|err| format!("failed to spawn thread: {:?}", err))?;
        }
        drop(tx);

        let mut s = HashSet::new();
        while let Ok(e) = rx.recv() {
            s.insert(e);
        }

        assert_eq!(s.len(), 4 * 50_000);
        Ok(())
    }
}
