//! Integration tests for concurrent use of one bridge.

use std::sync::{Arc, Barrier};
use std::thread;

use gammabridge_core::{codes, Bridge, BuiltinSurface};

const THREADS: usize = 100;

#[test]
fn concurrent_name_lookups_do_not_interfere() {
    let bridge = Arc::new(Bridge::new(BuiltinSurface::new()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let bridge = Arc::clone(&bridge);
            let barrier = Arc::clone(&barrier);
            // Codes -1..=-46 plus unknown positive codes past the table.
            let code = if i < codes::TABLE.len() {
                codes::TABLE[i].0
            } else {
                i as i32
            };
            thread::spawn(move || {
                barrier.wait();
                let mut seen = Vec::with_capacity(50);
                for _ in 0..50 {
                    seen.push(bridge.name_of_error(code).unwrap());
                }
                (code, seen)
            })
        })
        .collect();

    for handle in handles {
        let (code, seen) = handle.join().unwrap();
        let expected = codes::TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| name.to_str().unwrap());
        for name in seen {
            assert_eq!(name.as_ref().map(|n| n.to_string()).as_deref(), expected, "code {code}");
        }
    }
}

#[test]
fn concurrent_global_round_trips() {
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let code = codes::TABLE[i % codes::TABLE.len()].0;
            thread::spawn(move || {
                let bridge = Bridge::global();
                let name = bridge.name_of_error(code).unwrap().unwrap();
                (code, bridge.value_of_error(Some(name.as_c_str())))
            })
        })
        .collect();

    for handle in handles {
        let (code, back) = handle.join().unwrap();
        assert_eq!(code, back);
    }
}
